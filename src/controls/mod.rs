//! Character control: profiles, the locomotion state machine, and the
//! per-frame controller tying input, animation and pose together.

pub mod controller;
pub mod profile;

pub use controller::{
    Character, CharacterController, CharacterState, PerformPhase, direction_offset,
};
pub use profile::CharacterProfile;
