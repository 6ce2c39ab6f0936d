//! Keyboard-driven character locomotion with animation cross-fading.
//!
//! The crate is engine-agnostic: it owns the decision logic (which clip to
//! play, how to blend, where to move and face) and exposes the seams a
//! renderer or windowing layer would plug into.

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod errors;
pub mod transform;
pub mod input;
pub mod animation;
pub mod camera;
pub mod controls;
pub mod utils;

pub use errors::{Result, RoninError};
pub use transform::Transform;
pub use input::{Direction, InputState};
pub use animation::{AnimationAction, AnimationClip, AnimationMixer, LoopMode, PlayState};
pub use camera::OrbitCamera;
pub use controls::{
    Character, CharacterController, CharacterProfile, CharacterState, PerformPhase,
    direction_offset,
};
pub use utils::Timer;
