pub mod action;
pub mod clip;
pub mod mixer;

pub use action::{AnimationAction, LoopMode, PlayState};
pub use clip::AnimationClip;
pub use mixer::AnimationMixer;
