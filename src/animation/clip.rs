/// A named, timed animation sequence.
///
/// The clip carries identity and timing only; keyframe data and pose
/// sampling belong to whatever renders the character. Clips are immutable
/// and shared between actions via `Arc`.
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationClip {
    pub name: String,
    pub duration: f32,
}

impl AnimationClip {
    /// Creates a clip. A negative duration is clamped to zero.
    #[must_use]
    pub fn new(name: impl Into<String>, duration: f32) -> Self {
        Self {
            name: name.into(),
            duration: duration.max(0.0),
        }
    }
}
