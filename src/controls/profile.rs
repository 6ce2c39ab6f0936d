//! Character Profile & Tuning
//!
//! A [`CharacterProfile`] bundles everything that distinguishes one playable
//! character from another: which clips it plays, how fast it moves, how
//! quickly it turns, and how long its cross-fades take. The controller logic
//! itself is identical for every character; only the profile changes.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use ronin::CharacterProfile;
//!
//! // Stock profile: Idle/Walk/Run, no optional actions.
//! let profile = CharacterProfile::default();
//!
//! // A character with an attack and a two-phase performance.
//! let samurai = CharacterProfile {
//!     attack_clip: Some("Slash".into()),
//!     perform_intro_clip: Some("KataIntro".into()),
//!     perform_loop_clip: Some("KataLoop".into()),
//!     ..Default::default()
//! };
//!
//! // Or load a tuned profile from disk.
//! let profile = CharacterProfile::from_json_file("samurai.json")?;
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::controls::controller::{CharacterState, PerformPhase};
use crate::errors::{Result, RoninError};

/// Tuning constants for one character archetype.
///
/// Unknown JSON fields are rejected and missing ones fall back to
/// [`Default`], so partial profiles stay valid as fields are added.
///
/// | Field                  | Description                            | Default |
/// |------------------------|----------------------------------------|---------|
/// | `idle_clip`            | Clip played when stationary            | `Idle`  |
/// | `walk_clip`            | Clip played when moving, run off       | `Walk`  |
/// | `run_clip`             | Clip played when moving, run on        | `Run`   |
/// | `attack_clip`          | Optional transient action clip         | `None`  |
/// | `perform_intro_clip`   | Optional performance entry clip        | `None`  |
/// | `perform_loop_clip`    | Optional performance hold clip         | `None`  |
/// | `fade_duration`        | Cross-fade length, seconds             | `0.2`   |
/// | `walk_velocity`        | Ground speed walking, units/second     | `2.0`   |
/// | `run_velocity`         | Ground speed running, units/second     | `5.0`   |
/// | `turn_speed`           | Yaw slew rate, radians/second          | `12.0`  |
/// | `camera_target_height` | Orbit center height above the feet     | `1.0`   |
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CharacterProfile {
    // === Clip names, as registered in the mixer ===
    pub idle_clip: String,
    pub walk_clip: String,
    pub run_clip: String,

    /// Transient action. A profile without one simply ignores attack
    /// triggers.
    pub attack_clip: Option<String>,
    /// Performance entry, played once. Must be configured together with
    /// `perform_loop_clip`.
    pub perform_intro_clip: Option<String>,
    /// Performance hold, looped until movement or an attack interrupts.
    pub perform_loop_clip: Option<String>,

    // === Motion tuning ===
    /// Seconds every cross-fade takes, shared by the outgoing and incoming
    /// clip so their weights stay complementary.
    pub fade_duration: f32,
    pub walk_velocity: f32,
    pub run_velocity: f32,
    /// How fast the character's facing slews toward its travel direction,
    /// radians per second.
    pub turn_speed: f32,
    /// Height above the character's origin that the orbit camera tracks.
    pub camera_target_height: f32,
}

impl Default for CharacterProfile {
    fn default() -> Self {
        Self {
            idle_clip: "Idle".to_string(),
            walk_clip: "Walk".to_string(),
            run_clip: "Run".to_string(),
            attack_clip: None,
            perform_intro_clip: None,
            perform_loop_clip: None,
            fade_duration: 0.2,
            walk_velocity: 2.0,
            run_velocity: 5.0,
            turn_speed: 12.0,
            camera_target_height: 1.0,
        }
    }
}

impl CharacterProfile {
    /// Parses and validates a profile from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let profile: Self = serde_json::from_str(json)?;
        profile.validate()?;
        Ok(profile)
    }

    /// Reads and validates a profile from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json_str(&std::fs::read_to_string(path)?)
    }

    /// Checks the profile for values the controller cannot work with.
    pub fn validate(&self) -> Result<()> {
        if !(self.fade_duration.is_finite() && self.fade_duration > 0.0) {
            return Err(RoninError::InvalidProfile(format!(
                "fade_duration must be positive and finite, got {}",
                self.fade_duration
            )));
        }
        if !(self.walk_velocity.is_finite() && self.walk_velocity >= 0.0) {
            return Err(RoninError::InvalidProfile(format!(
                "walk_velocity must be non-negative and finite, got {}",
                self.walk_velocity
            )));
        }
        if !(self.run_velocity.is_finite() && self.run_velocity > self.walk_velocity) {
            return Err(RoninError::InvalidProfile(format!(
                "run_velocity must exceed walk_velocity ({} <= {})",
                self.run_velocity, self.walk_velocity
            )));
        }
        if !(self.turn_speed.is_finite() && self.turn_speed > 0.0) {
            return Err(RoninError::InvalidProfile(format!(
                "turn_speed must be positive and finite, got {}",
                self.turn_speed
            )));
        }
        if !self.camera_target_height.is_finite() {
            return Err(RoninError::InvalidProfile(format!(
                "camera_target_height must be finite, got {}",
                self.camera_target_height
            )));
        }
        for name in self.clip_names() {
            if name.is_empty() {
                return Err(RoninError::InvalidProfile(
                    "clip names must be non-empty".to_string(),
                ));
            }
        }
        if self.perform_intro_clip.is_some() != self.perform_loop_clip.is_some() {
            return Err(RoninError::InvalidProfile(
                "perform_intro_clip and perform_loop_clip must be configured together"
                    .to_string(),
            ));
        }
        Ok(())
    }

    /// Every clip name this profile references, configured optionals
    /// included.
    pub fn clip_names(&self) -> impl Iterator<Item = &str> {
        [
            Some(self.idle_clip.as_str()),
            Some(self.walk_clip.as_str()),
            Some(self.run_clip.as_str()),
            self.attack_clip.as_deref(),
            self.perform_intro_clip.as_deref(),
            self.perform_loop_clip.as_deref(),
        ]
        .into_iter()
        .flatten()
    }

    /// Clip the given state should be driving, if the profile configures
    /// one.
    #[must_use]
    pub fn clip_for(&self, state: CharacterState, running: bool) -> Option<&str> {
        match state {
            CharacterState::Idle => Some(self.idle_clip.as_str()),
            CharacterState::Moving => Some(if running {
                self.run_clip.as_str()
            } else {
                self.walk_clip.as_str()
            }),
            CharacterState::Attacking { .. } => self.attack_clip.as_deref(),
            CharacterState::Performing {
                phase: PerformPhase::Intro { .. },
            } => self.perform_intro_clip.as_deref(),
            CharacterState::Performing {
                phase: PerformPhase::Looping,
            } => self.perform_loop_clip.as_deref(),
        }
    }

    /// Ground speed for the current run toggle.
    #[inline]
    #[must_use]
    pub fn velocity_for(&self, running: bool) -> f32 {
        if running {
            self.run_velocity
        } else {
            self.walk_velocity
        }
    }
}
