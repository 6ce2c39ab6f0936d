//! Locomotion & Animation Controller
//!
//! One [`CharacterController`] owns a character pose and an
//! [`AnimationMixer`] and is consulted once per frame. Given the frame
//! delta, the pressed-direction set and the orbit camera, it decides which
//! clip should drive the character, cross-fades to it when the answer
//! changes, steers the facing toward the travel direction, and integrates
//! ground displacement.
//!
//! All timing lives in explicit countdowns advanced by the caller's `dt`,
//! so a given sequence of inputs and deltas always produces the same
//! states, poses and blends.

use glam::{Quat, Vec3};

use crate::animation::{AnimationMixer, LoopMode};
use crate::camera::OrbitCamera;
use crate::controls::profile::CharacterProfile;
use crate::errors::{Result, RoninError};
use crate::input::{Direction, InputState};
use crate::transform::Transform;

// ---------------------------------------------------------------------------
// Directional offset
// ---------------------------------------------------------------------------

/// Maps the pressed-direction set to a yaw offset, in radians, applied to
/// the camera's ground heading.
///
/// Eight headings come out of four keys: the pure directions and their
/// diagonals. Opposite keys are not cancelled; the first direction checked
/// wins, forward over backward over left over right.
///
/// | Keys             | Offset  |
/// |------------------|---------|
/// | forward          | `0`     |
/// | forward + left   | `π/4`   |
/// | forward + right  | `−π/4`  |
/// | backward         | `π`     |
/// | backward + left  | `3π/4`  |
/// | backward + right | `−3π/4` |
/// | left             | `π/2`   |
/// | right            | `−π/2`  |
/// | none             | `0`     |
#[must_use]
pub fn direction_offset(input: &InputState) -> f32 {
    use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

    let left = input.is_pressed(Direction::Left);
    let right = input.is_pressed(Direction::Right);

    if input.is_pressed(Direction::Forward) {
        if left {
            FRAC_PI_4
        } else if right {
            -FRAC_PI_4
        } else {
            0.0
        }
    } else if input.is_pressed(Direction::Backward) {
        if left {
            PI - FRAC_PI_4
        } else if right {
            FRAC_PI_4 - PI
        } else {
            PI
        }
    } else if left {
        FRAC_PI_2
    } else if right {
        -FRAC_PI_2
    } else {
        0.0
    }
}

// ---------------------------------------------------------------------------
// Character & states
// ---------------------------------------------------------------------------

/// The controlled body: a name and the pose the controller steers. Stands
/// in for whatever scene node the renderer binds the skeleton to.
#[derive(Debug, Clone, Default)]
pub struct Character {
    pub name: String,
    pub transform: Transform,
}

impl Character {
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            transform: Transform::new(),
        }
    }

    /// Character standing at `position`, facing +Z.
    #[must_use]
    pub fn at(name: impl Into<String>, position: Vec3) -> Self {
        Self {
            name: name.into(),
            transform: Transform::from_position(position),
        }
    }
}

/// Phase of a two-part performance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PerformPhase {
    /// Entry clip playing once; `remaining` counts down to the hold.
    Intro { remaining: f32 },
    /// Hold clip looping until movement or an attack interrupts.
    Looping,
}

/// What the character is doing this frame.
///
/// Timed states carry their remaining duration and are counted down by
/// the frame delta.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CharacterState {
    Idle,
    Moving,
    /// Transient action in progress. Locomotion clip selection and
    /// displacement are suppressed until it runs out.
    Attacking { remaining: f32 },
    Performing { phase: PerformPhase },
}

// ---------------------------------------------------------------------------
// CharacterController
// ---------------------------------------------------------------------------

/// Per-frame decision logic tying input, animation and pose together.
///
/// The controller owns its character and mixer; the camera is borrowed
/// for each update because the orbit rig usually belongs to the scene.
/// Construction validates the profile and checks every referenced clip
/// against the mixer, so per-frame updates cannot fail.
pub struct CharacterController {
    character: Character,
    mixer: AnimationMixer,
    profile: CharacterProfile,
    state: CharacterState,
    run_toggled: bool,
}

impl CharacterController {
    /// Builds a controller and starts the idle clip at full weight.
    ///
    /// The run toggle starts on, matching the usual demo binding where
    /// shift switches down to walking.
    ///
    /// # Errors
    ///
    /// [`RoninError::InvalidProfile`] for unusable tuning values, and
    /// [`RoninError::MissingClip`] when the profile references a clip the
    /// mixer does not hold.
    pub fn new(
        character: Character,
        mut mixer: AnimationMixer,
        profile: CharacterProfile,
    ) -> Result<Self> {
        profile.validate()?;
        for name in profile.clip_names() {
            if !mixer.contains(name) {
                return Err(RoninError::MissingClip(name.to_string()));
            }
        }

        // Locomotion and the performance hold loop; one-shot actions clamp
        // and hold their last pose so the fade back out has something to
        // blend from.
        for name in [&profile.idle_clip, &profile.walk_clip, &profile.run_clip] {
            if let Some(action) = mixer.action_mut(name) {
                action.loop_mode = LoopMode::Loop;
            }
        }
        if let Some(name) = &profile.perform_loop_clip
            && let Some(action) = mixer.action_mut(name)
        {
            action.loop_mode = LoopMode::Loop;
        }
        for name in [&profile.attack_clip, &profile.perform_intro_clip] {
            if let Some(name) = name
                && let Some(action) = mixer.action_mut(name)
            {
                action.loop_mode = LoopMode::Once;
            }
        }

        mixer.play(&profile.idle_clip)?;

        Ok(Self {
            character,
            mixer,
            profile,
            state: CharacterState::Idle,
            run_toggled: true,
        })
    }

    /// Advances the controller by `dt` seconds.
    ///
    /// Runs the state machine, cross-fades to the clip the new state
    /// calls for, applies displacement and facing while moving, advances
    /// the mixer, and re-centers the camera on the character.
    pub fn update(&mut self, dt: f32, input: &InputState, camera: &mut OrbitCamera) {
        self.advance_state(dt, input);

        if let Some(name) = self.profile.clip_for(self.state, self.run_toggled) {
            self.mixer.crossfade_to(name, self.profile.fade_duration);
        }

        if self.state == CharacterState::Moving {
            self.step_movement(dt, input, camera);
        }

        self.mixer.update(dt);

        camera.center =
            self.character.transform.position + Vec3::Y * self.profile.camera_target_height;
    }

    /// Flips the walk/run selection used while moving.
    pub fn toggle_run(&mut self) {
        self.run_toggled = !self.run_toggled;
        log::debug!("run toggled {}", if self.run_toggled { "on" } else { "off" });
    }

    /// Starts the transient attack action. Returns whether it began:
    /// a running attack cannot be re-triggered, and a profile without an
    /// attack clip ignores the trigger. A performance is cut short by it.
    pub fn trigger_attack(&mut self) -> bool {
        if matches!(self.state, CharacterState::Attacking { .. }) {
            return false;
        }
        let Some(name) = self.profile.attack_clip.as_deref() else {
            log::debug!("attack trigger ignored: no attack clip configured");
            return false;
        };
        let Some(duration) = self.mixer.clip_duration(name) else {
            log::warn!("attack clip missing from mixer: {name}");
            return false;
        };

        self.mixer.crossfade_to(name, self.profile.fade_duration);
        self.state = CharacterState::Attacking {
            remaining: duration,
        };
        log::debug!("{} attack started, {duration:.2}s", self.character.name);
        true
    }

    /// Starts the two-phase performance: intro clip once, then the hold
    /// clip looping until movement input or an attack interrupts. Returns
    /// whether it began; attacks block it and re-triggering is ignored.
    pub fn trigger_perform(&mut self) -> bool {
        if matches!(
            self.state,
            CharacterState::Attacking { .. } | CharacterState::Performing { .. }
        ) {
            return false;
        }
        let (Some(intro), Some(_)) = (
            self.profile.perform_intro_clip.as_deref(),
            self.profile.perform_loop_clip.as_deref(),
        ) else {
            log::debug!("perform trigger ignored: no performance clips configured");
            return false;
        };
        let Some(duration) = self.mixer.clip_duration(intro) else {
            log::warn!("performance intro clip missing from mixer: {intro}");
            return false;
        };

        self.mixer.crossfade_to(intro, self.profile.fade_duration);
        self.state = CharacterState::Performing {
            phase: PerformPhase::Intro {
                remaining: duration,
            },
        };
        log::debug!(
            "{} performance started, intro {duration:.2}s",
            self.character.name
        );
        true
    }

    #[inline]
    #[must_use]
    pub fn state(&self) -> CharacterState {
        self.state
    }

    #[inline]
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.run_toggled
    }

    #[inline]
    #[must_use]
    pub fn character(&self) -> &Character {
        &self.character
    }

    #[inline]
    pub fn character_mut(&mut self) -> &mut Character {
        &mut self.character
    }

    #[inline]
    #[must_use]
    pub fn mixer(&self) -> &AnimationMixer {
        &self.mixer
    }

    #[inline]
    pub fn mixer_mut(&mut self) -> &mut AnimationMixer {
        &mut self.mixer
    }

    #[inline]
    #[must_use]
    pub fn profile(&self) -> &CharacterProfile {
        &self.profile
    }

    fn advance_state(&mut self, dt: f32, input: &InputState) {
        let next = match self.state {
            CharacterState::Attacking { remaining } => {
                let remaining = remaining - dt;
                if remaining <= 0.0 {
                    Self::locomotion_state(input)
                } else {
                    CharacterState::Attacking { remaining }
                }
            }
            CharacterState::Performing { phase } => {
                if input.any_pressed() {
                    // Movement breaks the performance at either phase.
                    Self::locomotion_state(input)
                } else {
                    match phase {
                        PerformPhase::Intro { remaining } => {
                            let remaining = remaining - dt;
                            if remaining <= 0.0 {
                                CharacterState::Performing {
                                    phase: PerformPhase::Looping,
                                }
                            } else {
                                CharacterState::Performing {
                                    phase: PerformPhase::Intro { remaining },
                                }
                            }
                        }
                        PerformPhase::Looping => CharacterState::Performing {
                            phase: PerformPhase::Looping,
                        },
                    }
                }
            }
            CharacterState::Idle | CharacterState::Moving => Self::locomotion_state(input),
        };

        if std::mem::discriminant(&next) != std::mem::discriminant(&self.state) {
            log::debug!(
                "{} state {:?} -> {next:?}",
                self.character.name,
                self.state
            );
        }
        self.state = next;
    }

    fn locomotion_state(input: &InputState) -> CharacterState {
        if input.any_pressed() {
            CharacterState::Moving
        } else {
            CharacterState::Idle
        }
    }

    fn step_movement(&mut self, dt: f32, input: &InputState, camera: &OrbitCamera) {
        let mut forward = camera.forward();
        forward.y = 0.0;
        let forward = forward.normalize_or_zero();
        if forward == Vec3::ZERO {
            // Camera looking straight along Y has no ground heading.
            return;
        }

        let heading = Quat::from_rotation_y(direction_offset(input)) * forward;

        let velocity = self.profile.velocity_for(self.run_toggled);
        self.character.transform.position += heading * velocity * dt;

        let target_yaw = heading.x.atan2(heading.z);
        self.character.transform.rotate_towards(
            Quat::from_rotation_y(target_yaw),
            self.profile.turn_speed * dt,
        );
    }
}

impl std::fmt::Debug for CharacterController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CharacterController")
            .field("character", &self.character.name)
            .field("state", &self.state)
            .field("run_toggled", &self.run_toggled)
            .field("current_clip", &self.mixer.current())
            .field("position", &self.character.transform.position)
            .finish_non_exhaustive()
    }
}
