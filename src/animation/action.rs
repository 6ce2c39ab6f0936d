use std::sync::Arc;

use crate::animation::clip::AnimationClip;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopMode {
    /// Play to the clip's end, clamp there and hold the final pose.
    Once,
    /// Wrap around at the clip's end.
    Loop,
}

/// Play/fade lifecycle of an action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayState {
    /// Not contributing to the blend; local time does not advance.
    Inactive,
    /// Advancing, weight ramping linearly toward one.
    FadingIn,
    /// Advancing at full weight.
    Playing,
    /// Advancing, weight ramping linearly toward zero. The action
    /// deactivates when it gets there.
    FadingOut,
}

/// Runtime play state for one clip: local time, blend weight and any fade
/// in flight.
///
/// Fades are linear ramps over a fixed duration. A fade that supersedes
/// another starts from the weight the interrupted fade had reached, so a
/// reversal mid-transition never pops.
#[derive(Debug, Clone)]
pub struct AnimationAction {
    clip: Arc<AnimationClip>,

    pub time: f32,
    pub time_scale: f32,
    pub loop_mode: LoopMode,
    pub paused: bool,

    state: PlayState,
    weight: f32,

    fade_elapsed: f32,
    fade_duration: f32,
    fade_from: f32,
}

impl AnimationAction {
    #[must_use]
    pub fn new(clip: Arc<AnimationClip>) -> Self {
        Self {
            clip,
            time: 0.0,
            time_scale: 1.0,
            loop_mode: LoopMode::Loop,
            paused: false,
            state: PlayState::Inactive,
            weight: 0.0,
            fade_elapsed: 0.0,
            fade_duration: 0.0,
            fade_from: 0.0,
        }
    }

    #[must_use]
    pub fn with_loop_mode(mut self, loop_mode: LoopMode) -> Self {
        self.loop_mode = loop_mode;
        self
    }

    #[must_use]
    pub fn clip(&self) -> &Arc<AnimationClip> {
        &self.clip
    }

    #[must_use]
    pub fn state(&self) -> PlayState {
        self.state
    }

    #[must_use]
    pub fn weight(&self) -> f32 {
        self.weight
    }

    #[must_use]
    pub fn is_active(&self) -> bool {
        self.state != PlayState::Inactive
    }

    /// Rewinds local time to the start and clears a `Once` hold.
    pub fn reset(&mut self) -> &mut Self {
        self.time = 0.0;
        self.paused = false;
        self
    }

    /// Starts playing at full weight immediately. No-op if already active;
    /// use [`fade_in`](Self::fade_in) for a blended start.
    pub fn play(&mut self) -> &mut Self {
        if self.state == PlayState::Inactive {
            self.state = PlayState::Playing;
            self.weight = 1.0;
        }
        self
    }

    /// Cuts the action off: zero weight, inactive, rewound.
    pub fn stop(&mut self) -> &mut Self {
        self.state = PlayState::Inactive;
        self.weight = 0.0;
        self.fade_elapsed = 0.0;
        self.fade_duration = 0.0;
        self.fade_from = 0.0;
        self.reset();
        self
    }

    /// Ramps the weight toward one over `duration` seconds, activating the
    /// action if needed.
    pub fn fade_in(&mut self, duration: f32) -> &mut Self {
        self.begin_fade(PlayState::FadingIn, duration);
        self
    }

    /// Ramps the weight toward zero over `duration` seconds. No-op on an
    /// inactive action.
    pub fn fade_out(&mut self, duration: f32) -> &mut Self {
        if self.state != PlayState::Inactive {
            self.begin_fade(PlayState::FadingOut, duration);
        }
        self
    }

    fn begin_fade(&mut self, state: PlayState, duration: f32) {
        if duration <= 0.0 {
            // Degenerate fade: jump straight to the end state.
            match state {
                PlayState::FadingIn => {
                    self.state = PlayState::Playing;
                    self.weight = 1.0;
                }
                PlayState::FadingOut => {
                    self.stop();
                }
                PlayState::Inactive | PlayState::Playing => {}
            }
            return;
        }

        self.fade_from = self.weight;
        self.fade_elapsed = 0.0;
        self.fade_duration = duration;
        self.state = state;
    }

    /// Advances local time and any fade in flight by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if self.state == PlayState::Inactive {
            return;
        }

        self.advance_time(dt);
        // A fade keeps running on a paused action, so a held `Once` pose can
        // still be blended out.
        self.advance_fade(dt);
    }

    fn advance_time(&mut self, dt: f32) {
        if self.paused {
            return;
        }
        let duration = self.clip.duration;
        if duration <= 0.0 {
            return;
        }

        self.time += dt * self.time_scale;
        match self.loop_mode {
            LoopMode::Once => {
                if self.time >= duration {
                    self.time = duration;
                    self.paused = true;
                } else if self.time < 0.0 {
                    self.time = 0.0;
                    self.paused = true;
                }
            }
            LoopMode::Loop => {
                if self.time >= duration {
                    self.time %= duration;
                } else if self.time < 0.0 {
                    self.time = duration + (self.time % duration);
                }
            }
        }
    }

    fn advance_fade(&mut self, dt: f32) {
        let target = match self.state {
            PlayState::FadingIn => 1.0,
            PlayState::FadingOut => 0.0,
            PlayState::Inactive | PlayState::Playing => return,
        };

        self.fade_elapsed += dt;
        let t = (self.fade_elapsed / self.fade_duration).min(1.0);
        self.weight = self.fade_from + (target - self.fade_from) * t;

        if t >= 1.0 {
            if self.state == PlayState::FadingIn {
                self.state = PlayState::Playing;
                self.weight = 1.0;
            } else {
                self.stop();
            }
        }
    }
}
