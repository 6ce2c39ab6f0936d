use std::sync::Arc;

use rustc_hash::FxHashMap;

use crate::animation::action::{AnimationAction, LoopMode};
use crate::animation::clip::AnimationClip;
use crate::errors::{Result, RoninError};

/// Advances a set of named actions and orchestrates cross-fades between
/// them.
///
/// At most one action is *current*. A cross-fade gives the outgoing and
/// incoming ramps the same duration, so their weights sum to one for the
/// whole transition; a transition that is itself interrupted keeps the
/// weights it had reached and ramps on from there.
#[derive(Debug)]
pub struct AnimationMixer {
    actions: FxHashMap<String, AnimationAction>,
    current: Option<String>,
}

impl AnimationMixer {
    #[must_use]
    pub fn new() -> Self {
        Self {
            actions: FxHashMap::default(),
            current: None,
        }
    }

    /// Registers an action under its clip's name. A same-named action is
    /// replaced.
    pub fn add_action(&mut self, action: AnimationAction) {
        self.actions.insert(action.clip().name.clone(), action);
    }

    /// Convenience: wraps `clip` in a fresh action with the given loop mode.
    pub fn add_clip(&mut self, clip: Arc<AnimationClip>, loop_mode: LoopMode) {
        self.add_action(AnimationAction::new(clip).with_loop_mode(loop_mode));
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.actions.contains_key(name)
    }

    #[must_use]
    pub fn action(&self, name: &str) -> Option<&AnimationAction> {
        self.actions.get(name)
    }

    #[must_use]
    pub fn action_mut(&mut self, name: &str) -> Option<&mut AnimationAction> {
        self.actions.get_mut(name)
    }

    #[must_use]
    pub fn clip_duration(&self, name: &str) -> Option<f32> {
        self.actions.get(name).map(|a| a.clip().duration)
    }

    /// Name of the current action, if any.
    #[must_use]
    pub fn current(&self) -> Option<&str> {
        self.current.as_deref()
    }

    #[must_use]
    pub fn current_action(&self) -> Option<&AnimationAction> {
        self.actions.get(self.current.as_deref()?)
    }

    /// Starts `name` at full weight immediately and makes it current. Any
    /// previously current action is cut off, not faded. Meant for the very
    /// first clip; use [`crossfade_to`](Self::crossfade_to) during play.
    pub fn play(&mut self, name: &str) -> Result<()> {
        if !self.actions.contains_key(name) {
            return Err(RoninError::MissingClip(name.to_string()));
        }
        if let Some(prev) = self.current.take()
            && prev != name
            && let Some(action) = self.actions.get_mut(&prev)
        {
            action.stop();
        }
        if let Some(action) = self.actions.get_mut(name) {
            action.reset().play();
        }
        self.current = Some(name.to_string());
        Ok(())
    }

    /// Cross-fades from the current action to `name` over `duration`
    /// seconds and marks `name` current. The incoming clip restarts from
    /// its beginning. Returns whether a transition actually began: a `name`
    /// that is already current is a no-op, and a missing `name` is logged
    /// and skipped rather than treated as fatal mid-frame.
    pub fn crossfade_to(&mut self, name: &str, duration: f32) -> bool {
        if self.current.as_deref() == Some(name) {
            return false;
        }
        if !self.actions.contains_key(name) {
            log::warn!("crossfade target clip not found: {name}");
            return false;
        }

        log::debug!("crossfade {:?} -> {name} over {duration}s", self.current);

        if let Some(prev) = &self.current
            && let Some(outgoing) = self.actions.get_mut(prev.as_str())
        {
            outgoing.fade_out(duration);
        }
        if let Some(incoming) = self.actions.get_mut(name) {
            incoming.reset().fade_in(duration);
        }
        self.current = Some(name.to_string());
        true
    }

    /// Advances every action by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        for action in self.actions.values_mut() {
            action.update(dt);
        }
    }
}

impl Default for AnimationMixer {
    fn default() -> Self {
        Self::new()
    }
}
