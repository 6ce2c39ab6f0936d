//! Animation System Tests
//!
//! Tests for:
//! - AnimationAction loop modes (Once, Loop) and time scaling
//! - The fade state machine (FadingIn/Playing/FadingOut weight ramps)
//! - Fade interruption continuity (no weight pops)
//! - AnimationMixer cross-fade pairing and the single-current invariant

use std::sync::Arc;

use ronin::{AnimationAction, AnimationClip, AnimationMixer, LoopMode, PlayState, RoninError};

const EPSILON: f32 = 1e-5;

fn approx(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_action(name: &str, duration: f32) -> AnimationAction {
    AnimationAction::new(Arc::new(AnimationClip::new(name, duration)))
}

fn make_mixer(clips: &[(&str, f32)]) -> AnimationMixer {
    let mut mixer = AnimationMixer::new();
    for &(name, duration) in clips {
        mixer.add_clip(Arc::new(AnimationClip::new(name, duration)), LoopMode::Loop);
    }
    mixer
}

// ============================================================================
// AnimationClip
// ============================================================================

#[test]
fn clip_negative_duration_clamped() {
    let clip = AnimationClip::new("broken", -2.0);
    assert!(approx(clip.duration, 0.0));
}

// ============================================================================
// AnimationAction: activation
// ============================================================================

#[test]
fn action_starts_inactive_with_zero_weight() {
    let action = make_action("Idle", 2.0);
    assert_eq!(action.state(), PlayState::Inactive);
    assert!(approx(action.weight(), 0.0));
    assert!(!action.is_active());
}

#[test]
fn action_play_is_immediate_full_weight() {
    let mut action = make_action("Idle", 2.0);
    action.play();
    assert_eq!(action.state(), PlayState::Playing);
    assert!(approx(action.weight(), 1.0));
}

#[test]
fn action_inactive_does_not_advance() {
    let mut action = make_action("Idle", 2.0);
    action.update(1.0);
    assert!(approx(action.time, 0.0), "inactive action must not advance");
}

#[test]
fn action_stop_rewinds_and_deactivates() {
    let mut action = make_action("Idle", 2.0);
    action.play();
    action.update(1.5);
    action.stop();

    assert_eq!(action.state(), PlayState::Inactive);
    assert!(approx(action.weight(), 0.0));
    assert!(approx(action.time, 0.0));
}

// ============================================================================
// AnimationAction: loop modes
// ============================================================================

#[test]
fn action_loop_mode_once_clamps_and_pauses() {
    let mut action = make_action("Slash", 2.0).with_loop_mode(LoopMode::Once);
    action.play();

    action.update(3.0);
    assert!(
        approx(action.time, 2.0),
        "Once: should clamp to duration, got {}",
        action.time
    );
    assert!(action.paused, "Once: should hold at the end");
    assert_eq!(
        action.state(),
        PlayState::Playing,
        "holding the final pose keeps the action active"
    );
}

#[test]
fn action_loop_mode_loop_wraps() {
    let mut action = make_action("Walk", 2.0);
    action.play();

    action.update(2.5);
    assert!(
        approx(action.time, 0.5),
        "Loop: should wrap to 0.5, got {}",
        action.time
    );
    assert!(!action.paused, "Loop: should not pause");
}

#[test]
fn action_loop_reverse_playback_stays_in_range() {
    let mut action = make_action("Walk", 2.0);
    action.play();
    action.time_scale = -1.0;
    action.time = 0.5;

    action.update(1.0);
    assert!(
        action.time > 0.0 && action.time <= 2.0,
        "reverse playback should wrap into [0, duration], got {}",
        action.time
    );
    assert!(approx(action.time, 1.5), "expected 1.5, got {}", action.time);
}

#[test]
fn action_time_scale_stretches_dt() {
    let mut action = make_action("Walk", 4.0).with_loop_mode(LoopMode::Once);
    action.play();
    action.time_scale = 2.0;

    action.update(1.0);
    assert!(approx(action.time, 2.0), "expected 2.0, got {}", action.time);
}

#[test]
fn action_paused_does_not_advance_time() {
    let mut action = make_action("Idle", 2.0);
    action.play();
    action.paused = true;
    action.time = 0.5;

    action.update(1.0);
    assert!(approx(action.time, 0.5), "paused action should not advance");
}

#[test]
fn action_reset_clears_once_hold() {
    let mut action = make_action("Slash", 1.0).with_loop_mode(LoopMode::Once);
    action.play();
    action.update(2.0);
    assert!(action.paused);

    action.reset();
    assert!(approx(action.time, 0.0));
    assert!(!action.paused, "reset must clear the end-of-clip hold");
}

// ============================================================================
// AnimationAction: fades
// ============================================================================

#[test]
fn fade_in_ramps_linearly_to_full_weight() {
    let mut action = make_action("Walk", 10.0);
    action.fade_in(0.2);
    assert_eq!(action.state(), PlayState::FadingIn);

    action.update(0.1);
    assert!(
        approx(action.weight(), 0.5),
        "halfway through the fade the weight should be 0.5, got {}",
        action.weight()
    );

    action.update(0.1);
    assert!(approx(action.weight(), 1.0));
    assert_eq!(action.state(), PlayState::Playing, "fade-in settles to Playing");
}

#[test]
fn fade_out_ramps_to_zero_and_deactivates() {
    let mut action = make_action("Walk", 10.0);
    action.play();

    action.fade_out(0.2);
    assert_eq!(action.state(), PlayState::FadingOut);

    action.update(0.1);
    assert!(approx(action.weight(), 0.5), "got {}", action.weight());

    action.update(0.1);
    assert_eq!(action.state(), PlayState::Inactive);
    assert!(approx(action.weight(), 0.0));
}

#[test]
fn fade_out_on_inactive_action_is_noop() {
    let mut action = make_action("Walk", 10.0);
    action.fade_out(0.2);
    assert_eq!(action.state(), PlayState::Inactive);
}

#[test]
fn interrupted_fade_continues_from_reached_weight() {
    let mut action = make_action("Walk", 10.0);
    action.fade_in(0.2);
    action.update(0.05); // a quarter in: weight 0.25
    let reached = action.weight();
    assert!(approx(reached, 0.25), "got {reached}");

    // Reverse direction mid-ramp; the new fade starts where the old one
    // stopped instead of popping to an endpoint.
    action.fade_out(0.2);
    assert!(approx(action.weight(), reached), "no pop on interruption");

    action.update(0.1);
    let halfway = action.weight();
    assert!(
        approx(halfway, reached * 0.5),
        "expected {}, got {halfway}",
        reached * 0.5
    );
}

#[test]
fn fade_advances_on_paused_action() {
    // A Once clip that has clamped at its end is paused, but must still be
    // blendable out.
    let mut action = make_action("Slash", 1.0).with_loop_mode(LoopMode::Once);
    action.play();
    action.update(2.0);
    assert!(action.paused);

    action.fade_out(0.2);
    action.update(0.1);
    assert!(
        approx(action.weight(), 0.5),
        "fade must progress while time is held, got {}",
        action.weight()
    );
    assert!(approx(action.time, 1.0), "held time must not move");
}

#[test]
fn zero_duration_fades_jump_to_end_state() {
    let mut action = make_action("Walk", 10.0);
    action.fade_in(0.0);
    assert_eq!(action.state(), PlayState::Playing);
    assert!(approx(action.weight(), 1.0));

    action.fade_out(0.0);
    assert_eq!(action.state(), PlayState::Inactive);
    assert!(approx(action.weight(), 0.0));
}

// ============================================================================
// AnimationMixer: registration and lookup
// ============================================================================

#[test]
fn mixer_registers_actions_by_clip_name() {
    let mixer = make_mixer(&[("Idle", 3.0), ("Walk", 1.2)]);
    assert!(mixer.contains("Idle"));
    assert!(mixer.contains("Walk"));
    assert!(!mixer.contains("Run"));
    assert_eq!(mixer.clip_duration("Walk"), Some(1.2));
    assert_eq!(mixer.clip_duration("Run"), None);
}

#[test]
fn mixer_play_missing_clip_errors() {
    let mut mixer = make_mixer(&[("Idle", 3.0)]);
    let err = mixer.play("Sprint").unwrap_err();
    assert!(matches!(err, RoninError::MissingClip(name) if name == "Sprint"));
}

#[test]
fn mixer_play_sets_current_at_full_weight() {
    let mut mixer = make_mixer(&[("Idle", 3.0), ("Walk", 1.2)]);
    mixer.play("Idle").unwrap();

    assert_eq!(mixer.current(), Some("Idle"));
    let idle = mixer.action("Idle").unwrap();
    assert_eq!(idle.state(), PlayState::Playing);
    assert!(approx(idle.weight(), 1.0));
}

#[test]
fn mixer_play_cuts_previous_current() {
    let mut mixer = make_mixer(&[("Idle", 3.0), ("Walk", 1.2)]);
    mixer.play("Idle").unwrap();
    mixer.play("Walk").unwrap();

    assert_eq!(mixer.current(), Some("Walk"));
    assert_eq!(mixer.action("Idle").unwrap().state(), PlayState::Inactive);
}

// ============================================================================
// AnimationMixer: cross-fades
// ============================================================================

#[test]
fn crossfade_pairs_fade_out_with_fade_in() {
    let mut mixer = make_mixer(&[("Idle", 3.0), ("Walk", 1.2)]);
    mixer.play("Idle").unwrap();

    assert!(mixer.crossfade_to("Walk", 0.2));
    assert_eq!(mixer.current(), Some("Walk"));
    assert_eq!(mixer.action("Idle").unwrap().state(), PlayState::FadingOut);
    assert_eq!(mixer.action("Walk").unwrap().state(), PlayState::FadingIn);
}

#[test]
fn crossfade_weights_stay_complementary() {
    let mut mixer = make_mixer(&[("Idle", 3.0), ("Walk", 1.2)]);
    mixer.play("Idle").unwrap();
    mixer.crossfade_to("Walk", 0.2);

    for _ in 0..4 {
        mixer.update(0.05);
        let sum = mixer.action("Idle").unwrap().weight() + mixer.action("Walk").unwrap().weight();
        assert!(
            approx(sum, 1.0),
            "outgoing + incoming weight should stay 1.0, got {sum}"
        );
    }

    assert_eq!(mixer.action("Idle").unwrap().state(), PlayState::Inactive);
    assert_eq!(mixer.action("Walk").unwrap().state(), PlayState::Playing);
}

#[test]
fn crossfade_to_current_clip_is_noop() {
    let mut mixer = make_mixer(&[("Idle", 3.0)]);
    mixer.play("Idle").unwrap();

    assert!(!mixer.crossfade_to("Idle", 0.2));
    assert_eq!(mixer.action("Idle").unwrap().state(), PlayState::Playing);
    assert!(approx(mixer.action("Idle").unwrap().weight(), 1.0));
}

#[test]
fn crossfade_to_missing_clip_keeps_current() {
    let mut mixer = make_mixer(&[("Idle", 3.0)]);
    mixer.play("Idle").unwrap();

    assert!(!mixer.crossfade_to("Sprint", 0.2));
    assert_eq!(mixer.current(), Some("Idle"));
    assert_eq!(mixer.action("Idle").unwrap().state(), PlayState::Playing);
}

#[test]
fn crossfade_restarts_incoming_clip() {
    let mut mixer = make_mixer(&[("Idle", 3.0), ("Walk", 1.2)]);
    mixer.play("Walk").unwrap();
    mixer.update(0.9);
    assert!(approx(mixer.action("Walk").unwrap().time, 0.9));

    mixer.crossfade_to("Idle", 0.2);
    mixer.crossfade_to("Walk", 0.2);
    assert!(
        mixer.action("Walk").unwrap().time < 0.9,
        "incoming clip must restart from the top"
    );
}

#[test]
fn crossfade_reversal_mid_transition_stays_continuous() {
    let mut mixer = make_mixer(&[("Idle", 3.0), ("Walk", 1.2)]);
    mixer.play("Idle").unwrap();

    mixer.crossfade_to("Walk", 0.2);
    mixer.update(0.1);
    let idle_mid = mixer.action("Idle").unwrap().weight();
    let walk_mid = mixer.action("Walk").unwrap().weight();
    assert!(approx(idle_mid, 0.5) && approx(walk_mid, 0.5));

    // Change of heart: fade back. Both ramps pick up from their current
    // weights.
    mixer.crossfade_to("Idle", 0.2);
    assert_eq!(mixer.current(), Some("Idle"));
    assert!(approx(mixer.action("Idle").unwrap().weight(), idle_mid));

    mixer.update(0.2);
    assert_eq!(mixer.action("Idle").unwrap().state(), PlayState::Playing);
    assert_eq!(mixer.action("Walk").unwrap().state(), PlayState::Inactive);
}

#[test]
fn mixer_never_reports_two_currents() {
    let mut mixer = make_mixer(&[("Idle", 3.0), ("Walk", 1.2), ("Run", 0.8)]);
    mixer.play("Idle").unwrap();

    mixer.crossfade_to("Walk", 0.2);
    mixer.crossfade_to("Run", 0.2);
    mixer.crossfade_to("Walk", 0.2);

    // However tangled the fades get, exactly one clip is current.
    assert_eq!(mixer.current(), Some("Walk"));
}

#[test]
fn mixer_update_advances_all_active_actions() {
    let mut mixer = make_mixer(&[("Idle", 3.0), ("Walk", 1.2)]);
    mixer.play("Idle").unwrap();
    mixer.crossfade_to("Walk", 0.5);

    mixer.update(0.25);
    assert!(approx(mixer.action("Idle").unwrap().time, 0.25));
    assert!(approx(mixer.action("Walk").unwrap().time, 0.25));
}
