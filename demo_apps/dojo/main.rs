//! Scripted dojo walkthrough.
//!
//! Drives a samurai through every controller feature without a window or a
//! renderer: locomotion with the run toggle, diagonal movement, the
//! transient attack, and the two-phase kata performance. Run with
//! `RUST_LOG=debug` to watch the cross-fades underneath.

use std::sync::Arc;

use anyhow::Context;
use glam::Vec3;
use ronin::{
    AnimationClip, AnimationMixer, Character, CharacterController, CharacterProfile, Direction,
    InputState, LoopMode, OrbitCamera, Timer,
};

const DT: f32 = 1.0 / 60.0;

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let profile = CharacterProfile {
        attack_clip: Some("Slash".into()),
        perform_intro_clip: Some("KataIntro".into()),
        perform_loop_clip: Some("KataLoop".into()),
        ..Default::default()
    };
    println!("profile:\n{}", serde_json::to_string_pretty(&profile)?);

    let mut mixer = AnimationMixer::new();
    for (name, duration) in [
        ("Idle", 3.0),
        ("Walk", 1.2),
        ("Run", 0.8),
        ("Slash", 1.1),
        ("KataIntro", 2.4),
        ("KataLoop", 3.6),
    ] {
        // The controller reassigns loop modes per role during construction.
        mixer.add_clip(Arc::new(AnimationClip::new(name, duration)), LoopMode::Loop);
    }

    let mut controller =
        CharacterController::new(Character::at("ronin", Vec3::ZERO), mixer, profile)
            .context("building character controller")?;
    log::info!("controller ready: {controller:?}");

    let mut camera = OrbitCamera::new(Vec3::new(0.0, 1.0, 0.0), 8.0);
    let mut input = InputState::new();
    let mut timer = Timer::new();

    println!("-- idle --");
    advance(&mut controller, &mut input, &mut camera, &mut timer, 60);
    report(&controller);

    println!("-- sprint forward --");
    input.press(Direction::Forward);
    advance(&mut controller, &mut input, &mut camera, &mut timer, 90);
    report(&controller);

    println!("-- walk forward (run toggled off) --");
    controller.toggle_run();
    advance(&mut controller, &mut input, &mut camera, &mut timer, 60);
    report(&controller);

    println!("-- veer forward-left --");
    input.press(Direction::Left);
    advance(&mut controller, &mut input, &mut camera, &mut timer, 60);
    report(&controller);

    println!("-- stop --");
    input.release(Direction::Forward);
    input.release(Direction::Left);
    advance(&mut controller, &mut input, &mut camera, &mut timer, 30);
    report(&controller);

    println!("-- slash (held forward key waits for the swing) --");
    controller.trigger_attack();
    input.press(Direction::Forward);
    advance(&mut controller, &mut input, &mut camera, &mut timer, 30);
    report(&controller);
    advance(&mut controller, &mut input, &mut camera, &mut timer, 45);
    report(&controller);
    input.release(Direction::Forward);
    advance(&mut controller, &mut input, &mut camera, &mut timer, 30);

    println!("-- kata: intro once, then the hold loop --");
    controller.trigger_perform();
    advance(&mut controller, &mut input, &mut camera, &mut timer, 150);
    report(&controller);
    advance(&mut controller, &mut input, &mut camera, &mut timer, 120);

    println!("-- break the kata with movement --");
    input.press(Direction::Forward);
    advance(&mut controller, &mut input, &mut camera, &mut timer, 30);
    report(&controller);
    input.release(Direction::Forward);
    advance(&mut controller, &mut input, &mut camera, &mut timer, 30);
    report(&controller);

    let simulated = timer.frame_count as f32 * DT;
    let eye = camera.eye();
    println!(
        "simulated {simulated:.1}s across {} frames in {:?} wall time; camera eye ({:+.2}, {:+.2}, {:+.2})",
        timer.frame_count, timer.elapsed, eye.x, eye.y, eye.z
    );
    Ok(())
}

/// Steps the controller `frames` times at a fixed 60 Hz delta.
fn advance(
    controller: &mut CharacterController,
    input: &mut InputState,
    camera: &mut OrbitCamera,
    timer: &mut Timer,
    frames: u32,
) {
    for _ in 0..frames {
        input.start_frame();
        timer.tick();
        controller.update(DT, input, camera);
    }
}

fn report(controller: &CharacterController) {
    let pos = controller.character().transform.position;
    println!(
        "   state {:?} | clip {:?} | pos ({:+.2}, {:+.2}, {:+.2})",
        controller.state(),
        controller.mixer().current(),
        pos.x,
        pos.y,
        pos.z
    );
}
