//! Scripted orbit-camera sweep.
//!
//! The classic two-cubes viewer without the cubes: an orbit rig circles a
//! fixed center while the script plays the mouse. Each step prints the
//! derived eye pose a renderer would consume.

use std::f32::consts::PI;

use glam::Vec3;
use ronin::{OrbitCamera, Transform};

fn main() {
    env_logger::init();

    let mut camera = OrbitCamera::new(Vec3::ZERO, 5.0);
    camera.min_distance = 2.0;
    camera.max_distance = 12.0;

    report("start", &camera);

    // Quarter turn around the center, tilting slightly downward, in the
    // same per-frame increments a drag across half the viewport produces.
    let steps = 30;
    for _ in 0..steps {
        camera.rotate(0.5 * PI / steps as f32, -0.1 * PI / steps as f32);
    }
    report("after quarter turn", &camera);

    // Lean on the zoom key for a second.
    for _ in 0..60 {
        camera.zoom(-0.1);
    }
    report("zoomed in (clamped at min_distance)", &camera);

    for _ in 0..240 {
        camera.zoom(0.1);
    }
    report("zoomed out (clamped at max_distance)", &camera);

    // Push past the pole; the rig refuses to flip.
    camera.rotate(0.0, -PI);
    report("pitched to the upper limit", &camera);
}

fn report(label: &str, camera: &OrbitCamera) {
    let mut view = Transform::new();
    camera.apply_to(&mut view);

    let eye = camera.eye();
    let fwd = camera.forward();
    println!(
        "{label}: radius {:.2}, theta {:.2}, phi {:.2} | eye ({:+.2}, {:+.2}, {:+.2}) forward ({:+.2}, {:+.2}, {:+.2})",
        camera.radius, camera.theta, camera.phi, eye.x, eye.y, eye.z, fwd.x, fwd.y, fwd.z
    );
    log::debug!("view transform: {view:?}");
}
