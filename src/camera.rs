use glam::Vec3;

use crate::transform::Transform;

const EPS: f32 = 0.0001;

/// Spherical orbit rig: an eye circling a center point at `radius`, with
/// `theta` sweeping around the Y axis and `phi` measuring down from it.
///
/// The rig is pure state. It knows nothing about windows or pointers;
/// callers feed it angle and distance deltas (already scaled by their own
/// speeds and frame time) and read the derived eye pose back out.
#[derive(Debug, Clone)]
pub struct OrbitCamera {
    pub center: Vec3,
    pub radius: f32,
    pub theta: f32,
    pub phi: f32,

    pub min_distance: f32,
    pub max_distance: f32,
}

impl OrbitCamera {
    #[must_use]
    pub fn new(center: Vec3, radius: f32) -> Self {
        Self {
            center,
            radius,
            theta: 0.0,
            phi: std::f32::consts::FRAC_PI_2,
            min_distance: 1.0,
            max_distance: 1000.0,
        }
    }

    /// Swings the rig by the given angle deltas, in radians. `phi` is kept
    /// off the poles so the up vector never degenerates.
    pub fn rotate(&mut self, d_theta: f32, d_phi: f32) {
        self.theta += d_theta;
        self.phi = (self.phi + d_phi).clamp(EPS, std::f32::consts::PI - EPS);
    }

    /// Moves the eye toward (negative `delta`) or away from the center,
    /// clamped to the configured distance range.
    pub fn zoom(&mut self, delta: f32) {
        self.radius = (self.radius + delta).clamp(self.min_distance, self.max_distance);
    }

    /// Shifts the whole rig, center and eye together. Used to track a
    /// moving character without disturbing the orbit angles.
    pub fn follow(&mut self, delta: Vec3) {
        self.center += delta;
    }

    /// Eye position derived from the spherical coordinates.
    #[must_use]
    pub fn eye(&self) -> Vec3 {
        let offset = Vec3::new(
            self.radius * self.phi.sin() * self.theta.sin(),
            self.radius * self.phi.cos(),
            self.radius * self.phi.sin() * self.theta.cos(),
        );
        self.center + offset
    }

    /// Unit vector from the eye toward the center.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        (self.center - self.eye()).normalize_or_zero()
    }

    /// Writes the derived eye pose into `transform`, looking at the center.
    pub fn apply_to(&self, transform: &mut Transform) {
        transform.position = self.eye();
        transform.look_at(self.center, Vec3::Y);
    }
}
