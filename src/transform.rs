use glam::{Mat3, Quat, Vec3};

/// TRS pose component.
///
/// Holds a position, rotation and scale in world space. This is a plain data
/// component: the character and the camera rig both carry one, and a renderer
/// would read it to place the corresponding scene object.
#[derive(Debug, Clone, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Quat,
    pub scale: Vec3,
}

impl Transform {
    #[must_use]
    pub fn new() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }

    #[must_use]
    pub fn from_position(position: Vec3) -> Self {
        Self {
            position,
            ..Self::new()
        }
    }

    /// Orients the transform so its local -Z axis points at `target`.
    ///
    /// `target` and `up` are expected in the same space as `position`.
    pub fn look_at(&mut self, target: Vec3, up: Vec3) {
        let forward = (target - self.position).normalize_or_zero();
        let right = forward.cross(up);

        // Degenerate when the target coincides with the position or the view
        // direction is parallel to `up`.
        if right.length_squared() < 1e-4 {
            return;
        }

        let right = right.normalize();
        let new_up = right.cross(forward).normalize();

        let rot_mat = Mat3::from_cols(right, new_up, -forward);
        self.rotation = Quat::from_mat3(&rot_mat);
    }

    /// Rotates toward `target` by at most `max_angle` radians.
    ///
    /// Reaches `target` exactly once the remaining angle fits within the
    /// step, so repeated calls converge instead of oscillating.
    pub fn rotate_towards(&mut self, target: Quat, max_angle: f32) {
        let angle = self.rotation.angle_between(target);
        if angle <= max_angle || angle < 1e-6 {
            self.rotation = target;
        } else {
            self.rotation = self.rotation.slerp(target, max_angle / angle);
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}
