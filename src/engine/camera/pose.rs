use bevy::prelude::*;

/// A camera pose as yaw/pitch/roll Euler angles (degrees, YXZ order) plus a
/// world-space position.
///
/// Angles are interpolated independently and linearly, so successive
/// rotations crossing 180° are not guaranteed to take the shortest path.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct CameraPose {
    pub yaw: f32,
    pub pitch: f32,
    pub roll: f32,
    pub position: Vec3,
}

impl CameraPose {
    /// Captures the pose currently held by a transform.
    pub fn from_transform(transform: &Transform) -> Self {
        let (yaw, pitch, roll) = transform.rotation.to_euler(EulerRot::YXZ);
        Self {
            yaw: yaw.to_degrees(),
            pitch: pitch.to_degrees(),
            roll: roll.to_degrees(),
            position: transform.translation,
        }
    }

    /// Orientation of this pose as a quaternion.
    pub fn rotation(&self) -> Quat {
        Quat::from_euler(
            EulerRot::YXZ,
            self.yaw.to_radians(),
            self.pitch.to_radians(),
            self.roll.to_radians(),
        )
    }

    /// Moves the pose along its own local axes (-Z is forward, +X right, +Y up).
    pub fn translate(&mut self, local_delta: Vec3) {
        self.position += self.rotation() * local_delta;
    }

    /// Moves this pose a fraction of the way toward `target`.
    ///
    /// Position and each Euler angle interpolate linearly with their own
    /// fraction; no quaternion blending is performed.
    pub fn lerp_toward(&mut self, target: &CameraPose, position_pct: f32, rotation_pct: f32) {
        self.yaw += (target.yaw - self.yaw) * rotation_pct;
        self.pitch += (target.pitch - self.pitch) * rotation_pct;
        self.roll += (target.roll - self.roll) * rotation_pct;
        self.position = self.position.lerp(target.position, position_pct);
    }

    /// Writes the pose back to a transform.
    pub fn write_transform(&self, transform: &mut Transform) {
        transform.translation = self.position;
        transform.rotation = self.rotation();
    }
}

/// Fraction of the remaining gap closed after `dt` seconds, for a smoothing
/// constant `time_to_99` (seconds until 99% of the gap is gone).
///
/// `1 - exp(ln(0.01) / time_to_99 * dt)`: monotone in `dt`, bounded in
/// `[0, 1)`, and independent of frame rate.
pub fn smoothing_fraction(time_to_99: f32, dt: f32) -> f32 {
    1.0 - (f32::ln(0.01) / time_to_99 * dt).exp()
}
