use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::constants::camera_settings::{
    BOOST_WHEEL_STEP, DEFAULT_BOOST, DEFAULT_MOVEMENT_SENSITIVITY, DEFAULT_POSITION_SMOOTH_TIME,
    DEFAULT_ROTATION_SMOOTH_TIME, HELD_BOOST_MULTIPLIER, MOUSE_PAN_SCALE, MOUSE_ROTATION_SCALE,
    STICK_ROTATION_RATE, TOUCH_PAN_SCALE, TOUCH_ROTATION_SCALE,
};
use crate::engine::camera::pose::{CameraPose, smoothing_fraction};
use crate::engine::camera::sensitivity::SensitivityCurve;
use crate::engine::input::devices::{ActiveGamepad, stick_value};
use crate::engine::input::sample::InputSample;

/// Tunable surface of a free-fly rig.
#[derive(Clone, Debug)]
pub struct FreeFlySettings {
    /// Scales every translation source (valid range 0.001–1).
    pub movement_sensitivity: f32,
    /// Exponential speed boost; translation is multiplied by 2^boost.
    pub boost: f32,
    /// Seconds for the displayed position to reach 99% of the target.
    pub position_smooth_time: f32,
    /// Seconds for the displayed rotation to reach 99% of the target.
    pub rotation_smooth_time: f32,
    /// Maps rotation-input magnitude to a sensitivity multiplier.
    pub sensitivity_curve: SensitivityCurve,
    /// Extra vertical inversion on top of the built-in negation. With the
    /// flag off the vertical axis is negated once (mouse-down looks down);
    /// with it on the two negations cancel. Kept exactly as shipped.
    pub invert_y: bool,
    /// Mouse button that makes a drag rotate the camera.
    pub rotate_button: MouseButton,
    /// Mouse button that makes a drag pan the camera (opposite hand).
    pub pan_button: MouseButton,
    /// Held key multiplying translation speed by 10.
    pub boost_key: KeyCode,
    /// Held key snapping the rig back to its activation pose.
    pub reset_key: KeyCode,
    /// Uniform inset of the window rect, in logical pixels, outside of
    /// which mouse drags are ignored.
    pub safe_area_margin: f32,
}

impl Default for FreeFlySettings {
    fn default() -> Self {
        Self {
            movement_sensitivity: DEFAULT_MOVEMENT_SENSITIVITY,
            boost: DEFAULT_BOOST,
            position_smooth_time: DEFAULT_POSITION_SMOOTH_TIME,
            rotation_smooth_time: DEFAULT_ROTATION_SMOOTH_TIME,
            sensitivity_curve: SensitivityCurve::default(),
            invert_y: false,
            rotate_button: MouseButton::Left,
            pan_button: MouseButton::Right,
            boost_key: KeyCode::ShiftLeft,
            reset_key: KeyCode::KeyR,
            safe_area_margin: 0.0,
        }
    }
}

/// Free-fly camera rig component.
///
/// Holds the three pose snapshots and drives the entity's `Transform` once
/// per fixed tick. Insert it on a camera entity; activation capture and
/// session registration react to the insertion.
#[derive(Component, Debug, Default)]
pub struct FreeFlyRig {
    pub settings: FreeFlySettings,
    initial: CameraPose,
    target: CameraPose,
    displayed: CameraPose,
}

impl FreeFlyRig {
    pub fn new(settings: FreeFlySettings) -> Self {
        Self {
            settings,
            ..default()
        }
    }

    pub fn initial(&self) -> &CameraPose {
        &self.initial
    }

    pub fn target(&self) -> &CameraPose {
        &self.target
    }

    pub fn displayed(&self) -> &CameraPose {
        &self.displayed
    }

    /// Captures a fresh activation baseline: all three snapshots are set
    /// from the transform. Runs on activation and on explicit re-baseline.
    pub fn resync(&mut self, transform: &Transform) {
        let pose = CameraPose::from_transform(transform);
        self.initial = pose;
        self.target = pose;
        self.displayed = pose;
    }

    /// One fixed-tick update: applies the sampled input to the target pose,
    /// chases it with the displayed pose, and writes the transform.
    pub fn tick(&mut self, sample: &InputSample, dt: f32, transform: &mut Transform) {
        if sample.reset_held {
            self.initial.write_transform(transform);
            let pose = CameraPose::from_transform(transform);
            self.target = pose;
            self.displayed = pose;
            return;
        }

        // Rotation priority: a qualifying mouse drag beats a single-finger
        // touch drag; the right stick is always additive.
        let mouse_drag = sample.rotate_button_held && sample.cursor_in_safe_area;
        if mouse_drag {
            self.apply_rotation(sample.mouse_delta * MOUSE_ROTATION_SCALE);
        } else if let [touch] = sample.touch_deltas.as_slice() {
            self.apply_rotation(*touch * TOUCH_ROTATION_SCALE);
        }
        if let Some(stick) = sample.right_stick {
            // Stick-up mimics a screen-up pointer delta.
            let delta = Vec2::new(stick.x, -stick.y) * STICK_ROTATION_RATE * dt;
            self.apply_rotation(delta);
        }

        let local_dir = self.translation_direction(sample);
        let mut speed = dt * self.settings.movement_sensitivity * 2f32.powf(self.settings.boost);
        if sample.boost_held {
            speed *= HELD_BOOST_MULTIPLIER;
        }
        self.target.translate(local_dir * speed);

        if sample.scroll != 0.0 {
            self.settings.boost += sample.scroll * BOOST_WHEEL_STEP;
        }

        let position_pct = smoothing_fraction(self.settings.position_smooth_time, dt);
        let rotation_pct = smoothing_fraction(self.settings.rotation_smooth_time, dt);
        self.displayed.lerp_toward(&self.target, position_pct, rotation_pct);
        self.displayed.write_transform(transform);
    }

    /// Adds a 2-D rotation delta to the target yaw/pitch, with the vertical
    /// inversion convention and the sensitivity curve applied.
    fn apply_rotation(&mut self, raw: Vec2) {
        let mut delta = raw;
        delta.y *= if self.settings.invert_y { 1.0 } else { -1.0 };
        let factor = self.settings.sensitivity_curve.evaluate(delta.length());
        self.target.yaw += delta.x * factor;
        self.target.pitch += delta.y * factor;
    }

    /// Picks the translation source for this tick and returns the local
    /// (camera-frame) direction vector before speed scaling.
    fn translation_direction(&self, sample: &InputSample) -> Vec3 {
        if let [a, b] = sample.touch_deltas.as_slice() {
            // Two-finger pan: the camera follows the averaged finger delta
            // in the screen plane.
            let avg = (*a + *b) / 2.0;
            return Vec3::new(-avg.x, avg.y, 0.0) * TOUCH_PAN_SCALE;
        }
        if sample.pan_button_held && sample.cursor_in_safe_area {
            return Vec3::new(-sample.mouse_delta.x, sample.mouse_delta.y, 0.0) * MOUSE_PAN_SCALE;
        }
        let mut dir = sample.keyboard_dir;
        if let Some(stick) = sample.left_stick {
            dir += Vec3::new(stick.x, 0.0, -stick.y);
        }
        dir
    }
}

/// Captures the activation baseline for rigs added since the last run.
pub fn activate_added_rigs(mut rigs: Query<(&mut FreeFlyRig, &Transform), Added<FreeFlyRig>>) {
    for (mut rig, transform) in rigs.iter_mut() {
        rig.resync(transform);
        info!(
            "Free-fly rig activated at {:?}",
            transform.translation
        );
    }
}

/// Fixed-tick driver: samples the input devices once and updates every rig.
#[allow(clippy::too_many_arguments)]
pub fn drive_free_fly_rigs(
    mut rigs: Query<(&mut FreeFlyRig, &mut Transform)>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    keyboard: Res<ButtonInput<KeyCode>>,
    touches: Res<Touches>,
    mouse_motion: Res<AccumulatedMouseMotion>,
    mouse_scroll: Res<AccumulatedMouseScroll>,
    gamepads: Query<&Gamepad>,
    active_gamepad: Res<ActiveGamepad>,
    windows: Query<&Window, With<PrimaryWindow>>,
    time: Res<Time>,
) {
    let window = windows.iter().next();
    let gamepad = active_gamepad.0.and_then(|entity| gamepads.get(entity).ok());
    let left_stick = gamepad.and_then(|pad| {
        stick_value(pad, GamepadAxis::LeftStickX, GamepadAxis::LeftStickY)
    });
    let right_stick = gamepad.and_then(|pad| {
        stick_value(pad, GamepadAxis::RightStickX, GamepadAxis::RightStickY)
    });
    let dt = time.delta_secs();

    for (mut rig, mut transform) in rigs.iter_mut() {
        let sample = InputSample::read(
            &rig.settings,
            &mouse_buttons,
            &keyboard,
            &touches,
            &mouse_motion,
            &mouse_scroll,
            left_stick,
            right_stick,
            window,
        );
        rig.tick(&sample, dt, &mut transform);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DT: f32 = 1.0 / 60.0;

    fn rig_at_origin() -> (FreeFlyRig, Transform) {
        let mut rig = FreeFlyRig::default();
        let transform = Transform::default();
        rig.resync(&transform);
        (rig, transform)
    }

    fn quiet_sample() -> InputSample {
        InputSample {
            cursor_in_safe_area: true,
            ..default()
        }
    }

    #[test]
    fn zero_input_zero_dt_is_idempotent() {
        let (mut rig, mut transform) = rig_at_origin();
        let before_target = *rig.target();
        let before_displayed = *rig.displayed();
        rig.tick(&quiet_sample(), 0.0, &mut transform);
        assert_eq!(*rig.target(), before_target);
        assert_eq!(*rig.displayed(), before_displayed);
    }

    #[test]
    fn mouse_drag_beats_single_touch() {
        let (mut rig, mut transform) = rig_at_origin();
        let sample = InputSample {
            mouse_delta: Vec2::new(5.0, 0.0),
            rotate_button_held: true,
            cursor_in_safe_area: true,
            touch_deltas: vec![Vec2::new(0.0, 5.0)],
            ..default()
        };
        rig.tick(&sample, DT, &mut transform);
        assert!(rig.target().yaw > 0.0, "mouse delta must drive yaw");
        assert!(rig.target().pitch.abs() < 1e-6, "touch delta must be ignored");
    }

    #[test]
    fn single_touch_rotates_without_mouse_drag() {
        let (mut rig, mut transform) = rig_at_origin();
        let sample = InputSample {
            touch_deltas: vec![Vec2::new(4.0, 0.0)],
            cursor_in_safe_area: true,
            ..default()
        };
        rig.tick(&sample, DT, &mut transform);
        assert!(rig.target().yaw > 0.0);
    }

    #[test]
    fn right_stick_adds_on_top_of_mouse() {
        let (mut only_mouse, mut t1) = rig_at_origin();
        let (mut both, mut t2) = rig_at_origin();
        let mouse = InputSample {
            mouse_delta: Vec2::new(5.0, 0.0),
            rotate_button_held: true,
            cursor_in_safe_area: true,
            ..default()
        };
        let with_stick = InputSample {
            right_stick: Some(Vec2::new(1.0, 0.0)),
            ..mouse.clone()
        };
        only_mouse.tick(&mouse, DT, &mut t1);
        both.tick(&with_stick, DT, &mut t2);
        assert!(both.target().yaw > only_mouse.target().yaw);
    }

    #[test]
    fn cursor_outside_safe_area_blocks_mouse() {
        let (mut rig, mut transform) = rig_at_origin();
        let before = *rig.target();
        let sample = InputSample {
            mouse_delta: Vec2::new(25.0, 10.0),
            rotate_button_held: true,
            pan_button_held: true,
            cursor_in_safe_area: false,
            ..default()
        };
        rig.tick(&sample, DT, &mut transform);
        assert_eq!(rig.target().yaw, before.yaw);
        assert_eq!(rig.target().pitch, before.pitch);
        assert_eq!(rig.target().position, before.position);
    }

    #[test]
    fn vertical_inversion_convention_is_preserved() {
        // Flag off: vertical input is negated once (mouse-down looks down).
        let (mut rig, mut transform) = rig_at_origin();
        let down = InputSample {
            mouse_delta: Vec2::new(0.0, 5.0),
            rotate_button_held: true,
            cursor_in_safe_area: true,
            ..default()
        };
        rig.tick(&down, DT, &mut transform);
        assert!(rig.target().pitch < 0.0);

        // Flag on: the two negations cancel and the raw sign passes through.
        let (mut inverted, mut transform) = rig_at_origin();
        inverted.settings.invert_y = true;
        inverted.tick(&down, DT, &mut transform);
        assert!(inverted.target().pitch > 0.0);
    }

    #[test]
    fn two_finger_pan_averages_touch_deltas() {
        let (mut averaged, mut t1) = rig_at_origin();
        let (mut reference, mut t2) = rig_at_origin();
        let pair = InputSample {
            touch_deltas: vec![Vec2::new(2.0, 0.0), Vec2::new(4.0, 0.0)],
            cursor_in_safe_area: true,
            ..default()
        };
        let single_average = InputSample {
            touch_deltas: vec![Vec2::new(3.0, 0.0), Vec2::new(3.0, 0.0)],
            cursor_in_safe_area: true,
            ..default()
        };
        averaged.tick(&pair, DT, &mut t1);
        reference.tick(&single_average, DT, &mut t2);
        assert!(averaged.target().position.distance(reference.target().position) < 1e-6);
        assert!(averaged.target().position.x < 0.0, "pan opposes finger motion");
    }

    #[test]
    fn two_finger_pan_wins_over_mouse_and_keys() {
        let (mut rig, mut transform) = rig_at_origin();
        let sample = InputSample {
            touch_deltas: vec![Vec2::new(2.0, 0.0), Vec2::new(2.0, 0.0)],
            keyboard_dir: Vec3::new(0.0, 0.0, -1.0),
            pan_button_held: true,
            mouse_delta: Vec2::new(0.0, 9.0),
            cursor_in_safe_area: true,
            ..default()
        };
        rig.tick(&sample, DT, &mut transform);
        assert!(
            rig.target().position.z.abs() < 1e-6,
            "keyboard forward must be ignored"
        );
        assert!(rig.target().position.x < 0.0);
    }

    #[test]
    fn keyboard_and_left_stick_sum() {
        let (mut rig, mut transform) = rig_at_origin();
        let sample = InputSample {
            keyboard_dir: Vec3::new(1.0, 0.0, -1.0),
            left_stick: Some(Vec2::new(0.0, 1.0)),
            cursor_in_safe_area: true,
            ..default()
        };
        rig.tick(&sample, DT, &mut transform);
        let pos = rig.target().position;
        assert!(pos.x > 0.0);
        assert!(pos.z < 0.0, "W plus stick-forward must both push forward");
    }

    #[test]
    fn translation_moves_in_target_local_frame() {
        let (mut rig, mut transform) = rig_at_origin();
        // Spin the target 90° left first, then push forward.
        let spin = InputSample {
            mouse_delta: Vec2::new(-90.0 / (MOUSE_ROTATION_SCALE * 2.5), 0.0),
            rotate_button_held: true,
            cursor_in_safe_area: true,
            ..default()
        };
        rig.tick(&spin, DT, &mut transform);
        let yaw = rig.target().yaw;
        let forward = InputSample {
            keyboard_dir: Vec3::new(0.0, 0.0, -1.0),
            cursor_in_safe_area: true,
            ..default()
        };
        rig.tick(&forward, DT, &mut transform);
        let pos = rig.target().position;
        // Forward in the rotated target frame has a lateral component.
        let expected = Quat::from_rotation_y(yaw.to_radians()) * Vec3::NEG_Z;
        assert!(pos.normalize().dot(expected) > 0.999);
    }

    #[test]
    fn boost_one_doubles_boost_zero() {
        let forward = InputSample {
            keyboard_dir: Vec3::new(0.0, 0.0, -1.0),
            cursor_in_safe_area: true,
            ..default()
        };

        let (mut slow, mut t1) = rig_at_origin();
        slow.settings.boost = 0.0;
        slow.tick(&forward, DT, &mut t1);

        let (mut fast, mut t2) = rig_at_origin();
        fast.settings.boost = 1.0;
        fast.tick(&forward, DT, &mut t2);

        let ratio = fast.target().position.length() / slow.target().position.length();
        assert!((ratio - 2.0).abs() < 1e-5);
    }

    #[test]
    fn held_boost_key_is_ten_x() {
        let forward = InputSample {
            keyboard_dir: Vec3::new(0.0, 0.0, -1.0),
            cursor_in_safe_area: true,
            ..default()
        };
        let boosted = InputSample {
            boost_held: true,
            ..forward.clone()
        };

        let (mut plain, mut t1) = rig_at_origin();
        plain.tick(&forward, DT, &mut t1);
        let (mut held, mut t2) = rig_at_origin();
        held.tick(&boosted, DT, &mut t2);

        let ratio = held.target().position.length() / plain.target().position.length();
        assert!((ratio - 10.0).abs() < 1e-4);
    }

    #[test]
    fn scroll_wheel_nudges_boost() {
        let (mut rig, mut transform) = rig_at_origin();
        let before = rig.settings.boost;
        let sample = InputSample {
            scroll: 1.0,
            cursor_in_safe_area: true,
            ..default()
        };
        rig.tick(&sample, DT, &mut transform);
        assert!((rig.settings.boost - before - BOOST_WHEEL_STEP).abs() < 1e-6);
    }

    #[test]
    fn reset_restores_initial_exactly() {
        let mut rig = FreeFlyRig::default();
        let mut transform = Transform::from_xyz(3.0, 1.0, -2.0);
        rig.resync(&transform);
        let initial = *rig.initial();

        // Accumulate drift over many ticks.
        let drive = InputSample {
            keyboard_dir: Vec3::new(1.0, 0.0, -1.0),
            mouse_delta: Vec2::new(7.0, -2.0),
            rotate_button_held: true,
            cursor_in_safe_area: true,
            ..default()
        };
        for _ in 0..200 {
            rig.tick(&drive, DT, &mut transform);
        }
        assert!(rig.target().position.distance(initial.position) > 1.0);

        let reset = InputSample {
            reset_held: true,
            ..default()
        };
        rig.tick(&reset, DT, &mut transform);

        assert!(rig.target().position.distance(initial.position) < 1e-5);
        assert!(rig.displayed().position.distance(initial.position) < 1e-5);
        assert!(transform.translation.distance(initial.position) < 1e-5);
        assert!((rig.target().yaw - initial.yaw).abs() < 1e-3);
        assert!((rig.displayed().pitch - initial.pitch).abs() < 1e-3);
    }

    #[test]
    fn displayed_pose_converges_on_static_target() {
        let (mut rig, mut transform) = rig_at_origin();
        let push = InputSample {
            keyboard_dir: Vec3::new(0.0, 0.0, -1.0),
            cursor_in_safe_area: true,
            ..default()
        };
        rig.tick(&push, DT, &mut transform);
        let target = rig.target().position;
        let quiet = quiet_sample();
        for _ in 0..120 {
            rig.tick(&quiet, DT, &mut transform);
        }
        assert!(rig.displayed().position.distance(rig.target().position) < 1e-3);
        assert!(transform.translation.distance(target) < 1e-2);
    }
}
