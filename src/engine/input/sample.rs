use bevy::input::mouse::{AccumulatedMouseMotion, AccumulatedMouseScroll, MouseScrollUnit};
use bevy::prelude::*;

use crate::constants::camera_settings::PIXEL_SCROLL_FACTOR;
use crate::engine::camera::free_fly::FreeFlySettings;

/// One tick's snapshot of every input device the rig reads.
///
/// Pure data: building it is the only place the devices are polled, and
/// the rig's source-priority policy runs entirely off this value.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InputSample {
    /// Pointer delta accumulated since the last render frame.
    pub mouse_delta: Vec2,
    pub rotate_button_held: bool,
    pub pan_button_held: bool,
    /// Whether the cursor lies inside the safe display area. False when
    /// there is no cursor at all.
    pub cursor_in_safe_area: bool,
    /// Deltas of all currently active touches, in touch order.
    pub touch_deltas: Vec<Vec2>,
    /// Summed WASD+QE unit axes in the camera-local convention
    /// (-Z forward, +X right, +Y up).
    pub keyboard_dir: Vec3,
    pub boost_held: bool,
    pub reset_held: bool,
    /// Scroll-wheel movement in lines.
    pub scroll: f32,
    pub left_stick: Option<Vec2>,
    pub right_stick: Option<Vec2>,
}

impl InputSample {
    /// Polls the resolved devices once for the given rig settings.
    #[allow(clippy::too_many_arguments)]
    pub fn read(
        settings: &FreeFlySettings,
        mouse_buttons: &ButtonInput<MouseButton>,
        keyboard: &ButtonInput<KeyCode>,
        touches: &Touches,
        mouse_motion: &AccumulatedMouseMotion,
        mouse_scroll: &AccumulatedMouseScroll,
        left_stick: Option<Vec2>,
        right_stick: Option<Vec2>,
        window: Option<&Window>,
    ) -> Self {
        let cursor_in_safe_area = window
            .is_some_and(|window| cursor_in_safe_area(window, settings.safe_area_margin));

        let scroll = match mouse_scroll.unit {
            MouseScrollUnit::Line => mouse_scroll.delta.y,
            MouseScrollUnit::Pixel => mouse_scroll.delta.y * PIXEL_SCROLL_FACTOR,
        };

        Self {
            mouse_delta: mouse_motion.delta,
            rotate_button_held: mouse_buttons.pressed(settings.rotate_button),
            pan_button_held: mouse_buttons.pressed(settings.pan_button),
            cursor_in_safe_area,
            touch_deltas: touches.iter().map(|touch| touch.delta()).collect(),
            keyboard_dir: keyboard_direction(keyboard),
            boost_held: keyboard.pressed(settings.boost_key),
            reset_held: keyboard.pressed(settings.reset_key),
            scroll,
            left_stick,
            right_stick,
        }
    }
}

/// Sums the held WASD+QE axes into a camera-local direction vector.
pub fn keyboard_direction(keyboard: &ButtonInput<KeyCode>) -> Vec3 {
    let mut dir = Vec3::ZERO;
    if keyboard.pressed(KeyCode::KeyW) {
        dir.z -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyS) {
        dir.z += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyA) {
        dir.x -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyD) {
        dir.x += 1.0;
    }
    if keyboard.pressed(KeyCode::KeyQ) {
        dir.y -= 1.0;
    }
    if keyboard.pressed(KeyCode::KeyE) {
        dir.y += 1.0;
    }
    dir
}

/// True when the cursor sits inside the window rect inset by `margin`
/// logical pixels on every side.
pub fn cursor_in_safe_area(window: &Window, margin: f32) -> bool {
    let Some(position) = window.cursor_position() else {
        return false;
    };
    position.x >= margin
        && position.y >= margin
        && position.x <= window.width() - margin
        && position.y <= window.height() - margin
}
