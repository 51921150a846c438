use bevy::prelude::*;
use bevy::window::PresentMode;

/// Window settings for the demo viewer.
pub fn create_window_config() -> Window {
    Window {
        title: "free-fly camera".into(),
        present_mode: PresentMode::AutoVsync,
        ..default()
    }
}
