//! Application setup for the camera rig plugin and the demo viewer.

/// Plugin wiring, demo app construction, and scene/UI setup.
pub mod app_setup;

/// JSON-loadable camera tuning asset and its loader systems.
pub mod tuning;

/// Window configuration for the demo viewer.
pub mod window_config;
