/// Shared tuning defaults for the camera rig and input mapping.
pub mod camera_settings;
