//! Default tuning values for the free-fly rig and its input mapping.

/// Movement sensitivity applied to every translation source (valid range 0.001–1)
pub const DEFAULT_MOVEMENT_SENSITIVITY: f32 = 0.1;

/// Default exponential speed boost; effective multiplier is 2^boost
pub const DEFAULT_BOOST: f32 = 3.5;

/// Seconds for the displayed position to close 99% of the gap to the target
pub const DEFAULT_POSITION_SMOOTH_TIME: f32 = 0.2;

/// Seconds for the displayed rotation to close 99% of the gap to the target
pub const DEFAULT_ROTATION_SMOOTH_TIME: f32 = 0.01;

/// Lower/upper clamp for sensitivity and smoothing-time tunables
pub const TUNABLE_MIN: f32 = 0.001;
pub const TUNABLE_MAX: f32 = 1.0;

/// Scales raw mouse pixel deltas into the ~0..1 sensitivity-curve domain
pub const MOUSE_ROTATION_SCALE: f32 = 0.05;

/// Scales raw touch pixel deltas into the ~0..1 sensitivity-curve domain
pub const TOUCH_ROTATION_SCALE: f32 = 0.05;

/// Right-stick rotation rate in curve-domain units per second at full deflection
pub const STICK_ROTATION_RATE: f32 = 30.0;

/// Scales mouse pixel deltas into local screen-plane pan units
pub const MOUSE_PAN_SCALE: f32 = 0.5;

/// Scales averaged two-finger touch deltas into local screen-plane pan units
pub const TOUCH_PAN_SCALE: f32 = 0.5;

/// Translation multiplier while the speed-boost key is held
pub const HELD_BOOST_MULTIPLIER: f32 = 10.0;

/// Boost exponent change per scroll-wheel line
pub const BOOST_WHEEL_STEP: f32 = 0.2;

/// Pixel-scroll events are worth this fraction of a line scroll
pub const PIXEL_SCROLL_FACTOR: f32 = 0.05;

/// Asset path the demo app loads camera tuning from
pub const TUNING_ASSET_PATH: &str = "camera_tuning.json";
