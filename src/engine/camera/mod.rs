//! Free-fly camera rig: pose state, smoothing, and the per-tick update.
//!
//! Three pose snapshots cooperate per rig: `initial` (captured on
//! activation, restored on reset), `target` (accumulates raw input
//! deltas), and `displayed` (exponentially chases the target and is the
//! value written to the transform).

/// Camera pose snapshot and exponential smoothing math.
pub mod pose;

/// Keyframed response curve mapping input magnitude to a sensitivity multiplier.
pub mod sensitivity;

/// The rig component, its tunables, and the fixed-tick update systems.
pub mod free_fly;
