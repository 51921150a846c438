//! Input façade: device resolution and per-tick input sampling.
//!
//! The pointer, keyboard, and touch slots are Bevy input resources resolved
//! with a use-current-or-create policy; the controller slot is a claimed
//! gamepad entity. Each fixed tick the devices are snapshotted into an
//! [`sample::InputSample`] and all policy decisions happen from that value.

/// Device slot resolution and the active-gamepad claim.
pub mod devices;

/// Per-tick input snapshot read from the resolved devices.
pub mod sample;
