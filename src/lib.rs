//! Free-fly camera rig for interactive 3-D viewports.
//!
//! Translates per-tick mouse, keyboard, touch, and gamepad samples into
//! smooth, framerate-independent camera motion, and registers active rigs
//! with an optional streaming session registry for remote control.

pub mod constants;
pub mod engine;
