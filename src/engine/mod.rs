//! Engine-facing modules of the free-fly camera rig.
//!
//! The rig is a plain Bevy plugin: input sampling and the pose update run
//! once per fixed simulation tick, session registration reacts to rig
//! component add/remove on the main schedule.

pub mod camera;
pub mod core;
pub mod input;
pub mod session;
