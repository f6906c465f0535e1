//! Filesystem utilities for promptcraft.
//!
//! Local state (the project list, exported plans) is written atomically so a
//! crash never leaves a half-written file behind.

pub mod atomic;

pub use atomic::atomic_write_file;
