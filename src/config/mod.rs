//! Configuration model for promptcraft.
//!
//! This module defines the Config struct that represents
//! `.promptcraft/config.yaml`. It supports forward-compatible YAML parsing
//! (unknown fields are ignored), defaults for every field, environment
//! overrides, and validation of config values.

mod model;
mod operations;


pub use model::{Config, DEFAULT_BASE_URL, DEFAULT_TIMEOUT_SECONDS};
