//! flitz: configuration core of the flitz file explorer
//!
//! Loads the user's settings file together with any documents it includes and
//! produces a single, fully-defaulted [`Config`].

pub mod config;
pub mod domain;
pub mod utils;

pub use config::{ConfigError, ConfigLoader};
pub use domain::Config;
