//! Configuration loading and merging
//!
//! The primary file may list further documents under `external_config`. Those are
//! loaded first, in order, and the referring document is merged over them key by key
//! (Primary > last external > ... > first external > Defaults).

pub mod document;
pub mod error;
pub mod loader;
pub mod merge;

pub use error::ConfigError;
pub use loader::{write_default_config, ConfigLoader, CONFIG_FILE_CANDIDATES};
pub use merge::merge_shallow;
