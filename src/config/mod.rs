//! Configuration management for tdt

mod io;
mod types;

pub use types::*;

use anyhow::Result;
use std::path::Path;

use crate::error::Error;

impl Config {
    /// Load ~/.config/tdt/config.toml, or return defaults if not found
    pub fn load() -> Result<Self> {
        io::load()
    }

    /// Load configuration from an explicit path
    pub fn load_from(path: &Path) -> Result<Self> {
        io::load_from(path)
    }

    /// Check value ranges.
    ///
    /// Returns the first invalid value found.
    pub fn validate(&self) -> Result<(), Error> {
        if self.window.hands == 0 {
            return Err(Error::InvalidConfig(
                "window.hands must be at least 1".to_string(),
            ));
        }
        if !self.stats.big_blind.is_finite() || self.stats.big_blind <= 0.0 {
            return Err(Error::InvalidConfig(format!(
                "stats.big_blind must be a positive number (got {})",
                self.stats.big_blind
            )));
        }
        Ok(())
    }
}
