//! Config management use case

use crate::error::Result;
use crate::infrastructure::Config;
use std::path::Path;

/// Service for inspecting and creating configuration files
pub struct ConfigService;

impl ConfigService {
    /// The effective configuration as TOML
    pub fn show(config: &Config) -> Result<String> {
        config.to_toml()
    }

    /// Write a default configuration file at `path`
    pub fn init(path: &Path) -> Result<()> {
        Config::default().save_to_file(path)
    }
}
