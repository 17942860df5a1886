use crate::utils::errors::{AcmLookupError, Result};
use std::path::PathBuf;

pub struct AcmLookupPaths;
const PROGRAM_NAME: &str = "acm-lookup";

impl AcmLookupPaths {
    /// Get the config directory: ~/.config/acm-lookup/
    pub fn config_dir() -> Result<PathBuf> {
        dirs::config_dir()
            .map(|dir| dir.join(PROGRAM_NAME))
            .ok_or_else(|| AcmLookupError::Config("Cannot determine config directory".to_string()))
    }

    /// Get the config file path: ~/.config/acm-lookup/config.yaml
    pub fn config_file() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.yaml"))
    }
}

/// Expand a leading `~/` to the home directory
pub fn expand_tilde(path: &str) -> Result<PathBuf> {
    match path.strip_prefix("~/") {
        Some(rest) => dirs::home_dir()
            .map(|home| home.join(rest))
            .ok_or_else(|| AcmLookupError::Config("Cannot determine home directory".to_string())),
        None => Ok(PathBuf::from(path)),
    }
}
