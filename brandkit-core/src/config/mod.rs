//! YAML configuration. Every field is optional; missing ones take defaults.

pub mod schema;

use std::path::Path;

use crate::error::{BrandError, Result};
pub use schema::{Brand, BrandConfig, Paths};

pub fn load_from_yaml_str(s: &str) -> Result<BrandConfig> {
    if s.trim().is_empty() {
        return Ok(BrandConfig::default());
    }
    let cfg: BrandConfig = serde_yaml::from_str(s)?;
    Ok(cfg)
}

pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<BrandConfig> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(BrandError::missing("config", path));
    }
    let data = std::fs::read_to_string(path)?;
    load_from_yaml_str(&data)
}

/// Load `path` when given, otherwise the defaults.
pub fn load_or_default(path: Option<&Path>) -> Result<BrandConfig> {
    match path {
        Some(p) => load_from_path(p),
        None => Ok(BrandConfig::default()),
    }
}

pub fn to_yaml_string(cfg: &BrandConfig) -> Result<String> {
    Ok(serde_yaml::to_string(cfg)?)
}
