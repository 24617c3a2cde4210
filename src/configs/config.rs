use std::{fs, path::PathBuf};

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

use crate::device::BACKLIGHT_BASE_DIR;

#[derive(Debug, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Directory listing one entry per backlight device
    pub base_dir: PathBuf,
    /// Device to use instead of the first one found
    pub device: Option<String>,
    /// Switch to root for the write. Turn off when a udev rule already
    /// grants write access to the brightness file.
    pub elevate: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from(BACKLIGHT_BASE_DIR),
            device: None,
            elevate: true,
        }
    }
}

pub fn load_config(config_path: PathBuf) -> Result<Config> {
    let contents = fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read {:?}", config_path))?;

    let config: Config =
        toml::from_str(&contents).with_context(|| format!("Failed to parse {:?}", config_path))?;

    Ok(config)
}

pub fn validate_config(config: &Config) -> Result<()> {
    ensure!(
        !config.base_dir.as_os_str().is_empty(),
        "base_dir must not be empty"
    );

    if let Some(device) = &config.device {
        ensure!(!device.trim().is_empty(), "device must not be empty");
        ensure!(
            !device.contains('/'),
            "device '{}' must be a single directory name",
            device
        );
    }

    Ok(())
}
