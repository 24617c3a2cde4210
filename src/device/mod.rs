pub mod attributes;
pub mod locator;

use std::path::{Path, PathBuf};

use crate::{
    brightness::BrightnessState,
    device::attributes::{read_integer, write_integer},
    error::{BacklightError, Result},
};

pub use locator::{BACKLIGHT_BASE_DIR, DeviceSelector, locate_device};

const MAX_BRIGHTNESS_FILE: &str = "max_brightness";
const BRIGHTNESS_FILE: &str = "brightness";

/// One backlight device, rooted at its sysfs directory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Device {
    root: PathBuf,
}

impl Device {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn name(&self) -> Option<&str> {
        self.root.file_name().and_then(|name| name.to_str())
    }

    pub fn max_brightness_path(&self) -> PathBuf {
        self.root.join(MAX_BRIGHTNESS_FILE)
    }

    pub fn brightness_path(&self) -> PathBuf {
        self.root.join(BRIGHTNESS_FILE)
    }

    pub fn max_brightness(&self) -> Result<u64> {
        read_integer(&self.max_brightness_path())
    }

    pub fn brightness(&self) -> Result<u64> {
        read_integer(&self.brightness_path())
    }

    pub fn set_brightness(&self, value: u64) -> Result<()> {
        write_integer(value, &self.brightness_path())
    }

    /// Reads the maximum, then the current value.
    ///
    /// A zero maximum is rejected here so nothing downstream divides by it.
    pub fn state(&self) -> Result<BrightnessState> {
        let max = self.max_brightness()?;
        if max == 0 {
            return Err(BacklightError::Invariant(format!(
                "{} reports 0",
                self.max_brightness_path().display()
            )));
        }
        let current = self.brightness()?;

        Ok(BrightnessState { current, max })
    }
}
