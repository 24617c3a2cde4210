use std::{
    fs::{self, DirEntry},
    path::Path,
};

use tracing::{debug, trace};

use crate::{
    device::Device,
    error::{BacklightError, Result},
};

/// Kernel backlight class directory
pub const BACKLIGHT_BASE_DIR: &str = "/sys/class/backlight";

/// How to choose a device when the base directory lists several
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DeviceSelector {
    /// First usable entry in directory enumeration order.
    ///
    /// The order is whatever the filesystem returns, so with several devices
    /// present the pick is not stable across kernels or boots.
    #[default]
    First,
    /// Entry with exactly this name
    Named(String),
}

impl From<Option<String>> for DeviceSelector {
    fn from(name: Option<String>) -> Self {
        name.map_or(DeviceSelector::First, DeviceSelector::Named)
    }
}

/// Finds the backlight device directory under `base`
///
/// An entry qualifies when it is a directory or a symbolic link (sysfs class
/// entries are symlinks into `/sys/devices`) and its name does not start
/// with `.`. The link type is taken from the entry itself, links are not
/// followed.
///
/// # Errors
///
/// * [`BacklightError::DeviceDirectoryNotFound`] - `base` cannot be listed
/// * [`BacklightError::NoDevice`] - no entry qualifies
/// * [`BacklightError::DeviceNotFound`] - a named device does not qualify
pub fn locate_device(base: &Path, selector: &DeviceSelector) -> Result<Device> {
    let entries = fs::read_dir(base).map_err(|source| BacklightError::DeviceDirectoryNotFound {
        path: base.to_path_buf(),
        source,
    })?;

    for entry in entries.flatten() {
        if !is_device_entry(&entry) {
            trace!(entry = ?entry.file_name(), "skipping entry");
            continue;
        }

        let accepted = match selector {
            DeviceSelector::First => true,
            DeviceSelector::Named(name) => entry.file_name() == name.as_str(),
        };

        if accepted {
            let root = base.join(entry.file_name());
            debug!(device = %root.display(), "found backlight device");
            return Ok(Device::new(root));
        }
    }

    Err(match selector {
        DeviceSelector::First => BacklightError::NoDevice {
            path: base.to_path_buf(),
        },
        DeviceSelector::Named(name) => BacklightError::DeviceNotFound {
            name: name.clone(),
            base: base.to_path_buf(),
        },
    })
}

fn is_device_entry(entry: &DirEntry) -> bool {
    let hidden = entry.file_name().as_encoded_bytes().first() == Some(&b'.');
    if hidden {
        return false;
    }

    entry
        .file_type()
        .map(|file_type| file_type.is_dir() || file_type.is_symlink())
        .unwrap_or(false)
}
