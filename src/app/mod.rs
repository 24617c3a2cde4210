mod run;

pub use run::run;

use std::path::PathBuf;

use tracing::{debug, info};

use crate::{
    brightness::{Adjustment, Operation},
    configs::Config,
    device::{Device, DeviceSelector, attributes::write_integer, locate_device},
    error::Result,
    privilege::{Identity, SYSFS_ROOT, ensure_confined, with_elevation},
};

pub struct App {
    pub config: Config,
    /// Program name shown in permission errors
    pub program: String,
    /// Tree an elevated write has to stay inside
    pub confine_to: PathBuf,
}

impl App {
    pub fn new(config: Config, program: impl Into<String>) -> App {
        Self {
            config,
            program: program.into(),
            confine_to: PathBuf::from(SYSFS_ROOT),
        }
    }

    pub fn with_confinement(mut self, root: impl Into<PathBuf>) -> App {
        self.confine_to = root.into();
        self
    }

    pub fn locate_device(&self) -> Result<Device> {
        let selector = DeviceSelector::from(self.config.device.clone());
        locate_device(&self.config.base_dir, &selector)
    }

    /// Reads the device state, applies `operation` and writes the new value
    /// when it differs from the current one.
    ///
    /// Unchanged brightness never touches `identity`, so reads work without
    /// any elevation capability.
    pub fn apply<I: Identity + ?Sized>(
        &self,
        operation: Operation,
        identity: &I,
    ) -> Result<Adjustment> {
        let device = self.locate_device()?;
        debug!(root = %device.root().display(), "using backlight device");
        let state = device.state()?;
        let adjustment = state.apply(operation)?;
        debug!(
            %operation,
            current = state.current,
            max = state.max,
            new = adjustment.value,
            "computed brightness"
        );

        if adjustment.value == state.current {
            debug!("brightness unchanged, skipping write");
        } else {
            self.write(&device, adjustment.value, identity)?;
            info!(device = device.name(), value = adjustment.value, "brightness updated");
        }

        Ok(adjustment)
    }

    fn write<I: Identity + ?Sized>(&self, device: &Device, value: u64, identity: &I) -> Result<()> {
        if !self.config.elevate {
            return device.set_brightness(value);
        }

        let target = ensure_confined(&device.brightness_path(), &self.confine_to)?;
        with_elevation(identity, &self.program, || write_integer(value, &target))
    }
}
