pub mod app;
pub mod brightness;
pub mod cli;
pub mod configs;
pub mod device;
pub mod error;
pub mod exit_code;
pub mod privilege;

pub use app::App;
pub use configs::Config;

pub use brightness::{Adjustment, BrightnessState, Operation};
pub use device::{Device, DeviceSelector, locate_device};
pub use error::BacklightError;

pub use configs::{find_config_file, load_config, validate_config};
