//! Error types for backlight
//!
//! Every failure the tool can report maps onto one process exit status, see
//! [`BacklightError::exit_status`].

use std::{io, path::PathBuf};

use thiserror::Error;

use crate::exit_code::ExitStatus;

/// Main error type for backlight operations
#[derive(Error, Debug)]
pub enum BacklightError {
    /// Base directory of the backlight class is missing or unreadable
    #[error("directory does not exist: {}", .path.display())]
    DeviceDirectoryNotFound {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Base directory exists but holds no usable device entry
    #[error("cannot find a backlight device in {}", .path.display())]
    NoDevice { path: PathBuf },

    /// A device was requested by name and is not present
    #[error("backlight device '{name}' not found in {}", .base.display())]
    DeviceNotFound { name: String, base: PathBuf },

    /// Attribute file could not be opened or read
    #[error("cannot read from file: {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Attribute file could not be opened or written
    #[error("cannot write to file: {}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Switching identity failed
    #[error("cannot switch to the privileged user; check owner and setuid bit of {program}")]
    PermissionDenied {
        program: String,
        #[source]
        source: nix::Error,
    },

    /// Elevated write target resolved outside the sysfs tree
    #[error("refusing privileged write outside {}: {}", .root.display(), .path.display())]
    ElevationConfinement { path: PathBuf, root: PathBuf },

    /// Configuration file could not be located, parsed or validated
    #[error("Configuration error: {0}")]
    Config(String),

    /// Kernel or driver state that should never occur
    #[error("invariant violated: {0}")]
    Invariant(String),
}

impl BacklightError {
    pub fn exit_status(&self) -> ExitStatus {
        match self {
            BacklightError::DeviceDirectoryNotFound { .. }
            | BacklightError::NoDevice { .. }
            | BacklightError::DeviceNotFound { .. }
            | BacklightError::Read { .. }
            | BacklightError::Write { .. } => ExitStatus::File,
            BacklightError::PermissionDenied { .. }
            | BacklightError::ElevationConfinement { .. } => ExitStatus::Permission,
            BacklightError::Config(_) => ExitStatus::Usage,
            BacklightError::Invariant(_) => ExitStatus::Abort,
        }
    }

    /// Invariant violations abort the process instead of exiting normally
    pub fn is_invariant(&self) -> bool {
        matches!(self, BacklightError::Invariant(_))
    }
}

/// Result type alias for backlight operations
pub type Result<T> = std::result::Result<T, BacklightError>;
