mod guard;
mod identity;

pub use guard::{ElevationGuard, SYSFS_ROOT, drop_privileges, ensure_confined, with_elevation};
pub use identity::{Identity, ProcessIdentity};
