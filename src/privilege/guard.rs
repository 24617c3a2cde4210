use std::path::{Path, PathBuf};

use nix::unistd::Uid;
use tracing::{debug, error};

use crate::{
    error::{BacklightError, Result},
    privilege::Identity,
};

/// Root of the tree an elevated write may touch
pub const SYSFS_ROOT: &str = "/sys";

/// Scoped switch to the root user.
///
/// Acquiring the guard makes root the effective user; dropping it switches
/// back to the effective user captured at acquire time. A failed switch back
/// cannot be reported from `Drop` and is logged instead. Call
/// [`ElevationGuard::release`] to observe the result.
#[must_use = "privileges are restored as soon as the guard is dropped"]
pub struct ElevationGuard<'a, I: Identity + ?Sized> {
    identity: &'a I,
    restore_to: Uid,
    released: bool,
}

impl<'a, I: Identity + ?Sized> ElevationGuard<'a, I> {
    /// Switches the effective user to root.
    ///
    /// # Errors
    ///
    /// [`BacklightError::PermissionDenied`] when the switch is refused,
    /// typically because the binary is not owned by root or lacks the setuid
    /// bit. Nothing has changed at that point.
    pub fn acquire(identity: &'a I, program: &str) -> Result<Self> {
        let restore_to = identity.effective_uid();
        identity
            .set_effective_uid(Uid::from_raw(0))
            .map_err(|source| BacklightError::PermissionDenied {
                program: program.to_string(),
                source,
            })?;
        debug!(restore_to = restore_to.as_raw(), "elevated to root");

        Ok(Self {
            identity,
            restore_to,
            released: false,
        })
    }

    /// Switches back to the captured user and reports whether that worked.
    pub fn release(mut self) -> nix::Result<()> {
        self.released = true;
        self.identity.set_effective_uid(self.restore_to)
    }
}

impl<I: Identity + ?Sized> Drop for ElevationGuard<'_, I> {
    fn drop(&mut self) {
        if self.released {
            return;
        }
        if let Err(err) = self.identity.set_effective_uid(self.restore_to) {
            error!(%err, uid = self.restore_to.as_raw(), "failed to restore user after elevation");
        }
    }
}

/// Runs `action` as root and restores the original user afterwards.
///
/// The restore happens whether `action` succeeds or fails. A failed restore
/// is logged and does not change the returned result, since by then the
/// write has either happened or failed on its own terms.
pub fn with_elevation<I, T>(
    identity: &I,
    program: &str,
    action: impl FnOnce() -> Result<T>,
) -> Result<T>
where
    I: Identity + ?Sized,
{
    let guard = ElevationGuard::acquire(identity, program)?;
    let result = action();
    if let Err(err) = guard.release() {
        error!(%err, "failed to restore user after elevation");
    } else {
        debug!("restored original user");
    }
    result
}

/// Makes the invoking user the effective user.
///
/// A setuid-root binary starts with root as its effective user. Dropping to
/// the real user keeps every read and the config lookup unprivileged, while
/// the saved set-user-ID still allows [`ElevationGuard::acquire`] later.
pub fn drop_privileges<I: Identity + ?Sized>(identity: &I, program: &str) -> Result<()> {
    let real = identity.real_uid();
    if identity.effective_uid() == real {
        return Ok(());
    }

    identity
        .set_effective_uid(real)
        .map_err(|source| BacklightError::PermissionDenied {
            program: program.to_string(),
            source,
        })?;
    debug!(uid = real.as_raw(), "dropped to invoking user");

    Ok(())
}

/// Resolves `path` and checks that the result lies inside `root`.
///
/// Symlinks are resolved first, so a sysfs class link pointing into
/// `/sys/devices` passes while a user-supplied tree elsewhere does not.
/// Callers must write through the returned path: the original one may be a
/// link the invoking user can swap between this check and the write.
///
/// # Errors
///
/// * [`BacklightError::Write`] - `path` cannot be resolved
/// * [`BacklightError::ElevationConfinement`] - it resolves outside `root`
pub fn ensure_confined(path: &Path, root: &Path) -> Result<PathBuf> {
    let resolved = path
        .canonicalize()
        .map_err(|source| BacklightError::Write {
            path: path.to_path_buf(),
            source,
        })?;

    if resolved.starts_with(root) {
        Ok(resolved)
    } else {
        Err(BacklightError::ElevationConfinement {
            path: resolved,
            root: root.to_path_buf(),
        })
    }
}
