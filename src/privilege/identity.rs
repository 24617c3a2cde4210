use nix::unistd::{Uid, geteuid, getuid, seteuid};

/// Access to the process user identity.
///
/// The elevation guard only talks to this trait, so its acquire/restore
/// ordering can be exercised without a setuid binary.
pub trait Identity {
    /// User that invoked the program
    fn real_uid(&self) -> Uid;

    /// User the process currently acts as
    fn effective_uid(&self) -> Uid;

    fn set_effective_uid(&self, uid: Uid) -> nix::Result<()>;
}

/// Identity of the running process, backed by `getuid`/`geteuid`/`seteuid`
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessIdentity;

impl Identity for ProcessIdentity {
    fn real_uid(&self) -> Uid {
        getuid()
    }

    fn effective_uid(&self) -> Uid {
        geteuid()
    }

    fn set_effective_uid(&self, uid: Uid) -> nix::Result<()> {
        seteuid(uid)
    }
}
