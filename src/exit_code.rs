use std::process::ExitCode;

/// Process exit statuses reported by the `backlight` binary.
///
/// | Status       | Code | Meaning                                             |
/// |--------------|------|-----------------------------------------------------|
/// | `Success`    | 0    | brightness printed (and written, if it changed)     |
/// | `Usage`      | 1    | malformed argument or configuration                 |
/// | `Permission` | 2    | switching to the privileged identity failed         |
/// | `File`       | 3    | device directory, device or attribute file missing  |
/// | `Abort`      | 134  | invariant violation; the process aborts instead     |
///
/// # Examples
/// ```
/// use backlight::exit_code::ExitStatus;
///
/// assert_eq!(ExitStatus::Success.code(), 0);
/// assert_eq!(ExitStatus::Usage.code(), 1);
/// assert_eq!(ExitStatus::Permission.code(), 2);
/// assert_eq!(ExitStatus::File.code(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Usage,
    Permission,
    File,
    Abort,
}

impl ExitStatus {
    pub fn code(self) -> u8 {
        match self {
            ExitStatus::Success => 0,
            ExitStatus::Usage => 1,
            ExitStatus::Permission => 2,
            ExitStatus::File => 3,
            // 128 + SIGABRT, what a shell reports for an aborted process
            ExitStatus::Abort => 134,
        }
    }
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        ExitCode::from(status.code())
    }
}
