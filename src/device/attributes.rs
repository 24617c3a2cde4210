use std::{
    fs::{File, OpenOptions},
    io::{Read, Write},
    path::Path,
};

use tracing::trace;

use crate::error::{BacklightError, Result};

// sysfs attributes are a single short line of text
const READ_BUFFER_SIZE: usize = 64;

/// Reads an unsigned integer from a sysfs attribute file.
///
/// Leading whitespace is skipped and the leading run of decimal digits is
/// parsed. Anything after the digits (usually a newline) is ignored.
///
/// # Errors
///
/// * [`BacklightError::Read`] - the file cannot be opened or read
/// * [`BacklightError::Invariant`] - the file is empty or holds no number
pub fn read_integer(path: &Path) -> Result<u64> {
    let read_error = |source| BacklightError::Read {
        path: path.to_path_buf(),
        source,
    };

    let mut file = File::open(path).map_err(read_error)?;
    let mut buf = [0u8; READ_BUFFER_SIZE];
    let read = file.read(&mut buf[..READ_BUFFER_SIZE - 1]).map_err(read_error)?;

    if read == 0 {
        return Err(BacklightError::Invariant(format!(
            "empty attribute file: {}",
            path.display()
        )));
    }

    let value = parse_leading_integer(&buf[..read]).ok_or_else(|| {
        BacklightError::Invariant(format!("no integer in attribute file: {}", path.display()))
    })?;
    trace!(path = %path.display(), value, "read attribute");

    Ok(value)
}

/// Writes an unsigned integer as decimal text to a sysfs attribute file.
///
/// The file is never created; it has to exist already.
///
/// # Errors
///
/// * [`BacklightError::Write`] - the file cannot be opened or the write fails
/// * [`BacklightError::Invariant`] - the kernel accepted only part of the text
pub fn write_integer(value: u64, path: &Path) -> Result<()> {
    let write_error = |source| BacklightError::Write {
        path: path.to_path_buf(),
        source,
    };

    let text = value.to_string();
    let mut file = OpenOptions::new()
        .write(true)
        .truncate(true)
        .open(path)
        .map_err(write_error)?;

    // sysfs stores handle a whole attribute per write call, no retry loop
    let written = file.write(text.as_bytes()).map_err(write_error)?;
    if written != text.len() {
        return Err(BacklightError::Invariant(format!(
            "short write to {}: {written} of {} bytes",
            path.display(),
            text.len()
        )));
    }
    trace!(path = %path.display(), value, "wrote attribute");

    Ok(())
}

/// Parses the leading decimal digits of `bytes`, after optional whitespace.
///
/// Returns `None` when there are no digits or the number does not fit `u64`.
///
/// # Examples
///
/// ```
/// use backlight::device::attributes::parse_leading_integer;
///
/// assert_eq!(parse_leading_integer(b"937\n"), Some(937));
/// assert_eq!(parse_leading_integer(b"  12 34"), Some(12));
/// assert_eq!(parse_leading_integer(b"\n"), None);
/// ```
#[doc(hidden)]
pub fn parse_leading_integer(bytes: &[u8]) -> Option<u64> {
    let start = bytes.iter().position(|b| !b.is_ascii_whitespace())?;
    let digits = &bytes[start..];
    let len = digits
        .iter()
        .position(|b| !b.is_ascii_digit())
        .unwrap_or(digits.len());

    if len == 0 {
        return None;
    }

    std::str::from_utf8(&digits[..len]).ok()?.parse().ok()
}
