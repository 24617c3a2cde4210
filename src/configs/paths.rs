use anyhow::{Context, Result, anyhow};
use std::env;
use std::path::PathBuf;

const BACKLIGHT_CONFIG_NAME: &str = "backlight.toml";
const BACKLIGHT_APP_NAME: &str = "backlight";

/// Expands a path with tilde (~) and environment variable substitution
///
/// This function handles shell-style path expansion:
/// - `~` → user's home directory
/// - `~/path` → path relative to home directory
/// - `$VAR/path` → expands environment variable VAR
/// - `${VAR}/path` → expands environment variable VAR (brace syntax)
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use backlight::configs::expand_path;
///
/// # fn main() -> anyhow::Result<()> {
/// let expanded = expand_path(PathBuf::from("~/.config/backlight/backlight.toml"))?;
/// // Returns: /home/username/.config/backlight/backlight.toml
/// # Ok(())
/// # }
/// ```
pub fn expand_path(path: PathBuf) -> Result<PathBuf> {
    let path_str = path
        .to_str()
        .context("Path contains invalid UTF-8 characters")?;

    let expanded = shellexpand::full(path_str).context("Failed to expand path")?;

    Ok(PathBuf::from(expanded.as_ref()))
}

/// Returns the default config directory
///
/// Respects XDG Base Directory Specification:
/// - Checks `$XDG_CONFIG_HOME` environment variable
/// - Falls back to `~/.config/backlight` if:
///   - XDG_CONFIG_HOME is not set
///   - XDG_CONFIG_HOME is empty string
///   - XDG_CONFIG_HOME is relative path (must be absolute per XDG spec)
pub fn get_default_config_dir() -> Result<PathBuf> {
    if let Ok(xdg_config) = env::var("XDG_CONFIG_HOME")
        && !xdg_config.is_empty()
    {
        let path = PathBuf::from(&xdg_config);
        if path.is_absolute() {
            return Ok(path.join(BACKLIGHT_APP_NAME));
        }
    }

    dirs::home_dir()
        .map(|dir| dir.join(".config").join(BACKLIGHT_APP_NAME))
        .context("Failed to determine home directory")
}

/// Finds the config file using the following search order:
///
/// 1. CLI argument path (if provided) - returns error if specified but doesn't exist
/// 2. XDG config directory: `~/.config/backlight/backlight.toml`
///
/// Returns `Ok(Some(path))` if config found, `Ok(None)` if nothing was found via
/// auto-discovery, or `Err` if the CLI path was given but doesn't exist.
pub fn find_config_file(cli_path: Option<PathBuf>) -> Result<Option<PathBuf>> {
    if let Some(path) = cli_path {
        if path.exists() {
            return Ok(Some(path));
        } else {
            return Err(anyhow!("Specified config file does not exist: {:?}", path));
        }
    }

    // A missing home directory only means there is nothing to discover
    let Ok(config_dir) = get_default_config_dir() else {
        return Ok(None);
    };

    let xdg_config_path = config_dir.join(BACKLIGHT_CONFIG_NAME);
    if xdg_config_path.exists() {
        return Ok(Some(xdg_config_path));
    }

    Ok(None)
}
