use serial_test::serial;
use std::env;
use std::fs;
use std::path::PathBuf;
use backlight::configs::paths::{expand_path, find_config_file, get_default_config_dir};
use tempfile::TempDir;

#[test]
fn test_get_default_config_dir() {
    let config_dir = get_default_config_dir().expect("Should get config dir");
    assert!(config_dir.ends_with("backlight"));
}

#[test]
#[serial]
fn test_xdg_config_home_valid_absolute() {
    unsafe {
        env::set_var("XDG_CONFIG_HOME", "/custom/config");
    }
    let dir = get_default_config_dir().unwrap();
    assert_eq!(dir, PathBuf::from("/custom/config/backlight"));
    unsafe {
        env::remove_var("XDG_CONFIG_HOME");
    }
}

#[test]
#[serial]
fn test_xdg_config_home_empty_string() {
    unsafe {
        env::set_var("XDG_CONFIG_HOME", "");
    }
    let dir = get_default_config_dir().unwrap();
    assert!(dir.to_str().unwrap().contains(".config/backlight"));
    unsafe {
        env::remove_var("XDG_CONFIG_HOME");
    }
}

#[test]
#[serial]
fn test_xdg_config_home_relative_path() {
    unsafe {
        env::set_var("XDG_CONFIG_HOME", "relative/path");
    }
    let dir = get_default_config_dir().unwrap();
    assert!(dir.is_absolute());
    assert!(dir.to_str().unwrap().contains(".config/backlight"));
    unsafe {
        env::remove_var("XDG_CONFIG_HOME");
    }
}

// ============================================================================
// find_config_file() Tests - Priority: CLI → XDG
// ============================================================================

#[test]
fn test_find_config_file_with_cli_path_exists() {
    let temp_dir = TempDir::new().unwrap();
    let temp_config = temp_dir.path().join("custom.toml");
    fs::write(&temp_config, "# test config").expect("Failed to create temp config");

    let result = find_config_file(Some(temp_config.clone()));
    assert_eq!(result.unwrap(), Some(temp_config));
}

#[test]
fn test_find_config_file_with_cli_path_missing() {
    let nonexistent = PathBuf::from("/tmp/nonexistent_backlight_config_12345.toml");

    let result = find_config_file(Some(nonexistent.clone()));
    assert!(result.is_err());

    let err_msg = result.unwrap_err().to_string();
    assert!(
        err_msg.contains("does not exist"),
        "Error should mention file doesn't exist: {}",
        err_msg
    );
    assert!(
        err_msg.contains(&nonexistent.to_string_lossy().to_string()),
        "Error should show the path: {}",
        err_msg
    );
}

#[test]
#[serial]
fn test_find_config_file_in_xdg_dir() {
    let temp_dir = TempDir::new().unwrap();
    let config_file = temp_dir.path().join("backlight").join("backlight.toml");
    fs::create_dir_all(config_file.parent().unwrap()).unwrap();
    fs::write(&config_file, "elevate = false\n").unwrap();

    unsafe {
        env::set_var("XDG_CONFIG_HOME", temp_dir.path());
    }
    let result = find_config_file(None);
    unsafe {
        env::remove_var("XDG_CONFIG_HOME");
    }

    assert_eq!(result.unwrap(), Some(config_file));
}

#[test]
#[serial]
fn test_find_config_file_none_found() {
    let temp_dir = TempDir::new().unwrap();

    unsafe {
        env::set_var("XDG_CONFIG_HOME", temp_dir.path().join("nonexistent_xdg"));
    }
    let result = find_config_file(None);
    unsafe {
        env::remove_var("XDG_CONFIG_HOME");
    }

    assert_eq!(result.unwrap(), None);
}

// ============================================================================
// expand_path() Tests
// ============================================================================

#[test]
#[serial]
fn test_expand_path_env_var() {
    unsafe {
        env::set_var("BACKLIGHT_TEST_DIR", "/opt/backlight");
    }
    let expanded = expand_path(PathBuf::from("$BACKLIGHT_TEST_DIR/backlight.toml")).unwrap();
    unsafe {
        env::remove_var("BACKLIGHT_TEST_DIR");
    }

    assert_eq!(expanded, PathBuf::from("/opt/backlight/backlight.toml"));
}

#[test]
fn test_expand_path_plain_is_unchanged() {
    let expanded = expand_path(PathBuf::from("/etc/backlight.toml")).unwrap();
    assert_eq!(expanded, PathBuf::from("/etc/backlight.toml"));
}

#[test]
fn test_expand_path_undefined_var_fails() {
    let result = expand_path(PathBuf::from("$BACKLIGHT_SURELY_UNDEFINED_VAR/x.toml"));
    assert!(result.is_err());
}
