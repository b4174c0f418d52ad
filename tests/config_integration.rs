//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use quatcube::config::AppConfig;
use quatcube_core::{Projection, Vec3};
use serial_test::serial;
use std::path::PathBuf;

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("quatcube-config-{}-{}", name, std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("QUATCUBE_WINDOW__TITLE", "Test From Env");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.window.title, "Test From Env");
    std::env::remove_var("QUATCUBE_WINDOW__TITLE");
}

#[test]
#[serial]
fn test_env_override_nested_number() {
    std::env::set_var("QUATCUBE_CAMERA__FOV", "60.0");
    let config = AppConfig::load().unwrap();
    assert_eq!(config.camera.fov, 60.0);
    std::env::remove_var("QUATCUBE_CAMERA__FOV");
}

#[test]
#[serial]
fn test_default_file_matches_builtin_defaults() {
    std::env::remove_var("QUATCUBE_WINDOW__TITLE");
    std::env::remove_var("QUATCUBE_CAMERA__FOV");

    let cwd = std::env::current_dir().unwrap();
    assert!(cwd.join("config/default.toml").exists());

    let config = AppConfig::load_from(cwd.join("config")).unwrap();
    assert_eq!(config.window.width, 1200);
    assert_eq!(config.window.height, 800);
    assert_eq!(config.projection(), Projection::default());
    assert_eq!(config.model.cube_len, 10.0);
}

#[test]
#[serial]
fn test_user_file_overrides_default() {
    let dir = scratch_dir("user");
    std::fs::write(
        dir.join("default.toml"),
        "[window]\ntitle = \"Default\"\nwidth = 1200\nheight = 800\nvsync = true\n",
    )
    .unwrap();
    std::fs::write(
        dir.join("user.toml"),
        "[window]\ntitle = \"User\"\nwidth = 640\nheight = 480\nvsync = false\n\n[script]\nstep = 0.01\nshortest_path = true\n",
    )
    .unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    assert_eq!(config.window.title, "User");
    assert_eq!(config.window.width, 640);
    assert!(config.script.shortest_path);
    // Sections absent from both files keep built-in defaults
    assert_eq!(config.camera.depth_offset, 21.0);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
#[serial]
fn test_missing_dir_uses_defaults() {
    let config = AppConfig::load_from("does/not/exist").unwrap();
    assert_eq!(config.window.title, "Quat Toy");
    assert_eq!(config.input.rotate_speed, 0.01);
}

#[test]
#[serial]
fn test_invalid_value_is_error() {
    let dir = scratch_dir("invalid");
    std::fs::write(dir.join("default.toml"), "[camera]\nfov = \"wide\"\nnear = 1.0\ndepth_offset = 21.0\n").unwrap();

    let result = AppConfig::load_from(&dir);
    assert!(result.is_err());
    let message = result.unwrap_err().to_string();
    assert!(message.starts_with("Configuration error"), "{}", message);

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
#[serial]
fn test_negative_step_from_env_is_rejected() {
    std::env::set_var("QUATCUBE_SCRIPT__STEP", "-0.1");
    let result = AppConfig::load_from("does/not/exist");
    std::env::remove_var("QUATCUBE_SCRIPT__STEP");

    let message = result.unwrap_err().to_string();
    assert!(message.contains("script.step"), "{}", message);
}

#[test]
#[serial]
fn test_zero_height_is_rejected() {
    let dir = scratch_dir("zero-height");
    std::fs::write(
        dir.join("default.toml"),
        "[window]\ntitle = \"Flat\"\nwidth = 1200\nheight = 0\nvsync = true\n",
    )
    .unwrap();

    let result = AppConfig::load_from(&dir);
    std::fs::remove_dir_all(&dir).unwrap();

    let message = result.unwrap_err().to_string();
    assert!(message.starts_with("Configuration error"), "{}", message);
    assert!(message.contains("window"), "{}", message);
}

#[test]
#[serial]
fn test_script_target_from_user_file() {
    let dir = scratch_dir("target");
    std::fs::write(
        dir.join("user.toml"),
        "[script]\nstep = 0.25\nshortest_path = false\n\n[script.target]\nradians = 1.0\naxis = { x = 0.0, y = 0.0, z = 2.0 }\n",
    )
    .unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    std::fs::remove_dir_all(&dir).unwrap();

    let target = config.script.target.unwrap();
    assert_eq!(target.radians, 1.0);
    assert_eq!(target.axis, Vec3::new(0.0, 0.0, 2.0));
    assert_eq!(config.command_source(Some(target)).mode_name(), "scripted");
}
