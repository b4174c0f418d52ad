//! Application configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. `config/default.toml` (version controlled)
//! 2. `config/user.toml` (gitignored, user overrides)
//! 3. Environment variables (`QUATCUBE_SECTION__KEY`)

use figment::{Figment, providers::{Format, Toml, Env}};
use quatcube_core::{CommandSource, CubeModel, Projection, ScriptTarget, SlerpScript};
use serde::{Serialize, Deserialize};
use std::path::Path;

/// Environment variable prefix
pub const ENV_PREFIX: &str = "QUATCUBE_";

/// Main application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// Window configuration
    #[serde(default)]
    pub window: WindowConfig,
    /// Camera configuration
    #[serde(default)]
    pub camera: CameraConfig,
    /// Cube model configuration
    #[serde(default)]
    pub model: ModelConfig,
    /// Input configuration
    #[serde(default)]
    pub input: InputConfig,
    /// Scripted rotation configuration
    #[serde(default)]
    pub script: ScriptConfig,
    /// Rendering configuration
    #[serde(default)]
    pub rendering: RenderingConfig,
    /// Debug configuration
    #[serde(default)]
    pub debug: DebugConfig,
}

impl AppConfig {
    /// Load configuration from default locations
    ///
    /// Priority (lowest to highest):
    /// 1. `config/default.toml`
    /// 2. `config/user.toml`
    /// 3. Environment variables (`QUATCUBE_*`)
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Figment::new();

        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }

        // Optional
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }

        // QUATCUBE_WINDOW__TITLE=Test -> window.title = "Test"
        figment = figment.merge(Env::prefixed(ENV_PREFIX).split("__"));

        let config: AppConfig = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the projection and command sources cannot work with
    ///
    /// Extraction only checks types; this checks ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width == 0 || self.window.height == 0 {
            return Err(ConfigError::invalid(
                "window",
                format!("size must be non-zero, got {}x{}", self.window.width, self.window.height),
            ));
        }

        let fov = self.camera.fov;
        if !(fov > 0.0 && fov < 180.0) {
            return Err(ConfigError::invalid("camera.fov", format!("must be in (0, 180) degrees, got {}", fov)));
        }
        if !(self.camera.near > 0.0 && self.camera.near.is_finite()) {
            return Err(ConfigError::invalid("camera.near", format!("must be positive, got {}", self.camera.near)));
        }
        if !self.camera.depth_offset.is_finite() {
            return Err(ConfigError::invalid("camera.depth_offset", "must be finite"));
        }

        if !(self.model.cube_len > 0.0 && self.model.cube_len.is_finite()) {
            return Err(ConfigError::invalid("model.cube_len", format!("must be positive, got {}", self.model.cube_len)));
        }
        if !self.input.rotate_speed.is_finite() {
            return Err(ConfigError::invalid("input.rotate_speed", "must be finite"));
        }

        // t must increase every frame and reach 1
        let step = self.script.step;
        if !(step > 0.0 && step.is_finite()) {
            return Err(ConfigError::invalid("script.step", format!("must be positive, got {}", step)));
        }
        if let Some(target) = &self.script.target {
            if !target.radians.is_finite() {
                return Err(ConfigError::invalid("script.target.radians", "must be finite"));
            }
            if !target.axis.is_finite() || target.axis.length_squared() == 0.0 {
                return Err(ConfigError::invalid("script.target.axis", "must be finite and non-zero"));
            }
        }

        Ok(())
    }

    /// Projection for the configured window and camera
    pub fn projection(&self) -> Projection {
        Projection::default()
            .with_screen(self.window.width, self.window.height)
            .with_fov(self.camera.fov)
            .with_near(self.camera.near)
            .with_depth_offset(self.camera.depth_offset)
    }

    /// Rest-pose cube for the configured edge length
    pub fn cube(&self) -> CubeModel {
        CubeModel::new(self.model.cube_len)
    }

    /// Command source: scripted when a target is given, interactive otherwise
    pub fn command_source(&self, target: Option<ScriptTarget>) -> CommandSource {
        match target {
            Some(target) => CommandSource::scripted(
                SlerpScript::new(target, self.script.step)
                    .with_shortest_path(self.script.shortest_path),
            ),
            None => CommandSource::interactive(self.input.rotate_speed),
        }
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window title
    pub title: String,
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Enable VSync
    pub vsync: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Quat Toy".to_string(),
            width: 1200,
            height: 800,
            vsync: true,
        }
    }
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Field of view in degrees
    pub fov: f32,
    /// Near plane distance
    pub near: f32,
    /// Added to z before the perspective divide
    pub depth_offset: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov: 90.0,
            near: 1.0,
            depth_offset: 21.0,
        }
    }
}

/// Cube model configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Cube edge length
    pub cube_len: f32,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self { cube_len: 10.0 }
    }
}

/// Input configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InputConfig {
    /// Radians per held command per frame
    pub rotate_speed: f32,
}

impl Default for InputConfig {
    fn default() -> Self {
        Self { rotate_speed: 0.01 }
    }
}

/// Scripted rotation configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptConfig {
    /// Interpolation parameter increment per frame
    pub step: f32,
    /// Take the shorter 4D arc toward the target
    pub shortest_path: bool,
    /// Target used when none is given on the command line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target: Option<ScriptTarget>,
}

impl Default for ScriptConfig {
    fn default() -> Self {
        Self {
            step: 0.005,
            shortest_path: false,
            target: None,
        }
    }
}

/// Rendering configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderingConfig {
    /// Background color [r, g, b, a]
    pub background_color: [f32; 4],
    /// Draw a small cross at the screen center
    pub show_center_marker: bool,
}

impl Default for RenderingConfig {
    fn default() -> Self {
        Self {
            background_color: [0.0, 0.0, 0.0, 1.0],
            show_center_marker: true,
        }
    }
}

/// Debug configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DebugConfig {
    /// Log level (error, warn, info, debug, trace)
    pub log_level: String,
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

/// Configuration error
#[derive(Debug)]
pub struct ConfigError {
    message: String,
}

impl ConfigError {
    fn invalid(field: &str, reason: impl std::fmt::Display) -> Self {
        ConfigError {
            message: format!("invalid {}: {}", field, reason),
        }
    }
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError {
            message: e.to_string(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Configuration error: {}", self.message)
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use quatcube_core::Vec3;

    #[test]
    fn test_default_config() {
        let config = AppConfig::default();
        assert_eq!(config.window.width, 1200);
        assert_eq!(config.window.height, 800);
        assert_eq!(config.camera.fov, 90.0);
        assert_eq!(config.camera.depth_offset, 21.0);
        assert_eq!(config.model.cube_len, 10.0);
        assert!(!config.script.shortest_path);
    }

    #[test]
    fn test_config_serialization() {
        let config = AppConfig::default();
        let toml = toml::to_string(&config).unwrap();
        assert!(toml.contains("title"));
        assert!(toml.contains("depth_offset"));
        assert!(toml.contains("rotate_speed"));
    }

    #[test]
    fn test_projection_from_config() {
        let projection = AppConfig::default().projection();
        assert_eq!(projection, Projection::default());
    }

    #[test]
    fn test_command_source_selection() {
        let config = AppConfig::default();
        assert_eq!(config.command_source(None).mode_name(), "interactive");

        let target = ScriptTarget::new(1.0, Vec3::Y);
        assert_eq!(config.command_source(Some(target)).mode_name(), "scripted");
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_step() {
        for step in [0.0, -0.1, f32::NAN, f32::INFINITY] {
            let mut config = AppConfig::default();
            config.script.step = step;
            let err = config.validate().unwrap_err();
            assert!(err.to_string().contains("script.step"), "{}", err);
        }
    }

    #[test]
    fn test_validate_rejects_bad_screen_and_camera() {
        let mut config = AppConfig::default();
        config.window.height = 0;
        assert!(config.validate().unwrap_err().to_string().contains("window"));

        for fov in [0.0, 180.0, -30.0] {
            let mut config = AppConfig::default();
            config.camera.fov = fov;
            assert!(config.validate().unwrap_err().to_string().contains("camera.fov"));
        }

        let mut config = AppConfig::default();
        config.camera.near = 0.0;
        assert!(config.validate().unwrap_err().to_string().contains("camera.near"));
    }

    #[test]
    fn test_validate_rejects_zero_axis_target() {
        let mut config = AppConfig::default();
        config.script.target = Some(ScriptTarget::new(1.0, Vec3::ZERO));
        assert!(config.validate().unwrap_err().to_string().contains("script.target.axis"));

        config.script.target = Some(ScriptTarget::new(1.0, Vec3::Z));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_script_target_from_toml() {
        let config: AppConfig = Figment::new()
            .merge(Toml::string(
                "[script]\nstep = 0.1\nshortest_path = false\ntarget = { radians = 1.5, axis = { x = 0.0, y = 1.0, z = 0.0 } }",
            ))
            .extract()
            .unwrap();
        assert_eq!(config.script.target, Some(ScriptTarget::new(1.5, Vec3::Y)));
    }

    #[test]
    fn test_missing_sections_use_defaults() {
        let config: AppConfig = Figment::new()
            .merge(Toml::string("[window]\ntitle = \"Partial\"\nwidth = 640\nheight = 480\nvsync = false"))
            .extract()
            .unwrap();
        assert_eq!(config.window.width, 640);
        assert_eq!(config.camera.near, 1.0);
        assert_eq!(config.input.rotate_speed, 0.01);
        assert_eq!(config.script.target, None);
    }
}
