//! Simulation configuration
//!
//! Configuration is loaded from multiple sources with the following priority (lowest to highest):
//! 1. built-in defaults
//! 2. `config/default.toml`
//! 3. `config/user.toml`
//! 4. Environment variables (`BOUNCE_SECTION__KEY`)

use crate::geo::Float;
use crate::world::World;
use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct SimulationConfig {
    #[serde(default)]
    pub world: WorldConfig,
    #[serde(default)]
    pub bodies: BodiesConfig,
    #[serde(default)]
    pub run: RunConfig,
}

/// Size of the world in world units
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    pub width: Float,
    pub height: Float,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 500.0,
        }
    }
}

/// Bouncing rectangles spawned at startup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BodiesConfig {
    pub count: usize,
    pub width: Float,
    pub height: Float,
}

impl Default for BodiesConfig {
    fn default() -> Self {
        Self {
            count: 20,
            width: 10.0,
            height: 10.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RunConfig {
    /// Number of frames to simulate
    pub frames: u64,
    /// Pause between two frames
    pub frame_interval_ms: u64,
    /// Fixed seed for reproducible runs, random when unset
    pub seed: Option<u64>,
    /// Canvas size in characters
    pub columns: usize,
    pub rows: usize,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            frames: 300,
            frame_interval_ms: 33,
            seed: None,
            columns: 60,
            rows: 30,
        }
    }
}

impl SimulationConfig {
    /// Load configuration from the `config` directory
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from("config")
    }

    /// Load configuration from a specific config directory
    pub fn load_from<P: AsRef<Path>>(config_dir: P) -> Result<Self, ConfigError> {
        let config_dir = config_dir.as_ref();
        let default_path = config_dir.join("default.toml");
        let user_path = config_dir.join("user.toml");

        let mut figment = Self::defaults();
        if default_path.exists() {
            figment = figment.merge(Toml::file(&default_path));
        }
        if user_path.exists() {
            figment = figment.merge(Toml::file(&user_path));
        }
        // BOUNCE_WORLD__WIDTH=800 -> world.width = 800
        figment = figment.merge(Env::prefixed("BOUNCE_").split("__"));

        Self::from_figment(figment)
    }

    /// figment holding only the built-in defaults
    pub fn defaults() -> Figment {
        Figment::from(Serialized::defaults(SimulationConfig::default()))
    }

    pub fn from_figment(figment: Figment) -> Result<Self, ConfigError> {
        let config: SimulationConfig = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let world = &self.world;
        if !(world.width.is_finite() && world.width > 0.0 && world.height.is_finite() && world.height > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "world size must be positive, got {} x {}",
                world.width, world.height
            )));
        }
        let bodies = &self.bodies;
        if !(bodies.width.is_finite() && bodies.width >= 0.0 && bodies.height.is_finite() && bodies.height >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "body size must not be negative, got {} x {}",
                bodies.width, bodies.height
            )));
        }
        if self.run.columns == 0 || self.run.rows == 0 {
            return Err(ConfigError::Invalid(format!(
                "canvas needs at least one cell, got {} x {}",
                self.run.columns, self.run.rows
            )));
        }
        Ok(())
    }

    /// Creates the configured world filled with bouncing rectangles.
    pub fn build_world<R: Rng + ?Sized>(&self, rng: &mut R) -> World {
        let mut world = World::new(self.world.width, self.world.height);
        world.populate(self.bodies.count, self.bodies.width, self.bodies.height, rng);
        world
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ConfigError {
    /// a source could not be read or parsed
    Load(String),
    /// values that would break the simulation
    Invalid(String),
}

impl From<figment::Error> for ConfigError {
    fn from(e: figment::Error) -> Self {
        ConfigError::Load(e.to_string())
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Load(msg) => write!(f, "Configuration error: {}", msg),
            ConfigError::Invalid(msg) => write!(f, "Invalid configuration: {}", msg),
        }
    }
}

impl std::error::Error for ConfigError {}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn from_toml(toml: &str) -> Result<SimulationConfig, ConfigError> {
        SimulationConfig::from_figment(SimulationConfig::defaults().merge(Toml::string(toml)))
    }

    #[test]
    fn defaults_are_valid() {
        let config = SimulationConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.world.width, 500.0);
        assert_eq!(config.bodies.count, 20);
        assert_eq!(config.run.seed, None);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config = from_toml(
            r#"
            [world]
            width = 800.0

            [run]
            seed = 42
            "#,
        )
        .unwrap();
        assert_eq!(config.world.width, 800.0);
        assert_eq!(config.world.height, 500.0);
        assert_eq!(config.run.seed, Some(42));
        assert_eq!(config.bodies, BodiesConfig::default());
    }

    #[test]
    fn rejects_empty_world() {
        let err = from_toml("[world]\nwidth = 0.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
        assert!(err.to_string().contains("world size"));
    }

    #[test]
    fn rejects_negative_body_size() {
        let err = from_toml("[bodies]\nheight = -1.0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn rejects_zero_canvas() {
        let err = from_toml("[run]\ncolumns = 0\n").unwrap_err();
        assert!(err.to_string().contains("canvas"));
    }

    #[test]
    fn type_mismatch_is_a_load_error() {
        let err = from_toml("[bodies]\ncount = \"many\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Load(_)));
    }

    #[test]
    fn missing_directory_falls_back_to_defaults() {
        Jail::expect_with(|_jail| {
            let config = SimulationConfig::load_from("does/not/exist").map_err(|e| e.to_string())?;
            assert_eq!(config, SimulationConfig::default());
            Ok(())
        });
    }

    #[test]
    fn sources_are_layered_defaults_files_then_env() {
        Jail::expect_with(|jail| {
            jail.create_file(
                "default.toml",
                r#"
                [world]
                width = 300.0
                height = 200.0

                [bodies]
                count = 4

                [run]
                seed = 1
                "#,
            )?;
            jail.create_file(
                "user.toml",
                r#"
                [world]
                width = 350.0

                [run]
                seed = 2
                "#,
            )?;
            jail.set_env("BOUNCE_RUN__SEED", 9);
            jail.set_env("BOUNCE_BODIES__WIDTH", 6.5);

            let config = SimulationConfig::load_from(jail.directory()).map_err(|e| e.to_string())?;

            // user file beats default file
            assert_eq!(config.world.width, 350.0);
            // default file beats built-in defaults
            assert_eq!(config.world.height, 200.0);
            assert_eq!(config.bodies.count, 4);
            // env beats both files
            assert_eq!(config.run.seed, Some(9));
            assert_eq!(config.bodies.width, 6.5);
            // untouched keys keep built-in defaults
            assert_eq!(config.bodies.height, 10.0);
            assert_eq!(config.run.frames, RunConfig::default().frames);
            Ok(())
        });
    }

    #[test]
    fn invalid_env_override_is_rejected() {
        Jail::expect_with(|jail| {
            jail.set_env("BOUNCE_WORLD__HEIGHT", -5.0);
            let err = SimulationConfig::load_from(jail.directory()).unwrap_err();
            assert!(matches!(err, ConfigError::Invalid(_)));
            Ok(())
        });
    }

    #[test]
    fn build_world_uses_config() {
        let config = from_toml("[bodies]\ncount = 7\n").unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let world = config.build_world(&mut rng);
        assert_eq!(world.len(), 7);
        assert_eq!(world.width(), 500.0);
    }
}
