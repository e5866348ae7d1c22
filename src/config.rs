//! Simulation configuration, loaded from JSON.
//!
//! Every field has a default, so a config file only needs the values it
//! overrides. `{}` is a valid config.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{PhysicsError, Result};
use crate::geometry::Aabb;
use crate::math::Vec3;

/// Configuration for the physics world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Gravity vector
    pub gravity: Vec3,
    /// Walls of the world; every body is kept inside
    pub bounds: Aabb,
    /// Resolve sphere-cube contacts. When false they are only detected
    /// and counted.
    pub resolve_sphere_cube: bool,
    /// Default reach of a kick ray
    pub max_kick_distance: f64,
    /// Default impulse magnitude of a kick
    pub kick_impulse: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            gravity: Vec3::new(0.0, -9.81, 0.0),
            bounds: Aabb::new(Vec3::new(-10.0, 0.0, -10.0), Vec3::new(10.0, 20.0, 10.0)),
            resolve_sphere_cube: true,
            max_kick_distance: 100.0,
            kick_impulse: 10.0,
        }
    }
}

impl WorldConfig {
    /// Checks that values are usable
    pub fn validate(&self) -> Result<()> {
        if !self.gravity.is_finite() {
            return Err(PhysicsError::Config("gravity must be finite".into()));
        }
        if !self.bounds.min.is_finite() || !self.bounds.max.is_finite() || !self.bounds.is_valid() {
            return Err(PhysicsError::Config(format!(
                "bounds min {:?} must not exceed max {:?}",
                self.bounds.min, self.bounds.max
            )));
        }
        if self.max_kick_distance.is_nan() || self.max_kick_distance <= 0.0 {
            return Err(PhysicsError::Config(format!(
                "max_kick_distance must be positive, got {}",
                self.max_kick_distance
            )));
        }
        if !self.kick_impulse.is_finite() {
            return Err(PhysicsError::Config("kick_impulse must be finite".into()));
        }
        Ok(())
    }
}

/// Inclusive range a scene parameter is sampled from
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SampleRange {
    pub min: f64,
    pub max: f64,
}

impl SampleRange {
    /// Creates a range
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Range holding a single value
    pub const fn fixed(value: f64) -> Self {
        Self::new(value, value)
    }

    fn check(&self, name: &str, lower: f64) -> Result<()> {
        if !self.min.is_finite() || !self.max.is_finite() || self.min > self.max {
            return Err(PhysicsError::Config(format!(
                "{name} range [{}, {}] is empty or not finite",
                self.min, self.max
            )));
        }
        if self.min < lower {
            return Err(PhysicsError::Config(format!(
                "{name} minimum {} is below {lower}",
                self.min
            )));
        }
        Ok(())
    }
}

/// How [`populate`](crate::scene::populate) fills a world
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Seed for the random generator
    pub seed: u64,
    pub body_count: usize,
    /// Fraction of bodies that are cubes, in [0, 1]
    pub cube_ratio: f64,
    pub radius: SampleRange,
    pub half_extent: SampleRange,
    pub mass: SampleRange,
    pub restitution: SampleRange,
    /// Initial speed, in a random direction
    pub speed: SampleRange,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            body_count: 20,
            cube_ratio: 0.5,
            radius: SampleRange::new(0.3, 0.8),
            half_extent: SampleRange::new(0.3, 0.8),
            mass: SampleRange::new(0.5, 3.0),
            restitution: SampleRange::new(0.3, 0.9),
            speed: SampleRange::new(0.0, 3.0),
        }
    }
}

impl SceneConfig {
    /// Checks that every range is usable
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.cube_ratio) {
            return Err(PhysicsError::Config(format!(
                "cube_ratio must be in [0, 1], got {}",
                self.cube_ratio
            )));
        }
        self.radius.check("radius", f64::MIN_POSITIVE)?;
        self.half_extent.check("half_extent", f64::MIN_POSITIVE)?;
        self.mass.check("mass", f64::MIN_POSITIVE)?;
        self.restitution.check("restitution", 0.0)?;
        if self.restitution.max > 1.0 {
            return Err(PhysicsError::Config(format!(
                "restitution maximum {} is above 1",
                self.restitution.max
            )));
        }
        self.speed.check("speed", 0.0)?;
        Ok(())
    }
}

/// Top-level config: the world plus how to populate it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimConfig {
    pub world: WorldConfig,
    pub scene: SceneConfig,
}

impl SimConfig {
    /// Parses and validates a JSON config
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads, parses and validates a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        info!(
            path = %path.display(),
            bodies = config.scene.body_count,
            seed = config.scene.seed,
            "loaded simulation config"
        );
        Ok(config)
    }

    /// Serializes to pretty JSON
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validates both sections
    pub fn validate(&self) -> Result<()> {
        self.world.validate()?;
        self.scene.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_json_gives_defaults() {
        let config = SimConfig::from_json_str("{}").unwrap();
        assert_eq!(config, SimConfig::default());
        assert_eq!(config.world.gravity, Vec3::new(0.0, -9.81, 0.0));
        assert!(config.world.resolve_sphere_cube);
    }

    #[test]
    fn test_partial_override() {
        let json = r#"{
            "world": { "gravity": { "x": 0.0, "y": 0.0, "z": 0.0 }, "resolve_sphere_cube": false },
            "scene": { "seed": 7, "body_count": 3 }
        }"#;
        let config = SimConfig::from_json_str(json).unwrap();

        assert_eq!(config.world.gravity, Vec3::ZERO);
        assert!(!config.world.resolve_sphere_cube);
        assert_eq!(config.world.kick_impulse, 10.0);
        assert_eq!(config.scene.seed, 7);
        assert_eq!(config.scene.body_count, 3);
        assert_eq!(config.scene.mass, SceneConfig::default().mass);
    }

    #[test]
    fn test_round_trip() {
        let mut config = SimConfig::default();
        config.scene.cube_ratio = 0.25;
        config.world.bounds = Aabb::new(Vec3::splat(-5.0), Vec3::splat(5.0));

        let json = config.to_json_string().unwrap();
        assert_eq!(SimConfig::from_json_str(&json).unwrap(), config);
    }

    #[test]
    fn test_invalid_values_rejected() {
        let err = SimConfig::from_json_str(r#"{ "scene": { "cube_ratio": 1.5 } }"#).unwrap_err();
        assert!(matches!(err, PhysicsError::Config(_)));

        let err = SimConfig::from_json_str(r#"{ "scene": { "mass": { "min": 0.0, "max": 1.0 } } }"#)
            .unwrap_err();
        assert!(err.to_string().contains("mass"));

        let json = r#"{ "world": { "bounds": {
            "min": { "x": 1.0, "y": 0.0, "z": 0.0 },
            "max": { "x": 0.0, "y": 1.0, "z": 1.0 } } } }"#;
        assert!(SimConfig::from_json_str(json).is_err());
    }

    #[test]
    fn test_malformed_json() {
        let err = SimConfig::from_json_str("{ world: ").unwrap_err();
        assert!(matches!(err, PhysicsError::Json(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = SimConfig::load("/definitely/not/here/kickbox.json").unwrap_err();
        assert!(matches!(err, PhysicsError::Io(_)));
    }
}
