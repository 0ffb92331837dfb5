use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::params::Params;

/// Who drives the far paddle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Opponent {
    #[default]
    Ai,
    Human,
}

/// Configuration errors
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Parse error: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Invalid config: {0}")]
    Invalid(String),
}

/// Game configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub opponent: Opponent,

    pub wall_boundary: f32,
    pub paddle_boundary: f32,
    pub player2_half_extent: f32,

    pub paddle_speed: f32,
    pub paddle_half_extents: Vec3,
    pub player_paddle_z: f32,
    pub ai_paddle_z: f32,
    pub player2_speed: f32,

    pub ai_paddle_speed: f32,
    pub easing_factor: f32,
    pub tolerance: f32,

    pub ball_radius: f32,
    pub ball_speed: f32,
    pub ball_speed_max: f32,
    pub ball_spawn: Vec3,
    pub serve_speed: f32,

    pub hit_speed_max: f32,
    pub base_speed_increase: f32,
    pub side_speed_increase: f32,

    pub limit_score: u8,

    pub orbit_radius: f32,
    pub orbit_speed: f32,
    pub orbit_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            opponent: Opponent::Ai,
            wall_boundary: Params::WALL_BOUNDARY,
            paddle_boundary: Params::PADDLE_BOUNDARY,
            player2_half_extent: Params::PLAYER2_HALF_EXTENT,
            paddle_speed: Params::PADDLE_SPEED,
            paddle_half_extents: Vec3::from_array(Params::PADDLE_HALF_EXTENTS),
            player_paddle_z: Params::PLAYER_PADDLE_Z,
            ai_paddle_z: Params::AI_PADDLE_Z,
            player2_speed: Params::PLAYER2_SPEED,
            ai_paddle_speed: Params::AI_PADDLE_SPEED,
            easing_factor: Params::EASING_FACTOR,
            tolerance: Params::TOLERANCE,
            ball_radius: Params::BALL_RADIUS,
            ball_speed: Params::BALL_SPEED,
            ball_speed_max: Params::BALL_SPEED_MAX,
            ball_spawn: Vec3::from_array(Params::BALL_SPAWN),
            serve_speed: Params::SERVE_SPEED,
            hit_speed_max: Params::HIT_SPEED_MAX,
            base_speed_increase: Params::BASE_SPEED_INCREASE,
            side_speed_increase: Params::SIDE_SPEED_INCREASE,
            limit_score: Params::LIMIT_SCORE,
            orbit_radius: Params::ORBIT_RADIUS,
            orbit_speed: Params::ORBIT_SPEED,
            orbit_height: Params::ORBIT_HEIGHT,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a TOML document. Missing keys fall back to defaults.
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a TOML config file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Must pass before a `Config` is handed to the systems; they assume
    /// finite values and positive boundaries.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let vectors = [
            ("paddle_half_extents", self.paddle_half_extents),
            ("ball_spawn", self.ball_spawn),
        ];
        for (name, value) in vectors {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }

        let finite = [
            ("player_paddle_z", self.player_paddle_z),
            ("ai_paddle_z", self.ai_paddle_z),
            ("paddle_speed", self.paddle_speed),
            ("player2_speed", self.player2_speed),
            ("ai_paddle_speed", self.ai_paddle_speed),
            ("easing_factor", self.easing_factor),
            ("ball_speed", self.ball_speed),
            ("serve_speed", self.serve_speed),
            ("base_speed_increase", self.base_speed_increase),
            ("side_speed_increase", self.side_speed_increase),
            ("orbit_radius", self.orbit_radius),
            ("orbit_speed", self.orbit_speed),
            ("orbit_height", self.orbit_height),
        ];
        for (name, value) in finite {
            if !value.is_finite() {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }

        let positive = [
            ("wall_boundary", self.wall_boundary),
            ("paddle_boundary", self.paddle_boundary),
            ("player2_half_extent", self.player2_half_extent),
            ("ball_radius", self.ball_radius),
            ("ball_speed_max", self.ball_speed_max),
            ("hit_speed_max", self.hit_speed_max),
        ];
        for (name, value) in positive {
            if !(value.is_finite() && value > 0.0) {
                return Err(ConfigError::Invalid(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }
        if !(self.tolerance.is_finite() && self.tolerance >= 0.0) {
            return Err(ConfigError::Invalid(format!(
                "tolerance must be finite and not negative, got {}",
                self.tolerance
            )));
        }
        if self.limit_score == 0 {
            return Err(ConfigError::Invalid("limit_score must be at least 1".into()));
        }
        Ok(())
    }

    /// Clamp a paddle coordinate to the court's paddle travel limit
    pub fn clamp_to_paddle_bounds(&self, value: f32) -> f32 {
        clamp_symmetric(value, self.paddle_boundary)
    }
}

/// Clamp into `[-limit, limit]`. Never panics: an unvalidated negative
/// limit collapses the range instead of tripping `f32::clamp`.
pub fn clamp_symmetric(value: f32, limit: f32) -> f32 {
    value.min(limit).max(-limit)
}
