use glam::{Mat4, Vec3};

use crate::components::Side;
use crate::params::Params;
use crate::Config;

/// Time resource for tracking simulation time
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta time for this frame
    pub now: f32, // Total elapsed time
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: Params::NOMINAL_DT,
            now: 0.0,
        }
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Score {
    pub player: u8,
    pub ai: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment(&mut self, side: Side) {
        match side {
            Side::Player => self.player = self.player.saturating_add(1),
            Side::Ai => self.ai = self.ai.saturating_add(1),
        }
    }

    /// Player is checked first when both reach the limit
    pub fn has_winner(&self, limit_score: u8) -> Option<Side> {
        if self.player >= limit_score {
            Some(Side::Player)
        } else if self.ai >= limit_score {
            Some(Side::Ai)
        } else {
            None
        }
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Events that occurred during this frame
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub player_scored: bool,
    pub ai_scored: bool,
    pub ball_hit_player_paddle: bool,
    pub ball_hit_ai_paddle: bool,
    pub ball_hit_wall: bool,
    pub winner: Option<Side>,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Direction snapshot read from the input layer once per frame
#[derive(Debug, Clone, Copy, Default)]
pub struct InputSnapshot {
    pub player: Vec3,
    pub player2: Vec3,
}

impl InputSnapshot {
    pub fn new(player: Vec3, player2: Vec3) -> Self {
        Self { player, player2 }
    }
}

/// Spectator camera orbit
#[derive(Debug, Clone, Copy)]
pub struct OrbitState {
    pub angle: f32,
    pub center: Vec3,
    pub radius: f32,
    pub speed: f32,
    pub enabled: bool,
}

impl OrbitState {
    /// Starts at the angle of `SpectatorCamera::behind_player` (on +z),
    /// so enabling the orbit continues from the current camera pose.
    pub fn new(config: &Config) -> Self {
        Self {
            angle: std::f32::consts::FRAC_PI_2,
            center: Vec3::ZERO,
            radius: config.orbit_radius,
            speed: config.orbit_speed,
            enabled: false,
        }
    }

    pub fn toggle(&mut self) {
        self.enabled = !self.enabled;
    }
}

/// Camera pose owned by the renderer; the core only moves and aims it
#[derive(Debug, Clone, Copy)]
pub struct SpectatorCamera {
    pub position: Vec3,
    pub target: Vec3,
}

impl SpectatorCamera {
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }

    /// Starting pose behind the player's paddle, looking at the court center
    pub fn behind_player(config: &Config) -> Self {
        Self::new(
            Vec3::new(0.0, config.orbit_height, config.orbit_radius),
            Vec3::ZERO,
        )
    }

    pub fn view(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.target, Vec3::Y)
    }
}
