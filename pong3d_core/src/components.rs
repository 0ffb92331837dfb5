use glam::Vec3;

use crate::court::Aabb;
use crate::Config;

/// Which end of the court a paddle defends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Player, // near end, +z
    Ai,     // far end, -z
}

impl Side {
    /// Name shown when this side wins
    pub fn name(self) -> &'static str {
        match self {
            Side::Player => "Player",
            Side::Ai => "AI",
        }
    }
}

/// Paddle component
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: Side,
    pub pos: Vec3,
}

impl Paddle {
    pub fn new(side: Side, pos: Vec3) -> Self {
        Self { side, pos }
    }

    pub fn bounds(&self, config: &Config) -> Aabb {
        Aabb::from_center_half_extents(self.pos, config.paddle_half_extents)
    }
}

/// Finite-difference velocity tracking for a moving paddle
#[derive(Debug, Clone, Copy)]
pub struct PaddleMotion {
    pub prev_pos: Vec3,
    pub vel: Vec3,
}

impl PaddleMotion {
    pub fn new(pos: Vec3) -> Self {
        Self {
            prev_pos: pos,
            vel: Vec3::ZERO,
        }
    }

    /// Derive velocity from the last snapshot, then snapshot `pos`.
    /// Must run before this frame's move is applied.
    pub fn track(&mut self, pos: Vec3, dt: f32) -> Vec3 {
        self.vel = if dt > 0.0 {
            (pos - self.prev_pos) / dt
        } else {
            Vec3::ZERO
        };
        self.prev_pos = pos;
        self.vel
    }
}

/// Movement intent for a paddle.
/// Human input uses -1/0/1 per axis; the AI writes a scaled direction.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub dir: Vec3,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Ball component
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec3,
    pub vel: Vec3,
}

impl Ball {
    pub fn new(pos: Vec3, vel: Vec3) -> Self {
        Self { pos, vel }
    }

    pub fn bounds(&self, config: &Config) -> Aabb {
        Aabb::from_center_half_extents(self.pos, Vec3::splat(config.ball_radius))
    }

    /// Put the ball back on its spawn point, moving toward `toward`
    pub fn serve(&mut self, toward: Side, config: &Config) {
        self.pos = config.ball_spawn;
        self.vel = match toward {
            Side::Player => Vec3::new(0.0, 0.0, config.serve_speed),
            Side::Ai => Vec3::new(0.0, 0.0, -config.serve_speed),
        };
    }
}
