pub mod components;
pub mod config;
pub mod court;
pub mod display;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use court::*;
pub use display::*;
pub use params::*;
pub use resources::*;

use glam::Vec3;
use hecs::World;
use systems::*;

/// Run one frame of the 3D Pong simulation
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    config: &Config,
    input: &InputSnapshot,
    score: &mut Score,
    events: &mut Events,
    orbit: &mut OrbitState,
    camera: &mut SpectatorCamera,
    display: &mut dyn ScoreDisplay,
) {
    // Clear events at start of frame
    events.clear();

    // 1. Ingest inputs (apply to paddle intents)
    ingest_inputs(world, input, config);

    // 2. Move paddles
    move_player_paddle(world, time, config);
    clamp_paddle_to_bounds(world, config);
    match config.opponent {
        Opponent::Ai => move_ai_paddle(world, time, config),
        Opponent::Human => move_player2_paddle(world, config),
    }

    // 3. Move ball
    move_ball(world, config);

    // 4. Check collisions (ball vs paddles, side walls)
    check_collisions(world, config, events);

    // 5. Check scoring (ball left the court)
    check_missed_ball(world, config, score, events, display);

    // 6. Cosmetic camera orbit
    advance_orbit(orbit, camera);

    time.now += time.dt;
}

/// Helper to create a paddle entity
pub fn create_paddle(world: &mut World, side: Side, pos: Vec3) -> hecs::Entity {
    world.spawn((Paddle::new(side, pos), PaddleMotion::new(pos), PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: Vec3, vel: Vec3) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}

/// Spawn both paddles and a ball served toward the player
pub fn spawn_court(world: &mut World, config: &Config) {
    let paddle_y = config.ball_spawn.y;
    create_paddle(
        world,
        Side::Player,
        Vec3::new(0.0, paddle_y, config.player_paddle_z),
    );
    create_paddle(world, Side::Ai, Vec3::new(0.0, paddle_y, config.ai_paddle_z));

    let mut ball = Ball::new(Vec3::ZERO, Vec3::ZERO);
    ball.serve(Side::Player, config);
    create_ball(world, ball.pos, ball.vel);
}
