use glam::Vec3;
use hecs::World;
use pong3d_core::{
    init_score_display, spawn_court, step, Ball, Config, Events, InputSnapshot, OrbitState,
    Paddle, Score, ScoreDisplay, Side, SpectatorCamera, Time,
};

/// Score display that writes to the log instead of a screen
#[derive(Debug, Default)]
pub struct LogDisplay {
    pub player: u8,
    pub ai: u8,
    pub wins: Vec<String>,
}

impl ScoreDisplay for LogDisplay {
    fn set_player_score(&mut self, score: u8) {
        self.player = score;
    }

    fn set_ai_score(&mut self, score: u8) {
        self.ai = score;
        log::debug!("Player Score: {}  AI Score: {}", self.player, self.ai);
    }

    fn announce_win(&mut self, winner: &str) {
        log::info!("{winner} wins!");
        self.wins.push(winner.to_string());
    }
}

pub struct LocalGame {
    pub world: World,
    pub time: Time,
    pub config: Config,
    pub score: Score,
    pub events: Events,
    pub orbit: OrbitState,
    pub camera: SpectatorCamera,
    pub display: LogDisplay,
}

impl LocalGame {
    pub fn new(config: Config) -> Self {
        let mut world = World::new();
        spawn_court(&mut world, &config);

        let mut score = Score::new();
        let mut display = LogDisplay::default();
        init_score_display(&mut score, config.limit_score, &mut display);

        Self {
            world,
            time: Time::default(),
            score,
            events: Events::new(),
            orbit: OrbitState::new(&config),
            camera: SpectatorCamera::behind_player(&config),
            display,
            config,
        }
    }

    /// Advance one frame with the bots standing in for human input
    pub fn step(&mut self) -> &Events {
        let input = InputSnapshot::new(
            calculate_bot_input(&self.world, Side::Player),
            calculate_bot_input(&self.world, Side::Ai),
        );

        step(
            &mut self.world,
            &mut self.time,
            &self.config,
            &input,
            &mut self.score,
            &mut self.events,
            &mut self.orbit,
            &mut self.camera,
            &mut self.display,
        );

        &self.events
    }
}

/// Direction input for a bot defending `side`
///
/// Strategy:
/// 1. Track the ball's x while it is heading toward us.
/// 2. Otherwise drift back to the center line.
/// A dead zone keeps the paddle from jittering around its target.
pub fn calculate_bot_input(world: &World, side: Side) -> Vec3 {
    let ball = world.query::<&Ball>().iter().next().map(|(_e, b)| *b);
    let paddle_x = world
        .query::<&Paddle>()
        .iter()
        .find(|(_e, p)| p.side == side)
        .map(|(_e, p)| p.pos.x);

    let (Some(ball), Some(paddle_x)) = (ball, paddle_x) else {
        return Vec3::ZERO;
    };

    let incoming = match side {
        Side::Player => ball.vel.z > 0.0,
        Side::Ai => ball.vel.z < 0.0,
    };
    let target_x = if incoming { ball.pos.x } else { 0.0 };
    let deadzone = if incoming { 0.3 } else { 0.5 };

    let diff = target_x - paddle_x;
    if diff > deadzone {
        Vec3::X
    } else if diff < -deadzone {
        -Vec3::X
    } else {
        Vec3::ZERO
    }
}
