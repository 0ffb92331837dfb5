/// Game tuning parameters for 3D Pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Court
    pub const WALL_BOUNDARY: f32 = 12.0;
    pub const PADDLE_BOUNDARY: f32 = 10.0;
    pub const PLAYER2_HALF_EXTENT: f32 = 10.0;

    // Paddles
    pub const PADDLE_SPEED: f32 = 12.0; // units per second
    pub const PADDLE_HALF_EXTENTS: [f32; 3] = [1.5, 0.25, 0.25];
    pub const PLAYER_PADDLE_Z: f32 = 10.0;
    pub const AI_PADDLE_Z: f32 = -10.0;
    pub const PLAYER2_SPEED: f32 = 0.1; // units per frame

    // AI
    pub const AI_PADDLE_SPEED: f32 = 12.0;
    pub const EASING_FACTOR: f32 = 0.1;
    pub const TOLERANCE: f32 = 0.01;

    // Ball
    pub const BALL_RADIUS: f32 = 0.2;
    pub const BALL_SPEED: f32 = 0.016; // position += velocity * BALL_SPEED
    pub const BALL_SPEED_MAX: f32 = 20.0;
    pub const BALL_SPAWN: [f32; 3] = [0.0, 0.2, 0.0];
    pub const SERVE_SPEED: f32 = 5.0;

    // Paddle hits
    pub const HIT_SPEED_MAX: f32 = 10.0;
    pub const BASE_SPEED_INCREASE: f32 = 1.0;
    pub const SIDE_SPEED_INCREASE: f32 = 1.0;
    pub const IMPACT_STEERING: f32 = 0.2;
    pub const PLAYER_VELOCITY_TRANSFER: f32 = 1.5;
    pub const AI_VELOCITY_TRANSFER: f32 = 0.5;
    pub const PLAYER_SIDE_HIT_THRESHOLD: f32 = 1.0;
    pub const AI_SIDE_HIT_THRESHOLD: f32 = 0.1;

    // Score
    pub const LIMIT_SCORE: u8 = 5;

    // Orbit camera
    pub const ORBIT_RADIUS: f32 = 20.0;
    pub const ORBIT_SPEED: f32 = 0.005; // radians per frame
    pub const ORBIT_HEIGHT: f32 = 10.0;

    // Timing
    pub const NOMINAL_DT: f32 = 1.0 / 60.0;
}
