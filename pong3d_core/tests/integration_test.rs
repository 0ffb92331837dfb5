use glam::Vec3;
use hecs::World;
use pong3d_core::*;

#[derive(Default)]
struct TestDisplay {
    player: u8,
    ai: u8,
    wins: Vec<String>,
}

impl ScoreDisplay for TestDisplay {
    fn set_player_score(&mut self, score: u8) {
        self.player = score;
    }

    fn set_ai_score(&mut self, score: u8) {
        self.ai = score;
    }

    fn announce_win(&mut self, winner: &str) {
        self.wins.push(winner.to_string());
    }
}

struct Harness {
    world: World,
    time: Time,
    config: Config,
    input: InputSnapshot,
    score: Score,
    events: Events,
    orbit: OrbitState,
    camera: SpectatorCamera,
    display: TestDisplay,
}

impl Harness {
    fn new(config: Config) -> Self {
        let mut world = World::new();
        spawn_court(&mut world, &config);
        Self {
            world,
            time: Time::default(),
            orbit: OrbitState::new(&config),
            camera: SpectatorCamera::behind_player(&config),
            input: InputSnapshot::default(),
            score: Score::new(),
            events: Events::new(),
            display: TestDisplay::default(),
            config,
        }
    }

    fn frame(&mut self) {
        step(
            &mut self.world,
            &mut self.time,
            &self.config,
            &self.input,
            &mut self.score,
            &mut self.events,
            &mut self.orbit,
            &mut self.camera,
            &mut self.display,
        );
    }

    fn ball(&self) -> Ball {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, b)| *b)
            .unwrap()
    }

    fn paddle(&self, side: Side) -> Paddle {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p)
            .unwrap()
    }
}

#[test]
fn test_spawn_court() {
    let harness = Harness::new(Config::new());
    let config = &harness.config;

    assert_eq!(harness.paddle(Side::Player).pos.z, config.player_paddle_z);
    assert_eq!(harness.paddle(Side::Ai).pos.z, config.ai_paddle_z);
    assert_eq!(harness.ball().pos, config.ball_spawn);
    assert_eq!(harness.ball().vel, Vec3::new(0.0, 0.0, config.serve_speed));
}

#[test]
fn test_player_returns_a_straight_serve() {
    let mut harness = Harness::new(Config::new());

    let mut returned = false;
    for _ in 0..600 {
        harness.frame();
        if harness.events.ball_hit_player_paddle {
            returned = true;
            break;
        }
    }

    assert!(returned, "Ball served at the centered paddle should be returned");
    assert!(harness.ball().vel.z < 0.0);
    assert_eq!(harness.score, Score::new());
}

#[test]
fn test_ball_speed_limits_hold_every_frame() {
    let mut harness = Harness::new(Config::new());
    harness.input.player = Vec3::new(1.0, 0.0, 0.0);

    for frame in 0..5000 {
        // Sweep the paddle back and forth to put english on the ball
        if frame % 90 == 0 {
            harness.input.player.x = -harness.input.player.x;
        }
        harness.frame();

        let speed = harness.ball().vel.length();
        assert!(speed <= harness.config.ball_speed_max + 1e-4);
        if harness.events.ball_hit_player_paddle || harness.events.ball_hit_ai_paddle {
            assert!(speed <= harness.config.hit_speed_max + 1e-4);
        }

        let paddle = harness.paddle(Side::Player);
        assert!(paddle.pos.x.abs() <= harness.config.paddle_boundary);
        assert!(paddle.pos.z.abs() <= harness.config.paddle_boundary);
    }
}

#[test]
fn test_missed_serve_scores_for_ai() {
    let mut harness = Harness::new(Config::new());
    // Move the player out of the ball's path
    harness.input.player = Vec3::new(1.0, 0.0, 0.0);

    let mut frames = 0;
    while !harness.events.ai_scored {
        harness.frame();
        frames += 1;
        assert!(frames < 2000, "AI should score on an undefended serve");
    }

    assert_eq!(harness.score.ai, 1);
    assert_eq!(harness.display.ai, 1);
    assert_eq!(harness.ball().pos, harness.config.ball_spawn);
}

#[test]
fn test_match_ends_with_single_win_and_reset() {
    let config = Config {
        limit_score: 2,
        ..Config::new()
    };
    let mut harness = Harness::new(config);
    harness.input.player = Vec3::new(1.0, 0.0, 0.0);

    let mut frames = 0;
    while harness.display.wins.is_empty() {
        harness.frame();
        frames += 1;
        assert!(frames < 10_000, "AI should win against an absent player");
    }

    assert_eq!(harness.display.wins, vec!["AI".to_string()]);
    assert_eq!(harness.events.winner, Some(Side::Ai));
    assert_eq!(harness.score, Score::new());
    assert_eq!((harness.display.player, harness.display.ai), (0, 0));
}

#[test]
fn test_two_player_mode_moves_far_paddle_from_input() {
    let config = Config {
        opponent: Opponent::Human,
        ..Config::new()
    };
    let mut harness = Harness::new(config);
    harness.input.player2 = Vec3::new(-1.0, 0.0, 0.0);

    for _ in 0..10 {
        harness.frame();
    }

    let x = harness.paddle(Side::Ai).pos.x;
    assert!((x + 10.0 * harness.config.player2_speed).abs() < 1e-4);
}

#[test]
fn test_orbit_runs_alongside_play() {
    let mut harness = Harness::new(Config::new());
    let start = harness.camera.position;

    harness.frame();
    assert_eq!(harness.camera.position, start, "Orbit starts disabled");

    harness.orbit.toggle();
    harness.frame();
    assert_ne!(harness.camera.position, start);
    assert_eq!(harness.camera.target, harness.orbit.center);
}

#[test]
fn test_time_advances_per_frame() {
    let mut harness = Harness::new(Config::new());
    for _ in 0..60 {
        harness.frame();
    }
    assert!((harness.time.now - 1.0).abs() < 1e-3);
}
