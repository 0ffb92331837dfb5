use hecs::World;

use crate::params::Params;
use crate::{Ball, Config, Paddle, PaddleIntent, PaddleMotion, Side, Time};

/// Steer the AI paddle toward the ball's x position.
///
/// Proportional control: outside the tolerance band the direction is
/// `error * easing_factor` with no clamp on its magnitude; inside it the
/// paddle stops. The paddle only moves along x.
pub fn move_ai_paddle(world: &mut World, time: &Time, config: &Config) {
    let ball_x = match world.query::<&Ball>().iter().next() {
        Some((_e, ball)) => ball.pos.x,
        None => return,
    };
    let target_x = config.clamp_to_paddle_bounds(ball_x);

    for (_entity, (paddle, motion, intent)) in
        world.query_mut::<(&mut Paddle, &mut PaddleMotion, &mut PaddleIntent)>()
    {
        if paddle.side != Side::Ai {
            continue;
        }

        let error = target_x - paddle.pos.x;
        intent.dir.x = if error.abs() > config.tolerance {
            error * config.easing_factor
        } else {
            0.0
        };
        intent.dir.z = 0.0;

        // Velocity always assumes the nominal frame time
        let vel = motion.track(paddle.pos, Params::NOMINAL_DT);
        motion.vel = glam::Vec3::new(vel.x, 0.0, 0.0);

        paddle.pos.x += intent.dir.x * config.ai_paddle_speed * time.dt;
        paddle.pos.x = config.clamp_to_paddle_bounds(paddle.pos.x);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_ball, create_paddle};
    use approx::assert_relative_eq;
    use glam::Vec3;

    fn setup(ball_x: f32, paddle_x: f32) -> (World, hecs::Entity, Config) {
        let mut world = World::new();
        let config = Config {
            paddle_boundary: 10.0,
            tolerance: 0.01,
            easing_factor: 0.1,
            ..Config::new()
        };
        create_ball(&mut world, Vec3::new(ball_x, 0.2, 0.0), Vec3::ZERO);
        let ai = create_paddle(&mut world, Side::Ai, Vec3::new(paddle_x, 0.2, -10.0));
        (world, ai, config)
    }

    #[test]
    fn test_direction_is_proportional_to_error() {
        for paddle_x in [-10.0, -3.0, 0.0, 4.5, 4.98, 9.0] {
            let (mut world, ai, config) = setup(5.0, paddle_x);
            move_ai_paddle(&mut world, &Time::default(), &config);

            let dir = world.get::<&PaddleIntent>(ai).unwrap().dir;
            assert_relative_eq!(dir.x, (5.0 - paddle_x) * 0.1);
            assert_eq!(dir.z, 0.0);
        }
    }

    #[test]
    fn test_dead_zone_stops_paddle() {
        let (mut world, ai, config) = setup(5.0, 4.995);
        move_ai_paddle(&mut world, &Time::default(), &config);

        assert_eq!(world.get::<&PaddleIntent>(ai).unwrap().dir.x, 0.0);
        assert_eq!(world.get::<&Paddle>(ai).unwrap().pos.x, 4.995);
    }

    #[test]
    fn test_target_is_clamped_to_paddle_boundary() {
        let (mut world, ai, config) = setup(40.0, 0.0);
        move_ai_paddle(&mut world, &Time::default(), &config);

        let dir = world.get::<&PaddleIntent>(ai).unwrap().dir;
        assert_relative_eq!(dir.x, 10.0 * 0.1);
    }

    #[test]
    fn test_moves_toward_ball_on_x_only() {
        let (mut world, ai, config) = setup(5.0, 0.0);
        let time = Time::default();
        move_ai_paddle(&mut world, &time, &config);

        let pos = world.get::<&Paddle>(ai).unwrap().pos;
        assert_relative_eq!(pos.x, 0.5 * config.ai_paddle_speed * time.dt);
        assert_eq!(pos.z, -10.0);
    }

    #[test]
    fn test_converges_without_overshoot() {
        let (mut world, ai, config) = setup(5.0, -8.0);
        let time = Time::default();
        for _ in 0..2000 {
            move_ai_paddle(&mut world, &time, &config);
            assert!(world.get::<&Paddle>(ai).unwrap().pos.x <= 5.0);
        }
        let x = world.get::<&Paddle>(ai).unwrap().pos.x;
        assert!((5.0 - x).abs() <= config.tolerance);
    }

    #[test]
    fn test_velocity_uses_nominal_dt() {
        let (mut world, ai, config) = setup(5.0, 0.0);
        // Elapsed time differs from the nominal frame; velocity must not care
        let time = Time::new(0.5, 0.0);

        move_ai_paddle(&mut world, &time, &config);
        let moved = world.get::<&Paddle>(ai).unwrap().pos.x;
        move_ai_paddle(&mut world, &time, &config);

        let vel = world.get::<&PaddleMotion>(ai).unwrap().vel;
        assert_relative_eq!(vel.x, moved / Params::NOMINAL_DT, epsilon = 1e-3);
        assert_eq!(vel.y, 0.0);
        assert_eq!(vel.z, 0.0);
    }

    #[test]
    fn test_no_ball_is_a_noop() {
        let mut world = World::new();
        let config = Config::new();
        let ai = create_paddle(&mut world, Side::Ai, Vec3::new(2.0, 0.2, -10.0));

        move_ai_paddle(&mut world, &Time::default(), &config);

        assert_eq!(world.get::<&Paddle>(ai).unwrap().pos.x, 2.0);
    }
}
