use glam::Vec3;
use hecs::World;

use crate::config::clamp_symmetric;
use crate::court::Aabb;
use crate::{Ball, Config, Paddle, PaddleIntent, PaddleMotion, Side, Time};

fn ball_bounds(world: &World, config: &Config) -> Option<Aabb> {
    world
        .query::<&Ball>()
        .iter()
        .next()
        .map(|(_e, ball)| ball.bounds(config))
}

/// Move the player's paddle from its intent and record its velocity
pub fn move_player_paddle(world: &mut World, time: &Time, config: &Config) {
    let ball_box = ball_bounds(world, config);
    let speed = config.paddle_speed * time.dt;

    for (_entity, (paddle, motion, intent)) in
        world.query_mut::<(&mut Paddle, &mut PaddleMotion, &PaddleIntent)>()
    {
        if paddle.side != Side::Player {
            continue;
        }

        motion.track(paddle.pos, time.dt);

        let step = Vec3::new(intent.dir.x, 0.0, intent.dir.z) * speed;
        paddle.pos += step;

        // Only a fraction of the move is undone on overlap
        if ball_box.is_some_and(|ball_box| paddle.bounds(config).intersects(&ball_box)) {
            paddle.pos -= step * time.dt;
        }
    }
}

/// Keep the player's paddle inside the court on x and z
pub fn clamp_paddle_to_bounds(world: &mut World, config: &Config) {
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == Side::Player {
            paddle.pos.x = config.clamp_to_paddle_bounds(paddle.pos.x);
            paddle.pos.z = config.clamp_to_paddle_bounds(paddle.pos.z);
        }
    }
}

/// Move the far paddle from player 2's input (two-player mode).
/// Fixed per-frame step; this paddle transfers no velocity to the ball.
pub fn move_player2_paddle(world: &mut World, config: &Config) {
    let half = config.player2_half_extent;
    for (_entity, (paddle, intent, motion)) in
        world.query_mut::<(&mut Paddle, &PaddleIntent, Option<&mut PaddleMotion>)>()
    {
        if paddle.side != Side::Ai {
            continue;
        }

        paddle.pos.x = clamp_symmetric(paddle.pos.x + intent.dir.x * config.player2_speed, half);
        paddle.pos.z = clamp_symmetric(paddle.pos.z + intent.dir.z * config.player2_speed, half);

        if let Some(motion) = motion {
            motion.prev_pos = paddle.pos;
            motion.vel = Vec3::ZERO;
        }
    }
}

/// Cap the ball's speed, then integrate its position
pub fn move_ball(world: &mut World, config: &Config) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.vel = ball.vel.clamp_length_max(config.ball_speed_max);
        ball.pos += ball.vel * config.ball_speed;
    }
}
