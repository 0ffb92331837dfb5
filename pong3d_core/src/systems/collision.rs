use glam::Vec3;
use hecs::World;

use crate::params::Params;
use crate::{Ball, Config, Events, Paddle, PaddleMotion, Side};

/// Scale the ball's velocity, then cap it at the paddle-hit speed limit
fn speed_ramp(vel: Vec3, factor: f32, max_speed: f32) -> Vec3 {
    (vel * factor).clamp_length_max(max_speed)
}

fn paddle_state(world: &World, side: Side) -> Option<(Paddle, Vec3)> {
    world
        .query::<(&Paddle, Option<&PaddleMotion>)>()
        .iter()
        .find(|(_e, (paddle, _))| paddle.side == side)
        .map(|(_e, (paddle, motion))| (*paddle, motion.map_or(Vec3::ZERO, |m| m.vel)))
}

/// Check ball collisions with both paddles and the side walls.
///
/// The three checks are independent and run in a fixed order (player
/// paddle, AI paddle, walls); when the court is narrow enough for the ball
/// to touch both paddles, both responses apply.
pub fn check_collisions(world: &mut World, config: &Config, events: &mut Events) {
    let ball = match world.query::<&Ball>().iter().next() {
        Some((_e, ball)) => *ball,
        None => return,
    };
    let ball_box = ball.bounds(config);
    let mut vel = ball.vel;

    if let Some((paddle, paddle_vel)) = paddle_state(world, Side::Player) {
        if ball_box.intersects(&paddle.bounds(config)) {
            let impact_x = ball.pos.x - paddle.pos.x;
            let impact_z = ball.pos.z - paddle.pos.z;
            log::trace!("player paddle impact x={impact_x:.3} z={impact_z:.3}");

            // Always back toward the AI end
            vel.z = -vel.z.abs();
            vel.x += impact_x * Params::IMPACT_STEERING;
            vel += paddle_vel * Params::PLAYER_VELOCITY_TRANSFER;

            let factor = if impact_x.abs() > Params::PLAYER_SIDE_HIT_THRESHOLD {
                config.side_speed_increase
            } else {
                config.base_speed_increase
            };
            vel = speed_ramp(vel, factor, config.hit_speed_max);

            events.ball_hit_player_paddle = true;
            log::debug!("ball hit player paddle, vel={vel}");
        }
    }

    if let Some((paddle, paddle_vel)) = paddle_state(world, Side::Ai) {
        if ball_box.intersects(&paddle.bounds(config)) {
            let impact_x = ball.pos.x - paddle.pos.x;
            log::trace!("ai paddle impact x={impact_x:.3}");

            vel.z = vel.z.abs();
            vel.x += impact_x * Params::IMPACT_STEERING;
            vel += paddle_vel * Params::AI_VELOCITY_TRANSFER;

            let factor = if impact_x.abs() > Params::AI_SIDE_HIT_THRESHOLD {
                config.side_speed_increase
            } else {
                config.base_speed_increase
            };
            vel = speed_ramp(vel, factor, config.hit_speed_max);

            events.ball_hit_ai_paddle = true;
            log::debug!("ball hit AI paddle, vel={vel}");
        }
    }

    if ball.pos.x < -config.wall_boundary || ball.pos.x > config.wall_boundary {
        vel.x = -vel.x;
        events.ball_hit_wall = true;
        log::debug!("ball hit side wall at x={:.3}", ball.pos.x);
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.vel = vel;
    }
}
