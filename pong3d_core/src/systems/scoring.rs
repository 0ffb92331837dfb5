use hecs::World;

use crate::display::{refresh_score_display, ScoreDisplay};
use crate::{Ball, Config, Events, Score, Side};

/// Check if the ball left the court past either paddle (scoring).
/// Exactly on the boundary is still in play.
pub fn check_missed_ball(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    display: &mut dyn ScoreDisplay,
) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let scorer = if ball.pos.z > config.wall_boundary {
            Side::Ai
        } else if ball.pos.z < -config.wall_boundary {
            Side::Player
        } else {
            continue;
        };

        score.increment(scorer);
        match scorer {
            Side::Ai => events.ai_scored = true,
            Side::Player => events.player_scored = true,
        }
        log::info!(
            "{} scores ({} - {})",
            scorer.name(),
            score.player,
            score.ai
        );

        // Serve toward the side that just conceded
        let toward = match scorer {
            Side::Ai => Side::Player,
            Side::Player => Side::Ai,
        };
        ball.serve(toward, config);

        if let Some(winner) = refresh_score_display(score, config.limit_score, display) {
            events.winner = Some(winner);
        }
    }
}
