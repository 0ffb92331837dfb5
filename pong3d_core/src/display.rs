//! Score display port
//!
//! The core pushes score changes and wins through this trait and never
//! touches presentation itself.

use crate::components::Side;
use crate::resources::Score;

pub trait ScoreDisplay {
    fn set_player_score(&mut self, score: u8);
    fn set_ai_score(&mut self, score: u8);
    fn announce_win(&mut self, winner: &str);
}

/// Check for a winner, then push the scores to the display.
///
/// A win resets both scores before they are displayed, so the display
/// shows 0 - 0 right after the announcement.
pub fn refresh_score_display(
    score: &mut Score,
    limit_score: u8,
    display: &mut dyn ScoreDisplay,
) -> Option<Side> {
    let winner = score.has_winner(limit_score);
    if let Some(side) = winner {
        log::info!(
            "{} wins ({} - {})",
            side.name(),
            score.player,
            score.ai
        );
        display.announce_win(side.name());
        score.reset();
    }

    display.set_player_score(score.player);
    display.set_ai_score(score.ai);
    winner
}

/// Initial display of the (usually zero) scores
pub fn init_score_display(score: &mut Score, limit_score: u8, display: &mut dyn ScoreDisplay) {
    refresh_score_display(score, limit_score, display);
}
