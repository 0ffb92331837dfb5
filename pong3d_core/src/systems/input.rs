use hecs::World;

use crate::{Config, InputSnapshot, Opponent, Paddle, PaddleIntent, Side};

/// Copy this frame's input snapshot into paddle intents.
/// The far paddle only takes human input in two-player mode; otherwise the AI owns its intent.
pub fn ingest_inputs(world: &mut World, input: &InputSnapshot, config: &Config) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        match paddle.side {
            Side::Player => intent.dir = input.player,
            Side::Ai if config.opponent == Opponent::Human => intent.dir = input.player2,
            Side::Ai => {}
        }
    }
}
