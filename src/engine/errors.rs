use crate::domain::deck::EmptyDeckError;
use crate::engine::game_loop::RoundPhase;

use thiserror::Error;

/// Ошибки движка раунда.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    /// Колода закончилась посреди раунда. В игре один на один
    /// недостижимо, но молча отдавать «пустую» карту нельзя.
    #[error("Колода исчерпана")]
    EmptyDeck(#[from] EmptyDeckError),

    #[error("Недопустимое действие в фазе раунда {phase:?}")]
    IllegalAction { phase: RoundPhase },

    #[error("Раунд ещё не завершён")]
    RoundNotResolved,
}
