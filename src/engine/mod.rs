//! Движок раунда блэкджека: раздача, ход игрока, ход дилера, исход.
//!
//! Высокоуровневый объект: `RoundEngine`
//! Основные операции:
//!   - `start_round` – перемешать колоду, раздать, проверить натуралы
//!   - `apply_decision` – применить hit/stand игрока
//!   - `play_dealer_turn` – добор дилера по правилу дома и завершение раунда

pub mod actions;
pub mod errors;
pub mod game_loop;
pub mod outcome;
pub mod round_history;

pub use actions::PlayerDecision;
pub use errors::EngineError;
pub use game_loop::{
    apply_decision, deal_initial, play_dealer_turn, start_round, RoundEngine, RoundPhase,
    DEALER_STANDS_ON,
};
pub use outcome::{resolve_outcome, Outcome, RoundRecord, Winner};
pub use round_history::{Participant, RoundEvent, RoundEventKind, RoundHistory};

/// Источник перестановок для колоды.
/// Реализации лежат в infra (обёртки над `rand`).
pub trait RandomSource {
    fn shuffle<T>(&mut self, slice: &mut [T]);
}
