use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::deck::Deck;
use crate::domain::hand::{Hand, BLACKJACK};
use crate::domain::RoundNumber;
use crate::engine::actions::PlayerDecision;
use crate::engine::errors::EngineError;
use crate::engine::outcome::{resolve_outcome, Outcome, RoundRecord};
use crate::engine::round_history::{Participant, RoundEventKind, RoundHistory};
use crate::engine::RandomSource;

/// Дилер добирает, пока сумма меньше этого значения.
pub const DEALER_STANDS_ON: u32 = 17;

/// Фаза раунда.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum RoundPhase {
    Dealing,
    CheckNaturals,
    PlayerTurn,
    DealerTurn,
    Resolved,
}

/// Состояние одного раунда: колода, две руки, фаза, история.
/// Живёт ровно один раунд; новый раунд = новый `RoundEngine`.
#[derive(Clone, Debug)]
pub struct RoundEngine {
    pub round: RoundNumber,
    pub deck: Deck,
    pub player: Hand,
    pub dealer: Hand,
    pub phase: RoundPhase,
    pub outcome: Option<Outcome>,
    pub history: RoundHistory,
}

impl RoundEngine {
    /// Раунд на готовой колоде, фаза `Dealing`, карты ещё не розданы.
    pub fn new(round: RoundNumber, deck: Deck) -> Self {
        let mut history = RoundHistory::new();
        history.push(RoundEventKind::RoundStarted { round });
        Self {
            round,
            deck,
            player: Hand::new(),
            dealer: Hand::new(),
            phase: RoundPhase::Dealing,
            outcome: None,
            history,
        }
    }

    pub fn player_total(&self) -> u32 {
        self.player.calculate_value()
    }

    pub fn dealer_total(&self) -> u32 {
        self.dealer.calculate_value()
    }

    pub fn is_resolved(&self) -> bool {
        self.phase == RoundPhase::Resolved
    }

    /// Запись для журнала. Доступна только после `Resolved`.
    pub fn record(&self, player_name: &str) -> Result<RoundRecord, EngineError> {
        let outcome = self.outcome.ok_or(EngineError::RoundNotResolved)?;
        Ok(RoundRecord {
            round: self.round,
            player_name: player_name.to_string(),
            player_score: self.player_total(),
            dealer_score: self.dealer_total(),
            outcome,
        })
    }

    fn set_phase(&mut self, phase: RoundPhase) {
        tracing::debug!(round = self.round, ?phase, "round phase changed");
        self.phase = phase;
        self.history.push(RoundEventKind::PhaseChanged { phase });
    }

    fn expect_phase(&self, phase: RoundPhase) -> Result<(), EngineError> {
        if self.phase != phase {
            return Err(EngineError::IllegalAction { phase: self.phase });
        }
        Ok(())
    }

    fn draw(&mut self) -> Result<Card, EngineError> {
        let card = self.deck.draw()?;
        tracing::debug!(round = self.round, %card, remaining = self.deck.len(), "card drawn");
        Ok(card)
    }

    fn resolve(&mut self) {
        let outcome = resolve_outcome(&self.player, &self.dealer);
        let player_total = self.player_total();
        let dealer_total = self.dealer_total();

        self.outcome = Some(outcome);
        self.set_phase(RoundPhase::Resolved);
        self.history.push(RoundEventKind::RoundResolved {
            outcome,
            player_total,
            dealer_total,
        });

        tracing::info!(
            round = self.round,
            player_total,
            dealer_total,
            outcome = %outcome,
            "round resolved"
        );
    }

    /// Конец хода игрока: перебор сразу завершает раунд без хода дилера.
    fn finish_player_turn(&mut self) {
        if self.player.is_bust() {
            self.resolve();
        } else {
            self.set_phase(RoundPhase::DealerTurn);
        }
    }
}

/// Старт нового раунда:
/// - собирает и перемешивает колоду;
/// - раздаёт по две карты;
/// - проверяет натуральные блэкджеки.
pub fn start_round<R: RandomSource>(
    round: RoundNumber,
    rng: &mut R,
) -> Result<RoundEngine, EngineError> {
    let mut engine = RoundEngine::new(round, Deck::shuffled(rng));
    deal_initial(&mut engine)?;
    Ok(engine)
}

/// Начальная раздача (игрок, дилер, игрок, дилер) и проверка натуралов.
/// Натуральный блэкджек у любой стороны сразу завершает раунд.
pub fn deal_initial(engine: &mut RoundEngine) -> Result<(), EngineError> {
    engine.expect_phase(RoundPhase::Dealing)?;

    for _ in 0..2 {
        let card = engine.draw()?;
        engine.player.push(card);
        engine.history.push(RoundEventKind::CardDealt {
            to: Participant::Player,
            card,
        });

        let card = engine.draw()?;
        engine.dealer.push(card);
        engine.history.push(RoundEventKind::CardDealt {
            to: Participant::Dealer,
            card,
        });
    }

    engine.set_phase(RoundPhase::CheckNaturals);

    if engine.player.is_blackjack() || engine.dealer.is_blackjack() {
        engine.resolve();
    } else {
        engine.set_phase(RoundPhase::PlayerTurn);
    }
    Ok(())
}

/// Применить решение игрока.
///
/// Возвращает взятую карту при `Hit`. Ход продолжается, пока сумма < 21;
/// ровно 21 передаёт ход дилеру, перебор завершает раунд.
pub fn apply_decision(
    engine: &mut RoundEngine,
    decision: PlayerDecision,
) -> Result<Option<Card>, EngineError> {
    engine.expect_phase(RoundPhase::PlayerTurn)?;

    match decision {
        PlayerDecision::Hit => {
            let card = engine.draw()?;
            engine.player.push(card);
            engine.history.push(RoundEventKind::PlayerActed {
                decision,
                card: Some(card),
            });
            if engine.player_total() >= BLACKJACK {
                engine.finish_player_turn();
            }
            Ok(Some(card))
        }
        PlayerDecision::Stand => {
            engine.history.push(RoundEventKind::PlayerActed {
                decision,
                card: None,
            });
            engine.finish_player_turn();
            Ok(None)
        }
    }
}

/// Ход дилера по правилу дома: добирать, пока сумма < 17.
/// Возвращает добранные карты; раунд после этого завершён.
pub fn play_dealer_turn(engine: &mut RoundEngine) -> Result<Vec<Card>, EngineError> {
    engine.expect_phase(RoundPhase::DealerTurn)?;

    let mut drawn = Vec::new();
    while engine.dealer_total() < DEALER_STANDS_ON {
        let card = engine.draw()?;
        engine.dealer.push(card);
        engine.history.push(RoundEventKind::DealerDrew { card });
        drawn.push(card);
    }

    engine.resolve();
    Ok(drawn)
}
