use serde::{Deserialize, Serialize};

use crate::domain::card::Card;
use crate::domain::RoundNumber;
use crate::engine::actions::PlayerDecision;
use crate::engine::game_loop::RoundPhase;
use crate::engine::outcome::Outcome;

/// Участник раунда.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Participant {
    Player,
    Dealer,
}

/// Тип события в раунде.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub enum RoundEventKind {
    /// Новый раунд начался.
    RoundStarted { round: RoundNumber },

    /// Карта из начальной раздачи.
    CardDealt { to: Participant, card: Card },

    /// Смена фазы раунда.
    PhaseChanged { phase: RoundPhase },

    /// Решение игрока (и карта, если был hit).
    PlayerActed {
        decision: PlayerDecision,
        card: Option<Card>,
    },

    /// Дилер добрал карту по правилу дома.
    DealerDrew { card: Card },

    /// Раунд завершён.
    RoundResolved {
        outcome: Outcome,
        player_total: u32,
        dealer_total: u32,
    },
}

/// Событие в раунде с порядковым номером.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RoundEvent {
    pub index: u32,
    pub kind: RoundEventKind,
}

/// Полная история раунда.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq)]
pub struct RoundHistory {
    pub events: Vec<RoundEvent>,
}

impl RoundHistory {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn push(&mut self, kind: RoundEventKind) {
        let idx = self.events.len() as u32;
        self.events.push(RoundEvent { index: idx, kind });
    }

    /// Карты, которые дилер добрал после начальной раздачи.
    pub fn dealer_draws(&self) -> Vec<Card> {
        self.events
            .iter()
            .filter_map(|e| match e.kind {
                RoundEventKind::DealerDrew { card } => Some(card),
                _ => None,
            })
            .collect()
    }

    /// Все фазы, через которые прошёл раунд, по порядку.
    pub fn phases(&self) -> Vec<RoundPhase> {
        self.events
            .iter()
            .filter_map(|e| match e.kind {
                RoundEventKind::PhaseChanged { phase } => Some(phase),
                _ => None,
            })
            .collect()
    }
}
