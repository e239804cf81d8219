use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::card::{Card, Rank, Suit};
use crate::engine::RandomSource;

/// Попытка взять карту из пустой колоды.
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
#[error("колода пуста: карт для раздачи не осталось")]
pub struct EmptyDeckError;

/// Колода карт. Верх колоды – начало `cards`.
/// Карты только убывают; посреди раунда колода не пересобирается.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Deck {
    pub cards: Vec<Card>,
}

impl Deck {
    pub const SIZE: usize = 52;

    /// Стандартная 52-карточная колода в порядке:
    /// Hearts 2..A, Diamonds 2..A, Clubs 2..A, Spades 2..A.
    pub fn standard_52() -> Self {
        let mut cards = Vec::with_capacity(Self::SIZE);
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                cards.push(Card::new(rank, suit));
            }
        }
        Deck { cards }
    }

    /// Полная колода, перемешанная переданным источником случайности.
    pub fn shuffled<R: RandomSource>(rng: &mut R) -> Self {
        let mut deck = Self::standard_52();
        rng.shuffle(&mut deck.cards);
        tracing::debug!(cards = deck.len(), "deck shuffled");
        deck
    }

    /// Колода с заранее заданным порядком (первая карта – верхняя).
    /// Нужна для сценариев и реплея.
    pub fn from_cards(cards: Vec<Card>) -> Self {
        Deck { cards }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Взять одну карту сверху колоды.
    pub fn draw(&mut self) -> Result<Card, EmptyDeckError> {
        if self.cards.is_empty() {
            return Err(EmptyDeckError);
        }
        Ok(self.cards.remove(0))
    }
}
