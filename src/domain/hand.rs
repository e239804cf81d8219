use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::card::Card;

/// Предел, после которого рука считается перебором.
pub const BLACKJACK: u32 = 21;

/// Рука одного участника (игрока или дилера) в пределах раунда.
/// Меняется только добавлением карты.
#[derive(Clone, Debug, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Hand {
    cards: Vec<Card>,
}

impl Hand {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_cards(cards: Vec<Card>) -> Self {
        Self { cards }
    }

    pub fn push(&mut self, card: Card) {
        self.cards.push(card);
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Сумма очков руки.
    ///
    /// Тузы откладываются и добавляются в конце: 11, если сумма остаётся
    /// не больше 21, иначе 1. Два туза никогда не могут оба быть по 11,
    /// поэтому порядок карт на результат не влияет.
    /// Результат не обрезается: значение > 21 означает перебор.
    pub fn calculate_value(&self) -> u32 {
        let mut total = 0;
        let mut aces = 0;

        for card in &self.cards {
            match card.rank.points() {
                Some(points) => total += points,
                None => aces += 1,
            }
        }

        for _ in 0..aces {
            total += if total + 11 <= BLACKJACK { 11 } else { 1 };
        }

        total
    }

    /// Натуральный блэкджек: ровно 2 карты и ровно 21.
    pub fn is_blackjack(&self) -> bool {
        self.cards.len() == 2 && self.calculate_value() == BLACKJACK
    }

    pub fn is_bust(&self) -> bool {
        self.calculate_value() > BLACKJACK
    }
}

impl fmt::Display for Hand {
    /// Карты через запятую: `A of Spades, 10 of Hearts`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, card) in self.cards.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{card}")?;
        }
        Ok(())
    }
}
