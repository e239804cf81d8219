//! Доменная модель блэкджека: карты, колода, руки.

pub mod card;
pub mod deck;
pub mod hand;

/// Номер раунда внутри сессии (начинается с 1).
pub type RoundNumber = u32;

// Удобные реэкспорты, чтобы в других модулях писать crate::domain::Card и т.п.
pub use card::*;
pub use deck::*;
pub use hand::*;
