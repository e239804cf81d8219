use serde::{Deserialize, Serialize};

/// Решение игрока на своём ходу.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum PlayerDecision {
    /// Взять ещё одну карту.
    Hit,
    /// Остановиться с текущей рукой.
    Stand,
}

impl PlayerDecision {
    /// Разбор ответа на приглашение `Hit or Stand? (h/s)`.
    /// Регистр не важен; всё остальное – `None` (переспросить).
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "h" => Some(PlayerDecision::Hit),
            "s" => Some(PlayerDecision::Stand),
            _ => None,
        }
    }
}
