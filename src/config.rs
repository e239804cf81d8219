use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Файл журнала по умолчанию (относительно рабочей директории).
pub const DEFAULT_RESULTS_PATH: &str = "blackjack_results.csv";

/// Настройки игровой сессии.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct GameConfig {
    /// Куда дописываются результаты раундов.
    pub results_path: PathBuf,
    /// Фиксированный seed для воспроизводимых колод. `None` – системный RNG.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            results_path: PathBuf::from(DEFAULT_RESULTS_PATH),
            seed: None,
        }
    }
}
