//! Консольный блэкджек: один игрок против дилера с фиксированными правилами дома.
//!
//! Слои:
//!   - `domain` – карты, колода, руки и подсчёт очков;
//!   - `engine` – машина состояний раунда и определение исхода;
//!   - `infra` – RNG и журнал результатов;
//!   - `session` – цикл раундов, общение с игроком через `console`.

pub mod config;
pub mod console;
pub mod domain;
pub mod engine;
pub mod infra;
pub mod logging;
pub mod session;

pub use config::GameConfig;
pub use session::{RoundReport, Session, SessionError, SessionStats};
