//! Инфраструктурный слой вокруг движка:
//! - RNG-реализации для колоды;
//! - журнал результатов раундов (CSV / тесты).

pub mod persistence;
pub mod rng;

pub use persistence::*;
pub use rng::*;
