//! Диагностика через `tracing`.
//!
//! Транскрипт игры идёт в stdout через `Console`; сюда не попадает.
//! Диагностика – в stderr, уровень задаётся `RUST_LOG` (по умолчанию `warn`).
//!
//! ```bash
//! RUST_LOG=blackjack_engine=debug cargo run --bin blackjack_cli
//! ```

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}
