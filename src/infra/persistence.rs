use std::borrow::Cow;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::engine::outcome::RoundRecord;

/// Заголовок журнала результатов.
pub const RESULTS_HEADER: &str = "Round,Player,Player_Score,Dealers_Score,Outcome";

/// Ошибка записи результата раунда.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("не удалось записать результат в {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Хранилище результатов раундов: только дописывание.
///
/// Одна запись на завершённый раунд. В бою это CSV-файл,
/// в тестах удобнее in-memory реализация.
pub trait ResultSink {
    /// Дописать запись о раунде.
    fn append(&mut self, record: &RoundRecord) -> Result<(), PersistenceError>;

    /// Куда пишем (для сообщения игроку).
    fn describe(&self) -> String;
}

/// Простая in-memory реализация для тестов.
#[derive(Debug, Default)]
pub struct InMemoryResultSink {
    pub records: Vec<RoundRecord>,
}

impl InMemoryResultSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ResultSink for InMemoryResultSink {
    fn append(&mut self, record: &RoundRecord) -> Result<(), PersistenceError> {
        self.records.push(record.clone());
        Ok(())
    }

    fn describe(&self) -> String {
        "memory".to_string()
    }
}

/// Журнал результатов в CSV-файле.
///
/// Файл открывается на каждую запись и закрывается сразу после неё,
/// между раундами дескриптор не держим. Заголовок пишется, только если
/// файл пуст на момент открытия.
#[derive(Clone, Debug)]
pub struct CsvResultLog {
    path: PathBuf,
}

impl CsvResultLog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_err(&self, source: std::io::Error) -> PersistenceError {
        PersistenceError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl ResultSink for CsvResultLog {
    fn append(&mut self, record: &RoundRecord) -> Result<(), PersistenceError> {
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| self.io_err(e))?;

        let is_empty = file.metadata().map_err(|e| self.io_err(e))?.len() == 0;

        let mut buf = String::new();
        if is_empty {
            buf.push_str(RESULTS_HEADER);
            buf.push('\n');
        }
        buf.push_str(&format_row(record));
        buf.push('\n');

        file.write_all(buf.as_bytes()).map_err(|e| self.io_err(e))?;
        file.flush().map_err(|e| self.io_err(e))?;

        tracing::info!(
            round = record.round,
            path = %self.path.display(),
            header_written = is_empty,
            "round result persisted"
        );
        Ok(())
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// Строка CSV без перевода строки.
pub fn format_row(record: &RoundRecord) -> String {
    format!(
        "{},{},{},{},{}",
        record.round,
        csv_field(&record.player_name),
        record.player_score,
        record.dealer_score,
        csv_field(&record.outcome_text()),
    )
}

/// Поле с запятой, кавычкой или переводом строки берётся в кавычки,
/// внутренние кавычки удваиваются.
fn csv_field(value: &str) -> Cow<'_, str> {
    if value.contains(|c: char| matches!(c, ',' | '"' | '\n' | '\r')) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}
