//! Граница ввода-вывода: приглашения и вывод транскрипта игры.

use std::io::{self, BufRead, Write};

/// Консоль, через которую сессия общается с игроком.
pub trait Console {
    /// Показать приглашение и прочитать ответ (без перевода строки).
    /// `None` – ввод закрыт (EOF).
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>>;

    /// Вывести строку транскрипта.
    fn say(&mut self, line: &str) -> io::Result<()>;
}

/// Консоль поверх stdin/stdout.
#[derive(Debug, Default)]
pub struct StdConsole;

impl Console for StdConsole {
    fn prompt(&mut self, text: &str) -> io::Result<Option<String>> {
        {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }

        let mut line = String::new();
        if io::stdin().lock().read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(&['\r', '\n'][..]).to_string()))
    }

    fn say(&mut self, line: &str) -> io::Result<()> {
        writeln!(io::stdout().lock(), "{line}")
    }
}
