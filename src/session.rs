//! Игровая сессия: имя игрока, счётчик раундов, статистика.
//!
//! Сессия гоняет раунды один за другим: `reset_round` собирает новую
//! колоду и пустые руки, имя и счётчики при этом сохраняются.
//! Консоль и журнал результатов – внешние зависимости (трейты).

use std::io;

use thiserror::Error;

use crate::console::Console;
use crate::domain::RoundNumber;
use crate::engine::{
    apply_decision, play_dealer_turn, start_round, EngineError, PlayerDecision, RandomSource,
    RoundEngine, RoundPhase, RoundRecord, Winner,
};
use crate::infra::persistence::ResultSink;

/// Ошибки сессии.
#[derive(Debug, Error)]
pub enum SessionError {
    #[error("ошибка ввода-вывода консоли: {0}")]
    Console(#[from] io::Error),

    #[error("ввод закрыт до окончания сессии")]
    InputClosed,

    #[error(transparent)]
    Engine(#[from] EngineError),
}

/// Накопленная статистика сессии.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SessionStats {
    pub games_played: u32,
    pub player_wins: u32,
    pub dealer_wins: u32,
    pub ties: u32,
}

impl SessionStats {
    fn record(&mut self, winner: Winner) {
        self.games_played += 1;
        match winner {
            Winner::Player => self.player_wins += 1,
            Winner::Dealer => self.dealer_wins += 1,
            Winner::Tie => self.ties += 1,
        }
    }
}

/// Итог сыгранного раунда.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundReport {
    pub record: RoundRecord,
    /// Удалось ли дописать запись в журнал.
    pub persisted: bool,
}

pub struct Session<R, S, C> {
    player_name: String,
    round_number: RoundNumber,
    stats: SessionStats,
    rng: R,
    sink: S,
    console: C,
}

impl<R, S, C> Session<R, S, C>
where
    R: RandomSource,
    S: ResultSink,
    C: Console,
{
    pub fn new(rng: R, sink: S, console: C) -> Self {
        Self {
            player_name: String::new(),
            round_number: 1,
            stats: SessionStats::default(),
            rng,
            sink,
            console,
        }
    }

    pub fn player_name(&self) -> &str {
        &self.player_name
    }

    pub fn set_player_name(&mut self, name: impl Into<String>) {
        self.player_name = name.into();
    }

    /// Номер следующего раунда.
    pub fn round_number(&self) -> RoundNumber {
        self.round_number
    }

    pub fn stats(&self) -> SessionStats {
        self.stats
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn console(&self) -> &C {
        &self.console
    }

    /// Полный цикл: имя, раунды до отказа, итог.
    pub fn run(&mut self) -> Result<(), SessionError> {
        self.ask_name()?;
        loop {
            self.play_round()?;
            if !self.ask_play_again()? {
                break;
            }
        }
        self.finish()
    }

    /// Спросить имя; пустой ответ переспрашиваем.
    pub fn ask_name(&mut self) -> Result<(), SessionError> {
        loop {
            let answer = self.read("What's your name? ")?;
            let name = answer.trim();
            if !name.is_empty() {
                self.player_name = name.to_string();
                tracing::info!(player = %self.player_name, "session started");
                return Ok(());
            }
        }
    }

    /// Новый раунд: свежая перемешанная колода, пустые руки, начальная раздача.
    /// Имя игрока, номер раунда и статистика не трогаются.
    pub fn reset_round(&mut self) -> Result<RoundEngine, SessionError> {
        Ok(start_round(self.round_number, &mut self.rng)?)
    }

    /// Сыграть один раунд от раздачи до записи результата.
    ///
    /// Ошибка журнала не прерывает сессию: результат уже показан игроку,
    /// о сбое записи сообщаем отдельно.
    pub fn play_round(&mut self) -> Result<RoundReport, SessionError> {
        let mut engine = self.reset_round()?;

        self.say("\n\u{1F0CF} \u{1F0CF} \u{1F0CF}")?;
        self.say("\n--- NEW GAME STARTED ---")?;
        self.say(&format!("Hello {}, Welcome to Blackjack!", self.player_name))?;
        self.show_opening(&engine)?;

        self.player_turn(&mut engine)?;
        if engine.phase == RoundPhase::DealerTurn {
            self.dealer_turn(&mut engine)?;
        }

        let record = engine.record(&self.player_name)?;
        self.show_results(&engine, &record)?;

        let persisted = match self.sink.append(&record) {
            Ok(()) => {
                self.say(&format!(
                    "\n Game #{} result saved to {}",
                    record.round,
                    self.sink.describe()
                ))?;
                true
            }
            Err(err) => {
                tracing::warn!(round = record.round, error = %err, "failed to persist round result");
                self.say(&format!(
                    "\n Game #{} result could not be saved: {}",
                    record.round, err
                ))?;
                false
            }
        };

        self.stats.record(record.outcome.winner());
        self.round_number += 1;

        Ok(RoundReport { record, persisted })
    }

    /// `y` (без учёта регистра) – ещё раунд, всё остальное – выход.
    pub fn ask_play_again(&mut self) -> Result<bool, SessionError> {
        let answer = self.read("\nDo you want to play again? (y/n): ")?;
        Ok(answer.trim().eq_ignore_ascii_case("y"))
    }

    /// Итог сессии. Печатается, только если сыгран хотя бы один раунд.
    pub fn finish(&mut self) -> Result<(), SessionError> {
        tracing::info!(games_played = self.stats.games_played, "session finished");
        if self.stats.games_played == 0 {
            return Ok(());
        }

        self.say("\n--- SESSION SUMMARY ---")?;
        self.say(&format!("Player: {}", self.player_name))?;
        self.say(&format!("Games played: {}", self.stats.games_played))?;
        self.say(&format!(
            "Wins: {} | Losses: {} | Ties: {}",
            self.stats.player_wins, self.stats.dealer_wins, self.stats.ties
        ))?;
        self.say(&format!("Results saved to {}", self.sink.describe()))?;
        self.say("\nSee you Soon! \u{2660} Goodbye!\n")?;
        Ok(())
    }

    fn player_turn(&mut self, engine: &mut RoundEngine) -> Result<(), SessionError> {
        while engine.phase == RoundPhase::PlayerTurn {
            self.say(&format!("\nYour Current Hand: {}", engine.player))?;
            self.say(&format!("Total Value: {}", engine.player_total()))?;

            let answer = self.read("Hit or Stand? (h/s): ")?;
            match PlayerDecision::parse(&answer) {
                Some(PlayerDecision::Hit) => {
                    if let Some(card) = apply_decision(engine, PlayerDecision::Hit)? {
                        self.say(&format!("You drew: {card}"))?;
                    }
                }
                Some(PlayerDecision::Stand) => {
                    apply_decision(engine, PlayerDecision::Stand)?;
                    self.say("You chose to stand. Dealer's turn now.")?;
                }
                None => self.say("Invalid input. Please choose 'h' or 's'.")?,
            }
        }
        Ok(())
    }

    fn dealer_turn(&mut self, engine: &mut RoundEngine) -> Result<(), SessionError> {
        self.say("\nDealer's Turn:")?;
        for card in play_dealer_turn(engine)? {
            self.say(&format!("Dealer draws: {card}"))?;
        }

        self.say("\nDealer's Final Hand:")?;
        for card in engine.dealer.cards() {
            self.say(&card.to_string())?;
        }
        self.say(&format!("Dealer Total: {}", engine.dealer_total()))?;
        Ok(())
    }

    fn show_opening(&mut self, engine: &RoundEngine) -> Result<(), SessionError> {
        self.say(&format!("\n{}'s Cards: {}", self.player_name, engine.player))?;
        self.say(&format!("Total value: {}", engine.player_total()))?;

        self.say("\nDealer's Cards:")?;
        if let Some(up_card) = engine.dealer.cards().first() {
            self.say(&up_card.to_string())?;
        }
        self.say("Hidden card")?;
        Ok(())
    }

    fn show_results(
        &mut self,
        engine: &RoundEngine,
        record: &RoundRecord,
    ) -> Result<(), SessionError> {
        self.say("\n--- FINAL RESULTS ---")?;
        self.say(&format!(
            "{}'s Hand: {} \u{2192} {}",
            self.player_name, engine.player, record.player_score
        ))?;
        self.say(&format!(
            "Dealer's Hand: {} \u{2192} {}",
            engine.dealer, record.dealer_score
        ))?;
        self.say(&record.outcome.verdict(&self.player_name))?;
        Ok(())
    }

    fn read(&mut self, prompt: &str) -> Result<String, SessionError> {
        self.console.prompt(prompt)?.ok_or(SessionError::InputClosed)
    }

    fn say(&mut self, line: &str) -> Result<(), SessionError> {
        Ok(self.console.say(line)?)
    }
}
