use core::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::hand::{Hand, BLACKJACK};
use crate::domain::RoundNumber;

/// Кто забрал раунд.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Winner {
    Player,
    Dealer,
    Tie,
}

/// Исход раунда. Варианты перечислены в порядке приоритета проверки.
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub enum Outcome {
    BothBlackjack,
    PlayerBlackjack,
    DealerBlackjack,
    PlayerBust,
    DealerBust,
    PlayerHigher { player: u32, dealer: u32 },
    DealerHigher { player: u32, dealer: u32 },
    Push { total: u32 },
}

impl Outcome {
    pub fn winner(&self) -> Winner {
        match self {
            Outcome::BothBlackjack | Outcome::Push { .. } => Winner::Tie,
            Outcome::PlayerBlackjack | Outcome::DealerBust | Outcome::PlayerHigher { .. } => {
                Winner::Player
            }
            Outcome::DealerBlackjack | Outcome::PlayerBust | Outcome::DealerHigher { .. } => {
                Winner::Dealer
            }
        }
    }

    /// Строка вердикта для консоли.
    pub fn verdict(&self, player_name: &str) -> String {
        match self {
            Outcome::BothBlackjack => "Both have BLACKJACK! It's a tie.".to_string(),
            Outcome::PlayerBlackjack => format!("BLACKJACK! {player_name} wins!"),
            Outcome::DealerBlackjack => "Dealer has BLACKJACK! Dealer wins.".to_string(),
            Outcome::PlayerBust => "You BUSTED! Dealer wins.".to_string(),
            Outcome::DealerBust => "Dealer BUSTED! You win!".to_string(),
            Outcome::PlayerHigher { .. } => format!("You win, {player_name}!"),
            Outcome::DealerHigher { .. } => "Dealer wins.".to_string(),
            Outcome::Push { .. } => "It's a tie.".to_string(),
        }
    }
}

impl fmt::Display for Outcome {
    /// Текст исхода, который пишется в журнал результатов.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::BothBlackjack => f.write_str("Tie (Both Blackjack)"),
            Outcome::PlayerBlackjack => f.write_str("Player Wins (Blackjack)"),
            Outcome::DealerBlackjack => f.write_str("Dealer Wins (Blackjack)"),
            Outcome::PlayerBust => f.write_str("Dealer Wins (Player Bust)"),
            Outcome::DealerBust => f.write_str("Player Wins (Dealer Bust)"),
            Outcome::PlayerHigher { player, dealer } => {
                write!(f, "Player Wins ({player} > {dealer})")
            }
            Outcome::DealerHigher { player, dealer } => {
                write!(f, "Dealer Wins ({dealer} > {player})")
            }
            Outcome::Push { total } => write!(f, "Tie ({total})"),
        }
    }
}

/// Определить исход по финальным рукам. Первое совпадение выигрывает:
/// натуральные блэкджеки, затем перебор игрока, перебор дилера,
/// и только потом сравнение сумм.
pub fn resolve_outcome(player: &Hand, dealer: &Hand) -> Outcome {
    let player_total = player.calculate_value();
    let dealer_total = dealer.calculate_value();

    match (player.is_blackjack(), dealer.is_blackjack()) {
        (true, true) => return Outcome::BothBlackjack,
        (true, false) => return Outcome::PlayerBlackjack,
        (false, true) => return Outcome::DealerBlackjack,
        (false, false) => {}
    }

    if player_total > BLACKJACK {
        Outcome::PlayerBust
    } else if dealer_total > BLACKJACK {
        Outcome::DealerBust
    } else if player_total > dealer_total {
        Outcome::PlayerHigher {
            player: player_total,
            dealer: dealer_total,
        }
    } else if player_total < dealer_total {
        Outcome::DealerHigher {
            player: player_total,
            dealer: dealer_total,
        }
    } else {
        Outcome::Push {
            total: player_total,
        }
    }
}

/// Запись о завершённом раунде. Создаётся один раз, дальше не меняется.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct RoundRecord {
    pub round: RoundNumber,
    pub player_name: String,
    pub player_score: u32,
    pub dealer_score: u32,
    pub outcome: Outcome,
}

impl RoundRecord {
    pub fn outcome_text(&self) -> String {
        self.outcome.to_string()
    }
}
