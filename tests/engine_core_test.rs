use blackjack_engine::domain::{Card, Deck, Hand};
use blackjack_engine::engine::{
    apply_decision, deal_initial, play_dealer_turn, resolve_outcome, start_round, EngineError,
    Outcome, Participant, PlayerDecision, RandomSource, RoundEngine, RoundEventKind,
    RoundPhase, Winner,
};

/// Простой детерминированный RNG для тестов:
/// shuffle ничего не делает => колода остаётся в стандартном порядке.
#[derive(Default)]
struct DummyRng;

impl RandomSource for DummyRng {
    fn shuffle<T>(&mut self, _slice: &mut [T]) {
        // no-op
    }
}

fn cards(list: &[&str]) -> Vec<Card> {
    list.iter()
        .map(|s| s.parse().expect("parse Card fixture"))
        .collect()
}

fn hand(list: &[&str]) -> Hand {
    Hand::from_cards(cards(list))
}

/// Раунд на колоде с заданным порядком. Раздача: игрок, дилер, игрок, дилер.
fn dealt_round(order: &[&str]) -> RoundEngine {
    let mut engine = RoundEngine::new(1, Deck::from_cards(cards(order)));
    deal_initial(&mut engine).expect("initial deal");
    engine
}

//
// actions.rs
//
#[test]
fn decision_parsing() {
    assert_eq!(PlayerDecision::parse("h"), Some(PlayerDecision::Hit));
    assert_eq!(PlayerDecision::parse("H"), Some(PlayerDecision::Hit));
    assert_eq!(PlayerDecision::parse("s"), Some(PlayerDecision::Stand));
    assert_eq!(PlayerDecision::parse(" S \n"), Some(PlayerDecision::Stand));
    assert_eq!(PlayerDecision::parse("hit"), None);
    assert_eq!(PlayerDecision::parse(""), None);
    assert_eq!(PlayerDecision::parse("x"), None);
}

//
// outcome.rs
//
#[test]
fn outcome_priority_order() {
    // 1. оба натурала
    assert_eq!(
        resolve_outcome(&hand(&["Ah", "Kd"]), &hand(&["As", "Qc"])),
        Outcome::BothBlackjack
    );
    // 2. натурал важнее сравнения сумм
    assert_eq!(
        resolve_outcome(&hand(&["Ah", "Kd"]), &hand(&["9s", "9c"])),
        Outcome::PlayerBlackjack
    );
    // 3. натурал дилера против 21 из трёх карт
    assert_eq!(
        resolve_outcome(&hand(&["7h", "7d", "7c"]), &hand(&["As", "Jc"])),
        Outcome::DealerBlackjack
    );
    // 4. перебор игрока проигрывает даже перебору дилера
    assert_eq!(
        resolve_outcome(&hand(&["Kh", "Qd", "5c"]), &hand(&["Ks", "Qc", "9d"])),
        Outcome::PlayerBust
    );
    // 5. перебор дилера
    assert_eq!(
        resolve_outcome(&hand(&["10h", "7d"]), &hand(&["9s", "6c", "8d"])),
        Outcome::DealerBust
    );
    // 6–8. сравнение сумм
    assert_eq!(
        resolve_outcome(&hand(&["10h", "9d"]), &hand(&["10s", "8c"])),
        Outcome::PlayerHigher { player: 19, dealer: 18 }
    );
    assert_eq!(
        resolve_outcome(&hand(&["10h", "7d"]), &hand(&["10s", "8c"])),
        Outcome::DealerHigher { player: 17, dealer: 18 }
    );
    assert_eq!(
        resolve_outcome(&hand(&["10h", "8d"]), &hand(&["10s", "8c"])),
        Outcome::Push { total: 18 }
    );
}

#[test]
fn outcome_text_and_winner() {
    let cases = [
        (Outcome::BothBlackjack, "Tie (Both Blackjack)", Winner::Tie),
        (Outcome::PlayerBlackjack, "Player Wins (Blackjack)", Winner::Player),
        (Outcome::DealerBlackjack, "Dealer Wins (Blackjack)", Winner::Dealer),
        (Outcome::PlayerBust, "Dealer Wins (Player Bust)", Winner::Dealer),
        (Outcome::DealerBust, "Player Wins (Dealer Bust)", Winner::Player),
        (
            Outcome::PlayerHigher { player: 21, dealer: 18 },
            "Player Wins (21 > 18)",
            Winner::Player,
        ),
        (
            Outcome::DealerHigher { player: 17, dealer: 20 },
            "Dealer Wins (20 > 17)",
            Winner::Dealer,
        ),
        (Outcome::Push { total: 19 }, "Tie (19)", Winner::Tie),
    ];

    for (outcome, text, winner) in cases {
        assert_eq!(outcome.to_string(), text);
        assert_eq!(outcome.winner(), winner);
    }

    assert_eq!(Outcome::PlayerBlackjack.verdict("Ann"), "BLACKJACK! Ann wins!");
}

//
// game_loop.rs
//
#[test]
fn start_round_deals_two_cards_each() {
    let mut rng = DummyRng;
    let engine = start_round(3, &mut rng).unwrap();

    assert_eq!(engine.round, 3);
    assert_eq!(engine.player.len(), 2);
    assert_eq!(engine.dealer.len(), 2);
    assert_eq!(engine.deck.len(), 48);

    // Стандартный порядок: 2h, 3h, 4h, 5h -> игрок {2h, 4h}, дилер {3h, 5h}.
    assert_eq!(engine.player, hand(&["2h", "4h"]));
    assert_eq!(engine.dealer, hand(&["3h", "5h"]));
    assert_eq!(engine.phase, RoundPhase::PlayerTurn);

    let dealt: Vec<Participant> = engine
        .history
        .events
        .iter()
        .filter_map(|e| match e.kind {
            RoundEventKind::CardDealt { to, .. } => Some(to),
            _ => None,
        })
        .collect();
    assert_eq!(
        dealt,
        vec![
            Participant::Player,
            Participant::Dealer,
            Participant::Player,
            Participant::Dealer
        ]
    );
}

#[test]
fn natural_ends_round_without_draws() {
    // Игрок {A, K}, дилер {9, 9}.
    let mut engine = dealt_round(&["Ah", "9d", "Kc", "9s", "5h", "5d"]);

    assert_eq!(engine.phase, RoundPhase::Resolved);
    assert_eq!(engine.outcome, Some(Outcome::PlayerBlackjack));
    assert_eq!(engine.deck.len(), 2);
    assert_eq!(
        engine.history.phases(),
        vec![RoundPhase::CheckNaturals, RoundPhase::Resolved]
    );

    // После завершения действия запрещены.
    assert_eq!(
        apply_decision(&mut engine, PlayerDecision::Hit),
        Err(EngineError::IllegalAction {
            phase: RoundPhase::Resolved
        })
    );
    assert!(play_dealer_turn(&mut engine).is_err());
}

#[test]
fn dealer_natural_skips_player_turn() {
    let engine = dealt_round(&["10h", "Ad", "7c", "Ks"]);
    assert_eq!(engine.outcome, Some(Outcome::DealerBlackjack));
    assert!(engine.history.dealer_draws().is_empty());
}

#[test]
fn player_bust_skips_dealer_turn() {
    // Игрок {10, 6}, дилер {5, 6}; hit -> 6 => 22.
    let mut engine = dealt_round(&["10h", "5d", "6c", "6s", "6h", "Kd", "Kc"]);
    assert_eq!(engine.phase, RoundPhase::PlayerTurn);

    let drawn = apply_decision(&mut engine, PlayerDecision::Hit).unwrap();
    assert_eq!(drawn, Some("6h".parse::<Card>().unwrap()));
    assert_eq!(engine.player_total(), 22);

    assert_eq!(engine.phase, RoundPhase::Resolved);
    assert_eq!(engine.outcome, Some(Outcome::PlayerBust));
    assert_eq!(engine.dealer.len(), 2);
    assert!(engine.history.dealer_draws().is_empty());
    assert!(!engine.history.phases().contains(&RoundPhase::DealerTurn));
}

#[test]
fn reaching_21_passes_turn_to_dealer() {
    // Игрок {10, 5}, hit -> 6 = 21; дилер {10, 7} стоит.
    let mut engine = dealt_round(&["10h", "10d", "5c", "7s", "6h"]);
    apply_decision(&mut engine, PlayerDecision::Hit).unwrap();

    assert_eq!(engine.player_total(), 21);
    assert_eq!(engine.phase, RoundPhase::DealerTurn);

    let drawn = play_dealer_turn(&mut engine).unwrap();
    assert!(drawn.is_empty());
    assert_eq!(engine.outcome, Some(Outcome::PlayerHigher { player: 21, dealer: 17 }));
}

#[test]
fn dealer_hits_on_16() {
    // Дилер {10, 6} = 16 -> обязан добрать.
    let mut engine = dealt_round(&["10h", "10d", "8c", "6s", "2h", "3d"]);
    apply_decision(&mut engine, PlayerDecision::Stand).unwrap();
    assert_eq!(engine.phase, RoundPhase::DealerTurn);

    let drawn = play_dealer_turn(&mut engine).unwrap();
    assert_eq!(drawn, cards(&["2h"]));
    assert_eq!(engine.dealer_total(), 18);
    assert_eq!(engine.outcome, Some(Outcome::Push { total: 18 }));
}

#[test]
fn dealer_stands_on_17() {
    // Дилер {10, 7} = 17 -> не добирает.
    let mut engine = dealt_round(&["10h", "10d", "9c", "7s", "2h"]);
    apply_decision(&mut engine, PlayerDecision::Stand).unwrap();

    let drawn = play_dealer_turn(&mut engine).unwrap();
    assert!(drawn.is_empty());
    assert_eq!(engine.dealer.len(), 2);
    assert_eq!(engine.deck.len(), 1);
    assert_eq!(engine.outcome, Some(Outcome::PlayerHigher { player: 19, dealer: 17 }));
}

#[test]
fn dealer_counts_soft_17_as_standing() {
    // Дилер {A, 6} = мягкие 17 -> стоит.
    let mut engine = dealt_round(&["10h", "Ad", "8c", "6s", "5h"]);
    apply_decision(&mut engine, PlayerDecision::Stand).unwrap();
    assert!(play_dealer_turn(&mut engine).unwrap().is_empty());
    assert_eq!(engine.outcome, Some(Outcome::PlayerHigher { player: 18, dealer: 17 }));
}

/// Сквозной сценарий: игрок {10, 7}, дилер {9, 6}, stand, дилер берёт 8 => 23.
#[test]
fn end_to_end_dealer_bust() {
    let mut engine = dealt_round(&["10h", "9d", "7c", "6s", "8h"]);

    apply_decision(&mut engine, PlayerDecision::Stand).unwrap();
    let drawn = play_dealer_turn(&mut engine).unwrap();

    assert_eq!(drawn, cards(&["8h"]));
    assert_eq!(engine.dealer_total(), 23);
    assert_eq!(engine.outcome, Some(Outcome::DealerBust));

    let record = engine.record("Ann").unwrap();
    assert_eq!(record.round, 1);
    assert_eq!(record.player_name, "Ann");
    assert_eq!(record.player_score, 17);
    assert_eq!(record.dealer_score, 23);
    assert_eq!(record.outcome_text(), "Player Wins (Dealer Bust)");
}

#[test]
fn record_before_resolution_fails() {
    let engine = dealt_round(&["10h", "9d", "7c", "6s"]);
    assert_eq!(engine.record("Ann"), Err(EngineError::RoundNotResolved));
}

#[test]
fn deck_exhaustion_is_an_error() {
    // Колода из трёх карт – начальную раздачу не завершить.
    let mut engine = RoundEngine::new(1, Deck::from_cards(cards(&["10h", "9d", "7c"])));
    assert!(matches!(
        deal_initial(&mut engine),
        Err(EngineError::EmptyDeck(_))
    ));

    // Добор дилера упирается в пустую колоду.
    let mut engine = dealt_round(&["10h", "2d", "9c", "3s"]);
    apply_decision(&mut engine, PlayerDecision::Stand).unwrap();
    assert!(matches!(
        play_dealer_turn(&mut engine),
        Err(EngineError::EmptyDeck(_))
    ));
}

#[test]
fn stand_is_recorded_in_history() {
    let mut engine = dealt_round(&["10h", "10d", "9c", "7s"]);
    apply_decision(&mut engine, PlayerDecision::Stand).unwrap();

    let acted = engine.history.events.iter().any(|e| {
        e.kind
            == RoundEventKind::PlayerActed {
                decision: PlayerDecision::Stand,
                card: None,
            }
    });
    assert!(acted);
}
