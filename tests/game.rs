//! Round flow integration tests.

use bacrs::{
    AdvanceError, BetError, BetType, Card, ConfigError, DealError, MAX_CARDS_PER_ROUND, Outcome,
    Phase, PlayError, ReshuffleError, RoundError, RoundEvent, RoundState, Shoe, Side, Suit, Table,
    TableOptions,
};

const fn card(suit: Suit, rank: u8) -> Card {
    Card::new(suit, rank)
}

/// Options that keep a stacked shoe of one full round.
fn stacked_options() -> TableOptions {
    TableOptions::default().with_reshuffle_threshold(MAX_CARDS_PER_ROUND)
}

/// Deals `draws` first, padded with zero-value cards to a full round.
fn stacked_shoe(draws: &[Card]) -> Shoe {
    let mut cards = draws.to_vec();
    while cards.len() < MAX_CARDS_PER_ROUND {
        cards.push(card(Suit::Spades, 13));
    }
    Shoe::from_draws(&cards)
}

fn stacked_table(draws: &[Card]) -> Table {
    let table = Table::new(stacked_options(), 1);
    table.load_shoe(stacked_shoe(draws)).unwrap();
    table
}

fn advance_until_settled(table: &Table) -> Vec<RoundEvent> {
    let mut events = Vec::new();
    loop {
        let event = table.advance().unwrap();
        let settled = matches!(event, RoundEvent::Settled(_));
        events.push(event);
        if settled {
            return events;
        }
    }
}

/// Player 4♥ 4♣ (natural 8), Banker K♠ 6♣ (6).
fn player_natural() -> [Card; 4] {
    [
        card(Suit::Hearts, 4),
        card(Suit::Clubs, 4),
        card(Suit::Spades, 13),
        card(Suit::Clubs, 6),
    ]
}

#[test]
fn new_table_starts_in_betting() {
    let table = Table::new(TableOptions::default(), 42);
    assert_eq!(table.phase(), Phase::Betting);
    assert_eq!(table.balance(), 5000);
    assert_eq!(table.cards_remaining(), 416);
    assert!(table.bets().is_empty());
    assert!(table.big_road().is_empty());
    assert!(table.last_result().is_none());
}

#[test]
fn bet_validation() {
    let table = Table::new(TableOptions::default(), 42);

    assert_eq!(table.place_bet(BetType::Player, 0), Err(BetError::ZeroBet));
    assert_eq!(
        table.place_bet(BetType::Player, 5001),
        Err(BetError::InsufficientBalance)
    );

    table.place_bet(BetType::Player, 3000).unwrap();
    table.place_bet(BetType::Player, 1000).unwrap();
    assert_eq!(table.stake(BetType::Player), 4000);
    assert_eq!(
        table.place_bet(BetType::Tie, 1001),
        Err(BetError::InsufficientBalance)
    );
    table.place_bet(BetType::Tie, 1000).unwrap();
    assert_eq!(table.bets().total(), 5000);

    table.clear_bets().unwrap();
    assert!(table.bets().is_empty());
    assert_eq!(table.balance(), 5000);
}

#[test]
fn failed_transition_leaves_state_untouched() {
    let state = RoundState::new(TableOptions::default(), 3);
    let next = state.place_bet(BetType::Banker, 100).unwrap();

    assert_eq!(state.bets().total(), 0);
    assert_eq!(next.bets().stake(BetType::Banker), 100);
    assert_eq!(
        next.place_bet(BetType::Banker, 4901),
        Err(BetError::InsufficientBalance)
    );
    assert_eq!(next.bets().stake(BetType::Banker), 100);
}

#[test]
fn deal_requires_bets_and_betting_phase() {
    let table = Table::new(TableOptions::default(), 42);
    assert_eq!(table.deal(), Err(DealError::NoBetsPlaced));
    assert_eq!(table.advance(), Err(AdvanceError::InvalidState));

    table.place_bet(BetType::Player, 100).unwrap();
    table.deal().unwrap();
    assert_eq!(table.phase(), Phase::Dealing);
    assert_eq!(table.balance(), 4900);

    assert_eq!(table.deal(), Err(DealError::InvalidState));
    assert_eq!(
        table.place_bet(BetType::Player, 100),
        Err(BetError::InvalidState)
    );
    assert_eq!(table.clear_bets(), Err(BetError::InvalidState));
    assert_eq!(table.rebet(), Err(BetError::InvalidState));
    assert_eq!(
        table.set_no_commission(true),
        Err(ConfigError::InvalidState)
    );
    assert_eq!(table.reshuffle(), Err(ReshuffleError::InvalidState));
    assert_eq!(table.new_round(), Err(RoundError::InvalidState));
}

#[test]
fn natural_round_steps_through_every_phase() {
    let table = stacked_table(&player_natural());
    table.place_bet(BetType::Player, 100).unwrap();
    table.place_bet(BetType::PlayerBonus, 100).unwrap();
    table.deal().unwrap();

    assert_eq!(
        table.advance().unwrap(),
        RoundEvent::Dealt { reshuffled: false }
    );
    assert_eq!(table.phase(), Phase::Revealing);
    assert_eq!(table.player_hand().len(), 2);
    assert_eq!(table.banker_hand().len(), 2);
    assert_eq!(table.player_hand().revealed(), 0);

    let reveals: Vec<RoundEvent> = (0..4).map(|_| table.advance().unwrap()).collect();
    assert_eq!(
        reveals,
        vec![
            RoundEvent::Revealed {
                side: Side::Player,
                count: 1
            },
            RoundEvent::Revealed {
                side: Side::Banker,
                count: 1
            },
            RoundEvent::Revealed {
                side: Side::Player,
                count: 2
            },
            RoundEvent::Revealed {
                side: Side::Banker,
                count: 2
            },
        ]
    );
    assert_eq!(table.phase(), Phase::Drawing);
    assert_eq!(table.player_hand().visible_value(), 8);

    let RoundEvent::Settled(result) = table.advance().unwrap() else {
        panic!("a natural settles without drawing");
    };
    assert_eq!(result.settlement.outcome, Outcome::Player);
    assert!(result.natural);
    assert_eq!(result.settlement.winnings, 1300);
    assert_eq!(
        result.settlement.winners,
        vec![BetType::Player, BetType::PlayerBonus]
    );
    assert_eq!(result.staked, 200);
    assert_eq!(result.net, 1100);
    assert_eq!(result.balance, 6100);
    assert!(!result.refilled);

    assert_eq!(table.phase(), Phase::Payout);
    assert_eq!(table.balance(), 6100);
    assert_eq!(table.last_result(), Some(result));
    assert_eq!(table.advance(), Err(AdvanceError::InvalidState));
    assert_eq!(table.big_road().len(), 1);
}

#[test]
fn both_sides_draw_third_cards() {
    // Player 2 3 (5) draws 6; Banker K 4 (4) draws against a 6.
    let table = stacked_table(&[
        card(Suit::Hearts, 2),
        card(Suit::Clubs, 3),
        card(Suit::Spades, 13),
        card(Suit::Diamonds, 4),
        card(Suit::Spades, 6),
        card(Suit::Hearts, 3),
    ]);
    table.place_bet(BetType::Banker, 100).unwrap();
    table.place_bet(BetType::BankerBonus, 100).unwrap();
    table.deal().unwrap();

    let events = advance_until_settled(&table);
    assert_eq!(events.len(), 8);
    assert_eq!(
        events[5],
        RoundEvent::Drew {
            side: Side::Player,
            card: card(Suit::Spades, 6)
        }
    );
    assert_eq!(
        events[6],
        RoundEvent::Drew {
            side: Side::Banker,
            card: card(Suit::Hearts, 3)
        }
    );

    let RoundEvent::Settled(result) = &events[7] else {
        panic!("last event settles the round");
    };
    assert_eq!(result.settlement.player_value, 1);
    assert_eq!(result.settlement.banker_value, 7);
    assert_eq!(result.settlement.outcome, Outcome::Banker);
    assert!(!result.natural);
    // 195 for Banker with commission, 200 for a four-point bonus margin.
    assert_eq!(result.settlement.winnings, 395);
    assert_eq!(table.balance(), 5195);
    assert_eq!(table.player_hand().revealed(), 3);
    assert_eq!(table.banker_hand().revealed(), 3);
}

#[test]
fn both_sides_stand_and_tie_pushes() {
    let table = stacked_table(&[
        card(Suit::Hearts, 3),
        card(Suit::Clubs, 4),
        card(Suit::Spades, 2),
        card(Suit::Diamonds, 5),
    ]);
    table.place_bet(BetType::Player, 100).unwrap();
    table.place_bet(BetType::Banker, 100).unwrap();
    table.place_bet(BetType::Tie, 50).unwrap();
    table.deal().unwrap();

    let events = advance_until_settled(&table);
    assert_eq!(events[5], RoundEvent::Stood { side: Side::Player });
    assert_eq!(events[6], RoundEvent::Stood { side: Side::Banker });

    let result = table.last_result().unwrap();
    assert_eq!(result.settlement.outcome, Outcome::Tie);
    assert_eq!(result.settlement.winnings, 650);
    assert_eq!(result.settlement.winners, vec![BetType::Tie]);
    assert_eq!(result.net, 400);
    assert_eq!(table.balance(), 5400);
}

#[test]
fn no_commission_pays_half_on_banker_six() {
    // Player K 10 (0) draws a 10; Banker 3 3 (6) stands against a 0.
    let table = stacked_table(&[
        card(Suit::Hearts, 13),
        card(Suit::Clubs, 10),
        card(Suit::Spades, 3),
        card(Suit::Diamonds, 3),
        card(Suit::Spades, 10),
    ]);
    table.set_no_commission(true).unwrap();
    assert!(table.no_commission());
    table.place_bet(BetType::Banker, 100).unwrap();
    table.place_bet(BetType::BankerPair, 10).unwrap();

    let result = table.play_round().unwrap();
    assert_eq!(result.settlement.outcome, Outcome::Banker);
    assert_eq!(result.settlement.banker_value, 6);
    assert_eq!(result.settlement.winnings, 150 + 120);
    assert_eq!(table.banker_hand().len(), 2);
    assert_eq!(table.player_hand().len(), 3);
}

#[test]
fn play_round_rejects_an_empty_slip() {
    let table = Table::new(TableOptions::default(), 1);
    assert_eq!(
        table.play_round(),
        Err(PlayError::Deal(DealError::NoBetsPlaced))
    );
    assert_eq!(table.phase(), Phase::Betting);
}

#[test]
fn stacked_shoe_shorter_than_a_round_is_replaced() {
    let table = Table::new(stacked_options(), 1);
    table
        .load_shoe(Shoe::from_draws(&[card(Suit::Hearts, 1), card(Suit::Hearts, 2)]))
        .unwrap();
    table.place_bet(BetType::Player, 100).unwrap();
    table.deal().unwrap();

    assert_eq!(
        table.advance().unwrap(),
        RoundEvent::Dealt { reshuffled: true }
    );
    assert_eq!(table.cards_remaining(), 416 - 4);
}

#[test]
fn degenerate_options_never_run_the_shoe_dry() {
    let options = TableOptions::default()
        .with_decks(0)
        .with_reshuffle_threshold(0);
    let table = Table::new(options, 1);

    let state = table.snapshot();
    assert_eq!(state.options().decks, 1);
    assert_eq!(state.options().reshuffle_threshold, MAX_CARDS_PER_ROUND);
    assert_eq!(table.cards_remaining(), 52);

    // Forty rounds need far more cards than one deck holds.
    let mut reshuffles = 0;
    for _ in 0..40 {
        table.place_bet(BetType::Banker, 10).unwrap();
        table.deal().unwrap();
        for event in advance_until_settled(&table) {
            if event == (RoundEvent::Dealt { reshuffled: true }) {
                reshuffles += 1;
            }
        }
        table.new_round().unwrap();
    }
    assert!(reshuffles > 0);
    assert_eq!(table.phase(), Phase::Betting);
}

#[test]
fn void_round_returns_stakes() {
    let table = Table::new(TableOptions::default(), 6);
    assert_eq!(table.void_round(), Err(RoundError::NotInProgress));

    table.place_bet(BetType::Player, 100).unwrap();
    table.place_bet(BetType::Tie, 50).unwrap();
    table.deal().unwrap();
    assert_eq!(table.balance(), 4850);
    table.advance().unwrap();
    table.advance().unwrap();
    assert_eq!(table.phase(), Phase::Revealing);

    table.void_round().unwrap();
    assert_eq!(table.phase(), Phase::Betting);
    assert_eq!(table.balance(), 5000);
    assert_eq!(table.stake(BetType::Player), 100);
    assert_eq!(table.stake(BetType::Tie), 50);
    assert!(table.player_hand().is_empty());
    assert!(table.banker_hand().is_empty());
    assert!(table.big_road().is_empty());

    table.play_round().unwrap();
    assert_eq!(table.void_round(), Err(RoundError::NotInProgress));
}

#[test]
fn state_level_shoe_swap_only_while_betting() {
    let state = RoundState::new(TableOptions::default(), 4)
        .place_bet(BetType::Player, 100)
        .unwrap();
    let (settled, _) = state.play_round().unwrap();
    let betting = settled.new_round().unwrap();
    assert_eq!(betting.big_road().len(), 1);

    let dealing = betting.deal().unwrap();
    assert_eq!(
        dealing.with_shoe(stacked_shoe(&player_natural())).err(),
        Some(ReshuffleError::InvalidState)
    );
    assert_eq!(dealing.big_road().len(), 1);

    let reloaded = betting.with_shoe(stacked_shoe(&player_natural())).unwrap();
    assert!(reloaded.big_road().is_empty());
    assert_eq!(reloaded.cards_remaining(), MAX_CARDS_PER_ROUND);
}

#[test]
fn short_shoe_is_replaced_before_dealing() {
    let mut draws = player_natural().to_vec();
    draws.extend((1..=13).map(|rank| card(Suit::Spades, rank)));

    let table = Table::new(TableOptions::default(), 9);
    table.load_shoe(Shoe::from_draws(&draws)).unwrap();

    table.place_bet(BetType::Player, 100).unwrap();
    table.deal().unwrap();
    assert_eq!(
        table.advance().unwrap(),
        RoundEvent::Dealt { reshuffled: false }
    );
    advance_until_settled(&table);
    assert_eq!(table.big_road().len(), 1);
    assert_eq!(table.cards_remaining(), 13);

    table.new_round().unwrap();
    table.place_bet(BetType::Player, 100).unwrap();
    table.deal().unwrap();
    assert_eq!(
        table.advance().unwrap(),
        RoundEvent::Dealt { reshuffled: true }
    );
    assert!(table.big_road().is_empty());
    assert_eq!(table.cards_remaining(), 416 - 4);

    advance_until_settled(&table);
    assert_eq!(table.big_road().len(), 1);
}

#[test]
fn manual_reshuffle_clears_the_road() {
    let table = Table::new(TableOptions::default(), 5);
    table.place_bet(BetType::Banker, 100).unwrap();
    table.play_round().unwrap();
    table.new_round().unwrap();
    assert_eq!(table.big_road().len(), 1);

    table.reshuffle().unwrap();
    assert!(table.big_road().is_empty());
    assert_eq!(table.cards_remaining(), 416);
}

#[test]
fn new_round_keeps_rebet_and_balance() {
    let table = stacked_table(&player_natural());
    assert_eq!(table.rebet(), Err(BetError::NoPreviousBets));

    table.place_bet(BetType::Player, 100).unwrap();
    table.place_bet(BetType::EitherPair, 20).unwrap();
    table.play_round().unwrap();
    table.new_round().unwrap();

    assert_eq!(table.phase(), Phase::Betting);
    assert!(table.bets().is_empty());
    assert!(table.player_hand().is_empty());
    assert!(table.last_result().is_none());
    assert_eq!(table.balance(), 5000 - 120 + 200 + 120);

    table.place_bet(BetType::Tie, 50).unwrap();
    table.rebet().unwrap();
    assert_eq!(table.stake(BetType::Player), 100);
    assert_eq!(table.stake(BetType::EitherPair), 20);
    assert_eq!(table.stake(BetType::Tie), 0);
}

/// Player 2 3 (5) against a Banker natural 9.
fn banker_natural() -> [Card; 4] {
    [
        card(Suit::Hearts, 2),
        card(Suit::Clubs, 3),
        card(Suit::Spades, 4),
        card(Suit::Diamonds, 5),
    ]
}

#[test]
fn broke_player_is_refilled() {
    let table = Table::new(stacked_options().with_starting_balance(300), 1);
    table.load_shoe(stacked_shoe(&banker_natural())).unwrap();
    table.place_bet(BetType::Player, 300).unwrap();

    let result = table.play_round().unwrap();
    assert_eq!(result.settlement.outcome, Outcome::Banker);
    assert!(result.refilled);
    assert_eq!(result.net, -300);
    assert_eq!(table.balance(), 300);
}

#[test]
fn refill_can_be_disabled() {
    let options = stacked_options()
        .with_starting_balance(300)
        .with_refill_when_broke(false);
    let table = Table::new(options, 1);
    table.load_shoe(stacked_shoe(&banker_natural())).unwrap();
    table.place_bet(BetType::Player, 300).unwrap();

    let result = table.play_round().unwrap();
    assert!(!result.refilled);
    assert_eq!(table.balance(), 0);

    table.new_round().unwrap();
    assert_eq!(table.rebet(), Err(BetError::InsufficientBalance));
    assert_eq!(
        table.place_bet(BetType::Player, 50),
        Err(BetError::InsufficientBalance)
    );
}

#[test]
fn same_seed_same_rounds() {
    let play = |seed: u64| {
        let mut state = RoundState::new(TableOptions::default(), seed);
        let mut rounds = Vec::new();
        for _ in 0..20 {
            let (next, result) = state
                .place_bet(BetType::Banker, 50)
                .unwrap()
                .play_round()
                .unwrap();
            rounds.push((
                result,
                next.player_hand().clone(),
                next.banker_hand().clone(),
            ));
            state = next.new_round().unwrap();
        }
        (
            rounds,
            state.big_road().clone(),
            state.balance(),
            state.cards_remaining(),
        )
    };

    assert_eq!(play(11), play(11));
}

#[test]
fn restart_resets_everything() {
    let table = Table::new(TableOptions::default().with_no_commission(false), 8);
    table.set_no_commission(true).unwrap();
    table.place_bet(BetType::Player, 500).unwrap();
    table.play_round().unwrap();
    table.new_round().unwrap();
    table.place_bet(BetType::Tie, 100).unwrap();
    table.deal().unwrap();

    table.restart();
    assert_eq!(table.phase(), Phase::Betting);
    assert_eq!(table.balance(), 5000);
    assert!(!table.no_commission());
    assert!(table.bets().is_empty());
    assert!(table.big_road().is_empty());
    assert_eq!(table.cards_remaining(), 416);
    assert_eq!(table.rebet(), Err(BetError::NoPreviousBets));
}

#[test]
fn load_shoe_only_while_betting() {
    let table = Table::new(TableOptions::default(), 2);
    table.place_bet(BetType::Player, 10).unwrap();
    table.deal().unwrap();
    assert_eq!(
        table.load_shoe(Shoe::from_draws(&player_natural())),
        Err(ReshuffleError::InvalidState)
    );
}

#[test]
fn options_builder_sets_fields() {
    let options = TableOptions::default()
        .with_decks(6)
        .with_reshuffle_threshold(20)
        .with_no_commission(true)
        .with_starting_balance(1000);

    let state = RoundState::new(options, 4);
    assert_eq!(state.cards_remaining(), 312);
    assert!(state.no_commission());
    assert_eq!(state.balance(), 1000);
    assert_eq!(state.options().reshuffle_threshold, 20);
}
