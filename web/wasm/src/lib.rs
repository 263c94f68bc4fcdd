use bacrs::{
    BetType, BigRoad, Card, Color, DerivedColumn, Entry, Hand, Outcome, Phase, Prediction,
    RoundEvent, RoundResult, Side, Suit, Table, TableOptions,
};
use serde::Serialize;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct WasmTable {
    table: Table,
}

#[wasm_bindgen]
impl WasmTable {
    #[wasm_bindgen(constructor)]
    pub fn new(seed: u32) -> Self {
        Self {
            table: Table::new(TableOptions::default(), seed as u64),
        }
    }

    pub fn reset(&mut self, seed: u32) {
        self.table = Table::new(TableOptions::default(), seed as u64);
    }

    pub fn bet(&self, bet: &str, amount: u32) -> Result<(), JsValue> {
        let bet = parse_bet(bet)?;
        self.table.place_bet(bet, amount as u64).map_err(js_err)
    }

    pub fn rebet(&self) -> Result<(), JsValue> {
        self.table.rebet().map_err(js_err)
    }

    pub fn clear_bets(&self) -> Result<(), JsValue> {
        self.table.clear_bets().map_err(js_err)
    }

    pub fn set_no_commission(&self, no_commission: bool) -> Result<(), JsValue> {
        self.table.set_no_commission(no_commission).map_err(js_err)
    }

    pub fn deal(&self) -> Result<(), JsValue> {
        self.table.deal().map_err(js_err)
    }

    pub fn advance(&self) -> Result<JsValue, JsValue> {
        let event = self.table.advance().map_err(js_err)?;
        to_js_value(&JsEvent::from(event))
    }

    pub fn play_round(&self) -> Result<JsValue, JsValue> {
        let result = self.table.play_round().map_err(js_err)?;
        to_js_value(&JsRoundResult::from(result))
    }

    pub fn void_round(&self) -> Result<(), JsValue> {
        self.table.void_round().map_err(js_err)
    }

    pub fn new_round(&self) -> Result<(), JsValue> {
        self.table.new_round().map_err(js_err)
    }

    pub fn reshuffle(&self) -> Result<(), JsValue> {
        self.table.reshuffle().map_err(js_err)
    }

    pub fn restart(&self) {
        self.table.restart();
    }

    pub fn predict(&self, outcome: &str) -> Result<JsValue, JsValue> {
        let outcome = match outcome {
            "Player" => Outcome::Player,
            "Banker" => Outcome::Banker,
            "Tie" => Outcome::Tie,
            _ => return Err(JsValue::from_str("unknown outcome")),
        };
        to_js_value(&JsPrediction::from(self.table.predict(outcome)))
    }

    pub fn snapshot(&self) -> Result<JsValue, JsValue> {
        let state = self.table.snapshot();
        let no_commission = state.no_commission();

        let bets = state
            .bets()
            .iter()
            .map(|(bet, amount)| JsStake { bet: bet.name(), amount })
            .collect();
        let payouts = BetType::ALL
            .into_iter()
            .map(|bet| JsPayoutLabel {
                bet: bet.name(),
                label: bet.payout_label(no_commission),
            })
            .collect();

        let snapshot = Snapshot {
            phase: phase_to_str(state.phase()),
            balance: state.balance(),
            no_commission,
            bets,
            payouts,
            player: JsHand::from(state.player_hand()),
            banker: JsHand::from(state.banker_hand()),
            last_result: state.last_result().cloned().map(JsRoundResult::from),
            big_road: road_to_js(state.big_road()),
            small_road: derived_to_js(&state.small_road()),
            cockroach_road: derived_to_js(&state.cockroach_road()),
            cards_remaining: state.cards_remaining() as u32,
        };

        to_js_value(&snapshot)
    }
}

#[derive(Serialize)]
struct Snapshot {
    phase: &'static str,
    balance: u64,
    no_commission: bool,
    bets: Vec<JsStake>,
    payouts: Vec<JsPayoutLabel>,
    player: JsHand,
    banker: JsHand,
    last_result: Option<JsRoundResult>,
    big_road: Vec<JsColumn>,
    small_road: Vec<JsDerived>,
    cockroach_road: Vec<JsDerived>,
    cards_remaining: u32,
}

#[derive(Serialize)]
struct JsStake {
    bet: &'static str,
    amount: u64,
}

#[derive(Serialize)]
struct JsPayoutLabel {
    bet: &'static str,
    label: &'static str,
}

#[derive(Serialize)]
struct JsCard {
    suit: &'static str,
    rank: u8,
    label: String,
}

#[derive(Serialize)]
struct JsHand {
    cards: Vec<Option<JsCard>>,
    value: u8,
    visible_value: u8,
    natural: bool,
}

impl From<&Hand> for JsHand {
    fn from(hand: &Hand) -> Self {
        let revealed = hand.revealed() as usize;
        let cards = hand
            .cards()
            .iter()
            .enumerate()
            .map(|(index, card)| (index < revealed).then(|| card_to_js(*card)))
            .collect();

        Self {
            cards,
            value: hand.value(),
            visible_value: hand.visible_value(),
            natural: hand.is_natural(),
        }
    }
}

#[derive(Serialize)]
#[serde(tag = "kind")]
enum JsEvent {
    Dealt { reshuffled: bool },
    Revealed { side: &'static str, count: u8 },
    Drew { side: &'static str, card: JsCard },
    Stood { side: &'static str },
    Settled { result: JsRoundResult },
}

impl From<RoundEvent> for JsEvent {
    fn from(event: RoundEvent) -> Self {
        match event {
            RoundEvent::Dealt { reshuffled } => Self::Dealt { reshuffled },
            RoundEvent::Revealed { side, count } => Self::Revealed {
                side: side_to_str(side),
                count,
            },
            RoundEvent::Drew { side, card } => Self::Drew {
                side: side_to_str(side),
                card: card_to_js(card),
            },
            RoundEvent::Stood { side } => Self::Stood {
                side: side_to_str(side),
            },
            RoundEvent::Settled(result) => Self::Settled {
                result: JsRoundResult::from(result),
            },
        }
    }
}

#[derive(Serialize)]
struct JsRoundResult {
    outcome: &'static str,
    player_value: u8,
    banker_value: u8,
    natural: bool,
    winners: Vec<&'static str>,
    winnings: u64,
    staked: u64,
    net: i64,
    balance: u64,
    refilled: bool,
}

impl From<RoundResult> for JsRoundResult {
    fn from(result: RoundResult) -> Self {
        let settlement = result.settlement;
        Self {
            outcome: outcome_to_str(settlement.outcome),
            player_value: settlement.player_value,
            banker_value: settlement.banker_value,
            natural: result.natural,
            winners: settlement.winners.iter().map(|bet| bet.name()).collect(),
            winnings: settlement.winnings,
            staked: result.staked,
            net: result.net,
            balance: result.balance,
            refilled: result.refilled,
        }
    }
}

#[derive(Serialize)]
struct JsColumn {
    winner: &'static str,
    entries: Vec<&'static str>,
}

#[derive(Serialize)]
struct JsDerived {
    color: &'static str,
    count: u32,
}

#[derive(Serialize)]
struct JsPrediction {
    big_road: Vec<JsColumn>,
    new_column: bool,
    small_road: Option<&'static str>,
    cockroach_road: Option<&'static str>,
}

impl From<Prediction> for JsPrediction {
    fn from(prediction: Prediction) -> Self {
        Self {
            big_road: road_to_js(&prediction.big_road),
            new_column: prediction.new_column,
            small_road: prediction.small_road.map(color_to_str),
            cockroach_road: prediction.cockroach_road.map(color_to_str),
        }
    }
}

fn road_to_js(road: &BigRoad) -> Vec<JsColumn> {
    road.columns()
        .iter()
        .map(|column| JsColumn {
            winner: side_to_str(column.winner),
            entries: column
                .entries
                .iter()
                .map(|entry| match entry {
                    Entry::Win => "Win",
                    Entry::Tie => "Tie",
                })
                .collect(),
        })
        .collect()
}

fn derived_to_js(columns: &[DerivedColumn]) -> Vec<JsDerived> {
    columns
        .iter()
        .map(|column| JsDerived {
            color: color_to_str(column.color),
            count: column.count as u32,
        })
        .collect()
}

fn parse_bet(name: &str) -> Result<BetType, JsValue> {
    BetType::from_name(name).ok_or_else(|| JsValue::from_str("unknown bet type"))
}

fn card_to_js(card: Card) -> JsCard {
    JsCard {
        suit: suit_to_str(card.suit),
        rank: card.rank,
        label: card.to_string(),
    }
}

fn suit_to_str(suit: Suit) -> &'static str {
    match suit {
        Suit::Hearts => "Hearts",
        Suit::Diamonds => "Diamonds",
        Suit::Clubs => "Clubs",
        Suit::Spades => "Spades",
    }
}

fn side_to_str(side: Side) -> &'static str {
    match side {
        Side::Player => "Player",
        Side::Banker => "Banker",
    }
}

fn color_to_str(color: Color) -> &'static str {
    match color {
        Color::Red => "Red",
        Color::Blue => "Blue",
    }
}

fn phase_to_str(phase: Phase) -> &'static str {
    match phase {
        Phase::Betting => "Betting",
        Phase::Dealing => "Dealing",
        Phase::Revealing => "Revealing",
        Phase::Drawing => "Drawing",
        Phase::Payout => "Payout",
    }
}

fn outcome_to_str(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Player => "Player",
        Outcome::Banker => "Banker",
        Outcome::Tie => "Tie",
    }
}

fn js_err<E: core::fmt::Display>(err: E) -> JsValue {
    JsValue::from_str(&err.to_string())
}

fn to_js_value<T: Serialize>(value: &T) -> Result<JsValue, JsValue> {
    serde_wasm_bindgen::to_value(value).map_err(|err| JsValue::from_str(&err.to_string()))
}
