//! The third-card drawing rule.
//!
//! Neither side ever chooses: whether Player and then Banker take a third
//! card is fixed by the hand values and, for Banker, by the value of the
//! card Player drew.
//!
//! | Banker value | Player stood | Player drew `p3` |
//! |---|---|---|
//! | 0–2 | draws | draws |
//! | 3 | draws | draws unless `p3 == 8` |
//! | 4 | draws | draws if `p3` in 2..=7 |
//! | 5 | draws | draws if `p3` in 4..=7 |
//! | 6 | stands | draws if `p3` in 6..=7 |
//! | 7 | stands | stands |

use crate::error::ShoeExhausted;
use crate::hand::{Hand, card_value};
use crate::shoe::Shoe;

/// Where a round is in the drawing sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DrawStage {
    /// Player has not acted yet.
    #[default]
    Player,
    /// Player has acted; Banker has not.
    Banker,
    /// Both sides have acted.
    Resolved,
}

/// The single thing that happens next while drawing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawStep {
    /// Player takes a third card.
    PlayerDraws,
    /// Player stands on two cards.
    PlayerStands,
    /// Banker takes a third card.
    BankerDraws,
    /// Banker stands on two cards.
    BankerStands,
    /// No more cards; the round goes to settlement.
    Settle,
}

/// Player draws on 0–5 and stands on 6–7.
#[must_use]
pub const fn player_draws(player_value: u8) -> bool {
    player_value <= 5
}

/// Whether Banker draws given its value and Player's third-card value.
///
/// `player_third` is `None` when Player stood, in which case Banker follows
/// Player's own rule.
#[must_use]
pub const fn banker_draws(banker_value: u8, player_third: Option<u8>) -> bool {
    let Some(p3) = player_third else {
        return banker_value <= 5;
    };

    match banker_value {
        0..=2 => true,
        3 => p3 != 8,
        4 => matches!(p3, 2..=7),
        5 => matches!(p3, 4..=7),
        6 => matches!(p3, 6 | 7),
        _ => false,
    }
}

/// Decides the next drawing step for the two hands at `stage`.
///
/// A natural on either side ends the round before anyone draws.
#[must_use]
pub fn next_step(player: &Hand, banker: &Hand, stage: DrawStage) -> DrawStep {
    match stage {
        DrawStage::Player if player.is_natural() || banker.is_natural() => DrawStep::Settle,
        DrawStage::Player => {
            if player_draws(player.value()) {
                DrawStep::PlayerDraws
            } else {
                DrawStep::PlayerStands
            }
        }
        DrawStage::Banker => {
            let player_third = player.third_card().map(card_value);
            if banker_draws(banker.value(), player_third) {
                DrawStep::BankerDraws
            } else {
                DrawStep::BankerStands
            }
        }
        DrawStage::Resolved => DrawStep::Settle,
    }
}

/// Applies `step` to the hands, dealing from `shoe` where a card is drawn.
///
/// Returns the stage that follows.
///
/// # Errors
///
/// Returns [`ShoeExhausted`] if a draw is due and the shoe is empty.
pub fn apply_step(
    step: DrawStep,
    player: &mut Hand,
    banker: &mut Hand,
    shoe: &mut Shoe,
) -> Result<DrawStage, ShoeExhausted> {
    let next = match step {
        DrawStep::PlayerDraws => {
            player.draw_third(shoe.deal_one()?);
            DrawStage::Banker
        }
        DrawStep::PlayerStands => DrawStage::Banker,
        DrawStep::BankerDraws => {
            banker.draw_third(shoe.deal_one()?);
            DrawStage::Resolved
        }
        DrawStep::BankerStands | DrawStep::Settle => DrawStage::Resolved,
    };
    Ok(next)
}

/// Runs the whole drawing sequence on two freshly dealt hands.
///
/// # Errors
///
/// Returns [`ShoeExhausted`] if the shoe runs dry mid-sequence.
pub fn play_out(
    player: &mut Hand,
    banker: &mut Hand,
    shoe: &mut Shoe,
) -> Result<(), ShoeExhausted> {
    let mut stage = DrawStage::Player;
    loop {
        let step = next_step(player, banker, stage);
        if step == DrawStep::Settle {
            return Ok(());
        }
        stage = apply_step(step, player, banker, shoe)?;
    }
}
