//! The shoe: a shuffled multi-deck stack of cards dealt from its tail.

use alloc::vec::Vec;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::error::ShoeExhausted;

/// A shuffled stack of cards.
///
/// Cards are dealt from the tail, so the last element of the underlying
/// sequence is the next card out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shoe {
    cards: Vec<Card>,
}

impl Shoe {
    /// Builds `decks` full decks and shuffles them with `rng`.
    ///
    /// Any [`Rng`] can be injected; seeded generators give reproducible shoes.
    ///
    /// ```
    /// use bacrs::Shoe;
    /// use rand::SeedableRng;
    /// use rand_chacha::ChaCha8Rng;
    ///
    /// let mut rng = ChaCha8Rng::seed_from_u64(7);
    /// let shoe = Shoe::new(8, &mut rng);
    /// assert_eq!(shoe.remaining(), 416);
    /// ```
    #[must_use]
    pub fn new<R: Rng + ?Sized>(decks: u8, rng: &mut R) -> Self {
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in 1..=13 {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        cards.shuffle(rng);
        Self { cards }
    }

    /// Creates a shoe that deals `draws` in the given order.
    ///
    /// Useful for stacking rounds in tests and replays.
    #[must_use]
    pub fn from_draws(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self { cards }
    }

    /// Removes and returns the next card.
    ///
    /// # Errors
    ///
    /// Returns [`ShoeExhausted`] if no cards are left.
    pub fn deal_one(&mut self) -> Result<Card, ShoeExhausted> {
        self.cards.pop().ok_or(ShoeExhausted)
    }

    /// Returns the number of cards left in the shoe.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the shoe is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Returns the next card without dealing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Card> {
        self.cards.last()
    }
}
