//! Table configuration options.

/// Rounding mode for fractional payouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RoundingMode {
    /// Round up.
    Up,
    /// Round down.
    #[default]
    Down,
    /// Round to nearest, halves away from zero.
    Nearest,
}

impl RoundingMode {
    /// Computes `amount * numerator / denominator`, rounded by this mode.
    ///
    /// ```
    /// use bacrs::RoundingMode;
    ///
    /// assert_eq!(RoundingMode::Down.scale(101, 195, 100), 196);
    /// assert_eq!(RoundingMode::Up.scale(101, 195, 100), 197);
    /// assert_eq!(RoundingMode::Nearest.scale(3, 3, 2), 5);
    /// ```
    #[must_use]
    pub const fn scale(self, amount: u64, numerator: u64, denominator: u64) -> u64 {
        let product = amount as u128 * numerator as u128;
        let denominator = denominator as u128;
        let rounded = match self {
            Self::Up => product.div_ceil(denominator),
            Self::Down => product / denominator,
            Self::Nearest => (product + denominator / 2) / denominator,
        };
        if rounded > u64::MAX as u128 {
            u64::MAX
        } else {
            rounded as u64
        }
    }
}

/// Most cards a single round can take: three per hand.
pub const MAX_CARDS_PER_ROUND: usize = 6;

/// Configuration options for a baccarat table.
///
/// Use the builder pattern to customize options:
///
/// ```
/// use bacrs::TableOptions;
///
/// let options = TableOptions::default()
///     .with_decks(6)
///     .with_no_commission(true)
///     .with_starting_balance(10_000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableOptions {
    /// Number of decks in a fresh shoe.
    pub decks: u8,
    /// The shoe is replaced before a deal when fewer cards than this remain.
    pub reshuffle_threshold: usize,
    /// Whether Banker wins pay without commission.
    pub no_commission: bool,
    /// Rounding mode for fractional payouts.
    pub rounding: RoundingMode,
    /// Balance at table creation and after a restart.
    pub starting_balance: u64,
    /// Whether a settlement that leaves the balance at zero refills it.
    pub refill_when_broke: bool,
}

impl Default for TableOptions {
    fn default() -> Self {
        Self {
            decks: 8,
            reshuffle_threshold: 14,
            no_commission: false,
            rounding: RoundingMode::Down,
            starting_balance: 5000,
            refill_when_broke: true,
        }
    }
}

impl TableOptions {
    /// Returns these options with a playable shoe guaranteed.
    ///
    /// At least one deck is used, and the reshuffle threshold is raised to
    /// [`MAX_CARDS_PER_ROUND`] so a round can never run the shoe dry.
    /// [`RoundState::new`](crate::RoundState::new) applies this.
    ///
    /// ```
    /// use bacrs::{MAX_CARDS_PER_ROUND, TableOptions};
    ///
    /// let options = TableOptions::default()
    ///     .with_decks(0)
    ///     .with_reshuffle_threshold(0)
    ///     .normalized();
    /// assert_eq!(options.decks, 1);
    /// assert_eq!(options.reshuffle_threshold, MAX_CARDS_PER_ROUND);
    /// ```
    #[must_use]
    pub const fn normalized(mut self) -> Self {
        if self.decks == 0 {
            self.decks = 1;
        }
        if self.reshuffle_threshold < MAX_CARDS_PER_ROUND {
            self.reshuffle_threshold = MAX_CARDS_PER_ROUND;
        }
        self
    }

    /// Sets the number of decks.
    ///
    /// Zero is raised to one when the table is created.
    ///
    /// # Example
    ///
    /// ```
    /// use bacrs::TableOptions;
    ///
    /// let options = TableOptions::default().with_decks(6);
    /// assert_eq!(options.decks, 6);
    /// ```
    #[must_use]
    pub const fn with_decks(mut self, decks: u8) -> Self {
        self.decks = decks;
        self
    }

    /// Sets the remaining-card count below which the shoe is replaced.
    ///
    /// Values under [`MAX_CARDS_PER_ROUND`] are raised to it when the table
    /// is created.
    ///
    /// # Example
    ///
    /// ```
    /// use bacrs::TableOptions;
    ///
    /// let options = TableOptions::default().with_reshuffle_threshold(60);
    /// assert_eq!(options.reshuffle_threshold, 60);
    /// ```
    #[must_use]
    pub const fn with_reshuffle_threshold(mut self, threshold: usize) -> Self {
        self.reshuffle_threshold = threshold;
        self
    }

    /// Sets whether Banker wins pay without commission.
    ///
    /// # Example
    ///
    /// ```
    /// use bacrs::TableOptions;
    ///
    /// let options = TableOptions::default().with_no_commission(true);
    /// assert!(options.no_commission);
    /// ```
    #[must_use]
    pub const fn with_no_commission(mut self, no_commission: bool) -> Self {
        self.no_commission = no_commission;
        self
    }

    /// Sets the rounding mode for fractional payouts.
    ///
    /// # Example
    ///
    /// ```
    /// use bacrs::{RoundingMode, TableOptions};
    ///
    /// let options = TableOptions::default().with_rounding(RoundingMode::Nearest);
    /// assert_eq!(options.rounding, RoundingMode::Nearest);
    /// ```
    #[must_use]
    pub const fn with_rounding(mut self, mode: RoundingMode) -> Self {
        self.rounding = mode;
        self
    }

    /// Sets the starting balance.
    ///
    /// # Example
    ///
    /// ```
    /// use bacrs::TableOptions;
    ///
    /// let options = TableOptions::default().with_starting_balance(1000);
    /// assert_eq!(options.starting_balance, 1000);
    /// ```
    #[must_use]
    pub const fn with_starting_balance(mut self, balance: u64) -> Self {
        self.starting_balance = balance;
        self
    }

    /// Sets whether a zero balance is refilled after settlement.
    ///
    /// # Example
    ///
    /// ```
    /// use bacrs::TableOptions;
    ///
    /// let options = TableOptions::default().with_refill_when_broke(false);
    /// assert!(!options.refill_when_broke);
    /// ```
    #[must_use]
    pub const fn with_refill_when_broke(mut self, refill: bool) -> Self {
        self.refill_when_broke = refill;
        self
    }
}
