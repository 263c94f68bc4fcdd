//! Big Road bookkeeping and the derived Small and Cockroach roads.
//!
//! The Big Road groups round winners into columns, one per unbroken streak.
//! A tie is annotated on the current column and only opens one when the
//! road is still empty. The derived roads compare column heights a fixed
//! number of columns apart: equal heights read red, different heights read
//! blue.

use alloc::vec::Vec;

use crate::hand::Side;
use crate::result::Outcome;

/// One mark in a Big Road column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Entry {
    /// The column's side won the round.
    Win,
    /// The round was a tie.
    Tie,
}

/// Colour of a derived-road mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    /// The compared columns have equal heights.
    Red,
    /// The compared columns differ in height.
    Blue,
}

/// One streak of the same winner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoadColumn {
    /// The side whose streak this is.
    pub winner: Side,
    /// Marks in the order they were recorded.
    pub entries: Vec<Entry>,
}

impl RoadColumn {
    fn new(winner: Side, first: Entry) -> Self {
        Self {
            winner,
            entries: alloc::vec![first],
        }
    }

    /// Number of marks in the column, ties included.
    #[must_use]
    pub fn height(&self) -> usize {
        self.entries.len()
    }
}

/// A run of same-coloured marks on a derived road.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DerivedColumn {
    /// Colour of every mark in the run.
    pub color: Color,
    /// Number of marks.
    pub count: usize,
}

/// The two roads derived from the Big Road.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DerivedRoad {
    /// Compares each column with the one two places back.
    Small,
    /// Compares each column with the one three places back.
    Cockroach,
}

impl DerivedRoad {
    /// How many columns back each comparison looks.
    #[must_use]
    pub const fn lookback(self) -> usize {
        match self {
            Self::Small => 2,
            Self::Cockroach => 3,
        }
    }
}

/// What the roads would look like after one more outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prediction {
    /// The Big Road with the hypothetical outcome recorded.
    pub big_road: BigRoad,
    /// Whether the outcome would open a new column.
    pub new_column: bool,
    /// Next Small Road colour, if the road has enough columns.
    pub small_road: Option<Color>,
    /// Next Cockroach Road colour, if the road has enough columns.
    pub cockroach_road: Option<Color>,
}

/// Append-only record of round outcomes for the current shoe.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BigRoad {
    columns: Vec<RoadColumn>,
}

impl BigRoad {
    /// Creates an empty road.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            columns: Vec::new(),
        }
    }

    /// Returns the columns, oldest first.
    #[must_use]
    pub fn columns(&self) -> &[RoadColumn] {
        &self.columns
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns whether nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Records one round outcome.
    ///
    /// A tie on an empty road opens a Banker column holding the tie.
    pub fn record(&mut self, outcome: Outcome) {
        let winner = outcome.winner();

        if let Some(column) = self.columns.last_mut() {
            let entry = match winner {
                None => Some(Entry::Tie),
                Some(side) if column.winner == side => Some(Entry::Win),
                Some(_) => None,
            };
            if let Some(entry) = entry {
                column.entries.push(entry);
                return;
            }
        }

        let column = match winner {
            Some(side) => RoadColumn::new(side, Entry::Win),
            None => RoadColumn::new(Side::Banker, Entry::Tie),
        };
        self.columns.push(column);
    }

    /// Returns a copy of the road with `outcome` recorded.
    #[must_use]
    pub fn with_outcome(&self, outcome: Outcome) -> Self {
        let mut next = self.clone();
        next.record(outcome);
        next
    }

    /// Colour of column `index` against the column `lookback` places back.
    fn color_at(&self, index: usize, lookback: usize) -> Option<Color> {
        let earlier = self.columns.get(index.checked_sub(lookback)?)?;
        let current = self.columns.get(index)?;
        Some(if current.height() == earlier.height() {
            Color::Red
        } else {
            Color::Blue
        })
    }

    /// Builds a derived road as run-length-encoded colour columns.
    ///
    /// Empty until the Big Road has more than `lookback` columns.
    #[must_use]
    pub fn derive(&self, road: DerivedRoad) -> Vec<DerivedColumn> {
        let lookback = road.lookback();
        let mut derived: Vec<DerivedColumn> = Vec::new();

        for index in lookback..self.columns.len() {
            let Some(color) = self.color_at(index, lookback) else {
                continue;
            };
            match derived.last_mut() {
                Some(run) if run.color == color => run.count += 1,
                _ => derived.push(DerivedColumn { color, count: 1 }),
            }
        }

        derived
    }

    /// The Small Road.
    #[must_use]
    pub fn small_road(&self) -> Vec<DerivedColumn> {
        self.derive(DerivedRoad::Small)
    }

    /// The Cockroach Road.
    #[must_use]
    pub fn cockroach_road(&self) -> Vec<DerivedColumn> {
        self.derive(DerivedRoad::Cockroach)
    }

    /// Colour the derived road's latest mark would take, comparing the last
    /// column with the one `lookback` places before it.
    #[must_use]
    pub fn latest_color(&self, road: DerivedRoad) -> Option<Color> {
        let last = self.columns.len().checked_sub(1)?;
        self.color_at(last, road.lookback())
    }

    /// Previews all three roads for a hypothetical outcome without
    /// recording it.
    #[must_use]
    pub fn predict(&self, outcome: Outcome) -> Prediction {
        let big_road = self.with_outcome(outcome);
        let new_column = big_road.len() > self.len();
        let small_road = big_road.latest_color(DerivedRoad::Small);
        let cockroach_road = big_road.latest_color(DerivedRoad::Cockroach);

        Prediction {
            big_road,
            new_column,
            small_road,
            cockroach_road,
        }
    }

    /// Clears the road for a new shoe.
    pub fn clear(&mut self) {
        self.columns.clear();
    }
}
