//! Board coordinates and the Towers board state.
//!
//! ## Coordinates
//!
//! Columns are labelled `a`..`h`, rows are numbered 1 (top) to 8 (bottom).
//! A square is written `<column><row>`, e.g. `c3`.
//!
//! ## Board
//!
//! Each side owns exactly one marker per column. Markers only ever slide
//! vertically inside their own column, so the whole position is one row per
//! side per column. The two markers of a column never share a row.
//!
//! The gap of a column (empty cells strictly between its two markers) is the
//! Nim heap of that column. Gaps are always derived, never stored.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::{GameError, Result};
use super::player::{Side, SideMap};
use super::rng::GameRng;

/// Number of columns (and rows) on the board.
pub const BOARD_SIZE: usize = 8;

/// A column label, `a`..`h`. Ordered by label.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Column {
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

impl Column {
    /// All columns in ascending label order.
    pub const ALL: [Column; BOARD_SIZE] = [
        Column::A,
        Column::B,
        Column::C,
        Column::D,
        Column::E,
        Column::F,
        Column::G,
        Column::H,
    ];

    /// 0-based index (`a` = 0).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Column at a 0-based index.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Column> {
        Column::ALL.get(index).copied()
    }

    /// Lowercase label character.
    #[must_use]
    pub const fn label(self) -> char {
        (b'a' + self as u8) as char
    }

    /// Parse a label character. Uppercase labels are accepted.
    pub fn from_label(label: char) -> Result<Column> {
        let lower = label.to_ascii_lowercase();
        if ('a'..='h').contains(&lower) {
            Ok(Column::ALL[(lower as u8 - b'a') as usize])
        } else {
            Err(GameError::InvalidColumn(label))
        }
    }
}

impl std::fmt::Display for Column {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A row number in `1..=8`, 1 being the top of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Row(u8);

impl Row {
    /// The top row.
    pub const TOP: Row = Row(1);

    /// The bottom row.
    pub const BOTTOM: Row = Row(BOARD_SIZE as u8);

    /// Create a row, rejecting values outside `1..=8`.
    pub fn new(value: u8) -> Result<Row> {
        if (1..=BOARD_SIZE as u8).contains(&value) {
            Ok(Row(value))
        } else {
            Err(GameError::RowOutOfRange(value))
        }
    }

    /// Row at a 0-based index from the top.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Row> {
        (index < BOARD_SIZE).then(|| Row(index as u8 + 1))
    }

    /// The row number.
    #[inline]
    #[must_use]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// 0-based index from the top.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    /// Shift by `delta` rows (negative is up). `None` if it leaves the board.
    #[must_use]
    pub fn offset(self, delta: i8) -> Option<Row> {
        let shifted = self.0 as i16 + delta as i16;
        u8::try_from(shifted).ok().and_then(|v| Row::new(v).ok())
    }

    /// Number of rows strictly between `self` and `other`.
    #[inline]
    #[must_use]
    pub fn cells_between(self, other: Row) -> u8 {
        self.0.abs_diff(other.0).saturating_sub(1)
    }
}

impl TryFrom<u8> for Row {
    type Error = GameError;

    fn try_from(value: u8) -> Result<Self> {
        Row::new(value)
    }
}

impl From<Row> for u8 {
    fn from(row: Row) -> u8 {
        row.0
    }
}

impl std::fmt::Display for Row {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A cell of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Square {
    pub column: Column,
    pub row: Row,
}

impl Square {
    #[must_use]
    pub const fn new(column: Column, row: Row) -> Self {
        Self { column, row }
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.column, self.row)
    }
}

impl FromStr for Square {
    type Err = GameError;

    /// Parse the `<column><row>` encoding, e.g. `"c3"` or `"C3"`.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        let mut chars = trimmed.chars();
        let (Some(col), Some(row), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(GameError::ParseSquare(s.to_string()));
        };

        let column = Column::from_label(col).map_err(|_| GameError::ParseSquare(s.to_string()))?;
        let row = row
            .to_digit(10)
            .and_then(|d| Row::new(d as u8).ok())
            .ok_or_else(|| GameError::ParseSquare(s.to_string()))?;

        Ok(Square::new(column, row))
    }
}

/// Serialized shape of a board: raw row numbers per side.
#[derive(Clone, Debug, Serialize, Deserialize)]
struct RawBoard {
    green: [u8; BOARD_SIZE],
    red: [u8; BOARD_SIZE],
}

/// Towers board state: one marker per side per column.
///
/// ## Example
///
/// ```
/// use poker_nim::core::{Board, Column, Side};
///
/// let board = Board::new([1, 1, 2, 1, 1, 1, 1, 1], [2, 2, 6, 2, 2, 2, 2, 2]).unwrap();
///
/// assert_eq!(board.row(Side::Red, Column::C).get(), 6);
/// assert_eq!(board.gap(Column::C), 3);
/// assert_eq!(board.nim_sum(), 3);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard", into = "RawBoard")]
pub struct Board {
    rows: SideMap<[Row; BOARD_SIZE]>,
}

impl Board {
    /// Create a board from raw row numbers, indexed by column.
    pub fn new(green: [u8; BOARD_SIZE], red: [u8; BOARD_SIZE]) -> Result<Board> {
        let mut rows = SideMap::with_value([Row::TOP; BOARD_SIZE]);
        for column in Column::ALL {
            rows[Side::Green][column.index()] = Row::new(green[column.index()])?;
            rows[Side::Red][column.index()] = Row::new(red[column.index()])?;
        }
        Self::checked(rows)
    }

    /// Create a board from each side's list of squares.
    ///
    /// Each list must name every column exactly once, and no square may
    /// appear in both lists.
    pub fn from_squares(green: &[Square], red: &[Square]) -> Result<Board> {
        let mut rows = SideMap::with_value([Row::TOP; BOARD_SIZE]);
        for (side, squares) in [(Side::Green, green), (Side::Red, red)] {
            let mut seen = [false; BOARD_SIZE];
            for square in squares {
                let idx = square.column.index();
                if seen[idx] {
                    return Err(GameError::DuplicateColumn { side, column: square.column });
                }
                seen[idx] = true;
                rows[side][idx] = square.row;
            }
            if let Some(missing) = Column::ALL.into_iter().find(|c| !seen[c.index()]) {
                return Err(GameError::MissingColumn { side, column: missing });
            }
        }
        Self::checked(rows)
    }

    /// Random setup: every column gets two distinct rows drawn uniformly,
    /// the first for Green, the second for Red.
    pub fn random(rng: &mut GameRng) -> Board {
        let mut rows = SideMap::with_value([Row::TOP; BOARD_SIZE]);
        for column in Column::ALL {
            let picked = rng.sample_distinct(BOARD_SIZE, 2);
            // sample_distinct returns indices below BOARD_SIZE
            rows[Side::Green][column.index()] = Row(picked[0] as u8 + 1);
            rows[Side::Red][column.index()] = Row(picked[1] as u8 + 1);
        }
        Board { rows }
    }

    fn checked(rows: SideMap<[Row; BOARD_SIZE]>) -> Result<Board> {
        for column in Column::ALL {
            let row = rows[Side::Green][column.index()];
            if row == rows[Side::Red][column.index()] {
                return Err(GameError::SharedCell { column, row });
            }
        }
        Ok(Board { rows })
    }

    /// Row of a side's marker in a column.
    #[inline]
    #[must_use]
    pub fn row(&self, side: Side, column: Column) -> Row {
        self.rows[side][column.index()]
    }

    /// All of a side's rows, indexed by column.
    #[must_use]
    pub fn rows(&self, side: Side) -> &[Row; BOARD_SIZE] {
        &self.rows[side]
    }

    /// A side's markers as squares, in column order.
    pub fn squares(&self, side: Side) -> impl Iterator<Item = Square> + '_ {
        Column::ALL
            .into_iter()
            .map(move |column| Square::new(column, self.row(side, column)))
    }

    /// Which side's marker (if any) occupies a square.
    #[must_use]
    pub fn occupant(&self, square: Square) -> Option<Side> {
        Side::ALL
            .into_iter()
            .find(|&side| self.row(side, square.column) == square.row)
    }

    /// Check whether either marker occupies a square.
    #[inline]
    #[must_use]
    pub fn is_occupied(&self, column: Column, row: Row) -> bool {
        self.row(Side::Green, column) == row || self.row(Side::Red, column) == row
    }

    /// Overwrite a side's row in one column.
    ///
    /// Only the shared-cell invariant is checked here; path legality is the
    /// move generator's job.
    pub fn set_row(&mut self, side: Side, column: Column, row: Row) -> Result<()> {
        if self.row(side.opponent(), column) == row {
            return Err(GameError::SharedCell { column, row });
        }
        self.rows[side][column.index()] = row;
        Ok(())
    }

    /// Empty cells strictly between the two markers of a column.
    #[inline]
    #[must_use]
    pub fn gap(&self, column: Column) -> u8 {
        self.row(Side::Green, column)
            .cells_between(self.row(Side::Red, column))
    }

    /// Gaps of all columns, indexed by column.
    #[must_use]
    pub fn gaps(&self) -> [u8; BOARD_SIZE] {
        Column::ALL.map(|column| self.gap(column))
    }

    /// XOR of all gaps. Zero means the position is balanced.
    #[must_use]
    pub fn nim_sum(&self) -> u8 {
        self.gaps().into_iter().fold(0, |acc, gap| acc ^ gap)
    }
}

impl TryFrom<RawBoard> for Board {
    type Error = GameError;

    fn try_from(raw: RawBoard) -> Result<Self> {
        Board::new(raw.green, raw.red)
    }
}

impl From<Board> for RawBoard {
    fn from(board: Board) -> RawBoard {
        RawBoard {
            green: board.rows[Side::Green].map(Row::get),
            red: board.rows[Side::Red].map(Row::get),
        }
    }
}
