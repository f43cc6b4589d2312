//! Sides and per-side data storage.
//!
//! ## Side
//!
//! The two sides of every game in this crate. Green always moves first.
//!
//! ## SideMap
//!
//! Fixed two-slot storage indexed by `Side`, used for anything the board
//! keeps once per side.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Green,
    Red,
}

impl Side {
    /// Both sides in turn order.
    pub const ALL: [Side; 2] = [Side::Green, Side::Red];

    /// The side that moves first.
    pub const FIRST: Side = Side::Green;

    /// Get the other side.
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Green => Side::Red,
            Side::Red => Side::Green,
        }
    }

    /// Slot index (Green = 0, Red = 1).
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Green => write!(f, "Green"),
            Side::Red => write!(f, "Red"),
        }
    }
}

/// Per-side data storage with O(1) access.
///
/// ## Example
///
/// ```
/// use poker_nim::core::{Side, SideMap};
///
/// let mut wins: SideMap<u32> = SideMap::with_value(0);
/// wins[Side::Red] += 1;
///
/// assert_eq!(wins[Side::Green], 0);
/// assert_eq!(wins[Side::Red], 1);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SideMap<T> {
    data: [T; 2],
}

impl<T> SideMap<T> {
    /// Create from explicit Green and Red values.
    pub const fn new(green: T, red: T) -> Self {
        Self { data: [green, red] }
    }

    /// Create with values from a factory function.
    pub fn from_fn(factory: impl Fn(Side) -> T) -> Self {
        Self {
            data: [factory(Side::Green), factory(Side::Red)],
        }
    }

    /// Create with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self {
            data: [value.clone(), value],
        }
    }

    /// Get a reference to a side's data.
    #[must_use]
    pub fn get(&self, side: Side) -> &T {
        &self.data[side.index()]
    }

    /// Get a mutable reference to a side's data.
    pub fn get_mut(&mut self, side: Side) -> &mut T {
        &mut self.data[side.index()]
    }

    /// Iterate over (Side, &T) pairs in turn order.
    pub fn iter(&self) -> impl Iterator<Item = (Side, &T)> {
        Side::ALL.into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Side> for SideMap<T> {
    type Output = T;

    fn index(&self, side: Side) -> &Self::Output {
        self.get(side)
    }
}

impl<T> IndexMut<Side> for SideMap<T> {
    fn index_mut(&mut self, side: Side) -> &mut Self::Output {
        self.get_mut(side)
    }
}
