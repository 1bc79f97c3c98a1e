//! The four attribute domains and their completion algebra.
//!
//! Every Set card combines one value from each of four closed, 3-value
//! domains: count, fill, color, shape. The whole game rule reduces to one
//! fact about those domains: along each attribute, a valid set is either
//! all-same or all-different. The [`Attribute`] trait captures the shared
//! shape of the domains and derives the unique completing value per
//! attribute in closed form.

use serde::{Deserialize, Serialize};

use crate::error::CardError;

/// Common surface of the four card attribute domains.
///
/// Each domain has exactly three members with a fixed display order and a
/// unique one-character rendering code. [`Attribute::third`] is the
/// completion rule: the unique value that extends two given values to a
/// valid all-same or all-different line.
pub trait Attribute: Copy + Eq + Sized {
    /// All members of the domain, in display order.
    const MEMBERS: [Self; 3];

    /// Position of this value within [`Attribute::MEMBERS`].
    fn index(self) -> usize;

    /// One-character code used by the card rendering format.
    fn abbreviation(self) -> char;

    /// The unique value completing a valid line with `a` and `b`.
    ///
    /// Member indices of a valid line sum to 0 mod 3: all-same gives `3i`,
    /// all-different gives `0 + 1 + 2`. Solving for the missing index
    /// covers both cases in one expression, with no search.
    ///
    /// ```
    /// use rust_set::{Attribute, Fill};
    ///
    /// assert_eq!(Attribute::third(Fill::Empty, Fill::Shaded), Fill::Filled);
    /// assert_eq!(Attribute::third(Fill::Empty, Fill::Empty), Fill::Empty);
    /// ```
    #[must_use]
    fn third(a: Self, b: Self) -> Self {
        Self::MEMBERS[(6 - a.index() - b.index()) % 3]
    }
}

/// Number of symbols on a card.
///
/// Discriminants match the printed digit, so the numeric view is a cast.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Count {
    One = 1,
    Two = 2,
    Three = 3,
}

impl Count {
    /// Numeric value in `1..=3`.
    #[must_use]
    pub const fn value(self) -> u8 {
        self as u8
    }

    /// Parse a numeric count.
    ///
    /// Fails with [`CardError::InvalidAttribute`] for values outside
    /// `1..=3`.
    pub fn from_value(value: u8) -> Result<Self, CardError> {
        match value {
            1 => Ok(Count::One),
            2 => Ok(Count::Two),
            3 => Ok(Count::Three),
            other => Err(CardError::InvalidAttribute(other)),
        }
    }
}

impl Attribute for Count {
    const MEMBERS: [Self; 3] = [Count::One, Count::Two, Count::Three];

    fn index(self) -> usize {
        self as usize - 1
    }

    /// Counts render as their digit rather than a letter.
    fn abbreviation(self) -> char {
        (b'0' + self as u8) as char
    }
}

/// Fill style of the symbols on a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Fill {
    Empty,
    Shaded,
    Filled,
}

impl Attribute for Fill {
    const MEMBERS: [Self; 3] = [Fill::Empty, Fill::Shaded, Fill::Filled];

    fn index(self) -> usize {
        self as usize
    }

    fn abbreviation(self) -> char {
        match self {
            Fill::Empty => 'E',
            Fill::Shaded => 'S',
            Fill::Filled => 'F',
        }
    }
}

/// Color of the symbols on a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
}

impl Attribute for Color {
    const MEMBERS: [Self; 3] = [Color::Red, Color::Green, Color::Blue];

    fn index(self) -> usize {
        self as usize
    }

    fn abbreviation(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Blue => 'B',
        }
    }
}

/// Shape of the symbols on a card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Shape {
    Quad,
    Oval,
    Pyramid,
}

impl Attribute for Shape {
    const MEMBERS: [Self; 3] = [Shape::Quad, Shape::Oval, Shape::Pyramid];

    fn index(self) -> usize {
        self as usize
    }

    fn abbreviation(self) -> char {
        match self {
            Shape::Quad => 'Q',
            Shape::Oval => 'O',
            Shape::Pyramid => 'P',
        }
    }
}
