//! The Set card value type: construction and rendering.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::attributes::{Attribute, Color, Count, Fill, Shape};
use crate::error::CardError;

/// A single Set card: one value from each of the four attribute domains.
///
/// Cards are plain values. Equality is field equality; there is no card
/// identity beyond the four attributes, and a card never changes after
/// construction.
///
/// ## Example
///
/// ```
/// use rust_set::{Color, Count, Fill, SetCard, Shape};
///
/// let card = SetCard::new(Count::One, Fill::Shaded, Color::Blue, Shape::Oval);
/// assert_eq!(card.to_string(), "1SBO");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct SetCard {
    /// Number of symbols.
    pub count: Count,
    /// Fill style of the symbols.
    pub fill: Fill,
    /// Symbol color.
    pub color: Color,
    /// Symbol shape.
    pub shape: Shape,
}

impl SetCard {
    /// Create a card from typed attribute values.
    ///
    /// The enums make domain membership a given, so this form is total.
    #[must_use]
    pub const fn new(count: Count, fill: Fill, color: Color, shape: Shape) -> Self {
        Self {
            count,
            fill,
            color,
            shape,
        }
    }

    /// Create a card from a numeric count.
    ///
    /// Fails with [`CardError::InvalidAttribute`] when `count` is outside
    /// `1..=3`.
    ///
    /// ```
    /// use rust_set::{Color, Fill, SetCard, Shape};
    ///
    /// let card = SetCard::from_values(2, Fill::Empty, Color::Red, Shape::Quad)?;
    /// assert_eq!(card.to_string(), "2ERQ");
    /// assert!(SetCard::from_values(4, Fill::Empty, Color::Red, Shape::Quad).is_err());
    /// # Ok::<(), rust_set::CardError>(())
    /// ```
    pub fn from_values(
        count: u8,
        fill: Fill,
        color: Color,
        shape: Shape,
    ) -> Result<Self, CardError> {
        Ok(Self::new(Count::from_value(count)?, fill, color, shape))
    }
}

/// Four-character card code: the count digit followed by the fill, color,
/// and shape letters, e.g. `1SBO`.
impl fmt::Display for SetCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}{}",
            self.count.abbreviation(),
            self.fill.abbreviation(),
            self.color.abbreviation(),
            self.shape.abbreviation()
        )
    }
}
