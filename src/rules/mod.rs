//! Set game rules: the validity predicate and third-card completion.
//!
//! Both operations factor through the per-attribute algebra in
//! [`crate::cards::attributes`]. A triple is a set iff every attribute line
//! is all-same or all-different, and two distinct cards determine exactly
//! one completing third card.

use crate::cards::{Attribute, SetCard};
use crate::error::CardError;

/// Whether three values form a valid line: all equal or pairwise distinct.
///
/// Exactly two equal values is the one failing shape.
fn line_is_valid<A: Attribute>(a: A, b: A, c: A) -> bool {
    if a == b {
        b == c
    } else {
        c != a && c != b
    }
}

/// Whether the three cards form a set.
///
/// Each of the four attributes is checked independently; the triple is
/// valid iff every attribute is all-same or all-different across the three
/// cards. Symmetric in its arguments.
///
/// ## Example
///
/// ```
/// use rust_set::{is_set, Color, Count, Fill, SetCard, Shape};
///
/// let a = SetCard::new(Count::One, Fill::Empty, Color::Red, Shape::Quad);
/// let b = SetCard::new(Count::Two, Fill::Shaded, Color::Green, Shape::Oval);
/// let c = SetCard::new(Count::Three, Fill::Filled, Color::Blue, Shape::Pyramid);
/// assert!(is_set(&a, &b, &c));
/// ```
#[must_use]
pub fn is_set(a: &SetCard, b: &SetCard, c: &SetCard) -> bool {
    line_is_valid(a.count, b.count, c.count)
        && line_is_valid(a.fill, b.fill, c.fill)
        && line_is_valid(a.color, b.color, c.color)
        && line_is_valid(a.shape, b.shape, c.shape)
}

/// The unique card completing a set with `a` and `b`.
///
/// Derived per attribute in closed form: equal values complete with
/// themselves, distinct values with the remaining member of the domain.
/// No search is involved, and `is_set(a, b, &third_card(a, b)?)` holds by
/// construction.
///
/// Fails with [`CardError::InvalidPair`] when the cards are equal: a card
/// and its copy admit no distinct third card, and completing them with
/// themselves would not be a valid set.
///
/// ## Example
///
/// ```
/// use rust_set::{third_card, Color, Count, Fill, SetCard, Shape};
///
/// let a = SetCard::new(Count::One, Fill::Empty, Color::Red, Shape::Quad);
/// let b = SetCard::new(Count::Two, Fill::Shaded, Color::Blue, Shape::Oval);
/// assert_eq!(third_card(&a, &b)?.to_string(), "3FGP");
/// # Ok::<(), rust_set::CardError>(())
/// ```
pub fn third_card(a: &SetCard, b: &SetCard) -> Result<SetCard, CardError> {
    if a == b {
        return Err(CardError::InvalidPair);
    }

    Ok(SetCard::new(
        Attribute::third(a.count, b.count),
        Attribute::third(a.fill, b.fill),
        Attribute::third(a.color, b.color),
        Attribute::third(a.shape, b.shape),
    ))
}
