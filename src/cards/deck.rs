//! Deck generation: the 81-card universe, ordered or shuffled.

use super::attributes::{Attribute, Color, Count, Fill, Shape};
use super::card::SetCard;
use crate::core::DeckRng;

/// Number of cards in a complete deck: one per combination of the four
/// three-value domains.
pub const DECK_SIZE: usize = 81;

/// The complete deck in canonical order.
///
/// Count varies outermost, then fill, color, and shape. Exactly
/// [`DECK_SIZE`] cards, no two equal.
#[must_use]
pub fn full_deck() -> Vec<SetCard> {
    let mut deck = Vec::with_capacity(DECK_SIZE);
    for count in Count::MEMBERS {
        for fill in Fill::MEMBERS {
            for color in Color::MEMBERS {
                for shape in Shape::MEMBERS {
                    deck.push(SetCard::new(count, fill, color, shape));
                }
            }
        }
    }
    deck
}

/// A freshly shuffled deck.
///
/// The order carries no meaning beyond presentation. The RNG is
/// caller-owned, so a fixed seed reproduces the same order.
///
/// ```
/// use rust_set::{make_deck, DeckRng, DECK_SIZE};
///
/// let deck = make_deck(&mut DeckRng::new(7));
/// assert_eq!(deck.len(), DECK_SIZE);
/// ```
#[must_use]
pub fn make_deck(rng: &mut DeckRng) -> Vec<SetCard> {
    let mut deck = full_deck();
    rng.shuffle(&mut deck);
    deck
}
