//! Property tests over randomly drawn cards.

use proptest::prelude::*;

use rust_set::{full_deck, is_set, third_card, CardError, SetCard};

fn any_card() -> impl Strategy<Value = SetCard> {
    proptest::sample::select(full_deck())
}

proptest! {
    #[test]
    fn completion_produces_a_valid_set(a in any_card(), b in any_card()) {
        prop_assume!(a != b);

        let c = third_card(&a, &b).unwrap();
        prop_assert!(is_set(&a, &b, &c));
    }

    #[test]
    fn completion_is_symmetric(a in any_card(), b in any_card()) {
        prop_assume!(a != b);

        prop_assert_eq!(third_card(&a, &b), third_card(&b, &a));
    }

    /// Any two cards of a valid triple derive the remaining one.
    #[test]
    fn completion_closes_over_the_triple(a in any_card(), b in any_card()) {
        prop_assume!(a != b);

        let c = third_card(&a, &b).unwrap();
        prop_assert_eq!(third_card(&a, &c).unwrap(), b);
        prop_assert_eq!(third_card(&b, &c).unwrap(), a);
    }

    #[test]
    fn validity_is_order_independent(a in any_card(), b in any_card(), c in any_card()) {
        let expected = is_set(&a, &b, &c);

        prop_assert_eq!(is_set(&b, &a, &c), expected);
        prop_assert_eq!(is_set(&c, &b, &a), expected);
        prop_assert_eq!(is_set(&a, &c, &b), expected);
        prop_assert_eq!(is_set(&b, &c, &a), expected);
        prop_assert_eq!(is_set(&c, &a, &b), expected);
    }

    #[test]
    fn rendering_separates_distinct_cards(a in any_card(), b in any_card()) {
        prop_assert_eq!(a == b, a.to_string() == b.to_string());
    }

    #[test]
    fn equal_cards_never_complete(a in any_card()) {
        prop_assert_eq!(third_card(&a, &a), Err(CardError::InvalidPair));
    }

    #[test]
    fn cards_round_trip_through_serde(a in any_card()) {
        let json = serde_json::to_string(&a).unwrap();
        let back: SetCard = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(a, back);
    }
}
