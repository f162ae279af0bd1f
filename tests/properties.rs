//! Property tests for pile indexing, range operations and sorting.

use pickcard::{Card, CardComparator, Pile, Rank, Suit};
use proptest::prelude::*;

fn arb_card() -> impl Strategy<Value = Card> {
    (0..Suit::ALL.len(), 0..Rank::ALL.len(), any::<bool>())
        .prop_map(|(suit, rank, face_up)| Card::new(Suit::ALL[suit], Rank::ALL[rank], face_up))
}

fn arb_pile() -> impl Strategy<Value = Pile> {
    prop::collection::vec(prop::option::of(arb_card()), 0..24).prop_map(Pile::from)
}

fn arb_comparator() -> impl Strategy<Value = CardComparator> {
    (0..CardComparator::ALL.len()).prop_map(|i| CardComparator::ALL[i])
}

proptest! {
    /// Property: normalised indices always land on a usable position.
    #[test]
    fn prop_normalize_stays_in_bounds(pile in arb_pile(), index in any::<isize>()) {
        let len = pile.len();
        let read = pile.normalize_index(index, false);
        let insert = pile.normalize_index(index, true);

        if len == 0 {
            prop_assert_eq!(read, 0);
            prop_assert_eq!(insert, 0);
            prop_assert!(pile.get_card_at(index).is_err());
        } else {
            prop_assert!(read < len);
            prop_assert!(insert <= len);
            prop_assert!(pile.get_card_at(index).is_ok());
        }
    }

    /// Property: putting picked cards back at the resolved start restores the pile.
    #[test]
    fn prop_pick_then_add_round_trips(
        pile in arb_pile(),
        index in -30isize..30,
        quantity in 0isize..30,
    ) {
        let mut working = pile.clone();
        let start = working.normalize_index(index, false);
        let picked = working.pick_cards_at(index, quantity).unwrap();

        prop_assert_eq!(picked.len() + working.len(), pile.len());
        working.add_cards_at(start as isize, picked);
        prop_assert_eq!(working, pile);
    }

    /// Property: non-negative indices round trip without resolving them first.
    #[test]
    fn prop_pick_then_add_round_trips_from_bottom(
        pile in arb_pile(),
        index in 0isize..30,
        quantity in 0isize..30,
    ) {
        let mut working = pile.clone();
        let picked = working.pick_cards_at(index, quantity).unwrap();
        working.add_cards_at(index, picked);
        prop_assert_eq!(working, pile);
    }

    /// Property: over-sized requests return the whole pile.
    #[test]
    fn prop_quantity_clamps_to_size(pile in arb_pile(), extra in 0isize..10) {
        let quantity = pile.len() as isize + extra;
        let view = pile.get_cards(quantity).unwrap();
        prop_assert_eq!(&view, &pile);

        let mut working = pile.clone();
        let picked = working.pick_cards(quantity).unwrap();
        prop_assert_eq!(picked, pile);
        prop_assert!(working.is_empty());
    }

    /// Property: a deep copy is equal and independent of its source.
    #[test]
    fn prop_deep_copy_is_independent(pile in arb_pile()) {
        let mut copy = pile.deep_copy();
        prop_assert_eq!(&copy, &pile);

        copy.toggle_face_up();
        let has_cards = pile.iter().any(Option::is_some);
        prop_assert_eq!(copy != pile, has_cards);
    }

    /// Property: sorting keeps the input order of cards that compare equal.
    #[test]
    fn prop_sort_is_stable(pile in arb_pile(), comparator in arb_comparator()) {
        let mut sorted = pile.clone();
        sorted.sort(comparator);

        let slots = sorted.cards();
        for pair in slots.windows(2) {
            prop_assert_ne!(
                comparator.compare(pair[0].as_ref(), pair[1].as_ref()),
                core::cmp::Ordering::Greater
            );
        }

        // Cards equal under every strategy differ only in orientation, so the
        // orientation sequence per identity must match the input.
        for suit in Suit::ALL {
            for rank in Rank::ALL {
                let faces = |p: &Pile| -> Vec<bool> {
                    p.iter()
                        .flatten()
                        .filter(|card| card.suit() == suit && card.rank() == rank)
                        .map(Card::is_face_up)
                        .collect()
                };
                prop_assert_eq!(faces(&sorted), faces(&pile));
            }
        }

        let empties = |p: &Pile| p.iter().filter(|slot| slot.is_none()).count();
        prop_assert_eq!(empties(&sorted), empties(&pile));
    }
}
