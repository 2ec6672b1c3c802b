//! Property-based tests for the page state types
//!
//! Uses proptest to check the slider, accordion and menu invariants over
//! arbitrary sequences of operations.

use harborline_core::{Accordion, MenuIcon, MobileMenu, SlideDeck};
use proptest::prelude::*;

// ============================================================================
// Strategy Generators
// ============================================================================

/// Operations on a slide deck
#[derive(Debug, Clone)]
enum DeckOp {
    Advance,
    Select(usize), // May be out of range
}

fn deck_ops_strategy(max_ops: usize) -> impl Strategy<Value = Vec<DeckOp>> {
    prop::collection::vec(
        prop_oneof![
            3 => Just(DeckOp::Advance),
            1 => (0..40usize).prop_map(DeckOp::Select),
        ],
        0..max_ops,
    )
}

// ============================================================================
// Property Tests
// ============================================================================

proptest! {
    /// Repeated advances visit 0, 1, ..., N-1, 0, ... in order
    #[test]
    fn advance_cycles_in_order(n in 1..20usize, steps in 0..200usize) {
        let mut deck = SlideDeck::new(n, n).unwrap();
        for step in 1..=steps {
            let index = deck.advance();
            prop_assert_eq!(index, step % n);
        }
        prop_assert_eq!(deck.current(), steps % n);
    }

    /// Exactly one slide is active after any sequence of operations
    #[test]
    fn exactly_one_active(n in 1..20usize, ops in deck_ops_strategy(100)) {
        let mut deck = SlideDeck::new(n, n).unwrap();
        for op in ops {
            match op {
                DeckOp::Advance => { deck.advance(); }
                DeckOp::Select(index) => {
                    let before = deck.current();
                    let result = deck.activate(index);
                    prop_assert_eq!(result.is_ok(), index < n);
                    if result.is_err() {
                        prop_assert_eq!(deck.current(), before);
                    }
                }
            }
            prop_assert!(deck.current() < n);
            prop_assert_eq!(deck.active_flags().filter(|active| *active).count(), 1);
        }
    }

    /// Mismatched slide and indicator counts never build a deck
    #[test]
    fn mismatch_always_rejected(slides in 0..50usize, indicators in 0..50usize) {
        prop_assume!(slides != indicators);
        prop_assert!(SlideDeck::new(slides, indicators).is_err());
    }

    /// The accordion matches a single-slot model and never has two open items
    #[test]
    fn accordion_single_open(len in 1..15usize, clicks in prop::collection::vec(0..15usize, 0..60)) {
        let mut faq = Accordion::new(len);
        let mut model: Option<usize> = None;

        for index in clicks {
            if index >= len {
                prop_assert!(faq.toggle(index).is_err());
            } else {
                faq.toggle(index).unwrap();
                model = if model == Some(index) { None } else { Some(index) };
            }
            prop_assert_eq!(faq.open_item(), model);
            prop_assert!((0..len).filter(|i| faq.is_open(*i)).count() <= 1);
        }
    }

    /// Menu state depends only on the parity of toggles
    #[test]
    fn menu_toggle_parity(toggles in 0..50usize) {
        let mut menu = MobileMenu::default();
        for _ in 0..toggles {
            menu.toggle();
        }
        let open = toggles % 2 == 1;
        prop_assert_eq!(menu.is_open(), open);
        prop_assert_eq!(menu.icon(), if open { MenuIcon::Close } else { MenuIcon::List });
    }
}
