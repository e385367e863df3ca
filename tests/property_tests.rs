//! Property tests: random click streams never break the table.

use proptest::prelude::*;

use freecell_engine::cards::{Card, Deck, DECK_SIZE};
use freecell_engine::core::GameRng;
use freecell_engine::game::{MoveOutcome, SolitaireEngine, Target};
use freecell_engine::rules;
use freecell_engine::zones::ZoneId;

/// Clicks over all 52 cards and all 16 slots (plus one nonexistent slot).
fn target_strategy() -> impl Strategy<Value = Target> {
    let cards = Deck::standard().into_cards();
    let mut zones: Vec<ZoneId> = ZoneId::all().collect();
    zones.push(ZoneId::Freecell(4));

    prop_oneof![
        3 => prop::sample::select(cards).prop_map(Target::Card),
        2 => prop::sample::select(zones).prop_map(Target::Slot),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    #[test]
    fn clicks_preserve_invariants(
        seed in any::<u64>(),
        clicks in prop::collection::vec(target_strategy(), 0..300),
    ) {
        let mut engine = SolitaireEngine::new();
        engine.deal(Deck::shuffled(&mut GameRng::new(seed)).into_cards()).unwrap();

        for target in clicks {
            let before = engine.snapshot();
            let had_selection = engine.selected();
            let outcome = engine.select_or_act(target);

            prop_assert!(engine.check_invariants().is_ok());
            prop_assert_eq!(engine.snapshot().card_count(), DECK_SIZE);

            match outcome {
                MoveOutcome::Selected { card } => {
                    prop_assert_eq!(had_selection, None);
                    prop_assert_eq!(engine.selected(), Some(card));
                    prop_assert!(engine.is_on_top(card));
                }
                MoveOutcome::Moved(record) | MoveOutcome::WonAfterMove(record) => {
                    prop_assert_eq!(had_selection, Some(record.card));
                    prop_assert_eq!(engine.selected(), None);
                    prop_assert_eq!(engine.location_of(record.card), Some(record.to));
                    // A card moved onto a column follows the stacking rule.
                    if let ZoneId::Tableau(_) = record.to {
                        if record.index > 0 {
                            let pile = engine.zones().pile(record.to).unwrap();
                            let base: Card = pile[record.index - 1];
                            prop_assert!(rules::can_stack_on(record.card, base));
                        } else {
                            prop_assert_eq!(record.card.rank().value(), 13);
                        }
                    }
                }
                MoveOutcome::Deselected { card } => {
                    prop_assert_eq!(had_selection, Some(card));
                    prop_assert_eq!(engine.selected(), None);
                }
                MoveOutcome::Rejected { card } => {
                    prop_assert_eq!(card, had_selection);
                    prop_assert_eq!(engine.selected(), None);
                    // Nothing moved.
                    prop_assert_eq!(&engine.snapshot().tableaus, &before.tableaus);
                    prop_assert_eq!(&engine.snapshot().freecells, &before.freecells);
                    prop_assert_eq!(&engine.snapshot().foundations, &before.foundations);
                }
            }
        }
    }

    #[test]
    fn same_seed_same_deal(seed in any::<u64>()) {
        let a = Deck::shuffled(&mut GameRng::new(seed));
        let b = Deck::shuffled(&mut GameRng::new(seed));
        prop_assert_eq!(a, b);
    }
}
