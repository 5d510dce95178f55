//! Property-based tests for the document and serializer
//!
//! These use proptest to generate random seeds and style applications and
//! verify the structural invariants the wire format depends on.

use chromacord::document::{Document, Selection};
use chromacord::export;
use chromacord::palette::{lookup_by_code, PALETTE};
use proptest::prelude::*;

/// Any SGR code from the fixed palette except the reset command
fn styling_code() -> impl Strategy<Value = u8> {
    prop::sample::select(
        PALETTE
            .iter()
            .map(|cmd| cmd.code)
            .filter(|&code| code != 0)
            .collect::<Vec<_>>(),
    )
}

proptest! {
    #[test]
    fn prop_unstyled_serialization_is_identity(seed in "[a-zA-Z0-9 \n]{0,200}") {
        let doc = Document::new(seed.clone());
        prop_assert_eq!(export::serialize(&doc), seed);
    }

    #[test]
    fn prop_styling_never_changes_plain_text(
        seed in "[a-zA-Z0-9 \n]{1,100}",
        ranges in prop::collection::vec((0usize..120, 0usize..120, styling_code()), 0..12),
    ) {
        let mut doc = Document::new(seed.clone());
        for (start, end, code) in ranges {
            let cmd = lookup_by_code(code).unwrap();
            doc.apply_style(Selection::new(start, end), cmd);
            prop_assert_eq!(doc.plain_text(), seed.clone());
        }
    }

    #[test]
    fn prop_strip_sgr_recovers_plain_text(
        seed in "[a-zA-Z0-9 \n]{1,100}",
        ranges in prop::collection::vec((0usize..120, 0usize..120, styling_code()), 0..12),
    ) {
        let mut doc = Document::new(seed.clone());
        for (start, end, code) in ranges {
            doc.apply_style(Selection::new(start, end), lookup_by_code(code).unwrap());
        }
        prop_assert_eq!(export::strip_sgr(&export::serialize(&doc)), seed);
    }

    #[test]
    fn prop_escapes_stay_balanced(
        seed in "[a-zA-Z0-9 ]{1,80}",
        ranges in prop::collection::vec((0usize..100, 0usize..100, styling_code()), 0..10),
    ) {
        let mut doc = Document::new(seed);
        for (start, end, code) in ranges {
            doc.apply_style(Selection::new(start, end), lookup_by_code(code).unwrap());
        }

        let out = export::serialize(&doc);
        let escapes = out.matches('\x1b').count();
        let resets = out.matches("\x1b[0m").count();
        // Every styled span contributes one opening sequence and one reset.
        prop_assert_eq!(escapes, resets * 2);
    }

    #[test]
    fn prop_serialize_is_idempotent(
        seed in "[a-zA-Z0-9 \n]{1,80}",
        ranges in prop::collection::vec((0usize..100, 0usize..100, styling_code()), 0..8),
    ) {
        let mut doc = Document::new(seed);
        for (start, end, code) in ranges {
            doc.apply_style(Selection::new(start, end), lookup_by_code(code).unwrap());
        }
        prop_assert_eq!(export::serialize(&doc), export::serialize(&doc));
    }

    #[test]
    fn prop_reset_restores_seed(
        seed in "[a-zA-Z0-9 \n]{1,100}",
        ranges in prop::collection::vec((0usize..120, 0usize..120, styling_code()), 0..12),
    ) {
        let mut doc = Document::new(seed.clone());
        for (start, end, code) in ranges {
            doc.apply_style(Selection::new(start, end), lookup_by_code(code).unwrap());
        }

        doc.apply_style(Selection::caret(0), lookup_by_code(0).unwrap());
        prop_assert_eq!(&doc, &Document::new(seed));
    }

    #[test]
    fn prop_multibyte_seeds_do_not_panic(
        seed in "[a-zA-Z0-9éäö☕日本 ]{0,60}",
        ranges in prop::collection::vec((0usize..80, 0usize..80, styling_code()), 0..8),
    ) {
        let mut doc = Document::new(seed.clone());
        for (start, end, code) in ranges {
            doc.apply_style(Selection::new(start, end), lookup_by_code(code).unwrap());
        }
        prop_assert_eq!(doc.plain_text(), seed);
        let _ = export::export(&doc);
    }
}
