//! Unit tests for style application on the document tree

use chromacord::document::{Document, Selection};
use chromacord::palette::lookup_by_code;

#[cfg(test)]
mod style_applier_tests {
    use super::*;

    #[test]
    fn test_wrap_keeps_surrounding_text() {
        let mut doc = Document::new("xabcx");
        doc.apply_style(Selection::new(1, 4), lookup_by_code(1).unwrap());

        assert_eq!(doc.plain_text(), "xabcx");
        assert!(doc.is_styled());
    }

    #[test]
    fn test_empty_selection_leaves_document_identical() {
        let mut doc = Document::new("some text");
        doc.apply_style(Selection::new(2, 5), lookup_by_code(33).unwrap());
        let before = doc.clone();

        doc.apply_style(Selection::caret(3), lookup_by_code(31).unwrap());
        doc.apply_style(Selection::new(4, 4), lookup_by_code(41).unwrap());

        assert_eq!(doc, before);
    }

    #[test]
    fn test_reversed_selection_normalizes() {
        let mut forward = Document::new("abcdef");
        let mut backward = Document::new("abcdef");

        forward.apply_style(Selection::new(1, 4), lookup_by_code(32).unwrap());
        backward.apply_style(Selection::new(4, 1), lookup_by_code(32).unwrap());

        assert_eq!(forward, backward);
    }

    #[test]
    fn test_reset_all_restores_seed_exactly() {
        let seed = "line one\nline two";
        let mut doc = Document::new(seed);
        doc.apply_style(Selection::new(0, 4), lookup_by_code(31).unwrap());
        doc.apply_style(Selection::new(5, 8), lookup_by_code(1).unwrap());
        doc.apply_style(Selection::new(9, 13), lookup_by_code(46).unwrap());

        doc.apply_style(Selection::caret(0), lookup_by_code(0).unwrap());

        assert_eq!(doc.plain_text(), seed);
        assert!(!doc.is_styled());
        assert_eq!(doc, Document::new(seed));
    }

    #[test]
    fn test_second_style_nests_inside_first() {
        let mut doc = Document::new("xabcx");
        doc.apply_style(Selection::new(1, 4), lookup_by_code(31).unwrap());
        doc.apply_style(Selection::new(2, 3), lookup_by_code(1).unwrap());

        // Plain text unchanged, both styles present in the tree.
        assert_eq!(doc.plain_text(), "xabcx");
        assert!(doc.is_styled());
    }

    #[test]
    fn test_same_category_nests_rather_than_merges() {
        // Red over the whole word, then green over a sub-range: both spans
        // stay in the tree.
        let mut doc = Document::new("word");
        doc.apply_style(Selection::new(0, 4), lookup_by_code(31).unwrap());
        let red_only = doc.clone();
        doc.apply_style(Selection::new(1, 3), lookup_by_code(32).unwrap());

        assert_ne!(doc, red_only);
        assert_eq!(doc.plain_text(), "word");
    }

    #[test]
    fn test_selection_clamped_to_document_length() {
        let mut doc = Document::new("abc");
        doc.apply_style(Selection::new(1, 999), lookup_by_code(34).unwrap());
        assert_eq!(doc.plain_text(), "abc");
        assert!(doc.is_styled());
    }

    #[test]
    fn test_fully_out_of_range_selection_is_ignored() {
        let mut doc = Document::new("abc");
        let before = doc.clone();
        doc.apply_style(Selection::new(10, 20), lookup_by_code(34).unwrap());
        assert_eq!(doc, before);
    }

    #[test]
    fn test_multibyte_text_selection() {
        let mut doc = Document::new("héllo wörld");
        doc.apply_style(Selection::new(1, 4), lookup_by_code(35).unwrap());
        assert_eq!(doc.plain_text(), "héllo wörld");
        assert_eq!(doc.char_len(), 11);
    }

    #[test]
    fn test_style_across_line_break() {
        let mut doc = Document::new("ab\ncd");
        doc.apply_style(Selection::new(1, 4), lookup_by_code(36).unwrap());
        assert_eq!(doc.plain_text(), "ab\ncd");
        assert!(doc.is_styled());
    }

    #[test]
    fn test_whole_document_selection() {
        let mut doc = Document::new("everything");
        doc.apply_style(Selection::new(0, 10), lookup_by_code(45).unwrap());
        assert_eq!(doc.plain_text(), "everything");
        assert!(doc.is_styled());
    }
}
