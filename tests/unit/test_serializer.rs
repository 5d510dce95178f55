//! Unit tests for ANSI serialization

use chromacord::document::{Document, Selection};
use chromacord::export;
use chromacord::palette::lookup_by_code;

#[cfg(test)]
mod serializer_tests {
    use super::*;

    #[test]
    fn test_unstyled_document_serializes_to_seed() {
        let seed = "plain text with no styling\nand a second line";
        let doc = Document::new(seed);
        assert_eq!(export::serialize(&doc), seed);
        assert!(!export::has_sgr(&export::serialize(&doc)));
    }

    #[test]
    fn test_bold_selection_wire_format() {
        let mut doc = Document::new("xabcx");
        doc.apply_style(Selection::new(1, 4), lookup_by_code(1).unwrap());
        assert_eq!(export::serialize(&doc), "x\x1b[1mabc\x1b[0mx");
    }

    #[test]
    fn test_nested_styles_contain_inner_escapes() {
        let mut doc = Document::new("xabcx");
        doc.apply_style(Selection::new(1, 4), lookup_by_code(31).unwrap());
        doc.apply_style(Selection::new(2, 3), lookup_by_code(1).unwrap());

        let out = export::serialize(&doc);
        assert_eq!(out, "x\x1b[31ma\x1b[1mb\x1b[0mc\x1b[0mx");

        // The outer 31-sequence fully contains the inner 1-sequence.
        let outer_open = out.find("\x1b[31m").unwrap();
        let inner_open = out.find("\x1b[1m").unwrap();
        let inner_close = out.find("\x1b[0m").unwrap();
        let outer_close = out.rfind("\x1b[0m").unwrap();
        assert!(outer_open < inner_open);
        assert!(inner_open < inner_close);
        assert!(inner_close < outer_close);
    }

    #[test]
    fn test_stacked_styles_nest_one_sequence_each() {
        let mut doc = Document::new("abc");
        doc.apply_style(Selection::new(0, 3), lookup_by_code(30).unwrap());
        doc.apply_style(Selection::new(0, 3), lookup_by_code(40).unwrap());
        doc.apply_style(Selection::new(0, 3), lookup_by_code(1).unwrap());

        assert_eq!(
            export::serialize(&doc),
            "\x1b[30m\x1b[40m\x1b[1mabc\x1b[0m\x1b[0m\x1b[0m"
        );
    }

    #[test]
    fn test_serializer_does_not_mutate() {
        let mut doc = Document::new("hello");
        doc.apply_style(Selection::new(0, 5), lookup_by_code(37).unwrap());
        let before = doc.clone();

        let first = export::serialize(&doc);
        let second = export::serialize(&doc);

        assert_eq!(doc, before);
        assert_eq!(first, second);
    }

    #[test]
    fn test_fenced_wire_format() {
        let doc = Document::new("hi there");
        assert_eq!(export::fenced("hi there"), "```ansi\nhi there\n```");
        assert_eq!(export::export(&doc), "```ansi\nhi there\n```");
    }

    #[test]
    fn test_export_with_styles() {
        let mut doc = Document::new("colored");
        doc.apply_style(Selection::new(0, 7), lookup_by_code(35).unwrap());
        assert_eq!(export::export(&doc), "```ansi\n\x1b[35mcolored\x1b[0m\n```");
    }

    #[test]
    fn test_newlines_survive_serialization() {
        let mut doc = Document::new("a\nb\nc");
        doc.apply_style(Selection::new(0, 5), lookup_by_code(34).unwrap());
        assert_eq!(export::serialize(&doc), "\x1b[34ma\nb\nc\x1b[0m");
    }

    #[test]
    fn test_strip_sgr_inverts_serialization() {
        let mut doc = Document::new("one two three");
        doc.apply_style(Selection::new(0, 3), lookup_by_code(31).unwrap());
        doc.apply_style(Selection::new(4, 7), lookup_by_code(42).unwrap());
        doc.apply_style(Selection::new(8, 13), lookup_by_code(4).unwrap());

        assert_eq!(export::strip_sgr(&export::serialize(&doc)), "one two three");
    }

    #[test]
    fn test_has_sgr() {
        assert!(export::has_sgr("\x1b[31mred\x1b[0m"));
        assert!(!export::has_sgr("plain"));
    }

    #[test]
    fn test_all_emitted_codes_are_in_the_palette() {
        let mut doc = Document::new("abcdefghij");
        for (i, code) in [1u8, 4, 31, 44, 36].iter().enumerate() {
            doc.apply_style(
                Selection::new(i, i + 2),
                lookup_by_code(*code).unwrap(),
            );
        }

        let out = export::serialize(&doc);
        for sequence in out.split('\x1b').filter(|s| s.starts_with('[')) {
            let params = sequence
                .trim_start_matches('[')
                .split_once('m')
                .map(|(params, _)| params)
                .unwrap_or("");
            for param in params.split(';') {
                let code: u8 = param.parse().unwrap();
                assert!(
                    code == 0 || chromacord::palette::lookup_by_code(code).is_some(),
                    "unexpected SGR code {}",
                    code
                );
            }
        }
    }
}
