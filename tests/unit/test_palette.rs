//! Unit tests for the fixed style palette

use chromacord::palette::{self, RenderEffect, Rgb, StyleKind};

#[cfg(test)]
mod palette_tests {
    use super::*;

    #[test]
    fn test_format_commands() {
        let reset = palette::lookup_by_code(0).unwrap();
        assert_eq!(reset.label, "Reset All");
        assert_eq!(reset.kind, StyleKind::ResetAll);

        let bold = palette::lookup_by_code(1).unwrap();
        assert_eq!(bold.label, "Bold");
        assert_eq!(bold.effect, RenderEffect::Bold);

        let underline = palette::lookup_by_code(4).unwrap();
        assert_eq!(underline.label, "Underline");
        assert_eq!(underline.effect, RenderEffect::Underline);
    }

    #[test]
    fn test_foreground_range() {
        for code in 30..=37 {
            let cmd = palette::lookup_by_code(code).unwrap();
            assert_eq!(cmd.kind, StyleKind::Foreground);
            assert!(matches!(cmd.effect, RenderEffect::Foreground(_)));
        }
    }

    #[test]
    fn test_background_range() {
        for code in 40..=47 {
            let cmd = palette::lookup_by_code(code).unwrap();
            assert_eq!(cmd.kind, StyleKind::Background);
            assert!(matches!(cmd.effect, RenderEffect::Background(_)));
        }
    }

    #[test]
    fn test_codes_outside_palette() {
        for code in [2u8, 3, 5, 7, 22, 24, 29, 38, 39, 48, 90, 107, 255] {
            assert!(palette::lookup_by_code(code).is_none(), "code {}", code);
        }
    }

    #[test]
    fn test_round_trip_every_code() {
        // lookup_by_effect(lookup_by_code(code).effect).code == code
        for cmd in &palette::PALETTE {
            let back = palette::lookup_by_effect(&cmd.effect).unwrap();
            assert_eq!(back.code, cmd.code);
        }
    }

    #[test]
    fn test_discord_red_color() {
        let red = palette::lookup_by_code(31).unwrap();
        assert_eq!(red.effect, RenderEffect::Foreground(Rgb::new(220, 50, 47)));
    }

    #[test]
    fn test_duplicate_labels_have_distinct_effects() {
        // "Gray" and "White" appear in both categories; the effects must
        // still be distinct so the inverse lookup stays collision-free.
        let fg_white = palette::lookup_by_code(37).unwrap();
        let bg_white = palette::lookup_by_code(47).unwrap();
        assert_eq!(fg_white.label, bg_white.label);
        assert_ne!(fg_white.effect, bg_white.effect);
    }

    #[test]
    fn test_category_accessors_partition_the_table() {
        let total =
            palette::formats().count() + palette::foregrounds().count() + palette::backgrounds().count();
        assert_eq!(total, palette::PALETTE.len());
    }
}
