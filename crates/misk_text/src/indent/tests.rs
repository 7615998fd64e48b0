
use super::*;
use crate::config::ReflowConfig;
use crate::error::ReflowError;

fn reindent(text: &str, old_unit: &str, new_unit: &str) -> Result<String> {
    Reflower::default().reindent(text, old_unit, new_unit)
}

fn reason(result: Result<String>) -> Option<InvalidArgument> {
    result.err().map(|e| e.reason().clone())
}

mod reindent_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn reindent_two_to_four_spaces() {
        assert_eq!(
            reindent("  a\n    b", "  ", "    ").ok(),
            Some("    a\n        b".to_string())
        );
    }

    #[test]
    fn reindent_spaces_to_tabs() {
        assert_eq!(
            reindent("a\n    b\n        c\n", "    ", "\t").ok(),
            Some("a\n\tb\n\t\tc\n".to_string())
        );
    }

    #[test]
    fn reindent_tabs_to_spaces() {
        assert_eq!(
            reindent("\tx\n\t\ty", "\t", "  ").ok(),
            Some("  x\n    y".to_string())
        );
    }

    #[test]
    fn reindent_same_unit_is_idempotent() {
        let input = "a\n  b\n  \n    c\n";
        let once = reindent(input, "  ", "  ").unwrap_or_default();
        assert_eq!(once, "a\n  b\n\n    c\n");
        assert_eq!(reindent(&once, "  ", "  ").ok(), Some(once.clone()));
    }

    #[test]
    fn reindent_keeps_unindented_lines() {
        assert_eq!(
            reindent("top\n\nnext", "  ", "\t").ok(),
            Some("top\n\nnext".to_string())
        );
    }

    #[test]
    fn reindent_keeps_non_breaking_space_lines() {
        assert_eq!(
            reindent("\u{a0}\n  x", "  ", "    ").ok(),
            Some("\u{a0}\n    x".to_string())
        );
        assert_eq!(
            reindent("  \u{3000}", "  ", "\t").ok(),
            Some("\t\u{3000}".to_string())
        );
    }

    #[test]
    fn reindent_rejects_partial_unit() {
        assert_eq!(
            reason(reindent("a\n   b", "  ", "    ")),
            Some(InvalidArgument::UnalignedIndentation {
                line: 2,
                indent: "   ".to_string(),
                unit: "  ".to_string(),
            })
        );
    }

    #[test]
    fn reindent_rejects_mixed_indentation() {
        assert_eq!(
            reason(reindent("a\n\t  b", "\t", "  ")),
            Some(InvalidArgument::MixedIndentation { line: 2 })
        );
    }

    #[test]
    fn reindent_rejects_wrong_kind_of_whitespace() {
        assert!(matches!(
            reason(reindent("\tb", "  ", "    ")),
            Some(InvalidArgument::UnalignedIndentation { line: 1, .. })
        ));
    }

    #[test]
    fn reindent_rejects_bad_units() {
        assert_eq!(
            reason(reindent("a", "", "  ")),
            Some(InvalidArgument::BadIndentUnit {
                unit: String::new()
            })
        );
        assert_eq!(
            reason(reindent("a", "  ", " \t")),
            Some(InvalidArgument::BadIndentUnit {
                unit: " \t".to_string()
            })
        );
        assert_eq!(
            reason(reindent("a", "--", "  ")),
            Some(InvalidArgument::BadIndentUnit {
                unit: "--".to_string()
            })
        );
    }

    #[test]
    fn reindent_error_kind() {
        let err = reindent(" x", "  ", "\t").err();
        assert!(matches!(err, Some(ReflowError::InvalidArgument(_))));
    }

    #[test]
    fn reindent_empty() {
        assert_eq!(reindent("", "  ", "\t").ok(), Some(String::new()));
    }
}

mod dedent_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn dedent(text: &str, tab_size: usize) -> String {
        Reflower::new(ReflowConfig::with_tab_size(tab_size))
            .and_then(|r| r.dedent(text))
            .unwrap_or_default()
    }

    #[test]
    fn dedent_common_spaces() {
        assert_eq!(dedent("    a\n      b\n    c", 4), "a\n  b\nc");
    }

    #[test]
    fn dedent_ignores_blank_lines() {
        assert_eq!(dedent("    a\n\n  \n    b\n", 4), "a\n\n\nb\n");
    }

    #[test]
    fn dedent_counts_non_breaking_space_line_as_content() {
        assert_eq!(dedent("    a\n\u{a0}", 4), "    a\n\u{a0}");
    }

    #[test]
    fn dedent_tabs_match_spaces_by_column() {
        assert_eq!(dedent("\ta\n    b", 4), "a\nb");
    }

    #[test]
    fn dedent_keeps_tabs_after_stop_aligned_cut() {
        assert_eq!(dedent("\ta\n\t\tb", 4), "a\n\tb");
    }

    #[test]
    fn dedent_uneven_cut_falls_back_to_spaces() {
        assert_eq!(dedent("  a\n  \tb", 4), "a\n  b");
    }

    #[test]
    fn dedent_nothing_in_common() {
        assert_eq!(dedent("a\n    b", 4), "a\n    b");
    }
}

mod indent_block_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn indent_block_replaces_common_indent() {
        assert_eq!(
            Reflower::default()
                .indent_block("        x\n            y", "\t")
                .ok(),
            Some("\tx\n\t    y".to_string())
        );
    }

    #[test]
    fn indent_block_skips_blank_lines() {
        assert_eq!(
            Reflower::default().indent_block("a\n\nb\n", "  ").ok(),
            Some("  a\n\n  b\n".to_string())
        );
    }
}

mod style_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn convert_spaces_to_tabs() {
        assert_eq!(
            Reflower::default()
                .convert_indentation("a\n  b\n    c", IndentationStyle::Tabs)
                .ok(),
            Some("a\n\tb\n\t\tc".to_string())
        );
    }

    #[test]
    fn convert_tabs_to_spaces() {
        assert_eq!(
            Reflower::default()
                .convert_indentation("a\n\tb", IndentationStyle::Spaces(4))
                .ok(),
            Some("a\n    b".to_string())
        );
    }

    #[test]
    fn convert_unindented_is_unchanged() {
        assert_eq!(
            Reflower::default()
                .convert_indentation("a\n  \nb", IndentationStyle::Tabs)
                .ok(),
            Some("a\n  \nb".to_string())
        );
    }

    #[test]
    fn convert_rejects_zero_spaces() {
        let result = Reflower::default().convert_indentation("a", IndentationStyle::Spaces(0));
        assert_eq!(
            reason(result),
            Some(InvalidArgument::BadIndentUnit {
                unit: String::new()
            })
        );
    }

    #[test]
    fn normalize_to_configured_unit() {
        let reflower = Reflower::new(ReflowConfig::default().indent_unit("  "))
            .unwrap_or_default();
        assert_eq!(
            reflower.normalize_indentation("x\n\ty\n\t\tz\n").ok(),
            Some("x\n  y\n    z\n".to_string())
        );
    }
}
