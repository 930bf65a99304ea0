use super::*;
use crate::measure::AnsiAware;
use pretty_assertions::assert_eq;

mod wrap_text_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_text() {
        assert_eq!(
            wrap_text("", 10),
            Wrapped {
                lines: Vec::new(),
                limit: 10,
            }
        );
        // even a nonsensical limit is left alone when there's nothing to fit
        assert_eq!(wrap_text("", 0).limit, 0);
    }

    #[test]
    fn short_text_fits_on_one_line() {
        let wrapped = wrap_text("hello world", 20);
        assert_eq!(wrapped.lines, vec!["hello world "]);
        assert_eq!(wrapped.limit, 20);
    }

    #[test]
    fn limit_is_raised_for_long_words() {
        let wrapped = wrap_text("a supercalifragilistic word", 5);
        assert_eq!(wrapped.limit, 20);
        assert_eq!(wrapped.lines, vec!["a ", "supercalifragilistic ", "word "]);
    }

    #[test]
    fn zero_limit_wraps_to_widest_word() {
        let wrapped = wrap_text("ab cd e", 0);
        assert_eq!(wrapped.limit, 2);
        assert_eq!(wrapped.lines, vec!["ab ", "cd ", "e "]);
    }

    #[test]
    fn cjk_runs_have_no_spaces() {
        // spacing is budgeted between ideographs even though none is rendered
        let wrapped = wrap_text("你好世界", 5);
        assert_eq!(wrapped.lines, vec!["你好", "世界"]);
    }

    #[test]
    fn newlines_are_soft() {
        let wrapped = wrap_text("one\ntwo", 20);
        assert_eq!(wrapped.lines, vec!["one two "]);
    }
}

mod try_wrap_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn fitting_words_wrap_normally() {
        assert_eq!(try_wrap_text("aaa bb cc ddddd", 6), Ok(wrap_text("aaa bb cc ddddd", 6)));
    }

    #[test]
    fn too_wide_word_is_an_error() {
        let err = try_wrap_text("short enormously long", 6).unwrap_err();
        assert_eq!(
            err,
            WrapError::WordTooWide {
                word: "enormously".to_string(),
                width: 10,
                limit: 6,
            }
        );
        assert_eq!(
            err.to_string(),
            "word \"enormously\" is 10 cells wide, which exceeds the limit of 6"
        );
    }

    #[test]
    fn wide_glyphs_count_double() {
        assert!(try_wrap_text("你", 1).is_err());
        assert!(try_wrap_text("你", 2).is_ok());
    }
}

mod wrap_lines_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn hard_breaks_are_kept() {
        let wrapped = wrap_lines("aaa bb cc ddddd\nxy", 6);
        assert_eq!(wrapped.lines, vec!["aaa ", "bb cc ", "ddddd ", "xy "]);
    }

    #[test]
    fn blank_lines_are_kept() {
        let wrapped = wrap_lines("a\n\nb\n", 10);
        assert_eq!(wrapped.lines, vec!["a ", "", "b ", ""]);
    }

    #[test]
    fn limit_is_shared_between_lines() {
        let wrapped = wrap_lines("a b c d\nlengthy", 3);
        assert_eq!(wrapped.limit, 7);
        assert_eq!(wrapped.lines, vec!["a b c d ", "lengthy "]);
    }

    #[test]
    fn empty_text_has_no_lines() {
        assert_eq!(wrap_lines("", 4), Wrapped { lines: Vec::new(), limit: 4 });
    }
}

mod wrap_words_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn groups_are_slices_of_the_input() {
        let words = ["aaa", "bb", "c"];
        let lines = wrap_words(&words, 1, 5, DEFAULT_PENALTY);
        assert_eq!(lines, vec![&words[0..1], &words[1..3]]);
    }

    #[test]
    fn owned_words() {
        let words: Vec<String> = ["x", "y", "z"].iter().map(|w| w.to_string()).collect();
        let lines = wrap_words(&words, 1, 3, DEFAULT_PENALTY);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines.concat(), words);
    }

    #[test]
    fn no_words() {
        assert!(wrap_words::<&str>(&[], 1, 5, DEFAULT_PENALTY).is_empty());
    }

    #[test]
    fn limit_is_not_raised() {
        // a 6-wide word against a limit of 3 overflows on its own line
        let lines = wrap_words(&["a", "bbbbbb", "c"], 1, 3, DEFAULT_PENALTY);
        assert_eq!(lines, vec![&["a"][..], &["bbbbbb"][..], &["c"][..]]);
    }
}

mod options_tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults() {
        let options = WrapOptions::new();
        assert_eq!(options.spacing, DEFAULT_SPACING);
        assert_eq!(options.penalty, DEFAULT_PENALTY);
        assert!((options.wide_script)('漢'));
        assert_eq!(options.measurer, UnicodeWidth);
    }

    #[test]
    fn custom_measurer() {
        // count every character as one cell
        let options = WrapOptions::new().measurer(|text: &str| text.chars().count());
        let wrapped = options.wrap("你好 world", 3);
        assert_eq!(wrapped.limit, 5);
        // the space after the ideographs is an empty word
        assert_eq!(wrapped.lines, vec!["你好 ", "world "]);
    }

    #[test]
    fn ansi_aware_measurer() {
        let text = "\u{1b}[31mred\u{1b}[0m green blue";
        let plain = WrapOptions::new().wrap(text, 9);
        let aware = WrapOptions::new().measurer(AnsiAware(UnicodeWidth)).wrap(text, 9);
        assert_eq!(aware.lines, vec!["\u{1b}[31mred\u{1b}[0m green ", "blue "]);
        assert_eq!(aware.limit, 9);
        assert_ne!(plain.lines, aware.lines);
    }

    #[test]
    fn custom_wide_script() {
        let options = WrapOptions::new().wide_script(|ch| ch == '|');
        assert_eq!(options.wrap("a|b", 10).lines, vec!["a |b "]);
    }

    #[test]
    fn wider_spacing_wraps_sooner() {
        let narrow = WrapOptions::new().wrap("a a a", 5);
        let wide = WrapOptions::new().spacing(2).wrap("a a a", 5);
        assert_eq!(narrow.lines, vec!["a a a "]);
        assert_eq!(wide.lines, vec!["a a ", "a "]);
    }
}

#[test]
fn split_lines_keeps_empty_lines() {
    assert_eq!(split_lines(""), vec![""]);
    assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
    assert_eq!(split_lines("a\r\nb\r\n"), vec!["a", "b", ""]);
}
