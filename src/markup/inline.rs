//! Inline spans: `**bold**`, `*italic*` and `[label](url)`.
//!
//! Each rule is one non-recursive substitution over the output of the
//! previous rule, in the order of [`RULES`]. Spans are never re-entered, so
//! constructs nested inside the same construct are not composed; for example
//! `***x***` becomes `<strong><em>x</strong></em>`.

use std::sync::LazyLock;

use regex::Regex;

struct Rule {
    pattern: Regex,
    replacement: &'static str,
}

impl Rule {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(pattern).unwrap(),
            replacement,
        }
    }
}

static RULES: LazyLock<[Rule; 3]> = LazyLock::new(|| {
    [
        Rule::new(r"\*\*(.+?)\*\*", "<strong>${1}</strong>"),
        Rule::new(r"\*(.+?)\*", "<em>${1}</em>"),
        Rule::new(r"\[([^\]]+)\]\(([^)]+)\)", "<a href=\"${2}\">${1}</a>"),
    ]
});

pub(crate) fn format(text: &str) -> String {
    RULES.iter().fold(text.to_string(), |acc, rule| {
        rule.pattern
            .replace_all(&acc, rule.replacement)
            .into_owned()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bold_then_italic() {
        assert_eq!(
            format("**bold** and *italic*"),
            "<strong>bold</strong> and <em>italic</em>"
        );
    }

    #[test]
    fn bold_is_non_greedy() {
        assert_eq!(
            format("**a** i **b**"),
            "<strong>a</strong> i <strong>b</strong>"
        );
    }

    #[test]
    fn link() {
        assert_eq!(
            format("vidi [portal](https://eojn.hr) ovdje"),
            "vidi <a href=\"https://eojn.hr\">portal</a> ovdje"
        );
    }

    #[test]
    fn bold_inside_link_label() {
        assert_eq!(
            format("[**jako**](/x)"),
            "<a href=\"/x\"><strong>jako</strong></a>"
        );
    }

    #[test]
    fn italic_inside_bold() {
        assert_eq!(
            format("**a *b* c**"),
            "<strong>a <em>b</em> c</strong>"
        );
    }

    #[test]
    fn triple_asterisks_are_not_composed() {
        assert_eq!(format("***x***"), "<strong><em>x</strong></em>");
    }

    #[test]
    fn unmatched_markers_are_left_alone() {
        assert_eq!(format("5 * 3 = 15"), "5 * 3 = 15");
        assert_eq!(format("[samo tekst]"), "[samo tekst]");
    }

    #[test]
    fn no_escaping() {
        assert_eq!(format("a < b & c"), "a < b & c");
    }
}
