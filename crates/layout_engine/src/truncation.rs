//! Max-line truncation and overflow reassembly
//!
//! When wrapping yields more lines than allowed, only the first `max_lines`
//! stay visible. The rest is collected into `remaining_text` so that a
//! follow-up text box can continue where this one stopped. Lines that were
//! split by wrapping are joined back with a space; explicit paragraph breaks
//! survive as `\n`.

use crate::{Result, WordWrapper, WrapResult};
use serde::Serialize;
use text_engine::TextMeasurer;

/// Visible lines after truncation, plus the overflow
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TruncationResult {
    /// Visible lines, top to bottom
    pub lines: Vec<String>,
    /// Whether any text was cut off
    pub more_text_lines: bool,
    /// Overflow text, paragraphs joined with `\n`
    pub remaining_text: String,
}

impl TruncationResult {
    fn untouched(lines: Vec<String>) -> Self {
        Self {
            lines,
            more_text_lines: false,
            remaining_text: String::new(),
        }
    }
}

/// Applies a maximum line count to wrapped text
#[derive(Debug, Clone, Copy, Default)]
pub struct LineTruncator<'a> {
    max_lines: Option<usize>,
    suffix: Option<&'a str>,
}

impl<'a> LineTruncator<'a> {
    /// `max_lines` of zero and an empty suffix behave as unset
    pub fn new(max_lines: Option<usize>, suffix: Option<&'a str>) -> Self {
        Self {
            max_lines: max_lines.filter(|n| *n > 0),
            suffix: suffix.filter(|s| !s.is_empty()),
        }
    }

    /// Truncate `wrapped`, re-wrapping the last visible line with the suffix
    pub fn truncate<M: TextMeasurer + ?Sized>(
        &self,
        wrapped: WrapResult,
        wrapper: &WordWrapper<'_, M>,
        wrap_width: f64,
    ) -> Result<TruncationResult> {
        let max_lines = match self.max_lines {
            Some(max) if wrapped.lines.len() > max => max,
            _ => return Ok(TruncationResult::untouched(wrapped.lines)),
        };

        let WrapResult {
            lines,
            paragraph_starts,
        } = wrapped;

        let mut used: Vec<String> = lines[..max_lines].to_vec();
        let mut other_lines = vec![String::new()];

        if let Some(suffix) = self.suffix {
            if let Some(last) = used.last_mut() {
                let rewrapped = wrapper.wrap(&format!("{}{}", last, suffix), wrap_width)?;
                let mut rewrapped = rewrapped.lines.into_iter();
                *last = rewrapped.next().unwrap_or_default();
                other_lines[0] = rewrapped.next().unwrap_or_default();
            }
        }

        // Wrapped continuations share a bucket; a bucket closes only when the
        // next wrapped line starts a paragraph.
        for index in max_lines..lines.len() {
            if let Some(bucket) = other_lines.last_mut() {
                if !bucket.is_empty() {
                    bucket.push(' ');
                }
                bucket.push_str(&lines[index]);
            }
            if index + 1 < lines.len() && paragraph_starts.contains(&(index + 1)) {
                other_lines.push(String::new());
            }
        }

        let remaining_text = other_lines.join("\n");

        tracing::debug!(
            target: "layout_engine::truncate",
            total_lines = lines.len(),
            max_lines = max_lines,
            remaining_len = remaining_text.len(),
            "text truncated"
        );

        Ok(TruncationResult {
            lines: used,
            more_text_lines: true,
            remaining_text,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use text_engine::{FixedWidthMeasurer, FontState};

    /// Every grapheme is 10 units wide
    fn run(text: &str, width: f64, max_lines: Option<usize>, suffix: Option<&str>) -> TruncationResult {
        let measurer = FixedWidthMeasurer::new(1.0);
        let font = FontState::new("mono", 10.0);
        let wrapper = WordWrapper::new(&measurer, &font);
        let wrapped = wrapper.wrap(text, width).unwrap();
        LineTruncator::new(max_lines, suffix)
            .truncate(wrapped, &wrapper, width)
            .unwrap()
    }

    #[test]
    fn test_no_limit_is_noop() {
        let result = run("aa bb cc", 20.0, None, Some("..."));
        assert_eq!(result.lines, vec!["aa", "bb", "cc"]);
        assert!(!result.more_text_lines);
        assert!(result.remaining_text.is_empty());
    }

    #[test]
    fn test_limit_not_exceeded_is_noop() {
        let result = run("aa bb cc", 20.0, Some(3), Some("..."));
        assert_eq!(result.lines.len(), 3);
        assert!(!result.more_text_lines);
        assert_eq!(result.remaining_text, "");
    }

    #[test]
    fn test_zero_limit_is_unset() {
        let result = run("aa bb cc", 20.0, Some(0), None);
        assert_eq!(result.lines.len(), 3);
        assert!(!result.more_text_lines);
    }

    #[test]
    fn test_truncate_without_suffix() {
        // Lines: "aa", "bb", "cc", "dd"
        let result = run("aa bb cc dd", 20.0, Some(2), None);
        assert_eq!(result.lines, vec!["aa", "bb"]);
        assert!(result.more_text_lines);
        assert_eq!(result.remaining_text, "cc dd");
    }

    #[test]
    fn test_suffix_fits_on_last_line() {
        // Lines at 80: "one two", "three", "four", "five six", "seven"
        let result = run("one two three four five six seven", 80.0, Some(2), Some("..."));
        assert_eq!(result.lines, vec!["one two", "three..."]);
        assert!(result.more_text_lines);
        assert_eq!(result.remaining_text, "four five six seven");
    }

    #[test]
    fn test_suffix_pushes_last_word_into_remaining_text() {
        // The suffix word does not fit after "one two" at 80
        let result = run("one two three four", 80.0, Some(1), Some(" ..."));
        assert_eq!(result.lines, vec!["one two"]);
        assert_eq!(result.remaining_text, "... three four");
    }

    #[test]
    fn test_suffix_overflow_word_moves_to_remaining_text() {
        let result = run("aaa bbb ccc ddd eee", 70.0, Some(2), Some(" +more"));
        // Lines at 70: "aaa bbb", "ccc ddd", "eee"
        // "ccc ddd +more" re-wraps to "ccc ddd" / "+more"
        assert_eq!(result.lines, vec!["aaa bbb", "ccc ddd"]);
        assert_eq!(result.remaining_text, "+more eee");
    }

    #[test]
    fn test_paragraph_breaks_survive_in_remaining_text() {
        // Lines at 50: "aa", "bb cc", "dd", "ee", "ff gg"; every line opens a paragraph
        let result = run("aa\nbb cc\ndd\nee\nff gg", 50.0, Some(2), None);
        assert_eq!(result.lines, vec!["aa", "bb cc"]);
        assert_eq!(result.remaining_text, "dd\nee\nff gg");
    }

    #[test]
    fn test_wrapped_continuations_are_rejoined() {
        // Lines at 50: "aa", "bbb", "ccc", "ddd", "e"; paragraph starts at 1 and 4
        let result = run("aa\nbbb ccc ddd\ne", 50.0, Some(2), None);
        assert_eq!(result.lines, vec!["aa", "bbb"]);
        assert_eq!(result.remaining_text, "ccc ddd\ne");
    }

    #[test]
    fn test_cut_on_paragraph_boundary_merges_into_first_bucket() {
        // Truncation lands exactly where "cc" starts a new paragraph; the
        // first overflow paragraph is appended to the suffix overflow.
        let result = run("aa bb\ncc\ndd", 50.0, Some(1), Some("..."));
        assert_eq!(result.lines, vec!["aa"]);
        assert_eq!(result.remaining_text, "bb... cc\ndd");
    }

    #[test]
    fn test_no_wrap_lines_each_their_own_paragraph() {
        let measurer = FixedWidthMeasurer::new(1.0);
        let font = FontState::new("mono", 10.0);
        let wrapper = WordWrapper::new(&measurer, &font);
        let wrapped = WrapResult::split_lines("first line\nsecond\nthird\nfourth");
        let result = LineTruncator::new(Some(2), None)
            .truncate(wrapped, &wrapper, 1000.0)
            .unwrap();
        assert_eq!(result.lines, vec!["first line", "second"]);
        assert_eq!(result.remaining_text, "third\nfourth");
    }

    proptest! {
        #[test]
        fn prop_truncation_preserves_words_in_order(
            words in proptest::collection::vec("[a-z]{1,6}", 1..30),
            max_lines in 1usize..6,
        ) {
            let text = words.join(" ");
            let result = run(&text, 60.0, Some(max_lines), None);
            prop_assert!(result.lines.len() <= max_lines);
            let mut rebuilt = result.lines.join(" ");
            if result.more_text_lines {
                rebuilt.push(' ');
                rebuilt.push_str(&result.remaining_text);
            }
            prop_assert_eq!(rebuilt, text);
        }

        #[test]
        fn prop_paragraph_count_preserved(
            paragraphs in proptest::collection::vec(
                proptest::collection::vec("[a-z]{1,4}", 1..6), 2..6),
        ) {
            let texts: Vec<String> = paragraphs.iter().map(|p| p.join(" ")).collect();
            let text = texts.join("\n");
            let first_lines = run(&texts[0], 50.0, None, None).lines.len();
            // Cut inside the first paragraph so every later paragraph overflows
            // on its own boundary.
            prop_assume!(first_lines > 1);
            let result = run(&text, 50.0, Some(first_lines - 1), Some(".."));
            prop_assert!(result.more_text_lines);
            let overflow: Vec<&str> = result.remaining_text.split('\n').collect();
            prop_assert_eq!(overflow.len(), texts.len());
            for (overflowed, original) in overflow.iter().zip(texts.iter()).skip(1) {
                prop_assert_eq!(*overflowed, original.as_str());
            }
        }
    }
}
