//! Greedy word wrapping
//!
//! Text is first split into paragraphs on explicit newlines, then each
//! paragraph is split on single spaces and packed greedily:
//! 1. The first word of a paragraph always opens a line
//! 2. A later word joins the current line if its width plus one space fits
//!    in the space left on that line
//! 3. Otherwise the word opens a new line, even if it alone is wider than
//!    the wrap width (words are never split)

use crate::Result;
use serde::Serialize;
use std::collections::BTreeSet;
use text_engine::{FontState, TextMeasurer};

/// Lines produced by wrapping, plus where each paragraph begins
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct WrapResult {
    /// Wrapped lines, top to bottom
    pub lines: Vec<String>,
    /// Indices into `lines` of the first line of every paragraph after the
    /// first one
    pub paragraph_starts: BTreeSet<usize>,
}

impl WrapResult {
    /// Split on explicit line breaks only (`\r\n`, `\r` or `\n`).
    ///
    /// Every line is its own paragraph.
    pub fn split_lines(text: &str) -> Self {
        let normalized = text.replace("\r\n", "\n");
        let lines: Vec<String> = normalized
            .split(|c: char| c == '\r' || c == '\n')
            .map(str::to_string)
            .collect();
        let paragraph_starts = (1..lines.len()).collect();
        Self {
            lines,
            paragraph_starts,
        }
    }

    /// Whether the line at `index` opens a new paragraph
    pub fn is_paragraph_start(&self, index: usize) -> bool {
        self.paragraph_starts.contains(&index)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

/// Wraps text using widths from a [`TextMeasurer`]
pub struct WordWrapper<'a, M: TextMeasurer + ?Sized> {
    measurer: &'a M,
    font: &'a FontState,
}

impl<'a, M: TextMeasurer + ?Sized> WordWrapper<'a, M> {
    pub fn new(measurer: &'a M, font: &'a FontState) -> Self {
        Self { measurer, font }
    }

    /// Measure `text` with the wrapper's font
    pub fn measure(&self, text: &str) -> Result<f64> {
        Ok(self.measurer.measure_width(text, self.font)?)
    }

    /// Wrap `text` so that lines fit in `wrap_width` where possible
    pub fn wrap(&self, text: &str, wrap_width: f64) -> Result<WrapResult> {
        let space_width = self.measure(" ")?;
        let mut result = WrapResult::default();

        for (index, paragraph) in text.split('\n').enumerate() {
            let paragraph = paragraph.strip_suffix('\r').unwrap_or(paragraph);
            if index > 0 {
                result.paragraph_starts.insert(result.lines.len());
            }
            self.wrap_paragraph(paragraph, wrap_width, space_width, &mut result.lines)?;
        }

        tracing::trace!(
            target: "layout_engine::wrap",
            wrap_width = wrap_width,
            paragraphs = result.paragraph_starts.len() + 1,
            lines = result.lines.len(),
            "text wrapped"
        );

        Ok(result)
    }

    fn wrap_paragraph(
        &self,
        paragraph: &str,
        wrap_width: f64,
        space_width: f64,
        lines: &mut Vec<String>,
    ) -> Result<()> {
        let mut line = String::new();
        let mut space_left = wrap_width;
        let mut emitted = 0;

        for (index, word) in paragraph.split(' ').enumerate() {
            let word_width = self.measure(word)?;
            let word_width_with_space = word_width + space_width;

            if index == 0 || word_width_with_space > space_left {
                // The first word of a paragraph never pushes an empty line
                if index > 0 {
                    lines.push(std::mem::take(&mut line));
                    emitted += 1;
                }
                line.push_str(word);
                space_left = wrap_width - word_width;
            } else {
                space_left -= word_width_with_space;
                line.push(' ');
                line.push_str(word);
            }
        }

        // An empty paragraph still occupies a line
        if !line.is_empty() || emitted == 0 {
            lines.push(line);
        }
        Ok(())
    }
}
