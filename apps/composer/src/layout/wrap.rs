//! Line Wrapper — greedy, single-pass word wrap against a width budget.
//!
//! # Rules
//! - Paragraphs are separated by `'\n'`, words by a single ASCII space. Nothing else
//!   is a break opportunity.
//! - Words are packed onto the current line until the next one would push the measured
//!   width past the budget. There is no look-ahead and no rebalancing.
//! - A word that is too wide on its own is emitted unsplit on its own line.
//! - With more than one paragraph, every paragraph (the last one included) is followed
//!   by one empty spacer line.

use crate::errors::ComposeError;
use crate::layout::font_metrics::FontMetricTable;

const PARAGRAPH_SEPARATOR: char = '\n';
const WORD_SEPARATOR: char = ' ';

// ────────────────────────────────────────────────────────────────────────────
// Types
// ────────────────────────────────────────────────────────────────────────────

/// Input to [`wrap`].
#[derive(Debug, Clone, Copy)]
pub struct WrapRequest<'a> {
    pub text: &'a str,
    pub metrics: &'static FontMetricTable,
    pub font_size_pt: f32,
    /// Width budget in points. Must be positive and finite.
    pub max_width: f32,
}

/// One display line: words joined by single spaces. Empty for paragraph spacers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line(String);

impl Line {
    pub fn new(text: impl Into<String>) -> Line {
        Line(text.into())
    }

    pub fn spacer() -> Line {
        Line(String::new())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_spacer(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Wrapping
// ────────────────────────────────────────────────────────────────────────────

/// Wraps `req.text` into lines that fit `req.max_width`.
///
/// Only lines holding a single over-long word may exceed the budget.
pub fn wrap(req: &WrapRequest<'_>) -> Result<Vec<Line>, ComposeError> {
    if !(req.max_width > 0.0) || !req.max_width.is_finite() {
        return Err(ComposeError::InvalidArgument(format!(
            "line width budget must be a positive number, got {}",
            req.max_width
        )));
    }

    let paragraphs = split_discarding_trailing(req.text, PARAGRAPH_SEPARATOR);
    let add_spacers = paragraphs.len() > 1;
    let mut lines: Vec<Line> = Vec::new();

    for paragraph in paragraphs {
        let mut current = String::new();

        for word in split_discarding_trailing(paragraph, WORD_SEPARATOR) {
            let candidate = if current.is_empty() {
                word.to_string()
            } else {
                format!("{current}{WORD_SEPARATOR}{word}")
            };

            if req.metrics.text_width(&candidate, req.font_size_pt) > req.max_width {
                if current.is_empty() {
                    lines.push(Line::new(word));
                } else {
                    lines.push(Line(std::mem::replace(&mut current, word.to_string())));
                }
            } else {
                current = candidate;
            }
        }

        if !current.is_empty() {
            lines.push(Line(current));
        }
        if add_spacers {
            lines.push(Line::spacer());
        }
    }

    Ok(lines)
}

/// Splits on `sep`, keeping leading and inner empty tokens but dropping trailing ones.
///
/// An empty input yields a single empty token; an input made only of separators yields
/// nothing.
fn split_discarding_trailing(text: &str, sep: char) -> Vec<&str> {
    if text.is_empty() {
        return vec![text];
    }
    let mut parts: Vec<&str> = text.split(sep).collect();
    while parts.last().is_some_and(|p| p.is_empty()) {
        parts.pop();
    }
    parts
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
