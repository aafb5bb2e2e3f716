use bytes::Bytes;

use crate::error::{PatternError, Result};
use crate::parser::{self, Parser};

/// Cursor pair plus side state for one top-level match call.
///
/// Handlers mutate this in place. The `$` anchor is handled by building a
/// second, reversed state with [`MatchState::reversed`] rather than flipping
/// these buffers.
#[derive(Debug, Clone)]
pub struct MatchState {
    pub line: Bytes,
    pub pattern: Bytes,
    pub line_index: usize,
    pub pattern_index: usize,
    /// Captured group texts. Index 0 is a sentinel and never a real capture.
    /// Append-only for the whole call, failed start offsets included.
    captured_groups: Vec<Bytes>,
    pub has_circumflex: bool,
    pub has_dollar: bool,
    pub has_plus: bool,
}

impl MatchState {
    pub fn new(line: impl Into<Bytes>, pattern: impl Into<Bytes>) -> Result<Self> {
        let pattern = pattern.into();
        if pattern.is_empty() {
            return Err(PatternError::Empty);
        }
        Ok(Self {
            line: line.into(),
            has_circumflex: pattern.first() == Some(&b'^'),
            has_dollar: pattern.last() == Some(&b'$'),
            pattern,
            line_index: 0,
            pattern_index: 0,
            captured_groups: vec![Bytes::new()],
            has_plus: false,
        })
    }

    /// A copy of this state with both line and pattern reversed, so "ends at
    /// the end of the line" becomes "starts at offset 0".
    ///
    /// The anchor flags describe the pattern as written and carry over.
    pub fn reversed(&self) -> Result<Self> {
        let line: Vec<u8> = self.line.iter().rev().copied().collect();
        let pattern = parser::reverse_pattern(&self.pattern)?;
        Ok(Self {
            line: Bytes::from(line),
            pattern: Bytes::from(pattern),
            line_index: 0,
            pattern_index: 0,
            captured_groups: vec![Bytes::new()],
            has_circumflex: self.has_circumflex,
            has_dollar: self.has_dollar,
            has_plus: self.has_plus,
        })
    }

    /// Either anchor pins the search to a single start offset, and the
    /// anchor byte itself is skipped.
    pub fn is_anchored(&self) -> bool {
        self.has_circumflex || self.has_dollar
    }

    /// Index of the first pattern byte that is a real token.
    pub fn body_start(&self) -> usize {
        usize::from(self.is_anchored())
    }

    pub fn parser(&self) -> Parser<'_> {
        Parser::new(&self.pattern, self.body_start())
    }

    /// Reset the cursors for an attempt starting at input offset `start`.
    ///
    /// Captured groups are left alone, so `\N` can still see what earlier
    /// attempts appended.
    pub fn begin_attempt(&mut self, start: usize) {
        self.line_index = start;
        self.pattern_index = self.body_start();
    }

    /// Bytes from the input cursor to the end of the line.
    pub fn remaining(&self) -> &[u8] {
        &self.line[self.line_index..]
    }

    pub fn current_byte(&self) -> Option<u8> {
        self.line.get(self.line_index).copied()
    }

    pub fn pattern_byte(&self, index: usize) -> Option<u8> {
        self.pattern.get(index).copied()
    }

    pub fn capture(&mut self, text: Bytes) {
        self.captured_groups.push(text);
    }

    /// Text of the `group`th entry in the capture list, if there is one.
    pub fn captured(&self, group: usize) -> Option<Bytes> {
        self.captured_groups
            .get(group)
            .filter(|_| group > 0)
            .cloned()
    }

    /// Total number of captures recorded, across all attempts.
    pub fn capture_count(&self) -> usize {
        self.captured_groups.len() - 1
    }
}

#[cfg(test)]
#[path = "state_tests.rs"]
mod tests;
