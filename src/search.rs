use bytes::Bytes;
use tracing::debug;

use crate::error::Result;
use crate::matcher::match_token;
use crate::parser::Parser;
use crate::state::MatchState;

/// Decide whether `pattern` matches somewhere in `line`.
///
/// Structural errors in the pattern are reported before any input is looked
/// at. A trailing `$` is handled by matching the reversed pattern against the
/// reversed line from offset 0.
pub fn match_line(line: &[u8], pattern: &str) -> Result<bool> {
    let state = MatchState::new(
        Bytes::copy_from_slice(line),
        Bytes::copy_from_slice(pattern.as_bytes()),
    )?;
    Parser::new(pattern.as_bytes(), usize::from(state.has_circumflex)).validate()?;

    let mut state = if state.has_dollar {
        state.reversed()?
    } else {
        state
    };
    let matched = search(&mut state)?;
    debug!(
        pattern,
        line = %String::from_utf8_lossy(line),
        matched,
        "match_line"
    );
    Ok(matched)
}

/// Try successive start offsets until one matches the whole pattern.
///
/// Anchors, and any `+` that has been used, limit the search to the first
/// offset.
pub fn search(state: &mut MatchState) -> Result<bool> {
    for start in 0..state.line.len() {
        state.begin_attempt(start);
        if attempt(state)? {
            debug!(start, "matched");
            return Ok(true);
        }
        if state.is_anchored() || state.has_plus {
            debug!(start, anchored = state.is_anchored(), "no further offsets");
            break;
        }
    }
    Ok(false)
}

/// Run the pattern once from the current cursors.
///
/// Running out of input is forgiven only while the final token is pending.
fn attempt(state: &mut MatchState) -> Result<bool> {
    let len = state.pattern.len();
    while state.pattern_index < len {
        if state.line_index >= state.line.len() {
            let pending = state.parser().token_at(state.pattern_index)?;
            return Ok(pending.end() == len);
        }
        if !match_token(state)? {
            return Ok(false);
        }
        state.pattern_index += 1;
    }
    Ok(true)
}

#[cfg(test)]
#[path = "search_tests.rs"]
mod tests;
