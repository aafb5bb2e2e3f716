use bytes::Bytes;
use tracing::trace;

use crate::error::Result;
use crate::parser::Parser;
use crate::state::MatchState;
use crate::token::{Lexeme, Token};

/// Try the pattern token under `state.pattern_index` against the input at
/// `state.line_index`.
///
/// The caller guarantees both cursors are in range. On success the input
/// cursor has moved past whatever the token consumed and the pattern cursor
/// sits on the token's last byte; the caller's loop steps past it.
pub fn match_token(state: &mut MatchState) -> Result<bool> {
    let pattern = state.pattern.clone();
    let lexeme = Parser::new(&pattern, state.body_start()).token_at(state.pattern_index)?;
    trace!(
        token = ?lexeme.token,
        line_index = state.line_index,
        pattern_index = state.pattern_index,
        "dispatch"
    );

    match lexeme.token {
        Token::Literal(_) => Ok(match_literal(state)),
        Token::Space => Ok(match_space(state)),
        Token::Any => {
            state.line_index += 1;
            Ok(true)
        }
        Token::Digit | Token::Word | Token::Backslash => Ok(match_escape(state, lexeme)),
        Token::DanglingEscape => Ok(false),
        Token::BackRef(group) => Ok(match_backreference(state, lexeme, group)),
        Token::Class { set, negated } => Ok(match_class(state, lexeme, set, negated)),
        Token::Group { .. } => Ok(match_group(state, &pattern, lexeme)),
        Token::OneOrMore { repeated } => Ok(match_one_or_more(state, repeated)),
    }
}

/// Plain byte comparison, with the `?` handling folded in.
///
/// `?` is not a token of its own. Reaching one that doesn't match the input
/// means the literal before it already matched or was skipped, so it succeeds
/// without consuming. A literal whose next byte is `?` may be skipped: the
/// pattern byte after the `?` is then compared with the same input byte, and
/// the input cursor stays where it is.
fn match_literal(state: &mut MatchState) -> bool {
    let pos = state.pattern_index;
    let expected = state.pattern[pos];
    let Some(actual) = state.current_byte() else {
        return false;
    };

    if actual == expected {
        state.line_index += 1;
        return true;
    }
    if expected == b'?' {
        return true;
    }
    if state.pattern_byte(pos + 1) == Some(b'?') {
        if pos + 2 >= state.pattern.len() {
            state.pattern_index = pos + 1;
            return true;
        }
        state.pattern_index = pos + 2;
        return state.pattern[pos + 2] == actual;
    }

    trace!(
        expected = %char::from(expected),
        actual = %char::from(actual),
        "literal mismatch"
    );
    false
}

fn match_space(state: &mut MatchState) -> bool {
    if state.current_byte() != Some(b' ') {
        return false;
    }
    state.line_index += 1;
    true
}

fn match_escape(state: &mut MatchState, lexeme: Lexeme<'_>) -> bool {
    let Some(byte) = state.current_byte() else {
        return false;
    };
    let matched = match lexeme.token {
        Token::Digit => byte.is_ascii_digit(),
        Token::Word => byte.is_ascii_alphanumeric() || byte == b'_',
        _ => byte == b'\\',
    };
    if matched {
        state.line_index += 1;
        state.pattern_index = lexeme.last();
    }
    matched
}

/// `\N` reads entry N of the capture list, which includes groups appended by
/// earlier start offsets. Nothing captured yet means no match here.
fn match_backreference(state: &mut MatchState, lexeme: Lexeme<'_>, group: usize) -> bool {
    let Some(text) = state.captured(group) else {
        trace!(group, "backreference to empty slot");
        return false;
    };
    match_tail(state, &text, lexeme.last())
}

/// Membership is tested against the whole line, not just the byte under the
/// cursor. A `^` anywhere in the set inverts the verdict.
fn match_class(state: &mut MatchState, lexeme: Lexeme<'_>, set: &[u8], negated: bool) -> bool {
    let present = state.line.iter().any(|b| set.contains(b));
    if present == negated {
        trace!(negated, "class rejected line");
        return false;
    }
    state.pattern_index = lexeme.last();
    state.line_index += 1;
    true
}

fn match_group(state: &mut MatchState, pattern: &Bytes, lexeme: Lexeme<'_>) -> bool {
    if lexeme.token.is_alternation() {
        for alt in lexeme.token.alternatives() {
            if state.remaining().starts_with(alt) {
                state.line_index += alt.len();
                state.pattern_index = lexeme.last();
                return true;
            }
        }
        trace!("no alternative matched");
        return false;
    }

    let body = pattern.slice(lexeme.start + 1..lexeme.last());
    state.capture(body.clone());
    match_tail(state, &body, lexeme.last())
}

/// Advance the input cursor until the rest of the line ends with `text`,
/// then step over `text`.
///
/// Groups and backreferences share this suffix test. It is not a prefix
/// match at the cursor.
fn match_tail(state: &mut MatchState, text: &[u8], last: usize) -> bool {
    while state.line_index < state.line.len() {
        if state.remaining().ends_with(text) {
            state.line_index += text.len();
            state.pattern_index = last;
            return true;
        }
        state.line_index += 1;
    }
    false
}

fn match_one_or_more(state: &mut MatchState, repeated: Option<u8>) -> bool {
    state.has_plus = true;
    if let Some(byte) = repeated {
        while state.current_byte() == Some(byte) {
            state.line_index += 1;
        }
    }
    true
}

#[cfg(test)]
#[path = "matcher_tests.rs"]
mod tests;
