/// One syntactic unit of a pattern, recognised in place by the parser.
///
/// Multi-byte tokens borrow their payload straight out of the pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Token<'p> {
    Literal(u8),
    Space,
    Any,
    Digit,
    Word,
    /// `\\`, or an escape with no special meaning; matches a literal backslash.
    Backslash,
    /// A `\` with nothing after it. Never matches.
    DanglingEscape,
    BackRef(usize),
    Class {
        set: &'p [u8],
        negated: bool,
    },
    Group {
        body: &'p [u8],
    },
    /// `+`. `repeated` is the single-byte literal right before it, if any.
    OneOrMore {
        repeated: Option<u8>,
    },
}

impl<'p> Token<'p> {
    /// True for a group whose body is a `|`-separated list of literals.
    pub fn is_alternation(&self) -> bool {
        matches!(self, Token::Group { body } if body.contains(&b'|'))
    }

    /// Literal alternatives of a group body, in pattern order.
    pub fn alternatives(&self) -> impl Iterator<Item = &'p [u8]> {
        let body: &'p [u8] = match *self {
            Token::Group { body } => body,
            _ => &[],
        };
        body.split(|&b| b == b'|')
    }

    /// The byte a following `+` repeats, for single-byte literal tokens.
    pub fn repeat_byte(&self) -> Option<u8> {
        match self {
            Token::Literal(b) => Some(*b),
            Token::Space => Some(b' '),
            _ => None,
        }
    }
}

/// A token together with where it sits in the pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lexeme<'p> {
    pub token: Token<'p>,
    pub start: usize,
    pub width: usize,
}

impl<'p> Lexeme<'p> {
    /// Index of the token's final byte.
    pub fn last(&self) -> usize {
        self.start + self.width - 1
    }

    /// Index of the first byte after the token.
    pub fn end(&self) -> usize {
        self.start + self.width
    }
}

#[cfg(test)]
#[path = "token_tests.rs"]
mod tests;
