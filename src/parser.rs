use crate::error::{PatternError, Result};
use crate::token::{Lexeme, Token};

/// Recogniser for pattern tokens.
///
/// There is no compile pass: the matcher asks for the token at whatever
/// position its cursor is on. `body_start` is where the first real token
/// begins (1 when the pattern opens with an anchor byte).
#[derive(Debug, Clone, Copy)]
pub struct Parser<'p> {
    pub pattern: &'p [u8],
    pub body_start: usize,
}

impl<'p> Parser<'p> {
    /// Create a new parser for the given pattern.
    pub fn new(pattern: &'p [u8], body_start: usize) -> Self {
        Self {
            pattern,
            body_start,
        }
    }

    /// Walk the tokens of the pattern body left to right.
    ///
    /// Example:
    /// - Pattern: `a\d[xy]+` → Literal('a'), Digit, Class("xy"), OneOrMore(None)
    pub fn tokens(&self) -> Tokens<'p> {
        Tokens {
            parser: *self,
            pos: self.body_start,
            prev: None,
            failed: false,
        }
    }

    /// Recognise the token starting at byte `pos`.
    ///
    /// A `+` needs to know the token before it, so it is found by walking the
    /// body from the start; every other token is read in place.
    pub fn token_at(&self, pos: usize) -> Result<Lexeme<'p>> {
        if self.pattern[pos] != b'+' {
            return self.lex(pos, None);
        }
        for lexeme in self.tokens() {
            let lexeme = lexeme?;
            if lexeme.start == pos {
                return Ok(lexeme);
            }
        }
        // `pos` sits inside a multi-byte token; treat the `+` on its own.
        self.lex(pos, None)
    }

    /// Check every token in the body for structural problems.
    ///
    /// Backreferences may only name groups that appear before them.
    pub fn validate(&self) -> Result<()> {
        let mut groups = 0;
        for lexeme in self.tokens() {
            let token = lexeme?.token;
            match token {
                Token::Group { .. } if !token.is_alternation() => groups += 1,
                Token::BackRef(group) if group > groups => {
                    return Err(PatternError::UnknownGroup { group });
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn lex(&self, pos: usize, prev: Option<Lexeme<'p>>) -> Result<Lexeme<'p>> {
        let emit = |token, width| Lexeme {
            token,
            start: pos,
            width,
        };
        let lexeme = match self.pattern[pos] {
            b'\\' => match self.pattern.get(pos + 1) {
                None => emit(Token::DanglingEscape, 1),
                Some(b'd') => emit(Token::Digit, 2),
                Some(b'w') => emit(Token::Word, 2),
                Some(&c) if (b'1'..=b'9').contains(&c) => {
                    emit(Token::BackRef(usize::from(c - b'0')), 2)
                }
                Some(_) => emit(Token::Backslash, 2),
            },
            b' ' => emit(Token::Space, 1),
            b'.' => emit(Token::Any, 1),
            b'[' => {
                let close = self
                    .find_from(pos, b']')
                    .ok_or(PatternError::UnclosedClass { at: pos })?;
                let set = &self.pattern[pos + 1..close];
                let negated = set.contains(&b'^');
                emit(Token::Class { set, negated }, close - pos + 1)
            }
            b'(' => {
                let close = self
                    .find_from(pos, b')')
                    .ok_or(PatternError::UnclosedGroup { at: pos })?;
                let body = &self.pattern[pos + 1..close];
                emit(Token::Group { body }, close - pos + 1)
            }
            b'+' => {
                let repeated = prev
                    .filter(|p| p.end() == pos)
                    .and_then(|p| p.token.repeat_byte());
                emit(Token::OneOrMore { repeated }, 1)
            }
            b => emit(Token::Literal(b), 1),
        };
        Ok(lexeme)
    }

    fn find_from(&self, pos: usize, needle: u8) -> Option<usize> {
        self.pattern[pos..]
            .iter()
            .position(|&b| b == needle)
            .map(|offset| pos + offset)
    }
}

/// Iterator over the lexemes of a pattern body. Stops after the first error.
pub struct Tokens<'p> {
    parser: Parser<'p>,
    pos: usize,
    prev: Option<Lexeme<'p>>,
    failed: bool,
}

impl<'p> Iterator for Tokens<'p> {
    type Item = Result<Lexeme<'p>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.pos >= self.parser.pattern.len() {
            return None;
        }
        match self.parser.lex(self.pos, self.prev) {
            Ok(lexeme) => {
                self.pos = lexeme.end();
                self.prev = Some(lexeme);
                Some(Ok(lexeme))
            }
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            }
        }
    }
}

/// Reverse an anchor-free pattern body token by token.
///
/// This is not a plain byte reversal: reversing bytes would turn `\d` into
/// `d\` and `[ab]` into `]ba[`. Token order flips while each token keeps its
/// own spelling, so `\d` stays `\d` and `[ab]` stays `[ab]`. Group bodies
/// are literal text compared against the reversed input, so each alternative
/// is reversed in place. A `+` or `?` stays glued behind the token it
/// modifies.
///
/// Example:
/// - Body: `a\d(cat|dog)x+` → `x+(tac|god)\da`
pub fn reverse_body(body: &[u8]) -> Result<Vec<u8>> {
    let lexemes = Parser::new(body, 0).tokens().collect::<Result<Vec<_>>>()?;

    let mut units: Vec<Vec<u8>> = Vec::with_capacity(lexemes.len());
    let mut i = 0;
    while i < lexemes.len() {
        let lexeme = lexemes[i];
        let mut unit = match lexeme.token {
            Token::Group { .. } => {
                let mut alts = Vec::new();
                for alt in lexeme.token.alternatives() {
                    alts.push(alt.iter().rev().copied().collect::<Vec<u8>>());
                }
                let mut group = vec![b'('];
                group.extend(alts.join(&b'|'));
                group.push(b')');
                group
            }
            _ => body[lexeme.start..lexeme.end()].to_vec(),
        };
        if let Some(next) = lexemes.get(i + 1) {
            if matches!(next.token, Token::OneOrMore { .. } | Token::Literal(b'?')) {
                unit.push(body[next.start]);
                i += 1;
            }
        }
        units.push(unit);
        i += 1;
    }

    Ok(units.into_iter().rev().flatten().collect())
}

/// Rewrite a `$`-terminated pattern so it can be matched against the reversed
/// input: `^abc$` becomes `$cba^`, `abc$` becomes `$cba`.
pub fn reverse_pattern(pattern: &[u8]) -> Result<Vec<u8>> {
    let anchored_start = pattern.first() == Some(&b'^');
    let start = usize::from(anchored_start);
    let end = if pattern.last() == Some(&b'$') && pattern.len() > start {
        pattern.len() - 1
    } else {
        pattern.len()
    };

    let mut reversed = Vec::with_capacity(pattern.len());
    reversed.push(b'$');
    reversed.extend(reverse_body(&pattern[start..end])?);
    if anchored_start {
        reversed.push(b'^');
    }
    Ok(reversed)
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
