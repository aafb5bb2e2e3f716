/// Structural problems with a pattern.
///
/// A mismatch is never an error: it is an ordinary `Ok(false)` that sends the
/// search on to the next start offset. These variants abort the whole call.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PatternError {
    #[error("empty pattern")]
    Empty,

    #[error("unclosed character class starting at byte {at}")]
    UnclosedClass { at: usize },

    #[error("unclosed group starting at byte {at}")]
    UnclosedGroup { at: usize },

    #[error("backreference \\{group} refers to a group that was never captured")]
    UnknownGroup { group: usize },
}

pub type Result<T> = std::result::Result<T, PatternError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
