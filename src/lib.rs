pub mod cli;
pub mod error;
pub mod matcher;
pub mod parser;
pub mod search;
pub mod state;
pub mod token;

pub use error::{PatternError, Result};
pub use search::match_line;
