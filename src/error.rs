use thiserror::Error;

/// All possible errors in the project tracker
#[derive(Error, Debug)]
pub enum HbaError {
    #[error("`{command}` takes {expected} argument(s), got {got}")]
    WrongArgCount {
        command: &'static str,
        expected: usize,
        got: usize,
    },

    #[error("`add` needs a title, a description and a max grade")]
    MissingProjectFields,

    #[error("Not a whole number: {0}")]
    InvalidNumber(String),

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl HbaError {
    /// True for errors caused by the shape of what the user typed, as opposed
    /// to errors raised by the store or the console.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            HbaError::WrongArgCount { .. }
                | HbaError::MissingProjectFields
                | HbaError::InvalidNumber(_)
        )
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, HbaError>;
