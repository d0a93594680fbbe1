use thiserror::Error;

/// Errors produced while turning text into a [`Birthdate`](crate::types::Birthdate)
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BirthdateError {
    #[error("invalid birthdate '{0}': expected YYYY-MM-DD")]
    Format(String),

    #[error("invalid birthdate '{0}': no such month and day")]
    OutOfRange(String),
}

/// Errors produced while loading the list of people
#[derive(Debug, Error)]
pub enum InputError {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid JSON array: {0}")]
    JsonArray(#[source] serde_json::Error),

    #[error("line {line}: {source}")]
    Json {
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("line {line}: {source}")]
    Birthdate {
        line: usize,
        #[source]
        source: BirthdateError,
    },
}

/// Errors produced while resolving the reference date
#[derive(Debug, Error)]
pub enum CalendarError {
    #[error("invalid date '{value}': {source}. Use YYYY-MM-DD format")]
    InvalidDate {
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("unknown timezone '{0}'")]
    UnknownTimezone(String),

    #[error("unknown sample date index {index} (expected 0..{count})")]
    UnknownSample { index: usize, count: usize },
}
