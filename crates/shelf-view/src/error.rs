use thiserror::Error;

/// Errors from parsing user commands into events.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseEventError {
    #[error("empty command")]
    Empty,

    #[error("unknown command \"{0}\"")]
    UnknownCommand(String),

    #[error("unknown sort column \"{0}\" (expected title or price)")]
    UnknownSortKey(String),

    #[error("\"{command}\" expects {expected}")]
    MissingArgument {
        command: String,
        expected: &'static str,
    },

    #[error("invalid page number \"{0}\"")]
    InvalidPage(String),
}
