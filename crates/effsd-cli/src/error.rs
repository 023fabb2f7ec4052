use thiserror::Error;

/// Errors surfaced by the `effsd` command-line front end.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("{field} out of range: {got} (0-{max})")]
    Range {
        field: &'static str,
        got: u32,
        max: u32,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("short read: expected {expected} bytes, got {got}")]
    ShortRead { expected: usize, got: usize },
}

pub type CliResult<T> = Result<T, CliError>;
