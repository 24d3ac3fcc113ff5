use thiserror::Error;

/// Errors raised while running a problem solver
#[derive(Debug, Error)]
pub enum SolveError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("unknown problem `{0}`; use --list to see all problems")]
    UnknownProblem(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("linear program could not be solved: {0}")]
    Lp(String),
}

pub type Result<T> = std::result::Result<T, SolveError>;
