use thiserror::Error;

pub type ReportResult<T> = Result<T, ReportError>;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error("All of the arguments are mandatory, so they can not be null")]
    MissingArguments,

    #[error("The argument '{name}' is mandatory, so it can not be null")]
    MissingArgument { name: &'static str },

    #[error("{0}")]
    TypeMismatch(String),

    #[error("invalid data: {0}")]
    InvalidData(String),

    #[error("failed to write report chunk: {0}")]
    Io(#[from] std::io::Error),
}
