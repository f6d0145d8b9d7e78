use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("missing required parameter '{name}'")]
    MissingParam { name: String },
    #[error("parameter '{name}' does not repeat but a list was given")]
    UnexpectedList { name: String },
    #[error("repeatable parameter '{name}' requires at least one value")]
    EmptyList { name: String },
    #[error("value '{value}' for parameter '{name}' does not match '{pattern}'")]
    ValueMismatch {
        name: String,
        value: String,
        pattern: String,
    },
}

pub type ResolveResult<T> = Result<T, ResolveError>;
