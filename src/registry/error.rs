use crate::pattern::PatternError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error(transparent)]
    Pattern(#[from] PatternError),
    #[error("no registered pattern matches path '{path}'")]
    NoMatch { path: String },
}

pub type RegistryResult<T> = Result<T, RegistryError>;
