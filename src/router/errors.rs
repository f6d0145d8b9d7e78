use crate::matcher::ResolveError;
use crate::registry::RegistryError;
use crate::router::OptionsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RouterError {
    #[error(transparent)]
    Options(#[from] OptionsError),
    #[error(transparent)]
    Registry(#[from] RegistryError),
    #[error(transparent)]
    Resolve(#[from] ResolveError),
    #[error("no registered pattern is spelled '{pattern}'")]
    UnknownPattern { pattern: String },
}

pub type RouterResult<T> = Result<T, RouterError>;
