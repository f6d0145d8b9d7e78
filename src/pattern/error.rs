use crate::router::OptionsError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("parameter at index {index} of pattern '{pattern}' is missing a name")]
    ParameterMissingName { pattern: String, index: usize },
    #[error(
        "unnamed parameter {position} in pattern '{pattern}' shares its segment with other tokens; give it a name"
    )]
    UnnamedParameterInSegment { pattern: String, position: usize },
    #[error("modifier '{modifier}' at index {index} of pattern '{pattern}' does not follow a parameter")]
    DanglingModifier {
        pattern: String,
        index: usize,
        modifier: char,
    },
    #[error("unexpected ')' at index {index} of pattern '{pattern}'")]
    UnexpectedClosingParenthesis { pattern: String, index: usize },
    #[error("group starting at index {start} of pattern '{pattern}' is never closed")]
    UnterminatedGroup { pattern: String, start: usize },
    #[error("group starting at index {start} of pattern '{pattern}' is empty")]
    EmptyGroup { pattern: String, start: usize },
    #[error("escape character at index {index} of pattern '{pattern}' has nothing to escape")]
    LoneEscapeCharacter { pattern: String, index: usize },
    #[error("duplicate parameter name '{name}' in pattern '{pattern}'")]
    DuplicateParamName { pattern: String, name: String },
    #[error("generated regular expression '{regex}' is invalid: {error}")]
    RegexInvalid { regex: String, error: String },
    #[error(transparent)]
    Options(#[from] OptionsError),
}

pub type PatternResult<T> = Result<T, PatternError>;
