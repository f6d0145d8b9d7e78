use crate::pattern::ScoreWeights;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_DELIMITER: char = '/';

/// Characters with a meaning in pattern syntax; none can act as delimiter.
const RESERVED_DELIMITERS: [char; 8] = [':', '(', ')', '?', '*', '+', '\\', '.'];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathOptions {
    pub strict: bool,
    pub sensitive: bool,
    pub delimiter: char,
}

impl Default for PathOptions {
    fn default() -> Self {
        Self {
            strict: false,
            sensitive: false,
            delimiter: DEFAULT_DELIMITER,
        }
    }
}

impl PathOptions {
    pub fn builder() -> PathOptionsBuilder {
        PathOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        let ch = self.delimiter;
        if !ch.is_ascii_punctuation() || RESERVED_DELIMITERS.contains(&ch) {
            return Err(OptionsError::InvalidDelimiter { ch });
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct PathOptionsBuilder {
    options: PathOptions,
}

impl PathOptionsBuilder {
    pub fn strict(mut self, value: bool) -> Self {
        self.options.strict = value;
        self
    }

    pub fn sensitive(mut self, value: bool) -> Self {
        self.options.sensitive = value;
        self
    }

    pub fn delimiter(mut self, value: char) -> Self {
        self.options.delimiter = value;
        self
    }

    pub fn build(self) -> Result<PathOptions, OptionsError> {
        self.options.validate()?;
        Ok(self.options)
    }
}

/// `options` only take effect when `apply_options` is set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteRecord {
    pub path: String,
    pub options: PathOptions,
    pub apply_options: bool,
}

impl RouteRecord {
    pub fn new<S: Into<String>>(path: S) -> Self {
        Self {
            path: path.into(),
            options: PathOptions::default(),
            apply_options: false,
        }
    }

    pub fn with_options(mut self, options: PathOptions) -> Self {
        self.options = options;
        self.apply_options = true;
        self
    }

    pub fn effective_options(&self, global: &PathOptions) -> PathOptions {
        if self.apply_options {
            self.options
        } else {
            *global
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RouterOptions {
    pub path: PathOptions,
    pub weights: ScoreWeights,
}

impl RouterOptions {
    pub fn builder() -> RouterOptionsBuilder {
        RouterOptionsBuilder::default()
    }

    pub fn validate(&self) -> Result<(), OptionsError> {
        self.path.validate()?;
        if let Some((name, value)) = self
            .weights
            .named()
            .into_iter()
            .find(|(_, value)| !value.is_finite())
        {
            return Err(OptionsError::NonFiniteWeight { name, value });
        }
        Ok(())
    }
}

#[derive(Debug, Default, Clone)]
pub struct RouterOptionsBuilder {
    options: RouterOptions,
}

impl RouterOptionsBuilder {
    pub fn strict(mut self, value: bool) -> Self {
        self.options.path.strict = value;
        self
    }

    pub fn sensitive(mut self, value: bool) -> Self {
        self.options.path.sensitive = value;
        self
    }

    pub fn delimiter(mut self, value: char) -> Self {
        self.options.path.delimiter = value;
        self
    }

    pub fn path_options(mut self, value: PathOptions) -> Self {
        self.options.path = value;
        self
    }

    pub fn weights(mut self, value: ScoreWeights) -> Self {
        self.options.weights = value;
        self
    }

    pub fn build(self) -> Result<RouterOptions, OptionsError> {
        let options = self.options;
        options.validate()?;
        Ok(options)
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum OptionsError {
    #[error("'{ch}' cannot be used as a path delimiter")]
    InvalidDelimiter { ch: char },
    #[error("score weight '{name}' must be finite (got {value})")]
    NonFiniteWeight { name: &'static str, value: f64 },
}
