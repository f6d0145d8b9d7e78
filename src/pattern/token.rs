use std::fmt;

use regex::escape;

pub const WILDCARD_PATTERN: &str = ".*";

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    Static { text: String },
    Param(ParamToken),
}

impl Token {
    pub fn literal<S: Into<String>>(text: S) -> Self {
        Self::Static { text: text.into() }
    }

    pub fn as_static(&self) -> Option<&str> {
        match self {
            Self::Static { text } => Some(text),
            Self::Param(_) => None,
        }
    }

    pub fn as_param(&self) -> Option<&ParamToken> {
        match self {
            Self::Static { .. } => None,
            Self::Param(param) => Some(param),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParamName {
    Named(String),
    /// Unnamed `(regex)` group, numbered from zero in pattern order.
    Index(usize),
}

impl ParamName {
    pub fn is_index(&self) -> bool {
        matches!(self, Self::Index(_))
    }
}

impl fmt::Display for ParamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Named(name) => f.write_str(name),
            Self::Index(index) => write!(f, "{index}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    One,
    ZeroOrOne,
    ZeroOrMore,
    OneOrMore,
}

impl Quantifier {
    pub fn from_modifier(ch: Option<char>) -> Option<Self> {
        match ch {
            Some('?') => Some(Self::ZeroOrOne),
            Some('*') => Some(Self::ZeroOrMore),
            Some('+') => Some(Self::OneOrMore),
            _ => None,
        }
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, Self::ZeroOrOne | Self::ZeroOrMore)
    }

    pub fn is_repeating(&self) -> bool {
        matches!(self, Self::ZeroOrMore | Self::OneOrMore)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    Wildcard,
    Segment,
    Custom,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ParamToken {
    pub name: ParamName,
    pub pattern: String,
    pub prefix: Option<char>,
    pub quantifier: Quantifier,
}

impl ParamToken {
    pub fn new(
        name: ParamName,
        pattern: String,
        prefix: Option<char>,
        quantifier: Quantifier,
    ) -> Self {
        Self {
            name,
            pattern,
            prefix,
            quantifier,
        }
    }

    pub fn optional(&self) -> bool {
        self.quantifier.is_optional()
    }

    pub fn repeat(&self) -> bool {
        self.quantifier.is_repeating()
    }

    pub fn kind(&self) -> ParamKind {
        if self.pattern == WILDCARD_PATTERN {
            ParamKind::Wildcard
        } else if is_default_segment_pattern(&self.pattern) {
            ParamKind::Segment
        } else {
            ParamKind::Custom
        }
    }

    pub fn separator(&self, delimiter: char) -> char {
        self.prefix.unwrap_or(delimiter)
    }
}

pub fn default_segment_pattern(prefix: Option<char>, delimiter: char) -> String {
    let mut excluded = String::new();
    if let Some(p) = prefix
        && p != delimiter
    {
        excluded.push_str(&escape(&p.to_string()));
    }
    excluded.push_str(&escape(&delimiter.to_string()));
    format!("[^{excluded}]+?")
}

/// Matches the `[^…]+?` shape produced by [`default_segment_pattern`], also
/// when a pattern author spells it out by hand.
pub fn is_default_segment_pattern(pattern: &str) -> bool {
    pattern
        .strip_prefix("[^")
        .and_then(|rest| rest.strip_suffix("]+?"))
        .is_some_and(|class| !class.is_empty() && !class.contains(']'))
}
