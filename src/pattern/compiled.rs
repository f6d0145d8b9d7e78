use regex::{Regex, RegexBuilder, escape};

use super::{ParamToken, PatternError, PatternResult, Token};
use crate::router::PathOptions;

#[derive(Debug, Clone)]
pub struct CompiledPattern {
    pub(crate) regex: Regex,
    pub(crate) parts: Vec<RoutePart>,
    pub(crate) slots: Vec<ParamSlot>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum RoutePart {
    Literal(String),
    Slot(usize),
}

#[derive(Debug, Clone)]
pub(crate) struct ParamSlot {
    pub name: String,
    pub capture: String,
    pub prefix: Option<char>,
    pub separator: char,
    pub optional: bool,
    pub repeat: bool,
    pub pattern: String,
    /// `^(?:pattern)$`, used to vet values handed to `resolve`.
    pub check: Regex,
}

impl CompiledPattern {
    pub fn regex(&self) -> &Regex {
        &self.regex
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }

    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.slots.iter().map(|slot| slot.name.as_str())
    }

    pub fn param_count(&self) -> usize {
        self.slots.len()
    }

    pub fn is_match(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }
}

#[tracing::instrument(level = "trace", skip(tokens, options), fields(tokens = tokens.len() as u64))]
pub fn compile(tokens: &[Token], options: &PathOptions) -> PatternResult<CompiledPattern> {
    let delimiter = options.delimiter;
    let mut source = String::from("^");
    let mut parts = Vec::with_capacity(tokens.len());
    let mut slots = Vec::new();

    for token in tokens {
        match token {
            Token::Static { text } => {
                source.push_str(&escape(text));
                match parts.last_mut() {
                    Some(RoutePart::Literal(existing)) => existing.push_str(text),
                    _ => parts.push(RoutePart::Literal(text.clone())),
                }
            }
            Token::Param(param) => {
                let slot = build_slot(param, slots.len(), options)?;
                source.push_str(&param_to_regex(&slot));
                parts.push(RoutePart::Slot(slots.len()));
                slots.push(slot);
            }
        }
    }

    if !options.strict {
        source.push_str(&format!("(?:{})?", escape_char(delimiter)));
    }
    source.push('$');

    let regex = build_regex(&source, options)?;
    Ok(CompiledPattern {
        regex,
        parts,
        slots,
    })
}

fn build_slot(param: &ParamToken, index: usize, options: &PathOptions) -> PatternResult<ParamSlot> {
    let check = build_regex(&format!("^(?:{})$", param.pattern), options)?;
    Ok(ParamSlot {
        name: param.name.to_string(),
        capture: format!("__p{index}"),
        prefix: param.prefix,
        separator: param.separator(options.delimiter),
        optional: param.optional(),
        repeat: param.repeat(),
        pattern: param.pattern.clone(),
        check,
    })
}

fn param_to_regex(slot: &ParamSlot) -> String {
    let body = if slot.repeat {
        format!(
            "(?:{pattern})(?:{sep}(?:{pattern}))*",
            pattern = slot.pattern,
            sep = escape_char(slot.separator)
        )
    } else {
        format!("(?:{})", slot.pattern)
    };
    let capture = format!("(?P<{}>{})", slot.capture, body);
    let prefix = slot.prefix.map(escape_char).unwrap_or_default();

    match (slot.optional, prefix.is_empty()) {
        (true, false) => format!("(?:{prefix}{capture})?"),
        (true, true) => format!("{capture}?"),
        (false, _) => format!("{prefix}{capture}"),
    }
}

fn build_regex(source: &str, options: &PathOptions) -> PatternResult<Regex> {
    RegexBuilder::new(source)
        .case_insensitive(!options.sensitive)
        .build()
        .map_err(|err| PatternError::RegexInvalid {
            regex: source.to_string(),
            error: err.to_string(),
        })
}

fn escape_char(ch: char) -> String {
    escape(&ch.to_string())
}
