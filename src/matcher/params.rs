use crate::pattern::CompiledPattern;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub type RouteParams = HashMap<String, ParamValue>;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ParamValue {
    Single(String),
    List(Vec<String>),
}

impl ParamValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Single(value) => Some(value),
            Self::List(_) => None,
        }
    }

    pub fn as_list(&self) -> Option<&[String]> {
        match self {
            Self::Single(_) => None,
            Self::List(values) => Some(values),
        }
    }
}

impl From<&str> for ParamValue {
    fn from(value: &str) -> Self {
        Self::Single(value.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(value: String) -> Self {
        Self::Single(value)
    }
}

impl From<Vec<String>> for ParamValue {
    fn from(values: Vec<String>) -> Self {
        Self::List(values)
    }
}

impl From<Vec<&str>> for ParamValue {
    fn from(values: Vec<&str>) -> Self {
        Self::List(values.into_iter().map(str::to_string).collect())
    }
}

impl CompiledPattern {
    /// Optional parameters that took no part in the match are left out.
    pub fn extract(&self, path: &str) -> Option<RouteParams> {
        let captures = self.regex.captures(path)?;
        let mut params = HashMap::with_capacity(self.slots.len());

        for slot in &self.slots {
            let Some(found) = captures.name(&slot.capture) else {
                continue;
            };
            let value = if slot.repeat {
                ParamValue::List(
                    found
                        .as_str()
                        .split(slot.separator)
                        .map(str::to_string)
                        .collect(),
                )
            } else {
                ParamValue::Single(found.as_str().to_string())
            };
            params.insert(slot.name.clone(), value);
        }

        Some(params)
    }
}
