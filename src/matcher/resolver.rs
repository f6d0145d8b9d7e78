use super::{ParamValue, ResolveError, ResolveResult, RouteParams};
use crate::pattern::{CompiledPattern, ParamSlot, RoutePart};

impl CompiledPattern {
    /// Rebuilds a path from parameter values, the inverse of `extract`.
    pub fn resolve(&self, params: &RouteParams) -> ResolveResult<String> {
        let mut path = String::new();

        for part in &self.parts {
            let slot = match part {
                RoutePart::Literal(text) => {
                    path.push_str(text);
                    continue;
                }
                RoutePart::Slot(index) => &self.slots[*index],
            };

            match params.get(&slot.name) {
                Some(ParamValue::List(values)) => push_list(&mut path, slot, values)?,
                Some(ParamValue::Single(value)) => {
                    check_value(slot, value)?;
                    push_prefix(&mut path, slot);
                    path.push_str(value);
                }
                None if slot.optional => {}
                None => {
                    return Err(ResolveError::MissingParam {
                        name: slot.name.clone(),
                    });
                }
            }
        }

        Ok(path)
    }
}

fn push_list(path: &mut String, slot: &ParamSlot, values: &[String]) -> ResolveResult<()> {
    if !slot.repeat {
        return Err(ResolveError::UnexpectedList {
            name: slot.name.clone(),
        });
    }
    if values.is_empty() {
        if slot.optional {
            return Ok(());
        }
        return Err(ResolveError::EmptyList {
            name: slot.name.clone(),
        });
    }

    for (idx, value) in values.iter().enumerate() {
        check_value(slot, value)?;
        if idx == 0 {
            push_prefix(path, slot);
        } else {
            path.push(slot.separator);
        }
        path.push_str(value);
    }
    Ok(())
}

fn push_prefix(path: &mut String, slot: &ParamSlot) {
    if let Some(prefix) = slot.prefix {
        path.push(prefix);
    }
}

fn check_value(slot: &ParamSlot, value: &str) -> ResolveResult<()> {
    if slot.check.is_match(value) {
        Ok(())
    } else {
        Err(ResolveError::ValueMismatch {
            name: slot.name.clone(),
            value: value.to_string(),
            pattern: slot.pattern.clone(),
        })
    }
}
