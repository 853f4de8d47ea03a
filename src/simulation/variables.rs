use std::collections::VecDeque;

use rand::Rng;

use crate::error::ParseError;

use super::definition::VariableSpec;

/// A typed, stateful value source produced from a [`VariableSpec`].
///
/// `Queue` is one-shot: elements are consumed front-first across the owning
/// task's whole lifetime and never replenished.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolvedVariable {
    Constant(String),
    Queue(VecDeque<String>),
    RandomInRange { low: i64, high: i64 },
}

impl ResolvedVariable {
    /// An exhausted queue causes the owning task to skip cycles entirely.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        match self {
            Self::Queue(remaining) => remaining.is_empty(),
            Self::Constant(_) | Self::RandomInRange { .. } => false,
        }
    }

    /// Current yield without consuming anything. Random variables draw a
    /// fresh value on every call.
    #[must_use]
    pub fn current_value(&self) -> Option<String> {
        match self {
            Self::Constant(value) => Some(value.clone()),
            Self::Queue(remaining) => remaining.front().cloned(),
            Self::RandomInRange { low, high } => {
                Some(rand::thread_rng().gen_range(*low..=*high).to_string())
            }
        }
    }

    /// Consumes the current front of a queue. Constants and random ranges
    /// are unaffected.
    pub fn advance(&mut self) {
        match self {
            Self::Queue(remaining) => {
                remaining.pop_front();
            }
            Self::Constant(_) | Self::RandomInRange { .. } => {}
        }
    }
}

/// Resolves one variable spec into its value source. Unknown kinds resolve
/// to `None` and are omitted from the binding map.
///
/// # Errors
///
/// Returns an error when a `range` or `random` spec does not contain exactly
/// two integers, or when a `random` range is empty.
pub fn resolve(spec: &VariableSpec) -> Result<Option<ResolvedVariable>, ParseError> {
    match spec.kind.as_str() {
        "static" => Ok(Some(ResolvedVariable::Constant(spec.value.clone()))),
        "sequence" => {
            let elements: VecDeque<String> = parse_list(&spec.value).into_iter().collect();
            Ok(Some(ResolvedVariable::Queue(elements)))
        }
        "range" => {
            let (low, high) = parse_bounds("range", &spec.value)?;
            // low > high yields an empty, immediately-exhausted queue
            let filled: VecDeque<String> = (low..=high).map(|value| value.to_string()).collect();
            Ok(Some(ResolvedVariable::Queue(filled)))
        }
        "random" => {
            let (low, high) = parse_bounds("random", &spec.value)?;
            if low > high {
                return Err(ParseError::EmptyRandomRange { low, high });
            }
            Ok(Some(ResolvedVariable::RandomInRange { low, high }))
        }
        _ => Ok(None),
    }
}

/// Strips surrounding brackets, splits on commas, and trims each element.
/// An empty bracket body yields an empty list.
fn parse_list(raw: &str) -> Vec<String> {
    let trimmed = raw.trim();
    let trimmed = trimmed.strip_prefix('[').unwrap_or(trimmed);
    let trimmed = trimmed.strip_suffix(']').unwrap_or(trimmed);
    if trimmed.trim().is_empty() {
        return Vec::new();
    }
    trimmed
        .split(',')
        .map(|element| element.trim().to_owned())
        .collect()
}

fn parse_bounds(kind: &'static str, raw: &str) -> Result<(i64, i64), ParseError> {
    let elements = parse_list(raw);
    let [low, high] = elements.as_slice() else {
        return Err(ParseError::BoundsArity {
            kind,
            count: elements.len(),
        });
    };
    let low = low.parse().map_err(|err| ParseError::BoundsInteger {
        kind,
        token: low.clone(),
        source: err,
    })?;
    let high = high.parse().map_err(|err| ParseError::BoundsInteger {
        kind,
        token: high.clone(),
        source: err,
    })?;
    Ok((low, high))
}
