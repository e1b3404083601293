//! Condition comparison execution

use crate::config::{RunConfig, TypeValidation};
use anyhow::anyhow;
use sluice_core::{ApplicationError, Comparator, EvalResult, Value};

/// Compare a field value against a condition value
pub(crate) fn compare(
    left: &Value,
    comparator: Comparator,
    right: &Value,
    config: &RunConfig,
) -> EvalResult<bool> {
    // Null never matches anything. This lets conditions handle missing
    // fields gracefully instead of erroring.
    if matches!(left, Value::Null) || matches!(right, Value::Null) {
        tracing::debug!(
            "Null comparison: {:?} {:?} {:?}, returning false",
            left,
            comparator,
            right
        );
        return Ok(false);
    }

    match comparator {
        Comparator::Eq => equals(left, right, config),
        Comparator::Ne => Ok(!equals(left, right, config)?),
        Comparator::Gt | Comparator::Ge | Comparator::Lt | Comparator::Le => {
            ordering(left, comparator, right, config)
        }
        Comparator::Contains | Comparator::StartsWith | Comparator::EndsWith => {
            substring(left, comparator, right, config)
        }
    }
}

/// Equality across operand types
fn equals(left: &Value, right: &Value, config: &RunConfig) -> EvalResult<bool> {
    match (left, right) {
        (Value::Bool(l), Value::Bool(r)) => Ok(l == r),
        (Value::Number(l), Value::Number(r)) => Ok(l == r),
        (Value::String(l), Value::String(r)) => Ok(string_eq(l, r, config)),
        (Value::Array(_), Value::Array(_)) | (Value::Object(_), Value::Object(_)) => {
            Ok(left == right)
        }
        _ => match config.type_validation {
            TypeValidation::Loose => Ok(loose_equals(left, right, config)),
            TypeValidation::Strict => Err(type_mismatch(left, right).into()),
        },
    }
}

/// Equality after loose casting; never fails, mismatches that cannot be
/// cast simply compare unequal
fn loose_equals(left: &Value, right: &Value, config: &RunConfig) -> bool {
    if matches!(left, Value::Bool(_)) || matches!(right, Value::Bool(_)) {
        return match (left.coerce_to_bool(), right.coerce_to_bool()) {
            (Some(l), Some(r)) => l == r,
            _ => false,
        };
    }

    if let (Some(l), Some(r)) = (left.coerce_to_number(), right.coerce_to_number()) {
        return l == r;
    }

    match (left.coerce_to_string(), right.coerce_to_string()) {
        (Some(l), Some(r)) => string_eq(&l, &r, config),
        _ => false,
    }
}

/// Ordering comparison; numeric only
fn ordering(
    left: &Value,
    comparator: Comparator,
    right: &Value,
    config: &RunConfig,
) -> EvalResult<bool> {
    let (l, r) = match (left, right) {
        (Value::Number(l), Value::Number(r)) => (*l, *r),

        // Ordering can never apply to these types, regardless of validation mode
        (Value::Bool(_), _)
        | (_, Value::Bool(_))
        | (Value::Array(_), _)
        | (_, Value::Array(_))
        | (Value::Object(_), _)
        | (_, Value::Object(_)) => {
            return Err(ApplicationError::new(format!(
                "Ordering comparison cannot be applied to {} and {}",
                left.type_name(),
                right.type_name()
            ))
            .into());
        }

        _ => match config.type_validation {
            TypeValidation::Loose => {
                match (left.coerce_to_number(), right.coerce_to_number()) {
                    (Some(l), Some(r)) => (l, r),
                    _ => return Err(type_mismatch(left, right).into()),
                }
            }
            TypeValidation::Strict => return Err(type_mismatch(left, right).into()),
        },
    };

    Ok(match comparator {
        Comparator::Gt => l > r,
        Comparator::Ge => l >= r,
        Comparator::Lt => l < r,
        Comparator::Le => l <= r,
        _ => unreachable!(),
    })
}

/// Substring operators; Contains on an array is membership
fn substring(
    left: &Value,
    comparator: Comparator,
    right: &Value,
    config: &RunConfig,
) -> EvalResult<bool> {
    if let (Value::Array(items), Comparator::Contains) = (left, comparator) {
        for item in items {
            if equals(item, right, config)? {
                return Ok(true);
            }
        }
        return Ok(false);
    }

    let (l, r) = match (left, right) {
        (Value::String(l), Value::String(r)) => (l.clone(), r.clone()),
        _ => match config.type_validation {
            TypeValidation::Loose => {
                match (left.coerce_to_string(), right.coerce_to_string()) {
                    (Some(l), Some(r)) => (l, r),
                    _ => return Err(type_mismatch(left, right).into()),
                }
            }
            TypeValidation::Strict => return Err(type_mismatch(left, right).into()),
        },
    };

    let (l, r) = if config.case_sensitive {
        (l, r)
    } else {
        (l.to_lowercase(), r.to_lowercase())
    };

    Ok(match comparator {
        Comparator::Contains => l.contains(&r),
        Comparator::StartsWith => l.starts_with(&r),
        Comparator::EndsWith => l.ends_with(&r),
        _ => unreachable!(),
    })
}

fn string_eq(left: &str, right: &str, config: &RunConfig) -> bool {
    if config.case_sensitive {
        left == right
    } else {
        left.to_lowercase() == right.to_lowercase()
    }
}

fn type_mismatch(left: &Value, right: &Value) -> anyhow::Error {
    anyhow!(
        "Cannot compare {} with {}",
        left.type_name(),
        right.type_name()
    )
}
