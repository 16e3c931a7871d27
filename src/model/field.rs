use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

/// A single record field value, erased to the two shapes the UI works with.
///
/// Records expose their fields through this type so the store can filter and
/// sort without knowing the concrete record struct.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
}

impl FieldValue {
    /// Natural ordering used by the sorted view: numbers compare numerically,
    /// text compares lexicographically, and numbers sort ahead of text when
    /// a column mixes both.
    pub fn cmp_natural(&self, other: &FieldValue) -> Ordering {
        match (self, other) {
            (FieldValue::Number(a), FieldValue::Number(b)) => a.total_cmp(b),
            (FieldValue::Text(a), FieldValue::Text(b)) => a.cmp(b),
            (FieldValue::Number(_), FieldValue::Text(_)) => Ordering::Less,
            (FieldValue::Text(_), FieldValue::Number(_)) => Ordering::Greater,
        }
    }

    /// Text to run substring search against. Numeric fields are not
    /// searchable, matching how the search box behaves.
    pub fn search_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Number(_) => None,
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Text(s) => f.write_str(s),
            FieldValue::Number(n) => {
                if n.fract() == 0.0 && n.is_finite() {
                    write!(f, "{}", *n as i64)
                } else {
                    write!(f, "{}", n)
                }
            }
        }
    }
}

/// What kind of input a field accepts.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Text,
    Number { min: Option<f64> },
}

/// Static description of one record field. The table view, the form dialog,
/// and draft validation all run off these.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub searchable: bool,
    pub sortable: bool,
}

#[derive(Debug, Error, PartialEq)]
pub enum FieldError {
    #[error("{label} is required")]
    Required { label: &'static str },
    #[error("{label} must be a number")]
    NotANumber { label: &'static str },
    #[error("{label} must be at least {min}")]
    BelowMin { label: &'static str, min: f64 },
}

/// Parse a required text input, trimming surrounding whitespace.
pub(crate) fn required_text(spec: &FieldSpec, raw: &str) -> Result<String, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Required { label: spec.label });
    }
    Ok(trimmed.to_string())
}

/// Parse a numeric input against the field's minimum, if any.
pub(crate) fn required_number(spec: &FieldSpec, raw: &str) -> Result<f64, FieldError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(FieldError::Required { label: spec.label });
    }
    let value: f64 = trimmed
        .parse()
        .map_err(|_| FieldError::NotANumber { label: spec.label })?;
    if let FieldKind::Number { min: Some(min) } = spec.kind {
        if value < min {
            return Err(FieldError::BelowMin {
                label: spec.label,
                min,
            });
        }
    }
    Ok(value)
}
