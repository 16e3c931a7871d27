use serde::{Deserialize, Serialize};
use std::fmt;

/// Backend-assigned record identifier.
///
/// The backend is not consistent about identifier types — some resources
/// hand out numbers, others strings — so identifiers are opaque here:
/// they support equality and render into a URL path segment, nothing else.
/// Clients never mint one; every id comes from a create or fetch response.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordId {
    Num(i64),
    Text(String),
}

impl fmt::Display for RecordId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordId::Num(n) => write!(f, "{}", n),
            RecordId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for RecordId {
    fn from(value: i64) -> Self {
        RecordId::Num(value)
    }
}

impl From<&str> for RecordId {
    fn from(value: &str) -> Self {
        RecordId::Text(value.to_string())
    }
}

impl From<String> for RecordId {
    fn from(value: String) -> Self {
        RecordId::Text(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_numeric_and_string_ids() {
        let num: RecordId = serde_json::from_str("7").unwrap();
        assert_eq!(num, RecordId::Num(7));

        let text: RecordId = serde_json::from_str("\"a1b2\"").unwrap();
        assert_eq!(text, RecordId::Text("a1b2".to_string()));
    }

    #[test]
    fn numeric_and_string_forms_are_distinct() {
        // Opaque equality: "1" coming from one iteration of the backend is
        // not the same id as 1 from another.
        assert_ne!(RecordId::from(1), RecordId::from("1"));
    }

    #[test]
    fn renders_as_path_segment() {
        assert_eq!(RecordId::from(42).to_string(), "42");
        assert_eq!(RecordId::from("abc").to_string(), "abc");
    }

    #[test]
    fn serializes_back_to_original_shape() {
        assert_eq!(serde_json::to_string(&RecordId::from(3)).unwrap(), "3");
        assert_eq!(
            serde_json::to_string(&RecordId::from("x9")).unwrap(),
            "\"x9\""
        );
    }
}
