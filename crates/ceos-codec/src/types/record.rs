//! Decoded record type.

use std::fmt;

use serde::ser::{Serialize, SerializeMap, Serializer};

use super::Value;

/// A decoded record: field names mapped to values in schema order.
///
/// Records own all of their data; nothing refers back to the input buffer.
#[derive(Debug, Clone, PartialEq)]
pub struct DecodedRecord {
    schema: String,
    fields: Vec<(String, Value)>,
}

impl DecodedRecord {
    /// Create a record from ordered `(name, value)` pairs.
    pub fn new(schema: impl Into<String>, fields: Vec<(String, Value)>) -> Self {
        Self {
            schema: schema.into(),
            fields,
        }
    }

    /// Name of the schema the record was decoded with.
    #[must_use]
    pub fn schema_name(&self) -> &str {
        &self.schema
    }

    /// Number of fields.
    #[must_use]
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the record has no fields.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Look up a field value by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value)
    }

    /// Non-blank integer value of a field.
    #[must_use]
    pub fn integer(&self, name: &str) -> Option<i64> {
        self.get(name).and_then(Value::as_i64)
    }

    /// Non-blank float value of a field.
    #[must_use]
    pub fn float(&self, name: &str) -> Option<f64> {
        self.get(name).and_then(Value::as_f64)
    }

    /// Text value of a field.
    #[must_use]
    pub fn text(&self, name: &str) -> Option<&str> {
        self.get(name).and_then(Value::as_str)
    }

    /// Iterate over `(name, value)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.fields
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// Field names in schema order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    /// Consume the record, returning its ordered fields.
    #[must_use]
    pub fn into_fields(self) -> Vec<(String, Value)> {
        self.fields
    }
}

impl fmt::Display for DecodedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (idx, (name, value)) in self.fields.iter().enumerate() {
            if idx > 0 {
                writeln!(f)?;
            }
            write!(f, "{name} = {value}")?;
        }
        Ok(())
    }
}

/// Serializes as a map that keeps schema order.
impl Serialize for DecodedRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DecodedRecord {
        DecodedRecord::new(
            "sample",
            vec![
                ("B".to_string(), Value::text("FOO")),
                ("A".to_string(), Value::integer(12)),
                ("C".to_string(), Value::Float(None)),
            ],
        )
    }

    #[test]
    fn test_lookup() {
        let record = sample();
        assert_eq!(record.schema_name(), "sample");
        assert_eq!(record.len(), 3);
        assert_eq!(record.integer("A"), Some(12));
        assert_eq!(record.text("B"), Some("FOO"));
        assert_eq!(record.float("C"), None);
        assert_eq!(record.get("C"), Some(&Value::Float(None)));
        assert!(record.get("D").is_none());
    }

    #[test]
    fn test_order_is_kept() {
        let names: Vec<_> = sample().names().map(str::to_string).collect();
        assert_eq!(names, ["B", "A", "C"]);
    }

    #[test]
    fn test_json_keeps_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        assert_eq!(json, r#"{"B":"FOO","A":12,"C":null}"#);
    }

    #[test]
    fn test_display_snapshot() {
        insta::assert_snapshot!(sample().to_string(), @r"
        B = FOO
        A = 12
        C = <blank>
        ");
    }
}
