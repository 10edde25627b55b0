use chrono::NaiveDateTime;
use serde::de::Deserializer;
use serde::ser::{Error as _, SerializeMap, Serializer};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Wire format for timestamp fields: ISO-8601 without a zone offset, the
/// fractional part omitted when zero.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// A single field of a processed record.
///
/// JSON-native values pass through untouched, timestamps encode as ISO-8601
/// strings, and binary values are not encodable: serializing a record that
/// carries one fails with a type error instead of silently producing a byte
/// array the store does not understand.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Value(serde_json::Value),
    Timestamp(NaiveDateTime),
    Binary(Vec<u8>),
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Value(value) => value.serialize(serializer),
            FieldValue::Timestamp(ts) => serializer.collect_str(&ts.format(TIMESTAMP_FORMAT)),
            FieldValue::Binary(_) => {
                Err(S::Error::custom("Vec<u8> value is not JSON serializable"))
            }
        }
    }
}

impl<'de> Deserialize<'de> for FieldValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = serde_json::Value::deserialize(deserializer)?;
        Ok(match value {
            serde_json::Value::String(s) => match s.parse::<NaiveDateTime>() {
                Ok(ts) => FieldValue::Timestamp(ts),
                Err(_) => FieldValue::Value(serde_json::Value::String(s)),
            },
            other => FieldValue::Value(other),
        })
    }
}

impl From<serde_json::Value> for FieldValue {
    fn from(value: serde_json::Value) -> Self {
        FieldValue::Value(value)
    }
}

impl From<NaiveDateTime> for FieldValue {
    fn from(ts: NaiveDateTime) -> Self {
        FieldValue::Timestamp(ts)
    }
}

impl From<Vec<u8>> for FieldValue {
    fn from(bytes: Vec<u8>) -> Self {
        FieldValue::Binary(bytes)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::Value(serde_json::Value::from(s))
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::Value(serde_json::Value::from(s))
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Value(serde_json::Value::from(b))
    }
}

impl From<i64> for FieldValue {
    fn from(n: i64) -> Self {
        FieldValue::Value(serde_json::Value::from(n))
    }
}

impl From<f64> for FieldValue {
    fn from(n: f64) -> Self {
        FieldValue::Value(serde_json::Value::from(n))
    }
}

/// One processed record, held as an ordered field mapping so payloads are
/// deterministic. Callers own the records; nothing here mutates or retains
/// them past a call.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(transparent)]
pub struct ProcessedAgentData {
    fields: BTreeMap<String, FieldValue>,
}

impl ProcessedAgentData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_field(mut self, name: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<FieldValue>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&FieldValue> {
        self.fields.get(name)
    }

    /// Plain key-value view of the record, the shape that goes on the wire.
    pub fn fields(&self) -> &BTreeMap<String, FieldValue> {
        &self.fields
    }
}

impl Serialize for ProcessedAgentData {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (name, value) in &self.fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
