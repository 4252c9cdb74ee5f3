//! Document model
//!
//! A [`Document`] is the parsed top-level JSON array; each element is a
//! [`Record`]. Shape is checked once, up front, so stamping itself cannot
//! fail.

use crate::error::ShapeError;
use serde::Serialize;
use serde_json::{Map, Value};

/// One JSON object element of the top-level array
pub type Record = Map<String, Value>;

/// Name of a JSON value's type, as used in shape errors
#[must_use]
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// What a stamping pass did to the records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StampOutcome {
    /// Records visited
    pub records: usize,
    /// Records that did not have the field
    pub inserted: usize,
    /// Records whose field held a different value
    pub overwritten: usize,
    /// Records whose field already held the value
    pub unchanged: usize,
}

impl StampOutcome {
    /// Records whose content changed
    #[inline]
    #[must_use]
    pub fn modified(&self) -> usize {
        self.inserted + self.overwritten
    }
}

/// Ordered sequence of records
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
#[serde(transparent)]
pub struct Document {
    records: Vec<Record>,
}

impl Document {
    /// Check that `value` is an array of objects and take ownership of it
    ///
    /// # Errors
    /// - `ShapeError::NotAnArray` if the top-level value is not an array
    /// - `ShapeError::NotAnObject` for the first element that is not an object
    pub fn from_value(value: Value) -> Result<Self, ShapeError> {
        let Value::Array(items) = value else {
            return Err(ShapeError::NotAnArray {
                found: json_type_name(&value),
            });
        };

        let records = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| match item {
                Value::Object(record) => Ok(record),
                other => Err(ShapeError::NotAnObject {
                    index,
                    found: json_type_name(&other),
                }),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { records })
    }

    /// Set `field` to the string `value` on every record, in order
    ///
    /// An existing key keeps its position; a new key is appended.
    pub fn stamp(&mut self, field: &str, value: &str) -> StampOutcome {
        let mut outcome = StampOutcome {
            records: self.records.len(),
            ..StampOutcome::default()
        };

        for record in &mut self.records {
            match record.insert(field.to_owned(), Value::String(value.to_owned())) {
                None => outcome.inserted += 1,
                Some(Value::String(previous)) if previous == value => outcome.unchanged += 1,
                Some(_) => outcome.overwritten += 1,
            }
        }

        outcome
    }

    /// Number of records
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the document has no records
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records in document order
    #[inline]
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Convert back into a JSON array value
    #[must_use]
    pub fn into_value(self) -> Value {
        Value::Array(self.records.into_iter().map(Value::Object).collect())
    }
}
