use std::collections::HashMap;
use std::fmt;

use serde::Serialize;

/// A mapping of field names to their validation error messages.
///
/// A field key is present only when at least one rule produced a message for
/// it, and the messages for a field keep the order the rules appended them
/// in. The collection is only ever written through `add` and `merge`, so an
/// empty message list never occurs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors {
    errors: HashMap<String, Vec<String>>,
}

impl FieldErrors {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a message to a field's error list.
    pub fn add(&mut self, field: &str, message: String) {
        self.errors
            .entry(field.to_string())
            .or_default()
            .push(message);
    }

    /// The first message recorded for a field, if any. Templates usually
    /// render a single message next to each field.
    pub fn get(&self, field: &str) -> Option<&str> {
        self.errors
            .get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    /// Every message recorded for a field, in the order the rules added them.
    pub fn messages(&self, field: &str) -> &[String] {
        self.errors.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Fold another collection into this one, appending per field.
    pub fn merge(&mut self, other: FieldErrors) {
        for (field, mut messages) in other.errors {
            self.errors.entry(field).or_default().append(&mut messages);
        }
    }

    /// True when no field has any error recorded.
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of fields with at least one error.
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Iterate over `(field, messages)` pairs for rendering.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &Vec<String>)> {
        self.errors.iter()
    }
}

impl fmt::Display for FieldErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let list = self
            .errors
            .values()
            .flatten()
            .cloned()
            .collect::<Vec<String>>()
            .join(", ");
        f.write_str(&list)
    }
}
