use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A read-only view over one submitted form, mapping each field name to the
/// values posted for it. A field may carry more than one value, since
/// multi-select inputs submit the same name repeatedly.
///
/// The inbound layer is responsible for decoding the transport (form bodies,
/// query strings) into name/value pairs; this type only holds the decoded
/// text. Keys are case-sensitive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormData {
    fields: HashMap<String, Vec<String>>,
}

impl FormData {
    /// Create an empty data set. Validating empty data is legal; every rule
    /// will simply see empty-string values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value for a field, keeping any values already submitted
    /// under the same name.
    pub fn add(&mut self, field: &str, value: &str) {
        self.fields
            .entry(field.to_string())
            .or_default()
            .push(value.to_string());
    }

    /// The first value submitted for a field, or the empty string when the
    /// field is missing. Lookups never fail.
    pub fn get(&self, field: &str) -> &str {
        self.fields
            .get(field)
            .and_then(|values| values.first())
            .map(String::as_str)
            .unwrap_or("")
    }

    /// Every value submitted for a field, in submission order. Empty when
    /// the field is missing.
    pub fn get_all(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether anything was submitted under this exact field name.
    pub fn contains(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    /// True when no fields were submitted at all.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}

impl FromIterator<(String, String)> for FormData {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(pairs: I) -> Self {
        let mut data = FormData::new();
        for (field, value) in pairs {
            data.add(&field, &value);
        }
        data
    }
}
