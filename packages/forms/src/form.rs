use models::{FieldErrors, FormData};
use regex::Regex;

/// Validation context for one submitted form: a borrowed view of the
/// submitted data plus the errors accumulated so far.
///
/// Rules append messages and never abort, so a failing field does not stop
/// later rules or fields from being checked. The context is built once per
/// submission and discarded after the verdict is read; it is owned by a
/// single request and never shared.
pub struct Form<'a> {
    data: &'a FormData,
    errors: FieldErrors,
}

impl<'a> Form<'a> {
    /// Wrap submitted data in a fresh context with no errors recorded.
    pub fn new(data: &'a FormData) -> Self {
        Self {
            data,
            errors: FieldErrors::new(),
        }
    }

    /// Check that each listed field holds a non-blank value. Whitespace-only
    /// input counts as empty; trimming covers any Unicode whitespace.
    pub fn required(&mut self, fields: &[&str]) {
        for &field in fields {
            let value = self.data.get(field);
            if value.trim().is_empty() {
                tracing::debug!(field, "required field is blank");
                self.errors
                    .add(field, format!("{} field cannot be empty", field));
            }
        }
    }

    /// Check that a field's value stays within `limit` characters, counted
    /// in code points so multi-byte characters count once. An empty value
    /// passes; pair with `required` when the field is mandatory.
    pub fn max_length(&mut self, field: &str, limit: usize) {
        let value = self.data.get(field);
        if value.is_empty() {
            return;
        }
        if value.chars().count() > limit {
            tracing::debug!(field, limit, "value over maximum length");
            self.errors
                .add(field, format!("Only {} characters allowed", limit));
        }
    }

    /// Check that a field's value holds at least `minimum` characters,
    /// counted in code points. An empty value passes.
    pub fn min_length(&mut self, field: &str, minimum: usize) {
        let value = self.data.get(field);
        if value.is_empty() {
            return;
        }
        if value.chars().count() < minimum {
            tracing::debug!(field, minimum, "value under minimum length");
            self.errors.add(
                field,
                format!("You need to enter at least {} characters", minimum),
            );
        }
    }

    /// Check that a field's value is one of the allowed options, compared
    /// case-sensitively. An empty value passes; an empty option list rejects
    /// every non-empty value.
    pub fn permitted_values(&mut self, field: &str, allowed: &[&str]) {
        let value = self.data.get(field);
        if value.is_empty() {
            return;
        }
        if !allowed.contains(&value) {
            tracing::debug!(field, "value is not a permitted option");
            self.errors.add(field, "Invalid option".to_string());
        }
    }

    /// Check that a field's value satisfies a caller-compiled pattern.
    /// Anchored patterns are the intended use. An empty value passes.
    pub fn matches_pattern(&mut self, field: &str, pattern: &Regex) {
        let value = self.data.get(field);
        if value.is_empty() {
            return;
        }
        if !pattern.is_match(value) {
            tracing::debug!(field, "value does not match pattern");
            self.errors
                .add(field, format!("Please enter an correct {}", field));
        }
    }

    /// The submitted first value for a field, for re-rendering a failed form
    /// with what the user typed.
    pub fn value(&self, field: &str) -> &str {
        self.data.get(field)
    }

    /// True when no rule has recorded an error yet. Reading the verdict
    /// never mutates the context, so intermediate checks are fine.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// The errors accumulated so far, keyed by field.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Consume the context and keep only its errors.
    pub fn into_errors(self) -> FieldErrors {
        self.errors
    }
}
