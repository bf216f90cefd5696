use models::{FieldErrors, FormData};
use serde::Deserialize;

use crate::form::Form;
use crate::validator::Validate;

/// Options the snippet form accepts for its lifetime, in days.
const EXPIRES_OPTIONS: [&str; 3] = ["365", "7", "1"];

/// A new-snippet submission: title, body and lifetime.
#[derive(Debug, Clone, Deserialize)]
pub struct SnippetForm {
    pub title: String,
    pub content: String,
    pub expires: String,
}

impl SnippetForm {
    fn as_form_data(&self) -> FormData {
        let mut data = FormData::new();
        data.add("title", &self.title);
        data.add("content", &self.content);
        data.add("expires", &self.expires);
        data
    }
}

impl Validate for SnippetForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let data = self.as_form_data();
        let mut form = Form::new(&data);

        form.required(&["title", "content", "expires"]);
        form.max_length("title", 100);
        form.permitted_values("expires", &EXPIRES_OPTIONS);

        if form.is_valid() {
            Ok(())
        } else {
            Err(form.into_errors())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> SnippetForm {
        SnippetForm {
            title: "O snail".to_string(),
            content: "O snail\nClimb Mount Fuji,\nBut slowly, slowly!".to_string(),
            expires: "7".to_string(),
        }
    }

    #[test]
    fn test_valid_snippet() {
        assert!(valid_form().validate().is_ok());
    }

    #[test]
    fn test_missing_fields() {
        let form = SnippetForm {
            title: String::new(),
            content: String::new(),
            ..valid_form()
        };

        let errors = form.validate().expect_err("missing fields should fail");
        assert_eq!(errors.get("title"), Some("title field cannot be empty"));
        assert_eq!(errors.get("content"), Some("content field cannot be empty"));
    }

    #[test]
    fn test_title_over_limit() {
        let form = SnippetForm {
            title: "a".repeat(101),
            ..valid_form()
        };

        let errors = form.validate().expect_err("long title should fail");
        assert_eq!(errors.get("title"), Some("Only 100 characters allowed"));
    }

    #[test]
    fn test_title_at_limit_passes() {
        let form = SnippetForm {
            title: "a".repeat(100),
            ..valid_form()
        };

        assert!(form.validate().is_ok());
    }

    #[test]
    fn test_unknown_expires_option() {
        let form = SnippetForm {
            expires: "14".to_string(),
            ..valid_form()
        };

        let errors = form.validate().expect_err("unknown option should fail");
        assert_eq!(errors.get("expires"), Some("Invalid option"));
    }
}
