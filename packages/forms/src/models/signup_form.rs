use models::{FieldErrors, FormData};
use serde::Deserialize;

use crate::form::Form;
use crate::patterns::EMAIL_RE;
use crate::validator::Validate;

/// A sign-up submission: display name, email address and password.
#[derive(Debug, Clone, Deserialize)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
}

impl SignupForm {
    fn as_form_data(&self) -> FormData {
        let mut data = FormData::new();
        data.add("name", &self.name);
        data.add("email", &self.email);
        data.add("password", &self.password);
        data
    }
}

impl Validate for SignupForm {
    fn validate(&self) -> Result<(), FieldErrors> {
        let data = self.as_form_data();
        let mut form = Form::new(&data);

        form.required(&["name", "email", "password"]);
        form.max_length("name", 255);
        form.max_length("email", 255);
        form.matches_pattern("email", &EMAIL_RE);
        form.min_length("password", 10);

        if form.is_valid() {
            Ok(())
        } else {
            Err(form.into_errors())
        }
    }
}
