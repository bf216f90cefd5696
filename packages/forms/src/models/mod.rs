//! Typed validators for the application's submitted forms.

pub mod signup_form;
pub mod snippet_form;

pub use signup_form::SignupForm;
pub use snippet_form::SnippetForm;
