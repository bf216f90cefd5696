use models::FieldErrors;

/// Seam between typed form inputs and the rule engine.
///
/// Implementors run their ad hoc rule calls against their own fields and
/// hand back whatever accumulated; callers can then treat heterogeneous
/// forms uniformly without the engine itself needing dynamic dispatch.
pub trait Validate {
    /// Run every rule for this input. `Ok(())` when clean, the full error
    /// collection otherwise.
    fn validate(&self) -> Result<(), FieldErrors>;

    /// Check if the input passed validation.
    fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Clean;

    impl Validate for Clean {
        fn validate(&self) -> Result<(), FieldErrors> {
            Ok(())
        }
    }

    struct Blank;

    impl Validate for Blank {
        fn validate(&self) -> Result<(), FieldErrors> {
            let mut errors = FieldErrors::new();
            errors.add("title", "title field cannot be empty".to_string());
            Err(errors)
        }
    }

    #[test]
    fn test_is_valid_follows_validate() {
        assert!(Clean.is_valid());
        assert!(!Blank.is_valid());
    }
}
