use once_cell::sync::Lazy;
use regex::Regex;

/// Email shape shared by every validation in the process, compiled once on
/// first use and never mutated afterwards, so concurrently running
/// validations can borrow it freely.
///
/// This is the WHATWG HTML5 `input type="email"` pattern: a printable local
/// part, then `@`, then dot-separated labels of at most 63 characters that
/// start and end alphanumeric.
pub static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)*$",
    )
    .expect("Failed to compile email regex")
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_shapes() {
        let valid = vec![
            "dennis@bob.com",
            "test@bob.com",
            "first.last+tag@sub.example.org",
            "x@localhost",
        ];
        for email in valid {
            assert!(EMAIL_RE.is_match(email), "Valid email {} was rejected", email);
        }

        let invalid = vec![
            "testbob.com",
            "dennis @bob.com",
            "bob#!@.nils.com",
            "",
            "@example.com",
            "bob@",
        ];
        for email in invalid {
            assert!(
                !EMAIL_RE.is_match(email),
                "Invalid email {} was accepted",
                email
            );
        }
    }
}
