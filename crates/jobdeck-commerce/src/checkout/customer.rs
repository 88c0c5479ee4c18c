//! Customer details collected during checkout.

use crate::error::CheckoutError;
use serde::{Deserialize, Serialize};

/// Customer contact details, collected at the user-details step.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CustomerDetails {
    /// Customer email (required, RFC-shaped).
    pub email: String,
    /// First name (required).
    pub first_name: String,
    /// Last name (required).
    pub last_name: String,
    /// Phone number (optional).
    pub phone: Option<String>,
}

impl CustomerDetails {
    /// Create customer details.
    pub fn new(
        email: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
    ) -> Self {
        Self {
            email: email.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            phone: None,
        }
    }

    /// Get full name.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Validate the details for submission.
    ///
    /// Field-level problems are recovered locally by re-prompting; the
    /// first failing field is reported.
    pub fn validate(&self) -> Result<(), CheckoutError> {
        if self.first_name.trim().is_empty() {
            return Err(CheckoutError::Validation(
                "first name is required".to_string(),
            ));
        }
        if self.last_name.trim().is_empty() {
            return Err(CheckoutError::Validation(
                "last name is required".to_string(),
            ));
        }
        if !is_valid_email(self.email.trim()) {
            return Err(CheckoutError::Validation(
                "a valid email address is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// Minimal RFC-shaped email check: one `@`, non-empty local part, and a
/// dotted domain.
fn is_valid_email(email: &str) -> bool {
    if email.contains(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && !tld.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid() -> CustomerDetails {
        CustomerDetails::new("jess@example.com", "Jess", "Park")
    }

    #[test]
    fn test_valid_details() {
        assert!(valid().validate().is_ok());
        assert_eq!(valid().full_name(), "Jess Park");
    }

    #[test]
    fn test_missing_names_rejected() {
        let mut details = valid();
        details.first_name = "  ".to_string();
        assert!(details.validate().is_err());

        let mut details = valid();
        details.last_name = String::new();
        assert!(details.validate().is_err());
    }

    #[test]
    fn test_email_shapes() {
        for email in ["jess@example.com", "a.b@mail.example.org"] {
            assert!(is_valid_email(email), "{email} should be valid");
        }
        for email in [
            "",
            "no-at-sign",
            "@example.com",
            "jess@",
            "jess@nodot",
            "jess@.com",
            "jess@example.",
            "je ss@example.com",
        ] {
            assert!(!is_valid_email(email), "{email} should be invalid");
        }
    }

    #[test]
    fn test_phone_is_optional() {
        let mut details = valid();
        details.phone = Some("+61 400 000 000".to_string());
        assert!(details.validate().is_ok());
    }
}
