//! Newsletter sign-up form validation.

use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubscribeError {
    #[error("enter your email")]
    Empty,

    #[error("'{0}' is not an email address")]
    Malformed(String),
}

/// A syntactically plausible email address.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Requires exactly one `@`, a non-empty local part without whitespace, and
/// a dotted domain with no empty labels.
pub fn validate_email(input: &str) -> Result<EmailAddress, SubscribeError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(SubscribeError::Empty);
    }
    let malformed = || SubscribeError::Malformed(trimmed.to_string());

    let (local, domain) = trimmed.split_once('@').ok_or_else(malformed)?;
    if local.is_empty() || domain.contains('@') || trimmed.chars().any(char::is_whitespace) {
        return Err(malformed());
    }
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|label| label.is_empty()) {
        return Err(malformed());
    }
    Ok(EmailAddress(trimmed.to_string()))
}
