//! Email address type
//!
//! Deserialising into [`EmailAddress`] validates the syntax, so a request body
//! with a malformed address is rejected by the JSON extractor before any
//! handler runs.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .expect("email pattern is valid")
});

/// A syntactically valid email address
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

/// Rejected email address
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("value is not a valid email address: {0}")]
pub struct InvalidEmail(pub String);

impl EmailAddress {
    /// Validate and wrap an address. Surrounding whitespace is trimmed.
    pub fn parse(value: impl AsRef<str>) -> Result<Self, InvalidEmail> {
        let value = value.as_ref().trim();
        if value.len() <= 254 && EMAIL_RE.is_match(value) {
            Ok(Self(value.to_string()))
        } else {
            Err(InvalidEmail(value.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = InvalidEmail;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<EmailAddress> for String {
    fn from(email: EmailAddress) -> Self {
        email.0
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_valid_addresses() {
        for addr in ["a@example.com", "first.last+tag@sub.example.co", "x_y@a-b.io"] {
            assert!(EmailAddress::parse(addr).is_ok(), "{} should be valid", addr);
        }
    }

    #[test]
    fn test_invalid_addresses() {
        for addr in [
            "",
            "plain",
            "@example.com",
            "a@",
            "a@localhost",
            "a b@example.com",
            "a@@example.com",
            "a@-x.com",
        ] {
            assert!(EmailAddress::parse(addr).is_err(), "{} should be invalid", addr);
        }
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let email = EmailAddress::parse("  a@example.com ").unwrap();
        assert_eq!(email.as_str(), "a@example.com");
    }

    #[test]
    fn test_deserialize_rejects_invalid() {
        assert!(serde_json::from_str::<EmailAddress>("\"nope\"").is_err());
        let email: EmailAddress = serde_json::from_str("\"a@example.com\"").unwrap();
        assert_eq!(serde_json::to_string(&email).unwrap(), "\"a@example.com\"");
    }

    proptest! {
        #[test]
        fn generated_addresses_are_accepted(
            local in "[a-z0-9]{1,20}",
            domain in "[a-z]{1,10}",
            tld in "[a-z]{2,6}",
        ) {
            let addr = format!("{}@{}.{}", local, domain, tld);
            let parsed = EmailAddress::parse(&addr).unwrap();
            prop_assert_eq!(parsed.as_str(), addr.as_str());
        }

        #[test]
        fn addresses_without_at_are_rejected(s in "[a-z0-9.]{0,30}") {
            prop_assert!(EmailAddress::parse(&s).is_err());
        }
    }
}
