//! Upsert precondition checks.
//!
//! Validation runs before the directory lock is taken; a rejected record
//! leaves both indexes untouched.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::DirectoryError;
use crate::record::Record;

/// Anchored mailbox pattern: local part, '@', dotted domain with a TLD.
static MAILBOX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$").unwrap());

/// Check a single address for mailbox syntax.
pub fn is_valid_mailbox(addr: &str) -> bool {
    MAILBOX_RE.is_match(addr)
}

/// Validate the upsert preconditions for a record: non-empty source,
/// non-empty company, and mailbox syntax for every maintainer email.
pub fn validate_record(record: &Record) -> Result<(), DirectoryError> {
    if record.source.is_empty() {
        return Err(DirectoryError::missing_field("source"));
    }
    if record.company.is_empty() {
        return Err(DirectoryError::missing_field("company"));
    }
    for maintainer in &record.maintainers {
        if !is_valid_mailbox(&maintainer.email) {
            return Err(DirectoryError::invalid_email(&maintainer.email));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::Maintainer;

    fn record_with_email(email: &str) -> Record {
        Record {
            source: "https://github.com/random/repo".to_string(),
            company: "Random Inc.".to_string(),
            title: Some("Valid App 1".to_string()),
            maintainers: vec![Maintainer {
                name: "firstmaintainer app1".to_string(),
                email: email.to_string(),
            }],
        }
    }

    #[test]
    fn accepts_plain_mailbox() {
        assert!(is_valid_mailbox("firstmaintainer@hotmail.com"));
        assert!(is_valid_mailbox("dev.team+alerts@sub.example.co"));
    }

    #[test]
    fn rejects_malformed_mailboxes() {
        assert!(!is_valid_mailbox("apptwohotmail.com")); // no '@'
        assert!(!is_valid_mailbox("user@localhost")); // no TLD
        assert!(!is_valid_mailbox("user name@example.com")); // space in local part
        assert!(!is_valid_mailbox(""));
    }

    #[test]
    fn valid_record_passes() {
        assert!(validate_record(&record_with_email("team@example.com")).is_ok());
    }

    #[test]
    fn invalid_email_names_the_address() {
        let err = validate_record(&record_with_email("apptwohotmail.com")).unwrap_err();
        assert!(err.to_string().contains("apptwohotmail.com"));
    }

    #[test]
    fn empty_source_rejected() {
        let mut record = record_with_email("team@example.com");
        record.source.clear();
        let err = validate_record(&record).unwrap_err();
        assert!(err.to_string().contains("source"));
    }

    #[test]
    fn empty_company_rejected() {
        let mut record = record_with_email("team@example.com");
        record.company.clear();
        let err = validate_record(&record).unwrap_err();
        assert!(err.to_string().contains("company"));
    }

    #[test]
    fn record_without_maintainers_passes() {
        let mut record = record_with_email("team@example.com");
        record.maintainers.clear();
        assert!(validate_record(&record).is_ok());
    }
}
