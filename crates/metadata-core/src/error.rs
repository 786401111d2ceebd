use thiserror::Error;

/// Errors surfaced by the directory and its adapters.
///
/// Every variant is request-local; none is fatal to the process. Not-found
/// is not an error: querying a missing source or company yields an empty
/// result.
#[derive(Debug, Error)]
pub enum DirectoryError {
    /// Payload was not well-formed in its source format.
    #[error("decode failed: {0}")]
    Decode(String),

    /// A required field was missing or a maintainer email failed mailbox
    /// validation. The message carries the field-level cause.
    #[error("validation failed: {0}")]
    Validation(String),

    /// A read supplied neither source nor company.
    #[error("invalid query: {0}")]
    InvalidQuery(String),
}

impl DirectoryError {
    /// Uniform message for a required field that was absent or empty.
    pub fn missing_field(field: &str) -> Self {
        Self::Validation(format!("required field '{field}' is missing or empty"))
    }

    /// Uniform message for an address that failed mailbox validation.
    pub fn invalid_email(email: &str) -> Self {
        Self::Validation(format!("'{email}' is not a valid mailbox address"))
    }

    pub fn http_status(&self) -> u16 {
        match self {
            Self::Decode(_) => 400,
            Self::Validation(_) => 422,
            Self::InvalidQuery(_) => 400,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── http_status: exhaustive variant coverage ──────────────────

    #[test]
    fn http_status_decode() {
        assert_eq!(DirectoryError::Decode("bad yaml".into()).http_status(), 400);
    }

    #[test]
    fn http_status_validation() {
        assert_eq!(
            DirectoryError::Validation("no source".into()).http_status(),
            422
        );
    }

    #[test]
    fn http_status_invalid_query() {
        assert_eq!(
            DirectoryError::InvalidQuery("no keys".into()).http_status(),
            400
        );
    }

    // ── Display ──────────────────────────────────────────────────

    #[test]
    fn display_decode() {
        let e = DirectoryError::Decode("unexpected token".into());
        assert_eq!(e.to_string(), "decode failed: unexpected token");
    }

    #[test]
    fn display_missing_field() {
        let e = DirectoryError::missing_field("version");
        assert_eq!(
            e.to_string(),
            "validation failed: required field 'version' is missing or empty"
        );
    }

    #[test]
    fn display_invalid_email() {
        let e = DirectoryError::invalid_email("apptwohotmail.com");
        assert_eq!(
            e.to_string(),
            "validation failed: 'apptwohotmail.com' is not a valid mailbox address"
        );
    }

    #[test]
    fn display_invalid_query() {
        let e = DirectoryError::InvalidQuery("specify source or company".into());
        assert_eq!(e.to_string(), "invalid query: specify source or company");
    }
}
