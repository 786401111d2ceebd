//! Query filters and their construction rules.

use crate::error::DirectoryError;

/// A read-only lookup against the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryFilter {
    /// Look up the single record for a source path.
    BySource(String),
    /// List every record under a company, optionally narrowed to an exact
    /// title match.
    ByCompany {
        company: String,
        title: Option<String>,
    },
}

impl QueryFilter {
    /// Build a filter from raw query parameters.
    ///
    /// `source` takes precedence: when supplied, company and title are
    /// ignored. Empty strings count as absent, matching URL query semantics
    /// where a missing parameter decodes to "". At least one of source or
    /// company is required.
    pub fn from_params(
        source: Option<&str>,
        company: Option<&str>,
        title: Option<&str>,
    ) -> Result<Self, DirectoryError> {
        let source = source.filter(|s| !s.is_empty());
        let company = company.filter(|s| !s.is_empty());
        let title = title.filter(|s| !s.is_empty());

        if let Some(source) = source {
            return Ok(Self::BySource(source.to_string()));
        }

        match company {
            Some(company) => Ok(Self::ByCompany {
                company: company.to_string(),
                title: title.map(str::to_string),
            }),
            None => Err(DirectoryError::InvalidQuery(
                "specify source or company".to_string(),
            )),
        }
    }
}
