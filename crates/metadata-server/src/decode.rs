//! Payload decoding for the write path.
//!
//! Bodies arrive as YAML or JSON; serde_yaml parses both since every JSON
//! document is also a YAML document. Fields are optional at the wire level
//! so presence can be checked explicitly and reported per field.

use metadata_core::{DirectoryError, Maintainer, Record};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct MetadataPayload {
    source: Option<String>,
    company: Option<String>,
    title: Option<String>,
    /// Presence-only: content is ignored and never stored.
    version: Option<serde_yaml::Value>,
    #[serde(default)]
    maintainers: Vec<MaintainerPayload>,
}

#[derive(Debug, Deserialize)]
struct MaintainerPayload {
    name: Option<String>,
    email: Option<String>,
}

/// Decode a request body into a candidate record.
///
/// Malformed input is a decode failure; a well-formed payload missing a
/// required field (`source`, `company`, `version`, or a maintainer entry's
/// `name`/`email`) is a validation failure naming the field. Mailbox syntax
/// is the directory's concern, not the decoder's.
pub fn decode_record(body: &[u8]) -> Result<Record, DirectoryError> {
    let payload: MetadataPayload =
        serde_yaml::from_slice(body).map_err(|e| DirectoryError::Decode(e.to_string()))?;

    let source = payload
        .source
        .filter(|s| !s.is_empty())
        .ok_or_else(|| DirectoryError::missing_field("source"))?;
    let company = payload
        .company
        .filter(|s| !s.is_empty())
        .ok_or_else(|| DirectoryError::missing_field("company"))?;

    match payload.version {
        None | Some(serde_yaml::Value::Null) => {
            return Err(DirectoryError::missing_field("version"))
        }
        Some(_) => {}
    }

    let mut maintainers = Vec::with_capacity(payload.maintainers.len());
    for entry in payload.maintainers {
        let name = entry
            .name
            .filter(|s| !s.is_empty())
            .ok_or_else(|| DirectoryError::missing_field("maintainers.name"))?;
        let email = entry
            .email
            .filter(|s| !s.is_empty())
            .ok_or_else(|| DirectoryError::missing_field("maintainers.email"))?;
        maintainers.push(Maintainer { name, email });
    }

    Ok(Record {
        source,
        company,
        title: payload.title.filter(|t| !t.is_empty()),
        maintainers,
    })
}
