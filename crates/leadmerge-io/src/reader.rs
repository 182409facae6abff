use std::io::ErrorKind;
use std::path::Path;

use leadmerge_types::Lead;
use serde_json::Value;
use tracing::debug;

use crate::error::{IoError, IoResult};

/// Read and decode the `leads` array of the document at `path`.
pub fn read_leads(path: &Path) -> IoResult<Vec<Lead>> {
    if !path.exists() {
        return Err(IoError::InputNotFound(path.to_path_buf()));
    }
    let content = std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::InvalidData => IoError::InputParse {
            path: path.to_path_buf(),
            reason: "input is not valid UTF-8".into(),
        },
        _ => IoError::InputRead {
            path: path.to_path_buf(),
            source,
        },
    })?;

    let leads = parse_leads(path, &content)?;
    debug!(path = %path.display(), count = leads.len(), "read leads");
    Ok(leads)
}

/// Decode a lead document from a string. `path` is only used in errors.
///
/// Keys other than `leads` at the top level are ignored.
pub fn parse_leads(path: &Path, content: &str) -> IoResult<Vec<Lead>> {
    let parse_error = |reason: String| IoError::InputParse {
        path: path.to_path_buf(),
        reason,
    };

    let document: Value = serde_json::from_str(content).map_err(|e| parse_error(e.to_string()))?;
    let leads = match document {
        Value::Object(mut map) => map
            .remove("leads")
            .ok_or_else(|| parse_error("missing `leads` key".into()))?,
        _ => return Err(parse_error("top level is not a JSON object".into())),
    };
    let Value::Array(items) = leads else {
        return Err(parse_error("`leads` is not an array".into()));
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, value)| {
            Lead::from_value(index, value).map_err(|source| IoError::RecordSchema {
                path: path.to_path_buf(),
                source,
            })
        })
        .collect()
}
