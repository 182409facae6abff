use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Layout of the change log file.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable blocks, one per original lead.
    #[default]
    Text,
    /// One JSON object per line, one line per original lead.
    Json,
}

/// Where and how the two output artifacts are written.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct IoConfig {
    /// Change log destination.
    pub log_path: PathBuf,
    /// Deduplicated lead document destination.
    pub output_path: PathBuf,
    pub log_format: LogFormat,
}

impl Default for IoConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from("changes.log"),
            output_path: PathBuf::from("out.json"),
            log_format: LogFormat::Text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = IoConfig::default();
        assert_eq!(c.log_path, PathBuf::from("changes.log"));
        assert_eq!(c.output_path, PathBuf::from("out.json"));
        assert_eq!(c.log_format, LogFormat::Text);
    }

    #[test]
    fn log_format_wire_names() {
        assert_eq!(serde_json::to_string(&LogFormat::Json).unwrap(), "\"json\"");
        let parsed: LogFormat = serde_json::from_str("\"text\"").unwrap();
        assert_eq!(parsed, LogFormat::Text);
    }
}
