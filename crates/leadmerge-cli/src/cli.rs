use std::path::PathBuf;

use clap::Parser;
use leadmerge_io::{IoConfig, LogFormat};

#[derive(Parser)]
#[command(
    name = "leadmerge",
    about = "Deduplicate lead records by _id and email, logging every change",
    version,
)]
pub struct Cli {
    /// Input JSON document with a `leads` array
    pub input: PathBuf,

    /// Log file to write changes to
    #[arg(short, long, default_value = "changes.log")]
    pub log: PathBuf,

    /// Output file for the deduplicated leads
    #[arg(short, long, default_value = "out.json")]
    pub output: PathBuf,

    /// Layout of the change log
    #[arg(long, default_value = "text")]
    pub log_format: LogFormatArg,

    /// Resolve and print a summary without writing any file
    #[arg(long)]
    pub dry_run: bool,

    /// Log resolution details to stderr
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum LogFormatArg {
    Text,
    Json,
}

impl Cli {
    pub fn io_config(&self) -> IoConfig {
        IoConfig {
            log_path: self.log.clone(),
            output_path: self.output.clone(),
            log_format: match self.log_format {
                LogFormatArg::Text => LogFormat::Text,
                LogFormatArg::Json => LogFormat::Json,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_defaults() {
        let cli = Cli::try_parse_from(["leadmerge", "leads.json"]).unwrap();
        assert_eq!(cli.input, PathBuf::from("leads.json"));
        assert_eq!(cli.io_config(), IoConfig::default());
        assert!(!cli.dry_run);
        assert!(!cli.verbose);
    }

    #[test]
    fn parse_short_flags() {
        let cli =
            Cli::try_parse_from(["leadmerge", "in.json", "-l", "a.log", "-o", "b.json"]).unwrap();
        assert_eq!(cli.log, PathBuf::from("a.log"));
        assert_eq!(cli.output, PathBuf::from("b.json"));
    }

    #[test]
    fn parse_long_flags() {
        let cli = Cli::try_parse_from([
            "leadmerge", "in.json", "--log", "a.log", "--output", "b.json", "--log-format", "json",
        ])
        .unwrap();
        let config = cli.io_config();
        assert_eq!(config.log_path, PathBuf::from("a.log"));
        assert_eq!(config.output_path, PathBuf::from("b.json"));
        assert_eq!(config.log_format, LogFormat::Json);
    }

    #[test]
    fn input_is_required() {
        assert!(Cli::try_parse_from(["leadmerge"]).is_err());
    }

    #[test]
    fn parse_dry_run_verbose() {
        let cli = Cli::try_parse_from(["leadmerge", "-v", "--dry-run", "in.json"]).unwrap();
        assert!(cli.dry_run);
        assert!(cli.verbose);
    }

    #[test]
    fn unknown_log_format_rejected() {
        assert!(Cli::try_parse_from(["leadmerge", "in.json", "--log-format", "xml"]).is_err());
    }
}
