//! Command line definition.

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use jury::{CSV_MIME_TYPE, JuryConfig, NDJSON_MIME_TYPE};

#[derive(Parser)]
#[command(name = "jury")]
#[command(about = "Poster judging score client", version)]
pub struct Cli {
    /// TOML configuration file
    #[arg(short, long, global = true, default_value = "jury.toml")]
    pub config: PathBuf,

    /// Base URL of the judging API
    #[arg(long, global = true, env = "JURY_BASE_URL")]
    pub base_url: Option<String>,

    /// Directory for persisted display preferences
    #[arg(long, global = true, env = "JURY_STATE_DIR")]
    pub state_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Config file values with command line overrides applied
    pub fn resolve_config(&self) -> Result<JuryConfig> {
        let file_config = JuryConfig::load(&self.config)?;
        let mut builder = JuryConfig::builder().base(file_config);
        if let Some(ref url) = self.base_url {
            builder = builder.base_url(url.clone());
        }
        if let Some(ref dir) = self.state_dir {
            builder = builder.state_dir(dir.clone());
        }
        Ok(builder.build())
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// List posters grouped by session
    Sessions {
        /// Filter by title, presenter or affiliation (case-insensitive)
        #[arg(short, long, default_value = "")]
        search: String,

        /// Sort a session, as SESSION=COLUMN; repeating the same column flips direction
        #[arg(long, value_parser = parse_sort)]
        sort: Vec<(String, String)>,
    },
    /// Collapse or expand a poster session (remembered across runs)
    ToggleSession {
        /// Session day, e.g. Monday
        session: String,
    },
    /// Show submitted scores grouped by date
    Results {
        /// Toggle a date bucket (YYYY-MM-DD); may be repeated
        #[arg(long)]
        toggle: Vec<String>,

        /// Sort a date bucket, as DATE=COLUMN; repeating the same column flips direction
        #[arg(long, value_parser = parse_sort)]
        sort: Vec<(String, String)>,
    },
    /// Export all scores
    Export {
        /// Output path, "-" for stdout (defaults to the configured export path)
        #[arg(short, long)]
        output: Option<String>,

        #[arg(short, long, value_enum, default_value_t = ExportFormat::Csv)]
        format: ExportFormat,
    },
    /// List judges
    Judges,
    /// Submit a score for a poster
    Submit {
        /// Poster title
        #[arg(long)]
        poster: String,

        #[arg(long, default_value = jury::record::ANONYMOUS_JUDGE)]
        judge: String,

        /// Scientific Clarity and Rigor (1-5)
        #[arg(long)]
        clarity: u8,

        /// Data Presentation and Interpretation (1-5)
        #[arg(long)]
        presentation: u8,

        /// Visual Design and Organization (1-5)
        #[arg(long)]
        design: u8,

        /// Impact and Innovation (1-5)
        #[arg(long)]
        impact: u8,

        /// Tiebreaker (1-5)
        #[arg(long)]
        tiebreaker: u8,

        #[arg(long, default_value = "")]
        comment: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Csv => CSV_MIME_TYPE,
            Self::Json => NDJSON_MIME_TYPE,
        }
    }
}

/// Parse a `BUCKET=COLUMN` sort request
fn parse_sort(value: &str) -> std::result::Result<(String, String), String> {
    let (bucket, column) = value
        .split_once('=')
        .ok_or_else(|| format!("expected BUCKET=COLUMN, got {:?}", value))?;
    if bucket.is_empty() || column.is_empty() {
        return Err(format!("expected BUCKET=COLUMN, got {:?}", value));
    }
    Ok((bucket.to_string(), column.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_sort() {
        assert_eq!(
            parse_sort("2024-05-01=Judge").unwrap(),
            ("2024-05-01".to_string(), "Judge".to_string())
        );
        assert!(parse_sort("2024-05-01").is_err());
        assert!(parse_sort("=Judge").is_err());
    }

    #[test]
    fn test_cli_parses_results_flags() {
        let cli = Cli::try_parse_from([
            "jury",
            "results",
            "--toggle",
            "2024-05-01",
            "--sort",
            "2024-05-02=Poster_Title",
            "--sort",
            "2024-05-02=Poster_Title",
        ])
        .unwrap();

        match cli.command {
            Command::Results { toggle, sort } => {
                assert_eq!(toggle, vec!["2024-05-01"]);
                assert_eq!(sort.len(), 2);
            }
            _ => panic!("expected results command"),
        }
    }

    #[test]
    fn test_cli_overrides_config() {
        let cli = Cli::try_parse_from([
            "jury",
            "--config",
            "definitely-missing-jury.toml",
            "--base-url",
            "http://judging:9000",
            "judges",
        ])
        .unwrap();

        let config = cli.resolve_config().unwrap();
        assert_eq!(config.base_url, "http://judging:9000");
    }

    #[test]
    fn test_cli_parses_sessions_sort() {
        let cli = Cli::try_parse_from([
            "jury",
            "sessions",
            "--search",
            "lipid",
            "--sort",
            "Monday=Poster_Title",
        ])
        .unwrap();

        match cli.command {
            Command::Sessions { search, sort } => {
                assert_eq!(search, "lipid");
                assert_eq!(sort, vec![("Monday".to_string(), "Poster_Title".to_string())]);
            }
            _ => panic!("expected sessions command"),
        }
    }

    #[test]
    fn test_export_format_mime_type() {
        assert_eq!(ExportFormat::Csv.mime_type(), "text/csv;charset=utf-8");
        assert_eq!(ExportFormat::Json.mime_type(), "application/x-ndjson");
    }
}
