//! Export command for writing all scores to a file.

use std::path::Path;

use anyhow::{Context, Result};
use jury::{ApiClient, DataSource, JuryConfig, encode_csv, encode_ndjson};

use crate::cli::ExportFormat;

/// Export every submitted score, bypassing grouping and sorting
pub fn run(config: &JuryConfig, output: Option<&str>, format: ExportFormat) -> Result<()> {
    let client = ApiClient::from_config(config);
    let scores = client.fetch_raw_scores()?;
    eprintln!("Fetched {} score(s)", scores.len());

    // Raw objects keep the server's key order, which becomes the column order
    let content = match format {
        ExportFormat::Csv => encode_csv(&scores),
        ExportFormat::Json => encode_ndjson(&scores),
    }
    .context("Failed to encode scores")?;

    let default_path = config.export_path.to_string_lossy();
    match output.unwrap_or(&*default_path) {
        "-" => println!("{}", content),
        path => {
            if let Some(parent) = Path::new(path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)
                        .with_context(|| format!("Failed to create {}", parent.display()))?;
                }
            }
            std::fs::write(path, &content)
                .with_context(|| format!("Failed to write {}", path))?;
            eprintln!("Exported to: {} ({})", path, format.mime_type());
        }
    }

    Ok(())
}
