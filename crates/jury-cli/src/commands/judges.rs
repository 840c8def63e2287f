//! Judges command.

use anyhow::Result;
use jury::{ApiClient, DataSource, JuryConfig};

pub fn run(config: &JuryConfig) -> Result<()> {
    let client = ApiClient::from_config(config);
    let judges = client.fetch_judges()?;

    if judges.is_empty() {
        println!("No judges registered.");
        return Ok(());
    }
    for judge in judges {
        println!("{}", judge);
    }
    Ok(())
}
