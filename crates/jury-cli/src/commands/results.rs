//! Results command: scores grouped by submission date.

use anyhow::Result;
use chrono::{Local, NaiveDate};
use jury::{ApiClient, JuryConfig, ResultsView};
use tracing::warn;

use crate::render::render_results;

/// Local calendar date used to pick the expanded bucket.
///
/// Timestamps are grouped by their own date portion, so around midnight
/// this may not match the UTC day of the newest scores.
fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub fn run(config: &JuryConfig, toggles: &[String], sorts: &[(String, String)]) -> Result<()> {
    let client = ApiClient::from_config(config);
    let mut view = ResultsView::new();
    view.refresh(&client, today())?;

    for date in toggles {
        view.toggle(date);
    }
    for (date, column) in sorts {
        if view.set_sort(date, column).is_none() {
            warn!("Column {} is not sortable, ignoring", column);
        }
    }

    print!("{}", render_results(&view.buckets()));
    Ok(())
}
