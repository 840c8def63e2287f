//! Plain text rendering of grouped views.

use std::fmt::Write;

use jury::record::Record;
use jury::sort::SortColumn;
use jury::{GroupView, PosterRecord, ScoreRecord};

const COLLAPSED: &str = "▶";
const EXPANDED: &str = "▼";

fn marker(collapsed: bool) -> &'static str {
    if collapsed { COLLAPSED } else { EXPANDED }
}

/// Render poster session buckets; expanded sessions list their posters
pub fn render_sessions(buckets: &[GroupView<'_, PosterRecord>]) -> String {
    let mut output = String::new();

    if buckets.is_empty() {
        let _ = writeln!(output, "No posters match.");
        return output;
    }

    for bucket in buckets {
        let date = bucket
            .records
            .first()
            .map(|p| p.formatted_date())
            .filter(|d| !d.is_empty());
        let _ = match date {
            Some(date) => writeln!(
                output,
                "{} {} Session ({}) [{}]",
                marker(bucket.collapsed),
                bucket.key,
                date,
                bucket.count_label("poster")
            ),
            None => writeln!(
                output,
                "{} {} Session [{}]",
                marker(bucket.collapsed),
                bucket.key,
                bucket.count_label("poster")
            ),
        };

        if bucket.collapsed {
            continue;
        }
        for poster in &bucket.records {
            let board = poster
                .board_number
                .map(|b| format!("#{} ", b))
                .unwrap_or_default();
            let _ = writeln!(output, "    {}{}", board, poster.title);
            let _ = writeln!(
                output,
                "        Author: {} | Affiliation: {} | {}",
                poster.presenter,
                poster.affiliation,
                poster.role.label()
            );
        }
    }

    output
}

/// Render score date buckets; expanded dates show a tab-separated table
pub fn render_results(buckets: &[GroupView<'_, ScoreRecord>]) -> String {
    let mut output = String::new();

    if buckets.is_empty() {
        let _ = writeln!(output, "No scores submitted yet.");
        return output;
    }

    let columns = ScoreRecord::columns();
    for bucket in buckets {
        let _ = writeln!(
            output,
            "{} {} [{}]",
            marker(bucket.collapsed),
            bucket.key,
            bucket.count_label("record")
        );
        if bucket.collapsed {
            continue;
        }

        let header: Vec<String> = columns
            .iter()
            .map(|&column| match SortColumn::from_name(column) {
                Some(sortable) => {
                    let arrow = match bucket.sort {
                        Some(state) if state.column == sortable => state.direction.arrow(),
                        _ => "↕",
                    };
                    format!("{} {}", column, arrow)
                }
                None => column.to_string(),
            })
            .collect();
        let _ = writeln!(output, "    {}", header.join("\t"));

        for record in &bucket.records {
            let cells: Vec<String> = columns.iter().map(|c| record.field_text(c)).collect();
            let _ = writeln!(output, "    {}", cells.join("\t"));
        }
    }

    output
}
