use chrono::NaiveDate;
use tracing::{info, warn};

use super::GroupView;
use crate::display::DisplayState;
use crate::error::Result;
use crate::export::encode_csv;
use crate::group::group_by_date;
use crate::record::ScoreRecord;
use crate::sort::{SortState, apply_sort};
use crate::source::DataSource;

/// Score results grouped by submission date.
///
/// Display state is scoped to the loaded batch: every successful load
/// starts over with only today's bucket expanded and no sorts.
#[derive(Debug, Clone, Default)]
pub struct ResultsView {
    scores: Vec<ScoreRecord>,
    display: DisplayState,
}

impl ResultsView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fetch scores and load them. On failure the current snapshot and
    /// display state are kept and the error is returned once.
    pub fn refresh(&mut self, source: &dyn DataSource, today: NaiveDate) -> Result<usize> {
        match source.fetch_scores() {
            Ok(scores) => {
                self.load(scores, today);
                Ok(self.scores.len())
            }
            Err(e) => {
                warn!("Keeping previous results: {}", e);
                Err(e)
            }
        }
    }

    /// Replace the snapshot and reset display state for it
    pub fn load(&mut self, scores: Vec<ScoreRecord>, today: NaiveDate) {
        let skipped = scores.iter().filter(|s| s.date_key().is_none()).count();
        if skipped > 0 {
            warn!("{} score(s) without a timestamp are not shown by date", skipped);
        }

        self.scores = scores;
        let display = {
            let keys = self.scores.iter().filter_map(|s| s.date_key());
            DisplayState::for_dates(keys, today)
        };
        self.display = display;
        info!(
            "Loaded {} score(s) across {} date(s)",
            self.scores.len(),
            self.display.collapsed().len()
        );
    }

    pub fn scores(&self) -> &[ScoreRecord] {
        &self.scores
    }

    pub fn display(&self) -> &DisplayState {
        &self.display
    }

    pub fn toggle(&mut self, date: &str) -> bool {
        self.display.toggle(date)
    }

    /// Apply the sort toggle rule on one date bucket
    pub fn set_sort(&mut self, date: &str, column: &str) -> Option<SortState> {
        self.display.set_sort(date, column)
    }

    /// Date buckets, most recent first, each in its active sort order
    pub fn buckets(&self) -> Vec<GroupView<'_, ScoreRecord>> {
        group_by_date(&self.scores)
            .into_iter()
            .map(|bucket| {
                let sort = self.display.sort(&bucket.key);
                let records = apply_sort(&bucket.records, sort);
                let collapsed = self.display.is_collapsed(&bucket.key);
                GroupView::new(bucket, records, collapsed, sort)
            })
            .collect()
    }

    /// CSV of the whole snapshot, bypassing grouping and sorting
    pub fn export_csv(&self) -> Result<String> {
        encode_csv(&self.scores)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::record::PosterRecord;
    use crate::source::{RawScore, ScoreSubmission};
    use crate::sort::{SortColumn, SortDirection};

    struct StubSource {
        scores: Option<Vec<ScoreRecord>>,
    }

    impl DataSource for StubSource {
        fn fetch_posters(&self) -> Result<Vec<PosterRecord>> {
            Ok(Vec::new())
        }

        fn fetch_scores(&self) -> Result<Vec<ScoreRecord>> {
            self.scores
                .clone()
                .ok_or_else(|| Error::SourceUnavailable("offline".to_string()))
        }

        fn fetch_raw_scores(&self) -> Result<Vec<RawScore>> {
            Ok(Vec::new())
        }

        fn fetch_judges(&self) -> Result<Vec<String>> {
            Ok(Vec::new())
        }

        fn submit_score(&self, _submission: &ScoreSubmission) -> Result<()> {
            Ok(())
        }
    }

    fn score(timestamp: &str, judge: &str, title: &str) -> ScoreRecord {
        ScoreRecord {
            timestamp: timestamp.to_string(),
            judge: judge.to_string(),
            poster_title: title.to_string(),
            scientific_clarity: 3,
            data_presentation: 3,
            visual_design: 3,
            impact: 3,
            tiebreaker: 3,
            total: None,
            comment: None,
        }
    }

    fn sample() -> Vec<ScoreRecord> {
        vec![
            score("2024-05-01 09:00:00", "Lee", "Protein Folding"),
            score("2024-05-02 10:00:00", "Adams", "Lipid Transport"),
            score("2024-05-02 11:00:00", "Baker", "Cell Imaging"),
        ]
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    #[test]
    fn test_today_bucket_expanded_on_load() {
        let mut view = ResultsView::new();
        view.load(sample(), day(2));

        let buckets = view.buckets();
        assert_eq!(buckets.len(), 2);
        assert_eq!(buckets[0].key, "2024-05-02");
        assert!(!buckets[0].collapsed);
        assert_eq!(buckets[0].count_label("record"), "2 records");
        assert_eq!(buckets[1].key, "2024-05-01");
        assert!(buckets[1].collapsed);
    }

    #[test]
    fn test_reload_resets_toggles_and_sorts() {
        let mut view = ResultsView::new();
        view.load(sample(), day(2));
        view.toggle("2024-05-01");
        view.set_sort("2024-05-02", "Judge");

        view.load(sample(), day(2));
        assert!(view.display().is_collapsed("2024-05-01"));
        assert_eq!(view.display().sort("2024-05-02"), None);
    }

    #[test]
    fn test_bucket_sort_applied_and_flipped() {
        let mut view = ResultsView::new();
        view.load(sample(), day(2));

        view.set_sort("2024-05-02", "Poster_Title");
        let titles: Vec<&str> = view.buckets()[0]
            .records
            .iter()
            .map(|r| r.poster_title.as_str())
            .collect();
        assert_eq!(titles, vec!["Cell Imaging", "Lipid Transport"]);

        let state = view.set_sort("2024-05-02", "Poster_Title").unwrap();
        assert_eq!(state.direction, SortDirection::Desc);
        let titles: Vec<&str> = view.buckets()[0]
            .records
            .iter()
            .map(|r| r.poster_title.as_str())
            .collect();
        assert_eq!(titles, vec!["Lipid Transport", "Cell Imaging"]);

        // unsortable column leaves everything as it was
        assert_eq!(view.set_sort("2024-05-02", "Impact"), None);
        assert_eq!(
            view.display().sort("2024-05-02").map(|s| s.column),
            Some(SortColumn::PosterTitle)
        );
    }

    #[test]
    fn test_failed_refresh_keeps_previous_state() {
        let mut view = ResultsView::new();
        let online = StubSource {
            scores: Some(sample()),
        };
        assert_eq!(view.refresh(&online, day(2)).unwrap(), 3);
        view.toggle("2024-05-01");

        let offline = StubSource { scores: None };
        let err = view.refresh(&offline, day(2)).unwrap_err();
        assert!(err.is_source_error());
        assert_eq!(view.scores().len(), 3);
        assert!(!view.display().is_collapsed("2024-05-01"));
    }

    #[test]
    fn test_export_bypasses_grouping() {
        let mut view = ResultsView::new();
        view.load(sample(), day(2));
        view.set_sort("2024-05-02", "Judge");

        let csv = view.export_csv().unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[1].contains("Protein Folding"));
        assert!(lines[2].contains("Lipid Transport"));
    }

    #[test]
    fn test_export_empty_snapshot_fails() {
        let view = ResultsView::new();
        assert!(matches!(view.export_csv(), Err(Error::EmptyExport)));
    }
}
