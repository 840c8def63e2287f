use std::collections::HashMap;

use chrono::NaiveDate;

use crate::record::parse_date;
use crate::sort::{SortColumn, SortState};

/// Per-bucket collapse flags and active sorts.
///
/// A bucket that has never been touched is collapsed and unsorted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DisplayState {
    collapsed: HashMap<String, bool>,
    sorts: HashMap<String, SortState>,
}

impl DisplayState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_collapsed(collapsed: HashMap<String, bool>) -> Self {
        Self {
            collapsed,
            sorts: HashMap::new(),
        }
    }

    /// Fresh state for a batch of date buckets: the bucket for `today` is
    /// expanded, every other bucket is collapsed, no sorts are active.
    ///
    /// `today` is whatever calendar day the caller considers current. The
    /// `jury` CLI passes the local date, so near midnight it can differ from
    /// the UTC date the submission timestamps were written in.
    pub fn for_dates<'a>(keys: impl IntoIterator<Item = &'a str>, today: NaiveDate) -> Self {
        let collapsed = keys
            .into_iter()
            .map(|key| (key.to_string(), parse_date(key) != Some(today)))
            .collect();
        Self::from_collapsed(collapsed)
    }

    pub fn is_collapsed(&self, key: &str) -> bool {
        self.collapsed.get(key).copied().unwrap_or(true)
    }

    /// Flip the collapse flag of a bucket and return the new value
    pub fn toggle(&mut self, key: &str) -> bool {
        let collapsed = !self.is_collapsed(key);
        self.collapsed.insert(key.to_string(), collapsed);
        collapsed
    }

    pub fn set_collapsed(&mut self, key: &str, collapsed: bool) {
        self.collapsed.insert(key.to_string(), collapsed);
    }

    pub fn sort(&self, key: &str) -> Option<SortState> {
        self.sorts.get(key).copied()
    }

    /// Apply the sort toggle rule for `column` on a bucket.
    ///
    /// Returns the bucket's new sort, or `None` without changing anything
    /// when the column is not sortable.
    pub fn set_sort(&mut self, key: &str, column: &str) -> Option<SortState> {
        let column = SortColumn::from_name(column)?;
        let next = SortState::toggle(self.sort(key), column);
        self.sorts.insert(key.to_string(), next);
        Some(next)
    }

    pub fn collapsed(&self) -> &HashMap<String, bool> {
        &self.collapsed
    }
}
