//! Views over a single fetched snapshot.
//!
//! A view owns the records of the latest successful fetch together with its
//! display state, and derives grouped, sorted output on demand. A failed
//! fetch leaves both untouched.

mod results;
mod sessions;

pub use results::ResultsView;
pub use sessions::SessionsView;

use crate::group::Bucket;
use crate::sort::SortState;

/// A bucket as presented: records in display order plus its display state
#[derive(Debug, Clone, PartialEq)]
pub struct GroupView<'a, R> {
    pub key: String,
    pub records: Vec<&'a R>,
    pub collapsed: bool,
    pub sort: Option<SortState>,
}

impl<'a, R> GroupView<'a, R> {
    pub(crate) fn new(
        bucket: Bucket<'a, R>,
        records: Vec<&'a R>,
        collapsed: bool,
        sort: Option<SortState>,
    ) -> Self {
        Self {
            key: bucket.key,
            records,
            collapsed,
            sort,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Record count for headers, e.g. "1 poster" or "3 posters"
    pub fn count_label(&self, noun: &str) -> String {
        let n = self.records.len();
        if n == 1 {
            format!("{} {}", n, noun)
        } else {
            format!("{} {}s", n, noun)
        }
    }
}
