use tracing::{debug, info, warn};

use super::GroupView;
use crate::display::{KeyValueStore, PersistentDisplayState};
use crate::error::Result;
use crate::group::group_by_session;
use crate::record::PosterRecord;
use crate::search::filter_posters;
use crate::sort::{SortState, apply_sort};
use crate::source::DataSource;

/// Posters grouped by canonical session, filtered by a search term.
///
/// Session collapse flags are persisted through the store and survive
/// restarts.
pub struct SessionsView<S: KeyValueStore> {
    posters: Vec<PosterRecord>,
    search: String,
    display: PersistentDisplayState<S>,
}

impl<S: KeyValueStore> SessionsView<S> {
    pub fn new(store: S) -> Self {
        Self {
            posters: Vec::new(),
            search: String::new(),
            display: PersistentDisplayState::load(store),
        }
    }

    /// Fetch posters. On failure the current snapshot is kept.
    pub fn refresh(&mut self, source: &dyn DataSource) -> Result<usize> {
        match source.fetch_posters() {
            Ok(posters) => {
                self.set_posters(posters);
                Ok(self.posters.len())
            }
            Err(e) => {
                warn!("Keeping previous posters: {}", e);
                Err(e)
            }
        }
    }

    pub fn set_posters(&mut self, posters: Vec<PosterRecord>) {
        let off_schedule = posters
            .iter()
            .filter(|p| p.canonical_session().is_none())
            .count();
        if off_schedule > 0 {
            debug!("{} poster(s) outside the session schedule", off_schedule);
        }
        info!("Loaded {} poster(s)", posters.len());
        self.posters = posters;
    }

    pub fn posters(&self) -> &[PosterRecord] {
        &self.posters
    }

    pub fn set_search(&mut self, term: impl Into<String>) {
        self.search = term.into();
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn is_collapsed(&self, session: &str) -> bool {
        self.display.is_collapsed(session)
    }

    /// Flip and persist one session's collapse flag
    pub fn toggle(&mut self, session: &str) -> Result<bool> {
        self.display.toggle(session)
    }

    pub fn set_sort(&mut self, session: &str, column: &str) -> Option<SortState> {
        self.display.set_sort(session, column)
    }

    /// Session buckets for the current search term, in canonical order
    pub fn buckets(&self) -> Vec<GroupView<'_, PosterRecord>> {
        let matching = filter_posters(&self.posters, &self.search);
        group_by_session(matching)
            .into_iter()
            .map(|bucket| {
                let sort = self.display.sort(&bucket.key);
                let records = apply_sort(&bucket.records, sort);
                let collapsed = self.display.is_collapsed(&bucket.key);
                GroupView::new(bucket, records, collapsed, sort)
            })
            .collect()
    }

    pub fn into_store(self) -> S {
        self.display.into_store()
    }
}
