//! Sort engine for records inside a bucket.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString, IntoStaticStr};
use unicode_normalization::UnicodeNormalization;
use unicode_normalization::char::is_combining_mark;

use crate::record::Record;

/// Columns that may be sorted on. Any other column is a no-op.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, IntoStaticStr, Display,
)]
pub enum SortColumn {
    #[strum(serialize = "Poster_Title")]
    PosterTitle,
    Judge,
}

impl SortColumn {
    /// Parse a column name, `None` when it is not sortable
    pub fn from_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }

    pub fn field_name(&self) -> &'static str {
        self.into()
    }
}

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Default,
    Serialize,
    Deserialize,
    EnumString,
    IntoStaticStr,
    Display,
)]
#[strum(serialize_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn flipped(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }

    /// Header indicator
    pub fn arrow(&self) -> &'static str {
        match self {
            Self::Asc => "↑",
            Self::Desc => "↓",
        }
    }
}

/// Active sort of one bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SortState {
    pub column: SortColumn,
    pub direction: SortDirection,
}

impl SortState {
    pub fn ascending(column: SortColumn) -> Self {
        Self {
            column,
            direction: SortDirection::Asc,
        }
    }

    /// Next sort after the user picks `column`.
    ///
    /// The same column as the current sort flips its direction, a different
    /// column (or no current sort) starts ascending.
    pub fn toggle(current: Option<SortState>, column: SortColumn) -> Self {
        match current {
            Some(state) if state.column == column => Self {
                column,
                direction: state.direction.flipped(),
            },
            _ => Self::ascending(column),
        }
    }
}

/// Locale-style string comparison.
///
/// Letters compare by base form first, ignoring case and accents, so
/// "Émile" sorts between "Ana" and "Zed". Ties fall back to accents
/// (unaccented first), then case (lowercase first).
pub fn locale_compare(a: &str, b: &str) -> Ordering {
    base_letters(a)
        .cmp(base_letters(b))
        .then_with(|| folded(a).cmp(folded(b)))
        .then_with(|| b.cmp(a))
}

fn base_letters(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
}

fn folded(s: &str) -> impl Iterator<Item = char> + '_ {
    s.nfd().flat_map(char::to_lowercase)
}

/// Sort records by a named column.
///
/// Returns a new ordering and never touches the input. Equal keys keep their
/// relative order, missing fields compare as empty strings. A column outside
/// the sortable set returns the input order unchanged.
pub fn sort_records<'a, R: Record>(
    records: &[&'a R],
    column: &str,
    direction: SortDirection,
) -> Vec<&'a R> {
    let mut sorted = records.to_vec();
    let Some(column) = SortColumn::from_name(column) else {
        return sorted;
    };

    let field = column.field_name();
    let mut keyed: Vec<(String, &'a R)> = sorted
        .drain(..)
        .map(|r| (r.field_text(field), r))
        .collect();
    keyed.sort_by(|(a, _), (b, _)| {
        let ordering = locale_compare(a, b);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });

    keyed.into_iter().map(|(_, r)| r).collect()
}

/// Apply an optional sort state to a bucket's records
pub fn apply_sort<'a, R: Record>(records: &[&'a R], state: Option<SortState>) -> Vec<&'a R> {
    match state {
        Some(state) => sort_records(records, state.column.field_name(), state.direction),
        None => records.to_vec(),
    }
}
