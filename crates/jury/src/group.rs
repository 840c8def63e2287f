//! Grouping engine.
//!
//! Buckets are derived data: they borrow from the record snapshot and are
//! rebuilt from scratch whenever the snapshot or the search term changes.
//! Within a bucket records keep their original relative order.

use std::cmp::Ordering;
use std::collections::HashMap;

use tracing::debug;

use crate::record::{PosterRecord, ScoreRecord, Session, parse_date};

/// A named group of records sharing a derived key
#[derive(Debug, Clone, PartialEq)]
pub struct Bucket<'a, R> {
    pub key: String,
    pub records: Vec<&'a R>,
}

impl<'a, R> Bucket<'a, R> {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Always false for buckets produced by the grouping functions
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Stable partition of `records` by `key_of`.
///
/// Buckets are returned in order of first appearance. Records whose key is
/// `None` are not placed in any bucket.
pub fn group_by<'a, R, F>(records: impl IntoIterator<Item = &'a R>, key_of: F) -> Vec<Bucket<'a, R>>
where
    R: 'a,
    F: Fn(&R) -> Option<String>,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut buckets: Vec<Bucket<'a, R>> = Vec::new();

    for record in records {
        let Some(key) = key_of(record) else {
            continue;
        };
        match index.get(&key) {
            Some(&i) => buckets[i].records.push(record),
            None => {
                index.insert(key.clone(), buckets.len());
                buckets.push(Bucket {
                    key,
                    records: vec![record],
                });
            }
        }
    }

    buckets
}

/// Group posters by session, in canonical session order.
///
/// Posters whose session is not one of the canonical days are dropped.
pub fn group_by_session<'a>(
    posters: impl IntoIterator<Item = &'a PosterRecord>,
) -> Vec<Bucket<'a, PosterRecord>> {
    let mut buckets = group_by(posters, |p| Some(p.session.clone()));

    let before = buckets.len();
    buckets.retain(|b| Session::from_name(&b.key).is_some());
    if buckets.len() != before {
        debug!(
            "Dropped {} non-canonical session bucket(s)",
            before - buckets.len()
        );
    }

    buckets.sort_by_key(|b| Session::from_name(&b.key));
    buckets
}

/// Group scores by the date portion of their timestamp, most recent first.
///
/// Records with a blank timestamp are skipped. Keys that do not parse as a
/// calendar date sort after every dated bucket.
pub fn group_by_date<'a>(
    scores: impl IntoIterator<Item = &'a ScoreRecord>,
) -> Vec<Bucket<'a, ScoreRecord>> {
    let mut buckets = group_by(scores, |s| s.date_key().map(str::to_string));
    buckets.sort_by(|a, b| compare_date_keys_desc(&a.key, &b.key));
    buckets
}

/// Descending calendar order over date keys
pub fn compare_date_keys_desc(a: &str, b: &str) -> Ordering {
    match (parse_date(a), parse_date(b)) {
        (Some(da), Some(db)) => db.cmp(&da),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => b.cmp(a),
    }
}
