//! Poster search filter.

use crate::record::PosterRecord;

/// Case-insensitive substring match against title, presenter and affiliation
pub fn matches(poster: &PosterRecord, term: &str) -> bool {
    let term = term.to_lowercase();
    matches_lowercase(poster, &term)
}

fn matches_lowercase(poster: &PosterRecord, term: &str) -> bool {
    [&poster.title, &poster.presenter, &poster.affiliation]
        .iter()
        .any(|field| field.to_lowercase().contains(term))
}

/// Posters matching `term`, in their original order.
///
/// An empty term matches every poster.
pub fn filter_posters<'a>(posters: &'a [PosterRecord], term: &str) -> Vec<&'a PosterRecord> {
    if term.is_empty() {
        return posters.iter().collect();
    }

    let term = term.to_lowercase();
    posters
        .iter()
        .filter(|p| matches_lowercase(p, &term))
        .collect()
}
