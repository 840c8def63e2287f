//! Submit command for sending one judge's score.

use anyhow::Result;
use jury::{ApiClient, Criterion, DataSource, JuryConfig, ScoreSubmission, rating_label};

/// Ratings in criterion order
pub struct Ratings {
    pub clarity: u8,
    pub presentation: u8,
    pub design: u8,
    pub impact: u8,
    pub tiebreaker: u8,
}

pub fn build_submission(
    poster: &str,
    judge: &str,
    ratings: &Ratings,
    comment: &str,
) -> ScoreSubmission {
    ScoreSubmission::new(poster)
        .with_judge(judge)
        .with_rating(Criterion::ScientificClarity, ratings.clarity)
        .with_rating(Criterion::DataPresentation, ratings.presentation)
        .with_rating(Criterion::VisualDesign, ratings.design)
        .with_rating(Criterion::Impact, ratings.impact)
        .with_rating(Criterion::Tiebreaker, ratings.tiebreaker)
        .with_comment(comment)
}

pub fn run(
    config: &JuryConfig,
    poster: &str,
    judge: &str,
    ratings: &Ratings,
    comment: &str,
) -> Result<()> {
    let submission = build_submission(poster, judge, ratings, comment);
    submission.validate()?;

    for criterion in Criterion::all() {
        let rating = submission.rating(criterion);
        println!(
            "  {}: {} - {}",
            criterion.label(),
            rating,
            rating_label(rating).unwrap_or("")
        );
    }

    let client = ApiClient::from_config(config);
    client.submit_score(&submission)?;
    println!("Score submitted successfully!");
    Ok(())
}
