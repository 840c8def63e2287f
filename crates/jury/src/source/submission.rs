use serde::Serialize;

use crate::error::{Error, Result};
use crate::record::{ANONYMOUS_JUDGE, Criterion, MAX_RATING, MIN_RATING};

/// Payload for `POST /api/scores`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreSubmission {
    #[serde(rename = "Judge")]
    pub judge: String,
    #[serde(rename = "Poster_Title")]
    pub poster_title: String,
    #[serde(rename = "Scientific_Clarity")]
    pub scientific_clarity: u8,
    #[serde(rename = "Data_Presentation")]
    pub data_presentation: u8,
    #[serde(rename = "Visual_Design")]
    pub visual_design: u8,
    #[serde(rename = "Impact")]
    pub impact: u8,
    #[serde(rename = "Tiebreaker")]
    pub tiebreaker: u8,
    #[serde(rename = "Comment")]
    pub comment: String,
}

impl ScoreSubmission {
    /// Anonymous submission for `poster_title` with every rating unset
    pub fn new(poster_title: impl Into<String>) -> Self {
        Self {
            judge: ANONYMOUS_JUDGE.to_string(),
            poster_title: poster_title.into(),
            scientific_clarity: 0,
            data_presentation: 0,
            visual_design: 0,
            impact: 0,
            tiebreaker: 0,
            comment: String::new(),
        }
    }

    pub fn with_judge(mut self, judge: impl Into<String>) -> Self {
        self.judge = judge.into();
        self
    }

    pub fn with_rating(mut self, criterion: Criterion, rating: u8) -> Self {
        *self.rating_mut(criterion) = rating;
        self
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    pub fn rating(&self, criterion: Criterion) -> u8 {
        match criterion {
            Criterion::ScientificClarity => self.scientific_clarity,
            Criterion::DataPresentation => self.data_presentation,
            Criterion::VisualDesign => self.visual_design,
            Criterion::Impact => self.impact,
            Criterion::Tiebreaker => self.tiebreaker,
        }
    }

    fn rating_mut(&mut self, criterion: Criterion) -> &mut u8 {
        match criterion {
            Criterion::ScientificClarity => &mut self.scientific_clarity,
            Criterion::DataPresentation => &mut self.data_presentation,
            Criterion::VisualDesign => &mut self.visual_design,
            Criterion::Impact => &mut self.impact,
            Criterion::Tiebreaker => &mut self.tiebreaker,
        }
    }

    /// Check required fields and rating ranges, reporting the first problem
    pub fn validate(&self) -> Result<()> {
        if self.judge.trim().is_empty() {
            return Err(Error::InvalidSubmission("Please select a judge".to_string()));
        }
        if self.poster_title.trim().is_empty() {
            return Err(Error::InvalidSubmission(
                "Please select a poster".to_string(),
            ));
        }
        for criterion in Criterion::all() {
            let rating = self.rating(criterion);
            if !(MIN_RATING..=MAX_RATING).contains(&rating) {
                return Err(Error::InvalidSubmission(format!(
                    "Please select a rating for {} ({}-{}, got {})",
                    criterion.label(),
                    MIN_RATING,
                    MAX_RATING,
                    rating
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn complete() -> ScoreSubmission {
        Criterion::all().fold(ScoreSubmission::new("Protein Folding"), |s, c| {
            s.with_rating(c, 3)
        })
    }

    #[test]
    fn test_defaults_to_anonymous() {
        let submission = ScoreSubmission::new("Protein Folding");
        assert_eq!(submission.judge, "Anonymous");
        assert!(submission.validate().is_err());
    }

    #[test]
    fn test_complete_submission_validates() {
        assert!(complete().validate().is_ok());
    }

    #[test]
    fn test_out_of_range_rating_rejected() {
        let submission = complete().with_rating(Criterion::VisualDesign, 6);
        let err = submission.validate().unwrap_err().to_string();
        assert!(err.contains("Visual Design and Organization"));
    }

    #[test]
    fn test_blank_judge_or_poster_rejected() {
        assert!(complete().with_judge("  ").validate().is_err());

        let mut no_title = complete();
        no_title.poster_title = String::new();
        let err = no_title.validate().unwrap_err().to_string();
        assert!(err.contains("poster"));
    }

    #[test]
    fn test_wire_payload_shape() {
        let submission = complete()
            .with_judge("Dr. Smith")
            .with_rating(Criterion::Tiebreaker, 5)
            .with_comment("Great");
        let value = serde_json::to_value(&submission).unwrap();

        assert_eq!(value["Judge"], "Dr. Smith");
        assert_eq!(value["Poster_Title"], "Protein Folding");
        assert_eq!(value["Scientific_Clarity"], 3);
        assert_eq!(value["Tiebreaker"], 5);
        assert_eq!(value["Comment"], "Great");
        assert_eq!(value.as_object().unwrap().len(), 8);
    }
}
