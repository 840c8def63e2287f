use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strum::{EnumIter, IntoEnumIterator, IntoStaticStr};

use super::value::{FieldValue, Record};

/// Sentinel judge name used when a judge does not identify themselves
pub const ANONYMOUS_JUDGE: &str = "Anonymous";

/// Lowest and highest rating a criterion accepts
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

/// Judged dimension of a poster
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr)]
pub enum Criterion {
    #[strum(serialize = "Scientific_Clarity")]
    ScientificClarity,
    #[strum(serialize = "Data_Presentation")]
    DataPresentation,
    #[strum(serialize = "Visual_Design")]
    VisualDesign,
    Impact,
    Tiebreaker,
}

impl Criterion {
    pub fn all() -> impl Iterator<Item = Criterion> {
        Self::iter()
    }

    /// Wire field name
    pub fn field_name(&self) -> &'static str {
        self.into()
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::ScientificClarity => "Scientific Clarity and Rigor",
            Self::DataPresentation => "Data Presentation and Interpretation",
            Self::VisualDesign => "Visual Design and Organization",
            Self::Impact => "Impact and Innovation",
            Self::Tiebreaker => "Tiebreaker",
        }
    }
}

/// Descriptive label for a rating value
pub fn rating_label(rating: u8) -> Option<&'static str> {
    match rating {
        1 => Some("Beginner's Glimpse"),
        2 => Some("Developing Understanding"),
        3 => Some("Solid Foundation"),
        4 => Some("Advanced Execution"),
        5 => Some("Trailblazer"),
        _ => None,
    }
}

/// A judge's submitted score for one poster, as returned by the data source
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreRecord {
    /// "YYYY-MM-DD HH:MM:SS", possibly with fractional seconds
    #[serde(rename = "Timestamp", default)]
    pub timestamp: String,
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
    /// Sum of the criteria as computed by the server
    #[serde(rename = "Total", default)]
    pub total: Option<u32>,
    #[serde(rename = "Comment", default)]
    pub comment: Option<String>,
}

impl ScoreRecord {
    pub const TIMESTAMP: &'static str = "Timestamp";
    pub const JUDGE: &'static str = "Judge";
    pub const POSTER_TITLE: &'static str = "Poster_Title";
    pub const TOTAL: &'static str = "Total";
    pub const COMMENT: &'static str = "Comment";

    /// Declared column order, matching the data source
    pub fn columns() -> Vec<&'static str> {
        let mut columns = vec![Self::TIMESTAMP, Self::JUDGE, Self::POSTER_TITLE];
        columns.extend(Criterion::all().map(|c| c.field_name()));
        columns.push(Self::TOTAL);
        columns.push(Self::COMMENT);
        columns
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

    /// Server total when present, otherwise the local sum of all criteria
    pub fn total(&self) -> u32 {
        self.total
            .unwrap_or_else(|| Criterion::all().map(|c| self.rating(c) as u32).sum())
    }

    /// Date portion of the timestamp, `None` when the timestamp is blank
    pub fn date_key(&self) -> Option<&str> {
        date_portion(&self.timestamp)
    }

    /// Calendar date of the submission
    pub fn date(&self) -> Option<NaiveDate> {
        self.date_key().and_then(parse_date)
    }
}

/// Date portion of a "date time" timestamp string
pub fn date_portion(timestamp: &str) -> Option<&str> {
    let trimmed = timestamp.trim();
    let date = trimmed.split([' ', 'T']).next().unwrap_or_default();
    if date.is_empty() { None } else { Some(date) }
}

/// Parse a "YYYY-MM-DD" date; single digit month and day are accepted
pub fn parse_date(date: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

impl Record for ScoreRecord {
    fn field_names(&self) -> Vec<String> {
        Self::columns().into_iter().map(String::from).collect()
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        let value = match name {
            Self::TIMESTAMP => FieldValue::from(self.timestamp.as_str()),
            Self::JUDGE => FieldValue::from(self.judge.as_str()),
            Self::POSTER_TITLE => FieldValue::from(self.poster_title.as_str()),
            Self::TOTAL => FieldValue::from(self.total()),
            Self::COMMENT => FieldValue::from(self.comment.clone()),
            other => {
                let criterion = Criterion::all().find(|c| c.field_name() == other)?;
                FieldValue::from(self.rating(criterion))
            }
        };
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ScoreRecord {
        ScoreRecord {
            timestamp: "2024-05-01 09:00:00".to_string(),
            judge: "Dr. Smith".to_string(),
            poster_title: "Protein Folding".to_string(),
            scientific_clarity: 4,
            data_presentation: 3,
            visual_design: 5,
            impact: 4,
            tiebreaker: 2,
            total: None,
            comment: Some("Nice".to_string()),
        }
    }

    #[test]
    fn test_deserialize_wire_record() {
        let json = r#"{
            "Timestamp": "2024-05-02 10:00:00.123456",
            "Judge": "Anonymous",
            "Poster_Title": "Lipid Transport",
            "Scientific_Clarity": 5,
            "Data_Presentation": 4,
            "Visual_Design": 3,
            "Impact": 2,
            "Tiebreaker": 1,
            "Total": 15,
            "Comment": null
        }"#;
        let record: ScoreRecord = serde_json::from_str(json).unwrap();

        assert_eq!(record.judge, ANONYMOUS_JUDGE);
        assert_eq!(record.total(), 15);
        assert_eq!(record.comment, None);
        assert_eq!(record.date_key(), Some("2024-05-02"));
    }

    #[test]
    fn test_total_falls_back_to_sum() {
        assert_eq!(sample().total(), 18);
    }

    #[test]
    fn test_columns_order() {
        assert_eq!(
            ScoreRecord::columns(),
            vec![
                "Timestamp",
                "Judge",
                "Poster_Title",
                "Scientific_Clarity",
                "Data_Presentation",
                "Visual_Design",
                "Impact",
                "Tiebreaker",
                "Total",
                "Comment",
            ]
        );
    }

    #[test]
    fn test_record_field_access() {
        let record = sample();
        assert_eq!(record.field("Judge"), Some(FieldValue::from("Dr. Smith")));
        assert_eq!(record.field("Visual_Design"), Some(FieldValue::Integer(5)));
        assert_eq!(record.field("Total"), Some(FieldValue::Integer(18)));
        assert_eq!(record.field("Unknown"), None);

        let mut no_comment = sample();
        no_comment.comment = None;
        assert_eq!(no_comment.field("Comment"), Some(FieldValue::Null));
    }

    #[test]
    fn test_date_parsing() {
        let record = sample();
        assert_eq!(record.date(), NaiveDate::from_ymd_opt(2024, 5, 1));

        assert_eq!(parse_date("2024-5-1"), NaiveDate::from_ymd_opt(2024, 5, 1));
        assert_eq!(parse_date("not a date"), None);
        assert_eq!(date_portion("   "), None);
        assert_eq!(date_portion("2024-05-01T09:00:00"), Some("2024-05-01"));
    }

    #[test]
    fn test_rating_labels() {
        assert_eq!(rating_label(1), Some("Beginner's Glimpse"));
        assert_eq!(rating_label(5), Some("Trailblazer"));
        assert_eq!(rating_label(0), None);
        assert_eq!(rating_label(6), None);
    }
}
