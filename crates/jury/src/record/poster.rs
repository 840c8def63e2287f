use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use super::enums::{Role, Session};
use super::value::{FieldValue, Record};

/// A poster presented at the conference
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PosterRecord {
    #[serde(rename = "Poster_Id")]
    pub id: u32,
    #[serde(rename = "Poster_Title")]
    pub title: String,
    /// Raw session name; may fall outside the canonical days
    #[serde(rename = "Session")]
    pub session: String,
    #[serde(rename = "Date", default)]
    pub date: String,
    /// Presenter name
    #[serde(rename = "Name")]
    pub presenter: String,
    #[serde(rename = "Affiliation", default)]
    pub affiliation: String,
    #[serde(rename = "Position", default)]
    pub role: Role,
    #[serde(rename = "Board_Number", default)]
    pub board_number: Option<u32>,
}

impl PosterRecord {
    pub const ID: &'static str = "Poster_Id";
    pub const TITLE: &'static str = "Poster_Title";
    pub const SESSION: &'static str = "Session";
    pub const DATE: &'static str = "Date";
    pub const PRESENTER: &'static str = "Name";
    pub const AFFILIATION: &'static str = "Affiliation";
    pub const ROLE: &'static str = "Position";
    pub const BOARD_NUMBER: &'static str = "Board_Number";

    pub fn columns() -> Vec<&'static str> {
        vec![
            Self::ID,
            Self::TITLE,
            Self::SESSION,
            Self::DATE,
            Self::PRESENTER,
            Self::AFFILIATION,
            Self::ROLE,
            Self::BOARD_NUMBER,
        ]
    }

    /// Canonical session, `None` when the raw name is not a canonical day
    pub fn canonical_session(&self) -> Option<Session> {
        Session::from_name(&self.session)
    }

    /// Calendar date of the session. Accepts a bare date or an ISO date-time.
    pub fn session_date(&self) -> Option<NaiveDate> {
        let raw = self.date.trim();
        NaiveDate::parse_from_str(raw, "%Y-%m-%d")
            .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S").map(|dt| dt.date()))
            .or_else(|_| NaiveDate::parse_from_str(raw, "%m/%d/%y"))
            .ok()
    }

    /// Long form date for session headers, e.g. "Monday, May 6, 2024".
    /// Unparsable dates are returned verbatim.
    pub fn formatted_date(&self) -> String {
        match self.session_date() {
            Some(date) => date.format("%A, %B %-d, %Y").to_string(),
            None => self.date.clone(),
        }
    }
}

impl Record for PosterRecord {
    fn field_names(&self) -> Vec<String> {
        Self::columns().into_iter().map(String::from).collect()
    }

    fn field(&self, name: &str) -> Option<FieldValue> {
        let value = match name {
            Self::ID => FieldValue::from(self.id),
            Self::TITLE => FieldValue::from(self.title.as_str()),
            Self::SESSION => FieldValue::from(self.session.as_str()),
            Self::DATE => FieldValue::from(self.date.as_str()),
            Self::PRESENTER => FieldValue::from(self.presenter.as_str()),
            Self::AFFILIATION => FieldValue::from(self.affiliation.as_str()),
            Self::ROLE => FieldValue::from(self.role.code()),
            Self::BOARD_NUMBER => FieldValue::from(self.board_number),
            _ => return None,
        };
        Some(value)
    }
}
