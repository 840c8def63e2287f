use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoEnumIterator, IntoStaticStr};

/// Poster session day.
///
/// Variant order is the canonical display order, and only these days are
/// shown in session views.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    EnumString,
    EnumIter,
    IntoStaticStr,
    Display,
)]
pub enum Session {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
}

impl Session {
    /// Canonical sessions in display order
    pub fn canonical() -> impl Iterator<Item = Session> {
        Self::iter()
    }

    /// Parse a raw session name, `None` when it is outside the canonical set
    pub fn from_name(name: &str) -> Option<Self> {
        name.parse().ok()
    }

    pub fn as_str(&self) -> &'static str {
        self.into()
    }
}

/// Presenter role, carried on the wire as a short position code
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString)]
#[serde(from = "String", into = "String")]
pub enum Role {
    #[strum(serialize = "GS")]
    GraduateStudent,
    #[strum(serialize = "PD")]
    Postdoc,
    #[strum(serialize = "PI")]
    PrincipalInvestigator,
    #[strum(default)]
    Other(String),
}

impl Role {
    /// Wire code ("GS", "PD", "PI" or the raw value)
    pub fn code(&self) -> &str {
        match self {
            Self::GraduateStudent => "GS",
            Self::Postdoc => "PD",
            Self::PrincipalInvestigator => "PI",
            Self::Other(code) => code,
        }
    }

    /// Human readable label
    pub fn label(&self) -> &str {
        match self {
            Self::GraduateStudent => "Graduate Student",
            Self::Postdoc => "Postdoc",
            Self::PrincipalInvestigator => "Principal Investigator",
            Self::Other(code) => code,
        }
    }
}

impl Default for Role {
    fn default() -> Self {
        Self::Other(String::new())
    }
}

impl From<String> for Role {
    fn from(code: String) -> Self {
        code.parse().unwrap_or(Self::Other(code))
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        role.code().to_string()
    }
}
