use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use time::{format_description::well_known::Rfc3339, Date, OffsetDateTime};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum VoteChoice {
    Like,
    Dislike,
}

impl VoteChoice {
    pub const fn label(self) -> &'static str {
        match self {
            VoteChoice::Like => "Like",
            VoteChoice::Dislike => "Dislike",
        }
    }
}

impl fmt::Display for VoteChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A single like/dislike submission. Records carry no identity; two equal
/// records are two votes. The timestamp is kept as the server sent it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VoteRecord {
    pub department: String,
    pub vote: VoteChoice,
    pub timestamp: String,
}

impl VoteRecord {
    pub fn new(department: impl Into<String>, vote: VoteChoice) -> Self {
        Self::at(department, vote, OffsetDateTime::now_utc())
    }

    pub fn at(department: impl Into<String>, vote: VoteChoice, timestamp: OffsetDateTime) -> Self {
        Self {
            department: department.into(),
            vote,
            timestamp: timestamp.format(&Rfc3339).unwrap_or_default(),
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct VotesResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub votes: Vec<VoteRecord>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DepartmentsPayload {
    pub departments: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UploadResponse {
    #[serde(default)]
    pub message: Option<String>,
}

pub const DEFAULT_DEPARTMENTS: [&str; 9] = [
    "MT100", "MT200", "MT300", "MT400",
    "MT600", "MT700", "MT800", "MT900", "SGA",
];

pub fn default_departments() -> Vec<String> {
    DEFAULT_DEPARTMENTS.iter().map(|d| d.to_string()).collect()
}

pub const TEMPLATE_FILE_NAME: &str = "departments.json";

/// Body of the downloadable department template.
pub fn department_template() -> String {
    let template = DepartmentsPayload { departments: default_departments() };
    serde_json::to_string_pretty(&template).unwrap_or_default()
}

pub fn export_file_name(date: Date) -> String {
    format!("department_votes_{}.csv", date)
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
