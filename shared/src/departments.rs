use serde::Deserialize;
use crate::models::DepartmentsPayload;

pub const STORAGE_KEY: &str = "departments";
pub const ACCEPTED_EXTENSIONS: &str = ".txt,.json";

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum IngestError {
    #[error("The file contains no departments")]
    Empty,
    #[error("Invalid JSON: {0}")]
    Json(String),
    #[error("Expected {{\"departments\": [...]}} or a list of department names")]
    UnsupportedShape,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum DepartmentFile {
    Wrapped(DepartmentsPayload),
    Bare(Vec<String>),
}

/// Reads an uploaded department file. `.json` files hold either a
/// `{"departments": [...]}` object or a bare array; anything else is taken
/// as one department per line.
pub fn parse_department_file(file_name: &str, content: &str) -> Result<Vec<String>, IngestError> {
    let departments = if file_name.to_lowercase().ends_with(".json") {
        parse_json(content)?
    } else {
        parse_lines(content)
    };

    if departments.is_empty() {
        return Err(IngestError::Empty);
    }
    Ok(departments)
}

fn parse_json(content: &str) -> Result<Vec<String>, IngestError> {
    let value: serde_json::Value = serde_json::from_str(content)
        .map_err(|e| IngestError::Json(e.to_string()))?;

    match serde_json::from_value::<DepartmentFile>(value) {
        Ok(DepartmentFile::Wrapped(payload)) => Ok(payload.departments),
        Ok(DepartmentFile::Bare(list)) => Ok(list),
        Err(_) => Err(IngestError::UnsupportedShape),
    }
}

pub fn parse_lines(content: &str) -> Vec<String> {
    content.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Decodes the cached list from local storage. A corrupt or empty entry is
/// treated as absent.
pub fn decode_stored(raw: &str) -> Option<Vec<String>> {
    serde_json::from_str::<Vec<String>>(raw)
        .ok()
        .filter(|list| !list.is_empty())
}

pub fn encode_stored(departments: &[String]) -> String {
    serde_json::to_string(departments).unwrap_or_else(|_| "[]".into())
}
