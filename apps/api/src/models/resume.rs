use serde::{Deserialize, Serialize};

/// Placeholder for any field the heuristics could not determine.
pub const NOT_FOUND: &str = "Not Found";

/// Structured fields parsed out of a resume's text, before the raw text is attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeDetails {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub github: String,
    pub linkedin: String,
    pub skills: Vec<String>,
}

/// The response body of a successful upload. Built per request and discarded
/// once sent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeRecord {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub github: String,
    pub linkedin: String,
    pub skills: Vec<String>,
    pub extracted_text: String,
}

impl ResumeRecord {
    pub fn new(details: ResumeDetails, extracted_text: String) -> Self {
        ResumeRecord {
            name: details.name,
            email: details.email,
            phone: details.phone,
            github: details.github,
            linkedin: details.linkedin,
            skills: details.skills,
            extracted_text,
        }
    }
}

/// Unwraps a heuristic's result, substituting the sentinel for a miss.
pub fn or_not_found(value: Option<String>) -> String {
    value.unwrap_or_else(|| NOT_FOUND.to_string())
}
