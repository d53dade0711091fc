//! Compiled regex patterns shared by the field heuristics.

use once_cell::sync::Lazy;
use regex::Regex;

pub static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}").unwrap());

// Deliberately loose: any digit groups shaped like a number are accepted.
pub static PHONE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\+?\d{1,3}[-.\s]?\(?\d{2,4}\)?[-.\s]?\d{3}[-.\s]?\d{3,4}").unwrap()
});

pub static GITHUB: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"github\.com/([a-zA-Z0-9-]+)").unwrap());

pub static LINKEDIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"linkedin\.com/in/([a-zA-Z0-9-]+)").unwrap());

/// "Name: Jane Doe" style label. Case-insensitive throughout, so "NAME: JANE DOE"
/// and "name: jane doe" both match.
pub static NAME_LABEL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)\bname[:\s]*([A-Z][a-z]+(?:[ \t][A-Z][a-z]+)*)").unwrap()
});

pub static HONORIFIC_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\b(?:Mr|Mrs|Ms|Miss|Dr|Prof)\.?[ \t]+([A-Z][a-z]+(?:[ \t]+[A-Z][a-z]+)*)").unwrap()
});
