//! Contact heuristics: email, phone and profile links. Each returns the first
//! match in the text, or `None`.

use crate::parsing::patterns::{EMAIL, GITHUB, LINKEDIN, PHONE};

pub fn extract_email(text: &str) -> Option<String> {
    EMAIL.find(text).map(|m| m.as_str().to_string())
}

pub fn extract_phone(text: &str) -> Option<String> {
    PHONE.find(text).map(|m| m.as_str().to_string())
}

/// Canonical `github.com/<handle>`, whatever scheme or prefix surrounded it.
pub fn extract_github(text: &str) -> Option<String> {
    GITHUB
        .captures(text)
        .and_then(|cap| cap.get(1))
        .map(|handle| format!("github.com/{}", handle.as_str()))
}

/// Canonical `linkedin.com/in/<handle>`.
pub fn extract_linkedin(text: &str) -> Option<String> {
    LINKEDIN
        .captures(text)
        .and_then(|cap| cap.get(1))
        .map(|handle| format!("linkedin.com/in/{}", handle.as_str()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_email_first_match_wins() {
        let text = "Contact: jane.doe+jobs@example.co.uk or backup@example.org";
        assert_eq!(
            extract_email(text).as_deref(),
            Some("jane.doe+jobs@example.co.uk")
        );
    }

    #[test]
    fn test_email_missing() {
        assert_eq!(extract_email("jane at example dot com"), None);
        assert_eq!(extract_email("user@localhost"), None);
    }

    #[test]
    fn test_phone_international() {
        assert_eq!(
            extract_phone("Phone: +1 (555) 123-4567").as_deref(),
            Some("+1 (555) 123-4567")
        );
        assert_eq!(
            extract_phone("Mobile: 987-654-3210").as_deref(),
            Some("987-654-3210")
        );
    }

    #[test]
    fn test_phone_accepts_loose_digit_runs() {
        // No plausibility check: any long enough digit run counts.
        assert_eq!(extract_phone("ID 1234567890").as_deref(), Some("1234567890"));
    }

    #[test]
    fn test_phone_missing() {
        assert_eq!(extract_phone("Graduated 2019, GPA 3.8"), None);
    }

    #[test]
    fn test_github_handle_is_canonicalized() {
        assert_eq!(
            extract_github("https://www.github.com/alice123/dotfiles").as_deref(),
            Some("github.com/alice123")
        );
        assert_eq!(
            extract_github("see github.com/alice123").as_deref(),
            Some("github.com/alice123")
        );
        assert_eq!(extract_github("gitlab.com/alice123"), None);
    }

    #[test]
    fn test_linkedin_handle_is_canonicalized() {
        assert_eq!(
            extract_linkedin("https://linkedin.com/in/jane-doe-42/").as_deref(),
            Some("linkedin.com/in/jane-doe-42")
        );
        assert_eq!(extract_linkedin("linkedin.com/company/acme"), None);
    }
}
