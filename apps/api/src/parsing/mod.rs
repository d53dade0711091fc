//! Field extraction: turns raw resume text into `ResumeDetails`.
//! Every heuristic is independent; a miss becomes the "Not Found" sentinel.

pub mod contact;
pub mod language;
pub mod name;
pub mod patterns;
pub mod skills;

use anyhow::Result;
use tracing::debug;

use crate::models::resume::{or_not_found, ResumeDetails};
use crate::parsing::contact::{extract_email, extract_github, extract_linkedin, extract_phone};
use crate::parsing::language::LanguageModel;
use crate::parsing::name::{NameCascade, NameContext};
use crate::parsing::skills::{SkillMatcher, SkillVocabulary};

/// Built once at startup and shared read-only across requests.
pub struct ResumeParser {
    model: LanguageModel,
    skills: SkillMatcher,
    names: NameCascade,
}

impl ResumeParser {
    pub fn new(vocabulary: &SkillVocabulary) -> Result<Self> {
        let model = LanguageModel::new().with_known_terms(vocabulary.keywords());
        let skills = SkillMatcher::new(vocabulary, &model)?;
        Ok(ResumeParser {
            model,
            skills,
            names: NameCascade::default(),
        })
    }

    pub fn parse(&self, text: &str) -> ResumeDetails {
        let doc = self.model.tokenize(text);

        let email = or_not_found(extract_email(text));
        let phone = or_not_found(extract_phone(text));
        let github = or_not_found(extract_github(text));
        let linkedin = or_not_found(extract_linkedin(text));

        let name = or_not_found(self.names.detect(&NameContext {
            text,
            doc: &doc,
            model: &self.model,
        }));

        let skills = self.skills.extract(&doc);
        debug!(?skills, "Extracted skills");

        let details = ResumeDetails {
            name,
            email,
            phone,
            github,
            linkedin,
            skills,
        };
        debug!(?details, "Extracted details");
        details
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::resume::NOT_FOUND;

    const RESUME: &str = r#"
Jane Doe
Senior Software Engineer
jane.doe@example.com | +1 555-123-4567
https://github.com/janedoe | https://www.linkedin.com/in/jane-doe/

SKILLS
Python, Rust-adjacent tooling, Docker, Kubernetes, PostgreSQL
Machine Learning and REST APIs

EXPERIENCE
Acme Corp - built CI/CD pipelines on AWS.
"#;

    fn parser() -> ResumeParser {
        ResumeParser::new(&SkillVocabulary::default()).unwrap()
    }

    #[test]
    fn test_parse_full_resume() {
        let details = parser().parse(RESUME);
        assert_eq!(details.name, "Jane Doe");
        assert_eq!(details.email, "jane.doe@example.com");
        assert_eq!(details.phone, "+1 555-123-4567");
        assert_eq!(details.github, "github.com/janedoe");
        assert_eq!(details.linkedin, "linkedin.com/in/jane-doe");
        for skill in [
            "Python",
            "Docker",
            "Kubernetes",
            "PostgreSQL",
            "Machine Learning",
            "REST APIs",
            "CI/CD",
            "AWS",
        ] {
            assert!(
                details.skills.contains(&skill.to_string()),
                "missing {skill} in {:?}",
                details.skills
            );
        }
    }

    #[test]
    fn test_skill_terms_are_not_taken_as_a_name() {
        let details = parser().parse("Skilled in Machine Learning and Cloud Computing.");
        assert_eq!(details.name, NOT_FOUND);
    }

    #[test]
    fn test_all_caps_name_label() {
        let details = parser().parse("NAME: JOHN SMITH\nobjective: build things");
        assert_eq!(details.name, "JOHN SMITH");
    }

    #[test]
    fn test_every_field_falls_back_to_sentinel() {
        let details = parser().parse("nothing useful here at all");
        assert_eq!(details.name, NOT_FOUND);
        assert_eq!(details.email, NOT_FOUND);
        assert_eq!(details.phone, NOT_FOUND);
        assert_eq!(details.github, NOT_FOUND);
        assert_eq!(details.linkedin, NOT_FOUND);
        assert_eq!(details.skills, vec![NOT_FOUND.to_string()]);
    }

    #[test]
    fn test_github_alice() {
        let details = parser().parse("Code at github.com/alice123");
        assert_eq!(details.github, "github.com/alice123");
    }
}
