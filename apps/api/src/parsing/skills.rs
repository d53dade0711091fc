//! Skill detection against a fixed vocabulary.
//!
//! Two independent passes run over the same keywords and their hits are unioned:
//! 1. phrase matching: case-insensitive, whole-token sequences, keeps the text as written
//! 2. regex alternation: `\b(?:k1|k2|...)\b`, case-insensitive, keeps the text as written
//!
//! Deduplication is on the raw matched text, so "python" and "Python" both survive
//! when the resume spells it both ways.

use std::collections::BTreeSet;

use anyhow::{Context, Result};
use regex::{Regex, RegexBuilder};

use crate::models::resume::NOT_FOUND;
use crate::parsing::language::{Doc, LanguageModel};

const DEFAULT_SKILLS: &[&str] = &[
    "Python", "Java", "C++", "C#", "C", "Figma", "Canva", "Excel", "JavaScript",
    "TypeScript", "React", "Next.js", "Angular", "Vue.js", "Node.js", "HTML",
    "CSS", "SQL", "MySQL", "PostgreSQL", "MongoDB", "NoSQL", "Docker", "Kubernetes",
    "AWS", "Azure", "GCP", "Git", "CI/CD", "Agile", "Scrum", "Linux", "Windows",
    "DevOps", "Testing", "QA", "REST APIs", "GraphQL", "Machine Learning", "AI",
    "Data Science", "Cloud Computing", "Cybersecurity", "Networking",
    "Mobile Development", "Android", "iOS", "UI/UX", "OpenAI", "MS Office",
];

/// The known skill names, in priority order for the regex pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillVocabulary {
    keywords: Vec<String>,
}

impl Default for SkillVocabulary {
    fn default() -> Self {
        Self::new(DEFAULT_SKILLS.iter().copied())
    }
}

impl SkillVocabulary {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        SkillVocabulary {
            keywords: keywords
                .into_iter()
                .map(Into::into)
                .filter(|k: &String| !k.trim().is_empty())
                .collect(),
        }
    }

    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }
}

pub struct SkillMatcher {
    /// Lowercased token sequence per keyword.
    phrases: Vec<Vec<String>>,
    alternation: Option<Regex>,
}

impl SkillMatcher {
    pub fn new(vocabulary: &SkillVocabulary, model: &LanguageModel) -> Result<Self> {
        let phrases = vocabulary
            .keywords()
            .iter()
            .map(|k| {
                model
                    .tokenize(k)
                    .tokens
                    .into_iter()
                    .map(|t| t.lower)
                    .collect::<Vec<_>>()
            })
            .filter(|p| !p.is_empty())
            .collect();

        let alternation = if vocabulary.keywords().is_empty() {
            None
        } else {
            let escaped: Vec<String> = vocabulary
                .keywords()
                .iter()
                .map(|k| regex::escape(k))
                .collect();
            let pattern = format!(r"\b(?:{})\b", escaped.join("|"));
            Some(
                RegexBuilder::new(&pattern)
                    .case_insensitive(true)
                    .build()
                    .context("Failed to compile skill alternation pattern")?,
            )
        };

        Ok(SkillMatcher {
            phrases,
            alternation,
        })
    }

    /// Skills found in `doc`, or `["Not Found"]`.
    pub fn extract(&self, doc: &Doc<'_>) -> Vec<String> {
        let mut skills: BTreeSet<String> = self.phrase_matches(doc);
        skills.extend(self.regex_matches(doc.text));

        if skills.is_empty() {
            return vec![NOT_FOUND.to_string()];
        }
        skills.into_iter().collect()
    }

    fn phrase_matches(&self, doc: &Doc<'_>) -> BTreeSet<String> {
        let tokens = &doc.tokens;
        let mut found = BTreeSet::new();

        for start in 0..tokens.len() {
            for phrase in &self.phrases {
                let end = start + phrase.len();
                if end > tokens.len() || tokens[end - 1].line != tokens[start].line {
                    continue;
                }
                let matched = tokens[start..end]
                    .iter()
                    .zip(phrase)
                    .all(|(token, word)| token.lower == *word);
                if matched {
                    found.insert(doc.span(start, end - 1).to_string());
                }
            }
        }
        found
    }

    fn regex_matches(&self, text: &str) -> BTreeSet<String> {
        match &self.alternation {
            Some(re) => re.find_iter(text).map(|m| m.as_str().to_string()).collect(),
            None => BTreeSet::new(),
        }
    }
}
