//! Rule-based language analysis: tokenization, proper-noun tagging and
//! person-entity recognition over resume text.
//!
//! Built once at startup and shared read-only by every request.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::parsing::patterns::HONORIFIC_NAME;

static CHUNK: Lazy<Regex> = Lazy::new(|| Regex::new(r"\S+").unwrap());

const LEADING_PUNCT: &[char] = &['(', '[', '{', '"', '\'', '«', '“', '‘', '•', '·', '*', '|'];
const TRAILING_PUNCT: &[char] = &[
    ',', ';', ':', ')', ']', '}', '"', '\'', '!', '?', '.', '»', '”', '’', '|', '…',
];

/// Capitalized vocabulary that shows up all over resumes without naming a person.
const COMMON_WORDS: &[&str] = &[
    // section headings
    "resume", "curriculum", "vitae", "cv", "summary", "profile", "objective", "experience",
    "education", "skills", "skill", "projects", "project", "certifications", "certification",
    "achievements", "awards", "languages", "interests", "hobbies", "references", "activities",
    "publications", "courses", "coursework", "volunteer", "volunteering", "leadership",
    "overview", "highlights", "strengths", "accomplishments", "employment", "history",
    // contact labels
    "contact", "email", "e-mail", "phone", "mobile", "tel", "address", "linkedin", "github",
    "portfolio", "website", "name", "date", "birth", "nationality", "gender", "location",
    // common titles and qualifiers
    "work", "professional", "technical", "personal", "details", "information", "about", "career",
    "internship", "intern", "university", "college", "institute", "school", "academy",
    "bachelor", "bachelors", "master", "masters", "degree", "diploma", "science", "sciences",
    "engineering", "engineer", "software", "developer", "senior", "junior", "lead", "manager",
    "analyst", "consultant", "designer", "architect", "director", "head", "team", "technology",
    "technologies", "tools", "frameworks", "present", "current", "full", "stack", "web",
    "computer", "systems", "data", "remote", "company", "inc", "ltd", "llc",
    // months and days
    "january", "february", "march", "april", "may", "june", "july", "august", "september",
    "october", "november", "december", "jan", "feb", "mar", "apr", "jun", "jul", "aug", "sep",
    "sept", "oct", "nov", "dec", "monday", "tuesday", "wednesday", "thursday", "friday",
    "saturday", "sunday",
    // function words that start sentences
    "i", "my", "me", "we", "our", "the", "a", "an", "and", "or", "in", "of", "for", "with", "to",
    "at", "on", "by", "from", "as", "is", "was", "responsible", "worked", "developed", "built",
    "designed", "managed", "led", "created", "implemented", "proficient", "skilled",
    "experienced", "strong", "excellent", "good",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Punct,
}

/// A token with its byte span in the source text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token<'a> {
    pub text: &'a str,
    pub lower: String,
    pub start: usize,
    pub end: usize,
    pub line: usize,
    pub kind: TokenKind,
}

/// Tokenized text. Tokens never span a line break.
#[derive(Debug, Clone)]
pub struct Doc<'a> {
    pub text: &'a str,
    pub tokens: Vec<Token<'a>>,
}

impl<'a> Doc<'a> {
    /// Source text covering tokens `first..=last`, including the whitespace between them.
    pub fn span(&self, first: usize, last: usize) -> &'a str {
        &self.text[self.tokens[first].start..self.tokens[last].end]
    }
}

#[derive(Debug, Clone)]
pub struct LanguageModel {
    common_words: HashSet<String>,
}

impl Default for LanguageModel {
    fn default() -> Self {
        Self::new()
    }
}

impl LanguageModel {
    pub fn new() -> Self {
        LanguageModel {
            common_words: COMMON_WORDS.iter().map(|w| w.to_string()).collect(),
        }
    }

    /// Marks every word of `terms` as a known non-name (e.g. "Machine Learning").
    pub fn with_known_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for term in terms {
            for word in term.as_ref().split_whitespace() {
                self.common_words.insert(word.to_lowercase());
            }
        }
        self
    }

    pub fn tokenize<'a>(&self, text: &'a str) -> Doc<'a> {
        let mut tokens = Vec::new();
        let mut offset = 0;

        for (line_no, line) in text.split('\n').enumerate() {
            for chunk in CHUNK.find_iter(line) {
                let base = offset + chunk.start();
                split_chunk(chunk.as_str(), base, line_no, &mut tokens);
            }
            offset += line.len() + 1;
        }

        Doc { text, tokens }
    }

    pub fn is_common_word(&self, word: &str) -> bool {
        self.common_words.contains(&word.to_lowercase())
    }

    /// Title-case alphabetic words that are not known resume vocabulary.
    pub fn is_proper_noun(&self, token: &Token<'_>) -> bool {
        if token.kind != TokenKind::Word || token.text.chars().count() < 2 {
            return false;
        }
        let starts_upper = token
            .text
            .chars()
            .next()
            .is_some_and(|c| c.is_alphabetic() && c.is_uppercase());
        let shape_ok = token
            .text
            .chars()
            .all(|c| c.is_alphabetic() || c == '\'' || c == '-');
        let has_lower = token.text.chars().any(|c| c.is_lowercase());

        starts_upper && shape_ok && has_lower && !self.common_words.contains(&token.lower)
    }

    /// Person names in document order: honorific-prefixed names, then lines
    /// that read as an all-caps name ("JANE DOE").
    pub fn person_entities(&self, doc: &Doc<'_>) -> Vec<String> {
        let mut found: Vec<(usize, String)> = HONORIFIC_NAME
            .captures_iter(doc.text)
            .filter_map(|cap| cap.get(1))
            .map(|m| (m.start(), m.as_str().to_string()))
            .collect();

        let mut offset = 0;
        for line in doc.text.split('\n') {
            let trimmed = line.trim();
            if self.is_all_caps_name(trimmed) {
                let lead = line.len() - line.trim_start().len();
                found.push((offset + lead, trimmed.to_string()));
            }
            offset += line.len() + 1;
        }

        found.sort_by_key(|(pos, _)| *pos);
        found.into_iter().map(|(_, name)| name).collect()
    }

    fn is_all_caps_name(&self, line: &str) -> bool {
        let words: Vec<&str> = line.split_whitespace().collect();
        (2..=3).contains(&words.len())
            && words.iter().all(|w| {
                w.chars().count() >= 2
                    && w.chars().all(|c| c.is_alphabetic() && c.is_uppercase())
                    && !self.is_common_word(w)
            })
    }
}

fn split_chunk<'a>(chunk: &'a str, base: usize, line: usize, tokens: &mut Vec<Token<'a>>) {
    let mut start = 0;
    let mut end = chunk.len();

    let mut leading = Vec::new();
    while let Some(c) = chunk[start..end].chars().next() {
        if !LEADING_PUNCT.contains(&c) {
            break;
        }
        leading.push((start, start + c.len_utf8()));
        start += c.len_utf8();
    }

    let mut trailing = Vec::new();
    while start < end {
        let Some(c) = chunk[start..end].chars().next_back() else {
            break;
        };
        if !TRAILING_PUNCT.contains(&c) {
            break;
        }
        trailing.push((end - c.len_utf8(), end));
        end -= c.len_utf8();
    }
    trailing.reverse();

    let push = move |tokens: &mut Vec<Token<'a>>, s: usize, e: usize, kind: TokenKind| {
        let text = &chunk[s..e];
        tokens.push(Token {
            text,
            lower: text.to_lowercase(),
            start: base + s,
            end: base + e,
            line,
            kind,
        });
    };

    for (s, e) in leading {
        push(tokens, s, e, TokenKind::Punct);
    }
    if start < end {
        push(tokens, start, end, TokenKind::Word);
    }
    for (s, e) in trailing {
        push(tokens, s, e, TokenKind::Punct);
    }
}
