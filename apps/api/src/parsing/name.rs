//! Candidate-name detection as an ordered cascade of independent strategies.
//!
//! Strategies run in priority order and the first one that returns a value
//! wins. Priority is a heuristic: a resume whose first proper-noun pair is a
//! company name will report that company as the candidate.

use tracing::debug;

use crate::parsing::language::{Doc, LanguageModel};
use crate::parsing::patterns::NAME_LABEL;

/// Number of leading lines searched for a "Name:" label.
const NAME_LABEL_LINE_WINDOW: usize = 15;

/// Everything a strategy may look at.
pub struct NameContext<'a> {
    pub text: &'a str,
    pub doc: &'a Doc<'a>,
    pub model: &'a LanguageModel,
}

pub trait NameStrategy: Send + Sync {
    fn label(&self) -> &'static str;
    fn attempt(&self, ctx: &NameContext<'_>) -> Option<String>;
}

/// First two adjacent proper nouns on one line.
pub struct ProperNounPair;

impl NameStrategy for ProperNounPair {
    fn label(&self) -> &'static str {
        "proper_noun_pair"
    }

    fn attempt(&self, ctx: &NameContext<'_>) -> Option<String> {
        let tokens = &ctx.doc.tokens;
        (1..tokens.len())
            .find(|&i| {
                tokens[i - 1].line == tokens[i].line
                    && ctx.model.is_proper_noun(&tokens[i - 1])
                    && ctx.model.is_proper_noun(&tokens[i])
            })
            .map(|i| ctx.doc.span(i - 1, i).to_string())
    }
}

/// "Name: Jane Doe" within the first lines of the document.
pub struct LabeledName;

impl NameStrategy for LabeledName {
    fn label(&self) -> &'static str {
        "name_label"
    }

    fn attempt(&self, ctx: &NameContext<'_>) -> Option<String> {
        ctx.text
            .lines()
            .take(NAME_LABEL_LINE_WINDOW)
            .find_map(|line| NAME_LABEL.captures(line))
            .and_then(|cap| cap.get(1))
            .map(|m| m.as_str().to_string())
    }
}

/// A line made of exactly two capitalized words.
pub struct TwoWordLine;

impl NameStrategy for TwoWordLine {
    fn label(&self) -> &'static str {
        "two_word_line"
    }

    fn attempt(&self, ctx: &NameContext<'_>) -> Option<String> {
        ctx.text.lines().find_map(|line| {
            let words: Vec<&str> = line.split_whitespace().collect();
            let capitalized = words
                .iter()
                .all(|w| w.chars().next().is_some_and(char::is_uppercase));
            (words.len() == 2 && capitalized).then(|| line.trim().to_string())
        })
    }
}

/// First person entity recognised by the language model.
pub struct PersonEntity;

impl NameStrategy for PersonEntity {
    fn label(&self) -> &'static str {
        "person_entity"
    }

    fn attempt(&self, ctx: &NameContext<'_>) -> Option<String> {
        ctx.model.person_entities(ctx.doc).into_iter().next()
    }
}

pub struct NameCascade {
    strategies: Vec<Box<dyn NameStrategy>>,
}

impl Default for NameCascade {
    fn default() -> Self {
        NameCascade::new(vec![
            Box::new(ProperNounPair),
            Box::new(LabeledName),
            Box::new(TwoWordLine),
            Box::new(PersonEntity),
        ])
    }
}

impl NameCascade {
    pub fn new(strategies: Vec<Box<dyn NameStrategy>>) -> Self {
        NameCascade { strategies }
    }

    pub fn detect(&self, ctx: &NameContext<'_>) -> Option<String> {
        self.strategies.iter().find_map(|strategy| {
            let found = strategy.attempt(ctx)?;
            debug!(strategy = strategy.label(), name = %found, "Name detected");
            Some(found)
        })
    }
}
