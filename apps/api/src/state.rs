use std::sync::Arc;

use crate::config::Config;
use crate::extraction::TextExtractor;
use crate::parsing::ResumeParser;

/// Shared application state injected into all route handlers via Axum extractors.
/// Everything here is read-only after startup.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    /// Pluggable text extractor. Default: PdfTextExtractor.
    pub extractor: Arc<dyn TextExtractor>,
    /// Skill vocabulary, compiled patterns and language model, built once.
    pub parser: Arc<ResumeParser>,
}
