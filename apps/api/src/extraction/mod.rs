//! Text extraction from uploaded documents.
//!
//! `AppState` holds an `Arc<dyn TextExtractor>`; the default is `PdfTextExtractor`.

pub mod pdf;

use std::path::Path;

use async_trait::async_trait;

pub use pdf::PdfTextExtractor;

/// Produces the plain text of a stored document.
///
/// Never fails: an unreadable document yields an empty string, and callers
/// treat empty as "no text available".
#[async_trait]
pub trait TextExtractor: Send + Sync {
    async fn extract(&self, path: &Path) -> String;
}
