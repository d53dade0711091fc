use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use tracing::{debug, warn};

use crate::extraction::TextExtractor;

/// PDF text extraction via `pdf-extract`. Parsing is CPU-bound and runs on
/// the blocking pool.
pub struct PdfTextExtractor;

#[async_trait]
impl TextExtractor for PdfTextExtractor {
    async fn extract(&self, path: &Path) -> String {
        let owned: PathBuf = path.to_path_buf();
        let joined = tokio::task::spawn_blocking(move || extract_pdf_text(&owned)).await;

        let text = match joined {
            Ok(Ok(text)) => text,
            Ok(Err(e)) => {
                warn!("Error extracting text from PDF {}: {e:#}", path.display());
                return String::new();
            }
            // pdf-extract panics on some malformed documents
            Err(e) => {
                warn!("PDF extraction task failed for {}: {e}", path.display());
                return String::new();
            }
        };

        let trimmed = text.trim();
        if trimmed.is_empty() {
            warn!("No text found in PDF {}", path.display());
            return String::new();
        }
        debug!(chars = trimmed.len(), "Extracted raw text:\n{trimmed}");
        trimmed.to_string()
    }
}

fn extract_pdf_text(path: &Path) -> Result<String> {
    let bytes = std::fs::read(path)
        .with_context(|| format!("Failed to read PDF '{}'", path.display()))?;
    pdf_extract::extract_text_from_mem(&bytes).map_err(|e| {
        anyhow::anyhow!("Failed to extract text from PDF '{}': {e}", path.display())
    })
}

/// Builds a one-page PDF that draws each line in Helvetica, top to bottom.
/// An empty slice gives a page with no text on it.
#[cfg(test)]
pub(crate) fn single_page_pdf(lines: &[&str]) -> Vec<u8> {
    let mut content = String::from("BT\n/F1 12 Tf\n72 720 Td\n");
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            content.push_str("0 -18 Td\n");
        }
        let escaped = line
            .replace('\\', "\\\\")
            .replace('(', "\\(")
            .replace(')', "\\)");
        content.push_str(&format!("({escaped}) Tj\n"));
    }
    content.push_str("ET");

    let objects = [
        "<< /Type /Catalog /Pages 2 0 R >>".to_string(),
        "<< /Type /Pages /Kids [3 0 R] /Count 1 >>".to_string(),
        "<< /Type /Page /Parent 2 0 R /MediaBox [0 0 612 792] \
         /Resources << /Font << /F1 4 0 R >> >> /Contents 5 0 R >>"
            .to_string(),
        "<< /Type /Font /Subtype /Type1 /BaseFont /Helvetica /Encoding /WinAnsiEncoding >>"
            .to_string(),
        format!(
            "<< /Length {} >>\nstream\n{content}\nendstream",
            content.len()
        ),
    ];

    let mut pdf = b"%PDF-1.4\n".to_vec();
    let mut offsets = Vec::with_capacity(objects.len());
    for (i, body) in objects.iter().enumerate() {
        offsets.push(pdf.len());
        pdf.extend_from_slice(format!("{} 0 obj\n{body}\nendobj\n", i + 1).as_bytes());
    }

    let xref = pdf.len();
    let mut table = format!("xref\n0 {}\n0000000000 65535 f \n", objects.len() + 1);
    for offset in offsets {
        table.push_str(&format!("{offset:010} 00000 n \n"));
    }
    table.push_str(&format!(
        "trailer\n<< /Size {} /Root 1 0 R >>\nstartxref\n{xref}\n%%EOF\n",
        objects.len() + 1
    ));
    pdf.extend_from_slice(table.as_bytes());
    pdf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_extracts_and_trims_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        std::fs::write(
            &path,
            single_page_pdf(&["Jane Doe", "jane.doe@example.com", "Skills: Python, SQL"]),
        )
        .unwrap();

        let text = PdfTextExtractor.extract(&path).await;

        assert!(text.contains("Jane Doe"), "got {text:?}");
        assert!(text.contains("jane.doe@example.com"), "got {text:?}");
        assert!(text.contains("Python, SQL"), "got {text:?}");
        assert_eq!(text, text.trim());
    }

    #[tokio::test]
    async fn test_blank_page_yields_empty_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("blank.pdf");
        std::fs::write(&path, single_page_pdf(&[])).unwrap();
        assert_eq!(PdfTextExtractor.extract(&path).await, "");
    }

    #[tokio::test]
    async fn test_missing_file_yields_empty_text() {
        let dir = tempfile::tempdir().unwrap();
        let text = PdfTextExtractor
            .extract(&dir.path().join("does-not-exist.pdf"))
            .await;
        assert_eq!(text, "");
    }

    #[tokio::test]
    async fn test_garbage_bytes_yield_empty_text() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("resume.pdf");
        std::fs::write(&path, b"this is not a pdf at all").unwrap();
        assert_eq!(PdfTextExtractor.extract(&path).await, "");
    }
}
