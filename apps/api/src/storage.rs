use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use bytes::Bytes;
use tracing::info;
use uuid::Uuid;

const ALLOWED_EXTENSIONS: &[&str] = &["pdf"];
const FALLBACK_FILENAME: &str = "upload.pdf";

/// Creates the upload directory if it does not exist yet.
pub async fn ensure_upload_dir(dir: &Path) -> Result<()> {
    tokio::fs::create_dir_all(dir)
        .await
        .with_context(|| format!("Failed to create upload directory '{}'", dir.display()))
}

/// True when the filename ends in an allowed extension, compared case-insensitively.
pub fn allowed_file(filename: &str) -> bool {
    filename
        .rsplit_once('.')
        .is_some_and(|(_, ext)| ALLOWED_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
}

/// Reduces a client-supplied filename to a safe ASCII basename.
pub fn sanitize_filename(name: &str) -> String {
    let spaced: String = name
        .chars()
        .filter(char::is_ascii)
        .map(|c| if c == '/' || c == '\\' { ' ' } else { c })
        .collect();

    let joined = spaced.split_whitespace().collect::<Vec<_>>().join("_");
    let kept: String = joined
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '-'))
        .collect();
    let trimmed = kept.trim_matches(|c| c == '.' || c == '_');

    if trimmed.is_empty() {
        FALLBACK_FILENAME.to_string()
    } else {
        trimmed.to_string()
    }
}

/// `<32 hex chars>_<sanitized name>`, unique per call.
pub fn unique_upload_name(original: &str) -> String {
    format!("{}_{}", Uuid::new_v4().simple(), sanitize_filename(original))
}

/// Writes an upload under a fresh unique name and returns its path.
/// Files are kept after the request completes.
pub async fn save_upload(dir: &Path, original: &str, data: &Bytes) -> Result<PathBuf> {
    let path = dir.join(unique_upload_name(original));
    tokio::fs::write(&path, data)
        .await
        .with_context(|| format!("Failed to save upload to '{}'", path.display()))?;
    info!("File uploaded successfully: {}", path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_allowed_file_is_case_insensitive() {
        assert!(allowed_file("resume.pdf"));
        assert!(allowed_file("Resume.Final.PDF"));
        assert!(!allowed_file("resume.txt"));
        assert!(!allowed_file("pdf"));
        assert!(!allowed_file("resume.pdf.exe"));
    }

    #[test]
    fn test_sanitize_strips_paths_and_odd_characters() {
        assert_eq!(sanitize_filename("../../etc/passwd"), "etc_passwd");
        assert_eq!(sanitize_filename("My Resume (2024).pdf"), "My_Resume_2024.pdf");
        assert_eq!(sanitize_filename("C:\\Users\\jane\\cv.pdf"), "C_Users_jane_cv.pdf");
        assert_eq!(sanitize_filename("résumé.pdf"), "rsum.pdf");
    }

    #[test]
    fn test_sanitize_falls_back_when_nothing_survives() {
        assert_eq!(sanitize_filename("..."), FALLBACK_FILENAME);
        assert_eq!(sanitize_filename("日本語"), FALLBACK_FILENAME);
    }

    #[test]
    fn test_unique_upload_name_shape() {
        let a = unique_upload_name("cv.pdf");
        let b = unique_upload_name("cv.pdf");
        assert_ne!(a, b);
        let (hex, rest) = a.split_once('_').unwrap();
        assert_eq!(hex.len(), 32);
        assert!(hex.chars().all(|c| c.is_ascii_hexdigit() && !c.is_ascii_uppercase()));
        assert_eq!(rest, "cv.pdf");
    }

    #[tokio::test]
    async fn test_save_upload_keeps_bytes_on_disk() {
        let dir = tempfile::tempdir().unwrap();
        let data = Bytes::from_static(b"%PDF-1.4 fake");
        let path = save_upload(dir.path(), "cv.pdf", &data).await.unwrap();

        assert!(path.starts_with(dir.path()));
        assert!(path.to_string_lossy().ends_with("_cv.pdf"));
        assert_eq!(std::fs::read(&path).unwrap(), b"%PDF-1.4 fake");
    }
}
