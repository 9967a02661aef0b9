// idcheck-core/src/infrastructure/adapters/sidecar.rs

use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use crate::ports::TextExtractor;

/// Reads pre-computed OCR transcripts stored next to each image
/// (`scan.png` -> `scan.txt`).
#[derive(Debug, Default, Clone)]
pub struct SidecarTextExtractor;

impl SidecarTextExtractor {
    pub fn transcript_path(image: &Path) -> PathBuf {
        image.with_extension("txt")
    }
}

#[async_trait]
impl TextExtractor for SidecarTextExtractor {
    async fn extract_text(&self, image: &Path) -> Option<String> {
        let transcript = Self::transcript_path(image);
        match tokio::fs::read_to_string(&transcript).await {
            Ok(text) => {
                debug!(path = ?transcript, chars = text.len(), "Read OCR transcript");
                Some(text.trim().to_string())
            }
            Err(e) => {
                warn!(path = ?transcript, error = %e, "OCR transcript unavailable");
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::Result;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_reads_transcript_next_to_image() -> Result<()> {
        let dir = tempdir()?;
        let image = dir.path().join("p1_government_id.png");
        std::fs::write(dir.path().join("p1_government_id.txt"), "  Name John Doe\n")?;

        let text = SidecarTextExtractor.extract_text(&image).await;
        assert_eq!(text.as_deref(), Some("Name John Doe"));
        Ok(())
    }

    #[tokio::test]
    async fn test_missing_transcript() -> Result<()> {
        let dir = tempdir()?;
        let text = SidecarTextExtractor
            .extract_text(&dir.path().join("missing.png"))
            .await;
        assert_eq!(text, None);
        Ok(())
    }
}
