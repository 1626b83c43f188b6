// Local media writer for waste item uploads

use std::path::{Path, PathBuf};

use uuid::Uuid;

use crate::errors::InternalError;
use crate::types::internal::submissions::AssetUpload;

/// Which media subdirectory an upload belongs in
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Image,
    Document,
}

impl MediaKind {
    pub fn directory(&self) -> &'static str {
        match self {
            MediaKind::Image => "ewaste_images",
            MediaKind::Document => "ewaste_docs",
        }
    }
}

/// Writes uploads below a media root and hands back the relative path
/// recorded on the waste item
#[derive(Debug, Clone)]
pub struct MediaStorage {
    root: PathBuf,
}

impl MediaStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Persist `upload` and return its path relative to the media root
    pub async fn save(&self, kind: MediaKind, upload: &AssetUpload) -> Result<String, InternalError> {
        let directory = self.root.join(kind.directory());
        tokio::fs::create_dir_all(&directory)
            .await
            .map_err(|e| InternalError::storage("create_media_directory", e))?;

        let file_name = format!(
            "{}_{}",
            Uuid::new_v4().simple(),
            sanitize_file_name(upload.file_name.as_deref())
        );

        tokio::fs::write(directory.join(&file_name), &upload.bytes)
            .await
            .map_err(|e| InternalError::storage("write_media_file", e))?;

        let relative = format!("{}/{}", kind.directory(), file_name);
        tracing::debug!("Stored {} bytes at {}", upload.size, relative);

        Ok(relative)
    }

    /// Remove previously saved files, e.g. when the surrounding write failed
    ///
    /// Best effort: failures are logged and otherwise ignored.
    pub async fn discard(&self, relative_paths: &[String]) {
        for relative in relative_paths {
            if let Err(e) = tokio::fs::remove_file(self.root.join(relative)).await {
                tracing::warn!("Failed to remove media file {}: {}", relative, e);
            }
        }
    }
}

/// Reduce a client file name to a safe single path component
fn sanitize_file_name(file_name: Option<&str>) -> String {
    let base = file_name
        .and_then(|name| name.rsplit(['/', '\\']).next())
        .unwrap_or_default();

    let cleaned: String = base
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') { c } else { '_' })
        .collect();

    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        "upload".to_string()
    } else {
        cleaned.chars().take(100).collect()
    }
}
