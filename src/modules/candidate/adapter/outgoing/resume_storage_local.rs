use std::io;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{error, info, warn};

use crate::candidate::application::ports::outgoing::{ResumeStorage, ResumeStorageError};
use crate::candidate::domain::{CandidateId, ResumeLocation};

const FALLBACK_FILE_NAME: &str = "resume";
// Temp name does not grow with the client's file name.
const PARTIAL_FILE_NAME: &str = ".resume.part";

/// Stores resumes on the local filesystem as `<root>/<candidate_id>/<file name>`.
#[derive(Debug, Clone)]
pub struct ResumeStorageLocal {
    root: PathBuf,
}

impl ResumeStorageLocal {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Creates the upload root if it does not exist yet.
    pub async fn ensure_root(&self) -> io::Result<()> {
        fs::create_dir_all(&self.root).await
    }

    fn candidate_dir(&self, candidate_id: CandidateId) -> PathBuf {
        self.root.join(candidate_id.to_string())
    }
}

/// Keeps only the last path component and replaces anything outside
/// `[A-Za-z0-9._-]` with `_`.
pub fn sanitize_file_name(original: &str) -> String {
    let last = original
        .rsplit(['/', '\\'])
        .next()
        .unwrap_or_default()
        .trim();

    let cleaned: String = last
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect();

    if cleaned.is_empty() || cleaned.chars().all(|c| c == '.') {
        FALLBACK_FILE_NAME.to_string()
    } else {
        cleaned
    }
}

async fn write_file(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut file = fs::File::create(path).await?;
    file.write_all(bytes).await?;
    file.flush().await?;
    file.sync_all().await?;
    Ok(())
}

async fn write_resume(dir: &Path, tmp_path: &Path, final_path: &Path, bytes: &[u8]) -> io::Result<()> {
    fs::create_dir_all(dir).await?;
    write_file(tmp_path, bytes).await?;
    fs::rename(tmp_path, final_path).await
}

// Best effort: the directory only goes away once it is empty.
async fn discard_partial(tmp_path: &Path, dir: &Path) {
    if let Err(e) = fs::remove_file(tmp_path).await {
        if e.kind() != io::ErrorKind::NotFound {
            warn!(path = %tmp_path.display(), error = %e, "Failed to remove partial resume");
        }
    }
    let _ = fs::remove_dir(dir).await;
}

#[async_trait]
impl ResumeStorage for ResumeStorageLocal {
    async fn store_resume(
        &self,
        candidate_id: CandidateId,
        original_filename: &str,
        bytes: &[u8],
    ) -> Result<ResumeLocation, ResumeStorageError> {
        let dir = self.candidate_dir(candidate_id);
        let file_name = sanitize_file_name(original_filename);
        let final_path = dir.join(&file_name);
        let tmp_path = dir.join(PARTIAL_FILE_NAME);

        match write_resume(&dir, &tmp_path, &final_path, bytes).await {
            Ok(()) => {
                info!(
                    %candidate_id,
                    path = %final_path.display(),
                    size = bytes.len(),
                    "Resume stored"
                );
                Ok(ResumeLocation::new(final_path))
            }
            Err(e) => {
                discard_partial(&tmp_path, &dir).await;
                error!(%candidate_id, error = %e, "Failed to store resume");
                Err(ResumeStorageError::WriteFailed(e.to_string()))
            }
        }
    }

    async fn remove_resume(&self, location: &ResumeLocation) -> Result<(), ResumeStorageError> {
        let path = location.as_path();

        match fs::remove_file(path).await {
            Ok(()) => info!(path = %path.display(), "Resume removed"),
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                warn!(path = %path.display(), "Resume already absent")
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "Failed to remove resume");
                return Err(ResumeStorageError::RemoveFailed(e.to_string()));
            }
        }

        if let Some(dir) = path.parent().filter(|dir| dir.parent() == Some(self.root())) {
            let _ = fs::remove_dir(dir).await;
        }

        Ok(())
    }
}
