// src/store.rs

use std::path::{Path, PathBuf};

use tokio::fs;
use uuid::Uuid;

/// Local directory holding generated certificate PDFs, served statically
/// under `/certificates`.
///
/// Files are keyed by sanitized user name, so repeated downloads for one
/// name overwrite the same file. Writes go through a uniquely named temp
/// file and an atomic rename: concurrent requests for the same name leave
/// exactly one complete file (last writer wins), never a partial one.
#[derive(Debug, Clone)]
pub struct CertificateStore {
    dir: PathBuf,
}

impl CertificateStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Creates the store directory if it does not exist yet. Idempotent.
    pub async fn init(&self) -> std::io::Result<()> {
        fs::create_dir_all(&self.dir).await
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File name a certificate for `name` is stored under.
    pub fn file_name_for(&self, name: &str) -> String {
        format!("{}_certificate.pdf", sanitize_stem(name))
    }

    /// Path of a stored file inside the store directory.
    pub fn path_for(&self, file_name: &str) -> PathBuf {
        self.dir.join(file_name)
    }

    /// Writes `bytes` under `file_name`, silently replacing any prior file.
    pub async fn save(&self, file_name: &str, bytes: &[u8]) -> std::io::Result<()> {
        let tmp_path = self.dir.join(format!("{}.{}.tmp", file_name, Uuid::new_v4()));
        fs::write(&tmp_path, bytes).await?;

        let renamed = fs::rename(&tmp_path, self.path_for(file_name)).await;
        if renamed.is_err() {
            let _ = fs::remove_file(&tmp_path).await;
        }
        renamed
    }
}

/// Reduces a user-supplied name to a filesystem-safe file stem.
///
/// Anything outside `[A-Za-z0-9._-]` maps to `_`, and leading dots are
/// stripped, so the stem can never name a dot-file or escape the store
/// directory.
fn sanitize_stem(name: &str) -> String {
    let cleaned: String = name
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '_' | '-') {
                c
            } else {
                '_'
            }
        })
        .collect();

    let cleaned = cleaned.trim_start_matches('.');
    if cleaned.is_empty() {
        "certificate".to_string()
    } else {
        cleaned.to_string()
    }
}
