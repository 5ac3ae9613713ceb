//! Anonymized candidate archive
//!
//! A single JSON file holding an array of interview summaries. The email is
//! replaced by its SHA-256 digest; name and phone are never written.
//! Appends are serialised within this process only; two processes writing
//! the same file can still lose records.

use crate::state_machine::state::{CandidateProfile, ProfileField};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tokio::fs;
use tokio::sync::Mutex;

#[derive(Error, Debug)]
pub enum ArchiveError {
    #[error("Archive I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Archive is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type ArchiveResult<T> = Result<T, ArchiveError>;

/// One completed interview, stripped of direct identifiers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidateRecord {
    /// SHA-256 of the candidate's email, lowercase hex
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub experience: String,
    pub position: String,
    pub location: String,
    pub tech_stack: String,
    pub responses: Vec<String>,
}

impl CandidateRecord {
    pub fn anonymize(
        profile: &CandidateProfile,
        responses: Vec<String>,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: anonymize_email(profile.value(ProfileField::Email)),
            timestamp,
            experience: profile.value(ProfileField::Experience).to_string(),
            position: profile.value(ProfileField::Position).to_string(),
            location: profile.value(ProfileField::Location).to_string(),
            tech_stack: profile.value(ProfileField::TechStack).to_string(),
            responses,
        }
    }
}

/// One-way hash of an email address
pub fn anonymize_email(email: &str) -> String {
    format!("{:x}", Sha256::digest(email.as_bytes()))
}

/// File-backed append-only record list
pub struct JsonArchive {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl JsonArchive {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All stored records; a missing file is an empty archive
    pub async fn load_all(&self) -> ArchiveResult<Vec<CandidateRecord>> {
        match fs::read_to_string(&self.path).await {
            Ok(content) if content.trim().is_empty() => Ok(Vec::new()),
            Ok(content) => Ok(serde_json::from_str(&content)?),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(e.into()),
        }
    }

    pub async fn append(&self, record: CandidateRecord) -> ArchiveResult<()> {
        let _guard = self.write_lock.lock().await;

        let mut records = self.load_all().await?;
        records.push(record);

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }

        // Write through a temporary file so readers never see a torn array
        let body = serde_json::to_vec_pretty(&records)?;
        let temp_path = self.path.with_extension("tmp");
        fs::write(&temp_path, body).await?;
        fs::rename(&temp_path, &self.path).await?;

        tracing::info!(path = %self.path.display(), total = records.len(), "Candidate record archived");
        Ok(())
    }

    /// Remove every stored record
    pub async fn delete_all(&self) -> ArchiveResult<()> {
        let _guard = self.write_lock.lock().await;
        match fs::remove_file(&self.path).await {
            Ok(()) => {
                tracing::info!(path = %self.path.display(), "Candidate archive deleted");
                Ok(())
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
