//! Trade outcomes recorded for the online trainer

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

use crate::errors::StoreError;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Experience {
    pub state_id: String,
    pub signal: String,
    pub confidence: f64,
    pub reward: f64,
    pub pnl: f64,
    pub regime: String,
}

/// Append-only NDJSON log of experiences
pub struct ExperienceBuffer {
    path: PathBuf,
}

impl ExperienceBuffer {
    pub async fn new(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn append(&self, experience: &Experience) -> Result<(), StoreError> {
        let mut line = serde_json::to_string(experience)?;
        line.push('\n');
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .await?;
        file.write_all(line.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }
}
