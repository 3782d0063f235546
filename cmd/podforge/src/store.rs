//! Podcast persistence.
//!
//! The traits keep the server independent of where audio and metadata land;
//! `FsStore` is the built-in backend, writing MP3 blobs under random UUID
//! names and appending one JSON line per record.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::io::AsyncWriteExt;
use tracing::info;
use uuid::Uuid;

/// One saved podcast.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PodcastRecord {
    pub title: String,
    pub description: String,
    pub script: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
    pub audio_url: String,
    pub user_email: String,
    pub created_at: DateTime<Utc>,
}

/// Writes an audio blob and returns its addressable location.
#[async_trait]
pub trait BlobStore: Send + Sync {
    async fn put_audio(&self, audio: &[u8]) -> Result<String>;
}

/// Append-only record storage.
#[async_trait]
pub trait PodcastStore: Send + Sync {
    async fn append(&self, record: &PodcastRecord) -> Result<()>;
    async fn list(&self) -> Result<Vec<PodcastRecord>>;
}

/// Filesystem-backed store rooted at a single directory.
#[derive(Debug, Clone)]
pub struct FsStore {
    root: PathBuf,
}

impl FsStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn records_path(&self) -> PathBuf {
        self.root.join("podcasts.jsonl")
    }

    fn audio_dir(&self) -> PathBuf {
        self.root.join("audio")
    }

    async fn ensure_dirs(&self) -> Result<()> {
        tokio::fs::create_dir_all(self.audio_dir())
            .await
            .with_context(|| format!("creating store directory {}", self.root.display()))?;
        Ok(())
    }
}

#[async_trait]
impl BlobStore for FsStore {
    async fn put_audio(&self, audio: &[u8]) -> Result<String> {
        self.ensure_dirs().await?;
        let name = format!("{}.mp3", Uuid::new_v4());
        let path = self.audio_dir().join(&name);
        tokio::fs::write(&path, audio)
            .await
            .with_context(|| format!("writing {}", path.display()))?;
        info!(path = %path.display(), bytes = audio.len(), "stored audio");
        Ok(path.to_string_lossy().into_owned())
    }
}

#[async_trait]
impl PodcastStore for FsStore {
    async fn append(&self, record: &PodcastRecord) -> Result<()> {
        self.ensure_dirs().await?;
        let mut line = serde_json::to_vec(record).context("encoding podcast record")?;
        line.push(b'\n');
        let mut file = tokio::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(self.records_path())
            .await
            .context("opening podcast record log")?;
        file.write_all(&line).await.context("appending record")?;
        Ok(())
    }

    async fn list(&self) -> Result<Vec<PodcastRecord>> {
        let path = self.records_path();
        if !Path::new(&path).exists() {
            return Ok(Vec::new());
        }
        let raw = tokio::fs::read_to_string(&path)
            .await
            .context("reading podcast record log")?;
        let mut records = Vec::new();
        for line in raw.lines().filter(|l| !l.trim().is_empty()) {
            records.push(serde_json::from_str(line).context("decoding podcast record")?);
        }
        Ok(records)
    }
}
