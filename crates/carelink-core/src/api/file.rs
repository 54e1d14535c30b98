//! JSON fixture backend
//!
//! Reads `{ "patients": [...], "messages": [...] }` from disk on every
//! fetch and writes the file back after `add_message`. Handy for demos and
//! for driving the CLI without a server.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;
use ulid::Ulid;

use super::DataApi;
use crate::error::CareResult;
use crate::types::{Message, NewMessage, Patient};

/// On-disk layout of a fixture file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fixture {
    #[serde(default)]
    pub patients: Vec<Patient>,
    #[serde(default)]
    pub messages: Vec<Message>,
}

impl Fixture {
    pub async fn load(path: &Path) -> CareResult<Self> {
        let bytes = tokio::fs::read(path).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Write to a sibling temp file, then rename it over `path` so readers
    /// never see a half-written fixture.
    pub async fn save(&self, path: &Path) -> CareResult<()> {
        let json = serde_json::to_vec_pretty(self)?;
        let temp_path = temp_path_for(path);

        let mut file = tokio::fs::File::create(&temp_path).await?;
        file.write_all(&json).await?;
        file.sync_all().await?;
        drop(file);

        tokio::fs::rename(&temp_path, path).await?;
        Ok(())
    }
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}

#[derive(Debug)]
pub struct FileApi {
    path: PathBuf,
    /// Serializes read-modify-write cycles on the file
    write_lock: Mutex<()>,
}

impl FileApi {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    /// Missing file reads as an empty fixture.
    async fn read_fixture(&self) -> CareResult<Fixture> {
        if !tokio::fs::try_exists(&self.path).await? {
            tracing::warn!(path = %self.path.display(), "Fixture file missing, using empty data");
            return Ok(Fixture::default());
        }
        Fixture::load(&self.path).await
    }
}

#[async_trait]
impl DataApi for FileApi {
    async fn fetch_patients(&self) -> CareResult<Vec<Patient>> {
        Ok(self.read_fixture().await?.patients)
    }

    async fn fetch_messages(&self) -> CareResult<Vec<Message>> {
        Ok(self.read_fixture().await?.messages)
    }

    async fn add_message(&self, sender_id: &str, input: &NewMessage) -> CareResult<Message> {
        let _guard = self.write_lock.lock().await;
        let mut fixture = self.read_fixture().await?;

        let message = input
            .clone()
            .into_message(Ulid::new().to_string(), sender_id, Utc::now());
        fixture.messages.push(message.clone());
        fixture.save(&self.path).await?;

        tracing::debug!(id = %message.id, path = %self.path.display(), "Message appended to fixture");
        Ok(message)
    }
}
