use crate::store::atomic_writer::AtomicWriter;
use crate::traits::{PersistenceMetadata, PersistenceStore, StoreSnapshot, FORMAT_VERSION};
use logoshare_core::{LogoshareError, LogoshareResult};
use logoshare_domain::Logo;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use uuid::Uuid;

/// JSON file-based snapshot store for the local variant
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    instance_id: Uuid,
}

/// On-disk wrapper around the logo collection
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonEnvelope {
    pub version: u32,
    pub metadata: PersistenceMetadata,
    pub data: serde_json::Value,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct CollectionData {
    #[serde(default)]
    logos: Vec<Logo>,
}

fn serialization_error(e: serde_json::Error) -> LogoshareError {
    LogoshareError::Serialization(e.to_string())
}

impl JsonFileStore {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            instance_id: Uuid::new_v4(),
        }
    }

    pub fn instance_id(&self) -> Uuid {
        self.instance_id
    }

    pub async fn save_logos(&self, logos: &[Logo]) -> LogoshareResult<PersistenceMetadata> {
        let data = serde_json::to_vec(&CollectionData {
            logos: logos.to_vec(),
        })
        .map_err(serialization_error)?;
        self.save(StoreSnapshot {
            data,
            metadata: PersistenceMetadata::new(self.instance_id),
        })
        .await
    }

    pub async fn load_logos(&self) -> LogoshareResult<Vec<Logo>> {
        let (snapshot, _) = self.load().await?;
        let data: CollectionData =
            serde_json::from_slice(&snapshot.data).map_err(serialization_error)?;
        Ok(data.logos)
    }
}

#[async_trait::async_trait]
impl PersistenceStore for JsonFileStore {
    async fn save(&self, mut snapshot: StoreSnapshot) -> LogoshareResult<PersistenceMetadata> {
        snapshot.metadata.instance_id = self.instance_id;
        snapshot.metadata.saved_at = chrono::Utc::now();

        let data_value: serde_json::Value =
            serde_json::from_slice(&snapshot.data).map_err(serialization_error)?;
        let envelope = JsonEnvelope {
            version: FORMAT_VERSION,
            metadata: snapshot.metadata.clone(),
            data: data_value,
        };
        let json_bytes = serde_json::to_vec_pretty(&envelope).map_err(serialization_error)?;

        AtomicWriter::write_atomic(&self.path, &json_bytes).await?;

        tracing::info!(
            "Saved {} bytes to {}",
            json_bytes.len(),
            self.path.display()
        );
        Ok(snapshot.metadata)
    }

    async fn load(&self) -> LogoshareResult<(StoreSnapshot, PersistenceMetadata)> {
        let file_bytes = AtomicWriter::read_all(&self.path).await?;
        let envelope: JsonEnvelope =
            serde_json::from_slice(&file_bytes).map_err(serialization_error)?;

        if envelope.version != FORMAT_VERSION {
            return Err(LogoshareError::Serialization(format!(
                "Unsupported format version: {}",
                envelope.version
            )));
        }

        let data = serde_json::to_vec(&envelope.data).map_err(serialization_error)?;
        let snapshot = StoreSnapshot {
            data,
            metadata: envelope.metadata.clone(),
        };

        tracing::info!(
            "Loaded {} bytes from {}",
            file_bytes.len(),
            self.path.display()
        );
        Ok((snapshot, envelope.metadata))
    }

    async fn exists(&self) -> bool {
        tokio::fs::try_exists(&self.path).await.unwrap_or(false)
    }

    fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use logoshare_domain::sample_logos;
    use serde_json::json;
    use tempfile::tempdir;

    #[tokio::test]
    async fn test_save_and_load_logos() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("logos.json"));

        let logos = sample_logos();
        let metadata = store.save_logos(&logos).await.unwrap();
        assert_eq!(metadata.format_version, FORMAT_VERSION);
        assert_eq!(metadata.instance_id, store.instance_id());

        let loaded = store.load_logos().await.unwrap();
        assert_eq!(loaded, logos);
    }

    #[tokio::test]
    async fn test_exists() {
        let dir = tempdir().unwrap();
        let store = JsonFileStore::new(dir.path().join("nonexistent.json"));
        assert!(!store.exists().await);

        store.save_logos(&[]).await.unwrap();
        assert!(store.exists().await);
    }

    #[tokio::test]
    async fn test_rejects_unknown_version() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("logos.json");
        let envelope = json!({
            "version": 99,
            "metadata": {
                "format_version": 99,
                "instance_id": Uuid::new_v4(),
                "saved_at": "2024-01-01T00:00:00Z"
            },
            "data": { "logos": [] }
        });
        std::fs::write(&path, serde_json::to_vec(&envelope).unwrap()).unwrap();

        let store = JsonFileStore::new(&path);
        assert!(matches!(
            store.load().await,
            Err(LogoshareError::Serialization(_))
        ));
    }
}
