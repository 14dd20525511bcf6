use serde::{de::DeserializeOwned, Serialize};
use std::collections::HashMap;
use std::{env, path::PathBuf};
use tokio::fs;
use tracing::error;

pub const IDEAS_KEY: &str = "kidii_ideas";
pub const DEBATES_KEY: &str = "kidii_debates";
pub const LIKES_KEY: &str = "kidii_likes";

enum Backend {
    Dir(PathBuf),
    Memory(HashMap<String, Vec<u8>>),
}

/// Key-value store holding one JSON document per key. The directory
/// backend keeps `<key>.json` files; the in-memory backend backs tests.
/// Reads fall back, writes log and stay silent; neither propagates an
/// error to the caller. Processes sharing a directory race with
/// last-write-wins and no detection.
pub struct Store {
    backend: Backend,
}

impl Store {
    pub fn open(dir: impl Into<PathBuf>) -> Self {
        Self {
            backend: Backend::Dir(dir.into()),
        }
    }

    pub fn in_memory() -> Self {
        Self {
            backend: Backend::Memory(HashMap::new()),
        }
    }

    pub async fn read<T: DeserializeOwned>(&self, key: &str, fallback: T) -> T {
        let bytes = match &self.backend {
            Backend::Dir(dir) => match fs::read(dir.join(format!("{key}.json"))).await {
                Ok(bytes) => bytes,
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => return fallback,
                Err(err) => {
                    error!("failed to read store key {key}: {err}");
                    return fallback;
                }
            },
            Backend::Memory(map) => match map.get(key) {
                Some(bytes) => bytes.clone(),
                None => return fallback,
            },
        };

        match serde_json::from_slice(&bytes) {
            Ok(value) => value,
            Err(err) => {
                error!("failed to parse store key {key}: {err}");
                fallback
            }
        }
    }

    pub async fn write<T: Serialize>(&mut self, key: &str, value: &T) {
        let payload = match serde_json::to_vec_pretty(value) {
            Ok(payload) => payload,
            Err(err) => {
                error!("failed to serialize store key {key}: {err}");
                return;
            }
        };

        match &mut self.backend {
            Backend::Dir(dir) => {
                if let Err(err) = fs::write(dir.join(format!("{key}.json")), payload).await {
                    error!("failed to write store key {key}: {err}");
                }
            }
            Backend::Memory(map) => {
                map.insert(key.to_string(), payload);
            }
        }
    }

    /// Raw key existence, independent of whether the value parses.
    pub async fn contains(&self, key: &str) -> bool {
        match &self.backend {
            Backend::Dir(dir) => fs::try_exists(dir.join(format!("{key}.json")))
                .await
                .unwrap_or(false),
            Backend::Memory(map) => map.contains_key(key),
        }
    }
}

pub fn resolve_store_dir() -> PathBuf {
    if let Ok(dir) = env::var("KIDII_DATA_DIR") {
        return PathBuf::from(dir);
    }

    PathBuf::from("data")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Idea;

    fn sample_ideas() -> Vec<Idea> {
        vec![Idea {
            id: "sample".to_string(),
            title: "Sample".to_string(),
            category: "Tech".to_string(),
            desc: "A sample idea".to_string(),
            likes: 4,
        }]
    }

    #[tokio::test]
    async fn round_trips_a_collection() {
        let mut store = Store::in_memory();
        let ideas = sample_ideas();
        store.write(IDEAS_KEY, &ideas).await;

        let back: Vec<Idea> = store.read(IDEAS_KEY, Vec::new()).await;
        assert_eq!(back.len(), 1);
        assert_eq!(back[0].id, ideas[0].id);
        assert_eq!(back[0].title, ideas[0].title);
        assert_eq!(back[0].likes, ideas[0].likes);
    }

    #[tokio::test]
    async fn missing_key_yields_fallback() {
        let store = Store::in_memory();
        let ideas: Vec<Idea> = store.read(IDEAS_KEY, sample_ideas()).await;
        assert_eq!(ideas.len(), 1);
        assert_eq!(ideas[0].id, "sample");
        assert!(!store.contains(IDEAS_KEY).await);
    }

    #[tokio::test]
    async fn corrupt_document_yields_fallback_but_counts_as_present() {
        let nanos = std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .unwrap()
            .as_nanos();
        let dir = std::env::temp_dir().join(format!("kidii_store_{}_{nanos}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        std::fs::write(dir.join(format!("{IDEAS_KEY}.json")), b"{not json").unwrap();

        let store = Store::open(&dir);
        let ideas: Vec<Idea> = store.read(IDEAS_KEY, Vec::new()).await;
        assert!(ideas.is_empty());
        assert!(store.contains(IDEAS_KEY).await);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
