use std::path::PathBuf;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::{config, error::Result, utils};

const BUNDLED_CATALOG: &str = include_str!("../../genres.json");

/// On-disk shape of the catalog cache. The bundled file carries no
/// timestamp, so `updated_at` defaults to 0 there.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct GenreCatalogFile {
    #[serde(default)]
    updated_at: u64,
    genres: Vec<String>,
}

/// Static genre catalog backing the suggestion dropdown.
///
/// Loaded once at startup: from the cached copy in the local data directory
/// when present, otherwise from the catalog bundled into the binary.
/// `genres update` refreshes the cached copy from the API.
pub struct GenreCatalogManager {
    genres: Vec<String>,
    updated_at: u64,
}

impl GenreCatalogManager {
    pub fn new(genres: Vec<String>) -> Self {
        Self {
            genres,
            updated_at: Utc::now().timestamp() as u64,
        }
    }

    /// Catalog compiled into the binary, used when no cached copy exists.
    pub fn bundled() -> Self {
        let file: GenreCatalogFile =
            serde_json::from_str(BUNDLED_CATALOG).expect("bundled genre catalog is valid JSON");
        Self {
            genres: file.genres,
            updated_at: file.updated_at,
        }
    }

    pub async fn load() -> Result<Self> {
        let content = async_fs::read_to_string(Self::cache_path()).await?;
        let file: GenreCatalogFile = serde_json::from_str(&content)?;
        Ok(Self {
            genres: file.genres,
            updated_at: file.updated_at,
        })
    }

    pub async fn persist(&self) -> Result<()> {
        let path = Self::cache_path();
        if let Some(parent) = path.parent() {
            async_fs::create_dir_all(parent).await?;
        }

        let file = GenreCatalogFile {
            updated_at: self.updated_at,
            genres: self.genres.clone(),
        };
        let json = serde_json::to_string_pretty(&file)?;
        async_fs::write(path, json).await?;
        Ok(())
    }

    /// Suggestions for the current input: case-insensitive substring
    /// matches in catalog order, capped to the dropdown size.
    pub fn suggest(&self, input: &str) -> Vec<String> {
        utils::filter_genre_suggestions(&self.genres, input)
    }

    pub fn genres(&self) -> &[String] {
        &self.genres
    }

    pub fn count(&self) -> usize {
        self.genres.len()
    }

    /// Unix timestamp of the last catalog update, 0 for the bundled copy.
    pub fn updated_at(&self) -> u64 {
        self.updated_at
    }

    fn cache_path() -> PathBuf {
        config::data_dir().join("cache/genres.json")
    }
}
