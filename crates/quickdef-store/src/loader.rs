use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use crate::store::WordStore;

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Store file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("Failed to open store {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

pub struct StoreLoader;

impl StoreLoader {
    /// Load a store file. Only an unreadable file is an error;
    /// corrupt lines are skipped and logged.
    pub fn load_from_file(path: &Path) -> Result<WordStore, StoreError> {
        tracing::info!("Loading word store from file: {}", path.display());

        let file = File::open(path).map_err(|source| match source.kind() {
            io::ErrorKind::NotFound => StoreError::NotFound(path.to_path_buf()),
            _ => StoreError::Open {
                path: path.to_path_buf(),
                source,
            },
        })?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        let (store, stats) =
            WordStore::from_reader(name, BufReader::new(file)).map_err(|source| {
                StoreError::Open {
                    path: path.to_path_buf(),
                    source,
                }
            })?;

        tracing::info!(
            "Loaded {} words ({} lines, {} skipped)",
            store.len(),
            stats.accepted,
            stats.skipped
        );
        Ok(store)
    }

    /// Load the main store, then merge additional stores into it.
    ///
    /// A missing main store yields an empty one so the app can run online
    /// only. Unreadable additional stores are skipped with a warning.
    pub fn load_with_additional(
        main: &Path,
        additional_paths: &[PathBuf],
    ) -> Result<WordStore, StoreError> {
        let mut store = match Self::load_from_file(main) {
            Ok(store) => store,
            Err(StoreError::NotFound(path)) => {
                tracing::warn!(
                    "No word store at {}, only online lookups will work",
                    path.display()
                );
                WordStore::new("empty")
            }
            Err(e) => return Err(e),
        };

        for path in additional_paths {
            match Self::load_from_file(path) {
                Ok(additional) => {
                    tracing::info!("Merging additional store from: {}", path.display());
                    store = store.merge(additional);
                }
                Err(e) => {
                    tracing::warn!("Failed to load store from {}: {}", path.display(), e);
                }
            }
        }

        Ok(store)
    }
}
