//! Unique art mapping
//!
//! Items on the ground only expose the path of their 2D art resource; this
//! table joins that opaque key to one or more display names (one art can be
//! shared by several uniques, listed in priority order).
//!
//! Loading policy, evaluated once per process:
//! 1. If `uniqueArtMapping.json` exists in the data directory, parse it.
//! 2. Otherwise parse the bundled default and persist it verbatim to that
//!    path, so the next load (and any user edits) go through step 1.
//!
//! Malformed input never fails the caller: the table degrades to empty and
//! the error is logged once.

use std::fs;
use std::path::{Path, PathBuf};

use hashbrown::HashMap;
use thiserror::Error;

/// File name the mapping is read from (and written to on first run).
pub const MAPPING_FILE_NAME: &str = "uniqueArtMapping.json";

/// Default mapping shipped with the plugin, embedded at build time.
const BUNDLED_MAPPING: &str = include_str!("../data/uniqueArtMapping.json");

/// Alternate-art variants carry this prefix and are filtered out at load
/// time, except for the one real item that legitimately starts with it.
const VARIANT_PREFIX: &str = "Replica";
const VARIANT_EXCEPTION: &str = "Replica Dragonfang";

#[derive(Debug, Error)]
pub enum MappingError {
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed art mapping: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read-only table from art resource key to candidate display names.
#[derive(Debug, Clone, Default)]
pub struct UniqueArtMapping {
    entries: HashMap<String, Vec<String>>,
}

impl UniqueArtMapping {
    /// Load the mapping for the given data directory.
    ///
    /// Never fails: any read or parse error yields an empty mapping and an
    /// error log entry. Call once and keep the result for the process
    /// lifetime; the table is read-only afterwards.
    pub fn load(data_dir: &Path) -> Self {
        let file_path = data_dir.join(MAPPING_FILE_NAME);

        if file_path.exists() {
            return match Self::load_file(&file_path) {
                Ok(mapping) => {
                    tracing::info!(
                        path = %file_path.display(),
                        arts = mapping.len(),
                        "loaded art mapping from file"
                    );
                    mapping
                }
                Err(e) => {
                    tracing::error!(error = %e, path = %file_path.display(), "failed to load art mapping");
                    Self::default()
                }
            };
        }

        match Self::parse(BUNDLED_MAPPING) {
            Ok(mapping) => {
                // Persist the bundled content verbatim so subsequent loads
                // (and user edits) read from the file instead.
                if let Some(parent) = file_path.parent() {
                    let _ = fs::create_dir_all(parent);
                }
                if let Err(e) = fs::write(&file_path, BUNDLED_MAPPING) {
                    tracing::warn!(
                        error = %e,
                        path = %file_path.display(),
                        "could not persist bundled art mapping"
                    );
                }
                tracing::info!(arts = mapping.len(), "loaded bundled art mapping");
                mapping
            }
            Err(e) => {
                tracing::error!(error = %e, "bundled art mapping is unreadable");
                Self::default()
            }
        }
    }

    /// Build a mapping directly from a JSON string. Used by tests and by
    /// hosts that manage the mapping file themselves.
    pub fn from_json(source: &str) -> Result<Self, MappingError> {
        Self::parse(source)
    }

    fn load_file(path: &Path) -> Result<Self, MappingError> {
        let content = fs::read_to_string(path).map_err(|source| MappingError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content)
    }

    fn parse(source: &str) -> Result<Self, MappingError> {
        let raw: HashMap<String, Vec<String>> = serde_json::from_str(source)?;

        let mut entries = HashMap::with_capacity(raw.len());
        for (key, mut names) in raw {
            names.retain(|n| !n.starts_with(VARIANT_PREFIX) || n.starts_with(VARIANT_EXCEPTION));
            if !names.is_empty() {
                entries.insert(key, names);
            }
        }

        Ok(Self { entries })
    }

    /// Resolve an art resource key to its display name.
    ///
    /// Returns the first candidate of the key's list, or `None` when the key
    /// is unknown or all of its candidates were variant-filtered.
    pub fn resolve(&self, resource_key: &str) -> Option<&str> {
        self.entries
            .get(resource_key)
            .and_then(|names| names.first())
            .map(String::as_str)
    }

    /// Number of mapped art keys (for the settings UI's "N arts loaded").
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Default per-user data directory for the mapping file.
pub fn default_data_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("uniquefinder"))
}
