use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::consts::MAPPING_FILE;
use crate::error::AppError;

/// Flat project identifier → representative path mapping, as stored in
/// `projects.json`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub(crate) struct ProjectMapping(BTreeMap<String, PathBuf>);

impl ProjectMapping {
    pub(crate) fn default_path(home: &Path) -> PathBuf {
        home.join(MAPPING_FILE)
    }

    /// Missing or blank files load as an empty mapping.
    pub(crate) fn load(path: &Path) -> Result<Self, AppError> {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::debug!("No project mapping at {}", path.display());
                return Ok(Self::default());
            }
            Err(err) => return Err(err.into()),
        };
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(&content).map_err(|e| AppError::ProjectMapping {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })
    }

    pub(crate) fn contains(&self, id: &str) -> bool {
        self.0.contains_key(id)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&String, &PathBuf)> {
        self.0.iter()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>, P: Into<PathBuf>> FromIterator<(K, P)> for ProjectMapping {
    fn from_iter<I: IntoIterator<Item = (K, P)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, p)| (k.into(), p.into())).collect())
    }
}
