//! Resource directory manifest with SHA-256 checksums.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::{ResourceError, ResourceKind, ResourceResult};

pub const MANIFEST_FILE: &str = "manifest.json";

/// `manifest.json`: the resources a directory provides.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Manifest {
    pub resources: Vec<ManifestEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ManifestEntry {
    pub kind: ResourceKind,
    pub file: String,
    /// Lowercase hex SHA-256 of the file contents
    pub sha256: String,
}

impl Manifest {
    pub fn read(dir: &Path) -> ResourceResult<Self> {
        let path = dir.join(MANIFEST_FILE);
        let raw = fs::read_to_string(&path).map_err(|source| ResourceError::Io {
            resource: "manifest".into(),
            path: path.clone(),
            source,
        })?;
        serde_json::from_str(&raw).map_err(|source| ResourceError::Json {
            resource: "manifest".into(),
            source,
        })
    }

    /// Build a manifest for `files` already present in `dir`.
    pub fn for_files(dir: &Path, files: &[(ResourceKind, &str)]) -> ResourceResult<Self> {
        let mut resources = Vec::with_capacity(files.len());
        for (kind, file) in files {
            let path = dir.join(file);
            let raw = fs::read(&path).map_err(|source| ResourceError::Io {
                resource: kind.name().to_string(),
                path: path.clone(),
                source,
            })?;
            resources.push(ManifestEntry {
                kind: *kind,
                file: file.to_string(),
                sha256: sha256_hex(&raw),
            });
        }
        Ok(Self { resources })
    }

    pub fn write(&self, dir: &Path) -> ResourceResult<()> {
        let path = dir.join(MANIFEST_FILE);
        let json = serde_json::to_string_pretty(self).map_err(|source| ResourceError::Json {
            resource: "manifest".into(),
            source,
        })?;
        fs::write(&path, json).map_err(|source| ResourceError::Io {
            resource: "manifest".into(),
            path,
            source,
        })
    }
}

impl ManifestEntry {
    /// Check `contents` against the recorded digest.
    pub fn verify(&self, contents: &[u8]) -> ResourceResult<()> {
        let actual = sha256_hex(contents);
        if actual != self.sha256.to_lowercase() {
            return Err(ResourceError::Checksum {
                resource: self.kind.name().to_string(),
                expected: self.sha256.clone(),
                actual,
            });
        }
        Ok(())
    }
}

pub fn sha256_hex(contents: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(contents);
    hex::encode(hasher.finalize())
}
