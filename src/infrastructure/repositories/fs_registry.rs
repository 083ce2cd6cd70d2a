//! File-backed Entity Registry
//!
//! Stores one JSON document per entity at `<root>/<shard>/<hex>.json`, where
//! the shard is the first two hex characters of the hash. Writes go through a
//! temporary file and a rename while holding an exclusive lock on
//! `<root>/.lock`, so several processes may share one registry.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tempfile::NamedTempFile;

use crate::config::LatticeConfig;
use crate::domain::entities::Entity;
use crate::domain::ports::{EntityRegistry, RegistryError};
use crate::domain::value_objects::ContentHash;

use super::canonical::encode_entity;

pub struct FsEntityRegistry {
    root: PathBuf,
}

impl FsEntityRegistry {
    pub fn new() -> Self {
        Self {
            root: crate::config::default_registry_path(),
        }
    }

    pub fn with_path(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn from_config(config: &LatticeConfig) -> Self {
        Self::with_path(config.registry_path())
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn lock_path(&self) -> PathBuf {
        self.root.join(".lock")
    }

    /// `None` for hashes that cannot name a registry file.
    fn entry_path(&self, hash: &ContentHash) -> Option<PathBuf> {
        let hex = hash.hex();
        if hex.len() < 3 || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
            return None;
        }
        Some(self.root.join(&hex[..2]).join(format!("{hex}.json")))
    }

    fn with_lock<T>(
        &self,
        f: impl FnOnce() -> Result<T, RegistryError>,
    ) -> Result<T, RegistryError> {
        fs::create_dir_all(&self.root).map_err(access_error)?;
        let lock_file = fs::File::create(self.lock_path()).map_err(access_error)?;
        lock_file.lock_exclusive().map_err(access_error)?;

        let result = f();

        let _ = lock_file.unlock();
        result
    }
}

impl Default for FsEntityRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl EntityRegistry for FsEntityRegistry {
    fn get(&self, hash: &ContentHash) -> Result<Option<Entity>, RegistryError> {
        let Some(path) = self.entry_path(hash) else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read(&path).map_err(access_error)?;
        let entity = serde_json::from_slice(&content).map_err(|e| RegistryError::Corrupted {
            hash: hash.clone(),
            message: e.to_string(),
        })?;
        Ok(Some(entity))
    }

    fn set(&self, entity: &Entity) -> Result<ContentHash, RegistryError> {
        let content = encode_entity(entity)?;
        let hash = ContentHash::from_bytes(&content);
        let path = self
            .entry_path(&hash)
            .ok_or_else(|| RegistryError::AccessError {
                message: format!("no storage path for {hash}"),
            })?;

        if path.exists() {
            return Ok(hash);
        }

        self.with_lock(|| {
            if path.exists() {
                return Ok(());
            }
            let parent = path.parent().unwrap_or(&self.root);
            fs::create_dir_all(parent).map_err(access_error)?;

            let mut tmp = NamedTempFile::new_in(parent).map_err(access_error)?;
            tmp.write_all(&content).map_err(access_error)?;
            tmp.persist(&path).map_err(|e| access_error(e.error))?;
            Ok(())
        })?;

        tracing::debug!(hash = %hash, kind = %entity.kind(), "stored entity");
        Ok(hash)
    }

    fn remove(&self, hash: &ContentHash) -> Result<(), RegistryError> {
        let Some(path) = self.entry_path(hash) else {
            return Ok(());
        };
        self.with_lock(|| match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(access_error(e)),
        })
    }
}

fn access_error(e: std::io::Error) -> RegistryError {
    RegistryError::AccessError {
        message: e.to_string(),
    }
}
