//! Persistence backends
//!
//! A backend is a flat byte store keyed by strings. Keys are namespaced per
//! user and per settings domain, see [`SettingsKey`].

use crate::error::StorageError;
use rustc_hash::FxHashMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// The independently stored settings records
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SettingsDomain {
    Theme,
    Scene,
    Colors,
}

impl SettingsDomain {
    pub fn all() -> &'static [SettingsDomain] {
        &[Self::Theme, Self::Scene, Self::Colors]
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Theme => "lantern_theme_settings",
            Self::Scene => "lantern_scene_settings",
            Self::Colors => "lantern_colors",
        }
    }
}

/// Per-user key namespace
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct SettingsKey {
    user: String,
}

impl SettingsKey {
    pub fn new(user: impl Into<String>) -> Self {
        Self { user: user.into() }
    }

    pub fn user(&self) -> &str {
        &self.user
    }

    /// `<user>/<domain name>`
    pub fn for_domain(&self, domain: SettingsDomain) -> String {
        format!("{}/{}", self.user, domain.name())
    }
}

/// Byte storage for settings records
pub trait SettingsBackend: Send + Sync {
    /// `Ok(None)` when nothing is stored under `key`
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError>;

    fn write(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError>;
}

impl<B: SettingsBackend + ?Sized> SettingsBackend for Box<B> {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        (**self).read(key)
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        (**self).write(key, bytes)
    }
}

/// In-process backend, mostly for tests and ephemeral sessions
#[derive(Debug, Default)]
pub struct MemoryBackend {
    entries: Mutex<FxHashMap<String, Vec<u8>>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the bytes stored under `key`
    pub fn get(&self, key: &str) -> Option<Vec<u8>> {
        self.lock().ok()?.get(key).cloned()
    }

    /// Store raw bytes, bypassing the settings store
    pub fn insert(&self, key: impl Into<String>, bytes: impl Into<Vec<u8>>) {
        if let Ok(mut entries) = self.lock() {
            entries.insert(key.into(), bytes.into());
        }
    }

    fn lock(
        &self,
    ) -> Result<std::sync::MutexGuard<'_, FxHashMap<String, Vec<u8>>>, StorageError> {
        self.entries
            .lock()
            .map_err(|_| StorageError::Unavailable("memory backend lock poisoned".into()))
    }
}

impl SettingsBackend for MemoryBackend {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        self.lock()?.insert(key.to_string(), bytes.to_vec());
        Ok(())
    }
}

/// One JSON file per key under a root directory
///
/// Writes go to a sibling temp file first and are renamed into place, so a
/// crash mid-write leaves the previous record intact.
#[derive(Clone, Debug)]
pub struct FileBackend {
    root: PathBuf,
}

impl FileBackend {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let mut path = self.root.clone();
        for segment in key.split('/').filter(|s| !matches!(*s, "" | "." | "..")) {
            path.push(segment);
        }
        path.set_extension("json");
        path
    }
}

impl SettingsBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<Vec<u8>>, StorageError> {
        match fs::read(self.path_for(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(err) if err.kind() == ErrorKind::NotFound => Ok(None),
            Err(source) => Err(StorageError::Io {
                key: key.to_string(),
                source,
            }),
        }
    }

    fn write(&self, key: &str, bytes: &[u8]) -> Result<(), StorageError> {
        let io = |source: std::io::Error| StorageError::Io {
            key: key.to_string(),
            source,
        };
        let path = self.path_for(key);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(io)?;
        }
        let staging = path.with_extension("json.tmp");
        fs::write(&staging, bytes).map_err(io)?;
        fs::rename(&staging, &path).map_err(io)?;
        tracing::trace!(path = %path.display(), len = bytes.len(), "settings written");
        Ok(())
    }
}
