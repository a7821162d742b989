// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Persistence slots for the translation cache.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::{Map, Value};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use crate::cache::DEFAULT_CAPACITY;
use crate::error::{Result, TranslateError};

/// A single named slot holding the cache's entries, oldest first.
#[async_trait]
pub trait CacheStore: Send + Sync + std::fmt::Debug {
	/// Read the persisted entries. An absent slot is an empty list.
	async fn load(&self) -> Result<Vec<(String, String)>>;

	/// Replace the slot's contents with `entries`.
	async fn save(&self, entries: &[(String, String)]) -> Result<()>;

	/// Empty the slot.
	async fn clear(&self) -> Result<()> {
		self.save(&[]).await
	}
}

/// JSON file slot.
///
/// The file holds one JSON object whose members are the entries in insertion
/// order. Writes go to a temporary sibling and are renamed into place, and
/// only the newest `capacity` entries are written.
#[derive(Debug, Clone)]
pub struct FileCacheStore {
	path: PathBuf,
	capacity: usize,
}

impl FileCacheStore {
	pub fn new(path: impl Into<PathBuf>) -> Self {
		Self {
			path: path.into(),
			capacity: DEFAULT_CAPACITY,
		}
	}

	/// Cap the number of entries written.
	pub fn with_capacity(mut self, capacity: usize) -> Self {
		self.capacity = capacity.max(1);
		self
	}

	pub fn path(&self) -> &Path {
		&self.path
	}

	fn io_error(&self, source: std::io::Error) -> TranslateError {
		TranslateError::CacheIo {
			path: self.path.clone(),
			source,
		}
	}
}

#[async_trait]
impl CacheStore for FileCacheStore {
	async fn load(&self) -> Result<Vec<(String, String)>> {
		let contents = match fs::read_to_string(&self.path).await {
			Ok(contents) => contents,
			Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
				debug!(path = %self.path.display(), "no persisted translation cache");
				return Ok(Vec::new());
			}
			Err(e) => return Err(self.io_error(e)),
		};

		let map: Map<String, Value> = serde_json::from_str(&contents)?;
		let mut entries: Vec<(String, String)> = map
			.into_iter()
			.filter_map(|(key, value)| match value {
				Value::String(value) => Some((key, value)),
				_ => {
					warn!(key = %key, "skipping non-string translation cache entry");
					None
				}
			})
			.collect();

		if entries.len() > self.capacity {
			entries.drain(..entries.len() - self.capacity);
		}

		debug!(path = %self.path.display(), count = entries.len(), "loaded translation cache");
		Ok(entries)
	}

	async fn save(&self, entries: &[(String, String)]) -> Result<()> {
		if let Some(parent) = self.path.parent() {
			fs::create_dir_all(parent)
				.await
				.map_err(|e| self.io_error(e))?;
		}

		let skip = entries.len().saturating_sub(self.capacity);
		let map: Map<String, Value> = entries[skip..]
			.iter()
			.map(|(key, value)| (key.clone(), Value::String(value.clone())))
			.collect();
		let contents = serde_json::to_string(&map)?;

		let temp_path = self.path.with_extension("tmp");
		let mut file = fs::File::create(&temp_path)
			.await
			.map_err(|e| self.io_error(e))?;
		file.write_all(contents.as_bytes())
			.await
			.map_err(|e| self.io_error(e))?;
		file.sync_all().await.map_err(|e| self.io_error(e))?;
		drop(file);

		fs::rename(&temp_path, &self.path)
			.await
			.map_err(|e| self.io_error(e))?;

		debug!(path = %self.path.display(), count = map.len(), "translation cache written");
		Ok(())
	}
}

/// In-process slot, for tests and for running without persistence.
#[derive(Debug, Default)]
pub struct MemoryCacheStore {
	entries: RwLock<Vec<(String, String)>>,
}

impl MemoryCacheStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn with_entries(entries: Vec<(String, String)>) -> Self {
		Self {
			entries: RwLock::new(entries),
		}
	}
}

#[async_trait]
impl CacheStore for MemoryCacheStore {
	async fn load(&self) -> Result<Vec<(String, String)>> {
		Ok(self.entries.read().await.clone())
	}

	async fn save(&self, entries: &[(String, String)]) -> Result<()> {
		*self.entries.write().await = entries.to_vec();
		Ok(())
	}
}
