// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Remote translation commands: `translate`, `batch`, `cache`.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::info;
use verba_cli_config::{CacheConfig, VerbaConfig};
use verba_translate::{
	CacheStore, FileCacheStore, HttpTranslationProvider, MemoryCacheStore, RemoteTranslator,
	TranslationCache,
};

/// The persisted cache slot, or an in-process one when caching is disabled.
pub fn cache_store(cache: &CacheConfig) -> Arc<dyn CacheStore> {
	if cache.enabled {
		Arc::new(persisted_store(cache))
	} else {
		Arc::new(MemoryCacheStore::new())
	}
}

/// The on-disk slot, whether or not the translator currently uses it.
fn persisted_store(cache: &CacheConfig) -> FileCacheStore {
	FileCacheStore::new(&cache.path).with_capacity(cache.capacity)
}

pub fn build_translator(config: &VerbaConfig) -> Result<RemoteTranslator> {
	let base_url = config.translation.base_url.as_deref().context(
		"remote translation is not configured; set translation.base_url or VERBA_TRANSLATION_BASE_URL",
	)?;

	let mut builder = HttpTranslationProvider::builder(base_url);
	if let Some(api_key) = &config.translation.api_key {
		builder = builder.api_key(api_key.clone());
	}
	if let Some(timeout) = config.translation.timeout() {
		builder = builder.timeout(timeout);
	}
	let provider = builder
		.build()
		.context("failed to build translation provider")?;

	info!(endpoint = %provider.endpoint(), cache_enabled = config.cache.enabled, "remote translation ready");

	Ok(RemoteTranslator::new(
		Arc::new(provider),
		cache_store(&config.cache),
		TranslationCache::new(config.cache.capacity),
	))
}

/// Entry count, capacity and location of the persisted cache.
pub async fn cache_stats(cache: &CacheConfig, json: bool) -> Result<String> {
	let entries = persisted_store(cache)
		.load()
		.await
		.context("failed to read translation cache")?
		.len();

	if json {
		return Ok(serde_json::to_string_pretty(&serde_json::json!({
			"enabled": cache.enabled,
			"path": cache.path,
			"entries": entries,
			"capacity": cache.capacity,
		}))?);
	}

	Ok(format!(
		"path:     {}\nenabled:  {}\nentries:  {}\ncapacity: {}",
		cache.path.display(),
		cache.enabled,
		entries,
		cache.capacity
	))
}

pub async fn cache_clear(cache: &CacheConfig) -> Result<()> {
	persisted_store(cache)
		.clear()
		.await
		.context("failed to clear translation cache")?;
	info!(path = %cache.path.display(), "translation cache cleared");
	Ok(())
}

#[cfg(test)]
mod tests {
	use super::*;
	use verba_cli_config::layer::{CacheLayer, TranslationLayer};
	use verba_cli_config::{ConfigLayer, PathsConfig};

	fn config(base_url: Option<&str>, cache_path: &std::path::Path, enabled: bool) -> VerbaConfig {
		let layer = ConfigLayer {
			translation: Some(TranslationLayer {
				base_url: base_url.map(str::to_string),
				..Default::default()
			}),
			cache: Some(CacheLayer {
				enabled: Some(enabled),
				path: Some(cache_path.to_path_buf()),
				capacity: Some(3),
			}),
			..Default::default()
		};
		VerbaConfig::from_layer(layer, PathsConfig::default()).unwrap()
	}

	#[test]
	fn test_translator_requires_base_url() {
		let dir = tempfile::tempdir().unwrap();
		let config = config(None, &dir.path().join("cache.json"), true);
		let err = build_translator(&config).unwrap_err();
		assert!(err.to_string().contains("base_url"));
	}

	#[test]
	fn test_translator_builds_with_base_url() {
		let dir = tempfile::tempdir().unwrap();
		let config = config(
			Some("https://api.example.com"),
			&dir.path().join("cache.json"),
			false,
		);
		assert!(build_translator(&config).is_ok());
	}

	#[test]
	fn test_english_needs_no_network() {
		tokio_test::block_on(async {
			let dir = tempfile::tempdir().unwrap();
			// Unroutable; any request would fail and fall back, but none is made
			let config = config(Some("http://127.0.0.1:1"), &dir.path().join("c.json"), true);
			let translator = build_translator(&config).unwrap();
			assert_eq!(translator.translate_remote("Hello", "en").await, "Hello");
			assert_eq!(translator.stats().await.misses, 0);
		});
	}

	#[test]
	fn test_cache_stats_and_clear() {
		tokio_test::block_on(async {
			let dir = tempfile::tempdir().unwrap();
			let path = dir.path().join("cache.json");
			std::fs::write(&path, r#"{"es:Hello": "Hola", "es:Bye": "Adiós"}"#).unwrap();
			let config = config(None, &path, true);

			let text = cache_stats(&config.cache, false).await.unwrap();
			assert!(text.contains("entries:  2"));

			let json: serde_json::Value =
				serde_json::from_str(&cache_stats(&config.cache, true).await.unwrap()).unwrap();
			assert_eq!(json["entries"], 2);
			assert_eq!(json["capacity"], 3);

			cache_clear(&config.cache).await.unwrap();
			let json: serde_json::Value =
				serde_json::from_str(&cache_stats(&config.cache, true).await.unwrap()).unwrap();
			assert_eq!(json["entries"], 0);
		});
	}

	#[test]
	fn test_cache_clear_empties_file_when_disabled() {
		tokio_test::block_on(async {
			let dir = tempfile::tempdir().unwrap();
			let path = dir.path().join("cache.json");
			std::fs::write(&path, r#"{"es:Hello": "Hola"}"#).unwrap();
			let config = config(None, &path, false);

			let json: serde_json::Value =
				serde_json::from_str(&cache_stats(&config.cache, true).await.unwrap()).unwrap();
			assert_eq!(json["enabled"], false);
			assert_eq!(json["entries"], 1);

			cache_clear(&config.cache).await.unwrap();
			let entries = persisted_store(&config.cache).load().await.unwrap();
			assert!(entries.is_empty());
		});
	}
}
