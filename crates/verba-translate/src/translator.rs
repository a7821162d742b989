// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Fail-open remote translation backed by the persisted cache.

use std::sync::Arc;

use futures::future::join_all;
use tokio::sync::{Mutex, OnceCell};
use tracing::{debug, instrument, warn};
use verba_common_i18n::DEFAULT_LOCALE;

use crate::cache::{cache_key, CacheStats, TranslationCache};
use crate::error::Result;
use crate::provider::TranslationProvider;
use crate::store::CacheStore;

/// Texts shorter than this many characters are returned untranslated.
pub const MIN_TRANSLATABLE_CHARS: usize = 2;

/// Translates free text through a [`TranslationProvider`], caching results.
///
/// Every failure (transport, status, body, cache persistence) is logged and
/// answered with the original text. The cache is hydrated from its
/// [`CacheStore`] on first use and written back after each new translation.
pub struct RemoteTranslator {
	provider: Arc<dyn TranslationProvider>,
	store: Arc<dyn CacheStore>,
	cache: Mutex<TranslationCache>,
	hydrated: OnceCell<()>,
	flush_lock: Mutex<()>,
}

impl std::fmt::Debug for RemoteTranslator {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("RemoteTranslator")
			.field("store", &self.store)
			.field("hydrated", &self.hydrated.initialized())
			.finish_non_exhaustive()
	}
}

impl RemoteTranslator {
	pub fn new(
		provider: Arc<dyn TranslationProvider>,
		store: Arc<dyn CacheStore>,
		cache: TranslationCache,
	) -> Self {
		Self {
			provider,
			store,
			cache: Mutex::new(cache),
			hydrated: OnceCell::new(),
			flush_lock: Mutex::new(()),
		}
	}

	/// Translate from English into `target`.
	pub async fn translate_remote(&self, text: &str, target: &str) -> String {
		self.translate_remote_from(text, target, DEFAULT_LOCALE).await
	}

	/// Translate `text` from `source` into `target`.
	///
	/// Returns `text` unchanged without any network call when the target is
	/// the source or English, or when the text has fewer than
	/// [`MIN_TRANSLATABLE_CHARS`] characters.
	#[instrument(skip(self, text), fields(chars = text.chars().count()))]
	pub async fn translate_remote_from(&self, text: &str, target: &str, source: &str) -> String {
		if target == source
			|| target == DEFAULT_LOCALE
			|| text.chars().count() < MIN_TRANSLATABLE_CHARS
		{
			return text.to_string();
		}

		self.hydrate().await;

		let key = cache_key(target, text);
		if let Some(hit) = self.cache.lock().await.get(&key) {
			debug!("translation cache hit");
			return hit;
		}

		match self.provider.translate(text, source, target).await {
			Ok(translated) => {
				self.remember(key, translated.clone()).await;
				translated
			}
			Err(e) => {
				warn!(error = %e, "remote translation failed, using original text");
				text.to_string()
			}
		}
	}

	/// Translate every text from English into `target`.
	pub async fn translate_batch<S: AsRef<str>>(&self, texts: &[S], target: &str) -> Vec<String> {
		self.translate_batch_from(texts, target, DEFAULT_LOCALE).await
	}

	/// Translate every text concurrently. Output order matches input order and
	/// each element fails open on its own.
	pub async fn translate_batch_from<S: AsRef<str>>(
		&self,
		texts: &[S],
		target: &str,
		source: &str,
	) -> Vec<String> {
		join_all(
			texts
				.iter()
				.map(|text| self.translate_remote_from(text.as_ref(), target, source)),
		)
		.await
	}

	pub async fn stats(&self) -> CacheStats {
		self.hydrate().await;
		self.cache.lock().await.stats()
	}

	/// Drop every cached translation, in memory and in the store.
	pub async fn clear_cache(&self) -> Result<()> {
		self.hydrate().await;
		let _flush = self.flush_lock.lock().await;
		self.cache.lock().await.clear();
		self.store.clear().await
	}

	async fn hydrate(&self) {
		self.hydrated
			.get_or_init(|| async {
				match self.store.load().await {
					Ok(entries) => {
						let mut cache = self.cache.lock().await;
						cache.restore(entries);
						debug!(entries = cache.len(), "translation cache hydrated");
					}
					Err(e) => {
						warn!(error = %e, "failed to load translation cache, starting empty");
					}
				}
			})
			.await;
	}

	async fn remember(&self, key: String, translated: String) {
		self.cache.lock().await.insert(key, translated);

		// Snapshot under the flush lock so the last write always carries every
		// insertion that preceded it.
		let _flush = self.flush_lock.lock().await;
		let snapshot = self.cache.lock().await.entries();
		if let Err(e) = self.store.save(&snapshot).await {
			warn!(error = %e, "failed to persist translation cache");
		}
	}
}
