// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Remote translation of free text for Verba.
//!
//! [`RemoteTranslator`] sends text the static dictionaries cannot cover to a
//! [`TranslationProvider`] and remembers results in a bounded
//! [`TranslationCache`] that survives restarts through a [`CacheStore`].
//! Translation never fails from the caller's point of view: on any error the
//! original text comes back.
//!
//! # Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use verba_translate::{
//! 	FileCacheStore, HttpTranslationProvider, RemoteTranslator, TranslationCache,
//! };
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let provider = HttpTranslationProvider::builder("https://api.example.com").build()?;
//! let store = FileCacheStore::new("/tmp/translation-cache.json");
//! let translator = RemoteTranslator::new(
//! 	Arc::new(provider),
//! 	Arc::new(store),
//! 	TranslationCache::default(),
//! );
//!
//! let greeting = translator.translate_remote("Hello", "es").await;
//! let labels = translator.translate_batch(&["Save", "Cancel"], "vi").await;
//! # Ok(())
//! # }
//! ```

mod cache;
mod error;
mod provider;
mod store;
mod translator;

pub use cache::{cache_key, CacheStats, TranslationCache, DEFAULT_CAPACITY, KEY_PREFIX_CHARS};
pub use error::{Result, TranslateError};
pub use provider::{HttpTranslationProvider, HttpTranslationProviderBuilder, TranslationProvider};
pub use store::{CacheStore, FileCacheStore, MemoryCacheStore};
pub use translator::{RemoteTranslator, MIN_TRANSLATABLE_CHARS};
