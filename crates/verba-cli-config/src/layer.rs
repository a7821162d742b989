// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Partial configuration layer for merging from multiple sources.

use serde::Deserialize;
use std::path::PathBuf;
use verba_common_config::SecretString;

/// Partial configuration layer - all fields are Option for merging.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ConfigLayer {
	#[serde(default)]
	pub translation: Option<TranslationLayer>,
	#[serde(default)]
	pub cache: Option<CacheLayer>,
	#[serde(default)]
	pub i18n: Option<I18nLayer>,
	#[serde(default)]
	pub logging: Option<LoggingLayer>,
}

#[derive(Clone, Default, Deserialize)]
pub struct TranslationLayer {
	#[serde(default)]
	pub base_url: Option<String>,
	#[serde(default)]
	pub api_key: Option<SecretString>,
	#[serde(default)]
	pub timeout_secs: Option<u64>,
	#[serde(default)]
	pub source_language: Option<String>,
}

impl std::fmt::Debug for TranslationLayer {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TranslationLayer")
			.field("base_url", &self.base_url)
			.field("api_key", &self.api_key)
			.field("timeout_secs", &self.timeout_secs)
			.field("source_language", &self.source_language)
			.finish()
	}
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CacheLayer {
	#[serde(default)]
	pub enabled: Option<bool>,
	#[serde(default)]
	pub path: Option<PathBuf>,
	#[serde(default)]
	pub capacity: Option<usize>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct I18nLayer {
	#[serde(default)]
	pub default_locale: Option<String>,
	#[serde(default)]
	pub locales_dir: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingLayer {
	#[serde(default)]
	pub level: Option<String>,
	#[serde(default)]
	pub format: Option<String>,
}

impl ConfigLayer {
	/// Merge another layer into this one. Other layer takes precedence.
	pub fn merge(&mut self, other: ConfigLayer) {
		merge_option(
			&mut self.translation,
			other.translation,
			TranslationLayer::merge,
		);
		merge_option(&mut self.cache, other.cache, CacheLayer::merge);
		merge_option(&mut self.i18n, other.i18n, I18nLayer::merge);
		merge_option(&mut self.logging, other.logging, LoggingLayer::merge);
	}
}

fn merge_option<T, F>(target: &mut Option<T>, source: Option<T>, merge_fn: F)
where
	F: FnOnce(&mut T, T),
{
	match (target.as_mut(), source) {
		(Some(t), Some(s)) => merge_fn(t, s),
		(None, Some(s)) => *target = Some(s),
		_ => {}
	}
}

impl TranslationLayer {
	fn merge(&mut self, other: TranslationLayer) {
		if other.base_url.is_some() {
			self.base_url = other.base_url;
		}
		if other.api_key.is_some() {
			self.api_key = other.api_key;
		}
		if other.timeout_secs.is_some() {
			self.timeout_secs = other.timeout_secs;
		}
		if other.source_language.is_some() {
			self.source_language = other.source_language;
		}
	}
}

impl CacheLayer {
	fn merge(&mut self, other: CacheLayer) {
		if other.enabled.is_some() {
			self.enabled = other.enabled;
		}
		if other.path.is_some() {
			self.path = other.path;
		}
		if other.capacity.is_some() {
			self.capacity = other.capacity;
		}
	}
}

impl I18nLayer {
	fn merge(&mut self, other: I18nLayer) {
		if other.default_locale.is_some() {
			self.default_locale = other.default_locale;
		}
		if other.locales_dir.is_some() {
			self.locales_dir = other.locales_dir;
		}
	}
}

impl LoggingLayer {
	fn merge(&mut self, other: LoggingLayer) {
		if other.level.is_some() {
			self.level = other.level;
		}
		if other.format.is_some() {
			self.format = other.format;
		}
	}
}
