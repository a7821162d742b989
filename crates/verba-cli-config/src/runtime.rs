// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Runtime configuration types with resolved defaults.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;
use tracing::warn;
use verba_common_config::SecretString;
use verba_common_i18n::{is_supported, DEFAULT_LOCALE};

use crate::layer::*;
use crate::paths::PathsConfig;
use crate::ConfigError;

/// File name of the persisted translation cache inside the cache directory.
pub const DEFAULT_CACHE_FILE: &str = "translations.json";

/// Number of translations kept when no capacity is configured.
pub const DEFAULT_CACHE_CAPACITY: usize = 500;

/// The final, validated configuration for Verba.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VerbaConfig {
	pub translation: TranslationConfig,
	pub cache: CacheConfig,
	pub i18n: I18nConfig,
	pub logging: LoggingConfig,

	/// Resolved XDG paths (not serialized)
	#[serde(skip)]
	pub paths: PathsConfig,
}

#[derive(Clone, Serialize, Deserialize)]
pub struct TranslationConfig {
	pub base_url: Option<String>,
	pub api_key: Option<SecretString>,
	/// Zero means no timeout.
	pub timeout_secs: u64,
	pub source_language: String,
}

impl TranslationConfig {
	pub fn timeout(&self) -> Option<Duration> {
		(self.timeout_secs > 0).then(|| Duration::from_secs(self.timeout_secs))
	}
}

impl std::fmt::Debug for TranslationConfig {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("TranslationConfig")
			.field("base_url", &self.base_url)
			.field("api_key", &self.api_key)
			.field("timeout_secs", &self.timeout_secs)
			.field("source_language", &self.source_language)
			.finish()
	}
}

impl Default for TranslationConfig {
	fn default() -> Self {
		Self {
			base_url: None,
			api_key: None,
			timeout_secs: 0,
			source_language: DEFAULT_LOCALE.to_string(),
		}
	}
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
	pub enabled: bool,
	pub path: PathBuf,
	pub capacity: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct I18nConfig {
	pub default_locale: String,
	pub locales_dir: Option<PathBuf>,
}

impl Default for I18nConfig {
	fn default() -> Self {
		Self {
			default_locale: DEFAULT_LOCALE.to_string(),
			locales_dir: None,
		}
	}
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
	pub level: LogLevel,
	pub format: LogFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
	Error,
	Warn,
	#[default]
	Info,
	Debug,
	Trace,
}

impl LogLevel {
	pub fn as_str(&self) -> &'static str {
		match self {
			LogLevel::Error => "error",
			LogLevel::Warn => "warn",
			LogLevel::Info => "info",
			LogLevel::Debug => "debug",
			LogLevel::Trace => "trace",
		}
	}
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
	#[default]
	Pretty,
	Json,
	Compact,
}

impl VerbaConfig {
	/// Build runtime config from a merged layer and paths.
	pub fn from_layer(layer: ConfigLayer, paths: PathsConfig) -> Result<Self, ConfigError> {
		let translation = build_translation_config(layer.translation);
		let cache = build_cache_config(layer.cache, &paths);
		let i18n = build_i18n_config(layer.i18n, &paths);
		let logging = build_logging_config(layer.logging);

		Ok(Self {
			translation,
			cache,
			i18n,
			logging,
			paths,
		})
	}
}

fn build_translation_config(layer: Option<TranslationLayer>) -> TranslationConfig {
	let layer = layer.unwrap_or_default();
	TranslationConfig {
		base_url: layer.base_url.filter(|url| !url.trim().is_empty()),
		api_key: layer.api_key,
		timeout_secs: layer.timeout_secs.unwrap_or(0),
		source_language: layer
			.source_language
			.unwrap_or_else(|| DEFAULT_LOCALE.to_string()),
	}
}

fn build_cache_config(layer: Option<CacheLayer>, paths: &PathsConfig) -> CacheConfig {
	let layer = layer.unwrap_or_default();
	CacheConfig {
		enabled: layer.enabled.unwrap_or(true),
		path: layer
			.path
			.map(|p| paths.expand_home(&p))
			.unwrap_or_else(|| paths.cache_dir.join(DEFAULT_CACHE_FILE)),
		capacity: layer.capacity.unwrap_or(DEFAULT_CACHE_CAPACITY),
	}
}

fn build_i18n_config(layer: Option<I18nLayer>, paths: &PathsConfig) -> I18nConfig {
	let layer = layer.unwrap_or_default();

	let default_locale = match layer.default_locale {
		Some(code) if is_supported(&code) => code,
		Some(code) => {
			warn!(locale = %code, "unsupported default_locale, falling back to English");
			DEFAULT_LOCALE.to_string()
		}
		None => DEFAULT_LOCALE.to_string(),
	};

	I18nConfig {
		default_locale,
		locales_dir: layer.locales_dir.map(|p| paths.expand_home(&p)),
	}
}

fn build_logging_config(layer: Option<LoggingLayer>) -> LoggingConfig {
	let layer = layer.unwrap_or_default();
	LoggingConfig {
		level: parse_log_level(layer.level.as_deref()),
		format: parse_log_format(layer.format.as_deref()),
	}
}

fn parse_log_level(s: Option<&str>) -> LogLevel {
	match s {
		Some("error") => LogLevel::Error,
		Some("warn") => LogLevel::Warn,
		Some("info") => LogLevel::Info,
		Some("debug") => LogLevel::Debug,
		Some("trace") => LogLevel::Trace,
		_ => LogLevel::Info,
	}
}

fn parse_log_format(s: Option<&str>) -> LogFormat {
	match s {
		Some("json") => LogFormat::Json,
		Some("compact") => LogFormat::Compact,
		Some("pretty") => LogFormat::Pretty,
		_ => LogFormat::Pretty,
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn paths() -> PathsConfig {
		PathsConfig {
			user_config_file: "/tmp/test/config.toml".into(),
			system_config_file: "/etc/verba/config.toml".into(),
			cache_dir: "/tmp/test/cache".into(),
			home_dir: Some("/home/test".into()),
		}
	}

	#[test]
	fn test_defaults_from_empty_layer() {
		let config = VerbaConfig::from_layer(ConfigLayer::default(), paths()).unwrap();

		assert!(config.translation.base_url.is_none());
		assert!(config.translation.timeout().is_none());
		assert_eq!(config.translation.source_language, "en");
		assert!(config.cache.enabled);
		assert_eq!(config.cache.capacity, 500);
		assert_eq!(
			config.cache.path,
			PathBuf::from("/tmp/test/cache/translations.json")
		);
		assert_eq!(config.i18n.default_locale, "en");
		assert_eq!(config.logging.level, LogLevel::Info);
		assert_eq!(config.logging.format, LogFormat::Pretty);
	}

	#[test]
	fn test_values_from_layer() {
		let layer: ConfigLayer = toml::from_str(
			r#"
			[translation]
			base_url = "https://api.example.com"
			timeout_secs = 8

			[cache]
			path = "~/verba/cache.json"

			[i18n]
			default_locale = "ar"

			[logging]
			level = "warn"
			format = "compact"
			"#,
		)
		.unwrap();

		let config = VerbaConfig::from_layer(layer, paths()).unwrap();
		assert_eq!(config.translation.timeout(), Some(Duration::from_secs(8)));
		assert_eq!(
			config.cache.path,
			PathBuf::from("/home/test/verba/cache.json")
		);
		assert_eq!(config.i18n.default_locale, "ar");
		assert_eq!(config.logging.level, LogLevel::Warn);
		assert_eq!(config.logging.format, LogFormat::Compact);
	}

	#[test]
	fn test_unsupported_locale_falls_back_to_english() {
		let layer = ConfigLayer {
			i18n: Some(I18nLayer {
				default_locale: Some("klingon".to_string()),
				locales_dir: None,
			}),
			..Default::default()
		};
		let config = VerbaConfig::from_layer(layer, paths()).unwrap();
		assert_eq!(config.i18n.default_locale, "en");
	}

	#[test]
	fn test_blank_base_url_is_unset() {
		let layer = ConfigLayer {
			translation: Some(TranslationLayer {
				base_url: Some("  ".to_string()),
				..Default::default()
			}),
			..Default::default()
		};
		let config = VerbaConfig::from_layer(layer, paths()).unwrap();
		assert!(config.translation.base_url.is_none());
	}

	#[test]
	fn test_unknown_log_values_use_defaults() {
		assert_eq!(parse_log_level(Some("loud")), LogLevel::Info);
		assert_eq!(parse_log_format(Some("xml")), LogFormat::Pretty);
		assert_eq!(LogLevel::Debug.as_str(), "debug");
	}

	#[test]
	fn test_serialized_config_redacts_api_key() {
		let layer = ConfigLayer {
			translation: Some(TranslationLayer {
				api_key: Some(SecretString::new("sk-live".to_string())),
				..Default::default()
			}),
			..Default::default()
		};
		let config = VerbaConfig::from_layer(layer, paths()).unwrap();
		let json = serde_json::to_string(&config).unwrap();
		assert!(!json.contains("sk-live"));
		assert!(json.contains("[REDACTED]"));
	}
}
