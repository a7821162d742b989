// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration sources: files, environment, CLI, defaults.

use std::path::PathBuf;

use tracing::{debug, trace, warn};
use verba_common_config::load_secret_env;

use crate::layer::*;
use crate::paths::{PathsConfig, SYSTEM_CONFIG_FILE};
use crate::ConfigError;

/// Environment variable holding the translation API key (or `_FILE` path).
pub const API_KEY_ENV: &str = "VERBA_TRANSLATION_API_KEY";

/// Source precedence levels (higher = overrides lower).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Precedence {
	Defaults = 10,
	SystemFile = 20,
	UserFile = 30,
	CustomFile = 40,
	Environment = 50,
	Cli = 60,
}

/// Trait for configuration sources.
pub trait ConfigSource: Send + Sync {
	/// Name for logging
	fn name(&self) -> &'static str;

	/// Precedence level
	fn precedence(&self) -> Precedence;

	/// Load configuration layer from this source
	fn load(&self) -> Result<ConfigLayer, ConfigError>;
}

/// Built-in defaults source.
pub struct DefaultsSource;

impl ConfigSource for DefaultsSource {
	fn name(&self) -> &'static str {
		"defaults"
	}
	fn precedence(&self) -> Precedence {
		Precedence::Defaults
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		debug!("loading defaults");
		// Defaults are applied when the runtime config is built
		Ok(ConfigLayer::default())
	}
}

/// File-based configuration source (TOML).
pub struct FileSource {
	path: PathBuf,
	precedence: Precedence,
	name: &'static str,
}

impl FileSource {
	/// System config: /etc/verba/config.toml
	pub fn system() -> Self {
		Self {
			path: PathBuf::from(SYSTEM_CONFIG_FILE),
			precedence: Precedence::SystemFile,
			name: "system-config",
		}
	}

	/// User config: ~/.config/verba/config.toml
	pub fn user(paths: &PathsConfig) -> Self {
		Self {
			path: paths.user_config_file.clone(),
			precedence: Precedence::UserFile,
			name: "user-config",
		}
	}

	/// Custom file path with specified precedence
	pub fn custom(path: PathBuf, precedence: Precedence, name: &'static str) -> Self {
		Self {
			path,
			precedence,
			name,
		}
	}
}

impl ConfigSource for FileSource {
	fn name(&self) -> &'static str {
		self.name
	}
	fn precedence(&self) -> Precedence {
		self.precedence
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		if !self.path.exists() {
			debug!(path = %self.path.display(), source = self.name, "config file not found, skipping");
			return Ok(ConfigLayer::default());
		}

		debug!(path = %self.path.display(), source = self.name, "loading config file");

		let content = std::fs::read_to_string(&self.path)?;
		let layer: ConfigLayer = toml::from_str(&content).map_err(|e| ConfigError::TomlParse {
			path: self.path.clone(),
			source: e,
		})?;

		trace!(source = self.name, "parsed config layer");
		Ok(layer)
	}
}

/// Environment variable source.
///
/// Convention: VERBA_<SECTION>_<FIELD>. The API key additionally accepts
/// `VERBA_TRANSLATION_API_KEY_FILE`.
pub struct EnvSource;

impl ConfigSource for EnvSource {
	fn name(&self) -> &'static str {
		"environment"
	}
	fn precedence(&self) -> Precedence {
		Precedence::Environment
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		debug!("loading environment variables");
		let mut layer = layer_from_vars(std::env::vars());

		if let Some(secret) = load_secret_env(API_KEY_ENV)? {
			trace!("loaded translation API key from environment");
			layer
				.translation
				.get_or_insert_with(TranslationLayer::default)
				.api_key = Some(secret);
		}

		Ok(layer)
	}
}

/// Build a layer from `VERBA_*` variables, ignoring everything else.
///
/// Unparseable numbers and booleans are logged and skipped.
pub(crate) fn layer_from_vars(vars: impl IntoIterator<Item = (String, String)>) -> ConfigLayer {
	let mut layer = ConfigLayer::default();

	for (key, value) in vars {
		if !key.starts_with("VERBA_") {
			continue;
		}

		let value = value.trim().to_string();
		if value.is_empty() {
			continue;
		}

		trace!(key = %key, "processing env var");

		match key.as_str() {
			// Translation provider
			"VERBA_TRANSLATION_BASE_URL" => {
				translation(&mut layer).base_url = Some(value);
			}
			"VERBA_TRANSLATION_TIMEOUT_SECS" => {
				if let Some(v) = parse_var(&key, &value) {
					translation(&mut layer).timeout_secs = Some(v);
				}
			}
			"VERBA_TRANSLATION_SOURCE_LANGUAGE" => {
				translation(&mut layer).source_language = Some(value);
			}

			// Cache
			"VERBA_CACHE_ENABLED" => {
				if let Some(v) = parse_var(&key, &value) {
					cache(&mut layer).enabled = Some(v);
				}
			}
			"VERBA_CACHE_PATH" => {
				cache(&mut layer).path = Some(PathBuf::from(value));
			}
			"VERBA_CACHE_CAPACITY" => {
				if let Some(v) = parse_var(&key, &value) {
					cache(&mut layer).capacity = Some(v);
				}
			}

			// Dictionaries
			"VERBA_DEFAULT_LOCALE" => {
				i18n(&mut layer).default_locale = Some(value);
			}
			"VERBA_LOCALES_DIR" => {
				i18n(&mut layer).locales_dir = Some(PathBuf::from(value));
			}

			// Logging
			"VERBA_LOG_LEVEL" => {
				logging(&mut layer).level = Some(value);
			}
			"VERBA_LOG_FORMAT" => {
				logging(&mut layer).format = Some(value);
			}

			_ => {
				// Unknown VERBA_ variable, ignore
			}
		}
	}

	layer
}

fn parse_var<T: std::str::FromStr>(key: &str, value: &str) -> Option<T> {
	match value.parse() {
		Ok(v) => Some(v),
		Err(_) => {
			warn!(key = %key, value = %value, "ignoring unparseable environment variable");
			None
		}
	}
}

fn translation(layer: &mut ConfigLayer) -> &mut TranslationLayer {
	layer
		.translation
		.get_or_insert_with(TranslationLayer::default)
}

fn cache(layer: &mut ConfigLayer) -> &mut CacheLayer {
	layer.cache.get_or_insert_with(CacheLayer::default)
}

fn i18n(layer: &mut ConfigLayer) -> &mut I18nLayer {
	layer.i18n.get_or_insert_with(I18nLayer::default)
}

fn logging(layer: &mut ConfigLayer) -> &mut LoggingLayer {
	layer.logging.get_or_insert_with(LoggingLayer::default)
}

/// CLI override source.
pub struct CliSource {
	overrides: CliOverrides,
}

/// CLI argument overrides.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
	pub log_level: Option<String>,
	pub log_format: Option<String>,
	pub config_file: Option<PathBuf>,
}

impl CliSource {
	pub fn new(overrides: CliOverrides) -> Self {
		Self { overrides }
	}
}

impl ConfigSource for CliSource {
	fn name(&self) -> &'static str {
		"cli"
	}
	fn precedence(&self) -> Precedence {
		Precedence::Cli
	}

	fn load(&self) -> Result<ConfigLayer, ConfigError> {
		debug!("loading CLI overrides");
		let mut layer = ConfigLayer::default();

		if let Some(ref level) = self.overrides.log_level {
			logging(&mut layer).level = Some(level.clone());
		}

		if let Some(ref format) = self.overrides.log_format {
			logging(&mut layer).format = Some(format.clone());
		}

		Ok(layer)
	}
}
