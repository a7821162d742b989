// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration registry - manages sources and merges layers.

use tracing::{debug, info};

use crate::layer::ConfigLayer;
use crate::paths::PathsConfig;
use crate::runtime::VerbaConfig;
use crate::sources::ConfigSource;
use crate::validation::validate_config;
use crate::ConfigError;

/// Registry that manages configuration sources and merges them.
pub struct ConfigRegistry {
	sources: Vec<Box<dyn ConfigSource>>,
}

impl ConfigRegistry {
	/// Create a new empty registry.
	pub fn new() -> Self {
		Self {
			sources: Vec::new(),
		}
	}

	/// Register a configuration source.
	pub fn register(&mut self, source: Box<dyn ConfigSource>) {
		debug!(source = source.name(), precedence = ?source.precedence(), "registering config source");
		self.sources.push(source);
	}

	/// Load configuration from all sources, merge, and validate.
	///
	/// Sources are sorted by precedence (lowest first) and merged so higher
	/// precedence sources override lower ones. Missing files contribute an
	/// empty layer; unreadable or malformed ones fail the load.
	pub fn load(&self, paths: PathsConfig) -> Result<VerbaConfig, ConfigError> {
		let mut sorted_sources: Vec<_> = self.sources.iter().collect();
		sorted_sources.sort_by_key(|s| s.precedence());

		info!(
			source_count = sorted_sources.len(),
			"loading configuration from sources"
		);

		let mut merged = ConfigLayer::default();
		for source in &sorted_sources {
			let layer = source.load()?;
			debug!(source = source.name(), "merging config layer");
			merged.merge(layer);
		}

		let config = VerbaConfig::from_layer(merged, paths)?;

		validate_config(&config)?;

		info!(
			remote_translation = config.translation.base_url.is_some(),
			cache_enabled = config.cache.enabled,
			default_locale = %config.i18n.default_locale,
			log_level = ?config.logging.level,
			"configuration loaded successfully"
		);

		Ok(config)
	}

	/// Get the number of registered sources.
	pub fn source_count(&self) -> usize {
		self.sources.len()
	}
}

impl Default for ConfigRegistry {
	fn default() -> Self {
		Self::new()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::layer::{CacheLayer, LoggingLayer};
	use crate::runtime::LogLevel;
	use crate::sources::{CliOverrides, CliSource, DefaultsSource, FileSource, Precedence};
	use std::fs;

	fn paths() -> PathsConfig {
		PathsConfig {
			user_config_file: "/tmp/test/config.toml".into(),
			system_config_file: "/etc/verba/config.toml".into(),
			cache_dir: "/tmp/test/cache".into(),
			home_dir: None,
		}
	}

	struct LayerSource {
		name: &'static str,
		precedence: Precedence,
		layer: ConfigLayer,
	}

	impl ConfigSource for LayerSource {
		fn name(&self) -> &'static str {
			self.name
		}
		fn precedence(&self) -> Precedence {
			self.precedence
		}

		fn load(&self) -> Result<ConfigLayer, ConfigError> {
			Ok(self.layer.clone())
		}
	}

	fn capacity_source(name: &'static str, precedence: Precedence, capacity: usize) -> Box<LayerSource> {
		Box::new(LayerSource {
			name,
			precedence,
			layer: ConfigLayer {
				cache: Some(CacheLayer {
					capacity: Some(capacity),
					..Default::default()
				}),
				..Default::default()
			},
		})
	}

	#[test]
	fn test_registry_registers_sources() {
		let mut registry = ConfigRegistry::new();
		assert_eq!(registry.source_count(), 0);

		registry.register(Box::new(DefaultsSource));
		assert_eq!(registry.source_count(), 1);
	}

	#[test]
	fn test_registry_loads_with_defaults() {
		let mut registry = ConfigRegistry::new();
		registry.register(Box::new(DefaultsSource));

		let config = registry.load(paths()).unwrap();
		assert_eq!(config.cache.capacity, 500);
		assert_eq!(config.i18n.default_locale, "en");
	}

	#[test]
	fn test_precedence_merge_order() {
		let mut registry = ConfigRegistry::new();

		// Registered out of order; the registry sorts
		registry.register(capacity_source("cli", Precedence::Cli, 30));
		registry.register(capacity_source("env", Precedence::Environment, 20));
		registry.register(capacity_source("user", Precedence::UserFile, 10));

		let config = registry.load(paths()).unwrap();
		assert_eq!(config.cache.capacity, 30);
	}

	#[test]
	fn test_env_beats_file_and_cli_beats_env() {
		let dir = tempfile::tempdir().unwrap();
		let file = dir.path().join("config.toml");
		fs::write(
			&file,
			"[logging]\nlevel = \"warn\"\nformat = \"json\"\n\n[cache]\ncapacity = 10\n",
		)
		.unwrap();

		let mut registry = ConfigRegistry::new();
		registry.register(Box::new(FileSource::custom(
			file,
			Precedence::UserFile,
			"user-config",
		)));
		registry.register(Box::new(LayerSource {
			name: "environment",
			precedence: Precedence::Environment,
			layer: ConfigLayer {
				logging: Some(LoggingLayer {
					level: Some("debug".to_string()),
					format: None,
				}),
				cache: Some(CacheLayer {
					capacity: Some(20),
					..Default::default()
				}),
				..Default::default()
			},
		}));
		registry.register(Box::new(CliSource::new(CliOverrides {
			log_level: Some("trace".to_string()),
			..Default::default()
		})));

		let config = registry.load(paths()).unwrap();
		assert_eq!(config.logging.level, LogLevel::Trace);
		assert_eq!(config.logging.format, crate::LogFormat::Json);
		assert_eq!(config.cache.capacity, 20);
	}

	#[test]
	fn test_invalid_merged_config_is_rejected() {
		let mut registry = ConfigRegistry::new();
		registry.register(capacity_source("user", Precedence::UserFile, 0));

		assert!(matches!(
			registry.load(paths()),
			Err(ConfigError::InvalidValue { .. })
		));
	}

	#[test]
	fn test_malformed_file_fails_load() {
		let dir = tempfile::tempdir().unwrap();
		let file = dir.path().join("config.toml");
		fs::write(&file, "not = [valid").unwrap();

		let mut registry = ConfigRegistry::new();
		registry.register(Box::new(FileSource::custom(
			file,
			Precedence::CustomFile,
			"custom-config",
		)));

		assert!(matches!(
			registry.load(paths()),
			Err(ConfigError::TomlParse { .. })
		));
	}
}
