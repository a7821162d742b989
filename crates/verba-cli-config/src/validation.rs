// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Configuration validation rules.

use tracing::warn;

use crate::runtime::VerbaConfig;
use crate::ConfigError;

/// Validate the configuration.
///
/// Returns Ok(()) if valid, or ConfigError::InvalidValue with details.
pub fn validate_config(config: &VerbaConfig) -> Result<(), ConfigError> {
	validate_translation(config)?;
	validate_cache(config)?;

	Ok(())
}

fn validate_translation(config: &VerbaConfig) -> Result<(), ConfigError> {
	let translation = &config.translation;

	let Some(base_url) = &translation.base_url else {
		return Ok(());
	};

	if !base_url.starts_with("http://") && !base_url.starts_with("https://") {
		return Err(ConfigError::invalid_value(
			"translation.base_url",
			"must start with http:// or https://",
		));
	}

	if translation.api_key.is_none() {
		// Some deployments authenticate at a proxy instead
		warn!(base_url = %base_url, "translation provider has no api_key configured");
	}

	Ok(())
}

fn validate_cache(config: &VerbaConfig) -> Result<(), ConfigError> {
	if config.cache.capacity == 0 {
		return Err(ConfigError::invalid_value(
			"cache.capacity",
			"must be at least 1",
		));
	}

	Ok(())
}
