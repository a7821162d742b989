// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Default configuration file generation.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::ConfigError;

/// Default configuration file template.
///
/// This template is written to ~/.config/verba/config.toml when no user config exists.
pub const DEFAULT_CONFIG_TEMPLATE: &str = r#"#
# Verba Configuration File
# Location: ~/.config/verba/config.toml
#
# This file was auto-generated with sensible defaults.
#

# =============================================================================
# Remote Translation
# =============================================================================

[translation]
# Base URL of the translation service. Requests go to {base_url}/translate.
# Remote translation is disabled until this is set.
# base_url = "https://api.example.com"

# API key - prefer environment variable VERBA_TRANSLATION_API_KEY
# or VERBA_TRANSLATION_API_KEY_FILE
# api_key = "..."

# Per-request timeout in seconds. 0 waits indefinitely.
timeout_secs = 0

# Language that texts are written in
source_language = "en"

# =============================================================================
# Translation Cache
# =============================================================================

[cache]
# Persist remote translations between runs
enabled = true

# Where the cache is stored (defaults to ~/.cache/verba/translations.json)
# path = "~/.cache/verba/translations.json"

# Maximum number of cached translations; the oldest are evicted first
capacity = 500

# =============================================================================
# Dictionaries
# =============================================================================

[i18n]
# Locale used when none is requested
default_locale = "en"

# Directory of <lang>.json dictionaries replacing the built-in ones
# locales_dir = "/path/to/locales"

# =============================================================================
# Logging Configuration
# =============================================================================

[logging]
# Log level: error, warn, info, debug, trace
level = "info"

# Log format: pretty, json, compact
format = "pretty"
"#;

/// Ensure the config directory exists and create a default config file if none exists.
///
/// Returns `true` if a new config file was created, `false` if one already existed.
pub fn ensure_default_config(config_file_path: &Path) -> Result<bool, ConfigError> {
	if config_file_path.exists() {
		debug!(path = %config_file_path.display(), "config file already exists");
		return Ok(false);
	}

	if let Some(parent) = config_file_path.parent() {
		if !parent.exists() {
			debug!(path = %parent.display(), "creating config directory");
			fs::create_dir_all(parent)?;
		}
	}

	info!(path = %config_file_path.display(), "creating default config file");
	fs::write(config_file_path, DEFAULT_CONFIG_TEMPLATE)?;

	Ok(true)
}
