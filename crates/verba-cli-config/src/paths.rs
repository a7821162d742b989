// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! XDG Base Directory compliant path resolution.

use std::path::{Path, PathBuf};

use crate::ConfigError;

/// Resolved XDG paths for Verba.
#[derive(Debug, Clone)]
pub struct PathsConfig {
	/// User config file: ~/.config/verba/config.toml
	pub user_config_file: PathBuf,
	/// System config file: /etc/verba/config.toml
	pub system_config_file: PathBuf,
	/// Cache directory: ~/.cache/verba/
	pub cache_dir: PathBuf,
	/// Home directory, for `~` expansion in configured paths
	pub home_dir: Option<PathBuf>,
}

impl PathsConfig {
	/// Get the config directory (parent of user_config_file)
	pub fn config_dir(&self) -> PathBuf {
		self
			.user_config_file
			.parent()
			.map(|p| p.to_path_buf())
			.unwrap_or_else(|| self.user_config_file.clone())
	}

	/// Expand a leading `~` against the home directory.
	pub fn expand_home(&self, path: &Path) -> PathBuf {
		match (path.strip_prefix("~"), &self.home_dir) {
			(Ok(rest), Some(home)) => home.join(rest),
			_ => path.to_path_buf(),
		}
	}
}

impl Default for PathsConfig {
	fn default() -> Self {
		Self {
			user_config_file: PathBuf::from("~/.config/verba/config.toml"),
			system_config_file: PathBuf::from(SYSTEM_CONFIG_FILE),
			cache_dir: PathBuf::from("~/.cache/verba"),
			home_dir: None,
		}
	}
}

pub(crate) const SYSTEM_CONFIG_FILE: &str = "/etc/verba/config.toml";

/// Resolve XDG paths according to the Base Directory Specification.
///
/// Uses environment variables if set, otherwise falls back to defaults:
/// - XDG_CONFIG_HOME or ~/.config
/// - XDG_CACHE_HOME or ~/.cache
pub fn resolve_xdg_paths() -> Result<PathsConfig, ConfigError> {
	let home = dirs::home_dir().ok_or(ConfigError::HomeDirNotFound)?;

	let config_home = std::env::var_os("XDG_CONFIG_HOME")
		.map(PathBuf::from)
		.unwrap_or_else(|| home.join(".config"));

	let cache_home = std::env::var_os("XDG_CACHE_HOME")
		.map(PathBuf::from)
		.unwrap_or_else(|| home.join(".cache"));

	tracing::debug!(
			config_home = %config_home.display(),
			cache_home = %cache_home.display(),
			"resolved XDG paths"
	);

	Ok(PathsConfig {
		user_config_file: config_home.join("verba/config.toml"),
		system_config_file: PathBuf::from(SYSTEM_CONFIG_FILE),
		cache_dir: cache_home.join("verba"),
		home_dir: Some(home),
	})
}
