// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

use std::path::PathBuf;

/// Errors raised while loading dictionaries.
///
/// Lookups never fail; only loading does.
#[derive(Debug, thiserror::Error)]
pub enum I18nError {
	#[error("failed to read dictionary {path}: {source}")]
	Io {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("invalid JSON in {language} dictionary: {source}")]
	Parse {
		language: String,
		#[source]
		source: serde_json::Error,
	},

	#[error("{language} dictionary must be a JSON object at the top level")]
	NotAnObject { language: String },
}

pub type Result<T> = std::result::Result<T, I18nError>;
