// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Error types for remote translation and cache persistence.
//!
//! These never escape [`crate::RemoteTranslator`]; they exist so providers and
//! stores can report what went wrong before the translator logs and falls
//! back to the original text.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TranslateError {
	/// Network-level error during HTTP communication.
	#[error("Network error: {0}")]
	Network(#[from] reqwest::Error),

	/// Request exceeded the configured timeout.
	#[error("Request timed out")]
	Timeout,

	/// Provider answered with a non-success status.
	#[error("Translation API error: {status} - {message}")]
	ApiError { status: u16, message: String },

	/// Body was not JSON or carried no translated string.
	#[error("Invalid response from translation provider: {0}")]
	InvalidResponse(String),

	#[error("Cache store I/O error at {path}: {source}")]
	CacheIo {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("Cache store format error: {0}")]
	CacheFormat(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TranslateError>;
