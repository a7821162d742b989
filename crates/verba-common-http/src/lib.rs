// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Shared HTTP client with a consistent User-Agent header.
//!
//! Every outbound request from Verba goes through a client built here so the
//! translation provider can tell Verba traffic apart by platform and version.

use std::time::Duration;

use reqwest::{Client, ClientBuilder};

/// Creates a client builder carrying the standard Verba User-Agent.
///
/// Use this when the caller needs further customisation.
///
/// # Example
/// ```ignore
/// let client = verba_common_http::builder()
///     .connect_timeout(Duration::from_secs(5))
///     .build()?;
/// ```
pub fn builder() -> ClientBuilder {
	Client::builder().user_agent(user_agent())
}

/// Builds a client with the standard User-Agent and an optional overall
/// request timeout. `None` leaves requests unbounded.
pub fn new_client(timeout: Option<Duration>) -> Result<Client, reqwest::Error> {
	let mut builder = builder();
	if let Some(timeout) = timeout {
		builder = builder.timeout(timeout);
	}
	tracing::trace!(timeout_ms = timeout.map(|t| t.as_millis() as u64), "building HTTP client");
	builder.build()
}

/// Returns the standard Verba User-Agent string.
///
/// Format: `verba/{version} ({os}-{arch})`
pub fn user_agent() -> String {
	format!(
		"verba/{} ({}-{})",
		env!("CARGO_PKG_VERSION"),
		std::env::consts::OS,
		std::env::consts::ARCH
	)
}
