// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Translation provider abstraction and its HTTP implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, trace, warn};
use verba_common_config::SecretString;

use crate::error::{Result, TranslateError};

/// Something that turns text in one language into text in another.
#[async_trait]
pub trait TranslationProvider: Send + Sync {
	/// Translate `text` from `source` into `target`.
	async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String>;
}

#[derive(Debug, Serialize)]
struct TranslateApiRequest<'a> {
	text: &'a str,
	source: &'a str,
	target: &'a str,
}

#[derive(Debug, Deserialize)]
struct TranslateApiResponse {
	translated: Option<String>,
	translation: Option<String>,
	text: Option<String>,
}

impl TranslateApiResponse {
	/// First non-empty of `translated`, `translation`, `text`.
	fn into_translation(self) -> Option<String> {
		[self.translated, self.translation, self.text]
			.into_iter()
			.flatten()
			.find(|s| !s.is_empty())
	}
}

/// Client for the platform's translation endpoint.
///
/// Sends `POST {base_url}/translate` with a JSON body of `text`, `source` and
/// `target`, authenticated with a bearer token when one is configured.
#[derive(Debug, Clone)]
pub struct HttpTranslationProvider {
	http_client: Client,
	endpoint: String,
	api_key: Option<SecretString>,
}

/// Builder for [`HttpTranslationProvider`].
#[derive(Debug, Default)]
pub struct HttpTranslationProviderBuilder {
	base_url: String,
	api_key: Option<SecretString>,
	timeout: Option<Duration>,
}

impl HttpTranslationProviderBuilder {
	pub fn api_key(mut self, api_key: SecretString) -> Self {
		self.api_key = Some(api_key);
		self
	}

	/// Bound each request. Without this, a hanging request delays only its
	/// own result.
	pub fn timeout(mut self, timeout: Duration) -> Self {
		self.timeout = Some(timeout);
		self
	}

	pub fn build(self) -> Result<HttpTranslationProvider> {
		let http_client = verba_common_http::new_client(self.timeout)?;
		let endpoint = format!("{}/translate", self.base_url.trim_end_matches('/'));

		if self.api_key.is_none() {
			warn!(endpoint = %endpoint, "translation provider configured without an API key");
		}

		Ok(HttpTranslationProvider {
			http_client,
			endpoint,
			api_key: self.api_key,
		})
	}
}

impl HttpTranslationProvider {
	pub fn builder(base_url: impl Into<String>) -> HttpTranslationProviderBuilder {
		HttpTranslationProviderBuilder {
			base_url: base_url.into(),
			..Default::default()
		}
	}

	pub fn endpoint(&self) -> &str {
		&self.endpoint
	}
}

#[async_trait]
impl TranslationProvider for HttpTranslationProvider {
	#[instrument(skip(self, text), fields(chars = text.chars().count()))]
	async fn translate(&self, text: &str, source: &str, target: &str) -> Result<String> {
		let body = TranslateApiRequest {
			text,
			source,
			target,
		};

		debug!(url = %self.endpoint, "Sending translation request");

		let mut request = self.http_client.post(&self.endpoint).json(&body);
		if let Some(api_key) = &self.api_key {
			request = request.bearer_auth(api_key.expose());
		}

		let response = request.send().await.map_err(transport_error)?;

		let status = response.status();
		debug!(status = %status, "Received translation response");

		if !status.is_success() {
			let message = response.text().await.unwrap_or_default();
			return Err(TranslateError::ApiError {
				status: status.as_u16(),
				message,
			});
		}

		let body = response.text().await.map_err(transport_error)?;
		trace!(body = %body, "Response body");

		let parsed: TranslateApiResponse = serde_json::from_str(&body)
			.map_err(|e| TranslateError::InvalidResponse(format!("JSON parse error: {e}")))?;

		parsed.into_translation().ok_or_else(|| {
			TranslateError::InvalidResponse(
				"no translated, translation or text field in response".to_string(),
			)
		})
	}
}

fn transport_error(e: reqwest::Error) -> TranslateError {
	if e.is_timeout() {
		TranslateError::Timeout
	} else {
		TranslateError::Network(e)
	}
}
