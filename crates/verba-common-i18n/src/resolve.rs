// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale negotiation.

use crate::locale::{locale_info, DEFAULT_LOCALE};

/// Resolve the effective locale from a user preference and a configured
/// default.
///
/// Resolution order:
/// 1. User's preferred locale (if offered)
/// 2. Configured default (if offered)
/// 3. English
///
/// Region subtags are dropped before matching, so `es-MX` and `es_MX` both
/// select `es`. Exact matches are tried first.
///
/// ```
/// use verba_common_i18n::resolve_locale;
///
/// assert_eq!(resolve_locale(Some("es-MX"), "en"), "es");
/// assert_eq!(resolve_locale(None, "fr"), "fr");
/// assert_eq!(resolve_locale(Some("xx"), "yy"), "en");
/// ```
pub fn resolve_locale(user_locale: Option<&str>, default_locale: &str) -> &'static str {
	user_locale
		.and_then(normalize_locale)
		.or_else(|| normalize_locale(default_locale))
		.unwrap_or(DEFAULT_LOCALE)
}

/// Map a language tag onto a supported locale code, dropping any region
/// subtag. Returns `None` when nothing matches; never substitutes a default.
///
/// ```
/// use verba_common_i18n::normalize_locale;
///
/// assert_eq!(normalize_locale("es_MX"), Some("es"));
/// assert_eq!(normalize_locale("de"), None);
/// ```
pub fn normalize_locale(tag: &str) -> Option<&'static str> {
	let tag = tag.trim();
	if let Some(info) = locale_info(tag) {
		return Some(info.code);
	}

	let primary = tag.split(['-', '_']).next()?.to_lowercase();
	locale_info(&primary).map(|info| info.code)
}
