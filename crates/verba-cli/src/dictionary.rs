// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Static dictionary commands: `resolve`, `locales`, `missing`.

use anyhow::{Context, Result};
use tracing::debug;
use verba_cli_config::I18nConfig;
use verba_common_i18n::{available_locales, interpolate, normalize_locale, Catalog};

/// Built-in dictionaries, overlaid by any found in the configured directory.
pub fn load_catalog(i18n: &I18nConfig) -> Result<Catalog> {
	let mut catalog = Catalog::builtin().clone();

	if let Some(dir) = &i18n.locales_dir {
		let overlay = Catalog::load_dir(dir)
			.with_context(|| format!("failed to load dictionaries from {}", dir.display()))?;
		debug!(dir = %dir.display(), languages = ?overlay.languages(), "loaded dictionary overlay");
		catalog.extend(overlay);
	}

	Ok(catalog)
}

/// Split `name=value` arguments.
pub fn parse_vars(vars: &[String]) -> Result<Vec<(String, String)>> {
	vars
		.iter()
		.map(|var| {
			var
				.split_once('=')
				.map(|(name, value)| (name.to_string(), value.to_string()))
				.with_context(|| format!("invalid variable {var:?}, expected name=value"))
		})
		.collect()
}

/// Pick the dictionary for a requested language.
///
/// A language the catalog holds is used as is. Otherwise a region subtag is
/// dropped (`es-MX` finds `es`). Anything still unknown passes through
/// unchanged, so lookup falls back to English rather than the default locale.
fn effective_language<'a>(catalog: &Catalog, requested: &'a str) -> &'a str {
	if catalog.get(requested).is_some() {
		return requested;
	}
	normalize_locale(requested).unwrap_or(requested)
}

pub fn resolve(
	catalog: &Catalog,
	i18n: &I18nConfig,
	key: &str,
	language: Option<&str>,
	fallback: Option<&str>,
	vars: &[(String, String)],
) -> String {
	let language = match language {
		Some(requested) => effective_language(catalog, requested),
		None => i18n.default_locale.as_str(),
	};

	let text = catalog.resolve(key, language, fallback);
	let args: Vec<(&str, &str)> = vars
		.iter()
		.map(|(name, value)| (name.as_str(), value.as_str()))
		.collect();
	interpolate(text, &args)
}

pub fn locales_report(json: bool) -> Result<String> {
	if json {
		let locales: Vec<_> = available_locales()
			.iter()
			.map(|l| {
				serde_json::json!({
					"code": l.code,
					"name": l.name,
					"native_name": l.native_name,
					"direction": l.direction.as_html_dir(),
				})
			})
			.collect();
		return Ok(serde_json::to_string_pretty(&locales)?);
	}

	let lines: Vec<String> = available_locales()
		.iter()
		.map(|l| {
			format!(
				"{:<4} {:<12} {:<12} {}",
				l.code,
				l.name,
				l.native_name,
				l.direction.as_html_dir()
			)
		})
		.collect();
	Ok(lines.join("\n"))
}

pub fn missing_report(catalog: &Catalog, language: &str) -> String {
	catalog
		.missing_keys(effective_language(catalog, language))
		.join("\n")
}
