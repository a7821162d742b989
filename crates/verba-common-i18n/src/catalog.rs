// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Dictionary catalog and the fallback chain.

use std::collections::HashMap;
use std::path::Path;

use once_cell::sync::Lazy;

use crate::dictionary::TranslationDictionary;
use crate::error::{I18nError, Result};
use crate::locale::DEFAULT_LOCALE;

const BUILTIN: &[(&str, &str)] = &[
	("en", include_str!("../locales/en.json")),
	("es", include_str!("../locales/es.json")),
	("fr", include_str!("../locales/fr.json")),
];

static BUILTIN_CATALOG: Lazy<Catalog> = Lazy::new(|| {
	let mut catalog = Catalog::new();
	for (language, json) in BUILTIN {
		match TranslationDictionary::from_json(language, json) {
			Ok(dict) => catalog.insert(*language, dict),
			Err(e) => tracing::error!(language = %language, error = %e, "failed to parse built-in dictionary"),
		}
	}
	catalog
});

/// Language code to dictionary mapping.
///
/// Dictionaries are immutable once inserted; replacing a language swaps the
/// whole dictionary.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
	dictionaries: HashMap<String, TranslationDictionary>,
}

impl Catalog {
	pub fn new() -> Self {
		Self::default()
	}

	/// The dictionaries shipped with Verba.
	pub fn builtin() -> &'static Catalog {
		&BUILTIN_CATALOG
	}

	pub fn insert(&mut self, language: impl Into<String>, dictionary: TranslationDictionary) {
		self.dictionaries.insert(language.into(), dictionary);
	}

	/// Parse `json` and register it as `language`.
	pub fn insert_json(&mut self, language: &str, json: &str) -> Result<()> {
		let dictionary = TranslationDictionary::from_json(language, json)?;
		self.insert(language, dictionary);
		Ok(())
	}

	/// Load every `<code>.json` file in `dir`.
	///
	/// Files that are not `.json` are skipped. A malformed file fails the
	/// whole load so broken dictionaries are caught at startup.
	pub fn load_dir(dir: impl AsRef<Path>) -> Result<Self> {
		let dir = dir.as_ref();

		let mut catalog = Self::new();
		let entries = std::fs::read_dir(dir).map_err(|source| io_error(dir, source))?;
		for entry in entries {
			let path = entry.map_err(|source| io_error(dir, source))?.path();
			if path.extension().and_then(|e| e.to_str()) != Some("json") {
				continue;
			}
			let Some(language) = path.file_stem().and_then(|s| s.to_str()) else {
				continue;
			};

			let json = std::fs::read_to_string(&path).map_err(|source| io_error(&path, source))?;
			catalog.insert_json(language, &json)?;
			tracing::debug!(language = %language, path = %path.display(), "loaded dictionary");
		}

		Ok(catalog)
	}

	/// Overlay `other` on top of this catalog, language by language.
	pub fn extend(&mut self, other: Catalog) {
		self.dictionaries.extend(other.dictionaries);
	}

	pub fn get(&self, language: &str) -> Option<&TranslationDictionary> {
		self.dictionaries.get(language)
	}

	/// Languages with a loaded dictionary, sorted.
	pub fn languages(&self) -> Vec<&str> {
		let mut languages: Vec<&str> = self.dictionaries.keys().map(String::as_str).collect();
		languages.sort_unstable();
		languages
	}

	/// Resolve `key` for `language`.
	///
	/// Falls back to English, then to `fallback`, then to the key itself. A
	/// stored value equal to its own key counts as missing.
	///
	/// ```
	/// use verba_common_i18n::Catalog;
	///
	/// let mut catalog = Catalog::new();
	/// catalog.insert_json("en", r#"{"common": {"save": "Save"}}"#).unwrap();
	///
	/// assert_eq!(catalog.resolve("common.save", "fr", None), "Save");
	/// assert_eq!(catalog.resolve("common.nope", "fr", Some("Nope")), "Nope");
	/// assert_eq!(catalog.resolve("common.nope", "fr", None), "common.nope");
	/// ```
	pub fn resolve(&self, key: &str, language: &str, fallback: Option<&str>) -> String {
		if let Some(value) = self.lookup_distinct(language, key) {
			return value.to_string();
		}

		if language != DEFAULT_LOCALE {
			if let Some(value) = self.lookup_distinct(DEFAULT_LOCALE, key) {
				tracing::trace!(key = %key, language = %language, "falling back to English");
				return value.to_string();
			}
		}

		tracing::debug!(key = %key, language = %language, "translation key not found");
		fallback.unwrap_or(key).to_string()
	}

	/// [`Catalog::resolve`] followed by `{name}` placeholder substitution.
	pub fn format(&self, key: &str, language: &str, args: &[(&str, &str)]) -> String {
		interpolate(self.resolve(key, language, None), args)
	}

	/// Keys present in English but not resolvable in `language`.
	pub fn missing_keys(&self, language: &str) -> Vec<String> {
		let Some(english) = self.get(DEFAULT_LOCALE) else {
			return Vec::new();
		};
		let target = self.get(language);

		english
			.keys()
			.into_iter()
			.filter(|key| target.and_then(|d| d.lookup(key)).is_none())
			.collect()
	}

	fn lookup_distinct(&self, language: &str, key: &str) -> Option<&str> {
		self.get(language)?.lookup(key).filter(|value| *value != key)
	}
}

fn io_error(path: &Path, source: std::io::Error) -> I18nError {
	I18nError::Io {
		path: path.to_path_buf(),
		source,
	}
}

/// Replace every `{name}` in `text` with its value. Unknown placeholders are
/// left as they are.
pub fn interpolate(mut text: String, args: &[(&str, &str)]) -> String {
	for (name, value) in args {
		let placeholder = format!("{{{name}}}");
		text = text.replace(&placeholder, value);
	}
	text
}

/// Translate `key` with the built-in dictionaries.
///
/// ```
/// use verba_common_i18n::t;
///
/// assert_eq!(t("es", "common.save"), "Guardar");
/// assert_eq!(t("fr", "common.save"), "Save");
/// ```
pub fn t(locale: &str, key: &str) -> String {
	Catalog::builtin().resolve(key, locale, None)
}

/// Translate with the built-in dictionaries and substitute `{name}`
/// placeholders.
///
/// ```
/// use verba_common_i18n::t_fmt;
///
/// let welcome = t_fmt("es", "dashboard.welcome", &[("name", "Ana")]);
/// assert_eq!(welcome, "Bienvenido de nuevo, Ana");
/// ```
pub fn t_fmt(locale: &str, key: &str, args: &[(&str, &str)]) -> String {
	Catalog::builtin().format(key, locale, args)
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	fn catalog() -> Catalog {
		let mut catalog = Catalog::new();
		catalog
			.insert_json(
				"en",
				r#"{"common": {"save": "Save", "cancel": "Cancel", "same": "common.same"},
				    "greeting": "Hello, {name}! {name}?"}"#,
			)
			.unwrap();
		catalog
			.insert_json("es", r#"{"common": {"save": "Guardar", "echo": "common.echo"}}"#)
			.unwrap();
		catalog
	}

	#[test]
	fn test_requested_language_wins() {
		assert_eq!(catalog().resolve("common.save", "es", None), "Guardar");
	}

	#[test]
	fn test_missing_in_language_falls_back_to_english() {
		assert_eq!(catalog().resolve("common.cancel", "es", None), "Cancel");
		assert_eq!(catalog().resolve("common.save", "fr", None), "Save");
	}

	#[test]
	fn test_missing_everywhere_uses_fallback_then_key() {
		let catalog = catalog();
		assert_eq!(catalog.resolve("nav.none", "es", Some("None")), "None");
		assert_eq!(catalog.resolve("nav.none", "es", None), "nav.none");
	}

	#[test]
	fn test_value_equal_to_key_is_treated_as_missing() {
		let catalog = catalog();
		assert_eq!(catalog.resolve("common.echo", "es", Some("fb")), "fb");
		assert_eq!(catalog.resolve("common.same", "en", None), "common.same");
		assert_eq!(catalog.resolve("common.same", "en", Some("fb")), "fb");
	}

	#[test]
	fn test_format_replaces_every_occurrence_and_keeps_unknown() {
		let catalog = catalog();
		assert_eq!(
			catalog.format("greeting", "es", &[("name", "Ana")]),
			"Hello, Ana! Ana?"
		);
		assert_eq!(
			catalog.format("greeting", "en", &[("other", "x")]),
			"Hello, {name}! {name}?"
		);
	}

	#[test]
	fn test_missing_keys_relative_to_english() {
		let catalog = catalog();
		assert_eq!(
			catalog.missing_keys("es"),
			vec!["common.cancel", "common.same", "greeting"]
		);
		assert_eq!(catalog.missing_keys("fr").len(), 4);
		assert!(catalog.missing_keys("en").is_empty());
	}

	#[test]
	fn test_load_dir_reads_json_files_only() {
		let dir = tempfile::tempdir().unwrap();
		std::fs::write(dir.path().join("en.json"), r#"{"a": {"b": "B"}}"#).unwrap();
		std::fs::write(dir.path().join("es.json"), r#"{"a": {"b": "Be"}}"#).unwrap();
		std::fs::write(dir.path().join("README.md"), "not a dictionary").unwrap();

		let catalog = Catalog::load_dir(dir.path()).unwrap();
		assert_eq!(catalog.languages(), vec!["en", "es"]);
		assert_eq!(catalog.resolve("a.b", "es", None), "Be");
	}

	#[test]
	fn test_load_dir_rejects_malformed_dictionary() {
		let dir = tempfile::tempdir().unwrap();
		std::fs::write(dir.path().join("en.json"), "{ nope").unwrap();

		assert!(matches!(
			Catalog::load_dir(dir.path()),
			Err(I18nError::Parse { .. })
		));
	}

	#[test]
	fn test_load_dir_missing_directory() {
		assert!(matches!(
			Catalog::load_dir("/nonexistent/verba/locales"),
			Err(I18nError::Io { .. })
		));
	}

	#[test]
	fn test_extend_overlays_languages() {
		let mut base = catalog();
		let mut overlay = Catalog::new();
		overlay
			.insert_json("es", r#"{"common": {"save": "Salvar"}}"#)
			.unwrap();
		base.extend(overlay);
		assert_eq!(base.resolve("common.save", "es", None), "Salvar");
		assert_eq!(base.resolve("common.save", "en", None), "Save");
	}

	#[test]
	fn test_builtin_dictionaries() {
		assert_eq!(t("en", "nav.services"), "Services");
		assert_eq!(t("es", "nav.services"), "Servicios");
		assert_eq!(t("asl", "payments.pay_now"), "Pay now");
		assert_eq!(t("fr", "common.save"), "Save");
		assert_eq!(t_fmt("en", "assignments.due", &[("date", "May 3")]), "Due May 3");
	}

	#[test]
	fn test_builtin_translations_cover_english() {
		assert!(Catalog::builtin().missing_keys("es").is_empty());
	}

	proptest! {
		#[test]
		fn resolve_never_returns_empty(key in "[a-z]{1,8}(\\.[a-z]{1,8}){0,3}", lang in "[a-z]{2,3}") {
			let resolved = catalog().resolve(&key, &lang, None);
			prop_assert!(!resolved.is_empty());
		}

		#[test]
		fn absent_key_returns_fallback(key in "zz[a-z]{1,8}\\.[a-z]{1,8}", fallback in "[A-Za-z ]{1,20}") {
			let catalog = catalog();
			prop_assert_eq!(catalog.resolve(&key, "es", Some(&fallback)), fallback);
			prop_assert_eq!(catalog.resolve(&key, "es", None), key);
		}
	}
}
