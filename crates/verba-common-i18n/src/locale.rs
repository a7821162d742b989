// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Locale metadata and direction support.

/// Text direction for a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
	Ltr,
	Rtl,
}

impl Direction {
	/// Returns the HTML `dir` attribute value.
	pub fn as_html_dir(&self) -> &'static str {
		match self {
			Direction::Ltr => "ltr",
			Direction::Rtl => "rtl",
		}
	}
}

/// Metadata about a language the platform offers in its language picker.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocaleInfo {
	/// Language code as used in dictionaries and API calls (e.g. "en", "asl")
	pub code: &'static str,
	/// English name of the language
	pub name: &'static str,
	/// Name of the language in the language itself
	pub native_name: &'static str,
	pub direction: Direction,
}

/// Root of every fallback chain, and the source language for remote
/// translation.
pub const DEFAULT_LOCALE: &str = "en";

/// All languages offered to clients and therapists.
///
/// "asl" selects American Sign Language resources; its written UI strings
/// come from English.
pub const LOCALES: &[LocaleInfo] = &[
	LocaleInfo {
		code: "en",
		name: "English",
		native_name: "English",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "es",
		name: "Spanish",
		native_name: "Español",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "fr",
		name: "French",
		native_name: "Français",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "asl",
		name: "American Sign Language",
		native_name: "ASL",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "zh",
		name: "Chinese",
		native_name: "中文",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "vi",
		name: "Vietnamese",
		native_name: "Tiếng Việt",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "tl",
		name: "Tagalog",
		native_name: "Tagalog",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "ko",
		name: "Korean",
		native_name: "한국어",
		direction: Direction::Ltr,
	},
	LocaleInfo {
		code: "ar",
		name: "Arabic",
		native_name: "العربية",
		direction: Direction::Rtl,
	},
];

/// Get metadata for a locale, `None` if it is not offered.
pub fn locale_info(locale: &str) -> Option<&'static LocaleInfo> {
	LOCALES.iter().find(|l| l.code == locale)
}

/// Check if a locale uses right-to-left text. `false` for unknown locales.
pub fn is_rtl(locale: &str) -> bool {
	locale_info(locale).is_some_and(|info| info.direction == Direction::Rtl)
}

pub fn is_supported(locale: &str) -> bool {
	locale_info(locale).is_some()
}

pub fn available_locales() -> &'static [LocaleInfo] {
	LOCALES
}
