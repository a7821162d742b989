// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Internationalization (i18n) support for Verba.
//!
//! UI strings live in per-language JSON dictionaries addressed by dotted
//! keys. A lookup never fails: it walks the fallback chain
//!
//! 1. the requested language
//! 2. English
//! 3. the caller's fallback, if any
//! 4. the key itself
//!
//! # String Naming Convention
//!
//! Keys are grouped by screen or feature, e.g. `nav.services`,
//! `dashboard.client.next_session`, `payments.pay_now`.
//!
//! # Example
//!
//! ```
//! use verba_common_i18n::{t, t_fmt, is_rtl, resolve_locale, Catalog};
//!
//! // Built-in dictionaries
//! let save = t("es", "common.save");
//! let due = t_fmt("es", "assignments.due", &[("date", "3 de mayo")]);
//!
//! // Caller-supplied dictionaries
//! let mut catalog = Catalog::new();
//! catalog.insert_json("en", r#"{"nav": {"services": "Services"}}"#).unwrap();
//! assert_eq!(catalog.resolve("nav.services", "fr", None), "Services");
//!
//! // Effective locale for a user
//! let locale = resolve_locale(Some("es-MX"), "en");
//! assert_eq!(locale, "es");
//! assert!(!is_rtl(locale));
//! ```

mod catalog;
mod dictionary;
mod error;
mod locale;
mod resolve;

pub use catalog::{interpolate, t, t_fmt, Catalog};
pub use dictionary::TranslationDictionary;
pub use error::{I18nError, Result};
pub use locale::{available_locales, is_rtl, is_supported, locale_info, Direction, LocaleInfo};
pub use resolve::{normalize_locale, resolve_locale};

pub use locale::{DEFAULT_LOCALE, LOCALES};
