// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Redacting wrapper for credentials.

use std::fmt;

use zeroize::Zeroize;

/// Placeholder printed wherever a secret would otherwise appear.
pub const REDACTED: &str = "[REDACTED]";

/// A value that must never reach a log line.
///
/// `Debug`, `Display` and `Serialize` all emit [`REDACTED`]. The inner value
/// is zeroed on drop and only reachable through [`Secret::expose`].
///
/// ```
/// use verba_common_config::Secret;
///
/// let token = Secret::new("tr-live-123".to_string());
/// assert_eq!(format!("{token}"), "[REDACTED]");
/// assert_eq!(token.expose(), "tr-live-123");
/// ```
#[derive(Zeroize)]
#[zeroize(drop)]
pub struct Secret<T>
where
	T: Zeroize,
{
	inner: T,
}

/// The common case: a secret string such as an API token.
pub type SecretString = Secret<String>;

impl<T> Secret<T>
where
	T: Zeroize,
{
	pub fn new(inner: T) -> Self {
		Self { inner }
	}

	/// Borrow the wrapped value. Every call site is a deliberate disclosure.
	pub fn expose(&self) -> &T {
		&self.inner
	}
}

impl<T> Clone for Secret<T>
where
	T: Zeroize + Clone,
{
	fn clone(&self) -> Self {
		Self::new(self.inner.clone())
	}
}

impl<T> fmt::Debug for Secret<T>
where
	T: Zeroize,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_tuple("Secret").field(&REDACTED).finish()
	}
}

impl<T> fmt::Display for Secret<T>
where
	T: Zeroize,
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(REDACTED)
	}
}

impl<T> PartialEq for Secret<T>
where
	T: Zeroize + PartialEq,
{
	fn eq(&self, other: &Self) -> bool {
		self.inner == other.inner
	}
}

impl<T> Eq for Secret<T> where T: Zeroize + Eq {}

#[cfg(feature = "serde")]
mod serde_impl {
	use serde::{Deserialize, Deserializer, Serialize, Serializer};
	use zeroize::Zeroize;

	use super::{Secret, REDACTED};

	impl<T> Serialize for Secret<T>
	where
		T: Zeroize,
	{
		fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
		where
			S: Serializer,
		{
			serializer.serialize_str(REDACTED)
		}
	}

	impl<'de, T> Deserialize<'de> for Secret<T>
	where
		T: Deserialize<'de> + Zeroize,
	{
		fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
		where
			D: Deserializer<'de>,
		{
			T::deserialize(deserializer).map(Secret::new)
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn debug_and_display_hide_the_token() {
		let token = Secret::new("bearer-abc".to_string());
		assert_eq!(format!("{token}"), REDACTED);
		assert_eq!(format!("{token:?}"), "Secret(\"[REDACTED]\")");
	}

	#[test]
	fn optional_token_debug_is_redacted() {
		let token: Option<SecretString> = Some(Secret::new("bearer-abc".to_string()));
		let debug = format!("{token:?}");
		assert!(!debug.contains("bearer-abc"));
	}

	#[test]
	fn clone_keeps_value() {
		let token = Secret::new("bearer-abc".to_string());
		assert_eq!(token.clone(), token);
		assert_eq!(token.clone().expose(), "bearer-abc");
	}

	#[cfg(feature = "serde")]
	#[test]
	fn serde_redacts_on_write_and_reads_plain_values() {
		let token = Secret::new("bearer-abc".to_string());
		assert_eq!(serde_json::to_string(&token).unwrap(), "\"[REDACTED]\"");

		let parsed: SecretString = serde_json::from_str("\"bearer-xyz\"").unwrap();
		assert_eq!(parsed.expose(), "bearer-xyz");
	}

	proptest! {
		#[test]
		fn formatting_never_leaks(inner in "[a-z0-9_-]{4,40}") {
			prop_assume!(!"Secret(\"[REDACTED]\")".contains(inner.as_str()));
			let token = Secret::new(inner.clone());
			let display = format!("{token}");
			let debug = format!("{token:?}");
			prop_assert!(!display.contains(&inner));
			prop_assert!(!debug.contains(&inner));
		}
	}
}
