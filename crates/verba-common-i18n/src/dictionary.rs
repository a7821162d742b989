// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! A single language's nested string table.

use serde_json::{Map, Value};

use crate::error::{I18nError, Result};

/// Nested mapping from dotted key path to translated string.
///
/// Stored as the JSON tree it was loaded from: objects are branches, strings
/// are leaves. Any other JSON value (number, array, null) is kept but never
/// resolves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TranslationDictionary {
	root: Map<String, Value>,
}

impl TranslationDictionary {
	/// Parse a dictionary from JSON text. `language` is only used in errors.
	pub fn from_json(language: &str, json: &str) -> Result<Self> {
		let value: Value = serde_json::from_str(json).map_err(|source| I18nError::Parse {
			language: language.to_string(),
			source,
		})?;

		match value {
			Value::Object(root) => Ok(Self { root }),
			_ => Err(I18nError::NotAnObject {
				language: language.to_string(),
			}),
		}
	}

	/// Descend through the tree one `.`-separated segment at a time.
	///
	/// Returns `None` when any segment is missing or the final node is not a
	/// string.
	pub fn lookup(&self, key: &str) -> Option<&str> {
		let mut segments = key.split('.');
		let mut node = self.root.get(segments.next()?)?;
		for segment in segments {
			node = node.as_object()?.get(segment)?;
		}
		node.as_str()
	}

	/// Every dotted key that resolves to a string, sorted.
	pub fn keys(&self) -> Vec<String> {
		let mut keys = Vec::new();
		collect_keys(&self.root, &mut String::new(), &mut keys);
		keys.sort();
		keys
	}

	pub fn len(&self) -> usize {
		self.keys().len()
	}

	pub fn is_empty(&self) -> bool {
		self.root.is_empty()
	}
}

fn collect_keys(map: &Map<String, Value>, prefix: &mut String, out: &mut Vec<String>) {
	for (segment, value) in map {
		let restore = prefix.len();
		if !prefix.is_empty() {
			prefix.push('.');
		}
		prefix.push_str(segment);

		match value {
			Value::String(_) => out.push(prefix.clone()),
			Value::Object(child) => collect_keys(child, prefix, out),
			_ => {}
		}

		prefix.truncate(restore);
	}
}
