// Copyright (c) 2025 Geoffrey Huntley <ghuntley@ghuntley.com>. All rights reserved.
// SPDX-License-Identifier: Proprietary

//! Bounded FIFO cache of remote translations.

use std::collections::{HashMap, VecDeque};

use serde::Serialize;
use tracing::trace;

/// Default number of entries kept in memory and on disk.
pub const DEFAULT_CAPACITY: usize = 500;

/// Number of leading characters of the source text that form the cache key.
pub const KEY_PREFIX_CHARS: usize = 100;

/// Build the cache key for `text` translated into `target`.
///
/// Only the first [`KEY_PREFIX_CHARS`] characters take part, so long texts
/// sharing a prefix share an entry.
pub fn cache_key(target: &str, text: &str) -> String {
	let prefix: String = text.chars().take(KEY_PREFIX_CHARS).collect();
	format!("{target}:{prefix}")
}

/// Hit/miss counters and occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct CacheStats {
	pub entries: usize,
	pub capacity: usize,
	pub hits: u64,
	pub misses: u64,
}

/// A cache that keeps at most `capacity` entries and evicts in insertion
/// order. Reads do not refresh an entry's position.
#[derive(Debug, Clone)]
pub struct TranslationCache {
	entries: HashMap<String, String>,
	order: VecDeque<String>,
	capacity: usize,
	hits: u64,
	misses: u64,
}

impl TranslationCache {
	/// Create an empty cache. A zero capacity is raised to one.
	pub fn new(capacity: usize) -> Self {
		let capacity = capacity.max(1);
		Self {
			entries: HashMap::with_capacity(capacity),
			order: VecDeque::with_capacity(capacity),
			capacity,
			hits: 0,
			misses: 0,
		}
	}

	/// Look up a key, counting the hit or miss.
	pub fn get(&mut self, key: &str) -> Option<String> {
		match self.entries.get(key) {
			Some(value) => {
				self.hits += 1;
				Some(value.clone())
			}
			None => {
				self.misses += 1;
				None
			}
		}
	}

	/// Insert or update an entry and return how many entries were evicted.
	///
	/// Updating an existing key keeps its original position in the eviction
	/// order.
	pub fn insert(&mut self, key: String, value: String) -> usize {
		if let Some(existing) = self.entries.get_mut(&key) {
			*existing = value;
			return 0;
		}

		self.order.push_back(key.clone());
		self.entries.insert(key, value);

		let mut evicted = 0;
		while self.order.len() > self.capacity {
			if let Some(oldest) = self.order.pop_front() {
				self.entries.remove(&oldest);
				trace!(key = %oldest, "evicted oldest translation");
				evicted += 1;
			}
		}
		evicted
	}

	/// Replay persisted entries, oldest first. Counters are not touched.
	pub fn restore(&mut self, entries: impl IntoIterator<Item = (String, String)>) {
		for (key, value) in entries {
			self.insert(key, value);
		}
	}

	/// Snapshot of all entries, oldest first.
	pub fn entries(&self) -> Vec<(String, String)> {
		self.order
			.iter()
			.filter_map(|key| {
				self.entries
					.get(key)
					.map(|value| (key.clone(), value.clone()))
			})
			.collect()
	}

	pub fn contains(&self, key: &str) -> bool {
		self.entries.contains_key(key)
	}

	pub fn len(&self) -> usize {
		self.order.len()
	}

	pub fn is_empty(&self) -> bool {
		self.order.is_empty()
	}

	pub fn capacity(&self) -> usize {
		self.capacity
	}

	pub fn clear(&mut self) {
		self.entries.clear();
		self.order.clear();
	}

	pub fn stats(&self) -> CacheStats {
		CacheStats {
			entries: self.len(),
			capacity: self.capacity,
			hits: self.hits,
			misses: self.misses,
		}
	}
}

impl Default for TranslationCache {
	fn default() -> Self {
		Self::new(DEFAULT_CAPACITY)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn test_cache_key_uses_target_and_prefix() {
		assert_eq!(cache_key("es", "Hello"), "es:Hello");

		let long_a = format!("{}A", "x".repeat(KEY_PREFIX_CHARS));
		let long_b = format!("{}B", "x".repeat(KEY_PREFIX_CHARS));
		assert_eq!(cache_key("es", &long_a), cache_key("es", &long_b));
		assert_ne!(cache_key("es", &long_a), cache_key("fr", &long_a));
	}

	#[test]
	fn test_cache_key_truncates_by_character_not_byte() {
		let text = "é".repeat(KEY_PREFIX_CHARS + 5);
		let key = cache_key("fr", &text);
		assert_eq!(key.chars().count(), "fr:".len() + KEY_PREFIX_CHARS);
	}

	#[test]
	fn test_get_counts_hits_and_misses() {
		let mut cache = TranslationCache::new(4);
		cache.insert("es:Hello".into(), "Hola".into());

		assert_eq!(cache.get("es:Hello").as_deref(), Some("Hola"));
		assert_eq!(cache.get("es:Bye"), None);

		let stats = cache.stats();
		assert_eq!(stats.hits, 1);
		assert_eq!(stats.misses, 1);
		assert_eq!(stats.entries, 1);
		assert_eq!(stats.capacity, 4);
	}

	#[test]
	fn test_eviction_is_fifo_not_lru() {
		let mut cache = TranslationCache::new(2);
		cache.insert("a".into(), "1".into());
		cache.insert("b".into(), "2".into());

		// Reading "a" does not protect it.
		assert!(cache.get("a").is_some());

		assert_eq!(cache.insert("c".into(), "3".into()), 1);
		assert!(!cache.contains("a"));
		assert!(cache.contains("b"));
		assert!(cache.contains("c"));
	}

	#[test]
	fn test_reinsert_updates_value_without_moving() {
		let mut cache = TranslationCache::new(2);
		cache.insert("a".into(), "1".into());
		cache.insert("b".into(), "2".into());
		assert_eq!(cache.insert("a".into(), "one".into()), 0);
		assert_eq!(cache.len(), 2);

		cache.insert("c".into(), "3".into());
		assert!(!cache.contains("a"));
		assert_eq!(
			cache.entries(),
			vec![("b".into(), "2".into()), ("c".into(), "3".into())]
		);
	}

	#[test]
	fn test_501_inserts_keep_latest_500() {
		let mut cache = TranslationCache::default();
		for i in 0..=500 {
			cache.insert(format!("es:text {i}"), format!("texto {i}"));
		}
		assert_eq!(cache.len(), DEFAULT_CAPACITY);
		assert!(!cache.contains("es:text 0"));
		assert!(cache.contains("es:text 1"));
		assert!(cache.contains("es:text 500"));
	}

	#[test]
	fn test_zero_capacity_is_raised_to_one() {
		let mut cache = TranslationCache::new(0);
		cache.insert("a".into(), "1".into());
		cache.insert("b".into(), "2".into());
		assert_eq!(cache.capacity(), 1);
		assert_eq!(cache.entries(), vec![("b".into(), "2".into())]);
	}

	#[test]
	fn test_clear_keeps_counters() {
		let mut cache = TranslationCache::new(3);
		cache.insert("a".into(), "1".into());
		cache.get("a");
		cache.clear();
		assert!(cache.is_empty());
		assert_eq!(cache.stats().hits, 1);
	}

	proptest! {
		#[test]
		fn never_exceeds_capacity_and_keeps_newest(capacity in 1usize..50, count in 0usize..200) {
			let mut cache = TranslationCache::new(capacity);
			for i in 0..count {
				cache.insert(format!("k{i}"), format!("v{i}"));
				prop_assert!(cache.len() <= capacity);
			}

			let kept = count.min(capacity);
			prop_assert_eq!(cache.len(), kept);
			let expected: Vec<String> = (count - kept..count).map(|i| format!("k{i}")).collect();
			let actual: Vec<String> = cache.entries().into_iter().map(|(k, _)| k).collect();
			prop_assert_eq!(actual, expected);
		}
	}
}
