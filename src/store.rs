//! Per-user summon counters, mirrored to a flat file after every mutation.
//!
//! The whole mapping is rewritten on each write; right before overwriting,
//! the previous snapshot is copied to a backup path the load path can fall
//! back to. Loading never fails: a damaged primary falls back to the backup,
//! and a damaged backup falls back to an empty mapping.

// {{{ Imports
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use anyhow::Context;
use log::{info, warn};

use crate::context::paths::ShardboundPaths;
use crate::context::Error;
use crate::raid::shard::Shard;
// }}}

pub type ShardCounts = BTreeMap<Shard, u32>;
type CounterMap = BTreeMap<String, ShardCounts>;

pub struct CounterStore {
	paths: ShardboundPaths,
	counts: CounterMap,
}

impl CounterStore {
	// {{{ Loading
	pub fn load(paths: ShardboundPaths) -> Self {
		let counts = read_counts(&paths);
		Self { paths, counts }
	}
	// }}}
	// {{{ Reads
	/// A user's counter for one shard type, zero when never reported.
	#[inline]
	pub fn get(&self, user_id: u64, shard: Shard) -> u32 {
		self.counts
			.get(&user_id.to_string())
			.and_then(|counts| counts.get(&shard))
			.copied()
			.unwrap_or(0)
	}

	#[inline]
	pub fn counts_for(&self, user_id: u64) -> Option<&ShardCounts> {
		self.counts.get(&user_id.to_string())
	}
	// }}}
	// {{{ Mutations
	/// Records a batch of summons, returning the new counter value.
	pub fn add(&mut self, user_id: u64, shard: Shard, amount: u32) -> Result<u32, Error> {
		let count = self
			.counts
			.entry(user_id.to_string())
			.or_default()
			.entry(shard)
			.or_insert(0);
		*count = count.saturating_add(amount);
		let count = *count;

		self.persist()?;
		Ok(count)
	}

	#[inline]
	pub fn increment(&mut self, user_id: u64, shard: Shard) -> Result<u32, Error> {
		self.add(user_id, shard, 1)
	}

	/// Puts one counter back to zero after a reported pull.
	pub fn reset(&mut self, user_id: u64, shard: Shard) -> Result<u32, Error> {
		self.counts
			.entry(user_id.to_string())
			.or_default()
			.insert(shard, 0);

		self.persist()?;
		Ok(0)
	}

	/// Wipes every counter a user has.
	pub fn reset_all(&mut self, user_id: u64) -> Result<(), Error> {
		self.counts.insert(user_id.to_string(), ShardCounts::new());
		self.persist()
	}
	// }}}
	// {{{ Persistence
	fn persist(&self) -> Result<(), Error> {
		let path = self.paths.counters_path();

		// Rotate the previous snapshot out of the way first. Losing the
		// backup only costs us the fallback, so it never blocks the write.
		if path.exists() {
			if let Err(error) = fs::copy(&path, self.paths.backup_path()) {
				warn!("Could not back up {path:?}: {error:?}");
			}
		}

		let contents = serde_json::to_string_pretty(&self.counts)?;
		fs::write(&path, contents).with_context(|| format!("Could not write counters to {path:?}"))
	}
	// }}}
}

fn read_counts(paths: &ShardboundPaths) -> CounterMap {
	match read_counter_file(&paths.counters_path()) {
		Ok(counts) => {
			info!("Loaded counters for {} users", counts.len());
			counts
		}
		Err(error) => {
			warn!(
				"Could not read {:?} ({error:?}), falling back to the backup",
				paths.counters_path()
			);

			match read_counter_file(&paths.backup_path()) {
				Ok(counts) => {
					info!("Recovered counters for {} users from the backup", counts.len());
					counts
				}
				Err(error) => {
					warn!(
						"Could not read {:?} either ({error:?}), starting with no counters",
						paths.backup_path()
					);
					CounterMap::new()
				}
			}
		}
	}
}

fn read_counter_file(path: &Path) -> Result<CounterMap, Error> {
	let contents =
		fs::read_to_string(path).with_context(|| format!("Could not read {path:?}"))?;
	let counts =
		serde_json::from_str(&contents).with_context(|| format!("Could not parse {path:?}"))?;
	Ok(counts)
}

// }}}
