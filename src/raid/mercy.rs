//! Mercy bookkeeping: the pity mechanic guarantees a rare drop after enough
//! unsuccessful summons, with the chance rising per summon once past the
//! per-shard threshold.

use std::collections::BTreeMap;

use crate::raid::shard::{Rarity, Shard, TierRule};

pub const PROGRESS_BAR_LENGTH: usize = 10;

// {{{ Chance
/// Bonus drop chance granted by mercy: zero below the threshold, then
/// one step per summon (threshold included), saturating at 100%.
pub fn mercy_chance(rule: &TierRule, count: u32) -> f32 {
	if count < rule.threshold {
		return 0.0;
	}

	(rule.step_pct * (count - rule.threshold + 1) as f32).min(100.0)
}
// }}}
// {{{ Tier progress
/// How far a single counter has gotten towards one rarity tier's mercy.
#[derive(Debug, Clone, Copy)]
pub struct TierProgress {
	pub rarity: Rarity,
	pub count: u32,
	pub threshold: u32,
	pub chance: f32,
}

impl TierProgress {
	fn new(rarity: Rarity, rule: &TierRule, count: u32) -> Self {
		Self {
			rarity,
			count,
			threshold: rule.threshold,
			chance: mercy_chance(rule, count),
		}
	}

	#[inline]
	pub fn active(&self) -> bool {
		self.count >= self.threshold
	}

	#[inline]
	pub fn remaining(&self) -> u32 {
		self.threshold.saturating_sub(self.count)
	}

	/// Percentage of the way to the threshold, as a whole number.
	#[inline]
	pub fn percent_to_threshold(&self) -> u32 {
		(self.count as u64 * 100 / self.threshold as u64).min(100) as u32
	}

	fn status_line(&self) -> String {
		if self.active() {
			format!("└ {}: **MERCY ACTIVE** (+{}% chance)", self.rarity, self.chance)
		} else {
			let bar = format_progress_bar(
				self.count as f32 / self.threshold as f32,
				PROGRESS_BAR_LENGTH,
			);

			format!(
				"└ {}: {} to mercy {} {}% ({}/{})",
				self.rarity,
				self.remaining(),
				bar,
				self.percent_to_threshold(),
				self.count,
				self.threshold
			)
		}
	}
}

/// The progress of every rarity tier a shard type tracks,
/// all fed by the same summon counter.
pub fn shard_progress(shard: Shard, count: u32) -> Vec<TierProgress> {
	let rule = shard.rule();
	let mut tiers = vec![TierProgress::new(Rarity::Legendary, &rule.legendary, count)];

	if let Some(mythical) = &rule.mythical {
		tiers.push(TierProgress::new(Rarity::Mythical, mythical, count));
	}

	tiers
}
// }}}
// {{{ Progress bar
pub fn format_progress_bar(progress: f32, length: usize) -> String {
	let progress = progress.clamp(0.0, 1.0);
	let filled = (length as f32 * progress) as usize;

	"▰".repeat(filled) + &"▱".repeat(length - filled)
}
// }}}
// {{{ Reports
/// Renders a user's entire mercy progress, one block per tracked shard type.
pub fn status_report(counts: &BTreeMap<Shard, u32>) -> String {
	counts
		.iter()
		.map(|(&shard, &count)| {
			let mut lines = vec![format!("**{shard} Shards** ({count} total)")];
			lines.extend(
				shard_progress(shard, count)
					.iter()
					.map(TierProgress::status_line),
			);
			lines.join("\n")
		})
		.collect::<Vec<_>>()
		.join("\n\n")
}

/// Renders the static rule table, one block per shard type.
pub fn rules_info() -> String {
	Shard::SHARDS
		.into_iter()
		.map(|shard| {
			let rule = shard.rule();
			let mut lines = vec![format!("**{shard} Shards:**")];
			lines.push(rule_line(Rarity::Legendary, &rule.legendary));
			if let Some(mythical) = &rule.mythical {
				lines.push(rule_line(Rarity::Mythical, mythical));
			}
			lines.join("\n")
		})
		.collect::<Vec<_>>()
		.join("\n\n")
}

fn rule_line(rarity: Rarity, rule: &TierRule) -> String {
	format!(
		"└ {}: Mercy at {} summons (+{}% per summon once active)",
		rarity, rule.threshold, rule.step_pct
	)
}
// }}}
// {{{ Tests
#[cfg(test)]
mod mercy_tests {
	use super::*;

	#[test]
	fn no_boost_below_threshold() {
		for shard in Shard::SHARDS {
			let rule = shard.rule();
			for count in 0..rule.legendary.threshold {
				assert_eq!(mercy_chance(&rule.legendary, count), 0.0);
			}
			if let Some(mythical) = &rule.mythical {
				for count in 0..mythical.threshold {
					assert_eq!(mercy_chance(mythical, count), 0.0);
				}
			}
		}
	}

	#[test]
	fn linear_formula_capped_at_100() {
		for shard in Shard::SHARDS {
			let rule = &shard.rule().legendary;
			for count in rule.threshold..rule.threshold + 500 {
				let expected = (rule.step_pct * (count - rule.threshold + 1) as f32).min(100.0);
				assert_eq!(mercy_chance(rule, count), expected);
			}
		}
	}

	#[test]
	fn chance_is_monotone_in_count() {
		for shard in Shard::SHARDS {
			let rule = &shard.rule().legendary;
			let mut previous = 0.0;
			for count in 0..rule.threshold + 500 {
				let chance = mercy_chance(rule, count);
				assert!(chance >= previous);
				previous = chance;
			}
		}
	}

	#[test]
	fn sacred_reference_points() {
		let rule = &Shard::Sacred.rule().legendary;
		assert_eq!(mercy_chance(rule, 12), 2.0);
		assert_eq!(mercy_chance(rule, 20), 18.0);
	}

	#[test]
	fn primal_reference_points() {
		let rule = Shard::Primal.rule();
		assert_eq!(mercy_chance(&rule.legendary, 75), 1.0);
		assert_eq!(mercy_chance(rule.mythical.as_ref().unwrap(), 200), 10.0);
	}

	#[test]
	fn progress_bar_rendering() {
		assert_eq!(format_progress_bar(0.0, 10), "▱▱▱▱▱▱▱▱▱▱");
		assert_eq!(format_progress_bar(0.5, 10), "▰▰▰▰▰▱▱▱▱▱");
		assert_eq!(format_progress_bar(1.0, 10), "▰▰▰▰▰▰▰▰▰▰");
		assert_eq!(format_progress_bar(7.0, 10), "▰▰▰▰▰▰▰▰▰▰");
	}

	#[test]
	fn status_report_before_mercy() {
		let counts = BTreeMap::from([(Shard::Sacred, 4)]);
		assert_eq!(
			status_report(&counts),
			"**Sacred Shards** (4 total)\n└ Legendary: 8 to mercy ▰▰▰▱▱▱▱▱▱▱ 33% (4/12)"
		);
	}

	#[test]
	fn status_report_with_active_mercy() {
		let counts = BTreeMap::from([(Shard::Sacred, 20)]);
		assert_eq!(
			status_report(&counts),
			"**Sacred Shards** (20 total)\n└ Legendary: **MERCY ACTIVE** (+18% chance)"
		);
	}

	#[test]
	fn status_report_renders_both_primal_tiers() {
		let counts = BTreeMap::from([(Shard::Primal, 80)]);
		let report = status_report(&counts);

		assert_eq!(
			report,
			"**Primal Shards** (80 total)\n\
			 └ Legendary: **MERCY ACTIVE** (+6% chance)\n\
			 └ Mythical: 120 to mercy ▰▰▰▰▱▱▱▱▱▱ 40% (80/200)"
		);
	}

	#[test]
	fn rules_info_lists_every_shard() {
		let info = rules_info();
		for name in Shard::SHARD_NAMES {
			assert!(info.contains(name), "missing rules for {name}");
		}
		assert!(info.contains("└ Legendary: Mercy at 12 summons (+2% per summon once active)"));
		assert!(info.contains("└ Mythical: Mercy at 24 summons (+1% per summon once active)"));
	}
}
// }}}
