use std::fmt::Display;

use serde::{Deserialize, Serialize};

// {{{ Shard
#[derive(
	Debug,
	Clone,
	Copy,
	PartialEq,
	Eq,
	PartialOrd,
	Ord,
	Serialize,
	Deserialize,
	poise::ChoiceParameter,
)]
#[serde(rename_all = "lowercase")]
pub enum Shard {
	Ancient,
	Void,
	Sacred,
	Primal,
	Remnant,
}

impl Shard {
	pub const SHARDS: [Shard; 5] = [
		Self::Ancient,
		Self::Void,
		Self::Sacred,
		Self::Primal,
		Self::Remnant,
	];

	pub const SHARD_NAMES: [&'static str; 5] = ["Ancient", "Void", "Sacred", "Primal", "Remnant"];
	pub const SHARD_EMOJIS: [&'static str; 5] = ["🔵", "🟣", "🟡", "🔴", "⚫"];

	#[inline]
	pub fn to_index(self) -> usize {
		self as usize
	}

	#[inline]
	pub fn emoji(self) -> &'static str {
		Self::SHARD_EMOJIS[self.to_index()]
	}

	#[inline]
	pub fn rule(self) -> &'static ShardRule {
		&MERCY_RULES[self.to_index()]
	}
}

impl Display for Shard {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}", Self::SHARD_NAMES[self.to_index()])
	}
}
// }}}
// {{{ Rarity
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rarity {
	Legendary,
	Mythical,
}

impl Display for Rarity {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Legendary => write!(f, "Legendary"),
			Self::Mythical => write!(f, "Mythical"),
		}
	}
}
// }}}
// {{{ Mercy rules
/// Mercy parameters for a single rarity tier: the summon count the boost
/// kicks in at, and how much the drop chance grows per summon from there.
#[derive(Debug, Clone, Copy)]
pub struct TierRule {
	pub threshold: u32,
	pub step_pct: f32,
}

/// Every shard carries a legendary mercy rule; only Primal and Remnant
/// shards additionally track a mythical one.
#[derive(Debug, Clone, Copy)]
pub struct ShardRule {
	pub legendary: TierRule,
	pub mythical: Option<TierRule>,
}

const MERCY_RULES: [ShardRule; 5] = [
	// Ancient
	ShardRule {
		legendary: TierRule {
			threshold: 200,
			step_pct: 5.0,
		},
		mythical: None,
	},
	// Void
	ShardRule {
		legendary: TierRule {
			threshold: 200,
			step_pct: 5.0,
		},
		mythical: None,
	},
	// Sacred
	ShardRule {
		legendary: TierRule {
			threshold: 12,
			step_pct: 2.0,
		},
		mythical: None,
	},
	// Primal
	ShardRule {
		legendary: TierRule {
			threshold: 75,
			step_pct: 1.0,
		},
		mythical: Some(TierRule {
			threshold: 200,
			step_pct: 10.0,
		}),
	},
	// Remnant
	ShardRule {
		legendary: TierRule {
			threshold: 200,
			step_pct: 5.0,
		},
		mythical: Some(TierRule {
			threshold: 24,
			step_pct: 1.0,
		}),
	},
];
// }}}
