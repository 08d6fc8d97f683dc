// {{{ Imports
use poise::serenity_prelude::{CreateEmbed, CreateEmbedFooter, Timestamp};
use poise::CreateReply;

use crate::context::{Error, PoiseContext, TaggedError};
use crate::raid::mercy;

use super::discord::MessageContext;
use super::{INFO_COLOR, RULES_COLOR, WARNING_COLOR};
// }}}

// {{{ Status
// {{{ Implementation
async fn status_impl<C: MessageContext>(ctx: &mut C) -> Result<(), TaggedError> {
	let report = {
		let store = ctx.data().counters();
		store
			.counts_for(ctx.author_id())
			.filter(|counts| !counts.is_empty())
			.map(mercy::status_report)
	};

	let embed = match report {
		Some(report) => CreateEmbed::default()
			.title("📊 Mercy Tracker Status")
			.description(report)
			.colour(INFO_COLOR)
			.timestamp(Timestamp::now())
			.footer(CreateEmbedFooter::new(format!(
				"User: {}",
				ctx.author_name()
			))),
		None => CreateEmbed::default()
			.title("📊 Mercy Tracker Status")
			.description("No data found. Use `/open` to start tracking your summons!")
			.colour(WARNING_COLOR),
	};

	ctx.send(CreateReply::default().embed(embed)).await?;
	Ok(())
}
// }}}
// {{{ Tests
#[cfg(test)]
mod status_tests {
	use super::*;
	use crate::context::testing::get_mock_context;
	use crate::raid::shard::Shard;

	#[tokio::test]
	async fn empty_data_points_at_open() -> Result<(), Error> {
		let (mut ctx, _guard) = get_mock_context()?;

		status_impl(&mut ctx).await.map_err(|e| e.error)?;

		let embed = serde_json::to_value(&ctx.messages[0].embeds[0])?;
		assert_eq!(
			embed["description"],
			"No data found. Use `/open` to start tracking your summons!"
		);

		Ok(())
	}

	#[tokio::test]
	async fn reports_every_tracked_shard() -> Result<(), Error> {
		let (mut ctx, _guard) = get_mock_context()?;
		ctx.data.counters().add(ctx.user_id, Shard::Sacred, 4)?;
		ctx.data.counters().add(ctx.user_id, Shard::Primal, 80)?;

		status_impl(&mut ctx).await.map_err(|e| e.error)?;

		let embed = serde_json::to_value(&ctx.messages[0].embeds[0])?;
		let description = embed["description"].as_str().unwrap();

		assert!(description.contains("**Sacred Shards** (4 total)"));
		assert!(description.contains("└ Legendary: 8 to mercy ▰▰▰▱▱▱▱▱▱▱ 33% (4/12)"));
		assert!(description.contains("**Primal Shards** (80 total)"));
		assert!(description.contains("└ Legendary: **MERCY ACTIVE** (+6% chance)"));

		Ok(())
	}
}
// }}}
// {{{ Discord wrapper
/// Check your current mercy tracker status
#[poise::command(prefix_command, slash_command)]
pub async fn status(mut ctx: PoiseContext<'_>) -> Result<(), Error> {
	let res = status_impl(&mut ctx).await;
	ctx.handle_error(res).await?;
	Ok(())
}
// }}}
// }}}
// {{{ Mercy rules
// {{{ Implementation
async fn mercy_impl<C: MessageContext>(ctx: &mut C) -> Result<(), TaggedError> {
	let embed = CreateEmbed::default()
		.title("🎯 Mercy System Rules")
		.description("Here are the mercy thresholds for each shard type:")
		.field(
			"How it works",
			"• Mercy activates after a certain number of summons without the target rarity\n\
			 • Once active, your chance increases with every additional summon\n\
			 • Reset the counter whenever you pull the target rarity",
			false,
		)
		.field("Mercy Rules", mercy::rules_info(), false)
		.colour(RULES_COLOR);

	ctx.send(CreateReply::default().embed(embed)).await?;
	Ok(())
}
// }}}
// {{{ Discord wrapper
/// View mercy system rules and thresholds
#[poise::command(prefix_command, slash_command)]
pub async fn mercy(mut ctx: PoiseContext<'_>) -> Result<(), Error> {
	let res = mercy_impl(&mut ctx).await;
	ctx.handle_error(res).await?;
	Ok(())
}
// }}}
// }}}
