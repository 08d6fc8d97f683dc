// {{{ Imports
use anyhow::anyhow;
use poise::serenity_prelude::{CreateEmbed, CreateEmbedFooter, Timestamp};
use poise::CreateReply;

use crate::context::{Error, ErrorKind, PoiseContext, TagError, TaggedError};
use crate::raid::shard::Shard;

use super::discord::MessageContext;
use super::SUCCESS_COLOR;
// }}}

/// Largest batch of summons a single command invocation may record.
pub const MAX_AMOUNT_PER_COMMAND: u32 = 500;

// {{{ Open
// {{{ Implementation
async fn open_impl<C: MessageContext>(
	ctx: &mut C,
	shard: Shard,
	amount: Option<u32>,
) -> Result<u32, TaggedError> {
	let amount = amount.unwrap_or(1);
	if !(1..=MAX_AMOUNT_PER_COMMAND).contains(&amount) {
		return Err(anyhow!(
			"Invalid amount. You can log between 1 and {MAX_AMOUNT_PER_COMMAND} shards at a time."
		)
		.tag(ErrorKind::User));
	}

	let new_total = {
		let mut store = ctx.data().counters();
		store.add(ctx.author_id(), shard, amount)?
	};

	let embed = CreateEmbed::default()
		.title("✅ Shard update complete")
		.description(format!(
			"{} {shard}: +{amount} (Total: {new_total})",
			shard.emoji()
		))
		.colour(SUCCESS_COLOR)
		.timestamp(Timestamp::now())
		.footer(CreateEmbedFooter::new(format!(
			"User: {}",
			ctx.author_name()
		)));

	ctx.send(CreateReply::default().embed(embed).ephemeral(true))
		.await?;

	Ok(new_total)
}
// }}}
// {{{ Discord wrapper
/// Log opened shards towards your mercy counters
#[poise::command(prefix_command, slash_command)]
pub async fn open(
	mut ctx: PoiseContext<'_>,
	#[description = "The type of shard you opened"] shard: Shard,
	#[description = "How many you opened (defaults to 1)"] amount: Option<u32>,
) -> Result<(), Error> {
	let res = open_impl(&mut ctx, shard, amount).await;
	ctx.handle_error(res).await?;
	Ok(())
}
// }}}
// }}}
// {{{ Reset
// {{{ Implementation
async fn reset_impl<C: MessageContext>(
	ctx: &mut C,
	shard: Option<Shard>,
) -> Result<(), TaggedError> {
	let user_id = ctx.author_id();

	let has_data = {
		let store = ctx.data().counters();
		store
			.counts_for(user_id)
			.is_some_and(|counts| counts.values().any(|&count| count > 0))
	};
	if !has_data {
		return Err(anyhow!("You have no data to reset.").tag(ErrorKind::User));
	}

	let description = match shard {
		Some(shard) => {
			ctx.data().counters().reset(user_id, shard)?;
			format!("{} The {shard} counter is back to 0.", shard.emoji())
		}
		None => {
			ctx.data().counters().reset_all(user_id)?;
			"Your mercy tracker has been fully cleared.".to_owned()
		}
	};

	let embed = CreateEmbed::default()
		.title("✅ Data reset")
		.description(description)
		.colour(SUCCESS_COLOR);

	ctx.send(CreateReply::default().embed(embed).ephemeral(true))
		.await?;

	Ok(())
}
// }}}
// {{{ Tests
#[cfg(test)]
mod reset_tests {
	use super::*;
	use crate::context::testing::get_mock_context;

	#[tokio::test]
	async fn resets_a_single_shard() -> Result<(), Error> {
		let (mut ctx, _guard) = get_mock_context()?;

		open_impl(&mut ctx, Shard::Sacred, Some(10))
			.await
			.map_err(|e| e.error)?;
		open_impl(&mut ctx, Shard::Void, Some(5))
			.await
			.map_err(|e| e.error)?;

		reset_impl(&mut ctx, Some(Shard::Sacred))
			.await
			.map_err(|e| e.error)?;

		assert_eq!(ctx.data.counters().get(ctx.user_id, Shard::Sacred), 0);
		assert_eq!(ctx.data.counters().get(ctx.user_id, Shard::Void), 5);

		Ok(())
	}

	#[tokio::test]
	async fn resets_everything_when_no_shard_is_given() -> Result<(), Error> {
		let (mut ctx, _guard) = get_mock_context()?;

		open_impl(&mut ctx, Shard::Sacred, Some(10))
			.await
			.map_err(|e| e.error)?;
		open_impl(&mut ctx, Shard::Primal, Some(80))
			.await
			.map_err(|e| e.error)?;

		reset_impl(&mut ctx, None).await.map_err(|e| e.error)?;

		assert_eq!(ctx.data.counters().get(ctx.user_id, Shard::Sacred), 0);
		assert_eq!(ctx.data.counters().get(ctx.user_id, Shard::Primal), 0);

		Ok(())
	}

	#[tokio::test]
	async fn nothing_to_reset_is_a_user_error() -> Result<(), Error> {
		let (mut ctx, _guard) = get_mock_context()?;

		let error = reset_impl(&mut ctx, None).await.unwrap_err();
		assert_eq!(error.kind, ErrorKind::User);

		Ok(())
	}
}
// }}}
// {{{ Discord wrapper
/// Reset a mercy counter (or all of them) after a lucky pull
#[poise::command(prefix_command, slash_command)]
pub async fn reset(
	mut ctx: PoiseContext<'_>,
	#[description = "The shard type to reset (omit to reset everything)"] shard: Option<Shard>,
) -> Result<(), Error> {
	let res = reset_impl(&mut ctx, shard).await;
	ctx.handle_error(res).await?;
	Ok(())
}
// }}}
// }}}
