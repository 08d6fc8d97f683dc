use poise::serenity_prelude::{self as serenity};
use shardbound::commands;
use shardbound::context::{Error, UserContext};
use std::{env::var, sync::Arc, time::Duration};

// {{{ Error handler
async fn on_error(error: poise::FrameworkError<'_, UserContext, Error>) {
	if let Err(e) = poise::builtins::on_error(error).await {
		log::error!("Error while handling error: {}", e)
	}
}
// }}}

#[tokio::main]
async fn main() {
	env_logger::init();

	// {{{ Poise options
	let options = poise::FrameworkOptions {
		commands: vec![
			commands::help(),
			commands::shard::open(),
			commands::shard::reset(),
			commands::status::status(),
			commands::status::mercy(),
		],
		prefix_options: poise::PrefixFrameworkOptions {
			prefix: Some("!".to_owned()),
			edit_tracker: Some(Arc::new(poise::EditTracker::for_timespan(
				Duration::from_secs(3600),
			))),
			..Default::default()
		},
		on_error: |error| Box::pin(on_error(error)),
		..Default::default()
	};
	// }}}
	// {{{ Start poise
	let framework = poise::Framework::builder()
		.setup(move |ctx, _ready, framework| {
			Box::pin(async move {
				println!("Logged in as {}", _ready.user.name);
				poise::builtins::register_globally(ctx, &framework.options().commands).await?;
				UserContext::new()
			})
		})
		.options(options)
		.build();

	let token =
		var("SHARDBOUND_DISCORD_TOKEN").expect("Missing `SHARDBOUND_DISCORD_TOKEN` env var");
	let intents =
		serenity::GatewayIntents::non_privileged() | serenity::GatewayIntents::MESSAGE_CONTENT;

	let client = serenity::ClientBuilder::new(token, intents)
		.framework(framework)
		.await;

	client.unwrap().start().await.unwrap()
	// }}}
}
