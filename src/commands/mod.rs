use crate::context::{Error, PoiseContext};

pub mod discord;
pub mod shard;
pub mod status;

// Embed accent colors shared by the command replies.
pub(crate) const SUCCESS_COLOR: u32 = 0x00ff00;
pub(crate) const INFO_COLOR: u32 = 0x0099ff;
pub(crate) const WARNING_COLOR: u32 = 0xffa500;
pub(crate) const RULES_COLOR: u32 = 0x9932cc;

// {{{ Help
/// Show this help menu
#[poise::command(prefix_command, track_edits, slash_command)]
pub async fn help(
	ctx: PoiseContext<'_>,
	#[description = "Specific command to show help about"]
	#[autocomplete = "poise::builtins::autocomplete_command"]
	command: Option<String>,
) -> Result<(), Error> {
	poise::builtins::help(
		ctx,
		command.as_deref(),
		poise::builtins::HelpConfiguration {
			extra_text_at_bottom: "Happy summoning! 🌟",
			show_subcommands: true,
			..Default::default()
		},
	)
	.await?;
	Ok(())
}
// }}}
