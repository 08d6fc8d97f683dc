use poise::CreateReply;

use crate::context::{Error, ErrorKind, TaggedError, UserContext};

// {{{ Trait
pub trait MessageContext {
	/// Get the user context held by the message
	fn data(&self) -> &UserContext;
	fn author_id(&self) -> u64;
	fn author_name(&self) -> &str;

	/// Reply to the current message with plain text.
	async fn reply(&mut self, text: &str) -> Result<(), Error>;

	/// Deliver a full reply, embeds included.
	async fn send(&mut self, message: CreateReply) -> Result<(), Error>;

	/// Sends user errors back as replies, and lets internal ones bubble
	/// up to the framework's error hook.
	async fn handle_error<T>(&mut self, res: Result<T, TaggedError>) -> Result<Option<T>, Error> {
		match res {
			Ok(value) => Ok(Some(value)),
			Err(error) => match error.kind {
				ErrorKind::User => {
					self.reply(&format!("❌ {}", error.error)).await?;
					Ok(None)
				}
				ErrorKind::Internal => Err(error.error),
			},
		}
	}
}
// }}}
// {{{ Poise implementation
impl<'a> MessageContext for poise::Context<'a, UserContext, Error> {
	fn data(&self) -> &UserContext {
		Self::data(*self)
	}

	fn author_id(&self) -> u64 {
		self.author().id.get()
	}

	fn author_name(&self) -> &str {
		&self.author().name
	}

	async fn reply(&mut self, text: &str) -> Result<(), Error> {
		Self::reply(*self, text).await?;
		Ok(())
	}

	async fn send(&mut self, message: CreateReply) -> Result<(), Error> {
		Self::send(*self, message).await?;
		Ok(())
	}
}
// }}}
// {{{ Testing context
pub mod mock {
	use super::*;

	pub struct MockContext {
		pub user_id: u64,
		pub user_name: String,
		pub data: UserContext,
		pub messages: Vec<CreateReply>,
	}

	impl MockContext {
		pub fn new(data: UserContext) -> Self {
			Self {
				data,
				user_id: 666,
				user_name: "testuser".to_owned(),
				messages: vec![],
			}
		}
	}

	impl MessageContext for MockContext {
		fn data(&self) -> &UserContext {
			&self.data
		}

		fn author_id(&self) -> u64 {
			self.user_id
		}

		fn author_name(&self) -> &str {
			&self.user_name
		}

		async fn reply(&mut self, text: &str) -> Result<(), Error> {
			self.messages.push(CreateReply::default().content(text));
			Ok(())
		}

		async fn send(&mut self, message: CreateReply) -> Result<(), Error> {
			self.messages.push(message);
			Ok(())
		}
	}
}
// }}}
