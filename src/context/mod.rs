// {{{ Imports
use std::sync::{Arc, Mutex, MutexGuard};

use crate::context::paths::ShardboundPaths;
use crate::store::CounterStore;
use crate::timed;
// }}}

pub mod paths;

// {{{ Common types
pub type Error = anyhow::Error;
pub type PoiseContext<'a> = poise::Context<'a, UserContext, Error>;
// }}}
// {{{ Error handling
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
	User,
	Internal,
}

#[derive(Debug)]
pub struct TaggedError {
	pub kind: ErrorKind,
	pub error: Error,
}

impl TaggedError {
	#[inline]
	pub fn new(kind: ErrorKind, error: Error) -> Self {
		Self { kind, error }
	}
}

impl<E: Into<Error>> From<E> for TaggedError {
	fn from(value: E) -> Self {
		Self::new(ErrorKind::Internal, value.into())
	}
}

pub trait TagError {
	fn tag(self, tag: ErrorKind) -> TaggedError;
}

impl TagError for Error {
	fn tag(self, tag: ErrorKind) -> TaggedError {
		TaggedError::new(tag, self)
	}
}
// }}}
// {{{ UserContext
/// Custom user data passed to all command functions
#[derive(Clone)]
pub struct UserContext {
	pub paths: ShardboundPaths,
	pub store: Arc<Mutex<CounterStore>>,
}

impl UserContext {
	pub fn new() -> Result<Self, Error> {
		timed!("create_context", {
			let paths = ShardboundPaths::new()?;
			Ok(Self::with_paths(paths))
		})
	}

	pub fn with_paths(paths: ShardboundPaths) -> Self {
		let store = CounterStore::load(paths.clone());
		Self {
			paths,
			store: Arc::new(Mutex::new(store)),
		}
	}

	/// Commands may run concurrently on the multi-threaded runtime,
	/// so every read/mutate+write of the store happens under this lock.
	#[inline]
	pub fn counters(&self) -> MutexGuard<'_, CounterStore> {
		self.store.lock().expect("counter store lock poisoned")
	}
}
// }}}
