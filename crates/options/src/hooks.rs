//! Change hooks.
//!
//! An option may carry an [`OnChange`] callback that runs after every successful
//! assignment, synchronously and on the caller's thread. Built-in options bind their
//! callbacks to one capability of an [`EngineHooks`] object supplied at registration,
//! so the registry never reaches into global engine state.

use std::fmt;
use std::sync::Arc;

use crate::value::UciOption;

/// Engine subsystems that option changes can reconfigure.
///
/// Implementations own the side effects. Failures stay inside the implementation; the
/// registry has no channel to receive them.
pub trait EngineHooks: Send + Sync {
	/// Resets search state (history tables, transposition table contents).
	fn clear_search(&self);

	/// Re-initializes evaluation after a weight changed.
	fn reload_eval(&self);

	/// Resizes the transposition table to `megabytes`.
	fn resize_table(&self, megabytes: usize);

	/// Switches large page allocation for the transposition table.
	fn set_large_pages(&self, enabled: bool);

	/// Resizes the search worker pool to `threads`.
	fn reconfigure_workers(&self, threads: usize);

	/// Re-initializes endgame tablebases from `path`.
	fn set_tablebase_path(&self, path: &str);

	/// Redirects the diagnostic log to `path`; an empty path stops logging.
	fn set_log_target(&self, path: &str);
}

/// Hooks that do nothing.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopHooks;

impl EngineHooks for NoopHooks {
	fn clear_search(&self) {}
	fn reload_eval(&self) {}
	fn resize_table(&self, _megabytes: usize) {}
	fn set_large_pages(&self, _enabled: bool) {}
	fn reconfigure_workers(&self, _threads: usize) {}
	fn set_tablebase_path(&self, _path: &str) {}
	fn set_log_target(&self, _path: &str) {}
}

type Callback = dyn Fn(&UciOption) + Send + Sync;

/// One [`EngineHooks`] operation, fed from the changed option.
pub type Capability = fn(&dyn EngineHooks, &UciOption);

/// Callback slot invoked with the option after each successful assignment.
#[derive(Clone)]
pub struct OnChange(Arc<Callback>);

impl OnChange {
	/// Wraps an arbitrary callback.
	pub fn new<F>(f: F) -> Self
	where
		F: Fn(&UciOption) + Send + Sync + 'static,
	{
		Self(Arc::new(f))
	}

	/// Binds `capability` of `hooks` as the callback.
	///
	/// ```
	/// use std::sync::Arc;
	/// use sugar_options::{EngineHooks, NoopHooks, OnChange, UciOption};
	///
	/// let hooks: Arc<dyn EngineHooks> = Arc::new(NoopHooks);
	/// let hash = UciOption::integer_range(16, 1, 1024)
	/// 	.with_on_change(OnChange::bind(&hooks, |h, o| h.resize_table(o.as_int() as usize)));
	/// assert!(hash.has_on_change());
	/// ```
	pub fn bind(hooks: &Arc<dyn EngineHooks>, capability: Capability) -> Self {
		let hooks = Arc::clone(hooks);
		Self::new(move |option| capability(hooks.as_ref(), option))
	}

	pub(crate) fn call(&self, option: &UciOption) {
		(self.0)(option)
	}
}

impl fmt::Debug for OnChange {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str("OnChange(..)")
	}
}
