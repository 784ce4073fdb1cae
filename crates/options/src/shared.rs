//! Shared registry handle for multi-threaded drivers.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::error::OptionError;
use crate::registry::OptionsMap;

/// Cloneable handle guarding an [`OptionsMap`] with a single mutex.
///
/// Change hooks run while the lock is held. A hook must not call back into the same
/// handle or it will deadlock.
#[derive(Debug, Clone, Default)]
pub struct SharedOptions {
	inner: Arc<Mutex<OptionsMap>>,
}

impl SharedOptions {
	pub fn new(map: OptionsMap) -> Self {
		Self {
			inner: Arc::new(Mutex::new(map)),
		}
	}

	/// Assigns `value` to `name` under the lock.
	pub fn set(&self, name: &str, value: &str) -> Result<(), OptionError> {
		self.inner.lock().set(name, value)
	}

	/// Runs `f` with shared access to the registry.
	pub fn with<R>(&self, f: impl FnOnce(&OptionsMap) -> R) -> R {
		f(&*self.inner.lock())
	}

	/// Runs `f` with exclusive access to the registry.
	pub fn with_mut<R>(&self, f: impl FnOnce(&mut OptionsMap) -> R) -> R {
		f(&mut *self.inner.lock())
	}

	/// Returns the protocol listing.
	pub fn listing(&self) -> String {
		self.with(|map| map.to_string())
	}
}

impl From<OptionsMap> for SharedOptions {
	fn from(map: OptionsMap) -> Self {
		Self::new(map)
	}
}
