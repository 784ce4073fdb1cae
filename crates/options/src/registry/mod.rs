//! The options map.
//!
//! Two structures share the entries: a case-insensitive `BTreeMap` from name to slot
//! for lookup, and a slot vector in registration order for listing. A slot's position
//! is the option's declaration index. Re-registering a name vacates its old slot, so
//! the listing never shows a name twice and indexes are never reused.

use std::collections::BTreeMap;
use std::fmt;

use tracing::{debug, warn};

use crate::caseless::{CaselessName, CaselessStr};
use crate::error::OptionError;
use crate::value::UciOption;


#[derive(Debug, Clone)]
struct Slot {
	name: Box<str>,
	option: UciOption,
}

/// Registry of engine options.
#[derive(Debug, Clone, Default)]
pub struct OptionsMap {
	by_name: BTreeMap<CaselessName, usize>,
	slots: Vec<Option<Slot>>,
}

impl OptionsMap {
	/// Creates an empty registry.
	pub fn new() -> Self {
		Self::default()
	}

	/// Registers `option` under `name`, replacing any option of the same name in any
	/// casing. A replaced option keeps its first-registered spelling. Returns the
	/// declaration index assigned to it.
	pub fn register(&mut self, name: impl Into<Box<str>>, mut option: UciOption) -> usize {
		let mut name = name.into();
		let index = self.slots.len();
		option.set_index(index);

		if let Some(old) = self.by_name.remove(CaselessStr::new(&name)) {
			debug!(option = %name, old_index = old, index, "option re-registered");
			if let Some(slot) = self.slots[old].take() {
				name = slot.name;
			}
		} else {
			debug!(option = %name, index, kind = %option.kind(), "option registered");
		}

		self.by_name.insert(CaselessName::new(name.clone()), index);
		self.slots.push(Some(Slot { name, option }));
		index
	}

	/// Looks up an option by name, ignoring ASCII case.
	pub fn get(&self, name: &str) -> Option<&UciOption> {
		self.slot(name).map(|slot| &slot.option)
	}

	/// Returns the registered spelling of `name`.
	pub fn canonical_name(&self, name: &str) -> Option<&str> {
		self.slot(name).map(|slot| &*slot.name)
	}

	pub fn contains(&self, name: &str) -> bool {
		self.by_name.contains_key(CaselessStr::new(name))
	}

	/// Assigns `value` to the option `name`.
	///
	/// Unknown names and rejected values leave the registry untouched and fire no hook.
	/// Protocol drivers that tolerate bad input may ignore the error.
	pub fn set(&mut self, name: &str, value: &str) -> Result<(), OptionError> {
		let Some(&index) = self.by_name.get(CaselessStr::new(name)) else {
			let suggestion = self.suggest(name);
			debug!(option = name, ?suggestion, "assignment to unknown option ignored");
			return Err(OptionError::Unknown {
				name: name.to_string(),
				suggestion,
			});
		};
		let Some(slot) = self.slots[index].as_mut() else {
			unreachable!("lookup index points at a vacated slot");
		};

		match slot.option.assign(value) {
			Ok(()) => {
				debug!(option = %slot.name, value, "option updated");
				Ok(())
			}
			Err(reason) => {
				warn!(option = %slot.name, value, %reason, "option assignment rejected");
				Err(OptionError::Rejected {
					name: slot.name.to_string(),
					reason,
				})
			}
		}
	}

	/// Iterates `(name, option)` pairs in declaration order.
	pub fn iter(&self) -> Iter<'_> {
		Iter {
			slots: self.slots.iter(),
		}
	}

	/// Number of registered options.
	pub fn len(&self) -> usize {
		self.by_name.len()
	}

	pub fn is_empty(&self) -> bool {
		self.by_name.is_empty()
	}

	fn slot(&self, name: &str) -> Option<&Slot> {
		let &index = self.by_name.get(CaselessStr::new(name))?;
		self.slots[index].as_ref()
	}

	/// Closest registered name within edit distance 3, compared case-insensitively.
	fn suggest(&self, name: &str) -> Option<String> {
		let wanted = name.to_ascii_lowercase();
		self.iter()
			.map(|(candidate, _)| {
				let distance = strsim::levenshtein(&wanted, &candidate.to_ascii_lowercase());
				(distance, candidate)
			})
			.filter(|&(distance, _)| distance <= 3)
			.min_by_key(|&(distance, _)| distance)
			.map(|(_, candidate)| candidate.to_string())
	}
}

/// Writes the UCI option listing in declaration order, each entry prefixed by a newline.
impl fmt::Display for OptionsMap {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		for (name, option) in self {
			write!(f, "\noption name {name} type {}", option.kind())?;
			if let Some(default) = option.default_text() {
				write!(f, " default {default}")?;
			}
			if let Some((min, max)) = option.bounds() {
				write!(f, " min {min} max {max}")?;
			}
		}
		Ok(())
	}
}

/// Declaration-order iterator over an [`OptionsMap`].
#[derive(Debug, Clone)]
pub struct Iter<'a> {
	slots: std::slice::Iter<'a, Option<Slot>>,
}

impl<'a> Iterator for Iter<'a> {
	type Item = (&'a str, &'a UciOption);

	fn next(&mut self) -> Option<Self::Item> {
		self.slots
			.by_ref()
			.flatten()
			.next()
			.map(|slot| (&*slot.name, &slot.option))
	}
}

impl<'a> IntoIterator for &'a OptionsMap {
	type Item = (&'a str, &'a UciOption);
	type IntoIter = Iter<'a>;

	fn into_iter(self) -> Iter<'a> {
		self.iter()
	}
}
