//! ASCII case-insensitive option names.
//!
//! UCI requires option names to match regardless of the casing a GUI sends, so the
//! registry orders its keys by [`CaselessStr`]. [`CaselessName`] is the owned key and
//! borrows as a [`CaselessStr`], which lets lookups go through `BTreeMap::get` without
//! allocating.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;

/// Borrowed option name compared without regard to ASCII case.
#[derive(Debug)]
#[repr(transparent)]
pub struct CaselessStr(str);

impl CaselessStr {
	/// Views `name` as a case-insensitive name.
	pub fn new(name: &str) -> &CaselessStr {
		// Safety: `CaselessStr` is a `repr(transparent)` wrapper around `str`.
		unsafe { &*(name as *const str as *const CaselessStr) }
	}

	/// Returns the name with its original casing.
	pub fn as_str(&self) -> &str {
		&self.0
	}

	fn folded(&self) -> impl Iterator<Item = u8> + '_ {
		self.0.bytes().map(|b| b.to_ascii_lowercase())
	}
}

impl PartialEq for CaselessStr {
	fn eq(&self, other: &Self) -> bool {
		self.0.eq_ignore_ascii_case(&other.0)
	}
}

impl Eq for CaselessStr {}

impl PartialOrd for CaselessStr {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for CaselessStr {
	fn cmp(&self, other: &Self) -> Ordering {
		self.folded().cmp(other.folded())
	}
}

impl fmt::Display for CaselessStr {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

/// Owned registry key; orders and compares like [`CaselessStr`].
#[derive(Debug, Clone)]
pub struct CaselessName(Box<str>);

impl CaselessName {
	pub fn new(name: impl Into<Box<str>>) -> Self {
		Self(name.into())
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl Borrow<CaselessStr> for CaselessName {
	fn borrow(&self) -> &CaselessStr {
		CaselessStr::new(&self.0)
	}
}

impl PartialEq for CaselessName {
	fn eq(&self, other: &Self) -> bool {
		<Self as Borrow<CaselessStr>>::borrow(self) == other.borrow()
	}
}

impl Eq for CaselessName {}

impl PartialOrd for CaselessName {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl Ord for CaselessName {
	fn cmp(&self, other: &Self) -> Ordering {
		<Self as Borrow<CaselessStr>>::borrow(self).cmp(other.borrow())
	}
}

impl fmt::Display for CaselessName {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}

#[cfg(test)]
mod tests {
	use std::collections::BTreeMap;

	use super::*;

	#[test]
	fn equal_ignoring_ascii_case() {
		assert_eq!(CaselessStr::new("Hash"), CaselessStr::new("hASH"));
		assert_ne!(CaselessStr::new("Hash"), CaselessStr::new("Hash "));
	}

	#[test]
	fn orders_by_folded_bytes() {
		// 'b' < 'C' once folded, although 'C' (0x43) < 'b' (0x62) bytewise.
		assert!(CaselessStr::new("b") < CaselessStr::new("C"));
		assert!(CaselessStr::new("Skill") < CaselessStr::new("skill level"));
		assert_eq!(
			CaselessStr::new("UCI_Chess960").cmp(CaselessStr::new("uci_chess960")),
			Ordering::Equal
		);
	}

	#[test]
	fn owned_key_preserves_spelling() {
		let key = CaselessName::new("Move Overhead");
		assert_eq!(key.as_str(), "Move Overhead");
		assert_eq!(key.to_string(), "Move Overhead");
		assert_eq!(key, CaselessName::new("move overhead"));
	}

	#[test]
	fn btree_lookup_through_borrowed_form() {
		let mut map = BTreeMap::new();
		map.insert(CaselessName::new("Threads"), 1);
		map.insert(CaselessName::new("hash"), 2);

		assert_eq!(map.get(CaselessStr::new("THREADS")), Some(&1));
		assert_eq!(map.get(CaselessStr::new("Hash")), Some(&2));
		assert_eq!(map.get(CaselessStr::new("Ponder")), None);
	}
}
