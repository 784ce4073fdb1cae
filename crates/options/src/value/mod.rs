//! Typed option values.

use std::borrow::Cow;
use std::fmt;

use crate::error::Rejection;
use crate::hooks::OnChange;

#[cfg(test)]
mod tests;

/// The kind of an option, fixed at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OptionKind {
	/// Free text.
	String,
	/// `true` or `false`.
	Boolean,
	/// Payload-less action.
	Trigger,
	/// Integer within inclusive bounds.
	IntegerRange,
}

impl OptionKind {
	/// Returns the UCI type name (`string`, `check`, `button`, `spin`).
	pub fn uci_name(self) -> &'static str {
		match self {
			OptionKind::String => "string",
			OptionKind::Boolean => "check",
			OptionKind::Trigger => "button",
			OptionKind::IntegerRange => "spin",
		}
	}
}

impl fmt::Display for OptionKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.uci_name())
	}
}

/// Default and current value of an option, per kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OptionValue {
	String { default: String, current: String },
	Boolean { default: bool, current: bool },
	Trigger,
	IntegerRange { default: i64, current: i64, min: i64, max: i64 },
}

impl OptionValue {
	pub fn kind(&self) -> OptionKind {
		match self {
			OptionValue::String { .. } => OptionKind::String,
			OptionValue::Boolean { .. } => OptionKind::Boolean,
			OptionValue::Trigger => OptionKind::Trigger,
			OptionValue::IntegerRange { .. } => OptionKind::IntegerRange,
		}
	}

	/// Validates `text` for this kind and stores it as the current value.
	fn store(&mut self, text: &str) -> Result<(), Rejection> {
		match self {
			OptionValue::Trigger => Ok(()),
			_ if text.is_empty() => Err(Rejection::Empty),
			OptionValue::String { current, .. } => {
				text.clone_into(current);
				Ok(())
			}
			OptionValue::Boolean { current, .. } => {
				*current = parse_bool(text)?;
				Ok(())
			}
			OptionValue::IntegerRange { current, min, max, .. } => {
				let value = text
					.trim()
					.parse::<i64>()
					.map_err(|_| Rejection::NotInteger(text.to_string()))?;
				if value < *min || value > *max {
					return Err(Rejection::OutOfRange {
						value,
						min: *min,
						max: *max,
					});
				}
				*current = value;
				Ok(())
			}
		}
	}
}

fn parse_bool(text: &str) -> Result<bool, Rejection> {
	match text {
		"true" => Ok(true),
		"false" => Ok(false),
		_ => Err(Rejection::NotBoolean(text.to_string())),
	}
}

/// A single engine option.
#[derive(Debug, Clone)]
pub struct UciOption {
	value: OptionValue,
	index: Option<usize>,
	on_change: Option<OnChange>,
}

impl UciOption {
	fn from_value(value: OptionValue) -> Self {
		Self {
			value,
			index: None,
			on_change: None,
		}
	}

	/// Creates a `string` option.
	pub fn string(default: impl Into<String>) -> Self {
		let default = default.into();
		Self::from_value(OptionValue::String {
			current: default.clone(),
			default,
		})
	}

	/// Creates a `check` option.
	pub fn boolean(default: bool) -> Self {
		Self::from_value(OptionValue::Boolean {
			default,
			current: default,
		})
	}

	/// Creates a `button` option. Buttons hold no value; assigning one only fires the hook.
	pub fn trigger() -> Self {
		Self::from_value(OptionValue::Trigger)
	}

	/// Creates a `spin` option bounded by `min..=max`.
	///
	/// # Panics
	///
	/// Panics if `default` lies outside `min..=max` (including when `min > max`).
	#[track_caller]
	pub fn integer_range(default: i64, min: i64, max: i64) -> Self {
		assert!(
			min <= default && default <= max,
			"default {default} outside [{min}, {max}]"
		);
		Self::from_value(OptionValue::IntegerRange {
			default,
			current: default,
			min,
			max,
		})
	}

	/// Attaches the change hook.
	pub fn with_on_change(mut self, on_change: OnChange) -> Self {
		self.on_change = Some(on_change);
		self
	}

	pub fn kind(&self) -> OptionKind {
		self.value.kind()
	}

	pub fn value(&self) -> &OptionValue {
		&self.value
	}

	/// Declaration index, set when the option is registered.
	pub fn index(&self) -> Option<usize> {
		self.index
	}

	pub(crate) fn set_index(&mut self, index: usize) {
		self.index = Some(index);
	}

	pub fn has_on_change(&self) -> bool {
		self.on_change.is_some()
	}

	/// Returns `(min, max)` for `spin` options.
	pub fn bounds(&self) -> Option<(i64, i64)> {
		match self.value {
			OptionValue::IntegerRange { min, max, .. } => Some((min, max)),
			_ => None,
		}
	}

	/// Assigns a textual value.
	///
	/// On success the value is stored (buttons store nothing) and the change hook runs
	/// exactly once. On rejection nothing changes and the hook does not run.
	pub fn assign(&mut self, text: &str) -> Result<(), Rejection> {
		self.value.store(text)?;
		if let Some(on_change) = &self.on_change {
			on_change.call(self);
		}
		Ok(())
	}

	/// Current value of a `check` option.
	///
	/// # Panics
	///
	/// Panics if the option is not a `check`.
	#[track_caller]
	pub fn as_bool(&self) -> bool {
		match self.value {
			OptionValue::Boolean { current, .. } => current,
			_ => self.kind_mismatch(OptionKind::Boolean),
		}
	}

	/// Current value of a `spin` option.
	///
	/// # Panics
	///
	/// Panics if the option is not a `spin`.
	#[track_caller]
	pub fn as_int(&self) -> i64 {
		match self.value {
			OptionValue::IntegerRange { current, .. } => current,
			_ => self.kind_mismatch(OptionKind::IntegerRange),
		}
	}

	/// Current value of a `string` option.
	///
	/// # Panics
	///
	/// Panics if the option is not a `string`.
	#[track_caller]
	pub fn as_str(&self) -> &str {
		match &self.value {
			OptionValue::String { current, .. } => current,
			_ => self.kind_mismatch(OptionKind::String),
		}
	}

	/// Default value in protocol text form; `None` for buttons.
	pub fn default_text(&self) -> Option<Cow<'_, str>> {
		match &self.value {
			OptionValue::String { default, .. } => Some(Cow::Borrowed(default)),
			OptionValue::Boolean { default, .. } => Some(Cow::Borrowed(bool_text(*default))),
			OptionValue::Trigger => None,
			OptionValue::IntegerRange { default, .. } => Some(Cow::Owned(default.to_string())),
		}
	}

	/// Current value in protocol text form; `None` for buttons.
	pub fn current_text(&self) -> Option<Cow<'_, str>> {
		match &self.value {
			OptionValue::String { current, .. } => Some(Cow::Borrowed(current)),
			OptionValue::Boolean { current, .. } => Some(Cow::Borrowed(bool_text(*current))),
			OptionValue::Trigger => None,
			OptionValue::IntegerRange { current, .. } => Some(Cow::Owned(current.to_string())),
		}
	}

	/// Returns true if the current value equals the default. Always true for buttons.
	pub fn is_default(&self) -> bool {
		match &self.value {
			OptionValue::String { default, current } => default == current,
			OptionValue::Boolean { default, current } => default == current,
			OptionValue::Trigger => true,
			OptionValue::IntegerRange { default, current, .. } => default == current,
		}
	}

	#[track_caller]
	fn kind_mismatch(&self, requested: OptionKind) -> ! {
		panic!(
			"option kind mismatch: requested {requested}, option is {}",
			self.kind()
		)
	}
}

fn bool_text(value: bool) -> &'static str {
	if value { "true" } else { "false" }
}
