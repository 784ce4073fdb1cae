//! Error types for option assignment.

use thiserror::Error;

/// Why a value was refused by an option. The option is left unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Rejection {
	/// Non-button options never accept an empty value.
	#[error("value must not be empty")]
	Empty,

	/// Check options accept only `true` or `false`.
	#[error("invalid boolean: '{0}' (expected true or false)")]
	NotBoolean(String),

	/// Spin options accept only integers.
	#[error("invalid integer: '{0}'")]
	NotInteger(String),

	/// Spin value outside the option's bounds.
	#[error("{value} is out of range [{min}, {max}]")]
	OutOfRange { value: i64, min: i64, max: i64 },
}

/// Errors from assigning an option by name.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OptionError {
	/// No option is registered under the name.
	#[error("unknown option: {name}{}", suggestion_suffix(.suggestion))]
	Unknown {
		name: String,
		/// Closest registered name, if any is near enough.
		suggestion: Option<String>,
	},

	/// The option refused the value.
	#[error("invalid value for option '{name}': {reason}")]
	Rejected {
		name: String,
		#[source]
		reason: Rejection,
	},
}

impl OptionError {
	/// Returns the option name the error refers to.
	pub fn name(&self) -> &str {
		match self {
			OptionError::Unknown { name, .. } | OptionError::Rejected { name, .. } => name,
		}
	}
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
	suggestion
		.as_deref()
		.map(|s| format!(" (did you mean '{s}'?)"))
		.unwrap_or_default()
}
