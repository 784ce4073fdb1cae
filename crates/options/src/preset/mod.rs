//! Option presets loaded from TOML.
//!
//! A preset is a table of option names to values:
//!
//! ```toml
//! [options]
//! Hash = 256
//! Ponder = true
//! SyzygyPath = "/srv/syzygy"
//! ```
//!
//! Applying a preset is best-effort. Each entry goes through [`OptionsMap::set`] in
//! document order; refused entries are collected in the [`PresetReport`] and the rest
//! still apply. Only unreadable or malformed files fail.

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::error::OptionError;
use crate::registry::OptionsMap;

#[cfg(test)]
mod tests;

/// Errors loading a preset file.
#[derive(Debug, Error)]
pub enum PresetError {
	#[error("I/O error reading {path}: {error}")]
	Io {
		path: PathBuf,
		#[source]
		error: std::io::Error,
	},

	#[error("TOML parse error: {0}")]
	Parse(#[from] toml::de::Error),
}

/// Why a preset entry was not applied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EntryError {
	/// The registry refused the assignment.
	#[error(transparent)]
	Option(#[from] OptionError),

	/// The TOML value has a type no option kind accepts.
	#[error("unsupported value type for option '{name}': {kind}")]
	Unsupported { name: String, kind: &'static str },
}

impl EntryError {
	/// Returns the option name the entry refers to.
	pub fn name(&self) -> &str {
		match self {
			EntryError::Option(err) => err.name(),
			EntryError::Unsupported { name, .. } => name,
		}
	}
}

/// A parsed preset.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Preset {
	#[serde(default)]
	options: toml::Table,
}

/// Outcome of [`Preset::apply`].
#[derive(Debug, Default)]
pub struct PresetReport {
	/// Names assigned successfully, in application order.
	pub applied: Vec<String>,
	/// Entries that were refused.
	pub errors: Vec<EntryError>,
}

impl PresetReport {
	pub fn is_clean(&self) -> bool {
		self.errors.is_empty()
	}
}

impl Preset {
	/// Parses a preset from TOML text.
	pub fn from_toml(text: &str) -> Result<Self, PresetError> {
		Ok(toml::from_str(text)?)
	}

	/// Reads and parses a preset file.
	pub fn load(path: &Path) -> Result<Self, PresetError> {
		let text = std::fs::read_to_string(path).map_err(|error| PresetError::Io {
			path: path.to_path_buf(),
			error,
		})?;
		let preset = Self::from_toml(&text)?;
		debug!(path = %path.display(), entries = preset.len(), "preset loaded");
		Ok(preset)
	}

	pub fn len(&self) -> usize {
		self.options.len()
	}

	pub fn is_empty(&self) -> bool {
		self.options.is_empty()
	}

	/// Assigns every entry to `map`.
	pub fn apply(&self, map: &mut OptionsMap) -> PresetReport {
		let mut report = PresetReport::default();
		for (name, value) in &self.options {
			let result = match value_text(value) {
				Some(text) => map.set(name, &text).map_err(EntryError::from),
				None => {
					let kind = value.type_str();
					warn!(option = %name, kind, "preset entry skipped");
					Err(EntryError::Unsupported {
						name: name.clone(),
						kind,
					})
				}
			};
			match result {
				Ok(()) => report.applied.push(name.clone()),
				Err(err) => report.errors.push(err),
			}
		}
		report
	}
}

fn value_text(value: &toml::Value) -> Option<String> {
	match value {
		toml::Value::String(s) => Some(s.clone()),
		toml::Value::Integer(i) => Some(i.to_string()),
		toml::Value::Boolean(b) => Some(b.to_string()),
		_ => None,
	}
}
