//! UCI options registry.
//!
//! Options are named, typed engine parameters that a protocol driver can list and
//! assign at runtime. This crate provides:
//! - Typed option values ([`UciOption`], [`OptionValue`], [`OptionKind`])
//! - The registry ([`OptionsMap`]) with case-insensitive lookup and declaration-order listing
//! - Change hooks ([`OnChange`]) bound to engine capabilities ([`EngineHooks`])
//! - The engine's built-in option table ([`builtins::register_defaults`])
//! - TOML option presets ([`preset::Preset`])
//!
//! There is no global registry. The application owns an [`OptionsMap`] (or a
//! [`SharedOptions`] handle) and passes it to whatever needs configuration.
//!
//! # Example
//!
//! ```
//! use sugar_options::{OptionsMap, UciOption};
//!
//! let mut options = OptionsMap::new();
//! options.register("Hash", UciOption::integer_range(16, 1, 1024));
//! options.register("Ponder", UciOption::boolean(false));
//!
//! options.set("hash", "64").unwrap();
//! assert_eq!(options.get("HASH").unwrap().as_int(), 64);
//! assert!(options.set("Hash", "4096").is_err());
//!
//! assert_eq!(
//! 	options.to_string(),
//! 	"\noption name Hash type spin default 16 min 1 max 1024\
//! 	 \noption name Ponder type check default false"
//! );
//! ```

pub mod builtins;
mod caseless;
mod error;
mod hooks;
pub mod preset;
mod registry;
mod shared;
mod value;

pub use caseless::{CaselessName, CaselessStr};
pub use error::{OptionError, Rejection};
pub use hooks::{Capability, EngineHooks, NoopHooks, OnChange};
pub use registry::{Iter, OptionsMap};
pub use shared::SharedOptions;
pub use value::{OptionKind, OptionValue, UciOption};
