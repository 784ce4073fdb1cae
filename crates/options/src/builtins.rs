//! The engine's built-in option table.

use std::sync::Arc;

use crate::hooks::{Capability, EngineHooks, OnChange};
use crate::registry::OptionsMap;
use crate::value::UciOption;

/// Names of the built-in options, as listed to GUIs.
pub mod names {
	pub const TACTICAL_MODE: &str = "Tactical Mode";
	pub const DEBUG_LOG_FILE: &str = "Debug Log File";
	pub const CONTEMPT: &str = "Contempt";
	pub const THREADS: &str = "Threads";
	pub const HASH: &str = "Hash";
	pub const CLEAR_HASH: &str = "Clear Hash";
	pub const PONDER: &str = "Ponder";
	pub const MAX_LMR: &str = "MaxLMR";
	pub const MULTI_PV: &str = "MultiPV";
	pub const SKILL_LEVEL: &str = "Skill Level";
	pub const MOVE_OVERHEAD: &str = "Move Overhead";
	pub const MINIMUM_THINKING_TIME: &str = "Minimum Thinking Time";
	pub const LARGE_PAGES: &str = "Large Pages";
	pub const SLOW_MOVER: &str = "Slow Mover";
	pub const NODES_TIME: &str = "nodestime";
	pub const CHESS960: &str = "UCI_Chess960";
	pub const SYZYGY_PATH: &str = "SyzygyPath";
	pub const SYZYGY_PROBE_DEPTH: &str = "SyzygyProbeDepth";
	pub const SYZYGY_50_MOVE_RULE: &str = "Syzygy50MoveRule";
	pub const SYZYGY_PROBE_LIMIT: &str = "SyzygyProbeLimit";
}

/// Evaluation weights, each a percentage spin reloading evaluation on change.
pub const EVAL_WEIGHTS: &[&str] = &[
	"Material(mg)",
	"Material(eg)",
	"Imbalance(mg)",
	"Imbalance(eg)",
	"PawnStructure(mg)",
	"PawnStructure(eg)",
	"Mobility(mg)",
	"Mobility(eg)",
	"PassedPawns(mg)",
	"PassedPawns(eg)",
	"KingSafety(mg)",
	"KingSafety(eg)",
	"Threats(mg)",
	"Threats(eg)",
	"Space",
];

/// Search pruning switches, all on by default.
pub const SEARCH_SWITCHES: &[&str] = &["Razoring", "Futility", "NullMove", "ProbCut", "Pruning", "LMR"];

/// Largest transposition table size in megabytes.
#[cfg(target_pointer_width = "64")]
pub const MAX_HASH_MB: i64 = 1024 * 1024;
#[cfg(not(target_pointer_width = "64"))]
pub const MAX_HASH_MB: i64 = 2048;

pub const MAX_THREADS: i64 = 512;

/// Default thread count: the machine's available parallelism, at least one.
pub fn default_threads() -> i64 {
	std::thread::available_parallelism()
		.map_or(1, |n| n.get() as i64)
		.clamp(1, MAX_THREADS)
}

/// Registers the built-in options in listing order, binding hooks to `hooks`.
pub fn register_defaults(map: &mut OptionsMap, hooks: Arc<dyn EngineHooks>) {
	use names::*;

	let bind = |capability: Capability| OnChange::bind(&hooks, capability);

	map.register(TACTICAL_MODE, UciOption::boolean(false));
	map.register(
		DEBUG_LOG_FILE,
		UciOption::string("").with_on_change(bind(|h, o| h.set_log_target(o.as_str()))),
	);
	map.register(CONTEMPT, UciOption::integer_range(0, -100, 100));
	map.register(
		THREADS,
		UciOption::integer_range(default_threads(), 1, MAX_THREADS)
			.with_on_change(bind(|h, o| h.reconfigure_workers(o.as_int() as usize))),
	);
	map.register(
		HASH,
		UciOption::integer_range(16, 1, MAX_HASH_MB)
			.with_on_change(bind(|h, o| h.resize_table(o.as_int() as usize))),
	);
	map.register(
		CLEAR_HASH,
		UciOption::trigger().with_on_change(bind(|h, _| h.clear_search())),
	);
	map.register(PONDER, UciOption::boolean(false));
	for &weight in EVAL_WEIGHTS {
		map.register(
			weight,
			UciOption::integer_range(100, 0, 300).with_on_change(bind(|h, _| h.reload_eval())),
		);
	}
	for &switch in SEARCH_SWITCHES {
		map.register(switch, UciOption::boolean(true));
	}
	map.register(MAX_LMR, UciOption::integer_range(10, 0, 20));
	map.register(MULTI_PV, UciOption::integer_range(1, 1, 500));
	map.register(SKILL_LEVEL, UciOption::integer_range(20, 0, 20));
	map.register(MOVE_OVERHEAD, UciOption::integer_range(30, 0, 5000));
	map.register(MINIMUM_THINKING_TIME, UciOption::integer_range(20, 0, 5000));
	map.register(
		LARGE_PAGES,
		UciOption::boolean(true).with_on_change(bind(|h, o| h.set_large_pages(o.as_bool()))),
	);
	map.register(SLOW_MOVER, UciOption::integer_range(89, 10, 1000));
	map.register(NODES_TIME, UciOption::integer_range(0, 0, 10000));
	map.register(CHESS960, UciOption::boolean(false));
	map.register(
		SYZYGY_PATH,
		UciOption::string("<empty>").with_on_change(bind(|h, o| h.set_tablebase_path(o.as_str()))),
	);
	map.register(SYZYGY_PROBE_DEPTH, UciOption::integer_range(1, 1, 100));
	map.register(SYZYGY_50_MOVE_RULE, UciOption::boolean(true));
	map.register(SYZYGY_PROBE_LIMIT, UciOption::integer_range(6, 0, 6));
}
