//! Search time allocation.
//!
//! [`TimeManager::init`] turns the clock state sent with `go` into an optimum and a
//! maximum thinking time. Four time controls are handled:
//!
//! - `inc == 0 && movestogo == 0`: sudden death
//! - `inc == 0 && movestogo != 0`: x moves in y minutes
//! - `inc > 0 && movestogo == 0`: base time plus increment
//! - `inc > 0 && movestogo != 0`: x moves in y minutes plus increment
//!
//! `Move Overhead`, `nodestime` and `Ponder` are read from the options map.

use std::time::{Duration, Instant};

use sugar_options::OptionsMap;
use sugar_options::builtins::names;
use tracing::debug;


/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Color {
	White,
	Black,
}

impl Color {
	fn index(self) -> usize {
		self as usize
	}
}

/// Clock limits for one search, in milliseconds (or nodes in nodes-as-time mode).
#[derive(Debug, Clone)]
pub struct Limits {
	pub time: [i64; 2],
	pub inc: [i64; 2],
	pub movestogo: i64,
	/// Nodes per millisecond; set by [`TimeManager::init`] in nodes-as-time mode.
	pub npmsec: i64,
	pub start: Instant,
}

impl Limits {
	pub fn new(start: Instant) -> Self {
		Self {
			time: [0; 2],
			inc: [0; 2],
			movestogo: 0,
			npmsec: 0,
			start,
		}
	}

	pub fn with_clock(mut self, color: Color, time: i64, inc: i64) -> Self {
		self.time[color.index()] = time;
		self.inc[color.index()] = inc;
		self
	}

	pub fn with_movestogo(mut self, movestogo: i64) -> Self {
		self.movestogo = movestogo;
		self
	}
}

#[derive(Clone, Copy)]
enum Budget {
	Optimum,
	Maximum,
}

impl Budget {
	/// Ratio of the remaining time we may use when in trouble.
	fn max_ratio(self) -> f64 {
		match self {
			Budget::Optimum => 1.0,
			Budget::Maximum => 5.25,
		}
	}

	/// Cap on the share of the clock taken for one move.
	fn steal_ratio(self) -> f64 {
		match self {
			Budget::Optimum => 0.018,
			Budget::Maximum => 0.076,
		}
	}
}

const DEFAULT_MOVE_OVERHEAD: i64 = 30;
const MOVE_HORIZON: i64 = 49;

fn remaining(budget: Budget, time: i64, inc: i64, move_overhead: i64, movestogo: i64) -> i64 {
	let (time_f, inc_f, mtg) = (time as f64, inc as f64, movestogo as f64);
	let ratio1 = (budget.max_ratio() * (time_f + inc_f * (mtg - 1.0)) / mtg).min(1.0);
	let ratio2 = (budget.steal_ratio() * (1.0 + 93.0 * inc_f / time_f)).min(1.0);
	let hypothetical = time.saturating_sub(move_overhead).max(0) as f64;

	(hypothetical * ratio1.min(ratio2)) as i64
}

/// Moves we plan for; shrinks when we are ahead to spend time sooner.
fn move_horizon(score: i32) -> i64 {
	if score > 0 {
		let reduction = (16.4 * (1.0 + f64::from(score.unsigned_abs()) / 87.5).ln()) as i64;
		(MOVE_HORIZON - reduction).max(1)
	} else {
		MOVE_HORIZON
	}
}

/// Per-game time manager.
#[derive(Debug, Clone)]
pub struct TimeManager {
	start: Instant,
	optimum: i64,
	maximum: i64,
	/// Nodes-as-time budget; `None` until the first search of a game converts the clock.
	available_nodes: Option<i64>,
}

impl Default for TimeManager {
	fn default() -> Self {
		Self::new()
	}
}

impl TimeManager {
	pub fn new() -> Self {
		Self {
			start: Instant::now(),
			optimum: 0,
			maximum: 0,
			available_nodes: None,
		}
	}

	/// Computes the time budget for the side `us` at the start of a search.
	///
	/// `score` is the previous search's evaluation from our point of view. In
	/// nodes-as-time mode `limits` is rewritten in nodes.
	pub fn init(&mut self, limits: &mut Limits, us: Color, score: i32, options: &OptionsMap) {
		let move_overhead = options
			.get(names::MOVE_OVERHEAD)
			.map_or(DEFAULT_MOVE_OVERHEAD, |o| o.as_int());
		let npmsec = options.get(names::NODES_TIME).map_or(0, |o| o.as_int());
		let ponder = options.get(names::PONDER).is_some_and(|o| o.as_bool());
		let side = us.index();

		// Nodes per millisecond must sit well below real engine speed to avoid losses on time.
		if npmsec != 0 {
			let clock = limits.time[side];
			limits.time[side] = *self
				.available_nodes
				.get_or_insert_with(|| npmsec.saturating_mul(clock));
			limits.inc[side] = limits.inc[side].saturating_mul(npmsec);
			limits.npmsec = npmsec;
		}

		self.start = limits.start;

		let horizon = move_horizon(score);
		let movestogo = if limits.movestogo > 0 {
			limits.movestogo.min(horizon)
		} else {
			horizon
		};

		let (time, inc) = (limits.time[side], limits.inc[side]);
		self.optimum = remaining(Budget::Optimum, time, inc, move_overhead, movestogo);
		self.maximum = remaining(Budget::Maximum, time, inc, move_overhead, movestogo);

		if ponder {
			self.optimum = self.optimum.saturating_add(self.optimum / 4);
		}

		debug!(
			optimum = self.optimum,
			maximum = self.maximum,
			movestogo,
			npmsec,
			"time budget computed"
		);
	}

	/// Target thinking time.
	pub fn optimum(&self) -> i64 {
		self.optimum
	}

	/// Hard limit on thinking time.
	pub fn maximum(&self) -> i64 {
		self.maximum
	}

	pub fn elapsed(&self) -> Duration {
		self.start.elapsed()
	}

	/// Node budget remaining in nodes-as-time mode; zero before the first search of a
	/// game and negative once overspent.
	pub fn available_nodes(&self) -> i64 {
		self.available_nodes.unwrap_or(0)
	}

	/// Charges `nodes` searched against the nodes-as-time budget.
	pub fn spend_nodes(&mut self, nodes: i64) {
		if let Some(available) = &mut self.available_nodes {
			*available = available.saturating_sub(nodes);
		}
	}

	/// Forgets the node budget; call on a new game.
	pub fn reset_nodes(&mut self) {
		self.available_nodes = None;
	}
}
