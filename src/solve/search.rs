use std::sync::atomic::{AtomicBool, Ordering};

use log::debug;

use crate::cube::{cubiecube::*, turn::*};

use super::{coord::CoordCube, tables::*, SolveError, SolverConfig};

/// Coordinates which phase 2 works on
#[derive(Clone, Copy)]
struct Phase2 {
	urf_to_dlf: usize,
	ur_to_df: usize,
	slice: usize,
	parity: usize,
}

impl Phase2 {
	fn apply(self, tables: &Tables, m: usize) -> Self {
		Self {
			urf_to_dlf: tables.urf_to_dlf_move[self.urf_to_dlf][m] as usize,
			ur_to_df: tables.ur_to_df_move[self.ur_to_df][m] as usize,
			slice: tables.fr_to_br_move[self.slice][m] as usize,
			parity: PARITY_MOVE[self.parity][m] as usize,
		}
	}

	fn bound(&self, tables: &Tables) -> usize {
		tables.phase2_bound(self.urf_to_dlf, self.ur_to_df, self.slice, self.parity)
	}
}

/// One run of the two-phase search.
///
/// Phase 1 brings the cube into the domino subgroup with all 18 turns,
/// phase 2 solves it there with the 10 turns which keep it inside.
/// Both are depth-first searches with iterative deepening.
pub(crate) struct Search<'a> {
	tables: &'a Tables,
	config: &'a SolverConfig,
	start: CoordCube,
	/// Turn indices, phase 1 followed by phase 2
	path: Vec<usize>,
	/// Length of phase 1 in the current iteration
	depth1: usize,
}

impl<'a> Search<'a> {
	pub fn new(tables: &'a Tables, config: &'a SolverConfig, cube: &CubieCube) -> Self {
		Self {
			tables,
			config,
			start: CoordCube::new(cube),
			path: Vec::with_capacity(config.max_length),
			depth1: 0,
		}
	}

	/// Run the search. The flag is checked whenever phase 1 goes one level deeper.
	pub fn run(mut self, cancel: &AtomicBool) -> Result<Vec<Turn>, SolveError> {
		let (twist, flip, slice) = (
			self.start.twist as usize,
			self.start.flip as usize,
			self.start.slice(),
		);
		let bound = self.tables.phase1_bound(twist, flip, slice);

		for depth1 in bound..=self.config.max_length {
			if cancel.load(Ordering::Relaxed) {
				return Err(SolveError::Cancelled);
			}
			debug!("Phase 1 depth {}", depth1);

			self.depth1 = depth1;
			if self.phase1(twist, flip, slice, depth1) {
				return Ok(self.path.iter().map(|m| Turn::from_index(*m)).collect());
			}
		}

		Err(SolveError::NoSolution(self.config.max_length))
	}

	fn last_side(&self) -> Option<usize> {
		self.path.last().map(|m| m / NUM_TURNWISES)
	}

	fn phase1(&mut self, twist: usize, flip: usize, slice: usize, remaining: usize) -> bool {
		if remaining == 0 {
			return self.start_phase2();
		}

		for side in 0..NUM_TURNS / NUM_TURNWISES {
			if is_redundant(side, self.last_side()) {
				continue;
			}

			for wise in 0..NUM_TURNWISES {
				let m = NUM_TURNWISES * side + wise;
				let twist = self.tables.twist_move[twist][m] as usize;
				let flip = self.tables.flip_move[flip][m] as usize;
				let slice = self.tables.fr_to_br_move[slice * N_SLICE2][m] as usize / N_SLICE2;

				let bound = self.tables.phase1_bound(twist, flip, slice);
				if bound >= remaining {
					continue;
				}
				// Reaching the subgroup this close to the end only makes sense on the last turn
				if bound == 0 && remaining > 1 && remaining <= 5 {
					continue;
				}

				self.path.push(m);
				if self.phase1(twist, flip, slice, remaining - 1) {
					return true;
				}
				self.path.pop();
			}
		}

		false
	}

	/// Phase 1 is done: play it on the full coordinates and search phase 2.
	fn start_phase2(&mut self) -> bool {
		let mut coord = self.start;
		for m in self.path.iter() {
			coord.apply(self.tables, *m);
		}

		if !coord.in_subgroup() || coord.ur_to_df as usize >= N_UR_TO_DF {
			return false;
		}

		let cube = Phase2 {
			urf_to_dlf: coord.urf_to_dlf as usize,
			ur_to_df: coord.ur_to_df as usize,
			slice: coord.fr_to_br as usize,
			parity: coord.parity as usize,
		};

		let max_depth = self
			.config
			.phase2_max_depth
			.min(self.config.max_length.saturating_sub(self.depth1));

		for depth2 in cube.bound(self.tables)..=max_depth {
			if !self.phase2(cube, depth2, None) {
				continue;
			}

			// The shortest phase 2 must not continue on the side phase 1 ended with,
			// such a solution is found shorter with another phase 1
			if depth2 > 0 && self.depth1 > 0 {
				let last1 = self.path[self.depth1 - 1] / NUM_TURNWISES;
				let first2 = self.path[self.depth1] / NUM_TURNWISES;
				if is_redundant(first2, Some(last1)) {
					self.path.truncate(self.depth1);
					return false;
				}
			}

			return true;
		}

		false
	}

	fn phase2(&mut self, cube: Phase2, remaining: usize, prev: Option<usize>) -> bool {
		if remaining == 0 {
			return cube.bound(self.tables) == 0;
		}

		for m in PHASE2_TURNS {
			let side = m / NUM_TURNWISES;
			if is_redundant(side, prev) {
				continue;
			}

			let next = cube.apply(self.tables, m);
			if next.bound(self.tables) >= remaining {
				continue;
			}

			self.path.push(m);
			if self.phase2(next, remaining - 1, Some(side)) {
				return true;
			}
			self.path.pop();
		}

		false
	}
}
