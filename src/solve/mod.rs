//! The two-phase solver.
//!
//! ```no_run
//! use std::sync::Arc;
//! use twophase::prelude::*;
//!
//! let tables = Arc::new(Tables::load_or_build("data/twophase.dat").unwrap());
//! let solver = Solver::new(tables, SolverConfig::default());
//!
//! let turns = solver
//!     .solve("UUFUUFUUFRRRRRRRRRFFDFFDFFDDDBDDBDDBLLLLLLLLLUBBUBBUBB")
//!     .unwrap();
//! assert_eq!(format_turns(&turns), "R'");
//! ```

use std::sync::{atomic::AtomicBool, Arc};

use log::debug;
use rayon::prelude::*;

use crate::cube::{cubiecube::CubieCube, facelet::FormatError, turn::Turn, CubeError};

pub mod coord;
mod search;
pub mod tables;

use search::Search;
use tables::Tables;

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SolveError {
	#[error("Invalid facelet string: {0}")]
	Format(#[from] FormatError),
	#[error("Unsolvable cube: {0}")]
	Invalid(#[from] CubeError),
	#[error("No solution with at most {0} turns")]
	NoSolution(usize),
	#[error("The search was cancelled")]
	Cancelled,
}

/// Limits of the search
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct SolverConfig {
	/// No solution is longer than this
	pub max_length: usize,
	/// Phase 2 never gets more turns than this
	pub phase2_max_depth: usize,
}

impl Default for SolverConfig {
	fn default() -> Self {
		Self {
			max_length: 24,
			phase2_max_depth: 12,
		}
	}
}

/// Solves cubes with a shared set of tables.
/// Cloning is cheap, the tables aren't copied.
#[derive(Clone)]
pub struct Solver {
	tables: Arc<Tables>,
	config: SolverConfig,
}

impl Solver {
	pub fn new(tables: Arc<Tables>, config: SolverConfig) -> Self {
		Self { tables, config }
	}

	pub fn tables(&self) -> &Tables {
		&self.tables
	}

	pub fn config(&self) -> &SolverConfig {
		&self.config
	}

	/// Solve the cube given as facelet string
	pub fn solve(&self, facelets: &str) -> Result<Vec<Turn>, SolveError> {
		self.solve_with_cancel(facelets, &AtomicBool::new(false))
	}

	/// Like [Solver::solve], but gives up with [SolveError::Cancelled] once `cancel` is set.
	pub fn solve_with_cancel(&self, facelets: &str, cancel: &AtomicBool) -> Result<Vec<Turn>, SolveError> {
		let cube = CubieCube::from_facelets(facelets)?;
		self.solve_cubie_with_cancel(&cube, cancel)
	}

	pub fn solve_cubie(&self, cube: &CubieCube) -> Result<Vec<Turn>, SolveError> {
		self.solve_cubie_with_cancel(cube, &AtomicBool::new(false))
	}

	fn solve_cubie_with_cancel(&self, cube: &CubieCube, cancel: &AtomicBool) -> Result<Vec<Turn>, SolveError> {
		cube.verify()?;

		let turns = Search::new(&self.tables, &self.config, cube).run(cancel)?;
		debug!("Found a solution with {} turns", turns.len());

		#[cfg(debug_assertions)]
		{
			let mut c = cube.clone();
			c.apply_turns(&turns);
			debug_assert!(c.is_solved());
		}

		Ok(turns)
	}

	/// Solve many cubes in parallel
	pub fn solve_batch<S>(&self, cubes: &[S]) -> Vec<Result<Vec<Turn>, SolveError>>
	where
		S: AsRef<str> + Sync,
	{
		cubes.par_iter().map(|c| self.solve(c.as_ref())).collect()
	}
}
