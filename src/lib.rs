//! A two-phase solver for the 3x3 Rubik's Cube.
//!
//! Cubes come in as facelet strings: 54 symbols, nine per side, the sides in
//! the order U, R, F, D, L, B, each read row by row.
//!
//! ```
//! use twophase::prelude::*;
//!
//! let mut cube = CubieCube::new();
//! cube.apply_turns(&parse_turns("R U R' U'").unwrap());
//! assert_eq!(verify_code(&cube.to_facelets()), 0);
//!
//! cube.apply_turns(&invert_turns(&parse_turns("R U R' U'").unwrap()));
//! assert!(cube.is_solved());
//! ```
//!
//! Solving needs the move and pruning tables, see [solve::tables::Tables].

pub mod cube;
mod math;
pub mod solve;
mod util;

pub use util::{random_cube, random_cube_with, random_cubie_with, verify, verify_code};

pub mod prelude {
	pub use crate::cube::{cubiecube::CubieCube, facelet::*, turn::*, *};
	pub use crate::solve::{
		tables::{TableBuilder, TableError, Tables},
		SolveError, Solver, SolverConfig,
	};
	pub use crate::{random_cube, random_cube_with, verify, verify_code};
}
