use crate::cube::cubiecube::*;

use super::tables::{Tables, PARITY_MOVE};

/// The cube, seen only through its coordinates.
/// Turning is a table lookup per coordinate.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CoordCube {
	pub twist: u16,
	pub flip: u16,
	pub parity: u8,
	pub fr_to_br: u16,
	pub urf_to_dlf: u16,
	pub ur_to_ul: u16,
	pub ub_to_df: u16,
	/// Only valid once `ur_to_ul` and `ub_to_df` are both below N_MERGE
	pub ur_to_df: u32,
}

impl From<&CubieCube> for CoordCube {
	fn from(cube: &CubieCube) -> Self {
		Self {
			twist: cube.get_twist() as u16,
			flip: cube.get_flip() as u16,
			parity: cube.corner_parity(),
			fr_to_br: cube.get_fr_to_br() as u16,
			urf_to_dlf: cube.get_urf_to_dlf() as u16,
			ur_to_ul: cube.get_ur_to_ul() as u16,
			ub_to_df: cube.get_ub_to_df() as u16,
			ur_to_df: cube.get_ur_to_df() as u32,
		}
	}
}

impl CoordCube {
	pub fn new(cube: &CubieCube) -> Self {
		Self::from(cube)
	}

	/// Apply the turn with index m
	pub fn apply(&mut self, tables: &Tables, m: usize) {
		self.twist = tables.twist_move[self.twist as usize][m];
		self.flip = tables.flip_move[self.flip as usize][m];
		self.parity = PARITY_MOVE[self.parity as usize][m];
		self.fr_to_br = tables.fr_to_br_move[self.fr_to_br as usize][m];
		self.urf_to_dlf = tables.urf_to_dlf_move[self.urf_to_dlf as usize][m];
		self.ur_to_ul = tables.ur_to_ul_move[self.ur_to_ul as usize][m];
		self.ub_to_df = tables.ub_to_df_move[self.ub_to_df as usize][m];

		let (a, b) = (self.ur_to_ul as usize, self.ub_to_df as usize);
		if a < N_MERGE && b < N_MERGE {
			self.ur_to_df = tables.merge_ur_to_df[N_MERGE * a + b] as u32;
		}
	}

	/// Position coordinate of the UD-slice edges, 0 once they are all in the slice
	pub fn slice(&self) -> usize {
		self.fr_to_br as usize / N_SLICE2
	}

	/// Whether the cube is in the domino subgroup
	pub fn in_subgroup(&self) -> bool {
		self.twist == 0 && self.flip == 0 && self.slice() == 0
	}
}
