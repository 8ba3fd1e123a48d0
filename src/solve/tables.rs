//! Move and pruning tables for the two-phase search.
//!
//! A move table maps (coordinate, turn) to the coordinate after the turn.
//! A pruning table stores for a combination of coordinates the minimal number of
//! turns to reach the target, four bits per entry.
//!
//! The tables are built once through [TableBuilder], one [BuildStep] at a time,
//! and can be cached on disk with [Tables::save] and [Tables::load].

use std::{
	fs::File,
	io::{BufReader, BufWriter},
	path::Path,
	time::Instant,
};

use const_for::const_for;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::cube::{cubiecube::*, turn::*};

/// v[coord][i] is the coordinate when applying move i on coord
pub type Movetable = Vec<[u16; NUM_TURNS]>;

#[derive(thiserror::Error, Debug)]
pub enum TableError {
	#[error("Could not access the table file: {0}")]
	Io(#[from] std::io::Error),
	#[error("Could not encode the tables: {0}")]
	Encoding(#[from] bincode::Error),
	#[error("The table {0} has the wrong size")]
	Corrupt(&'static str),
	#[error("The pruning table {table} got stuck after {reached} of {total} entries")]
	Unreachable {
		table: &'static str,
		reached: usize,
		total: usize,
	},
}

// ===== Pruning tables =====

/// Marks an entry which wasn't reached yet
pub const UNKNOWN: u8 = 0x0f;

/// Read the 4-bit entry `i` out of its byte
pub const fn unpack(byte: u8, i: usize) -> u8 {
	if i & 1 == 0 {
		byte & 0x0f
	} else {
		byte >> 4
	}
}

/// Write the 4-bit entry `i` into its byte
pub const fn pack(byte: u8, i: usize, value: u8) -> u8 {
	if i & 1 == 0 {
		(byte & 0xf0) | (value & 0x0f)
	} else {
		(byte & 0x0f) | (value << 4)
	}
}

/// Distances to the target, two entries per byte
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug, Default)]
pub struct PruneTable {
	data: Vec<u8>,
	len: usize,
}

impl PruneTable {
	/// A table where every entry is [UNKNOWN]
	pub fn new(len: usize) -> Self {
		Self {
			data: vec![0xff; len.div_ceil(2)],
			len,
		}
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	#[inline]
	pub fn get(&self, i: usize) -> u8 {
		unpack(self.data[i / 2], i)
	}

	#[inline]
	pub fn set(&mut self, i: usize, value: u8) {
		self.data[i / 2] = pack(self.data[i / 2], i, value);
	}

	fn has_size(&self, len: usize) -> bool {
		self.len == len && self.data.len() == len.div_ceil(2)
	}

	/// Breadth first search over the whole table, starting at entry 0.
	/// Every depth layer is found by scanning all entries of the previous one.
	fn fill<F>(name: &'static str, len: usize, turns: &[usize], neighbour: F) -> Result<Self, TableError>
	where
		F: Fn(usize, usize) -> usize,
	{
		let mut table = Self::new(len);
		table.set(0, 0);

		let mut done = 1;
		let mut depth = 0;

		while done < len {
			// The next layer would be written as UNKNOWN
			if depth + 1 >= UNKNOWN {
				return Err(TableError::Unreachable { table: name, reached: done, total: len });
			}

			let mut found = 0;
			for i in 0..len {
				if table.get(i) != depth {
					continue;
				}
				for m in turns {
					let n = neighbour(i, *m);
					if table.get(n) == UNKNOWN {
						table.set(n, depth + 1);
						found += 1;
					}
				}
			}

			if found == 0 {
				return Err(TableError::Unreachable { table: name, reached: done, total: len });
			}

			done += found;
			depth += 1;
			debug!("{}: depth {} reached {} of {}", name, depth, done, len);
		}

		Ok(table)
	}
}

// ===== Parity =====

const fn generate_parity_move() -> [[u8; NUM_TURNS]; 2] {
	let mut out = [[0; NUM_TURNS]; 2];

	const_for!(m in 0..NUM_TURNS => {
		// Quarter turns are a 4-cycle on the corners
		let quarter = m % NUM_TURNWISES != TurnWise::Double as usize;
		out[0][m] = quarter as u8;
		out[1][m] = !quarter as u8;
	});

	out
}

/// PARITY_MOVE[parity][m] is the corner parity after the move m
pub const PARITY_MOVE: [[u8; NUM_TURNS]; 2] = generate_parity_move();

// ===== Table Generating =====

/// Create a movetable
///
/// Every side is turned four times on the cube, which gives the three turns of
/// that side and brings the cube back afterwards.
fn create_movetable(
	num_states: usize,
	set: fn(&mut CubieCube, usize),
	get: fn(&CubieCube) -> usize,
	multiply: fn(&mut CubieCube, &CubieCube),
) -> Movetable {
	let mut out = vec![[0; NUM_TURNS]; num_states];
	let mut cube = CubieCube::new();

	for (idx, row) in out.iter_mut().enumerate() {
		set(&mut cube, idx);

		for (side, turn) in MOVE_CUBES.iter().enumerate() {
			for wise in 0..NUM_TURNWISES {
				multiply(&mut cube, turn);
				row[NUM_TURNWISES * side + wise] = u16::try_from(get(&cube)).unwrap_or(u16::MAX);
			}
			multiply(&mut cube, turn);
		}
	}

	out
}

/// v[N_MERGE * ur_to_ul + ub_to_df] is the URtoDF coordinate of both combined
fn create_merge_table() -> Vec<u16> {
	let mut out = vec![u16::MAX; N_MERGE * N_MERGE];

	for ur_to_ul in 0..N_MERGE {
		for ub_to_df in 0..N_MERGE {
			if let Some(coord) = merge_ur_to_df(ur_to_ul, ub_to_df) {
				out[N_MERGE * ur_to_ul + ub_to_df] = coord as u16;
			}
		}
	}

	out
}

/// All tables the search needs. Built once, read-only afterwards.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Default)]
pub struct Tables {
	pub twist_move: Movetable,
	pub flip_move: Movetable,
	pub fr_to_br_move: Movetable,
	pub urf_to_dlf_move: Movetable,
	/// Only the phase 2 turns have an entry, the others are u16::MAX
	pub ur_to_df_move: Movetable,
	pub ur_to_ul_move: Movetable,
	pub ub_to_df_move: Movetable,
	pub merge_ur_to_df: Vec<u16>,

	/// Index: N_SLICE1 * twist + slice
	pub slice_twist_prune: PruneTable,
	/// Index: N_SLICE1 * flip + slice
	pub slice_flip_prune: PruneTable,
	/// Index: (N_SLICE2 * urf_to_dlf + slice) * 2 + parity
	pub slice_urf_to_dlf_parity_prune: PruneTable,
	/// Index: (N_SLICE2 * ur_to_df + slice) * 2 + parity
	pub slice_ur_to_df_parity_prune: PruneTable,
}

impl Tables {
	/// Build every table in one go
	pub fn build() -> Result<Self, TableError> {
		TableBuilder::new().finish()
	}

	/// Read tables which were written by [Tables::save]
	pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
		let reader = BufReader::new(File::open(path.as_ref())?);
		let tables: Tables = bincode::deserialize_from(reader)?;
		tables.check_sizes()?;

		info!("Loaded tables from {}", path.as_ref().display());
		Ok(tables)
	}

	pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), TableError> {
		if let Some(dir) = path.as_ref().parent() {
			if !dir.as_os_str().is_empty() {
				std::fs::create_dir_all(dir)?;
			}
		}

		let writer = BufWriter::new(File::create(path.as_ref())?);
		bincode::serialize_into(writer, self)?;

		info!("Saved tables to {}", path.as_ref().display());
		Ok(())
	}

	/// Load the tables from `path`, or build them and try to store them there.
	pub fn load_or_build<P: AsRef<Path>>(path: P) -> Result<Self, TableError> {
		match Self::load(path.as_ref()) {
			Ok(tables) => return Ok(tables),
			Err(e) => info!("No usable tables at {} ({}), building them", path.as_ref().display(), e),
		}

		let tables = Self::build()?;
		if let Err(e) = tables.save(path.as_ref()) {
			warn!("Could not save the tables: {}", e);
		}

		Ok(tables)
	}

	/// Check that every table has the expected number of entries
	pub fn check_sizes(&self) -> Result<(), TableError> {
		let moves: [(&'static str, &Movetable, usize); 7] = [
			("twist_move", &self.twist_move, N_TWIST),
			("flip_move", &self.flip_move, N_FLIP),
			("fr_to_br_move", &self.fr_to_br_move, N_FR_TO_BR),
			("urf_to_dlf_move", &self.urf_to_dlf_move, N_URF_TO_DLF),
			("ur_to_df_move", &self.ur_to_df_move, N_UR_TO_DF),
			("ur_to_ul_move", &self.ur_to_ul_move, N_UR_TO_UL),
			("ub_to_df_move", &self.ub_to_df_move, N_UB_TO_DF),
		];
		for (name, table, len) in moves {
			if table.len() != len {
				return Err(TableError::Corrupt(name));
			}
		}

		if self.merge_ur_to_df.len() != N_MERGE * N_MERGE {
			return Err(TableError::Corrupt("merge_ur_to_df"));
		}

		let prunes: [(&'static str, &PruneTable, usize); 4] = [
			("slice_twist_prune", &self.slice_twist_prune, N_SLICE1 * N_TWIST),
			("slice_flip_prune", &self.slice_flip_prune, N_SLICE1 * N_FLIP),
			(
				"slice_urf_to_dlf_parity_prune",
				&self.slice_urf_to_dlf_parity_prune,
				N_SLICE2 * N_URF_TO_DLF * N_PARITY,
			),
			(
				"slice_ur_to_df_parity_prune",
				&self.slice_ur_to_df_parity_prune,
				N_SLICE2 * N_UR_TO_DF * N_PARITY,
			),
		];
		for (name, table, len) in prunes {
			if !table.has_size(len) {
				return Err(TableError::Corrupt(name));
			}
		}

		Ok(())
	}

	// ===== Lookups used by the search =====

	/// Lower bound of turns until the phase 1 target is reached
	#[inline]
	pub fn phase1_bound(&self, twist: usize, flip: usize, slice: usize) -> usize {
		let t = self.slice_twist_prune.get(N_SLICE1 * twist + slice);
		let f = self.slice_flip_prune.get(N_SLICE1 * flip + slice);
		t.max(f) as usize
	}

	/// Lower bound of turns until a phase 2 cube is solved
	#[inline]
	pub fn phase2_bound(&self, urf_to_dlf: usize, ur_to_df: usize, slice: usize, parity: usize) -> usize {
		let c = self
			.slice_urf_to_dlf_parity_prune
			.get((N_SLICE2 * urf_to_dlf + slice) * 2 + parity);
		let e = self
			.slice_ur_to_df_parity_prune
			.get((N_SLICE2 * ur_to_df + slice) * 2 + parity);
		c.max(e) as usize
	}
}

// ===== Incremental construction =====

/// The steps to build the tables, in the order they are done.
/// The pruning tables need the move tables before them.
#[derive(Clone, Copy, PartialEq, Eq, Debug, strum::Display, strum::FromRepr)]
#[repr(u8)]
pub enum BuildStep {
	TwistMove,
	FlipMove,
	FrToBrMove,
	UrfToDlfMove,
	UrToDfMove,
	UrToUlMove,
	UbToDfMove,
	MergeUrToDf,
	SliceTwistPrune,
	SliceFlipPrune,
	SliceUrfToDlfParityPrune,
	SliceUrToDfParityPrune,
}

impl BuildStep {
	pub fn next(self) -> Option<Self> {
		Self::from_repr(self as u8 + 1)
	}
}

/// Builds the [Tables] step by step, so the caller decides when the work happens.
///
/// ```no_run
/// use twophase::solve::tables::TableBuilder;
///
/// let mut builder = TableBuilder::new();
/// while let Some(step) = builder.next().unwrap() {
///     println!("{} done", step);
/// }
/// let tables = builder.finish().unwrap();
/// ```
pub struct TableBuilder {
	tables: Tables,
	step: Option<BuildStep>,
}

impl Default for TableBuilder {
	fn default() -> Self {
		Self::new()
	}
}

impl TableBuilder {
	pub fn new() -> Self {
		Self {
			tables: Tables::default(),
			step: Some(BuildStep::TwistMove),
		}
	}

	/// The step the next call to [TableBuilder::next] does
	pub fn pending(&self) -> Option<BuildStep> {
		self.step
	}

	pub fn is_complete(&self) -> bool {
		self.step.is_none()
	}

	/// Do the pending step and return it.
	/// Once everything is built, this returns Ok(None) and does nothing.
	#[allow(clippy::should_implement_trait)]
	pub fn next(&mut self) -> Result<Option<BuildStep>, TableError> {
		let Some(step) = self.step else {
			return Ok(None);
		};

		info!("Building {}", step);
		let start = Instant::now();
		self.run(step)?;
		debug!("{} took {:?}", step, start.elapsed());

		self.step = step.next();
		Ok(Some(step))
	}

	/// Do all remaining steps and return the tables
	pub fn finish(mut self) -> Result<Tables, TableError> {
		while self.next()?.is_some() {}
		Ok(self.tables)
	}

	fn run(&mut self, step: BuildStep) -> Result<(), TableError> {
		let t = &mut self.tables;

		match step {
			BuildStep::TwistMove => {
				t.twist_move = create_movetable(
					N_TWIST,
					CubieCube::set_twist,
					CubieCube::get_twist,
					CubieCube::multiply_corners,
				);
			}
			BuildStep::FlipMove => {
				t.flip_move = create_movetable(
					N_FLIP,
					CubieCube::set_flip,
					CubieCube::get_flip,
					CubieCube::multiply_edges,
				);
			}
			BuildStep::FrToBrMove => {
				t.fr_to_br_move = create_movetable(
					N_FR_TO_BR,
					CubieCube::set_fr_to_br,
					CubieCube::get_fr_to_br,
					CubieCube::multiply_edges,
				);
			}
			BuildStep::UrfToDlfMove => {
				t.urf_to_dlf_move = create_movetable(
					N_URF_TO_DLF,
					CubieCube::set_urf_to_dlf,
					CubieCube::get_urf_to_dlf,
					CubieCube::multiply_corners,
				);
			}
			BuildStep::UrToDfMove => {
				let mut table = create_movetable(
					N_UR_TO_DF,
					CubieCube::set_ur_to_df,
					CubieCube::get_ur_to_df,
					CubieCube::multiply_edges,
				);
				// These turns move the edges into the UD-slice
				for row in table.iter_mut() {
					for (m, entry) in row.iter_mut().enumerate() {
						if LEAVES_SUBGROUP[m] {
							*entry = u16::MAX;
						}
					}
				}
				t.ur_to_df_move = table;
			}
			BuildStep::UrToUlMove => {
				t.ur_to_ul_move = create_movetable(
					N_UR_TO_UL,
					CubieCube::set_ur_to_ul,
					CubieCube::get_ur_to_ul,
					CubieCube::multiply_edges,
				);
			}
			BuildStep::UbToDfMove => {
				t.ub_to_df_move = create_movetable(
					N_UB_TO_DF,
					CubieCube::set_ub_to_df,
					CubieCube::get_ub_to_df,
					CubieCube::multiply_edges,
				);
			}
			BuildStep::MergeUrToDf => {
				t.merge_ur_to_df = create_merge_table();
			}
			BuildStep::SliceTwistPrune => {
				let all: Vec<usize> = (0..NUM_TURNS).collect();
				let (twist_move, fr_to_br_move) = (&t.twist_move, &t.fr_to_br_move);

				t.slice_twist_prune =
					PruneTable::fill("slice_twist_prune", N_SLICE1 * N_TWIST, &all, |i, m| {
						let (twist, slice) = (i / N_SLICE1, i % N_SLICE1);
						let slice = fr_to_br_move[slice * N_SLICE2][m] as usize / N_SLICE2;
						N_SLICE1 * twist_move[twist][m] as usize + slice
					})?;
			}
			BuildStep::SliceFlipPrune => {
				let all: Vec<usize> = (0..NUM_TURNS).collect();
				let (flip_move, fr_to_br_move) = (&t.flip_move, &t.fr_to_br_move);

				t.slice_flip_prune =
					PruneTable::fill("slice_flip_prune", N_SLICE1 * N_FLIP, &all, |i, m| {
						let (flip, slice) = (i / N_SLICE1, i % N_SLICE1);
						let slice = fr_to_br_move[slice * N_SLICE2][m] as usize / N_SLICE2;
						N_SLICE1 * flip_move[flip][m] as usize + slice
					})?;
			}
			BuildStep::SliceUrfToDlfParityPrune => {
				let (urf_to_dlf_move, fr_to_br_move) = (&t.urf_to_dlf_move, &t.fr_to_br_move);

				t.slice_urf_to_dlf_parity_prune = PruneTable::fill(
					"slice_urf_to_dlf_parity_prune",
					N_SLICE2 * N_URF_TO_DLF * N_PARITY,
					&PHASE2_TURNS,
					|i, m| phase2_neighbour(i, m, urf_to_dlf_move, fr_to_br_move),
				)?;
			}
			BuildStep::SliceUrToDfParityPrune => {
				let (ur_to_df_move, fr_to_br_move) = (&t.ur_to_df_move, &t.fr_to_br_move);

				t.slice_ur_to_df_parity_prune = PruneTable::fill(
					"slice_ur_to_df_parity_prune",
					N_SLICE2 * N_UR_TO_DF * N_PARITY,
					&PHASE2_TURNS,
					|i, m| phase2_neighbour(i, m, ur_to_df_move, fr_to_br_move),
				)?;
			}
		}

		Ok(())
	}
}

/// Apply the phase 2 turn m on the index (N_SLICE2 * coord + slice) * 2 + parity
fn phase2_neighbour(i: usize, m: usize, coord_move: &Movetable, fr_to_br_move: &Movetable) -> usize {
	let parity = i % N_PARITY;
	let slice = (i / N_PARITY) % N_SLICE2;
	let coord = i / N_PARITY / N_SLICE2;

	let parity = PARITY_MOVE[parity][m] as usize;
	let slice = fr_to_br_move[slice][m] as usize;
	let coord = coord_move[coord][m] as usize;

	(N_SLICE2 * coord + slice) * N_PARITY + parity
}
