use const_for::const_for;
use strum::VariantArray;

use crate::{cube::*, math::*};
use turn::*;

pub type Ori = u8;

type CornerList = [(Corner, Ori); NUM_CORNERS];
type EdgeList = [(Edge, Ori); NUM_EDGES];

/// The cubie level of the cube as Kociemba describes it in
/// https://kociemba.org/math/cubielevel.htm
///
/// `corners[i]` is the corner sitting at position i together with its twist,
/// `edges[i]` the edge at position i together with its flip.
#[derive(PartialEq, Eq, Clone, Hash, Debug)]
pub struct CubieCube {
	pub corners: CornerList,
	pub edges: EdgeList,
}

// ===== Tranformation-Corners =====
#[rustfmt::skip]
const TC_BASE: CornerList = [
	(Corner::URF, 0), (Corner::UFL, 0), (Corner::ULB, 0), (Corner::UBR, 0),
	(Corner::DFR, 0), (Corner::DLF, 0), (Corner::DBL, 0), (Corner::DRB, 0),
];
#[rustfmt::skip]
const TC_UP: CornerList = [
	(Corner::UBR, 0), (Corner::URF, 0), (Corner::UFL, 0), (Corner::ULB, 0),
	(Corner::DFR, 0), (Corner::DLF, 0), (Corner::DBL, 0), (Corner::DRB, 0),
];
#[rustfmt::skip]
const TC_RIGHT: CornerList = [
	(Corner::DFR, 2), (Corner::UFL, 0), (Corner::ULB, 0), (Corner::URF, 1),
	(Corner::DRB, 1), (Corner::DLF, 0), (Corner::DBL, 0), (Corner::UBR, 2),
];
#[rustfmt::skip]
const TC_FRONT: CornerList = [
	(Corner::UFL, 1), (Corner::DLF, 2), (Corner::ULB, 0), (Corner::UBR, 0),
	(Corner::URF, 2), (Corner::DFR, 1), (Corner::DBL, 0), (Corner::DRB, 0),
];
#[rustfmt::skip]
const TC_DOWN: CornerList = [
	(Corner::URF, 0), (Corner::UFL, 0), (Corner::ULB, 0), (Corner::UBR, 0),
	(Corner::DLF, 0), (Corner::DBL, 0), (Corner::DRB, 0), (Corner::DFR, 0),
];
#[rustfmt::skip]
const TC_LEFT: CornerList = [
	(Corner::URF, 0), (Corner::ULB, 1), (Corner::DBL, 2), (Corner::UBR, 0),
	(Corner::DFR, 0), (Corner::UFL, 2), (Corner::DLF, 1), (Corner::DRB, 0),
];
#[rustfmt::skip]
const TC_BACK: CornerList = [
	(Corner::URF, 0), (Corner::UFL, 0), (Corner::UBR, 1), (Corner::DRB, 2),
	(Corner::DFR, 0), (Corner::DLF, 0), (Corner::ULB, 2), (Corner::DBL, 1),
];

/// Apply t2 after t1
const fn chain_corners(t1: CornerList, t2: CornerList) -> CornerList {
	let mut out = TC_BASE;

	const_for!(i in 0..NUM_CORNERS => {
		let (c2, o2) = t2[i];
		let (c1, o1) = t1[c2 as usize];
		out[i] = (c1, (o1 + o2) % 3);
	});

	out
}

const fn generate_corner_transform_table() -> [[CornerList; NUM_TURNWISES]; NUM_SIDES] {
	const BASE: [CornerList; NUM_SIDES] = [TC_UP, TC_RIGHT, TC_FRONT, TC_DOWN, TC_LEFT, TC_BACK];

	let mut out = [[TC_BASE; NUM_TURNWISES]; NUM_SIDES];

	const_for!(i in 0..NUM_SIDES => {
		out[i][0] = BASE[i];
		out[i][1] = chain_corners(out[i][0], BASE[i]);
		out[i][2] = chain_corners(out[i][1], BASE[i]);
	});

	out
}

const CORNER_TRANSFORM: [[CornerList; NUM_TURNWISES]; NUM_SIDES] =
	generate_corner_transform_table();

// ===== Edge Transformations =====
#[rustfmt::skip]
const TE_BASE: EdgeList = [
	(Edge::UR, 0), (Edge::UF, 0), (Edge::UL, 0), (Edge::UB, 0),
	(Edge::DR, 0), (Edge::DF, 0), (Edge::DL, 0), (Edge::DB, 0),
	(Edge::FR, 0), (Edge::FL, 0), (Edge::BL, 0), (Edge::BR, 0),
];
#[rustfmt::skip]
const TE_UP: EdgeList = [
	(Edge::UB, 0), (Edge::UR, 0), (Edge::UF, 0), (Edge::UL, 0),
	(Edge::DR, 0), (Edge::DF, 0), (Edge::DL, 0), (Edge::DB, 0),
	(Edge::FR, 0), (Edge::FL, 0), (Edge::BL, 0), (Edge::BR, 0),
];
#[rustfmt::skip]
const TE_RIGHT: EdgeList = [
	(Edge::FR, 0), (Edge::UF, 0), (Edge::UL, 0), (Edge::UB, 0),
	(Edge::BR, 0), (Edge::DF, 0), (Edge::DL, 0), (Edge::DB, 0),
	(Edge::DR, 0), (Edge::FL, 0), (Edge::BL, 0), (Edge::UR, 0),
];
#[rustfmt::skip]
const TE_FRONT: EdgeList = [
	(Edge::UR, 0), (Edge::FL, 1), (Edge::UL, 0), (Edge::UB, 0),
	(Edge::DR, 0), (Edge::FR, 1), (Edge::DL, 0), (Edge::DB, 0),
	(Edge::UF, 1), (Edge::DF, 1), (Edge::BL, 0), (Edge::BR, 0),
];
#[rustfmt::skip]
const TE_DOWN: EdgeList = [
	(Edge::UR, 0), (Edge::UF, 0), (Edge::UL, 0), (Edge::UB, 0),
	(Edge::DF, 0), (Edge::DL, 0), (Edge::DB, 0), (Edge::DR, 0),
	(Edge::FR, 0), (Edge::FL, 0), (Edge::BL, 0), (Edge::BR, 0),
];
#[rustfmt::skip]
const TE_LEFT: EdgeList = [
	(Edge::UR, 0), (Edge::UF, 0), (Edge::BL, 0), (Edge::UB, 0),
	(Edge::DR, 0), (Edge::DF, 0), (Edge::FL, 0), (Edge::DB, 0),
	(Edge::FR, 0), (Edge::UL, 0), (Edge::DL, 0), (Edge::BR, 0),
];
#[rustfmt::skip]
const TE_BACK: EdgeList = [
	(Edge::UR, 0), (Edge::UF, 0), (Edge::UL, 0), (Edge::BR, 1),
	(Edge::DR, 0), (Edge::DF, 0), (Edge::DL, 0), (Edge::BL, 1),
	(Edge::FR, 0), (Edge::FL, 0), (Edge::UB, 1), (Edge::DB, 1),
];

/// Apply t2 after t1
const fn chain_edges(t1: EdgeList, t2: EdgeList) -> EdgeList {
	let mut out = TE_BASE;

	const_for!(i in 0..NUM_EDGES => {
		let (e2, o2) = t2[i];
		let (e1, o1) = t1[e2 as usize];
		out[i] = (e1, (o1 + o2) & 1);
	});

	out
}

const fn generate_edge_transform_table() -> [[EdgeList; NUM_TURNWISES]; NUM_SIDES] {
	const BASE: [EdgeList; NUM_SIDES] = [TE_UP, TE_RIGHT, TE_FRONT, TE_DOWN, TE_LEFT, TE_BACK];

	let mut out = [[TE_BASE; NUM_TURNWISES]; NUM_SIDES];

	const_for!(i in 0..NUM_SIDES => {
		out[i][0] = BASE[i];
		out[i][1] = chain_edges(out[i][0], BASE[i]);
		out[i][2] = chain_edges(out[i][1], BASE[i]);
	});

	out
}

const EDGE_TRANSFORM: [[EdgeList; NUM_TURNWISES]; NUM_SIDES] = generate_edge_transform_table();

/// The six clockwise quarter turns as cubes, in side order.
pub const MOVE_CUBES: [CubieCube; NUM_SIDES] = [
	CubieCube { corners: TC_UP, edges: TE_UP },
	CubieCube { corners: TC_RIGHT, edges: TE_RIGHT },
	CubieCube { corners: TC_FRONT, edges: TE_FRONT },
	CubieCube { corners: TC_DOWN, edges: TE_DOWN },
	CubieCube { corners: TC_LEFT, edges: TE_LEFT },
	CubieCube { corners: TC_BACK, edges: TE_BACK },
];

// ===== Coordinate ranges =====

pub const N_TWIST: usize = 2187;
pub const N_FLIP: usize = 2048;
pub const N_PARITY: usize = 2;
/// Positions of the four slice edges
pub const N_SLICE1: usize = 495;
/// Order of the four slice edges
pub const N_SLICE2: usize = 24;
pub const N_FR_TO_BR: usize = 11880;
pub const N_URF_TO_DLF: usize = 20160;
pub const N_UR_TO_UL: usize = 1320;
pub const N_UB_TO_DF: usize = 1320;
/// Only the phase 2 range, where the six edges stay in the U and D layers
pub const N_UR_TO_DF: usize = 20160;
/// Values of URtoUL and UBtoDF which keep their edges out of the UD-slice
pub const N_MERGE: usize = 336;
pub const N_CORNER_PERM: usize = 40320;
pub const N_EDGE_PERM: usize = 479001600;

/// Generate a power list where v[i] = base^i from 0..N (exclusive)
const fn pow_list<const N: usize>(base: usize) -> [usize; N] {
	let mut out = [1; N];
	const_for!(i in 1..N => { out[i] = out[i-1] * base; });
	out
}

const SLICE_EDGES: [Edge; 4] = [Edge::FR, Edge::FL, Edge::BL, Edge::BR];
const OTHER_EDGES: [Edge; 8] = [
	Edge::UR, Edge::UF, Edge::UL, Edge::UB, Edge::DR, Edge::DF, Edge::DL, Edge::DB,
];

impl Default for CubieCube {
	fn default() -> Self {
		Self::new()
	}
}

impl CubieCube {
	pub const fn new() -> Self {
		CubieCube {
			corners: TC_BASE,
			edges: TE_BASE,
		}
	}

	/// Get the corner and orientation at position 'c'
	pub const fn corner(&self, c: Corner) -> (Corner, Ori) {
		self.corners[c as usize]
	}

	/// Get the edge and orientation at position 'e'
	pub const fn edge(&self, e: Edge) -> (Edge, Ori) {
		self.edges[e as usize]
	}

	fn corner_perm(&self) -> [usize; NUM_CORNERS] {
		self.corners.map(|(c, _)| c as usize)
	}

	fn edge_perm(&self) -> [usize; NUM_EDGES] {
		self.edges.map(|(e, _)| e as usize)
	}

	// ===== Group operations =====

	/// Apply the corner part of `other` after this cube.
	pub fn multiply_corners(&mut self, other: &CubieCube) {
		self.corners = chain_corners(self.corners, other.corners);
	}

	/// Apply the edge part of `other` after this cube.
	pub fn multiply_edges(&mut self, other: &CubieCube) {
		self.edges = chain_edges(self.edges, other.edges);
	}

	/// Apply `other` after this cube. Not commutative!
	pub fn multiply(&mut self, other: &CubieCube) {
		self.multiply_corners(other);
		self.multiply_edges(other);
	}

	pub fn apply_turn(&mut self, turn: Turn) {
		let tc = CORNER_TRANSFORM[turn.side as usize][turn.wise as usize];
		let te = EDGE_TRANSFORM[turn.side as usize][turn.wise as usize];
		self.corners = chain_corners(self.corners, tc);
		self.edges = chain_edges(self.edges, te);
	}

	/// Apply the given sequence of turns.
	pub fn apply_turns<'a, I>(&mut self, turns: I)
	where
		I: IntoIterator<Item = &'a Turn>,
	{
		for turn in turns {
			self.apply_turn(*turn);
		}
	}

	pub fn is_solved(&self) -> bool {
		self.edges == TE_BASE && self.corners == TC_BASE
	}

	pub fn corner_parity(&self) -> u8 {
		permutation_parity(&self.corner_perm())
	}

	pub fn edge_parity(&self) -> u8 {
		permutation_parity(&self.edge_perm())
	}

	/// Check that the cube can be reached from the solved cube.
	pub fn verify(&self) -> Result<(), CubeError> {
		// Check that all edges are there once
		let mut count = [0usize; NUM_EDGES];
		for (e, _) in self.edges.iter() {
			count[*e as usize] += 1;
		}
		if count.into_iter().any(|c| c != 1) {
			return Err(CubeError::MissingEdge);
		}

		// The sum of the edge orientations have to be divisible by 2
		let flip: u32 = self.edges.iter().map(|(_, o)| *o as u32).sum();
		if flip % 2 != 0 {
			return Err(CubeError::EdgeFlip);
		}

		// Check that all corners are there once
		let mut count = [0usize; NUM_CORNERS];
		for (c, _) in self.corners.iter() {
			count[*c as usize] += 1;
		}
		if count.into_iter().any(|c| c != 1) {
			return Err(CubeError::MissingCorner);
		}

		// The sum of the corner orientations have to be divisible by 3
		let twist: u32 = self.corners.iter().map(|(_, o)| *o as u32).sum();
		if twist % 3 != 0 {
			return Err(CubeError::CornerTwist((twist % 3) as u8));
		}

		// There must be an even number of swaps throughout the permutations
		if self.corner_parity() != self.edge_parity() {
			return Err(CubeError::Parity);
		}

		Ok(())
	}

	pub fn is_solvable(&self) -> bool {
		self.verify().is_ok()
	}

	// ===== Coordinate set functions =====

	/// Set the corner orientation according to the given coordinate
	pub fn set_twist(&mut self, coord: usize) {
		debug_assert!(coord < N_TWIST);

		let mut x = coord;
		let mut parity = 0;

		for i in 0..NUM_CORNERS - 1 {
			self.corners[i].1 = (x % 3) as Ori;
			parity = (parity + x) % 3;
			x /= 3;
		}
		self.corners[NUM_CORNERS - 1].1 = ((3 - parity) % 3) as Ori;
	}

	/// Set the edge orientation according to the given coordinate
	pub fn set_flip(&mut self, coord: usize) {
		debug_assert!(coord < N_FLIP);

		for i in 0..(NUM_EDGES - 1) {
			self.edges[i].1 = ((coord >> i) & 1) as Ori;
		}
		self.edges[NUM_EDGES - 1].1 = (coord.count_ones() & 1) as Ori;
	}

	/// Set the position and order of the UD-slice edges. The other edges
	/// fill the remaining positions in their natural order.
	pub fn set_fr_to_br(&mut self, coord: usize) {
		debug_assert!(coord < N_FR_TO_BR);

		// The positions are counted from BR backwards, so a solved slice has position 0
		let mut chosen = get_nck(NUM_EDGES, 4, coord / N_SLICE2);
		chosen.reverse();

		let mut slice = get_kth_perm(4, coord % N_SLICE2)
			.into_iter()
			.map(|i| SLICE_EDGES[i]);
		let mut other = OTHER_EDGES.into_iter();

		for (i, c) in chosen.into_iter().enumerate() {
			let edge = if c { slice.next() } else { other.next() };
			self.edges[i].0 = edge.unwrap_or_default();
		}
	}

	fn set_corner_group(&mut self, coord: usize, lo: usize, n: usize) {
		for (i, c) in get_group(coord, lo, n, NUM_CORNERS).into_iter().enumerate() {
			self.corners[i].0 = Corner::VARIANTS[c];
		}
	}

	fn set_edge_group(&mut self, coord: usize, lo: usize, n: usize) {
		for (i, e) in get_group(coord, lo, n, NUM_EDGES).into_iter().enumerate() {
			self.edges[i].0 = Edge::VARIANTS[e];
		}
	}

	/// Set the position and order of the corners URF..DLF
	pub fn set_urf_to_dlf(&mut self, coord: usize) {
		debug_assert!(coord < N_URF_TO_DLF);
		self.set_corner_group(coord, Corner::URF as usize, 6);
	}

	/// Set the position and order of the edges UR..DF
	pub fn set_ur_to_df(&mut self, coord: usize) {
		self.set_edge_group(coord, Edge::UR as usize, 6);
	}

	/// Set the position and order of the edges UR, UF and UL
	pub fn set_ur_to_ul(&mut self, coord: usize) {
		debug_assert!(coord < N_UR_TO_UL);
		self.set_edge_group(coord, Edge::UR as usize, 3);
	}

	/// Set the position and order of the edges UB, DR and DF
	pub fn set_ub_to_df(&mut self, coord: usize) {
		debug_assert!(coord < N_UB_TO_DF);
		self.set_edge_group(coord, Edge::UB as usize, 3);
	}

	/// Set the corner permutation according to the given coordinate
	pub fn set_corner_permutation(&mut self, coord: usize) {
		debug_assert!(coord < N_CORNER_PERM);
		self.set_corner_group(coord, 0, NUM_CORNERS);
	}

	/// Set the edge permutation according to the given coordinate
	pub fn set_edge_permutation(&mut self, coord: usize) {
		debug_assert!(coord < N_EDGE_PERM);
		self.set_edge_group(coord, 0, NUM_EDGES);
	}

	// ===== Coordinate get functions =====

	/// Return the cube's corner orientation coordinate
	pub fn get_twist(&self) -> usize {
		const POW: [usize; NUM_CORNERS] = pow_list::<NUM_CORNERS>(3);

		self.corners
			.iter()
			.take(NUM_CORNERS - 1)
			.enumerate()
			.map(|(i, (_, o))| *o as usize * POW[i])
			.sum()
	}

	/// Return the cube's edges orientation coordinate
	pub fn get_flip(&self) -> usize {
		self.edges
			.iter()
			.take(NUM_EDGES - 1)
			.enumerate()
			.map(|(i, (_, o))| (*o as usize) << i)
			.sum()
	}

	/// Return the coordinate of the UD-slice edges (FR, FL, BL, BR).
	/// `get_fr_to_br() / 24` only tells which positions they occupy and is 0
	/// exactly when they are all inside the slice.
	pub fn get_fr_to_br(&self) -> usize {
		// https://kociemba.org/math/UDSliceCoord.htm
		let chosen: Vec<bool> = self.edges.iter().rev().map(|(e, _)| e.is_udslice()).collect();
		let order: Vec<usize> = self
			.edges
			.iter()
			.filter(|(e, _)| e.is_udslice())
			.map(|(e, _)| *e as usize - Edge::FR as usize)
			.collect();

		N_SLICE2 * map_nck(&chosen) + map_permutation(&order)
	}

	pub fn get_urf_to_dlf(&self) -> usize {
		map_group(&self.corner_perm(), Corner::URF as usize, 6)
	}

	/// In 0..665280 in general, but below 20160 as soon as the six edges are
	/// in the U and D layers.
	pub fn get_ur_to_df(&self) -> usize {
		map_group(&self.edge_perm(), Edge::UR as usize, 6)
	}

	pub fn get_ur_to_ul(&self) -> usize {
		map_group(&self.edge_perm(), Edge::UR as usize, 3)
	}

	pub fn get_ub_to_df(&self) -> usize {
		map_group(&self.edge_perm(), Edge::UB as usize, 3)
	}

	/// Return the cube's corner permutation as a coordinate.
	pub fn get_corner_permutation(&self) -> usize {
		map_group(&self.corner_perm(), 0, NUM_CORNERS)
	}

	/// Return the cube's edge permutation as a coordinate
	pub fn get_edge_permutation(&self) -> usize {
		map_group(&self.edge_perm(), 0, NUM_EDGES)
	}
}

/// Combine URtoUL and UBtoDF into URtoDF.
/// Returns None if the two coordinates put edges on the same position.
pub fn merge_ur_to_df(ur_to_ul: usize, ub_to_df: usize) -> Option<usize> {
	let mut a = CubieCube::new();
	a.set_ur_to_ul(ur_to_ul);
	let mut b = CubieCube::new();
	b.set_ub_to_df(ub_to_df);

	let first = Edge::UR..=Edge::UL;
	let second = Edge::UB..=Edge::DF;

	let mut merged = [None; NUM_EDGES];
	for i in 0..NUM_EDGES {
		let (ea, _) = a.edges[i];
		let (eb, _) = b.edges[i];

		merged[i] = match (first.contains(&ea), second.contains(&eb)) {
			(true, true) => return None,
			(true, false) => Some(ea as usize),
			(false, true) => Some(eb as usize),
			(false, false) => None,
		};
	}

	// Fill the free positions with the remaining edges, their order doesn't matter for URtoDF
	let mut rest = (Edge::DL as usize)..NUM_EDGES;
	let perm: Vec<usize> = merged
		.into_iter()
		.map(|e| e.or_else(|| rest.next()).unwrap_or_default())
		.collect();

	Some(map_group(&perm, Edge::UR as usize, 6))
}

#[cfg(test)]
mod tests {
	use rand::{rngs::StdRng, Rng, SeedableRng};

	use super::*;

	fn random_turns(rng: &mut StdRng, n: usize) -> Vec<Turn> {
		(0..n).map(|_| Turn::from_index(rng.gen_range(0..NUM_TURNS))).collect()
	}

	#[test]
	/// Check that all basic turnings result to neutral after 4 turns
	fn cubiecube_turns1() {
		let mut rng = StdRng::seed_from_u64(7);
		let mut scrambled = CubieCube::new();
		scrambled.apply_turns(&random_turns(&mut rng, 30));

		for cube in [CubieCube::new(), scrambled] {
			for idx in 0..NUM_TURNS {
				let turn = Turn::from_index(idx);
				let order = if turn.wise == TurnWise::Double { 2 } else { 4 };

				let mut c = cube.clone();
				for _ in 0..order {
					c.apply_turn(turn);
				}
				assert_eq!(c, cube, "Turn {} doesn't result to neutral element", turn);

				c.apply_turn(turn);
				assert_ne!(c, cube);
			}
		}
	}

	#[test]
	/// Two quarters are one half turn, three quarters the inverse
	fn cubiecube_turns2() {
		for side in 0..NUM_SIDES {
			let quarter = Turn::from_index(3 * side);
			let mut c = CubieCube::new();
			c.apply_turn(quarter);
			c.apply_turn(quarter);

			let mut half = CubieCube::new();
			half.apply_turn(Turn::from_index(3 * side + 1));
			assert_eq!(c, half);

			c.apply_turn(quarter);
			let mut inv = CubieCube::new();
			inv.apply_turn(quarter.inverse());
			assert_eq!(c, inv);
		}
	}

	#[test]
	fn multiply_matches_turns() {
		let mut a = CubieCube::new();
		a.multiply(&MOVE_CUBES[Side::Right as usize]);
		a.multiply(&MOVE_CUBES[Side::Up as usize]);

		let mut b = CubieCube::new();
		b.apply_turns(&parse_turns("R U").unwrap());
		assert_eq!(a, b);

		let mut c = CubieCube::new();
		c.apply_turns(&parse_turns("U R").unwrap());
		assert_ne!(a, c);
	}

	#[test]
	fn parity_invariant() {
		let mut rng = StdRng::seed_from_u64(42);
		let mut cube = CubieCube::new();

		for turn in random_turns(&mut rng, 500) {
			cube.apply_turn(turn);
			assert_eq!(cube.corner_parity(), cube.edge_parity());
			assert_eq!(cube.verify(), Ok(()));
		}
	}

	#[test]
	fn quarter_turns_change_parity() {
		let mut cube = CubieCube::new();
		cube.apply_turn("F".parse().unwrap());
		assert_eq!(cube.corner_parity(), 1);
		assert_eq!(cube.edge_parity(), 1);

		cube.apply_turn("B2".parse().unwrap());
		assert_eq!(cube.corner_parity(), 1);
	}

	#[test]
	fn orientation_coordinates() {
		let mut cube = CubieCube::new();
		for coord in 0..N_TWIST {
			cube.set_twist(coord);
			assert_eq!(cube.get_twist(), coord);
		}
		for coord in 0..N_FLIP {
			cube.set_flip(coord);
			assert_eq!(cube.get_flip(), coord);
		}
		assert!(cube.verify().is_ok());
	}

	#[test]
	fn permutation_coordinates() {
		let mut cube = CubieCube::new();
		for coord in 0..N_FR_TO_BR {
			cube.set_fr_to_br(coord);
			assert_eq!(cube.get_fr_to_br(), coord);
		}
		for coord in 0..N_URF_TO_DLF {
			cube.set_urf_to_dlf(coord);
			assert_eq!(cube.get_urf_to_dlf(), coord);
		}
		for coord in 0..N_UR_TO_UL {
			cube.set_ur_to_ul(coord);
			assert_eq!(cube.get_ur_to_ul(), coord);
			cube.set_ub_to_df(coord);
			assert_eq!(cube.get_ub_to_df(), coord);
		}
		for coord in (0..665280).step_by(37) {
			cube.set_ur_to_df(coord);
			assert_eq!(cube.get_ur_to_df(), coord);
		}
		for coord in (0..N_CORNER_PERM).step_by(11) {
			cube.set_corner_permutation(coord);
			assert_eq!(cube.get_corner_permutation(), coord);
		}
		for coord in (0..N_EDGE_PERM).step_by(1_000_003) {
			cube.set_edge_permutation(coord);
			assert_eq!(cube.get_edge_permutation(), coord);
		}
	}

	#[test]
	fn solved_coordinates() {
		let cube = CubieCube::new();
		assert_eq!(cube.get_twist(), 0);
		assert_eq!(cube.get_flip(), 0);
		assert_eq!(cube.get_fr_to_br(), 0);
		assert_eq!(cube.get_urf_to_dlf(), 0);
		assert_eq!(cube.get_ur_to_df(), 0);
		assert_eq!(cube.get_ur_to_ul(), 0);
		assert_eq!(cube.get_corner_permutation(), 0);
		assert_eq!(cube.get_edge_permutation(), 0);
	}

	#[test]
	fn slice_coordinate_in_subgroup() {
		let mut rng = StdRng::seed_from_u64(3);
		let mut cube = CubieCube::new();

		for _ in 0..200 {
			let turn = Turn::from_index(PHASE2_TURNS[rng.gen_range(0..NUM_PHASE2_TURNS)]);
			cube.apply_turn(turn);
			assert!(cube.get_fr_to_br() < N_SLICE2);
			assert!(cube.get_ur_to_df() < N_UR_TO_DF);
			assert!(cube.get_ur_to_ul() < N_MERGE);
			assert!(cube.get_ub_to_df() < N_MERGE);
			assert_eq!(cube.get_twist(), 0);
			assert_eq!(cube.get_flip(), 0);
		}
	}

	#[test]
	fn merge_matches_cube() {
		let mut rng = StdRng::seed_from_u64(11);
		let mut cube = CubieCube::new();

		for _ in 0..300 {
			let turn = Turn::from_index(PHASE2_TURNS[rng.gen_range(0..NUM_PHASE2_TURNS)]);
			cube.apply_turn(turn);
			let merged = merge_ur_to_df(cube.get_ur_to_ul(), cube.get_ub_to_df());
			assert_eq!(merged, Some(cube.get_ur_to_df()));
		}

		// UR and UB both at position 0
		assert_eq!(merge_ur_to_df(0, 0), None);
	}

	#[test]
	fn verify_errors() {
		let mut cube = CubieCube::new();
		cube.edges[0].1 = 1;
		assert_eq!(cube.verify(), Err(CubeError::EdgeFlip));

		let mut cube = CubieCube::new();
		cube.corners[0].1 = 1;
		assert_eq!(cube.verify(), Err(CubeError::CornerTwist(1)));

		let mut cube = CubieCube::new();
		cube.edges.swap(0, 1);
		assert_eq!(cube.verify(), Err(CubeError::Parity));

		let mut cube = CubieCube::new();
		cube.edges[0].0 = Edge::UF;
		assert_eq!(cube.verify(), Err(CubeError::MissingEdge));

		let mut cube = CubieCube::new();
		cube.corners[3].0 = Corner::URF;
		assert_eq!(cube.verify(), Err(CubeError::MissingCorner));
	}
}
