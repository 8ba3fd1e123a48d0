use std::{collections::BTreeMap, str::FromStr};

use strum::{IntoEnumIterator, VariantArray};

use crate::cube::{cubiecube::*, *};

pub const NUM_FACELETS: usize = CUBE_AREA * NUM_SIDES;

/// The solved cube as a facelet string
pub const SOLVED_FACELETS: &str = "UUUUUUUUURRRRRRRRRFFFFFFFFFDDDDDDDDDLLLLLLLLLBBBBBBBBB";

/// A cube described by its 54 stickers.
/// The sides are ordered U, R, F, D, L, B and every side is read row by row.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct FaceletCube {
	pub facelets: [Side; NUM_FACELETS],
}

impl Default for FaceletCube {
	/// Creates a *solved* cube!
	fn default() -> Self {
		let mut facelets = [Side::Up; NUM_FACELETS];
		for (i, f) in facelets.iter_mut().enumerate() {
			*f = Side::VARIANTS[i / CUBE_AREA];
		}
		Self { facelets }
	}
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
	#[error("The given string has {0} symbols instead of {}", NUM_FACELETS)]
	Length(usize),
	#[error("The given string uses {0} different symbols instead of {}", NUM_SIDES)]
	SymbolSet(usize),
	#[error("The symbol '{symbol}' appears {count} times instead of {}", CUBE_AREA)]
	SymbolCount { symbol: char, count: usize },
	#[error("The symbol '{0}' is the center of more than one side")]
	Centers(char),
}

/// Return the index of (x/y) at the given side
const fn help(side: Side, x: usize, y: usize) -> usize {
	side as usize * CUBE_AREA + x + y * CUBE_DIM
}

/// Return the indices given the corner c as a position.
pub const fn corner_to_indices(c: Corner) -> [usize; 3] {
	// Note: the Corner::URF means, first Up, then Right, then Front,
	// (The order of the characters are relevant!)
	match c {
		Corner::URF => [help(Side::Up, 2, 2), help(Side::Right, 0, 0), help(Side::Front, 2, 0)],
		Corner::UFL => [help(Side::Up, 0, 2), help(Side::Front, 0, 0), help(Side::Left, 2, 0)],
		Corner::ULB => [help(Side::Up, 0, 0), help(Side::Left, 0, 0), help(Side::Back, 2, 0)],
		Corner::UBR => [help(Side::Up, 2, 0), help(Side::Back, 0, 0), help(Side::Right, 2, 0)],

		Corner::DFR => [help(Side::Down, 2, 0), help(Side::Front, 2, 2), help(Side::Right, 0, 2)],
		Corner::DLF => [help(Side::Down, 0, 0), help(Side::Left, 2, 2), help(Side::Front, 0, 2)],
		Corner::DBL => [help(Side::Down, 0, 2), help(Side::Back, 2, 2), help(Side::Left, 0, 2)],
		Corner::DRB => [help(Side::Down, 2, 2), help(Side::Right, 2, 2), help(Side::Back, 0, 2)],
	}
}

/// Return the indices given the edge e as a position.
pub const fn edge_to_indices(e: Edge) -> [usize; 2] {
	// Note that Edge::UF means: first the Up side, then the Front side
	match e {
		Edge::UR => [help(Side::Up, 2, 1), help(Side::Right, 1, 0)],
		Edge::UF => [help(Side::Up, 1, 2), help(Side::Front, 1, 0)],
		Edge::UL => [help(Side::Up, 0, 1), help(Side::Left, 1, 0)],
		Edge::UB => [help(Side::Up, 1, 0), help(Side::Back, 1, 0)],

		Edge::DR => [help(Side::Down, 2, 1), help(Side::Right, 1, 2)],
		Edge::DF => [help(Side::Down, 1, 0), help(Side::Front, 1, 2)],
		Edge::DL => [help(Side::Down, 0, 1), help(Side::Left, 1, 2)],
		Edge::DB => [help(Side::Down, 1, 2), help(Side::Back, 1, 2)],

		Edge::FR => [help(Side::Front, 2, 1), help(Side::Right, 0, 1)],
		Edge::FL => [help(Side::Front, 0, 1), help(Side::Left, 2, 1)],
		Edge::BL => [help(Side::Back, 2, 1), help(Side::Left, 0, 1)],
		Edge::BR => [help(Side::Back, 0, 1), help(Side::Right, 2, 1)],
	}
}

/// The colors of a corner piece, in the order of its name
fn corner_colors(c: Corner) -> [Side; 3] {
	corner_to_indices(c).map(|i| Side::VARIANTS[i / CUBE_AREA])
}

/// The colors of an edge piece, in the order of its name
fn edge_colors(e: Edge) -> [Side; 2] {
	edge_to_indices(e).map(|i| Side::VARIANTS[i / CUBE_AREA])
}

impl FromStr for FaceletCube {
	type Err = FormatError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let symbols: Vec<char> = s.chars().collect();
		if symbols.len() != NUM_FACELETS {
			return Err(FormatError::Length(symbols.len()));
		}

		let mut count: BTreeMap<char, usize> = BTreeMap::new();
		for c in symbols.iter() {
			*count.entry(*c).or_default() += 1;
		}
		if count.len() != NUM_SIDES {
			return Err(FormatError::SymbolSet(count.len()));
		}
		if let Some((symbol, count)) = count.into_iter().find(|(_, n)| *n != CUBE_AREA) {
			return Err(FormatError::SymbolCount { symbol, count });
		}

		// The center pieces define which symbol belongs to which side
		let mut sides: BTreeMap<char, Side> = BTreeMap::new();
		for side in Side::iter() {
			let center = symbols[help(side, 1, 1)];
			if sides.insert(center, side).is_some() {
				return Err(FormatError::Centers(center));
			}
		}

		let mut cube = FaceletCube::default();
		for (f, c) in cube.facelets.iter_mut().zip(symbols) {
			// Every symbol is a center, since there are six of both
			*f = sides[&c];
		}

		Ok(cube)
	}
}

impl std::fmt::Display for FaceletCube {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		let s: String = self.facelets.iter().map(|side| side.letter()).collect();
		write!(f, "{}", s)
	}
}

impl From<&CubieCube> for FaceletCube {
	fn from(cube: &CubieCube) -> Self {
		let mut out = FaceletCube::default();

		for pos in Corner::iter() {
			let (c, o) = cube.corner(pos);
			let indices = corner_to_indices(pos);
			for (n, col) in corner_colors(c).into_iter().enumerate() {
				out.facelets[indices[(n + o as usize) % 3]] = col;
			}
		}

		for pos in Edge::iter() {
			let (e, o) = cube.edge(pos);
			let indices = edge_to_indices(pos);
			for (n, col) in edge_colors(e).into_iter().enumerate() {
				out.facelets[indices[(n + o as usize) % 2]] = col;
			}
		}

		out
	}
}

impl FaceletCube {
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the corner at the position and it's orientation,
	/// i.e. which of its stickers shows the U or D color.
	/// Returns None if the colors don't belong to any corner.
	pub fn get_corner_at_pos(&self, pos: Corner) -> Option<(Corner, Ori)> {
		let cols = corner_to_indices(pos).map(|i| self.facelets[i]);

		let ori = cols
			.iter()
			.position(|c| *c == Side::Up || *c == Side::Down)
			.unwrap_or(0);
		let (col1, col2) = (cols[(ori + 1) % 3], cols[(ori + 2) % 3]);

		Corner::iter()
			.find(|c| {
				let own = corner_colors(*c);
				own[1] == col1 && own[2] == col2
			})
			.map(|c| (c, ori as Ori))
	}

	/// Returns the edge at the position and it's orientation
	/// 0, if the colors are in the order of the edge's name
	/// 1, if they are swapped
	pub fn get_edge_at_pos(&self, pos: Edge) -> Option<(Edge, Ori)> {
		let cols = edge_to_indices(pos).map(|i| self.facelets[i]);

		Edge::iter().find_map(|e| {
			let own = edge_colors(e);
			if own == cols {
				Some((e, 0))
			} else if own[0] == cols[1] && own[1] == cols[0] {
				Some((e, 1))
			} else {
				None
			}
		})
	}

	/// Convert to the cubie level.
	/// Stickers which fit no piece leave URF or UR as placeholder,
	/// which is caught by [CubieCube::verify].
	pub fn to_cubie_cube(&self) -> CubieCube {
		let mut cube = CubieCube::new();

		for pos in Corner::iter() {
			cube.corners[pos as usize] = self.get_corner_at_pos(pos).unwrap_or((Corner::URF, 0));
		}
		for pos in Edge::iter() {
			cube.edges[pos as usize] = self.get_edge_at_pos(pos).unwrap_or((Edge::UR, 0));
		}

		cube
	}

	/// Print the cube in the *standard output* with ANSI-colors
	pub fn print(&self) {
		// Generate a space depending on the size of CUBE_DIM
		let space: String = " ".repeat(2 * CUBE_DIM + 1);

		// Print Up-side
		for j in 0..CUBE_DIM {
			print!("{}", space);
			for i in 0..CUBE_DIM {
				print!("{}▀ ", get_ansii_color(self.facelets[help(Side::Up, i, j)]));
			}
			println!();
		}

		// Print Left, Front, Right, Back
		const SIDES: [Side; 4] = [Side::Left, Side::Front, Side::Right, Side::Back];
		for j in 0..CUBE_DIM {
			for s in SIDES {
				for i in 0..CUBE_DIM {
					print!("{}▄ ", get_ansii_color(self.facelets[help(s, i, j)]));
				}
				print!(" ");
			}
			println!();
		}
		println!();

		// Print Down-side
		for j in 0..CUBE_DIM {
			print!("{}", space);
			for i in 0..CUBE_DIM {
				print!("{}▀ ", get_ansii_color(self.facelets[help(Side::Down, i, j)]));
			}
			println!();
		}
		// Reset ansii color
		println!("\x1b[00m");
	}
}

impl CubieCube {
	/// Parse a facelet string. The result isn't verified yet.
	pub fn from_facelets(s: &str) -> Result<Self, FormatError> {
		Ok(FaceletCube::from_str(s)?.to_cubie_cube())
	}

	pub fn to_facelets(&self) -> String {
		FaceletCube::from(self).to_string()
	}
}

#[cfg(test)]
mod tests {
	use rand::{rngs::StdRng, Rng, SeedableRng};

	use super::*;
	use crate::cube::turn::*;

	#[test]
	fn solved_facelets() {
		assert_eq!(FaceletCube::new().to_string(), SOLVED_FACELETS);
		assert_eq!(CubieCube::new().to_facelets(), SOLVED_FACELETS);
		assert!(CubieCube::from_facelets(SOLVED_FACELETS).unwrap().is_solved());
	}

	#[test]
	fn single_turn_facelets() {
		let mut cube = CubieCube::new();
		cube.apply_turn("R".parse().unwrap());
		assert_eq!(
			cube.to_facelets(),
			"UUFUUFUUFRRRRRRRRRFFDFFDFFDDDBDDBDDBLLLLLLLLLUBBUBBUBB"
		);

		let mut cube = CubieCube::new();
		cube.apply_turn("U".parse().unwrap());
		assert_eq!(
			cube.to_facelets(),
			"UUUUUUUUUBBBRRRRRRRRRFFFFFFDDDDDDDDDFFFLLLLLLLLLBBBBBB"
		);
	}

	#[test]
	/// Check the conversion between CubieCube and Strings
	fn facelet_string_conversion() {
		let mut rng = StdRng::seed_from_u64(1);
		let mut cube = CubieCube::new();

		for _ in 0..100 {
			cube.apply_turn(Turn::from_index(rng.gen_range(0..NUM_TURNS)));

			let s = cube.to_facelets();
			match CubieCube::from_facelets(&s) {
				Ok(c) => assert_eq!(c, cube),
				Err(e) => panic!("Facelet conversion failed: {}", e),
			}
		}
	}

	#[test]
	fn corner_edge_checking() {
		let mut facelets = FaceletCube::new();
		for edge in Edge::iter() {
			assert_eq!(facelets.get_edge_at_pos(edge), Some((edge, 0)));
		}
		for corner in Corner::iter() {
			assert_eq!(facelets.get_corner_at_pos(corner), Some((corner, 0)));
		}

		let mut cube = CubieCube::new();
		cube.apply_turn("F".parse().unwrap());
		facelets = FaceletCube::from(&cube);

		let cnt: u8 = Edge::iter()
			.map(|e| facelets.get_edge_at_pos(e).map(|(_, o)| o).unwrap_or(0))
			.sum();
		assert_eq!(cnt, 4);
	}

	#[test]
	/// Any six symbols work, the centers tell which side they are
	fn custom_symbols() {
		let s: String = "UUFUUFUUFRRRRRRRRRFFDFFDFFDDDBDDBDDBLLLLLLLLLUBBUBBUBB"
			.chars()
			.map(|c| match c {
				'U' => 'w',
				'R' => 'r',
				'F' => 'g',
				'D' => 'y',
				'L' => 'o',
				_ => 'b',
			})
			.collect();

		let cube: FaceletCube = s.parse().unwrap();
		assert_eq!(
			cube.to_string(),
			"UUFUUFUUFRRRRRRRRRFFDFFDFFDDDBDDBDDBLLLLLLLLLUBBUBBUBB"
		);
	}

	#[test]
	fn format_errors() {
		assert_eq!(
			FaceletCube::from_str("UUU"),
			Err(FormatError::Length(3))
		);

		let seven = SOLVED_FACELETS.replacen('U', "X", 1);
		assert_eq!(FaceletCube::from_str(&seven), Err(FormatError::SymbolSet(7)));

		let unbalanced = SOLVED_FACELETS.replacen('U', "R", 1);
		assert_eq!(
			FaceletCube::from_str(&unbalanced),
			Err(FormatError::SymbolCount { symbol: 'R', count: 10 })
		);

		// Swap the U center with an R sticker
		let mut chars: Vec<char> = SOLVED_FACELETS.chars().collect();
		chars.swap(4, 9);
		let centers: String = chars.into_iter().collect();
		assert_eq!(FaceletCube::from_str(&centers), Err(FormatError::Centers('R')));
	}

	#[test]
	fn broken_stickers() {
		// Two U stickers on one corner can't be decoded
		let mut chars: Vec<char> = SOLVED_FACELETS.chars().collect();
		chars.swap(8, 9);
		let s: String = chars.into_iter().collect();

		let cube = CubieCube::from_facelets(&s).unwrap();
		assert!(cube.verify().is_err());
	}
}
