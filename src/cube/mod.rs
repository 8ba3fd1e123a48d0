pub mod cubiecube;
pub mod facelet;
pub mod turn;

/// The dimension of the cube
pub const CUBE_DIM: usize = 3;

/// The number of facelets per side
pub const CUBE_AREA: usize = CUBE_DIM * CUBE_DIM;

/// The number of sides of a cube
pub const NUM_SIDES: usize = 6;

/// The sides of the cube, in the order their facelets appear in a facelet string.
/// A side doubles as the color of its center.
#[derive(
	Eq, PartialEq, PartialOrd, Ord, Copy, Clone, Debug, Hash,
	strum::EnumCount, strum::EnumIter, strum::FromRepr, strum::VariantArray, strum::Display,
)]
#[repr(u8)]
pub enum Side {
	#[strum(serialize = "U")]
	Up,
	#[strum(serialize = "R")]
	Right,
	#[strum(serialize = "F")]
	Front,
	#[strum(serialize = "D")]
	Down,
	#[strum(serialize = "L")]
	Left,
	#[strum(serialize = "B")]
	Back,
}

impl Side {
	/// The letter used for this side in facelet strings and turn notation
	pub const fn letter(self) -> char {
		match self {
			Side::Up => 'U',
			Side::Right => 'R',
			Side::Front => 'F',
			Side::Down => 'D',
			Side::Left => 'L',
			Side::Back => 'B',
		}
	}

	pub fn from_letter(c: char) -> Option<Self> {
		let side = match c {
			'U' => Side::Up,
			'R' => Side::Right,
			'F' => Side::Front,
			'D' => Side::Down,
			'L' => Side::Left,
			'B' => Side::Back,
			_ => return None,
		};
		Some(side)
	}

	/// The side across the cube
	pub const fn opposite(self) -> Self {
		match self {
			Side::Up => Side::Down,
			Side::Right => Side::Left,
			Side::Front => Side::Back,
			Side::Down => Side::Up,
			Side::Left => Side::Right,
			Side::Back => Side::Front,
		}
	}
}

/// Returns the ANSI-colorcode for the given side.
pub fn get_ansii_color(side: Side) -> &'static str {
	match side {
		Side::Up => "\x1b[00m",    // White
		Side::Down => "\x1b[93m",  // Yellow
		Side::Back => "\x1b[34m",  // Blue
		Side::Front => "\x1b[32m", // Green
		Side::Left => "\x1b[33m",  // Orange
		Side::Right => "\x1b[31m", // Red
	}
}

// ===== Edge Piece =====

/// All the different position names for an Edge
#[derive(
	Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug,
	strum::EnumIter, strum::EnumCount, strum::VariantArray, strum::Display,
)]
#[repr(usize)]
#[rustfmt::skip]
pub enum Edge {
	#[default]
	UR, UF, UL, UB, // up edges
	DR, DF, DL, DB, // down edges
	FR, FL, BL, BR, // ud-slice (middle edges)
}

pub const NUM_EDGES: usize = 12;

impl Edge {
	pub const fn is_udslice(self) -> bool {
		matches!(self, Edge::FR | Edge::FL | Edge::BL | Edge::BR)
	}
}

// ===== Corner Piece =====

/// A corner piece
/// Note that the name is carefully sorted: the first letter is always the U or D sticker
/// and the others follow clockwise.
#[derive(
	Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Debug,
	strum::EnumIter, strum::EnumCount, strum::VariantArray, strum::Display,
)]
#[allow(clippy::upper_case_acronyms)]
#[repr(usize)]
#[rustfmt::skip]
pub enum Corner {
	#[default]
	URF, UFL, ULB, UBR, // DON'T CHANGE THE ORDER OF THE LETTERS!
	DFR, DLF, DBL, DRB,
}

pub const NUM_CORNERS: usize = 8;

/// It contains all the different ways a cube configuration
/// can be illegal.
/// From it, you are able to know how to fix the cube.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CubeError {
	#[error("Not every color appears exactly nine times")]
	FaceletCount,
	#[error("Not all edges are present on the cube")]
	MissingEdge,
	#[error("The orientation-parity of the edges is off by 1")]
	EdgeFlip,
	#[error("Not all corners are present on the cube")]
	MissingCorner,
	#[error("The orientation-parity of the corners is off by +{0}")]
	CornerTwist(u8),
	#[error("The number of swaps needed is odd")]
	Parity,
}

impl CubeError {
	/// The numeric status code reported by [crate::verify_code]
	pub const fn code(&self) -> i32 {
		match self {
			CubeError::FaceletCount => -1,
			CubeError::MissingEdge => -2,
			CubeError::EdgeFlip => -3,
			CubeError::MissingCorner => -4,
			CubeError::CornerTwist(_) => -5,
			CubeError::Parity => -6,
		}
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use strum::{EnumCount, IntoEnumIterator};

	#[test]
	fn piece_counts() {
		assert_eq!(Corner::COUNT, NUM_CORNERS);
		assert_eq!(Edge::COUNT, NUM_EDGES);
		assert_eq!(Side::COUNT, NUM_SIDES);
	}

	#[test]
	fn side_letters() {
		for side in Side::iter() {
			assert_eq!(Side::from_letter(side.letter()), Some(side));
			assert_eq!(side.to_string(), side.letter().to_string());
			assert_eq!(side.opposite().opposite(), side);
			assert_eq!((side.opposite() as usize + 3) % 6, side as usize);
		}
		assert_eq!(Side::from_letter('X'), None);
	}

	#[test]
	fn error_codes() {
		assert_eq!(CubeError::FaceletCount.code(), -1);
		assert_eq!(CubeError::CornerTwist(2).code(), -5);
		assert_eq!(CubeError::Parity.code(), -6);
	}
}
