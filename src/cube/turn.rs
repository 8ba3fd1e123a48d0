use std::str::FromStr;

use const_for::const_for;
use strum::VariantArray;

use super::{Side, NUM_SIDES};

/// Total number of ways to adjust your turn
pub const NUM_TURNWISES: usize = 3;

/// Total number of face turns
pub const NUM_TURNS: usize = NUM_SIDES * NUM_TURNWISES;

/// You can either turn a side in (Counter-)Clockwise and Half turns
/// This is the enum for that
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[derive(strum::EnumIter, strum::VariantArray)]
#[repr(u8)]
pub enum TurnWise {
	Clockwise,
	Double,
	CounterClockwise,
}

impl TurnWise {
	pub const fn inverse(self) -> Self {
		match self {
			TurnWise::Clockwise => TurnWise::CounterClockwise,
			TurnWise::Double => TurnWise::Double,
			TurnWise::CounterClockwise => TurnWise::Clockwise,
		}
	}
}

impl std::fmt::Display for TurnWise {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		match self {
			TurnWise::Clockwise => write!(f, ""),
			TurnWise::CounterClockwise => write!(f, "'"),
			TurnWise::Double => write!(f, "2"),
		}
	}
}

/// An entire turn
///
/// side: The side to turn
/// wise: See the definiton of TurnWise
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Turn {
	pub side: Side,
	pub wise: TurnWise,
}

impl Turn {
	pub const fn new(side: Side, wise: TurnWise) -> Self {
		Self { side, wise }
	}

	/// The index of the turn in 0..18, i.e. 3 * side + wise.
	pub const fn index(self) -> usize {
		self.side as usize * NUM_TURNWISES + self.wise as usize
	}

	pub fn from_index(idx: usize) -> Self {
		let side = Side::VARIANTS[(idx / NUM_TURNWISES) % NUM_SIDES];
		let wise = TurnWise::VARIANTS[idx % NUM_TURNWISES];
		Self { side, wise }
	}

	/// The turn which undoes this one.
	pub const fn inverse(self) -> Self {
		Self {
			side: self.side,
			wise: self.wise.inverse(),
		}
	}
}

impl std::fmt::Display for Turn {
	fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
		write!(f, "{}", self.side.letter())?;
		self.wise.fmt(f)
	}
}

#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseTurnError {
	#[error("Empty turn")]
	Empty,
	#[error("'{0}' is not a side of the cube")]
	Side(char),
	#[error("'{0}' is not a valid turn modifier")]
	Wise(String),
}

impl FromStr for Turn {
	type Err = ParseTurnError;

	fn from_str(item: &str) -> Result<Self, Self::Err> {
		let mut chars = item.chars();
		let first = chars.next().ok_or(ParseTurnError::Empty)?;
		let side = Side::from_letter(first).ok_or(ParseTurnError::Side(first))?;

		let wise = match chars.as_str() {
			"" => TurnWise::Clockwise,
			"2" => TurnWise::Double,
			"'" => TurnWise::CounterClockwise,
			rest => return Err(ParseTurnError::Wise(rest.to_string())),
		};

		Ok(Self { side, wise })
	}
}

/// Parse a whitespace separated sequence of turns like "R U2 F'".
pub fn parse_turns<T>(string: T) -> Result<Vec<Turn>, ParseTurnError>
where
	T: AsRef<str>,
{
	string.as_ref().split_whitespace().map(Turn::from_str).collect()
}

/// The sequence which undoes the given one.
pub fn invert_turns(turns: &[Turn]) -> Vec<Turn> {
	turns.iter().rev().map(|t| t.inverse()).collect()
}

/// Print a sequence the way [parse_turns] reads it.
pub fn format_turns(turns: &[Turn]) -> String {
	turns.iter().map(Turn::to_string).collect::<Vec<_>>().join(" ")
}

// ===== Domino subgroup =====

const fn leaves_subgroup_mask() -> [bool; NUM_TURNS] {
	let mut out = [false; NUM_TURNS];

	const_for!(i in 0..NUM_TURNS => {
		let side = i / NUM_TURNWISES;
		let half = i % NUM_TURNWISES == TurnWise::Double as usize;
		let ud = side == Side::Up as usize || side == Side::Down as usize;
		out[i] = !ud && !half;
	});

	out
}

/// `LEAVES_SUBGROUP[i]` is set for the turns which break the orientation of the
/// domino subgroup: the quarter turns of R, F, L and B (3, 5, 6, 8, 12, 14, 15, 17).
pub const LEAVES_SUBGROUP: [bool; NUM_TURNS] = leaves_subgroup_mask();

/// The number of turns which keep a cube inside the domino subgroup
pub const NUM_PHASE2_TURNS: usize = 10;

const fn phase2_turn_list() -> [usize; NUM_PHASE2_TURNS] {
	let mut out = [0; NUM_PHASE2_TURNS];
	let mut n = 0;

	const_for!(i in 0..NUM_TURNS => {
		if !LEAVES_SUBGROUP[i] {
			out[n] = i;
			n += 1;
		}
	});

	out
}

/// U, U2, U', R2, F2, D, D2, D', L2, B2
pub const PHASE2_TURNS: [usize; NUM_PHASE2_TURNS] = phase2_turn_list();

/// Whether turning `side` right after `prev` is pointless: the same side twice
/// can be merged, and of two opposite sides only the order with the lower side first is kept.
pub const fn is_redundant(side: usize, prev: Option<usize>) -> bool {
	match prev {
		Some(p) => p == side || p == side + NUM_SIDES / 2,
		None => false,
	}
}
