//! Combinatorial helpers for the coordinate encodings.
//!
//! Combinations are numbered with the combinatorial number system and
//! arrangements by repeatedly rotating the largest element into place.

use const_for::const_for;

/// Largest n for which binomials and factorials are tabulated
const MAX_N: usize = 12;

const fn binomial_table() -> [[usize; MAX_N + 1]; MAX_N + 1] {
	let mut out = [[0; MAX_N + 1]; MAX_N + 1];

	const_for!(n in 0..MAX_N+1 => {
		out[n][0] = 1;
		const_for!(k in 1..n+1 => {
			out[n][k] = out[n-1][k-1] + out[n-1][k];
		});
	});

	out
}

const BINOMIAL: [[usize; MAX_N + 1]; MAX_N + 1] = binomial_table();

const fn factorial_table() -> [usize; MAX_N + 1] {
	let mut out = [1; MAX_N + 1];
	const_for!(i in 1..MAX_N+1 => { out[i] = out[i-1] * i; });
	out
}

pub const FACTORIAL: [usize; MAX_N + 1] = factorial_table();

/// n choose k, which is 0 whenever k > n.
pub const fn cnk(n: usize, k: usize) -> usize {
	if k > n {
		0
	} else {
		BINOMIAL[n][k]
	}
}

/// Rotate the slice by one to the left: the first element ends up last.
pub fn rotate_left<T: Copy>(v: &mut [T]) {
	if !v.is_empty() {
		v.rotate_left(1);
	}
}

/// Rotate the slice by one to the right: the last element ends up first.
pub fn rotate_right<T: Copy>(v: &mut [T]) {
	if !v.is_empty() {
		v.rotate_right(1);
	}
}

/// Map the chosen slots to their index in the combinatorial number system.
pub fn map_nck(chosen: &[bool]) -> usize {
	let mut x = 0;
	let mut out = 0;

	for (j, c) in chosen.iter().enumerate() {
		if *c {
			x += 1;
			out += cnk(j, x);
		}
	}

	out
}

/// Inverse of [map_nck]: the k chosen slots out of n for the given index.
pub fn get_nck(n: usize, k: usize, idx: usize) -> Vec<bool> {
	let mut out = vec![false; n];
	let mut idx = idx;
	let mut x = k;

	for j in (0..n).rev() {
		if x == 0 {
			break;
		}
		let c = cnk(j, x);
		if idx >= c {
			out[j] = true;
			idx -= c;
			x -= 1;
		}
	}

	out
}

/// Map a permutation of 0..n to a number in 0..n!
pub fn map_permutation(perm: &[usize]) -> usize {
	let mut perm = perm.to_vec();
	let mut out = 0;

	for j in (1..perm.len()).rev() {
		let mut k = 0;
		while perm[j] != j {
			rotate_left(&mut perm[..=j]);
			k += 1;
		}
		out = (j + 1) * out + k;
	}

	out
}

/// Inverse of [map_permutation]: the k-th permutation of 0..n
pub fn get_kth_perm(n: usize, k: usize) -> Vec<usize> {
	let mut out: Vec<usize> = (0..n).collect();
	let mut k = k;

	for j in 1..n {
		let r = k % (j + 1);
		k /= j + 1;
		for _ in 0..r {
			rotate_right(&mut out[..=j]);
		}
	}

	out
}

/// Encode where the pieces `lo..lo+n` sit in `perm` and in which order they appear.
/// The result lies in `0..(len choose n) * n!`.
pub fn map_group(perm: &[usize], lo: usize, n: usize) -> usize {
	let group = lo..lo + n;
	let chosen: Vec<bool> = perm.iter().map(|p| group.contains(p)).collect();
	let order: Vec<usize> = perm
		.iter()
		.filter(|p| group.contains(p))
		.map(|p| p - lo)
		.collect();

	FACTORIAL[n] * map_nck(&chosen) + map_permutation(&order)
}

/// Inverse of [map_group] on a permutation of `0..len`.
/// The remaining pieces fill the free slots in ascending order.
pub fn get_group(coord: usize, lo: usize, n: usize, len: usize) -> Vec<usize> {
	let chosen = get_nck(len, n, coord / FACTORIAL[n]);
	let mut group = get_kth_perm(n, coord % FACTORIAL[n]).into_iter().map(|i| i + lo);
	let mut rest = (0..len).filter(|p| !(lo..lo + n).contains(p));

	chosen
		.into_iter()
		.map(|c| if c { group.next() } else { rest.next() })
		.map(|p| p.unwrap_or_default())
		.collect()
}

/// Parity (0 = even, 1 = odd) of the number of inversions of the permutation.
pub fn permutation_parity(perm: &[usize]) -> u8 {
	let mut s = 0;
	for i in (1..perm.len()).rev() {
		for j in (0..i).rev() {
			if perm[j] > perm[i] {
				s += 1;
			}
		}
	}
	(s % 2) as u8
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn binomials() {
		assert_eq!(cnk(12, 4), 495);
		assert_eq!(cnk(8, 6), 28);
		assert_eq!(cnk(3, 4), 0);
		assert_eq!(cnk(5, 0), 1);
		assert_eq!(FACTORIAL[12], 479_001_600);
	}

	#[test]
	fn nck_roundtrip() {
		for idx in 0..cnk(12, 4) {
			let chosen = get_nck(12, 4, idx);
			assert_eq!(chosen.iter().filter(|c| **c).count(), 4);
			assert_eq!(map_nck(&chosen), idx);
		}
	}

	#[test]
	fn permutation_roundtrip() {
		for k in 0..FACTORIAL[6] {
			let perm = get_kth_perm(6, k);
			assert_eq!(map_permutation(&perm), k);
		}
		assert_eq!(get_kth_perm(4, 0), vec![0, 1, 2, 3]);
	}

	#[test]
	fn group_roundtrip() {
		for coord in 0..cnk(8, 3) * FACTORIAL[3] {
			let perm = get_group(coord, 2, 3, 8);
			assert_eq!(map_group(&perm, 2, 3), coord);
		}
	}

	#[test]
	fn parity() {
		assert_eq!(permutation_parity(&[0, 1, 2, 3]), 0);
		assert_eq!(permutation_parity(&[1, 0, 2, 3]), 1);
		assert_eq!(permutation_parity(&[1, 2, 0, 3]), 0);
	}
}
