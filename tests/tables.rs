use bit_set::BitSet;
use rand::{rngs::StdRng, Rng, SeedableRng};
use twophase::{
	cube::cubiecube::*,
	prelude::*,
	solve::{coord::CoordCube, tables::PruneTable},
};

mod common;
use common::TABLES;

/// Distances up to this are checked by brute force
const DEPTH: u8 = 4;

/// Breadth first search on the cubie level, projected onto the table index.
/// Every index within DEPTH turns must have its exact distance,
/// all others must be further away.
fn check_prefix(table: &PruneTable, turns: &[usize], index: impl Fn(&CubieCube) -> usize) {
	let mut visited = BitSet::with_capacity(table.len());
	let mut layer = vec![CubieCube::new()];
	visited.insert(index(&layer[0]));

	for depth in 0..=DEPTH {
		for cube in layer.iter() {
			assert_eq!(table.get(index(cube)), depth);
		}
		if depth == DEPTH {
			break;
		}

		let mut next = vec![];
		for cube in layer.iter() {
			for m in turns {
				let mut c = cube.clone();
				c.apply_turn(Turn::from_index(*m));
				if visited.insert(index(&c)) {
					next.push(c);
				}
			}
		}
		layer = next;
	}

	for i in 0..table.len() {
		if !visited.contains(i) {
			assert!(table.get(i) > DEPTH, "Entry {} is too small", i);
		}
	}
}

#[test_log::test]
fn phase1_pruning() {
	let all: Vec<usize> = (0..NUM_TURNS).collect();

	check_prefix(&TABLES.slice_twist_prune, &all, |c| {
		N_SLICE1 * c.get_twist() + c.get_fr_to_br() / N_SLICE2
	});
	check_prefix(&TABLES.slice_flip_prune, &all, |c| {
		N_SLICE1 * c.get_flip() + c.get_fr_to_br() / N_SLICE2
	});
}

#[test_log::test]
fn phase2_pruning() {
	check_prefix(&TABLES.slice_urf_to_dlf_parity_prune, &PHASE2_TURNS, |c| {
		(N_SLICE2 * c.get_urf_to_dlf() + c.get_fr_to_br()) * 2 + c.corner_parity() as usize
	});
	check_prefix(&TABLES.slice_ur_to_df_parity_prune, &PHASE2_TURNS, |c| {
		(N_SLICE2 * c.get_ur_to_df() + c.get_fr_to_br()) * 2 + c.corner_parity() as usize
	});
}

#[test_log::test]
/// Turning the coordinates must give the coordinates of the turned cube
fn coordinates_follow_cube() {
	let mut rng = StdRng::seed_from_u64(77);
	let mut cube = CubieCube::new();
	let mut coord = CoordCube::new(&cube);

	for _ in 0..1000 {
		let turn = Turn::from_index(rng.gen_range(0..NUM_TURNS));
		cube.apply_turn(turn);
		coord.apply(&TABLES, turn.index());

		let expected = CoordCube::new(&cube);
		assert_eq!(coord.twist, expected.twist);
		assert_eq!(coord.flip, expected.flip);
		assert_eq!(coord.parity, expected.parity);
		assert_eq!(coord.fr_to_br, expected.fr_to_br);
		assert_eq!(coord.urf_to_dlf, expected.urf_to_dlf);
		assert_eq!(coord.ur_to_ul, expected.ur_to_ul);
		assert_eq!(coord.ub_to_df, expected.ub_to_df);
		if (coord.ur_to_ul as usize) < N_MERGE && (coord.ub_to_df as usize) < N_MERGE {
			assert_eq!(coord.ur_to_df, expected.ur_to_df);
		}
	}
}

#[test_log::test]
fn phase2_movetable() {
	let mut rng = StdRng::seed_from_u64(78);
	let mut cube = CubieCube::new();

	for _ in 0..1000 {
		let m = PHASE2_TURNS[rng.gen_range(0..NUM_PHASE2_TURNS)];
		let ur_to_df = TABLES.ur_to_df_move[cube.get_ur_to_df()][m] as usize;
		cube.apply_turn(Turn::from_index(m));
		assert_eq!(cube.get_ur_to_df(), ur_to_df);
	}

	for row in TABLES.ur_to_df_move.iter() {
		for (m, entry) in row.iter().enumerate() {
			assert_eq!(*entry == u16::MAX, LEAVES_SUBGROUP[m]);
		}
	}
}

#[test_log::test]
/// Step by step construction gives the same tables and stops when done
fn builder_steps() {
	let mut builder = TableBuilder::new();
	let mut steps = 0;

	while let Some(step) = builder.next().unwrap() {
		steps += 1;
		assert_ne!(builder.pending(), Some(step));
	}
	assert_eq!(steps, 12);
	assert!(builder.is_complete());
	assert!(builder.next().unwrap().is_none());

	let tables = builder.finish().unwrap();
	assert!(tables.check_sizes().is_ok());
	assert!(tables == **TABLES);
}

#[test_log::test]
fn cache_roundtrip() {
	let dir = std::env::temp_dir().join(format!("twophase-test-{}", std::process::id()));
	let path = dir.join("tables.dat");

	TABLES.save(&path).unwrap();
	let loaded = Tables::load(&path).unwrap();
	assert!(loaded == **TABLES);

	let loaded = Tables::load_or_build(&path).unwrap();
	assert!(loaded == **TABLES);

	// Cut off files are rejected
	let bytes = std::fs::read(&path).unwrap();
	std::fs::write(&path, &bytes[..bytes.len() / 2]).unwrap();
	assert!(Tables::load(&path).is_err());

	std::fs::remove_dir_all(&dir).unwrap();
}

#[test_log::test]
fn missing_cache() {
	let path = std::env::temp_dir().join("twophase-test-does-not-exist.dat");
	assert!(matches!(Tables::load(path), Err(TableError::Io(_))));
}
