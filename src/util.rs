use rand::Rng;

use crate::cube::{cubiecube::*, CubeError};

/// Check that the facelet string describes a solvable cube
pub fn verify(facelets: &str) -> Result<(), CubeError> {
	let cube = CubieCube::from_facelets(facelets).map_err(|_| CubeError::FaceletCount)?;
	cube.verify()
}

/// Like [verify], as status code: 0 if the cube is solvable, otherwise -1 to -6
/// as given by [CubeError::code].
pub fn verify_code(facelets: &str) -> i32 {
	match verify(facelets) {
		Ok(()) => 0,
		Err(e) => e.code(),
	}
}

/// A uniformly random solvable cube
pub fn random_cubie_with<R: Rng + ?Sized>(rng: &mut R) -> CubieCube {
	let mut cube = CubieCube::new();
	cube.set_flip(rng.gen_range(0..N_FLIP));
	cube.set_twist(rng.gen_range(0..N_TWIST));

	// Only half of the permutation pairs can be reached
	loop {
		cube.set_corner_permutation(rng.gen_range(0..N_CORNER_PERM));
		cube.set_edge_permutation(rng.gen_range(0..N_EDGE_PERM));
		if cube.corner_parity() == cube.edge_parity() {
			return cube;
		}
	}
}

/// The facelet string of a uniformly random solvable cube
pub fn random_cube_with<R: Rng + ?Sized>(rng: &mut R) -> String {
	random_cubie_with(rng).to_facelets()
}

pub fn random_cube() -> String {
	random_cube_with(&mut rand::thread_rng())
}
