use std::sync::{Arc, LazyLock};

use twophase::prelude::*;

/// Built once per test binary
pub static TABLES: LazyLock<Arc<Tables>> =
	LazyLock::new(|| Arc::new(Tables::build().expect("Building the tables failed")));

#[allow(dead_code)]
pub fn solver() -> Solver {
	Solver::new(TABLES.clone(), SolverConfig::default())
}

#[allow(dead_code)]
pub fn solver_with(config: SolverConfig) -> Solver {
	Solver::new(TABLES.clone(), config)
}
