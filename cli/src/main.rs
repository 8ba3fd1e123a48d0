use std::{error::Error, io::Write, str::FromStr, sync::Arc};

use clap::Parser;
use log::info;

use twophase::prelude::*;

/// Rubik's Cube solver using Kociemba's two-phase algorithm
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
	/// Use a sequence to apply on the cube
	#[arg(short, default_value_t = String::new())]
	sequence: String,

	/// Set the cube from a facelet string (the same format as when you output the cube via the "-c"-flag)
	#[arg(long, default_value_t = String::new())]
	set: String,

	/// Solve the cube (the output is a sequence)
	#[arg(long, default_value_t = false)]
	solve: bool,

	/// Output length of sequence (if --solve is used)
	#[arg(short, long, default_value_t = false)]
	length: bool,

	/// Output the cube as a string rather than colored
	#[arg(short, long, default_value_t = false)]
	char_print: bool,

	/// Scramble the cube
	#[arg(short, long, default_value_t = false)]
	random: bool,

	/// Print the status code of the cube (0 if solvable, -1 to -6 otherwise) and quit
	#[arg(long, default_value_t = false)]
	verify: bool,

	/// Solve this many random cubes in parallel and print them with their solutions
	#[arg(long)]
	batch: Option<usize>,

	/// Longest solution to search for
	#[arg(long, default_value_t = SolverConfig::default().max_length)]
	max_length: usize,

	/// Most turns phase 2 may use
	#[arg(long, default_value_t = SolverConfig::default().phase2_max_depth)]
	phase2_depth: usize,

	/// Where the tables are cached
	#[arg(long, default_value_t = String::from("data/twophase.dat"))]
	tables: String,

	/// Print the output to a file rather to the stdout
	#[arg(short, long, default_value_t = String::new())]
	output: String,
}

impl Args {
	fn solver(&self) -> Result<Solver, TableError> {
		let tables = Tables::load_or_build(&self.tables)?;
		let config = SolverConfig {
			max_length: self.max_length,
			phase2_max_depth: self.phase2_depth,
		};
		Ok(Solver::new(Arc::new(tables), config))
	}
}

fn main() -> Result<(), Box<dyn Error>> {
	env_logger::init();

	let args = Args::parse();
	// Whether to redirect it to the stdout or a file
	let mut out: Box<dyn Write> = if args.output.is_empty() {
		Box::new(std::io::stdout())
	} else {
		Box::new(std::fs::File::create(&args.output)?)
	};

	if let Some(n) = args.batch {
		let cubes: Vec<String> = (0..n).map(|_| random_cube()).collect();
		let solver = args.solver()?;

		info!("Solving {} cubes", n);
		for (cube, result) in cubes.iter().zip(solver.solve_batch(&cubes)) {
			let turns = result?;
			writeln!(out, "{} {}", cube, format_turns(&turns))?;
		}
		return Ok(());
	}

	let mut cube = FaceletCube::default();

	// Generate a random input cube
	if args.random {
		cube = FaceletCube::from_str(&random_cube())?;
	}

	// Parses a cube out of the cube string
	if !args.set.is_empty() {
		if args.verify {
			writeln!(out, "{}", verify_code(&args.set))?;
			return Ok(());
		}
		cube = FaceletCube::from_str(&args.set)?;
	}

	let turns = parse_turns(&args.sequence)?;
	if !turns.is_empty() {
		let mut cubie = cube.to_cubie_cube();
		cubie.verify()?;
		cubie.apply_turns(&turns);
		cube = FaceletCube::from(&cubie);
	}

	if args.verify {
		writeln!(out, "{}", verify_code(&cube.to_string()))?;
		return Ok(());
	}

	// Solve the cube and only outputs the sequence
	if args.solve {
		let solver = args.solver()?;
		let turns = solver.solve(&cube.to_string())?;

		write!(out, "{}", format_turns(&turns))?;
		if args.length {
			writeln!(out, " (len={})", turns.len())?;
		} else {
			writeln!(out)?;
		}
		return Ok(());
	}

	// Print the resulting cube (either as a string or with colors)
	if args.char_print || !args.output.is_empty() {
		writeln!(out, "{}", cube)?;
	} else {
		cube.print();
	}

	Ok(())
}
