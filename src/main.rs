//! NxNxN Cube Tool
//!
//! Prints cube nets, applies move sequences to solved or parsed cubes, checks
//! hand-written nets for consistency and computes the order of a sequence.

use std::error::Error;
use std::io::Read;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};

use nxcube::{parse_cube, parse_moves, persistence, ParseCubeError, RubiksCube};

/// Applies face turns to NxNxN Rubik's cubes and prints their nets.
#[derive(Parser)]
#[command(name = "nxcube")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the net of a solved cube.
    Solved {
        #[arg(short, long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(2..))]
        size: u32,
    },
    /// Apply a move sequence such as "R U R' U'" and print the result.
    Apply {
        moves: String,
        #[arg(short, long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(2..))]
        size: u32,
        /// Start from the net in this file ("-" reads stdin).
        #[arg(short, long, conflicts_with = "load")]
        input: Option<PathBuf>,
        /// Start from a binary state written by --save.
        #[arg(long)]
        load: Option<PathBuf>,
        /// Write the resulting state in binary form.
        #[arg(long)]
        save: Option<PathBuf>,
    },
    /// Check that a net describes a real cube.
    Check {
        /// Net to check; stdin when omitted or "-".
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
    /// Print how often a sequence repeats before the cube returns to its start.
    Order {
        moves: String,
        #[arg(short, long, default_value_t = 3, value_parser = clap::value_parser!(u32).range(2..))]
        size: u32,
    },
}

fn main() {
    env_logger::builder().init();
    let cli = Cli::parse();

    let result = match cli.command {
        Command::Solved { size } => run_solved(size as usize),
        Command::Apply {
            moves,
            size,
            input,
            load,
            save,
        } => run_apply(
            &moves,
            size as usize,
            input.as_deref(),
            load.as_deref(),
            save.as_deref(),
        ),
        Command::Check { input } => run_check(input.as_deref()),
        Command::Order { moves, size } => run_order(&moves, size as usize),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

/// Prints the solved net.
fn run_solved(size: usize) -> Result<(), Box<dyn Error>> {
    print!("{}", RubiksCube::new_solved(size));
    Ok(())
}

/// Applies moves to the starting cube, prints it and optionally saves it.
fn run_apply(
    moves: &str,
    size: usize,
    input: Option<&Path>,
    load: Option<&Path>,
    save: Option<&Path>,
) -> Result<(), Box<dyn Error>> {
    let moves = parse_moves(moves)?;
    let cube = start_cube(size, input, load)?.apply_moves(&moves);
    print!("{cube}");

    if let Some(path) = save {
        persistence::save(&cube, path)?;
        log::info!("saved state to {}", path.display());
    }
    Ok(())
}

/// Parses a net and reports whether it is a valid, solved cube.
fn run_check(input: Option<&Path>) -> Result<(), Box<dyn Error>> {
    let text = read_input(input)?;
    match parse_cube(&text) {
        Ok(cube) => {
            let n = cube.size();
            let state = if cube.is_solved() { "solved" } else { "scrambled" };
            println!("valid {n}x{n}x{n} cube, {state}");
            Ok(())
        }
        Err(ParseCubeError::State(state)) => {
            for problem in &state.problems {
                eprintln!("  {problem}");
            }
            Err(format!("{} problems found", state.problems.len()).into())
        }
        Err(e) => Err(e.into()),
    }
}

/// Prints the order of a move sequence.
fn run_order(moves: &str, size: usize) -> Result<(), Box<dyn Error>> {
    println!("{}", sequence_order(moves, size)?);
    Ok(())
}

fn sequence_order(moves: &str, size: usize) -> Result<usize, Box<dyn Error>> {
    let moves = parse_moves(moves)?;
    Ok(RubiksCube::new_solved(size).order(&moves))
}

/// Picks the cube to start from: a binary state, a net, or a solved cube.
fn start_cube(
    size: usize,
    input: Option<&Path>,
    load: Option<&Path>,
) -> Result<RubiksCube, Box<dyn Error>> {
    if let Some(path) = load {
        return Ok(persistence::load(path)?);
    }
    if let Some(path) = input {
        return Ok(parse_cube(&read_input(Some(path))?)?);
    }
    Ok(RubiksCube::new_solved(size))
}

/// Reads a file, or stdin for `None` and `-`.
fn read_input(path: Option<&Path>) -> std::io::Result<String> {
    match path {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path),
        _ => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
