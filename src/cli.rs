//! Command-line interface for xo_mobility.

use clap::Parser;
use xo_mobility::{Symbol, parse_symbol};

/// XO Mobility - slide your pieces, out-manoeuvre the computer
#[derive(Parser, Debug)]
#[command(name = "xo_mobility")]
#[command(about = "Sliding-piece mobility game against a heuristic computer", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Settings file (TOML); command-line flags take precedence
    #[arg(short, long)]
    pub config: Option<std::path::PathBuf>,

    /// Squares per board side
    #[arg(long)]
    pub side: Option<usize>,

    /// Seed for piece placement and computer moves
    #[arg(long)]
    pub seed: Option<u64>,

    /// Symbol to play (X moves first)
    #[arg(long, value_parser = parse_symbol)]
    pub play_as: Option<Symbol>,

    /// Pieces per player
    #[arg(long)]
    pub pieces: Option<u32>,

    /// Turn limit
    #[arg(long)]
    pub turns: Option<u32>,

    /// Log game decisions to stderr
    #[arg(short, long)]
    pub verbose: bool,
}
