// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `nqueen`: watch the N-Queens backtracking search step by step.
//!
//! ```bash
//! nqueen 6                       # animate a 6x6 search at 50ms per step
//! nqueen 8 --all                # no pacing, print results and the final board
//! nqueen 8 --exclude-symmetry --all --stats
//! ```

use std::io;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use nqueen_step::context::SearchConfig;
use nqueen_step::geometry::BoardSize;
use nqueen_step::session::{Session, SessionConfig};
use nqueen_step::view::TextView;

#[derive(Debug, Parser)]
#[command(name = "nqueen")]
#[command(about = "Step through a backtracking N-Queens search", long_about = None)]
struct Cli {
    /// Board size (4 to 12)
    #[arg(value_name = "N", default_value_t = BoardSize::DEFAULT)]
    size: usize,

    /// Count placements that are rotations or reflections of each other once
    #[arg(short = 'x', long)]
    exclude_symmetry: bool,

    /// Delay between steps in milliseconds (0 for none)
    #[arg(long, default_value_t = 50)]
    interval_ms: u64,

    /// Only print placements as they are found, not every step
    #[arg(short, long)]
    solutions_only: bool,

    /// Run to the end without pacing and show the final board once
    #[arg(short, long, conflicts_with_all = ["interval_ms", "solutions_only"])]
    all: bool,

    /// Stop after this many steps
    #[arg(long)]
    max_steps: Option<u64>,

    /// Print search statistics at the end
    #[arg(long)]
    stats: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    let search = SearchConfig::new(cli.size, cli.exclude_symmetry)?;
    let config = SessionConfig {
        interval: Duration::from_millis(cli.interval_ms),
        max_steps: cli.max_steps,
        render_steps: !(cli.solutions_only || cli.all),
    };

    let stdout = io::stdout();
    let mut session = Session::new(search, config, TextView::new(stdout.lock()))?;
    let summary = if cli.all {
        session.run_all()?
    } else {
        session.run()?
    };

    println!(
        "=== N-Queens (N={}, exclude symmetry: {}) ===",
        search.board_size(),
        search.exclude_symmetry()
    );
    println!("  Results: {}", summary.results);
    println!("  Steps:   {}", summary.steps);
    if !summary.exhausted {
        println!("  (stopped before the search was exhausted)");
    }
    if cli.stats {
        println!("  Stats:   {}", session.context().statistics());
    }

    Ok(())
}
