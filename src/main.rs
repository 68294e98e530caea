// Copyright (c) Addison Crump, 2025, licensed under the EUPL-1.2-or-later.

//! Command-line driver: watch a seeded game, or search for a seed that leaves a single peg.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::{debug, info};
use peg_solitaire::{Board, Game, Search, SeedRng, Size, Step, simulate};
use rand::{RngCore, SeedableRng};
use rayon::prelude::*;
use std::io::{self, Write};
use std::num::NonZeroUsize;
use std::thread;
use std::time::Duration;

#[derive(Debug, Parser)]
#[command(name = "peg-solitaire", about = "Greedy seeded peg solitaire")]
struct Args {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Debug, Subcommand)]
enum Cmd {
    /// Simulate a game from the given seed
    Simulate {
        /// Seed of the simulation; 0 picks a random seed
        #[arg(default_value_t = 0)]
        seed: u64,
        /// Side length of the board (odd)
        #[arg(long, default_value_t = 9)]
        size: usize,
        /// Pause between displayed moves, in milliseconds
        #[arg(long, default_value_t = 500)]
        delay_ms: u64,
        /// Only print the summary
        #[arg(long)]
        quiet: bool,
        /// Print the game record as JSON instead of the summary
        #[arg(long)]
        json: bool,
    },
    /// Run until a game ending with the target score is found
    Find {
        /// Side length of the board (odd)
        #[arg(long, default_value_t = 9)]
        size: usize,
        /// Runs between two reports of the best seed
        #[arg(long, default_value = "100000")]
        granularity: NonZeroUsize,
        /// Stop at the first game ending with this many pegs or fewer; at least 1
        #[arg(long, default_value = "1")]
        target: NonZeroUsize,
        /// Games evaluated in parallel per batch
        #[arg(long, default_value = "4096")]
        batch: NonZeroUsize,
    },
}

fn board_size(size: usize) -> Result<Size> {
    Size::try_from(size).context("invalid --size")
}

fn redraw(board: &Board) -> io::Result<()> {
    let mut out = io::stdout().lock();
    write!(out, "\x1b[2J\x1b[H{board}")?;
    out.flush()
}

fn run_simulate(seed: u64, size: Size, delay: Duration, quiet: bool, json: bool) -> Result<()> {
    let seed = if seed == 0 { rand::random() } else { seed };
    info!("simulating seed {seed} on a board of size {}", size.get());

    let show = !quiet && !json;
    let mut rng = SeedRng::seed_from_u64(seed);
    let mut game = Game::new(size);
    if show {
        redraw(game.board())?;
    }
    while let Step::Moved(_) = game.step(&mut rng) {
        if show {
            thread::sleep(delay);
            redraw(game.board())?;
        }
    }
    let record = game.into_record();

    if json {
        let out = serde_json::json!({ "seed": seed, "record": record });
        println!("{}", serde_json::to_string_pretty(&out)?);
        return Ok(());
    }
    println!(
        "Using seed {seed}.\nEnded with {} matches remaining. Took {} moves:",
        record.score(),
        record.moves().len()
    );
    let moves: Vec<String> = record.moves().iter().map(ToString::to_string).collect();
    println!("{}", moves.join(" ; "));
    Ok(())
}

fn run_find(
    size: Size,
    granularity: NonZeroUsize,
    target: NonZeroUsize,
    batch: NonZeroUsize,
) -> Result<()> {
    info!(
        "searching for a score of {target} or less with {} threads",
        rayon::current_num_threads()
    );
    let mut seeds = SeedRng::from_os_rng();
    let mut search = Search::new(granularity, target.get());
    loop {
        let candidates: Vec<u64> = (0..batch.get()).map(|_| seeds.next_u64()).collect();
        let scores: Vec<usize> = candidates
            .par_iter()
            .map(|&seed| simulate(size, seed).score())
            .collect();
        debug!("evaluated {} games so far", search.total_runs() + candidates.len() as u64);

        for (seed, score) in candidates.into_iter().zip(scores) {
            let observation = search.observe(seed, score);
            if let Some(report) = observation.report {
                println!(
                    "best score in {} runs is {} for seed {}",
                    report.runs, report.best.score, report.best.seed
                );
            }
            if let Some(win) = observation.win {
                println!("* * * winning seed is: {}", win.seed);
                return Ok(());
            }
        }
    }
}

fn main() -> Result<()> {
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("warn"));
    let args = Args::parse();

    match args.cmd {
        Cmd::Simulate {
            seed,
            size,
            delay_ms,
            quiet,
            json,
        } => run_simulate(
            seed,
            board_size(size)?,
            Duration::from_millis(delay_ms),
            quiet,
            json,
        ),
        Cmd::Find {
            size,
            granularity,
            target,
            batch,
        } => run_find(board_size(size)?, granularity, target, batch),
    }
}
