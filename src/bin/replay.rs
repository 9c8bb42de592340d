//! Headless replay of a recorded session.
//!
//! Usage: `replay <recording.jsonl> [--seed N] [--verbose]`
//!
//! Re-reduces the recorded actions from the recording's seed (or `--seed`)
//! and prints a JSON summary on stdout.

use std::fs::File;
use std::io::BufReader;

use anyhow::{anyhow, Context, Result};

use pixel_tetris::config::RunConfig;
use pixel_tetris::input::read_replay;
use pixel_tetris::summary::replay_session;

#[derive(Debug, Clone, PartialEq, Eq)]
struct ReplayArgs {
    path: String,
    seed: Option<u32>,
    verbose: bool,
}

fn parse_replay_args(args: &[String]) -> Result<ReplayArgs> {
    let mut path = None;
    let mut seed = None;
    let mut verbose = false;
    let mut i = 0usize;
    while i < args.len() {
        match args[i].as_str() {
            "--seed" => {
                i += 1;
                let v = args
                    .get(i)
                    .ok_or_else(|| anyhow!("replay: missing value for --seed"))?;
                seed = Some(
                    v.parse::<u32>()
                        .map_err(|_| anyhow!("replay: invalid --seed value: {}", v))?,
                );
            }
            "--verbose" | "-v" => verbose = true,
            other if other.starts_with('-') => {
                return Err(anyhow!("replay: unknown argument: {}", other));
            }
            other => {
                if path.is_some() {
                    return Err(anyhow!("replay: unexpected argument: {}", other));
                }
                path = Some(other.to_string());
            }
        }
        i += 1;
    }

    let path = path.ok_or_else(|| anyhow!("replay: missing recording path"))?;
    Ok(ReplayArgs {
        path,
        seed,
        verbose,
    })
}

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let args = parse_replay_args(&args)?;
    let verbose = args.verbose || RunConfig::from_env().verbose;

    let file = File::open(&args.path).with_context(|| format!("replay: open {}", args.path))?;
    let mut replay = read_replay(BufReader::new(file))?;
    if let Some(seed) = args.seed {
        replay.seed = seed;
    }

    if verbose {
        eprintln!(
            "[Replay] {} actions from {} (seed {})",
            replay.actions.len(),
            args.path,
            replay.seed
        );
    }

    let (_, summary) = replay_session(&replay, |at, state| {
        if verbose {
            eprintln!(
                "[Replay] game over at action {}: score={} highscore={}",
                at,
                state.score(),
                state.highscore()
            );
        }
    });

    println!("{}", serde_json::to_string_pretty(&summary)?);
    Ok(())
}
