//! Terminal Pixel Tetris runner (default binary).
//!
//! Merges key presses and clock ticks into one ordered action stream, feeds
//! it to the reducer one action at a time and renders after every step.
//! Configuration comes from the environment (see `RunConfig`).

use std::fs::File;
use std::io::BufWriter;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};

use pixel_tetris::config::RunConfig;
use pixel_tetris::core::{reduce, GameState};
use pixel_tetris::input::{handle_key_event, should_quit, ActionRecorder, TickClock};
use pixel_tetris::summary::SessionSummary;
use pixel_tetris::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use pixel_tetris::types::Action;

fn main() -> Result<()> {
    let config = RunConfig::from_env();
    let mut recorder = match &config.record_path {
        Some(path) => {
            let file = File::create(path).with_context(|| format!("record: create {}", path))?;
            Some(ActionRecorder::new(BufWriter::new(file), config.seed)?)
        }
        None => None,
    };

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &config, recorder.as_mut());

    // Always try to restore terminal state.
    let _ = term.exit();

    if let Some(recorder) = recorder.as_mut() {
        recorder.flush()?;
    }

    let summary = result?;
    if config.verbose {
        eprintln!(
            "[Runner] seed={} actions={} locks={} score={} level={} highscore={}",
            summary.seed,
            summary.actions,
            summary.locks,
            summary.score,
            summary.level,
            summary.highscore
        );
        if let (Some(path), Some(recorder)) = (&config.record_path, &recorder) {
            eprintln!("[Runner] recorded {} actions to {}", recorder.written(), path);
        }
    }
    Ok(())
}

fn run(
    term: &mut TerminalRenderer,
    config: &RunConfig,
    mut recorder: Option<&mut ActionRecorder<BufWriter<File>>>,
) -> Result<SessionSummary> {
    let mut state = GameState::new(config.seed);
    let mut summary = SessionSummary::new(config.seed);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);
    let mut clock = TickClock::new(config.tick_interval(), Instant::now());
    let mut dirty = true;

    loop {
        if dirty {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&state, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            dirty = false;
        }

        let mut pending: Vec<Action> = Vec::new();

        // Input with timeout until the next tick.
        if event::poll(clock.time_until_due(Instant::now()))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(summary);
                    }
                    pending.extend(handle_key_event(key));
                }
                Event::Resize(_, _) => {
                    term.invalidate();
                    dirty = true;
                }
                _ => {}
            }
        }

        pending.extend(clock.poll(Instant::now()));

        for action in pending {
            if let Some(recorder) = recorder.as_deref_mut() {
                recorder.record(&action)?;
            }
            let next = reduce(&state, action);
            summary.observe(&state, &action, &next);
            dirty |= next != state;
            state = next;
        }
    }
}
