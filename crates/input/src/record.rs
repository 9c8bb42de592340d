//! Action recording and replay loading.
//!
//! A recording is JSON lines: a header `{"seed":17}` followed by one action
//! per line in the order the reducer consumed them, e.g.
//!
//! ```text
//! {"seed":17}
//! {"tick":1}
//! {"move":{"axis":"x","amount":-20}}
//! {"move":null}
//! ```

use std::io::{BufRead, Write};

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

use crate::types::Action;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordingHeader {
    pub seed: u32,
}

/// A loaded recording
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Replay {
    pub seed: u32,
    pub actions: Vec<Action>,
}

/// Writes actions as JSON lines
pub struct ActionRecorder<W: Write> {
    out: W,
    written: u64,
}

impl<W: Write> ActionRecorder<W> {
    /// Start a recording by writing the header line
    pub fn new(mut out: W, seed: u32) -> Result<Self> {
        let line = serde_json::to_string(&RecordingHeader { seed })?;
        out.write_all(line.as_bytes())?;
        out.write_all(b"\n")?;
        Ok(Self { out, written: 0 })
    }

    pub fn record(&mut self, action: &Action) -> Result<()> {
        let line = serde_json::to_string(action)?;
        self.out.write_all(line.as_bytes())?;
        self.out.write_all(b"\n")?;
        self.written += 1;
        Ok(())
    }

    /// Number of actions recorded (header excluded)
    pub fn written(&self) -> u64 {
        self.written
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush()?;
        Ok(())
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Load a recording; blank lines are skipped
pub fn read_replay<R: BufRead>(reader: R) -> Result<Replay> {
    let mut lines = reader
        .lines()
        .enumerate()
        .filter(|(_, line)| line.as_ref().map_or(true, |l| !l.trim().is_empty()));

    let (_, header) = lines
        .next()
        .ok_or_else(|| anyhow!("replay: empty recording"))?;
    let header: RecordingHeader = serde_json::from_str(&header?)
        .map_err(|e| anyhow!("replay: invalid header: {}", e))?;

    let mut actions = Vec::new();
    for (idx, line) in lines {
        let line = line?;
        let action: Action = serde_json::from_str(&line)
            .map_err(|e| anyhow!("replay: invalid action on line {}: {}", idx + 1, e))?;
        actions.push(action);
    }

    Ok(Replay {
        seed: header.seed,
        actions,
    })
}
