// Copyright (c) Addison Crump, 2025, licensed under the EUPL-1.2-or-later.

//! Bookkeeping for a search over seeds: the best seed of each window of runs, and the first seed
//! reaching the target score.

use core::num::NonZeroUsize;
use serde::{Deserialize, Serialize};

/// A seed together with the score its game ended on.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub struct Candidate {
    /// The seed of the game.
    pub seed: u64,
    /// The pegs left at the end of the game.
    pub score: usize,
}

/// The summary of a completed window of runs.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub struct Report {
    /// The number of runs in the window.
    pub runs: usize,
    /// The lowest score of the window; the earliest seed wins ties.
    pub best: Candidate,
}

/// What a single observed run produced.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Observation {
    /// Set when the run completed a window.
    pub report: Option<Report>,
    /// Set when the run reached the target score.
    pub win: Option<Candidate>,
}

/// Tracks the runs of a seed search.
#[derive(Clone, Debug)]
pub struct Search {
    granularity: NonZeroUsize,
    target: usize,
    window: usize,
    total: u64,
    best: Option<Candidate>,
}

impl Search {
    /// The default number of runs per window.
    pub const GRANULARITY: NonZeroUsize = NonZeroUsize::new(100_000).unwrap();

    /// A search reporting every `granularity` runs and stopping at scores of `target` or below.
    pub fn new(granularity: NonZeroUsize, target: usize) -> Self {
        Self {
            granularity,
            target,
            window: 0,
            total: 0,
            best: None,
        }
    }

    /// The score a run has to reach to end the search.
    pub fn target(&self) -> usize {
        self.target
    }

    /// The number of runs observed so far, over all windows.
    pub fn total_runs(&self) -> u64 {
        self.total
    }

    /// The best run of the current window.
    pub fn best(&self) -> Option<Candidate> {
        self.best
    }

    /// Record the outcome of a run.
    pub fn observe(&mut self, seed: u64, score: usize) -> Observation {
        let candidate = Candidate { seed, score };
        self.window += 1;
        self.total += 1;
        if self.best.is_none_or(|best| score < best.score) {
            self.best = Some(candidate);
        }

        let mut observation = Observation::default();
        if self.window == self.granularity.get() {
            observation.report = self.best.take().map(|best| Report {
                runs: self.window,
                best,
            });
            self.window = 0;
        }
        if score <= self.target {
            observation.win = Some(candidate);
        }
        observation
    }
}

impl Default for Search {
    fn default() -> Self {
        Self::new(Self::GRANULARITY, 1)
    }
}
