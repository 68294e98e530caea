// Copyright (c) Addison Crump, 2025, licensed under the EUPL-1.2-or-later.

//! A full game: starting from the initial board, repeatedly play the first jump found by a scan
//! rotated by a freshly drawn random offset, until no jump is left.
//!
//! The random source is passed in explicitly, so a game is reproducible from the generator alone
//! and independent games may run side by side.

use crate::{Board, InvalidMoveError, Move, Offset, Size};
use alloc::vec::Vec;
use core::error::Error;
use core::fmt::{Display, Formatter};
use log::{debug, trace};
use rand::{RngCore, SeedableRng};
use serde::{Deserialize, Serialize};

/// The generator used by [`simulate`]. PCG is fully specified, so a seed plays the same game on
/// every platform.
pub type SeedRng = rand_pcg::Pcg64;

/// Whether a game can still advance.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Phase {
    /// A jump was available the last time one was looked for.
    Playing,
    /// No jump is left; the board is final.
    Finished,
}

/// The outcome of [`Game::step`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Step {
    /// The provided jump was played.
    Moved(Move),
    /// No jump was found.
    Finished,
}

/// A game in progress, owning its board.
#[derive(Clone, Debug)]
pub struct Game {
    board: Board,
    history: Vec<Move>,
    initial: usize,
    phase: Phase,
}

impl Game {
    /// Start a game on the starting board of the provided size.
    pub fn new(size: Size) -> Self {
        Self::from_board(Board::new(size))
    }

    /// Start a game from an arbitrary position.
    pub fn from_board(board: Board) -> Self {
        Self {
            initial: board.score(),
            board,
            history: Vec::new(),
            phase: Phase::Playing,
        }
    }

    /// The current board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The jumps played so far, in order.
    pub fn moves(&self) -> &[Move] {
        &self.history
    }

    /// The number of pegs the game started with.
    pub fn initial_pegs(&self) -> usize {
        self.initial
    }

    /// The number of pegs left. Every jump removes exactly one.
    pub fn pegs(&self) -> usize {
        self.initial - self.history.len()
    }

    /// Whether the game can still advance.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Advance the game by one jump. The scan offset is made of two draws from `rng`, row first.
    /// A finished game stays finished and draws nothing.
    pub fn step<R: RngCore + ?Sized>(&mut self, rng: &mut R) -> Step {
        if self.phase == Phase::Finished {
            return Step::Finished;
        }
        let row = rng.next_u32();
        let column = rng.next_u32();
        match self.board.find_move(Offset::from((row, column))) {
            Some(found) => {
                self.board.apply_move(&found);
                self.history.push(found);
                trace!("move {}: {found}", self.history.len());
                Step::Moved(found)
            }
            None => {
                self.phase = Phase::Finished;
                debug!(
                    "game finished after {} moves with {} pegs left",
                    self.history.len(),
                    self.pegs()
                );
                Step::Finished
            }
        }
    }

    /// Play until no jump is left.
    pub fn run<R: RngCore + ?Sized>(mut self, rng: &mut R) -> GameRecord {
        while let Step::Moved(_) = self.step(rng) {}
        self.into_record()
    }

    /// The record of the game so far.
    pub fn into_record(self) -> GameRecord {
        GameRecord {
            size: self.board.size(),
            score: self.pegs(),
            moves: self.history,
        }
    }
}

/// An error produced when a deserialized [`GameRecord`] does not replay.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum InvalidRecordError {
    /// The move with the provided index is not legal where it was played.
    Move(usize, InvalidMoveError),
    /// Replaying the moves leaves a different number of pegs than recorded.
    Score {
        /// The pegs left after replaying the moves.
        replayed: usize,
        /// The recorded score.
        recorded: usize,
    },
}

impl Display for InvalidRecordError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            InvalidRecordError::Move(idx, err) => {
                f.write_fmt(format_args!("move {idx} of the record is invalid: {err}"))
            }
            InvalidRecordError::Score { replayed, recorded } => f.write_fmt(format_args!(
                "the record claims {recorded} pegs left, but its moves leave {replayed}"
            )),
        }
    }
}

impl Error for InvalidRecordError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            InvalidRecordError::Move(_, err) => Some(err),
            InvalidRecordError::Score { .. } => None,
        }
    }
}

#[derive(Deserialize)]
struct RawGameRecord {
    size: Size,
    score: usize,
    moves: Vec<Move>,
}

impl TryFrom<RawGameRecord> for GameRecord {
    type Error = InvalidRecordError;

    fn try_from(raw: RawGameRecord) -> Result<Self, Self::Error> {
        let mut board = Board::new(raw.size);
        for (idx, played) in raw.moves.iter().enumerate() {
            board
                .validate(played)
                .map_err(|err| InvalidRecordError::Move(idx, err))?;
            board.apply_move(played);
        }
        if board.score() != raw.score {
            return Err(InvalidRecordError::Score {
                replayed: board.score(),
                recorded: raw.score,
            });
        }
        Ok(Self {
            size: raw.size,
            score: raw.score,
            moves: raw.moves,
        })
    }
}

/// The result of a game: the pegs left and every jump that was played.
///
/// Deserialization replays the moves from the starting board of the recorded size, so only
/// records of games begun with [`Game::new`] can be read back.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
#[serde(try_from = "RawGameRecord")]
pub struct GameRecord {
    size: Size,
    score: usize,
    moves: Vec<Move>,
}

impl GameRecord {
    /// The side length of the board the game was played on.
    pub fn size(&self) -> Size {
        self.size
    }

    /// The number of pegs left at the end.
    pub fn score(&self) -> usize {
        self.score
    }

    /// The jumps played, in order.
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }
}

/// Play a game on a board of the provided size, drawing offsets from a [`SeedRng`] seeded with
/// `seed`.
pub fn simulate(size: Size, seed: u64) -> GameRecord {
    let mut rng = SeedRng::seed_from_u64(seed);
    Game::new(size).run(&mut rng)
}
