// Copyright (c) Addison Crump, 2025, licensed under the EUPL-1.2-or-later.

//! peg-solitaire: a seeded, greedy simulation of peg solitaire on a cross-shaped board.
//!
//! The board is a square of odd side length with the corners cut away. Every playable hole but the
//! center starts with a peg. A move jumps a peg over an orthogonally adjacent peg into the empty
//! hole directly behind it, removing the jumped peg. This library implements the board, the
//! discovery of legal jumps and their application; [`Game`] ties these together into a game that
//! always takes the first jump found from a randomly rotated scan, and [`Search`] keeps the books
//! when hunting for a seed that clears the board down to a single peg.

#![no_std]

use alloc::vec;
use alloc::vec::Vec;
use core::error::Error;
use core::fmt::{Debug, Display, Formatter, Write};
use core::ops::Neg;
use core::str::FromStr;
use num_traits::{NumCast, PrimInt, Unsigned};
use serde::{Deserialize, Serialize};

extern crate alloc;

pub mod game;
pub mod search;

pub use game::{Game, GameRecord, InvalidRecordError, Phase, SeedRng, Step, simulate};
pub use search::{Candidate, Observation, Report, Search};

/// The state of a single hole of the board.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub enum Cell {
    /// Outside of the playable cross.
    Unusable,
    /// A playable hole without a peg.
    Empty,
    /// A playable hole holding a peg.
    Occupied,
}

impl Cell {
    /// The character used for this cell when rendering a board.
    pub fn symbol(self) -> char {
        match self {
            Cell::Unusable => ' ',
            Cell::Empty => '.',
            Cell::Occupied => '@',
        }
    }

    /// The cell rendered as `symbol`, if any.
    pub fn from_symbol(symbol: char) -> Option<Self> {
        match symbol {
            ' ' => Some(Cell::Unusable),
            '.' => Some(Cell::Empty),
            '@' => Some(Cell::Occupied),
            _ => None,
        }
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Cell::Unusable => "unusable",
            Cell::Empty => "empty",
            Cell::Occupied => "occupied",
        })
    }
}

/// An axis direction for a jump. A direction may be flipped with [`Neg`] (i.e. `-`).
#[derive(Copy, Clone, Debug, Ord, PartialOrd, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub enum Direction {
    /// Towards higher columns.
    Right,
    /// Towards higher rows.
    Down,
    /// Towards lower rows.
    Up,
    /// Towards lower columns.
    Left,
}

impl Direction {
    /// The order in which directions are tried for every peg while looking for a move. Changing
    /// this order changes which move a given seed plays.
    pub const SCAN_ORDER: [Direction; 4] = [
        Direction::Right,
        Direction::Down,
        Direction::Up,
        Direction::Left,
    ];
}

impl Display for Direction {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        })
    }
}

impl Neg for Direction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// A position in the board (eff., a coordinate pair).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub struct Position {
    row: usize,
    column: usize,
}

impl Position {
    /// The row of the position.
    pub fn row(&self) -> usize {
        self.row
    }

    /// The column of the position.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Get the position `by` units away from this position in the provided direction `dir`, or
    /// `None` if that would leave the non-negative quadrant.
    pub fn shift(&self, dir: Direction, by: usize) -> Option<Self> {
        let Self { row, column } = *self;
        Some(match dir {
            Direction::Up => Self {
                row: row.checked_sub(by)?,
                column,
            },
            Direction::Down => Self {
                row: row.checked_add(by)?,
                column,
            },
            Direction::Left => Self {
                row,
                column: column.checked_sub(by)?,
            },
            Direction::Right => Self {
                row,
                column: column.checked_add(by)?,
            },
        })
    }

    /// The position encoded as an index into a board of the provided size.
    pub fn as_index(&self, size: Size) -> Option<usize> {
        if self.row >= size.0 || self.column >= size.0 {
            return None;
        }
        Some(self.row * size.0 + self.column)
    }
}

impl From<(usize, usize)> for Position {
    fn from((row, column): (usize, usize)) -> Self {
        Self { row, column }
    }
}

impl Display for Position {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Marker trait: specifies that a value may be used as a scan offset.
pub trait OffsetValue: PrimInt + Unsigned + Debug {}

impl<V> OffsetValue for V where V: PrimInt + Unsigned + Debug {}

/// A rotation of the starting point of the move scan. Both components may be arbitrarily large;
/// only their remainders modulo the board size matter.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub struct Offset<V> {
    row: V,
    column: V,
}

impl<V> Offset<V> {
    /// The row component of the offset.
    pub fn row(&self) -> &V {
        &self.row
    }

    /// The column component of the offset.
    pub fn column(&self) -> &V {
        &self.column
    }
}

impl<V> From<(V, V)> for Offset<V> {
    fn from((row, column): (V, V)) -> Self {
        Self { row, column }
    }
}

impl<V> Offset<V>
where
    V: OffsetValue,
{
    /// The offset reduced to a pair of indices below `size`.
    pub fn reduce(&self, size: Size) -> (usize, usize) {
        (
            reduce_component(self.row, size.0),
            reduce_component(self.column, size.0),
        )
    }
}

fn reduce_component<V: OffsetValue>(value: V, modulus: usize) -> usize {
    // a modulus that does not fit in `V` is larger than any `V`
    match <V as NumCast>::from(modulus) {
        Some(modulus) => value % modulus,
        None => value,
    }
    .to_usize()
    .expect("reduced offset is below the board size")
}

/// The side length of a board. Always odd and at least [`Size::MIN`].
#[derive(Copy, Clone, Debug, Eq, PartialEq, Ord, PartialOrd, Hash, Deserialize, Serialize)]
#[serde(try_from = "usize", into = "usize")]
pub struct Size(usize);

impl Size {
    /// The smallest supported side length.
    pub const MIN: usize = 5;

    /// The side length of the classic board.
    pub const CLASSIC: Size = Size(9);

    /// The side length.
    pub fn get(self) -> usize {
        self.0
    }

    /// The number of grid cells, playable or not.
    pub fn cells(self) -> usize {
        self.0 * self.0
    }

    /// The center of the board.
    pub fn center(self) -> Position {
        Position {
            row: self.0 / 2,
            column: self.0 / 2,
        }
    }
}

impl Default for Size {
    fn default() -> Self {
        Self::CLASSIC
    }
}

impl From<Size> for usize {
    fn from(size: Size) -> Self {
        size.0
    }
}

/// The reason a side length was rejected in a [`SizeError`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum SizeErrorKind {
    /// The side length was even, so the board has no center.
    Even,
    /// The side length was below [`Size::MIN`].
    TooSmall,
    /// The number of cells would not fit in a `usize`.
    TooLarge,
}

/// An error associated with the validation of a board size.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct SizeError {
    size: usize,
    kind: SizeErrorKind,
}

impl SizeError {
    /// The rejected side length.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Why the side length was rejected.
    pub fn kind(&self) -> SizeErrorKind {
        self.kind
    }
}

impl Display for SizeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let reason = match self.kind {
            SizeErrorKind::Even => "the size must be odd",
            SizeErrorKind::TooSmall => "the size must be at least 5",
            SizeErrorKind::TooLarge => "the board would be too large",
        };
        f.write_fmt(format_args!(
            "board size {} could not be used: {reason}",
            self.size
        ))
    }
}

impl Error for SizeError {}

impl TryFrom<usize> for Size {
    type Error = SizeError;

    fn try_from(size: usize) -> Result<Self, Self::Error> {
        let kind = if size % 2 == 0 {
            SizeErrorKind::Even
        } else if size < Self::MIN {
            SizeErrorKind::TooSmall
        } else if size.checked_mul(size).is_none() {
            SizeErrorKind::TooLarge
        } else {
            return Ok(Self(size));
        };
        Err(SizeError { size, kind })
    }
}

/// A jump of the peg at `from` over its neighbour into the hole at `to`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Deserialize, Serialize)]
pub struct Move {
    from: Position,
    to: Position,
}

impl Move {
    /// Create a move between two positions. Whether the move is legal depends on the board; see
    /// [`Board::validate`].
    pub fn new<P: Into<Position>>(from: P, to: P) -> Self {
        Self {
            from: from.into(),
            to: to.into(),
        }
    }

    /// Where the jumping peg starts.
    pub fn from(&self) -> Position {
        self.from
    }

    /// Where the jumping peg lands.
    pub fn to(&self) -> Position {
        self.to
    }

    /// The position of the jumped peg, midway between [`Move::from`] and [`Move::to`].
    pub fn over(&self) -> Position {
        Position {
            row: self.from.row.midpoint(self.to.row),
            column: self.from.column.midpoint(self.to.column),
        }
    }

    /// The direction of the jump, or `None` if the endpoints are not exactly two apart along a
    /// single axis.
    pub fn direction(&self) -> Option<Direction> {
        Direction::SCAN_ORDER
            .into_iter()
            .find(|&dir| self.from.shift(dir, 2) == Some(self.to))
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{} ~> {}", self.from, self.to)
    }
}

/// The type of invalid move that was observed in an [`InvalidMoveError`].
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub enum InvalidMoveType {
    /// The endpoints are not two apart along a single axis.
    NotAJump,
    /// The provided position is outside of the board.
    OffBoard(Position),
    /// The starting hole held the provided cell instead of a peg.
    NoPeg(Cell),
    /// The jumped hole held the provided cell instead of a peg.
    NothingToJump(Cell),
    /// The landing hole held the provided cell instead of being empty.
    Blocked(Cell),
}

/// An error which describes an attempted invalid move.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct InvalidMoveError {
    attempted: Move,
    variant: InvalidMoveType,
}

impl InvalidMoveError {
    /// The move that was rejected.
    pub fn attempted(&self) -> &Move {
        &self.attempted
    }

    /// Why the move was rejected.
    pub fn variant(&self) -> &InvalidMoveType {
        &self.variant
    }
}

impl Display for InvalidMoveError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        let attempted = &self.attempted;
        match &self.variant {
            InvalidMoveType::NotAJump => f.write_fmt(format_args!("cannot play {attempted} because its ends are not two holes apart in a line")),
            InvalidMoveType::OffBoard(pos) => f.write_fmt(format_args!("cannot play {attempted} because {pos} is outside of the board")),
            InvalidMoveType::NoPeg(cell) => f.write_fmt(format_args!("cannot play {attempted} because the starting hole is {cell}")),
            InvalidMoveType::NothingToJump(cell) => f.write_fmt(format_args!("cannot play {attempted} because the jumped hole is {cell}")),
            InvalidMoveType::Blocked(cell) => f.write_fmt(format_args!("cannot play {attempted} because the landing hole is {cell}")),
        }
    }
}

impl Error for InvalidMoveError {}

/// An error produced when reading a board from text or from its serialized form.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ParseBoardError {
    /// The number of rows is not a valid board size.
    Size(SizeError),
    /// The provided row has more characters than the board has columns.
    RowTooLong {
        /// The offending row.
        row: usize,
        /// Its length in characters.
        length: usize,
    },
    /// The character at the provided position is not a cell symbol.
    UnknownSymbol {
        /// The row of the character.
        row: usize,
        /// The column of the character.
        column: usize,
        /// The character itself.
        symbol: char,
    },
    /// The number of cells does not match the size of the board.
    CellCount {
        /// The number of cells required by the size.
        expected: usize,
        /// The number of cells provided.
        found: usize,
    },
}

impl Display for ParseBoardError {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            ParseBoardError::Size(err) => Display::fmt(err, f),
            ParseBoardError::RowTooLong { row, length } => f.write_fmt(format_args!(
                "row {row} is {length} cells long, which is wider than the board"
            )),
            ParseBoardError::UnknownSymbol {
                row,
                column,
                symbol,
            } => f.write_fmt(format_args!(
                "unknown cell {symbol:?} at ({row}, {column})"
            )),
            ParseBoardError::CellCount { expected, found } => f.write_fmt(format_args!(
                "expected {expected} cells, but found {found}"
            )),
        }
    }
}

impl Error for ParseBoardError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            ParseBoardError::Size(err) => Some(err),
            _ => None,
        }
    }
}

impl From<SizeError> for ParseBoardError {
    fn from(err: SizeError) -> Self {
        ParseBoardError::Size(err)
    }
}

#[derive(Deserialize)]
struct RawBoard {
    size: usize,
    cells: Vec<Cell>,
}

/// A square grid of cells. Rows are stored one after another.
#[derive(Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    size: Size,
    cells: Vec<Cell>,
}

impl TryFrom<RawBoard> for Board {
    type Error = ParseBoardError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        let size = Size::try_from(raw.size)?;
        if raw.cells.len() != size.cells() {
            return Err(ParseBoardError::CellCount {
                expected: size.cells(),
                found: raw.cells.len(),
            });
        }
        Ok(Self {
            size,
            cells: raw.cells,
        })
    }
}

impl Board {
    /// Produce the starting board of the provided size: a square with two cells cut from each
    /// corner of the outermost rows and one from each corner of the rows next to them, full of
    /// pegs except for the center hole.
    pub fn new(size: Size) -> Self {
        let n = size.0;
        let mut board = Self {
            size,
            cells: vec![Cell::Occupied; size.cells()],
        };
        for row in [0, n - 1] {
            for column in [0, 1, n - 2, n - 1] {
                board.set(Position { row, column }, Cell::Unusable);
            }
        }
        for row in [1, n - 2] {
            for column in [0, n - 1] {
                board.set(Position { row, column }, Cell::Unusable);
            }
        }
        board.set(size.center(), Cell::Empty);
        board
    }

    /// Produce the starting board with the provided side length, or an error if the side length
    /// cannot be used.
    pub fn try_new(size: usize) -> Result<Self, SizeError> {
        Ok(Self::new(Size::try_from(size)?))
    }

    /// The side length of the board.
    pub fn size(&self) -> Size {
        self.size
    }

    /// The cells of the board, row after row.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// The rows of the board, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size.0)
    }

    /// Fetches the cell at the requested position, or [`None`] if the position doesn't exist in
    /// the board.
    pub fn get<P: Into<Position>>(&self, position: P) -> Option<Cell> {
        position
            .into()
            .as_index(self.size)
            .and_then(|idx| self.cells.get(idx).copied())
    }

    /// Like [`Board::get`], for coordinates which may be negative.
    pub fn get_signed(&self, row: isize, column: isize) -> Option<Cell> {
        let row = usize::try_from(row).ok()?;
        let column = usize::try_from(column).ok()?;
        self.get((row, column))
    }

    fn cell(&self, position: Position) -> Cell {
        self.cells[position.row * self.size.0 + position.column]
    }

    fn set(&mut self, position: Position, cell: Cell) {
        self.cells[position.row * self.size.0 + position.column] = cell;
    }

    fn jump(&self, from: Position, dir: Direction) -> Option<Move> {
        let over = self.get(from.shift(dir, 1)?)?;
        let to = from.shift(dir, 2)?;
        (over == Cell::Occupied && self.get(to)? == Cell::Empty).then_some(Move { from, to })
    }

    /// Every position of the board exactly once, row-major, starting at the offset position and
    /// wrapping around both axes.
    fn scan(&self, (row_offset, column_offset): (usize, usize)) -> impl Iterator<Item = Position> {
        let n = self.size.0;
        (0..n).flat_map(move |row| {
            (0..n).map(move |column| Position {
                row: (row + row_offset) % n,
                column: (column + column_offset) % n,
            })
        })
    }

    /// Find the first legal jump of a scan that starts at `offset` (taken modulo the board size),
    /// trying the pegs row by row and each peg's directions in [`Direction::SCAN_ORDER`].
    pub fn find_move<V: OffsetValue>(&self, offset: Offset<V>) -> Option<Move> {
        self.scan(offset.reduce(self.size))
            .filter(|&from| self.cell(from) == Cell::Occupied)
            .find_map(|from| {
                Direction::SCAN_ORDER
                    .into_iter()
                    .find_map(|dir| self.jump(from, dir))
            })
    }

    /// All legal jumps, in the order an unrotated scan would encounter them.
    pub fn legal_moves(&self) -> Vec<Move> {
        self.scan((0, 0))
            .filter(|&from| self.cell(from) == Cell::Occupied)
            .flat_map(move |from| {
                Direction::SCAN_ORDER
                    .into_iter()
                    .filter_map(move |dir| self.jump(from, dir))
            })
            .collect()
    }

    /// Check that `attempted` is a legal jump on this board.
    pub fn validate(&self, attempted: &Move) -> Result<(), InvalidMoveError> {
        let invalid = |variant| InvalidMoveError {
            attempted: *attempted,
            variant,
        };
        let lookup = |pos: Position| {
            self.get(pos)
                .ok_or_else(|| invalid(InvalidMoveType::OffBoard(pos)))
        };
        let from = lookup(attempted.from)?;
        let to = lookup(attempted.to)?;
        if attempted.direction().is_none() {
            return Err(invalid(InvalidMoveType::NotAJump));
        }
        let over = lookup(attempted.over())?;
        if from != Cell::Occupied {
            Err(invalid(InvalidMoveType::NoPeg(from)))
        } else if over != Cell::Occupied {
            Err(invalid(InvalidMoveType::NothingToJump(over)))
        } else if to != Cell::Empty {
            Err(invalid(InvalidMoveType::Blocked(to)))
        } else {
            Ok(())
        }
    }

    /// Play the provided jump: the starting and jumped holes are emptied and the landing hole
    /// receives the peg.
    ///
    /// # Panics
    ///
    /// Panics if the move is not legal on this board (see [`Board::validate`]).
    pub fn apply_move(&mut self, played: &Move) {
        if let Err(err) = self.validate(played) {
            panic!("{err}");
        }
        self.set(played.from, Cell::Empty);
        self.set(played.over(), Cell::Empty);
        self.set(played.to, Cell::Occupied);
    }

    /// The number of pegs on the board.
    pub fn score(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell == Cell::Occupied)
            .count()
    }

    /// The number of playable holes, with or without a peg.
    pub fn playable(&self) -> usize {
        self.cells
            .iter()
            .filter(|&&cell| cell != Cell::Unusable)
            .count()
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        for row in self.rows() {
            for cell in row {
                f.write_char(cell.symbol())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = ParseBoardError;

    /// Read a board in the format produced by [`Display`]. Rows shorter than the board are padded
    /// with unusable cells.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lines: Vec<&str> = s.lines().collect();
        let size = Size::try_from(lines.len())?;
        let mut cells = Vec::with_capacity(size.cells());
        for (row, line) in lines.into_iter().enumerate() {
            let mut length = 0;
            for (column, symbol) in line.chars().enumerate() {
                let cell = Cell::from_symbol(symbol).ok_or(ParseBoardError::UnknownSymbol {
                    row,
                    column,
                    symbol,
                })?;
                cells.push(cell);
                length += 1;
            }
            if length > size.0 {
                return Err(ParseBoardError::RowTooLong { row, length });
            }
            cells.resize(cells.len() + size.0 - length, Cell::Unusable);
        }
        Ok(Self { size, cells })
    }
}

#[cfg(test)]
mod test {
    extern crate std;

    use crate::{
        Board, Cell, Direction, InvalidMoveError, InvalidMoveType, Move, Offset, ParseBoardError,
        Position, Size, SizeErrorKind,
    };
    use alloc::boxed::Box;
    use alloc::string::ToString;
    use alloc::vec;
    use core::error::Error;
    use std::println;

    const CLASSIC: &str = concat!(
        "  @@@@@  \n",
        " @@@@@@@ \n",
        "@@@@@@@@@\n",
        "@@@@@@@@@\n",
        "@@@@.@@@@\n",
        "@@@@@@@@@\n",
        "@@@@@@@@@\n",
        " @@@@@@@ \n",
        "  @@@@@  \n",
    );

    #[test]
    fn classic_board() {
        let board = Board::new(Size::CLASSIC);
        println!("{board}");
        assert_eq!(CLASSIC, board.to_string());
        assert_eq!(68, board.score());
        assert_eq!(69, board.playable());
        assert_eq!(Some(Cell::Empty), board.get((4, 4)));
        assert_eq!(Some(Cell::Unusable), board.get((0, 1)));
        assert_eq!(Some(Cell::Occupied), board.get((0, 2)));
        assert_eq!(Some(Cell::Unusable), board.get((1, 8)));
        assert_eq!(Some(Cell::Occupied), board.get((1, 7)));
    }

    #[test]
    fn odd_sizes() -> Result<(), Box<dyn Error>> {
        for n in (5..=21).step_by(2) {
            let board = Board::try_new(n)?;
            let empty: vec::Vec<_> = (0..n)
                .flat_map(|row| (0..n).map(move |column| (row, column)))
                .filter(|&pos| board.get(pos) == Some(Cell::Empty))
                .collect();
            assert_eq!(vec![(n / 2, n / 2)], empty);
            assert_eq!(n * n - 12, board.playable());
            assert_eq!(n * n - 13, board.score());
            for pos in [(0, 0), (0, 1), (1, 0), (0, n - 1), (n - 1, 0), (n - 2, n - 1)] {
                assert_eq!(Some(Cell::Unusable), board.get(pos));
            }
        }
        Ok(())
    }

    #[test]
    fn rejected_sizes() {
        for (n, kind) in [
            (0, SizeErrorKind::Even),
            (1, SizeErrorKind::TooSmall),
            (3, SizeErrorKind::TooSmall),
            (4, SizeErrorKind::Even),
            (10, SizeErrorKind::Even),
            (usize::MAX, SizeErrorKind::TooLarge),
        ] {
            match Board::try_new(n) {
                Err(err) => {
                    assert_eq!(n, err.size());
                    assert_eq!(kind, err.kind());
                    println!("{err}");
                }
                Ok(_) => unreachable!("Should error here"),
            }
        }
    }

    #[test]
    fn signed_access() {
        let board = Board::new(Size::CLASSIC);
        for (row, column) in [(-1, 0), (0, -1), (-3, -3), (9, 0), (0, 9), (9, 9), (isize::MIN, 4)] {
            assert_eq!(None, board.get_signed(row, column));
        }
        for row in 0..9 {
            for column in 0..9 {
                assert_eq!(
                    board.get((row as usize, column as usize)),
                    board.get_signed(row, column)
                );
            }
        }
        assert_eq!(Some(Cell::Empty), board.get_signed(4, 4));
    }

    #[test]
    fn first_move() {
        let board = Board::new(Size::CLASSIC);
        let found = |offset: Offset<u64>| board.find_move(offset).unwrap();

        assert_eq!(Move::new((2, 4), (4, 4)), found(Offset::default()));
        assert_eq!(Move::new((4, 2), (4, 4)), found(Offset::from((4, 0))));
        assert_eq!(Move::new((6, 4), (4, 4)), found(Offset::from((5, 0))));
        assert_eq!(Move::new((4, 6), (4, 4)), found(Offset::from((4, 5))));
        assert_eq!(Move::new((2, 4), (4, 4)), found(Offset::from((9, 18))));
        // u64::MAX is 6 mod 9
        assert_eq!(Move::new((6, 4), (4, 4)), found(Offset::from((u64::MAX, 0))));
        assert_eq!(
            Some(Move::new((4, 2), (4, 4))),
            board.find_move(Offset::from((13u8, 0u8)))
        );
    }

    #[test]
    fn legal_moves() {
        let board = Board::new(Size::CLASSIC);
        assert_eq!(
            vec![
                Move::new((2, 4), (4, 4)),
                Move::new((4, 2), (4, 4)),
                Move::new((4, 6), (4, 4)),
                Move::new((6, 4), (4, 4)),
            ],
            board.legal_moves()
        );
        let directions: vec::Vec<_> = board
            .legal_moves()
            .iter()
            .map(|m| m.direction().unwrap())
            .collect();
        assert_eq!(
            vec![Direction::Down, Direction::Right, Direction::Left, Direction::Up],
            directions
        );
    }

    #[test]
    fn direction_order_breaks_ties() -> Result<(), Box<dyn Error>> {
        // the peg at (0, 2) can jump right and down; right is tried first
        let board: Board = "  @@.\n  @\n  .\n\n\n".parse()?;
        println!("{board}");
        assert_eq!(Size::try_from(5)?, board.size());
        for offset in [(0u8, 0u8), (0, 3), (1, 0), (4, 4)] {
            assert_eq!(
                Some(Move::new((0, 2), (0, 4))),
                board.find_move(Offset::from(offset))
            );
        }
        assert_eq!(
            vec![Move::new((0, 2), (0, 4)), Move::new((0, 2), (2, 2))],
            board.legal_moves()
        );
        Ok(())
    }

    #[test]
    fn apply() {
        let mut board = Board::new(Size::CLASSIC);
        let before = board.clone();
        let played = board.find_move(Offset::<u32>::default()).unwrap();
        board.validate(&played).unwrap();
        board.apply_move(&played);
        println!("{board}");

        assert_eq!(Some(Cell::Empty), board.get(played.from()));
        assert_eq!(Some(Cell::Empty), board.get(played.over()));
        assert_eq!(Some(Cell::Occupied), board.get(played.to()));
        assert_eq!(Position::from((3, 4)), played.over());
        assert_eq!(before.score() - 1, board.score());

        let changed = before
            .cells()
            .iter()
            .zip(board.cells())
            .filter(|(a, b)| a != b)
            .count();
        assert_eq!(3, changed);
    }

    #[test]
    fn invalid_moves() {
        let board = Board::new(Size::CLASSIC);
        let check = |attempted: Move, expected: InvalidMoveType| match board.validate(&attempted) {
            Err(InvalidMoveError { variant, .. }) => {
                assert_eq!(expected, variant);
            }
            s => unreachable!("Expected an error for {attempted}, got {s:?}"),
        };

        check(Move::new((4, 4), (4, 5)), InvalidMoveType::NotAJump);
        check(Move::new((2, 2), (4, 4)), InvalidMoveType::NotAJump);
        check(Move::new((2, 4), (2, 4)), InvalidMoveType::NotAJump);
        check(
            Move::new((8, 4), (10, 4)),
            InvalidMoveType::OffBoard(Position::from((10, 4))),
        );
        check(
            Move::new((9, 4), (7, 4)),
            InvalidMoveType::OffBoard(Position::from((9, 4))),
        );
        check(Move::new((4, 4), (4, 6)), InvalidMoveType::NoPeg(Cell::Empty));
        check(Move::new((0, 0), (2, 0)), InvalidMoveType::NoPeg(Cell::Unusable));
        check(Move::new((2, 4), (0, 4)), InvalidMoveType::Blocked(Cell::Occupied));
        check(Move::new((1, 2), (1, 0)), InvalidMoveType::Blocked(Cell::Unusable));

        let mut board = board;
        board.apply_move(&Move::new((2, 4), (4, 4)));
        match board.validate(&Move::new((4, 4), (2, 4))) {
            Err(err) => {
                assert_eq!(&Move::new((4, 4), (2, 4)), err.attempted());
                assert_eq!(&InvalidMoveType::NothingToJump(Cell::Empty), err.variant());
                println!("{err}");
            }
            s => unreachable!("Expected another error, got {s:?}"),
        }
    }

    #[test]
    #[should_panic(expected = "the landing hole is occupied")]
    fn apply_blocked() {
        let mut board = Board::new(Size::CLASSIC);
        board.apply_move(&Move::new((2, 3), (2, 5)));
    }

    #[test]
    fn stuck() -> Result<(), Box<dyn Error>> {
        let board: Board = "  ...\n .....\n..@....\n..@..\n.....\n .....\n  ...\n".parse()?;
        assert_eq!(Some(Move::new((2, 2), (4, 2))), board.find_move(Offset::<u8>::default()));

        let board: Board = "  ...\n .....\n.......\n...@...\n.......\n .....\n  ...\n".parse()?;
        assert_eq!(1, board.score());
        for row in 0..7u16 {
            for column in 0..7u16 {
                assert_eq!(None, board.find_move(Offset::from((row, column))));
            }
        }
        assert!(board.legal_moves().is_empty());
        Ok(())
    }

    #[test]
    fn parse() -> Result<(), Box<dyn Error>> {
        let board = Board::new(Size::CLASSIC);
        assert_eq!(board, CLASSIC.parse::<Board>()?);
        let trimmed = CLASSIC.replace(" \n", "\n").replace(" \n", "\n");
        assert_eq!(board, trimmed.parse::<Board>()?);

        match "@@@@\n@@@@\n@@@@\n@@@@\n".parse::<Board>() {
            Err(ParseBoardError::Size(err)) => assert_eq!(SizeErrorKind::Even, err.kind()),
            s => unreachable!("Expected another error, got {s:?}"),
        }
        match "@@@@@\n@@@@@@\n@@@@@\n@@@@@\n@@@@@\n".parse::<Board>() {
            Err(ParseBoardError::RowTooLong { row, length }) => {
                assert_eq!((1, 6), (row, length));
            }
            s => unreachable!("Expected another error, got {s:?}"),
        }
        match "@@@@@\n@@@@@\n@@x@@\n@@@@@\n@@@@@\n".parse::<Board>() {
            Err(ParseBoardError::UnknownSymbol {
                row,
                column,
                symbol,
            }) => assert_eq!((2, 2, 'x'), (row, column, symbol)),
            s => unreachable!("Expected another error, got {s:?}"),
        }
        Ok(())
    }

    #[test]
    fn serialized() -> Result<(), Box<dyn Error>> {
        let board = Board::new(Size::try_from(5)?);
        let json = serde_json::to_string(&board)?;
        assert!(json.starts_with("{\"size\":5,\"cells\":[\"Unusable\""));
        assert_eq!(board, serde_json::from_str::<Board>(&json)?);

        assert!(serde_json::from_str::<Board>("{\"size\":5,\"cells\":[\"Empty\"]}").is_err());
        assert!(serde_json::from_str::<Board>("{\"size\":4,\"cells\":[]}").is_err());
        assert!(serde_json::from_str::<Size>("6").is_err());
        Ok(())
    }

    #[test]
    fn display() {
        assert_eq!("(2, 4) ~> (4, 4)", Move::new((2, 4), (4, 4)).to_string());
        assert_eq!(Direction::Left, -Direction::Right);
        assert_eq!(Direction::Up, -Direction::Down);
        assert_eq!("up", Direction::Up.to_string());
        for cell in [Cell::Unusable, Cell::Empty, Cell::Occupied] {
            assert_eq!(Some(cell), Cell::from_symbol(cell.symbol()));
        }
    }
}
