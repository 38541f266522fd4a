//! Board state: cell heights, piece positions, turn counter.
//!
//! ## Board
//!
//! Pure data with accessors. The board knows nothing about legality; the
//! rules module decides which mutations are allowed.
//!
//! ## Snapshot
//!
//! An owned deep copy of the grid, turn counter, and player to move.
//! Taking a snapshot clones every cell, so later mutation of the live board
//! can never be observed through a snapshot.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::direction::{Position, BOARD_SIZE};
use super::piece::{Color, PieceId};

/// Height of a domed cell. Nothing can stand on or build on a dome.
pub const MAX_HEIGHT: u8 = 4;

/// Height that wins the game when a piece stands on it.
pub const WINNING_HEIGHT: u8 = 3;

type Grid = [[Cell; BOARD_SIZE]; BOARD_SIZE];

/// One grid position.
///
/// Normal play never puts more than one piece on a cell, but the cell does
/// not assume it.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Cell {
    height: u8,
    occupants: SmallVec<[PieceId; 2]>,
}

impl Cell {
    /// Building level, 0 to 4.
    #[must_use]
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Pieces standing on this cell.
    #[must_use]
    pub fn occupants(&self) -> &[PieceId] {
        &self.occupants
    }

    #[must_use]
    pub fn is_occupied(&self) -> bool {
        !self.occupants.is_empty()
    }

    #[must_use]
    pub fn is_domed(&self) -> bool {
        self.height >= MAX_HEIGHT
    }

    /// Check whether a piece of `color` stands here.
    #[must_use]
    pub fn has_color(&self, color: Color) -> bool {
        self.occupants.iter().any(|p| p.owner() == color)
    }
}

fn empty_grid() -> Grid {
    std::array::from_fn(|_| std::array::from_fn(|_| Cell::default()))
}

/// The live game board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    grid: Grid,
    turn: u32,
    current_player: Color,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Standard opening: Y(1,1), B(1,3), A(3,1), Z(3,3), flat ground,
    /// turn 1, white to move.
    #[must_use]
    pub fn new() -> Self {
        Self::with_pieces(&[
            (PieceId::Y, Position::new(1, 1)),
            (PieceId::B, Position::new(1, 3)),
            (PieceId::A, Position::new(3, 1)),
            (PieceId::Z, Position::new(3, 3)),
        ])
    }

    /// Flat board with the given placements, turn 1, white to move.
    ///
    /// Panics if a placement is off the board.
    #[must_use]
    pub fn with_pieces(placements: &[(PieceId, Position)]) -> Self {
        let mut board = Self {
            grid: empty_grid(),
            turn: 1,
            current_player: Color::White,
        };
        for &(piece, pos) in placements {
            assert!(pos.in_bounds(), "Placement {pos} is off the board");
            board.place_piece(piece, pos);
        }
        board
    }

    // === Cells ===

    /// Get a cell, or `None` if `pos` is off the board.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        let (r, c) = pos.index()?;
        Some(&self.grid[r][c])
    }

    fn cell_mut(&mut self, pos: Position) -> Option<&mut Cell> {
        let (r, c) = pos.index()?;
        Some(&mut self.grid[r][c])
    }

    /// Height at `pos`, or `None` if off the board.
    #[must_use]
    pub fn height(&self, pos: Position) -> Option<u8> {
        self.cell(pos).map(Cell::height)
    }

    /// Set the height of a cell directly (board setup).
    ///
    /// Panics if `pos` is off the board or `height` exceeds the dome level.
    pub fn set_height(&mut self, pos: Position, height: u8) {
        assert!(height <= MAX_HEIGHT, "Height {height} exceeds dome level");
        let cell = self
            .cell_mut(pos)
            .unwrap_or_else(|| panic!("Position {pos} is off the board"));
        cell.height = height;
    }

    /// Raise a cell by one level. Returns false if off the board or domed.
    pub fn raise(&mut self, pos: Position) -> bool {
        match self.cell_mut(pos) {
            Some(cell) if cell.height < MAX_HEIGHT => {
                cell.height += 1;
                true
            }
            _ => false,
        }
    }

    /// Lower a cell by one level. Only used to revert a simulated build.
    pub fn lower(&mut self, pos: Position) -> bool {
        match self.cell_mut(pos) {
            Some(cell) if cell.height > 0 => {
                cell.height -= 1;
                true
            }
            _ => false,
        }
    }

    /// Row-major iterator over all cells with their positions.
    pub fn cells(&self) -> impl Iterator<Item = (Position, &Cell)> {
        Position::all().map(move |pos| (pos, &self.grid[pos.row as usize][pos.col as usize]))
    }

    // === Pieces ===

    /// Find the cell a piece stands on.
    #[must_use]
    pub fn position_of(&self, piece: PieceId) -> Option<Position> {
        self.cells()
            .find(|(_, cell)| cell.occupants.contains(&piece))
            .map(|(pos, _)| pos)
    }

    /// Put a piece on a cell (appended after any existing occupants).
    pub fn place_piece(&mut self, piece: PieceId, pos: Position) -> bool {
        match self.cell_mut(pos) {
            Some(cell) => {
                cell.occupants.push(piece);
                true
            }
            None => false,
        }
    }

    /// Put a piece back at a specific slot in a cell's occupant list.
    pub fn insert_piece(&mut self, piece: PieceId, pos: Position, slot: usize) -> bool {
        match self.cell_mut(pos) {
            Some(cell) => {
                let slot = slot.min(cell.occupants.len());
                cell.occupants.insert(slot, piece);
                true
            }
            None => false,
        }
    }

    /// Remove a piece from a cell, returning the slot it occupied.
    pub fn remove_piece(&mut self, piece: PieceId, pos: Position) -> Option<usize> {
        let cell = self.cell_mut(pos)?;
        let slot = cell.occupants.iter().position(|&p| p == piece)?;
        cell.occupants.remove(slot);
        Some(slot)
    }

    // === Turn bookkeeping ===

    /// Turn number (starts at 1).
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Color to move.
    #[must_use]
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    /// Increment the turn counter and hand the move to the other color.
    pub fn advance_turn(&mut self) {
        self.turn += 1;
        self.current_player = self.current_player.opponent();
    }

    // === Snapshots ===

    /// Deep copy of the grid, turn counter, and player to move.
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            grid: self.grid.clone(),
            turn: self.turn,
            current_player: self.current_player,
        }
    }

    /// Overwrite this board with the contents of a snapshot.
    ///
    /// The snapshot is copied, so it stays valid for later restores.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        self.grid = snapshot.grid.clone();
        self.turn = snapshot.turn;
        self.current_player = snapshot.current_player;
    }
}

/// Immutable deep copy of a board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    grid: Grid,
    turn: u32,
    current_player: Color,
}

impl Snapshot {
    /// Get a cell, or `None` if `pos` is off the board.
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        let (r, c) = pos.index()?;
        Some(&self.grid[r][c])
    }

    /// Turn number at the time of the snapshot.
    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Color to move at the time of the snapshot.
    #[must_use]
    pub fn current_player(&self) -> Color {
        self.current_player
    }

    /// Check whether this snapshot describes the same state as `board`.
    #[must_use]
    pub fn matches(&self, board: &Board) -> bool {
        self.grid == board.grid
            && self.turn == board.turn
            && self.current_player == board.current_player
    }
}

impl From<&Board> for Snapshot {
    fn from(board: &Board) -> Self {
        board.snapshot()
    }
}
