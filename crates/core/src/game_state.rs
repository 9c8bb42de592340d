//! Game state module - immutable snapshot of one game
//!
//! A `GameState` is never mutated in place by the reducer. Every step takes a
//! reference to the current state and builds the next one, reusing cell ids so
//! the renderer can track cells across frames.
//!
//! Row clearing is a two-phase handshake: locking a piece removes the full
//! rows and records the removed cells in `just_cleared`; the following step
//! compacts the remaining cells downward and empties the list. This lets the
//! renderer show the removed cells for exactly one frame.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::cell::Cell;
use crate::geometry::Shape;
use crate::pieces::{colour_of, create_piece, flatten, shape_of};
use crate::rng::RandCursor;
use crate::scoring::{cleared_points, next_level};
use crate::types::{
    Colour, PieceKind, CELL_HEIGHT, DEFAULT_SEED, GRID_WIDTH, PREVIEW_OFFSET,
};

/// A piece: its member cells plus a pending offset not yet applied to them
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tetromino {
    pub generation: u32,
    pub kind: PieceKind,
    pub cells: Vec<Cell>,
    pub offset_x: i32,
    pub offset_y: i32,
    pub colour: Colour,
    pub shape: Shape,
}

impl Tetromino {
    /// Fresh piece at the spawn position with the given pending offset
    pub fn spawn(generation: u32, kind: PieceKind, offset: (i32, i32)) -> Self {
        let shape = shape_of(kind);
        let colour = colour_of(kind);
        Self {
            generation,
            kind,
            cells: flatten(create_piece(generation, &shape, colour)),
            offset_x: offset.0,
            offset_y: offset.1,
            colour,
            shape,
        }
    }

    pub fn with_offset(self, offset_x: i32, offset_y: i32) -> Self {
        Self {
            offset_x,
            offset_y,
            ..self
        }
    }

    /// Cells with the pending offset applied
    pub fn absolute_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.cells
            .iter()
            .map(move |c| c.translated(self.offset_x, self.offset_y))
    }

    /// Apply the pending offset to every cell and reset it to zero
    pub fn baked(self) -> Self {
        if self.offset_x == 0 && self.offset_y == 0 {
            return self;
        }
        let cells = self.absolute_cells().collect();
        Self {
            cells,
            offset_x: 0,
            offset_y: 0,
            ..self
        }
    }
}

/// Complete game state
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameState {
    pub(crate) seed: u32,
    pub(crate) game_over: bool,
    pub(crate) active: Tetromino,
    pub(crate) next: Tetromino,
    pub(crate) previous: Vec<Cell>,
    pub(crate) score: u32,
    pub(crate) highscore: u32,
    pub(crate) level: u32,
    pub(crate) just_cleared: Vec<Cell>,
    /// Selects the piece after `next`
    pub(crate) cursor: RandCursor,
}

impl GameState {
    /// Create a new game whose piece sequence starts at `seed`
    ///
    /// The first active piece starts one cell higher than later pieces.
    pub fn new(seed: u32) -> Self {
        let first = RandCursor::new(seed);
        let second = first.next();
        Self {
            seed,
            game_over: false,
            active: Tetromino::spawn(0, first.piece_kind(), (0, -CELL_HEIGHT)),
            next: Tetromino::spawn(1, second.piece_kind(), PREVIEW_OFFSET),
            previous: Vec::new(),
            score: 0,
            highscore: 0,
            level: 1,
            just_cleared: Vec::new(),
            cursor: second.next(),
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }

    pub fn is_game_over(&self) -> bool {
        self.game_over
    }

    pub fn active(&self) -> &Tetromino {
        &self.active
    }

    pub fn next(&self) -> &Tetromino {
        &self.next
    }

    /// Settled cells
    pub fn previous(&self) -> &[Cell] {
        &self.previous
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn highscore(&self) -> u32 {
        self.highscore
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    /// Cells removed by the most recent lock, until the next step compacts
    pub fn just_cleared(&self) -> &[Cell] {
        &self.just_cleared
    }

    pub fn cursor(&self) -> RandCursor {
        self.cursor
    }

    /// Occupancy grid of the settled cells
    pub fn settled_board(&self) -> Board {
        Board::from_cells(self.previous.iter())
    }

    // Scenario builders, used by tests and benches to set up positions that
    // would take many actions to reach.

    pub fn with_active(self, active: Tetromino) -> Self {
        Self { active, ..self }
    }

    pub fn with_settled(self, previous: Vec<Cell>) -> Self {
        Self { previous, ..self }
    }

    pub fn with_score(self, score: u32) -> Self {
        Self { score, ..self }
    }

    pub fn with_highscore(self, highscore: u32) -> Self {
        Self { highscore, ..self }
    }

    pub fn with_level(self, level: u32) -> Self {
        Self { level, ..self }
    }

    pub fn with_game_over(self, game_over: bool) -> Self {
        Self { game_over, ..self }
    }

    /// New game from the same seed, keeping only the high score
    pub fn restart(&self) -> Self {
        Self {
            highscore: self.highscore,
            ..Self::new(self.seed)
        }
    }

    /// Land the active piece, clear full rows and bring in the next piece
    pub(crate) fn lock(&self) -> Self {
        let landed: Vec<Cell> = self.active.absolute_cells().collect();
        let board = Board::from_cells(self.previous.iter().chain(landed.iter()));

        // A piece spans at most four rows
        let mut full_rows: ArrayVec<i32, 4> = ArrayVec::new();
        for cell in &landed {
            let row = cell.row();
            if board.is_row_full(row) && !full_rows.contains(&row) {
                full_rows.push(row);
            }
        }
        let stays = |c: &Cell| !full_rows.contains(&c.row());

        let (kept_active, removed_active): (Vec<Cell>, Vec<Cell>) =
            landed.iter().partition(|c| stays(*c));
        let (kept_previous, removed_previous): (Vec<Cell>, Vec<Cell>) =
            self.previous.iter().partition(|c| stays(*c));

        let mut previous = kept_active;
        previous.extend(kept_previous);
        let mut removed = removed_active;
        removed.extend(removed_previous);

        let score = self.score + cleared_points(removed.len());
        let game_over = landed.iter().any(|c| c.y == 0);
        let highscore = if game_over {
            self.highscore.max(score)
        } else {
            self.highscore
        };

        let active = self.next.clone().with_offset(0, 0);
        let next = Tetromino::spawn(
            self.next.generation + 1,
            self.cursor.piece_kind(),
            PREVIEW_OFFSET,
        );

        Self {
            seed: self.seed,
            game_over,
            active,
            next,
            previous,
            score,
            highscore,
            level: next_level(self.level, score),
            just_cleared: removed,
            cursor: self.cursor.next(),
        }
    }

    /// Second half of the row-clear handshake
    ///
    /// When the previous lock removed at least one row, every settled and
    /// active cell drops one cell height per cleared row beneath it, and the
    /// cleared list is emptied. Otherwise the state is returned unchanged.
    pub(crate) fn settle_cleared_rows(self) -> Self {
        if self.just_cleared.len() < GRID_WIDTH as usize {
            return self;
        }

        let mut cleared_rows: ArrayVec<i32, 4> = ArrayVec::new();
        for cell in &self.just_cleared {
            if !cleared_rows.contains(&cell.y) && !cleared_rows.is_full() {
                cleared_rows.push(cell.y);
            }
        }

        let offset_y = self.active.offset_y;
        let drop = |cell: &Cell, absolute_y: i32| {
            let below = cleared_rows.iter().filter(|&&y| y > absolute_y).count() as i32;
            cell.translated(0, below * CELL_HEIGHT)
        };

        let previous = self.previous.iter().map(|c| drop(c, c.y)).collect();
        let active_cells = self
            .active
            .cells
            .iter()
            .map(|c| drop(c, c.y + offset_y))
            .collect();

        Self {
            active: Tetromino {
                cells: active_cells,
                ..self.active
            },
            previous,
            just_cleared: Vec::new(),
            ..self
        }
    }

    /// Apply the active piece's pending offset to its cells
    pub(crate) fn bake_offset(self) -> Self {
        Self {
            active: self.active.baked(),
            ..self
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(DEFAULT_SEED)
    }
}
