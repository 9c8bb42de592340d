//! Reducer behaviour through the public facade

use std::collections::HashSet;

use pixel_tetris::core::{hash, reduce, Cell, CellId, GameState, RandCursor, Tetromino};
use pixel_tetris::types::{Action, Change, Colour, PieceKind, CELL_HEIGHT, PREVIEW_OFFSET};

fn settled(x: i32, y: i32) -> Cell {
    Cell {
        id: CellId::new(900, (y / 20) as u8, (x / 20) as u8),
        x,
        y,
        colour: Colour::Green,
    }
}

fn mv(change: Change) -> Action {
    Action::Move(Some(change))
}

fn positions(cells: &[Cell]) -> Vec<(i32, i32)> {
    let mut p: Vec<(i32, i32)> = cells.iter().map(|c| (c.x, c.y)).collect();
    p.sort_unstable();
    p
}

/// Horizontal I piece resting on the floor over columns 5..=8, with the rest
/// of the bottom row filled except column 9 and one cell stacked at (0, 360).
fn one_row_clear_setup() -> GameState {
    let mut cells: Vec<Cell> = [0, 20, 40, 60, 80, 180]
        .iter()
        .map(|&x| settled(x, 380))
        .collect();
    cells.push(settled(0, 360));
    GameState::new(17)
        .with_active(Tetromino::spawn(0, PieceKind::I, (0, 380)))
        .with_settled(cells)
}

#[test]
fn test_initial_state_from_seed() {
    let state = GameState::new(17);
    assert_eq!(state.active().kind, PieceKind::O);
    assert_eq!(state.next().kind, PieceKind::L);
    assert_eq!(state.cursor(), RandCursor::new(hash(hash(17))));
    assert_eq!(state.active().offset_y, -CELL_HEIGHT);
    assert_eq!(
        (state.next().offset_x, state.next().offset_y),
        PREVIEW_OFFSET
    );
}

#[test]
fn test_one_row_clear_then_compaction() {
    let state = one_row_clear_setup();

    let locked = reduce(&state, mv(Change::down()));
    assert_eq!(locked.score(), 10);
    assert_eq!(locked.just_cleared().len(), 10);
    assert!(locked.just_cleared().iter().all(|c| c.y == 380));
    assert_eq!(positions(locked.previous()), vec![(0, 360)]);

    // The next step drops the survivor into the cleared row
    let settled = reduce(&locked, Action::Tick(1));
    assert!(settled.just_cleared().is_empty());
    assert_eq!(positions(settled.previous()), vec![(0, 380)]);
    assert_eq!(settled.score(), 10);
}

/// Vertical I piece in the last column, above the given stack
fn vertical_i_over(cells: Vec<Cell>) -> GameState {
    let state = GameState::new(17)
        .with_active(Tetromino::spawn(0, PieceKind::I, (20, 100)))
        .with_settled(cells);
    let state = reduce(&state, mv(Change::rotate_cw()));
    let state = reduce(&state, mv(Change::right()));
    assert!(state.active().cells.iter().all(|c| c.x == 180));
    state
}

/// Soft-drop the active piece until it locks
fn drop_until_lock(mut state: GameState) -> GameState {
    let generation = state.active().generation;
    for _ in 0..30 {
        if state.active().generation != generation {
            break;
        }
        state = reduce(&state, mv(Change::down()));
    }
    assert_ne!(state.active().generation, generation);
    state
}

fn row(y: i32, columns: std::ops::Range<i32>) -> impl Iterator<Item = Cell> {
    columns.map(move |c| settled(c * 20, y))
}

fn assert_no_overlap(cells: &[Cell]) {
    let unique: HashSet<(i32, i32)> = cells.iter().map(|c| (c.x, c.y)).collect();
    assert_eq!(unique.len(), cells.len());
}

#[test]
fn test_two_adjacent_rows_clear() {
    let mut cells: Vec<Cell> = row(360, 0..9).chain(row(380, 0..9)).collect();
    cells.push(settled(0, 340));
    cells.push(settled(20, 320));

    let locked = drop_until_lock(vertical_i_over(cells));
    assert_eq!(locked.score(), 20);
    assert_eq!(locked.just_cleared().len(), 20);
    assert_eq!(
        positions(locked.previous()),
        vec![(0, 340), (20, 320), (180, 320), (180, 340)]
    );

    // Everything above both rows falls two cells
    let settled = reduce(&locked, Action::Tick(1));
    assert!(settled.just_cleared().is_empty());
    assert_eq!(
        positions(settled.previous()),
        vec![(0, 380), (20, 360), (180, 360), (180, 380)]
    );
}

#[test]
fn test_split_rows_clear() {
    // Rows 17 and 19 complete, row 18 keeps a gap at column 8
    let mut cells: Vec<Cell> = row(340, 0..9)
        .chain(row(360, 0..8))
        .chain(row(380, 0..9))
        .collect();
    cells.push(settled(0, 320));

    let locked = drop_until_lock(vertical_i_over(cells));
    assert_eq!(locked.score(), 20);
    let mut cleared_rows: Vec<i32> = locked.just_cleared().iter().map(|c| c.y).collect();
    cleared_rows.sort_unstable();
    cleared_rows.dedup();
    assert_eq!(cleared_rows, vec![340, 380]);

    // Row 18 falls one cell, the cells above both rows fall two
    let settled = reduce(&locked, Action::Tick(1));
    assert_no_overlap(settled.previous());
    let mut expected: Vec<(i32, i32)> = (0..8).map(|c| (c * 20, 380)).collect();
    expected.extend([(180, 380), (0, 360), (180, 360)]);
    expected.sort_unstable();
    assert_eq!(positions(settled.previous()), expected);
}

#[test]
fn test_left_move_at_wall_keeps_position() {
    // O piece hugging the left wall
    let piece = Tetromino::spawn(0, PieceKind::O, (-100, 200));
    let state = GameState::new(17).with_active(piece);
    let before: Vec<Cell> = state.active().absolute_cells().collect();

    let next = reduce(&state, mv(Change::left()));
    assert_eq!(next.active().offset_x, 0);
    assert_eq!(positions(&next.active().cells), positions(&before));
}

#[test]
fn test_blocked_down_move_locks() {
    let piece = Tetromino::spawn(0, PieceKind::O, (0, 200));
    let state = GameState::new(17)
        .with_active(piece)
        .with_settled(vec![settled(100, 220)]);
    let expected_next_kind = state.cursor().piece_kind();
    let former_next = state.next().clone();

    let next = reduce(&state, mv(Change::down()));
    assert_eq!(next.active().generation, former_next.generation);
    assert_eq!(next.active().kind, former_next.kind);
    assert_eq!(next.next().generation, former_next.generation + 1);
    assert_eq!(next.next().kind, expected_next_kind);
    assert_eq!(next.previous().len(), 5);
    assert!(!next.is_game_over());
}

#[test]
fn test_game_over_and_restart() {
    // Landing with a cell on the top row ends the game
    let piece = Tetromino::spawn(0, PieceKind::O, (0, 0));
    let state = GameState::new(17)
        .with_active(piece)
        .with_settled(vec![settled(100, 20)])
        .with_score(40)
        .with_level(2);

    let over = reduce(&state, mv(Change::down()));
    assert!(over.is_game_over());
    assert_eq!(over.highscore(), 40);
    assert!(over.highscore() >= over.score());

    // Everything except restart is ignored
    let still = reduce(&over, mv(Change::left()));
    assert_eq!(still, over);
    let still = reduce(&over, Action::Tick(100));
    assert_eq!(still, over);

    let fresh = reduce(&over, Action::restart());
    assert!(!fresh.is_game_over());
    assert_eq!(fresh.score(), 0);
    assert_eq!(fresh.level(), 1);
    assert_eq!(fresh.highscore(), 40);
    assert!(fresh.previous().is_empty());
    assert!(fresh.just_cleared().is_empty());
    assert_eq!(fresh.active().kind, GameState::new(17).active().kind);
}

#[test]
fn test_restart_ignored_during_play() {
    let state = reduce(&GameState::new(17), Action::Tick(1));
    let next = reduce(&state, Action::restart());
    assert_eq!(next, state);
}

#[test]
fn test_tick_pacing_follows_level() {
    let state = reduce(&GameState::new(17), Action::Tick(1));
    let y0 = state.active().cells[0].y;

    assert_eq!(reduce(&state, Action::Tick(99)).active().cells[0].y, y0);
    assert_eq!(reduce(&state, Action::Tick(100)).active().cells[0].y, y0 + 20);

    let fast = state.clone().with_level(2);
    assert_eq!(reduce(&fast, Action::Tick(50)).active().cells[0].y, y0 + 20);
    assert_eq!(reduce(&fast, Action::Tick(51)).active().cells[0].y, y0);

    // Past level 100 every tick falls
    let fastest = state.with_level(250);
    assert_eq!(reduce(&fastest, Action::Tick(7)).active().cells[0].y, y0 + 20);
}

#[test]
fn test_level_up_on_threshold() {
    let state = one_row_clear_setup().with_score(40);
    let next = reduce(&state, mv(Change::down()));
    assert_eq!(next.score(), 50);
    assert_eq!(next.level(), 2);

    let state = one_row_clear_setup().with_score(20);
    let next = reduce(&state, mv(Change::down()));
    assert_eq!(next.level(), 1);
}

#[test]
fn test_square_rotation_is_identity() {
    let state = reduce(&GameState::new(17), Action::Tick(1));
    assert_eq!(state.active().kind, PieceKind::O);
    let mut turned = state.clone();
    for _ in 0..4 {
        turned = reduce(&turned, mv(Change::rotate_cw()));
    }
    assert_eq!(turned.active(), state.active());
}

#[test]
fn test_double_turn_keeps_pivot() {
    for kind in [PieceKind::T, PieceKind::Z, PieceKind::S, PieceKind::J, PieceKind::L] {
        let piece = Tetromino::spawn(0, kind, (0, 200));
        let state = reduce(&GameState::new(17).with_active(piece), Action::Tick(1));
        let pivot = |s: &GameState| {
            s.active()
                .cells
                .iter()
                .find(|c| c.id.is_pivot())
                .map(|c| (c.x, c.y))
        };

        let turned = reduce(&state, mv(Change::rotate_cw()));
        let turned = reduce(&turned, mv(Change::rotate_cw()));
        assert_eq!(pivot(&turned), pivot(&state), "{:?}", kind);

        let back = reduce(&reduce(&state, mv(Change::rotate_cw())), mv(Change::rotate_ccw()));
        assert_eq!(positions(&back.active().cells), positions(&state.active().cells));
        assert_eq!(back.active().shape, state.active().shape);
    }
}

#[test]
fn test_rotation_rejected_when_grounded() {
    // T resting on a settled cell below its left arm
    let piece = Tetromino::spawn(0, PieceKind::T, (0, 200));
    let state = reduce(
        &GameState::new(17)
            .with_active(piece)
            .with_settled(vec![settled(100, 220)]),
        Action::Tick(1),
    );
    let next = reduce(&state, mv(Change::rotate_cw()));
    assert_eq!(next.active(), state.active());
}

#[test]
fn test_rotation_rejected_outside_wall() {
    let piece = Tetromino::spawn(0, PieceKind::I, (0, 200));
    let mut state = reduce(&GameState::new(17).with_active(piece), mv(Change::rotate_cw()));
    // Vertical at x = 140; walk to the wall
    for _ in 0..8 {
        state = reduce(&state, mv(Change::left()));
    }
    assert!(state.active().cells.iter().all(|c| c.x == 0));

    let next = reduce(&state, mv(Change::rotate_cw()));
    assert_eq!(next.active(), state.active());
}

#[test]
fn test_cell_ids_stable_across_moves() {
    let state = GameState::new(17);
    let ids =
        |s: &GameState| -> HashSet<CellId> { s.active().cells.iter().map(|c| c.id).collect() };
    let moved = reduce(&state, mv(Change::right()));
    let moved = reduce(&moved, mv(Change::down()));
    let moved = reduce(&moved, mv(Change::rotate_cw()));
    assert_eq!(ids(&moved), ids(&state));
}

/// Pseudo-random but reproducible action stream
fn scripted_actions(seed: u32, len: usize) -> Vec<Action> {
    let mut value = seed;
    let mut tick = 0u64;
    (0..len)
        .map(|_| {
            value = hash(value);
            tick += 1;
            match value % 16 {
                0 => mv(Change::left()),
                1 => mv(Change::right()),
                2 | 3 => mv(Change::down()),
                4 => mv(Change::rotate_cw()),
                5 => mv(Change::rotate_ccw()),
                6 => Action::restart(),
                _ => Action::Tick(tick),
            }
        })
        .collect()
}

#[test]
fn test_identical_inputs_identical_states() {
    let actions = scripted_actions(99, 3000);
    let run = |seed| {
        actions
            .iter()
            .fold(GameState::new(seed), |state, action| reduce(&state, *action))
    };
    assert_eq!(run(17), run(17));
    assert_eq!(run(4), run(4));
}

#[test]
fn test_invariants_hold_over_long_play() {
    let mut state = GameState::new(17);
    let mut highscore = 0;
    for action in scripted_actions(2024, 20_000) {
        let next = reduce(&state, action);

        let mut seen = HashSet::new();
        for cell in next.previous() {
            assert!(seen.insert((cell.x, cell.y)), "overlap at {:?}", cell);
            assert_eq!(cell.y % CELL_HEIGHT, 0);
        }
        if !next.is_game_over() && next.just_cleared().is_empty() {
            assert!(next.previous().iter().all(|c| (0..400).contains(&c.y)));
        }

        assert!(next.highscore() >= highscore);
        highscore = next.highscore();
        if next.is_game_over() {
            assert!(next.highscore() >= next.score());
        }
        if !state.is_game_over() {
            assert!(next.score() >= state.score());
        }
        state = next;
    }
}
