//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! Cells live in canvas pixels; the view converts them to grid coordinates
//! and draws each grid cell as a `cell_w` x `cell_h` block of glyphs. Cells
//! outside the visible grid (spawning pieces above the top row) are skipped.

use crate::core::{Board, Cell, GameState, Tetromino};
use crate::fb::{FrameBuffer, Glyph, GlyphStyle, Rgb};
use crate::types::{GRID_HEIGHT, GRID_WIDTH};

const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
const PANEL_BG: Rgb = Rgb::new(0, 0, 0);

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal view of the game.
#[derive(Debug, Clone)]
pub struct GameView {
    /// Board cell width in terminal columns.
    cell_w: u16,
    /// Board cell height in terminal rows.
    cell_h: u16,
    anchor_y: AnchorY,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the usual terminal glyph aspect ratio
        Self {
            cell_w: 2,
            cell_h: 1,
            anchor_y: AnchorY::Center,
        }
    }
}

/// Top-left corner of the board frame in the viewport
#[derive(Debug, Clone, Copy)]
struct Origin {
    x: u16,
    y: u16,
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Board frame size including the border
    pub fn frame_size(&self) -> (u16, u16) {
        (
            GRID_WIDTH as u16 * self.cell_w + 2,
            GRID_HEIGHT as u16 * self.cell_h + 2,
        )
    }

    /// Render a state into an existing framebuffer, resizing it to the viewport.
    pub fn render_into(&self, state: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Glyph::default());

        let (frame_w, frame_h) = self.frame_size();
        let origin = Origin {
            x: viewport.width.saturating_sub(frame_w) / 2,
            y: match self.anchor_y {
                AnchorY::Center => viewport.height.saturating_sub(frame_h) / 2,
                AnchorY::Top => 0,
            },
        };

        let border = GlyphStyle::new(Rgb::new(200, 200, 200), PANEL_BG);
        fb.fill_rect(
            origin.x + 1,
            origin.y + 1,
            frame_w - 2,
            frame_h - 2,
            ' ',
            GlyphStyle::new(BOARD_BG, BOARD_BG),
        );
        draw_border(fb, origin.x, origin.y, frame_w, frame_h, border);

        // Settled cells, with empty positions dotted.
        let settled = Board::from_cells(state.previous().iter());
        let dot = GlyphStyle {
            dim: true,
            ..GlyphStyle::new(Rgb::new(90, 90, 100), BOARD_BG)
        };
        for row in 0..GRID_HEIGHT {
            for col in 0..GRID_WIDTH {
                match settled.get(col, row) {
                    Some(Some(colour)) => {
                        let style = GlyphStyle::new(colour.into(), BOARD_BG);
                        self.fill_grid_cell(fb, origin, col, row, '█', style);
                    }
                    _ => self.fill_grid_cell(fb, origin, col, row, '·', dot),
                }
            }
        }

        // Cells removed by the last lock flash until the rows compact.
        let flash = GlyphStyle {
            bold: true,
            ..GlyphStyle::new(Rgb::new(255, 255, 255), Rgb::new(90, 90, 110))
        };
        for cell in state.just_cleared() {
            self.fill_grid_cell(fb, origin, cell.column(), cell.row(), '▒', flash);
        }

        for cell in state.active().absolute_cells() {
            self.draw_piece_cell(fb, origin, &cell);
        }

        self.draw_side_panel(fb, state, viewport, origin, frame_w);

        if state.is_game_over() {
            draw_overlay_text(fb, origin, frame_w, frame_h, "GAME OVER", 0);
            draw_overlay_text(fb, origin, frame_w, frame_h, "R: restart", 1);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }

    fn draw_piece_cell(&self, fb: &mut FrameBuffer, origin: Origin, cell: &Cell) {
        let style = GlyphStyle {
            bold: true,
            ..GlyphStyle::new(cell.colour.into(), BOARD_BG)
        };
        self.fill_grid_cell(fb, origin, cell.column(), cell.row(), '█', style);
    }

    fn fill_grid_cell(
        &self,
        fb: &mut FrameBuffer,
        origin: Origin,
        col: i32,
        row: i32,
        ch: char,
        style: GlyphStyle,
    ) {
        if !(0..GRID_WIDTH).contains(&col) || !(0..GRID_HEIGHT).contains(&row) {
            return;
        }
        let px = origin.x + 1 + col as u16 * self.cell_w;
        let py = origin.y + 1 + row as u16 * self.cell_h;
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        viewport: Viewport,
        origin: Origin,
        frame_w: u16,
    ) {
        let panel_x = origin.x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 12 {
            return;
        }

        let label = GlyphStyle {
            bold: true,
            ..GlyphStyle::default()
        };
        let value = GlyphStyle::new(Rgb::new(200, 200, 200), PANEL_BG);

        let mut y = origin.y;
        for (name, n) in [
            ("SCORE", state.score()),
            ("LEVEL", state.level()),
            ("HIGH SCORE", state.highscore()),
        ] {
            fb.put_str(panel_x, y, name, label);
            fb.put_u32(panel_x, y.saturating_add(1), n, value);
            y = y.saturating_add(3);
        }

        fb.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);
        self.draw_preview(fb, state.next(), panel_x, y);
    }

    /// Next piece in its spawn orientation, one grid cell per block.
    fn draw_preview(&self, fb: &mut FrameBuffer, next: &Tetromino, x: u16, y: u16) {
        let style = GlyphStyle::new(next.colour.into(), PANEL_BG);
        for (r, c) in next.shape.occupied() {
            fb.fill_rect(
                x + c as u16 * self.cell_w,
                y + r as u16 * self.cell_h,
                self.cell_w,
                self.cell_h,
                '█',
                style,
            );
        }
    }
}

fn draw_border(fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: GlyphStyle) {
    if w < 2 || h < 2 {
        return;
    }
    fb.put_char(x, y, '┌', style);
    fb.put_char(x + w - 1, y, '┐', style);
    fb.put_char(x, y + h - 1, '└', style);
    fb.put_char(x + w - 1, y + h - 1, '┘', style);

    for dx in 1..w - 1 {
        fb.put_char(x + dx, y, '─', style);
        fb.put_char(x + dx, y + h - 1, '─', style);
    }
    for dy in 1..h - 1 {
        fb.put_char(x, y + dy, '│', style);
        fb.put_char(x + w - 1, y + dy, '│', style);
    }
}

fn draw_overlay_text(
    fb: &mut FrameBuffer,
    origin: Origin,
    frame_w: u16,
    frame_h: u16,
    text: &str,
    line: u16,
) {
    let y = origin.y.saturating_add(frame_h / 2).saturating_add(line);
    let text_w = text.chars().count() as u16;
    let x = origin.x.saturating_add(frame_w.saturating_sub(text_w) / 2);
    let style = GlyphStyle {
        bold: true,
        ..GlyphStyle::new(Rgb::new(255, 255, 255), PANEL_BG)
    };
    fb.put_str(x, y, text, style);
}
