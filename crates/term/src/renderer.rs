//! TerminalRenderer: flushes a framebuffer to a terminal.
//!
//! Frames are encoded into one byte buffer and written with a single flush.
//! The first frame (and any frame after a resize or `invalidate`) clears the
//! screen and paints every row. Later frames only repaint runs of glyphs that
//! changed, and style escapes are only emitted for the parts of the style that
//! differ from the last glyph written.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{FrameBuffer, GlyphStyle, Rgb};

impl From<Rgb> for Color {
    fn from(rgb: Rgb) -> Self {
        Color::Rgb {
            r: rgb.r,
            g: rgb.g,
            b: rgb.b,
        }
    }
}

pub struct TerminalRenderer<W: Write = io::Stdout> {
    out: W,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl TerminalRenderer<io::Stdout> {
    pub fn new() -> Self {
        Self::with_writer(io::stdout())
    }
}

impl Default for TerminalRenderer<io::Stdout> {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> TerminalRenderer<W> {
    pub fn with_writer(out: W) -> Self {
        Self {
            out,
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    /// Raw mode plus alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        self.buf.queue(ResetColor)?;
        self.buf.queue(SetAttribute(Attribute::Reset))?;
        self.buf.queue(terminal::EnableLineWrap)?;
        self.buf.queue(cursor::Show)?;
        self.buf.queue(terminal::LeaveAlternateScreen)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to repaint everything (e.g. after a resize event).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw a framebuffer, swapping it into internal state.
    ///
    /// Callers keep one `FrameBuffer` and pass it in every frame. After the
    /// call `fb` holds the previous frame, ready to be overwritten.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let prev = self.last.take();
        encode_frame(prev.as_ref(), fb, &mut self.buf)?;
        self.flush_buf()?;

        let mut prev = prev.unwrap_or_else(|| FrameBuffer::new(fb.width(), fb.height()));
        prev.resize(fb.width(), fb.height());
        std::mem::swap(&mut prev, fb);
        self.last = Some(prev);
        Ok(())
    }

    /// Bytes written by the most recent draw.
    pub fn last_frame_bytes(&self) -> usize {
        self.buf.len()
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.out.write_all(&self.buf)?;
        self.out.flush()?;
        Ok(())
    }
}

/// Encode the escapes that turn the screen showing `prev` into `next`.
///
/// Without a previous frame of the same size the screen is cleared and every
/// row is painted.
pub fn encode_frame(
    prev: Option<&FrameBuffer>,
    next: &FrameBuffer,
    out: &mut Vec<u8>,
) -> Result<()> {
    let mut pen = Pen::default();
    match prev {
        Some(prev) if prev.width() == next.width() && prev.height() == next.height() => {
            for_each_dirty_run(prev, next, |x, y, len| {
                pen.paint_run(out, next, x, y, len)
            })?;
        }
        _ => {
            out.queue(terminal::Clear(terminal::ClearType::All))?;
            for y in 0..next.height() {
                pen.paint_run(out, next, 0, y, next.width())?;
            }
        }
    }
    pen.reset(out)
}

/// Last style written to the terminal, so runs only switch what changed
#[derive(Debug, Default)]
struct Pen {
    fg: Option<Rgb>,
    bg: Option<Rgb>,
    attrs: Option<(bool, bool)>,
}

impl Pen {
    fn paint_run(
        &mut self,
        out: &mut Vec<u8>,
        fb: &FrameBuffer,
        x: u16,
        y: u16,
        len: u16,
    ) -> Result<()> {
        out.queue(cursor::MoveTo(x, y))?;
        for dx in 0..len {
            let glyph = fb.get(x + dx, y).unwrap_or_default();
            self.switch(out, glyph.style)?;
            out.queue(Print(glyph.ch))?;
        }
        Ok(())
    }

    fn switch(&mut self, out: &mut Vec<u8>, style: GlyphStyle) -> Result<()> {
        // An attribute reset also drops the colours
        if self.attrs != Some((style.bold, style.dim)) {
            out.queue(SetAttribute(Attribute::Reset))?;
            if style.bold {
                out.queue(SetAttribute(Attribute::Bold))?;
            }
            if style.dim {
                out.queue(SetAttribute(Attribute::Dim))?;
            }
            self.attrs = Some((style.bold, style.dim));
            self.fg = None;
            self.bg = None;
        }
        if self.fg != Some(style.fg) {
            out.queue(SetForegroundColor(style.fg.into()))?;
            self.fg = Some(style.fg);
        }
        if self.bg != Some(style.bg) {
            out.queue(SetBackgroundColor(style.bg.into()))?;
            self.bg = Some(style.bg);
        }
        Ok(())
    }

    fn reset(&mut self, out: &mut Vec<u8>) -> Result<()> {
        out.queue(ResetColor)?;
        out.queue(SetAttribute(Attribute::Reset))?;
        *self = Pen::default();
        Ok(())
    }
}

/// Call `f(x, y, len)` for every horizontal run of glyphs that differ
/// between two frames of the same size.
fn for_each_dirty_run(
    prev: &FrameBuffer,
    next: &FrameBuffer,
    mut f: impl FnMut(u16, u16, u16) -> Result<()>,
) -> Result<()> {
    let dirty = |x: u16, y: u16| prev.get(x, y) != next.get(x, y);
    for y in 0..next.height() {
        let mut start = None;
        for x in 0..=next.width() {
            match (start, x < next.width() && dirty(x, y)) {
                (None, true) => start = Some(x),
                (Some(s), false) => {
                    f(s, y, x - s)?;
                    start = None;
                }
                _ => {}
            }
        }
    }
    Ok(())
}
