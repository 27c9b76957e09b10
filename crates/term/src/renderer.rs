//! TerminalRenderer: flushes a framebuffer to a real terminal.
//!
//! Frames are diffed row by row against the previous one and only changed
//! runs are rewritten. Wide-glyph continuation cells are never printed; the
//! terminal already advanced the cursor over them.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{
        Attribute, Color, Print, ResetColor, SetAttribute, SetBackgroundColor, SetForegroundColor,
    },
    terminal, QueueableCommand,
};

use crate::fb::{Cell, CellStyle, FrameBuffer, Rgb};

pub struct TerminalRenderer {
    stdout: io::Stdout,
    last: Option<FrameBuffer>,
    buf: Vec<u8>,
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
            last: None,
            buf: Vec::with_capacity(64 * 1024),
        }
    }

    /// Switch to raw mode on the alternate screen.
    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.buf.clear();
        self.buf.queue(terminal::EnterAlternateScreen)?;
        self.buf.queue(cursor::Hide)?;
        self.buf.queue(terminal::DisableLineWrap)?;
        self.flush_buf()
    }

    /// Undo [`enter`](Self::enter).
    pub fn exit(&mut self) -> Result<()> {
        self.buf.clear();
        encode_restore_into(&mut self.buf)?;
        self.flush_buf()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Force the next draw to be a full redraw (terminal resize).
    pub fn invalidate(&mut self) {
        self.last = None;
    }

    /// Draw `fb`, then hand the previous frame back through `fb`.
    ///
    /// Keep one framebuffer and pass it in every frame: the renderer keeps
    /// the drawn frame for diffing and returns its old one for reuse, so no
    /// frame is ever cloned.
    pub fn draw_swap(&mut self, fb: &mut FrameBuffer) -> Result<()> {
        self.buf.clear();
        let mut spare = match self.last.take() {
            Some(prev) if prev.width() == fb.width() && prev.height() == fb.height() => {
                encode_diff_into(&prev, fb, &mut self.buf)?;
                prev
            }
            stale => {
                encode_full_into(fb, &mut self.buf)?;
                let mut spare = stale.unwrap_or_else(|| FrameBuffer::new(fb.width(), fb.height()));
                spare.resize(fb.width(), fb.height());
                spare
            }
        };
        self.flush_buf()?;

        std::mem::swap(&mut spare, fb);
        self.last = Some(spare);
        Ok(())
    }

    fn flush_buf(&mut self) -> Result<()> {
        self.stdout.write_all(&self.buf)?;
        self.stdout.flush()?;
        Ok(())
    }
}

/// Queues cells while remembering the active style.
struct Painter<'a> {
    out: &'a mut Vec<u8>,
    style: Option<CellStyle>,
}

impl<'a> Painter<'a> {
    fn new(out: &'a mut Vec<u8>) -> Self {
        Self { out, style: None }
    }

    fn move_to(&mut self, x: u16, y: u16) -> Result<()> {
        self.out.queue(cursor::MoveTo(x, y))?;
        Ok(())
    }

    /// Print the cells of one run. A run that starts on the right half of a
    /// wide glyph prints a blank there so the columns stay aligned.
    fn cells(&mut self, cells: &[Cell]) -> Result<()> {
        for (i, cell) in cells.iter().enumerate() {
            if cell.is_continuation() {
                if i == 0 {
                    self.set_style(cell.style)?;
                    self.out.queue(Print(' '))?;
                }
                continue;
            }
            self.set_style(cell.style)?;
            self.out.queue(Print(cell.ch))?;
        }
        Ok(())
    }

    fn set_style(&mut self, style: CellStyle) -> Result<()> {
        if self.style == Some(style) {
            return Ok(());
        }
        self.style = Some(style);
        // SGR 0 clears colors too, so it has to come before them.
        self.out.queue(SetAttribute(Attribute::Reset))?;
        self.out.queue(SetForegroundColor(rgb_to_color(style.fg)))?;
        self.out.queue(SetBackgroundColor(rgb_to_color(style.bg)))?;
        if style.bold {
            self.out.queue(SetAttribute(Attribute::Bold))?;
        }
        if style.dim {
            self.out.queue(SetAttribute(Attribute::Dim))?;
        }
        Ok(())
    }

    fn finish(self) -> Result<()> {
        self.out.queue(ResetColor)?;
        self.out.queue(SetAttribute(Attribute::Reset))?;
        Ok(())
    }
}

/// Encode the sequence that leaves the alternate screen with default styles.
pub fn encode_restore_into(out: &mut Vec<u8>) -> Result<()> {
    out.queue(ResetColor)?;
    out.queue(SetAttribute(Attribute::Reset))?;
    out.queue(terminal::EnableLineWrap)?;
    out.queue(cursor::Show)?;
    out.queue(terminal::LeaveAlternateScreen)?;
    Ok(())
}

/// Restore the terminal before the previous panic hook runs.
///
/// The release profile aborts on panic, so [`TerminalRenderer::exit`] never
/// gets a chance to run; without this the shell is left in raw mode on the
/// alternate screen and the panic message is hidden.
pub fn install_panic_restore() {
    let previous = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let mut buf = Vec::new();
        if encode_restore_into(&mut buf).is_ok() {
            let mut stdout = io::stdout();
            let _ = stdout.write_all(&buf);
            let _ = stdout.flush();
        }
        let _ = terminal::disable_raw_mode();
        previous(info);
    }));
}

fn row(fb: &FrameBuffer, y: u16) -> &[Cell] {
    let w = fb.width() as usize;
    let start = y as usize * w;
    &fb.cells()[start..start + w]
}

/// Encode a full-frame redraw into `out`.
///
/// This builds a sequence of crossterm commands without writing to stdout.
pub fn encode_full_into(fb: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    out.queue(terminal::Clear(terminal::ClearType::All))?;
    let mut painter = Painter::new(out);
    for y in 0..fb.height() {
        // Position every row explicitly; a glyph the terminal measures
        // differently must not shift the rows below it.
        painter.move_to(0, y)?;
        painter.cells(row(fb, y))?;
    }
    painter.finish()
}

/// Encode only the changed runs of `next` relative to `prev` into `out`.
///
/// Frames of different sizes are redrawn in full.
pub fn encode_diff_into(prev: &FrameBuffer, next: &FrameBuffer, out: &mut Vec<u8>) -> Result<()> {
    if prev.width() != next.width() || prev.height() != next.height() {
        return encode_full_into(next, out);
    }

    let mut painter = Painter::new(out);
    for y in 0..next.height() {
        let new_row = row(next, y);
        for (start, end) in changed_runs(row(prev, y), new_row) {
            painter.move_to(start as u16, y)?;
            painter.cells(&new_row[start..end])?;
        }
    }
    painter.finish()
}

fn rgb_to_color(rgb: Rgb) -> Color {
    Color::Rgb {
        r: rgb.r,
        g: rgb.g,
        b: rgb.b,
    }
}

/// Half-open ranges `[start, end)` where two equal-length rows differ.
///
/// A run whose first changed cell is the right half of a wide glyph is
/// widened to include the left half.
fn changed_runs(old: &[Cell], new: &[Cell]) -> Vec<(usize, usize)> {
    let mut runs = Vec::new();
    let mut x = 0;
    while x < new.len() {
        if old[x] == new[x] {
            x += 1;
            continue;
        }
        let start = if new[x].is_continuation() && x > 0 { x - 1 } else { x };
        while x < new.len() && old[x] != new[x] {
            x += 1;
        }
        runs.push((start, x));
    }
    runs
}
