//! QuizView: maps a `core::QuizSnapshot` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::{FactGrid, GridCell, QuizSnapshot};
use crate::fb::{text_width, CellStyle, FrameBuffer, Rgb};
use crate::types::{FeedbackCategory, Phase, GRID_SIZE, OPTION_COUNT, ROUNDS_PER_SESSION};

/// Rows used by the full quiz layout.
pub const CONTENT_HEIGHT: u16 = 24;

const TITLE: &str = "개똥 구구단 연습하기 🎈";

// Row offsets from the top of the content block.
const HEADER_ROW: u16 = 1;
const MODE_ROW: u16 = 2;
const FACT_ROW: u16 = 4;
const GRID_ROW: u16 = 5;
const BUTTON_ROW: u16 = GRID_ROW + GRID_SIZE as u16 + 3;
const BANNER_ROW: u16 = BUTTON_ROW + 2;
const MEDIA_ROW: u16 = BANNER_ROW + 2;
const BUTTON_W: u16 = 8;
const BUTTON_GAP: u16 = 2;

const BG: Rgb = Rgb::new(0, 0, 0);
const TEXT: Rgb = Rgb::new(220, 220, 220);
const BLUE: Rgb = Rgb::new(31, 119, 180);
const RED: Rgb = Rgb::new(255, 94, 94);
const CIRCLE: Rgb = Rgb::new(255, 51, 102);
const GREEN: Rgb = Rgb::new(76, 175, 80);
const CREAM: Rgb = Rgb::new(255, 249, 206);
const AMBER: Rgb = Rgb::new(255, 201, 60);
const SLATE: Rgb = Rgb::new(30, 30, 40);

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

/// Names of the media assets picked for the current feedback screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MediaStatusView<'a> {
    pub visual: Option<&'a str>,
    pub audio: Option<&'a str>,
}

/// Front-end state that is not part of the quiz session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UiState<'a> {
    /// Milliseconds since the current question appeared (drives the reveal).
    pub reveal_ms: u32,
    /// Highlighted option button.
    pub cursor: u8,
    pub media: MediaStatusView<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnchorY {
    Center,
    Top,
}

/// A lightweight terminal renderer for the quiz.
pub struct QuizView {
    /// Grid cell width in terminal columns (2 fits one emoji).
    cell_w: u16,
    anchor_y: AnchorY,
}

impl Default for QuizView {
    fn default() -> Self {
        Self {
            cell_w: 2,
            anchor_y: AnchorY::Center,
        }
    }
}

impl QuizView {
    pub fn new(cell_w: u16) -> Self {
        Self {
            cell_w: cell_w.max(2),
            anchor_y: AnchorY::Center,
        }
    }

    pub fn with_anchor_y(mut self, anchor_y: AnchorY) -> Self {
        self.anchor_y = anchor_y;
        self
    }

    /// Render a frame into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, snap: &QuizSnapshot, ui: &UiState<'_>, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let w = viewport.width;
        let top = match self.anchor_y {
            AnchorY::Center => viewport.height.saturating_sub(CONTENT_HEIGHT) / 2,
            AnchorY::Top => 0,
        };

        fb.put_str_centered(0, w, top, TITLE, CellStyle::new(TEXT, BG).bold());

        if snap.phase == Phase::GameOver {
            self.draw_game_over(fb, snap, ui, w, top);
        } else {
            self.draw_question(fb, snap, ui, w, top);
        }

        let help = match snap.phase {
            Phase::AwaitingAnswer => "1/2/3 또는 ←→+Enter 답하기 · m 모드 · r 다시 · q 끝",
            Phase::CorrectFeedback | Phase::WrongFeedback => "Enter/n 다음 문제 👉 · m 모드 · r 다시 · q 끝",
            Phase::GameOver => "Enter/r 처음부터 다시 연습하기 🚀 · m 모드 · q 끝",
        };
        fb.put_str_centered(0, w, top + CONTENT_HEIGHT - 1, help, CellStyle::new(TEXT, BG).dim());
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, snap: &QuizSnapshot, ui: &UiState<'_>, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(snap, ui, viewport, &mut fb);
        fb
    }

    fn draw_question(&self, fb: &mut FrameBuffer, snap: &QuizSnapshot, ui: &UiState<'_>, w: u16, top: u16) {
        let text = CellStyle::new(TEXT, BG);

        // Header: round and score.
        let header_w = text_width("📈 단계: 00 / 00  |  🏆 현재 점수: 000점");
        let mut x = w.saturating_sub(header_w) / 2;
        x = fb.put_str(x, top + HEADER_ROW, "📈 단계: ", text);
        x = fb.put_u32(x, top + HEADER_ROW, snap.round_count as u32, text.bold());
        x = fb.put_str(x, top + HEADER_ROW, " / ", text);
        x = fb.put_u32(x, top + HEADER_ROW, ROUNDS_PER_SESSION as u32, text);
        x = fb.put_str(x, top + HEADER_ROW, "  |  🏆 현재 점수: ", text);
        x = fb.put_u32(x, top + HEADER_ROW, snap.score, text.bold());
        fb.put_str(x, top + HEADER_ROW, "점", text);

        let mode_label = format!("모드: {}", snap.mode);
        fb.put_str_centered(0, w, top + MODE_ROW, &mode_label, text.dim());

        let Some(question) = snap.question else {
            return;
        };

        // Fact line.
        let fact = format!("{} X {} = ?", question.num1, question.num2);
        fb.put_str_centered(0, w, top + FACT_ROW, &fact, CellStyle::new(BLUE, BG).bold());

        // Grid.
        let grid = FactGrid::render(question.num1, question.num2, question.glyph);
        let frame_w = GRID_SIZE as u16 * self.cell_w + 2;
        let grid_x = w.saturating_sub(frame_w) / 2;
        self.draw_grid(fb, &grid, ui.reveal_ms, grid_x, top + GRID_ROW);

        // Option buttons.
        let row_w = OPTION_COUNT as u16 * BUTTON_W + (OPTION_COUNT as u16 - 1) * BUTTON_GAP;
        let row_x = w.saturating_sub(row_w) / 2;
        let buttons_y = top + BUTTON_ROW;
        for (i, &value) in question.options.iter().enumerate() {
            let bx = row_x + i as u16 * (BUTTON_W + BUTTON_GAP);
            let is_correct = value == question.correct;
            let style = match snap.phase {
                Phase::AwaitingAnswer if i as u8 == ui.cursor => CellStyle::new(RED, CREAM).bold(),
                Phase::AwaitingAnswer => CellStyle::new(RED, SLATE).bold(),
                Phase::CorrectFeedback if is_correct => CellStyle::new(GREEN, CREAM).bold(),
                Phase::WrongFeedback if is_correct => CellStyle::new(CIRCLE, CREAM).bold(),
                _ => CellStyle::new(Rgb::new(160, 160, 160), SLATE).dim(),
            };
            let (open, close) = match snap.phase {
                Phase::AwaitingAnswer if i as u8 == ui.cursor => ('>', '<'),
                Phase::WrongFeedback if is_correct => ('(', ')'),
                _ => ('[', ']'),
            };
            self.draw_button(fb, bx, buttons_y, value, open, close, style);
        }

        // Banner.
        let banner_y = top + BANNER_ROW;
        match snap.feedback() {
            Some(category) => {
                let color = match category {
                    FeedbackCategory::Correct => GREEN,
                    _ => RED,
                };
                fb.put_str_centered(0, w, banner_y, category.banner(), CellStyle::new(color, BG).bold());
                if category == FeedbackCategory::Wrong {
                    if let Some(answer) = snap.last_answer {
                        let line = format!("고른 답: {}  →  정답: {}", answer, question.correct);
                        fb.put_str_centered(0, w, banner_y + 1, &line, text);
                    }
                }
            }
            None => {
                fb.put_str_centered(0, w, banner_y, "정답을 골라 보세요!", text.dim());
            }
        }

        self.draw_media(fb, ui, w, top + MEDIA_ROW);
    }

    fn draw_game_over(&self, fb: &mut FrameBuffer, snap: &QuizSnapshot, ui: &UiState<'_>, w: u16, top: u16) {
        let Some(outcome) = snap.outcome else {
            return;
        };
        let color = if outcome.passed() { GREEN } else { RED };
        fb.put_str_centered(0, w, top + FACT_ROW, outcome.message(), CellStyle::new(color, BG).bold());

        let score = format!("최종 점수: {}점", snap.score);
        fb.put_str_centered(0, w, top + FACT_ROW + 2, &score, CellStyle::new(RED, BG).bold());

        let correct = snap.score / crate::types::POINTS_PER_CORRECT;
        let tally = format!("맞힌 문제: {} / {}", correct, snap.total_answered);
        fb.put_str_centered(0, w, top + FACT_ROW + 4, &tally, CellStyle::new(TEXT, BG));

        self.draw_media(fb, ui, w, top + FACT_ROW + 6);
    }

    fn draw_media(&self, fb: &mut FrameBuffer, ui: &UiState<'_>, w: u16, y: u16) {
        let style = CellStyle::new(AMBER, BG).dim();
        let line = match (ui.media.visual, ui.media.audio) {
            (Some(v), Some(a)) => format!("🎬 {}  🎵 {}", v, a),
            (Some(v), None) => format!("🎬 {}", v),
            (None, Some(a)) => format!("🎵 {}", a),
            (None, None) => return,
        };
        fb.put_str_centered(0, w, y, &line, style);
    }

    fn draw_grid(&self, fb: &mut FrameBuffer, grid: &FactGrid, reveal_ms: u32, x: u16, y: u16) {
        let inner = GRID_SIZE as u16 * self.cell_w;
        self.draw_border(fb, x, y, inner + 2, GRID_SIZE as u16 + 2, CellStyle::new(TEXT, BG));

        let empty = CellStyle::new(Rgb::new(90, 90, 100), SLATE).dim();
        let active = CellStyle::new(Rgb::new(40, 40, 40), CREAM);
        for (r, row) in grid.cells().iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let px = x + 1 + c as u16 * self.cell_w;
                let py = y + 1 + r as u16;
                match cell {
                    GridCell::Empty => {
                        fb.fill_rect(px, py, self.cell_w, 1, ' ', empty);
                        fb.put_char(px, py, '·', empty);
                    }
                    GridCell::Active { glyph, .. } => {
                        fb.fill_rect(px, py, self.cell_w, 1, ' ', active);
                        if grid.is_revealed(r as u8, c as u8, reveal_ms) {
                            fb.put_char(px, py, *glyph, active);
                        }
                    }
                }
            }
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_button(
        &self,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        value: i32,
        open: char,
        close: char,
        style: CellStyle,
    ) {
        fb.fill_rect(x, y, BUTTON_W, 1, ' ', style);
        fb.put_char(x, y, open, style);
        fb.put_char(x + BUTTON_W - 1, y, close, style);
        let label = value.to_string();
        fb.put_str_centered(x + 1, BUTTON_W - 2, y, &label, style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: CellStyle) {
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
}
