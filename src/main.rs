//! Times-table quiz runner (default binary).
//!
//! `play` (the default) runs the terminal UI: crossterm for input and a
//! framebuffer renderer for output. `headless` speaks line-delimited JSON on
//! stdin/stdout instead.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, warn};

use times_quiz::adapter::run_stdio;
use times_quiz::config::{Command, QuizConfig};
use times_quiz::core::{QuizSession, QuizSnapshot, SimpleRng};
use times_quiz::input::{handle_key_event, should_quit, InputHandler};
use times_quiz::logging;
use times_quiz::media::{MediaLibrary, MediaPick};
use times_quiz::term::{
    fingerprint, install_panic_restore, FrameBuffer, MediaStatusView, QuizView, RenderThrottle,
    TerminalRenderer, UiState, Viewport,
};
use times_quiz::types::{FeedbackCategory, TICK_MS};

fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let config = QuizConfig::load(&args)?;

    let _logging = logging::init(config.log_dir.as_deref());
    for warning in &config.warnings {
        warn!("{}", warning);
    }
    info!(
        command = config.command.as_str(),
        seed = config.seed,
        mode = config.mode.as_str(),
        "starting"
    );

    let mut session = QuizSession::new(config.seed, config.mode);
    match config.command {
        Command::Headless => run_stdio(&mut session),
        Command::Play => {
            let media = MediaLibrary::new(&config.media_dir);
            let mut term = TerminalRenderer::new();
            install_panic_restore();
            term.enter()?;

            let result = run(&mut term, &mut session, &media, config.seed);

            // Always try to restore terminal state.
            let _ = term.exit();
            info!(score = session.score(), "quit");
            result
        }
    }
}

fn run(
    term: &mut TerminalRenderer,
    session: &mut QuizSession,
    media: &MediaLibrary,
    seed: u32,
) -> Result<()> {
    let view = QuizView::default();
    let mut input_handler = InputHandler::new();
    let mut throttle = RenderThrottle::default();
    // Separate stream so media picks never shift the question sequence.
    let mut media_rng = SimpleRng::new(seed ^ 0x9e37_79b9);

    let mut snap = QuizSnapshot::default();
    let mut fb = FrameBuffer::new(0, 0);
    let started = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    let mut question_key: Option<(u32, u8)> = None;
    let mut question_shown = Instant::now();
    let mut feedback_key: Option<(u32, u8, FeedbackCategory)> = None;
    let mut picked = MediaPick::default();

    loop {
        session.snapshot_into(&mut snap);
        input_handler.sync(snap.episode_id, snap.round_count);

        // Restart the grid animation whenever a new question appears.
        let key = Some((snap.episode_id, snap.round_count));
        if key != question_key {
            question_key = key;
            question_shown = Instant::now();
        }

        let fk = snap
            .feedback()
            .map(|category| (snap.episode_id, snap.round_count, category));
        if fk != feedback_key {
            feedback_key = fk;
            picked = match fk {
                Some((_, _, category)) => media.pick_pair(category, &mut media_rng),
                None => MediaPick::default(),
            };
        }

        // Render.
        let reveal_ms = question_shown.elapsed().as_millis().min(u32::MAX as u128) as u32;
        let settled = snap.grid().map_or(true, |g| g.is_fully_revealed(reveal_ms));
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let now_ms = started.elapsed().as_millis() as u64;
        let fp = fingerprint(&(snap, input_handler.cursor(), w, h, &picked));
        if throttle.should_render(now_ms, fp, settled) {
            let ui = UiState {
                reveal_ms,
                cursor: input_handler.cursor(),
                media: MediaStatusView {
                    visual: picked.visual_name(),
                    audio: picked.audio_name(),
                },
            };
            view.render_into(&snap, &ui, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
        }

        // Input with timeout until next tick.
        if event::poll(tick_duration)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(cmd) = handle_key_event(key) {
                        if let Some(action) = input_handler.handle(cmd, snap.phase) {
                            session.apply_action(action);
                        }
                    }
                }
                Event::Resize(..) => {
                    term.invalidate();
                    throttle.reset();
                }
                _ => {}
            }
        }
    }
}
