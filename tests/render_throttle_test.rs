use times_quiz::core::QuizSession;
use times_quiz::term::{fingerprint, RenderThrottle};
use times_quiz::types::{QuizAction, QuizMode};

#[test]
fn render_throttle_renders_first_frame() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, true));
}

#[test]
fn render_throttle_static_renders_on_change() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, true));
    assert!(t.should_render(1, 2, true));
}

#[test]
fn render_throttle_static_throttles_when_unchanged() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, true));
    assert!(!t.should_render(10, 1, true));
    assert!(!t.should_render(249, 1, true));
    assert!(t.should_render(250, 1, true));
}

#[test]
fn render_throttle_revealing_grid_always_renders() {
    let mut t = RenderThrottle::new(250);
    assert!(t.should_render(0, 1, false));
    assert!(t.should_render(1, 1, false));
    assert!(t.should_render(2, 1, false));
}

#[test]
fn render_throttle_reset_forces_next_frame() {
    let mut t = RenderThrottle::default();
    assert!(t.should_render(0, 7, true));
    assert!(!t.should_render(5, 7, true));
    t.reset();
    assert!(t.should_render(6, 7, true));
}

#[test]
fn snapshot_fingerprint_tracks_session_changes() {
    let mut session = QuizSession::new(12, QuizMode::Random);
    let before = fingerprint(&session.snapshot());
    assert_eq!(before, fingerprint(&session.snapshot()));

    let v = session.current_question().unwrap().correct;
    session.apply_action(QuizAction::Answer(v));
    assert_ne!(before, fingerprint(&session.snapshot()));
}
