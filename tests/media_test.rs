use std::fs;

use tempfile::TempDir;

use times_quiz::core::SimpleRng;
use times_quiz::media::{MediaKind, MediaLibrary};
use times_quiz::types::FeedbackCategory;

fn library() -> (TempDir, MediaLibrary) {
    let dir = TempDir::new().unwrap();
    let correct = dir.path().join("correct");
    fs::create_dir_all(&correct).unwrap();
    for name in ["clap.gif", "dance.GIF", "yay.mp3", "notes.txt"] {
        fs::write(correct.join(name), b"x").unwrap();
    }
    fs::create_dir_all(correct.join("nested.gif")).unwrap();
    fs::create_dir_all(dir.path().join("high score")).unwrap();

    let lib = MediaLibrary::new(dir.path());
    (dir, lib)
}

#[test]
fn media_candidates_filter_by_extension() {
    let (_dir, lib) = library();
    let visual = lib.candidates(FeedbackCategory::Correct, MediaKind::Visual);
    let names: Vec<_> = visual
        .iter()
        .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
        .collect();
    assert_eq!(names, vec!["clap.gif", "dance.GIF"]);

    let audio = lib.candidates(FeedbackCategory::Correct, MediaKind::Audio);
    assert_eq!(audio.len(), 1);
}

#[test]
fn media_pick_is_seed_deterministic() {
    let (_dir, lib) = library();
    let a = lib.pick(FeedbackCategory::Correct, MediaKind::Visual, &mut SimpleRng::new(3));
    let b = lib.pick(FeedbackCategory::Correct, MediaKind::Visual, &mut SimpleRng::new(3));
    assert!(a.is_some());
    assert_eq!(a, b);
}

#[test]
fn media_pair_names() {
    let (_dir, lib) = library();
    let pick = lib.pick_pair(FeedbackCategory::Correct, &mut SimpleRng::new(1));
    assert!(pick.visual_name().unwrap().to_lowercase().ends_with(".gif"));
    assert_eq!(pick.audio_name(), Some("yay.mp3"));
}

#[test]
fn media_missing_or_empty_folders_are_silent() {
    let (_dir, lib) = library();
    let mut rng = SimpleRng::new(1);
    assert_eq!(lib.pick(FeedbackCategory::Wrong, MediaKind::Visual, &mut rng), None);
    assert_eq!(lib.pick(FeedbackCategory::HighScore, MediaKind::Audio, &mut rng), None);

    let nowhere = MediaLibrary::new("/definitely/not/here");
    let pick = nowhere.pick_pair(FeedbackCategory::LowScore, &mut rng);
    assert_eq!(pick.visual, None);
    assert_eq!(pick.audio, None);
}

#[test]
fn media_folders_match_categories() {
    let lib = MediaLibrary::new("gif");
    assert!(lib.folder(FeedbackCategory::Wrong).ends_with("incorrect"));
    assert!(lib.folder(FeedbackCategory::LowScore).ends_with("low score"));
    assert_eq!(MediaLibrary::default().root(), std::path::Path::new("gif"));
}
