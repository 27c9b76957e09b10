//! Feedback media picker.
//!
//! Each feedback category maps to a folder under the media root
//! (`correct`, `incorrect`, `high score`, `low score`). A pick is one random
//! file with the wanted extension. Missing folders are not an error: the
//! quiz simply shows no media.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::SimpleRng;
use crate::types::FeedbackCategory;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    /// Animated picture (`.gif`).
    Visual,
    /// Sound clip (`.mp3`).
    Audio,
}

impl MediaKind {
    pub fn extension(&self) -> &'static str {
        match self {
            MediaKind::Visual => "gif",
            MediaKind::Audio => "mp3",
        }
    }

    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case(self.extension()))
    }
}

/// One visual and one audio pick for a feedback screen.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct MediaPick {
    pub visual: Option<PathBuf>,
    pub audio: Option<PathBuf>,
}

impl MediaPick {
    pub fn visual_name(&self) -> Option<&str> {
        file_name(self.visual.as_deref())
    }

    pub fn audio_name(&self) -> Option<&str> {
        file_name(self.audio.as_deref())
    }
}

fn file_name(path: Option<&Path>) -> Option<&str> {
    path.and_then(|p| p.file_name()).and_then(|n| n.to_str())
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaLibrary {
    root: PathBuf,
}

impl MediaLibrary {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn folder(&self, category: FeedbackCategory) -> PathBuf {
        self.root.join(category.folder())
    }

    /// Matching files in the category folder, sorted by path.
    pub fn candidates(&self, category: FeedbackCategory, kind: MediaKind) -> Vec<PathBuf> {
        let dir = self.folder(category);
        let entries = match fs::read_dir(&dir) {
            Ok(entries) => entries,
            Err(e) => {
                debug!(dir = %dir.display(), error = %e, "media folder unavailable");
                return Vec::new();
            }
        };

        let mut files: Vec<PathBuf> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file() && kind.matches(path))
            .collect();
        // read_dir order is platform-defined; sort so a seed picks the same file.
        files.sort();
        files
    }

    pub fn pick(
        &self,
        category: FeedbackCategory,
        kind: MediaKind,
        rng: &mut SimpleRng,
    ) -> Option<PathBuf> {
        let files = self.candidates(category, kind);
        if files.is_empty() {
            return None;
        }
        let idx = rng.next_range(files.len() as u32) as usize;
        files.into_iter().nth(idx)
    }

    pub fn pick_pair(&self, category: FeedbackCategory, rng: &mut SimpleRng) -> MediaPick {
        MediaPick {
            visual: self.pick(category, MediaKind::Visual, rng),
            audio: self.pick(category, MediaKind::Audio, rng),
        }
    }
}

impl Default for MediaLibrary {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_MEDIA_DIR)
    }
}
