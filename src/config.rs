//! Runtime configuration.
//!
//! Resolved in layers: defaults, then `TIMES_QUIZ_*` environment variables,
//! then command-line flags. Bad environment values are skipped with a warning;
//! bad flags are errors.

use std::env;
use std::path::PathBuf;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::{anyhow, Result};

use crate::types::QuizMode;

pub const ENV_SEED: &str = "TIMES_QUIZ_SEED";
pub const ENV_MODE: &str = "TIMES_QUIZ_MODE";
pub const ENV_MEDIA_DIR: &str = "TIMES_QUIZ_MEDIA_DIR";
pub const ENV_LOG_DIR: &str = "TIMES_QUIZ_LOG_DIR";

pub const DEFAULT_MEDIA_DIR: &str = "gif";

pub const USAGE: &str =
    "usage: times-quiz [play|headless] [--seed N] [--mode random|2..9] [--media-dir PATH]";

/// Which front-end to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Command {
    /// Interactive terminal UI.
    #[default]
    Play,
    /// Line-delimited JSON over stdin/stdout.
    Headless,
}

impl Command {
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Play => "play",
            Command::Headless => "headless",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    pub command: Command,
    pub seed: u32,
    pub mode: QuizMode,
    pub media_dir: PathBuf,
    /// `None` means the default under the system temp dir.
    pub log_dir: Option<PathBuf>,
    /// Environment values that were ignored; logged once tracing is up.
    pub warnings: Vec<String>,
}

impl QuizConfig {
    pub fn with_seed(seed: u32) -> Self {
        Self {
            command: Command::Play,
            seed,
            mode: QuizMode::Random,
            media_dir: PathBuf::from(DEFAULT_MEDIA_DIR),
            log_dir: None,
            warnings: Vec::new(),
        }
    }

    /// Defaults overlaid with the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(clock_seed(), |key| env::var(key).ok())
    }

    /// Defaults overlaid with values from `lookup` (an environment stand-in).
    pub fn from_lookup(default_seed: u32, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::with_seed(default_seed);
        let var = |key: &str| {
            lookup(key)
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
        };

        if let Some(v) = var(ENV_SEED) {
            match v.parse::<u32>() {
                Ok(seed) => config.seed = seed,
                Err(_) => config
                    .warnings
                    .push(format!("ignoring {ENV_SEED}={v:?}: not a u32")),
            }
        }
        if let Some(v) = var(ENV_MODE) {
            match QuizMode::from_str(&v) {
                Some(mode) => config.mode = mode,
                None => config
                    .warnings
                    .push(format!("ignoring {ENV_MODE}={v:?}: unknown mode")),
            }
        }
        if let Some(v) = var(ENV_MEDIA_DIR) {
            config.media_dir = PathBuf::from(v);
        }
        if let Some(v) = var(ENV_LOG_DIR) {
            config.log_dir = Some(PathBuf::from(v));
        }
        config
    }

    /// Apply command-line arguments (without the program name).
    pub fn apply_args(&mut self, args: &[String]) -> Result<()> {
        let mut i = 0usize;
        match args.first().map(String::as_str) {
            Some("play") => i = 1,
            Some("headless") => {
                self.command = Command::Headless;
                i = 1;
            }
            _ => {}
        }

        while i < args.len() {
            match args[i].as_str() {
                "--seed" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --seed"))?;
                    self.seed = v
                        .parse::<u32>()
                        .map_err(|_| anyhow!("invalid --seed value: {}", v))?;
                }
                "--mode" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --mode"))?;
                    self.mode =
                        QuizMode::from_str(v).ok_or_else(|| anyhow!("invalid --mode value: {}", v))?;
                }
                "--media-dir" => {
                    i += 1;
                    let v = args
                        .get(i)
                        .ok_or_else(|| anyhow!("missing value for --media-dir"))?;
                    self.media_dir = PathBuf::from(v);
                }
                other => {
                    return Err(anyhow!("unknown argument: {}\n{}", other, USAGE));
                }
            }
            i += 1;
        }
        Ok(())
    }

    /// Environment plus `args`.
    pub fn load(args: &[String]) -> Result<Self> {
        let mut config = Self::from_env();
        config.apply_args(args)?;
        Ok(config)
    }
}

/// Seed derived from the system clock.
pub fn clock_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos())
        .unwrap_or(1);
    // Fold the high bits in so consecutive launches differ.
    (nanos ^ (nanos >> 32)) as u32
}
