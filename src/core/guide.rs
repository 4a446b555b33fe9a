//! # First-Launch Guide Flag
//!
//! One boolean lives beyond the process: whether the user has already
//! seen the introductory guide. It is read once at startup to decide
//! whether the guide auto-opens, written once (`true`) immediately after
//! that decision, and otherwise untouched.
//!
//! The store is an injected dependency, not a hidden global: production
//! uses [`FileGuideStore`] (`~/.quicktips/state.json`, atomic
//! write-temp-then-rename), tests and homeless environments use
//! [`MemoryGuideStore`]. Any read failure means "not seen" — a corrupt
//! or missing state file shows the guide again, it never errors out.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};

use chrono::Utc;
use log::debug;
use serde::{Deserialize, Serialize};

/// Process-wide "has the user seen the guide" flag.
pub trait GuideStore {
    /// Read the flag. Absence or any read error counts as "not seen".
    fn has_seen(&self) -> bool;
    /// Persist the flag as seen.
    fn mark_seen(&self) -> io::Result<()>;
}

// ============================================================================
// File-backed store
// ============================================================================

/// On-disk shape of `~/.quicktips/state.json`.
#[derive(Serialize, Deserialize, Default, Debug)]
struct StateFile {
    has_seen_guide: bool,
    /// Unix timestamp of the first-ever launch decision.
    seen_at: Option<i64>,
}

pub struct FileGuideStore {
    path: PathBuf,
}

impl FileGuideStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Store at the default location, `~/.quicktips/state.json`.
    pub fn at_default_path() -> io::Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no home directory"))?;
        let dir = home.join(".quicktips");
        fs::create_dir_all(&dir)?;
        Ok(Self::new(dir.join("state.json")))
    }

    fn read_state(&self) -> Option<StateFile> {
        let json = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&json) {
            Ok(state) => Some(state),
            Err(e) => {
                debug!("state file unreadable ({e}), treating as first launch");
                None
            }
        }
    }
}

impl GuideStore for FileGuideStore {
    fn has_seen(&self) -> bool {
        self.read_state().map(|s| s.has_seen_guide).unwrap_or(false)
    }

    fn mark_seen(&self) -> io::Result<()> {
        let state = StateFile {
            has_seen_guide: true,
            seen_at: Some(Utc::now().timestamp()),
        };
        atomic_write_json(&self.path, &state)
    }
}

/// Atomically write `data` as JSON to `path` (via `.tmp` + rename).
fn atomic_write_json<T: Serialize>(path: &Path, data: &T) -> io::Result<()> {
    let tmp_path = path.with_extension("tmp");
    let json = serde_json::to_string_pretty(data)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    fs::write(&tmp_path, json)?;
    fs::rename(&tmp_path, path)?;
    Ok(())
}

// ============================================================================
// In-memory store
// ============================================================================

/// Fallback for environments without a home directory, and the test
/// substitute.
#[derive(Default)]
pub struct MemoryGuideStore {
    seen: AtomicBool,
}

impl GuideStore for MemoryGuideStore {
    fn has_seen(&self) -> bool {
        self.seen.load(Ordering::Relaxed)
    }

    fn mark_seen(&self) -> io::Result<()> {
        self.seen.store(true, Ordering::Relaxed);
        Ok(())
    }
}

// ============================================================================
// Guide copy
// ============================================================================

/// One page of the introductory guide overlay.
pub struct GuideStep {
    pub title: &'static str,
    pub description: &'static str,
}

/// The three-step walkthrough shown on first launch.
pub const GUIDE_STEPS: &[GuideStep] = &[
    GuideStep {
        title: "Welcome to Epic Quick Tips!",
        description: "This tool helps pharmacy staff discover helpful Epic features and \
                      shortcuts to make your daily workflow easier.",
    },
    GuideStep {
        title: "How to Use This Guide",
        description: "Pick any category card to explore specific features. Look for the \
                      'Nov 2024' badges to find the newest updates.",
    },
    GuideStep {
        title: "Watch and Learn",
        description: "Many features include step-by-step instructions and video tutorials \
                      to help you master new workflows.",
    },
];
