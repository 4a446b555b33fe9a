//! # Application State
//!
//! Core business state for Quick Tips. This module contains domain state
//! only - no TUI-specific types. Presentation state lives in the `tui`
//! module.
//!
//! ```text
//! App
//! ├── content: ContentSet        // static tip table (never mutated)
//! ├── selection: SelectionState  // browse/detail navigation state
//! ├── timing: TransitionTiming   // staged-transition delays (config)
//! └── status_message: String     // status bar text
//! ```
//!
//! State changes only happen through `update(state, action, now)` in
//! action.rs. This keeps things predictable, so no surprise mutations.

use crate::core::content::ContentSet;
use crate::core::selection::{SelectionState, TransitionTiming};

pub const DEFAULT_STATUS: &str = "Pick a category and press Enter to expand a tip";

pub struct App {
    pub content: ContentSet,
    pub selection: SelectionState,
    pub timing: TransitionTiming,
    pub status_message: String,
}

impl App {
    pub fn new(content: ContentSet, timing: TransitionTiming) -> Self {
        Self {
            content,
            selection: SelectionState::new(),
            timing,
            status_message: String::from(DEFAULT_STATUS),
        }
    }
}
