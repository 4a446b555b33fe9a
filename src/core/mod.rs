//! # Core Application Logic
//!
//! This module contains Quick Tips' business logic.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (app data)     │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │  • Content (tip table)  │
//!                    │  • Selection (FSM)      │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!            ┌───────────────────┼───────────────────┐
//!            ▼                   ▼                   ▼
//!     ┌────────────┐      ┌────────────┐      ┌────────────┐
//!     │    TUI     │      │    GUI     │      │   Kiosk    │
//!     │  Adapter   │      │  Adapter   │      │  (future)  │
//!     │ (ratatui)  │      │  (future)  │      │            │
//!     └────────────┘      └────────────┘      └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct — all application state in one place
//! - [`action`]: The `Action` enum and `update()` reducer
//! - [`content`]: The static tip table and its derived views
//! - [`selection`]: The staged-transition selection controller
//! - [`config`]: Settings file with override hierarchy
//! - [`guide`]: First-launch guide flag store and guide copy

pub mod action;
pub mod config;
pub mod content;
pub mod guide;
pub mod selection;
pub mod state;
