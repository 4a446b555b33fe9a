//! # TUI Components
//!
//! This module contains all UI components for the terminal interface.
//!
//! ## Component Architecture
//!
//! Components follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Simple display components that receive all data as props:
//! - `TitleBar`: Top status bar with title, breadcrumb, and status
//! - `SectionCard`: One category card (grid and collapsed-list forms)
//! - `VideoPane`: The tutorial-video reference of the selected tip
//!
//! ### Stateful Components (Persistent State + Transient Wrapper)
//!
//! Components whose presentation state must survive between frames keep a
//! `*State` struct in `TuiState` and wrap it each frame:
//! - `DetailPanel` / `DetailViewState`: scrollable what/when/steps view
//! - `GuideOverlay` / `GuideOverlayState`: first-launch walkthrough modal
//! - `VideoPaneState`: per-mount pane identity (remount on item change)
//!
//! ## Design Philosophy
//!
//! Components receive external data as props, not by reaching into global
//! state — dependencies stay explicit and every component renders under
//! `TestBackend` in its own tests. Each component file co-locates its
//! state types, event handling, rendering, and tests.

mod title_bar;
pub use title_bar::TitleBar;

pub mod detail_panel;
pub mod guide_overlay;
pub mod section_card;
pub mod video_pane;

pub use detail_panel::{DetailPanel, DetailViewState};
pub use guide_overlay::{GuideEvent, GuideOverlay, GuideOverlayState};
pub use section_card::SectionCard;
pub use video_pane::{VideoPane, VideoPaneState};
