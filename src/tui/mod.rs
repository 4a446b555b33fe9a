//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard/mouse events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//! The intention is to swap this out for a different adapter (GUI, kiosk
//! display, etc.) in the future if needed.
//!
//! ## Redraw Strategy
//!
//! The event loop uses conditional redraw to avoid unnecessary work:
//!
//! - **Transitioning** (a staged reveal is in flight): the poll timeout is
//!   capped by the next transition deadline, so each phase change renders
//!   the moment it fires — no per-frame animation ticking in between.
//! - **Idle**: sleeps up to 500ms, only redraws on events or resize.
//!
//! ## Ordering Guarantee
//!
//! Deadlines fire through `Action::Tick` at the top of the loop, before
//! the frame is drawn, so the hide-media → switch-identifiers →
//! allow-media sequence is always observed in order by the renderer.

mod component;
pub mod components;
pub mod event;
pub mod ui;

use std::io::stdout;
use std::time::{Duration, Instant};

use crossterm::cursor::{Hide, Show};
use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use log::{info, warn};

use crate::core::action::{Action, Effect, update};
use crate::core::content::ContentSet;
use crate::core::selection::TransitionTiming;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::{DetailViewState, GuideEvent, GuideOverlayState, VideoPaneState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};
use crate::tui::ui::HitRow;

/// Poll timeout when nothing is scheduled.
const IDLE_POLL: Duration = Duration::from_millis(500);

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    /// Keyboard focus: (section index, item index) into the content set.
    pub focus: (usize, usize),
    /// Mouse hover, resolved against the hit-row cache.
    pub hovered: Option<(usize, usize)>,
    /// Scroll state of the detail pane.
    pub detail_view: DetailViewState,
    /// Mount identity of the video pane.
    pub video_pane: VideoPaneState,
    /// Guide overlay (None = hidden).
    pub guide: Option<GuideOverlayState>,
    /// Clickable item rows cached by the last draw.
    pub hit_rows: Vec<HitRow>,
}

impl TuiState {
    pub fn new(show_guide: bool) -> Self {
        Self {
            focus: (0, 0),
            hovered: None,
            detail_view: DetailViewState::new(),
            video_pane: VideoPaneState::default(),
            guide: show_guide.then(GuideOverlayState::new),
            hit_rows: Vec::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        // Mouse capture drives hover tooltips and click-to-select; the
        // cursor stays hidden since there is no text input anywhere.
        execute!(stdout(), EnableMouseCapture, Hide)?;
        info!("Terminal modes enabled (mouse capture, hidden cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture, Show);
    }
}

pub fn run(content: ContentSet, timing: TransitionTiming, show_guide: bool) -> std::io::Result<()> {
    let mut app = App::new(content, timing);
    let mut tui = TuiState::new(show_guide);

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new()?;

    let mut needs_redraw = true; // Force first frame
    let mut should_quit = false;

    while !should_quit {
        let now = Instant::now();

        // Fire due transition deadlines before drawing
        if app.selection.next_deadline().is_some_and(|d| d <= now) {
            update(&mut app, Action::Tick, now);
            needs_redraw = true;
        }

        // Pin keyboard focus to the open category
        if let Some(index) = open_section_index(&app)
            && tui.focus.0 != index
        {
            tui.focus = (index, 0);
        }
        clamp_focus(&app, &mut tui);

        // Only draw when something changed
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui))?;
            needs_redraw = false;
        }

        // Dynamic poll timeout: capped by the next deadline, long when idle
        let timeout = app
            .selection
            .next_deadline()
            .map(|d| d.saturating_duration_since(Instant::now()))
            .unwrap_or(IDLE_POLL)
            .min(IDLE_POLL);
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain ALL pending events before next draw
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let now = Instant::now();

            // Resize just needs a redraw (already flagged above)
            if matches!(event, TuiEvent::Resize) {
                continue;
            }

            // ForceQuit (Ctrl+C) always quits regardless of mode
            if matches!(event, TuiEvent::ForceQuit) {
                if update(&mut app, Action::Quit, now) == Effect::Quit {
                    should_quit = true;
                }
                continue;
            }

            // When the guide overlay is open, route all events to it
            if let Some(ref mut guide) = tui.guide {
                if let Some(GuideEvent::Dismiss) = guide.handle_event(&event) {
                    tui.guide = None;
                }
                continue;
            }

            // ? reopens the guide at any time
            if matches!(event, TuiEvent::OpenGuide) {
                tui.guide = Some(GuideOverlayState::new());
                continue;
            }

            // Mouse hover — row highlight + tooltip in the footer
            if let TuiEvent::MouseMove(col, row) = event {
                tui.hovered = ui::hit_test(&tui.hit_rows, col, row);
                continue;
            }

            // Mouse click — select the hit item
            if let TuiEvent::MouseClick(col, row) = event {
                if let Some((section_index, item_index)) = ui::hit_test(&tui.hit_rows, col, row) {
                    tui.focus = (section_index, item_index);
                    let action = click_action(&app, section_index, item_index);
                    if let Some(action) = action {
                        let effect = update(&mut app, action, now);
                        apply_effect(effect, &mut app, &mut tui, &mut should_quit);
                    }
                }
                continue;
            }

            // Scroll events — always go to the detail pane
            if matches!(event, TuiEvent::ScrollUp) {
                tui.detail_view.scroll_up();
                continue;
            }
            if matches!(event, TuiEvent::ScrollDown) {
                tui.detail_view.scroll_down();
                continue;
            }

            match event {
                TuiEvent::Quit => {
                    if update(&mut app, Action::Quit, now) == Effect::Quit {
                        should_quit = true;
                    }
                }
                // Esc backs out of the open category (no-op at top level)
                TuiEvent::Escape => {
                    let effect = update(&mut app, Action::GoBack, now);
                    apply_effect(effect, &mut app, &mut tui, &mut should_quit);
                }
                // Enter opens the focused item, section context in hand
                TuiEvent::Submit => {
                    let (section_index, item_index) = tui.focus;
                    if let Some(section) = app.content.sections().get(section_index)
                        && let Some(item) = section.items.get(item_index)
                    {
                        let action = Action::SelectItem {
                            section: section.id.clone(),
                            item: item.id.clone(),
                        };
                        let effect = update(&mut app, action, now);
                        apply_effect(effect, &mut app, &mut tui, &mut should_quit);
                    }
                }
                TuiEvent::CursorUp => move_focus(&app, &mut tui, 0, -1),
                TuiEvent::CursorDown => move_focus(&app, &mut tui, 0, 1),
                // Left/Right hop between cards, but only on the browse grid
                TuiEvent::CursorLeft if open_section_index(&app).is_none() => {
                    move_focus(&app, &mut tui, -1, 0)
                }
                TuiEvent::CursorRight if open_section_index(&app).is_none() => {
                    move_focus(&app, &mut tui, 1, 0)
                }
                TuiEvent::OpenVideo => {
                    let effect = update(&mut app, Action::OpenVideo, now);
                    apply_effect(effect, &mut app, &mut tui, &mut should_quit);
                }
                _ => {}
            }
        }
    }

    ratatui::restore();
    Ok(())
}

/// Index of the open category, if one is selected.
fn open_section_index(app: &App) -> Option<usize> {
    app.selection
        .selected_section()
        .and_then(|id| app.content.sections().iter().position(|s| &s.id == id))
}

/// Map a click on an item row to the right action. Rows on the browse
/// grid carry their section; rows in the collapsed single-section list
/// only carry the item and go through the pending-promotion path.
fn click_action(app: &App, section_index: usize, item_index: usize) -> Option<Action> {
    let section = app.content.sections().get(section_index)?;
    let item = section.items.get(item_index)?;
    if app.selection.selected_section().is_some() {
        Some(Action::ItemClicked(item.id.clone()))
    } else {
        Some(Action::SelectItem {
            section: section.id.clone(),
            item: item.id.clone(),
        })
    }
}

/// Perform the side effect the reducer asked for.
fn apply_effect(effect: Effect, app: &mut App, tui: &mut TuiState, should_quit: &mut bool) {
    match effect {
        Effect::Quit => *should_quit = true,
        Effect::OpenVideo(url) => match open::that(&url) {
            Ok(()) => {
                info!("Opened tutorial video: {url}");
                tui.video_pane.mark_launched();
            }
            Err(e) => {
                warn!("Failed to open media player for {url}: {e}");
                app.status_message = String::from("Could not open your media player");
            }
        },
        Effect::None => {}
    }
}

/// Move keyboard focus by whole cards (dx) or item rows (dy), clamped to
/// the content set.
fn move_focus(app: &App, tui: &mut TuiState, dx: isize, dy: isize) {
    let sections = app.content.sections();
    if sections.is_empty() {
        return;
    }
    let (mut section_index, mut item_index) = tui.focus;
    section_index = section_index
        .saturating_add_signed(dx)
        .min(sections.len() - 1);
    let item_count = sections[section_index].items.len();
    if item_count == 0 {
        tui.focus = (section_index, 0);
        return;
    }
    item_index = item_index.saturating_add_signed(dy).min(item_count - 1);
    tui.focus = (section_index, item_index);
}

/// Keep focus valid against the current content (sections never change at
/// runtime, but focus may be stale after jumping between layouts).
fn clamp_focus(app: &App, tui: &mut TuiState) {
    move_focus(app, tui, 0, 0);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::{ItemId, SectionId};
    use crate::test_support::test_app;

    #[test]
    fn test_move_focus_clamps_to_bounds() {
        let app = test_app();
        let mut tui = TuiState::new(false);

        move_focus(&app, &mut tui, -1, -1);
        assert_eq!(tui.focus, (0, 0));

        move_focus(&app, &mut tui, 10, 10);
        // Lands on the last section ("beta", one item)
        assert_eq!(tui.focus, (1, 0));
    }

    #[test]
    fn test_move_focus_walks_items_within_section() {
        let app = test_app();
        let mut tui = TuiState::new(false);

        move_focus(&app, &mut tui, 0, 1);
        assert_eq!(tui.focus, (0, 1));
        move_focus(&app, &mut tui, 0, 1);
        assert_eq!(tui.focus, (0, 1), "clamped at the last item");
    }

    #[test]
    fn test_click_action_depends_on_mode() {
        let mut app = test_app();

        // Browse grid: full section context
        assert_eq!(
            click_action(&app, 0, 1),
            Some(Action::SelectItem {
                section: SectionId::new("alpha"),
                item: ItemId::new("two"),
            })
        );

        // Open category: rows carry only the item id
        let t0 = std::time::Instant::now();
        update(
            &mut app,
            Action::SelectItem {
                section: SectionId::new("alpha"),
                item: ItemId::new("one"),
            },
            t0,
        );
        while let Some(d) = app.selection.next_deadline() {
            update(&mut app, Action::Tick, d);
        }
        assert_eq!(
            click_action(&app, 0, 1),
            Some(Action::ItemClicked(ItemId::new("two")))
        );
    }

    #[test]
    fn test_click_action_out_of_bounds_is_none() {
        let app = test_app();
        assert_eq!(click_action(&app, 9, 0), None);
        assert_eq!(click_action(&app, 0, 9), None);
    }

    #[test]
    fn test_tui_state_opens_guide_on_first_launch() {
        assert!(TuiState::new(true).guide.is_some());
        assert!(TuiState::new(false).guide.is_none());
    }
}
