//! # Actions
//!
//! Everything that can happen in Quick Tips becomes an `Action`.
//! User presses Enter on an item? That's `Action::SelectItem`.
//! A transition deadline comes due? That's `Action::Tick`.
//!
//! The `update()` function takes the current state, an action, and the
//! current time, mutates the state, and returns the `Effect` the caller
//! must perform. No I/O here — effects happen in the TUI layer.
//!
//! ```text
//! State + Action + now  →  update()  →  State' + Effect
//! ```
//!
//! This makes everything testable: feed actions with a synthetic clock,
//! assert on the state. And debuggable: log every action, replay the
//! exact session.

use std::time::Instant;

use log::debug;

use crate::core::content::{ItemId, SectionId};
use crate::core::state::{App, DEFAULT_STATUS};

/// Everything that can happen in the app.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// An item was chosen with its section context known (keyboard focus,
    /// or a click on the browse grid where card geometry names the section).
    SelectItem { section: SectionId, item: ItemId },
    /// An item was clicked without section context (a row in the collapsed
    /// single-section list). Goes through the pending-promotion path.
    ItemClicked(ItemId),
    /// Navigate back up to the category grid.
    GoBack,
    /// A deadline may have come due; fire whatever is scheduled.
    Tick,
    /// Open the selected item's tutorial video in the system player.
    OpenVideo,
    Quit,
}

/// Side effects the reducer may ask the caller to perform.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Launch the system media player on this URL.
    OpenVideo(String),
    Quit,
}

/// The single mutation path for core state.
pub fn update(app: &mut App, action: Action, now: Instant) -> Effect {
    match action {
        Action::SelectItem { section, item } => {
            if let Some(record) = app.content.item(&item) {
                app.status_message = format!("Viewing: {}", record.text);
            }
            app.selection.select_item(section, item, &app.timing, now);
            Effect::None
        }
        Action::ItemClicked(item) => {
            match app.content.item(&item) {
                Some(record) => {
                    app.status_message = format!("Viewing: {}", record.text);
                    app.selection.request_selection(item, &app.timing, now);
                }
                None => debug!("click on unknown item '{item}' ignored"),
            }
            Effect::None
        }
        Action::GoBack => {
            app.selection.go_back(&app.timing, now);
            app.status_message = String::from(DEFAULT_STATUS);
            Effect::None
        }
        Action::Tick => {
            app.selection.advance(&app.content, &app.timing, now);
            Effect::None
        }
        Action::OpenVideo => {
            if !app.selection.video_visible() {
                return Effect::None;
            }
            let url = app
                .selection
                .selected_item()
                .and_then(|item| app.content.detail_for(item))
                .and_then(|detail| detail.video_url.clone());
            match url {
                Some(url) => {
                    app.status_message = String::from("Opening tutorial in your media player");
                    Effect::OpenVideo(url)
                }
                None => Effect::None,
            }
        }
        Action::Quit => Effect::Quit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::{ItemId, SectionId};
    use crate::test_support::test_app;
    use std::time::Instant;

    /// Drive ticks until nothing is scheduled anymore.
    fn settle(app: &mut App, mut now: Instant) -> Instant {
        while let Some(deadline) = app.selection.next_deadline() {
            now = deadline;
            update(app, Action::Tick, now);
        }
        now
    }

    #[test]
    fn test_select_item_settles_into_section_and_item() {
        let mut app = test_app();
        let t0 = Instant::now();
        update(
            &mut app,
            Action::SelectItem {
                section: SectionId::new("alpha"),
                item: ItemId::new("one"),
            },
            t0,
        );
        settle(&mut app, t0);

        assert_eq!(app.selection.selected_section(), Some(&SectionId::new("alpha")));
        assert_eq!(app.selection.selected_item(), Some(&ItemId::new("one")));
        assert!(app.status_message.starts_with("Viewing:"));
    }

    #[test]
    fn test_go_back_restores_default_status() {
        let mut app = test_app();
        let t0 = Instant::now();
        update(
            &mut app,
            Action::SelectItem {
                section: SectionId::new("alpha"),
                item: ItemId::new("one"),
            },
            t0,
        );
        let t1 = settle(&mut app, t0);

        update(&mut app, Action::GoBack, t1);
        settle(&mut app, t1);

        assert_eq!(app.selection.selected_section(), None);
        assert_eq!(app.status_message, DEFAULT_STATUS);
    }

    #[test]
    fn test_unknown_item_click_is_ignored() {
        let mut app = test_app();
        let before_status = app.status_message.clone();
        update(
            &mut app,
            Action::ItemClicked(ItemId::new("no-such-item")),
            Instant::now(),
        );
        assert!(app.selection.pending_item().is_none());
        assert_eq!(app.status_message, before_status);
    }

    #[test]
    fn test_open_video_requires_settled_visible_video() {
        let mut app = test_app();
        let t0 = Instant::now();
        update(
            &mut app,
            Action::SelectItem {
                section: SectionId::new("alpha"),
                item: ItemId::new("one"),
            },
            t0,
        );
        // Mid-transition: video not yet allowed
        assert_eq!(update(&mut app, Action::OpenVideo, t0), Effect::None);

        settle(&mut app, t0);
        let effect = update(&mut app, Action::OpenVideo, t0);
        assert_eq!(
            effect,
            Effect::OpenVideo("https://example.com/one.mp4".to_string())
        );
    }

    #[test]
    fn test_open_video_without_url_is_none() {
        let mut app = test_app();
        let t0 = Instant::now();
        // "two" has a detail but no video reference
        update(
            &mut app,
            Action::SelectItem {
                section: SectionId::new("alpha"),
                item: ItemId::new("two"),
            },
            t0,
        );
        settle(&mut app, t0);
        assert_eq!(update(&mut app, Action::OpenVideo, t0), Effect::None);
    }

    #[test]
    fn test_quit_action_yields_quit_effect() {
        let mut app = test_app();
        assert_eq!(
            update(&mut app, Action::Quit, Instant::now()),
            Effect::Quit
        );
    }
}
