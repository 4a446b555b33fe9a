//! # VideoPane Component
//!
//! The tutorial-video reference for the selected tip. Playback itself is
//! delegated wholesale to the system media player — this pane only mounts
//! and unmounts the reference and offers the `o` binding to launch it.
//!
//! The pane's identity is keyed by the selected item: `VideoPaneState`
//! tracks the mount key and drops its per-mount state (the "already
//! launched" marker) whenever the key changes, so switching tips always
//! tears the pane down and remounts it fresh.

use log::debug;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};

use crate::core::content::ItemId;

/// Rows the pane occupies in the right-hand column.
pub const VIDEO_PANE_HEIGHT: u16 = 4;

/// Persistent per-mount state. Lives in `TuiState`.
#[derive(Default)]
pub struct VideoPaneState {
    mount: Option<ItemId>,
    launched: bool,
}

impl VideoPaneState {
    /// Track the current mount key, resetting per-mount state when it
    /// changes. `None` unmounts the pane.
    pub fn sync(&mut self, current: Option<&ItemId>) {
        if self.mount.as_ref() != current {
            if let Some(item) = current {
                debug!("video pane remount for '{item}'");
            }
            self.mount = current.cloned();
            self.launched = false;
        }
    }

    pub fn mount_key(&self) -> Option<&ItemId> {
        self.mount.as_ref()
    }

    pub fn launched(&self) -> bool {
        self.launched
    }

    /// Record that the system player was launched for this mount.
    pub fn mark_launched(&mut self) {
        self.launched = true;
    }
}

/// Transient render wrapper.
pub struct VideoPane<'a> {
    pub url: &'a str,
    pub launched: bool,
}

impl<'a> VideoPane<'a> {
    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let block = Block::bordered()
            .title(" Tutorial Video ")
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .border_style(Style::default().fg(Color::DarkGray))
            .padding(Padding::horizontal(1));

        let hint = if self.launched {
            Span::styled("✓ Opened in your media player", Style::default().fg(Color::Green))
        } else {
            Span::styled(
                "Press o to open in your media player",
                Style::default().fg(Color::DarkGray),
            )
        };

        let lines = vec![
            Line::from(vec![
                Span::styled("▶ ", Style::default().fg(Color::Cyan)),
                Span::styled(self.url.to_string(), Style::default().fg(Color::Gray)),
            ]),
            Line::from(hint),
        ];

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_sync_resets_launched_on_new_mount() {
        let mut state = VideoPaneState::default();
        state.sync(Some(&ItemId::new("one")));
        state.mark_launched();
        assert!(state.launched());

        // Same key: per-mount state survives
        state.sync(Some(&ItemId::new("one")));
        assert!(state.launched());

        // New key: fresh mount
        state.sync(Some(&ItemId::new("two")));
        assert!(!state.launched());
        assert_eq!(state.mount_key(), Some(&ItemId::new("two")));
    }

    #[test]
    fn test_sync_unmounts_on_none() {
        let mut state = VideoPaneState::default();
        state.sync(Some(&ItemId::new("one")));
        state.sync(None);
        assert_eq!(state.mount_key(), None);
        assert!(!state.launched());
    }

    #[test]
    fn test_pane_renders_url_and_hint() {
        let pane = VideoPane {
            url: "https://example.com/clip.mp4",
            launched: false,
        };
        let backend = TestBackend::new(60, VIDEO_PANE_HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| pane.render(f, f.area())).unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("Tutorial Video"));
        assert!(text.contains("example.com"));
        assert!(text.contains("Press o to open"));
    }
}
