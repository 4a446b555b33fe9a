//! # DetailPanel Component
//!
//! The expanded what/when/shortcut/steps view of one tip, scrollable when
//! it outgrows the pane.
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `DetailViewState` (scroll offset, cached heights) lives in `TuiState`
//! - `DetailPanel` is created each frame with borrowed data
//!
//! Step lines come from [`step_plan`]: main steps get their 1-based
//! number, `→` continuations indent under them, `✓` confirmations close a
//! flow, `♦` tips stand out. The plan is recomputed every frame — it is a
//! pure derivation, never cached.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::content::{Detail, Item, StepKind, step_plan};

/// Scroll state for the detail pane. Must be persisted in the parent
/// TuiState; resets whenever the shown item changes.
pub struct DetailViewState {
    pub scroll: ScrollViewState,
    content_height: u16,
    viewport_height: u16,
    last_item: Option<String>,
}

impl Default for DetailViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl DetailViewState {
    pub fn new() -> Self {
        Self {
            scroll: ScrollViewState::default(),
            content_height: 0,
            viewport_height: 0,
            last_item: None,
        }
    }

    /// Reset the scroll position when a different item is shown.
    pub fn sync_item(&mut self, item_id: Option<&str>) {
        if self.last_item.as_deref() != item_id {
            self.last_item = item_id.map(|s| s.to_string());
            self.scroll = ScrollViewState::default();
        }
    }

    pub fn scroll_up(&mut self) {
        let offset = self.scroll.offset();
        self.scroll.set_offset(Position {
            x: 0,
            y: offset.y.saturating_sub(1),
        });
    }

    pub fn scroll_down(&mut self) {
        let max_y = self.content_height.saturating_sub(self.viewport_height);
        let offset = self.scroll.offset();
        self.scroll.set_offset(Position {
            x: 0,
            y: (offset.y + 1).min(max_y),
        });
    }
}

/// Transient render wrapper for the expanded detail of one item.
pub struct DetailPanel<'a> {
    pub item: &'a Item,
    pub detail: Option<&'a Detail>,
    /// Dim everything while a transition is in flight.
    pub dimmed: bool,
}

impl<'a> DetailPanel<'a> {
    pub fn render(&self, frame: &mut Frame, area: Rect, state: &mut DetailViewState) {
        let border_style = if self.dimmed {
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        let block = Block::bordered()
            .title(format!(" {} ", self.item.text))
            .title_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
            .border_style(border_style)
            .padding(Padding::horizontal(1));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let Some(detail) = self.detail else {
            let empty = Paragraph::new("No expanded detail for this tip yet.")
                .style(Style::default().fg(Color::DarkGray));
            frame.render_widget(empty, inner);
            return;
        };

        let content_width = inner.width.saturating_sub(1); // scrollbar safe area
        let lines = detail_lines(detail, content_width);

        state.content_height = lines.len() as u16;
        state.viewport_height = inner.height;

        let mut scroll_view = ScrollView::new(Size::new(content_width, state.content_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        let mut paragraph = Paragraph::new(lines);
        if self.dimmed {
            paragraph = paragraph.style(Style::default().add_modifier(Modifier::DIM));
        }
        let content_rect = Rect::new(0, 0, content_width, state.content_height);
        scroll_view.render_widget(paragraph, content_rect);

        frame.render_stateful_widget(scroll_view, inner, &mut state.scroll);
    }
}

/// Build the styled body: what / when / shortcut / steps.
fn detail_lines(detail: &Detail, width: u16) -> Vec<Line<'static>> {
    let header = Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD);
    let body = Style::default().fg(Color::Gray);
    let mut lines = Vec::new();

    lines.push(Line::from(Span::styled("What it does:", header)));
    push_wrapped(&mut lines, &detail.what, width, "  ", body);
    lines.push(Line::default());

    lines.push(Line::from(Span::styled("When to use:", header)));
    push_wrapped(&mut lines, &detail.when, width, "  ", body);
    lines.push(Line::default());

    // Only show the shortcut row when one is noted
    if !detail.shortcut.is_empty() {
        lines.push(Line::from(vec![
            Span::styled("Shortcut: ", header),
            Span::styled(
                format!(" {} ", detail.shortcut.join(", ")),
                Style::default().fg(Color::White).bg(Color::DarkGray),
            ),
        ]));
        lines.push(Line::default());
    }

    lines.push(Line::from(Span::styled("Steps:", header)));
    for step in step_plan(detail) {
        match step.kind {
            StepKind::Main => {
                let number = step.number.unwrap_or(0);
                let text = format!("{number}. {}", step.text);
                push_wrapped(&mut lines, &text, width, "  ", body);
            }
            StepKind::Continuation => {
                let text = format!("→ {}", step.text);
                push_wrapped(
                    &mut lines,
                    &text,
                    width,
                    "     ",
                    Style::default().fg(Color::DarkGray),
                );
            }
            StepKind::Confirmation => {
                let text = format!("✓ {}", step.text);
                push_wrapped(
                    &mut lines,
                    &text,
                    width,
                    "  ",
                    Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
                );
            }
            StepKind::Tip => {
                let text = format!("♦ {}", step.text);
                push_wrapped(&mut lines, &text, width, "  ", Style::default().fg(Color::Yellow));
            }
        }
    }

    lines
}

/// Wrap `text` to the pane width with a hanging indent and push each
/// wrapped row as its own line.
fn push_wrapped(
    lines: &mut Vec<Line<'static>>,
    text: &str,
    width: u16,
    indent: &str,
    style: Style,
) {
    let options = textwrap::Options::new((width as usize).max(indent.len() + 4))
        .initial_indent(indent)
        .subsequent_indent(indent)
        .break_words(true)
        .word_separator(textwrap::WordSeparator::AsciiSpace);
    for row in textwrap::wrap(text, options) {
        lines.push(Line::from(Span::styled(row.into_owned(), style)));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::content::ItemId;
    use crate::test_support::test_content;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    fn fixture_detail() -> Detail {
        let content = test_content();
        content.detail_for(&ItemId::new("one")).unwrap().clone()
    }

    #[test]
    fn test_detail_lines_include_headers_and_numbered_steps() {
        let detail = fixture_detail();
        let lines = detail_lines(&detail, 60);
        let text: Vec<String> = lines.iter().map(|l| l.to_string()).collect();

        assert!(text.iter().any(|l| l.contains("What it does:")));
        assert!(text.iter().any(|l| l.contains("When to use:")));
        assert!(text.iter().any(|l| l.contains("1. Open the tool")));
        assert!(text.iter().any(|l| l.contains("2. Run it")));
        assert!(text.iter().any(|l| l.contains("→ Pick a mode")));
        assert!(text.iter().any(|l| l.contains("✓ Check the output")));
    }

    #[test]
    fn test_detail_lines_omit_empty_shortcut() {
        let content = test_content();
        let detail = content.detail_for(&ItemId::new("two")).unwrap();
        let lines = detail_lines(detail, 60);
        let text: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        assert!(!text.iter().any(|l| l.contains("Shortcut:")));
    }

    #[test]
    fn test_detail_lines_show_shortcut_chip() {
        let detail = fixture_detail();
        let lines = detail_lines(&detail, 60);
        let text: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        assert!(text.iter().any(|l| l.contains("Ctrl + 1")));
    }

    #[test]
    fn test_panel_renders_missing_detail_placeholder() {
        let content = test_content();
        let item = content.item(&ItemId::new("three")).unwrap();
        let panel = DetailPanel {
            item,
            detail: None,
            dimmed: false,
        };
        let backend = TestBackend::new(60, 10);
        let mut terminal = Terminal::new(backend).unwrap();
        let mut state = DetailViewState::new();
        terminal
            .draw(|f| panel.render(f, f.area(), &mut state))
            .unwrap();
        let text: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect();
        assert!(text.contains("No expanded detail"));
    }

    #[test]
    fn test_sync_item_resets_scroll_on_change() {
        let mut state = DetailViewState::new();
        state.content_height = 50;
        state.viewport_height = 10;
        state.sync_item(Some("one"));
        state.scroll_down();
        state.scroll_down();
        assert_eq!(state.scroll.offset().y, 2);

        state.sync_item(Some("one"));
        assert_eq!(state.scroll.offset().y, 2, "same item keeps its offset");

        state.sync_item(Some("two"));
        assert_eq!(state.scroll.offset().y, 0, "new item starts at the top");
    }

    #[test]
    fn test_scroll_clamps_to_content() {
        let mut state = DetailViewState::new();
        state.content_height = 12;
        state.viewport_height = 10;
        for _ in 0..20 {
            state.scroll_down();
        }
        assert_eq!(state.scroll.offset().y, 2);
        state.scroll_up();
        assert_eq!(state.scroll.offset().y, 1);
    }
}
