//! # SectionCard Component
//!
//! One category as a bordered card: icon + title, then one row per item.
//! Used in two layouts — the browse grid (all cards, fixed height) and
//! the collapsed single-column list while a category is open (fills the
//! left pane, shows a back hint, highlights the selected item).
//!
//! `SectionCard` is a **transient component**: created fresh each frame
//! with the data it needs. Focus and hover are passed in from the parent,
//! which tracks them persistently.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Padding, Paragraph, Widget};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::core::content::{ItemId, Section};

/// Badge text appended to items introduced by the latest upgrade.
const NEW_BADGE: &str = "· Nov 2024";

/// Total vertical space consumed by borders (1 top + 1 bottom).
const VERTICAL_OVERHEAD: u16 = 2;
/// Total horizontal space consumed by borders and padding.
const HORIZONTAL_OVERHEAD: u16 = 4;

#[derive(Clone, Copy)]
pub struct SectionCard<'a> {
    pub section: &'a Section,
    /// Keyboard-focused row, if focus is inside this card.
    pub focused: Option<usize>,
    /// Mouse-hovered row, if the pointer is inside this card.
    pub hovered: Option<usize>,
    /// The settled (or mid-transition) selection.
    pub selected: Option<&'a ItemId>,
    /// True in the single-column layout while this category is open.
    pub collapsed: bool,
}

impl<'a> SectionCard<'a> {
    /// Height of this card in the browse grid: one row per item plus
    /// borders. Rows truncate rather than wrap, so width never matters.
    pub fn grid_height(section: &Section) -> u16 {
        section.items.len() as u16 + VERTICAL_OVERHEAD
    }

    /// Screen row (relative to the card's top edge) of an item row.
    /// Used by the parent for mouse hit testing.
    pub fn item_row(index: usize) -> u16 {
        index as u16 + 1 // +1 for the top border
    }

    fn row_line(&self, index: usize, width: usize) -> Line<'a> {
        let item = &self.section.items[index];
        let is_selected = self.selected == Some(&item.id);

        let style = if self.focused == Some(index) {
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD | Modifier::REVERSED)
        } else if is_selected {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else if self.hovered == Some(index) {
            Style::default().fg(Color::Gray).bg(Color::DarkGray)
        } else {
            Style::default().fg(Color::Gray)
        };

        let marker = if is_selected { "▾ " } else { "› " };

        // Truncate the label so marker + label + badge fit on one row
        let marker_w = marker.width();
        let badge_w = if item.new_feature { NEW_BADGE.width() + 1 } else { 0 };
        let label = truncate_to_width(&item.text, width.saturating_sub(marker_w + badge_w));

        let mut spans = vec![
            Span::styled(marker, style),
            Span::styled(label.clone(), style),
        ];
        if item.new_feature {
            let pad = width
                .saturating_sub(marker_w + label.width() + NEW_BADGE.width())
                .max(1);
            spans.push(Span::styled(" ".repeat(pad), style));
            let badge_style = if self.focused == Some(index) {
                style
            } else {
                Style::default().fg(Color::Yellow)
            };
            spans.push(Span::styled(NEW_BADGE, badge_style));
        }
        Line::from(spans)
    }
}

impl<'a> Widget for SectionCard<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let has_focus = self.focused.is_some();
        let border_style = if has_focus {
            Style::default().fg(Color::Blue)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let mut block = Block::bordered()
            .title(format!(" {} {} ", self.section.icon, self.section.title))
            .title_style(border_style.add_modifier(Modifier::BOLD))
            .border_style(border_style)
            .padding(Padding::horizontal(1));
        if self.collapsed {
            block = block.title_bottom(Line::from(" Esc Back ").centered());
        }

        let inner_width = area.width.saturating_sub(HORIZONTAL_OVERHEAD) as usize;
        let lines: Vec<Line> = (0..self.section.items.len())
            .map(|i| self.row_line(i, inner_width))
            .collect();

        Paragraph::new(lines).block(block).render(area, buf);
    }
}

/// Truncate a string to fit within `max_width` display columns, adding
/// "..." if needed.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }
    let mut out = String::new();
    let mut used = 0;
    for c in s.chars() {
        let w = UnicodeWidthChar::width(c).unwrap_or(0);
        if used + w > max_width - 3 {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}
