//! # Guide Overlay Component
//!
//! Centered modal walking new users through the app in three steps.
//! Auto-opens on the first-ever launch, reopened any time with `?`,
//! dismissed with Esc (or Enter on the last step).
//!
//! Follows the persistent state + transient wrapper pattern:
//! - `GuideOverlayState` lives in `TuiState` (None = hidden)
//! - `GuideOverlay` is created each frame with borrowed state

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap};

use crate::core::guide::GUIDE_STEPS;
use crate::tui::component::EventHandler;
use crate::tui::event::TuiEvent;

/// Persistent state for the guide overlay.
pub struct GuideOverlayState {
    pub step: usize,
}

impl GuideOverlayState {
    pub fn new() -> Self {
        Self { step: 0 }
    }

    fn is_last_step(&self) -> bool {
        self.step + 1 >= GUIDE_STEPS.len()
    }
}

impl EventHandler for GuideOverlayState {
    type Event = GuideEvent;

    /// Handle a key event, returning a GuideEvent if the overlay should act.
    fn handle_event(&mut self, event: &TuiEvent) -> Option<GuideEvent> {
        match event {
            TuiEvent::Escape => Some(GuideEvent::Dismiss),
            TuiEvent::CursorLeft => {
                self.step = self.step.saturating_sub(1);
                None
            }
            TuiEvent::CursorRight | TuiEvent::Submit => {
                if self.is_last_step() {
                    Some(GuideEvent::Dismiss)
                } else {
                    self.step += 1;
                    None
                }
            }
            _ => None,
        }
    }
}

impl Default for GuideOverlayState {
    fn default() -> Self {
        Self::new()
    }
}

/// Events emitted by the guide overlay.
pub enum GuideEvent {
    Dismiss,
}

/// Transient render wrapper for the guide overlay.
pub struct GuideOverlay<'a> {
    state: &'a GuideOverlayState,
}

impl<'a> GuideOverlay<'a> {
    pub fn new(state: &'a GuideOverlayState) -> Self {
        Self { state }
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = centered_rect(60, 50, area);

        // Clear underlying content
        frame.render_widget(Clear, overlay);

        let help_text = if self.state.is_last_step() {
            " ← Back  Enter Get Started  Esc Close "
        } else {
            " ← Back  → Next  Esc Close "
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue))
            .title(" Guide ")
            .title_alignment(Alignment::Left)
            .title_bottom(Line::from(help_text).centered())
            .padding(Padding::new(2, 2, 1, 1));

        let step = &GUIDE_STEPS[self.state.step.min(GUIDE_STEPS.len() - 1)];

        // Progress dots: ● for the current step, ○ for the rest
        let dots: String = (0..GUIDE_STEPS.len())
            .map(|i| if i == self.state.step { "● " } else { "○ " })
            .collect();

        let lines = vec![
            Line::from(Span::styled(
                step.title,
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )),
            Line::default(),
            Line::from(Span::styled(
                step.description,
                Style::default().fg(Color::Gray),
            )),
        ];

        let inner = block.inner(overlay);
        frame.render_widget(block, overlay);

        let [body_area, dots_area] =
            Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

        frame.render_widget(
            Paragraph::new(lines).wrap(Wrap { trim: true }),
            body_area,
        );
        frame.render_widget(
            Paragraph::new(Line::from(dots.trim_end().to_string()))
                .style(Style::default().fg(Color::Blue))
                .alignment(Alignment::Center),
            dots_area,
        );
    }
}

/// Compute a centered rect using percentage of the outer rect.
fn centered_rect(percent_x: u16, percent_y: u16, outer: Rect) -> Rect {
    let [_, center_v, _] = Layout::vertical([
        Constraint::Percentage((100 - percent_y) / 2),
        Constraint::Percentage(percent_y),
        Constraint::Percentage((100 - percent_y) / 2),
    ])
    .areas(outer);
    let [_, center, _] = Layout::horizontal([
        Constraint::Percentage((100 - percent_x) / 2),
        Constraint::Percentage(percent_x),
        Constraint::Percentage((100 - percent_x) / 2),
    ])
    .areas(center_v);
    center
}
