//! # TitleBar Component
//!
//! Top status bar showing where the user is and what just happened.
//!
//! ## Responsibilities
//!
//! - Display the content set's title
//! - Display the breadcrumb while a category is open
//! - Display transient status messages (e.g. "Viewing: Quick Search")
//!
//! ## Design Decisions
//!
//! TitleBar is purely presentational—it receives all data as props and has
//! no internal state. Props live as struct fields rather than render()
//! parameters because the Component trait requires a fixed render()
//! signature.
//!
//! The title text changes based on state:
//!
//! 1. **Breadcrumb**: `"Epic Quick Tips ▸ Search & Navigation | Viewing: ..."`
//! 2. **Status message**: `"Epic Quick Tips | Pick a category..."`
//! 3. **Default**: `"Epic Quick Tips"`
//!
//! This priority order keeps the most important information visible, even
//! on narrow terminals.

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;

/// Top status bar component showing title, breadcrumb, and status.
pub struct TitleBar {
    /// Content set title (e.g. "Epic Quick Tips for Healthcare Staff")
    pub title: String,
    /// Breadcrumb of the open category, if any
    pub breadcrumb: Option<String>,
    /// Transient status (e.g. "Viewing: Quick Search")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(title: String, breadcrumb: Option<String>, status_message: String) -> Self {
        Self {
            title,
            breadcrumb,
            status_message,
        }
    }
}

impl Component for TitleBar {
    /// Render the title bar as a single line with conditional formatting.
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let title_text = match (&self.breadcrumb, self.status_message.is_empty()) {
            (Some(crumb), false) => {
                format!("{} ▸ {} | {}", self.title, crumb, self.status_message)
            }
            (Some(crumb), true) => format!("{} ▸ {}", self.title, crumb),
            (None, false) => format!("{} | {}", self.title, self.status_message),
            (None, true) => self.title.clone(),
        };

        frame.render_widget(Span::raw(title_text), area);
    }
}
