use crate::core::state::App;
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::video_pane::VIDEO_PANE_HEIGHT;
use crate::tui::components::{DetailPanel, GuideOverlay, SectionCard, TitleBar, VideoPane};

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Position, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

/// One clickable item row, cached during render for mouse hit testing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HitRow {
    pub area: Rect,
    pub section: usize,
    pub item: usize,
}

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, footer_area] = layout.areas(frame.area());

    // Title bar with breadcrumb while a category is open
    let open_section = app
        .selection
        .selected_section()
        .and_then(|id| app.content.sections().iter().position(|s| &s.id == id));
    let breadcrumb = open_section.map(|i| app.content.sections()[i].title.clone());
    let mut title_bar = TitleBar::new(
        app.content.title.clone(),
        breadcrumb,
        app.status_message.clone(),
    );
    title_bar.render(frame, title_area);

    // Main area — rebuild the hit-test cache on every draw
    tui.hit_rows.clear();
    match open_section {
        None => draw_browse_grid(frame, main_area, app, tui),
        Some(index) => draw_detail_view(frame, main_area, app, tui, index),
    }

    draw_footer(frame, footer_area, app, tui, open_section.is_some());

    // Overlays render last, on top of everything
    if let Some(guide) = &tui.guide {
        GuideOverlay::new(guide).render(frame, frame.area());
    }
}

/// Columns for the browse grid, derived from terminal width the way the
/// original derived them from breakpoints.
fn grid_columns(width: u16) -> usize {
    if width >= 110 {
        3
    } else if width >= 72 {
        2
    } else {
        1
    }
}

fn draw_browse_grid(frame: &mut Frame, area: Rect, app: &App, tui: &mut TuiState) {
    let sections = app.content.sections();
    let cols = grid_columns(area.width);
    let col_width = area.width / cols as u16;

    let mut y = area.y;
    for (row_index, row_sections) in sections.chunks(cols).enumerate() {
        if y >= area.y + area.height {
            break;
        }
        let row_height = row_sections
            .iter()
            .map(SectionCard::grid_height)
            .max()
            .unwrap_or(0)
            .min(area.y + area.height - y);

        for (col_index, section) in row_sections.iter().enumerate() {
            let section_index = row_index * cols + col_index;
            let card_area = Rect::new(
                area.x + col_index as u16 * col_width,
                y,
                col_width,
                row_height,
            );

            let card = SectionCard {
                section,
                focused: (tui.focus.0 == section_index).then_some(tui.focus.1),
                hovered: tui
                    .hovered
                    .filter(|(s, _)| *s == section_index)
                    .map(|(_, i)| i),
                selected: None,
                collapsed: false,
            };
            frame.render_widget(card, card_area);

            push_hit_rows(&mut tui.hit_rows, section_index, section.items.len(), card_area);
        }
        y += row_height;
    }
}

fn draw_detail_view(
    frame: &mut Frame,
    area: Rect,
    app: &App,
    tui: &mut TuiState,
    section_index: usize,
) {
    use Constraint::Percentage;
    let [list_area, detail_area] =
        Layout::horizontal([Percentage(33), Percentage(67)]).areas(area);

    // Left third: the open category as a collapsed single-column list
    let section = &app.content.sections()[section_index];
    let card = SectionCard {
        section,
        focused: (tui.focus.0 == section_index).then_some(tui.focus.1),
        hovered: tui
            .hovered
            .filter(|(s, _)| *s == section_index)
            .map(|(_, i)| i),
        selected: app.selection.selected_item(),
        collapsed: true,
    };
    frame.render_widget(card, list_area);
    push_hit_rows(&mut tui.hit_rows, section_index, section.items.len(), list_area);

    // Right two thirds: expanded detail, with the video pane below when
    // the selection has settled and carries a tutorial reference.
    let transitioning = app.selection.is_transitioning();
    let shown = app
        .selection
        .selected_item()
        .and_then(|id| app.content.item(id).map(|item| (id, item)));

    match shown {
        Some((item_id, item)) => {
            let detail = app.content.detail_for(item_id);
            let video_url = detail.and_then(|d| d.video_url.as_deref());
            let show_video = app.selection.video_visible() && video_url.is_some();

            tui.detail_view.sync_item(Some(item_id.as_str()));
            tui.video_pane.sync(show_video.then_some(item_id));

            let video_height = if show_video { VIDEO_PANE_HEIGHT } else { 0 };
            let [panel_area, video_area] =
                Layout::vertical([Constraint::Min(0), Constraint::Length(video_height)])
                    .areas(detail_area);

            DetailPanel {
                item,
                detail,
                dimmed: transitioning,
            }
            .render(frame, panel_area, &mut tui.detail_view);

            if let Some(url) = video_url
                && show_video
            {
                VideoPane {
                    url,
                    launched: tui.video_pane.launched(),
                }
                .render(frame, video_area);
            }
        }
        None => {
            // Pending re-selection: the old detail pane is unmounted and
            // the next one has not mounted yet.
            tui.detail_view.sync_item(None);
            tui.video_pane.sync(None);
            let placeholder = Block::bordered()
                .border_style(Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM));
            frame.render_widget(placeholder, detail_area);
        }
    }
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App, tui: &TuiState, in_detail: bool) {
    // Hovered item's tip doubles as the tooltip
    let hovered_tip = tui.hovered.and_then(|(s, i)| {
        app.content
            .sections()
            .get(s)
            .and_then(|section| section.items.get(i))
            .map(|item| item.tip.as_str())
    });

    let line = match hovered_tip {
        Some(tip) => Line::from(vec![
            Span::styled("💡 ", Style::default().fg(Color::Yellow)),
            Span::styled(tip.to_string(), Style::default().fg(Color::Gray)),
        ]),
        None => {
            let help = if in_detail {
                " ↑ ↓ Navigate   Enter Open   Esc Back   o Video   ? Guide   q Quit"
            } else {
                " ↑ ↓ ← → Navigate   Enter Open   ? Guide   q Quit"
            };
            Line::from(Span::styled(help, Style::default().fg(Color::DarkGray)))
        }
    };

    frame.render_widget(Paragraph::new(line), area);
}

/// Record the clickable row rects of a card's items (rows clipped away by
/// a short card are skipped).
fn push_hit_rows(rows: &mut Vec<HitRow>, section: usize, item_count: usize, card_area: Rect) {
    for item in 0..item_count {
        let row_y = card_area.y + SectionCard::item_row(item);
        // Rows must sit inside the card's borders
        if row_y + 1 >= card_area.y + card_area.height {
            break;
        }
        rows.push(HitRow {
            area: Rect::new(
                card_area.x + 1,
                row_y,
                card_area.width.saturating_sub(2),
                1,
            ),
            section,
            item,
        });
    }
}

/// Hit test: which item row (if any) is at this screen position?
pub fn hit_test(rows: &[HitRow], column: u16, row: u16) -> Option<(usize, usize)> {
    rows.iter()
        .find(|r| r.area.contains(Position { x: column, y: row }))
        .map(|r| (r.section, r.item))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::action::{Action, update};
    use crate::core::content::{ItemId, SectionId};
    use crate::test_support::test_app;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use std::time::Instant;

    fn render(app: &App, tui: &mut TuiState, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| draw_ui(f, app, tui)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn settle(app: &mut App, mut now: Instant) -> Instant {
        while let Some(deadline) = app.selection.next_deadline() {
            now = deadline;
            update(app, Action::Tick, now);
        }
        now
    }

    #[test]
    fn test_browse_grid_shows_all_sections() {
        let app = test_app();
        let mut tui = TuiState::new(false);
        let text = render(&app, &mut tui, 120, 30);
        assert!(text.contains("Alpha Tools"));
        assert!(text.contains("Beta Tools"));
        assert!(text.contains("Test Tips"));
    }

    #[test]
    fn test_browse_grid_caches_hit_rows_for_every_item() {
        let app = test_app();
        let mut tui = TuiState::new(false);
        render(&app, &mut tui, 120, 30);
        // 2 items in alpha + 1 in beta
        assert_eq!(tui.hit_rows.len(), 3);
    }

    #[test]
    fn test_detail_view_shows_expansion_and_video() {
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

        let mut tui = TuiState::new(false);
        tui.focus = (0, 0);
        let text = render(&app, &mut tui, 120, 30);
        assert!(text.contains("What it does:"));
        assert!(text.contains("When to use:"));
        assert!(text.contains("Tutorial Video"));
        assert!(text.contains("▸ Alpha Tools"), "breadcrumb shows the open category");
        assert!(!text.contains("Beta Tools"), "other sections are hidden");
    }

    #[test]
    fn test_video_pane_hidden_mid_transition() {
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
        // Advance only through the identifier switch; not yet settled
        let hide = app.timing.hide;
        update(&mut app, Action::Tick, t0 + hide);
        assert!(app.selection.is_transitioning());

        let mut tui = TuiState::new(false);
        let text = render(&app, &mut tui, 120, 30);
        assert!(!text.contains("Tutorial Video"));
    }

    #[test]
    fn test_item_without_detail_renders_placeholder() {
        let mut app = test_app();
        let t0 = Instant::now();
        update(
            &mut app,
            Action::SelectItem {
                section: SectionId::new("beta"),
                item: ItemId::new("three"),
            },
            t0,
        );
        settle(&mut app, t0);

        let mut tui = TuiState::new(false);
        let text = render(&app, &mut tui, 120, 30);
        assert!(text.contains("No expanded detail"));
    }

    #[test]
    fn test_guide_overlay_renders_on_top() {
        let app = test_app();
        let mut tui = TuiState::new(true);
        let text = render(&app, &mut tui, 120, 30);
        assert!(text.contains("Welcome to Epic Quick Tips!"));
    }

    #[test]
    fn test_hit_test_resolves_rows() {
        let rows = vec![
            HitRow {
                area: Rect::new(1, 2, 30, 1),
                section: 0,
                item: 0,
            },
            HitRow {
                area: Rect::new(1, 3, 30, 1),
                section: 0,
                item: 1,
            },
        ];
        assert_eq!(hit_test(&rows, 5, 2), Some((0, 0)));
        assert_eq!(hit_test(&rows, 5, 3), Some((0, 1)));
        assert_eq!(hit_test(&rows, 5, 10), None);
        assert_eq!(hit_test(&rows, 70, 2), None);
    }

    #[test]
    fn test_grid_columns_track_width() {
        assert_eq!(grid_columns(60), 1);
        assert_eq!(grid_columns(80), 2);
        assert_eq!(grid_columns(140), 3);
    }
}
