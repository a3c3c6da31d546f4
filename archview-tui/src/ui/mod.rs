//! Top-level UI layout: header, navigation bar, content frame, status bar.
//!
//! Drawing also records where interactive things landed (the hit map) and
//! reports the open dropdown's menu and trigger regions back to its monitor.

pub mod content;
pub mod dropdown;
pub mod help;
pub mod nav_bar;
pub mod status_bar;

use archview_core::Region;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, Focus, Overlay};
use crate::theme;

/// Draw the entire UI.
pub fn draw(f: &mut Frame, app: &mut AppState) {
    app.hits.clear();
    let area = f.area();

    // Split: 2-line header, 1-line nav bar, content, 1-line status bar.
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    draw_header(f, chunks[0], app);
    nav_bar::render(f, chunks[1], app);
    content::render(
        f,
        chunks[2],
        &app.viewer,
        &mut app.content,
        app.focus == Focus::Content,
        &mut app.hits,
    );
    status_bar::render(f, chunks[3], app);

    // Overlays on top: the open dropdown, then the modal help.
    if let Some(index) = app.viewer.expanded_dropdown() {
        dropdown::render(f, area, app, index);
    }
    if app.overlay == Overlay::Help {
        help::render(f, chunks[2]);
    }
}

fn draw_header(f: &mut Frame, area: Rect, app: &AppState) {
    let catalog = app.viewer.catalog();
    let nav = app.viewer.navigation();

    let title = Line::from(vec![
        Span::styled(format!(" {}", catalog.title), theme::accent_bold()),
        Span::raw("  "),
        Span::styled(catalog.subtitle.as_str(), theme::muted()),
    ]);

    let mut crumb = vec![Span::raw(" ")];
    if let Some(group) = nav.group(nav.active_category()) {
        crumb.push(Span::styled(group.label(), theme::text_secondary()));
        crumb.push(Span::styled(" › ", theme::muted()));
    }
    if let Some(entry) = catalog.view_entry(nav.active().as_str()) {
        crumb.push(Span::styled(
            entry.label.as_str(),
            theme::tinted(entry.accent).add_modifier(Modifier::BOLD),
        ));
    }

    f.render_widget(Paragraph::new(vec![title, Line::from(crumb)]), area);
}

/// Convert a layout rect into an engine region.
pub fn region(rect: Rect) -> Region {
    Region::new(rect.x, rect.y, rect.width, rect.height)
}

/// Compute a centered rect for overlays.
pub fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
