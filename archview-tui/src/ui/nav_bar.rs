//! Navigation bar: one button per category.
//!
//! A button shows the label of the active view when its category owns it,
//! the category's own label otherwise.

use archview_core::Dropdown;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, Focus};
use crate::theme;
use crate::ui::region;

pub fn render(f: &mut Frame, area: Rect, app: &mut AppState) {
    if area.height == 0 {
        return;
    }
    let viewer = &app.viewer;
    let focused = app.focus == Focus::Nav;

    let mut x = area.x.saturating_add(1);
    for i in 0..app.category_count() {
        let (Some(label), Some(accent)) = (
            viewer.category_display_label(i),
            viewer.category_display_accent(i),
        ) else {
            break;
        };
        let open = viewer.dropdown(i).is_some_and(Dropdown::is_expanded);
        let arrow = if open { "▴" } else { "▾" };
        let style = theme::nav_button(
            accent,
            viewer.is_category_highlighted(i),
            focused && i == app.nav_cursor,
        );
        let span = Span::styled(format!(" {label} {arrow} "), style);

        let width = (span.width() as u16).min(area.right().saturating_sub(x));
        if width == 0 {
            break;
        }
        let rect = Rect::new(x, area.y, width, 1);
        f.render_widget(Paragraph::new(Line::from(span)), rect);
        app.hits.buttons.push(region(rect));
        x = x.saturating_add(width + 1);
    }
}
