//! The open category dropdown, drawn under its button.

use archview_core::Dropdown;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::app::AppState;
use crate::theme;
use crate::ui::region;

/// Render dropdown `index` and report its regions to the monitor.
///
/// Nothing is drawn (and no region is reported) when the button did not fit
/// on screen; the monitor then treats every later press as outside.
pub fn render(f: &mut Frame, area: Rect, app: &mut AppState, index: usize) {
    let Some(trigger) = app.hits.buttons.get(index).copied() else {
        return;
    };
    let top = trigger.y.saturating_add(1);
    if top >= area.bottom() {
        return;
    }

    let nav = app.viewer.navigation();
    let Some(group) = nav.group(index) else {
        return;
    };
    let cursor = app.viewer.dropdown(index).and_then(Dropdown::cursor);

    let lines: Vec<Line> = group
        .items()
        .iter()
        .enumerate()
        .map(|(i, view)| {
            let marker = if nav.is_active(view.id.as_str()) { "● " } else { "  " };
            let style = if Some(i) == cursor {
                theme::selected_row()
            } else {
                theme::tinted(view.accent)
            };
            Line::from(vec![
                Span::styled(marker, theme::accent()),
                Span::styled(view.label.as_str(), style),
            ])
        })
        .collect();
    let item_count = lines.len() as u16;
    let content_width = lines.iter().map(Line::width).max().unwrap_or(0) as u16;

    let width = content_width.saturating_add(4).min(area.width);
    let height = item_count.saturating_add(2).min(area.bottom() - top);
    let x = trigger.x.min(area.right().saturating_sub(width));
    let menu = Rect::new(x, top, width, height);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::tinted(group.accent()));
    let inner = block.inner(menu);
    f.render_widget(Clear, menu);
    f.render_widget(Paragraph::new(lines).block(block), menu);

    for item in 0..item_count.min(inner.height) {
        let row = Rect::new(inner.x, inner.y + item, inner.width, 1);
        app.hits.items.push((index, usize::from(item), region(row)));
    }
    app.viewer.report_dropdown_regions(index, region(menu), trigger);
}
