//! Bottom status bar: key hints for the focused area, then the last status
//! message or the catalog footer.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::{AppState, Focus, StatusLevel};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut spans: Vec<Span> = Vec::new();

    let hints = if app.viewer.expanded_dropdown().is_some() {
        " j/k:highlight Enter:show Esc:close"
    } else {
        match app.focus {
            Focus::Nav => " h/l:move Enter:open Tab:content ?:help q:quit",
            Focus::Content => " j/k:move Enter:toggle c/e:all []:view Tab:nav ?:help q:quit",
        }
    };
    spans.push(Span::styled(hints, theme::muted()));

    spans.push(Span::raw(" | "));

    let open = app.viewer.registry().open_count();
    spans.push(Span::styled(format!("{open} open"), theme::neutral()));
    spans.push(Span::raw(" | "));

    match &app.status_message {
        Some((msg, level)) => {
            let style = match level {
                StatusLevel::Info => theme::accent(),
                StatusLevel::Warning => theme::warning(),
            };
            spans.push(Span::styled(msg.as_str(), style));
        }
        None => {
            spans.push(Span::styled(
                app.viewer.catalog().footer.as_str(),
                theme::text_secondary(),
            ));
        }
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
