//! Help overlay: keyboard and mouse reference.

use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use crate::theme;
use crate::ui::centered_rect;

pub fn render(f: &mut Frame, area: Rect) {
    let popup = centered_rect(80, 90, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Keys [Esc]close ")
        .title_style(theme::accent_bold());

    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Global");
    key(&mut lines, "q / Ctrl+C", "Quit");
    key(&mut lines, "Tab / Shift+Tab", "Move focus between nav bar and content");
    key(&mut lines, "1-9", "Open the dropdown of category N");
    key(&mut lines, "] / [", "Next / previous view in the category");
    key(&mut lines, "} / {", "First view of the next / previous category");
    key(&mut lines, "?", "Toggle this help");
    lines.push(Line::from(""));

    section(&mut lines, "Content");
    key(&mut lines, "j / k", "Move the panel cursor");
    key(&mut lines, "Enter / Space", "Open or close the panel under the cursor");
    key(&mut lines, "c", "Collapse every panel");
    key(&mut lines, "e", "Expand every panel of this view");
    key(&mut lines, "PgUp / PgDn", "Scroll");
    lines.push(Line::from(""));

    section(&mut lines, "Navigation bar");
    key(&mut lines, "h / l", "Move between category buttons");
    key(&mut lines, "Enter / Space / ↓", "Open the dropdown");
    lines.push(Line::from(""));

    section(&mut lines, "Open dropdown");
    key(&mut lines, "j / k", "Highlight an item");
    key(&mut lines, "h / l", "Switch to the neighbouring dropdown");
    key(&mut lines, "Enter / Space", "Show the highlighted view");
    key(&mut lines, "Esc", "Close");
    lines.push(Line::from(""));

    section(&mut lines, "Mouse");
    key(&mut lines, "Click button", "Open or close its dropdown");
    key(&mut lines, "Click item", "Show that view");
    key(&mut lines, "Click elsewhere", "Close the open dropdown");
    key(&mut lines, "Click card title", "Open or close the card");
    key(&mut lines, "Wheel", "Scroll");

    f.render_widget(Paragraph::new(lines).block(block), popup);
}

fn section<'a>(lines: &mut Vec<Line<'a>>, title: &str) {
    lines.push(Line::from(Span::styled(title.to_string(), theme::accent_bold())));
}

fn key<'a>(lines: &mut Vec<Line<'a>>, keys: &str, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {:>18}  ", keys), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
