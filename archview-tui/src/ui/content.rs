//! Content frame: the active view's body.
//!
//! Lines are never wrapped so each panel header sits on exactly one row and
//! can be hit-tested after scrolling.

use archview_core::{Block as BodyBlock, DisclosurePanel, PanelId, ViewerState};
use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::Frame;

use crate::app::{ContentPane, HitMap};
use crate::theme;
use crate::ui::region;

pub fn render(
    f: &mut Frame,
    area: Rect,
    viewer: &ViewerState,
    pane: &mut ContentPane,
    focused: bool,
    hits: &mut HitMap,
) {
    let Some(body) = viewer.active_body() else {
        let empty = Paragraph::new(Span::styled("No content for this view.", theme::muted()));
        f.render_widget(empty, area);
        return;
    };

    let frame = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::panel_border(focused))
        .title(format!(" {} ", body.title))
        .title_style(theme::tinted(body.accent).add_modifier(Modifier::BOLD));
    let inner = frame.inner(area);
    f.render_widget(frame, area);

    let panels = viewer.active_panels();
    let mut lines: Vec<Line> = Vec::new();
    // (panel index, id, line number) of every header.
    let mut headers: Vec<(usize, PanelId, usize)> = Vec::new();

    if !body.subtitle.is_empty() {
        lines.push(Line::from(Span::styled(body.subtitle.as_str(), theme::text_secondary())));
        lines.push(Line::from(""));
    }

    for block in &body.blocks {
        match block {
            BodyBlock::Notes { title, lines: notes } => {
                section(&mut lines, title);
                for note in notes {
                    lines.push(Line::from(vec![
                        Span::styled("  • ", theme::muted()),
                        Span::styled(note.as_str(), theme::text()),
                    ]));
                }
            }
            BodyBlock::Roles { title, roles } => {
                section(&mut lines, title);
                let width = roles.iter().map(|r| display_width(&r.role)).max().unwrap_or(0);
                for row in roles {
                    lines.push(Line::from(vec![
                        Span::raw("  "),
                        Span::styled(pad(&row.role, width), theme::neutral()),
                        Span::raw("  "),
                        Span::styled(row.desc.as_str(), theme::text()),
                    ]));
                }
            }
            BodyBlock::Pairs { title, rows } => {
                section(&mut lines, title);
                let width = rows.iter().map(|r| display_width(&r.key)).max().unwrap_or(0);
                for row in rows {
                    lines.push(Line::from(vec![
                        Span::raw("  "),
                        Span::styled(pad(&row.key, width), theme::text_secondary()),
                        Span::styled("  │ ", theme::muted()),
                        Span::styled(row.value.as_str(), theme::text()),
                    ]));
                }
            }
            BodyBlock::Panels { panels: ids } => {
                for id in ids {
                    let Some((index, panel)) = panels.iter().enumerate().find(|(_, p)| p.id == id)
                    else {
                        continue;
                    };
                    headers.push((index, panel.id.clone(), lines.len()));
                    push_panel(&mut lines, panel, focused && pane.cursor == index);
                }
            }
        }
        lines.push(Line::from(""));
    }

    let height = inner.height;
    if pane.follow_cursor {
        if let Some(&(_, _, line)) = headers.get(pane.cursor) {
            let line = clamp_u16(line);
            if line < pane.scroll {
                pane.scroll = line;
            } else if height > 0 && line >= pane.scroll.saturating_add(height) {
                pane.scroll = line - height + 1;
            }
        }
        pane.follow_cursor = false;
    }
    let max_scroll = clamp_u16(lines.len()).saturating_sub(height);
    pane.scroll = pane.scroll.min(max_scroll);

    f.render_widget(Paragraph::new(lines).scroll((pane.scroll, 0)), inner);

    hits.content = region(inner);
    for (index, id, line) in headers {
        let line = clamp_u16(line);
        if line >= pane.scroll && line - pane.scroll < height {
            let row = Rect::new(inner.x, inner.y + (line - pane.scroll), inner.width, 1);
            hits.headers.push((index, id, region(row)));
        }
    }
}

fn push_panel<'a>(lines: &mut Vec<Line<'a>>, panel: &DisclosurePanel<'a>, selected: bool) {
    let entry = panel.entry;
    let marker = if panel.open { "▾ " } else { "▸ " };
    let title_style = if selected {
        theme::selected_row()
    } else {
        theme::tinted(entry.accent).add_modifier(Modifier::BOLD)
    };

    let mut spans = vec![Span::styled(marker, theme::accent())];
    if let Some(glyph) = theme::icon_glyph(&entry.icon) {
        spans.push(Span::raw(format!("{glyph} ")));
    }
    spans.push(Span::styled(entry.title.as_str(), title_style));
    if let Some(badge) = &entry.badge {
        spans.push(Span::styled(format!(" [{badge}]"), theme::warning()));
    }
    spans.push(Span::styled(format!(" ({})", entry.items.len()), theme::muted()));
    lines.push(Line::from(spans));

    for item in panel.visible_items() {
        lines.push(Line::from(vec![
            Span::styled("    · ", theme::muted()),
            Span::styled(item.as_str(), theme::text()),
        ]));
    }
}

fn section<'a>(lines: &mut Vec<Line<'a>>, title: &'a str) {
    lines.push(Line::from(Span::styled(title, theme::accent_bold())));
}

fn display_width(s: &str) -> usize {
    Span::raw(s).width()
}

/// Right-pad to a display width (wide glyphs count double).
fn pad(s: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(s));
    format!("{s}{}", " ".repeat(fill))
}

fn clamp_u16(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}
