//! Test helpers for building app state and rendering frames

use archview_core::{Catalog, ViewerState};
use ratatui::backend::TestBackend;
use ratatui::Terminal;

use crate::app::AppState;
use crate::ui;

pub fn app() -> AppState {
    let viewer = ViewerState::new(Catalog::builtin().unwrap()).unwrap();
    AppState::new(viewer, true, false)
}

/// Draw one frame into a test terminal and return it.
pub fn render(app: &mut AppState, width: u16, height: u16) -> Terminal<TestBackend> {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    terminal
}

/// Text of one buffer row, wide-glyph continuation cells skipped.
pub fn row_text(terminal: &Terminal<TestBackend>, y: u16) -> String {
    let buffer = terminal.backend().buffer();
    let mut out = String::new();
    let mut skip = 0;
    for x in 0..buffer.area.width {
        if skip > 0 {
            skip -= 1;
            continue;
        }
        let symbol = buffer[(x, y)].symbol();
        skip = ratatui::text::Span::raw(symbol).width().saturating_sub(1);
        out.push_str(symbol);
    }
    out
}

/// All rows joined with newlines.
pub fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let height = terminal.backend().buffer().area.height;
    (0..height)
        .map(|y| row_text(terminal, y))
        .collect::<Vec<_>>()
        .join("\n")
}
