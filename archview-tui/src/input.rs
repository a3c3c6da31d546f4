//! Keyboard input dispatch: overlays → global keys → focused-area handlers.

use archview_core::InteractionId;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::app::{AppState, Focus, Overlay};

const PAGE: i32 = 10;

/// Handle a key event.
pub fn handle_key(app: &mut AppState, key: KeyEvent) {
    // Only handle key press events (Windows sends both Press and Release).
    if key.kind != KeyEventKind::Press {
        return;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.running = false;
        return;
    }
    let by = app.viewer.next_interaction();

    // 1. Overlays consume input first.
    if app.overlay == Overlay::Help {
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('?') | KeyCode::Char('q')) {
            app.overlay = Overlay::None;
        }
        return;
    }
    if let Some(index) = app.viewer.expanded_dropdown() {
        if handle_dropdown_key(app, index, key, by) {
            return;
        }
    }

    // 2. Global keys.
    match key.code {
        KeyCode::Char('q') => {
            app.running = false;
            return;
        }
        KeyCode::Char('?') => {
            app.viewer.close_all_dropdowns();
            app.overlay = Overlay::Help;
            return;
        }
        KeyCode::Tab | KeyCode::BackTab => {
            app.focus = app.focus.toggle();
            return;
        }
        KeyCode::Char(c @ '1'..='9') => {
            let index = (c as usize) - ('1' as usize);
            open_category(app, index, by);
            return;
        }
        KeyCode::Char(']') => {
            app.viewer.next_view_in_category(&mut app.content);
            sync_nav_cursor(app);
            return;
        }
        KeyCode::Char('[') => {
            app.viewer.prev_view_in_category(&mut app.content);
            sync_nav_cursor(app);
            return;
        }
        KeyCode::Char('}') => {
            app.viewer.next_category(&mut app.content);
            sync_nav_cursor(app);
            return;
        }
        KeyCode::Char('{') => {
            app.viewer.prev_category(&mut app.content);
            sync_nav_cursor(app);
            return;
        }
        KeyCode::Esc => {
            app.viewer.close_all_dropdowns();
            return;
        }
        _ => {}
    }

    // 3. Focused-area keys.
    match app.focus {
        Focus::Nav => handle_nav_key(app, key, by),
        Focus::Content => handle_content_key(app, key),
    }
}

/// Keys for the open dropdown. Returns false for keys it does not handle,
/// which then fall through to the global keys.
fn handle_dropdown_key(app: &mut AppState, index: usize, key: KeyEvent, by: InteractionId) -> bool {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.viewer.dropdown_move_cursor(index, 1),
        KeyCode::Char('k') | KeyCode::Up => app.viewer.dropdown_move_cursor(index, -1),
        KeyCode::Enter | KeyCode::Char(' ') => {
            app.viewer.confirm_dropdown(index, &mut app.content);
            sync_nav_cursor(app);
        }
        KeyCode::Esc => app.viewer.close_dropdown(index),
        KeyCode::Char('h') | KeyCode::Left => {
            app.nav_cursor = index;
            app.move_nav_cursor(-1);
            app.viewer.open_dropdown(app.nav_cursor, by);
        }
        KeyCode::Char('l') | KeyCode::Right => {
            app.nav_cursor = index;
            app.move_nav_cursor(1);
            app.viewer.open_dropdown(app.nav_cursor, by);
        }
        _ => return false,
    }
    true
}

fn handle_nav_key(app: &mut AppState, key: KeyEvent, by: InteractionId) {
    match key.code {
        KeyCode::Char('h') | KeyCode::Left => app.move_nav_cursor(-1),
        KeyCode::Char('l') | KeyCode::Right => app.move_nav_cursor(1),
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down | KeyCode::Char('j') => {
            let index = app.nav_cursor;
            app.viewer.open_dropdown(index, by);
        }
        _ => {}
    }
}

fn handle_content_key(app: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.move_content_cursor(1),
        KeyCode::Char('k') | KeyCode::Up => app.move_content_cursor(-1),
        KeyCode::Enter | KeyCode::Char(' ') => app.toggle_panel_at_cursor(),
        KeyCode::Char('c') => {
            let open = app.viewer.registry().open_count();
            app.viewer.collapse_all();
            app.set_status(format!("Collapsed {open} panels"));
        }
        KeyCode::Char('e') => {
            if app.panel_count() == 0 {
                app.set_warning("This view has no panels");
            } else {
                app.viewer.expand_active_view();
                app.set_status("Expanded every panel of this view");
            }
        }
        KeyCode::PageDown => app.content.scroll_by(PAGE),
        KeyCode::PageUp => app.content.scroll_by(-PAGE),
        _ => {}
    }
}

/// Move the nav cursor to category `index` and open its dropdown.
fn open_category(app: &mut AppState, index: usize, by: InteractionId) {
    if index >= app.category_count() {
        return;
    }
    app.nav_cursor = index;
    app.focus = Focus::Nav;
    app.viewer.open_dropdown(index, by);
}

fn sync_nav_cursor(app: &mut AppState) {
    app.nav_cursor = app.viewer.navigation().active_category();
}
