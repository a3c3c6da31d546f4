//! Mouse input: pointer presses go to the armed dropdown monitors first,
//! then are hit-tested against the regions recorded by the last draw.

use archview_core::{Dropdown, PointerDown};
use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::app::{AppState, Focus, Overlay};

const WHEEL_STEP: i32 = 3;

pub fn handle_mouse(app: &mut AppState, event: MouseEvent) {
    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => left_press(app, event.column, event.row),
        MouseEventKind::ScrollDown => app.content.scroll_by(WHEEL_STEP),
        MouseEventKind::ScrollUp => app.content.scroll_by(-WHEEL_STEP),
        _ => {}
    }
}

fn left_press(app: &mut AppState, x: u16, y: u16) {
    if app.overlay == Overlay::Help {
        app.overlay = Overlay::None;
        return;
    }

    let press = PointerDown {
        interaction: app.viewer.next_interaction(),
        x,
        y,
    };
    let dismissed = app.viewer.pointer_down(&press);
    if dismissed > 0 {
        log::debug!("press at ({x}, {y}) dismissed {dismissed} dropdown(s)");
    }

    // A press inside the open menu never reaches what is drawn beneath it.
    if let Some(index) = app.viewer.expanded_dropdown() {
        let in_menu = app
            .viewer
            .dropdown(index)
            .and_then(Dropdown::monitor)
            .and_then(|m| m.menu())
            .is_some_and(|menu| menu.contains(x, y));
        if in_menu {
            if let Some((category, item)) = app.hits.item_at(x, y) {
                if category == index {
                    app.select_from_dropdown(category, item);
                }
            }
            return;
        }
    }

    if let Some(index) = app.hits.button_at(x, y) {
        app.nav_cursor = index;
        app.focus = Focus::Nav;
        app.viewer.toggle_dropdown(index, press.interaction);
        return;
    }

    if let Some((index, id)) = app.hits.header_at(x, y) {
        let id = id.clone();
        app.content.cursor = index;
        app.focus = Focus::Content;
        app.viewer.toggle_panel(&id);
    } else if app.hits.content.contains(x, y) {
        app.focus = Focus::Content;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{app, render};
    use archview_core::{Region, ViewId};
    use crossterm::event::KeyModifiers;

    fn click(app: &mut AppState, x: u16, y: u16) {
        handle_mouse(
            app,
            MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                column: x,
                row: y,
                modifiers: KeyModifiers::NONE,
            },
        );
    }

    fn center(r: Region) -> (u16, u16) {
        (r.x + r.width / 2, r.y + r.height / 2)
    }

    #[test]
    fn button_click_toggles_dropdown() {
        let mut app = app();
        render(&mut app, 100, 30);
        let (x, y) = center(app.hits.buttons[2]);
        click(&mut app, x, y);
        assert_eq!(app.viewer.expanded_dropdown(), Some(2));

        // Clicking the trigger again closes it through the trigger, not the
        // monitor.
        render(&mut app, 100, 30);
        click(&mut app, x, y);
        assert_eq!(app.viewer.expanded_dropdown(), None);
    }

    #[test]
    fn item_click_selects_and_closes() {
        let mut app = app();
        render(&mut app, 100, 30);
        let (x, y) = center(app.hits.buttons[2]);
        click(&mut app, x, y);
        render(&mut app, 100, 30);

        let (_, _, row) = app.hits.items[1];
        let (x, y) = center(row);
        click(&mut app, x, y);
        assert!(app.viewer.is_active("b2b"));
        assert_eq!(app.viewer.expanded_dropdown(), None);
    }

    #[test]
    fn outside_click_dismisses_without_selecting() {
        let mut app = app();
        render(&mut app, 100, 30);
        let (x, y) = center(app.hits.buttons[1]);
        click(&mut app, x, y);
        render(&mut app, 100, 30);

        click(&mut app, 95, 25);
        assert_eq!(app.viewer.expanded_dropdown(), None);
        assert!(app.viewer.is_active("guide"));
    }

    #[test]
    fn clicking_another_button_swaps_dropdowns() {
        let mut app = app();
        render(&mut app, 100, 30);
        let first = center(app.hits.buttons[0]);
        let third = center(app.hits.buttons[2]);
        click(&mut app, first.0, first.1);
        render(&mut app, 100, 30);
        click(&mut app, third.0, third.1);
        assert_eq!(app.viewer.expanded_dropdown(), Some(2));
        assert!(!app.viewer.dropdown(0).unwrap().is_expanded());
    }

    #[test]
    fn header_click_toggles_panel() {
        let mut app = app();
        app.select_view(&ViewId::new("modules"));
        render(&mut app, 100, 40);
        let (index, id, row) = app.hits.headers[2].clone();
        assert_eq!(id.as_str(), "sis");
        click(&mut app, row.x + 2, row.y);
        assert!(app.viewer.is_panel_open("sis"));
        assert_eq!(app.content.cursor, index);
        assert_eq!(app.focus, Focus::Content);
    }

    #[test]
    fn press_on_menu_does_not_reach_content_beneath() {
        let mut app = app();
        app.select_view(&ViewId::new("modules"));
        // Scroll the module cards up under the nav bar.
        app.content.scroll = 15;
        render(&mut app, 100, 14);
        let (x, y) = center(app.hits.buttons[0]);
        click(&mut app, x, y);
        render(&mut app, 100, 14);

        // The menu's bottom border row covers a card header.
        let menu = app.viewer.dropdown(0).unwrap().monitor().unwrap().menu().unwrap();
        let border = menu.y + menu.height - 1;
        assert!(app.hits.header_at(menu.x, border).is_some());
        click(&mut app, menu.x, border);
        assert_eq!(app.viewer.expanded_dropdown(), Some(0));
        assert_eq!(app.viewer.registry().open_count(), 0);
    }

    #[test]
    fn click_closes_help() {
        let mut app = app();
        app.overlay = Overlay::Help;
        click(&mut app, 1, 1);
        assert_eq!(app.overlay, Overlay::None);
    }

    #[test]
    fn wheel_scrolls_content() {
        let mut app = app();
        let wheel = |kind| MouseEvent {
            kind,
            column: 10,
            row: 10,
            modifiers: KeyModifiers::NONE,
        };
        handle_mouse(&mut app, wheel(MouseEventKind::ScrollDown));
        handle_mouse(&mut app, wheel(MouseEventKind::ScrollDown));
        assert_eq!(app.content.scroll, 6);
        handle_mouse(&mut app, wheel(MouseEventKind::ScrollUp));
        assert_eq!(app.content.scroll, 3);
    }
}
