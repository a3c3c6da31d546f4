//! Application state: single-owner, main-thread only.
//!
//! The engine state lives in `ViewerState`. Everything here is presentation:
//! keyboard focus, the content cursor and scroll offset, the help overlay,
//! the status line and the hit map recorded by the last draw.

use archview_core::{PanelId, Region, ViewChange, ViewId, ViewListener, ViewerState};

/// Which part of the screen receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Nav,
    Content,
}

impl Focus {
    pub fn toggle(self) -> Focus {
        match self {
            Focus::Nav => Focus::Content,
            Focus::Content => Focus::Nav,
        }
    }
}

/// Status message severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Warning,
}

/// Which modal overlay (if any) is shown on top. Dropdowns are not modal and
/// live in `ViewerState`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    Help,
}

/// Scroll and cursor of the content pane.
///
/// Registered as the view listener, so both reset whenever the rendered body
/// is swapped.
#[derive(Debug, Clone, Default)]
pub struct ContentPane {
    /// Index into the active view's panels.
    pub cursor: usize,
    /// First visible line.
    pub scroll: u16,
    /// Scroll so the cursor row is visible on the next draw.
    pub follow_cursor: bool,
    pub last_change: Option<ViewChange>,
}

impl ContentPane {
    pub fn scroll_by(&mut self, delta: i32) {
        let next = i32::from(self.scroll) + delta;
        self.scroll = next.clamp(0, i32::from(u16::MAX)) as u16;
        self.follow_cursor = false;
    }
}

impl ViewListener for ContentPane {
    fn view_changed(&mut self, change: &ViewChange) {
        if change.is_noop() {
            return;
        }
        self.cursor = 0;
        self.scroll = 0;
        self.follow_cursor = false;
        self.last_change = Some(change.clone());
    }
}

/// Screen regions recorded during the last draw, for mouse hit-testing.
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    /// Category buttons, by category index.
    pub buttons: Vec<Region>,
    /// Rows of the expanded dropdown: (category, item, row).
    pub items: Vec<(usize, usize, Region)>,
    /// Visible panel headers: (panel index in the view, panel id, row).
    pub headers: Vec<(usize, PanelId, Region)>,
    /// Inner area of the content frame.
    pub content: Region,
}

impl HitMap {
    pub fn clear(&mut self) {
        self.buttons.clear();
        self.items.clear();
        self.headers.clear();
        self.content = Region::default();
    }

    pub fn button_at(&self, x: u16, y: u16) -> Option<usize> {
        self.buttons.iter().position(|r| r.contains(x, y))
    }

    pub fn item_at(&self, x: u16, y: u16) -> Option<(usize, usize)> {
        self.items
            .iter()
            .find(|(_, _, r)| r.contains(x, y))
            .map(|(category, item, _)| (*category, *item))
    }

    pub fn header_at(&self, x: u16, y: u16) -> Option<(usize, &PanelId)> {
        self.headers
            .iter()
            .find(|(_, _, r)| r.contains(x, y))
            .map(|(index, id, _)| (*index, id))
    }
}

/// Top-level application state.
pub struct AppState {
    pub viewer: ViewerState,

    // Navigation
    pub focus: Focus,
    /// Category button under the keyboard cursor.
    pub nav_cursor: usize,
    pub content: ContentPane,
    pub overlay: Overlay,
    pub running: bool,

    // Cross-cutting
    pub mouse: bool,
    pub status_message: Option<(String, StatusLevel)>,
    pub hits: HitMap,
}

impl AppState {
    pub fn new(viewer: ViewerState, mouse: bool, help_on_start: bool) -> Self {
        let nav_cursor = viewer.navigation().active_category();
        Self {
            viewer,
            focus: Focus::Content,
            nav_cursor,
            content: ContentPane::default(),
            overlay: if help_on_start { Overlay::Help } else { Overlay::None },
            running: true,
            mouse,
            status_message: None,
            hits: HitMap::default(),
        }
    }

    pub fn category_count(&self) -> usize {
        self.viewer.navigation().groups().len()
    }

    /// Number of disclosure panels in the active view.
    pub fn panel_count(&self) -> usize {
        self.viewer.active_panels().len()
    }

    /// Select a view and reset the content pane.
    pub fn select_view(&mut self, view: &ViewId) {
        self.viewer.select_view(view, &mut self.content);
        self.nav_cursor = self.viewer.navigation().active_category();
    }

    /// Pick an item of a dropdown, closing it.
    pub fn select_from_dropdown(&mut self, category: usize, item: usize) {
        self.viewer.select_from_dropdown(category, item, &mut self.content);
        self.nav_cursor = self.viewer.navigation().active_category();
    }

    /// Flip the panel under the content cursor.
    pub fn toggle_panel_at_cursor(&mut self) {
        let id = self
            .viewer
            .active_panels()
            .get(self.content.cursor)
            .map(|p| p.id.clone());
        if let Some(id) = id {
            self.viewer.toggle_panel(&id);
        }
    }

    pub fn move_content_cursor(&mut self, delta: isize) {
        let count = self.panel_count();
        if count == 0 {
            return;
        }
        let next = (self.content.cursor as isize + delta).clamp(0, count as isize - 1);
        self.content.cursor = next as usize;
        self.content.follow_cursor = true;
    }

    pub fn move_nav_cursor(&mut self, delta: isize) {
        let count = self.category_count() as isize;
        if count == 0 {
            return;
        }
        self.nav_cursor = (self.nav_cursor as isize + delta).rem_euclid(count) as usize;
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Info));
    }

    pub fn set_warning(&mut self, msg: impl Into<String>) {
        self.status_message = Some((msg.into(), StatusLevel::Warning));
    }
}
