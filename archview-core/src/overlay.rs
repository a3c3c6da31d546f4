//! Dropdown overlays and outside-interaction dismissal.
//!
//! Each dropdown is `Closed` or `Expanded`. The outside-interaction monitor
//! lives inside the `Expanded` variant, so it exists exactly while the
//! dropdown is open and is dropped on every path that closes it.
//!
//! Every UI event is stamped with an `InteractionId`. A monitor remembers the
//! id of the interaction that opened its dropdown and ignores that event and
//! anything older, so the click that opens a dropdown can never also count
//! as the outside click that closes it.

/// Monotonic sequence number of a UI event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct InteractionId(u64);

impl InteractionId {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// Issues `InteractionId`s in increasing order.
#[derive(Debug, Clone, Default)]
pub struct InteractionClock {
    last: u64,
}

impl InteractionClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stamp a new interaction.
    pub fn tick(&mut self) -> InteractionId {
        self.last += 1;
        InteractionId(self.last)
    }
}

/// A screen rectangle in terminal cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Region {
    pub x: u16,
    pub y: u16,
    pub width: u16,
    pub height: u16,
}

impl Region {
    pub fn new(x: u16, y: u16, width: u16, height: u16) -> Self {
        Self { x, y, width, height }
    }

    pub fn contains(&self, x: u16, y: u16) -> bool {
        x >= self.x
            && y >= self.y
            && u32::from(x) < u32::from(self.x) + u32::from(self.width)
            && u32::from(y) < u32::from(self.y) + u32::from(self.height)
    }
}

/// A pointer press at a screen position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerDown {
    pub interaction: InteractionId,
    pub x: u16,
    pub y: u16,
}

/// What a dropdown made of a pointer press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerOutcome {
    /// Dropdown closed, or the event belongs to the opening interaction.
    Ignored,
    /// Inside the menu or on its trigger; left for hit-testing.
    Inside,
    /// Outside both; the dropdown closed itself.
    Dismissed,
}

/// Watches pointer presses for one expanded dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutsideInteractionMonitor {
    opened_by: InteractionId,
    menu: Option<Region>,
    trigger: Option<Region>,
}

impl OutsideInteractionMonitor {
    /// Arm for a dropdown opened by `opened_by`.
    pub fn arm(opened_by: InteractionId) -> Self {
        Self {
            opened_by,
            menu: None,
            trigger: None,
        }
    }

    /// Record where the menu and its trigger button were drawn.
    pub fn set_regions(&mut self, menu: Region, trigger: Region) {
        self.menu = Some(menu);
        self.trigger = Some(trigger);
    }

    pub fn menu(&self) -> Option<Region> {
        self.menu
    }

    /// Classify a press. Regions not yet reported count as empty.
    pub fn classify(&self, event: &PointerDown) -> PointerOutcome {
        if event.interaction <= self.opened_by {
            return PointerOutcome::Ignored;
        }
        let hit = |r: &Option<Region>| r.is_some_and(|r| r.contains(event.x, event.y));
        if hit(&self.menu) || hit(&self.trigger) {
            PointerOutcome::Inside
        } else {
            PointerOutcome::Dismissed
        }
    }
}

/// Visibility of one overlay.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum OverlayState {
    #[default]
    Closed,
    Expanded {
        monitor: OutsideInteractionMonitor,
        /// Highlighted item for keyboard navigation.
        cursor: usize,
    },
}

/// A dropdown menu listing one category's views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dropdown {
    item_count: usize,
    state: OverlayState,
}

impl Dropdown {
    pub fn new(item_count: usize) -> Self {
        Self {
            item_count,
            state: OverlayState::Closed,
        }
    }

    pub fn state(&self) -> &OverlayState {
        &self.state
    }

    pub fn is_expanded(&self) -> bool {
        matches!(self.state, OverlayState::Expanded { .. })
    }

    /// Open with the highlight on `cursor`. Re-arms if already open.
    pub fn open(&mut self, opened_by: InteractionId, cursor: usize) {
        self.state = OverlayState::Expanded {
            monitor: OutsideInteractionMonitor::arm(opened_by),
            cursor: cursor.min(self.item_count.saturating_sub(1)),
        };
    }

    /// Close. Returns whether it was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.is_expanded();
        self.state = OverlayState::Closed;
        was_open
    }

    /// Open if closed, close if open. Returns the new expanded flag.
    pub fn toggle(&mut self, by: InteractionId, cursor: usize) -> bool {
        if self.close() {
            false
        } else {
            self.open(by, cursor);
            true
        }
    }

    pub fn monitor(&self) -> Option<&OutsideInteractionMonitor> {
        match &self.state {
            OverlayState::Expanded { monitor, .. } => Some(monitor),
            OverlayState::Closed => None,
        }
    }

    pub fn cursor(&self) -> Option<usize> {
        match self.state {
            OverlayState::Expanded { cursor, .. } => Some(cursor),
            OverlayState::Closed => None,
        }
    }

    /// Move the highlight by `delta`, wrapping. No-op while closed.
    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.item_count;
        if let OverlayState::Expanded { cursor, .. } = &mut self.state {
            if len > 0 {
                let len = len as isize;
                *cursor = (*cursor as isize + delta).rem_euclid(len) as usize;
            }
        }
    }

    /// Forward the drawn regions to the monitor. No-op while closed.
    pub fn set_regions(&mut self, menu: Region, trigger: Region) {
        if let OverlayState::Expanded { monitor, .. } = &mut self.state {
            monitor.set_regions(menu, trigger);
        }
    }

    /// Offer a pointer press; closes the dropdown when it lands outside.
    pub fn pointer_down(&mut self, event: &PointerDown) -> PointerOutcome {
        let outcome = match self.monitor() {
            Some(monitor) => monitor.classify(event),
            None => return PointerOutcome::Ignored,
        };
        if outcome == PointerOutcome::Dismissed {
            self.close();
        }
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(clock: &mut InteractionClock, x: u16, y: u16) -> PointerDown {
        PointerDown {
            interaction: clock.tick(),
            x,
            y,
        }
    }

    #[test]
    fn region_contains_is_half_open() {
        let r = Region::new(2, 3, 4, 2);
        assert!(r.contains(2, 3));
        assert!(r.contains(5, 4));
        assert!(!r.contains(6, 4));
        assert!(!r.contains(5, 5));
        assert!(!r.contains(1, 3));
    }

    #[test]
    fn region_at_edge_of_u16_does_not_overflow() {
        let r = Region::new(u16::MAX - 1, 0, 10, 1);
        assert!(r.contains(u16::MAX, 0));
    }

    #[test]
    fn clock_is_monotonic() {
        let mut clock = InteractionClock::new();
        let a = clock.tick();
        let b = clock.tick();
        assert!(b > a);
        assert_eq!(b.value(), a.value() + 1);
    }

    #[test]
    fn outside_press_dismisses() {
        let mut clock = InteractionClock::new();
        let mut dd = Dropdown::new(3);
        dd.open(clock.tick(), 0);
        dd.set_regions(Region::new(0, 1, 10, 3), Region::new(0, 0, 10, 1));
        let ev = press(&mut clock, 40, 20);
        assert_eq!(dd.pointer_down(&ev), PointerOutcome::Dismissed);
        assert!(!dd.is_expanded());
        assert!(dd.monitor().is_none());
    }

    #[test]
    fn inside_and_trigger_presses_are_kept() {
        let mut clock = InteractionClock::new();
        let mut dd = Dropdown::new(3);
        dd.open(clock.tick(), 0);
        dd.set_regions(Region::new(0, 1, 10, 3), Region::new(0, 0, 10, 1));
        let inside = press(&mut clock, 3, 2);
        assert_eq!(dd.pointer_down(&inside), PointerOutcome::Inside);
        let trigger = press(&mut clock, 3, 0);
        assert_eq!(dd.pointer_down(&trigger), PointerOutcome::Inside);
        assert!(dd.is_expanded());
    }

    #[test]
    fn opening_interaction_cannot_close() {
        let mut clock = InteractionClock::new();
        let mut dd = Dropdown::new(3);
        let opening = clock.tick();
        dd.open(opening, 0);
        // The same press that opened it, delivered again, is ignored even
        // though no region has been reported yet.
        let same = PointerDown { interaction: opening, x: 50, y: 50 };
        assert_eq!(dd.pointer_down(&same), PointerOutcome::Ignored);
        assert!(dd.is_expanded());
        // The next press outside does close it.
        let next = press(&mut clock, 50, 50);
        assert_eq!(dd.pointer_down(&next), PointerOutcome::Dismissed);
    }

    #[test]
    fn closed_dropdown_ignores_presses() {
        let mut clock = InteractionClock::new();
        let mut dd = Dropdown::new(2);
        let ev = press(&mut clock, 0, 0);
        assert_eq!(dd.pointer_down(&ev), PointerOutcome::Ignored);
    }

    #[test]
    fn toggle_flips_and_disarms() {
        let mut clock = InteractionClock::new();
        let mut dd = Dropdown::new(2);
        assert!(dd.toggle(clock.tick(), 0));
        assert!(dd.monitor().is_some());
        assert!(!dd.toggle(clock.tick(), 0));
        assert!(dd.monitor().is_none());
    }

    #[test]
    fn cursor_wraps_and_clamps() {
        let mut clock = InteractionClock::new();
        let mut dd = Dropdown::new(3);
        dd.open(clock.tick(), 7);
        assert_eq!(dd.cursor(), Some(2));
        dd.move_cursor(1);
        assert_eq!(dd.cursor(), Some(0));
        dd.move_cursor(-1);
        assert_eq!(dd.cursor(), Some(2));
        dd.close();
        dd.move_cursor(1);
        assert_eq!(dd.cursor(), None);
    }
}
