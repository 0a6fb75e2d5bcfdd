//! Open-one-at-a-time row action menu.
//!
//! The state is a single active row id, never a set, so opening one row's
//! menu closes any other. Every transition reports whether the
//! document-level outside-click listener has to be installed or removed,
//! so the listener only exists while a menu is open.

use std::fmt;

/// Class on the element that opens a row's menu.
pub const TRIGGER_CLASS: &str = "row-menu-trigger";

/// Class on the menu content.
pub const MENU_CLASS: &str = "row-menu";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RowAction {
    View,
    Edit,
}

impl RowAction {
    pub const ALL: [RowAction; 2] = [RowAction::View, RowAction::Edit];
}

impl fmt::Display for RowAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RowAction::View => f.write_str("View"),
            RowAction::Edit => f.write_str("Edit"),
        }
    }
}

/// What to do with the outside-click listener after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListenerChange {
    Install,
    Remove,
    Keep,
}

/// Where a pointer-down landed, resolved from the marker classes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClickTarget {
    pub in_trigger: bool,
    pub in_menu: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RowMenuState {
    active: Option<String>,
}

impl RowMenuState {
    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    pub fn is_open(&self, id: &str) -> bool {
        self.active.as_deref() == Some(id)
    }

    /// Opens `id`'s menu, or closes it if it is already the open one.
    pub fn toggle(&mut self, id: &str) -> ListenerChange {
        let was_open = self.active.is_some();
        if self.is_open(id) {
            self.active = None;
        } else {
            self.active = Some(id.to_string());
        }
        Self::transition(was_open, self.active.is_some())
    }

    pub fn close(&mut self) -> ListenerChange {
        let was_open = self.active.take().is_some();
        Self::transition(was_open, false)
    }

    /// Document pointer-down: closes the menu unless the target sits inside
    /// a trigger or the menu content.
    pub fn pointer_down(&mut self, target: ClickTarget) -> ListenerChange {
        if target.in_trigger || target.in_menu {
            ListenerChange::Keep
        } else {
            self.close()
        }
    }

    fn transition(was_open: bool, is_open: bool) -> ListenerChange {
        match (was_open, is_open) {
            (false, true) => ListenerChange::Install,
            (true, false) => ListenerChange::Remove,
            _ => ListenerChange::Keep,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const OUTSIDE: ClickTarget = ClickTarget {
        in_trigger: false,
        in_menu: false,
    };

    #[test]
    fn opening_b_closes_a() {
        let mut menu = RowMenuState::default();
        assert_eq!(menu.toggle("A"), ListenerChange::Install);
        assert_eq!(menu.toggle("B"), ListenerChange::Keep);
        assert!(menu.is_open("B"));
        assert!(!menu.is_open("A"));
        assert_eq!(menu.active(), Some("B"));
    }

    #[test]
    fn toggling_open_row_closes_it() {
        let mut menu = RowMenuState::default();
        menu.toggle("A");
        assert_eq!(menu.toggle("A"), ListenerChange::Remove);
        assert_eq!(menu.active(), None);
    }

    #[test]
    fn outside_click_closes_and_removes_listener() {
        let mut menu = RowMenuState::default();
        menu.toggle("A");
        assert_eq!(menu.pointer_down(OUTSIDE), ListenerChange::Remove);
        assert_eq!(menu.active(), None);
    }

    #[test]
    fn clicks_on_trigger_or_menu_keep_it_open() {
        let mut menu = RowMenuState::default();
        menu.toggle("A");
        let on_menu = ClickTarget {
            in_trigger: false,
            in_menu: true,
        };
        let on_trigger = ClickTarget {
            in_trigger: true,
            in_menu: false,
        };
        assert_eq!(menu.pointer_down(on_menu), ListenerChange::Keep);
        assert_eq!(menu.pointer_down(on_trigger), ListenerChange::Keep);
        assert!(menu.is_open("A"));
    }

    #[test]
    fn closing_when_closed_changes_nothing() {
        let mut menu = RowMenuState::default();
        assert_eq!(menu.close(), ListenerChange::Keep);
        assert_eq!(menu.pointer_down(OUTSIDE), ListenerChange::Keep);
    }

    #[test]
    fn listener_installed_exactly_while_open() {
        let mut menu = RowMenuState::default();
        let mut installed = false;
        let steps: [fn(&mut RowMenuState) -> ListenerChange; 6] = [
            |m: &mut RowMenuState| m.toggle("A"),
            |m: &mut RowMenuState| m.toggle("B"),
            |m: &mut RowMenuState| m.pointer_down(OUTSIDE),
            |m: &mut RowMenuState| m.toggle("C"),
            |m: &mut RowMenuState| m.close(),
            |m: &mut RowMenuState| m.close(),
        ];
        for step in steps {
            match step(&mut menu) {
                ListenerChange::Install => {
                    assert!(!installed);
                    installed = true;
                }
                ListenerChange::Remove => {
                    assert!(installed);
                    installed = false;
                }
                ListenerChange::Keep => {}
            }
            assert_eq!(installed, menu.active().is_some());
        }
    }
}
