//! Open/closed state of the responsive navigation menu.

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    /// Hamburger button pressed.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// A nav link was followed.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// A click landed somewhere on the page. Only clicks outside both the
    /// menu and its toggle button close an open menu.
    pub fn dismiss_outside(&mut self, inside_nav: bool, on_toggle: bool) {
        if !inside_nav && !on_toggle && self.open {
            self.open = false;
        }
    }

    pub fn css_modifier(&self) -> &'static str {
        if self.open {
            "active"
        } else {
            ""
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_flips_state() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(menu.open);
        menu.toggle();
        assert!(!menu.open);
    }

    #[test]
    fn outside_click_closes_only_from_outside() {
        let mut menu = MenuState { open: true };
        menu.dismiss_outside(true, false);
        assert!(menu.open);
        menu.dismiss_outside(false, true);
        assert!(menu.open);
        menu.dismiss_outside(false, false);
        assert!(!menu.open);

        // Already closed: stays closed.
        menu.dismiss_outside(false, false);
        assert!(!menu.open);
    }

    #[test]
    fn link_click_closes() {
        let mut menu = MenuState { open: true };
        menu.close();
        assert_eq!(menu, MenuState::default());
        assert_eq!(menu.css_modifier(), "");
    }
}
