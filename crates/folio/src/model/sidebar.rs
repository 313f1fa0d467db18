/// Open/closed flag of the navigation panel. Starts closed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SidebarState {
    Open,
    #[default]
    Closed,
}

impl SidebarState {
    pub fn is_open(self) -> bool {
        matches!(self, SidebarState::Open)
    }

    pub fn toggled(self) -> Self {
        match self {
            SidebarState::Open => SidebarState::Closed,
            SidebarState::Closed => SidebarState::Open,
        }
    }

    /// Value for the trigger's `aria-expanded` attribute.
    pub fn aria_expanded(self) -> &'static str {
        if self.is_open() { "true" } else { "false" }
    }
}

/// Viewports at or below the breakpoint collapse the sidebar after navigation.
pub fn is_narrow(viewport_width: f64, breakpoint: f64) -> bool {
    viewport_width <= breakpoint
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_is_involutive() {
        let state = SidebarState::default();
        assert_eq!(state, SidebarState::Closed);
        assert_eq!(state.toggled(), SidebarState::Open);
        assert_eq!(state.toggled().toggled(), SidebarState::Closed);
    }

    #[test]
    fn aria_mirrors_flag() {
        assert_eq!(SidebarState::Open.aria_expanded(), "true");
        assert_eq!(SidebarState::Closed.aria_expanded(), "false");
    }

    #[test]
    fn breakpoint_is_inclusive() {
        assert!(is_narrow(768.0, 768.0));
        assert!(is_narrow(320.0, 768.0));
        assert!(!is_narrow(769.0, 768.0));
    }
}
