/// User actions on the widget chrome
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisibilityAction {
    Minimize,
    Restore,
    ToggleHidden,
    ToggleExpanded,
}

/// Hidden/expanded state of one widget instance
///
/// Local to the widget and unrelated to playback. Both flags start false on
/// every mount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct VisibilityState {
    hidden: bool,
    expanded: bool,
}

impl VisibilityState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn minimize(&mut self) {
        self.hidden = true;
    }

    pub fn restore(&mut self) {
        self.hidden = false;
    }

    pub fn toggle_hidden(&mut self) {
        self.hidden = !self.hidden;
    }

    pub fn toggle_expanded(&mut self) {
        self.expanded = !self.expanded;
    }

    pub fn apply(&mut self, action: VisibilityAction) {
        log::trace!("Visibility action {:?}", action);
        match action {
            VisibilityAction::Minimize => self.minimize(),
            VisibilityAction::Restore => self.restore(),
            VisibilityAction::ToggleHidden => self.toggle_hidden(),
            VisibilityAction::ToggleExpanded => self.toggle_expanded(),
        }
    }
}
