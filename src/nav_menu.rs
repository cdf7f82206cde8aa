/// Where a document-level pointer press landed relative to the mobile menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PointerHit {
    Menu,
    ToggleButton,
    Outside,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavAction {
    Toggle,
    Close,
    /// A link inside the mobile menu was followed.
    LinkFollowed,
    PointerDown(PointerHit),
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavMenuState {
    pub open: bool,
}

impl NavMenuState {
    pub fn apply(&mut self, action: NavAction) {
        match action {
            NavAction::Toggle => self.open = !self.open,
            NavAction::Close
            | NavAction::LinkFollowed
            | NavAction::PointerDown(PointerHit::Outside) => self.open = false,
            NavAction::PointerDown(PointerHit::Menu | PointerHit::ToggleButton) => {}
        }
    }

    pub fn icon(self) -> &'static str {
        if self.open {
            "✕"
        } else {
            "☰"
        }
    }
}
