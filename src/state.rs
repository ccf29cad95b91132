//! Page-level UI state: the mobile menu flag and the form modal.

/// Which purpose the form modal was opened for.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ModalVariant {
    #[default]
    GetStarted,
    Contact,
}

impl ModalVariant {
    /// Accessible dialog title, read by assistive technology only.
    pub fn title(self) -> &'static str {
        match self {
            ModalVariant::GetStarted => "Get Started with DataStream",
            ModalVariant::Contact => "Contact DataStream",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ModalState {
    pub is_open: bool,
    pub variant: ModalVariant,
}

impl ModalState {
    pub fn opened(self, variant: ModalVariant) -> Self {
        Self { is_open: true, variant }
    }

    // Variant survives the close and is ignored until the next open.
    pub fn closed(self) -> Self {
        Self { is_open: false, ..self }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    pub is_open: bool,
}

impl MenuState {
    pub fn toggled(self) -> Self {
        Self { is_open: !self.is_open }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed_with_get_started() {
        let state = ModalState::default();
        assert!(!state.is_open);
        assert_eq!(state.variant, ModalVariant::GetStarted);
        assert!(!MenuState::default().is_open);
    }

    #[test]
    fn state_reflects_last_call() {
        let state = ModalState::default()
            .opened(ModalVariant::Contact)
            .closed()
            .opened(ModalVariant::GetStarted)
            .opened(ModalVariant::Contact);
        assert_eq!(state, ModalState { is_open: true, variant: ModalVariant::Contact });

        let state = state.closed();
        assert!(!state.is_open);
    }

    #[test]
    fn close_preserves_variant() {
        let state = ModalState::default().opened(ModalVariant::Contact).closed();
        assert_eq!(state.variant, ModalVariant::Contact);
        assert_eq!(state.closed(), state);
    }

    #[test]
    fn reopen_while_open_swaps_variant() {
        let state = ModalState::default().opened(ModalVariant::GetStarted);
        let state = state.opened(ModalVariant::Contact);
        assert!(state.is_open);
        assert_eq!(state.variant, ModalVariant::Contact);
    }

    #[test]
    fn titles_depend_on_variant() {
        assert_eq!(ModalVariant::GetStarted.title(), "Get Started with DataStream");
        assert_eq!(ModalVariant::Contact.title(), "Contact DataStream");
    }

    #[test]
    fn menu_toggle_is_involutive() {
        let menu = MenuState::default();
        assert!(menu.toggled().is_open);
        assert_eq!(menu.toggled().toggled(), menu);
    }
}
