#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

/// Shell UI state: theme and the open/closed state of overlays.
#[derive(Clone, Debug, Default)]
pub struct UiState {
    pub dark_mode: bool,
    pub mobile_menu_open: bool,
    pub notifications_open: bool,
}

impl UiState {
    pub fn toggle_notifications(&mut self) {
        self.notifications_open = !self.notifications_open;
    }

    /// Close every overlay, e.g. after navigation.
    pub fn close_overlays(&mut self) {
        self.mobile_menu_open = false;
        self.notifications_open = false;
    }
}
