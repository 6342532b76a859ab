#[derive(Debug, Clone, Copy)]
pub struct UiState {
    mouse_capture_enabled: bool,
    mouse_capture_dirty: bool,
    help_visible: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new()
    }
}

impl UiState {
    pub fn new() -> Self {
        Self {
            mouse_capture_enabled: true,
            mouse_capture_dirty: false,
            help_visible: false,
        }
    }

    pub fn mouse_capture_enabled(&self) -> bool {
        self.mouse_capture_enabled
    }

    pub fn toggle_mouse_capture(&mut self) {
        self.mouse_capture_enabled = !self.mouse_capture_enabled;
        self.mouse_capture_dirty = true;
    }

    /// Pending capture change for the driver, consumed once. The flag
    /// decouples state flips from the terminal escape sequence so the
    /// runner applies it exactly one time.
    pub fn take_mouse_capture_change(&mut self) -> Option<bool> {
        if self.mouse_capture_dirty {
            self.mouse_capture_dirty = false;
            Some(self.mouse_capture_enabled)
        } else {
            None
        }
    }

    pub fn help_visible(&self) -> bool {
        self.help_visible
    }

    pub fn set_help_visible(&mut self, visible: bool) {
        self.help_visible = visible;
    }

    pub fn toggle_help(&mut self) {
        self.help_visible = !self.help_visible;
    }
}
