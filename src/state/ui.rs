// UI state - progress indicator and transient messages
use std::time::Instant;

pub struct UIState {
    pub is_loading: bool,
    pub error_message: Option<(String, Instant)>,
    /// Another widget held keyboard focus when the last frame ended.
    pub focus_elsewhere: bool,
}

impl UIState {
    pub fn new() -> Self {
        Self {
            is_loading: false,
            error_message: None,
            focus_elsewhere: false,
        }
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = Some((message, Instant::now()));
    }

    pub fn clear_expired_messages(&mut self, timeout_secs: u64) {
        if let Some((_, time)) = &self.error_message {
            if time.elapsed().as_secs() >= timeout_secs {
                self.error_message = None;
            }
        }
    }
}
