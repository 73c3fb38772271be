use serde::{Deserialize, Serialize};

use crate::api::ApiError;

pub const MAX_MESSAGE_CHARS: usize = 100;

/// Cuts `message` to `MAX_MESSAGE_CHARS` characters and appends `...` when
/// anything was dropped.
pub fn truncate_message(message: &str) -> String {
    if message.chars().count() <= MAX_MESSAGE_CHARS {
        return message.to_string();
    }
    let mut cut: String = message.chars().take(MAX_MESSAGE_CHARS).collect();
    cut.push_str("...");
    cut
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageState {
    pub success: Option<String>,
    pub error: Option<String>,
}

impl MessageState {
    pub fn clear(&mut self) {
        self.success = None;
        self.error = None;
    }

    pub fn set_success(&mut self, message: impl Into<String>) {
        self.success = Some(message.into());
        self.error = None;
    }

    pub fn set_error(&mut self, message: impl AsRef<str>) {
        self.error = Some(truncate_message(message.as_ref()));
        self.success = None;
    }

    pub fn set_api_error(&mut self, error: &ApiError) {
        self.set_error(&error.error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn long_errors_are_truncated() {
        let mut state = MessageState::default();
        state.set_success("saved");
        state.set_error("x".repeat(140));
        let shown = state.error.clone().unwrap();
        assert_eq!(shown.chars().count(), MAX_MESSAGE_CHARS + 3);
        assert!(shown.ends_with("..."));
        assert!(state.success.is_none());
    }

    #[test]
    fn short_errors_are_kept_verbatim() {
        assert_eq!(truncate_message("Leave is not in PENDING status"), "Leave is not in PENDING status");
        assert_eq!(truncate_message(&"a".repeat(100)).len(), 100);
    }

    #[test]
    fn truncation_respects_multibyte_characters() {
        let text = "é".repeat(120);
        let cut = truncate_message(&text);
        assert_eq!(cut.chars().count(), 103);
    }

    #[test]
    fn set_success_clears_error() {
        let mut state = MessageState::default();
        state.set_api_error(&ApiError::validation("Subject is required"));
        assert_eq!(state.error.as_deref(), Some("Subject is required"));
        state.set_success("Leave applied");
        assert!(state.error.is_none());
        state.clear();
        assert_eq!(state, MessageState::default());
    }
}
