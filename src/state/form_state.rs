//! Input buffers for the login, signup and settings forms.

/// Text buffers and inline error for the auth/settings forms.
///
/// Cleared on every screen switch.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub username: String,
    pub password: String,
    pub password_confirm: String,
    /// Inline error shown under the form, if the last submit failed.
    pub error: Option<String>,
}

impl FormState {
    /// Creates empty form state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all buffers and the error.
    pub fn clear(&mut self) {
        self.username.clear();
        self.password.clear();
        self.password_confirm.clear();
        self.error = None;
    }
}
