use super::*;

impl App {
    /// Clears stored credentials and asks for new ones.
    pub(in crate::tui_shell) fn request_credentials(&mut self) {
        self.gate.begin_entry(None);
        self.sync_credentials_flag();
        self.open_username_prompt();
    }

    pub(in crate::tui_shell) fn open_username_prompt(&mut self) {
        self.open_text_input_modal(TextPrompt {
            title: "Enter Credentials".to_string(),
            prompt: "Username: ".to_string(),
            action: TextInputAction::Username,
            masked: false,
            initial: None,
        });
    }

    fn open_password_prompt(&mut self) {
        self.open_text_input_modal(TextPrompt {
            title: "Enter Credentials".to_string(),
            prompt: "Password: ".to_string(),
            action: TextInputAction::Password,
            masked: true,
            initial: None,
        });
    }

    pub(super) fn submit_username(&mut self, username: String) {
        self.gate.submit_username(username);
        if self.gate.awaiting_password() {
            self.open_password_prompt();
        }
    }

    pub(super) fn submit_password(&mut self, password: String) {
        let released = self.gate.submit_password(password);
        self.sync_credentials_flag();
        if !self.gate.have_credentials() {
            return;
        }
        tracing::info!("credentials entered");
        self.dispatch(self.active, |s, ctx| s.refresh(ctx));
        if let Some(d) = released {
            self.start_operation(d.origin, d.op);
        }
    }

    /// Either prompt was dismissed: nothing is stored and parked work is dropped.
    pub(super) fn cancel_credentials(&mut self) {
        self.gate.cancel();
        self.sync_credentials_flag();
        tracing::info!("credential entry cancelled");
    }

    pub(super) fn sync_credentials_flag(&mut self) {
        self.prefs.credentials_entered = self.gate.have_credentials();
    }
}
