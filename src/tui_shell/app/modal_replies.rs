use super::*;

impl App {
    pub(in crate::tui_shell) fn submit_text_input(&mut self, action: TextInputAction, value: String) {
        tracing::debug!(?action, "text input submitted");
        match action {
            TextInputAction::Username => self.submit_username(value),
            TextInputAction::Password => self.submit_password(value),
            TextInputAction::CustomCommand => self.run_custom_command(&value),
            other => {
                self.dispatch(self.active, |s, ctx| s.on_text_input(other, value, ctx));
            }
        }
    }

    pub(in crate::tui_shell) fn cancel_text_input(&mut self, action: TextInputAction) {
        if matches!(action, TextInputAction::Username | TextInputAction::Password) {
            self.cancel_credentials();
        }
    }

    pub(in crate::tui_shell) fn confirm_action(&mut self, action: PendingAction) {
        self.dispatch(self.active, |s, ctx| s.on_confirm(action, ctx));
    }

    pub(in crate::tui_shell) fn select_menu(&mut self, label: &str) {
        tracing::debug!(label, screen = ?self.active, "menu selection");
        if let Some(Err(err)) = self.dispatch(self.active, |s, ctx| s.on_menu_selection(label, ctx)) {
            self.report(&err);
        }
    }

    /// Runs a typed command line in the current directory, off the
    /// interactive thread.
    fn run_custom_command(&mut self, line: &str) {
        let cmd = match GitCommand::parse(line, true) {
            Ok(cmd) => cmd,
            Err(err) => return self.report(&err),
        };
        let shown = cmd.to_string();
        let opts = PresentOptions::new("Custom Command")
            .on_success(format!("Ran {}", shown))
            .on_error(format!("Command failed: {}", shown));
        let op = PendingOperation::new("Running command", opts, move |env| {
            let cmd = cmd.in_dir(&env.cwd);
            if env.credentials.is_present() {
                env.executor.execute_with_credentials(&cmd, &env.credentials)
            } else {
                env.executor.execute(&cmd)
            }
        });
        self.run_long_operation(self.active, op);
    }
}
