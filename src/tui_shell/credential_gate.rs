use crate::credentials::Credentials;

/// Outcome of [`CredentialGate::require`].
#[derive(Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum Gate<A> {
    /// Credentials are present; run the action now.
    Ready(A),
    /// The action is parked until both prompts are answered.
    Prompting,
    /// Another entry flow already owns the prompt; the action is handed back.
    Busy(A),
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
enum Step {
    #[default]
    Idle,
    Username,
    Password {
        username: String,
    },
}

/// Holds the session credentials and parks work that needs them.
///
/// A parked action is released at most once, and only after both the username
/// and the password have been supplied.
#[derive(Debug)]
pub(in crate::tui_shell) struct CredentialGate<A> {
    credentials: Credentials,
    step: Step,
    waiting: Option<A>,
}

impl<A> Default for CredentialGate<A> {
    fn default() -> Self {
        Self {
            credentials: Credentials::None,
            step: Step::Idle,
            waiting: None,
        }
    }
}

impl<A> CredentialGate<A> {
    pub(in crate::tui_shell) fn have_credentials(&self) -> bool {
        self.credentials.is_present()
    }

    pub(in crate::tui_shell) fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    pub(in crate::tui_shell) fn is_prompting(&self) -> bool {
        self.step != Step::Idle
    }

    pub(in crate::tui_shell) fn awaiting_password(&self) -> bool {
        matches!(self.step, Step::Password { .. })
    }

    pub(in crate::tui_shell) fn require(&mut self, action: A) -> Gate<A> {
        if self.have_credentials() {
            return Gate::Ready(action);
        }
        if self.is_prompting() {
            return Gate::Busy(action);
        }
        self.begin_entry(Some(action));
        Gate::Prompting
    }

    /// Starts a fresh entry flow. Stored credentials are discarded first, even
    /// if the new flow is later cancelled.
    pub(in crate::tui_shell) fn begin_entry(&mut self, then: Option<A>) {
        self.credentials = Credentials::None;
        self.step = Step::Username;
        self.waiting = then;
    }

    pub(in crate::tui_shell) fn submit_username(&mut self, username: impl Into<String>) {
        if self.step == Step::Username {
            self.step = Step::Password {
                username: username.into(),
            };
        }
    }

    /// Completes the flow. Returns the parked action, if any.
    pub(in crate::tui_shell) fn submit_password(&mut self, password: impl Into<String>) -> Option<A> {
        if !self.awaiting_password() {
            return None;
        }
        let Step::Password { username } = std::mem::take(&mut self.step) else {
            return None;
        };
        self.credentials = Credentials::pair(username, password);
        self.waiting.take()
    }

    /// Aborts the flow at either step; the parked action is dropped.
    pub(in crate::tui_shell) fn cancel(&mut self) {
        self.credentials = Credentials::None;
        self.step = Step::Idle;
        self.waiting = None;
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/credential_gate_tests.rs"]
mod tests;
