use super::super::runner::Completion;
use super::*;

impl App {
    /// Starts `op` off the interactive thread, asking for credentials first
    /// when it needs them. Rejected while another operation is running.
    pub(in crate::tui_shell) fn run_long_operation(&mut self, origin: ScreenId, op: PendingOperation) {
        if let Err(busy) = self.runner.ensure_idle() {
            self.show_popup(Popup::new(
                PopupKind::Warning,
                "Operation in progress",
                format!("{} is still running; wait for it to finish.", busy.running),
            ));
            return;
        }
        if !op.requires_credentials {
            self.start_operation(origin, op);
            return;
        }
        match self.gate.require(Deferred { origin, op }) {
            Gate::Ready(d) => self.start_operation(d.origin, d.op),
            Gate::Prompting => {
                tracing::debug!("operation parked until credentials are entered");
                self.sync_credentials_flag();
                self.open_username_prompt();
            }
            Gate::Busy(d) => {
                tracing::warn!(operation = %d.op.title, "credential entry already in progress");
                self.show_popup(Popup::new(
                    PopupKind::Warning,
                    "Credentials",
                    "Finish entering credentials first.",
                ));
            }
        }
    }

    fn job_env(&self) -> JobEnv {
        JobEnv {
            executor: Arc::clone(&self.executor),
            cwd: self.context.cwd(),
            credentials: self.gate.credentials().clone(),
        }
    }

    pub(in crate::tui_shell) fn start_operation(&mut self, origin: ScreenId, op: PendingOperation) {
        let env = self.job_env();
        if let Err(busy) = self.runner.run(origin, op, env) {
            self.show_popup(Popup::new(
                PopupKind::Warning,
                "Operation in progress",
                format!("{} is still running; wait for it to finish.", busy.running),
            ));
        }
    }

    /// Called every tick. Returns true when an operation finished.
    pub(in crate::tui_shell) fn poll_operation(&mut self) -> bool {
        match self.runner.poll() {
            Some(done) => {
                self.finish_operation(done);
                true
            }
            None => false,
        }
    }

    /// Routes the result into the originating screen, then refreshes it.
    fn finish_operation(&mut self, done: Completion) {
        let Completion {
            origin,
            title,
            present,
            result,
            elapsed,
        } = done;
        tracing::debug!(operation = %title, ok = result.is_success(), ?elapsed, "presenting result");
        self.dispatch(origin, |s, ctx| {
            ctx.present(&result, &present, s.info_panel_mut());
            s.refresh(ctx);
        });
    }
}
