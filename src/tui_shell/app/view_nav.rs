use super::*;

impl App {
    fn screen_index(&self, id: ScreenId) -> Option<usize> {
        self.screens.iter().position(|s| s.id() == id)
    }

    pub(in crate::tui_shell) fn active_screen(&self) -> Option<&dyn ScreenController> {
        self.screen_index(self.active)
            .map(|i| self.screens[i].as_ref())
    }

    /// Runs `f` against one screen, then applies the effects it produced.
    pub(in crate::tui_shell) fn dispatch<R>(
        &mut self,
        id: ScreenId,
        f: impl FnOnce(&mut dyn ScreenController, &mut ScreenCtx<'_>) -> R,
    ) -> Option<R> {
        let idx = self.screen_index(id)?;
        let (out, effects) = {
            let mut ctx = ScreenCtx::new(self.executor.as_ref(), &self.context, &self.prefs);
            let out = f(self.screens[idx].as_mut(), &mut ctx);
            (out, ctx.into_effects())
        };
        self.apply_effects(id, effects);
        Some(out)
    }

    /// Deactivates the current screen and activates `id`.
    pub(in crate::tui_shell) fn activate(&mut self, id: ScreenId) -> AutogitResult<()> {
        self.transition(id, false).map(|_| ())
    }

    /// Switches screens; `Ok(false)` when the switch was refused while busy.
    /// Forward moves into Settings or Editor push the origin onto the return
    /// stack, returning moves never do.
    fn transition(&mut self, id: ScreenId, returning: bool) -> AutogitResult<bool> {
        if self.screen_index(id).is_none() {
            return Err(AutogitError::UnknownScreen(id.title().to_string()));
        }
        if let Some((running, _)) = self.runner.indicator() {
            let body = format!("Wait for {} to finish before switching screens.", running);
            self.show_popup(Popup::new(PopupKind::Warning, "Operation in progress", body));
            return Ok(false);
        }

        let old = self.active;
        if let Some(i) = self.screen_index(old) {
            self.screens[i].clear();
        }
        match id {
            ScreenId::Workspace => {
                self.context.leave_repo();
                self.return_stack.clear();
            }
            ScreenId::Repository => {
                if let Some(repo) = self.pending_repo.take() {
                    self.context.enter_repo(repo);
                }
                if !returning {
                    self.return_stack.clear();
                }
            }
            ScreenId::Settings | ScreenId::Editor if !returning => {
                // Revisiting a screen already on the stack unwinds to it.
                if let Some(pos) = self.return_stack.iter().position(|s| *s == id) {
                    self.return_stack.truncate(pos);
                } else if old != id {
                    self.return_stack.push(old);
                }
            }
            ScreenId::Settings | ScreenId::Editor => {}
        }
        self.active = id;
        tracing::info!(from = ?old, to = ?id, cwd = %self.context.cwd().display(), "screen activated");

        self.dispatch(id, |s, ctx| {
            s.set_initial_values();
            s.refresh(ctx);
        });
        Ok(true)
    }

    pub(in crate::tui_shell) fn open_repository(&mut self, name: String) -> AutogitResult<()> {
        self.pending_repo = Some(name);
        self.activate(ScreenId::Repository)
    }

    /// Returns from Settings or Editor to the screen they were opened from.
    pub(in crate::tui_shell) fn back(&mut self) -> AutogitResult<()> {
        let to = self.return_stack.last().copied().unwrap_or(ScreenId::Workspace);
        if self.transition(to, true)? {
            self.return_stack.pop();
        }
        Ok(())
    }

    pub(in crate::tui_shell) fn header_title(&self) -> String {
        match (self.active, self.context.repo()) {
            (ScreenId::Workspace, _) | (_, None) => self.active.title().to_string(),
            (screen, Some(repo)) => format!("{} - {}", screen.title(), repo),
        }
    }
}
