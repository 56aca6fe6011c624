use super::*;

impl App {
    pub(in crate::tui_shell) fn apply_effects(&mut self, origin: ScreenId, effects: Vec<Effect>) {
        for effect in effects {
            self.apply_effect(origin, effect);
        }
    }

    fn apply_effect(&mut self, origin: ScreenId, effect: Effect) {
        let nav = match effect {
            Effect::Popup(popup) => {
                self.show_popup(popup);
                Ok(())
            }
            Effect::Navigate(id) => self.activate(id),
            Effect::Back => self.back(),
            Effect::OpenRepository(name) => self.open_repository(name),
            Effect::RunLong(op) => {
                self.run_long_operation(origin, op);
                Ok(())
            }
            Effect::RequestCredentials => {
                self.request_credentials();
                Ok(())
            }
            Effect::TextInput(prompt) => {
                self.open_text_input_modal(prompt);
                Ok(())
            }
            Effect::Confirm { prompt, action } => {
                self.open_confirm_modal(prompt, action);
                Ok(())
            }
            Effect::ShowMenu => {
                self.open_menu_modal();
                Ok(())
            }
            Effect::SetEditor(editor) => {
                tracing::info!(editor = ?editor, "external editor changed");
                self.prefs.editor = editor;
                self.dispatch(self.active, |s, ctx| s.refresh(ctx));
                Ok(())
            }
            Effect::Quit => {
                self.quit = true;
                Ok(())
            }
        };
        if let Err(err) = nav {
            tracing::warn!(error = %err, "navigation failed");
            self.report(&err);
        }
    }
}
