use super::*;

impl App {
    /// Shows `modal` now, or after the ones already waiting.
    pub(in crate::tui_shell) fn show_modal(&mut self, modal: Modal) {
        if self.modal.is_some() {
            self.queued.push_back(modal);
        } else {
            self.modal = Some(modal);
        }
    }

    pub(in crate::tui_shell) fn show_popup(&mut self, popup: Popup) {
        let Popup { kind, title, body } = popup;
        self.show_modal(Modal {
            title,
            lines: body.lines().map(str::to_string).collect(),
            scroll: 0,
            kind: ModalKind::Message(kind),
            input: Input::default(),
        });
    }

    /// Validation and navigation problems are warnings; the rest are errors.
    pub(in crate::tui_shell) fn report(&mut self, err: &AutogitError) {
        let kind = match err {
            AutogitError::Validation(_)
            | AutogitError::UnknownScreen(_)
            | AutogitError::UnsupportedOperation(_) => PopupKind::Warning,
            _ => PopupKind::Error,
        };
        self.show_popup(Popup::new(kind, err.popup_title(), err.to_string()));
    }

    pub(in crate::tui_shell) fn open_text_input_modal(&mut self, prompt: TextPrompt) {
        let mut input = Input::default();
        if let Some(s) = prompt.initial {
            input.set(s);
        }
        self.show_modal(Modal {
            title: prompt.title,
            lines: vec!["Enter to submit; Esc to cancel.".to_string()],
            scroll: 0,
            kind: ModalKind::TextInput {
                action: prompt.action,
                prompt: prompt.prompt,
                masked: prompt.masked,
            },
            input,
        });
    }

    pub(in crate::tui_shell) fn open_confirm_modal(&mut self, prompt: String, action: PendingAction) {
        self.show_modal(Modal {
            title: "Confirm".to_string(),
            lines: vec![
                prompt,
                String::new(),
                "y / Enter - yes    n / Esc - no".to_string(),
            ],
            scroll: 0,
            kind: ModalKind::Confirm { action },
            input: Input::default(),
        });
    }

    pub(in crate::tui_shell) fn open_menu_modal(&mut self) {
        let Some(screen) = self.active_screen() else {
            return;
        };
        let choices = screen.menu_choices();
        let title = format!("{} Menu", screen.id().title());
        self.show_modal(Modal {
            title,
            lines: Vec::new(),
            scroll: 0,
            kind: ModalKind::Menu {
                choices,
                selected: 0,
            },
            input: Input::default(),
        });
    }

    pub(in crate::tui_shell) fn modal_mut(&mut self) -> Option<&mut Modal> {
        self.modal.as_mut()
    }

    /// Closes the visible modal and brings up the next waiting one.
    pub(in crate::tui_shell) fn close_modal(&mut self) {
        self.modal = self.queued.pop_front();
    }
}
