use super::*;

#[derive(Debug)]
pub(in crate::tui_shell) struct Modal {
    pub(in crate::tui_shell) title: String,
    pub(in crate::tui_shell) lines: Vec<String>,
    pub(in crate::tui_shell) scroll: usize,
    pub(in crate::tui_shell) kind: ModalKind,
    pub(in crate::tui_shell) input: Input,
}

#[derive(Debug)]
pub(in crate::tui_shell) enum ModalKind {
    Message(PopupKind),
    Confirm {
        action: PendingAction,
    },
    TextInput {
        action: TextInputAction,
        prompt: String,
        masked: bool,
    },
    Menu {
        choices: &'static [&'static str],
        selected: usize,
    },
}

impl Modal {
    pub(in crate::tui_shell) fn text_action(&self) -> Option<TextInputAction> {
        match &self.kind {
            ModalKind::TextInput { action, .. } => Some(*action),
            _ => None,
        }
    }
}
