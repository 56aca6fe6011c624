use crossterm::event::{KeyCode, KeyEvent};

use super::super::{Modal, ModalKind, PendingAction, TextInputAction};
use self::errors::append_modal_error;
use self::input::apply_input_edit_key;
use self::menu::handle_menu_key;
use self::viewer::handle_viewer_like_key;
use super::text_input_validate::{allow_empty_text_input, normalize_text_input, validate_text_input};

mod errors;
mod input;
mod menu;
mod viewer;

pub(super) enum ModalAction {
    None,
    Close,
    Confirm(PendingAction),
    SubmitTextInput {
        action: TextInputAction,
        value: String,
    },
    Choose(&'static str),
}

pub(super) fn map_modal_key(modal: &mut Modal, key: KeyEvent) -> ModalAction {
    match &mut modal.kind {
        ModalKind::Message(_) => handle_viewer_like_key(modal, key),

        ModalKind::Menu { choices, selected } => handle_menu_key(*choices, selected, key),

        ModalKind::TextInput { action, .. } => {
            let action = *action;
            match key.code {
                KeyCode::Esc => ModalAction::Close,
                KeyCode::Enter => {
                    let raw = normalize_text_input(action, &modal.input.buf);
                    if raw.is_empty() && !allow_empty_text_input(action) {
                        append_modal_error(modal, "value required".to_string());
                        return ModalAction::None;
                    }

                    match validate_text_input(action, &raw) {
                        Ok(()) => ModalAction::SubmitTextInput { action, value: raw },
                        Err(msg) => {
                            append_modal_error(modal, msg);
                            ModalAction::None
                        }
                    }
                }
                _ => {
                    apply_input_edit_key(modal, key);
                    ModalAction::None
                }
            }
        }

        ModalKind::Confirm { action } => match key.code {
            KeyCode::Esc | KeyCode::Char('n') | KeyCode::Char('N') => ModalAction::Close,
            KeyCode::Enter | KeyCode::Char('y') | KeyCode::Char('Y') => {
                ModalAction::Confirm(action.clone())
            }
            _ => handle_viewer_like_key(modal, key),
        },
    }
}
