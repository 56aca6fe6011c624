//! Popups, prompts and menus drawn over the active screen.

use crossterm::event::KeyEvent;

use self::keymap::{ModalAction, map_modal_key};

mod draw;
mod keymap;
mod text_input_validate;

pub(super) use self::draw::draw_modal;

pub(super) fn handle_modal_key(app: &mut super::App, key: KeyEvent) {
    let (action, text_action) = {
        let Some(m) = app.modal_mut() else {
            return;
        };
        let text_action = m.text_action();
        (map_modal_key(m, key), text_action)
    };

    match action {
        ModalAction::None => {}
        ModalAction::Close => {
            app.close_modal();
            if let Some(action) = text_action {
                app.cancel_text_input(action);
            }
        }
        ModalAction::Confirm(action) => {
            app.close_modal();
            app.confirm_action(action);
        }
        ModalAction::SubmitTextInput { action, value } => {
            app.close_modal();
            app.submit_text_input(action, value);
        }
        ModalAction::Choose(label) => {
            app.close_modal();
            app.select_menu(label);
        }
    }
}
