use crossterm::event::{KeyCode, KeyEvent};

use super::ModalAction;

pub(super) fn handle_menu_key(
    choices: &'static [&'static str],
    selected: &mut usize,
    key: KeyEvent,
) -> ModalAction {
    match key.code {
        KeyCode::Esc | KeyCode::Char('m') => ModalAction::Close,
        KeyCode::Up => {
            *selected = selected.saturating_sub(1);
            ModalAction::None
        }
        KeyCode::Down => {
            if *selected + 1 < choices.len() {
                *selected += 1;
            }
            ModalAction::None
        }
        KeyCode::Home => {
            *selected = 0;
            ModalAction::None
        }
        KeyCode::End => {
            *selected = choices.len().saturating_sub(1);
            ModalAction::None
        }
        KeyCode::Enter => match choices.get(*selected) {
            Some(label) => ModalAction::Choose(*label),
            None => ModalAction::Close,
        },
        _ => ModalAction::None,
    }
}
