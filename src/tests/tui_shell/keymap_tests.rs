use super::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Focus {
    List,
    Text,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    Open,
    Submit,
    Back,
}

const TABLE: &[Binding<Focus, Action>] = &[
    (None, KeyCode::Enter, Action::Open),
    (Some(Focus::Text), KeyCode::Enter, Action::Submit),
    (None, KeyCode::Esc, Action::Back),
];

#[test]
fn focus_specific_binding_wins() {
    let keys = KeyTable::from_bindings(TABLE);
    assert_eq!(keys.len(), 3);
    assert_eq!(keys.lookup(Focus::Text, KeyCode::Enter), Some(Action::Submit));
    assert_eq!(keys.lookup(Focus::List, KeyCode::Enter), Some(Action::Open));
}

#[test]
fn screen_wide_binding_is_the_fallback() {
    let keys = KeyTable::from_bindings(TABLE);
    assert_eq!(keys.lookup(Focus::Text, KeyCode::Esc), Some(Action::Back));
    assert_eq!(keys.lookup(Focus::List, KeyCode::Char('x')), None);
}
