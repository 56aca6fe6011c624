use super::*;

#[test]
fn only_the_editor_command_may_be_empty() {
    assert!(allow_empty_text_input(TextInputAction::EditorCommand));
    assert!(!allow_empty_text_input(TextInputAction::BranchName));
    assert!(!allow_empty_text_input(TextInputAction::Password));
}

#[test]
fn passwords_keep_surrounding_spaces() {
    assert_eq!(normalize_text_input(TextInputAction::Password, " pw "), " pw ");
    assert_eq!(normalize_text_input(TextInputAction::Username, " bob "), "bob");
}

#[test]
fn names_urls_and_remote_specs_are_checked() {
    assert!(validate_text_input(TextInputAction::BranchName, "topic").is_ok());
    assert!(validate_text_input(TextInputAction::BranchName, "two words").is_err());
    assert!(validate_text_input(TextInputAction::CloneUrl, "https://host/org/proj.git").is_ok());
    assert!(validate_text_input(TextInputAction::CloneUrl, "https://host/org/.git").is_err());
    assert_eq!(
        validate_text_input(TextInputAction::RemoteSpec, "origin").unwrap_err(),
        "format: <name> <url>"
    );
    assert!(validate_text_input(TextInputAction::RemoteSpec, "origin https://host/p.git").is_ok());
}
