use super::*;

#[test]
fn quiet_success_with_empty_text_shows_nothing() {
    let out = present(&CommandResult::ok(""), &PresentOptions::new("Status").quiet());
    assert_eq!(out, Presentation::default());
}

#[test]
fn quiet_success_ignores_multi_line_text_too() {
    let out = present(
        &CommandResult::ok("a\nb\nc"),
        &PresentOptions::new("Log").quiet(),
    );
    assert_eq!(out.popup, None);
    assert_eq!(out.panel, None);
}

#[test]
fn multi_line_failure_points_at_panel_and_marks_lines() {
    let opts = PresentOptions::new("X").on_error("Err");
    let out = present(&CommandResult::failed("line1\nline2", 1), &opts);

    let popup = out.popup.unwrap();
    assert_eq!(popup.kind, PopupKind::Error);
    assert_eq!(popup.title, "Err");
    assert_eq!(popup.body, "Check Info Box For X Output");
    assert!(!popup.body.contains("line1"));

    let panel = out.panel.unwrap();
    assert_eq!(panel.title, "X Output");
    assert_eq!(panel.text, "- line1\n- line2");
}

#[test]
fn single_line_failure_shows_text_in_popup_only() {
    let opts = PresentOptions::new("Push").on_error("Unable to push");
    let out = present(&CommandResult::failed("  rejected  \n", 128), &opts);

    let popup = out.popup.unwrap();
    assert_eq!(popup.title, "Unable to push");
    assert_eq!(popup.body, "rejected");
    assert_eq!(out.panel, None);
}

#[test]
fn empty_failure_text_falls_back_to_error_message() {
    let opts = PresentOptions::new("Push").on_error("Unable to push");
    let out = present(&CommandResult::failed("", 1), &opts);
    assert_eq!(out.popup.unwrap().body, "Unable to push");
    assert_eq!(out.panel, None);
}

#[test]
fn single_line_success_uses_stripped_text() {
    let opts = PresentOptions::new("Clone").on_success("Cloned");
    let out = present(&CommandResult::ok("done\n"), &opts);

    let popup = out.popup.unwrap();
    assert_eq!(popup.kind, PopupKind::Message);
    assert_eq!(popup.title, "Cloned");
    assert_eq!(popup.body, "done");
    assert_eq!(out.panel.unwrap().text, "done\n");
}

#[test]
fn empty_success_text_uses_success_message_and_skips_panel() {
    let opts = PresentOptions::new("Stash").on_success("Stashed");
    let out = present(&CommandResult::ok(""), &opts);
    assert_eq!(out.popup.unwrap().body, "Stashed");
    assert_eq!(out.panel, None);
}

#[test]
fn multi_line_success_writes_raw_text_to_panel() {
    let opts = PresentOptions::new("Push").on_success("Pushed");
    let out = present(&CommandResult::ok("To origin\n  main -> main"), &opts);

    assert_eq!(out.popup.unwrap().body, "Check Info Box For Push Output");
    let panel = out.panel.unwrap();
    assert_eq!(panel.title, "Push Output");
    assert_eq!(panel.text, "To origin\n  main -> main");
}
