use std::fs;

use crossterm::event::KeyModifiers;

use super::*;
use crate::executor::CommandResult;
use crate::test_support::FakeExecutor;
use crate::tui_shell::Preferences;
use crate::tui_shell::context::WorkContext;
use crate::tui_shell::presenter::PopupKind;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn workspace_with(names: &[&str]) -> tempfile::TempDir {
    let dir = tempfile::tempdir().unwrap();
    for name in names {
        fs::create_dir_all(dir.path().join(name).join(".git")).unwrap();
    }
    fs::create_dir_all(dir.path().join("not-a-repo")).unwrap();
    dir
}

fn ready_screen() -> WorkspaceScreen {
    let mut screen = WorkspaceScreen::new();
    screen.initialize();
    screen.set_initial_values();
    screen
}

#[test]
fn refresh_lists_only_git_directories_sorted() {
    let dir = workspace_with(&["zeta", "alpha"]);
    let exec = FakeExecutor::new();
    let wc = WorkContext::new(dir.path());
    let prefs = Preferences::default();
    let mut screen = ready_screen();

    let mut ctx = ScreenCtx::new(&exec, &wc, &prefs);
    screen.refresh(&mut ctx);

    assert_eq!(screen.repos.items, vec!["alpha", "zeta"]);
    assert_eq!(screen.repos.selected_item(), Some("alpha"));
    assert!(screen.summary.iter().any(|l| l == "# of Repos: 2"));
    assert!(screen.summary.iter().any(|l| l == "Credentials Not Entered"));
    assert!(ctx.into_effects().is_empty());
}

#[test]
fn enter_opens_the_selected_repository() {
    let dir = workspace_with(&["alpha", "beta"]);
    let exec = FakeExecutor::new();
    let wc = WorkContext::new(dir.path());
    let prefs = Preferences::default();
    let mut screen = ready_screen();

    let mut ctx = ScreenCtx::new(&exec, &wc, &prefs);
    screen.refresh(&mut ctx);
    screen.handle_key(key(KeyCode::Down), &mut ctx);
    screen.handle_key(key(KeyCode::Enter), &mut ctx);

    let effects = ctx.into_effects();
    assert!(matches!(effects.as_slice(), [Effect::OpenRepository(name)] if name == "beta"));
}

#[test]
fn enter_is_ignored_while_the_status_panel_has_focus() {
    let dir = workspace_with(&["alpha"]);
    let exec = FakeExecutor::new();
    let wc = WorkContext::new(dir.path());
    let prefs = Preferences::default();
    let mut screen = ready_screen();

    let mut ctx = ScreenCtx::new(&exec, &wc, &prefs);
    screen.refresh(&mut ctx);
    screen.handle_key(key(KeyCode::Tab), &mut ctx);
    assert_eq!(screen.focus, Focus::Status);
    screen.handle_key(key(KeyCode::Enter), &mut ctx);
    assert!(ctx.into_effects().is_empty());
}

#[test]
fn clone_url_becomes_a_gated_long_operation() {
    let dir = workspace_with(&[]);
    let exec = FakeExecutor::new();
    let wc = WorkContext::new(dir.path());
    let prefs = Preferences::default();
    let mut screen = ready_screen();

    let mut ctx = ScreenCtx::new(&exec, &wc, &prefs);
    screen.handle_key(key(KeyCode::Char('c')), &mut ctx);
    screen.on_text_input(
        TextInputAction::CloneUrl,
        "https://example.com/org/thing.git".to_string(),
        &mut ctx,
    );

    let effects = ctx.into_effects();
    assert_eq!(effects.len(), 2);
    assert!(matches!(
        &effects[0],
        Effect::TextInput(p) if p.action == TextInputAction::CloneUrl
    ));
    let Effect::RunLong(op) = &effects[1] else {
        panic!("expected a long operation, got {:?}", effects[1]);
    };
    assert_eq!(op.title, "Cloning");
    assert!(op.requires_credentials);
    assert!(exec.calls().is_empty());
}

#[test]
fn delete_asks_first_then_removes_and_refreshes() {
    let dir = workspace_with(&["doomed", "kept"]);
    let exec = FakeExecutor::new();
    let wc = WorkContext::new(dir.path());
    let prefs = Preferences::default();
    let mut screen = ready_screen();

    let mut ctx = ScreenCtx::new(&exec, &wc, &prefs);
    screen.refresh(&mut ctx);
    screen.handle_key(key(KeyCode::Char('D')), &mut ctx);
    let effects = ctx.into_effects();
    let [Effect::Confirm { action, .. }] = effects.as_slice() else {
        panic!("expected a confirmation, got {:?}", effects);
    };
    assert_eq!(*action, PendingAction::DeleteRepo("doomed".to_string()));
    assert!(dir.path().join("doomed").exists());

    let mut ctx = ScreenCtx::new(&exec, &wc, &prefs);
    screen.on_confirm(action.clone(), &mut ctx);
    assert!(!dir.path().join("doomed").exists());
    assert_eq!(screen.repos.items, vec!["kept"]);
    let effects = ctx.into_effects();
    assert!(matches!(
        effects.as_slice(),
        [Effect::Popup(p)] if p.kind == PopupKind::Message
    ));
}

#[test]
fn failed_status_shows_an_error_popup() {
    let dir = workspace_with(&["alpha"]);
    let exec = FakeExecutor::new();
    exec.respond("status", CommandResult::failed("fatal: broken", 128));
    let wc = WorkContext::new(dir.path());
    let prefs = Preferences::default();
    let mut screen = ready_screen();

    let mut ctx = ScreenCtx::new(&exec, &wc, &prefs);
    screen.refresh(&mut ctx);
    screen.handle_key(key(KeyCode::Char('s')), &mut ctx);

    assert_eq!(screen.panel.title, "Git Repo Status - alpha");
    let effects = ctx.into_effects();
    assert!(matches!(
        effects.as_slice(),
        [Effect::Popup(p)] if p.kind == PopupKind::Error && p.body == "fatal: broken"
    ));
}

#[test]
fn unknown_menu_label_is_unsupported() {
    let dir = workspace_with(&[]);
    let exec = FakeExecutor::new();
    let wc = WorkContext::new(dir.path());
    let prefs = Preferences::default();
    let mut screen = ready_screen();

    let mut ctx = ScreenCtx::new(&exec, &wc, &prefs);
    let err = screen.on_menu_selection("Rebase", &mut ctx).unwrap_err();
    assert!(matches!(err, crate::error::AutogitError::UnsupportedOperation(l) if l == "Rebase"));

    screen.on_menu_selection("Settings", &mut ctx).unwrap();
    assert!(matches!(
        ctx.into_effects().as_slice(),
        [Effect::Navigate(ScreenId::Settings)]
    ));
}
