use crossterm::event::KeyModifiers;

use super::*;
use crate::logger::Logger;
use crate::test_support::FakeExecutor;
use crate::tui_shell::Preferences;
use crate::tui_shell::context::WorkContext;
use crate::tui_shell::presenter::PopupKind;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn ready_screen() -> SettingsScreen {
    let mut screen = SettingsScreen::new();
    screen.initialize();
    screen.set_initial_values();
    screen
}

#[test]
fn toggling_logs_opens_the_file_and_updates_the_status() {
    let dir = tempfile::tempdir().unwrap();
    let log = dir.path().join("logs").join("autogit.log");
    let prefs = Preferences {
        logger: Logger::new(Some(log.clone())),
        ..Preferences::default()
    };
    let exec = FakeExecutor::new();
    let wc = WorkContext::new(dir.path());
    let mut screen = ready_screen();

    let mut ctx = ScreenCtx::new(&exec, &wc, &prefs);
    screen.refresh(&mut ctx);
    assert!(screen.status[0].starts_with("Debug Logging: OFF"));

    screen.handle_key(key(KeyCode::Char('l')), &mut ctx);
    assert!(prefs.logger.is_enabled());
    assert!(log.exists());
    assert!(screen.status[0].starts_with("Debug Logging: ON"));

    screen.handle_key(key(KeyCode::Char('l')), &mut ctx);
    assert!(!prefs.logger.is_enabled());
    assert!(ctx.into_effects().is_empty());
}

#[test]
fn toggling_without_a_path_reports_an_error() {
    let prefs = Preferences::default();
    let exec = FakeExecutor::new();
    let wc = WorkContext::new("/ws");
    let mut screen = ready_screen();

    let mut ctx = ScreenCtx::new(&exec, &wc, &prefs);
    screen.handle_key(key(KeyCode::Char('l')), &mut ctx);
    assert!(!prefs.logger.is_enabled());
    assert!(matches!(
        ctx.into_effects().as_slice(),
        [Effect::Popup(p)] if p.kind == PopupKind::Error
    ));
}

#[test]
fn unwritable_log_path_is_a_permission_error() {
    let dir = tempfile::tempdir().unwrap();
    let prefs = Preferences::default();
    let exec = FakeExecutor::new();
    let wc = WorkContext::new(dir.path());
    let mut screen = ready_screen();

    let bad = dir.path().join("missing").join("x.log");
    let mut ctx = ScreenCtx::new(&exec, &wc, &prefs);
    screen.on_text_input(
        TextInputAction::LogFilePath,
        bad.display().to_string(),
        &mut ctx,
    );
    let effects = ctx.into_effects();
    assert!(matches!(
        effects.as_slice(),
        [Effect::Popup(p)] if p.title == "Permission Error"
    ));
    assert_eq!(prefs.logger.path(), None);

    let good = dir.path().join("ok.log");
    let mut ctx = ScreenCtx::new(&exec, &wc, &prefs);
    screen.on_text_input(
        TextInputAction::LogFilePath,
        good.display().to_string(),
        &mut ctx,
    );
    assert!(ctx.into_effects().is_empty());
    assert_eq!(prefs.logger.path(), Some(good));
}

#[test]
fn editor_input_sets_or_clears_through_an_effect() {
    let prefs = Preferences::default();
    let exec = FakeExecutor::new();
    let wc = WorkContext::new("/ws");
    let mut screen = ready_screen();

    let mut ctx = ScreenCtx::new(&exec, &wc, &prefs);
    screen.on_text_input(TextInputAction::EditorCommand, " code ".to_string(), &mut ctx);
    screen.on_text_input(TextInputAction::EditorCommand, "   ".to_string(), &mut ctx);
    let effects = ctx.into_effects();
    assert!(matches!(
        effects.as_slice(),
        [
            Effect::SetEditor(Some(e)),
            Effect::Popup(_),
            Effect::SetEditor(None),
            Effect::Popup(_),
        ] if e == "code"
    ));
}

#[test]
fn escape_and_backspace_go_back() {
    let prefs = Preferences::default();
    let exec = FakeExecutor::new();
    let wc = WorkContext::new("/ws");
    let mut screen = ready_screen();

    let mut ctx = ScreenCtx::new(&exec, &wc, &prefs);
    screen.handle_key(key(KeyCode::Esc), &mut ctx);
    screen.handle_key(key(KeyCode::Backspace), &mut ctx);
    assert!(matches!(
        ctx.into_effects().as_slice(),
        [Effect::Back, Effect::Back]
    ));
}
