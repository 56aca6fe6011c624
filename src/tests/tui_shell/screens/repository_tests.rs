use crossterm::event::KeyModifiers;

use super::*;
use crate::test_support::FakeExecutor;
use crate::tui_shell::Preferences;
use crate::tui_shell::context::WorkContext;
use crate::tui_shell::presenter::PopupKind;

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

fn repo_exec() -> FakeExecutor {
    let exec = FakeExecutor::new();
    exec.respond("status -s", CommandResult::ok(" M src/lib.rs\nA  README.md\n?? new.txt\n"))
        .respond("branch", CommandResult::ok("  feature\n* main\n"))
        .respond("tag", CommandResult::ok("v1.0\nv1.1\n"))
        .respond("remote", CommandResult::ok("origin\nupstream\n"))
        .respond("--no-pager log main --oneline", CommandResult::ok("abc123 second\ndef456 first\n"))
        .respond("--no-pager log feature --oneline", CommandResult::ok("fff000 topic\n"));
    exec
}

fn context() -> WorkContext {
    let mut wc = WorkContext::new("/ws");
    wc.enter_repo("proj");
    wc
}

fn ready_screen(exec: &FakeExecutor, wc: &WorkContext, prefs: &Preferences) -> RepositoryScreen {
    let mut screen = RepositoryScreen::new();
    screen.initialize();
    screen.set_initial_values();
    let mut ctx = ScreenCtx::new(exec, wc, prefs);
    screen.refresh(&mut ctx);
    assert!(ctx.into_effects().is_empty());
    screen
}

#[test]
fn refresh_fills_every_list_and_selects_the_current_branch() {
    let exec = repo_exec();
    let wc = context();
    let prefs = Preferences::default();
    let screen = ready_screen(&exec, &wc, &prefs);

    assert_eq!(screen.repo_name, "proj");
    assert_eq!(screen.files.items.len(), 3);
    assert_eq!(screen.branches.selected_item(), Some("* main"));
    assert_eq!(screen.tags.items, vec!["v1.0", "v1.1"]);
    assert_eq!(screen.remotes.selected_item(), Some("origin"));
    assert_eq!(screen.commits.items, vec!["abc123 second", "def456 first"]);

    let calls = exec.calls();
    assert!(calls.iter().all(|c| c.cwd.as_deref() == Some(std::path::Path::new("/ws/proj"))));
}

#[test]
fn a_failed_list_still_refreshes_the_others() {
    let exec = repo_exec();
    exec.respond("remote", CommandResult::failed("fatal: bad config", 128));
    let wc = context();
    let prefs = Preferences::default();
    let mut screen = RepositoryScreen::new();
    screen.initialize();

    let mut ctx = ScreenCtx::new(&exec, &wc, &prefs);
    screen.refresh(&mut ctx);

    assert!(screen.remotes.is_empty());
    assert_eq!(screen.commits.items.len(), 2);
    let effects = ctx.into_effects();
    assert!(matches!(
        effects.as_slice(),
        [Effect::Popup(p)] if p.kind == PopupKind::Error && p.title == "Cannot get git remotes"
    ));
}

#[test]
fn focus_keys_move_between_panes_and_escape_returns_to_overview() {
    let exec = repo_exec();
    let wc = context();
    let prefs = Preferences::default();
    let mut screen = ready_screen(&exec, &wc, &prefs);
    let mut ctx = ScreenCtx::new(&exec, &wc, &prefs);

    assert_eq!(screen.focus, RepoFocus::Overview);
    screen.handle_key(key(KeyCode::Char('f')), &mut ctx);
    assert_eq!(screen.focus, RepoFocus::AddFiles);
    screen.handle_key(key(KeyCode::Char('b')), &mut ctx);
    assert_eq!(screen.focus, RepoFocus::Branches(BranchMode::Branches));
    screen.handle_key(key(KeyCode::Char('t')), &mut ctx);
    assert_eq!(screen.focus, RepoFocus::Branches(BranchMode::Tags));
    screen.handle_key(key(KeyCode::Char('t')), &mut ctx);
    assert_eq!(screen.focus, RepoFocus::Branches(BranchMode::Branches));
    screen.handle_key(key(KeyCode::Char('r')), &mut ctx);
    assert_eq!(screen.focus, RepoFocus::Remotes);
    screen.handle_key(key(KeyCode::Esc), &mut ctx);
    assert_eq!(screen.focus, RepoFocus::Overview);
    assert!(ctx.into_effects().is_empty());
}

#[test]
fn escape_from_overview_goes_back_to_the_workspace() {
    let exec = repo_exec();
    let wc = context();
    let prefs = Preferences::default();
    let mut screen = ready_screen(&exec, &wc, &prefs);

    let mut ctx = ScreenCtx::new(&exec, &wc, &prefs);
    screen.handle_key(key(KeyCode::Esc), &mut ctx);
    assert!(matches!(
        ctx.into_effects().as_slice(),
        [Effect::Navigate(ScreenId::Workspace)]
    ));
}

#[test]
fn toggling_to_tags_follows_the_selected_tag() {
    let exec = repo_exec();
    exec.respond("--no-pager log v1.0 --oneline", CommandResult::ok("aaa tagged\n"));
    let wc = context();
    let prefs = Preferences::default();
    let mut screen = ready_screen(&exec, &wc, &prefs);
    let mut ctx = ScreenCtx::new(&exec, &wc, &prefs);

    screen.handle_key(key(KeyCode::Char('b')), &mut ctx);
    screen.handle_key(key(KeyCode::Char('t')), &mut ctx);
    assert_eq!(screen.commits.items, vec!["aaa tagged"]);

    screen.handle_key(key(KeyCode::Enter), &mut ctx);
    assert!(exec.call_lines().contains(&"checkout v1.0".to_string()));
}

#[test]
fn moving_the_branch_selection_reloads_commits() {
    let exec = repo_exec();
    let wc = context();
    let prefs = Preferences::default();
    let mut screen = ready_screen(&exec, &wc, &prefs);
    let mut ctx = ScreenCtx::new(&exec, &wc, &prefs);

    screen.handle_key(key(KeyCode::Char('b')), &mut ctx);
    screen.handle_key(key(KeyCode::Up), &mut ctx);
    assert_eq!(screen.selected_branch().as_deref(), Some("feature"));
    assert_eq!(screen.commits.items, vec!["fff000 topic"]);
}

#[test]
fn enter_on_a_file_stages_or_unstages_it() {
    let exec = repo_exec();
    let wc = context();
    let prefs = Preferences::default();
    let mut screen = ready_screen(&exec, &wc, &prefs);
    let mut ctx = ScreenCtx::new(&exec, &wc, &prefs);

    screen.handle_key(key(KeyCode::Char('f')), &mut ctx);
    screen.handle_key(key(KeyCode::Enter), &mut ctx);
    screen.handle_key(key(KeyCode::Down), &mut ctx);
    screen.handle_key(key(KeyCode::Enter), &mut ctx);

    let lines = exec.call_lines();
    assert!(lines.contains(&"add -- src/lib.rs".to_string()));
    assert!(lines.contains(&"reset HEAD -- README.md".to_string()));
    assert!(ctx.into_effects().is_empty());
}

#[test]
fn commit_box_captures_letters_and_rejects_blank_messages() {
    let exec = repo_exec();
    let wc = context();
    let prefs = Preferences::default();
    let mut screen = ready_screen(&exec, &wc, &prefs);

    let mut ctx = ScreenCtx::new(&exec, &wc, &prefs);
    screen.handle_key(key(KeyCode::Char('c')), &mut ctx);
    assert!(screen.captures_text());
    screen.handle_key(key(KeyCode::Char(' ')), &mut ctx);
    screen.handle_key(key(KeyCode::Enter), &mut ctx);
    let effects = ctx.into_effects();
    assert!(matches!(
        effects.as_slice(),
        [Effect::Popup(p)] if p.kind == PopupKind::Warning
    ));
    assert!(!exec.call_lines().iter().any(|l| l.starts_with("commit")));

    let mut ctx = ScreenCtx::new(&exec, &wc, &prefs);
    screen.handle_key(key(KeyCode::Backspace), &mut ctx);
    for c in "fix a".chars() {
        screen.handle_key(key(KeyCode::Char(c)), &mut ctx);
    }
    assert_eq!(screen.focus, RepoFocus::Commit);
    screen.handle_key(key(KeyCode::Enter), &mut ctx);

    assert!(exec.call_lines().contains(&"commit -m fix a".to_string()));
    assert_eq!(screen.message.buf, "");
    assert_eq!(screen.focus, RepoFocus::Overview);
    assert_eq!(screen.panel.title, "Git Log");
}

#[test]
fn push_is_a_gated_operation_on_the_selected_remote_and_branch() {
    let exec = repo_exec();
    let wc = context();
    let prefs = Preferences::default();
    let mut screen = ready_screen(&exec, &wc, &prefs);

    let mut ctx = ScreenCtx::new(&exec, &wc, &prefs);
    screen.handle_key(key(KeyCode::Char('p')), &mut ctx);
    screen.handle_key(key(KeyCode::Char('l')), &mut ctx);
    let effects = ctx.into_effects();
    let [Effect::RunLong(push), Effect::RunLong(pull)] = effects.as_slice() else {
        panic!("expected two long operations, got {:?}", effects);
    };
    assert_eq!(push.title, "Pushing");
    assert!(push.requires_credentials);
    assert_eq!(push.present.success_message, "Pushed Successfully");
    assert_eq!(pull.title, "Pulling");
    assert!(pull.requires_credentials);
    assert!(!exec.call_lines().iter().any(|l| l.starts_with("push")));
}

#[test]
fn push_without_remotes_warns_instead() {
    let exec = repo_exec();
    exec.respond("remote", CommandResult::ok(""));
    let wc = context();
    let prefs = Preferences::default();
    let mut screen = ready_screen(&exec, &wc, &prefs);

    let mut ctx = ScreenCtx::new(&exec, &wc, &prefs);
    screen.handle_key(key(KeyCode::Char('p')), &mut ctx);
    assert!(matches!(
        ctx.into_effects().as_slice(),
        [Effect::Popup(p)] if p.kind == PopupKind::Warning
    ));
}

#[test]
fn remote_spec_must_have_a_name_and_url() {
    let exec = repo_exec();
    let wc = context();
    let prefs = Preferences::default();
    let mut screen = ready_screen(&exec, &wc, &prefs);

    let mut ctx = ScreenCtx::new(&exec, &wc, &prefs);
    screen.on_text_input(TextInputAction::RemoteSpec, "origin".to_string(), &mut ctx);
    assert!(matches!(
        ctx.into_effects().as_slice(),
        [Effect::Popup(p)] if p.kind == PopupKind::Warning
    ));

    let mut ctx = ScreenCtx::new(&exec, &wc, &prefs);
    screen.on_text_input(
        TextInputAction::RemoteSpec,
        "backup https://example.com/r.git".to_string(),
        &mut ctx,
    );
    assert!(
        exec.call_lines()
            .contains(&"remote add backup https://example.com/r.git".to_string())
    );
}

#[test]
fn external_editor_needs_a_configured_command() {
    let exec = repo_exec();
    let wc = context();
    let mut prefs = Preferences::default();
    let mut screen = ready_screen(&exec, &wc, &prefs);

    let mut ctx = ScreenCtx::new(&exec, &wc, &prefs);
    screen.handle_key(key(KeyCode::Char('e')), &mut ctx);
    assert!(matches!(
        ctx.into_effects().as_slice(),
        [Effect::Popup(p)] if p.kind == PopupKind::Error
    ));

    prefs.editor = Some("code".to_string());
    let mut ctx = ScreenCtx::new(&exec, &wc, &prefs);
    screen.handle_key(key(KeyCode::Char('e')), &mut ctx);
    assert!(matches!(
        ctx.into_effects().as_slice(),
        [Effect::Popup(p)] if p.kind == PopupKind::Message
    ));
}
