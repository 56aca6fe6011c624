//! Controls for a single repository: files, branches, remotes and commits.

mod keys;
mod render;

use std::path::PathBuf;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;

use crate::error::{AutogitError, AutogitResult};
use crate::executor::CommandResult;
use crate::git;
use crate::tui_shell::effects::{Effect, ScreenCtx, TextInputAction};
use crate::tui_shell::input::Input;
use crate::tui_shell::keymap::KeyTable;
use crate::tui_shell::panel::{InfoPanel, SelectList};
use crate::tui_shell::presenter::PresentOptions;
use crate::tui_shell::runner::PendingOperation;
use crate::tui_shell::screen::common_menu_selection;
use crate::tui_shell::{RenderCtx, ScreenController, ScreenId};

use self::keys::{Action, BranchMode, KEYS, MENU, Pane, RepoFocus};

pub(in crate::tui_shell) struct RepositoryScreen {
    keys: Option<KeyTable<Pane, Action>>,
    focus: RepoFocus,
    repo_name: String,
    files: SelectList,
    branches: SelectList,
    tags: SelectList,
    remotes: SelectList,
    commits: SelectList,
    message: Input,
    panel: InfoPanel,
}

impl RepositoryScreen {
    pub(in crate::tui_shell) fn new() -> Self {
        Self {
            keys: None,
            focus: RepoFocus::Overview,
            repo_name: String::new(),
            files: SelectList::default(),
            branches: SelectList::default(),
            tags: SelectList::default(),
            remotes: SelectList::default(),
            commits: SelectList::default(),
            message: Input::default(),
            panel: InfoPanel::new("Git Info"),
        }
    }

    fn branch_mode(&self) -> BranchMode {
        match self.focus {
            RepoFocus::Branches(mode) => mode,
            _ => BranchMode::Branches,
        }
    }

    fn selected_branch(&self) -> Option<String> {
        self.branches
            .selected_item()
            .map(|line| git::branch_name(line).to_string())
    }

    /// The branch or tag the ref-based views follow.
    fn selected_ref(&self) -> Option<String> {
        match self.branch_mode() {
            BranchMode::Branches => self.selected_branch(),
            BranchMode::Tags => self.tags.selected_item().map(|t| t.trim().to_string()),
        }
    }

    fn selected_remote(&self) -> Option<String> {
        self.remotes.selected_item().map(|r| r.trim().to_string())
    }

    fn load_lines(ctx: &mut ScreenCtx<'_>, res: CommandResult, what: &str) -> Option<Vec<String>> {
        if res.is_success() {
            Some(res.lines())
        } else {
            ctx.error(format!("Cannot get git {}", what), res.text.trim());
            None
        }
    }

    fn refresh_files(&mut self, ctx: &mut ScreenCtx<'_>) {
        let res = git::status_short(ctx.exec(), &ctx.cwd());
        if let Some(lines) = Self::load_lines(ctx, res, "status") {
            self.files.set_items(lines);
        }
    }

    fn refresh_branches(&mut self, ctx: &mut ScreenCtx<'_>) {
        let res = git::branches(ctx.exec(), &ctx.cwd());
        if let Some(lines) = Self::load_lines(ctx, res, "branches") {
            let first_load = self.branches.is_empty();
            let current = git::current_branch_index(&lines);
            self.branches.set_items(lines);
            if first_load && let Some(idx) = current {
                self.branches.select(idx);
            }
        }
        let res = git::tags(ctx.exec(), &ctx.cwd());
        if let Some(lines) = Self::load_lines(ctx, res, "tags") {
            self.tags.set_items(lines);
        }
    }

    fn refresh_remotes(&mut self, ctx: &mut ScreenCtx<'_>) {
        let res = git::remotes(ctx.exec(), &ctx.cwd());
        if let Some(lines) = Self::load_lines(ctx, res, "remotes") {
            self.remotes.set_items(lines);
        }
    }

    fn refresh_commits(&mut self, ctx: &mut ScreenCtx<'_>) {
        let Some(refname) = self.selected_ref() else {
            self.commits.clear();
            return;
        };
        let res = git::recent_commits(ctx.exec(), &ctx.cwd(), &refname);
        if let Some(lines) = Self::load_lines(ctx, res, "recent commits") {
            self.commits.set_items(lines);
        }
    }

    /// Puts a read-only command's output into the info panel.
    fn show_output(&mut self, ctx: &mut ScreenCtx<'_>, res: CommandResult, title: String, err: &str) {
        if res.is_success() {
            self.panel.set(title, &res.text);
        } else {
            ctx.error(err, res.text.trim());
        }
    }

    fn run_local(
        &mut self,
        ctx: &mut ScreenCtx<'_>,
        res: CommandResult,
        opts: PresentOptions,
    ) {
        ctx.present(&res, &opts, &mut self.panel);
        self.refresh(ctx);
    }

    fn add_all(&mut self, ctx: &mut ScreenCtx<'_>) {
        let res = git::add_all(ctx.exec(), &ctx.cwd());
        self.run_local(ctx, res, PresentOptions::new("Add").quiet().on_error("Git Add Error"));
    }

    fn add_or_revert(&mut self, ctx: &mut ScreenCtx<'_>) {
        let Some(line) = self.files.selected_item().map(str::to_string) else {
            return;
        };
        let path = git::status_path(&line);
        let res = if git::status_is_unstaged(&line) {
            git::add_file(ctx.exec(), &ctx.cwd(), path)
        } else {
            git::reset_file(ctx.exec(), &ctx.cwd(), path)
        };
        let opts = PresentOptions::new("Add/Revert")
            .quiet()
            .on_error(format!("Cannot add/revert file {}", path));
        self.run_local(ctx, res, opts);
    }

    fn diff_repo(&mut self, ctx: &mut ScreenCtx<'_>) {
        let res = git::diff(ctx.exec(), &ctx.cwd());
        self.show_output(ctx, res, "Git Diff".to_string(), "Unable to show git diff repo.");
    }

    fn diff_file(&mut self, ctx: &mut ScreenCtx<'_>) {
        let Some(line) = self.files.selected_item().map(str::to_string) else {
            return;
        };
        let path = git::status_path(&line);
        let res = git::diff_file(ctx.exec(), &ctx.cwd(), path);
        self.show_output(
            ctx,
            res,
            format!("Git Diff - {}", path),
            &format!("Unable to show git diff for file {}.", path),
        );
    }

    fn show_log(&mut self, ctx: &mut ScreenCtx<'_>) {
        let Some(refname) = self.selected_ref() else {
            return;
        };
        let res = git::log(ctx.exec(), &ctx.cwd(), &refname);
        self.show_output(
            ctx,
            res,
            "Git Log".to_string(),
            &format!("Unable to show git log for branch {}.", refname),
        );
    }

    fn checkout(&mut self, ctx: &mut ScreenCtx<'_>) {
        let Some(refname) = self.selected_ref() else {
            return;
        };
        let res = git::checkout(ctx.exec(), &ctx.cwd(), &refname);
        let opts = PresentOptions::new("Checkout")
            .quiet()
            .on_error(format!("Cannot checkout {}", refname));
        self.run_local(ctx, res, opts);
    }

    fn stash(&mut self, ctx: &mut ScreenCtx<'_>, pop: bool) {
        let (res, name) = if pop {
            (git::stash_pop(ctx.exec(), &ctx.cwd()), "Stash Pop")
        } else {
            (git::stash_all(ctx.exec(), &ctx.cwd()), "Stash")
        };
        let opts = PresentOptions::new(name).on_error(format!("{} failed!", name));
        self.run_local(ctx, res, opts);
    }

    fn commit(&mut self, ctx: &mut ScreenCtx<'_>) {
        let message = self.message.buf.trim().to_string();
        if message.is_empty() {
            ctx.report(&AutogitError::Validation(
                "no commit message entered".to_string(),
            ));
            return;
        }
        let res = git::commit(ctx.exec(), &ctx.cwd(), &message);
        let opts = PresentOptions::new("Commit")
            .on_success(format!("Committed: {}", message))
            .on_error("Commit failed!");
        ctx.present(&res, &opts, &mut self.panel);
        if res.is_success() {
            self.message.clear();
            self.focus = RepoFocus::Overview;
        }
        self.refresh(ctx);
        if res.is_success() {
            self.show_log(ctx);
        }
    }

    /// Push and pull both need a remote plus the selected branch.
    fn remote_and_branch(&self, ctx: &mut ScreenCtx<'_>) -> Option<(String, String)> {
        let Some(remote) = self.selected_remote() else {
            ctx.warning("No Remote", "Add or select a remote first.");
            return None;
        };
        let Some(branch) = self.selected_branch() else {
            ctx.warning("No Branch", "No branch is selected.");
            return None;
        };
        Some((remote, branch))
    }

    fn push(&mut self, ctx: &mut ScreenCtx<'_>) {
        let Some((remote, branch)) = self.remote_and_branch(ctx) else {
            return;
        };
        let opts = PresentOptions::new("Push")
            .on_success("Pushed Successfully")
            .on_error("Unable to push to remote!");
        let op = PendingOperation::new("Pushing", opts, move |env| {
            git::push(env.executor.as_ref(), &env.cwd, &remote, &branch, &env.credentials)
        })
        .gated();
        ctx.run_long(op);
    }

    fn pull(&mut self, ctx: &mut ScreenCtx<'_>) {
        let Some((remote, branch)) = self.remote_and_branch(ctx) else {
            return;
        };
        let opts = PresentOptions::new("Pull")
            .on_success("Pulled branch")
            .on_error("Failed to pull from remote");
        let op = PendingOperation::new("Pulling", opts, move |env| {
            git::pull(env.executor.as_ref(), &env.cwd, &remote, &branch, &env.credentials)
        })
        .gated();
        ctx.run_long(op);
    }

    fn remote_info(&mut self, ctx: &mut ScreenCtx<'_>) {
        let Some(remote) = self.selected_remote() else {
            return;
        };
        let opts = PresentOptions::new(format!("{} remote info", remote))
            .on_error("Cannot get remote info");
        let op = PendingOperation::new("Fetching remote info", opts, move |env| {
            git::remote_info(env.executor.as_ref(), &env.cwd, &remote, &env.credentials)
        });
        ctx.run_long(op);
    }

    fn open_external_editor(&mut self, ctx: &mut ScreenCtx<'_>) {
        let Some(editor) = ctx.prefs().editor.clone() else {
            ctx.error("Error", "No default editor specified.");
            return;
        };
        let target: PathBuf = ctx.cwd();
        let res = git::open_editor(ctx.exec(), &editor, &target);
        let opts = PresentOptions::new("Editor")
            .on_success(format!("Opened {}", target.display()))
            .on_error("Failed to open editor.");
        ctx.present(&res, &opts, &mut self.panel);
    }

    fn create_branch(&mut self, raw: &str, ctx: &mut ScreenCtx<'_>) {
        let name = match git::validate_name("Branch name", raw) {
            Ok(name) => name,
            Err(err) => return ctx.report(&err),
        };
        let res = git::create_branch(ctx.exec(), &ctx.cwd(), &name);
        let opts = PresentOptions::new("New Branch")
            .on_success(format!("Created branch {}", name))
            .on_error(format!("Cannot create branch {}", name));
        self.run_local(ctx, res, opts);
        if let Some(idx) = git::current_branch_index(&self.branches.items) {
            self.branches.select(idx);
        }
    }

    fn add_remote(&mut self, raw: &str, ctx: &mut ScreenCtx<'_>) {
        let parts: Vec<&str> = raw.split_whitespace().collect();
        let [name, url] = parts.as_slice() else {
            return ctx.report(&AutogitError::Validation(
                "remote must be entered as `name url`".to_string(),
            ));
        };
        let res = git::add_remote(ctx.exec(), &ctx.cwd(), name, url);
        let opts = PresentOptions::new("Add Remote")
            .on_success(format!("Added remote {}", name))
            .on_error("Unable to add remote!");
        self.run_local(ctx, res, opts);
    }

    fn move_selection(&mut self, down: bool, ctx: &mut ScreenCtx<'_>) {
        let list = match self.focus {
            RepoFocus::Overview | RepoFocus::Commit => {
                if down {
                    self.panel.scroll_down();
                } else {
                    self.panel.scroll_up();
                }
                return;
            }
            RepoFocus::AddFiles => &mut self.files,
            RepoFocus::Branches(BranchMode::Branches) => &mut self.branches,
            RepoFocus::Branches(BranchMode::Tags) => &mut self.tags,
            RepoFocus::Remotes => &mut self.remotes,
        };
        if down {
            list.move_down();
        } else {
            list.move_up();
        }
        if matches!(self.focus, RepoFocus::Branches(_)) {
            self.refresh_commits(ctx);
        }
    }

    /// Plain editing keys while the commit box has focus. Returns true when
    /// the key was consumed.
    fn edit_message(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }
        match key.code {
            KeyCode::Char(c) => self.message.insert_char(c),
            KeyCode::Backspace => self.message.backspace(),
            KeyCode::Delete => self.message.delete(),
            KeyCode::Left => self.message.move_left(),
            KeyCode::Right => self.message.move_right(),
            KeyCode::Home => self.message.move_home(),
            KeyCode::End => self.message.move_end(),
            _ => return false,
        }
        true
    }

    fn dispatch(&mut self, action: Action, ctx: &mut ScreenCtx<'_>) {
        match action {
            Action::FocusFiles => self.focus = RepoFocus::AddFiles,
            Action::FocusBranches => self.focus = RepoFocus::Branches(BranchMode::Branches),
            Action::FocusRemotes => self.focus = RepoFocus::Remotes,
            Action::FocusCommit => self.focus = RepoFocus::Commit,
            Action::Escape => {
                if self.focus == RepoFocus::Overview {
                    ctx.navigate(ScreenId::Workspace);
                } else {
                    let was_tags = self.branch_mode() == BranchMode::Tags;
                    self.focus = RepoFocus::Overview;
                    if was_tags {
                        self.refresh_commits(ctx);
                    }
                }
            }
            Action::Up => self.move_selection(false, ctx),
            Action::Down => self.move_selection(true, ctx),
            Action::AddAll => self.add_all(ctx),
            Action::DiffRepo => self.diff_repo(ctx),
            Action::DiffFile => self.diff_file(ctx),
            Action::Push => self.push(ctx),
            Action::Pull => self.pull(ctx),
            Action::Stash => self.stash(ctx, false),
            Action::StashPop => self.stash(ctx, true),
            Action::ExternalEditor => self.open_external_editor(ctx),
            Action::InternalEditor => ctx.navigate(ScreenId::Editor),
            Action::Log => self.show_log(ctx),
            Action::Menu => ctx.push(Effect::ShowMenu),
            Action::Refresh => self.refresh(ctx),
            Action::AddOrRevert => self.add_or_revert(ctx),
            Action::Checkout => self.checkout(ctx),
            Action::NewBranch => ctx.prompt(
                "New Branch",
                "Branch name: ",
                TextInputAction::BranchName,
                None,
            ),
            Action::ToggleMode => {
                self.focus = RepoFocus::Branches(self.branch_mode().toggled());
                self.refresh_commits(ctx);
            }
            Action::RemoteInfo => self.remote_info(ctx),
            Action::NewRemote => ctx.prompt(
                "Add Remote",
                "Name and URL: ",
                TextInputAction::RemoteSpec,
                None,
            ),
            Action::Commit => self.commit(ctx),
        }
    }
}

impl ScreenController for RepositoryScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Repository
    }

    fn initialize(&mut self) {
        let keys = KeyTable::from_bindings(KEYS);
        tracing::debug!(bindings = keys.len(), "repository keys ready");
        self.keys = Some(keys);
    }

    fn set_initial_values(&mut self) {
        self.focus = RepoFocus::Overview;
        self.message.clear();
    }

    fn refresh(&mut self, ctx: &mut ScreenCtx<'_>) {
        self.repo_name = ctx.context().repo().unwrap_or_default().to_string();
        self.refresh_files(ctx);
        self.refresh_branches(ctx);
        self.refresh_remotes(ctx);
        self.refresh_commits(ctx);
    }

    fn clear(&mut self) {
        self.files.clear();
        self.branches.clear();
        self.tags.clear();
        self.remotes.clear();
        self.commits.clear();
        self.message.clear();
        self.panel.clear();
    }

    fn help_text(&self) -> &'static str {
        keys::help_for(self.focus)
    }

    fn menu_choices(&self) -> &'static [&'static str] {
        MENU
    }

    fn on_menu_selection(&mut self, label: &str, ctx: &mut ScreenCtx<'_>) -> AutogitResult<()> {
        match label {
            "Add All" => self.add_all(ctx),
            "Diff" => self.diff_repo(ctx),
            "Log" => self.show_log(ctx),
            "Stash" => self.stash(ctx, false),
            "Stash Pop" => self.stash(ctx, true),
            "Push" => self.push(ctx),
            "Pull" => self.pull(ctx),
            "Open Internal Editor" => ctx.navigate(ScreenId::Editor),
            "Open External Editor" => self.open_external_editor(ctx),
            "Back to Workspace" => ctx.navigate(ScreenId::Workspace),
            other => return common_menu_selection(other, &mut self.panel, ctx),
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &mut ScreenCtx<'_>) {
        if self.focus == RepoFocus::Commit && self.edit_message(key) {
            return;
        }
        let Some(action) = self
            .keys
            .as_ref()
            .and_then(|k| k.lookup(self.focus.pane(), key.code))
        else {
            return;
        };
        self.dispatch(action, ctx);
    }

    fn captures_text(&self) -> bool {
        self.focus == RepoFocus::Commit
    }

    fn on_text_input(&mut self, action: TextInputAction, value: String, ctx: &mut ScreenCtx<'_>) {
        match action {
            TextInputAction::BranchName => self.create_branch(&value, ctx),
            TextInputAction::RemoteSpec => self.add_remote(&value, ctx),
            other => tracing::warn!(action = ?other, "repository ignores text input"),
        }
    }

    fn info_panel_mut(&mut self) -> &mut InfoPanel {
        &mut self.panel
    }

    fn render(&self, frame: &mut ratatui::Frame, area: Rect, ctx: &RenderCtx) {
        self.draw(frame, area, ctx);
    }
}

#[cfg(test)]
#[path = "../../../tests/tui_shell/screens/repository_tests.rs"]
mod tests;
