use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::error::AutogitResult;
use crate::git;

use crate::tui_shell::effects::{Effect, PendingAction, ScreenCtx, TextInputAction};
use crate::tui_shell::keymap::{Binding, KeyTable};
use crate::tui_shell::panel::{InfoPanel, SelectList, title_color};
use crate::tui_shell::presenter::PresentOptions;
use crate::tui_shell::runner::PendingOperation;
use crate::tui_shell::screen::common_menu_selection;
use crate::tui_shell::{RenderCtx, ScreenController, ScreenId, render_screen_chrome};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Focus {
    Repos,
    Status,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    Up,
    Down,
    SwitchFocus,
    Open,
    ShowStatus,
    Clone,
    Create,
    Delete,
    Refresh,
    Menu,
}

const KEYS: &[Binding<Focus, Action>] = &[
    (None, KeyCode::Up, Action::Up),
    (None, KeyCode::Down, Action::Down),
    (None, KeyCode::Tab, Action::SwitchFocus),
    (None, KeyCode::Char('m'), Action::Menu),
    (None, KeyCode::Char('c'), Action::Clone),
    (None, KeyCode::Char('n'), Action::Create),
    (None, KeyCode::F(5), Action::Refresh),
    (Some(Focus::Repos), KeyCode::Enter, Action::Open),
    (Some(Focus::Repos), KeyCode::Char('s'), Action::ShowStatus),
    (Some(Focus::Repos), KeyCode::Delete, Action::Delete),
    (Some(Focus::Repos), KeyCode::Char('D'), Action::Delete),
    (Some(Focus::Status), KeyCode::Esc, Action::SwitchFocus),
];

const MENU: &[&str] = &[
    "Clone Repository",
    "New Repository",
    "Refresh",
    "About",
    "Enter Credentials",
    "Settings",
    "Custom Command",
    "Exit",
];

/// Lists the repositories below the workspace root.
pub(in crate::tui_shell) struct WorkspaceScreen {
    keys: Option<KeyTable<Focus, Action>>,
    focus: Focus,
    repos: SelectList,
    root: String,
    summary: Vec<String>,
    panel: InfoPanel,
}

impl WorkspaceScreen {
    pub(in crate::tui_shell) fn new() -> Self {
        Self {
            keys: None,
            focus: Focus::Repos,
            repos: SelectList::default(),
            root: String::new(),
            summary: Vec::new(),
            panel: InfoPanel::new("Git Repo Status"),
        }
    }

    fn summary_lines(&self, ctx: &ScreenCtx<'_>) -> Vec<String> {
        let prefs = ctx.prefs();
        vec![
            "Current directory:".to_string(),
            ctx.workspace_root().display().to_string(),
            String::new(),
            format!("# of Repos: {}", self.repos.items.len()),
            String::new(),
            if prefs.credentials_entered {
                "Credentials Entered".to_string()
            } else {
                "Credentials Not Entered".to_string()
            },
            String::new(),
            match &prefs.editor {
                Some(editor) => format!("Editor: {}", editor),
                None => "No Editor Specified.".to_string(),
            },
        ]
    }

    fn show_status(&mut self, ctx: &mut ScreenCtx<'_>) {
        let Some(name) = self.repos.selected_item().map(|s| s.to_string()) else {
            return;
        };
        let res = git::status(ctx.exec(), &ctx.workspace_root().join(&name));
        if !res.is_success() {
            ctx.error("Unable to get git status!", res.text.trim());
        }
        self.panel
            .set(format!("Git Repo Status - {}", name), &res.text);
    }

    fn ask_delete(&mut self, ctx: &mut ScreenCtx<'_>) {
        if let Some(name) = self.repos.selected_item() {
            ctx.confirm(
                format!("Are you sure you want to delete {}?", name),
                PendingAction::DeleteRepo(name.to_string()),
            );
        }
    }

    fn clone_repo(&mut self, url: String, ctx: &mut ScreenCtx<'_>) {
        let opts = PresentOptions::new("Clone")
            .on_success("Cloned new repository")
            .on_error("Unable to clone repository!");
        let op = PendingOperation::new("Cloning", opts, move |env| {
            git::clone(env.executor.as_ref(), &env.cwd, &url, &env.credentials)
        })
        .gated();
        ctx.run_long(op);
    }

    fn create_repo(&mut self, name: String, ctx: &mut ScreenCtx<'_>) {
        let res = git::init_new_repo(ctx.exec(), ctx.workspace_root(), &name);
        let opts = PresentOptions::new("New Repository")
            .on_success("Created new repository")
            .on_error("Unable to create new repository!");
        ctx.present(&res, &opts, &mut self.panel);
        self.refresh(ctx);
        if res.is_success()
            && let Some(idx) = self.repos.items.iter().position(|r| *r == name)
        {
            self.repos.select(idx);
        }
    }
}

fn ask_clone(ctx: &mut ScreenCtx<'_>) {
    ctx.prompt("Clone Repository", "URL: ", TextInputAction::CloneUrl, None);
}

fn ask_create(ctx: &mut ScreenCtx<'_>) {
    ctx.prompt("New Repository", "Name: ", TextInputAction::NewRepoName, None);
}

impl ScreenController for WorkspaceScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Workspace
    }

    fn initialize(&mut self) {
        let keys = KeyTable::from_bindings(KEYS);
        tracing::debug!(bindings = keys.len(), "workspace keys ready");
        self.keys = Some(keys);
    }

    fn set_initial_values(&mut self) {
        self.focus = Focus::Repos;
    }

    fn refresh(&mut self, ctx: &mut ScreenCtx<'_>) {
        let repos = git::find_repos_in_path(ctx.exec(), ctx.workspace_root());
        self.repos.set_items(repos);
        self.root = ctx.workspace_root().display().to_string();
        self.summary = self.summary_lines(ctx);
    }

    fn clear(&mut self) {
        self.repos.clear();
        self.root.clear();
        self.summary.clear();
        self.panel.clear();
    }

    fn help_text(&self) -> &'static str {
        "Open - Enter | Status - s | Clone - c | New - n | Delete - D | Menu - m | Quit - q"
    }

    fn menu_choices(&self) -> &'static [&'static str] {
        MENU
    }

    fn on_menu_selection(&mut self, label: &str, ctx: &mut ScreenCtx<'_>) -> AutogitResult<()> {
        match label {
            "Clone Repository" => ask_clone(ctx),
            "New Repository" => ask_create(ctx),
            "Refresh" => self.refresh(ctx),
            other => return common_menu_selection(other, &mut self.panel, ctx),
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &mut ScreenCtx<'_>) {
        let Some(action) = self
            .keys
            .as_ref()
            .and_then(|k| k.lookup(self.focus, key.code))
        else {
            return;
        };

        match action {
            Action::Up => match self.focus {
                Focus::Repos => self.repos.move_up(),
                Focus::Status => self.panel.scroll_up(),
            },
            Action::Down => match self.focus {
                Focus::Repos => self.repos.move_down(),
                Focus::Status => self.panel.scroll_down(),
            },
            Action::SwitchFocus => {
                self.focus = match self.focus {
                    Focus::Repos => Focus::Status,
                    Focus::Status => Focus::Repos,
                }
            }
            Action::Open => {
                if let Some(name) = self.repos.selected_item() {
                    ctx.push(Effect::OpenRepository(name.to_string()));
                }
            }
            Action::ShowStatus => self.show_status(ctx),
            Action::Clone => ask_clone(ctx),
            Action::Create => ask_create(ctx),
            Action::Delete => self.ask_delete(ctx),
            Action::Refresh => self.refresh(ctx),
            Action::Menu => ctx.push(Effect::ShowMenu),
        }
    }

    fn on_text_input(&mut self, action: TextInputAction, value: String, ctx: &mut ScreenCtx<'_>) {
        match action {
            TextInputAction::CloneUrl => self.clone_repo(value, ctx),
            TextInputAction::NewRepoName => self.create_repo(value, ctx),
            other => tracing::warn!(action = ?other, "workspace ignores text input"),
        }
    }

    fn on_confirm(&mut self, action: PendingAction, ctx: &mut ScreenCtx<'_>) {
        let PendingAction::DeleteRepo(name) = action else {
            return;
        };
        let res = git::remove_repo_tree(&ctx.workspace_root().join(&name));
        let opts = PresentOptions::new("Delete")
            .on_success(format!("Deleted {}", name))
            .on_error("Unable to delete repository!");
        ctx.present(&res, &opts, &mut self.panel);
        self.refresh(ctx);
    }

    fn info_panel_mut(&mut self) -> &mut InfoPanel {
        &mut self.panel
    }

    fn render(&self, frame: &mut ratatui::Frame, area: Rect, ctx: &RenderCtx) {
        let inner = render_screen_chrome(frame, "Workspace", &self.root, area);
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(inner);
        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(10)])
            .split(cols[0]);

        self.repos
            .render(frame, left[0], "Repos in Workspace", self.focus == Focus::Repos);
        frame.render_widget(
            Paragraph::new(self.summary.join("\n"))
                .wrap(Wrap { trim: false })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title("Current Status")
                        .border_style(ratatui::style::Style::default().fg(title_color(false))),
                ),
            left[1],
        );
        self.panel
            .render(frame, cols[1], self.focus == Focus::Status, ctx);
    }
}

#[cfg(test)]
#[path = "../../tests/tui_shell/screens/workspace_tests.rs"]
mod tests;
