use std::path::Path;

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use crate::error::AutogitResult;
use crate::metadata::MetadataStore;
use crate::tui_shell::effects::{Effect, ScreenCtx, TextInputAction};
use crate::tui_shell::keymap::{Binding, KeyTable};
use crate::tui_shell::panel::{InfoPanel, title_color};
use crate::tui_shell::screen::common_menu_selection;
use crate::tui_shell::{RenderCtx, ScreenController, ScreenId, render_screen_chrome};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    ToggleLogs,
    SetLogPath,
    SetEditor,
    ShowInfo,
    Up,
    Down,
    Menu,
    Back,
}

/// The settings screen has a single focus.
const KEYS: &[Binding<(), Action>] = &[
    (None, KeyCode::Char('l'), Action::ToggleLogs),
    (None, KeyCode::Char('p'), Action::SetLogPath),
    (None, KeyCode::Char('e'), Action::SetEditor),
    (None, KeyCode::Char('i'), Action::ShowInfo),
    (None, KeyCode::Up, Action::Up),
    (None, KeyCode::Down, Action::Down),
    (None, KeyCode::Char('m'), Action::Menu),
    (None, KeyCode::Esc, Action::Back),
    (None, KeyCode::Backspace, Action::Back),
];

const MENU: &[&str] = &[
    "Toggle Logging",
    "Set Log File",
    "Set Editor",
    "Settings Info",
    "About",
    "Enter Credentials",
    "Custom Command",
    "Exit",
];

pub(in crate::tui_shell) struct SettingsScreen {
    keys: Option<KeyTable<(), Action>>,
    status: Vec<String>,
    panel: InfoPanel,
}

impl SettingsScreen {
    pub(in crate::tui_shell) fn new() -> Self {
        Self {
            keys: None,
            status: Vec::new(),
            panel: InfoPanel::new("Settings Info Panel"),
        }
    }

    fn status_lines(ctx: &ScreenCtx<'_>) -> Vec<String> {
        let prefs = ctx.prefs();
        let logger = &prefs.logger;
        let path = logger
            .path()
            .map(|p| p.display().to_string())
            .unwrap_or_else(|| "<no log file>".to_string());
        vec![
            format!(
                "Debug Logging: {} - {}",
                if logger.is_enabled() { "ON" } else { "OFF" },
                path
            ),
            format!(
                "External Editor: {}",
                prefs.editor.as_deref().unwrap_or("<not set>")
            ),
        ]
    }

    fn toggle_logging(&mut self, ctx: &mut ScreenCtx<'_>) {
        match ctx.prefs().logger.toggle() {
            Ok(on) => tracing::info!(enabled = on, "debug logging toggled"),
            Err(err) => ctx.error("Logging Error", format!("{:#}", err)),
        }
        self.refresh(ctx);
    }

    fn set_log_path(&mut self, raw: &str, ctx: &mut ScreenCtx<'_>) {
        match ctx.prefs().logger.set_path(Path::new(raw.trim())) {
            Ok(()) => tracing::info!(path = raw.trim(), "log file changed"),
            Err(_) => ctx.error(
                "Permission Error",
                "The log file path either does not exist, or you do not have write permissions!",
            ),
        }
        self.refresh(ctx);
    }

    fn set_editor(&mut self, raw: &str, ctx: &mut ScreenCtx<'_>) {
        let editor = raw.trim();
        if editor.is_empty() {
            ctx.push(Effect::SetEditor(None));
            ctx.message("Editor Cleared", "No external editor is set.");
        } else {
            ctx.push(Effect::SetEditor(Some(editor.to_string())));
            ctx.message("Editor Set", format!("External editor set to {}", editor));
        }
    }

    fn show_info(&mut self, ctx: &mut ScreenCtx<'_>) {
        let store = MetadataStore::new(ctx.workspace_root());
        let mut lines = crate::about_lines();
        lines.push(String::new());
        lines.push(format!("Workspace: {}", ctx.workspace_root().display()));
        lines.push(format!("Settings file: {}", store.file().display()));
        lines.extend(Self::status_lines(ctx));
        self.panel.set_lines("Settings Info", lines);
    }

    fn ask_editor(ctx: &mut ScreenCtx<'_>) {
        ctx.prompt(
            "External Editor",
            "Command (empty clears): ",
            TextInputAction::EditorCommand,
            ctx.prefs().editor.clone(),
        );
    }

    fn ask_log_path(ctx: &mut ScreenCtx<'_>) {
        let current = ctx.prefs().logger.path().map(|p| p.display().to_string());
        ctx.prompt(
            "Log File",
            "Please enter a new log file path: ",
            TextInputAction::LogFilePath,
            current,
        );
    }
}

impl ScreenController for SettingsScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Settings
    }

    fn initialize(&mut self) {
        self.keys = Some(KeyTable::from_bindings(KEYS));
    }

    fn set_initial_values(&mut self) {}

    fn refresh(&mut self, ctx: &mut ScreenCtx<'_>) {
        self.status = Self::status_lines(ctx);
    }

    fn clear(&mut self) {
        self.status.clear();
        self.panel.clear();
    }

    fn help_text(&self) -> &'static str {
        "Toggle Logs - l | Log File - p | Editor - e | Info - i | Menu - m | Back - Esc"
    }

    fn menu_choices(&self) -> &'static [&'static str] {
        MENU
    }

    fn on_menu_selection(&mut self, label: &str, ctx: &mut ScreenCtx<'_>) -> AutogitResult<()> {
        match label {
            "Toggle Logging" => self.toggle_logging(ctx),
            "Set Log File" => Self::ask_log_path(ctx),
            "Set Editor" => Self::ask_editor(ctx),
            "Settings Info" => self.show_info(ctx),
            other => return common_menu_selection(other, &mut self.panel, ctx),
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &mut ScreenCtx<'_>) {
        let Some(action) = self.keys.as_ref().and_then(|k| k.lookup((), key.code)) else {
            return;
        };
        match action {
            Action::ToggleLogs => self.toggle_logging(ctx),
            Action::SetLogPath => Self::ask_log_path(ctx),
            Action::SetEditor => Self::ask_editor(ctx),
            Action::ShowInfo => self.show_info(ctx),
            Action::Up => self.panel.scroll_up(),
            Action::Down => self.panel.scroll_down(),
            Action::Menu => ctx.push(Effect::ShowMenu),
            Action::Back => ctx.push(Effect::Back),
        }
    }

    fn on_text_input(&mut self, action: TextInputAction, value: String, ctx: &mut ScreenCtx<'_>) {
        match action {
            TextInputAction::LogFilePath => self.set_log_path(&value, ctx),
            TextInputAction::EditorCommand => self.set_editor(&value, ctx),
            other => tracing::warn!(action = ?other, "settings ignores text input"),
        }
    }

    fn info_panel_mut(&mut self) -> &mut InfoPanel {
        &mut self.panel
    }

    fn render(&self, frame: &mut ratatui::Frame, area: Rect, ctx: &RenderCtx) {
        let inner = render_screen_chrome(
            frame,
            "Settings",
            &format!("{} v{}", crate::NAME, crate::VERSION),
            area,
        );
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(4), Constraint::Min(3)])
            .split(inner);
        frame.render_widget(
            Paragraph::new(self.status.join("\n"))
                .wrap(Wrap { trim: false })
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .title("Current Settings")
                        .border_style(ratatui::style::Style::default().fg(title_color(true))),
                ),
            rows[0],
        );
        self.panel.render(frame, rows[1], false, ctx);
    }
}

#[cfg(test)]
#[path = "../../tests/tui_shell/screens/settings_tests.rs"]
mod tests;
