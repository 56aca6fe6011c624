//! A small built-in text editor rooted at the current repository.

mod buffer;
mod render;

use std::fs;
use std::path::{Path, PathBuf};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::layout::Rect;

use crate::error::AutogitResult;
use crate::tui_shell::effects::{Effect, PendingAction, ScreenCtx, TextInputAction};
use crate::tui_shell::keymap::{Binding, KeyTable};
use crate::tui_shell::panel::{InfoPanel, SelectList};
use crate::tui_shell::screen::common_menu_selection;
use crate::tui_shell::{RenderCtx, ScreenController, ScreenId};

use self::buffer::EditBuffer;

const DIR_PREFIX: &str = "<DIR> ";
const PARENT_ENTRY: &str = "<DIR> ..";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
enum Focus {
    Files,
    Buffer,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    Up,
    Down,
    Open,
    Delete,
    NewFile,
    OpenDirectory,
    SwitchFocus,
    Menu,
    Back,
}

const KEYS: &[Binding<Focus, Action>] = &[
    (None, KeyCode::Tab, Action::SwitchFocus),
    (Some(Focus::Files), KeyCode::Up, Action::Up),
    (Some(Focus::Files), KeyCode::Down, Action::Down),
    (Some(Focus::Files), KeyCode::Enter, Action::Open),
    (Some(Focus::Files), KeyCode::Delete, Action::Delete),
    (Some(Focus::Files), KeyCode::Char('n'), Action::NewFile),
    (Some(Focus::Files), KeyCode::Char('o'), Action::OpenDirectory),
    (Some(Focus::Files), KeyCode::Char('m'), Action::Menu),
    (Some(Focus::Files), KeyCode::Esc, Action::Back),
    (Some(Focus::Files), KeyCode::Backspace, Action::Back),
    (Some(Focus::Buffer), KeyCode::Esc, Action::SwitchFocus),
];

const MENU: &[&str] = &[
    "Save File",
    "New File",
    "Open Directory",
    "About",
    "Enter Credentials",
    "Settings",
    "Custom Command",
    "Exit",
];

pub(in crate::tui_shell) struct EditorScreen {
    keys: Option<KeyTable<Focus, Action>>,
    focus: Focus,
    dir: Option<PathBuf>,
    files: SelectList,
    opened: Option<PathBuf>,
    buffer: EditBuffer,
    panel: InfoPanel,
}

impl EditorScreen {
    pub(in crate::tui_shell) fn new() -> Self {
        Self {
            keys: None,
            focus: Focus::Files,
            dir: None,
            files: SelectList::default(),
            opened: None,
            buffer: EditBuffer::default(),
            panel: InfoPanel::new("Editor Info"),
        }
    }

    fn current_dir(&self, ctx: &ScreenCtx<'_>) -> PathBuf {
        self.dir.clone().unwrap_or_else(|| ctx.cwd())
    }

    fn list_dir(&mut self, dir: &Path, ctx: &mut ScreenCtx<'_>) {
        let entries = match fs::read_dir(dir) {
            Ok(entries) => entries,
            Err(err) => {
                ctx.error("Cannot list directory", format!("{}: {}", dir.display(), err));
                return;
            }
        };
        let mut dirs = Vec::new();
        let mut files = Vec::new();
        for entry in entries.flatten() {
            let name = entry.file_name().to_string_lossy().to_string();
            if entry.path().is_dir() {
                dirs.push(format!("{}{}", DIR_PREFIX, name));
            } else {
                files.push(name);
            }
        }
        dirs.sort();
        files.sort();

        let mut items = vec![PARENT_ENTRY.to_string()];
        items.extend(dirs);
        items.extend(files);
        self.files.set_items(items);
        self.dir = Some(dir.to_path_buf());
    }

    fn open_directory(&mut self, raw: &str, ctx: &mut ScreenCtx<'_>) {
        let base = self.current_dir(ctx);
        let target = match raw.trim() {
            "" => base,
            t => base.join(t),
        };
        if !target.exists() {
            ctx.error(
                "Does not exist",
                format!("ERROR - {} path does not exist", target.display()),
            );
            return;
        }
        if !target.is_dir() {
            ctx.error(
                "Not a Dir",
                format!("ERROR - {} is not a directory", target.display()),
            );
            return;
        }
        let target = target.canonicalize().unwrap_or(target);
        self.files.clear();
        self.list_dir(&target, ctx);
    }

    fn open_selected(&mut self, ctx: &mut ScreenCtx<'_>) {
        let Some(item) = self.files.selected_item().map(str::to_string) else {
            return;
        };
        if let Some(name) = item.strip_prefix(DIR_PREFIX) {
            self.open_directory(name, ctx);
            return;
        }
        let path = self.current_dir(ctx).join(&item);
        match fs::read_to_string(&path) {
            Ok(text) => {
                self.buffer = EditBuffer::from_text(&text);
                self.opened = Some(path);
                self.focus = Focus::Buffer;
            }
            Err(err) => {
                tracing::debug!(path = %path.display(), error = %err, "open failed");
                ctx.warning(
                    "Not a text file",
                    "The selected file could not be opened - not a text file",
                );
            }
        }
    }

    fn new_file(&mut self, raw: &str, ctx: &mut ScreenCtx<'_>) {
        let name = raw.trim();
        if name.is_empty() {
            ctx.warning("Validation Error", "file name cannot be empty");
            return;
        }
        let path = self.current_dir(ctx).join(name);
        if !self.files.items.iter().any(|i| i == name) {
            self.files.push(name.to_string());
        }
        self.buffer = EditBuffer::default();
        self.buffer.dirty = true;
        self.opened = Some(path);
        self.focus = Focus::Buffer;
    }

    fn save(&mut self, ctx: &mut ScreenCtx<'_>) {
        let Some(path) = self.opened.clone() else {
            ctx.error("No File Opened", "Please open a file before saving it.");
            return;
        };
        match fs::write(&path, self.buffer.text()) {
            Ok(()) => {
                self.buffer.dirty = false;
                ctx.message(
                    "Saved",
                    format!("Your file has been saved as {}", path.display()),
                );
            }
            Err(err) => ctx.error("OS Error", format!("{}: {}", path.display(), err)),
        }
    }

    fn ask_delete(&mut self, ctx: &mut ScreenCtx<'_>) {
        let Some(item) = self.files.selected_item().map(str::to_string) else {
            return;
        };
        if item.starts_with(DIR_PREFIX) {
            ctx.warning("Not a File", "Only files can be deleted here.");
            return;
        }
        let path = self.current_dir(ctx).join(&item);
        ctx.confirm(
            format!("Are you sure you want to delete {}?", item),
            PendingAction::DeleteFile(path),
        );
    }

    fn delete_file(&mut self, path: PathBuf, ctx: &mut ScreenCtx<'_>) {
        if let Err(err) = fs::remove_file(&path) {
            ctx.error("OS Error", format!("{}: {}", path.display(), err));
            return;
        }
        if self.opened.as_deref() == Some(path.as_path()) {
            self.opened = None;
            self.buffer = EditBuffer::default();
        }
        let dir = self.current_dir(ctx);
        self.list_dir(&dir, ctx);
    }

    fn edit(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return false;
        }
        match key.code {
            KeyCode::Char(c) => self.buffer.insert_char(c),
            KeyCode::Enter => self.buffer.insert_newline(),
            KeyCode::Backspace => self.buffer.backspace(),
            KeyCode::Delete => self.buffer.delete(),
            KeyCode::Left => self.buffer.move_left(),
            KeyCode::Right => self.buffer.move_right(),
            KeyCode::Up => self.buffer.move_up(),
            KeyCode::Down => self.buffer.move_down(),
            KeyCode::Home => self.buffer.move_home(),
            KeyCode::End => self.buffer.move_end(),
            _ => return false,
        }
        true
    }

    fn ask_new_file(ctx: &mut ScreenCtx<'_>) {
        ctx.prompt("Add New File", "File name: ", TextInputAction::NewFileName, None);
    }

    fn ask_open_directory(&self, ctx: &mut ScreenCtx<'_>) {
        let current = self.dir.as_ref().map(|d| d.display().to_string());
        ctx.prompt(
            "Open Directory",
            "Directory: ",
            TextInputAction::OpenDirectory,
            current,
        );
    }
}

impl ScreenController for EditorScreen {
    fn id(&self) -> ScreenId {
        ScreenId::Editor
    }

    fn initialize(&mut self) {
        self.keys = Some(KeyTable::from_bindings(KEYS));
    }

    fn set_initial_values(&mut self) {
        self.focus = Focus::Files;
        self.dir = None;
    }

    fn refresh(&mut self, ctx: &mut ScreenCtx<'_>) {
        let dir = self.current_dir(ctx);
        self.list_dir(&dir, ctx);
    }

    fn clear(&mut self) {
        self.files.clear();
        self.opened = None;
        self.buffer = EditBuffer::default();
        self.panel.clear();
    }

    fn help_text(&self) -> &'static str {
        match self.focus {
            Focus::Files => {
                "Open - Enter | New File - n | Open Dir - o | Delete - Del | Edit - Tab | Save - Ctrl-s | Back - Esc"
            }
            Focus::Buffer => "Save - Ctrl-s | Files - Esc/Tab",
        }
    }

    fn menu_choices(&self) -> &'static [&'static str] {
        MENU
    }

    fn on_menu_selection(&mut self, label: &str, ctx: &mut ScreenCtx<'_>) -> AutogitResult<()> {
        match label {
            "Save File" => self.save(ctx),
            "New File" => Self::ask_new_file(ctx),
            "Open Directory" => self.ask_open_directory(ctx),
            other => return common_menu_selection(other, &mut self.panel, ctx),
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent, ctx: &mut ScreenCtx<'_>) {
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('s') {
            self.save(ctx);
            return;
        }
        if self.focus == Focus::Buffer && self.edit(key) {
            return;
        }
        let Some(action) = self.keys.as_ref().and_then(|k| k.lookup(self.focus, key.code)) else {
            return;
        };
        match action {
            Action::Up => self.files.move_up(),
            Action::Down => self.files.move_down(),
            Action::Open => self.open_selected(ctx),
            Action::Delete => self.ask_delete(ctx),
            Action::NewFile => Self::ask_new_file(ctx),
            Action::OpenDirectory => self.ask_open_directory(ctx),
            Action::SwitchFocus => {
                self.focus = match self.focus {
                    Focus::Files => Focus::Buffer,
                    Focus::Buffer => Focus::Files,
                }
            }
            Action::Menu => ctx.push(Effect::ShowMenu),
            Action::Back => ctx.push(Effect::Back),
        }
    }

    fn captures_text(&self) -> bool {
        self.focus == Focus::Buffer
    }

    fn on_text_input(&mut self, action: TextInputAction, value: String, ctx: &mut ScreenCtx<'_>) {
        match action {
            TextInputAction::NewFileName => self.new_file(&value, ctx),
            TextInputAction::OpenDirectory => self.open_directory(&value, ctx),
            other => tracing::warn!(action = ?other, "editor ignores text input"),
        }
    }

    fn on_confirm(&mut self, action: PendingAction, ctx: &mut ScreenCtx<'_>) {
        match action {
            PendingAction::DeleteFile(path) => self.delete_file(path, ctx),
            other => tracing::warn!(action = ?other, "editor ignores confirmation"),
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
#[path = "../../../tests/tui_shell/screens/editor_tests.rs"]
mod tests;
