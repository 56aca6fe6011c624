//! Requests a screen hands back to the navigation layer.

use std::path::{Path, PathBuf};

use crate::error::AutogitError;
use crate::executor::{CommandExecutor, CommandResult};
use crate::logger::Logger;

use super::ScreenId;
use super::context::WorkContext;
use super::panel::InfoPanel;
use super::presenter::{Popup, PopupKind, PresentOptions, present};
use super::runner::PendingOperation;

/// Every free-text prompt, routed back to its owner on submit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum TextInputAction {
    Username,
    Password,
    CustomCommand,
    CloneUrl,
    NewRepoName,
    BranchName,
    RemoteSpec,
    LogFilePath,
    EditorCommand,
    NewFileName,
    OpenDirectory,
}

/// Destructive actions that wait for a yes/no answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum PendingAction {
    DeleteRepo(String),
    DeleteFile(PathBuf),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) struct TextPrompt {
    pub(in crate::tui_shell) title: String,
    pub(in crate::tui_shell) prompt: String,
    pub(in crate::tui_shell) action: TextInputAction,
    pub(in crate::tui_shell) masked: bool,
    pub(in crate::tui_shell) initial: Option<String>,
}

#[derive(Debug)]
pub(in crate::tui_shell) enum Effect {
    Popup(Popup),
    Navigate(ScreenId),
    /// Return to the screen this one was opened from.
    Back,
    OpenRepository(String),
    RunLong(PendingOperation),
    RequestCredentials,
    TextInput(TextPrompt),
    Confirm {
        prompt: String,
        action: PendingAction,
    },
    ShowMenu,
    SetEditor(Option<String>),
    Quit,
}

/// Read-only session settings visible to screens.
#[derive(Clone, Debug, Default)]
pub(in crate::tui_shell) struct Preferences {
    pub(in crate::tui_shell) editor: Option<String>,
    pub(in crate::tui_shell) credentials_entered: bool,
    pub(in crate::tui_shell) logger: Logger,
}

/// Handed to screen methods: the collaborators they may read, plus a buffer of
/// effects the app applies afterwards.
pub(in crate::tui_shell) struct ScreenCtx<'a> {
    exec: &'a dyn CommandExecutor,
    context: &'a WorkContext,
    prefs: &'a Preferences,
    effects: Vec<Effect>,
}

impl<'a> ScreenCtx<'a> {
    pub(in crate::tui_shell) fn new(
        exec: &'a dyn CommandExecutor,
        context: &'a WorkContext,
        prefs: &'a Preferences,
    ) -> Self {
        Self {
            exec,
            context,
            prefs,
            effects: Vec::new(),
        }
    }

    pub(in crate::tui_shell) fn exec(&self) -> &'a dyn CommandExecutor {
        self.exec
    }

    pub(in crate::tui_shell) fn context(&self) -> &'a WorkContext {
        self.context
    }

    pub(in crate::tui_shell) fn workspace_root(&self) -> &'a Path {
        self.context.workspace_root()
    }

    pub(in crate::tui_shell) fn cwd(&self) -> PathBuf {
        self.context.cwd()
    }

    pub(in crate::tui_shell) fn prefs(&self) -> &'a Preferences {
        self.prefs
    }

    pub(in crate::tui_shell) fn push(&mut self, effect: Effect) {
        self.effects.push(effect);
    }

    pub(in crate::tui_shell) fn popup(
        &mut self,
        kind: PopupKind,
        title: impl Into<String>,
        body: impl Into<String>,
    ) {
        self.push(Effect::Popup(Popup::new(kind, title, body)));
    }

    pub(in crate::tui_shell) fn message(&mut self, title: impl Into<String>, body: impl Into<String>) {
        self.popup(PopupKind::Message, title, body);
    }

    pub(in crate::tui_shell) fn warning(&mut self, title: impl Into<String>, body: impl Into<String>) {
        self.popup(PopupKind::Warning, title, body);
    }

    pub(in crate::tui_shell) fn error(&mut self, title: impl Into<String>, body: impl Into<String>) {
        self.popup(PopupKind::Error, title, body);
    }

    /// Validation and navigation problems are warnings; the rest are errors.
    pub(in crate::tui_shell) fn report(&mut self, err: &AutogitError) {
        let kind = match err {
            AutogitError::Validation(_)
            | AutogitError::UnknownScreen(_)
            | AutogitError::UnsupportedOperation(_) => PopupKind::Warning,
            _ => PopupKind::Error,
        };
        self.popup(kind, err.popup_title(), err.to_string());
    }

    /// Routes a command result through the presenter into `panel` and a popup.
    pub(in crate::tui_shell) fn present(
        &mut self,
        result: &CommandResult,
        opts: &PresentOptions,
        panel: &mut InfoPanel,
    ) {
        let out = present(result, opts);
        if let Some(update) = out.panel {
            panel.apply(update);
        }
        if let Some(popup) = out.popup {
            self.push(Effect::Popup(popup));
        }
    }

    pub(in crate::tui_shell) fn prompt(
        &mut self,
        title: impl Into<String>,
        prompt: impl Into<String>,
        action: TextInputAction,
        initial: Option<String>,
    ) {
        self.push(Effect::TextInput(TextPrompt {
            title: title.into(),
            prompt: prompt.into(),
            action,
            masked: false,
            initial,
        }));
    }

    pub(in crate::tui_shell) fn confirm(&mut self, prompt: impl Into<String>, action: PendingAction) {
        self.push(Effect::Confirm {
            prompt: prompt.into(),
            action,
        });
    }

    pub(in crate::tui_shell) fn run_long(&mut self, op: PendingOperation) {
        self.push(Effect::RunLong(op));
    }

    pub(in crate::tui_shell) fn navigate(&mut self, id: ScreenId) {
        self.push(Effect::Navigate(id));
    }

    pub(in crate::tui_shell) fn into_effects(self) -> Vec<Effect> {
        self.effects
    }
}
