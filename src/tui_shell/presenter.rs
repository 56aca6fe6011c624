//! Classifies a finished command and decides what the user sees.

use crate::executor::CommandResult;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) struct PresentOptions {
    pub(in crate::tui_shell) show_on_success: bool,
    pub(in crate::tui_shell) name: String,
    pub(in crate::tui_shell) success_message: String,
    pub(in crate::tui_shell) error_message: String,
}

impl PresentOptions {
    pub(in crate::tui_shell) fn new(name: impl Into<String>) -> Self {
        Self {
            show_on_success: true,
            name: name.into(),
            success_message: "Success".to_string(),
            error_message: "Error".to_string(),
        }
    }

    /// Say nothing when the command succeeds.
    pub(in crate::tui_shell) fn quiet(mut self) -> Self {
        self.show_on_success = false;
        self
    }

    pub(in crate::tui_shell) fn on_success(mut self, msg: impl Into<String>) -> Self {
        self.success_message = msg.into();
        self
    }

    pub(in crate::tui_shell) fn on_error(mut self, msg: impl Into<String>) -> Self {
        self.error_message = msg.into();
        self
    }

    pub(in crate::tui_shell) fn panel_title(&self) -> String {
        format!("{} Output", self.name)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) enum PopupKind {
    Message,
    Warning,
    Error,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) struct Popup {
    pub(in crate::tui_shell) kind: PopupKind,
    pub(in crate::tui_shell) title: String,
    pub(in crate::tui_shell) body: String,
}

impl Popup {
    pub(in crate::tui_shell) fn new(
        kind: PopupKind,
        title: impl Into<String>,
        body: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            title: title.into(),
            body: body.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub(in crate::tui_shell) struct PanelUpdate {
    pub(in crate::tui_shell) title: String,
    pub(in crate::tui_shell) text: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub(in crate::tui_shell) struct Presentation {
    pub(in crate::tui_shell) popup: Option<Popup>,
    pub(in crate::tui_shell) panel: Option<PanelUpdate>,
}

pub(in crate::tui_shell) fn present(result: &CommandResult, opts: &PresentOptions) -> Presentation {
    // An empty text still counts as one line.
    let multi_line = result.text.lines().count() > 1;
    let stripped = result.text.trim();
    let see_panel = format!("Check Info Box For {} Output", opts.name);

    if !result.is_success() {
        let body = if multi_line {
            see_panel
        } else if stripped.is_empty() {
            opts.error_message.clone()
        } else {
            stripped.to_string()
        };
        let panel = multi_line.then(|| PanelUpdate {
            title: opts.panel_title(),
            text: result
                .text
                .lines()
                .map(|l| format!("- {}", l))
                .collect::<Vec<_>>()
                .join("\n"),
        });
        return Presentation {
            popup: Some(Popup::new(PopupKind::Error, &opts.error_message, body)),
            panel,
        };
    }

    if !opts.show_on_success {
        return Presentation::default();
    }

    let body = if multi_line {
        see_panel
    } else if stripped.is_empty() {
        opts.success_message.clone()
    } else {
        stripped.to_string()
    };
    let panel = (!stripped.is_empty()).then(|| PanelUpdate {
        title: opts.panel_title(),
        text: result.text.clone(),
    });
    Presentation {
        popup: Some(Popup::new(PopupKind::Message, &opts.success_message, body)),
        panel,
    }
}

#[cfg(test)]
#[path = "../tests/tui_shell/presenter_tests.rs"]
mod tests;
