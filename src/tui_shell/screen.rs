use crossterm::event::KeyEvent;
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders};
use time::OffsetDateTime;

use crate::error::{AutogitError, AutogitResult};

use super::effects::{Effect, PendingAction, ScreenCtx, TextInputAction};
use super::panel::InfoPanel;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(in crate::tui_shell) enum ScreenId {
    Workspace,
    Repository,
    Settings,
    Editor,
}

impl ScreenId {
    pub(in crate::tui_shell) fn title(self) -> &'static str {
        match self {
            ScreenId::Workspace => "Workspace",
            ScreenId::Repository => "Repository",
            ScreenId::Settings => "Settings",
            ScreenId::Editor => "Editor",
        }
    }
}

#[derive(Clone, Copy, Debug)]
pub(in crate::tui_shell) struct RenderCtx {
    pub(in crate::tui_shell) now: OffsetDateTime,
}

/// One navigable screen. Registered once at startup and reused across
/// activations; the app drives the lifecycle:
/// `clear` on the way out, `set_initial_values` then `refresh` on the way in.
pub(in crate::tui_shell) trait ScreenController {
    fn id(&self) -> ScreenId;

    /// Builds the key table. Called exactly once, before the first activation.
    fn initialize(&mut self);

    /// Resets mode flags and focus for a fresh activation.
    fn set_initial_values(&mut self);

    /// Re-reads everything shown on the screen.
    fn refresh(&mut self, ctx: &mut ScreenCtx<'_>);

    /// Empties transient widget content.
    fn clear(&mut self);

    fn help_text(&self) -> &'static str;

    fn menu_choices(&self) -> &'static [&'static str];

    fn on_menu_selection(&mut self, label: &str, ctx: &mut ScreenCtx<'_>) -> AutogitResult<()>;

    fn handle_key(&mut self, key: KeyEvent, ctx: &mut ScreenCtx<'_>);

    /// True while plain characters belong to a text field on the screen.
    fn captures_text(&self) -> bool {
        false
    }

    fn on_text_input(&mut self, action: TextInputAction, _value: String, _ctx: &mut ScreenCtx<'_>) {
        tracing::warn!(screen = ?self.id(), ?action, "text input not handled");
    }

    fn on_confirm(&mut self, action: PendingAction, _ctx: &mut ScreenCtx<'_>) {
        tracing::warn!(screen = ?self.id(), ?action, "confirmation not handled");
    }

    fn info_panel_mut(&mut self) -> &mut InfoPanel;

    fn render(&self, frame: &mut ratatui::Frame, area: Rect, ctx: &RenderCtx);
}

/// Handles the menu labels every screen shares; anything else is unsupported.
pub(in crate::tui_shell) fn common_menu_selection(
    label: &str,
    panel: &mut InfoPanel,
    ctx: &mut ScreenCtx<'_>,
) -> AutogitResult<()> {
    match label {
        "About" => panel.set_lines("About", crate::about_lines()),
        "Enter Credentials" => ctx.push(Effect::RequestCredentials),
        "Settings" => ctx.navigate(ScreenId::Settings),
        "Custom Command" => ctx.prompt(
            "Custom Command",
            "$ ",
            TextInputAction::CustomCommand,
            None,
        ),
        "Exit" => ctx.push(Effect::Quit),
        other => return Err(AutogitError::UnsupportedOperation(other.to_string())),
    }
    Ok(())
}

pub(in crate::tui_shell) fn render_screen_chrome(
    frame: &mut ratatui::Frame,
    title: &str,
    subtitle: &str,
    area: Rect,
) -> Rect {
    let header = Line::from(vec![
        Span::styled(title.to_string(), Style::default().fg(Color::Yellow)),
        Span::raw("  "),
        Span::styled(subtitle.to_string(), Style::default().fg(Color::Gray)),
    ]);
    let outer = Block::default().borders(Borders::ALL).title(header);
    let inner = outer.inner(area);
    frame.render_widget(outer, area);
    inner
}
