use anyhow::Result;

mod app;

mod context;
mod credential_gate;
mod effects;
mod input;
mod keymap;
mod modal;
mod panel;
mod presenter;
mod runner;
mod screen;
mod screens;

// Make core TUI types/helpers available to submodules via `super::...`.
use app::{App, Modal, ModalKind, fmt_ts_list, now_ts};
use effects::{Effect, PendingAction, Preferences, ScreenCtx, TextInputAction};
use screen::{RenderCtx, ScreenController, ScreenId, render_screen_chrome};

pub fn run_with_options(opts: crate::tui::TuiRunOptions) -> Result<()> {
    app::run(opts)
}
