use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, OnceLock};
use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use time::OffsetDateTime;
use time::format_description::FormatItem;
use time::format_description::well_known::Rfc3339;

use crate::error::{AutogitError, AutogitResult};
use crate::executor::{CommandExecutor, GitCommand};
use crate::metadata::{Metadata, MetadataStore};

use super::context::WorkContext;
use super::credential_gate::{CredentialGate, Gate};
use super::effects::TextPrompt;
use super::input::Input;
use super::modal;
use super::presenter::{Popup, PopupKind, PresentOptions};
use super::runner::{JobEnv, OperationRunner, PendingOperation};
use super::screens::{EditorScreen, RepositoryScreen, SettingsScreen, WorkspaceScreen};
use super::{
    Effect, PendingAction, Preferences, RenderCtx, ScreenController, ScreenCtx, ScreenId,
    TextInputAction,
};

mod credentials_flow;
mod effects_apply;
mod event_loop;
mod lifecycle;
mod long_ops;
mod modal_output;
mod modal_replies;
mod modal_types;
mod render;
mod runtime;
mod state;
mod time_utils;
mod view_nav;

pub(super) use self::modal_types::{Modal, ModalKind};
pub(in crate::tui_shell) use self::runtime::run;
pub(super) use self::state::App;
use self::state::Deferred;
pub(in crate::tui_shell) use self::time_utils::now_ts;
pub(super) use self::time_utils::{fmt_ts_list, fmt_ts_ui};

#[cfg(test)]
#[path = "../tests/tui_shell/app_tests.rs"]
mod tests;
