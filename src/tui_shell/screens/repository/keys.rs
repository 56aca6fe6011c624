use crossterm::event::KeyCode;

use crate::tui_shell::keymap::Binding;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(super) enum BranchMode {
    Branches,
    Tags,
}

impl BranchMode {
    pub(super) fn toggled(self) -> Self {
        match self {
            BranchMode::Branches => BranchMode::Tags,
            BranchMode::Tags => BranchMode::Branches,
        }
    }
}

/// Where keyboard input goes on the repository screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum RepoFocus {
    Overview,
    AddFiles,
    Branches(BranchMode),
    Remotes,
    Commit,
}

impl RepoFocus {
    pub(super) fn pane(self) -> Pane {
        match self {
            RepoFocus::Overview => Pane::Overview,
            RepoFocus::AddFiles => Pane::AddFiles,
            RepoFocus::Branches(_) => Pane::Branches,
            RepoFocus::Remotes => Pane::Remotes,
            RepoFocus::Commit => Pane::Commit,
        }
    }
}

/// Key-table focus; the branch mode does not change which keys apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(super) enum Pane {
    Overview,
    AddFiles,
    Branches,
    Remotes,
    Commit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(super) enum Action {
    FocusFiles,
    FocusBranches,
    FocusRemotes,
    FocusCommit,
    Escape,
    Up,
    Down,
    AddAll,
    DiffRepo,
    DiffFile,
    Push,
    Pull,
    Stash,
    StashPop,
    ExternalEditor,
    InternalEditor,
    Log,
    Menu,
    Refresh,
    AddOrRevert,
    Checkout,
    NewBranch,
    ToggleMode,
    RemoteInfo,
    NewRemote,
    Commit,
}

pub(super) const KEYS: &[Binding<Pane, Action>] = &[
    (None, KeyCode::Char('f'), Action::FocusFiles),
    (None, KeyCode::Char('b'), Action::FocusBranches),
    (None, KeyCode::Char('r'), Action::FocusRemotes),
    (None, KeyCode::Char('c'), Action::FocusCommit),
    (None, KeyCode::Esc, Action::Escape),
    (None, KeyCode::Up, Action::Up),
    (None, KeyCode::Down, Action::Down),
    (None, KeyCode::Char('a'), Action::AddAll),
    (None, KeyCode::Char('d'), Action::DiffRepo),
    (None, KeyCode::Char('p'), Action::Push),
    (None, KeyCode::Char('l'), Action::Pull),
    (None, KeyCode::Char('s'), Action::Stash),
    (None, KeyCode::Char('u'), Action::StashPop),
    (None, KeyCode::Char('e'), Action::ExternalEditor),
    (None, KeyCode::Char('i'), Action::InternalEditor),
    (None, KeyCode::Char('g'), Action::Log),
    (None, KeyCode::Char('m'), Action::Menu),
    (None, KeyCode::F(5), Action::Refresh),
    (Some(Pane::Overview), KeyCode::Backspace, Action::Escape),
    (Some(Pane::AddFiles), KeyCode::Enter, Action::AddOrRevert),
    (Some(Pane::AddFiles), KeyCode::Char('d'), Action::DiffFile),
    (Some(Pane::Branches), KeyCode::Enter, Action::Checkout),
    (Some(Pane::Branches), KeyCode::Char('n'), Action::NewBranch),
    (Some(Pane::Branches), KeyCode::Char('t'), Action::ToggleMode),
    (Some(Pane::Remotes), KeyCode::Enter, Action::RemoteInfo),
    (Some(Pane::Remotes), KeyCode::Char('n'), Action::NewRemote),
    (Some(Pane::Commit), KeyCode::Enter, Action::Commit),
];

pub(super) const MENU: &[&str] = &[
    "Add All",
    "Diff",
    "Log",
    "Stash",
    "Stash Pop",
    "Push",
    "Pull",
    "Open Internal Editor",
    "Open External Editor",
    "Back to Workspace",
    "About",
    "Enter Credentials",
    "Settings",
    "Custom Command",
    "Exit",
];

pub(super) fn help_for(focus: RepoFocus) -> &'static str {
    match focus {
        RepoFocus::Overview => {
            "Files - f | Branches - b | Remotes - r | Commit - c | Push - p | Pull - l | Menu - m | Back - Esc"
        }
        RepoFocus::AddFiles => "Add/Revert - Enter | Diff File - d | Add All - a | Return - Esc",
        RepoFocus::Branches(_) => "Checkout - Enter | New Branch - n | Branches/Tags - t | Return - Esc",
        RepoFocus::Remotes => "Remote Info - Enter | Add Remote - n | Return - Esc",
        RepoFocus::Commit => "Commit - Enter | Return - Esc",
    }
}
