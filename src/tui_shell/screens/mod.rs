mod editor;
mod repository;
mod settings;
mod workspace;

pub(in crate::tui_shell) use self::editor::EditorScreen;
pub(in crate::tui_shell) use self::repository::RepositoryScreen;
pub(in crate::tui_shell) use self::settings::SettingsScreen;
pub(in crate::tui_shell) use self::workspace::WorkspaceScreen;
