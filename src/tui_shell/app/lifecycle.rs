use crate::executor::SystemExecutor;
use crate::git;
use crate::logger::Logger;

use super::*;

impl App {
    pub(in crate::tui_shell) fn register(&mut self, mut screen: Box<dyn ScreenController>) {
        screen.initialize();
        self.screens.push(screen);
    }

    pub(in crate::tui_shell) fn register_screens(&mut self) {
        self.register(Box::new(WorkspaceScreen::new()));
        self.register(Box::new(RepositoryScreen::new()));
        self.register(Box::new(SettingsScreen::new()));
        self.register(Box::new(EditorScreen::new()));
    }

    /// Builds the session: logging, start directory, saved metadata, screens.
    pub(in crate::tui_shell) fn load(opts: crate::tui::TuiRunOptions) -> Result<Self> {
        let logger = Logger::new(None);
        logger.install()?;
        Self::start(opts, Arc::new(SystemExecutor::new()), logger)
    }

    pub(in crate::tui_shell) fn start(
        opts: crate::tui::TuiRunOptions,
        executor: Arc<dyn CommandExecutor>,
        logger: Logger,
    ) -> Result<Self> {
        let (root, repo) = git::split_start_dir(executor.as_ref(), &opts.target_dir);
        let mut app = App::new(executor, root, logger);
        app.save_metadata = opts.save_metadata;

        // A malformed file takes `.autogit` with it, so the log opens after.
        let saved = app.metadata.read();
        let logger = &app.prefs.logger;
        logger.use_path(app.metadata.default_log_file());
        if opts.debug {
            logger.enable().context("enable debug logging")?;
        }
        tracing::info!(root = %app.context.workspace_root().display(), repo = ?repo, "starting session");

        match saved {
            Ok(Some(meta)) => {
                if meta.is_from_other_version() {
                    app.show_popup(Popup::new(
                        PopupKind::Message,
                        "Updated",
                        format!(
                            "{} has been updated to v{}. See {} for release notes.",
                            crate::NAME,
                            crate::VERSION,
                            crate::URL
                        ),
                    ));
                }
                app.prefs.editor = meta.editor;
            }
            Ok(None) => {}
            Err(err) => tracing::warn!(error = %format!("{:#}", err), "metadata unreadable"),
        }

        app.register_screens();
        let first = if repo.is_some() {
            app.pending_repo = repo;
            ScreenId::Repository
        } else {
            ScreenId::Workspace
        };
        app.activate(first)?;

        if opts.ask_credentials {
            app.request_credentials();
        }
        Ok(app)
    }

    /// Saves metadata (unless disabled) and closes the log file.
    pub(in crate::tui_shell) fn close_cleanup(&mut self) -> Result<()> {
        let res = if self.save_metadata {
            self.metadata
                .write(&Metadata::current(self.prefs.editor.clone()))
        } else {
            Ok(())
        };
        tracing::info!(saved = self.save_metadata, "session closed");
        self.prefs.logger.close();
        res
    }
}
