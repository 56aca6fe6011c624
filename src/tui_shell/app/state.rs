use super::*;

/// A gated operation parked until credentials arrive.
pub(in crate::tui_shell) struct Deferred {
    pub(in crate::tui_shell) origin: ScreenId,
    pub(in crate::tui_shell) op: PendingOperation,
}

pub(in crate::tui_shell) struct App {
    pub(in crate::tui_shell) executor: Arc<dyn CommandExecutor>,
    pub(in crate::tui_shell) context: WorkContext,
    pub(in crate::tui_shell) prefs: Preferences,

    // Registered once; never destroyed.
    pub(in crate::tui_shell) screens: Vec<Box<dyn ScreenController>>,
    pub(in crate::tui_shell) active: ScreenId,
    pub(in crate::tui_shell) return_stack: Vec<ScreenId>,
    pub(in crate::tui_shell) pending_repo: Option<String>,

    pub(in crate::tui_shell) gate: CredentialGate<Deferred>,
    pub(in crate::tui_shell) runner: OperationRunner,

    pub(in crate::tui_shell) modal: Option<Modal>,
    pub(in crate::tui_shell) queued: VecDeque<Modal>,

    pub(in crate::tui_shell) metadata: MetadataStore,
    pub(in crate::tui_shell) save_metadata: bool,

    pub(in crate::tui_shell) quit: bool,
}

impl App {
    pub(in crate::tui_shell) fn new(
        executor: Arc<dyn CommandExecutor>,
        workspace_root: impl Into<std::path::PathBuf>,
        logger: crate::logger::Logger,
    ) -> Self {
        let context = WorkContext::new(workspace_root);
        let metadata = MetadataStore::new(context.workspace_root());
        Self {
            executor,
            context,
            prefs: Preferences {
                logger,
                ..Preferences::default()
            },
            screens: Vec::new(),
            active: ScreenId::Workspace,
            return_stack: Vec::new(),
            pending_repo: None,
            gate: CredentialGate::default(),
            runner: OperationRunner::default(),
            modal: None,
            queued: VecDeque::new(),
            metadata,
            save_metadata: true,
            quit: false,
        }
    }
}
