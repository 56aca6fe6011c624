use crossterm::event::KeyModifiers;

use super::*;

pub(super) fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    loop {
        app.poll_operation();

        terminal
            .draw(|f| super::render::draw(f, app))
            .context("draw")?;
        if app.quit {
            return Ok(());
        }

        if event::poll(Duration::from_millis(50)).context("poll")? {
            match event::read().context("read event")? {
                Event::Key(k) if k.kind == KeyEventKind::Press => app.handle_key(k),
                _ => {}
            }
        }
    }
}

impl App {
    /// Routes one key press: the open modal first, then global keys, then the
    /// active screen. Nothing is accepted while an operation is running.
    pub(in crate::tui_shell) fn handle_key(&mut self, key: KeyEvent) {
        if self.runner.is_busy() {
            return;
        }
        if self.modal.is_some() {
            modal::handle_modal_key(self, key);
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.quit = true;
            return;
        }
        let typing = self.active_screen().is_some_and(|s| s.captures_text());
        if key.code == KeyCode::Char('q') && !typing {
            self.quit = true;
            return;
        }

        self.dispatch(self.active, |s, ctx| s.handle_key(key, ctx));
    }
}
