use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui_shell::panel::title_color;
use crate::tui_shell::{RenderCtx, render_screen_chrome};

use super::RepositoryScreen;
use super::keys::{BranchMode, RepoFocus};

impl RepositoryScreen {
    pub(super) fn draw(&self, frame: &mut ratatui::Frame, area: Rect, ctx: &RenderCtx) {
        let inner = render_screen_chrome(frame, "Repository", &self.repo_name, area);
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
            .split(inner);
        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Percentage(30),
                Constraint::Percentage(25),
                Constraint::Percentage(15),
                Constraint::Percentage(30),
            ])
            .split(cols[0]);
        let right = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(3)])
            .split(cols[1]);

        self.files
            .render(frame, left[0], "Add Files", self.focus == RepoFocus::AddFiles);
        let branch_focus = matches!(self.focus, RepoFocus::Branches(_));
        match self.branch_mode() {
            BranchMode::Branches => self.branches.render(frame, left[1], "Branches", branch_focus),
            BranchMode::Tags => self.tags.render(frame, left[1], "Tags", branch_focus),
        }
        self.remotes
            .render(frame, left[2], "Remotes", self.focus == RepoFocus::Remotes);
        self.commits.render(frame, left[3], "Recent Commits", false);

        self.panel
            .render(frame, right[0], self.focus == RepoFocus::Overview, ctx);
        self.draw_commit_box(frame, right[1]);
    }

    fn draw_commit_box(&self, frame: &mut ratatui::Frame, area: Rect) {
        let focused = self.focus == RepoFocus::Commit;
        let block = Block::default().borders(Borders::ALL).title(Span::styled(
            "Commit Message",
            Style::default().fg(title_color(focused)),
        ));
        frame.render_widget(
            Paragraph::new(Line::from(self.message.display(false))).block(block),
            area,
        );
        if focused {
            let x = area.x + 1 + self.message.cursor as u16;
            frame.set_cursor_position((x.min(area.right().saturating_sub(2)), area.y + 1));
        }
    }
}
