use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui_shell::panel::title_color;
use crate::tui_shell::{RenderCtx, render_screen_chrome};

use super::{EditorScreen, Focus};

impl EditorScreen {
    pub(super) fn draw(&self, frame: &mut ratatui::Frame, area: Rect, ctx: &RenderCtx) {
        let dir = self
            .dir
            .as_ref()
            .map(|d| d.display().to_string())
            .unwrap_or_default();
        let inner = render_screen_chrome(frame, "Editor", &dir, area);
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(30), Constraint::Percentage(70)])
            .split(inner);
        let left = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(3), Constraint::Length(8)])
            .split(cols[0]);

        self.files
            .render(frame, left[0], "Directory Files", self.focus == Focus::Files);
        self.panel.render(frame, left[1], false, ctx);
        self.draw_buffer(frame, cols[1]);
    }

    fn draw_buffer(&self, frame: &mut ratatui::Frame, area: Rect) {
        let focused = self.focus == Focus::Buffer;
        let mut title = self
            .opened
            .as_ref()
            .and_then(|p| p.file_name())
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| "Open file".to_string());
        if self.buffer.dirty {
            title.push_str(" *");
        }

        let height = area.height.saturating_sub(2) as usize;
        let top = self.buffer.row.saturating_sub(height.saturating_sub(1));
        let lines: Vec<Line> = self
            .buffer
            .lines
            .iter()
            .skip(top)
            .take(height)
            .map(|l| Line::from(l.as_str()))
            .collect();
        frame.render_widget(
            Paragraph::new(lines).block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(title, Style::default().fg(title_color(focused)))),
            ),
            area,
        );
        if focused && self.opened.is_some() {
            let x = area.x + 1 + self.buffer.col as u16;
            let y = area.y + 1 + (self.buffer.row - top) as u16;
            frame.set_cursor_position((x.min(area.right().saturating_sub(2)), y));
        }
    }
}
