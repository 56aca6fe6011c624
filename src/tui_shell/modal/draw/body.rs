use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};

use super::super::super::{Modal, ModalKind};

pub(super) fn render_modal_body(frame: &mut ratatui::Frame, modal: &Modal, inner: Rect) {
    match &modal.kind {
        ModalKind::Message(_) | ModalKind::Confirm { .. } => {
            render_lines(frame, modal, inner);
        }
        ModalKind::Menu { choices, selected } => {
            render_menu(frame, choices, *selected, inner);
        }
        ModalKind::TextInput { prompt, masked, .. } => {
            let parts = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(0), Constraint::Length(3)])
                .split(inner);

            render_lines(frame, modal, parts[0]);

            let shown = modal.input.display(*masked);
            let input_line = Line::from(vec![
                Span::styled(prompt.as_str(), Style::default().fg(Color::Yellow)),
                Span::raw(shown),
            ]);
            frame.render_widget(
                Paragraph::new(input_line)
                    .block(Block::default().borders(Borders::ALL).title("Edit")),
                parts[1],
            );

            let x = prompt.chars().count() as u16 + modal.input.cursor as u16;
            let y = parts[1].y + 1;
            frame.set_cursor_position((parts[1].x + 1 + x, y));
        }
    }
}

fn render_menu(frame: &mut ratatui::Frame, choices: &[&str], selected: usize, area: Rect) {
    // Keep the selection inside the visible window.
    let height = area.height as usize;
    let start = if height > 0 && selected >= height {
        selected + 1 - height
    } else {
        0
    };
    let lines: Vec<Line> = choices
        .iter()
        .enumerate()
        .skip(start)
        .map(|(i, label)| {
            if i == selected {
                Line::from(Span::styled(
                    format!("> {}", label),
                    Style::default()
                        .fg(Color::Black)
                        .bg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ))
            } else {
                Line::from(format!("  {}", label))
            }
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_lines(frame: &mut ratatui::Frame, modal: &Modal, area: Rect) {
    let lines: Vec<Line> = modal.lines.iter().map(|s| Line::from(s.as_str())).collect();
    let scroll = modal.scroll.min(modal.lines.len().saturating_sub(1)) as u16;
    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .scroll((scroll, 0)),
        area,
    );
}
