use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};

use super::super::super::presenter::PopupKind;
use super::super::super::{Modal, ModalKind};

fn kind_color(modal: &Modal) -> Color {
    match &modal.kind {
        ModalKind::Message(PopupKind::Error) => Color::Red,
        ModalKind::Message(PopupKind::Warning) => Color::Yellow,
        ModalKind::Confirm { .. } => Color::Magenta,
        _ => Color::Cyan,
    }
}

pub(super) fn border_style(modal: &Modal) -> Style {
    Style::default().fg(kind_color(modal))
}

pub(super) fn modal_title(modal: &Modal) -> Line<'static> {
    let mut spans = vec![
        Span::styled(
            modal.title.clone(),
            Style::default().fg(kind_color(modal)),
        ),
        Span::raw("  ".to_string()),
        Span::styled("Esc".to_string(), Style::default().fg(Color::Gray)),
    ];
    if matches!(
        &modal.kind,
        ModalKind::Confirm { .. } | ModalKind::TextInput { .. } | ModalKind::Menu { .. }
    ) {
        spans.push(Span::raw("  ".to_string()));
        spans.push(Span::styled(
            "Enter".to_string(),
            Style::default().fg(Color::Gray),
        ));
    }
    Line::from(spans)
}
