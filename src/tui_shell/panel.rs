use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap};

use super::presenter::PanelUpdate;
use super::{RenderCtx, fmt_ts_list, now_ts};

/// Scrollable text surface showing command output.
#[derive(Clone, Debug)]
pub(in crate::tui_shell) struct InfoPanel {
    default_title: &'static str,
    pub(in crate::tui_shell) title: String,
    pub(in crate::tui_shell) lines: Vec<String>,
    pub(in crate::tui_shell) scroll: usize,
    pub(in crate::tui_shell) updated_at: Option<String>,
}

impl InfoPanel {
    pub(in crate::tui_shell) fn new(default_title: &'static str) -> Self {
        Self {
            default_title,
            title: default_title.to_string(),
            lines: Vec::new(),
            scroll: 0,
            updated_at: None,
        }
    }

    pub(in crate::tui_shell) fn set(&mut self, title: impl Into<String>, text: &str) {
        self.title = title.into();
        self.lines = text.lines().map(|l| l.to_string()).collect();
        self.scroll = 0;
        self.updated_at = Some(now_ts());
    }

    pub(in crate::tui_shell) fn set_lines(&mut self, title: impl Into<String>, lines: Vec<String>) {
        self.title = title.into();
        self.lines = lines;
        self.scroll = 0;
        self.updated_at = Some(now_ts());
    }

    pub(in crate::tui_shell) fn apply(&mut self, update: PanelUpdate) {
        self.set(update.title, &update.text);
    }

    pub(in crate::tui_shell) fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub(in crate::tui_shell) fn clear(&mut self) {
        self.title = self.default_title.to_string();
        self.lines.clear();
        self.scroll = 0;
        self.updated_at = None;
    }

    pub(in crate::tui_shell) fn scroll_up(&mut self) {
        self.scroll = self.scroll.saturating_sub(1);
    }

    pub(in crate::tui_shell) fn scroll_down(&mut self) {
        if self.scroll < self.lines.len().saturating_sub(1) {
            self.scroll += 1;
        }
    }

    pub(in crate::tui_shell) fn render(
        &self,
        frame: &mut ratatui::Frame,
        area: Rect,
        focused: bool,
        ctx: &RenderCtx,
    ) {
        let mut header = vec![Span::styled(
            self.title.clone(),
            Style::default().fg(title_color(focused)),
        )];
        if let Some(ts) = &self.updated_at {
            header.push(Span::raw("  "));
            header.push(Span::styled(fmt_ts_list(ts, ctx), Style::default().fg(Color::Gray)));
        }
        let lines: Vec<Line> = self.lines.iter().map(|l| Line::from(l.as_str())).collect();
        let scroll = self.scroll.min(self.lines.len().saturating_sub(1)) as u16;
        frame.render_widget(
            Paragraph::new(lines)
                .wrap(Wrap { trim: false })
                .scroll((scroll, 0))
                .block(Block::default().borders(Borders::ALL).title(Line::from(header))),
            area,
        );
    }
}

/// A list with one selected row.
#[derive(Clone, Debug, Default)]
pub(in crate::tui_shell) struct SelectList {
    pub(in crate::tui_shell) items: Vec<String>,
    pub(in crate::tui_shell) selected: usize,
}

impl SelectList {
    /// Replaces the items. The previous selection survives when it is still
    /// in range; otherwise the first row is selected.
    pub(in crate::tui_shell) fn set_items(&mut self, items: Vec<String>) {
        if self.selected >= items.len() {
            self.selected = 0;
        }
        self.items = items;
    }

    pub(in crate::tui_shell) fn selected_item(&self) -> Option<&str> {
        self.items.get(self.selected).map(|s| s.as_str())
    }

    pub(in crate::tui_shell) fn select(&mut self, idx: usize) {
        if idx < self.items.len() {
            self.selected = idx;
        }
    }

    pub(in crate::tui_shell) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(in crate::tui_shell) fn move_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub(in crate::tui_shell) fn move_down(&mut self) {
        if self.items.is_empty() {
            self.selected = 0;
            return;
        }
        let max = self.items.len().saturating_sub(1);
        self.selected = (self.selected + 1).min(max);
    }

    pub(in crate::tui_shell) fn push(&mut self, item: String) {
        self.items.push(item);
        self.selected = self.items.len() - 1;
    }

    pub(in crate::tui_shell) fn clear(&mut self) {
        self.items.clear();
        self.selected = 0;
    }

    pub(in crate::tui_shell) fn render(
        &self,
        frame: &mut ratatui::Frame,
        area: Rect,
        title: &str,
        focused: bool,
    ) {
        let rows: Vec<ListItem> = self
            .items
            .iter()
            .map(|s| ListItem::new(s.as_str()))
            .collect();
        let mut state = ListState::default();
        if !self.items.is_empty() {
            state.select(Some(self.selected.min(self.items.len() - 1)));
        }
        let list = List::new(rows)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(
                        title.to_string(),
                        Style::default().fg(title_color(focused)),
                    )),
            )
            .highlight_style(Style::default().bg(if focused {
                Color::DarkGray
            } else {
                Color::Black
            }));
        frame.render_stateful_widget(list, area, &mut state);
    }
}

pub(in crate::tui_shell) fn title_color(focused: bool) -> Color {
    if focused { Color::Yellow } else { Color::Gray }
}

#[cfg(test)]
#[path = "../tests/tui_shell/panel_tests.rs"]
mod tests;
