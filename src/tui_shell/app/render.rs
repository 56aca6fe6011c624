use super::*;

const SPINNER: &[&str] = &["|", "/", "-", "\\"];

pub(super) fn draw(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(2),
            Constraint::Min(0),
            Constraint::Length(2),
        ])
        .split(area);

    // Header
    let creds = if app.prefs.credentials_entered {
        Span::styled("credentials", Style::default().fg(Color::Green))
    } else {
        Span::styled("no credentials", Style::default().fg(Color::DarkGray))
    };
    let spans = vec![
        Span::styled(
            crate::NAME,
            Style::default().fg(Color::Black).bg(Color::White),
        ),
        Span::raw("  "),
        Span::styled(app.header_title(), Style::default().fg(Color::Yellow)),
        Span::raw("  "),
        Span::raw(app.context.cwd().display().to_string()),
        Span::raw("  "),
        creds,
        Span::raw("  "),
        Span::styled(fmt_ts_ui(&now_ts()), Style::default().fg(Color::Gray)),
    ];
    let header = Paragraph::new(Line::from(spans)).block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(header, chunks[0]);

    // Active screen
    let ctx = RenderCtx {
        now: OffsetDateTime::now_utc(),
    };
    if let Some(screen) = app.active_screen() {
        screen.render(frame, chunks[1], &ctx);
    }

    // Key help
    let help = app.active_screen().map(|s| s.help_text()).unwrap_or("");
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(
            help,
            Style::default().fg(Color::Gray),
        )))
        .block(Block::default().borders(Borders::TOP)),
        chunks[2],
    );

    if let Some((title, elapsed)) = app.runner.indicator() {
        dim_frame(frame);
        draw_loading(frame, title, elapsed);
        return;
    }

    if let Some(m) = &app.modal {
        dim_frame(frame);
        modal::draw_modal(frame, m);
    }
}

fn draw_loading(frame: &mut ratatui::Frame, title: &str, elapsed: Duration) {
    let area = frame.area();
    let w = (title.len() as u16 + 16).max(24).min(area.width);
    let h = 3u16.min(area.height);
    let rect = ratatui::layout::Rect {
        x: area.x + area.width.saturating_sub(w) / 2,
        y: area.y + area.height.saturating_sub(h) / 2,
        width: w,
        height: h,
    };
    let tick = (elapsed.as_millis() / 150) as usize % SPINNER.len();
    let line = Line::from(vec![
        Span::styled(SPINNER[tick], Style::default().fg(Color::Cyan)),
        Span::raw(format!(" {}... {}s", title, elapsed.as_secs())),
    ]);
    frame.render_widget(ratatui::widgets::Clear, rect);
    frame.render_widget(
        Paragraph::new(line).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)),
        ),
        rect,
    );
}

fn dim_frame(frame: &mut ratatui::Frame) {
    let area = frame.area();
    let buf = frame.buffer_mut();
    for y in area.y..area.y.saturating_add(area.height) {
        for x in area.x..area.x.saturating_add(area.width) {
            if let Some(cell) = buf.cell_mut((x, y)) {
                cell.modifier |= Modifier::DIM;
            }
        }
    }
}
