use ratatui::prelude::*;
use ratatui::widgets::*;
use roulette_core::{AppViewModel, SpinView};

use super::constants::*;
use super::layout::{centered, main_areas, scroll_offset};

pub fn render(frame: &mut Frame, view: &AppViewModel) {
    let screen = frame.area();
    let areas = main_areas(screen);

    render_header(frame, areas.header);
    render_card(frame, areas.card, &view.spin);
    render_hint(frame, areas.hint, view);

    let footer = Paragraph::new(format!(
        "Choosing at random from {} topics",
        view.topic_count
    ))
    .alignment(Alignment::Center)
    .style(Style::default().fg(MUTED));
    frame.render_widget(footer, areas.footer);

    if view.manager.open {
        render_manager(frame, screen, view);
    }
}

fn render_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new(Line::from(Span::styled(
        TAGLINE,
        Style::default().fg(ACCENT),
    )))
    .alignment(Alignment::Center)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(ACCENT))
            .title(TITLE)
            .title_style(Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD)),
    );
    frame.render_widget(header, area);
}

fn render_card(frame: &mut Frame, area: Rect, spin: &SpinView) {
    let (icon, text, style) = match spin {
        SpinView::Idle => (
            "🎰",
            TAGLINE.to_string(),
            Style::default().fg(MUTED),
        ),
        SpinView::Spinning {
            display_candidate, ..
        } => {
            let text = if display_candidate.is_empty() {
                SPINNING_PLACEHOLDER.to_string()
            } else {
                display_candidate.clone()
            };
            (
                "🎰",
                text,
                Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD),
            )
        }
        SpinView::Settled { result } => (
            "🎉",
            result.clone(),
            Style::default().fg(RESULT).add_modifier(Modifier::BOLD),
        ),
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(ACCENT));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let lines = vec![
        Line::from(icon),
        Line::from(""),
        Line::from(Span::styled(text, style)),
    ];
    let top_pad = inner.height.saturating_sub(lines.len() as u16) / 2;
    let body = Rect::new(
        inner.x,
        inner.y + top_pad,
        inner.width,
        inner.height.saturating_sub(top_pad),
    );
    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, body);
}

fn render_hint(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let key_style = Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(MUTED);

    let spin = if matches!(view.spin, SpinView::Spinning { .. }) {
        vec![Span::styled("🎰 Spinning...", key_style)]
    } else if view.can_spin {
        vec![
            Span::styled("Space", key_style),
            Span::styled(" spin the roulette  ", text_style),
        ]
    } else {
        vec![Span::styled("Add a topic to spin  ", Style::default().fg(DANGER))]
    };

    let mut spans = spin;
    spans.extend([
        Span::styled("  m", key_style),
        Span::styled(" manage topics  ", text_style),
        Span::styled("q", key_style),
        Span::styled(" quit", text_style),
    ]);

    let hint = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().padding(Padding::top(1)));
    frame.render_widget(hint, area);
}

fn render_manager(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let overlay = centered(area, MANAGER_WIDTH, MANAGER_HEIGHT);
    frame.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Double)
        .border_style(Style::default().fg(HIGHLIGHT))
        .title(" Manage topics ")
        .title_style(Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD))
        .style(Style::default().bg(BACKGROUND));
    let inner = block.inner(overlay);
    frame.render_widget(block, overlay);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // New topic input
            Constraint::Min(1),    // Topic rows
            Constraint::Length(2), // Key help
        ])
        .split(inner);

    let input = Paragraph::new(Line::from(vec![
        Span::styled(&view.manager.new_topic_input, Style::default().fg(RESULT)),
        Span::styled("_", Style::default().fg(MUTED)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(MUTED))
            .title(" New topic "),
    );
    frame.render_widget(input, chunks[0]);

    let visible = chunks[1].height as usize;
    let offset = scroll_offset(view.manager.selected, visible);
    let rows: Vec<Line> = view
        .topics
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(index, topic)| topic_row(view, index, topic))
        .collect();
    frame.render_widget(Paragraph::new(rows), chunks[1]);

    let key_style = Style::default().fg(HIGHLIGHT).add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(MUTED);
    let help = if view.edit.is_some() {
        Line::from(vec![
            Span::styled("Enter", key_style),
            Span::styled(" save  ", text_style),
            Span::styled("Esc", key_style),
            Span::styled(" cancel", text_style),
        ])
    } else {
        Line::from(vec![
            Span::styled("Enter", key_style),
            Span::styled(" add  ", text_style),
            Span::styled("↑↓", key_style),
            Span::styled(" select  ", text_style),
            Span::styled("F2", key_style),
            Span::styled(" edit  ", text_style),
            Span::styled("Del", key_style),
            Span::styled(" delete  ", text_style),
            Span::styled("Esc", key_style),
            Span::styled(" close", text_style),
        ])
    };
    frame.render_widget(
        Paragraph::new(help).block(Block::default().padding(Padding::top(1))),
        chunks[2],
    );
}

fn topic_row<'a>(view: &'a AppViewModel, index: usize, topic: &'a str) -> Line<'a> {
    let selected = index == view.manager.selected;
    let marker = if selected { "▶ " } else { "  " };

    if let Some(edit) = view.edit.as_ref().filter(|edit| edit.index == index) {
        return Line::from(vec![
            Span::styled(marker, Style::default().fg(HIGHLIGHT)),
            Span::styled(
                format!("{}_", edit.draft),
                Style::default()
                    .fg(HIGHLIGHT)
                    .add_modifier(Modifier::UNDERLINED),
            ),
        ]);
    }

    let style = if selected {
        Style::default().fg(RESULT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(MUTED)
    };
    Line::from(vec![
        Span::styled(marker, Style::default().fg(HIGHLIGHT)),
        Span::styled(topic, style),
    ])
}
