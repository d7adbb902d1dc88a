use crate::models::TextField;
use crate::utils::display_width;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn key_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

pub fn border_style(focused: bool) -> Style {
    if focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    }
}

/// Bordered single-line input. Places the terminal cursor when focused.
pub fn draw_input(
    f: &mut Frame,
    area: Rect,
    title: &str,
    field: &TextField,
    focused: bool,
    placeholder: &str,
) {
    let content = if field.is_empty() {
        Span::styled(
            placeholder.to_string(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        Span::from(field.value.clone())
    };

    let input = Paragraph::new(Line::from(content)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(focused))
            .title(title.to_string()),
    );
    f.render_widget(input, area);

    if focused && area.width > 2 {
        let max_col = area.width.saturating_sub(3);
        let col = (display_width(field.before_cursor()) as u16).min(max_col);
        f.set_cursor_position((area.x + 1 + col, area.y + 1));
    }
}

pub fn draw_help(f: &mut Frame, area: Rect, hints: &[(&str, &str)]) {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, label) in hints {
        spans.push(Span::styled(key.to_string(), key_style()));
        spans.push(Span::from(format!(" {}  ", label)));
    }

    let help = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    f.render_widget(help, area);
}

/// Inline validation error or confirmation line.
pub fn draw_message(f: &mut Frame, area: Rect, error: Option<&str>, status: Option<&str>) {
    let line = match (error, status) {
        (Some(error), _) => Line::from(Span::styled(
            error.to_string(),
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        )),
        (None, Some(status)) => Line::from(Span::styled(
            status.to_string(),
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        (None, None) => return,
    };

    f.render_widget(Paragraph::new(line), area);
}
