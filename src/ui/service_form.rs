use crate::maintenance::MAINTENANCE_SCHEDULE;
use crate::models::{ServiceField, ServiceForm};
use crate::ui::layout::calculate_form_chunks;
use crate::ui::widgets::{border_style, draw_input, draw_message};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw_service_form(f: &mut Frame, area: Rect, form: &ServiceForm) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Add Service Record");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let (fields, message_area) = calculate_form_chunks(inner, 4);

    let entry = &MAINTENANCE_SCHEDULE[form.selected_service % MAINTENANCE_SCHEDULE.len()];
    let service_focused = form.focus == ServiceField::Service;
    let arrow_style = if service_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let interval = match entry.interval_km {
        Some(km) => format!("every {} days or {} km", entry.interval_days, km),
        None => format!("every {} days", entry.interval_days),
    };
    let selector = Paragraph::new(Line::from(vec![
        Span::styled("◀ ", arrow_style),
        Span::styled(
            format!("{} {}", entry.icon, entry.name),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(" ▶", arrow_style),
        Span::styled(format!("   ({})", interval), Style::default().fg(Color::DarkGray)),
    ]))
    .block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style(service_focused))
            .title("Service Type"),
    );
    f.render_widget(selector, fields[0]);

    draw_input(
        f,
        fields[1],
        "Service Date",
        &form.date,
        form.focus == ServiceField::Date,
        "YYYY-MM-DD",
    );
    draw_input(
        f,
        fields[2],
        "Odometer at Service (km)",
        &form.odometer,
        form.focus == ServiceField::Odometer,
        "leave empty if unknown",
    );
    draw_input(
        f,
        fields[3],
        "Notes (optional)",
        &form.notes,
        form.focus == ServiceField::Notes,
        "Any additional details...",
    );

    draw_message(
        f,
        message_area,
        form.error.as_deref(),
        form.status.as_deref(),
    );
}
