use crate::maintenance::{find_entry, Garage};
use crate::models::HistoryView;
use crate::ui::dashboard::format_record_date;
use crate::ui::widgets::draw_message;
use crate::utils::format_thousands;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

pub fn draw_history(f: &mut Frame, area: Rect, garage: &Garage, view: &HistoryView) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(3), Constraint::Length(1)])
        .split(area);

    let block = Block::default().borders(Borders::ALL).title("Service History");

    let records = garage.history();
    if records.is_empty() {
        let empty = Paragraph::new("No service records yet. Add some in the 'Add Service' tab!")
            .style(
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            )
            .block(block);
        f.render_widget(empty, chunks[0]);
    } else {
        let detail_style = Style::default().fg(Color::DarkGray);
        let items: Vec<ListItem> = records
            .iter()
            .enumerate()
            .map(|(i, record)| {
                let icon = find_entry(&record.service).map(|e| e.icon).unwrap_or("");
                let date = record
                    .date
                    .map(format_record_date)
                    .unwrap_or_else(|| "unknown date".to_string());

                let header_style = if i == view.selected {
                    Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD)
                } else {
                    Style::default().add_modifier(Modifier::BOLD)
                };
                let marker = if i == view.selected { "> " } else { "  " };

                let mut lines = vec![Line::from(Span::styled(
                    format!("{}{} {} - {}", marker, icon, record.service, date),
                    header_style,
                ))];
                lines.push(Line::from(Span::styled(
                    format!("    Date: {}", date),
                    detail_style,
                )));
                if let Some(km) = record.km {
                    lines.push(Line::from(Span::styled(
                        format!("    Odometer: {} km", format_thousands(km)),
                        detail_style,
                    )));
                }
                if !record.notes.is_empty() {
                    lines.push(Line::from(Span::styled(
                        format!("    Notes: {}", record.notes),
                        detail_style,
                    )));
                }
                ListItem::new(lines)
            })
            .collect();

        let mut state = ListState::default().with_selected(Some(view.selected));
        f.render_stateful_widget(List::new(items).block(block), chunks[0], &mut state);
    }

    draw_message(f, chunks[1], None, view.status.as_deref());
}
