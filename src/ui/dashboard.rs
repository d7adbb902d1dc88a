use crate::maintenance::{AlertStatus, Garage, MAINTENANCE_SCHEDULE, NO_RECORD_INDICATOR};
use crate::ui::layout::calculate_dashboard_chunks;
use crate::utils::{format_thousands, pad_to_width};
use chrono::NaiveDateTime;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};

const ICON_WIDTH: usize = 3;
const NAME_WIDTH: usize = 21;
const STATUS_WIDTH: usize = 11;

pub fn status_color(status: AlertStatus) -> Color {
    match status {
        AlertStatus::Overdue => Color::Red,
        AlertStatus::Urgent => Color::LightRed,
        AlertStatus::Warning => Color::Yellow,
        AlertStatus::Ok => Color::Green,
    }
}

pub fn format_record_date(date: NaiveDateTime) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn car_summary(garage: &Garage, now: NaiveDateTime) -> String {
    let car = &garage.car;
    let name: Vec<&str> = [car.year.as_str(), car.make.as_str(), car.model.as_str()]
        .into_iter()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .collect();
    let name = if name.is_empty() {
        "Your car".to_string()
    } else {
        name.join(" ")
    };
    let mut summary = format!("{} · {} km", name, format_thousands(car.current_km));
    let tracked = garage.tally(now).total();
    if tracked > 0 {
        summary.push_str(&format!(
            " · {} of {} services tracked",
            tracked,
            MAINTENANCE_SCHEDULE.len()
        ));
    }
    summary
}

pub fn draw_dashboard(
    f: &mut Frame,
    area: Rect,
    garage: &Garage,
    selected: usize,
    now: NaiveDateTime,
) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title("Maintenance Status");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let layout = calculate_dashboard_chunks(inner);

    let car = Paragraph::new(car_summary(garage, now)).style(
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    );
    f.render_widget(car, layout.car_area);

    if !garage.has_records() {
        let mut welcome = Text::default();
        welcome.push_line(Line::from(""));
        welcome.push_line(Line::from(
            "Welcome! Add your first service record in the 'Add Service' tab (F2) to get started.",
        ));
        welcome.push_line(Line::from(""));
        welcome.push_line(Line::from(
            "Set your current odometer in 'Car Info' (F4) so distance-based alerts work.",
        ));
        let welcome = Paragraph::new(welcome)
            .wrap(Wrap { trim: true })
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray));
        let rest = Rect {
            height: layout.metrics_area.height + layout.items_area.height,
            ..layout.metrics_area
        };
        f.render_widget(welcome, rest);
        return;
    }

    draw_metrics(f, layout.metrics_area, garage, now);
    draw_items(f, layout.items_area, garage, selected, now);
}

fn draw_metrics(f: &mut Frame, area: Rect, garage: &Garage, now: NaiveDateTime) {
    let tally = garage.tally(now);
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 4); 4])
        .split(area);

    let metrics = [
        (AlertStatus::Overdue, "Overdue", tally.overdue),
        (AlertStatus::Urgent, "Urgent", tally.urgent),
        (AlertStatus::Warning, "Warning", tally.warning),
        (AlertStatus::Ok, "Good", tally.ok),
    ];

    for ((status, label, count), column) in metrics.into_iter().zip(columns.iter()) {
        let text = vec![
            Line::from(format!("{} {}", status.indicator(), label)),
            Line::from(Span::styled(
                count.to_string(),
                Style::default()
                    .fg(status_color(status))
                    .add_modifier(Modifier::BOLD),
            )),
        ];
        let metric = Paragraph::new(text)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        f.render_widget(metric, *column);
    }
}

fn draw_items(f: &mut Frame, area: Rect, garage: &Garage, selected: usize, now: NaiveDateTime) {
    let detail_style = Style::default().fg(Color::DarkGray);
    let indent = " ".repeat(ICON_WIDTH + NAME_WIDTH + 2);

    let items: Vec<ListItem> = MAINTENANCE_SCHEDULE
        .iter()
        .map(|entry| {
            let prefix = format!(
                "{} {}",
                pad_to_width(entry.icon, ICON_WIDTH),
                pad_to_width(entry.name, NAME_WIDTH)
            );

            let mut lines = Vec::new();
            match (garage.record(entry.name), garage.status_for(entry, now)) {
                (Some(record), Some(classification)) => {
                    let status = classification.status;
                    let mut last = match record.date {
                        Some(date) => format!("Last: {}", format_record_date(date)),
                        None => "Last: unknown".to_string(),
                    };
                    if let Some(km) = record.km {
                        last.push_str(&format!(" at {} km", format_thousands(km)));
                    }

                    lines.push(Line::from(vec![
                        Span::styled(prefix, Style::default().add_modifier(Modifier::BOLD)),
                        Span::styled(
                            pad_to_width(
                                &format!("{} {}", status.indicator(), status.label()),
                                STATUS_WIDTH,
                            ),
                            Style::default()
                                .fg(status_color(status))
                                .add_modifier(Modifier::BOLD),
                        ),
                        Span::styled(format!(" {}", last), detail_style),
                    ]));
                    for message in classification.messages {
                        lines.push(Line::from(Span::styled(
                            format!("{}{}", indent, message),
                            detail_style,
                        )));
                    }
                }
                _ => {
                    lines.push(Line::from(vec![
                        Span::styled(prefix, Style::default().add_modifier(Modifier::BOLD)),
                        Span::styled(format!("{} No record", NO_RECORD_INDICATOR), detail_style),
                    ]));
                }
            }

            ListItem::new(lines)
        })
        .collect();

    let list = List::new(items).highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let selected = selected.min(MAINTENANCE_SCHEDULE.len() - 1);
    let mut state = ListState::default().with_selected(Some(selected));
    f.render_stateful_widget(list, area, &mut state);
}
