use crate::models::{CarField, CarForm};
use crate::ui::layout::calculate_form_chunks;
use crate::ui::widgets::draw_input;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw_car_info(f: &mut Frame, area: Rect, form: &CarForm) {
    let block = Block::default().borders(Borders::ALL).title("Car Information");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let (fields, message_area) = calculate_form_chunks(inner, 4);

    let inputs = [
        ("Make", &form.make, CarField::Make, "e.g., Toyota"),
        ("Model", &form.model, CarField::Model, "e.g., Camry"),
        ("Year", &form.year, CarField::Year, "e.g., 2020"),
        (
            "Current Odometer (km)",
            &form.odometer,
            CarField::Odometer,
            "0",
        ),
    ];

    for ((title, field, which, placeholder), area) in inputs.into_iter().zip(fields) {
        draw_input(f, area, title, field, form.focus == which, placeholder);
    }

    let note = Paragraph::new("Data is kept for this session only.")
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(note, message_area);
}
