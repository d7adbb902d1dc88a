mod car_info;
pub mod dashboard;
mod history;
pub mod layout;
mod quiz;
mod service_form;
pub mod widgets;

use crate::models::{App, AppState};
use chrono::NaiveDateTime;
use crate::ui::layout::calculate_screen_chunks;
use ratatui::{
    style::{Color, Modifier, Style},
    text::Line,
    widgets::{Block, Borders, Tabs},
    Frame,
};

pub use car_info::draw_car_info;
pub use dashboard::draw_dashboard;
pub use history::draw_history;
pub use quiz::draw_quiz;
pub use service_form::draw_service_form;

/// Draw the whole screen for the current session state. `now` is the
/// reference time for every maintenance alert on this frame.
pub fn draw_app(f: &mut Frame, app: &App, now: NaiveDateTime) {
    let layout = calculate_screen_chunks(f.area());

    let titles: Vec<Line> = AppState::ALL
        .iter()
        .enumerate()
        .map(|(i, state)| Line::from(format!("F{} {}", i + 1, state.title())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.state.index())
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title("Interactive Toolkit v0.1.0"),
        );
    f.render_widget(tabs, layout.tabs_area);

    match app.state {
        AppState::Dashboard => {
            draw_dashboard(f, layout.body_area, &app.garage, app.dashboard_selected, now)
        }
        AppState::AddService => draw_service_form(f, layout.body_area, &app.service_form),
        AppState::History => draw_history(f, layout.body_area, &app.garage, &app.history),
        AppState::CarInfo => draw_car_info(f, layout.body_area, &app.car_form),
        AppState::Quiz => draw_quiz(f, layout.body_area, &app.quiz),
    }

    widgets::draw_help(f, layout.help_area, help_hints(app));
}

fn help_hints(app: &App) -> &'static [(&'static str, &'static str)] {
    match app.state {
        AppState::Dashboard => &[
            ("F1-F5", "Switch"),
            ("↑/↓", "Scroll"),
            ("Esc/q", "Quit"),
            ("Ctrl+C", "Exit"),
        ],
        AppState::AddService => &[
            ("Tab/↑/↓", "Field"),
            ("←/→", "Service"),
            ("Enter", "Save"),
            ("Esc", "Dashboard"),
            ("Ctrl+C", "Exit"),
        ],
        AppState::History => &[
            ("↑/↓", "Select"),
            ("d/Del", "Delete"),
            ("Esc", "Dashboard"),
            ("Ctrl+C", "Exit"),
        ],
        AppState::CarInfo => &[
            ("Tab/↑/↓", "Field"),
            ("Esc", "Dashboard"),
            ("Ctrl+C", "Exit"),
        ],
        AppState::Quiz if app.quiz.showing_results => &[
            ("↑/↓", "Question"),
            ("Space", "Show Answer"),
            ("PgUp/PgDn", "Scroll"),
            ("r", "Regenerate"),
            ("Esc", "Edit Input"),
        ],
        AppState::Quiz => &[
            ("Tab", "Field"),
            ("Enter/Ctrl+G", "Generate"),
            ("Ctrl+C", "Exit"),
        ],
    }
}
