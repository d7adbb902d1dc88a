use crate::maintenance::{CarInfo, Garage, MAINTENANCE_SCHEDULE};
use crate::quiz::GeneratedContent;
use chrono::NaiveDate;
use rand::rngs::StdRng;

pub const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";
pub const MAX_ODOMETER_DIGITS: usize = 9;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppState {
    Dashboard,
    AddService,
    History,
    CarInfo,
    Quiz,
}

impl AppState {
    pub const ALL: [AppState; 5] = [
        AppState::Dashboard,
        AppState::AddService,
        AppState::History,
        AppState::CarInfo,
        AppState::Quiz,
    ];

    pub fn title(self) -> &'static str {
        match self {
            AppState::Dashboard => "Dashboard",
            AppState::AddService => "Add Service",
            AppState::History => "History",
            AppState::CarInfo => "Car Info",
            AppState::Quiz => "Quiz",
        }
    }

    pub fn index(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }
}

/// Single text input with a character-indexed cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextField {
    pub value: String,
    pub cursor: usize,
}

impl TextField {
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        let cursor = value.chars().count();
        Self { value, cursor }
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    pub fn insert(&mut self, c: char) {
        let at = self.byte_index(self.cursor);
        self.value.insert(at, c);
        self.cursor += 1;
    }

    pub fn insert_str(&mut self, s: &str) {
        let at = self.byte_index(self.cursor);
        self.value.insert_str(at, s);
        self.cursor += s.chars().count();
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 {
            let at = self.byte_index(self.cursor - 1);
            self.value.remove(at);
            self.cursor -= 1;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.len() {
            let at = self.byte_index(self.cursor);
            self.value.remove(at);
        }
    }

    pub fn left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    pub fn home(&mut self) {
        self.cursor = 0;
    }

    pub fn end(&mut self) {
        self.cursor = self.len();
    }

    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Text before the cursor, used to place the terminal cursor.
    pub fn before_cursor(&self) -> &str {
        &self.value[..self.byte_index(self.cursor)]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceField {
    Service,
    Date,
    Odometer,
    Notes,
}

impl ServiceField {
    pub fn next(self) -> Self {
        match self {
            ServiceField::Service => ServiceField::Date,
            ServiceField::Date => ServiceField::Odometer,
            ServiceField::Odometer => ServiceField::Notes,
            ServiceField::Notes => ServiceField::Service,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            ServiceField::Service => ServiceField::Notes,
            ServiceField::Date => ServiceField::Service,
            ServiceField::Odometer => ServiceField::Date,
            ServiceField::Notes => ServiceField::Odometer,
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServiceForm {
    pub selected_service: usize,
    pub date: TextField,
    pub odometer: TextField,
    pub notes: TextField,
    pub focus: ServiceField,
    pub error: Option<String>,
    pub status: Option<String>,
}

impl ServiceForm {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            selected_service: 0,
            date: TextField::new(today.format(DATE_INPUT_FORMAT).to_string()),
            odometer: TextField::default(),
            notes: TextField::default(),
            focus: ServiceField::Service,
            error: None,
            status: None,
        }
    }

    pub fn selected_name(&self) -> &'static str {
        MAINTENANCE_SCHEDULE[self.selected_service % MAINTENANCE_SCHEDULE.len()].name
    }

    pub fn select_next_service(&mut self) {
        self.selected_service = (self.selected_service + 1) % MAINTENANCE_SCHEDULE.len();
    }

    pub fn select_prev_service(&mut self) {
        self.selected_service =
            (self.selected_service + MAINTENANCE_SCHEDULE.len() - 1) % MAINTENANCE_SCHEDULE.len();
    }

    pub fn parse_date(&self) -> Result<NaiveDate, String> {
        let raw = self.date.value.trim();
        NaiveDate::parse_from_str(raw, DATE_INPUT_FORMAT)
            .map_err(|_| format!("Invalid service date '{}', expected YYYY-MM-DD", raw))
    }

    pub fn odometer_km(&self) -> u64 {
        self.odometer.value.parse().unwrap_or(0)
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut TextField> {
        match self.focus {
            ServiceField::Service => None,
            ServiceField::Date => Some(&mut self.date),
            ServiceField::Odometer => Some(&mut self.odometer),
            ServiceField::Notes => Some(&mut self.notes),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarField {
    Make,
    Model,
    Year,
    Odometer,
}

impl CarField {
    pub fn next(self) -> Self {
        match self {
            CarField::Make => CarField::Model,
            CarField::Model => CarField::Year,
            CarField::Year => CarField::Odometer,
            CarField::Odometer => CarField::Make,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            CarField::Make => CarField::Odometer,
            CarField::Model => CarField::Make,
            CarField::Year => CarField::Model,
            CarField::Odometer => CarField::Year,
        }
    }
}

#[derive(Debug, Clone)]
pub struct CarForm {
    pub make: TextField,
    pub model: TextField,
    pub year: TextField,
    pub odometer: TextField,
    pub focus: CarField,
}

impl CarForm {
    pub fn from_car(car: &CarInfo) -> Self {
        Self {
            make: TextField::new(car.make.clone()),
            model: TextField::new(car.model.clone()),
            year: TextField::new(car.year.clone()),
            odometer: TextField::new(car.current_km.to_string()),
            focus: CarField::Make,
        }
    }

    pub fn focused_field_mut(&mut self) -> &mut TextField {
        match self.focus {
            CarField::Make => &mut self.make,
            CarField::Model => &mut self.model,
            CarField::Year => &mut self.year,
            CarField::Odometer => &mut self.odometer,
        }
    }

    /// Write the form contents through to the session's car record.
    pub fn apply_to(&self, car: &mut CarInfo) {
        car.make = self.make.value.clone();
        car.model = self.model.value.clone();
        car.year = self.year.value.clone();
        car.current_km = self.odometer.value.parse().unwrap_or(0);
    }
}

#[derive(Debug, Clone, Default)]
pub struct HistoryView {
    pub selected: usize,
    pub status: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizField {
    Topic,
    Document,
}

#[derive(Debug, Clone)]
pub struct QuizWorkspace {
    pub topic: TextField,
    pub document: TextField,
    pub focus: QuizField,
    pub error: Option<String>,
    pub content: Option<GeneratedContent>,
    pub showing_results: bool,
    pub selected_question: usize,
    pub revealed: [bool; 3],
    pub results_scroll_y: u16,
}

impl Default for QuizWorkspace {
    fn default() -> Self {
        Self {
            topic: TextField::default(),
            document: TextField::default(),
            focus: QuizField::Topic,
            error: None,
            content: None,
            showing_results: false,
            selected_question: 0,
            revealed: [false; 3],
            results_scroll_y: 0,
        }
    }
}

impl QuizWorkspace {
    pub fn focused_field_mut(&mut self) -> &mut TextField {
        match self.focus {
            QuizField::Topic => &mut self.topic,
            QuizField::Document => &mut self.document,
        }
    }

    pub fn show_content(&mut self, content: GeneratedContent) {
        self.content = Some(content);
        self.error = None;
        self.showing_results = true;
        self.selected_question = 0;
        self.revealed = [false; 3];
        self.results_scroll_y = 0;
    }
}

/// All state owned by one interactive session.
#[derive(Debug)]
pub struct App {
    pub state: AppState,
    pub garage: Garage,
    pub service_form: ServiceForm,
    pub car_form: CarForm,
    pub history: HistoryView,
    /// Highlighted schedule entry on the dashboard.
    pub dashboard_selected: usize,
    pub quiz: QuizWorkspace,
    pub rng: StdRng,
    pub should_quit: bool,
}

impl App {
    pub fn new(today: NaiveDate, rng: StdRng) -> Self {
        let garage = Garage::new();
        let car_form = CarForm::from_car(&garage.car);
        Self {
            state: AppState::Dashboard,
            garage,
            service_form: ServiceForm::new(today),
            car_form,
            history: HistoryView::default(),
            dashboard_selected: 0,
            quiz: QuizWorkspace::default(),
            rng,
            should_quit: false,
        }
    }
}
