use crate::logger;
use crate::maintenance::MAINTENANCE_SCHEDULE;
use crate::models::{
    App, AppState, CarField, CarForm, QuizField, ServiceField, TextField, MAX_ODOMETER_DIGITS,
};
use crate::quiz::generate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Apply one key press to the session.
pub fn handle_key_event(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    if ctrl && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    if let KeyCode::F(n) = key.code
        && let Some(state) = (n as usize)
            .checked_sub(1)
            .and_then(|i| AppState::ALL.get(i).copied())
    {
        switch_to(app, state);
        return;
    }

    match app.state {
        AppState::Dashboard => handle_dashboard_input(app, key),
        AppState::AddService => handle_service_form_input(app, key),
        AppState::History => handle_history_input(app, key),
        AppState::CarInfo => handle_car_input(app, key),
        AppState::Quiz if app.quiz.showing_results => handle_results_input(app, key),
        AppState::Quiz => handle_quiz_input(app, key, ctrl),
    }
}

/// Insert pasted text into whichever field has focus.
pub fn handle_paste(app: &mut App, text: &str) {
    match app.state {
        AppState::AddService => {
            let focus = app.service_form.focus;
            if let Some(field) = app.service_form.focused_field_mut() {
                insert_text(field, text, focus == ServiceField::Odometer);
            }
        }
        AppState::CarInfo => {
            let numeric = app.car_form.focus == CarField::Odometer;
            insert_text(app.car_form.focused_field_mut(), text, numeric);
            app.car_form.apply_to(&mut app.garage.car);
        }
        AppState::Quiz if !app.quiz.showing_results => {
            let normalized = text.replace("\r\n", "\n").replace('\r', "\n");
            match app.quiz.focus {
                QuizField::Topic => {
                    let single_line = normalized.replace('\n', " ");
                    app.quiz.topic.insert_str(&single_line);
                }
                QuizField::Document => app.quiz.document.insert_str(&normalized),
            }
        }
        _ => {}
    }
}

fn switch_to(app: &mut App, state: AppState) {
    if state == AppState::CarInfo && app.state != AppState::CarInfo {
        app.car_form = CarForm::from_car(&app.garage.car);
    }
    if state == AppState::History {
        let count = app.garage.record_count();
        app.history.selected = app.history.selected.min(count.saturating_sub(1));
    }
    app.service_form.status = None;
    app.history.status = None;
    app.state = state;
}

fn insert_text(field: &mut TextField, text: &str, numeric: bool) {
    if numeric {
        for c in text.chars().filter(char::is_ascii_digit) {
            if field.len() >= MAX_ODOMETER_DIGITS {
                break;
            }
            field.insert(c);
        }
    } else {
        let single_line: String = text.chars().filter(|c| !c.is_control()).collect();
        field.insert_str(&single_line);
    }
}

/// Cursor and editing keys shared by every text input. Returns true when the
/// key was consumed.
fn edit_field(field: &mut TextField, key: KeyEvent, numeric: bool) -> bool {
    match key.code {
        KeyCode::Left => field.left(),
        KeyCode::Right => field.right(),
        KeyCode::Home => field.home(),
        KeyCode::End => field.end(),
        KeyCode::Backspace => field.backspace(),
        KeyCode::Delete => field.delete(),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            if numeric {
                if c.is_ascii_digit() && field.len() < MAX_ODOMETER_DIGITS {
                    field.insert(c);
                }
            } else {
                field.insert(c);
            }
        }
        _ => return false,
    }
    true
}

fn handle_dashboard_input(app: &mut App, key: KeyEvent) {
    let last = MAINTENANCE_SCHEDULE.len() - 1;
    match key.code {
        KeyCode::Up => app.dashboard_selected = app.dashboard_selected.saturating_sub(1),
        KeyCode::Down => app.dashboard_selected = (app.dashboard_selected + 1).min(last),
        KeyCode::PageUp => app.dashboard_selected = app.dashboard_selected.saturating_sub(5),
        KeyCode::PageDown => app.dashboard_selected = (app.dashboard_selected + 5).min(last),
        KeyCode::Home => app.dashboard_selected = 0,
        KeyCode::End => app.dashboard_selected = last,
        KeyCode::Esc | KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
}

fn handle_service_form_input(app: &mut App, key: KeyEvent) {
    let form = &mut app.service_form;
    match key.code {
        KeyCode::Tab | KeyCode::Down => form.focus = form.focus.next(),
        KeyCode::BackTab | KeyCode::Up => form.focus = form.focus.prev(),
        KeyCode::Enter => save_service_record(app),
        KeyCode::Esc => app.state = AppState::Dashboard,
        _ => match form.focus {
            ServiceField::Service => match key.code {
                KeyCode::Left => form.select_prev_service(),
                KeyCode::Right | KeyCode::Char(' ') => form.select_next_service(),
                _ => {}
            },
            ServiceField::Odometer => {
                edit_field(&mut form.odometer, key, true);
            }
            ServiceField::Date => {
                edit_field(&mut form.date, key, false);
            }
            ServiceField::Notes => {
                edit_field(&mut form.notes, key, false);
            }
        },
    }
}

fn save_service_record(app: &mut App) {
    let form = &mut app.service_form;
    let date = match form.parse_date() {
        Ok(date) => date,
        Err(e) => {
            logger::log(&format!("Rejected service record: {}", e));
            form.status = None;
            form.error = Some(e);
            return;
        }
    };

    let service = form.selected_name();
    match app
        .garage
        .save_record(service, Some(date), form.odometer_km(), &form.notes.value)
    {
        Ok(record) => {
            logger::log(&format!(
                "Saved {} record: date={} km={:?}",
                record.service, date, record.km
            ));
            form.error = None;
            form.status = Some(format!("{} record saved!", service));
            form.odometer.clear();
            form.notes.clear();
        }
        Err(e) => {
            logger::log(&format!("Failed to save record: {}", e));
            form.status = None;
            form.error = Some(e);
        }
    }
}

fn handle_history_input(app: &mut App, key: KeyEvent) {
    let count = app.garage.record_count();
    match key.code {
        KeyCode::Up => app.history.selected = app.history.selected.saturating_sub(1),
        KeyCode::Down => {
            if app.history.selected < count.saturating_sub(1) {
                app.history.selected += 1;
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            let target = app
                .garage
                .history()
                .get(app.history.selected)
                .map(|r| r.service.clone());
            if let Some(service) = target
                && app.garage.delete_record(&service).is_some()
            {
                logger::log(&format!("Deleted {} record", service));
                let remaining = app.garage.record_count();
                app.history.selected = app.history.selected.min(remaining.saturating_sub(1));
                app.history.status = Some(format!("{} record deleted", service));
            }
        }
        KeyCode::Esc => app.state = AppState::Dashboard,
        _ => {}
    }
}

fn handle_car_input(app: &mut App, key: KeyEvent) {
    let form = &mut app.car_form;
    match key.code {
        KeyCode::Tab | KeyCode::Down | KeyCode::Enter => form.focus = form.focus.next(),
        KeyCode::BackTab | KeyCode::Up => form.focus = form.focus.prev(),
        KeyCode::Esc => app.state = AppState::Dashboard,
        _ => {
            let numeric = form.focus == CarField::Odometer;
            if edit_field(form.focused_field_mut(), key, numeric) {
                form.apply_to(&mut app.garage.car);
            }
        }
    }
}

fn handle_quiz_input(app: &mut App, key: KeyEvent, ctrl: bool) {
    if ctrl && key.code == KeyCode::Char('g') {
        generate_content(app);
        return;
    }

    let quiz = &mut app.quiz;
    match (key.code, quiz.focus) {
        (KeyCode::Tab | KeyCode::BackTab, QuizField::Topic) => quiz.focus = QuizField::Document,
        (KeyCode::Tab | KeyCode::BackTab, QuizField::Document) => quiz.focus = QuizField::Topic,
        (KeyCode::Down, QuizField::Topic) => quiz.focus = QuizField::Document,
        (KeyCode::Enter, QuizField::Topic) => generate_content(app),
        (KeyCode::Enter, QuizField::Document) => quiz.document.insert('\n'),
        (KeyCode::Esc, _) => {
            if quiz.content.is_some() {
                quiz.showing_results = true;
            }
        }
        (_, focus) => {
            quiz.error = None;
            let field = match focus {
                QuizField::Topic => &mut quiz.topic,
                QuizField::Document => &mut quiz.document,
            };
            edit_field(field, key, false);
        }
    }
}

fn handle_results_input(app: &mut App, key: KeyEvent) {
    let quiz = &mut app.quiz;
    let question_count = quiz.revealed.len();
    match key.code {
        KeyCode::Up => quiz.selected_question = quiz.selected_question.saturating_sub(1),
        KeyCode::Down => {
            if quiz.selected_question + 1 < question_count {
                quiz.selected_question += 1;
            }
        }
        KeyCode::Char(' ') | KeyCode::Enter => {
            let i = quiz.selected_question;
            quiz.revealed[i] = !quiz.revealed[i];
        }
        KeyCode::PageDown => quiz.results_scroll_y = quiz.results_scroll_y.saturating_add(5),
        KeyCode::PageUp => quiz.results_scroll_y = quiz.results_scroll_y.saturating_sub(5),
        KeyCode::Char('r') => generate_content(app),
        KeyCode::Esc => quiz.showing_results = false,
        _ => {}
    }
}

fn generate_content(app: &mut App) {
    let quiz = &mut app.quiz;
    match generate(&quiz.topic.value, &quiz.document.value, &mut app.rng) {
        Ok(content) => {
            logger::log(&format!(
                "Generated content for '{}': {} sentences, {} key terms",
                content.topic,
                content.concepts.sentences.len(),
                content.concepts.key_terms.len()
            ));
            quiz.show_content(content);
        }
        Err(e) => {
            logger::log(&format!("Generation rejected: {}", e));
            quiz.error = Some(e);
        }
    }
}
