use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub struct ScreenLayout {
    pub tabs_area: Rect,
    pub body_area: Rect,
    pub help_area: Rect,
}

pub struct DashboardLayout {
    pub car_area: Rect,
    pub metrics_area: Rect,
    pub items_area: Rect,
}

pub struct QuizInputLayout {
    pub topic_area: Rect,
    pub document_area: Rect,
    pub message_area: Rect,
}

pub fn calculate_screen_chunks(area: Rect) -> ScreenLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    ScreenLayout {
        tabs_area: chunks[0],
        body_area: chunks[1],
        help_area: chunks[2],
    }
}

pub fn calculate_dashboard_chunks(area: Rect) -> DashboardLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(4),
            Constraint::Min(3),
        ])
        .split(area);

    DashboardLayout {
        car_area: chunks[0],
        metrics_area: chunks[1],
        items_area: chunks[2],
    }
}

/// One three-row box per form field followed by a message area that takes
/// the remaining space.
pub fn calculate_form_chunks(area: Rect, fields: usize) -> (Vec<Rect>, Rect) {
    let mut constraints = vec![Constraint::Length(3); fields];
    constraints.push(Constraint::Min(1));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area);

    (chunks[..fields].to_vec(), chunks[fields])
}

pub fn calculate_quiz_input_chunks(area: Rect) -> QuizInputLayout {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(5),
            Constraint::Length(3),
        ])
        .split(area);

    QuizInputLayout {
        topic_area: chunks[0],
        document_area: chunks[1],
        message_area: chunks[2],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_screen_layout() {
        let layout = calculate_screen_chunks(Rect::new(0, 0, 100, 40));

        // Margin 1 leaves 38 rows: 3 for tabs, 3 for help, 32 for the body.
        assert_eq!(layout.tabs_area.height, 3);
        assert_eq!(layout.help_area.height, 3);
        assert_eq!(layout.body_area.height, 32);
        assert_eq!(layout.body_area.width, 98);
    }

    #[test]
    fn test_dashboard_layout() {
        let layout = calculate_dashboard_chunks(Rect::new(0, 0, 80, 30));
        assert_eq!(layout.car_area.height, 1);
        assert_eq!(layout.metrics_area.height, 4);
        assert_eq!(layout.items_area.height, 25);
    }

    #[test]
    fn test_form_layout() {
        let (fields, message) = calculate_form_chunks(Rect::new(0, 0, 80, 20), 4);
        assert_eq!(fields.len(), 4);
        assert!(fields.iter().all(|r| r.height == 3));
        assert_eq!(fields[1].y, 3);
        assert_eq!(message.height, 8);
    }

    #[test]
    fn test_quiz_input_layout() {
        let layout = calculate_quiz_input_chunks(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.topic_area.height, 3);
        assert_eq!(layout.message_area.height, 3);
        assert_eq!(layout.document_area.height, 18);
    }
}
