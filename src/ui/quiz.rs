use crate::models::{QuizField, QuizWorkspace};
use crate::quiz::GeneratedContent;
use crate::ui::layout::calculate_quiz_input_chunks;
use crate::ui::widgets::{border_style, draw_input, draw_message};
use crate::utils::calculate_wrapped_cursor_position;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

pub fn draw_quiz(f: &mut Frame, area: Rect, quiz: &QuizWorkspace) {
    match &quiz.content {
        Some(content) if quiz.showing_results => draw_results(f, area, quiz, content),
        _ => draw_quiz_input(f, area, quiz),
    }
}

fn draw_quiz_input(f: &mut Frame, area: Rect, quiz: &QuizWorkspace) {
    let layout = calculate_quiz_input_chunks(area);

    draw_input(
        f,
        layout.topic_area,
        "Topic/Title",
        &quiz.topic,
        quiz.focus == QuizField::Topic,
        "e.g., Photosynthesis, Machine Learning, World War II",
    );

    let document_focused = quiz.focus == QuizField::Document;
    let document_area = layout.document_area;
    let text_width = document_area.width.saturating_sub(2) as usize;
    let visible_height = document_area.height.saturating_sub(2) as usize;

    let (cursor_line, cursor_col) =
        calculate_wrapped_cursor_position(&quiz.document.value, quiz.document.cursor, text_width);
    let scroll_y = cursor_line.saturating_sub(visible_height.saturating_sub(1)) as u16;

    let document_text = if quiz.document.is_empty() {
        Text::from(Span::styled(
            "Paste educational content here to generate more specific questions...",
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        ))
    } else {
        Text::from(quiz.document.value.as_str())
    };

    let document = Paragraph::new(document_text)
        .wrap(Wrap { trim: true })
        .scroll((scroll_y, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style(document_focused))
                .title("Document text (optional)"),
        );
    f.render_widget(document, document_area);

    if document_focused && text_width > 0 {
        let cursor_x = document_area.x + 1 + cursor_col.min(text_width) as u16;
        let cursor_y = document_area.y + 1 + (cursor_line as u16).saturating_sub(scroll_y);
        f.set_cursor_position((cursor_x, cursor_y));
    }

    let hint = if quiz.content.is_some() {
        Some("Esc shows the last generated quiz")
    } else {
        None
    };
    draw_message(f, layout.message_area, quiz.error.as_deref(), hint);
}

fn option_letter(i: usize) -> char {
    (b'A' + i as u8) as char
}

fn draw_results(f: &mut Frame, area: Rect, quiz: &QuizWorkspace, content: &GeneratedContent) {
    let heading = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let mut text = Text::default();

    text.push_line(Line::from(Span::styled("Assignment Questions", heading)));
    text.push_line(Line::from(""));
    for (i, assignment) in content.assignments.iter().enumerate() {
        text.push_line(Line::from(Span::styled(
            format!("Assignment {}", i + 1),
            Style::default().add_modifier(Modifier::BOLD),
        )));
        text.push_line(Line::from(assignment.as_str()));
        text.push_line(Line::from(""));
    }

    text.push_line(Line::from(Span::styled("Multiple Choice Quiz", heading)));
    text.push_line(Line::from(""));
    for (i, question) in content.questions.iter().enumerate() {
        let selected = i == quiz.selected_question;
        let title_style = if selected {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        let marker = if selected { "> " } else { "  " };

        text.push_line(Line::from(Span::styled(
            format!("{}Question {}", marker, i + 1),
            title_style,
        )));
        text.push_line(Line::from(question.question.as_str()));
        for (j, option) in question.options.iter().enumerate() {
            text.push_line(Line::from(format!("  {}. {}", option_letter(j), option)));
        }

        if quiz.revealed[i] {
            text.push_line(Line::from(Span::styled(
                match question.answer_index() {
                    Some(j) => format!("Correct Answer: {}. {}", option_letter(j), question.answer),
                    None => format!("Correct Answer: {}", question.answer),
                },
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            )));
        } else {
            text.push_line(Line::from(Span::styled(
                "[Space] Show Answer",
                Style::default().fg(Color::DarkGray),
            )));
        }
        text.push_line(Line::from(""));
    }

    let title = if content.concepts.is_empty() {
        format!("Generated for: {} (topic only)", content.topic)
    } else {
        format!("Generated for: {}", content.topic)
    };
    let results = Paragraph::new(text)
        .wrap(Wrap { trim: true })
        .scroll((quiz.results_scroll_y, 0))
        .block(Block::default().borders(Borders::ALL).title(title));
    f.render_widget(results, area);
}
