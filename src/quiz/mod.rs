pub mod analyzer;
pub mod generator;

pub use analyzer::{extract_concepts, Concepts};
pub use generator::{
    generate, generate_assignments, generate_quiz_questions, validate_topic, GeneratedContent,
    QuizQuestion,
};
