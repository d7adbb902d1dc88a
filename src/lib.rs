pub mod config;
pub mod logger;
pub mod maintenance;
pub mod models;
pub mod quiz;
pub mod session;
pub mod ui;
pub mod utils;


// Re-exports for convenience
pub use config::Config;
pub use maintenance::{classify, AlertStatus, CarInfo, Classification, Garage, ServiceRecord};
pub use models::{App, AppState};
pub use quiz::{
    extract_concepts, generate_assignments, generate_quiz_questions, Concepts, QuizQuestion,
};
pub use session::{handle_key_event, handle_paste};
pub use ui::draw_app;
