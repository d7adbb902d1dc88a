use chrono::Local;
use crossterm::{
    event::{self, DisableBracketedPaste, EnableBracketedPaste, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use interactive_toolkit::{draw_app, handle_key_event, handle_paste, logger, App, Config};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

fn main() -> io::Result<()> {
    let config =
        Config::from_env().map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

    if let Some(path) = &config.log_file {
        logger::init(path);
    }
    logger::log(&format!(
        "Starting interactive-toolkit (seed: {:?})",
        config.seed
    ));

    let rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    let mut app = App::new(Local::now().date_naive(), rng);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableBracketedPaste)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableBracketedPaste,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        logger::log(&format!("Exiting with error: {}", e));
    } else {
        logger::log("Exiting");
    }
    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    while !app.should_quit {
        let now = Local::now().naive_local();
        terminal.draw(|f| draw_app(f, app, now))?;

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key_event(app, key),
            Event::Paste(text) => handle_paste(app, &text),
            _ => {}
        }
    }
    Ok(())
}
