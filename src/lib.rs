use std::io::{self, Stdout};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event};
use ratatui::crossterm::execute;
use ratatui::crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};

mod app;
mod assistant;
mod diagnostics;
mod documents;
mod keybinds;
mod logging;
mod persistence;
mod terminal;
mod theme;
mod tree;
mod types;
mod ui;
mod util;
use app::App;
use persistence::SaveSlot;
use ui::draw;

fn print_usage() {
    println!("Usage: codecraft [OPTIONS]");
    println!();
    println!("Options:");
    println!("  --storage <FILE>  Save slot file (default: <config dir>/codecraft/storage.json)");
    println!("  --version         Print version information");
    println!("  --help            Show this help message");
}

fn save_slot_from_args(args: &[String]) -> io::Result<SaveSlot> {
    let Some(idx) = args.iter().position(|a| a == "--storage") else {
        return Ok(SaveSlot::default_location());
    };
    match args.get(idx + 1) {
        Some(path) if !path.starts_with('-') => Ok(SaveSlot::at(PathBuf::from(path))),
        _ => Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "--storage requires a file path",
        )),
    }
}

pub fn run() -> io::Result<()> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.iter().any(|a| a == "--help" || a == "-h") {
        print_usage();
        return Ok(());
    }
    if args.iter().any(|a| a == "--version") {
        println!("codecraft {}", env!("CARGO_PKG_VERSION"));
        return Ok(());
    }
    let save_slot = save_slot_from_args(&args)?;

    let _log_guard = logging::init();
    let app = App::new(save_slot)?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture);
        tracing::error!(panic = %info, "panic");
        original_hook(info);
    }));

    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;

    let result = run_app(terminal, app);

    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen, DisableMouseCapture)?;
    if let Err(err) = &result {
        tracing::error!(error = %err, "event loop failed");
    }

    result
}

fn run_app(mut terminal: Terminal<CrosstermBackend<Stdout>>, mut app: App) -> io::Result<()> {
    loop {
        app.poll(Instant::now());
        terminal.draw(|f| draw(&mut app, f))?;
        if app.quit {
            return Ok(());
        }
        if event::poll(Duration::from_millis(100))? {
            // Drain everything pending before the next draw.
            loop {
                match event::read()? {
                    Event::Key(key) => {
                        if let Err(err) = app.handle_key(key) {
                            tracing::warn!(error = %err, "key action failed");
                            app.set_status(format!("Action failed: {err}"));
                        }
                    }
                    Event::Mouse(mouse) => {
                        if let Err(err) = app.handle_mouse(mouse) {
                            tracing::warn!(error = %err, "mouse action failed");
                            app.set_status(format!("Action failed: {err}"));
                        }
                    }
                    _ => {}
                }
                if app.quit {
                    return Ok(());
                }
                if !event::poll(Duration::ZERO)? {
                    break;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn storage_flag_without_path_is_a_usage_error() {
        for bad in [&["--storage"][..], &["--storage", "--version"][..]] {
            let err = save_slot_from_args(&args(bad)).expect_err("missing path");
            assert_eq!(err.kind(), io::ErrorKind::InvalidInput);
        }
    }

    #[test]
    fn storage_flag_with_path_is_accepted() {
        let tmp = tempfile::tempdir().expect("tempdir");
        let path = tmp.path().join("slot.json");
        let path_arg = path.display().to_string();
        let slot = save_slot_from_args(&args(&["--storage", &path_arg])).expect("slot");
        slot.save("x").expect("save");
        assert!(path.exists());
        assert!(save_slot_from_args(&[]).is_ok());
    }
}
