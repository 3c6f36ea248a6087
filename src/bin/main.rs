#![warn(rust_2018_idioms)]
#[allow(unused_imports)]
#[cfg(feature = "log")]
#[macro_use]
extern crate log;

use std::{
    io::{Stdout, stdout},
    panic::{self, PanicHookInfo},
    time::Duration,
};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind, poll, read},
    execute,
    style::Print,
    terminal::{LeaveAlternateScreen, disable_raw_mode, enable_raw_mode, EnterAlternateScreen},
};
use tabsort::{
    app::App,
    canvas::Painter,
    data::load_table,
    event::{handle_key_event_or_break, handle_mouse_event},
    options::Args,
};
use tui::{Terminal, backend::CrosstermBackend};

const TICK_RATE: Duration = Duration::from_millis(100);

fn main() -> Result<()> {
    let args = Args::parse();

    #[cfg(all(feature = "fern", debug_assertions))]
    {
        tabsort::utils::logging::init_logger(
            log::LevelFilter::Debug,
            std::ffi::OsStr::new("debug.log"),
        )?;
    }

    let tables = args
        .files
        .iter()
        .enumerate()
        .map(|(index, path)| {
            load_table(path, args.delimiter, &args.no_sort, index)
                .with_context(|| format!("Unable to load '{}'.", path.display()))
        })
        .collect::<Result<Vec<_>>>()?;

    let mut app = App::new(tables)?;
    let painter = Painter::default();

    // Set up tui and crossterm
    let mut stdout_val = stdout();
    execute!(stdout_val, EnterAlternateScreen, EnableMouseCapture)?;
    enable_raw_mode()?;

    let mut terminal = Terminal::new(CrosstermBackend::new(stdout_val))?;
    terminal.clear()?;
    terminal.hide_cursor()?;

    // Set panic hook
    panic::set_hook(Box::new(|info| panic_hook(info)));

    loop {
        terminal.draw(|f| painter.draw(f, &mut app))?;

        if poll(TICK_RATE)? {
            match read()? {
                Event::Key(event) if event.kind == KeyEventKind::Press => {
                    if handle_key_event_or_break(event, &mut app) {
                        break;
                    }
                }
                Event::Mouse(event) => handle_mouse_event(event, &mut app),
                _ => {}
            }
        }
    }

    cleanup_terminal(&mut terminal)?;

    Ok(())
}

fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    Ok(())
}

/// Based on https://github.com/Rigellute/spotify-tui/blob/master/src/main.rs
fn panic_hook(panic_info: &PanicHookInfo<'_>) {
    let mut stdout = stdout();

    let msg = match panic_info.payload().downcast_ref::<&'static str>() {
        Some(s) => *s,
        None => match panic_info.payload().downcast_ref::<String>() {
            Some(s) => &s[..],
            None => "Box<Any>",
        },
    };

    let stacktrace: String = format!("{:?}", backtrace::Backtrace::new());

    disable_raw_mode().unwrap();
    execute!(stdout, DisableMouseCapture, LeaveAlternateScreen).unwrap();

    // Print stack trace. Must be done after!
    execute!(
        stdout,
        Print(format!(
            "thread '<unnamed>' panicked at '{}', {}\n\r{}",
            msg,
            panic_info.location().unwrap(),
            stacktrace
        )),
    )
    .unwrap();
}
