use fingerspell::{
    app::App,
    glyphs::GlyphSet,
    helpers::{builtin_word_list, load_word_list_from_file, parse_args},
    types::{LengthBounds, TICK_MS},
    words::dataset_bounds,
};

use ratatui::{
    crossterm::{
        event::{self, Event, KeyCode},
        execute,
        terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
    },
    prelude::*,
};
use std::{
    io,
    time::{Duration, Instant},
};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = parse_args();
    let words = match &args.dict_path {
        Some(path) => load_word_list_from_file(path),
        None => builtin_word_list(),
    };

    let glyphs = GlyphSet::builtin();
    let Some((dataset_min, dataset_max)) = dataset_bounds(&words, &glyphs) else {
        return Err("word list contains no spellable words".into());
    };

    let mut bounds = LengthBounds::new(dataset_min, dataset_max);
    if let Some(min) = args.min_len {
        bounds.set_min(min);
    }
    if let Some(max) = args.max_len {
        bounds.set_max(max);
    }

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(glyphs, words, bounds, args.delay);

    let tick_rate = Duration::from_millis(TICK_MS);
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| app.draw_ui(frame))?;
        terminal.show_cursor()?;

        let timeout = tick_rate.saturating_sub(last_tick.elapsed());
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match key.code {
                    KeyCode::Esc => break,
                    _ => app.handle_key(key),
                }
            }
        }

        if last_tick.elapsed() >= tick_rate {
            app.tick();
            last_tick = Instant::now();
        }
    }

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
