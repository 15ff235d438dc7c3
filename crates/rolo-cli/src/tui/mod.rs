//! Interactive contact browser.
//!
//! Single event-driven loop: crossterm input and fetch-thread messages are
//! folded into [`AppState`], and the whole screen re-renders each tick.

mod fetch;
mod fx;
mod state;
mod views;

use std::io;
use std::sync::mpsc;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use fetch::FetchOutcome;
use fx::ParticleField;
use state::{AppState, Mode, RemoteState};

use rolo_source::RemoteSource;
use rolo_store::LocalStore;

const TICK: Duration = Duration::from_millis(50);

pub fn run(store: LocalStore, source: Option<RemoteSource>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = event_loop(&mut terminal, store, source);

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    store: LocalStore,
    source: Option<RemoteSource>,
) -> Result<()> {
    let (tx, rx) = mpsc::channel::<FetchOutcome>();
    let mut state = AppState::new(store, source.is_none());
    let mut field = ParticleField::new();

    if let Some(source) = &source {
        fetch::spawn(source.clone(), state.generation, tx.clone());
    }

    loop {
        state.prune_toasts(Instant::now());

        terminal.draw(|f| {
            field.step(f.area());
            views::draw(f, &state);
            // Particles fill whatever the widgets left blank.
            field.render(f.area(), f.buffer_mut());
        })?;

        if event::poll(TICK)? {
            if let Event::Key(key) = event::read()? {
                handle_key(&mut state, key, &source, &tx);
            }
        }

        if let Ok(outcome) = rx.try_recv() {
            state.apply_fetch(outcome);
        }

        if state.should_quit {
            break;
        }
    }

    Ok(())
}

fn handle_key(
    state: &mut AppState,
    key: KeyEvent,
    source: &Option<RemoteSource>,
    tx: &mpsc::Sender<FetchOutcome>,
) {
    // Only handle key press events, not release
    if key.kind != KeyEventKind::Press {
        return;
    }

    match state.mode {
        Mode::Browse => handle_browse_key(state, key, source, tx),
        Mode::Search => handle_search_key(state, key),
        Mode::AddForm => handle_form_key(state, key),
    }
}

fn handle_browse_key(
    state: &mut AppState,
    key: KeyEvent,
    source: &Option<RemoteSource>,
    tx: &mpsc::Sender<FetchOutcome>,
) {
    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            state.should_quit = true;
        }
        KeyCode::Char('/') => {
            state.mode = Mode::Search;
        }
        KeyCode::Char('a') => {
            state.mode = Mode::AddForm;
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            state.delete_selected();
        }
        KeyCode::Char('g') => {
            state.grouped = !state.grouped;
            state.selected = 0;
        }
        KeyCode::Char(']') => state.jump_group(1),
        KeyCode::Char('[') => state.jump_group(-1),
        KeyCode::Char('r') => {
            if let Some(source) = source {
                state.generation += 1;
                state.remote = RemoteState::Loading;
                fetch::spawn(source.clone(), state.generation, tx.clone());
            }
        }
        KeyCode::Down | KeyCode::Char('j') => state.select_next(),
        KeyCode::Up | KeyCode::Char('k') => state.select_prev(),
        KeyCode::Home => state.selected = 0,
        _ => {}
    }
}

fn handle_search_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => {
            state.mode = Mode::Browse;
        }
        KeyCode::Backspace => {
            state.query.pop();
            state.clamp_selection();
        }
        KeyCode::Char(c) => {
            state.query.push(c);
            state.selected = 0;
        }
        _ => {}
    }
}

fn handle_form_key(state: &mut AppState, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            state.form = Default::default();
            state.mode = Mode::Browse;
        }
        KeyCode::Enter => state.submit_form(),
        KeyCode::Tab | KeyCode::Down => state.form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => state.form.focus_prev(),
        KeyCode::Backspace => state.form.pop_char(),
        KeyCode::Char(c) => state.form.push_char(c),
        _ => {}
    }
}
