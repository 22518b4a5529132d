use crate::state::{Mode, State};
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Default for Handler {
    fn default() -> Self {
        Handler::new()
    }
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                        if tx_clone.send(Event::Input(key)).is_err() {
                            break;
                        }
                    }
                    Ok(_) => (),
                    Err(e) => error!("Failed to read terminal event: {}", e),
                },
                Ok(false) => (),
                Err(e) => error!("Failed to poll terminal events: {}", e),
            }
            if tx_clone.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(event) => Ok(handle_key(event, state)),
            Event::Tick => {
                state.advance_spinner_index();
                Ok(true)
            }
        }
    }
}

/// Apply a key press to the state. Returns false if exit was requested.
///
pub fn handle_key(event: KeyEvent, state: &mut State) -> bool {
    if let KeyEvent {
        code: KeyCode::Char('c'),
        modifiers: KeyModifiers::CONTROL,
        ..
    } = event
    {
        debug!("Processing exit terminal event '{:?}'...", event);
        return false;
    }

    let result = match state.mode() {
        Mode::Search => {
            match event.code {
                KeyCode::Esc | KeyCode::Enter => {
                    state.exit_search_mode();
                }
                KeyCode::Backspace => {
                    state.remove_search_char();
                }
                KeyCode::Char(c) => {
                    state.add_search_char(c);
                }
                _ => (),
            }
            Ok(())
        }
        Mode::SortMenu | Mode::CategoryMenu => match event.code {
            KeyCode::Esc | KeyCode::Char('q') => {
                state.close_menu();
                Ok(())
            }
            KeyCode::Char('j') | KeyCode::Down => {
                state.next_menu_item();
                Ok(())
            }
            KeyCode::Char('k') | KeyCode::Up => {
                state.previous_menu_item();
                Ok(())
            }
            KeyCode::Enter | KeyCode::Char(' ') => state.select_menu_item(),
            KeyCode::Char('x') if state.mode() == Mode::CategoryMenu => state.clear_categories(),
            _ => Ok(()),
        },
        Mode::Browse => match event.code {
            KeyCode::Char('q') => {
                debug!("Processing exit terminal event '{:?}'...", event);
                return false;
            }
            KeyCode::Char('j') | KeyCode::Down => {
                state.next_job();
                Ok(())
            }
            KeyCode::Char('k') | KeyCode::Up => {
                state.previous_job();
                Ok(())
            }
            KeyCode::Char('J') => {
                state.move_selected_down();
                Ok(())
            }
            KeyCode::Char('K') => {
                state.move_selected_up();
                Ok(())
            }
            KeyCode::Enter | KeyCode::Char('o') => {
                state.toggle_expanded();
                Ok(())
            }
            KeyCode::Char('/') => {
                state.enter_search_mode();
                Ok(())
            }
            KeyCode::Esc => {
                state.clear_search();
                Ok(())
            }
            KeyCode::Char('s') => {
                state.open_sort_menu();
                Ok(())
            }
            KeyCode::Char('c') => {
                state.open_category_menu();
                Ok(())
            }
            KeyCode::Char('l') | KeyCode::Right => state.next_page().map(|_| ()),
            KeyCode::Char('h') | KeyCode::Left => state.previous_page().map(|_| ()),
            KeyCode::Char('r') => state.request_jobs(),
            KeyCode::Char('d') => {
                state.toggle_log();
                Ok(())
            }
            _ => Ok(()),
        },
    };
    if let Err(e) = result {
        error!("Failed to handle terminal event '{:?}': {}", event, e);
    }
    true
}
