//! Keyboard input.
//!
//! crossterm reads block, so keys are read on a dedicated thread and forwarded to the
//! sync loop as messages. The thread never touches UI state.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use actix::Addr;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use log::{debug, error};

use crate::client::types::Direction;
use crate::sync::messages::{MovePlayer, RestartGame, Shutdown};
use crate::sync::sync_loop::SyncLoop;

const INPUT_POLL: Duration = Duration::from_millis(50);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputCommand {
    Move(Direction),
    Restart,
    Quit,
}

/// Map a key press to a command. Releases and repeats are ignored.
pub fn map_key(key: &KeyEvent) -> Option<InputCommand> {
    if key.kind != KeyEventKind::Press {
        return None;
    }
    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(InputCommand::Quit),
        KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(InputCommand::Quit),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(InputCommand::Restart),
        KeyCode::Char(c) => Direction::from_key(c).map(InputCommand::Move),
        _ => None,
    }
}

/// Read keys until `Quit` or until `stop` is raised.
pub fn spawn_input_thread(sync: Addr<SyncLoop>, stop: Arc<AtomicBool>) -> JoinHandle<()> {
    thread::spawn(move || {
        while !stop.load(Ordering::Relaxed) {
            match next_command() {
                Ok(Some(InputCommand::Move(direction))) => sync.do_send(MovePlayer { direction }),
                Ok(Some(InputCommand::Restart)) => sync.do_send(RestartGame),
                Ok(Some(InputCommand::Quit)) => {
                    sync.do_send(Shutdown);
                    break;
                }
                Ok(None) => {}
                Err(e) => {
                    error!("[Input] Keyboard read failed: {}", e);
                    sync.do_send(Shutdown);
                    break;
                }
            }
        }
        debug!("[Input] Input thread finished");
    })
}

fn next_command() -> std::io::Result<Option<InputCommand>> {
    if !event::poll(INPUT_POLL)? {
        return Ok(None);
    }
    match event::read()? {
        Event::Key(key) => Ok(map_key(&key)),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_wasd_moves() {
        assert_eq!(map_key(&press(KeyCode::Char('w'))), Some(InputCommand::Move(Direction::Up)));
        assert_eq!(map_key(&press(KeyCode::Char('a'))), Some(InputCommand::Move(Direction::Left)));
        assert_eq!(map_key(&press(KeyCode::Char('s'))), Some(InputCommand::Move(Direction::Down)));
        assert_eq!(map_key(&press(KeyCode::Char('d'))), Some(InputCommand::Move(Direction::Right)));
    }

    #[test]
    fn test_restart_and_quit() {
        assert_eq!(map_key(&press(KeyCode::Char('r'))), Some(InputCommand::Restart));
        assert_eq!(map_key(&press(KeyCode::Char('q'))), Some(InputCommand::Quit));
        assert_eq!(map_key(&press(KeyCode::Esc)), Some(InputCommand::Quit));
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(map_key(&ctrl_c), Some(InputCommand::Quit));
    }

    #[test]
    fn test_other_keys_ignored() {
        assert_eq!(map_key(&press(KeyCode::Char('x'))), None);
        assert_eq!(map_key(&press(KeyCode::Char('c'))), None);
        assert_eq!(map_key(&press(KeyCode::Enter)), None);
    }

    #[test]
    fn test_release_ignored() {
        let mut key = press(KeyCode::Char('w'));
        key.kind = KeyEventKind::Release;
        assert_eq!(map_key(&key), None);
    }
}
