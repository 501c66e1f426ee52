//! Terminal rendering of the game.
//!
//! [`Screen`] is a plain model of what is visible. [`TerminalView`] implements the view and
//! timer-display traits on top of it. Changes only mark the screen dirty; the whole screen is
//! redrawn once when a batch of changes is presented.

use std::cell::{Cell, RefCell};
use std::io::{self, Stdout, Write};
use std::rc::Rc;

use crossterm::cursor::MoveTo;
use crossterm::queue;
use crossterm::style::Print;
use crossterm::terminal::{Clear, ClearType};
use log::warn;

use crate::ui::view::{GameView, SoundPlayer, TimerDisplay};

const KEY_HELP: &str = "w/a/s/d move   r restart   q quit";

/// `Time Left: 3:00`.
pub fn format_time(seconds: u32) -> String {
    format!("Time Left: {}:{:02}", seconds / 60, seconds % 60)
}

#[derive(Debug, Clone, PartialEq)]
pub struct Screen {
    pub grid: Vec<Vec<String>>,
    pub score: i64,
    pub seconds: u32,
    /// Final score while the game-over overlay is visible.
    pub overlay: Option<i64>,
    pub board_visible: bool,
}

impl Screen {
    pub fn new(seconds: u32) -> Self {
        Self {
            grid: Vec::new(),
            score: 0,
            seconds,
            overlay: None,
            board_visible: true,
        }
    }

    /// Lines to print, top to bottom.
    pub fn render_lines(&self) -> Vec<String> {
        let mut lines = Vec::new();
        if self.board_visible {
            lines.push(format!("Score: {}    {}", self.score, format_time(self.seconds)));
            lines.push(String::new());
            for row in &self.grid {
                lines.push(row.join(" "));
            }
        }
        if let Some(final_score) = self.overlay {
            lines.push(String::new());
            lines.push("GAME OVER".to_string());
            lines.push(format!("Your Score: {}", final_score));
            lines.push("Press r to play again".to_string());
        }
        lines.push(String::new());
        lines.push(KEY_HELP.to_string());
        lines
    }
}

/// Shared handle on the terminal screen. Clones draw to the same model.
#[derive(Clone)]
pub struct TerminalView {
    screen: Rc<RefCell<Screen>>,
    dirty: Rc<Cell<bool>>,
}

impl TerminalView {
    pub fn new(screen: Screen) -> Self {
        Self {
            screen: Rc::new(RefCell::new(screen)),
            dirty: Rc::new(Cell::new(false)),
        }
    }

    pub fn redraw(&self) {
        self.dirty.set(false);
        self.draw_lines(&self.screen.borrow().render_lines());
    }

    /// Lines to draw if anything changed since the last frame.
    fn take_frame(&self) -> Option<Vec<String>> {
        if !self.dirty.replace(false) {
            return None;
        }
        Some(self.screen.borrow().render_lines())
    }

    fn draw_lines(&self, lines: &[String]) {
        if let Err(e) = draw(&mut io::stdout(), lines) {
            warn!("[Terminal] Redraw failed: {}", e);
        }
    }

    fn update(&self, change: impl FnOnce(&mut Screen)) {
        change(&mut self.screen.borrow_mut());
        self.dirty.set(true);
    }

    fn present_frame(&self) {
        if let Some(lines) = self.take_frame() {
            self.draw_lines(&lines);
        }
    }
}

fn draw(out: &mut Stdout, lines: &[String]) -> io::Result<()> {
    queue!(out, Clear(ClearType::All))?;
    for (row, line) in lines.iter().enumerate() {
        let row = u16::try_from(row).unwrap_or(u16::MAX);
        queue!(out, MoveTo(0, row), Print(line))?;
    }
    out.flush()
}

impl GameView for TerminalView {
    fn render_grid(&mut self, grid: &[Vec<String>]) {
        self.update(|s| s.grid = grid.to_vec());
    }

    fn show_score(&mut self, score: i64) {
        self.update(|s| s.score = score);
    }

    // The overlay covers the board until the next restart.
    fn show_game_over(&mut self, final_score: i64) {
        self.update(|s| {
            s.overlay = Some(final_score);
            s.board_visible = false;
        });
    }

    fn hide_game_over(&mut self) {
        self.update(|s| s.overlay = None);
    }

    fn show_board(&mut self) {
        self.update(|s| s.board_visible = true);
    }

    fn present(&mut self) {
        self.present_frame();
    }
}

impl TimerDisplay for TerminalView {
    fn show_time(&mut self, seconds: u32) {
        self.update(|s| s.seconds = seconds);
    }

    fn present(&mut self) {
        self.present_frame();
    }
}

/// Rings the terminal bell. Terminals have no volume control.
pub struct TerminalBell;

impl SoundPlayer for TerminalBell {
    fn play_collect(&mut self, _volume: f32) {
        let mut out = io::stdout();
        if let Err(e) = out.write_all(b"\x07").and_then(|_| out.flush()) {
            warn!("[Terminal] Bell failed: {}", e);
        }
    }
}
