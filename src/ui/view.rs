//! Collaborators the core draws through.
//!
//! Each actor receives its own boxed handle at construction time, so the core never looks
//! anything up globally. The terminal front-end implements these traits, and tests use
//! recording fakes.

/// Grid, HUD and overlay sink.
pub trait GameView {
    fn render_grid(&mut self, grid: &[Vec<String>]);
    fn show_score(&mut self, score: i64);
    /// Show the game-over overlay with the final score.
    fn show_game_over(&mut self, final_score: i64);
    fn hide_game_over(&mut self);
    /// Re-show the grid and HUD after a restart.
    fn show_board(&mut self);
    /// Called once after a batch of changes.
    fn present(&mut self) {}
}

/// Countdown sink.
pub trait TimerDisplay {
    fn show_time(&mut self, seconds: u32);
    /// Called once after each countdown update.
    fn present(&mut self) {}
}

/// Sound trigger.
pub trait SoundPlayer {
    fn play_collect(&mut self, volume: f32);
}

/// Sound player that does nothing (`--no-sound`).
pub struct Muted;

impl SoundPlayer for Muted {
    fn play_collect(&mut self, _volume: f32) {}
}
