//! Presentation layer root module.
//!
//! - Collaborator traits (view, timer display, sound)
//! - The pure playing / game-over state machine
//! - The actor that applies snapshots and performs effects

pub mod view;
pub mod state_machine;
pub mod messages;
pub mod game_ui;

pub use game_ui::GameUi;
pub use state_machine::{UiEffect, UiPhase, UiStateMachine};
