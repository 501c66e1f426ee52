/// Game UI actor.
///
/// Owns the playing / game-over state machine and performs its effects on the injected view
/// and sound collaborators. All mutations happen inside handlers, on the system's event loop.

use actix::prelude::*;
use actix::MessageResult;
use log::{debug, info};

use crate::config::client::COLLECT_VOLUME;
use crate::ui::messages::{ApplySnapshot, GetPhase, Restarted, TimerExpired};
use crate::ui::state_machine::{UiEffect, UiStateMachine};
use crate::ui::view::{GameView, SoundPlayer};

pub struct GameUi {
    /// Playing / game-over phase and the last score shown.
    machine: UiStateMachine,
    /// Grid, HUD and overlay sink.
    view: Box<dyn GameView>,
    /// Plays the collect sound.
    sound: Box<dyn SoundPlayer>,
    /// Volume passed to every collect sound.
    collect_volume: f32,
}

impl GameUi {
    pub fn new(view: Box<dyn GameView>, sound: Box<dyn SoundPlayer>) -> Self {
        Self {
            machine: UiStateMachine::new(),
            view,
            sound,
            collect_volume: COLLECT_VOLUME,
        }
    }

    /// Run effects in the order the state machine produced them, then present the view once.
    fn perform(&mut self, effects: Vec<UiEffect>) {
        if effects.is_empty() {
            return;
        }
        for effect in effects {
            match effect {
                UiEffect::PlayCollect => {
                    debug!("[GameUi] Item collected");
                    self.sound.play_collect(self.collect_volume);
                }
                UiEffect::ShowScore(score) => self.view.show_score(score),
                UiEffect::RenderGrid(grid) => self.view.render_grid(&grid),
                UiEffect::ShowGameOver { final_score } => {
                    info!("[GameUi] Game over, final score {}", final_score);
                    self.view.show_game_over(final_score);
                }
                UiEffect::HideOverlay => self.view.hide_game_over(),
                UiEffect::ShowBoard => self.view.show_board(),
            }
        }
        self.view.present();
    }
}

impl Actor for GameUi {
    type Context = Context<Self>;
}

impl Handler<ApplySnapshot> for GameUi {
    type Result = ();

    fn handle(&mut self, msg: ApplySnapshot, _ctx: &mut Self::Context) -> Self::Result {
        let effects = self.machine.apply(&msg.snapshot);
        self.perform(effects);
    }
}

impl Handler<Restarted> for GameUi {
    type Result = ();

    fn handle(&mut self, msg: Restarted, _ctx: &mut Self::Context) -> Self::Result {
        info!("[GameUi] Restarted, back to playing");
        let effects = self.machine.restart(&msg.snapshot);
        self.perform(effects);
    }
}

impl Handler<TimerExpired> for GameUi {
    type Result = ();

    fn handle(&mut self, _msg: TimerExpired, _ctx: &mut Self::Context) -> Self::Result {
        let effects = self.machine.expire();
        self.perform(effects);
    }
}

impl Handler<GetPhase> for GameUi {
    type Result = MessageResult<GetPhase>;

    fn handle(&mut self, _msg: GetPhase, _ctx: &mut Self::Context) -> Self::Result {
        MessageResult(self.machine.phase())
    }
}
