//! Playing / game-over state machine.
//!
//! Pure logic: every call returns the side effects to perform, in order. Effects tied to a
//! phase change are produced once per transition, never once per observed snapshot.

use crate::client::types::WorldSnapshot;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiPhase {
    Playing,
    GameOver,
}

/// Side effect requested by the state machine.
#[derive(Debug, Clone, PartialEq)]
pub enum UiEffect {
    PlayCollect,
    ShowScore(i64),
    RenderGrid(Vec<Vec<String>>),
    ShowGameOver { final_score: i64 },
    HideOverlay,
    ShowBoard,
}

#[derive(Debug)]
pub struct UiStateMachine {
    phase: UiPhase,
    last_score: i64,
}

impl UiStateMachine {
    pub fn new() -> Self {
        Self {
            phase: UiPhase::Playing,
            last_score: 0,
        }
    }

    pub fn phase(&self) -> UiPhase {
        self.phase
    }

    pub fn last_score(&self) -> i64 {
        self.last_score
    }

    /// Apply a fresh snapshot. The score is last-write-wins; fields the server left out keep
    /// their previous display.
    pub fn apply(&mut self, snapshot: &WorldSnapshot) -> Vec<UiEffect> {
        let mut effects = Vec::with_capacity(4);
        if snapshot.collected {
            effects.push(UiEffect::PlayCollect);
        }
        if let Some(score) = snapshot.score {
            self.last_score = score;
            effects.push(UiEffect::ShowScore(score));
        }
        if let Some(grid) = &snapshot.grid {
            effects.push(UiEffect::RenderGrid(grid.clone()));
        }
        if !snapshot.game_active {
            effects.extend(self.enter_game_over());
        }
        effects
    }

    /// The local countdown reached zero.
    pub fn expire(&mut self) -> Vec<UiEffect> {
        self.enter_game_over().into_iter().collect()
    }

    /// Back to `Playing`, then apply the restart response.
    pub fn restart(&mut self, snapshot: &WorldSnapshot) -> Vec<UiEffect> {
        self.phase = UiPhase::Playing;
        let mut effects = vec![UiEffect::HideOverlay, UiEffect::ShowBoard];
        effects.extend(self.apply(snapshot));
        effects
    }

    fn enter_game_over(&mut self) -> Option<UiEffect> {
        if self.phase == UiPhase::GameOver {
            return None;
        }
        self.phase = UiPhase::GameOver;
        Some(UiEffect::ShowGameOver { final_score: self.last_score })
    }
}

impl Default for UiStateMachine {
    fn default() -> Self {
        Self::new()
    }
}
