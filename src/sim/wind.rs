//! Wind scheduler
//!
//! Every 3-6 seconds the wind picks a new direction in [-1, 1]. The player
//! only feels it while the canopy is open.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::state::{GameEvent, GameState};
use crate::consts::{WIND_MAX_TICKS, WIND_MIN_TICKS};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WindState {
    /// Current direction, negative blows left
    pub direction: f32,
    /// Ticks remaining until the next change
    pub timer: u32,
}

impl WindState {
    /// Calm wind with a freshly drawn countdown
    pub fn new(rng: &mut Pcg32) -> Self {
        Self {
            direction: 0.0,
            timer: next_interval(rng),
        }
    }

    /// Count down one tick. Returns the new direction when the wind changes.
    pub fn advance(&mut self, rng: &mut Pcg32) -> Option<f32> {
        self.timer = self.timer.saturating_sub(1);
        if self.timer > 0 {
            return None;
        }
        self.direction = rng.random_range(-1.0..=1.0);
        self.timer = next_interval(rng);
        Some(self.direction)
    }
}

fn next_interval(rng: &mut Pcg32) -> u32 {
    rng.random_range(WIND_MIN_TICKS..=WIND_MAX_TICKS)
}

/// Advance the round's wind and hand any change to the player
pub fn update_wind(state: &mut GameState) {
    if let Some(direction) = state.wind.advance(&mut state.rng) {
        state.player.wind = direction;
        state.events.push(GameEvent::WindChanged { direction });
        log::debug!("Wind changed to {:.2}, next change in {} ticks", direction, state.wind.timer);
    }
}
