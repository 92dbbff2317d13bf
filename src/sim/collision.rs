//! Collision and landing resolution
//!
//! Obstacles are checked first; ground contact only matters if the player
//! is still alive afterwards.

use serde::{Deserialize, Serialize};

use super::layout::Obstacle;
use super::state::Player;
use crate::consts::SAFE_LANDING_SPEED;
use crate::ground_y;

/// Why a round ended in a crash
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CrashCause {
    /// Body overlapped an obstacle
    Obstacle,
    /// Touched the ground faster than the safe landing speed
    HardLanding,
}

/// Result of one resolver pass
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Contact {
    /// Nothing touched
    Clear,
    Crashed(CrashCause),
    /// Safe touchdown on the ground
    Landed,
}

/// Test the player against obstacles and the ground, updating alive/landed.
///
/// On ground contact the body is snapped so its bottom rests on the ground.
/// A player that is already dead is left untouched.
pub fn resolve_contacts(
    player: &mut Player,
    obstacles: &[Obstacle],
    screen_height: f32,
) -> Contact {
    if !player.alive {
        return Contact::Clear;
    }

    let body = player.rect();
    if obstacles.iter().any(|o| body.intersects(&o.rect())) {
        player.alive = false;
        return Contact::Crashed(CrashCause::Obstacle);
    }

    let ground = ground_y(screen_height);
    if player.bottom() < ground {
        return Contact::Clear;
    }

    player.pos.y = ground - player.height;
    player.landed = true;
    if player.vel.y > SAFE_LANDING_SPEED {
        player.alive = false;
        Contact::Crashed(CrashCause::HardLanding)
    } else {
        Contact::Landed
    }
}
