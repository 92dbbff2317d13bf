//! Landing score
//!
//! A safe landing scores `1000 - mean distance to obstacle centers`, plus 500
//! for touching down inside a landing zone, plus up to 200 for opening the
//! canopy high up. Crashes always score 0.

use glam::Vec2;

use super::layout::{LandingZone, Obstacle};
use super::state::Player;
use crate::consts::*;
use crate::highscores::HighScores;

/// Components of a landing score
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScoreBreakdown {
    /// Base score from the distance term
    pub landing: i64,
    pub zone_bonus: i64,
    pub timing_bonus: i64,
    /// Final score, floored at zero
    pub total: u32,
}

/// `1000 - sum(|center_x - obstacle center|) / obstacle count`, division truncated.
/// With no obstacles there is no distance penalty.
pub fn landing_score(center_x: f32, obstacles: &[Obstacle]) -> i64 {
    if obstacles.is_empty() {
        return BASE_LANDING_SCORE;
    }
    let total: f64 = obstacles
        .iter()
        .map(|o| f64::from((center_x - o.center_x()).abs()))
        .sum();
    BASE_LANDING_SCORE - (total / obstacles.len() as f64).trunc() as i64
}

/// Bonus if the touchdown point (center_x, one pixel above ground) lies in a zone.
/// Zones never stack.
pub fn zone_bonus(center_x: f32, zones: &[LandingZone], ground_y: f32) -> i64 {
    let touchdown = Vec2::new(center_x, ground_y - 1.0);
    if zones.iter().any(|z| z.rect.contains_point(touchdown)) {
        ZONE_BONUS
    } else {
        0
    }
}

/// `max(0, 200 - deploy_height)`, truncated to whole points. No canopy, no bonus.
pub fn timing_bonus(deploy_height: Option<f32>) -> i64 {
    deploy_height
        .map(|h| (TIMING_BONUS_HEIGHT - h).max(0.0).trunc() as i64)
        .unwrap_or(0)
}

/// Score a safe landing
pub fn score_landing(
    player: &Player,
    obstacles: &[Obstacle],
    zones: &[LandingZone],
    ground_y: f32,
) -> ScoreBreakdown {
    let center_x = player.center_x();
    let landing = landing_score(center_x, obstacles);
    let zone_bonus = zone_bonus(center_x, zones, ground_y);
    let timing_bonus = timing_bonus(player.deploy_height);
    let total = (landing + zone_bonus + timing_bonus).clamp(0, i64::from(u32::MAX)) as u32;

    ScoreBreakdown {
        landing,
        zone_bonus,
        timing_bonus,
        total,
    }
}

/// Add a finished round's score to the leaderboard, returning the rank achieved
pub fn record(scores: &mut HighScores, score: u32) -> Option<usize> {
    let rank = scores.add_score(score);
    match rank {
        Some(rank) => log::info!("Score {} entered the leaderboard at #{}", score, rank),
        None => log::debug!("Score {} did not qualify for the leaderboard", score),
    }
    rank
}
