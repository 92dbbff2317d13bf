//! Obstacle placement and landing zone derivation
//!
//! Obstacles stand on the ground strip. Landing zones are thin bands just
//! above the ground in the gaps between obstacles and the screen edges.

use rand::Rng;
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::ground_y;

/// Obstacle count range per round
pub const OBSTACLE_MIN_COUNT: usize = 5;
pub const OBSTACLE_MAX_COUNT: usize = 8;
/// Obstacle size ranges (pixels)
pub const OBSTACLE_MIN_WIDTH: u32 = 30;
pub const OBSTACLE_MAX_WIDTH: u32 = 80;
pub const OBSTACLE_MIN_HEIGHT: u32 = 40;
pub const OBSTACLE_MAX_HEIGHT: u32 = 100;
/// Obstacle x positions are kept this far from both screen edges
pub const LAYOUT_MARGIN: f32 = 100.0;

/// Widest landing zone
pub const ZONE_MAX_WIDTH: f32 = 100.0;
/// Thickness of a landing zone band
pub const ZONE_HEIGHT: f32 = 10.0;
/// Gap between obstacles needed before a zone is placed in it
pub const ZONE_MIN_GAP: f32 = 80.0;

/// A ground obstacle (immutable for the round)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    pub x: f32,
    pub width: f32,
    pub height: f32,
    /// Top edge, derived from the ground level
    pub y: f32,
}

impl Obstacle {
    pub fn new(x: f32, width: f32, height: f32, screen_height: f32) -> Self {
        Self {
            x,
            width,
            height,
            y: ground_y(screen_height) - height,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Horizontal center, rounded down to a whole pixel
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.x + (self.width / 2.0).floor()
    }
}

/// A safe landing band (immutable for the round)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LandingZone {
    pub rect: Rect,
}

impl LandingZone {
    fn new(x: f32, width: f32, screen_height: f32) -> Self {
        let top = ground_y(screen_height) - ZONE_HEIGHT;
        Self {
            rect: Rect::new(x, top, width, ZONE_HEIGHT),
        }
    }
}

/// Place a random set of non-overlapping obstacles, sorted by x.
///
/// Widths are drawn first; the x positions are then spread over
/// `[LAYOUT_MARGIN, screen_width - LAYOUT_MARGIN]` with non-negative gaps
/// between neighbours. If the drawn widths cannot fit, trailing obstacles
/// are dropped until they do.
pub fn generate_obstacles(rng: &mut Pcg32, screen_width: f32, screen_height: f32) -> Vec<Obstacle> {
    let lo = LAYOUT_MARGIN;
    let hi = screen_width - LAYOUT_MARGIN;
    if hi < lo {
        return Vec::new();
    }

    let count = rng.random_range(OBSTACLE_MIN_COUNT..=OBSTACLE_MAX_COUNT);
    let mut sizes: Vec<(f32, f32)> = (0..count)
        .map(|_| {
            let w = rng.random_range(OBSTACLE_MIN_WIDTH..=OBSTACLE_MAX_WIDTH) as f32;
            let h = rng.random_range(OBSTACLE_MIN_HEIGHT..=OBSTACLE_MAX_HEIGHT) as f32;
            (w, h)
        })
        .collect();

    // Every obstacle but the last must fit before the last x position
    let packed = loop {
        let packed: f32 = sizes.iter().rev().skip(1).map(|(w, _)| w).sum();
        if lo + packed <= hi || sizes.len() <= 1 {
            break packed;
        }
        sizes.pop();
    };
    if sizes.len() < count {
        log::warn!(
            "Screen width {} fits only {} of {} obstacles",
            screen_width,
            sizes.len(),
            count
        );
    }

    let slack = (hi - lo - packed).floor().max(0.0) as u32;
    let mut offsets: Vec<u32> = (0..sizes.len())
        .map(|_| rng.random_range(0..=slack))
        .collect();
    offsets.sort_unstable();

    let mut preceding = 0.0;
    sizes
        .iter()
        .zip(offsets)
        .map(|(&(width, height), offset)| {
            let x = lo + offset as f32 + preceding;
            preceding += width;
            Obstacle::new(x, width, height, screen_height)
        })
        .collect()
}

/// Derive landing zones from the gaps around and between obstacles.
///
/// Returns an empty list when no gap is wide enough; that is not an error.
pub fn landing_zones(
    obstacles: &[Obstacle],
    screen_width: f32,
    screen_height: f32,
) -> Vec<LandingZone> {
    let mut sorted = obstacles.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x));

    let mut zones = Vec::new();
    let (Some(first), Some(last)) = (sorted.first(), sorted.last()) else {
        return zones;
    };

    if first.x > LAYOUT_MARGIN {
        let width = ZONE_MAX_WIDTH.min(first.x - 50.0);
        zones.push(LandingZone::new(first.x - width - 10.0, width, screen_height));
    }

    for pair in sorted.windows(2) {
        let gap = pair[1].x - pair[0].right();
        if gap > ZONE_MIN_GAP {
            let width = (gap - 20.0).min(ZONE_MAX_WIDTH);
            let x = pair[0].right() + ((gap - width) / 2.0).floor();
            zones.push(LandingZone::new(x, width, screen_height));
        }
    }

    if last.right() < screen_width - LAYOUT_MARGIN {
        let width = ZONE_MAX_WIDTH.min(screen_width - last.right() - 50.0);
        zones.push(LandingZone::new(last.right() + 10.0, width, screen_height));
    }

    zones
}

/// Midpoint of the widest obstacle-free span of ground, edges included
pub fn widest_gap_center(obstacles: &[Obstacle], screen_width: f32) -> f32 {
    let mut sorted = obstacles.to_vec();
    sorted.sort_by(|a, b| a.x.total_cmp(&b.x));

    let mut best = (0.0_f32, 0.0_f32);
    let mut cursor = 0.0_f32;
    for obstacle in &sorted {
        if obstacle.x - cursor > best.1 - best.0 {
            best = (cursor, obstacle.x);
        }
        cursor = cursor.max(obstacle.right());
    }
    if screen_width - cursor > best.1 - best.0 {
        best = (cursor, screen_width);
    }
    (best.0 + best.1) / 2.0
}
