//! Game state and core simulation types
//!
//! Everything a round needs lives in [`GameState`]; the tick function owns it
//! exclusively for the duration of a step.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::collision::CrashCause;
use super::layout::{LandingZone, Obstacle, generate_obstacles, landing_zones};
use super::rect::Rect;
use super::wind::WindState;
use crate::consts::*;

/// Current phase of the round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Player still aboard the plane
    PreJump,
    /// Player in the air
    Falling,
    /// Round over, player did not survive
    Crashed(CrashCause),
    /// Round over, safe landing scored
    Landed,
}

impl GamePhase {
    /// True for the phases that only a restart can leave
    pub fn is_terminal(&self) -> bool {
        matches!(self, GamePhase::Crashed(_) | GamePhase::Landed)
    }
}

/// How a finished round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundOutcome {
    Crashed { cause: CrashCause },
    Landed { score: u32 },
}

/// Notifications for the presentation layer (sound, effects, HUD)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Player left the plane
    Jump,
    /// Canopy opened at the given height
    ParachuteDeployed { height: f32 },
    /// Player hit an obstacle or the ground too fast
    Crash { cause: CrashCause },
    /// Player touched down safely; rank is set when the score made the leaderboard
    SafeLanding { score: u32, rank: Option<usize> },
    /// Wind picked a new direction
    WindChanged { direction: f32 },
}

/// The parachutist
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner of the body
    pub pos: Vec2,
    pub vel: Vec2,
    pub width: f32,
    pub height: f32,
    pub gravity: f32,
    pub max_speed: f32,
    pub parachute_deployed: bool,
    /// Y position captured the moment the canopy opened
    pub deploy_height: Option<f32>,
    pub alive: bool,
    pub landed: bool,
    /// Last wind direction handed over by the wind scheduler
    pub wind: f32,
}

impl Player {
    pub fn new(screen_width: f32) -> Self {
        Self {
            pos: Vec2::new((screen_width / 2.0).floor(), PLAYER_START_Y),
            vel: Vec2::new(0.0, PLAYER_START_SPEED_Y),
            width: PLAYER_WIDTH,
            height: PLAYER_HEIGHT,
            gravity: FREEFALL_GRAVITY,
            max_speed: FREEFALL_MAX_SPEED,
            parachute_deployed: false,
            deploy_height: None,
            alive: true,
            landed: false,
            wind: 0.0,
        }
    }

    pub fn rect(&self) -> Rect {
        Rect::new(self.pos.x, self.pos.y, self.width, self.height)
    }

    /// Horizontal center, rounded down to a whole pixel offset
    #[inline]
    pub fn center_x(&self) -> f32 {
        self.pos.x + (self.width / 2.0).floor()
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height
    }

    /// Open the canopy. Returns false (and changes nothing) if it is already open.
    pub fn deploy_parachute(&mut self) -> bool {
        if self.parachute_deployed {
            return false;
        }
        self.parachute_deployed = true;
        self.deploy_height = Some(self.pos.y);
        self.gravity = CANOPY_GRAVITY;
        self.max_speed = CANOPY_MAX_SPEED;
        self.vel.y = self.vel.y.min(self.max_speed);
        true
    }

    /// Update horizontal speed from steering input. Left wins if both are held.
    pub fn steer(&mut self, left: bool, right: bool) {
        if left {
            self.vel.x = (self.vel.x - STEER_ACCEL).max(-MAX_SPEED_X);
        } else if right {
            self.vel.x = (self.vel.x + STEER_ACCEL).min(MAX_SPEED_X);
        } else if self.vel.x > 0.0 {
            self.vel.x = (self.vel.x - STEER_DECAY).max(0.0);
        } else if self.vel.x < 0.0 {
            self.vel.x = (self.vel.x + STEER_DECAY).min(0.0);
        }
    }

    /// Advance one tick: wind drift, horizontal motion with wall clamping, gravity
    pub fn integrate(&mut self, screen_width: f32) {
        if self.parachute_deployed {
            self.vel.x += self.wind * WIND_COUPLING;
        }

        self.pos.x += self.vel.x;
        let max_x = screen_width - self.width;
        if self.pos.x < 0.0 {
            self.pos.x = 0.0;
            self.vel.x = 0.0;
        } else if self.pos.x > max_x {
            self.pos.x = max_x;
            self.vel.x = 0.0;
        }

        if !self.landed {
            self.vel.y = (self.vel.y + self.gravity).min(self.max_speed);
            self.pos.y += self.vel.y;
        }
    }
}

/// The jump plane. Crosses the screen once per round.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plane {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
    pub active: bool,
}

impl Default for Plane {
    fn default() -> Self {
        Self {
            pos: Vec2::new(-PLANE_WIDTH, PLANE_Y),
            width: PLANE_WIDTH,
            height: PLANE_HEIGHT,
            speed: PLANE_SPEED,
            active: true,
        }
    }
}

impl Plane {
    /// Fly right; once past the right edge park off-screen left and stay inactive
    pub fn update(&mut self, screen_width: f32) {
        if !self.active {
            return;
        }
        self.pos.x += self.speed;
        if self.pos.x > screen_width {
            self.pos.x = -self.width;
            self.active = false;
        }
    }

    /// Horizontal midpoint, rounded down to a whole pixel offset
    #[inline]
    pub fn midpoint_x(&self) -> f32 {
        self.pos.x + (self.width / 2.0).floor()
    }

    #[inline]
    pub fn underside(&self) -> f32 {
        self.pos.y + self.height
    }
}

/// Background cloud (visual only)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Cloud {
    pub pos: Vec2,
    pub width: f32,
    pub height: f32,
    pub speed: f32,
}

impl Cloud {
    pub fn random(rng: &mut Pcg32, screen_width: f32) -> Self {
        Self {
            pos: Vec2::new(
                rng.random_range(0..=screen_width as u32) as f32,
                random_cloud_y(rng),
            ),
            width: rng.random_range(50..=150) as f32,
            height: rng.random_range(30..=60) as f32,
            speed: rng.random_range(0.2..=1.0),
        }
    }

    /// Drift right, wrapping to the left edge at a new altitude
    pub fn update(&mut self, rng: &mut Pcg32, screen_width: f32) {
        self.pos.x += self.speed;
        if self.pos.x > screen_width {
            self.pos.x = -self.width;
            self.pos.y = random_cloud_y(rng);
        }
    }
}

fn random_cloud_y(rng: &mut Pcg32) -> f32 {
    rng.random_range(50..=200) as f32
}

/// Complete round state (deterministic, serializable)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    /// Seed this round was built from
    pub seed: u64,
    /// Round RNG; all layout, cloud and wind draws go through it
    pub rng: Pcg32,
    pub screen_width: f32,
    pub screen_height: f32,
    /// Simulation tick counter
    pub time_ticks: u64,
    pub phase: GamePhase,
    /// Final score (0 until a safe landing)
    pub score: u32,
    pub player: Player,
    pub plane: Plane,
    pub clouds: Vec<Cloud>,
    /// Sorted by x
    pub obstacles: Vec<Obstacle>,
    pub landing_zones: Vec<LandingZone>,
    pub wind: WindState,
    /// Events raised during the most recent tick
    #[serde(skip)]
    pub events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new round on the default screen
    pub fn new(seed: u64) -> Self {
        Self::with_screen(seed, SCREEN_WIDTH, SCREEN_HEIGHT)
    }

    /// Create a new round for a screen of the given size
    pub fn with_screen(seed: u64, screen_width: f32, screen_height: f32) -> Self {
        let mut rng = Pcg32::seed_from_u64(seed);
        let obstacles = generate_obstacles(&mut rng, screen_width, screen_height);
        let landing_zones = landing_zones(&obstacles, screen_width, screen_height);
        let clouds = (0..CLOUD_COUNT)
            .map(|_| Cloud::random(&mut rng, screen_width))
            .collect();
        let wind = WindState::new(&mut rng);

        log::info!(
            "New round (seed {}): {} obstacles, {} landing zones",
            seed,
            obstacles.len(),
            landing_zones.len()
        );

        Self {
            seed,
            rng,
            screen_width,
            screen_height,
            time_ticks: 0,
            phase: GamePhase::PreJump,
            score: 0,
            player: Player::new(screen_width),
            plane: Plane::default(),
            clouds,
            obstacles,
            landing_zones,
            wind,
            events: Vec::new(),
        }
    }

    /// Replace this round with a fresh one. Wind and score are not carried over.
    pub fn reset(&mut self) {
        let seed = self.rng.random::<u64>();
        *self = Self::with_screen(seed, self.screen_width, self.screen_height);
    }

    /// Player has left the plane
    pub fn jumping(&self) -> bool {
        self.phase != GamePhase::PreJump
    }

    pub fn game_over(&self) -> bool {
        self.phase.is_terminal()
    }

    /// Result of the round, once it is over
    pub fn outcome(&self) -> Option<RoundOutcome> {
        match self.phase {
            GamePhase::Crashed(cause) => Some(RoundOutcome::Crashed { cause }),
            GamePhase::Landed => Some(RoundOutcome::Landed { score: self.score }),
            GamePhase::PreJump | GamePhase::Falling => None,
        }
    }

    /// Y coordinate of the ground surface
    pub fn ground_y(&self) -> f32 {
        crate::ground_y(self.screen_height)
    }
}
