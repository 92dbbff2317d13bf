//! Parachute Drop - A single-screen parachute landing arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, wind, scoring)
//! - `highscores`: Top-10 leaderboard
//! - `persistence`: JSON save/load with graceful fallback
//! - `settings`: Player preferences
//! - `audio`: Event to sound-cue mapping for an external mixer
//! - `hud`: HUD and banner text
//! - `clock`: Fixed timestep frame clock

pub mod audio;
pub mod clock;
pub mod highscores;
pub mod hud;
pub mod persistence;
pub mod settings;
pub mod sim;

pub use clock::FrameClock;
pub use highscores::HighScores;
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    /// Simulation rate (ticks per second)
    pub const TICK_RATE: u32 = 60;
    /// Fixed simulation timestep in seconds
    pub const SIM_DT: f32 = 1.0 / TICK_RATE as f32;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;

    /// Screen dimensions
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;
    /// Height of the ground strip at the bottom of the screen
    pub const GROUND_MARGIN: f32 = 20.0;

    /// Player body
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 60.0;
    pub const PLAYER_START_Y: f32 = 50.0;
    pub const PLAYER_START_SPEED_Y: f32 = 1.0;

    /// Horizontal steering
    pub const MAX_SPEED_X: f32 = 3.0;
    pub const STEER_ACCEL: f32 = 0.2;
    pub const STEER_DECAY: f32 = 0.1;
    /// Fraction of the wind direction added to speed_x each tick under canopy
    pub const WIND_COUPLING: f32 = 0.1;

    /// Free fall
    pub const FREEFALL_GRAVITY: f32 = 0.2;
    pub const FREEFALL_MAX_SPEED: f32 = 7.0;
    /// Under canopy
    pub const CANOPY_GRAVITY: f32 = 0.05;
    pub const CANOPY_MAX_SPEED: f32 = 2.0;
    /// Vertical speed above which ground contact is a crash
    pub const SAFE_LANDING_SPEED: f32 = 3.0;

    /// Plane
    pub const PLANE_WIDTH: f32 = 100.0;
    pub const PLANE_HEIGHT: f32 = 30.0;
    pub const PLANE_Y: f32 = 30.0;
    pub const PLANE_SPEED: f32 = 3.0;

    /// Clouds
    pub const CLOUD_COUNT: usize = 5;

    /// Wind change interval in ticks (3-6 seconds)
    pub const WIND_MIN_TICKS: u32 = 180;
    pub const WIND_MAX_TICKS: u32 = 360;

    /// Scoring
    pub const BASE_LANDING_SCORE: i64 = 1000;
    pub const ZONE_BONUS: i64 = 500;
    pub const TIMING_BONUS_HEIGHT: f32 = 200.0;
}

/// Y coordinate of the ground surface for a screen of the given height
#[inline]
pub fn ground_y(screen_height: f32) -> f32 {
    screen_height - consts::GROUND_MARGIN
}
