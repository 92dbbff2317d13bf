//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed timestep only (one call to `tick` = 1/60 s)
//! - Seeded RNG only
//! - No rendering, audio or file system dependencies

pub mod collision;
pub mod layout;
pub mod rect;
pub mod scoring;
pub mod state;
pub mod tick;
pub mod wind;

pub use collision::{Contact, CrashCause, resolve_contacts};
pub use layout::{LandingZone, Obstacle, generate_obstacles, landing_zones};
pub use rect::Rect;
pub use scoring::{ScoreBreakdown, score_landing};
pub use state::{Cloud, GameEvent, GamePhase, GameState, Plane, Player, RoundOutcome};
pub use tick::{TickInput, tick};
pub use wind::WindState;
