//! Fixed timestep simulation tick
//!
//! Update order per tick: plane, clouds, wind, jump trigger, then (while
//! falling) deploy, steering, physics, contact resolution and scoring.

use super::collision::{Contact, resolve_contacts};
use super::layout::widest_gap_center;
use super::scoring::{record, score_landing};
use super::state::{GameEvent, GamePhase, GameState};
use super::wind::update_wind;
use crate::highscores::HighScores;

/// Key snapshot for a single tick (level-triggered)
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    pub left: bool,
    pub right: bool,
    /// Open the canopy (ignored unless falling with it still packed)
    pub deploy: bool,
    /// Start a new round (ignored unless the round is over)
    pub restart: bool,
    /// Demo mode - the simulation steers itself
    pub autopilot: bool,
}

/// Ticks of drift the autopilot looks ahead when steering
const AUTOPILOT_LEAD_TICKS: f32 = 12.0;
/// Autopilot stops steering when this close to its target
const AUTOPILOT_DEAD_BAND: f32 = 4.0;

/// Advance the game state by one fixed timestep
pub fn tick(state: &mut GameState, input: &TickInput, scores: &mut HighScores) {
    state.events.clear();

    let input = if input.autopilot {
        autopilot_input(state, input)
    } else {
        input.clone()
    };

    // Round over: frozen until restart
    if state.phase.is_terminal() {
        if input.restart {
            state.reset();
        }
        return;
    }

    state.time_ticks += 1;

    let screen_width = state.screen_width;
    state.plane.update(screen_width);
    for cloud in &mut state.clouds {
        cloud.update(&mut state.rng, screen_width);
    }
    update_wind(state);

    if state.phase == GamePhase::PreJump && state.plane.midpoint_x() > screen_width / 3.0 {
        jump(state);
    }

    if state.phase == GamePhase::Falling && state.player.alive {
        update_falling(state, &input, scores);
    }
}

/// One-shot exit from the plane: snap under the plane's midpoint
fn jump(state: &mut GameState) {
    state.phase = GamePhase::Falling;
    state.player.pos.x = state.plane.midpoint_x();
    state.player.pos.y = state.plane.underside();
    state.events.push(GameEvent::Jump);
    log::debug!("Jump at x={:.0} (tick {})", state.player.pos.x, state.time_ticks);
}

fn update_falling(state: &mut GameState, input: &TickInput, scores: &mut HighScores) {
    if input.deploy && state.player.deploy_parachute() {
        let height = state.player.pos.y;
        state.events.push(GameEvent::ParachuteDeployed { height });
        log::debug!("Parachute deployed at y={:.1}", height);
    }

    state.player.steer(input.left, input.right);
    state.player.integrate(state.screen_width);

    match resolve_contacts(&mut state.player, &state.obstacles, state.screen_height) {
        Contact::Clear => {}
        Contact::Crashed(cause) => {
            state.phase = GamePhase::Crashed(cause);
            state.score = 0;
            state.events.push(GameEvent::Crash { cause });
            log::info!("Crashed ({:?}) after {} ticks", cause, state.time_ticks);
        }
        Contact::Landed => {
            let breakdown = score_landing(
                &state.player,
                &state.obstacles,
                &state.landing_zones,
                state.ground_y(),
            );
            state.phase = GamePhase::Landed;
            state.score = breakdown.total;
            let rank = record(scores, breakdown.total);
            state.events.push(GameEvent::SafeLanding {
                score: breakdown.total,
                rank,
            });
            log::info!(
                "Safe landing: {} (base {}, zone +{}, timing +{})",
                breakdown.total,
                breakdown.landing,
                breakdown.zone_bonus,
                breakdown.timing_bonus
            );
        }
    }
}

/// Synthesize inputs for demo mode.
///
/// Opens the canopy straight after the jump, steers toward the nearest
/// landing zone (or the widest open stretch of ground), and restarts once
/// the round is over.
fn autopilot_input(state: &GameState, base: &TickInput) -> TickInput {
    let mut input = base.clone();
    match state.phase {
        GamePhase::PreJump => {}
        GamePhase::Crashed(_) | GamePhase::Landed => input.restart = true,
        GamePhase::Falling => {
            let player = &state.player;
            input.deploy = !player.parachute_deployed;

            let center = player.center_x();
            let target = state
                .landing_zones
                .iter()
                .map(|z| z.rect.center_x())
                .min_by(|a, b| (a - center).abs().total_cmp(&(b - center).abs()))
                .unwrap_or_else(|| widest_gap_center(&state.obstacles, state.screen_width));

            let predicted = center + player.vel.x * AUTOPILOT_LEAD_TICKS;
            input.left = predicted > target + AUTOPILOT_DEAD_BAND;
            input.right = predicted < target - AUTOPILOT_DEAD_BAND;
        }
    }
    input
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::collision::CrashCause;
    use crate::sim::layout::Obstacle;
    use crate::sim::state::RoundOutcome;

    fn run_until_jump(state: &mut GameState, scores: &mut HighScores) {
        let input = TickInput::default();
        for _ in 0..1000 {
            tick(state, &input, scores);
            if state.jumping() {
                return;
            }
        }
        panic!("player never jumped");
    }

    #[test]
    fn test_jump_triggers_past_third_of_screen() {
        let mut state = GameState::new(12345);
        let mut scores = HighScores::new();
        run_until_jump(&mut state, &mut scores);

        assert_eq!(state.phase, GamePhase::Falling);
        assert!(state.events.contains(&GameEvent::Jump));
        assert!(state.plane.midpoint_x() > SCREEN_WIDTH / 3.0);
        assert!(state.plane.midpoint_x() - PLANE_SPEED <= SCREEN_WIDTH / 3.0);
        // Snapped under the plane, then one tick of free fall
        assert_eq!(state.player.pos.x, state.plane.midpoint_x());
        assert!((state.player.pos.y - (PLANE_Y + PLANE_HEIGHT + 1.2)).abs() < 1e-4);
    }

    #[test]
    fn test_player_waits_in_plane() {
        let mut state = GameState::new(12345);
        let mut scores = HighScores::new();
        let start = state.player.pos;
        let input = TickInput {
            deploy: true,
            left: true,
            ..Default::default()
        };
        tick(&mut state, &input, &mut scores);
        assert_eq!(state.phase, GamePhase::PreJump);
        assert_eq!(state.player.pos, start);
        assert!(!state.player.parachute_deployed);
    }

    #[test]
    fn test_deploy_emits_event_once() {
        let mut state = GameState::new(5);
        let mut scores = HighScores::new();
        run_until_jump(&mut state, &mut scores);

        let deploy = TickInput { deploy: true, ..Default::default() };
        tick(&mut state, &deploy, &mut scores);
        let height = state.player.deploy_height.expect("deployed");
        assert!(state
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::ParachuteDeployed { .. })));

        tick(&mut state, &deploy, &mut scores);
        assert_eq!(state.player.deploy_height, Some(height));
        assert!(!state
            .events
            .iter()
            .any(|e| matches!(e, GameEvent::ParachuteDeployed { .. })));
    }

    #[test]
    fn test_free_fall_ends_in_crash() {
        let mut state = GameState::new(99);
        let mut scores = HighScores::new();
        let input = TickInput::default();
        for _ in 0..2000 {
            tick(&mut state, &input, &mut scores);
            if state.game_over() {
                break;
            }
        }
        assert!(matches!(state.phase, GamePhase::Crashed(_)));
        assert_eq!(state.score, 0);
        assert!(!state.player.alive);
        assert!(scores.is_empty());
    }

    #[test]
    fn test_hard_landing_scenario() {
        let mut state = GameState::new(3);
        let mut scores = HighScores::new();
        run_until_jump(&mut state, &mut scores);

        state.obstacles.clear();
        state.landing_zones.clear();
        state.player.pos.y = state.ground_y() - state.player.height - 2.0;
        state.player.vel.y = 3.8;
        tick(&mut state, &TickInput::default(), &mut scores);

        assert_eq!(state.phase, GamePhase::Crashed(CrashCause::HardLanding));
        assert!((state.player.vel.y - 4.0).abs() < 1e-4);
        assert_eq!(state.score, 0);
        assert!(scores.is_empty());
        assert!(state
            .events
            .contains(&GameEvent::Crash { cause: CrashCause::HardLanding }));
    }

    #[test]
    fn test_safe_landing_scores_and_records() {
        let mut state = GameState::new(3);
        let mut scores = HighScores::new();
        run_until_jump(&mut state, &mut scores);

        state.obstacles = vec![Obstacle::new(400.0, 50.0, 60.0, SCREEN_HEIGHT)];
        state.landing_zones.clear();
        state.player.wind = 0.0;
        state.player.pos.y = 150.0;
        state.player.deploy_parachute();
        // Drop onto open ground left of the obstacle
        state.player.pos.x = 300.0;
        state.player.pos.y = state.ground_y() - state.player.height - 1.0;
        tick(&mut state, &TickInput::default(), &mut scores);

        assert_eq!(state.phase, GamePhase::Landed);
        // center 320, obstacle center 425 -> 895, timing 50
        assert_eq!(state.score, 945);
        assert_eq!(scores.entries, vec![945]);
        assert!(state
            .events
            .contains(&GameEvent::SafeLanding { score: 945, rank: Some(1) }));
    }

    #[test]
    fn test_zero_score_landing_is_recorded() {
        let mut state = GameState::with_screen(3, 4000.0, 600.0);
        let mut scores = HighScores::new();
        run_until_jump(&mut state, &mut scores);

        // Far enough from the only obstacle that the distance term bottoms out
        state.obstacles = vec![Obstacle::new(3900.0, 50.0, 60.0, 600.0)];
        state.landing_zones.clear();
        state.player.wind = 0.0;
        state.player.pos.y = 300.0;
        state.player.deploy_parachute();
        state.player.pos.x = 0.0;
        state.player.vel.x = 0.0;
        state.player.pos.y = state.ground_y() - state.player.height - 1.0;
        tick(&mut state, &TickInput::default(), &mut scores);

        assert_eq!(state.phase, GamePhase::Landed);
        assert_eq!(state.outcome(), Some(RoundOutcome::Landed { score: 0 }));
        assert!(state.player.alive);
        assert_eq!(state.score, 0);
        assert_eq!(scores.entries, vec![0]);
        assert!(state
            .events
            .contains(&GameEvent::SafeLanding { score: 0, rank: Some(1) }));
    }

    #[test]
    fn test_obstacle_crash_scores_nothing() {
        let mut state = GameState::new(3);
        let mut scores = HighScores {
            entries: vec![1200, 800],
        };
        run_until_jump(&mut state, &mut scores);

        // Roof at y = 480, directly under the falling player
        let x = state.player.pos.x - 5.0;
        state.obstacles = vec![Obstacle::new(x, 100.0, 100.0, SCREEN_HEIGHT)];
        state.landing_zones.clear();
        state.player.wind = 0.0;
        state.player.vel = glam::Vec2::new(0.0, 2.0);
        state.player.pos.y = 419.0;
        tick(&mut state, &TickInput::default(), &mut scores);

        assert_eq!(state.phase, GamePhase::Crashed(CrashCause::Obstacle));
        assert_eq!(
            state.outcome(),
            Some(RoundOutcome::Crashed { cause: CrashCause::Obstacle })
        );
        assert!(state
            .events
            .contains(&GameEvent::Crash { cause: CrashCause::Obstacle }));
        assert_eq!(state.score, 0);
        assert!(!state.player.alive);
        assert!(!state.player.landed);
        assert_eq!(scores.entries, vec![1200, 800]);
    }

    #[test]
    fn test_game_over_freezes_until_restart() {
        let mut state = GameState::new(8);
        let mut scores = HighScores::new();
        state.phase = GamePhase::Crashed(CrashCause::Obstacle);
        let plane_x = state.plane.pos.x;
        let ticks = state.time_ticks;

        let input = TickInput {
            left: true,
            deploy: true,
            ..Default::default()
        };
        tick(&mut state, &input, &mut scores);
        assert_eq!(state.plane.pos.x, plane_x);
        assert_eq!(state.time_ticks, ticks);
        assert!(state.game_over());

        tick(&mut state, &TickInput { restart: true, ..Default::default() }, &mut scores);
        assert!(!state.game_over());
        assert!(!state.jumping());
        assert_eq!(state.score, 0);
        assert!(state.player.alive);
    }

    #[test]
    fn test_restart_ignored_mid_round() {
        let mut state = GameState::new(8);
        let mut scores = HighScores::new();
        let seed = state.seed;
        tick(&mut state, &TickInput { restart: true, ..Default::default() }, &mut scores);
        assert_eq!(state.seed, seed);
        assert_eq!(state.time_ticks, 1);
    }

    #[test]
    fn test_wind_fires_before_jump() {
        let mut state = GameState::new(21);
        let mut scores = HighScores::new();
        state.wind.timer = 1;
        tick(&mut state, &TickInput::default(), &mut scores);
        assert!(!state.jumping());
        assert_eq!(state.player.wind, state.wind.direction);
        assert!((WIND_MIN_TICKS..=WIND_MAX_TICKS).contains(&state.wind.timer));
    }

    #[test]
    fn test_autopilot_finishes_and_restarts() {
        let mut state = GameState::new(2024);
        let mut scores = HighScores::new();
        let input = TickInput { autopilot: true, ..Default::default() };
        for _ in 0..2000 {
            tick(&mut state, &input, &mut scores);
            if state.game_over() {
                break;
            }
        }
        assert!(state.game_over());
        assert!(state.player.parachute_deployed);

        let seed = state.seed;
        tick(&mut state, &input, &mut scores);
        assert_ne!(state.seed, seed);
        assert_eq!(state.phase, GamePhase::PreJump);
    }

    #[test]
    fn test_determinism() {
        let mut state1 = GameState::new(99999);
        let mut state2 = GameState::new(99999);
        let mut scores1 = HighScores::new();
        let mut scores2 = HighScores::new();

        let inputs = [
            TickInput::default(),
            TickInput { left: true, ..Default::default() },
            TickInput { deploy: true, ..Default::default() },
            TickInput { right: true, ..Default::default() },
        ];

        for i in 0..600 {
            let input = &inputs[(i / 50) % inputs.len()];
            tick(&mut state1, input, &mut scores1);
            tick(&mut state2, input, &mut scores2);
        }

        assert_eq!(state1.time_ticks, state2.time_ticks);
        assert_eq!(state1.phase, state2.phase);
        assert_eq!(state1.player, state2.player);
        assert_eq!(state1.wind, state2.wind);
        assert_eq!(scores1.entries, scores2.entries);
    }
}
