//! HUD and banner text
//!
//! Pure string builders; drawing them is the front end's job.

use crate::highscores::HighScores;
use crate::sim::{GameState, RoundOutcome};

/// Wind arrow plus 1-6 dots scaled by strength, e.g. `Wind: →....`
pub fn wind_indicator(direction: f32) -> String {
    let arrow = if direction < 0.0 {
        '←'
    } else if direction > 0.0 {
        '→'
    } else {
        '—'
    };
    let dots = 1 + (direction.abs() * 5.0) as usize;
    format!("Wind: {}{}", arrow, ".".repeat(dots))
}

/// Headline shown once the round is over
pub fn round_banner(state: &GameState) -> Option<String> {
    state.outcome().map(|outcome| match outcome {
        RoundOutcome::Landed { score } => format!("You landed safely! Score: {}", score),
        RoundOutcome::Crashed { .. } => "Game Over - You crashed!".to_string(),
    })
}

/// Prompt shown under the banner while the round is over
pub fn restart_hint(state: &GameState) -> Option<&'static str> {
    state.game_over().then_some("Press R to restart")
}

/// Numbered leaderboard lines, at most `limit`
pub fn leaderboard_lines(scores: &HighScores, limit: usize) -> Vec<String> {
    scores
        .entries
        .iter()
        .take(limit)
        .enumerate()
        .map(|(i, score)| format!("{}. {}", i + 1, score))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::{CrashCause, GamePhase};

    #[test]
    fn test_wind_indicator() {
        assert_eq!(wind_indicator(0.0), "Wind: —.");
        assert_eq!(wind_indicator(-1.0), "Wind: ←......");
        assert_eq!(wind_indicator(0.45), "Wind: →...");
    }

    #[test]
    fn test_round_banner() {
        let mut state = GameState::new(1);
        assert_eq!(round_banner(&state), None);
        state.phase = GamePhase::Landed;
        state.score = 1050;
        assert_eq!(
            round_banner(&state).as_deref(),
            Some("You landed safely! Score: 1050")
        );
        state.phase = GamePhase::Crashed(CrashCause::HardLanding);
        assert_eq!(round_banner(&state).as_deref(), Some("Game Over - You crashed!"));
    }

    #[test]
    fn test_restart_hint_only_when_round_over() {
        let mut state = GameState::new(1);
        assert_eq!(restart_hint(&state), None);
        state.phase = GamePhase::Falling;
        assert_eq!(restart_hint(&state), None);
        state.phase = GamePhase::Crashed(CrashCause::Obstacle);
        assert_eq!(restart_hint(&state), Some("Press R to restart"));
        state.phase = GamePhase::Landed;
        assert_eq!(restart_hint(&state), Some("Press R to restart"));
    }

    #[test]
    fn test_leaderboard_lines() {
        let scores = HighScores {
            entries: vec![1500, 1200, 1100, 900, 800, 700],
        };
        let lines = leaderboard_lines(&scores, 5);
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], "1. 1500");
        assert_eq!(lines[4], "5. 800");
    }
}
