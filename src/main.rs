//! Parachute Drop entry point
//!
//! Headless demo launcher: plays rounds on autopilot, persists the
//! leaderboard and logs what a front end would draw and play.

use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Parser;

use parachute_drop::audio::AudioManager;
use parachute_drop::sim::{GameEvent, GameState, TickInput, tick};
use parachute_drop::{FrameClock, HighScores, Settings, highscores, hud, settings};

/// Safety cap on ticks per round
const MAX_ROUND_TICKS: u64 = 60 * 60;

#[derive(Debug, Parser)]
#[command(name = "parachute-drop", about = "Headless Parachute Drop demo")]
struct Args {
    /// Seed for the first round (random if omitted)
    #[arg(long)]
    seed: Option<u64>,
    /// Number of rounds to play
    #[arg(long, default_value_t = 3)]
    rounds: u32,
    /// Run at 60 ticks per second instead of as fast as possible
    #[arg(long)]
    realtime: bool,
    /// Leaderboard file
    #[arg(long, default_value = highscores::DEFAULT_FILE)]
    scores: PathBuf,
    /// Settings file
    #[arg(long, default_value = settings::DEFAULT_FILE)]
    settings: PathBuf,
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    log::info!("Parachute Drop (headless) starting...");

    let settings = Settings::load(&args.settings);
    let audio = AudioManager::new(&settings);
    let mut scores = HighScores::load(&args.scores);

    if let Some(music) = audio.music() {
        log::debug!("Cue {} (gain {:.2}, looping)", music.file_name(), music.gain);
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut state = GameState::new(seed);
    let input = TickInput {
        autopilot: true,
        ..Default::default()
    };

    let session = Session {
        args: &args,
        settings: &settings,
        audio: &audio,
    };

    for round in 1..=args.rounds {
        play_round(&mut state, &input, &mut scores, &session);

        if let Some(banner) = hud::round_banner(&state) {
            println!("Round {}: {}", round, banner);
        }
        if let Some(hint) = hud::restart_hint(&state) {
            println!("  {}", hint);
        }
        let lines = hud::leaderboard_lines(&scores, settings.leaderboard_lines);
        if !lines.is_empty() {
            println!("High Scores:");
            for line in lines {
                println!("  {}", line);
            }
        }

        // Autopilot presses restart on the next tick
        if round < args.rounds {
            tick(&mut state, &input, &mut scores);
        }
    }
}

/// Collaborators that live for the whole run
struct Session<'a> {
    args: &'a Args,
    settings: &'a Settings,
    audio: &'a AudioManager,
}

fn play_round(
    state: &mut GameState,
    input: &TickInput,
    scores: &mut HighScores,
    session: &Session,
) {
    let mut clock = FrameClock::new();
    let mut last = Instant::now();
    let start_tick = state.time_ticks;

    while !state.game_over() && state.time_ticks - start_tick < MAX_ROUND_TICKS {
        let ticks = if session.args.realtime {
            std::thread::sleep(Duration::from_millis(4));
            let now = Instant::now();
            let dt = now.duration_since(last).as_secs_f32();
            last = now;
            clock.advance(dt)
        } else {
            1
        };

        for _ in 0..ticks {
            tick(state, input, scores);
            handle_events(state, scores, session);
            if state.game_over() {
                break;
            }
        }
    }

    if !state.game_over() {
        log::warn!("Round did not finish within {} ticks", MAX_ROUND_TICKS);
    }
}

fn handle_events(state: &GameState, scores: &HighScores, session: &Session) {
    for cue in session.audio.cues(&state.events) {
        log::debug!("Cue {} (gain {:.2})", cue.file_name(), cue.gain);
    }

    for event in &state.events {
        match event {
            GameEvent::WindChanged { direction } if session.settings.show_wind => {
                log::debug!("{}", hud::wind_indicator(*direction));
            }
            GameEvent::SafeLanding { rank: Some(_), .. } => {
                // Best effort: a failed save never ends the session
                if let Err(e) = scores.save(&session.args.scores) {
                    log::warn!("Could not save high scores: {}", e);
                }
            }
            _ => {}
        }
    }
}
