//! Recorded input played back through a `Game`.
//!
//! A replay is a list of frames, each with a timestamp and the key and
//! pointer events that arrived before it. Running the same script on two
//! fresh games produces the same signals and state.

use crate::game::{Game, GameSignal};
use crate::input::{InputEvent, Key};
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize, Clone)]
pub struct ReplayScript {
    pub frames: Vec<ReplayFrame>,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ReplayFrame {
    pub timestamp_ms: f64,
    #[serde(default)]
    pub events: Vec<ReplayEvent>,
}

/// Recorded event. Key codes use the platform names (`ArrowLeft`, `KeyW`, ...).
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ReplayEvent {
    KeyDown {
        code: String,
        #[serde(default)]
        repeat: bool,
    },
    KeyUp {
        code: String,
    },
    PointerDown {
        x: f32,
        y: f32,
    },
    PointerMove {
        x: f32,
        y: f32,
    },
    PointerUp,
}

impl ReplayEvent {
    /// `None` for key codes the game does not track.
    pub fn to_input(&self) -> Option<InputEvent> {
        match self {
            Self::KeyDown { code, repeat } => Key::from_code(code).map(|key| InputEvent::KeyDown {
                key,
                repeat: *repeat,
            }),
            Self::KeyUp { code } => Key::from_code(code).map(|key| InputEvent::KeyUp { key }),
            Self::PointerDown { x, y } => Some(InputEvent::PointerDown { x: *x, y: *y }),
            Self::PointerMove { x, y } => Some(InputEvent::PointerMove { x: *x, y: *y }),
            Self::PointerUp => Some(InputEvent::PointerUp),
        }
    }
}

impl ReplayScript {
    /// Feed every frame into `game`, returning all signals in order.
    pub fn run(&self, game: &mut Game) -> Vec<GameSignal> {
        let mut signals = Vec::new();
        for frame in &self.frames {
            for event in &frame.events {
                match event.to_input() {
                    Some(input) => game.push_event(input, frame.timestamp_ms),
                    None => log::debug!("Replay skipping untracked event {event:?}"),
                }
            }
            signals.extend(game.on_frame(frame.timestamp_ms));
        }
        signals
    }
}

pub fn load_replay_from_path(path: &Path) -> Result<ReplayScript, String> {
    let raw =
        fs::read_to_string(path).map_err(|e| format!("Failed to read {}: {e}", path.display()))?;
    let replay: ReplayScript = serde_json::from_str(&raw)
        .map_err(|e| format!("Failed to parse replay JSON {}: {e}", path.display()))?;
    validate_replay(&replay)?;
    Ok(replay)
}

fn validate_replay(replay: &ReplayScript) -> Result<(), String> {
    if replay.frames.is_empty() {
        return Err("Replay validation failed: frames list is empty".to_string());
    }
    for (index, pair) in replay.frames.windows(2).enumerate() {
        if pair[1].timestamp_ms <= pair[0].timestamp_ms {
            return Err(format!(
                "Replay validation failed: frame {} timestamp {} does not follow {}",
                index + 1,
                pair[1].timestamp_ms,
                pair[0].timestamp_ms
            ));
        }
    }
    Ok(())
}
