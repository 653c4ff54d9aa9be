//! Input state fed by discrete key and pointer events.
//!
//! - **Press timestamps:** every held key remembers when it was first pressed
//!   (repeats are ignored). Movement ramps are derived from these times, not
//!   from per-frame polling, so the feel does not depend on the frame rate.
//!
//! - **Release edges:** `is_just_released` / `is_pointer_just_released` are true
//!   only for the frame that drained the release. The game clears them with
//!   `end_frame()` once screen transitions have looked at them.
//!
//! - **Reversal marks:** releasing the last key of the direction that was
//!   driving the axis while the opposite direction is still held restarts the
//!   opposite ramp at the release time. Releasing the losing side changes
//!   nothing. The mark lives beside the press timestamps instead of rewriting
//!   them.

use std::collections::{HashMap, HashSet};

use crate::movement::{keyboard_axis, MovementTuning, PointerDrag};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Left,
    Right,
    Up,
    Down,
    W,
    A,
    S,
    D,
    Q,
    Z,
    P,
    T,
    Enter,
    Space,
    Escape,
    F3,
}

impl Key {
    /// Parse a physical key code as reported by browsers (`KeyboardEvent.code`).
    pub fn from_code(code: &str) -> Option<Self> {
        let key = match code {
            "ArrowLeft" => Self::Left,
            "ArrowRight" => Self::Right,
            "ArrowUp" => Self::Up,
            "ArrowDown" => Self::Down,
            "KeyW" => Self::W,
            "KeyA" => Self::A,
            "KeyS" => Self::S,
            "KeyD" => Self::D,
            "KeyQ" => Self::Q,
            "KeyZ" => Self::Z,
            "KeyP" => Self::P,
            "KeyT" => Self::T,
            "Enter" => Self::Enter,
            "Space" => Self::Space,
            "Escape" => Self::Escape,
            "F3" => Self::F3,
            _ => return None,
        };
        Some(key)
    }

    pub fn direction(self) -> Option<Direction> {
        Direction::ALL
            .iter()
            .copied()
            .find(|direction| direction.aliases().contains(&self))
    }
}

/// Movement directions with their keyboard aliases (QWERTY and AZERTY).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

impl Direction {
    pub const ALL: &'static [Direction] = &[
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    pub fn aliases(self) -> &'static [Key] {
        match self {
            Self::Left => &[Key::Left, Key::A, Key::Q],
            Self::Right => &[Key::Right, Key::D],
            Self::Up => &[Key::Up, Key::W, Key::Z],
            Self::Down => &[Key::Down, Key::S],
        }
    }

    /// Right and down count as positive on their axis.
    pub fn is_positive(self) -> bool {
        matches!(self, Self::Right | Self::Down)
    }

    pub fn opposite(self) -> Self {
        match self {
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Up => Self::Down,
            Self::Down => Self::Up,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum InputEvent {
    KeyDown { key: Key, repeat: bool },
    KeyUp { key: Key },
    PointerDown { x: f32, y: f32 },
    PointerMove { x: f32, y: f32 },
    PointerUp,
}

#[derive(Debug, Clone, Default)]
pub struct InputState {
    pressed_at: HashMap<Key, f64>,
    reversed_at: HashMap<Direction, f64>,
    just_released: HashSet<Key>,
    pointer: PointerDrag,
    pointer_just_released: bool,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_tuning(tuning: &MovementTuning) -> Self {
        let mut input = Self::default();
        input.pointer.set_min_distance(tuning.pointer_min_distance);
        input
    }

    pub fn apply(&mut self, event: InputEvent, timestamp_ms: f64) {
        match event {
            InputEvent::KeyDown { key, repeat } => self.key_down(key, repeat, timestamp_ms),
            InputEvent::KeyUp { key } => self.key_up(key, timestamp_ms),
            InputEvent::PointerDown { x, y } => self.pointer.press(x, y),
            InputEvent::PointerMove { x, y } => self.pointer.move_to(x, y),
            InputEvent::PointerUp => {
                if self.pointer.is_active() {
                    self.pointer_just_released = true;
                }
                self.pointer.release();
            }
        }
    }

    pub fn key_down(&mut self, key: Key, repeat: bool, timestamp_ms: f64) {
        if repeat || self.pressed_at.contains_key(&key) {
            return;
        }
        self.pressed_at.insert(key, timestamp_ms);
    }

    pub fn key_up(&mut self, key: Key, timestamp_ms: f64) {
        let direction = key.direction();
        let was_winning = direction.is_some_and(|direction| self.is_winning(direction));
        if self.pressed_at.remove(&key).is_none() {
            return;
        }
        self.just_released.insert(key);

        let Some(direction) = direction else {
            return;
        };
        if self.is_direction_held(direction) {
            return;
        }
        self.reversed_at.remove(&direction);
        // Only letting go of the side that was steering reverses the axis.
        let opposite = direction.opposite();
        if was_winning && self.is_direction_held(opposite) {
            self.reversed_at.insert(opposite, timestamp_ms);
        }
    }

    /// Whether `direction` currently drives its axis. Ties go to the
    /// positive side, matching `keyboard_axis`.
    fn is_winning(&self, direction: Direction) -> bool {
        let Some(own) = self.ramp_start(direction) else {
            return false;
        };
        match self.ramp_start(direction.opposite()) {
            None => true,
            Some(other) if direction.is_positive() => own >= other,
            Some(other) => own > other,
        }
    }

    pub fn is_held(&self, key: Key) -> bool {
        self.pressed_at.contains_key(&key)
    }

    pub fn is_just_released(&self, key: Key) -> bool {
        self.just_released.contains(&key)
    }

    pub fn any_key_just_released(&self) -> bool {
        !self.just_released.is_empty()
    }

    /// Keys released since the last `end_frame`, in no particular order.
    pub fn just_released_keys(&self) -> impl Iterator<Item = Key> + '_ {
        self.just_released.iter().copied()
    }

    pub fn is_pointer_down(&self) -> bool {
        self.pointer.is_active()
    }

    pub fn is_pointer_just_released(&self) -> bool {
        self.pointer_just_released
    }

    pub fn pointer(&self) -> &PointerDrag {
        &self.pointer
    }

    pub fn is_direction_held(&self, direction: Direction) -> bool {
        direction.aliases().iter().any(|key| self.is_held(*key))
    }

    /// Most recent press time among the direction's aliases.
    pub fn latest_press(&self, direction: Direction) -> Option<f64> {
        direction
            .aliases()
            .iter()
            .filter_map(|key| self.pressed_at.get(key).copied())
            .reduce(f64::max)
    }

    /// Time the direction's ramp starts from, including reversal marks.
    pub fn ramp_start(&self, direction: Direction) -> Option<f64> {
        let pressed = self.latest_press(direction)?;
        Some(match self.reversed_at.get(&direction) {
            Some(&reversed) => pressed.max(reversed),
            None => pressed,
        })
    }

    /// Desired hero movement for this frame, each component in `[-1, 1]`.
    /// An active pointer drag overrides the keyboard.
    pub fn movement_axes(&self, now_ms: f64, tuning: &MovementTuning) -> (f32, f32) {
        if self.pointer.is_active() {
            return self.pointer.direction();
        }
        let ramp = tuning.time_to_full_speed_ms;
        let x = keyboard_axis(
            self.ramp_start(Direction::Left),
            self.ramp_start(Direction::Right),
            now_ms,
            ramp,
        );
        let y = keyboard_axis(
            self.ramp_start(Direction::Up),
            self.ramp_start(Direction::Down),
            now_ms,
            ramp,
        );
        (x, y)
    }

    pub fn end_frame(&mut self) {
        self.just_released.clear();
        self.pointer_just_released = false;
    }
}
