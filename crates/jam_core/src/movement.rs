//! Normalization of digital input into per-axis movement in `[-1, 1]`.
//!
//! Keyboard axes ramp linearly from 0 to full speed over a fixed duration
//! after the winning direction started. Pointer and touch drags accelerate in
//! proportion to the distance covered since the press (or since the last
//! reversal) and saturate once it reaches `pointer_min_distance`.

use crate::lerp;

pub const DEFAULT_TIME_TO_FULL_SPEED_MS: f64 = 150.0;
pub const DEFAULT_POINTER_MIN_DISTANCE: f32 = 30.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MovementTuning {
    pub time_to_full_speed_ms: f64,
    pub pointer_min_distance: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            time_to_full_speed_ms: DEFAULT_TIME_TO_FULL_SPEED_MS,
            pointer_min_distance: DEFAULT_POINTER_MIN_DISTANCE,
        }
    }
}

/// Ramp value for one keyboard axis given when each side's ramp started.
///
/// The later start wins; equal starts favour the positive side.
pub fn keyboard_axis(
    negative_start: Option<f64>,
    positive_start: Option<f64>,
    now_ms: f64,
    time_to_full_speed_ms: f64,
) -> f32 {
    let (sign, start) = match (negative_start, positive_start) {
        (None, None) => return 0.0,
        (Some(negative), None) => (-1.0, negative),
        (None, Some(positive)) => (1.0, positive),
        (Some(negative), Some(positive)) if negative > positive => (-1.0, negative),
        (Some(_), Some(positive)) => (1.0, positive),
    };
    let t = ((now_ms - start) / time_to_full_speed_ms) as f32;
    sign * lerp(0.0, 1.0, t)
}

/// Drag extent along one axis. `min`/`max` bracket every position seen since
/// the press or the last reversal on that side.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AxisDrag {
    pub min: f32,
    pub max: f32,
    pub value: f32,
}

impl AxisDrag {
    fn start(position: f32) -> Self {
        Self {
            min: position,
            max: position,
            value: 0.0,
        }
    }

    fn advance(&mut self, position: f32, min_distance: f32) {
        if position > self.max {
            self.max = position;
            self.value = lerp(0.0, 1.0, (self.max - self.min) / min_distance);
        } else if position < self.min {
            self.min = position;
            self.value = -lerp(0.0, 1.0, (self.max - self.min) / min_distance);
        } else if position < self.max && self.value >= 0.0 {
            // heading back left/up after moving right/down
            self.min = position;
            self.value = 0.0;
        } else if self.min < position && self.value <= 0.0 {
            self.max = position;
            self.value = 0.0;
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerDrag {
    active: bool,
    position: (f32, f32),
    pub x: AxisDrag,
    pub y: AxisDrag,
    min_distance: f32,
}

impl Default for PointerDrag {
    fn default() -> Self {
        Self::new(DEFAULT_POINTER_MIN_DISTANCE)
    }
}

impl PointerDrag {
    pub fn new(min_distance: f32) -> Self {
        Self {
            active: false,
            position: (0.0, 0.0),
            x: AxisDrag::default(),
            y: AxisDrag::default(),
            min_distance,
        }
    }

    pub fn set_min_distance(&mut self, min_distance: f32) {
        self.min_distance = min_distance;
    }

    pub fn press(&mut self, x: f32, y: f32) {
        self.active = true;
        self.position = (x, y);
        self.x = AxisDrag::start(x);
        self.y = AxisDrag::start(y);
    }

    pub fn move_to(&mut self, x: f32, y: f32) {
        if !self.active {
            return;
        }
        self.position = (x, y);
        self.x.advance(x, self.min_distance);
        self.y.advance(y, self.min_distance);
    }

    pub fn release(&mut self) {
        let min_distance = self.min_distance;
        *self = Self::new(min_distance);
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn position(&self) -> (f32, f32) {
        self.position
    }

    pub fn direction(&self) -> (f32, f32) {
        (self.x.value, self.y.value)
    }
}
