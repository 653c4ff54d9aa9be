//! Frame-based sprite animation ticking.
//!
//! Frames advance on a fixed per-frame duration. At most one frame is advanced
//! per tick; leftover time carries over to the next tick.

pub const DEFAULT_FRAME_DURATION: f32 = 0.1;

/// Runtime state for one looping animation instance.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct AnimationState {
    pub frame: usize,
    /// Seconds accumulated toward the next frame.
    pub frame_time: f32,
}

impl AnimationState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance by `dt` seconds through a looping clip of `frame_count` frames.
    /// Returns the current frame index.
    pub fn tick(&mut self, dt: f32, frame_duration: f32, frame_count: usize) -> usize {
        if frame_count == 0 {
            return self.frame;
        }
        self.frame_time += dt;
        if self.frame_time > frame_duration {
            self.frame_time -= frame_duration;
            self.frame = (self.frame + 1) % frame_count;
        }
        self.frame
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_advances_through_frames() {
        let mut state = AnimationState::new();

        assert_eq!(state.tick(0.0, 0.1, 3), 0);
        assert_eq!(state.tick(0.05, 0.1, 3), 0);
        assert_eq!(state.tick(0.06, 0.1, 3), 1);
        assert!((state.frame_time - 0.01).abs() < 1e-5);
    }

    #[test]
    fn looping_wraps_around() {
        let mut state = AnimationState::new();
        for _ in 0..2 {
            state.tick(0.11, 0.1, 2);
        }
        assert_eq!(state.frame, 0);
    }

    #[test]
    fn advances_at_most_one_frame_per_tick() {
        let mut state = AnimationState::new();
        state.tick(0.35, 0.1, 5);
        assert_eq!(state.frame, 1);
        assert!((state.frame_time - 0.25).abs() < 1e-5);
    }

    #[test]
    fn single_frame_clip_stays_on_zero() {
        let mut state = AnimationState::new();
        state.tick(0.5, 0.1, 1);
        assert_eq!(state.frame, 0);
    }

    #[test]
    fn empty_clip_is_a_no_op() {
        let mut state = AnimationState::new();
        state.tick(0.5, 0.1, 0);
        assert_eq!(state, AnimationState::default());
    }
}
