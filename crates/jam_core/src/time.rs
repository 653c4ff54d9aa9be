//! Frame timing driven by externally supplied monotonic timestamps.
//!
//! The platform hands every frame a timestamp in milliseconds; the elapsed
//! time between consecutive frames scales all simulation. Pausing stops the
//! clock, and resuming rebases it on the resume time so the first frame after
//! a pause does not see the whole pause as one giant step.

const FPS_SAMPLE_COUNT: usize = 60;
const SPIKE_WARN_SECS: f32 = 0.25;

#[derive(Debug, Clone)]
pub struct FrameClock {
    last_ms: Option<f64>,
    running: bool,
    pub elapsed: f32,
    pub frame_count: u64,

    fps_samples: [f32; FPS_SAMPLE_COUNT],
    fps_sample_index: usize,
    pub smoothed_fps: f32,
    pub smoothed_frame_time_ms: f32,
}

impl FrameClock {
    pub fn new() -> Self {
        Self {
            last_ms: None,
            running: true,
            elapsed: 0.0,
            frame_count: 0,
            fps_samples: [1.0 / 60.0; FPS_SAMPLE_COUNT],
            fps_sample_index: 0,
            smoothed_fps: 60.0,
            smoothed_frame_time_ms: 16.667,
        }
    }

    /// Record a frame at `timestamp_ms` and return seconds since the previous
    /// one (0 for the first frame).
    pub fn tick(&mut self, timestamp_ms: f64) -> f32 {
        let elapsed = match self.last_ms {
            Some(last) => ((timestamp_ms - last).max(0.0) / 1000.0) as f32,
            None => 0.0,
        };
        self.last_ms = Some(timestamp_ms);
        self.elapsed = elapsed;
        self.frame_count += 1;

        if elapsed > SPIKE_WARN_SECS {
            log::warn!("Frame took {:.1}ms", elapsed * 1000.0);
        }

        if elapsed > 0.0 {
            self.fps_samples[self.fps_sample_index] = elapsed;
            self.fps_sample_index = (self.fps_sample_index + 1) % FPS_SAMPLE_COUNT;
            let avg_dt = self.fps_samples.iter().sum::<f32>() / FPS_SAMPLE_COUNT as f32;
            self.smoothed_frame_time_ms = avg_dt * 1000.0;
            self.smoothed_fps = if avg_dt > 0.0 { 1.0 / avg_dt } else { 0.0 };
        }
        elapsed
    }

    pub fn pause(&mut self) {
        self.running = false;
    }

    pub fn resume(&mut self, now_ms: f64) {
        self.running = true;
        self.last_ms = Some(now_ms);
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
