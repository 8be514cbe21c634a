//! Frames-per-second meter for the optional on-canvas readout.

#[cfg(test)]
#[path = "fps_test.rs"]
mod fps_test;

use crate::consts::FPS_SAMPLE_WINDOW_MS;

/// Counts frames and publishes the count once per sample window.
#[derive(Debug, Clone, Default)]
pub struct FpsMeter {
    frames: u32,
    window_start_ms: Option<f64>,
    fps: Option<u32>,
}

impl FpsMeter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one frame at `now_ms`. Returns the new reading when a sample
    /// window closes.
    pub fn tick(&mut self, now_ms: f64) -> Option<u32> {
        let Some(start) = self.window_start_ms else {
            self.window_start_ms = Some(now_ms);
            self.frames = 1;
            return None;
        };

        self.frames += 1;
        if now_ms - start < FPS_SAMPLE_WINDOW_MS {
            return None;
        }

        self.fps = Some(self.frames);
        self.frames = 0;
        self.window_start_ms = Some(now_ms);
        self.fps
    }

    /// Last published reading, if a full window has elapsed yet.
    #[must_use]
    pub fn fps(&self) -> Option<u32> {
        self.fps
    }
}
