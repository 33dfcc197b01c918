use std::time::Duration;

/// Counts frames per wall-clock second.
#[derive(Clone, Debug, Default)]
pub struct FrameRate {
    frames: u32,
    elapsed: Duration,
}

impl FrameRate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one frame that took `dt`. Returns the frame count each time a
    /// full second has accumulated, then starts the next window.
    pub fn tick(&mut self, dt: Duration) -> Option<u32> {
        self.frames += 1;
        self.elapsed += dt;
        if self.elapsed < Duration::from_secs(1) {
            return None;
        }
        let fps = self.frames;
        self.frames = 0;
        self.elapsed = Duration::ZERO;
        Some(fps)
    }
}
