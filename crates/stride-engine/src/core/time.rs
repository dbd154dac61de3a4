/// Normalized position in an animation cycle, always in `[0, 1)`.
///
/// Wraps rather than clamps, so negative times and times past `duration`
/// land back inside the cycle.
pub fn cycle_phase(time: f32, duration: f32) -> f32 {
    wrap_phase(time / duration)
}

/// Wrap any phase into `[0, 1)`.
pub fn wrap_phase(phase: f32) -> f32 {
    let p = phase.rem_euclid(1.0);
    // rem_euclid can round up to exactly 1.0 for tiny negative inputs
    if p >= 1.0 { 0.0 } else { p }
}

/// Evenly spaced sample times across one clip, endpoints included.
///
/// A single frame samples `t = 0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSampler {
    frames: u32,
    duration: f32,
}

impl FrameSampler {
    pub fn new(frames: u32, duration: f32) -> Self {
        Self { frames, duration }
    }

    pub fn frames(&self) -> u32 {
        self.frames
    }

    /// Time of frame `index`.
    pub fn time_at(&self, index: u32) -> f32 {
        if self.frames > 1 {
            index as f32 / (self.frames - 1) as f32 * self.duration
        } else {
            0.0
        }
    }

    pub fn times(&self) -> impl Iterator<Item = f32> + '_ {
        (0..self.frames).map(|i| self.time_at(i))
    }
}

/// Looping playback clock for a clip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Playback {
    /// Current time in seconds, kept within `[0, duration)`.
    pub time: f32,
    /// Playback speed multiplier (1.0 = normal).
    pub speed: f32,
    /// Whether `tick` advances the clock.
    pub playing: bool,
}

impl Default for Playback {
    fn default() -> Self {
        Self {
            time: 0.0,
            speed: 1.0,
            playing: true,
        }
    }
}

impl Playback {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_speed(mut self, speed: f32) -> Self {
        self.speed = speed;
        self
    }

    /// Advance by `dt` seconds, looping over `duration`. Returns the new time.
    pub fn tick(&mut self, dt: f32, duration: f32) -> f32 {
        if self.playing && duration > 0.0 {
            self.time = wrap_phase((self.time + dt * self.speed) / duration) * duration;
        }
        self.time
    }

    /// Jump to an absolute time, wrapped into the cycle.
    pub fn seek(&mut self, time: f32, duration: f32) {
        self.time = if duration > 0.0 { cycle_phase(time, duration) * duration } else { 0.0 };
    }

    pub fn pause(&mut self) {
        self.playing = false;
    }

    pub fn resume(&mut self) {
        self.playing = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn phase_wraps_not_clamps() {
        assert_eq!(cycle_phase(0.0, 2.0), 0.0);
        assert!((cycle_phase(2.5, 2.0) - 0.25).abs() < 1e-6);
        assert!((cycle_phase(-0.5, 2.0) - 0.75).abs() < 1e-6);
        assert_eq!(cycle_phase(2.0, 2.0), 0.0);
    }

    #[test]
    fn phase_never_reaches_one() {
        for t in [-1e-9_f32, -1e-7, 0.999_999_9, 7.0, -3.0] {
            let p = wrap_phase(t);
            assert!((0.0..1.0).contains(&p), "{t} -> {p}");
        }
    }

    #[test]
    fn sampler_includes_endpoints() {
        let sampler = FrameSampler::new(5, 1.0);
        let times: Vec<f32> = sampler.times().collect();
        assert_eq!(times, vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn single_frame_samples_start() {
        assert_eq!(FrameSampler::new(1, 3.0).times().collect::<Vec<_>>(), vec![0.0]);
        assert_eq!(FrameSampler::new(0, 3.0).times().count(), 0);
    }

    #[test]
    fn playback_loops() {
        let mut clock = Playback::new();
        clock.tick(0.75, 1.0);
        let t = clock.tick(0.5, 1.0);
        assert!((t - 0.25).abs() < 1e-5, "t = {t}");
    }

    #[test]
    fn paused_playback_holds() {
        let mut clock = Playback::new().with_speed(2.0);
        clock.tick(0.1, 1.0);
        clock.pause();
        let held = clock.tick(0.3, 1.0);
        assert!((held - 0.2).abs() < 1e-6);
        clock.resume();
        assert!((clock.tick(0.1, 1.0) - 0.4).abs() < 1e-5);
    }

    #[test]
    fn seek_wraps() {
        let mut clock = Playback::new();
        clock.seek(3.5, 1.0);
        assert!((clock.time - 0.5).abs() < 1e-6);
    }
}
