// Platform-independent parts of the audio pipeline.

/// Mean of the analyser's byte magnitudes (0..255). Empty input reads as silence.
#[inline]
pub fn average_frequency(bins: &[u8]) -> f32 {
    if bins.is_empty() {
        return 0.0;
    }
    let sum: u32 = bins.iter().map(|&b| b as u32).sum();
    sum as f32 / bins.len() as f32
}

/// Where the decoded asset is in its lifecycle.
#[derive(Clone, Debug, PartialEq)]
pub enum AssetStatus {
    Loading,
    Ready { duration_sec: f64 },
    Failed(String),
}

impl AssetStatus {
    pub fn is_ready(&self) -> bool {
        matches!(self, AssetStatus::Ready { .. })
    }
}

/// Playback position bookkeeping against the audio context clock.
///
/// A buffer source cannot be paused, so pausing stops it and records how far
/// it got; the next start resumes from that offset on a fresh source.
#[derive(Clone, Debug, Default)]
pub struct PlaybackClock {
    progress_sec: f64,
    started_at: Option<f64>,
}

impl PlaybackClock {
    pub fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    /// Begin running at context time `now` and return the buffer offset to
    /// start from. Offsets at or past `duration_sec` wrap back to the start.
    pub fn start(&mut self, now: f64, duration_sec: f64) -> f64 {
        if let Some(t0) = self.started_at {
            return self.progress_sec + (now - t0).max(0.0);
        }
        if duration_sec > 0.0 && self.progress_sec >= duration_sec {
            self.progress_sec = 0.0;
        }
        self.started_at = Some(now);
        self.progress_sec
    }

    /// Stop running at `now`, keeping the accumulated position.
    pub fn pause(&mut self, now: f64) {
        if let Some(t0) = self.started_at.take() {
            self.progress_sec += (now - t0).max(0.0);
        }
    }

    pub fn position(&self, now: f64) -> f64 {
        match self.started_at {
            Some(t0) => self.progress_sec + (now - t0).max(0.0),
            None => self.progress_sec,
        }
    }
}

/// Outcome of a play request against the current asset and position.
#[derive(Clone, Debug, PartialEq)]
pub enum PlayDecision {
    /// Start a fresh source at this buffer offset.
    Start(f64),
    NotReady,
    Unavailable(String),
    AlreadyRunning,
}

/// Asset lifecycle plus playback position; decides what a play request does.
#[derive(Clone, Debug)]
pub struct Transport {
    status: AssetStatus,
    clock: PlaybackClock,
}

impl Default for Transport {
    fn default() -> Self {
        Self {
            status: AssetStatus::Loading,
            clock: PlaybackClock::default(),
        }
    }
}

impl Transport {
    pub fn status(&self) -> &AssetStatus {
        &self.status
    }

    pub fn is_running(&self) -> bool {
        self.clock.is_running()
    }

    pub fn attach(&mut self, duration_sec: f64) {
        self.status = AssetStatus::Ready { duration_sec };
    }

    pub fn fail(&mut self, reason: String) {
        self.status = AssetStatus::Failed(reason);
    }

    /// Reason the asset can never play, if loading failed.
    pub fn failure(&self) -> Option<&str> {
        match &self.status {
            AssetStatus::Failed(reason) => Some(reason),
            _ => None,
        }
    }

    /// On `Start` the clock is already running from `now`.
    pub fn request_play(&mut self, now: f64) -> PlayDecision {
        match &self.status {
            AssetStatus::Loading => PlayDecision::NotReady,
            AssetStatus::Failed(reason) => PlayDecision::Unavailable(reason.clone()),
            AssetStatus::Ready { .. } if self.clock.is_running() => PlayDecision::AlreadyRunning,
            AssetStatus::Ready { duration_sec } => {
                PlayDecision::Start(self.clock.start(now, *duration_sec))
            }
        }
    }

    /// Returns false when nothing was playing.
    pub fn pause(&mut self, now: f64) -> bool {
        if !self.clock.is_running() {
            return false;
        }
        self.clock.pause(now);
        true
    }

    pub fn position(&self, now: f64) -> f64 {
        self.clock.position(now)
    }
}
