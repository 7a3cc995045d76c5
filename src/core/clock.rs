use instant::Instant;

/// Seconds since the first reading; never resets and never decreases.
#[derive(Debug, Default)]
pub struct ElapsedClock {
    start: Option<Instant>,
    last_sec: f32,
}

impl ElapsedClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn elapsed_sec(&mut self) -> f32 {
        let start = *self.start.get_or_insert_with(Instant::now);
        let now = start.elapsed().as_secs_f32();
        self.last_sec = self.last_sec.max(now);
        self.last_sec
    }
}
