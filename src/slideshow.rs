use std::ops::RangeInclusive;

pub const MIN_INTERVAL: f32 = 0.5;
pub const MAX_INTERVAL: f32 = 30.0;
pub const INTERVAL_RANGE: RangeInclusive<f32> = MIN_INTERVAL..=MAX_INTERVAL;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideshowStep {
    Idle,
    Advance,
    Finished,
}

/// Frame-driven timer that decides when the gallery should advance.
#[derive(Debug, Clone)]
pub struct Slideshow {
    active: bool,
    timer: f32,
    interval: f32,
    loop_at_end: bool,
}

impl Slideshow {
    pub fn new(interval: f32, loop_at_end: bool) -> Self {
        Self {
            active: false,
            timer: 0.0,
            interval: interval.clamp(MIN_INTERVAL, MAX_INTERVAL),
            loop_at_end,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn interval(&self) -> f32 {
        self.interval
    }

    pub fn set_interval(&mut self, interval: f32) {
        self.interval = interval.clamp(MIN_INTERVAL, MAX_INTERVAL);
    }

    pub fn set_loop(&mut self, loop_at_end: bool) {
        self.loop_at_end = loop_at_end;
    }

    pub fn start(&mut self) {
        self.active = true;
        self.timer = 0.0;
    }

    pub fn stop(&mut self) {
        self.active = false;
        self.timer = 0.0;
    }

    pub fn toggle(&mut self) {
        if self.active {
            self.stop();
        } else {
            self.start();
        }
    }

    /// Feed elapsed seconds. Without looping the show ends once the
    /// interval elapses on the album's last photo.
    pub fn tick(&mut self, dt: f32, at_last_photo: bool) -> SlideshowStep {
        if !self.active {
            return SlideshowStep::Idle;
        }

        self.timer += dt;
        if self.timer < self.interval {
            return SlideshowStep::Idle;
        }
        self.timer = 0.0;

        if self.loop_at_end || !at_last_photo {
            SlideshowStep::Advance
        } else {
            self.active = false;
            SlideshowStep::Finished
        }
    }
}
