//! Rotating showcase state.
//!
//! A [`Carousel`] tracks which of `len` slides is on screen. Moves are either
//! manual ([`Carousel::advance`], [`Carousel::retreat`], [`Carousel::jump`]) or
//! scheduled by autoplay through [`Carousel::tick`]. Every manual move restarts
//! the autoplay deadline, so a click is never overridden by a timer that was
//! about to fire.
//!
//! Time is always passed in, the carousel never reads a clock itself.

use std::time::{Duration, Instant};

use crate::error::SiteError;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Direction {
    #[default]
    Forward,
    Backward,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Autoplay {
    period: Duration,
    /// `None` while paused.
    next_at: Option<Instant>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    current: usize,
    direction: Direction,
    autoplay: Option<Autoplay>,
}

impl Carousel {
    /// Manual-only carousel over `len` slides, `None` when there is nothing to show.
    pub fn new(len: usize) -> Option<Self> {
        (len > 0).then_some(Self {
            len,
            current: 0,
            direction: Direction::Forward,
            autoplay: None,
        })
    }

    /// Advance on its own every `period`, first at `now + period`.
    pub fn with_autoplay(mut self, period: Duration, now: Instant) -> Self {
        self.autoplay = Some(Autoplay {
            period,
            next_at: Some(now + period),
        });
        self
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> usize {
        self.current
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn period(&self) -> Option<Duration> {
        self.autoplay.map(|autoplay| autoplay.period)
    }

    /// When the next automatic advance is due, `None` for manual-only or paused carousels.
    pub fn deadline(&self) -> Option<Instant> {
        self.autoplay.and_then(|autoplay| autoplay.next_at)
    }

    pub fn is_paused(&self) -> bool {
        matches!(self.autoplay, Some(Autoplay { next_at: None, .. }))
    }

    pub fn next_index(&self) -> usize {
        (self.current + 1) % self.len
    }

    pub fn prev_index(&self) -> usize {
        (self.current + self.len - 1) % self.len
    }

    pub fn advance(&mut self, now: Instant) {
        self.step_forward();
        self.restart(now);
    }

    pub fn retreat(&mut self, now: Instant) {
        self.current = self.prev_index();
        self.direction = Direction::Backward;
        self.restart(now);
    }

    pub fn jump(&mut self, index: usize, now: Instant) -> Result<(), SiteError> {
        if index >= self.len {
            return Err(SiteError::SlideOutOfRange {
                index,
                len: self.len,
            });
        }
        self.direction = if index > self.current {
            Direction::Forward
        } else {
            Direction::Backward
        };
        self.current = index;
        self.restart(now);
        Ok(())
    }

    /// Apply every automatic advance due by `now` and return how many fired.
    ///
    /// Like an interval timer the schedule keeps its phase: a late tick catches
    /// up by whole periods instead of drifting.
    pub fn tick(&mut self, now: Instant) -> usize {
        let Some(Autoplay {
            period,
            next_at: Some(mut next_at),
        }) = self.autoplay
        else {
            return 0;
        };
        if period.is_zero() {
            return 0;
        }

        let mut fired = 0;
        while next_at <= now {
            self.step_forward();
            next_at += period;
            fired += 1;
        }
        self.autoplay = Some(Autoplay {
            period,
            next_at: Some(next_at),
        });
        fired
    }

    /// Stop automatic advances, e.g. under a reduced-motion preference.
    pub fn pause(&mut self) {
        if let Some(autoplay) = self.autoplay.as_mut() {
            autoplay.next_at = None;
        }
    }

    pub fn resume(&mut self, now: Instant) {
        if let Some(autoplay) = self.autoplay.as_mut() {
            autoplay.next_at = Some(now + autoplay.period);
        }
    }

    /// Slide indices from `current - radius` to `current + radius`, wrapping around.
    pub fn window(&self, radius: usize) -> Vec<usize> {
        let len = self.len;
        let back = radius % len;
        (0..=2 * radius)
            .map(|offset| (self.current + len - back + offset) % len)
            .collect()
    }

    fn step_forward(&mut self) {
        self.current = self.next_index();
        self.direction = Direction::Forward;
    }

    fn restart(&mut self, now: Instant) {
        if let Some(autoplay) = self.autoplay.as_mut() {
            if autoplay.next_at.is_some() {
                autoplay.next_at = Some(now + autoplay.period);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PERIOD: Duration = Duration::from_millis(6000);

    #[test]
    fn empty_showcase_has_no_carousel() {
        assert!(Carousel::new(0).is_none());
    }

    #[test]
    fn advancing_len_times_returns_to_start() {
        let now = Instant::now();
        let mut carousel = Carousel::new(5).unwrap();
        for _ in 0..5 {
            carousel.advance(now);
        }
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn hero_timer_cycles_back_to_first_image() {
        let start = Instant::now();
        let mut hero = Carousel::new(5).unwrap().with_autoplay(PERIOD, start);

        let mut seen = vec![hero.current()];
        for n in 1..=5u32 {
            assert_eq!(hero.tick(start + PERIOD * n), 1);
            seen.push(hero.current());
        }
        assert_eq!(seen, [0, 1, 2, 3, 4, 0]);
    }

    #[test]
    fn tick_before_deadline_does_nothing() {
        let start = Instant::now();
        let mut carousel = Carousel::new(3).unwrap().with_autoplay(PERIOD, start);
        assert_eq!(carousel.tick(start + PERIOD / 2), 0);
        assert_eq!(carousel.current(), 0);
    }

    #[test]
    fn late_tick_catches_up_whole_periods() {
        let start = Instant::now();
        let mut carousel = Carousel::new(4).unwrap().with_autoplay(PERIOD, start);
        assert_eq!(carousel.tick(start + PERIOD * 3 + PERIOD / 2), 3);
        assert_eq!(carousel.current(), 3);
        assert_eq!(carousel.deadline(), Some(start + PERIOD * 4));
    }

    #[test]
    fn jump_shows_exactly_that_slide() {
        let now = Instant::now();
        let mut carousel = Carousel::new(14).unwrap();
        for k in [7, 2, 13, 0] {
            carousel.jump(k, now).unwrap();
            assert_eq!(carousel.current(), k);
        }
    }

    #[test]
    fn jump_out_of_range_leaves_state_alone() {
        let now = Instant::now();
        let mut carousel = Carousel::new(5).unwrap();
        carousel.jump(3, now).unwrap();
        assert_eq!(
            carousel.jump(5, now),
            Err(SiteError::SlideOutOfRange { index: 5, len: 5 })
        );
        assert_eq!(carousel.current(), 3);
    }

    #[test]
    fn jump_direction_follows_target() {
        let now = Instant::now();
        let mut carousel = Carousel::new(6).unwrap();
        carousel.jump(4, now).unwrap();
        assert_eq!(carousel.direction(), Direction::Forward);
        carousel.jump(1, now).unwrap();
        assert_eq!(carousel.direction(), Direction::Backward);
    }

    #[test]
    fn retreat_wraps_to_last_slide() {
        let now = Instant::now();
        let mut carousel = Carousel::new(14).unwrap();
        carousel.retreat(now);
        assert_eq!(carousel.current(), 13);
        assert_eq!(carousel.direction(), Direction::Backward);
    }

    #[test]
    fn manual_move_postpones_autoplay() {
        let start = Instant::now();
        let mut carousel = Carousel::new(6).unwrap().with_autoplay(PERIOD, start);

        // a click just before the timer would have fired
        let click = start + PERIOD - Duration::from_millis(100);
        carousel.jump(3, click).unwrap();
        assert_eq!(carousel.deadline(), Some(click + PERIOD));

        assert_eq!(carousel.tick(start + PERIOD), 0);
        assert_eq!(carousel.current(), 3);
        assert_eq!(carousel.tick(click + PERIOD), 1);
        assert_eq!(carousel.current(), 4);
    }

    #[test]
    fn paused_carousel_stays_put() {
        let start = Instant::now();
        let mut carousel = Carousel::new(5).unwrap().with_autoplay(PERIOD, start);
        carousel.pause();
        assert!(carousel.is_paused());
        assert_eq!(carousel.deadline(), None);
        assert_eq!(carousel.tick(start + PERIOD * 10), 0);

        // manual moves still work, and do not restart the timer
        carousel.advance(start + PERIOD);
        assert_eq!(carousel.current(), 1);
        assert!(carousel.is_paused());

        let later = start + PERIOD * 11;
        carousel.resume(later);
        assert_eq!(carousel.deadline(), Some(later + PERIOD));
    }

    #[test]
    fn manual_only_carousel_never_ticks() {
        let now = Instant::now();
        let mut carousel = Carousel::new(3).unwrap();
        assert_eq!(carousel.deadline(), None);
        assert!(!carousel.is_paused());
        assert_eq!(carousel.tick(now + PERIOD * 4), 0);
    }

    #[test]
    fn thumbnail_window_wraps() {
        let now = Instant::now();
        let mut photos = Carousel::new(14).unwrap();
        assert_eq!(photos.window(2), [12, 13, 0, 1, 2]);
        photos.jump(13, now).unwrap();
        assert_eq!(photos.window(2), [11, 12, 13, 0, 1]);

        let small = Carousel::new(2).unwrap();
        assert_eq!(small.window(2), [0, 1, 0, 1, 0]);
    }
}
