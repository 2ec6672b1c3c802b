//! Hero slider state and autoplay timer.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  SlideRotator                                            │
//! │  ├── SlideDeck: N slides + N indicators, one active      │
//! │  ├── timer: repeating task calling advance() per period  │
//! │  └── select_manually(k): activate k, then reset timer    │
//! └──────────────────────────────────────────────────────────┘
//! ```
//!
//! The deck is published through a `watch` channel so the page can
//! re-render whenever the timer (running on its own task) moves it.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

use crate::error::{SiteError, SiteResult};

/// Autoplay period for the hero slider
pub const DEFAULT_SLIDE_INTERVAL: Duration = Duration::from_millis(5000);

/// Index state of a fixed set of slides and their indicators.
///
/// Exactly one slide (and the indicator at the same position) is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideDeck {
    len: usize,
    current: usize,
}

impl SlideDeck {
    /// Create a deck with the first slide active.
    ///
    /// Fails if there are no slides or if the indicator count differs
    /// from the slide count.
    pub fn new(slides: usize, indicators: usize) -> SiteResult<Self> {
        if slides != indicators {
            return Err(SiteError::SlideIndicatorMismatch { slides, indicators });
        }
        if slides == 0 {
            return Err(SiteError::NoSlides);
        }
        Ok(Self {
            len: slides,
            current: 0,
        })
    }

    /// Number of slides (and indicators)
    pub fn slide_count(&self) -> usize {
        self.len
    }

    /// Index of the active slide
    pub fn current(&self) -> usize {
        self.current
    }

    /// Whether the slide and indicator at `index` carry the active mark
    pub fn is_active(&self, index: usize) -> bool {
        index == self.current
    }

    /// Active flag for each position, in order
    pub fn active_flags(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.len).map(|i| self.is_active(i))
    }

    /// Move the active mark to `index`.
    pub fn activate(&mut self, index: usize) -> SiteResult<()> {
        if index >= self.len {
            return Err(SiteError::SlideOutOfRange {
                index,
                len: self.len,
            });
        }
        self.current = index;
        Ok(())
    }

    /// Activate the next slide, wrapping to the first. Returns the new index.
    pub fn advance(&mut self) -> usize {
        self.current = (self.current + 1) % self.len;
        self.current
    }
}

/// Auto-advancing slider that owns its deck and its repeating timer.
///
/// Timers run on the tokio runtime, so `start` (and anything that calls
/// it) must be invoked from within a runtime context.
#[derive(Debug)]
pub struct SlideRotator {
    deck: Arc<watch::Sender<SlideDeck>>,
    period: Duration,
    timer: Option<JoinHandle<()>>,
}

impl SlideRotator {
    /// Create a stopped rotator over `slides` panels and `indicators` dots.
    pub fn new(slides: usize, indicators: usize, period: Duration) -> SiteResult<Self> {
        if period.is_zero() {
            return Err(SiteError::Config(
                "slide interval must be greater than zero".to_string(),
            ));
        }
        let deck = SlideDeck::new(slides, indicators)?;
        let (tx, _rx) = watch::channel(deck);
        Ok(Self {
            deck: Arc::new(tx),
            period,
            timer: None,
        })
    }

    /// Autoplay period
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Snapshot of the current deck
    pub fn deck(&self) -> SlideDeck {
        *self.deck.borrow()
    }

    /// Index of the active slide
    pub fn current(&self) -> usize {
        self.deck.borrow().current()
    }

    /// Receive a notification on every change to the deck
    pub fn subscribe(&self) -> watch::Receiver<SlideDeck> {
        self.deck.subscribe()
    }

    /// Whether the autoplay timer is running
    pub fn is_running(&self) -> bool {
        self.timer.as_ref().is_some_and(|handle| !handle.is_finished())
    }

    /// Start autoplay. The first advance happens one full period from now.
    ///
    /// Does nothing if the timer is already running.
    pub fn start(&mut self) {
        if self.is_running() {
            return;
        }

        let deck = Arc::clone(&self.deck);
        let period = self.period;
        let first_tick = Instant::now() + period;

        self.timer = Some(tokio::spawn(async move {
            let mut ticker = interval_at(first_tick, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                let index = advance_deck(&deck);
                tracing::debug!(index, "Slide auto-advanced");
            }
        }));
    }

    /// Cancel autoplay
    pub fn stop(&mut self) {
        if let Some(handle) = self.timer.take() {
            handle.abort();
        }
    }

    /// Restart autoplay so the next advance is a full period away
    pub fn reset(&mut self) {
        self.stop();
        self.start();
    }

    /// Activate the next slide immediately. Returns the new index.
    pub fn advance(&self) -> usize {
        advance_deck(&self.deck)
    }

    /// Move the active mark without touching the timer.
    pub fn activate(&self, index: usize) -> SiteResult<()> {
        let mut result = Ok(());
        self.deck.send_if_modified(|deck| {
            let before = deck.current();
            result = deck.activate(index);
            result.is_ok() && before != deck.current()
        });
        result
    }

    /// Indicator click: show `index` now and restart the autoplay cadence.
    pub fn select_manually(&mut self, index: usize) -> SiteResult<()> {
        self.activate(index)?;
        self.reset();
        tracing::debug!(index, "Slide selected manually, autoplay reset");
        Ok(())
    }
}

impl Drop for SlideRotator {
    fn drop(&mut self) {
        self.stop();
    }
}

fn advance_deck(deck: &watch::Sender<SlideDeck>) -> usize {
    let mut index = 0;
    deck.send_modify(|deck| index = deck.advance());
    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deck_starts_on_first_slide() {
        let deck = SlideDeck::new(3, 3).unwrap();
        assert_eq!(deck.current(), 0);
        assert_eq!(deck.active_flags().collect::<Vec<_>>(), vec![true, false, false]);
    }

    #[test]
    fn deck_advance_wraps() {
        let mut deck = SlideDeck::new(3, 3).unwrap();
        assert_eq!(deck.advance(), 1);
        assert_eq!(deck.advance(), 2);
        assert_eq!(deck.advance(), 0);
    }

    #[test]
    fn single_slide_deck_stays_put() {
        let mut deck = SlideDeck::new(1, 1).unwrap();
        assert_eq!(deck.advance(), 0);
        assert!(deck.is_active(0));
    }

    #[test]
    fn deck_rejects_mismatched_indicators() {
        let err = SlideDeck::new(3, 2).unwrap_err();
        assert!(matches!(
            err,
            SiteError::SlideIndicatorMismatch {
                slides: 3,
                indicators: 2
            }
        ));
    }

    #[test]
    fn deck_rejects_empty() {
        assert!(matches!(SlideDeck::new(0, 0), Err(SiteError::NoSlides)));
    }

    #[test]
    fn activate_out_of_range_leaves_deck_untouched() {
        let mut deck = SlideDeck::new(2, 2).unwrap();
        deck.activate(1).unwrap();
        let err = deck.activate(2).unwrap_err();
        assert!(matches!(err, SiteError::SlideOutOfRange { index: 2, len: 2 }));
        assert_eq!(deck.current(), 1);
    }

    #[test]
    fn rotator_rejects_zero_period() {
        let err = SlideRotator::new(2, 2, Duration::ZERO).unwrap_err();
        assert!(matches!(err, SiteError::Config(_)));
    }

    #[test]
    fn rotator_advances_without_timer() {
        let rotator = SlideRotator::new(2, 2, DEFAULT_SLIDE_INTERVAL).unwrap();
        assert!(!rotator.is_running());
        assert_eq!(rotator.advance(), 1);
        assert_eq!(rotator.current(), 1);
        assert_eq!(rotator.advance(), 0);
    }

    #[test]
    fn rotator_activate_notifies_subscribers() {
        let rotator = SlideRotator::new(3, 3, DEFAULT_SLIDE_INTERVAL).unwrap();
        let mut rx = rotator.subscribe();
        rotator.activate(2).unwrap();
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().current(), 2);

        // Re-activating the same slide is not a change
        rotator.activate(2).unwrap();
        assert!(!rx.has_changed().unwrap());
    }
}
