//! Hero screenshot rotator.
//!
//! Cycles through a fixed, ordered list of app screens: automatically on
//! a deadline-based timer and immediately on manual selection. The timer
//! is polled with an explicit `Instant` so the tick schedule has no
//! thread or background task behind it; a rotator that was stopped can
//! never mutate again no matter how much time passes.

use std::time::{Duration, Instant};

use crate::state::StateError;

/// Default auto-rotation interval, matching the landing page cadence.
pub const DEFAULT_ROTATE_INTERVAL: Duration = Duration::from_millis(4200);

/// One rotatable screen: id, tab label, bundled image path, caption.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayItem {
    pub id: String,
    pub label: String,
    pub image_ref: String,
    pub caption: String,
}

impl DisplayItem {
    pub fn new(id: &str, label: &str, image_ref: &str, caption: &str) -> Self {
        Self {
            id: id.to_string(),
            label: label.to_string(),
            image_ref: image_ref.to_string(),
            caption: caption.to_string(),
        }
    }
}

/// Rotator state machine.
///
/// Invariant: `active` is always a valid index into `items`, and `items`
/// is never empty (checked at construction).
#[derive(Debug)]
pub struct Rotator {
    items: Vec<DisplayItem>,
    active: usize,
    interval: Duration,
    /// Next scheduled advance. `None` means the timer is disarmed.
    deadline: Option<Instant>,
}

impl Rotator {
    pub fn new(items: Vec<DisplayItem>, interval: Duration) -> Result<Self, StateError> {
        if items.is_empty() {
            return Err(StateError::EmptyItems {
                component: "rotator",
            });
        }
        Ok(Self {
            items,
            active: 0,
            interval,
            deadline: None,
        })
    }

    /// Arm the timer. No-op when already running, so mounting is
    /// idempotent and does not reset a live rotation phase.
    pub fn start(&mut self, now: Instant) {
        if self.deadline.is_none() {
            self.deadline = Some(now + self.interval);
        }
    }

    /// Disarm the timer. Idempotent; a stopped rotator stays inert.
    pub fn stop(&mut self) {
        self.deadline = None;
    }

    pub fn is_running(&self) -> bool {
        self.deadline.is_some()
    }

    /// Manual selection. User intent always wins over the timer phase;
    /// an out-of-range index is ignored (tab indices are fixed at build
    /// time, so a miss is a caller bug, not a user error).
    ///
    /// Returns true if the active screen changed.
    pub fn select(&mut self, index: usize) -> bool {
        if index >= self.items.len() || index == self.active {
            return false;
        }
        self.active = index;
        true
    }

    /// Advance the timer if its deadline passed. Returns true when the
    /// active screen changed.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.deadline {
            Some(deadline) if now >= deadline => {
                self.active = (self.active + 1) % self.items.len();
                self.deadline = Some(now + self.interval);
                true
            }
            _ => false,
        }
    }

    pub fn active(&self) -> &DisplayItem {
        &self.items[self.active]
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn items(&self) -> &[DisplayItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screens(n: usize) -> Vec<DisplayItem> {
        (0..n)
            .map(|i| {
                DisplayItem::new(
                    &format!("screen-{i}"),
                    &format!("Screen {i}"),
                    &format!("screenshots/{i}.png"),
                    "caption",
                )
            })
            .collect()
    }

    #[test]
    fn empty_item_list_is_rejected() {
        let err = Rotator::new(vec![], DEFAULT_ROTATE_INTERVAL).unwrap_err();
        assert_eq!(
            err,
            StateError::EmptyItems {
                component: "rotator"
            }
        );
    }

    #[test]
    fn tick_wraps_from_last_index_to_zero() {
        let mut rotator = Rotator::new(screens(4), Duration::from_millis(100)).unwrap();
        let t0 = Instant::now();
        rotator.start(t0);
        rotator.select(3);
        assert!(rotator.poll(t0 + Duration::from_millis(100)));
        assert_eq!(rotator.active_index(), 0);
    }

    #[test]
    fn active_index_stays_in_bounds() {
        let mut rotator = Rotator::new(screens(3), Duration::from_millis(50)).unwrap();
        let t0 = Instant::now();
        rotator.start(t0);
        let mut now = t0;
        for step in 0..40 {
            match step % 3 {
                0 => {
                    now += Duration::from_millis(60);
                    rotator.poll(now);
                }
                1 => {
                    rotator.select(step % rotator.len());
                }
                _ => {
                    // Out-of-range selection must be a no-op, not a panic.
                    rotator.select(99);
                }
            }
            assert!(rotator.active_index() < rotator.len());
        }
    }

    #[test]
    fn selection_wins_over_timer_and_tick_advances_from_it() {
        let mut rotator = Rotator::new(screens(4), Duration::from_millis(100)).unwrap();
        let t0 = Instant::now();
        rotator.start(t0);

        // Timer has run for a while...
        rotator.poll(t0 + Duration::from_millis(100));
        assert_eq!(rotator.active_index(), 1);

        // ...then the user clicks a tab mid-interval.
        assert!(rotator.select(3));
        assert_eq!(rotator.active_index(), 3);

        // The very next tick advances from the selected index.
        rotator.poll(t0 + Duration::from_millis(250));
        assert_eq!(rotator.active_index(), 0);
    }

    #[test]
    fn stopped_rotator_is_inert_under_simulated_time() {
        let mut rotator = Rotator::new(screens(4), Duration::from_millis(100)).unwrap();
        let t0 = Instant::now();
        rotator.start(t0);
        rotator.poll(t0 + Duration::from_millis(100));
        assert_eq!(rotator.active_index(), 1);

        rotator.stop();
        assert!(!rotator.is_running());

        // Hours of simulated time later, nothing moves.
        assert!(!rotator.poll(t0 + Duration::from_secs(3600)));
        assert_eq!(rotator.active_index(), 1);
    }

    #[test]
    fn start_is_idempotent_and_does_not_reset_phase() {
        let mut rotator = Rotator::new(screens(2), Duration::from_millis(100)).unwrap();
        let t0 = Instant::now();
        rotator.start(t0);
        // A second start halfway through the interval must not push the
        // deadline out.
        rotator.start(t0 + Duration::from_millis(50));
        assert!(rotator.poll(t0 + Duration::from_millis(100)));
    }

    #[test]
    fn poll_before_deadline_does_nothing() {
        let mut rotator = Rotator::new(screens(2), Duration::from_millis(100)).unwrap();
        let t0 = Instant::now();
        rotator.start(t0);
        assert!(!rotator.poll(t0 + Duration::from_millis(99)));
        assert_eq!(rotator.active_index(), 0);
    }
}
