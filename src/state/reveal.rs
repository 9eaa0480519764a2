//! Scroll-reveal watcher.
//!
//! Page blocks register their row extents against a single shared
//! watcher. The first time a block's visible fraction crosses the
//! threshold it is marked visible and dropped from the watch list in the
//! same step; it never hides again. When the reveal capability is off
//! (reduce-motion config or `--no-motion`) every block is visible from
//! the start and the watcher holds zero registrations.

/// Default visible-area fraction that triggers a reveal.
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.2;

/// The visible row window of the page: `top` is the scroll offset into
/// the document, `height` the terminal rows available for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub top: u16,
    pub height: u16,
}

#[derive(Debug)]
struct Entry {
    id: String,
    top: u16,
    height: u16,
    visible: bool,
    watched: bool,
}

#[derive(Debug)]
pub struct RevealSet {
    entries: Vec<Entry>,
    threshold: f64,
    /// False mirrors a runtime without intersection support: everything
    /// is shown immediately and nothing is ever watched.
    capability: bool,
}

impl RevealSet {
    pub fn new(threshold: f64, capability: bool) -> Self {
        Self {
            entries: Vec::new(),
            threshold: threshold.clamp(0.0, 1.0),
            capability,
        }
    }

    /// Register a block by its row extent in the page document. Without
    /// the capability the block is visible right away and no watcher
    /// registration is created.
    pub fn register(&mut self, id: &str, top: u16, height: u16) {
        self.entries.push(Entry {
            id: id.to_string(),
            top,
            height,
            visible: !self.capability,
            watched: self.capability,
        });
    }

    /// Feed the current viewport to the watcher. Each watched block
    /// whose visible fraction reaches the threshold is revealed and
    /// deregistered atomically. Returns how many blocks were newly
    /// revealed.
    pub fn observe(&mut self, viewport: Viewport) -> usize {
        let mut revealed = 0;
        for entry in self.entries.iter_mut().filter(|e| e.watched) {
            if visible_fraction(entry.top, entry.height, viewport) >= self.threshold {
                entry.visible = true;
                entry.watched = false;
                revealed += 1;
            }
        }
        revealed
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.entries
            .iter()
            .find(|e| e.id == id)
            .is_some_and(|e| e.visible)
    }

    /// How many blocks are still waiting on the watcher.
    pub fn watched_count(&self) -> usize {
        self.entries.iter().filter(|e| e.watched).count()
    }
}

/// Fraction of a block's rows that fall inside the viewport.
fn visible_fraction(top: u16, height: u16, viewport: Viewport) -> f64 {
    if height == 0 || viewport.height == 0 {
        return 0.0;
    }
    let block_top = top as u32;
    let block_bottom = block_top + height as u32;
    let view_top = viewport.top as u32;
    let view_bottom = view_top + viewport.height as u32;

    let overlap_top = block_top.max(view_top);
    let overlap_bottom = block_bottom.min(view_bottom);
    if overlap_bottom <= overlap_top {
        return 0.0;
    }
    (overlap_bottom - overlap_top) as f64 / height as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page() -> RevealSet {
        let mut set = RevealSet::new(DEFAULT_REVEAL_THRESHOLD, true);
        set.register("hero", 0, 10);
        set.register("benefits", 10, 10);
        set.register("clubs", 20, 10);
        set
    }

    #[test]
    fn blocks_start_hidden_and_watched() {
        let set = page();
        assert!(!set.is_visible("hero"));
        assert_eq!(set.watched_count(), 3);
    }

    #[test]
    fn block_reveals_once_it_crosses_the_threshold() {
        let mut set = page();
        // 1 of 10 rows of "benefits" visible: below the 0.2 threshold.
        set.observe(Viewport { top: 0, height: 11 });
        assert!(!set.is_visible("benefits"));
        // 2 of 10 rows: exactly at the threshold.
        set.observe(Viewport { top: 0, height: 12 });
        assert!(set.is_visible("benefits"));
    }

    #[test]
    fn reveal_is_one_shot_per_mount() {
        let mut set = page();
        assert_eq!(set.observe(Viewport { top: 0, height: 10 }), 1);
        assert!(set.is_visible("hero"));
        assert_eq!(set.watched_count(), 2);

        // Scroll away and back: the hero re-enters the viewport but is
        // no longer watched, so nothing fires again.
        set.observe(Viewport { top: 20, height: 10 });
        assert_eq!(set.observe(Viewport { top: 0, height: 10 }), 0);
        assert!(set.is_visible("hero"));
    }

    #[test]
    fn revealed_block_stays_visible_when_scrolled_out() {
        let mut set = page();
        set.observe(Viewport { top: 0, height: 10 });
        set.observe(Viewport { top: 20, height: 10 });
        assert!(set.is_visible("hero"));
    }

    #[test]
    fn missing_capability_shows_everything_with_zero_registrations() {
        let mut set = RevealSet::new(DEFAULT_REVEAL_THRESHOLD, false);
        set.register("hero", 0, 10);
        set.register("clubs", 20, 10);
        assert!(set.is_visible("hero"));
        assert!(set.is_visible("clubs"));
        assert_eq!(set.watched_count(), 0);
        // Observing is harmless and reveals nothing new.
        assert_eq!(set.observe(Viewport { top: 0, height: 30 }), 0);
    }

    #[test]
    fn zero_height_viewport_reveals_nothing() {
        let mut set = page();
        assert_eq!(set.observe(Viewport { top: 0, height: 0 }), 0);
        assert_eq!(set.watched_count(), 3);
    }
}
