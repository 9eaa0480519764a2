use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};
use std::time::{Duration, Instant};

use crate::config::AppConfig;
use crate::content::{self, InterfacePanel};
use crate::state::reveal::{RevealSet, Viewport};
use crate::state::rotator::Rotator;
use crate::state::selector::Selector;

/// How long transient status messages stay in the info line.
const STATUS_TIMEOUT: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Popup {
    None,
    Help,
}

/// One section of the scrollable page, with a fixed row height.
#[derive(Debug, Clone, Copy)]
pub struct PageBlock {
    pub id: &'static str,
    pub height: u16,
}

/// The page layout, top to bottom. Heights are fixed so the reveal
/// watcher can be registered once at mount; the renderer pads each
/// section to exactly its block height.
pub const PAGE_BLOCKS: &[PageBlock] = &[
    PageBlock {
        id: "hero",
        height: 22,
    },
    PageBlock {
        id: "steps",
        height: 14,
    },
    PageBlock {
        id: "benefits",
        height: 15,
    },
    PageBlock {
        id: "interfaces",
        height: 16,
    },
    PageBlock {
        id: "owner",
        height: 12,
    },
    PageBlock {
        id: "brochure",
        height: 10,
    },
    PageBlock {
        id: "clubs",
        height: 11,
    },
    PageBlock {
        id: "pilot",
        height: 13,
    },
    PageBlock {
        id: "users",
        height: 10,
    },
    PageBlock {
        id: "cta",
        height: 5,
    },
];

/// Row offset of a block within the page document.
pub fn block_top(id: &str) -> u16 {
    let mut top = 0;
    for block in PAGE_BLOCKS {
        if block.id == id {
            return top;
        }
        top += block.height;
    }
    top
}

pub fn page_height() -> u16 {
    PAGE_BLOCKS.iter().map(|b| b.height).sum()
}

pub struct App {
    pub popup: Popup,

    // Hero screenshot rotator (top section)
    pub rotator: Rotator,
    /// Runtime auto-rotate toggle, seeded from config.
    pub auto_rotate: bool,

    // Interface gallery selector
    pub interfaces: Selector<InterfacePanel>,

    // Scroll-reveal watcher over the page blocks
    pub reveal: RevealSet,

    // Scroll position of the page document
    pub scroll: u16,
    /// Rows available for the page area, updated before every draw.
    viewport_height: u16,

    /// False when motion is disabled (reduce-motion config or
    /// --no-motion): no auto-rotation, everything revealed up front.
    motion: bool,

    // Status message (shown in info line, auto-clears after timeout)
    pub status_message: Option<String>,
    pub status_message_time: Option<Instant>,

    /// Set by every state mutation; the view redraws only when set.
    dirty: bool,
}

impl App {
    pub fn new(config: &AppConfig, motion: bool) -> Result<Self> {
        let interval = Duration::from_millis(config.rotate_interval_ms.max(1));
        let rotator = Rotator::new(content::hero_screens(), interval)?;
        let interfaces = Selector::new(content::interface_panels())?;

        let mut reveal = RevealSet::new(config.reveal_threshold, motion);
        for block in PAGE_BLOCKS {
            reveal.register(block.id, block_top(block.id), block.height);
        }

        Ok(Self {
            popup: Popup::None,
            rotator,
            auto_rotate: config.auto_rotate,
            interfaces,
            reveal,
            scroll: 0,
            viewport_height: 0,
            motion,
            status_message: None,
            status_message_time: None,
            dirty: true,
        })
    }

    /// Set a status message (auto-clears after a few seconds)
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
        self.status_message_time = Some(Instant::now());
        self.dirty = true;
    }

    pub fn viewport(&self) -> Viewport {
        Viewport {
            top: self.scroll,
            height: self.viewport_height,
        }
    }

    /// Called before every draw with the rows available for the page.
    /// Re-clamps the scroll, feeds the watcher and re-evaluates the
    /// rotator mount, since a resize changes what is on screen.
    pub fn set_viewport_height(&mut self, height: u16) {
        if height != self.viewport_height {
            self.viewport_height = height;
            self.scroll = self.scroll.min(self.max_scroll());
            self.dirty = true;
        }
        if self.reveal.observe(self.viewport()) > 0 {
            self.dirty = true;
        }
        self.update_rotator_mount();
    }

    fn max_scroll(&self) -> u16 {
        page_height().saturating_sub(self.viewport_height)
    }

    fn scroll_by(&mut self, delta: i32) {
        let target = (self.scroll as i32 + delta).clamp(0, self.max_scroll() as i32) as u16;
        if target != self.scroll {
            self.scroll = target;
            self.dirty = true;
        }
        if self.reveal.observe(self.viewport()) > 0 {
            self.dirty = true;
        }
        self.update_rotator_mount();
    }

    /// The rotator runs only while the hero block is on screen: mounting
    /// arms the timer, scrolling it fully out disarms it. Both
    /// operations are idempotent so this can run on every scroll.
    fn update_rotator_mount(&mut self) {
        let hero_height = PAGE_BLOCKS[0].height;
        let hero_on_screen = self.scroll < hero_height && self.viewport_height > 0;
        if hero_on_screen && self.auto_rotate && self.motion {
            self.rotator.start(Instant::now());
        } else if !hero_on_screen {
            self.rotator.stop();
        }
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        if self.popup != Popup::None {
            return self.handle_popup_key(key);
        }
        self.handle_normal_key(key)
    }

    fn handle_normal_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            // Page scrolling
            KeyCode::Char('j') | KeyCode::Down => self.scroll_by(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll_by(-1),
            KeyCode::PageDown => self.scroll_by(self.viewport_height.max(1) as i32),
            KeyCode::PageUp => self.scroll_by(-(self.viewport_height.max(1) as i32)),
            KeyCode::Char('g') | KeyCode::Home => self.scroll_by(-(page_height() as i32)),
            KeyCode::Char('G') | KeyCode::End => self.scroll_by(page_height() as i32),

            // Hero screen tabs: manual selection always wins over the timer
            KeyCode::Left | KeyCode::Char('h') => {
                let prev = self
                    .rotator
                    .active_index()
                    .checked_sub(1)
                    .unwrap_or(self.rotator.len() - 1);
                self.select_screen(prev);
            }
            KeyCode::Right | KeyCode::Char('l') => {
                let next = (self.rotator.active_index() + 1) % self.rotator.len();
                self.select_screen(next);
            }
            KeyCode::Char(c @ '1'..='9') => {
                let index = c as usize - '1' as usize;
                self.select_screen(index);
            }

            // Interface gallery selector
            KeyCode::Tab => {
                self.interfaces.next();
                self.dirty = true;
            }
            KeyCode::BackTab => {
                self.interfaces.prev();
                self.dirty = true;
            }

            // Auto-rotation toggle
            KeyCode::Char(' ') => self.toggle_auto_rotate(),

            KeyCode::Char('?') => {
                self.popup = Popup::Help;
                self.dirty = true;
            }

            _ => {}
        }
        Ok(())
    }

    fn handle_popup_key(&mut self, key: KeyEvent) -> Result<()> {
        if matches!(
            key.code,
            KeyCode::Esc | KeyCode::Char('?') | KeyCode::Enter | KeyCode::Char('q')
        ) {
            self.popup = Popup::None;
            self.dirty = true;
        }
        Ok(())
    }

    /// Jump the hero display to a screen. Out-of-range indices are
    /// ignored by the rotator itself.
    fn select_screen(&mut self, index: usize) {
        if self.rotator.select(index) {
            self.dirty = true;
        }
    }

    fn toggle_auto_rotate(&mut self) {
        if !self.motion {
            self.set_status("Motion is disabled (--no-motion)");
            return;
        }
        self.auto_rotate = !self.auto_rotate;
        if self.auto_rotate {
            self.set_status("Auto-rotate on");
        } else {
            self.rotator.stop();
            self.set_status("Auto-rotate off");
        }
        self.update_rotator_mount();
    }

    /// Periodic pass from the event loop: advance the rotator timer and
    /// expire the status message.
    pub fn tick(&mut self) {
        if self.rotator.poll(Instant::now()) {
            self.dirty = true;
        }

        if let Some(time) = self.status_message_time {
            if time.elapsed() >= STATUS_TIMEOUT {
                self.status_message = None;
                self.status_message_time = None;
                self.dirty = true;
            }
        }
    }

    /// Explicit teardown: the rotator must be inert before the terminal
    /// goes away.
    pub fn shutdown(&mut self) {
        self.rotator.stop();
    }

    /// Consume the redraw notification.
    pub fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    /// Force a redraw on the next loop pass (terminal resize etc).
    pub fn request_redraw(&mut self) {
        self.dirty = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn app(motion: bool) -> App {
        let mut app = App::new(&AppConfig::default(), motion).unwrap();
        app.set_viewport_height(20);
        app
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE)).unwrap();
    }

    #[test]
    fn page_blocks_cover_the_document() {
        let last = PAGE_BLOCKS.last().unwrap();
        assert_eq!(block_top(last.id) + last.height, page_height());
    }

    #[test]
    fn rotator_mounts_with_hero_and_unmounts_when_scrolled_away() {
        let mut app = app(true);
        assert!(app.rotator.is_running());

        // Scroll the hero fully out of the viewport.
        press(&mut app, KeyCode::End);
        assert!(!app.rotator.is_running());

        press(&mut app, KeyCode::Home);
        assert!(app.rotator.is_running());
    }

    #[test]
    fn no_motion_shows_every_block_and_never_arms_the_timer() {
        let app = app(false);
        assert!(!app.rotator.is_running());
        assert_eq!(app.reveal.watched_count(), 0);
        for block in PAGE_BLOCKS {
            assert!(app.reveal.is_visible(block.id));
        }
    }

    #[test]
    fn scrolling_reveals_blocks_one_shot() {
        let mut app = app(true);
        assert!(app.reveal.is_visible("hero"));
        assert!(!app.reveal.is_visible("pilot"));

        press(&mut app, KeyCode::End);
        assert!(app.reveal.is_visible("pilot"));
        assert!(app.reveal.is_visible("users"));
        assert!(app.reveal.is_visible("cta"));

        // Back to the top: nothing un-reveals.
        press(&mut app, KeyCode::Home);
        assert!(app.reveal.is_visible("pilot"));
    }

    #[test]
    fn every_original_page_section_has_a_block() {
        for id in [
            "hero",
            "steps",
            "benefits",
            "interfaces",
            "owner",
            "brochure",
            "clubs",
            "pilot",
            "users",
            "cta",
        ] {
            assert!(
                PAGE_BLOCKS.iter().any(|b| b.id == id),
                "missing page block {id}"
            );
        }
    }

    #[test]
    fn digit_keys_select_hero_screens() {
        let mut app = app(true);
        press(&mut app, KeyCode::Char('3'));
        assert_eq!(app.rotator.active_index(), 2);
        // Digit past the catalog is ignored.
        press(&mut app, KeyCode::Char('9'));
        assert_eq!(app.rotator.active_index(), 2);
    }

    #[test]
    fn arrow_keys_wrap_around_the_screen_list() {
        let mut app = app(true);
        press(&mut app, KeyCode::Left);
        assert_eq!(app.rotator.active_index(), app.rotator.len() - 1);
        press(&mut app, KeyCode::Right);
        assert_eq!(app.rotator.active_index(), 0);
    }

    #[test]
    fn space_toggles_auto_rotation() {
        let mut app = app(true);
        assert!(app.rotator.is_running());
        press(&mut app, KeyCode::Char(' '));
        assert!(!app.rotator.is_running());
        press(&mut app, KeyCode::Char(' '));
        assert!(app.rotator.is_running());
    }

    #[test]
    fn shutdown_disarms_the_rotator() {
        let mut app = app(true);
        app.shutdown();
        assert!(!app.rotator.is_running());
    }

    #[test]
    fn dirty_flag_fires_on_mutation_and_clears_on_take() {
        let mut app = app(true);
        assert!(app.take_dirty());
        assert!(!app.take_dirty());
        press(&mut app, KeyCode::Down);
        assert!(app.take_dirty());
    }
}
