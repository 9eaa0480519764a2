//! Presentation state for the interactive page sections.
//!
//! Three independent pieces: the hero screenshot rotator, the interface
//! selector, and the scroll-reveal watcher. None of them depend on each
//! other and none of them survive past the TUI session.

pub mod reveal;
pub mod rotator;
pub mod selector;

use thiserror::Error;

/// Construction-time errors for the stateful components.
///
/// The item catalogs are compile-time data, so an empty list means the
/// build shipped broken content. Fail fast instead of rendering nothing.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StateError {
    #[error("{component} requires a non-empty item list")]
    EmptyItems { component: &'static str },
}

/// Anything addressable by a stable string id within a fixed catalog.
pub trait Keyed {
    fn key(&self) -> &str;
}
