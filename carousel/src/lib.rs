//! A headless engine for infinitely looping, multi-item carousels.
//!
//! For host-facing wiring (autoplay, a recording surface), see the `carousel-adapter` crate.
//!
//! This crate owns the index/offset/queue logic of a slider: a clone-padded slide sequence that
//! fakes infinite wraparound, a transition state machine that turns "next"/"prev" requests into
//! track offsets (with an instant re-anchoring jump at the seams), and a bounded queue that
//! serializes requests arriving mid-animation.
//!
//! It is UI-agnostic. A DOM/TUI/GUI layer is expected to provide:
//! - the container width and the slide contents (once, at construction)
//! - a [`Surface`] that applies track style writes
//! - frame and transition-finished callbacks
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod controller;
mod error;
mod gate;
mod options;
mod queue;
mod slides;
mod track;
mod types;

#[cfg(test)]
mod tests;

pub use controller::TransitionController;
pub use error::{Error, Result};
pub use gate::NavigationGate;
pub use options::CarouselOptions;
pub use queue::{AdvanceQueue, QUEUE_CAPACITY};
pub use slides::SlideModel;
pub use track::{Surface, TrackRenderer};
pub use types::{
    Advance, Controls, Direction, ItemLayout, MoveKind, Pending, Settle, Slide, SlideItem,
    TrackState, TrackStyle, Transition,
};
