//! Adapter utilities for the `carousel` crate.
//!
//! The `carousel` crate is UI-agnostic and owns the index/offset/queue logic. This crate
//! provides small, framework-neutral helpers commonly needed by hosts:
//!
//! - An autoplay ticker sampled from the host clock
//! - A [`Slider`] facade that wires the ticker into the transition controller
//! - A recording [`carousel::Surface`] for headless hosts and tests
//!
//! This crate is intentionally framework-agnostic (no DOM/ratatui/egui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod autoplay;
mod recording;
mod slider;


pub use autoplay::Autoplay;
pub use recording::{RecordingSurface, StyleWrite};
pub use slider::Slider;
