//! Host-side helpers for the `scroll-window` crate.
//!
//! The `scroll-window` crate only computes ranges and talks to an abstract
//! [`scroll_window::Viewport`]. This crate provides the small, framework-neutral pieces a host
//! usually needs on top of it:
//!
//! - [`SimViewport`]: an in-memory viewport that owns scroll state
//! - [`Controller`]: routes scroll/resize/data events into a strategy and applies the scroll
//!   commands it issues
//! - [`Tween`]/[`Easing`]: adapter-driven smooth scrolling
//! - [`ScrollAnchor`]: keep the same item in view across a data replacement (e.g. prepend)
//!
//! This crate is intentionally framework-agnostic (no DOM/egui/ratatui bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod anchor;
mod controller;
mod sim_viewport;
mod tween;


pub use anchor::{ScrollAnchor, capture_anchor, resolve_anchor};
pub use controller::Controller;
pub use sim_viewport::SimViewport;
pub use tween::{Easing, Tween};
