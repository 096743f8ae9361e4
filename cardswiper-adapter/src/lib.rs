//! Adapter utilities for the `cardswiper` crate.
//!
//! The `cardswiper` crate is UI-agnostic and focuses on the core math and
//! state. This crate provides small, framework-neutral helpers commonly
//! needed by adapters:
//!
//! - A [`Controller`] that owns gesture arbitration (horizontal swipes vs.
//!   vertical scrolling), tween-driven paging snaps, and per-card transform
//!   sampling
//! - A deterministic [`Spring`] sampler for snap-back animation
//! - Tween-based smooth scrolling helpers
//!
//! This crate is intentionally framework-agnostic (no UI toolkit bindings).
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

mod controller;
mod spring;
mod tween;

#[cfg(test)]
mod tests;

pub use controller::{Controller, PanRouting};
pub use spring::Spring;
pub use tween::{Easing, Tween};
