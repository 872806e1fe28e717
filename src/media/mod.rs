//! Responsive breakpoints.
//!
//! This module derives the set of active named breakpoints from the viewport
//! width, mobile-first:
//!
//! - [`Breakpoints`]: named minimum-width thresholds
//! - [`active_breakpoints`]: the active set for one width
//! - [`BreakpointTracker`]: publishes a new set only when it changes
//! - [`ViewportProvider`] / [`SharedViewport`]: where widths come from
//! - [`LiveBreakpoints`]: a tracker wired to a provider subscription

mod breakpoints;
mod tracker;
mod viewport;

pub use breakpoints::{active_breakpoints, ActiveBreakpoints, Breakpoints};
pub use tracker::{BreakpointTracker, LiveBreakpoints};
pub use viewport::{SharedViewport, Subscription, Viewport, ViewportListener, ViewportProvider};
