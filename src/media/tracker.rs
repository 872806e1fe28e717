//! Breakpoint tracking across viewport changes.

use std::cell::RefCell;
use std::rc::Rc;

use super::breakpoints::{active_breakpoints, ActiveBreakpoints, Breakpoints};
use super::viewport::{Subscription, ViewportProvider};

/// Keeps the active breakpoint set in step with the viewport width.
///
/// The set is recomputed from scratch on every observed width, but a new
/// value is only published when the largest active breakpoint changes.
/// [`revision`](Self::revision) counts those publications and is meant as a
/// cheap change-detection key for consumers.
#[derive(Debug, Clone)]
pub struct BreakpointTracker {
    breakpoints: Breakpoints,
    active: ActiveBreakpoints,
    revision: u64,
}

impl BreakpointTracker {
    /// Creates a tracker primed with the initial viewport width.
    pub fn new(breakpoints: Breakpoints, width: f64) -> Self {
        let active = active_breakpoints(&breakpoints, width);
        Self {
            breakpoints,
            active,
            revision: 0,
        }
    }

    /// Observes a new viewport width.
    ///
    /// Returns the new active set if the largest active breakpoint changed,
    /// `None` otherwise.
    pub fn observe(&mut self, width: f64) -> Option<&ActiveBreakpoints> {
        let next = active_breakpoints(&self.breakpoints, width);
        if next.largest() == self.active.largest() {
            return None;
        }
        log::debug!(
            target: "stylekit::media",
            "active breakpoints changed at width {}: {:?} -> {:?}",
            width,
            self.active.largest(),
            next.largest()
        );
        self.active = next;
        self.revision += 1;
        Some(&self.active)
    }

    pub fn active(&self) -> &ActiveBreakpoints {
        &self.active
    }

    pub fn breakpoints(&self) -> &Breakpoints {
        &self.breakpoints
    }

    pub fn revision(&self) -> u64 {
        self.revision
    }
}

/// A [`BreakpointTracker`] fed by a viewport subscription.
///
/// The tracker never polls: it is updated from the provider's change
/// notifications. Dropping this value releases the subscription.
///
/// # Example
///
/// ```rust
/// use stylekit::{Breakpoints, LiveBreakpoints, SharedViewport, Viewport};
///
/// let viewport = SharedViewport::new(Viewport::new(700.0, 900.0));
/// let live = LiveBreakpoints::attach(&viewport, Breakpoints::default());
/// assert_eq!(live.active().names(), vec!["sm"]);
///
/// viewport.set_size(Viewport::new(1100.0, 900.0));
/// assert_eq!(live.active().names(), vec!["sm", "md", "lg"]);
/// assert_eq!(live.revision(), 1);
/// ```
#[derive(Debug)]
pub struct LiveBreakpoints {
    tracker: Rc<RefCell<BreakpointTracker>>,
    _subscription: Subscription,
}

impl LiveBreakpoints {
    /// Starts tracking `provider`'s width against `breakpoints`.
    pub fn attach<P: ViewportProvider + ?Sized>(provider: &P, breakpoints: Breakpoints) -> Self {
        let tracker = Rc::new(RefCell::new(BreakpointTracker::new(
            breakpoints,
            provider.viewport().width,
        )));
        let sink = Rc::clone(&tracker);
        let subscription = provider.subscribe(Box::new(move |viewport| {
            sink.borrow_mut().observe(viewport.width);
        }));
        Self {
            tracker,
            _subscription: subscription,
        }
    }

    /// Current active breakpoints, smallest first.
    pub fn active(&self) -> ActiveBreakpoints {
        self.tracker.borrow().active().clone()
    }

    pub fn breakpoints(&self) -> Breakpoints {
        self.tracker.borrow().breakpoints().clone()
    }

    /// Number of times the active set changed since attaching.
    pub fn revision(&self) -> u64 {
        self.tracker.borrow().revision()
    }
}
