//! Viewport size providers and change subscriptions.
//!
//! The host platform owns the real window. It exposes it through
//! [`ViewportProvider`], which reports the current size on demand and pushes
//! changes to subscribed listeners. Subscriptions are guards: dropping a
//! [`Subscription`] unregisters its listener, on every exit path.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

/// Window dimensions in density-independent pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// A callback invoked with the new viewport size.
pub type ViewportListener = Box<dyn FnMut(Viewport)>;

/// Source of the current viewport size.
pub trait ViewportProvider {
    /// Returns the current viewport size.
    fn viewport(&self) -> Viewport;

    /// Registers `listener` to be called whenever the size changes.
    ///
    /// The listener stays registered for as long as the returned guard lives.
    fn subscribe(&self, listener: ViewportListener) -> Subscription;
}

/// Guard for a registered listener. Dropping it releases the listener.
#[must_use = "dropping a Subscription immediately unregisters its listener"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Creates a guard that runs `release` when dropped.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// A guard with nothing to release, for providers whose size never changes.
    pub fn noop() -> Self {
        Self { release: None }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

#[derive(Default)]
struct Listeners {
    size: Viewport,
    next_id: u64,
    entries: Vec<(u64, ViewportListener)>,
    dispatching: bool,
    released_during_dispatch: Vec<u64>,
}

/// An in-memory viewport the host pushes sizes into.
///
/// Cloning yields another handle to the same viewport. Listeners run
/// synchronously inside [`set_size`](Self::set_size), and only when the size
/// actually changes.
///
/// # Example
///
/// ```rust
/// use std::cell::Cell;
/// use std::rc::Rc;
/// use stylekit::{SharedViewport, Viewport, ViewportProvider};
///
/// let viewport = SharedViewport::new(Viewport::new(800.0, 600.0));
/// let seen = Rc::new(Cell::new(0.0));
/// let sink = seen.clone();
///
/// let subscription = viewport.subscribe(Box::new(move |v| sink.set(v.width)));
/// viewport.set_size(Viewport::new(1024.0, 768.0));
/// assert_eq!(seen.get(), 1024.0);
///
/// drop(subscription);
/// viewport.set_size(Viewport::new(320.0, 480.0));
/// assert_eq!(seen.get(), 1024.0);
/// ```
#[derive(Clone, Default)]
pub struct SharedViewport {
    inner: Rc<RefCell<Listeners>>,
}

impl SharedViewport {
    pub fn new(size: Viewport) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Listeners {
                size,
                ..Listeners::default()
            })),
        }
    }

    /// Updates the size and notifies listeners if it changed.
    ///
    /// A listener may resize the viewport again while being notified. The
    /// call returns once every listener has seen the final size.
    pub fn set_size(&self, size: Viewport) {
        {
            let mut inner = self.inner.borrow_mut();
            let changed = inner.size != size;
            inner.size = size;
            if !changed || inner.dispatching {
                return;
            }
            inner.dispatching = true;
        }
        self.dispatch(size);
    }

    fn dispatch(&self, mut size: Viewport) {
        loop {
            let mut listeners = std::mem::take(&mut self.inner.borrow_mut().entries);
            for (_, listener) in listeners.iter_mut() {
                listener(size);
            }

            let mut inner = self.inner.borrow_mut();
            let released = std::mem::take(&mut inner.released_during_dispatch);
            listeners.retain(|(id, _)| !released.contains(id));
            // Listeners subscribed during dispatch go after the existing ones.
            listeners.append(&mut inner.entries);
            inner.entries = listeners;

            if inner.size == size {
                inner.dispatching = false;
                return;
            }
            size = inner.size;
            log::trace!(
                target: "stylekit::media",
                "viewport resized during dispatch, notifying width {}",
                size.width
            );
        }
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        let inner = self.inner.borrow();
        inner.entries.len()
    }
}

fn release(inner: &Weak<RefCell<Listeners>>, id: u64) {
    let Some(inner) = inner.upgrade() else {
        return;
    };
    let mut inner = inner.borrow_mut();
    if inner.dispatching {
        inner.released_during_dispatch.push(id);
    }
    inner.entries.retain(|(entry, _)| *entry != id);
    log::trace!(target: "stylekit::media", "released viewport listener {}", id);
}

impl ViewportProvider for SharedViewport {
    fn viewport(&self) -> Viewport {
        self.inner.borrow().size
    }

    fn subscribe(&self, listener: ViewportListener) -> Subscription {
        let id = {
            let mut inner = self.inner.borrow_mut();
            let id = inner.next_id;
            inner.next_id += 1;
            inner.entries.push((id, listener));
            id
        };
        log::trace!(target: "stylekit::media", "subscribed viewport listener {}", id);
        let weak = Rc::downgrade(&self.inner);
        Subscription::new(move || release(&weak, id))
    }
}

impl std::fmt::Debug for SharedViewport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("SharedViewport")
            .field("size", &inner.size)
            .field("listeners", &inner.entries.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_viewport_reports_current_size() {
        let viewport = SharedViewport::new(Viewport::new(375.0, 812.0));
        assert_eq!(viewport.viewport().width, 375.0);
        viewport.set_size(Viewport::new(414.0, 896.0));
        assert_eq!(viewport.viewport(), Viewport::new(414.0, 896.0));
    }

    #[test]
    fn test_listener_only_called_on_change() {
        let viewport = SharedViewport::new(Viewport::new(800.0, 600.0));
        let calls = Rc::new(Cell::new(0));
        let sink = calls.clone();
        let _sub = viewport.subscribe(Box::new(move |_| sink.set(sink.get() + 1)));

        viewport.set_size(Viewport::new(800.0, 600.0));
        assert_eq!(calls.get(), 0);
        viewport.set_size(Viewport::new(900.0, 600.0));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_drop_releases_listener() {
        let viewport = SharedViewport::new(Viewport::default());
        let sub = viewport.subscribe(Box::new(|_| {}));
        assert_eq!(viewport.listener_count(), 1);
        drop(sub);
        assert_eq!(viewport.listener_count(), 0);
    }

    #[test]
    fn test_release_inside_listener() {
        let viewport = SharedViewport::new(Viewport::default());
        let slot: Rc<RefCell<Option<Subscription>>> = Rc::new(RefCell::new(None));
        let calls = Rc::new(Cell::new(0));

        let inner_slot = slot.clone();
        let sink = calls.clone();
        let sub = viewport.subscribe(Box::new(move |_| {
            sink.set(sink.get() + 1);
            inner_slot.borrow_mut().take();
        }));
        *slot.borrow_mut() = Some(sub);

        viewport.set_size(Viewport::new(100.0, 100.0));
        viewport.set_size(Viewport::new(200.0, 100.0));
        assert_eq!(calls.get(), 1);
        assert_eq!(viewport.listener_count(), 0);
    }

    #[test]
    fn test_resize_inside_listener_reaches_every_listener() {
        let viewport = SharedViewport::new(Viewport::new(375.0, 812.0));
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = seen.clone();
        let _first = viewport.subscribe(Box::new(move |v| sink.borrow_mut().push(v.width)));

        let handle = viewport.clone();
        let _resizer = viewport.subscribe(Box::new(move |v| {
            if v.width == 700.0 {
                handle.set_size(Viewport::new(1300.0, v.height));
            }
        }));

        viewport.set_size(Viewport::new(700.0, 812.0));
        assert_eq!(viewport.viewport().width, 1300.0);
        assert_eq!(*seen.borrow(), vec![700.0, 1300.0]);
        assert_eq!(viewport.listener_count(), 2);
    }

    #[test]
    fn test_resize_back_inside_listener_is_not_redispatched() {
        let viewport = SharedViewport::new(Viewport::new(375.0, 812.0));
        let calls = Rc::new(Cell::new(0));

        let sink = calls.clone();
        let handle = viewport.clone();
        let _sub = viewport.subscribe(Box::new(move |v| {
            sink.set(sink.get() + 1);
            handle.set_size(Viewport::new(900.0, v.height));
            handle.set_size(v);
        }));

        viewport.set_size(Viewport::new(700.0, 812.0));
        assert_eq!(calls.get(), 1);
        assert_eq!(viewport.viewport().width, 700.0);
    }

    #[test]
    fn test_subscription_outliving_viewport() {
        let viewport = SharedViewport::new(Viewport::default());
        let sub = viewport.subscribe(Box::new(|_| {}));
        drop(viewport);
        drop(sub);
    }

    #[test]
    fn test_noop_subscription() {
        let sub = Subscription::noop();
        assert!(format!("{sub:?}").contains("false"));
    }
}
