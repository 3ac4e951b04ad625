//! Typed event bus for decoupled communication between UI surfaces.
//!
//! The bus is single-threaded (WASM constraint) and uses interior
//! mutability via RefCell. Publishing delivers synchronously to the
//! listeners subscribed at that moment, in subscription order. There is
//! no buffering: a listener that subscribes after an event was published
//! never sees it.

use std::cell::RefCell;
use std::rc::Rc;

use lawease_types::event::AppEvent;

type Listener = Rc<dyn Fn(&AppEvent)>;

/// Shared bus handle — clone-cheap via Rc.
#[derive(Clone)]
pub struct EventBus {
    inner: Rc<RefCell<Inner>>,
}

struct Inner {
    next_id: u64,
    listeners: Vec<(u64, Listener)>,
}

/// Handle returned by `subscribe`; hand it back to `unsubscribe` when the
/// component unmounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Subscription(u64);

impl EventBus {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                next_id: 0,
                listeners: Vec::new(),
            })),
        }
    }

    pub fn subscribe(&self, listener: impl Fn(&AppEvent) + 'static) -> Subscription {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.listeners.push((id, Rc::new(listener)));
        Subscription(id)
    }

    pub fn unsubscribe(&self, sub: Subscription) {
        self.inner
            .borrow_mut()
            .listeners
            .retain(|(id, _)| *id != sub.0);
    }

    /// Deliver `event` to every current listener, in subscription order.
    ///
    /// The listener list is snapshotted first so a listener may publish,
    /// subscribe, or unsubscribe during dispatch without poisoning the
    /// borrow; listeners added mid-dispatch do not receive this event.
    pub fn publish(&self, event: &AppEvent) {
        let snapshot: Vec<Listener> = self
            .inner
            .borrow()
            .listeners
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for listener in snapshot {
            listener(event);
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.borrow().listeners.len()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}
