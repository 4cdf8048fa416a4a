// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Event subscription capabilities supplied by the host environment.
//!
//! Trackers do not own an event loop. A host (a DOM binding, a windowing
//! shell, a test harness) implements [`EventHost`] and forwards the events it
//! delivers to the tracker's `handle` method. Attaching a tracker acquires a
//! [`Subscription`]; dropping the subscription, detaching, or dropping the
//! tracker releases it.
//!
//! Move, up, and leave events are always listened for at window level so a
//! drag keeps tracking after the pointer leaves the region it started in.
//! Trackers hit-test region bounds themselves on down/start and wheel events.
//!
//! ```
//! use std::cell::RefCell;
//! use std::rc::Rc;
//! use understory_gesture::host::{EventHost, EventKinds, ListenerId, Subscription};
//!
//! #[derive(Default)]
//! struct Host {
//!     next: RefCell<u64>,
//!     live: RefCell<Vec<(ListenerId, EventKinds)>>,
//! }
//!
//! impl EventHost for Host {
//!     fn listen(&self, kinds: EventKinds) -> ListenerId {
//!         let mut next = self.next.borrow_mut();
//!         *next += 1;
//!         let id = ListenerId(*next);
//!         self.live.borrow_mut().push((id, kinds));
//!         id
//!     }
//!
//!     fn unlisten(&self, id: ListenerId) {
//!         self.live.borrow_mut().retain(|(live, _)| *live != id);
//!     }
//! }
//!
//! let host = Rc::new(Host::default());
//! let sub = Subscription::listen(host.clone(), EventKinds::WHEEL);
//! assert_eq!(host.live.borrow().len(), 1);
//! drop(sub);
//! assert!(host.live.borrow().is_empty());
//! ```

use alloc::rc::Rc;
use core::fmt;

bitflags::bitflags! {
    /// Set of input event kinds a tracker listens for.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct EventKinds: u16 {
        /// A pointer button went down.
        const POINTER_DOWN = 1 << 0;
        /// The pointer moved.
        const POINTER_MOVE = 1 << 1;
        /// A pointer button was released.
        const POINTER_UP = 1 << 2;
        /// The pointer left the host surface.
        const POINTER_LEAVE = 1 << 3;
        /// One or more fingers touched the surface.
        const TOUCH_START = 1 << 4;
        /// Touch points moved.
        const TOUCH_MOVE = 1 << 5;
        /// One or more fingers were lifted.
        const TOUCH_END = 1 << 6;
        /// The platform cancelled the touch sequence.
        const TOUCH_CANCEL = 1 << 7;
        /// Wheel rotation. Hosts must register these listeners as cancellable
        /// so that `prevent_default` can suppress native scrolling.
        const WHEEL = 1 << 8;
        /// A window or region resize.
        const RESIZE = 1 << 9;

        /// Every pointer event kind.
        const POINTER = Self::POINTER_DOWN.bits()
            | Self::POINTER_MOVE.bits()
            | Self::POINTER_UP.bits()
            | Self::POINTER_LEAVE.bits();
        /// Every touch event kind.
        const TOUCH = Self::TOUCH_START.bits()
            | Self::TOUCH_MOVE.bits()
            | Self::TOUCH_END.bits()
            | Self::TOUCH_CANCEL.bits();
    }
}

/// Host-assigned identifier for one registered listener or observer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// Window-level event subscription.
pub trait EventHost {
    /// Starts delivering events of `kinds` to the tracker.
    fn listen(&self, kinds: EventKinds) -> ListenerId;

    /// Stops the listener or observer registered under `id`.
    ///
    /// Hosts should treat unknown ids as a no-op.
    fn unlisten(&self, id: ListenerId);
}

/// Region resize observation, for hosts that can watch a single region.
pub trait ResizeHost<R>: EventHost {
    /// Starts delivering [`InputEvent::Resize`](crate::event::InputEvent::Resize)
    /// whenever `region` changes size.
    ///
    /// Returns `None` when the host has no per-region observer; callers then
    /// fall back to a window-level [`EventKinds::RESIZE`] listener.
    fn observe_resize(&self, region: &R) -> Option<ListenerId> {
        let _ = region;
        None
    }
}

/// A live registration with an [`EventHost`], released on drop.
pub struct Subscription {
    host: Rc<dyn EventHost>,
    kinds: EventKinds,
    id: ListenerId,
}

impl Subscription {
    /// Registers a window-level listener for `kinds`.
    pub fn listen(host: Rc<dyn EventHost>, kinds: EventKinds) -> Self {
        let id = host.listen(kinds);
        log::trace!("listening for {kinds:?} as {id:?}");
        Self { host, kinds, id }
    }

    /// Acquires a resize subscription for `region`.
    ///
    /// Uses the host's region observer when it has one, and a window-level
    /// resize listener otherwise.
    pub fn observe_resize<R>(host: &Rc<dyn ResizeHost<R>>, region: &R) -> Self {
        match host.observe_resize(region) {
            Some(id) => {
                log::trace!("observing region resize as {id:?}");
                Self {
                    host: host.clone(),
                    kinds: EventKinds::RESIZE,
                    id,
                }
            }
            None => Self::listen(host.clone(), EventKinds::RESIZE),
        }
    }

    /// The host this subscription is registered with.
    #[must_use]
    pub fn host(&self) -> &Rc<dyn EventHost> {
        &self.host
    }

    /// The event kinds covered by this subscription.
    #[must_use]
    pub fn kinds(&self) -> EventKinds {
        self.kinds
    }

    /// The host-assigned id.
    #[must_use]
    pub fn id(&self) -> ListenerId {
        self.id
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        log::trace!("releasing {:?} ({:?})", self.id, self.kinds);
        self.host.unlisten(self.id);
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("kinds", &self.kinds)
            .field("id", &self.id)
            .finish_non_exhaustive()
    }
}

/// The subscription slot every tracker carries.
///
/// Re-attaching releases the previous subscription before acquiring the new
/// one, so a tracker never holds two registrations at once.
#[derive(Debug, Default)]
pub(crate) struct Attachment {
    subscription: Option<Subscription>,
}

impl Attachment {
    pub(crate) fn attach(&mut self, host: Rc<dyn EventHost>, kinds: EventKinds) {
        self.subscription = None;
        self.subscription = Some(Subscription::listen(host, kinds));
    }

    pub(crate) fn detach(&mut self) {
        self.subscription = None;
    }

    /// Drops and re-acquires the current subscription, if any.
    pub(crate) fn renew(&mut self) {
        if let Some(old) = self.subscription.take() {
            let host = old.host().clone();
            let kinds = old.kinds();
            drop(old);
            self.subscription = Some(Subscription::listen(host, kinds));
        }
    }

    pub(crate) fn is_attached(&self) -> bool {
        self.subscription.is_some()
    }
}
