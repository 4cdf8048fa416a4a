// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A host that records registrations and filters events the way a real one would.

#![allow(
    missing_docs,
    dead_code,
    reason = "Integration-test helper module; not every test file uses every helper."
)]

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use understory_gesture::host::{EventHost, EventKinds, ListenerId, ResizeHost};
use understory_gesture::{InputEvent, Response};

#[derive(Debug, Default)]
pub(crate) struct RecordingHost {
    next: Cell<u64>,
    listeners: RefCell<Vec<(ListenerId, EventKinds)>>,
    observers: RefCell<Vec<ListenerId>>,
    region_observer: bool,
    acquired: Cell<usize>,
    released: Cell<usize>,
}

impl RecordingHost {
    /// A host with window-level listeners only.
    pub(crate) fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    /// A host that can observe the size of individual regions.
    pub(crate) fn with_region_observer() -> Rc<Self> {
        Rc::new(Self {
            region_observer: true,
            ..Self::default()
        })
    }

    fn next_id(&self) -> ListenerId {
        let id = self.next.get() + 1;
        self.next.set(id);
        self.acquired.set(self.acquired.get() + 1);
        ListenerId(id)
    }

    pub(crate) fn live(&self) -> usize {
        self.listeners.borrow().len() + self.observers.borrow().len()
    }

    pub(crate) fn observers(&self) -> usize {
        self.observers.borrow().len()
    }

    pub(crate) fn kinds(&self) -> EventKinds {
        self.listeners
            .borrow()
            .iter()
            .fold(EventKinds::empty(), |acc, (_, kinds)| acc | *kinds)
    }

    pub(crate) fn acquired(&self) -> usize {
        self.acquired.get()
    }

    pub(crate) fn released(&self) -> usize {
        self.released.get()
    }

    /// Whether a registration exists that would deliver `event`.
    pub(crate) fn delivers(&self, event: &InputEvent) -> bool {
        let resize_observed = matches!(event, InputEvent::Resize) && self.observers() > 0;
        resize_observed || self.kinds().contains(event.kind())
    }

    /// Forwards `event` to `handle` if anything is registered for it.
    pub(crate) fn dispatch(
        &self,
        event: &InputEvent,
        handle: impl FnOnce(&InputEvent) -> Response,
    ) -> Response {
        if self.delivers(event) {
            handle(event)
        } else {
            Response::IGNORED
        }
    }
}

impl EventHost for RecordingHost {
    fn listen(&self, kinds: EventKinds) -> ListenerId {
        let id = self.next_id();
        self.listeners.borrow_mut().push((id, kinds));
        id
    }

    fn unlisten(&self, id: ListenerId) {
        let before = self.live();
        self.listeners.borrow_mut().retain(|(live, _)| *live != id);
        self.observers.borrow_mut().retain(|live| *live != id);
        if self.live() < before {
            self.released.set(self.released.get() + 1);
        }
    }
}

impl<R> ResizeHost<R> for RecordingHost {
    fn observe_resize(&self, _region: &R) -> Option<ListenerId> {
        if !self.region_observer {
            return None;
        }
        let id = self.next_id();
        self.observers.borrow_mut().push(id);
        Some(id)
    }
}
