//! Core domain: typed publish/subscribe registry owned by a simulation.
//!
//! Publishing only queues. Delivery happens when the owner calls
//! [`EventBus::flush`] at its fixed dispatch point: events come out in
//! publication order, and for each event every subscriber of its kind in
//! registration order. Anything published while the owner is routing a
//! flush waits for the next flush, so a handler can never re-enter the
//! dispatch it is part of.

use std::collections::HashMap;

use super::events::{EventKind, MotionEvent};

/// One event handed to one subscriber.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Delivery<S> {
    pub subscriber: S,
    pub event: MotionEvent,
}

#[derive(Debug, Clone)]
pub struct EventBus<S> {
    subscribers: HashMap<EventKind, Vec<S>>,
    pending: Vec<MotionEvent>,
}

impl<S> Default for EventBus<S> {
    fn default() -> Self {
        Self {
            subscribers: HashMap::new(),
            pending: Vec::new(),
        }
    }
}

impl<S: Copy + PartialEq> EventBus<S> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `subscriber` for `kind`. Registering twice is a no-op.
    pub fn subscribe(&mut self, kind: EventKind, subscriber: S) {
        let list = self.subscribers.entry(kind).or_default();
        if !list.contains(&subscriber) {
            list.push(subscriber);
        }
    }

    pub fn unsubscribe(&mut self, kind: EventKind, subscriber: S) {
        if let Some(list) = self.subscribers.get_mut(&kind) {
            list.retain(|s| *s != subscriber);
        }
    }

    pub fn publish(&mut self, event: MotionEvent) {
        self.pending.push(event);
    }

    pub fn pending(&self) -> &[MotionEvent] {
        &self.pending
    }

    /// Take everything queued so far and expand it into deliveries.
    /// Events with no subscriber are dropped.
    pub fn flush(&mut self) -> Vec<Delivery<S>> {
        let events = std::mem::take(&mut self.pending);
        let mut deliveries = Vec::new();
        for event in events {
            let Some(list) = self.subscribers.get(&event.kind()) else {
                continue;
            };
            deliveries.extend(list.iter().map(|&subscriber| Delivery { subscriber, event }));
        }
        deliveries
    }
}
