use std::cell::RefCell;
use std::rc::Rc;
use crate::api::types::EventRecord;
use crate::core::events::GameEvent;

/// Receives gameplay events, synchronously and in emission order, from
/// within `Environment::update_state`.
///
/// The listener only ever sees `&GameEvent`, so it has no borrow of the
/// environment. A host that keeps the environment in `Rc<RefCell<_>>` and
/// hands the listener a clone of that `Rc` can still try to re-enter: the
/// environment is mutably borrowed for the whole tick, so `borrow_mut`
/// panics there and `try_borrow_mut` fails. Queue the work and apply it
/// after `update_state` returns.
pub trait EventListener {
    fn notify_event(&mut self, event: &GameEvent);
}

impl<F> EventListener for F
where
    F: FnMut(&GameEvent),
{
    fn notify_event(&mut self, event: &GameEvent) {
        self(event)
    }
}

/// Listener that flattens events into `EventRecord`s for a host to drain.
/// Clones share the same storage: hand one clone to the environment and
/// keep another to read from.
#[derive(Debug, Clone, Default)]
pub struct EventRecorder {
    records: Rc<RefCell<Vec<EventRecord>>>,
}

impl EventRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take all recorded events.
    pub fn drain(&self) -> Vec<EventRecord> {
        std::mem::take(&mut *self.records.borrow_mut())
    }

    pub fn len(&self) -> usize {
        self.records.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.borrow().is_empty()
    }
}

impl EventListener for EventRecorder {
    fn notify_event(&mut self, event: &GameEvent) {
        self.records.borrow_mut().push(event.record());
    }
}
