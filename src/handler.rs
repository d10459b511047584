// Copyright 2022, Collabora, Ltd.
// SPDX-License-Identifier: BSL-1.0
// Author: Ryan A. Pavlik <ryan.pavlik@collabora.com>

//! Dispatch of decoded snapshots to display consumers.

use crate::data_types::{TrackerKey, TrackerSnapshot};
use crate::{EmptyResult, Result};

/// Return from a handler, indicating whether the handler that just executed
/// should be kept around for the future.
#[derive(Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub enum HandlerCode {
    /// Keeps the handler in the list.
    ContinueProcessing,
    /// Removes the handler.
    RemoveThisHandler,
}

/// A trait implemented by structs that consume tracker snapshots.
pub trait SnapshotHandler {
    fn handle(&mut self, snapshot: &TrackerSnapshot) -> Result<HandlerCode>;
}

struct DispatchEntry {
    handler: Box<dyn SnapshotHandler>,
    /// `None` receives every snapshot; otherwise loose key matching applies.
    filter: Option<TrackerKey>,
}

/// Routes each decoded snapshot to the registered handlers in order.
#[derive(Default)]
pub struct SnapshotDispatcher {
    entries: Vec<DispatchEntry>,
}

impl SnapshotDispatcher {
    pub fn new() -> SnapshotDispatcher {
        SnapshotDispatcher {
            entries: Vec::new(),
        }
    }

    pub fn add_handler(&mut self, handler: Box<dyn SnapshotHandler>, filter: Option<TrackerKey>) {
        self.entries.push(DispatchEntry { handler, filter });
    }

    pub fn handler_count(&self) -> usize {
        self.entries.len()
    }

    /// Invoke every handler whose filter matches, dropping handlers that ask
    /// to be removed. The first handler error aborts the dispatch.
    pub fn dispatch(&mut self, snapshot: &TrackerSnapshot) -> EmptyResult {
        let mut i = 0;
        while i < self.entries.len() {
            let entry = &mut self.entries[i];
            let matches = entry
                .filter
                .map(|f| f.matches(&snapshot.key))
                .unwrap_or(true);
            if matches {
                if let HandlerCode::RemoveThisHandler = entry.handler.handle(snapshot)? {
                    self.entries.remove(i);
                    continue;
                }
            }
            i += 1;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data_types::{
        id_types::{DeviceId, TrackerNum},
        Timestamp, TrackerStatus,
    };
    use std::{cell::RefCell, rc::Rc};

    struct CountingHandler {
        seen: Rc<RefCell<usize>>,
        remove_after: Option<usize>,
    }

    impl SnapshotHandler for CountingHandler {
        fn handle(&mut self, _snapshot: &TrackerSnapshot) -> Result<HandlerCode> {
            *self.seen.borrow_mut() += 1;
            match self.remove_after {
                Some(n) if *self.seen.borrow() >= n => Ok(HandlerCode::RemoveThisHandler),
                _ => Ok(HandlerCode::ContinueProcessing),
            }
        }
    }

    fn snapshot(device: i32, num: i32) -> TrackerSnapshot {
        TrackerSnapshot::new(
            TrackerKey::new(Some(DeviceId(device)), TrackerNum(num)),
            TrackerStatus::Ok,
            Timestamp::default(),
        )
    }

    #[test]
    fn unfiltered_handler_sees_everything() {
        let seen = Rc::new(RefCell::new(0));
        let mut dispatcher = SnapshotDispatcher::new();
        dispatcher.add_handler(
            Box::new(CountingHandler {
                seen: Rc::clone(&seen),
                remove_after: None,
            }),
            None,
        );
        dispatcher.dispatch(&snapshot(1, 0)).unwrap();
        dispatcher.dispatch(&snapshot(2, 5)).unwrap();
        assert_eq!(*seen.borrow(), 2);
    }

    #[test]
    fn filtered_handler_sees_only_its_tracker() {
        let seen = Rc::new(RefCell::new(0));
        let mut dispatcher = SnapshotDispatcher::new();
        dispatcher.add_handler(
            Box::new(CountingHandler {
                seen: Rc::clone(&seen),
                remove_after: None,
            }),
            Some(TrackerKey::new(Some(DeviceId(1)), TrackerNum(0))),
        );
        dispatcher.dispatch(&snapshot(1, 0)).unwrap();
        dispatcher.dispatch(&snapshot(1, 1)).unwrap();
        dispatcher.dispatch(&snapshot(2, 0)).unwrap();
        assert_eq!(*seen.borrow(), 1);
    }

    #[test]
    fn removal_code_drops_the_handler() {
        let seen = Rc::new(RefCell::new(0));
        let mut dispatcher = SnapshotDispatcher::new();
        dispatcher.add_handler(
            Box::new(CountingHandler {
                seen: Rc::clone(&seen),
                remove_after: Some(2),
            }),
            None,
        );
        for _ in 0..5 {
            dispatcher.dispatch(&snapshot(1, 0)).unwrap();
        }
        assert_eq!(*seen.borrow(), 2);
        assert_eq!(dispatcher.handler_count(), 0);
    }
}
