use std::sync::{Arc, Mutex};
use std::task::Wake;

use super::Readiness;

/// A waker tied to a single sub-future, which delegates wake events to the
/// parent waker through the shared readiness set.
#[derive(Debug)]
pub(crate) struct IndexWaker {
    id: usize,
    readiness: Arc<Mutex<Readiness>>,
}

impl IndexWaker {
    pub(crate) fn new(id: usize, readiness: Arc<Mutex<Readiness>>) -> Self {
        Self { id, readiness }
    }
}

impl Wake for IndexWaker {
    fn wake(self: Arc<Self>) {
        let mut readiness = self.readiness.lock().unwrap();
        if !readiness.set_ready(self.id) {
            readiness
                .parent_waker()
                .expect("`parent_waker` not set. Did you forget to call `Readiness::set_waker`?")
                .wake_by_ref()
        }
    }
}
