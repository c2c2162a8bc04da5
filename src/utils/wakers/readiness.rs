use core::task::Waker;
use fixedbitset::FixedBitSet;

/// Tracks which sub-futures are "ready" and should be polled.
#[derive(Debug)]
pub(crate) struct Readiness {
    ready: FixedBitSet,
    parent_waker: Option<Waker>,
}

impl Readiness {
    /// Create a new instance of readiness. All entries start out ready so
    /// that every sub-future is polled at least once.
    pub(crate) fn new(len: usize) -> Self {
        let mut ready = FixedBitSet::with_capacity(len);
        ready.set_range(.., true);
        Self {
            ready,
            parent_waker: None,
        }
    }

    /// Set the ready state to `true` for the given index.
    ///
    /// Returns the old ready state for this index.
    pub(crate) fn set_ready(&mut self, index: usize) -> bool {
        let was_ready = self.ready[index];
        self.ready.set(index, true);
        was_ready
    }

    /// Drain all ready indexes into `out`, clearing the set.
    pub(crate) fn take_ready(&mut self, out: &mut Vec<usize>) {
        out.extend(self.ready.ones());
        self.ready.clear();
    }

    /// Access the parent waker.
    #[inline]
    pub(crate) fn parent_waker(&self) -> Option<&Waker> {
        self.parent_waker.as_ref()
    }

    /// Set the parent `Waker`. This needs to be called at the start of every
    /// `poll` function.
    pub(crate) fn set_waker(&mut self, parent_waker: &Waker) {
        match &mut self.parent_waker {
            Some(prev) => prev.clone_from(parent_waker),
            None => self.parent_waker = Some(parent_waker.clone()),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn starts_all_ready() {
        let mut readiness = Readiness::new(3);
        let mut out = Vec::new();
        readiness.take_ready(&mut out);
        assert_eq!(out, [0, 1, 2]);

        out.clear();
        readiness.take_ready(&mut out);
        assert!(out.is_empty());
    }

    #[test]
    fn set_ready_reports_previous_state() {
        let mut readiness = Readiness::new(2);
        let mut out = Vec::new();
        readiness.take_ready(&mut out);

        assert!(!readiness.set_ready(1));
        assert!(readiness.set_ready(1));

        out.clear();
        readiness.take_ready(&mut out);
        assert_eq!(out, [1]);
    }
}
