use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;

use super::GradientUpdate;

/// Counters for one mailbox.
#[derive(Debug, Copy, Clone, Default, Eq, PartialEq)]
pub struct MailboxStats {
    /// Accepted `push` calls.
    pub pushed: u64,
    /// Pushes merged into an update that had not been taken yet.
    pub coalesced: u64,
    /// Non-empty `take` calls.
    pub taken: u64,
}

#[derive(Debug, Default)]
struct Slot {
    pending: Option<GradientUpdate>,
    closed: bool,
    stats: MailboxStats,
}

/// Single-slot "latest value wins" mailbox owned by a gradient instance.
///
/// Not a queue: pushes arriving before the next [`take`](Mailbox::take)
/// merge into one pending update, field by field.
#[derive(Debug, Default)]
pub struct Mailbox {
    slot: Arc<Mutex<Slot>>,
}

impl Mailbox {
    pub fn new() -> Self {
        Self::default()
    }

    /// A cloneable handle for other threads.
    pub fn sender(&self) -> UpdateSender {
        UpdateSender { slot: Arc::clone(&self.slot) }
    }

    /// Removes and returns the pending update, if any.
    pub fn take(&self) -> Option<GradientUpdate> {
        let mut slot = self.slot.lock();
        let pending = slot.pending.take();
        if pending.is_some() {
            slot.stats.taken += 1;
        }
        pending
    }

    /// Rejects all further pushes and drops anything pending.
    pub fn close(&self) {
        let mut slot = self.slot.lock();
        slot.closed = true;
        slot.pending = None;
    }

    pub fn stats(&self) -> MailboxStats {
        self.slot.lock().stats
    }
}

/// Sending half of a [`Mailbox`]. `Send + Sync`, cheap to clone.
#[derive(Debug, Clone)]
pub struct UpdateSender {
    slot: Arc<Mutex<Slot>>,
}

impl UpdateSender {
    /// Delivers `update`, merging with any update not yet taken.
    ///
    /// Fails only once the owning instance has been destroyed; the update is
    /// handed back in the error.
    pub fn push(&self, update: GradientUpdate) -> Result<(), SendError> {
        let mut slot = self.slot.lock();
        if slot.closed {
            return Err(SendError(update));
        }

        slot.stats.pushed += 1;
        let merged = match slot.pending.take() {
            Some(older) => {
                slot.stats.coalesced += 1;
                older.merge(update)
            }
            None => update,
        };
        slot.pending = Some(merged);
        Ok(())
    }

    pub fn is_closed(&self) -> bool {
        self.slot.lock().closed
    }
}

/// Returned by [`UpdateSender::push`] after the instance was destroyed.
#[derive(Debug, Clone, PartialEq)]
pub struct SendError(pub GradientUpdate);

impl SendError {
    pub fn into_inner(self) -> GradientUpdate {
        self.0
    }
}

impl fmt::Display for SendError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("gradient instance was destroyed; update dropped")
    }
}

impl std::error::Error for SendError {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::update::Patch;

    #[test]
    fn take_empties_slot() {
        let mb = Mailbox::new();
        mb.sender().push(GradientUpdate::new().angle(1.0)).unwrap();
        assert!(mb.take().is_some());
        assert!(mb.take().is_none());
    }

    #[test]
    fn pushes_coalesce_last_write_wins() {
        let mb = Mailbox::new();
        let tx = mb.sender();
        tx.push(GradientUpdate::new().angle(1.0).colors([1u32])).unwrap();
        tx.push(GradientUpdate::new().angle(2.0)).unwrap();
        tx.push(GradientUpdate::new().angle(3.0)).unwrap();

        let u = mb.take().unwrap();
        assert_eq!(u.angle, Patch::Set(3.0));
        assert!(u.colors.is_present());
        assert_eq!(mb.stats(), MailboxStats { pushed: 3, coalesced: 2, taken: 1 });
    }

    #[test]
    fn closed_mailbox_rejects_and_returns_update() {
        let mb = Mailbox::new();
        let tx = mb.sender();
        tx.push(GradientUpdate::new().angle(5.0)).unwrap();
        mb.close();

        assert!(tx.is_closed());
        assert!(mb.take().is_none());
        let err = tx.push(GradientUpdate::new().angle(9.0)).unwrap_err();
        assert_eq!(err.into_inner().angle, Patch::Set(9.0));
    }

    #[test]
    fn push_from_another_thread_is_visible_after_join() {
        let mb = Mailbox::new();
        let tx = mb.sender();
        std::thread::spawn(move || {
            for i in 0..100 {
                tx.push(GradientUpdate::new().angle(i as f64)).unwrap();
            }
        })
        .join()
        .unwrap();

        assert_eq!(mb.take().unwrap().angle, Patch::Set(99.0));
    }
}
