//! Current-value cell holding a reactor's state.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc::{self, UnboundedSender};

use super::relay::Feed;

/// Single-slot observable that always holds exactly one value.
///
/// New subscribers receive the current value immediately, followed by
/// every later publish. Subscribing and publishing take the same lock, so
/// no update can fall between the replayed value and the live stream.
///
/// Only the flow coordinator writes to the cell. Clones share the slot and
/// can read and subscribe, nothing else.
pub struct StateCell<S> {
    inner: Arc<Mutex<CellInner<S>>>,
}

struct CellInner<S> {
    value: S,
    subscribers: Vec<UnboundedSender<S>>,
}

impl<S: Clone + Send + 'static> StateCell<S> {
    pub fn new(initial: S) -> Self {
        Self {
            inner: Arc::new(Mutex::new(CellInner {
                value: initial,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Snapshot of the current value.
    pub fn value(&self) -> S {
        self.inner.lock().value.clone()
    }

    /// Subscribe to the current value and all subsequent updates.
    pub fn subscribe(&self) -> Feed<S> {
        let mut inner = self.inner.lock();
        let (tx, rx) = mpsc::unbounded_channel();
        // Fresh channel, the receiver is still held here.
        let _ = tx.send(inner.value.clone());
        inner.subscribers.push(tx);
        Feed::new(rx)
    }

    /// Number of subscribers whose feed is still alive.
    pub fn subscriber_count(&self) -> usize {
        let mut inner = self.inner.lock();
        inner.subscribers.retain(|tx| !tx.is_closed());
        inner.subscribers.len()
    }

    /// Replace the value and notify subscribers.
    pub(crate) fn publish(&self, value: S) {
        let mut inner = self.inner.lock();
        inner.subscribers.retain(|tx| tx.send(value.clone()).is_ok());
        inner.value = value;
    }
}

impl<S> Clone for StateCell<S> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}
