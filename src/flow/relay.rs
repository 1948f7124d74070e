//! Broadcast feed without replay.

use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Receiving end of a subscription to a [`PublishRelay`] or a
/// [`StateCell`](super::StateCell).
///
/// Values arrive in the order they were published. Dropping the feed
/// unsubscribes it; the publisher prunes it on its next emission.
pub struct Feed<T> {
    receiver: UnboundedReceiver<T>,
}

impl<T> Feed<T> {
    pub(crate) fn new(receiver: UnboundedReceiver<T>) -> Self {
        Self { receiver }
    }

    /// Wait for the next value.
    ///
    /// Returns `None` once every publisher handle has been dropped.
    pub async fn recv(&mut self) -> Option<T> {
        self.receiver.recv().await
    }

    /// Take the next value if one is already queued.
    pub fn try_recv(&mut self) -> Option<T> {
        self.receiver.try_recv().ok()
    }
}

/// Multi-producer, multi-consumer event feed with no replay.
///
/// Subscribers only see values accepted after they subscribed. Delivery is
/// unbounded, so [`accept`](Self::accept) never blocks and never fails.
/// Clones share the same subscriber list.
pub struct PublishRelay<T> {
    subscribers: Arc<Mutex<Vec<UnboundedSender<T>>>>,
}

impl<T: Clone + Send + 'static> PublishRelay<T> {
    pub fn new() -> Self {
        Self {
            subscribers: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Emit a value to every live subscriber.
    ///
    /// The subscriber list stays locked for the whole fan-out, so values
    /// accepted from different threads reach all subscribers in one order.
    pub fn accept(&self, value: T) {
        let mut subscribers = self.subscribers.lock();
        subscribers.retain(|tx| tx.send(value.clone()).is_ok());
    }

    /// Subscribe to future values.
    pub fn subscribe(&self) -> Feed<T> {
        let (tx, rx) = mpsc::unbounded_channel();
        self.subscribers.lock().push(tx);
        Feed::new(rx)
    }

    /// Number of subscribers whose feed is still alive.
    pub fn subscriber_count(&self) -> usize {
        let mut subscribers = self.subscribers.lock();
        subscribers.retain(|tx| !tx.is_closed());
        subscribers.len()
    }
}

impl<T: Clone + Send + 'static> Default for PublishRelay<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for PublishRelay<T> {
    fn clone(&self) -> Self {
        Self {
            subscribers: Arc::clone(&self.subscribers),
        }
    }
}
