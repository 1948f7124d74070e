//! Cancellation scope for flow subscriptions.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::{Mutex, RwLock, RwLockReadGuard};
use tokio::sync::Notify;
use tokio::task::JoinHandle;

/// Liveness shared between a [`DisposeBag`] and the pipelines it owns.
///
/// Pipelines hold a read guard for the duration of one step. Disposal takes
/// the write side, so it waits out an in-flight step and no step starts
/// after it returns.
pub(crate) struct Scope {
    active: RwLock<bool>,
    ended: Notify,
    panicked: AtomicUsize,
}

impl Scope {
    fn new() -> Self {
        Self {
            active: RwLock::new(true),
            ended: Notify::new(),
            panicked: AtomicUsize::new(0),
        }
    }

    /// Enter one pipeline step, or `None` if the scope has ended.
    pub(crate) fn enter(&self) -> Option<RwLockReadGuard<'_, bool>> {
        let guard = self.active.read();
        if *guard {
            Some(guard)
        } else {
            None
        }
    }

    /// Flip to inactive. Returns false if it already was.
    fn end(&self) -> bool {
        let mut active = self.active.write();
        std::mem::replace(&mut *active, false)
    }

    fn is_active(&self) -> bool {
        *self.active.read()
    }

    /// Called by a pipeline unwinding out of a panicking hook.
    pub(crate) fn record_panic(&self) {
        self.panicked.fetch_add(1, Ordering::SeqCst);
    }
}

/// Owner of the subscriptions created by [`Reactor::start_flow`](super::Reactor::start_flow).
///
/// Disposing the bag (explicitly or by dropping it) ends every pipeline
/// registered against it. Any background task can be tied to the bag's
/// lifetime through [`insert`](Self::insert).
pub struct DisposeBag {
    scope: Arc<Scope>,
    tasks: Mutex<Vec<JoinHandle<()>>>,
}

impl DisposeBag {
    pub fn new() -> Self {
        Self {
            scope: Arc::new(Scope::new()),
            tasks: Mutex::new(Vec::new()),
        }
    }

    /// Tie a task to this bag. A task inserted after disposal is aborted
    /// immediately.
    pub fn insert(&self, task: JoinHandle<()>) {
        // Checked under the task lock so a concurrent dispose either sees
        // this task in the list or we see the ended scope.
        let mut tasks = self.tasks.lock();
        if !self.scope.is_active() {
            task.abort();
            return;
        }
        tasks.retain(|t| !t.is_finished());
        tasks.push(task);
    }

    /// End the scope and abort every task it owns.
    ///
    /// Blocks until an in-flight pipeline step finishes. Must not be called
    /// from inside a `mutate` or `reduce` hook driven by this bag.
    pub fn dispose(&self) {
        if !self.scope.end() {
            return;
        }
        let tasks: Vec<_> = self.tasks.lock().drain(..).collect();
        tracing::debug!(tasks = tasks.len(), "Dispose bag disposed");
        for task in tasks {
            task.abort();
        }
        self.scope.ended.notify_waiters();
    }

    /// Resolve once the bag has been disposed. Resolves immediately if it
    /// already is.
    pub async fn disposed(&self) {
        let mut ended = std::pin::pin!(self.scope.ended.notified());
        // Register before checking so a dispose in between is not missed.
        ended.as_mut().enable();
        if self.is_disposed() {
            return;
        }
        ended.await;
    }

    /// Number of pipelines registered here that ended because a hook
    /// panicked. Such a pipeline no longer processes its feed.
    pub fn panicked(&self) -> usize {
        self.scope.panicked.load(Ordering::SeqCst)
    }

    pub fn is_disposed(&self) -> bool {
        !self.scope.is_active()
    }

    /// Number of registered tasks that have not finished yet.
    pub fn len(&self) -> usize {
        let mut tasks = self.tasks.lock();
        tasks.retain(|t| !t.is_finished());
        tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn scope(&self) -> Arc<Scope> {
        Arc::clone(&self.scope)
    }
}

impl Default for DisposeBag {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for DisposeBag {
    fn drop(&mut self) {
        self.dispose();
    }
}
