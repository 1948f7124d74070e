//! Shared test reactor and helpers.

#![allow(dead_code, unused_imports)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use mvvm_reactor::flow::{
    Action, DisposeBag, Feed, FlowState, Mutation, PublishRelay, Reactor, StateCell,
};
use parking_lot::Mutex;

/// Upper bound for any single wait in a test.
pub const WAIT: Duration = Duration::from_secs(2);

/// How long `reduce` blocks on a `Slow` mutation.
pub const SLOW_REDUCE: Duration = Duration::from_millis(200);

/// Ordered log of applied mutation ids. Appending is not commutative, so
/// any reordering or lost update shows up in the final value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct LogState {
    pub applied: Vec<u32>,
}

impl FlowState for LogState {}

#[derive(Debug, Clone, PartialEq)]
pub enum LogAction {
    /// Submit `Append(id)`.
    Record(u32),
    /// Only record the observed state.
    Observe,
}

impl Action for LogAction {}

#[derive(Debug, Clone, PartialEq)]
pub enum LogMutation {
    Append(u32),
    /// Reduces to `None`.
    Ignore,
    /// Reduces to a copy of the previous state.
    Repeat,
    /// Panics in `reduce`.
    Poison,
    /// Like `Append`, but `LogReactor::reduce` blocks for `SLOW_REDUCE` first.
    Slow(u32),
}

impl Mutation for LogMutation {}

/// Pure reduction used by `LogReactor`.
pub fn apply_log(previous: &LogState, mutation: LogMutation) -> Option<LogState> {
    match mutation {
        LogMutation::Append(id) | LogMutation::Slow(id) => {
            let mut applied = previous.applied.clone();
            applied.push(id);
            Some(LogState { applied })
        }
        LogMutation::Ignore => None,
        LogMutation::Repeat => Some(previous.clone()),
        LogMutation::Poison => panic!("poisoned mutation"),
    }
}

pub struct LogReactor {
    state: StateCell<LogState>,
    action: PublishRelay<LogAction>,
    mutation: PublishRelay<LogMutation>,
    /// Bag owned by the reactor itself, see `start_own_flow`.
    own_bag: DisposeBag,
    pub mutate_calls: AtomicUsize,
    pub reduce_calls: AtomicUsize,
    /// State passed to each `mutate` call, in call order.
    pub observed: Mutex<Vec<LogState>>,
}

impl LogReactor {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            state: StateCell::new(LogState::default()),
            action: PublishRelay::new(),
            mutation: PublishRelay::new(),
            own_bag: DisposeBag::new(),
            mutate_calls: AtomicUsize::new(0),
            reduce_calls: AtomicUsize::new(0),
            observed: Mutex::new(Vec::new()),
        })
    }

    /// Start the flow on a bag that dies with the reactor.
    pub fn start_own_flow(self: &Arc<Self>) {
        self.start_flow(&self.own_bag).unwrap();
    }

    pub fn mutate_calls(&self) -> usize {
        self.mutate_calls.load(Ordering::SeqCst)
    }

    pub fn reduce_calls(&self) -> usize {
        self.reduce_calls.load(Ordering::SeqCst)
    }

    pub fn applied(&self) -> Vec<u32> {
        self.current_state().applied
    }
}

impl Reactor for LogReactor {
    type State = LogState;
    type Action = LogAction;
    type Mutation = LogMutation;

    fn state(&self) -> &StateCell<LogState> {
        &self.state
    }

    fn action(&self) -> &PublishRelay<LogAction> {
        &self.action
    }

    fn mutation(&self) -> &PublishRelay<LogMutation> {
        &self.mutation
    }

    fn mutate(&self, action: LogAction, state: LogState) {
        self.mutate_calls.fetch_add(1, Ordering::SeqCst);
        self.observed.lock().push(state);
        match action {
            LogAction::Record(id) => self.submit_mutation(LogMutation::Append(id)),
            LogAction::Observe => {}
        }
    }

    fn reduce(&self, previous: &LogState, mutation: LogMutation) -> Option<LogState> {
        self.reduce_calls.fetch_add(1, Ordering::SeqCst);
        if matches!(mutation, LogMutation::Slow(_)) {
            std::thread::sleep(SLOW_REDUCE);
        }
        apply_log(previous, mutation)
    }
}

/// A reactor with its flow running on a fresh bag.
pub fn started() -> (Arc<LogReactor>, DisposeBag) {
    let reactor = LogReactor::new();
    let bag = DisposeBag::new();
    reactor.start_flow(&bag).unwrap();
    (reactor, bag)
}

/// Receive from `feed` until `pred` matches, failing the test after `WAIT`.
pub async fn wait_for<T>(feed: &mut Feed<T>, pred: impl Fn(&T) -> bool) -> T {
    let found = tokio::time::timeout(WAIT, async {
        while let Some(value) = feed.recv().await {
            if pred(&value) {
                return Some(value);
            }
        }
        None
    })
    .await;
    found.ok().flatten().expect("condition not reached before timeout")
}

/// Next value from `feed`, failing the test after `WAIT`.
pub async fn next<T>(feed: &mut Feed<T>) -> T {
    tokio::time::timeout(WAIT, feed.recv())
        .await
        .ok()
        .flatten()
        .expect("no value before timeout")
}

/// Poll `cond` until it holds, failing the test after `WAIT`.
pub async fn eventually(cond: impl Fn() -> bool) {
    let reached = tokio::time::timeout(WAIT, async {
        while !cond() {
            tokio::time::sleep(Duration::from_millis(5)).await;
        }
    })
    .await;
    assert!(reached.is_ok(), "condition not reached before timeout");
}

/// Give the pipelines time to process anything already queued.
pub async fn settle() {
    tokio::time::sleep(Duration::from_millis(50)).await;
}
