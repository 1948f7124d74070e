//! Base traits for the two event kinds flowing through a reactor.

use std::fmt::Debug;

/// Marker trait for action objects.
///
/// Actions represent intent:
/// - User actions (button taps, key presses)
/// - System events (timers, lifecycle callbacks)
///
/// Actions are turned into mutations by [`Reactor::mutate`](super::Reactor::mutate).
pub trait Action: Clone + Debug + Send + Sync + 'static {}

/// Marker trait for mutation objects.
///
/// A mutation is a state transition request whose side effects have
/// already been resolved. The view never builds one directly.
pub trait Mutation: Clone + Debug + Send + Sync + 'static {}
