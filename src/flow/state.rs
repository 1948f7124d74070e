//! Base trait for view state in the reactor flow.

use std::fmt::Debug;

/// Marker trait for state objects.
///
/// States should be:
/// - Immutable (Clone to create new states)
/// - Self-contained (all data needed to render the view)
/// - Comparable (PartialEq, a reduction to an equal value is not republished)
pub trait FlowState: Clone + PartialEq + Debug + Send + Sync + 'static {}
