//! Reducer for the demo screen.

use super::action::DemoMutation;
use super::state::DemoState;

/// Pure state transition for the demo screen.
///
/// Returns `None` when the mutation would not change anything.
pub fn reduce(previous: &DemoState, mutation: DemoMutation) -> Option<DemoState> {
    match mutation {
        DemoMutation::SetLoading { loading } if previous.is_loading != loading => {
            Some(DemoState {
                is_loading: loading,
            })
        }
        DemoMutation::SetLoading { .. } => None,
    }
}
