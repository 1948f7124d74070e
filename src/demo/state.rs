use crate::flow::FlowState;

#[derive(Debug, Clone, PartialEq, Default)]
pub struct DemoState {
    /// A data request is in flight.
    pub is_loading: bool,
}

impl FlowState for DemoState {}
