use crate::flow::{Action, Mutation};

/// Intents the demo screen can submit.
#[derive(Debug, Clone, PartialEq)]
pub enum DemoAction {
    /// Load the screen's data.
    GetData,
}

impl Action for DemoAction {}

#[derive(Debug, Clone, PartialEq)]
pub enum DemoMutation {
    SetLoading { loading: bool },
}

impl Mutation for DemoMutation {}

/// One-shot UI effects. Not part of the reduce pipeline and never replayed.
#[derive(Debug, Clone, PartialEq)]
pub enum Navigation {
    ShowError { error: String },
}
