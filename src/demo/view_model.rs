use std::time::Duration;

use crate::config::DemoConfig;
use crate::flow::{PublishRelay, Reactor, StateCell};

use super::action::{DemoAction, DemoMutation, Navigation};
use super::reducer;
use super::state::DemoState;

const SIMULATED_ERROR: &str = "Failed to load data";

/// View-model behind the demo screen.
///
/// Wire it once with [`Reactor::start_flow`] before the view starts
/// submitting actions.
pub struct DemoViewModel {
    state: StateCell<DemoState>,
    action: PublishRelay<DemoAction>,
    mutation: PublishRelay<DemoMutation>,
    navigator: PublishRelay<Navigation>,
    fetch_delay: Duration,
    simulate_failure: bool,
}

impl DemoViewModel {
    pub fn new(config: &DemoConfig) -> Self {
        Self {
            state: StateCell::new(DemoState::default()),
            action: PublishRelay::new(),
            mutation: PublishRelay::new(),
            navigator: PublishRelay::new(),
            fetch_delay: config.fetch_delay(),
            simulate_failure: config.simulate_failure,
        }
    }

    /// One-shot navigation events for the view (error popups).
    pub fn navigator(&self) -> &PublishRelay<Navigation> {
        &self.navigator
    }

    /// Start a simulated fetch.
    ///
    /// The loading flag is raised synchronously; the completion arrives
    /// from a spawned task holding only the feeds, not the view-model.
    fn fetch_data(&self) {
        self.submit_mutation(DemoMutation::SetLoading { loading: true });

        let mutation = self.mutation.clone();
        let navigator = self.navigator.clone();
        let delay = self.fetch_delay;
        let fail = self.simulate_failure;
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            if fail {
                navigator.accept(Navigation::ShowError {
                    error: SIMULATED_ERROR.to_string(),
                });
            }
            mutation.accept(DemoMutation::SetLoading { loading: false });
        });
    }
}

impl Reactor for DemoViewModel {
    type State = DemoState;
    type Action = DemoAction;
    type Mutation = DemoMutation;

    fn state(&self) -> &StateCell<DemoState> {
        &self.state
    }

    fn action(&self) -> &PublishRelay<DemoAction> {
        &self.action
    }

    fn mutation(&self) -> &PublishRelay<DemoMutation> {
        &self.mutation
    }

    fn mutate(&self, action: DemoAction, state: DemoState) {
        match action {
            DemoAction::GetData => {
                tracing::debug!(was_loading = state.is_loading, "Fetching data");
                self.fetch_data();
            }
        }
    }

    fn reduce(&self, previous: &DemoState, mutation: DemoMutation) -> Option<DemoState> {
        reducer::reduce(previous, mutation)
    }
}
