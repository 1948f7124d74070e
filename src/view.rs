//! Demo screen: binds the demo view-model to log output.

use std::sync::Arc;

use crate::demo::{DemoAction, DemoState, DemoViewModel, Navigation};
use crate::flow::{DisposeBag, Feed, FlowError, Reactor};

/// The view side of the demo screen.
///
/// Owns the view-model and the bag its flow and bindings live in.
/// Dropping the view tears everything down.
pub struct DemoView {
    view_model: Arc<DemoViewModel>,
    bag: DisposeBag,
}

impl DemoView {
    /// Start the view-model's flow and bind the view to it.
    ///
    /// Must be called from within a tokio runtime.
    pub fn new(view_model: DemoViewModel) -> Result<Self, FlowError> {
        let view_model = Arc::new(view_model);
        let bag = DisposeBag::new();
        view_model.start_flow(&bag)?;

        let view = Self { view_model, bag };
        view.bind_view_model();
        Ok(view)
    }

    fn bind_view_model(&self) {
        let mut states = self.view_model.state().subscribe();
        self.bag.insert(tokio::spawn(async move {
            let mut rendered = None;
            while let Some(state) = states.recv().await {
                if rendered == Some(state.is_loading) {
                    continue;
                }
                rendered = Some(state.is_loading);
                tracing::info!(is_loading = state.is_loading, "Render");
            }
        }));

        let mut navigation = self.view_model.navigator().subscribe();
        self.bag.insert(tokio::spawn(async move {
            while let Some(event) = navigation.recv().await {
                match event {
                    Navigation::ShowError { error } => tracing::warn!(%error, "Show error"),
                }
            }
        }));
    }

    pub fn view_model(&self) -> &Arc<DemoViewModel> {
        &self.view_model
    }

    /// Ask the view-model for data. Fire-and-forget.
    pub fn request_data(&self) {
        self.view_model.submit_action(DemoAction::GetData);
    }

    /// Request data and wait until loading has started and finished.
    ///
    /// Returns the idle state, or `None` if the view is disposed before
    /// loading finishes.
    pub async fn load(&self) -> Option<DemoState> {
        if self.bag.is_disposed() {
            return None;
        }
        let mut states = self.view_model.state().subscribe();
        self.request_data();

        tokio::select! {
            state = next_idle(&mut states) => state,
            _ = self.bag.disposed() => None,
        }
    }

    pub fn dispose(&self) {
        self.bag.dispose();
    }

    pub fn is_disposed(&self) -> bool {
        self.bag.is_disposed()
    }
}

async fn next_idle(states: &mut Feed<DemoState>) -> Option<DemoState> {
    let mut seen_loading = false;
    while let Some(state) = states.recv().await {
        if state.is_loading {
            seen_loading = true;
        } else if seen_loading {
            return Some(state);
        }
    }
    None
}
