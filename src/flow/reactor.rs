//! Reactor trait: the capability set of a flow-driven view-model.

use std::sync::Arc;

use super::action::{Action, Mutation};
use super::cell::StateCell;
use super::coordinator;
use super::dispose::DisposeBag;
use super::error::FlowError;
use super::relay::PublishRelay;
use super::state::FlowState;

/// A view-model whose state is driven by actions and mutations.
///
/// Implementors declare the three slots and the two hooks. The flow
/// between them is wired once with [`start_flow`](Self::start_flow):
///
/// 1. `action` → `mutate(action, state)` → zero or more `mutation`s
/// 2. `mutation` → `reduce(state, mutation)` → `state`
///
/// The view subscribes to [`state`](Self::state) and only ever writes
/// through [`submit_action`](Self::submit_action).
pub trait Reactor: Send + Sync + 'static {
    /// The state type published to the view.
    type State: FlowState;

    /// The action type the view submits.
    type Action: Action;

    /// The mutation type `mutate` produces.
    type Mutation: Mutation;

    fn state(&self) -> &StateCell<Self::State>;

    fn action(&self) -> &PublishRelay<Self::Action>;

    fn mutation(&self) -> &PublishRelay<Self::Mutation>;

    /// Translate an action into mutations.
    ///
    /// `state` is the value current when the action is processed. Side
    /// effects belong here; results go back through
    /// [`submit_mutation`](Self::submit_mutation), either right away or
    /// from async work started by this call.
    fn mutate(&self, action: Self::Action, state: Self::State);

    /// Compute the next state, or `None` to leave it untouched.
    ///
    /// This must be a pure function of its inputs: no I/O, no writes to
    /// anything outside the returned value. Do not submit actions or
    /// mutations from here.
    fn reduce(&self, previous: &Self::State, mutation: Self::Mutation) -> Option<Self::State>;

    fn submit_action(&self, action: Self::Action) {
        self.action().accept(action);
    }

    fn submit_mutation(&self, mutation: Self::Mutation) {
        self.mutation().accept(mutation);
    }

    fn current_state(&self) -> Self::State {
        self.state().value()
    }

    /// Wire the action and mutation pipelines for the lifetime of `bag`.
    ///
    /// Call exactly once per reactor; a second call adds a second pair of
    /// pipelines.
    fn start_flow(self: &Arc<Self>, bag: &DisposeBag) -> Result<(), FlowError>
    where
        Self: Sized,
    {
        coordinator::start_flow(self, bag)
    }
}
