//! The two pipelines behind [`Reactor::start_flow`].

use std::ops::ControlFlow;
use std::sync::{Arc, Weak};

use tokio::runtime::Handle;

use super::dispose::{DisposeBag, Scope};
use super::error::FlowError;
use super::reactor::Reactor;
use super::relay::Feed;

/// Wire `reactor`'s action and mutation pipelines for the lifetime of `bag`.
///
/// Both feeds are subscribed before this returns, so anything submitted
/// afterwards is processed. The pipelines hold the reactor weakly: once
/// the last strong reference is gone, remaining events are discarded.
pub fn start_flow<R: Reactor>(reactor: &Arc<R>, bag: &DisposeBag) -> Result<(), FlowError> {
    let handle = Handle::try_current().map_err(|_| FlowError::NoRuntime)?;
    if bag.is_disposed() {
        return Err(FlowError::Disposed);
    }

    let actions = reactor.action().subscribe();
    let mutations = reactor.mutation().subscribe();
    let weak = Arc::downgrade(reactor);
    let scope = bag.scope();

    bag.insert(handle.spawn(run_actions(weak.clone(), Arc::clone(&scope), actions)));
    bag.insert(handle.spawn(run_mutations(weak, scope, mutations)));

    tracing::debug!(reactor = std::any::type_name::<R>(), "Flow started");
    Ok(())
}

/// Reports a pipeline that unwinds out of a panicking hook.
struct PipelineGuard<'a> {
    scope: &'a Scope,
    pipeline: &'static str,
}

impl Drop for PipelineGuard<'_> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            self.scope.record_panic();
            tracing::error!(pipeline = self.pipeline, "Pipeline terminated by a panicking hook");
        }
    }
}

async fn run_actions<R: Reactor>(reactor: Weak<R>, scope: Arc<Scope>, mut feed: Feed<R::Action>) {
    let _guard = PipelineGuard {
        scope: &scope,
        pipeline: "action",
    };
    while let Some(action) = feed.recv().await {
        if apply_action(&reactor, &scope, action).is_break() {
            break;
        }
    }
    tracing::trace!("Action pipeline finished");
}

async fn run_mutations<R: Reactor>(
    reactor: Weak<R>,
    scope: Arc<Scope>,
    mut feed: Feed<R::Mutation>,
) {
    let _guard = PipelineGuard {
        scope: &scope,
        pipeline: "mutation",
    };
    while let Some(mutation) = feed.recv().await {
        if apply_mutation(&reactor, &scope, mutation).is_break() {
            break;
        }
    }
    tracing::trace!("Mutation pipeline finished");
}

fn apply_action<R: Reactor>(reactor: &Weak<R>, scope: &Scope, action: R::Action) -> ControlFlow<()> {
    // Upgrade before entering the scope: if this turns out to be the last
    // strong reference, the reactor (and a bag it owns) is dropped after
    // the guard is released.
    let Some(reactor) = reactor.upgrade() else {
        tracing::trace!(?action, "Reactor dropped, discarding action");
        return ControlFlow::Break(());
    };
    let Some(active) = scope.enter() else {
        tracing::trace!(?action, "Flow disposed, discarding action");
        return ControlFlow::Break(());
    };

    let state = reactor.current_state();
    tracing::trace!(?action, ?state, "mutate");
    reactor.mutate(action, state);

    drop(active);
    ControlFlow::Continue(())
}

fn apply_mutation<R: Reactor>(
    reactor: &Weak<R>,
    scope: &Scope,
    mutation: R::Mutation,
) -> ControlFlow<()> {
    let Some(reactor) = reactor.upgrade() else {
        tracing::trace!(?mutation, "Reactor dropped, discarding mutation");
        return ControlFlow::Break(());
    };
    let Some(active) = scope.enter() else {
        tracing::trace!(?mutation, "Flow disposed, discarding mutation");
        return ControlFlow::Break(());
    };

    let previous = reactor.current_state();
    match reactor.reduce(&previous, mutation) {
        Some(next) if next != previous => {
            tracing::trace!(state = ?next, "State published");
            reactor.state().publish(next);
        }
        _ => tracing::trace!("Reduction left state unchanged"),
    }

    drop(active);
    ControlFlow::Continue(())
}
