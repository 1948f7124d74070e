//! Cancellation and weak-reference behavior of a running flow.

mod common;

use common::*;
use mvvm_reactor::flow::{DisposeBag, Reactor};

#[tokio::test]
async fn disposed_flow_ignores_actions() {
    let (reactor, bag) = started();
    bag.dispose();

    reactor.submit_action(LogAction::Record(1));
    settle().await;

    assert_eq!(reactor.mutate_calls(), 0);
    assert_eq!(reactor.current_state(), LogState::default());
}

#[tokio::test]
async fn dropped_bag_ignores_mutations() {
    let (reactor, bag) = started();
    drop(bag);

    reactor.submit_mutation(LogMutation::Append(1));
    settle().await;

    assert_eq!(reactor.reduce_calls(), 0);
    assert_eq!(reactor.current_state(), LogState::default());
}

#[tokio::test]
async fn dispose_releases_feed_subscriptions() {
    let (reactor, bag) = started();
    assert_eq!(reactor.action().subscriber_count(), 1);
    assert_eq!(reactor.mutation().subscriber_count(), 1);

    bag.dispose();
    eventually(|| {
        reactor.action().subscriber_count() == 0 && reactor.mutation().subscriber_count() == 0
    })
    .await;
    assert!(bag.is_empty());
}

#[tokio::test]
async fn flow_stops_mid_stream_on_dispose() {
    let (reactor, bag) = started();
    let mut states = reactor.state().subscribe();

    reactor.submit_mutation(LogMutation::Append(1));
    wait_for(&mut states, |s| s.applied == vec![1]).await;

    bag.dispose();
    reactor.submit_mutation(LogMutation::Append(2));
    settle().await;

    assert_eq!(reactor.applied(), vec![1]);
}

#[tokio::test]
async fn dropped_reactor_discards_pending_mutation() {
    let (reactor, _bag) = started();
    let cell = reactor.state().clone();
    let mutations = reactor.mutation().clone();
    drop(reactor);

    mutations.accept(LogMutation::Append(1));
    settle().await;

    assert_eq!(cell.value(), LogState::default());
    // The pipeline ended, so its feed is gone too.
    assert_eq!(mutations.subscriber_count(), 0);
}

#[tokio::test]
async fn reactor_owning_its_bag_tears_down_on_drop() {
    let reactor = LogReactor::new();
    reactor.start_own_flow();
    let actions = reactor.action().clone();
    assert_eq!(actions.subscriber_count(), 1);

    drop(reactor);
    actions.accept(LogAction::Record(1));

    eventually(|| actions.subscriber_count() == 0).await;
}

#[tokio::test]
async fn starting_twice_duplicates_pipelines() {
    let reactor = LogReactor::new();
    let bag = DisposeBag::new();
    reactor.start_flow(&bag).unwrap();
    reactor.start_flow(&bag).unwrap();

    reactor.submit_action(LogAction::Observe);
    eventually(|| reactor.mutate_calls() == 2).await;
    assert_eq!(bag.len(), 4);
}

#[tokio::test]
async fn separate_bags_end_independently() {
    let reactor = LogReactor::new();
    let first = DisposeBag::new();
    let second = DisposeBag::new();
    reactor.start_flow(&first).unwrap();
    reactor.start_flow(&second).unwrap();

    first.dispose();
    reactor.submit_action(LogAction::Observe);

    eventually(|| reactor.mutate_calls() == 1).await;
    settle().await;
    assert_eq!(reactor.mutate_calls(), 1);
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn dispose_during_slow_reduce_keeps_its_result_and_drops_the_queue() {
    let (reactor, bag) = started();

    reactor.submit_mutation(LogMutation::Slow(1));
    eventually(|| reactor.reduce_calls() == 1).await;
    reactor.submit_mutation(LogMutation::Append(2));
    reactor.submit_mutation(LogMutation::Append(3));
    reactor.submit_mutation(LogMutation::Append(4));

    // Waits for the in-flight reduction to publish.
    bag.dispose();
    assert_eq!(reactor.applied(), vec![1]);

    settle().await;
    assert_eq!(reactor.applied(), vec![1]);
    assert_eq!(reactor.reduce_calls(), 1);
}
