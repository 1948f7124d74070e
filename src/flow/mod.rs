//! Reactor-style unidirectional data flow.
//!
//! This module provides the building blocks for a view-model whose state
//! is only ever written by its own reducer.
//!
//! # Architecture
//!
//! ```text
//! View ──→ Action ──→ mutate ──→ Mutation ──→ reduce ──→ State ──→ View
//!                       │                                  │
//!                       └────── side effects ──────────────┘
//! ```
//!
//! - **State**: Immutable snapshot held in a [`StateCell`]
//! - **Action**: Intent from the view, delivered through a [`PublishRelay`]
//! - **Mutation**: Effect-resolved transition request, produced by `mutate`
//! - **Reactor**: The view-model trait tying the three together
//!
//! [`Reactor::start_flow`] wires the two pipelines. They stay alive until
//! the [`DisposeBag`] passed to it is disposed or dropped.

mod action;
mod cell;
mod coordinator;
mod dispose;
mod error;
mod reactor;
mod relay;
mod state;

pub use action::{Action, Mutation};
pub use cell::StateCell;
pub use coordinator::start_flow;
pub use dispose::DisposeBag;
pub use error::FlowError;
pub use reactor::Reactor;
pub use relay::{Feed, PublishRelay};
pub use state::FlowState;
