//! Demo view-model feature module.
//!
//! A single screen with a loading indicator. Requesting data flips the
//! indicator on, waits for a simulated fetch, then flips it off again.
//!
//! # Architecture
//!
//! - `state.rs` - Screen state (`is_loading`)
//! - `action.rs` - View intents, mutations and navigation events
//! - `reducer.rs` - State transitions (pure, no side effects)
//! - `view_model.rs` - `Reactor` implementation and the fetch side effect

mod action;
mod reducer;
mod state;
mod view_model;

pub use action::{DemoAction, DemoMutation, Navigation};
pub use reducer::reduce;
pub use state::DemoState;
pub use view_model::DemoViewModel;
