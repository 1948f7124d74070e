//! Unidirectional view-model state management.
//!
//! [`flow`] holds the reusable core: a [`Reactor`](flow::Reactor) declares
//! its state cell, action and mutation feeds and two hooks, and
//! [`start_flow`](flow::Reactor::start_flow) keeps the state up to date
//! for as long as a [`DisposeBag`](flow::DisposeBag) lives.
//!
//! [`demo`] and [`view`] are one screen built on it.

pub mod config;
pub mod demo;
pub mod flow;
pub mod logging;
pub mod view;
