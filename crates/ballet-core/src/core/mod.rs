// core/mod.rs
//
// Simulation: collision test, event checkers, configuration, and the
// environment that ties them together.

pub mod collision;
pub mod config;
pub mod environment;
pub mod events;
