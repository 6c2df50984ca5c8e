// HookLog - core/mod.rs
//
// Core business logic layer.
// Dependencies: serde, chrono, csv.
// Must NOT depend on: ui, platform, app, or any network crate.

pub mod envelope;
pub mod export;
pub mod filter;
pub mod model;
pub mod summary;
