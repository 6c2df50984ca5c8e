// HookLog - app/mod.rs
//
// Application layer: browser state, fetch orchestration, HTTP page source.
// Dependencies: core layer, reqwest.
// Must NOT depend on: ui, platform specifics.

pub mod client;
pub mod fetch;
pub mod state;
