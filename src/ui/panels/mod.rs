// HookLog - ui/panels/mod.rs

pub mod about;
pub mod detail;
pub mod filters;
pub mod pagination;
pub mod summary;
pub mod table;
