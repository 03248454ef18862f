// Library root: re-exports all modules so integration tests and external
// front ends can access the crate's public API.

pub mod app;
pub mod catalog;
pub mod config;
pub mod draft;
