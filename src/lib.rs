//! Site-rs library - static site server with a liveness endpoint.

pub mod cli;
pub mod colors;
pub mod config;
pub mod handlers;
pub mod middleware;
pub mod state;
