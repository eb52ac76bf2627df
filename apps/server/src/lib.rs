pub mod api;
pub mod auth;
pub mod config;
pub mod cookies;
pub mod error;
pub mod flash;
mod main_lib;
pub mod views;

pub use main_lib::{build_state, build_state_with_clock, init_tracing, AppState};
