//! Public library interface for the binary and integration tests.

pub mod actions;
pub mod app;
pub mod config;
pub mod core;
pub mod error;
pub mod host;
pub mod input;
pub mod keymap;
pub mod preview;
pub mod runtime;
pub mod runtime_util;
pub mod trace;
pub mod ui;
pub mod util;

pub use app::App;
pub use error::{
  Error,
  Result,
};
