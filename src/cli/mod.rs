pub mod app;
pub mod commands;
pub mod pipeline;

pub use app::{Cli, Commands, dispatch, execute};
pub use pipeline::Context;
