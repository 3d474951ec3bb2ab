pub mod autoscale;
pub mod hardware;

pub use autoscale::{AutoscaleCommands, handle_autoscale_command};
pub use hardware::{HardwareCommands, handle_hardware_command};
