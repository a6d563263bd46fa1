mod config;
mod serve;
mod telemetry;

pub use config::*;
pub use serve::*;
pub use telemetry::*;
