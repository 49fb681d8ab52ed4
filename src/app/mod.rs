// Application layer: wires the CLI onto the gateway.

pub mod commands;

pub use commands::{load_config, App};
