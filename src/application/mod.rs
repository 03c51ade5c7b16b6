/// Confluence client implementing the service interfaces
pub mod client;
/// Application configuration module
pub mod config;
/// Module containing service interfaces and traits
pub mod interfaces;
/// Transport observer and events
pub mod telemetry;

pub use interfaces::page::*;
pub use interfaces::space::*;
