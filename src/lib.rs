pub mod authz;
pub mod config;
pub mod core;

// Host-facing surfaces
pub mod hooks;
pub mod tools;

// Logging setup shared by hosts and the bundled binary
pub mod logging;
