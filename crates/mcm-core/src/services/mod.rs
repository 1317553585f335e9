//! Core services orchestrating over the ports.

pub mod host_service;

pub use host_service::{HostService, SESSION_PREFIX, StopPolicy};
