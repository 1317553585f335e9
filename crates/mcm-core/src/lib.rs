//! Core domain types, ports and services for the Minecraft server manager.
//!
//! This crate is infrastructure-free: process spawning, the screen session
//! backend and file storage live in `mcm-runtime`, presentation in `mcm-cli`.
//! Everything here talks to the outside world through the traits in
//! [`ports`].

pub mod domain;
pub mod error;
pub mod names;
pub mod paths;
pub mod ports;
pub mod services;

pub use domain::{HostDescriptor, Profile, ProfileInfo};
pub use error::{HostResult, OperationError};
pub use ports::{ProfileRepository, ProfileStoreError, SessionBackend, trim_session_id};
pub use services::{HostService, SESSION_PREFIX, StopPolicy};
