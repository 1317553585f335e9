//! Ports (trait interfaces) implemented by `mcm-runtime` adapters.

pub mod profile_repository;
pub mod session_backend;

pub use profile_repository::{ProfileRepository, ProfileStoreError};
pub use session_backend::{SessionBackend, trim_session_id};
