//! Domain records for the manager.

pub mod host;
pub mod profile;

pub use host::HostDescriptor;
pub use profile::{Profile, ProfileInfo};
