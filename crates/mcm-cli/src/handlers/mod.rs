//! Command handlers. One module per command family.

pub mod backup;
pub mod profile;
pub mod server;
