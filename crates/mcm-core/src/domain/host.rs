//! Read-only projections of running host sessions.

/// A server the host controller currently sees running.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostDescriptor {
    /// Logical server name, namespace prefix already stripped.
    pub name: String,
    /// Opaque backend location, e.g. `"screen@12345.mcm-alpha"`.
    pub host_location: String,
}
