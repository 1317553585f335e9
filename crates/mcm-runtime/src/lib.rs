//! OS-level adapters for the Minecraft server manager.
//!
//! Everything that touches the operating system lives here: external
//! command execution, the GNU screen session backend, platform
//! detection, the YAML profile store and the tar/gzip backup writer.
//! `mcm-core` only sees the ports these adapters implement.

pub mod backup;
pub mod command;
pub mod detect;
pub mod profiles;
pub mod screen;

pub use backup::{BackupError, BackupRequest, collect_files, create_backup};
pub use command::{CommandOutput, CommandRunner, SystemCommandRunner};
pub use detect::{DetectError, detect_session_backend};
pub use profiles::FileProfileStore;
pub use screen::ScreenBackend;
