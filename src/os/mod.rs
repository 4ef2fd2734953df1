//! OS-level helpers: environment snapshots, platform conventions and process identity.

pub mod env;
pub mod platform;
#[cfg(unix)]
pub mod user;
