//! Platform abstraction for hosts file location, privileges and DNS cache refresh.

use std::path::PathBuf;
use std::process::Command;

#[cfg(unix)]
pub mod unix;

#[cfg(windows)]
pub mod windows;

use tracing::{info, warn};

use crate::error::{GsdError, Result};

/// Printed where no refresh command is known for the platform.
pub const CONTRIBUTE_MESSAGE: &str = "Please contribute DNS cache flush command on GitHub.";

/// Trait for making the OS pick up hosts file changes.
pub trait NetworkRefresher {
    /// Restart networking or flush the DNS cache. Blocks until the command exits.
    fn refresh(&self) -> Result<()>;
}

/// Get platform NetworkRefresher implementation.
/// If GSD_SKIP_NETWORK_REFRESH is set (e.g. in tests), refreshing is a no-op.
pub fn default_network_refresher() -> Box<dyn NetworkRefresher> {
    if std::env::var_os("GSD_SKIP_NETWORK_REFRESH").is_some() {
        return Box::new(SkipRefresher);
    }
    #[cfg(unix)]
    return Box::new(unix::UnixNetworkRefresher);

    #[cfg(windows)]
    return Box::new(windows::WindowsNetworkRefresher);

    #[cfg(not(any(unix, windows)))]
    return Box::new(UnsupportedPlatform);
}

/// Default hosts file for this platform.
pub fn default_hosts_path() -> PathBuf {
    #[cfg(windows)]
    return PathBuf::from(windows::HOSTS_PATH);

    #[cfg(not(windows))]
    return PathBuf::from("/etc/hosts");
}

/// Whether the current user may edit the hosts file.
/// If GSD_ASSUME_PRIVILEGED is set (e.g. in tests), the check passes; file permissions still apply.
pub fn is_privileged() -> bool {
    if std::env::var_os("GSD_ASSUME_PRIVILEGED").is_some() {
        return true;
    }
    #[cfg(unix)]
    return unix::is_privileged();

    #[cfg(not(unix))]
    return true;
}

/// NetworkRefresher that does nothing.
pub struct SkipRefresher;

impl NetworkRefresher for SkipRefresher {
    fn refresh(&self) -> Result<()> {
        warn!("GSD_SKIP_NETWORK_REFRESH set; not refreshing network");
        Ok(())
    }
}

/// NetworkRefresher for platforms without a known command. Asks for a contribution instead of failing.
pub struct UnsupportedPlatform;

impl NetworkRefresher for UnsupportedPlatform {
    fn refresh(&self) -> Result<()> {
        warn!(os = std::env::consts::OS, "no network refresh command for platform");
        println!("{CONTRIBUTE_MESSAGE}");
        Ok(())
    }
}

/// Run a refresh command to completion; non-zero exit is an error.
pub(crate) fn run_refresh_command(program: &str, args: &[&str]) -> Result<()> {
    let command = std::iter::once(program)
        .chain(args.iter().copied())
        .collect::<Vec<_>>()
        .join(" ");
    info!(%command, "refreshing network");
    let status = Command::new(program)
        .args(args)
        .status()
        .map_err(|source| GsdError::RefreshSpawn {
            command: command.clone(),
            source,
        })?;
    if !status.success() {
        return Err(GsdError::Refresh { command, status });
    }
    Ok(())
}
