//! Unix (macOS, Linux) platform implementations.

use crate::error::Result;

use super::{NetworkRefresher, UnsupportedPlatform};

pub struct UnixNetworkRefresher;

impl NetworkRefresher for UnixNetworkRefresher {
    fn refresh(&self) -> Result<()> {
        match refresh_command() {
            Some((program, args)) => super::run_refresh_command(program, args),
            None => UnsupportedPlatform.refresh(),
        }
    }
}

/// Command that makes the resolver re-read /etc/hosts, if known for this OS.
fn refresh_command() -> Option<(&'static str, &'static [&'static str])> {
    if cfg!(target_os = "linux") {
        Some(("systemctl", &["restart", "NetworkManager"][..]))
    } else if cfg!(target_os = "macos") {
        Some(("dscacheutil", &["-flushcache"][..]))
    } else {
        None
    }
}

/// Root check on the effective uid.
pub fn is_privileged() -> bool {
    // SAFETY: geteuid has no preconditions and cannot fail.
    unsafe { libc::geteuid() == 0 }
}
