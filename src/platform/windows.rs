//! Windows platform implementations.

use crate::error::Result;

use super::NetworkRefresher;

pub const HOSTS_PATH: &str = r"C:\Windows\System32\drivers\etc\hosts";

pub struct WindowsNetworkRefresher;

impl NetworkRefresher for WindowsNetworkRefresher {
    fn refresh(&self) -> Result<()> {
        super::run_refresh_command("ipconfig", &["/flushdns"])
    }
}
