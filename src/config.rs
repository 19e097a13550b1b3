//! Path and setting resolution.
//!
//! Flags win over environment variables, which win over defaults.
//! GSD_SITES_FILE, GSD_HOSTS_FILE and GSD_PLAY_DELAY_SECS exist mainly for tests.

use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::{debug, warn};

use crate::error::ConfigError;
use crate::orchestrator::PLAY_DELAY;

pub const SITES_FILE_NAME: &str = "sites.ini";

/// Resolved file locations for one run.
#[derive(Debug, Clone)]
pub struct GsdPaths {
    pub hosts_file: PathBuf,
    sites_file: Result<PathBuf, Vec<PathBuf>>,
}

impl GsdPaths {
    /// Resolve from optional CLI overrides, the environment and platform defaults.
    pub fn resolve(sites: Option<PathBuf>, hosts: Option<PathBuf>) -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let user_config_dir = directories::ProjectDirs::from("", "", "gsd")
            .map(|dirs| dirs.config_dir().to_path_buf());
        Self::resolve_in(sites, hosts, &cwd, user_config_dir.as_deref())
    }

    /// Resolution against an explicit working directory and user config dir.
    pub fn resolve_in(
        sites: Option<PathBuf>,
        hosts: Option<PathBuf>,
        cwd: &Path,
        user_config_dir: Option<&Path>,
    ) -> Self {
        let hosts_file = hosts
            .or_else(|| std::env::var_os("GSD_HOSTS_FILE").map(PathBuf::from))
            .unwrap_or_else(crate::platform::default_hosts_path);

        let sites_file = match sites.or_else(|| std::env::var_os("GSD_SITES_FILE").map(PathBuf::from)) {
            Some(path) => Ok(path),
            None => {
                let candidates: Vec<PathBuf> = std::iter::once(cwd.join(SITES_FILE_NAME))
                    .chain(user_config_dir.map(|d| d.join(SITES_FILE_NAME)))
                    .collect();
                candidates
                    .iter()
                    .find(|p| p.is_file())
                    .cloned()
                    .ok_or(candidates)
            }
        };
        debug!(hosts = %hosts_file.display(), sites = ?sites_file, "resolved paths");
        Self {
            hosts_file,
            sites_file,
        }
    }

    /// Sites file to load, or the locations searched when none exists.
    pub fn sites_file(&self) -> Result<&Path, ConfigError> {
        match &self.sites_file {
            Ok(path) => Ok(path.as_path()),
            Err(searched) => Err(ConfigError::NotFound {
                searched: searched.clone(),
            }),
        }
    }
}

/// Play delay, honouring GSD_PLAY_DELAY_SECS.
pub fn play_delay() -> Duration {
    match std::env::var("GSD_PLAY_DELAY_SECS") {
        Ok(raw) => match raw.trim().parse::<u64>() {
            Ok(secs) => Duration::from_secs(secs),
            Err(_) => {
                warn!(value = %raw, "GSD_PLAY_DELAY_SECS is not a number of seconds; using default");
                PLAY_DELAY
            }
        },
        Err(_) => PLAY_DELAY,
    }
}
