//! Mode catalog loaded from sites.ini.
//!
//! ```ini
//! [work]
//! sites = reddit.com, news.ycombinator.com
//! ```

use std::collections::BTreeSet;
use std::path::Path;

use ini::Ini;
use tracing::{debug, warn};

use crate::error::{ConfigError, GsdError, Result};
use crate::orchestrator::PLAY_MODE;

/// Address blocked domains are pointed at.
pub const BLOCK_ADDR: &str = "127.0.0.1";

/// A named set of domains to block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mode {
    pub name: String,
    pub sites: Vec<String>,
}

/// Modes from one sites file, in file order.
#[derive(Debug, Clone, Default)]
pub struct ModeCatalog {
    modes: Vec<Mode>,
}

impl ModeCatalog {
    /// Load catalog from a sites file.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loading sites");
        Self::parse(&text)
    }

    /// Parse catalog from INI text.
    pub fn parse(text: &str) -> Result<Self> {
        let ini = Ini::load_from_str(text).map_err(ConfigError::Parse)?;
        let mut modes: Vec<Mode> = Vec::new();
        for (section, props) in ini.iter() {
            let Some(name) = section else {
                if !props.is_empty() {
                    warn!("ignoring keys outside any [mode] section");
                }
                continue;
            };
            if modes.iter().any(|m| m.name == name) {
                return Err(ConfigError::DuplicateMode(name.to_string()).into());
            }
            if name == PLAY_MODE {
                warn!("[{PLAY_MODE}] section is shadowed by the reserved play mode");
            }
            let raw = props
                .get("sites")
                .ok_or_else(|| ConfigError::MissingSites(name.to_string()))?;
            let mut sites = Vec::new();
            for site in raw.split(',').map(str::trim).filter(|s| !s.is_empty()) {
                validate_hostname(site).map_err(|reason| ConfigError::InvalidDomain {
                    mode: name.to_string(),
                    domain: site.to_string(),
                    reason,
                })?;
                sites.push(site.to_string());
            }
            modes.push(Mode {
                name: name.to_string(),
                sites,
            });
        }
        Ok(Self { modes })
    }

    pub fn modes(&self) -> &[Mode] {
        &self.modes
    }

    /// Domains for a mode, as written in the file.
    pub fn get(&self, mode: &str) -> Result<&[String]> {
        self.modes
            .iter()
            .find(|m| m.name == mode)
            .map(|m| m.sites.as_slice())
            .ok_or_else(|| GsdError::UnknownMode(mode.to_string()))
    }

    /// Hosts file lines blocking a mode: bare and `www.` for each unique domain.
    pub fn for_hosts(&self, mode: &str) -> Result<Vec<String>> {
        let unique: BTreeSet<&str> = self.get(mode)?.iter().map(String::as_str).collect();
        Ok(unique
            .into_iter()
            .flat_map(|site| {
                [
                    format!("{BLOCK_ADDR}\t{site}"),
                    format!("{BLOCK_ADDR}\twww.{site}"),
                ]
            })
            .collect())
    }

    /// `work|social|play`, for usage messages.
    pub fn modes_prompt(&self) -> String {
        self.modes
            .iter()
            .map(|m| m.name.as_str())
            .chain(std::iter::once(PLAY_MODE))
            .collect::<Vec<_>>()
            .join("|")
    }
}

/// Validate hostname format. Returns the reason on failure.
pub fn validate_hostname(domain: &str) -> std::result::Result<(), String> {
    if domain.contains("..") {
        return Err("consecutive dots".into());
    }
    if domain == "localhost" {
        return Err("refusing to block localhost".into());
    }
    for label in domain.split('.') {
        if label.is_empty() {
            return Err("empty label".into());
        }
        if let Some(c) = label
            .chars()
            .find(|c| !c.is_ascii_alphanumeric() && *c != '-')
        {
            return Err(format!("illegal char {c:?}"));
        }
        if label.starts_with('-') || label.ends_with('-') {
            return Err("label cannot start/end with hyphen".into());
        }
    }
    Ok(())
}
