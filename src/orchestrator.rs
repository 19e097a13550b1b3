//! Turns a mode token into hosts file edits and a network refresh.

use std::time::Duration;

use tracing::info;

use crate::error::Result;
use crate::hosts::HostsEditor;
use crate::platform::NetworkRefresher;
use crate::sites::ModeCatalog;

/// Reserved token: wait, then lift the block.
pub const PLAY_MODE: &str = "play";

/// How long `play` waits before clearing.
pub const PLAY_DELAY: Duration = Duration::from_secs(300);

pub struct Orchestrator<'a> {
    catalog: &'a ModeCatalog,
    hosts: &'a HostsEditor,
    network: &'a dyn NetworkRefresher,
    play_delay: Duration,
}

impl<'a> Orchestrator<'a> {
    pub fn new(
        catalog: &'a ModeCatalog,
        hosts: &'a HostsEditor,
        network: &'a dyn NetworkRefresher,
    ) -> Self {
        Self {
            catalog,
            hosts,
            network,
            play_delay: PLAY_DELAY,
        }
    }

    pub fn with_play_delay(mut self, delay: Duration) -> Self {
        self.play_delay = delay;
        self
    }

    /// Run a mode token: `play` or a configured mode name.
    pub fn run(&self, token: &str) -> Result<()> {
        if token == PLAY_MODE {
            self.play()
        } else {
            self.block(token)
        }
    }

    /// Block every site of `mode`, replacing any other mode's block.
    pub fn block(&self, mode: &str) -> Result<()> {
        let lines = self.catalog.for_hosts(mode)?;
        self.hosts.apply(&lines, Some(mode))?;
        info!(mode, path = %self.hosts.path().display(), "blocking");
        self.network.refresh()
    }

    /// Sleep for the play delay, then clear.
    ///
    /// Nothing is blocked during the wait; whatever block exists now is lifted afterwards.
    pub fn play(&self) -> Result<()> {
        info!(secs = self.play_delay.as_secs(), "play: waiting before clearing block");
        std::thread::sleep(self.play_delay);
        self.clear()
    }

    /// Remove the block now.
    pub fn clear(&self) -> Result<()> {
        self.hosts.clear()?;
        self.network.refresh()
    }
}
