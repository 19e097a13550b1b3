//! gsd - block distracting websites by editing the hosts file.

pub mod cli;
pub mod config;
pub mod error;
pub mod hosts;
pub mod orchestrator;
pub mod platform;
pub mod sites;
