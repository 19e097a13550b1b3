//! Shared test helpers.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

pub const SITES: &str = "[work]\nsites = example.com, foo.com\n\n[social]\nsites = facebook.com\n";

/// Temp dir holding a `hosts` file and a `sites.ini`.
pub struct Fixture {
    pub dir: TempDir,
    pub hosts: PathBuf,
    pub sites: PathBuf,
}

/// Create a temp dir with the given hosts content and sites.ini.
pub fn fixture(hosts_content: &str, sites_content: &str) -> Fixture {
    let dir = tempfile::Builder::new()
        .prefix("gsd_test_")
        .tempdir()
        .expect("temp dir");
    let hosts = dir.path().join("hosts");
    let sites = dir.path().join("sites.ini");
    fs::write(&hosts, hosts_content).unwrap();
    fs::write(&sites, sites_content).unwrap();
    Fixture { dir, hosts, sites }
}

impl Fixture {
    pub fn hosts_content(&self) -> String {
        fs::read_to_string(&self.hosts).unwrap()
    }
}

pub fn lines(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
