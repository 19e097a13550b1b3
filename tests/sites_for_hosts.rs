//! Hosts lines generated for a mode.

mod common;

use std::collections::HashSet;

use gsd::sites::ModeCatalog;

#[test]
fn bare_and_www_for_each_domain() {
    let catalog = ModeCatalog::parse(common::SITES).unwrap();
    let lines: HashSet<String> = catalog.for_hosts("work").unwrap().into_iter().collect();
    let expected: HashSet<String> = [
        "127.0.0.1\texample.com",
        "127.0.0.1\twww.example.com",
        "127.0.0.1\tfoo.com",
        "127.0.0.1\twww.foo.com",
    ]
    .into_iter()
    .map(String::from)
    .collect();
    assert_eq!(lines, expected);
}

#[test]
fn duplicates_collapse() {
    let catalog = ModeCatalog::parse("[work]\nsites = a.com, b.com, a.com,a.com\n").unwrap();
    let lines = catalog.for_hosts("work").unwrap();
    assert_eq!(lines.len(), 4);
    assert_eq!(lines.iter().filter(|l| *l == "127.0.0.1\ta.com").count(), 1);
}

#[test]
fn load_missing_file_fails() {
    let fx = common::fixture("", common::SITES);
    let err = ModeCatalog::load(&fx.dir.path().join("missing.ini")).unwrap_err();
    assert!(err.to_string().contains("missing.ini"));
}
