//! Apply a mode to a temp hosts file, then clear it.

mod common;

use gsd::hosts::{self, HostsEditor};
use gsd::sites::ModeCatalog;

#[test]
fn apply_wraps_lines_in_sentinels() {
    let fx = common::fixture("127.0.0.1 localhost\n", common::SITES);
    let catalog = ModeCatalog::load(&fx.sites).unwrap();
    let editor = HostsEditor::new(&fx.hosts);

    editor
        .apply(&catalog.for_hosts("work").unwrap(), Some("work"))
        .unwrap();

    let content = fx.hosts_content();
    assert!(content.starts_with("127.0.0.1 localhost\n"));
    let block: Vec<&str> = content
        .lines()
        .skip_while(|l| *l != "## start gsd work")
        .collect();
    assert_eq!(block.first(), Some(&"## start gsd work"));
    assert_eq!(block.last(), Some(&"## end gsd"));
    let mut entries = block[1..block.len() - 1].to_vec();
    entries.sort();
    assert_eq!(
        entries,
        [
            "127.0.0.1\texample.com",
            "127.0.0.1\tfoo.com",
            "127.0.0.1\twww.example.com",
            "127.0.0.1\twww.foo.com",
        ]
    );
    assert_eq!(editor.active_mode().unwrap().as_deref(), Some("work"));
}

#[test]
fn remove_after_apply_restores_original() {
    let original = "127.0.0.1 localhost\n::1 localhost\n";
    let fx = common::fixture(original, common::SITES);
    let editor = HostsEditor::new(&fx.hosts);

    editor
        .apply(&common::lines(&["127.0.0.1\tx.com"]), Some("work"))
        .unwrap();
    assert_eq!(hosts::remove_managed_block(&fx.hosts_content()).unwrap(), original);

    editor.clear().unwrap();
    assert_eq!(fx.hosts_content(), original);
    assert_eq!(editor.active_mode().unwrap(), None);
}

#[test]
fn clear_on_clean_file_is_noop() {
    let original = "127.0.0.1 localhost";
    let fx = common::fixture(original, common::SITES);
    HostsEditor::new(&fx.hosts).clear().unwrap();
    assert_eq!(fx.hosts_content(), original);
}

#[test]
fn unterminated_block_is_left_alone() {
    let original = "127.0.0.1 localhost\n## start gsd work\n127.0.0.1\tx.com\n";
    let fx = common::fixture(original, common::SITES);
    assert!(HostsEditor::new(&fx.hosts).clear().is_err());
    assert_eq!(fx.hosts_content(), original);
}

#[test]
fn missing_hosts_file_reports_path() {
    let fx = common::fixture("", common::SITES);
    let missing = fx.dir.path().join("nope");
    let err = HostsEditor::new(&missing).clear().unwrap_err();
    assert!(err.to_string().contains("nope"));
}

#[test]
fn clearing_twice_removes_both_blocks() {
    let fx = common::fixture(
        "a\n## start gsd work\nx\n## end gsd\n## start gsd social\ny\n## end gsd\n",
        common::SITES,
    );
    let editor = HostsEditor::new(&fx.hosts);

    editor.clear().unwrap();
    assert_eq!(fx.hosts_content(), "a\n## start gsd social\ny\n## end gsd\n");
    assert_eq!(editor.active_mode().unwrap().as_deref(), Some("social"));

    editor.clear().unwrap();
    assert_eq!(fx.hosts_content(), "a\n");
}

#[test]
fn lines_around_block_stay_separate() {
    let fx = common::fixture(
        "127.0.0.1 localhost\n## start gsd work\n127.0.0.1\tx.com\n## end gsd\n::1 localhost\n",
        common::SITES,
    );
    HostsEditor::new(&fx.hosts).clear().unwrap();
    assert_eq!(fx.hosts_content(), "127.0.0.1 localhost\n::1 localhost\n");
}
