//! Get/Exists: first live mapping wins; comments and passthrough are skipped.

mod common;

use hostsedit::HostsFile;

#[test]
fn get_reads_ipv4_and_ipv6() {
    let dir = common::temp_home();
    let path = common::write_hosts(
        dir.path(),
        "\n127.0.0.1 localhost\n::1 ipv6host\n# Comment line\n",
    );
    let hosts = HostsFile::load(&path, false).unwrap();

    assert_eq!(hosts.get("localhost"), Some("127.0.0.1"));
    assert_eq!(hosts.get("ipv6host"), Some("::1"));
    assert!(hosts.exists("localhost"));
    assert!(!hosts.exists("nonexistent"));
    assert_eq!(hosts.get("nonexistent"), None);
}

#[test]
fn first_match_wins() {
    let storage = common::MemoryStorage::new("1.1.1.1 dup\n2.2.2.2 dup other\n");
    let hosts = storage.open(false).unwrap();
    assert_eq!(hosts.get("dup"), Some("1.1.1.1"));
    assert_eq!(hosts.get("other"), Some("2.2.2.2"));
}

#[test]
fn comments_and_passthrough_are_not_bindings() {
    let storage = common::MemoryStorage::new("# 9.9.9.9 hidden\nbogus hidden\n");
    let hosts = storage.open(false).unwrap();
    assert!(!hosts.exists("hidden"));
    assert!(hosts.bindings().is_empty());
}

#[test]
fn bindings_follow_document_order() {
    let storage = common::MemoryStorage::new("1.1.1.1 b a\n# 3.3.3.3 c\n2.2.2.2 a c\n");
    let hosts = storage.open(false).unwrap();
    let got: Vec<(String, String)> = hosts
        .bindings()
        .into_iter()
        .map(|b| (b.host, b.ip))
        .collect();
    assert_eq!(
        got,
        vec![
            ("b".to_string(), "1.1.1.1".to_string()),
            ("a".to_string(), "1.1.1.1".to_string()),
            ("c".to_string(), "2.2.2.2".to_string()),
        ]
    );
}
