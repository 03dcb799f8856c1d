//! Strict load rejects duplicate hosts and unparsed lines; tolerant load does not.

mod common;

use hostsedit::hosts::strict_violations;
use hostsedit::{Error, HostsFile, Violation};

#[test]
fn duplicate_host_rejected_only_in_strict() {
    let dir = common::temp_home();
    let path = common::write_hosts(dir.path(), "1.1.1.1 dup\n2.2.2.2 dup\n");

    let err = HostsFile::load(&path, true).unwrap_err();
    match err {
        Error::MalformedStrictDocument(Violation::DuplicateHost { host, entry }) => {
            assert_eq!(host, "dup");
            assert_eq!(entry, 2);
        }
        other => panic!("expected duplicate host, got {other:?}"),
    }

    let hosts = HostsFile::load(&path, false).unwrap();
    assert_eq!(hosts.get("dup"), Some("1.1.1.1"));
}

#[test]
fn unparsed_line_rejected_in_strict() {
    let storage = common::MemoryStorage::new("1.1.1.1 a\njust some words\n");
    let err = storage.open(true).unwrap_err();
    assert!(matches!(
        err,
        Error::MalformedStrictDocument(Violation::Unparsed { entry: 2, .. })
    ));
    assert!(err.to_string().contains("just some words"));
    assert!(storage.open(false).is_ok());
}

#[test]
fn comments_are_exempt() {
    let storage = common::MemoryStorage::new(
        "# plain text comment\n# 1.1.1.1 dup\n1.1.1.1 dup\n# 2.2.2.2 dup\n",
    );
    let hosts = storage.open(true).unwrap();
    assert_eq!(hosts.get("dup"), Some("1.1.1.1"));
}

#[test]
fn violations_are_collected_in_order() {
    let storage = common::MemoryStorage::new("1.1.1.1 a b\noops\n2.2.2.2 b\n3.3.3.3 a\n");
    let hosts = storage.open(false).unwrap();

    let found = strict_violations(hosts.lines());
    assert_eq!(
        found,
        vec![
            Violation::Unparsed {
                text: "oops".to_string(),
                entry: 2
            },
            Violation::DuplicateHost {
                host: "b".to_string(),
                entry: 3
            },
            Violation::DuplicateHost {
                host: "a".to_string(),
                entry: 4
            },
        ]
    );
}
