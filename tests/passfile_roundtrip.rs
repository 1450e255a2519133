//! Integration tests for the passfile format: parse/serialize round-trips,
//! entry-level error isolation and file persistence.

use passloom::{
    execute_sequence, load_passfile, passfile_to_string, save_passfile, Passfile,
    RESERVED_SEQUENCE_NAMES,
};

const SAMPLE: &str = "example.com:
    alice - strong
    bob - DEFAULT

[+strong]
    init($key, $domain, $user)
    diceware(3, 5)

[spare]
    append($key)
    sha512()
    base64()
    limit(16)
";

#[test]
fn test_round_trip_preserves_structure() {
    let original = Passfile::parse(SAMPLE);
    let reparsed = Passfile::parse(&passfile_to_string(&original));

    assert_eq!(reparsed.default, original.default);
    assert_eq!(reparsed.domains.len(), original.domains.len());
    for (name, domain) in &original.domains {
        assert_eq!(reparsed.domains[name].users, domain.users);
    }
    // Sequences compare structurally, segment by segment.
    for (name, sequence) in &original.sequences {
        assert_eq!(&reparsed.sequences[name], sequence, "{}", name);
    }
    assert_eq!(reparsed.sequences.len(), original.sequences.len());
}

#[test]
fn test_round_trip_preserves_derivations() {
    let original = Passfile::parse(SAMPLE);
    let reparsed = Passfile::parse(&passfile_to_string(&original));
    for sequence in ["strong", "spare", "good_password", "LEGACY2"] {
        let a = execute_sequence(original.get_sequence(sequence).unwrap(), "k", "d.com", "u");
        let b = execute_sequence(reparsed.get_sequence(sequence).unwrap(), "k", "d.com", "u");
        assert_eq!(a.unwrap(), b.unwrap(), "{}", sequence);
    }
}

#[test]
fn test_serialized_form_omits_builtins_and_comments() {
    let rendered = passfile_to_string(&Passfile::parse("# my precious comment\n[mine]\nsha256()\n"));
    for reserved in RESERVED_SEQUENCE_NAMES {
        assert!(!rendered.contains(&format!("[{}]", reserved)));
    }
    assert!(!rendered.contains("my precious comment"));
    assert!(rendered.contains("[mine]"));
}

#[test]
fn test_malformed_entry_does_not_poison_the_file() {
    let text = "ok.domain:
    alice - DEFAULT

broken domain line without colon

[valid]
    sha256()
    base58()

[also broken
    sha256()

tail.domain:
    bob - valid
";
    let passfile = Passfile::parse(text);
    assert!(passfile.domains.contains_key("ok.domain"));
    assert!(passfile.domains.contains_key("tail.domain"));
    assert_eq!(passfile.domains.len(), 2);
    assert!(passfile.sequences.contains_key("valid"));
    assert!(passfile.validate().is_ok());
}

#[test]
fn test_forbidden_names_are_rejected_at_parse_time() {
    let passfile = Passfile::parse("bad;domain:\n    alice - DEFAULT\n\n[fine]\nsha256()\n");
    assert!(passfile.domains.is_empty());
    assert!(passfile.sequences.contains_key("fine"));
}

#[test]
fn test_save_load_cycle_derives_identically() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("store.passfile");

    let original = Passfile::parse(SAMPLE);
    let expected =
        execute_sequence(original.get_sequence("DEFAULT").unwrap(), "key", "example.com", "alice")
            .unwrap();

    save_passfile(&path, &original).unwrap();
    let loaded = load_passfile(&path).unwrap();
    let derived =
        execute_sequence(loaded.get_sequence("DEFAULT").unwrap(), "key", "example.com", "alice")
            .unwrap();
    assert_eq!(derived, expected);
}

#[test]
fn test_missing_file_is_the_only_hard_failure() {
    let dir = tempfile::tempdir().unwrap();
    assert!(load_passfile(dir.path().join("nope.passfile")).is_err());

    // Arbitrarily mangled content still loads (with warnings), because
    // entry errors are isolated.
    let path = dir.path().join("garbage.passfile");
    std::fs::write(&path, ")(*&^%$\n\u{1F980}\n").unwrap();
    let passfile = load_passfile(&path).unwrap();
    assert!(passfile.sequences.contains_key("good_password"));
    assert_eq!(passfile.default, "good_password");
}

#[test]
fn test_passfile_serializes_to_json() {
    let passfile = Passfile::parse(SAMPLE);
    let json = serde_json::to_string(&passfile).unwrap();
    assert!(json.contains("\"default\":\"strong\""));
    assert!(json.contains("example.com"));
}
