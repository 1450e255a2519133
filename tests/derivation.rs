//! End-to-end derivation tests: configuration text through the parser,
//! validator and executor, checked against fixed derivation vectors.

use passloom::{execute_sequence, ExecutionError, Passfile};

const SAMPLE: &str = "# comment line
example.com:
    alice - strong
    bob - DEFAULT

db.internal:
    - LEGACY2

[+strong]
    init($key, $domain, $user)
    diceware(3, 5)
    capitalize_some()
    add_simple_special_characters(1, 2)

[wordy]
    init($key, $domain, $user)
    sha256()
    base58()
    limit(12)
    prepend(\"pw-\")

[pieces]
    append($key) append(\"-\")
    append($domain)
    cut(0, 9) insert(4, \"#\") replace_at(0, \"Q\") make_unambiguous()
";

fn derive(passfile: &Passfile, sequence: &str, key: &str, domain: &str, user: &str) -> String {
    let sequence = passfile.get_sequence(sequence).expect("sequence exists");
    execute_sequence(sequence, key, domain, user).expect("derivation succeeds")
}

#[test]
fn test_sample_parses_and_validates() {
    let passfile = Passfile::parse(SAMPLE);
    let mut names: Vec<&str> = passfile.sequences.keys().map(String::as_str).collect();
    names.sort();
    assert_eq!(names, ["LEGACY1", "LEGACY2", "good_password", "pieces", "strong", "wordy"]);
    assert_eq!(passfile.default, "strong");
    passfile.validate().expect("sample is valid");

    assert_eq!(passfile.domains["example.com"].users["alice"].sequence, "strong");
    assert_eq!(passfile.domains["example.com"].users["bob"].sequence, "DEFAULT");
    assert_eq!(passfile.domains["db.internal"].users[""].sequence, "LEGACY2");
}

#[test]
fn test_derivation_vectors() {
    let passfile = Passfile::parse(SAMPLE);
    assert_eq!(derive(&passfile, "strong", "hunter2", "example.com", "alice"), "smock Reset moist.");
    assert_eq!(
        derive(&passfile, "strong", "hunter2", "example.com", "bob"),
        "Wax Hu]nch gloom Sob Jet"
    );
    assert_eq!(derive(&passfile, "wordy", "hunter2", "example.com", "alice"), "pw-Bix7XNDA6D35");
    assert_eq!(derive(&passfile, "pieces", "hunter2", "example.com", "alice"), "Qunu#erf-e");
    assert_eq!(
        derive(&passfile, "good_password", "hunter2", "example.com", "alice"),
        "smock Reset moist."
    );
    assert_eq!(
        derive(&passfile, "good_password", "secret", "db.internal", ""),
        "Tha]w Eat_en trite"
    );
}

#[test]
fn test_default_token_resolves_to_marked_sequence() {
    let passfile = Passfile::parse(SAMPLE);
    assert_eq!(
        derive(&passfile, "DEFAULT", "hunter2", "example.com", "alice"),
        derive(&passfile, "strong", "hunter2", "example.com", "alice")
    );
}

#[test]
fn test_legacy_sequences_derive_historical_passwords() {
    let passfile = Passfile::parse(SAMPLE);
    assert_eq!(derive(&passfile, "LEGACY1", "key", "domain", ""), "k9Dz6RwfbTTZtxnJjcEs\n");
    assert_eq!(derive(&passfile, "LEGACY2", "key", "domain", "user"), "GwsBsNnW5j6nhMrRh3E5\n");
    assert_eq!(
        derive(&passfile, "LEGACY1", "hunter2", "example.com", ""),
        "rtEsVXutCIC3X6I2IFY9\n"
    );
    assert_eq!(
        derive(&passfile, "LEGACY2", "hunter2", "example.com", "alice"),
        "jkXKTU;uyGNP!j4NYK?p\n"
    );
}

#[test]
fn test_derivation_is_deterministic() {
    let passfile = Passfile::parse(SAMPLE);
    for _ in 0..3 {
        assert_eq!(
            derive(&passfile, "strong", "hunter2", "example.com", "alice"),
            "smock Reset moist."
        );
    }
}

#[test]
fn test_execution_errors_surface_to_caller() {
    let passfile = Passfile::parse("[broken]\n    frobnicate()\n\n[short]\n    cut(1)\n");
    let broken = passfile.get_sequence("broken").unwrap();
    assert!(matches!(
        execute_sequence(broken, "k", "d", "u"),
        Err(ExecutionError::UnknownFunction(_))
    ));
    let short = passfile.get_sequence("short").unwrap();
    assert!(matches!(
        execute_sequence(short, "k", "d", "u"),
        Err(ExecutionError::ArityMismatch { .. })
    ));
    // The same problems fail validation up front.
    assert!(passfile.validate().is_err());
}
