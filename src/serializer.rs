//! Passfile serialization: the inverse of the parser.
//!
//! Serialization round-trips domains, users and user-defined sequences.
//! User comments are not preserved; only a fixed boilerplate comment block
//! is emitted, and the built-in legacy sequences are never written.

use std::fs;
use std::io;
use std::path::Path;

use tracing::debug;

use crate::passfile::{Passfile, RESERVED_SEQUENCE_NAMES};

/// Boilerplate written at the top of every saved file.
pub const FILE_HEADER: &str = "# auto generated passloom file containing sequences, domains and users.\n\
     # feel free to edit / add but formatting and comments will be lost.";

/// Render a passfile in the text format understood by the parser.
pub fn passfile_to_string(passfile: &Passfile) -> String {
    let mut out = String::new();

    for domain in passfile.domains.values() {
        out.push_str("\n\n");
        out.push_str(&domain.name);
        out.push(':');
        for user in domain.users.values() {
            out.push_str("\n    ");
            out.push_str(&user.name);
            out.push_str(" - ");
            out.push_str(&user.sequence);
        }
    }

    if !passfile.sequences.is_empty() {
        out.push_str("\n\n# Sequences");
        out.push_str("\n# don't change, only copy & make new ones to be safe,");
        out.push_str("\n# otherwise you risk losing passwords if you forget");
        out.push_str("\n# the sequences.");
    }

    for sequence in passfile.sequences.values() {
        if RESERVED_SEQUENCE_NAMES.contains(&sequence.name.as_str()) {
            continue;
        }
        out.push_str("\n[");
        if passfile.default == sequence.name {
            out.push('+');
        }
        out.push_str(&sequence.name);
        out.push(']');
        for segment in &sequence.segments {
            out.push_str("\n    ");
            out.push_str(&segment.to_string());
        }
        out.push('\n');
    }

    out.push('\n');
    out
}

/// Write a passfile to disk, creating parent directories as needed.
pub fn save_passfile<P: AsRef<Path>>(path: P, passfile: &Passfile) -> io::Result<()> {
    let path = path.as_ref();
    if passfile.domains.is_empty() {
        debug!("saving a passfile with no domains");
    }
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    let mut contents = String::from(FILE_HEADER);
    contents.push_str(&passfile_to_string(passfile));
    fs::write(path, contents)?;
    debug!(path = %path.display(), "saved passfile");
    Ok(())
}

/// Load and parse a passfile. A missing or unreadable file is the only
/// hard failure; malformed entries inside the file are skipped with
/// warnings by the parser.
pub fn load_passfile<P: AsRef<Path>>(path: P) -> io::Result<Passfile> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    debug!(path = %path.display(), bytes = text.len(), "loaded passfile");
    Ok(Passfile::parse(&text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::passfile::{Domain, User};
    use crate::sequence::{Param, Segment, Sequence};

    fn sample() -> Passfile {
        let mut passfile = Passfile::new();
        let mut domain = Domain::new("example.com");
        domain.add_user(User::new("alice", "strong"));
        passfile.domains.insert(domain.name.clone(), domain);
        passfile.sequences.insert(
            "strong".into(),
            Sequence::with_segments(
                "strong",
                vec![Segment::new(
                    "init",
                    vec![
                        Param::Field("key".into()),
                        Param::Field("domain".into()),
                        Param::Field("user".into()),
                    ],
                )],
            ),
        );
        passfile.default = "strong".into();
        passfile
    }

    #[test]
    fn test_exact_rendering() {
        let expected = "\n\nexample.com:\n    alice - strong\
                        \n\n# Sequences\
                        \n# don't change, only copy & make new ones to be safe,\
                        \n# otherwise you risk losing passwords if you forget\
                        \n# the sequences.\
                        \n[+strong]\n    init($key, $domain, $user)\n\n";
        assert_eq!(passfile_to_string(&sample()), expected);
    }

    #[test]
    fn test_builtin_sequences_are_not_written() {
        let rendered = passfile_to_string(&sample());
        assert!(!rendered.contains("LEGACY1"));
        assert!(!rendered.contains("LEGACY2"));
        assert!(!rendered.contains("bad_legacy"));
    }

    #[test]
    fn test_empty_user_renders_with_bare_separator() {
        let mut passfile = sample();
        passfile.domains.get_mut("example.com").unwrap().add_user(User::new("", "LEGACY1"));
        assert!(passfile_to_string(&passfile).contains("\n     - LEGACY1"));
    }

    #[test]
    fn test_round_trip_through_parser() {
        let original = sample();
        let reparsed = Passfile::parse(&passfile_to_string(&original));
        assert_eq!(reparsed.default, "strong");
        assert_eq!(reparsed.sequences["strong"], original.sequences["strong"]);
        assert_eq!(
            reparsed.domains["example.com"].users["alice"],
            original.domains["example.com"].users["alice"]
        );
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("store.passfile");
        save_passfile(&path, &sample()).unwrap();

        let loaded = load_passfile(&path).unwrap();
        assert_eq!(loaded.default, "strong");
        assert!(loaded.domains.contains_key("example.com"));

        assert!(load_passfile(dir.path().join("missing")).is_err());
    }
}
