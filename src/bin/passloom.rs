//! passloom CLI - derive deterministic passwords from named transformation sequences
//!
//! This tool is a thin shell over the library: it loads a passfile, takes
//! the key/domain/user strings from arguments or the environment, and
//! prints the derived string.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process;

use passloom::{builtin_registry, execute_sequence, load_passfile, passfile_to_string, Passfile};

#[derive(Parser)]
#[command(name = "passloom")]
#[command(version, about = "Derive deterministic passwords from named transformation sequences", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Derive a password for a domain and user
    Generate {
        /// Domain to derive a password for
        domain: String,

        /// User within the domain
        #[arg(default_value = "")]
        user: String,

        /// Path to the passfile
        #[arg(short, long)]
        file: PathBuf,

        /// Secret key; read from PASSLOOM_KEY when omitted
        #[arg(short, long)]
        key: Option<String>,

        /// Sequence to run instead of the user's configured one
        #[arg(short, long)]
        sequence: Option<String>,
    },

    /// Check a passfile against the structural invariants and the registry
    Validate {
        /// Path to the passfile
        #[arg(short, long)]
        file: PathBuf,
    },

    /// List the sequences a passfile defines ('+' marks the default)
    Sequences {
        /// Path to the passfile
        #[arg(short, long)]
        file: PathBuf,
    },

    /// List the available transformation functions
    Transforms,

    /// Print a passfile back in canonical form
    Dump {
        /// Path to the passfile
        #[arg(short, long)]
        file: PathBuf,

        /// Emit machine-readable JSON instead of the text format
        #[arg(long)]
        json: bool,
    },
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate { domain, user, file, key, sequence } => {
            generate(&domain, &user, &file, key, sequence)
        }
        Commands::Validate { file } => validate(&file),
        Commands::Sequences { file } => list_sequences(&file),
        Commands::Transforms => {
            list_transforms();
            Ok(())
        }
        Commands::Dump { file, json } => dump(&file, json),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn load(file: &PathBuf) -> Result<Passfile, String> {
    load_passfile(file).map_err(|e| format!("failed to load {}: {}", file.display(), e))
}

fn generate(
    domain: &str,
    user: &str,
    file: &PathBuf,
    key: Option<String>,
    sequence: Option<String>,
) -> Result<(), String> {
    let passfile = load(file)?;

    let key = key
        .or_else(|| std::env::var("PASSLOOM_KEY").ok())
        .ok_or("no key given; pass --key or set PASSLOOM_KEY")?;

    let sequence_name = sequence.unwrap_or_else(|| {
        passfile
            .domains
            .get(domain)
            .and_then(|d| d.users.get(user))
            .map(|u| u.sequence.clone())
            .unwrap_or_else(|| "DEFAULT".to_string())
    });
    let sequence = passfile
        .get_sequence(&sequence_name)
        .ok_or_else(|| format!("sequence '{}' not found", sequence_name))?;

    let password = execute_sequence(sequence, &key, domain, user).map_err(|e| e.to_string())?;

    // Legacy sequences carry their own trailing newline.
    if password.ends_with('\n') {
        print!("{}", password);
    } else {
        println!("{}", password);
    }
    Ok(())
}

fn validate(file: &PathBuf) -> Result<(), String> {
    let passfile = load(file)?;
    passfile.validate().map_err(|e| e.to_string())?;
    println!(
        "{}: {} domains, {} sequences, default '{}'",
        file.display(),
        passfile.domains.len(),
        passfile.sequences.len(),
        passfile.default
    );
    Ok(())
}

fn list_sequences(file: &PathBuf) -> Result<(), String> {
    let passfile = load(file)?;
    for sequence in passfile.sequences.values() {
        let marker = if sequence.name == passfile.default { "+" } else { " " };
        println!("{}{} ({} segments)", marker, sequence.name, sequence.segments.len());
    }
    Ok(())
}

fn list_transforms() {
    for (name, transformation) in builtin_registry().iter() {
        println!("{}\n", transformation.describe(name));
    }
}

fn dump(file: &PathBuf, json: bool) -> Result<(), String> {
    let passfile = load(file)?;
    if json {
        let rendered =
            serde_json::to_string_pretty(&passfile).map_err(|e| format!("JSON error: {}", e))?;
        println!("{}", rendered);
    } else {
        print!("{}", passfile_to_string(&passfile));
    }
    Ok(())
}
