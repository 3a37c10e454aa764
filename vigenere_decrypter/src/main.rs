use std::process;

use clap::Parser;
use thiserror::Error;
use tracing::{error, info, warn, Level};
use vigenere_cracker::{
    normalize, Candidate, CipherError, CrackerConfig, Language, PeriodCheck, Rot, Vigenere,
    DEFAULT_MAX_KEY_LENGTH,
};

/// Command-line arguments for the Vigenère decryptor program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file containing encrypted text
    #[arg(short, long, help = "Path to the input file containing encrypted text")]
    file: String,

    /// Path to the output file where decrypted text will be saved
    #[arg(short, long, help = "Path to the output file for decrypted text")]
    output: Option<String>,

    #[arg(short, long, default_value_t = Language::English, help = "Language alphabet (english/russian)")]
    language: Language,

    /// Key lengths 1..N-1 are tried
    #[arg(short, long, default_value_t = DEFAULT_MAX_KEY_LENGTH)]
    max_key_length: usize,

    /// Rotation applied when reporting the key (0 or 1)
    #[arg(short, long, default_value_t = Rot::Rot0)]
    rot: Rot,

    /// Require the key to match the trailing partial block too
    #[arg(long, default_value_t = false)]
    strict_period: bool,

    /// Number of ranked candidates to log
    #[arg(short, long, default_value_t = 3)]
    top: usize,

    /// Treat the input as plaintext and encrypt it with this key before cracking
    #[arg(short, long)]
    encrypt_with: Option<String>,

    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

#[derive(Error, Debug)]
enum AppError {
    #[error("{path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Cipher(#[from] CipherError),
}

/// Best guess of a cracking run
struct Solution {
    candidate: Candidate,
    key: String,
}

/// Minimum letter count for a meaningful frequency analysis
const MIN_RELIABLE_LETTERS: usize = 50;

/// Width of the plaintext preview in candidate logs
const PREVIEW_WIDTH: usize = 40;

fn main() {
    let cli: Cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .with_writer(std::io::stderr)
        .init();

    if let Err(e) = run(&cli) {
        error!("{e}");
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<(), AppError> {
    let input: String = std::fs::read_to_string(&cli.file).map_err(|source| AppError::Io {
        path: cli.file.clone(),
        source,
    })?;

    let config = CrackerConfig {
        language: cli.language,
        max_key_length: cli.max_key_length,
        rot: cli.rot,
        period_check: if cli.strict_period { PeriodCheck::Strict } else { PeriodCheck::Lenient },
    };
    let vigenere = config.build();

    let ciphertext = match &cli.encrypt_with {
        Some(key) => {
            let encrypted = vigenere.encrypt(&input, key)?;
            info!("Encrypted input: {}", encrypted);
            encrypted
        }
        None => input,
    };

    let letters = normalize(&ciphertext, vigenere.profile()).chars().count();
    if letters < MIN_RELIABLE_LETTERS {
        warn!(letters, "Text may be too short for reliable analysis");
    }

    let Some(solution) = break_cipher(&vigenere, &ciphertext, config.max_key_length, cli.top)? else {
        warn!(
            max_key_length = config.max_key_length,
            "No key lengths to try; max key length must be at least 2"
        );
        return Ok(());
    };

    info!("Found key length: {}", solution.candidate.key_length);

    // Output key to stdout
    println!("{}", solution.key);

    match &cli.output {
        Some(path) => {
            std::fs::write(path, &solution.candidate.plaintext).map_err(|source| AppError::Io {
                path: path.clone(),
                source,
            })?;
            info!("Decrypted text saved to: {}", path);
        }
        None => println!("{}", solution.candidate.plaintext),
    }

    Ok(())
}

/// Cracks `ciphertext` and recovers the key of the best candidate.
///
/// # Arguments
///
/// * `vigenere` - Engine configured with language and key recovery options.
/// * `ciphertext` - The encrypted text.
/// * `max_key_length` - Exclusive upper bound on the key lengths tried.
/// * `top` - How many ranked candidates to log.
///
/// # Returns
///
/// `None` when no key length was tried, otherwise the best candidate and its key.
fn break_cipher(
    vigenere: &Vigenere,
    ciphertext: &str,
    max_key_length: usize,
    top: usize,
) -> Result<Option<Solution>, CipherError> {
    let mut candidates = vigenere.crack(ciphertext, max_key_length);

    for (rank, candidate) in candidates.iter().take(top).enumerate() {
        info!(
            rank = rank + 1,
            key_length = candidate.key_length,
            score = candidate.score,
            key = %candidate.key,
            "{}",
            preview(&candidate.plaintext, PREVIEW_WIDTH)
        );
    }

    if candidates.is_empty() {
        return Ok(None);
    }

    let candidate = candidates.swap_remove(0);
    let key = vigenere.recover_key(&candidate.plaintext, ciphertext)?;
    Ok(Some(Solution { candidate, key }))
}

/// Shortens `text` to at most `width` characters, marking the cut
fn preview(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let head: String = text.chars().take(width).collect();
    format!("{head}...")
}
