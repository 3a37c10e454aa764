use std::process;

use clap::{Parser, ValueEnum};
use thiserror::Error;
use tracing::{error, info, Level};
use vigenere_cracker::{CipherError, Language, Vigenere};

/// Command-line arguments for the Vigenère cipher program.
#[derive(Parser, Debug)]
struct Cli {
    /// Path to the input file containing text to encrypt/decrypt
    #[arg(short, long, help = "Path to the input file")]
    file: String,

    /// Key string for the Vigenère cipher
    #[arg(short, long, help = "Key string for the cipher")]
    key: String,

    /// Path to the output file where result will be saved
    #[arg(short, long, help = "Path to the output file")]
    output: String,

    /// Mode of operation (encrypt or decrypt)
    #[arg(short, long, help = "Mode of operation (encrypt/decrypt)")]
    mode: OperationMode,

    /// Alphabet the text and key are written in
    #[arg(short, long, default_value_t = Language::English, help = "Language alphabet (english/russian)")]
    language: Language,

    /// Log debug output to stderr
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

/// Enum representing the mode of operation for the cipher.
#[derive(Clone, Debug, ValueEnum)]
enum OperationMode {
    /// Encrypt mode
    Encrypt,
    /// Decrypt mode
    Decrypt,
}

/// Errors that stop the program before output is written.
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

/// Main entry point for the Vigenère cipher program.
fn main() {
    // Parse command-line arguments
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
    // Read input file content
    let content: String =
        std::fs::read_to_string(&cli.file).map_err(|source| AppError::Io {
            path: cli.file.clone(),
            source,
        })?;

    let result = transform(&content, &cli.key, cli.language, &cli.mode)?;

    // Write result to output file
    std::fs::write(&cli.output, &result).map_err(|source| AppError::Io {
        path: cli.output.clone(),
        source,
    })?;

    info!(letters = result.chars().count(), "Operation completed successfully! Output saved to: {}", cli.output);
    Ok(())
}

/// Encrypts or decrypts `content` with the Vigenère cipher.
///
/// # Arguments
///
/// * `content` - The input text. Letters outside the language alphabet are dropped.
/// * `key` - The key string.
/// * `language` - Alphabet of text and key.
/// * `mode` - Whether to encrypt or decrypt.
///
/// # Returns
///
/// The uppercase result, or an error if the key has no usable letters.
fn transform(
    content: &str,
    key: &str,
    language: Language,
    mode: &OperationMode,
) -> Result<String, CipherError> {
    let vigenere = Vigenere::new(language.profile());

    // Process based on selected mode
    match mode {
        OperationMode::Encrypt => {
            info!("Encrypting with key: {}", key);
            vigenere.encrypt(content, key)
        }
        OperationMode::Decrypt => {
            info!("Decrypting with key: {}", key);
            vigenere.decrypt(content, key)
        }
    }
}
