mod commands;

use argh::FromArgs;
use commands::*;
use std::path::PathBuf;
use tracing::Level;
use vigenere_breaker::prelude::*;

/// Breaks Caesar and Vigenère ciphers using letter frequency analysis
#[derive(FromArgs, Debug)]
pub struct Args {
    /// log every key length candidate and sub-stream shift
    #[argh(switch, short = 'v')]
    verbose: bool,

    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs, Debug)]
#[argh(subcommand)]
pub enum Command {
    Crack(CrackArgs),
    Caesar(CaesarArgs),
    Encrypt(EncryptArgs),
    Decrypt(DecryptArgs),
    Frequencies(FrequenciesArgs),
    Flatness(FlatnessArgs),
}

/// recover the key of a Vigenère ciphertext
#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "crack")]
pub struct CrackArgs {
    /// file whose first line is the ciphertext
    #[argh(option, short = 'i')]
    input: PathBuf,

    /// reference frequency table (default: built in English)
    #[argh(option, short = 't')]
    table: Option<PathBuf>,

    /// exclusive upper bound of the key lengths tried (default: 10)
    #[argh(option, short = 'u', default = "DEFAULT_KEY_LENGTH_UPPER_BOUND")]
    upper_bound: usize,

    /// also print the decrypted plaintext
    #[argh(switch, short = 'p')]
    plaintext: bool,
}

/// recover the shift of a Caesar ciphertext
#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "caesar")]
pub struct CaesarArgs {
    /// file whose first line is the ciphertext
    #[argh(option, short = 'i')]
    input: PathBuf,

    /// reference frequency table (default: built in English)
    #[argh(option, short = 't')]
    table: Option<PathBuf>,
}

/// encrypt a plaintext with a Vigenère key
#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "encrypt")]
pub struct EncryptArgs {
    /// file whose first line is the plaintext
    #[argh(option, short = 'i')]
    input: PathBuf,

    /// the key, letters only
    #[argh(option, short = 'k')]
    key: String,
}

/// decrypt a ciphertext with a Vigenère key
#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "decrypt")]
pub struct DecryptArgs {
    /// file whose first line is the ciphertext
    #[argh(option, short = 'i')]
    input: PathBuf,

    /// the key, letters only
    #[argh(option, short = 'k')]
    key: String,
}

/// print the letter frequencies of a text as a reference table
#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "frequencies")]
pub struct FrequenciesArgs {
    /// file whose first line is the text
    #[argh(option, short = 'i')]
    input: PathBuf,
}

/// show how encrypting with longer keys flattens letter frequencies
#[derive(FromArgs, Debug)]
#[argh(subcommand, name = "flatness")]
pub struct FlatnessArgs {
    /// file whose first line is the plaintext
    #[argh(option, short = 'i')]
    input: PathBuf,

    /// keys to encrypt with; may be repeated (default: yz xyz wxyz vwxyz uvwxyz)
    #[argh(option, short = 'k')]
    key: Vec<String>,

    /// largest key length assumed when splitting the last key's ciphertext (default: 5)
    #[argh(option, short = 'm', default = "5")]
    max_length: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args: Args = argh::from_env();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose {
            Level::DEBUG
        } else {
            Level::WARN
        })
        .with_writer(std::io::stderr)
        .init();

    match args.command {
        Command::Crack(args) => crack(&args),
        Command::Caesar(args) => caesar(&args),
        Command::Encrypt(args) => encrypt(&args),
        Command::Decrypt(args) => decrypt(&args),
        Command::Frequencies(args) => frequencies(&args),
        Command::Flatness(args) => flatness(&args),
    }
}
