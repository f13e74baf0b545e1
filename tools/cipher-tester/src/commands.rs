use crate::{CaesarArgs, CrackArgs, DecryptArgs, EncryptArgs, FlatnessArgs, FrequenciesArgs};
use core::fmt::Display;
use std::error::Error;
use std::path::{Path, PathBuf};
use vigenere_breaker::analysis::flatness::{frequency_variance, mean_substream_variance};
use vigenere_breaker::prelude::*;

type CommandResult = Result<(), Box<dyn Error>>;

/// Keys encrypted with when none are given to the flatness command.
const DEFAULT_FLATNESS_KEYS: [&str; 5] = ["yz", "xyz", "wxyz", "vwxyz", "uvwxyz"];

pub fn crack(args: &CrackArgs) -> CommandResult {
    let ciphertext = read_first_line(&args.input)?;
    let mut settings = CrackSettings::with_reference(load_reference(&args.table)?);
    settings.key_length_upper_bound = args.upper_bound;
    settings.sanitize();

    if settings.key_length_upper_bound != args.upper_bound {
        tracing::warn!(
            requested = args.upper_bound,
            used = settings.key_length_upper_bound,
            "key length upper bound was out of range and has been clamped"
        );
    }

    let cracked = crack_vigenere(&ciphertext, &settings).map_err(fail)?;
    println!("Key length: {}", cracked.key_length);
    println!("Key: {}", cracked.key);

    if args.plaintext {
        println!("Plaintext: {}", cracked.decrypt(&ciphertext).map_err(fail)?);
    }

    Ok(())
}

pub fn caesar(args: &CaesarArgs) -> CommandResult {
    let ciphertext = read_first_line(&args.input)?;
    let reference = load_reference(&args.table)?;

    let shift = crack_caesar_shift(&ciphertext, &reference).map_err(fail)?;
    let key = index_to_char(shift, LetterCase::Lower).map_err(fail)?;
    println!("Shift: {} (key letter '{}')", shift, key);
    println!(
        "Plaintext: {}",
        decrypt_vigenere(&ciphertext, &key.to_string()).map_err(fail)?
    );
    Ok(())
}

pub fn encrypt(args: &EncryptArgs) -> CommandResult {
    let plaintext = read_first_line(&args.input)?;
    println!("{}", encrypt_vigenere(&plaintext, &args.key).map_err(fail)?);
    Ok(())
}

pub fn decrypt(args: &DecryptArgs) -> CommandResult {
    let ciphertext = read_first_line(&args.input)?;
    println!("{}", decrypt_vigenere(&ciphertext, &args.key).map_err(fail)?);
    Ok(())
}

pub fn frequencies(args: &FrequenciesArgs) -> CommandResult {
    let text = read_first_line(&args.input)?;
    print!("{}", format_reference_table(&letter_frequencies(&text).map_err(fail)?));
    Ok(())
}

pub fn flatness(args: &FlatnessArgs) -> CommandResult {
    let plaintext = read_first_line(&args.input)?;
    let keys: Vec<&str> = if args.key.is_empty() {
        DEFAULT_FLATNESS_KEYS.to_vec()
    } else {
        args.key.iter().map(String::as_str).collect()
    };

    println!("Reference variance: {}", ENGLISH.variance());
    println!(
        "Plaintext variance: {}",
        frequency_variance(&plaintext).map_err(fail)?
    );

    let mut last_ciphertext = None;
    for key in &keys {
        let ciphertext = encrypt_vigenere(&plaintext, key).map_err(fail)?;
        println!(
            "Variance for {}: {}",
            key,
            frequency_variance(&ciphertext).map_err(fail)?
        );
        println!(
            "Mean sub-stream variance for {}: {}",
            key,
            mean_substream_variance(&ciphertext, key.len()).map_err(fail)?
        );
        last_ciphertext = Some((key, ciphertext));
    }

    if let Some((key, ciphertext)) = last_ciphertext {
        for length in 2..=args.max_length {
            println!(
                "Mean for {} assuming length {}: {}",
                key,
                length,
                mean_substream_variance(&ciphertext, length).map_err(fail)?
            );
        }
    }

    Ok(())
}

/// Reads the first line of a file, which holds the text to work on.
fn read_first_line(path: &Path) -> Result<String, Box<dyn Error>> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;

    let line = contents.lines().next().unwrap_or_default().trim();
    if line.is_empty() {
        return Err(format!("{} does not contain any text", path.display()).into());
    }

    Ok(line.to_string())
}

fn load_reference(table: &Option<PathBuf>) -> Result<Distribution, Box<dyn Error>> {
    match table {
        Some(path) => load_reference_table(path).map_err(fail),
        None => Ok(ENGLISH),
    }
}

fn fail<E: Display>(error: E) -> Box<dyn Error> {
    error.to_string().into()
}
