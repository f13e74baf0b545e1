use criterion::{black_box, Criterion};
use vigenere_breaker::analysis::{caesar::find_shift, key_length::estimate_key_length};
use vigenere_breaker::prelude::*;

use crate::assets;

const TEXT_LENGTHS: [usize; 3] = [1_000, 4_000, 16_000];

pub fn bench_find_shift(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_shift");

    for length in TEXT_LENGTHS {
        let ciphertext = encrypt_vigenere(&assets::get_english_letters(length), "q").unwrap();
        group.bench_function(format!("{}", length), |b| {
            b.iter(|| find_shift(black_box(&ciphertext), black_box(&ENGLISH)).unwrap())
        });
    }

    group.finish();
}

pub fn bench_estimate_key_length(c: &mut Criterion) {
    let mut group = c.benchmark_group("estimate_key_length");

    for length in TEXT_LENGTHS {
        let ciphertext =
            encrypt_vigenere(&assets::get_english_letters(length), "uvwxyz").unwrap();
        group.bench_function(format!("{}", length), |b| {
            b.iter(|| {
                estimate_key_length(black_box(&ciphertext), DEFAULT_KEY_LENGTH_UPPER_BOUND)
                    .unwrap()
            })
        });
    }

    group.finish();
}

pub fn bench_crack_vigenere(c: &mut Criterion) {
    let mut group = c.benchmark_group("crack_vigenere");
    let settings = CrackSettings::new();

    for length in TEXT_LENGTHS {
        let ciphertext =
            encrypt_vigenere(&assets::get_english_letters(length), "uvwxyz").unwrap();
        group.bench_function(format!("{}", length), |b| {
            b.iter(|| crack_vigenere(black_box(&ciphertext), black_box(&settings)).unwrap())
        });
    }

    group.finish();
}
