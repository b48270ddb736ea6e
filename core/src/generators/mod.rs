//! Input generators for the sample challenges
//!
//! Every generator draws from the thread-local RNG, so repeated calls with
//! the same size give inputs of the same shape, not the same content.
//!
//! Copyright (c) 2025 Mohammad Atashi <mohammadaliatashi@icloud.com>

pub mod memo;

use rand::seq::SliceRandom;
use rand::{thread_rng, Rng};

use crate::profiling::subject::{generator, Generator};

pub use self::memo::Memoized;

/// A study period as `(start, end)`
pub type Schedule = (u32, u32);

const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz";

/// `quantity` periods starting in `[1, 5]` and lasting up to 3 units, plus a target time
pub fn generate_schedules(quantity: usize) -> (Vec<Schedule>, u32) {
    let mut rng = thread_rng();
    let schedules = (0..quantity)
        .map(|_| {
            let start = rng.gen_range(1..=5);
            (start, start + rng.gen_range(0..=3))
        })
        .collect();
    let target = rng.gen_range(1..=8) + rng.gen_range(0..=3);
    (schedules, target)
}

/// A random lower-case word of `size` letters and a shuffled copy of it
pub fn generate_anagrams(size: usize) -> (String, String) {
    let mut rng = thread_rng();
    let mut letters: Vec<u8> = (0..size)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())])
        .collect();
    let first = String::from_utf8_lossy(&letters).into_owned();
    letters.shuffle(&mut rng);
    let second = String::from_utf8_lossy(&letters).into_owned();
    (first, second)
}

/// A palindrome of exactly `size` lower-case letters
pub fn generate_palindromes(size: usize) -> String {
    let mut rng = thread_rng();
    let half: Vec<u8> = (0..size / 2)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())])
        .collect();

    let mut word = half.clone();
    if size % 2 == 1 {
        word.push(ALPHABET[rng.gen_range(0..ALPHABET.len())]);
    }
    word.extend(half.iter().rev());
    String::from_utf8_lossy(&word).into_owned()
}

/// `max(quantity, 2) - 1` distinct integers in `[1, quantity * 10]` plus one repeat
pub fn generate_integers(quantity: usize) -> Vec<i64> {
    let quantity = quantity.max(2);
    let upper = (quantity * 10) as i64;
    let mut rng = thread_rng();

    let mut values: Vec<i64> = rand::seq::index::sample(&mut rng, upper as usize, quantity - 1)
        .into_iter()
        .map(|index| index as i64 + 1)
        .collect();
    values.shuffle(&mut rng);

    let repeated = values[rng.gen_range(0..values.len())];
    values.push(repeated);
    values
}

/// A random message of `size` letters and a key in `0..=size`
pub fn generate_messages(size: usize) -> (String, usize) {
    let mut rng = thread_rng();
    let message: String = (0..size)
        .map(|_| ALPHABET[rng.gen_range(0..ALPHABET.len())] as char)
        .collect();
    (message, rng.gen_range(0..=size))
}

/// Named generator for [`generate_schedules`]
pub fn schedules() -> Generator<fn(usize) -> (Vec<Schedule>, u32)> {
    generator("generate_schedules", generate_schedules as fn(usize) -> (Vec<Schedule>, u32))
}

/// Named generator for [`generate_anagrams`]
pub fn anagrams() -> Generator<fn(usize) -> (String, String)> {
    generator("generate_anagrams", generate_anagrams as fn(usize) -> (String, String))
}

/// Named generator for [`generate_palindromes`]
pub fn palindromes() -> Generator<fn(usize) -> String> {
    generator("generate_palindromes", generate_palindromes as fn(usize) -> String)
}

/// Named generator for [`generate_messages`]
pub fn messages() -> Generator<fn(usize) -> (String, usize)> {
    generator("generate_messages", generate_messages as fn(usize) -> (String, usize))
}

/// Named generator for [`generate_integers`]
pub fn integers() -> Generator<fn(usize) -> Vec<i64>> {
    generator("generate_integers", generate_integers as fn(usize) -> Vec<i64>)
}
