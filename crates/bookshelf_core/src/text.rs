//! String transformations used by transform and merge.
//!
//! # Responsibility
//! - Provide the pure character-level building blocks of the catalog service.
//!
//! # Invariants
//! - Functions never panic, whatever the input.
//! - Shift and XOR operate on UTF-16 code units and decode lossily; an
//!   unpaired surrogate in the result becomes U+FFFD.
//! - `utf16_len` counts UTF-16 code units, matching the shift/XOR width.
//! - All other helpers operate on `char`s and keep valid text valid.

const SEGMENT_DELIMITER: char = '-';
const CAESAR_MODULUS: u32 = 26;

/// Shifts every UTF-16 code unit by `intensity % 26`.
///
/// Wraps at the 16-bit boundary. Non-ASCII input can come out non-printable.
pub fn caesar_shift(value: &str, intensity: u32) -> String {
    // Lossless: the remainder is always < 26.
    let shift = (intensity % CAESAR_MODULUS) as u16;
    let units: Vec<u16> = value
        .encode_utf16()
        .map(|unit| unit.wrapping_add(shift))
        .collect();
    String::from_utf16_lossy(&units)
}

/// Reverses the character sequence.
pub fn reverse(value: &str) -> String {
    value.chars().rev().collect()
}

/// Sorts characters inside each hyphen-delimited segment, keeping segment order.
pub fn sort_segments(value: &str) -> String {
    value
        .split(SEGMENT_DELIMITER)
        .map(|segment| {
            let mut chars: Vec<char> = segment.chars().collect();
            chars.sort_unstable();
            chars.into_iter().collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(&SEGMENT_DELIMITER.to_string())
}

/// Returns the first `count` characters, or the whole string when shorter.
pub fn head(value: &str, count: usize) -> String {
    value.chars().take(count).collect()
}

/// Returns the last `count` characters, or the whole string when shorter.
pub fn tail(value: &str, count: usize) -> String {
    let skip = char_len(value).saturating_sub(count);
    value.chars().skip(skip).collect()
}

/// Alternates characters from `left` and `right`, then appends the longer tail.
pub fn interleave(left: &str, right: &str) -> String {
    let mut result = String::with_capacity(left.len() + right.len());
    let mut left_chars = left.chars();
    let mut right_chars = right.chars();
    loop {
        let next_left = left_chars.next();
        let next_right = right_chars.next();
        if next_left.is_none() && next_right.is_none() {
            break;
        }
        result.extend(next_left);
        result.extend(next_right);
    }
    result
}

/// Position-wise XOR of UTF-16 code units, zero-padding the shorter input.
pub fn xor(left: &str, right: &str) -> String {
    let left_units: Vec<u16> = left.encode_utf16().collect();
    let right_units: Vec<u16> = right.encode_utf16().collect();
    let width = left_units.len().max(right_units.len());
    let units: Vec<u16> = (0..width)
        .map(|index| {
            let a = left_units.get(index).copied().unwrap_or(0);
            let b = right_units.get(index).copied().unwrap_or(0);
            a ^ b
        })
        .collect();
    String::from_utf16_lossy(&units)
}

/// Number of characters in `value`.
pub fn char_len(value: &str) -> usize {
    value.chars().count()
}

/// Number of UTF-16 code units in `value`; characters outside the BMP count twice.
pub fn utf16_len(value: &str) -> usize {
    value.encode_utf16().count()
}
