//! Rule executor functions.
//!
//! Each function implements one [`RuleKind`](crate::RuleKind) against the
//! record sequence. Executors mutate records in place and report whether
//! they fired. Lexicon misses are absorbed here: the affected field stays
//! unset and translation continues.

use numword_model::{DigitRecord, Lexicon, Separator};

/// Assigns the plain lexicon name for the digit at `pos`.
///
/// Zero is a required placeholder that is never pronounced: it receives its
/// name but is hidden, unless it is the sole digit of the whole number.
pub fn assign_digit_name(records: &mut [DigitRecord], pos: usize, lexicon: &Lexicon) -> bool {
    if pos >= records.len() {
        return false;
    }
    let len = records.len();
    let record = &mut records[pos];
    let Some(name) = lexicon.lookup(u32::from(record.digit())) else {
        return false;
    };
    record.name = Some(name.to_string());
    if record.digit() == 0 && len > 1 {
        record.hidden = true;
    }
    true
}

/// Substitutes the irregular 11-19 name when the digit at `pos` is the tens
/// digit of a 1x value.
///
/// The units record below is absorbed into the teen word and hidden whether
/// or not the lookup produced a name; a hidden record is skipped entirely at
/// rendering.
pub fn combine_teen(records: &mut [DigitRecord], pos: usize, lexicon: &Lexicon) -> bool {
    if pos == 0 || pos >= records.len() || records[pos].digit() != 1 {
        return false;
    }
    let key = 10 + u32::from(records[pos - 1].digit());
    if let Some(name) = lexicon.lookup(key) {
        records[pos].name = Some(name.to_string());
    }
    records[pos - 1].hidden = true;
    true
}

/// Overwrites the name at `pos` with the contracted tens form ("twenty"
/// through "ninety") when its digit is 2-9.
///
/// A nonzero units digit below switches the separator to a hyphen, joining
/// pairs such as "thirty-four"; a bare tens word keeps the space.
pub fn contract_tens_name(records: &mut [DigitRecord], pos: usize, lexicon: &Lexicon) -> bool {
    if pos == 0 || pos >= records.len() || records[pos].digit() <= 1 {
        return false;
    }
    let key = u32::from(records[pos].digit()) * 10;
    if let Some(name) = lexicon.lookup(key) {
        records[pos].name = Some(name.to_string());
    }
    if records[pos - 1].digit() > 0 {
        records[pos].separator = Separator::Hyphen;
    }
    true
}

/// Attaches the magnitude word for `pos` when the position sits on a
/// boundary that carries one.
pub fn assign_magnitude_suffix(records: &mut [DigitRecord], pos: usize, lexicon: &Lexicon) -> bool {
    if pos >= records.len() {
        return false;
    }
    let Some(key) = suffix_key(pos) else {
        return false;
    };
    let Some(suffix) = lexicon.lookup(key) else {
        return false;
    };
    records[pos].suffix = Some(suffix.to_string());
    true
}

/// Magnitude lookup key for a decimal position.
///
/// Positions at multiples of three from the thousands up resolve to the
/// full power of ten ("thousand", "million", "billion"); the top of each
/// three-digit group resolves to the hundreds key. Every key produced for
/// positions 0-9 is a named anchor, never one of the placeholder entries.
pub fn suffix_key(pos: usize) -> Option<u32> {
    if pos >= 3 && pos % 3 == 0 {
        Some(10u32.pow(pos as u32))
    } else if pos >= 2 && pos % 3 == 2 {
        Some(100)
    } else {
        None
    }
}
