//! Data model for quantity-to-words translation.
//!
//! This crate holds the leaf types shared by the rule and translator crates:
//!
//! - **record**: [`DigitRecord`], the per-position working state mutated by
//!   pipeline rules, and its rendering contract
//! - **lexicon**: [`Lexicon`], the immutable key-to-name table, with a
//!   validating builder for custom language packs
//! - **error**: lexicon construction errors

pub mod error;
pub mod lexicon;
pub mod record;

pub use error::{LexiconError, Result};
pub use lexicon::{CANONICAL_KEYS, Lexicon, LexiconBuilder};
pub use record::{DigitRecord, Separator};
