//! Quantity-to-words translation.
//!
//! Converts a non-negative integer into its English word form by pushing
//! per-digit records through an ordered rule pipeline. [`QuantityTranslator`]
//! is the entry point; alternate languages plug in through
//! [`numword_rules::RuleSet`].

pub mod translator;

pub use translator::{QuantityTranslator, translate};
