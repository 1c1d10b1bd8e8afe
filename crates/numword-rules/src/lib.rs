//! Position-bound translation rules and the English rule set.
//!
//! This crate provides the rule machinery of the translation pipeline:
//!
//! - **rule**: [`RuleKind`] and the position-bound [`Rule`] data it travels in
//! - **executors**: the transformation functions rules dispatch to
//! - **ruleset**: the [`RuleSet`] capability a language pack implements
//! - **english**: the English lexicon and fixed pipeline
//! - **pipeline**: the language-agnostic pipeline executor

pub mod english;
pub mod executors;
pub mod pipeline;
pub mod rule;
pub mod ruleset;

pub use english::EnglishRuleSet;
pub use rule::{Rule, RuleKind};
pub use ruleset::RuleSet;
