//! The English rule set: lexicon data and the fixed rule pipeline.
//!
//! Both the lexicon and the rule list are process-wide statics initialized
//! on first use and read-only afterwards.

use std::sync::{LazyLock, OnceLock};

use numword_model::Lexicon;

use crate::rule::{Rule, RuleKind};
use crate::ruleset::RuleSet;

/// Names for the plain digits 0-9.
const UNITS: [&str; 10] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine",
];

/// Irregular names for 10-19.
const TEENS: [&str; 10] = [
    "ten",
    "eleven",
    "twelve",
    "thirteen",
    "fourteen",
    "fifteen",
    "sixteen",
    "seventeen",
    "eighteen",
    "nineteen",
];

/// Contracted names for the multiples of ten.
const TENS: [&str; 9] = [
    "ten", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

/// English lexicon: units, teens, tens, the magnitude anchors, and the
/// placeholder entries for the powers of ten no rule ever looks up.
static LEXICON: LazyLock<Lexicon> = LazyLock::new(|| {
    let mut builder = Lexicon::builder();
    for (digit, name) in UNITS.iter().enumerate() {
        builder = builder.name(digit as u32, *name);
    }
    for (offset, name) in TEENS.iter().enumerate() {
        builder = builder.name(10 + offset as u32, *name);
    }
    for (index, name) in TENS.iter().enumerate() {
        builder = builder.name((index as u32 + 1) * 10, *name);
    }
    builder
        .name(100, "hundred")
        .name(1_000, "thousand")
        .placeholder(10_000)
        .placeholder(100_000)
        .name(1_000_000, "million")
        .placeholder(10_000_000)
        .placeholder(100_000_000)
        .name(1_000_000_000, "billion")
        .build()
        .expect("English lexicon covers the canonical key set")
});

/// Cached English rule list.
static RULES: OnceLock<Vec<Rule>> = OnceLock::new();

/// Returns the process-wide English lexicon.
pub fn english_lexicon() -> &'static Lexicon {
    &LEXICON
}

/// Returns the fixed English rule pipeline, built on first access.
pub fn english_rules() -> &'static [Rule] {
    RULES.get_or_init(build_english_rules)
}

/// Builds the fixed English pipeline: the same sub-pattern repeats per
/// three-digit group, ascending from the least significant position.
fn build_english_rules() -> Vec<Rule> {
    use RuleKind::{AssignDigitName, AssignMagnitudeSuffix, CombineTeen, ContractTensName};

    vec![
        // 0 to 999
        Rule::new(AssignDigitName, 0),
        Rule::new(AssignDigitName, 1),
        Rule::new(CombineTeen, 1),
        Rule::new(ContractTensName, 1),
        Rule::new(AssignDigitName, 2),
        Rule::new(AssignMagnitudeSuffix, 2),
        // 1000 to 999999
        Rule::new(AssignDigitName, 3),
        Rule::new(AssignMagnitudeSuffix, 3),
        Rule::new(AssignDigitName, 4),
        Rule::new(ContractTensName, 4),
        Rule::new(AssignDigitName, 5),
        Rule::new(AssignMagnitudeSuffix, 5),
        // 1000000 to 999999999
        Rule::new(AssignDigitName, 6),
        Rule::new(AssignMagnitudeSuffix, 6),
        Rule::new(AssignDigitName, 7),
        Rule::new(ContractTensName, 7),
        Rule::new(AssignDigitName, 8),
        Rule::new(AssignMagnitudeSuffix, 8),
        // billions
        Rule::new(AssignDigitName, 9),
        Rule::new(AssignMagnitudeSuffix, 9),
    ]
}

/// Rule set for English number names.
#[derive(Debug, Clone, Copy, Default)]
pub struct EnglishRuleSet;

impl RuleSet for EnglishRuleSet {
    fn language(&self) -> &'static str {
        "en"
    }

    fn rules(&self) -> &[Rule] {
        english_rules()
    }

    fn lexicon(&self) -> &Lexicon {
        english_lexicon()
    }
}
