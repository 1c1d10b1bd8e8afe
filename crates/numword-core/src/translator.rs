//! Integer-to-words translator.

use numword_model::DigitRecord;
use numword_rules::{EnglishRuleSet, RuleSet, pipeline};
use tracing::debug;

/// Translates a non-negative integer quantity into its word form.
///
/// A translator holds the input value and the active rule set (English by
/// default). The instance is reusable: [`with_input`](Self::with_input)
/// reconfigures it between calls, and every [`translate`](Self::translate)
/// call builds its own record sequence, so successive translations never
/// observe each other's state.
///
/// # Example
///
/// ```
/// use numword_core::QuantityTranslator;
///
/// let translator = QuantityTranslator::new().with_input(314);
/// assert_eq!(
///     translator.translate().as_deref(),
///     Some("three hundred fourteen")
/// );
/// ```
pub struct QuantityTranslator {
    input: i32,
    rule_set: Box<dyn RuleSet>,
}

impl QuantityTranslator {
    /// Creates a translator with input 0 and the English rule set.
    pub fn new() -> Self {
        Self {
            input: 0,
            rule_set: Box::new(EnglishRuleSet),
        }
    }

    /// Sets the input value, returning the translator for chaining.
    pub fn with_input(mut self, input: i32) -> Self {
        self.input = input;
        self
    }

    /// Sets the input value in place.
    pub fn set_input(&mut self, input: i32) {
        self.input = input;
    }

    /// The currently configured input value.
    pub fn input(&self) -> i32 {
        self.input
    }

    /// Swaps the active rule set.
    pub fn set_rule_set(&mut self, rule_set: Box<dyn RuleSet>) {
        self.rule_set = rule_set;
    }

    /// Translates the configured input into its word form.
    ///
    /// Returns `None` for negative input; the absence of a result is the
    /// range contract, not an error condition.
    pub fn translate(&self) -> Option<String> {
        if self.input < 0 {
            return None;
        }
        debug!(
            input = self.input,
            language = self.rule_set.language(),
            "translating quantity"
        );
        let mut records = decompose(self.input);
        pipeline::execute(self.rule_set.as_ref(), &mut records);
        Some(render(&records))
    }
}

impl Default for QuantityTranslator {
    fn default() -> Self {
        Self::new()
    }
}

/// Translates `quantity` with the default English rule set.
pub fn translate(quantity: i32) -> Option<String> {
    QuantityTranslator::new().with_input(quantity).translate()
}

/// Decomposes a non-negative value into digit records, least significant
/// digit first. Zero decomposes to a single record.
fn decompose(value: i32) -> Vec<DigitRecord> {
    debug_assert!(value >= 0);
    let mut records = Vec::new();
    let mut rest = value as u32;
    loop {
        records.push(DigitRecord::new((rest % 10) as u8));
        rest /= 10;
        if rest == 0 {
            break;
        }
    }
    records
}

/// Renders the final string, most significant record first, skipping hidden
/// records and trimming the single trailing separator.
fn render(records: &[DigitRecord]) -> String {
    let mut out = String::new();
    for record in records.iter().rev() {
        if record.hidden {
            continue;
        }
        record.render_into(&mut out);
    }
    if out.ends_with(' ') {
        out.pop();
    }
    out
}
