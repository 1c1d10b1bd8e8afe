//! Language-agnostic pipeline execution.

use numword_model::DigitRecord;
use tracing::trace;

use crate::ruleset::RuleSet;

/// Runs every rule of `rule_set` against the record sequence, in order.
///
/// Rules mutate the records in place; the sequence length is fixed at
/// decomposition time and never changes during execution.
pub fn execute(rule_set: &dyn RuleSet, records: &mut [DigitRecord]) {
    for rule in rule_set.rules() {
        let fired = rule.apply(records, rule_set.lexicon());
        trace!(
            kind = rule.kind.display_name(),
            position = rule.position,
            fired,
            "applied rule"
        );
    }
}
