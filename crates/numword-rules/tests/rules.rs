//! Full-pipeline rule tests over hand-built record sequences.

use numword_model::DigitRecord;
use numword_rules::{EnglishRuleSet, Rule, RuleSet, pipeline};

fn records(digits: &[u8]) -> Vec<DigitRecord> {
    digits.iter().map(|&digit| DigitRecord::new(digit)).collect()
}

/// Folds the records into the final string the way the translator does:
/// most significant first, hidden records skipped, trailing separator
/// trimmed.
fn fold(records: &[DigitRecord]) -> String {
    let mut out = String::new();
    for record in records.iter().rev() {
        if record.hidden {
            continue;
        }
        record.render_into(&mut out);
    }
    out.trim_end().to_string()
}

#[test]
fn pipeline_translates_ten_digit_sequence() {
    // 5,806,806,314 least significant digit first.
    let mut recs = records(&[4, 1, 3, 6, 0, 8, 6, 0, 8, 5]);
    pipeline::execute(&EnglishRuleSet, &mut recs);

    assert_eq!(
        fold(&recs),
        "five billion eight hundred six million eight hundred six thousand three hundred fourteen"
    );
}

#[test]
fn pipeline_hides_absorbed_and_zero_records() {
    let mut recs = records(&[4, 1, 3, 6, 0, 8, 6, 0, 8, 5]);
    pipeline::execute(&EnglishRuleSet, &mut recs);

    // Units digit absorbed into "fourteen", intermediate zeros silenced.
    assert!(recs[0].hidden);
    assert!(recs[4].hidden);
    assert!(recs[7].hidden);
    assert_eq!(recs[1].name.as_deref(), Some("fourteen"));
}

#[test]
fn pipeline_ignores_rules_beyond_sequence_length() {
    // A three-digit value runs the same twenty-rule pipeline; rules bound
    // to positions 3-9 must leave the records untouched.
    let mut recs = records(&[4, 1, 3]);
    pipeline::execute(&EnglishRuleSet, &mut recs);

    assert_eq!(fold(&recs), "three hundred fourteen");
}

#[test]
fn rule_list_round_trips_through_json() {
    let rules: Vec<Rule> = EnglishRuleSet.rules().to_vec();
    let json = serde_json::to_string(&rules).expect("serialize rules");
    let round: Vec<Rule> = serde_json::from_str(&json).expect("deserialize rules");
    assert_eq!(round, rules);
}
