use numword_model::{DigitRecord, Lexicon};
use serde::{Deserialize, Serialize};

use crate::executors;

/// The transformation kinds a rule pipeline is built from.
///
/// Each variant corresponds to one executor function. The kind set is
/// fixed: an alternate language supplies a different ordered list of bound
/// rules, not new kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RuleKind {
    /// Default name straight from the lexicon; hides intermediate zeros.
    AssignDigitName,

    /// Irregular names for 11-19, absorbing the units digit.
    CombineTeen,

    /// Contracted tens names ("twenty" through "ninety") with hyphenation.
    ContractTensName,

    /// Magnitude words at hundreds and power-of-three boundaries.
    AssignMagnitudeSuffix,
}

impl RuleKind {
    /// Returns a human-readable name for logs and diagnostics.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::AssignDigitName => "Assign Digit Name",
            Self::CombineTeen => "Combine Teen",
            Self::ContractTensName => "Contract Tens Name",
            Self::AssignMagnitudeSuffix => "Assign Magnitude Suffix",
        }
    }
}

/// A rule kind bound to one decimal position.
///
/// Rules are plain data interpreted by [`Rule::apply`]. A rule whose bound
/// position lies beyond the record sequence is a no-op, so one fixed
/// pipeline serves inputs of every digit count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rule {
    /// The transformation to apply.
    pub kind: RuleKind,

    /// Decimal position this rule is bound to (0 = units).
    pub position: usize,
}

impl Rule {
    /// Binds a rule kind to a position.
    pub fn new(kind: RuleKind, position: usize) -> Self {
        Self { kind, position }
    }

    /// Applies this rule to the record sequence, returning whether it fired.
    pub fn apply(&self, records: &mut [DigitRecord], lexicon: &Lexicon) -> bool {
        match self.kind {
            RuleKind::AssignDigitName => {
                executors::assign_digit_name(records, self.position, lexicon)
            }
            RuleKind::CombineTeen => executors::combine_teen(records, self.position, lexicon),
            RuleKind::ContractTensName => {
                executors::contract_tens_name(records, self.position, lexicon)
            }
            RuleKind::AssignMagnitudeSuffix => {
                executors::assign_magnitude_suffix(records, self.position, lexicon)
            }
        }
    }
}
