use numword_model::Lexicon;

use crate::rule::Rule;

/// An ordered, position-bound rule list for one target language, together
/// with the lexicon those rules read.
///
/// Implementations supply a different fixed list of the same rule kinds;
/// the pipeline executor itself is language-agnostic. A rule set is swapped
/// into a translator whole, so one implementation carries everything a
/// translation needs.
pub trait RuleSet: Send + Sync {
    /// Identifying language tag (e.g. "en").
    fn language(&self) -> &'static str;

    /// The ordered rule pipeline, least-significant positions first.
    fn rules(&self) -> &[Rule];

    /// The name table the rules consult.
    fn lexicon(&self) -> &Lexicon;
}
