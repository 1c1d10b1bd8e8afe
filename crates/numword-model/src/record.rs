use serde::{Deserialize, Serialize};

/// Joining symbol appended after a record's rendered text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum Separator {
    /// Single space, the default between words.
    #[default]
    Space,
    /// Hyphen joining a contracted tens name to a nonzero units name.
    Hyphen,
}

impl Separator {
    /// Returns the literal text inserted after the record.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Space => " ",
            Self::Hyphen => "-",
        }
    }
}

/// Per-position working state for one decimal digit.
///
/// A record is created during decomposition with its digit fixed, then
/// mutated by pipeline rules that fill in the display name, magnitude
/// suffix, separator, and hide flag. A later rule may overwrite what an
/// earlier one wrote; pipeline order encodes rule priority.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DigitRecord {
    digit: u8,

    /// Word(s) rendered for this position, set by the pipeline.
    pub name: Option<String>,

    /// Magnitude word ("hundred", "thousand", ...) attached after `name`.
    pub suffix: Option<String>,

    /// Symbol inserted after this record's rendered text.
    pub separator: Separator,

    /// A hidden record contributes nothing to the final output.
    pub hidden: bool,
}

impl DigitRecord {
    /// Creates a record for a single decimal digit (0-9).
    pub fn new(digit: u8) -> Self {
        debug_assert!(digit <= 9, "digit out of range: {digit}");
        Self {
            digit,
            name: None,
            suffix: None,
            separator: Separator::default(),
            hidden: false,
        }
    }

    /// The original digit value. Fixed at creation.
    pub fn digit(&self) -> u8 {
        self.digit
    }

    /// Appends this record's rendered text to `out`.
    ///
    /// A non-hidden record must have been given a name by the pipeline
    /// before it reaches rendering; arriving here without one is a defect,
    /// not a recoverable condition.
    pub fn render_into(&self, out: &mut String) {
        let Some(name) = self.name.as_deref() else {
            debug_assert!(
                false,
                "record for digit {} rendered without a name",
                self.digit
            );
            return;
        };
        out.push_str(name);
        if let Some(suffix) = self.suffix.as_deref() {
            out.push(' ');
            out.push_str(suffix);
        }
        out.push_str(self.separator.as_str());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_record_has_defaults() {
        let record = DigitRecord::new(7);
        assert_eq!(record.digit(), 7);
        assert_eq!(record.name, None);
        assert_eq!(record.suffix, None);
        assert_eq!(record.separator, Separator::Space);
        assert!(!record.hidden);
    }

    #[test]
    fn renders_name_and_separator() {
        let mut record = DigitRecord::new(3);
        record.name = Some("three".to_string());

        let mut out = String::new();
        record.render_into(&mut out);
        assert_eq!(out, "three ");
    }

    #[test]
    fn renders_suffix_between_name_and_separator() {
        let mut record = DigitRecord::new(3);
        record.name = Some("three".to_string());
        record.suffix = Some("hundred".to_string());

        let mut out = String::new();
        record.render_into(&mut out);
        assert_eq!(out, "three hundred ");
    }

    #[test]
    fn renders_hyphen_separator() {
        let mut record = DigitRecord::new(4);
        record.name = Some("forty".to_string());
        record.separator = Separator::Hyphen;

        let mut out = String::new();
        record.render_into(&mut out);
        assert_eq!(out, "forty-");
    }

    #[test]
    #[should_panic(expected = "rendered without a name")]
    fn rendering_without_a_name_is_a_defect() {
        let record = DigitRecord::new(5);
        let mut out = String::new();
        record.render_into(&mut out);
    }
}
