// ============================================================
// Layer 3 — Typed Categories
// ============================================================
// Every categorical form field is a closed set of labels that
// was fixed when the model was trained. Instead of comparing
// raw strings in a chain of if/else branches, each field is a
// Rust enum implementing `Category`:
//
//   - ALL lists every variant once (iteration order = display order)
//   - label() returns the exact training-time string
//   - parse() walks ALL and fails with InvalidCategory otherwise
//
// Labels are matched exactly (case-sensitive) because the
// training data used these exact spellings.
//
// Reference: Rust Book §6 (Enums), §10 (Traits)

use crate::domain::error::ValidationError;

/// A closed, typed set of category labels for one form field.
pub trait Category: Copy + Eq + Send + Sync + std::fmt::Debug + 'static {
    /// The form field this category is read from
    const FIELD: &'static str;

    /// Every variant, in display order
    const ALL: &'static [Self];

    /// The exact label used at training time
    fn label(self) -> &'static str;

    /// Parse a submitted label into a typed value.
    fn parse(value: &str) -> Result<Self, ValidationError> {
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.label() == value)
            .ok_or_else(|| {
                ValidationError::invalid_category(Self::FIELD, value, Self::labels())
            })
    }

    /// All labels, in display order
    fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.label()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    Female,
    Male,
    Other,
}

impl Category for Gender {
    const FIELD: &'static str = "gender";
    const ALL: &'static [Self] = &[Self::Female, Self::Male, Self::Other];

    fn label(self) -> &'static str {
        match self {
            Self::Female => "Female",
            Self::Male   => "Male",
            Self::Other  => "Other",
        }
    }
}

/// Yes/No answers. Used by more than one field, so the field
/// name is supplied by the caller via `parse_field`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YesNo {
    No,
    Yes,
}

impl YesNo {
    /// Parse a yes/no answer, attributing errors to `field`.
    pub fn parse_field(field: &str, value: &str) -> Result<Self, ValidationError> {
        Self::parse(value).map_err(|_| {
            ValidationError::invalid_category(field, value, Self::labels())
        })
    }
}

impl Category for YesNo {
    const FIELD: &'static str = "yes_no";
    const ALL: &'static [Self] = &[Self::No, Self::Yes];

    fn label(self) -> &'static str {
        match self {
            Self::No  => "No",
            Self::Yes => "Yes",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ResidenceType {
    Rural,
    Urban,
}

impl Category for ResidenceType {
    const FIELD: &'static str = "residence_type";
    const ALL: &'static [Self] = &[Self::Rural, Self::Urban];

    fn label(self) -> &'static str {
        match self {
            Self::Rural => "Rural",
            Self::Urban => "Urban",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SmokingStatus {
    FormerlySmoked,
    NeverSmoked,
    Smokes,
    Unknown,
}

impl Category for SmokingStatus {
    const FIELD: &'static str = "smoking_status";
    const ALL: &'static [Self] = &[
        Self::FormerlySmoked,
        Self::NeverSmoked,
        Self::Smokes,
        Self::Unknown,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::FormerlySmoked => "formerly smoked",
            Self::NeverSmoked    => "never smoked",
            Self::Smokes         => "smokes",
            Self::Unknown        => "Unknown",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_label_parses_back() {
        for g in Gender::ALL {
            assert_eq!(Gender::parse(g.label()).unwrap(), *g);
        }
        for s in SmokingStatus::ALL {
            assert_eq!(SmokingStatus::parse(s.label()).unwrap(), *s);
        }
        for r in ResidenceType::ALL {
            assert_eq!(ResidenceType::parse(r.label()).unwrap(), *r);
        }
    }

    #[test]
    fn test_unknown_label_is_invalid_category() {
        let err = SmokingStatus::parse("vapes").unwrap_err();
        match err {
            ValidationError::InvalidCategory { field, value, allowed } => {
                assert_eq!(field, "smoking_status");
                assert_eq!(value, "vapes");
                assert_eq!(allowed.len(), 4);
            }
            other => panic!("expected InvalidCategory, got {other:?}"),
        }
    }

    #[test]
    fn test_labels_are_case_sensitive() {
        assert!(Gender::parse("male").is_err());
        assert!(ResidenceType::parse("URBAN").is_err());
    }

    #[test]
    fn test_yes_no_reports_caller_field() {
        let err = YesNo::parse_field("hypertension", "maybe").unwrap_err();
        assert_eq!(err.field(), "hypertension");
        assert_eq!(YesNo::parse_field("heart_disease", "Yes").unwrap(), YesNo::Yes);
    }
}
