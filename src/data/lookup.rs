// ============================================================
// Layer 4 — Hardcoded Lookup Tables
// ============================================================
// Some encodings were never saved as artifacts; the training
// notebook wrote them out by hand. They live here as one
// declarative table per field instead of an if/else chain, so
// an unmapped label cannot silently drop a slot from the
// feature vector.
//
// A table maps each typed category to one or more codes:
//
//   GENDER_CODES      Female → [0]  Male → [1]  Other → [2]
//   YES_NO_CODES      No     → [0]  Yes  → [1]
//   RESIDENCE_CODES   Rural  → [1, 0]  Urban → [0, 1]   (one-hot)
//
// Reference: Rust Book §8 (Collections), §13 (Iterators)

use crate::domain::category::{Category, Gender, ResidenceType, YesNo};
use crate::domain::error::PredictError;

/// A static label → codes table for one categorical field.
#[derive(Debug, Clone, Copy)]
pub struct LookupTable<C: Category> {
    entries: &'static [(C, &'static [f64])],
}

impl<C: Category> LookupTable<C> {
    pub const fn new(entries: &'static [(C, &'static [f64])]) -> Self {
        Self { entries }
    }

    /// Codes for one typed value. Every variant is covered (see tests),
    /// so a miss here is a programming error, not bad user input.
    pub fn encode(&self, value: C) -> Result<&'static [f64], PredictError> {
        self.entries
            .iter()
            .find(|(c, _)| *c == value)
            .map(|(_, codes)| *codes)
            .ok_or_else(|| {
                PredictError::unexpected(format!(
                    "no {} code for '{}'",
                    C::FIELD,
                    value.label()
                ))
            })
    }

    /// Width of every entry (1 for ordinal codes, N for one-hot)
    pub fn width(&self) -> usize {
        self.entries.first().map_or(0, |(_, codes)| codes.len())
    }

    pub fn entries(&self) -> &'static [(C, &'static [f64])] {
        self.entries
    }
}

pub const GENDER_CODES: LookupTable<Gender> = LookupTable::new(&[
    (Gender::Female, &[0.0]),
    (Gender::Male,   &[1.0]),
    (Gender::Other,  &[2.0]),
]);

pub const YES_NO_CODES: LookupTable<YesNo> = LookupTable::new(&[
    (YesNo::No,  &[0.0]),
    (YesNo::Yes, &[1.0]),
]);

pub const RESIDENCE_CODES: LookupTable<ResidenceType> = LookupTable::new(&[
    (ResidenceType::Rural, &[1.0, 0.0]),
    (ResidenceType::Urban, &[0.0, 1.0]),
]);
