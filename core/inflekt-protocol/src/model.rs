use crate::code::TagCode;
use crate::tag::Tag;

#[cfg(feature = "serde")]
use serde::Serialize as SerdeSerialize;

/// One inflected form recorded under a normal form.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeSerialize))]
pub struct FormEntry {
    pub code: TagCode,
    pub form: String,
}

/// Why a resolution ended the way it did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeSerialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Outcome {
    /// A recorded form scored above zero.
    Matched,
    /// Fewer than two tags were requested.
    TooFewTags,
    /// At least one requested tag never appeared in the dictionary.
    UnknownTag,
    /// The word is not a declared normal form.
    UnknownWord,
    /// The word is known but no recorded form shares a requested tag.
    NoOverlap,
}

/// A recorded form together with its overlap score.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeSerialize))]
pub struct Candidate {
    pub form: String,
    pub code: TagCode,
    pub score: usize,
}

/// Full account of one resolution, for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(SerdeSerialize))]
pub struct Resolution {
    pub normal_form: String,
    pub requested: Vec<Tag>,
    pub outcome: Outcome,
    pub candidates: Vec<Candidate>,
    pub chosen: String,
}

impl Resolution {
    /// A resolution that fell back to the word as given.
    pub fn fallback(normal_form: &str, requested: Vec<Tag>, outcome: Outcome) -> Self {
        Self {
            normal_form: normal_form.to_string(),
            requested,
            outcome,
            candidates: Vec::new(),
            chosen: normal_form.to_string(),
        }
    }

    pub fn is_match(&self) -> bool {
        self.outcome == Outcome::Matched
    }
}
