//! Field classification: guesses which presentation template suits a field
//! and packages the guess as a confidence-scored suggestion.

pub mod classifier;
pub mod field;
pub mod patterns;
pub mod suggestion;

pub use classifier::{classify, declared_kind, sample_kind, Classification, MatchSource};
pub use field::FieldDescriptor;
pub use suggestion::{classify_fields, suggest, Suggestion, SuggestionTier};
