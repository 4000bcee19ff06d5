//! Heuristic field classifier.
//!
//! Guesses a [`TemplateKind`] from a field's name, declared type and a few
//! sample values. Rules are tried in a fixed order and the first match wins:
//!
//! 1. exact name match in the keyword table
//! 2. keyword contained in the name, in table declaration order
//! 3. curated regex keyword groups
//! 4. declared type
//! 5. sample values
//!
//! The confidence score starts at 0.5 and is adjusted by how strong the
//! evidence was. Classification never fails; "no idea" is `TemplateKind::None`
//! with confidence 0.

use std::fmt;

use cellsense_core::{FieldValue, TemplateConfig, TemplateKind};
use serde::Serialize;
use tracing::debug;

use crate::field::FieldDescriptor;
use crate::patterns::{
    is_currency_type, is_status_word, pattern_kind, BADGE_MAX_CHARS, CURRENCY_SAMPLE_MAX,
    CURRENCY_SAMPLE_MIN, STACK_MIN_CHARS,
};

#[cfg(test)]
mod tests;

const BASE_CONFIDENCE: f64 = 0.5;
const EXACT_NAME_BONUS: f64 = 0.3;
const TYPE_AGREEMENT_BONUS: f64 = 0.2;
const NO_SAMPLES_PENALTY: f64 = 0.1;

/// Which rule produced a classification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "rule", content = "keyword", rename_all = "snake_case")]
pub enum MatchSource {
    ExactName,
    /// The table keyword found inside the name.
    NameContains(String),
    NamePattern,
    DeclaredType,
    SampleData,
    NoMatch,
}

impl fmt::Display for MatchSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MatchSource::ExactName => f.write_str("exact name"),
            MatchSource::NameContains(k) => write!(f, "name contains '{}'", k),
            MatchSource::NamePattern => f.write_str("name pattern"),
            MatchSource::DeclaredType => f.write_str("declared type"),
            MatchSource::SampleData => f.write_str("sample data"),
            MatchSource::NoMatch => f.write_str("no match"),
        }
    }
}

/// Result of classifying one field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Classification {
    pub kind: TemplateKind,
    /// In `[0, 1]`, rounded to two decimals. Zero exactly when `kind` is None.
    pub confidence: f64,
    pub source: MatchSource,
}

impl Classification {
    pub fn none() -> Self {
        Self {
            kind: TemplateKind::None,
            confidence: 0.0,
            source: MatchSource::NoMatch,
        }
    }

    pub fn is_none(&self) -> bool {
        self.kind.is_none()
    }
}

/// Classify a field.
///
/// `samples` are inspected up to `config.detection.sample_limit`; `None` and
/// an empty slice both count as "no samples supplied".
pub fn classify(
    field: &FieldDescriptor,
    samples: Option<&[FieldValue]>,
    config: &TemplateConfig,
) -> Classification {
    let limit = config.detection.sample_limit;
    let samples: &[FieldValue] = samples.map(|s| &s[..s.len().min(limit)]).unwrap_or(&[]);
    let declared = declared_kind(field);

    let (kind, source) = match match_name(&field.name, config) {
        Some(hit) => hit,
        None => match declared {
            Some(kind) => (kind, MatchSource::DeclaredType),
            None => match sample_kind(samples) {
                Some(kind) => (kind, MatchSource::SampleData),
                None => (TemplateKind::None, MatchSource::NoMatch),
            },
        },
    };

    let classification = if kind.is_none() {
        Classification::none()
    } else {
        let mut confidence = BASE_CONFIDENCE;
        if source == MatchSource::ExactName {
            confidence += EXACT_NAME_BONUS;
        }
        if declared == Some(kind) {
            confidence += TYPE_AGREEMENT_BONUS;
        }
        if samples.is_empty() {
            confidence -= NO_SAMPLES_PENALTY;
        }
        Classification {
            kind,
            confidence: round2(confidence.clamp(0.0, 1.0)),
            source,
        }
    };

    debug!(
        field = %field.name,
        kind = %classification.kind,
        confidence = classification.confidence,
        source = %classification.source,
        samples = samples.len(),
        "field classified"
    );
    classification
}

/// Name-based rules (table exact, table substring, regex groups).
fn match_name(name: &str, config: &TemplateConfig) -> Option<(TemplateKind, MatchSource)> {
    let name = name.trim();
    if name.is_empty() {
        return None;
    }
    if let Some(kind) = config.keywords.exact(name) {
        return Some((kind, MatchSource::ExactName));
    }
    if let Some(hit) = config.keywords.containing(name) {
        return Some((hit.kind, MatchSource::NameContains(hit.keyword.clone())));
    }
    pattern_kind(name).map(|kind| (kind, MatchSource::NamePattern))
}

/// Kind implied by the declared type alone.
pub fn declared_kind(field: &FieldDescriptor) -> Option<TemplateKind> {
    if field.is_enum {
        return Some(TemplateKind::Badge);
    }
    is_currency_type(&field.base_type()).then_some(TemplateKind::Currency)
}

/// Kind suggested by the non-null samples, if any.
pub fn sample_kind(samples: &[FieldValue]) -> Option<TemplateKind> {
    let values: Vec<&FieldValue> = samples.iter().filter(|v| !v.is_null()).collect();
    if values.is_empty() {
        return None;
    }

    let amounts: Option<Vec<f64>> = values.iter().map(|v| v.as_f64()).collect();
    if let Some(amounts) = amounts {
        if amounts
            .iter()
            .all(|a| (CURRENCY_SAMPLE_MIN..=CURRENCY_SAMPLE_MAX).contains(a))
        {
            return Some(TemplateKind::Currency);
        }
    }

    let texts: Option<Vec<&str>> = values.iter().map(|v| v.as_str()).collect();
    let texts = texts?;
    if texts
        .iter()
        .all(|t| is_status_word(t) || t.trim().chars().count() < BADGE_MAX_CHARS)
    {
        return Some(TemplateKind::Badge);
    }
    if texts
        .iter()
        .all(|t| t.trim().chars().count() > STACK_MIN_CHARS)
    {
        return Some(TemplateKind::Stack);
    }
    None
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
