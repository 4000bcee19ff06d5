//! Turns a classification into a user-facing suggestion with rationale,
//! configuration hint and apply/confirm decision.

use std::fmt;

use cellsense_core::{FieldValue, TemplateConfig, TemplateKind};
use serde::Serialize;

use crate::classifier::{classify, Classification, MatchSource};
use crate::field::FieldDescriptor;

/// How a suggestion should be handled by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionTier {
    AutoApply,
    Confirm,
    Ignore,
}

impl fmt::Display for SuggestionTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SuggestionTier::AutoApply => "auto-apply",
            SuggestionTier::Confirm => "confirm",
            SuggestionTier::Ignore => "ignore",
        };
        f.write_str(s)
    }
}

/// A template suggestion for one field.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Suggestion {
    pub field_name: String,
    pub kind: TemplateKind,
    pub confidence: f64,
    pub rationale: String,
    pub config_hint: String,
    pub auto_apply: bool,
    pub requires_confirmation: bool,
}

impl Suggestion {
    pub fn from_classification(
        field: &FieldDescriptor,
        classification: &Classification,
        config: &TemplateConfig,
    ) -> Self {
        let confidence = classification.confidence;
        let detection = &config.detection;
        let auto_apply = !classification.is_none() && confidence >= detection.auto_apply;
        let requires_confirmation = !classification.is_none()
            && !auto_apply
            && confidence >= detection.confirm;

        Self {
            field_name: field.name.clone(),
            kind: classification.kind,
            confidence,
            rationale: rationale(&field.name, classification),
            config_hint: config_hint(classification.kind, config),
            auto_apply,
            requires_confirmation,
        }
    }

    pub fn tier(&self) -> SuggestionTier {
        if self.auto_apply {
            SuggestionTier::AutoApply
        } else if self.requires_confirmation {
            SuggestionTier::Confirm
        } else {
            SuggestionTier::Ignore
        }
    }
}

/// Classify a field and wrap the result in a [`Suggestion`].
pub fn suggest(
    field: &FieldDescriptor,
    samples: Option<&[FieldValue]>,
    config: &TemplateConfig,
) -> Suggestion {
    let classification = classify(field, samples, config);
    Suggestion::from_classification(field, &classification, config)
}

/// Suggest templates for a batch of fields, highest confidence first.
/// Fields with equal confidence keep their input order.
pub fn classify_fields<'a, I>(fields: I, config: &TemplateConfig) -> Vec<Suggestion>
where
    I: IntoIterator<Item = (&'a FieldDescriptor, Option<&'a [FieldValue]>)>,
{
    let mut suggestions: Vec<Suggestion> = fields
        .into_iter()
        .map(|(field, samples)| suggest(field, samples, config))
        .collect();
    suggestions.sort_by(|a, b| b.confidence.total_cmp(&a.confidence));
    suggestions
}

fn rationale(name: &str, c: &Classification) -> String {
    let evidence = match &c.source {
        MatchSource::ExactName => format!("field name '{}' is a known {} name", name, c.kind),
        MatchSource::NameContains(k) => {
            format!("field name '{}' contains the keyword '{}'", name, k)
        }
        MatchSource::NamePattern => format!("field name '{}' matches a {} pattern", name, c.kind),
        MatchSource::DeclaredType => format!("declared type of '{}' implies {}", name, c.kind),
        MatchSource::SampleData => format!("sample values of '{}' look like {}", name, c.kind),
        MatchSource::NoMatch => return format!("no template fits '{}'", name),
    };

    let what = match c.kind {
        TemplateKind::Badge => "a status badge",
        TemplateKind::Currency => "a currency amount",
        TemplateKind::Stack => "stacked multi-line text",
        TemplateKind::Avatar => "an avatar",
        TemplateKind::Progress => "a progress indicator",
        TemplateKind::Rating => "a rating",
        TemplateKind::None => "plain text",
    };
    format!("Show as {}: {}", what, evidence)
}

fn config_hint(kind: TemplateKind, config: &TemplateConfig) -> String {
    match kind {
        TemplateKind::Badge => format!(
            "badge(default_variant = \"{}\", statuses = {})",
            config.badge.default_variant,
            config.badge.status_variants.len()
        ),
        TemplateKind::Currency => format!(
            "currency(code = \"{}\", compact = {})",
            config.currency.code, config.currency.compact
        ),
        TemplateKind::Stack => format!(
            "stack(max_length = {}, truncate = {})",
            config.stack.max_length, config.stack.truncate
        ),
        TemplateKind::Avatar => "avatar(shape = \"circle\", show_name = true)".to_string(),
        TemplateKind::Progress => "progress(type = \"linear\", max = 100)".to_string(),
        TemplateKind::Rating => "rating(type = \"stars\", max = 5)".to_string(),
        TemplateKind::None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classification(kind: TemplateKind, confidence: f64) -> Classification {
        Classification {
            kind,
            confidence,
            source: MatchSource::ExactName,
        }
    }

    #[test]
    fn tiers_follow_thresholds() {
        let config = TemplateConfig::default();
        let field = FieldDescriptor::new("Status", "string");
        let cases = [
            (0.9, SuggestionTier::AutoApply),
            (0.8, SuggestionTier::AutoApply),
            (0.79, SuggestionTier::Confirm),
            (0.6, SuggestionTier::Confirm),
            (0.59, SuggestionTier::Ignore),
        ];
        for (confidence, tier) in cases {
            let s = Suggestion::from_classification(
                &field,
                &classification(TemplateKind::Badge, confidence),
                &config,
            );
            assert_eq!(s.tier(), tier, "confidence {}", confidence);
            assert!(!(s.auto_apply && s.requires_confirmation));
        }
    }

    #[test]
    fn custom_thresholds_are_respected() {
        let config = TemplateConfig::builder()
            .auto_apply_threshold(0.95)
            .confirm_threshold(0.4)
            .build();
        let field = FieldDescriptor::new("x", "");
        let s = Suggestion::from_classification(
            &field,
            &classification(TemplateKind::Currency, 0.9),
            &config,
        );
        assert_eq!(s.tier(), SuggestionTier::Confirm);
    }

    #[test]
    fn none_is_never_applied() {
        let config = TemplateConfig::builder()
            .auto_apply_threshold(0.0)
            .confirm_threshold(0.0)
            .build();
        let s = Suggestion::from_classification(
            &FieldDescriptor::new("x", ""),
            &Classification::none(),
            &config,
        );
        assert_eq!(s.tier(), SuggestionTier::Ignore);
        assert_eq!(s.config_hint, "");
    }

    #[test]
    fn rationale_and_hint_mention_field_and_config() {
        let config = TemplateConfig::builder().currency_code("eur").build();
        let s = suggest(&FieldDescriptor::new("UnitPrice", "decimal"), None, &config);
        assert_eq!(s.kind, TemplateKind::Currency);
        assert!(s.rationale.contains("UnitPrice"), "{}", s.rationale);
        assert!(s.rationale.contains("'price'"), "{}", s.rationale);
        assert_eq!(s.config_hint, "currency(code = \"EUR\", compact = false)");
    }

    #[test]
    fn batch_is_ranked_stably() {
        let config = TemplateConfig::default();
        let a = FieldDescriptor::new("zz", "");
        let b = FieldDescriptor::new("Amount", "decimal");
        let c = FieldDescriptor::new("Status", "");
        let d = FieldDescriptor::new("Rating", "");
        let ranked = classify_fields([(&a, None), (&b, None), (&c, None), (&d, None)], &config);
        let names: Vec<&str> = ranked.iter().map(|s| s.field_name.as_str()).collect();
        assert_eq!(names, ["Amount", "Status", "Rating", "zz"]);
    }
}
