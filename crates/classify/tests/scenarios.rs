//! End-to-end classification scenarios through the public API.

use cellsense_classify::{classify_fields, suggest, FieldDescriptor, SuggestionTier};
use cellsense_core::{FieldValue, TemplateConfig, TemplateKind};

fn texts(values: &[&str]) -> Vec<FieldValue> {
    values.iter().map(|v| FieldValue::from(*v)).collect()
}

#[test]
fn status_field_with_status_samples_is_auto_applied_badge() {
    let samples = texts(&["Active", "Pending", "Active"]);
    let s = suggest(
        &FieldDescriptor::new("Status", "string"),
        Some(&samples[..]),
        &TemplateConfig::default(),
    );
    assert_eq!(s.kind, TemplateKind::Badge);
    assert_eq!(s.confidence, 0.8);
    assert!(s.auto_apply);
    assert!(!s.requires_confirmation);
    assert_eq!(s.tier(), SuggestionTier::AutoApply);
}

#[test]
fn decimal_amount_without_samples_is_auto_applied_currency() {
    let s = suggest(
        &FieldDescriptor::new("Amount", "decimal"),
        None,
        &TemplateConfig::default(),
    );
    assert_eq!(s.kind, TemplateKind::Currency);
    assert_eq!(s.confidence, 0.9);
    assert!(s.auto_apply);
}

#[test]
fn price_name_wins_over_long_text_samples() {
    let samples = texts(&[
        "call the sales team for a quote on bulk orders",
        "depends on the selected shipping region and tax",
    ]);
    let s = suggest(
        &FieldDescriptor::new("price", "string"),
        Some(&samples[..]),
        &TemplateConfig::default(),
    );
    assert_eq!(s.kind, TemplateKind::Currency);
}

#[test]
fn weak_guesses_need_confirmation_or_are_ignored() {
    let config = TemplateConfig::default();

    // Substring hit with samples: 0.5.
    let samples = texts(&["Ada Lovelace"]);
    let s = suggest(&FieldDescriptor::new("created_by_user", "string"), Some(&samples[..]), &config);
    assert_eq!(s.kind, TemplateKind::Avatar);
    assert_eq!(s.tier(), SuggestionTier::Ignore);

    // Declared type with samples: 0.7.
    let samples = vec![FieldValue::from(12.5)];
    let s = suggest(&FieldDescriptor::new("Net", "Nullable<Decimal>"), Some(&samples[..]), &config);
    assert_eq!(s.kind, TemplateKind::Currency);
    assert_eq!(s.tier(), SuggestionTier::Confirm);
}

#[test]
fn unknown_field_has_zero_confidence() {
    let s = suggest(&FieldDescriptor::new("Id", "int"), None, &TemplateConfig::default());
    assert_eq!(s.kind, TemplateKind::None);
    assert_eq!(s.confidence, 0.0);
    assert_eq!(s.tier(), SuggestionTier::Ignore);
}

#[test]
fn batch_suggestions_are_ranked() {
    let config = TemplateConfig::default();
    let fields = [
        FieldDescriptor::new("Id", "int"),
        FieldDescriptor::new("Progress", "int"),
        FieldDescriptor::new("Amount", "decimal"),
    ];
    let ranked = classify_fields(fields.iter().map(|f| (f, None)), &config);
    let kinds: Vec<TemplateKind> = ranked.iter().map(|s| s.kind).collect();
    assert_eq!(
        kinds,
        [TemplateKind::Currency, TemplateKind::Progress, TemplateKind::None]
    );
}

#[test]
fn suggestions_serialize_for_hosts() {
    let s = suggest(&FieldDescriptor::new("Rating", "int"), None, &TemplateConfig::default());
    let json = serde_json::to_value(&s).unwrap();
    assert_eq!(json["kind"], "rating");
    assert_eq!(json["auto_apply"], false);
    assert_eq!(json["requires_confirmation"], true);
}
