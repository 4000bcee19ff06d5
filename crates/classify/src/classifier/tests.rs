//! Tests for the field classifier.

use cellsense_core::{FieldValue, KeywordTable, TemplateConfig, TemplateKind};

use super::*;

fn text(values: &[&str]) -> Vec<FieldValue> {
    values.iter().map(|v| FieldValue::from(*v)).collect()
}

fn run(name: &str, type_name: &str, samples: Option<&[FieldValue]>) -> Classification {
    classify(
        &FieldDescriptor::new(name, type_name),
        samples,
        &TemplateConfig::default(),
    )
}

// ── Name rules ──────────────────────────────────────────────

#[test]
fn exact_name_adds_bonus() {
    let samples = text(&["Active", "Pending", "Active"]);
    let c = run("Status", "string", Some(&samples[..]));
    assert_eq!(c.kind, TemplateKind::Badge);
    assert_eq!(c.source, MatchSource::ExactName);
    assert_eq!(c.confidence, 0.8);
}

#[test]
fn exact_name_with_agreeing_type_and_no_samples() {
    let c = run("Amount", "decimal", None);
    assert_eq!(c.kind, TemplateKind::Currency);
    assert_eq!(c.confidence, 0.9);
}

#[test]
fn substring_match_uses_declaration_order() {
    // "amount" is declared before "total" in the default table.
    let c = run("total_amount", "", None);
    assert_eq!(c.kind, TemplateKind::Currency);
    assert_eq!(c.source, MatchSource::NameContains("amount".into()));

    // "status" (badge) is declared before "user" (avatar).
    let c = run("user_status", "", None);
    assert_eq!(c.kind, TemplateKind::Badge);
    assert_eq!(c.confidence, 0.4);
}

#[test]
fn substring_order_follows_custom_table() {
    let table: KeywordTable = [
        ("total".to_string(), TemplateKind::Progress),
        ("amount".to_string(), TemplateKind::Currency),
    ]
    .into_iter()
    .collect();
    let config = TemplateConfig::builder().keywords(table).build();
    let c = classify(&FieldDescriptor::new("total_amount", ""), None, &config);
    assert_eq!(c.kind, TemplateKind::Progress);
    assert_eq!(c.source, MatchSource::NameContains("total".into()));
}

#[test]
fn regex_groups_follow_name_table() {
    let samples = text(&["x"]);
    let c = run("tax_due", "string", Some(&samples[..]));
    assert_eq!(c.kind, TemplateKind::Currency);
    assert_eq!(c.source, MatchSource::NamePattern);
    assert_eq!(c.confidence, 0.5);
}

#[test]
fn name_beats_contradicting_samples() {
    let long = "a very long street description that clearly exceeds thirty chars";
    let samples = text(&[long, long]);
    let c = run("price", "string", Some(&samples[..]));
    assert_eq!(c.kind, TemplateKind::Currency);
    assert_eq!(c.confidence, 0.8);
}

// ── Declared type ───────────────────────────────────────────

#[test]
fn nullable_decimal_means_currency() {
    let c = run("Net", "decimal?", None);
    assert_eq!(c.kind, TemplateKind::Currency);
    assert_eq!(c.source, MatchSource::DeclaredType);
    // base 0.5 + type 0.2 - no samples 0.1
    assert_eq!(c.confidence, 0.6);
}

#[test]
fn enum_type_means_badge() {
    let field = FieldDescriptor::enumeration("Shipping", "ShippingMode");
    let samples = text(&["Air"]);
    let c = classify(&field, Some(&samples[..]), &TemplateConfig::default());
    assert_eq!(c.kind, TemplateKind::Badge);
    assert_eq!(c.confidence, 0.7);
}

#[test]
fn type_bonus_only_when_kinds_agree() {
    // Name says badge, type says currency: no bonus.
    let c = run("Status", "decimal", None);
    assert_eq!(c.kind, TemplateKind::Badge);
    assert_eq!(c.confidence, 0.7);
}

// ── Samples ─────────────────────────────────────────────────

#[test]
fn numeric_samples_in_range_mean_currency() {
    let samples = vec![
        FieldValue::from(19.99),
        FieldValue::from(250),
        FieldValue::from("1200.50"),
        FieldValue::Null,
    ];
    let c = run("xq", "", Some(&samples[..]));
    assert_eq!(c.kind, TemplateKind::Currency);
    assert_eq!(c.source, MatchSource::SampleData);
    assert_eq!(c.confidence, 0.5);
}

#[test]
fn numeric_samples_out_of_range_are_not_currency() {
    let samples = vec![FieldValue::from(0), FieldValue::from(50_000_000)];
    assert_eq!(run("xq", "", Some(&samples[..])).kind, TemplateKind::None);
}

#[test]
fn short_text_samples_mean_badge() {
    let samples = text(&["North", "South", "in progress"]);
    assert_eq!(run("xq", "", Some(&samples[..])).kind, TemplateKind::Badge);
}

#[test]
fn long_text_samples_mean_stack() {
    let samples = text(&[
        "Ships within two business days from the warehouse",
        "Back-ordered until the next delivery from supplier",
    ]);
    assert_eq!(run("xq", "", Some(&samples[..])).kind, TemplateKind::Stack);
}

#[test]
fn mixed_length_text_matches_nothing() {
    let samples = text(&[
        "Ships within two business days from the warehouse",
        "twenty-five characters..",
    ]);
    assert_eq!(run("xq", "", Some(&samples[..])).kind, TemplateKind::None);
}

#[test]
fn only_null_samples_count_as_supplied_but_uninformative() {
    let samples = vec![FieldValue::Null, FieldValue::Null];
    let c = run("xq", "", Some(&samples[..]));
    assert!(c.is_none());

    // Declared type still applies, and no penalty since samples were given.
    let c = run("Net", "double", Some(&samples[..]));
    assert_eq!(c.confidence, 0.7);
}

#[test]
fn sample_limit_truncates_inspection() {
    let mut samples = text(&["North", "South"]);
    samples.push(FieldValue::from("a sentence that is definitely far too long for a badge"));

    let config = TemplateConfig::builder().sample_limit(2).build();
    let c = classify(&FieldDescriptor::new("xq", ""), Some(&samples[..]), &config);
    assert_eq!(c.kind, TemplateKind::Badge);

    let c = classify(&FieldDescriptor::new("xq", ""), Some(&samples[..]), &TemplateConfig::default());
    assert_eq!(c.kind, TemplateKind::None);
}

#[test]
fn zero_sample_limit_means_no_samples() {
    let samples = text(&["North"]);
    let config = TemplateConfig::builder().sample_limit(0).build();
    let c = classify(&FieldDescriptor::new("Net", "decimal"), Some(&samples[..]), &config);
    assert_eq!(c.confidence, 0.6);
}

// ── Invariants ──────────────────────────────────────────────

#[test]
fn confidence_stays_in_unit_range_and_none_is_zero() {
    let long = text(&["a sentence that is definitely far too long for a badge"]);
    let short = text(&["ok"]);
    let nums = vec![FieldValue::from(3.5)];
    let sample_sets: [Option<&[FieldValue]>; 4] =
        [None, Some(&long[..]), Some(&short[..]), Some(&nums[..])];
    let fields = [
        FieldDescriptor::new("Amount", "decimal"),
        FieldDescriptor::new("Status", "string"),
        FieldDescriptor::enumeration("priority", "Level"),
        FieldDescriptor::new("order_total", "float?"),
        FieldDescriptor::new("profile_photo", ""),
        FieldDescriptor::new("", ""),
        FieldDescriptor::new("zz", "int"),
    ];

    for field in &fields {
        for samples in sample_sets {
            let c = classify(field, samples, &TemplateConfig::default());
            assert!(
                (0.0..=1.0).contains(&c.confidence),
                "{}: {}",
                field.name,
                c.confidence
            );
            assert_eq!(c.kind.is_none(), c.confidence == 0.0, "{}", field.name);
        }
    }
}

#[test]
fn empty_name_is_none_without_other_evidence() {
    let c = run("", "", None);
    assert_eq!(c, Classification::none());
}
