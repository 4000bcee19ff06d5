use cellsense_core::{FieldValue, TemplateConfig, Variant};

use super::*;

struct Line {
    total: FieldValue,
    currency: &'static str,
}

fn line(total: impl Into<FieldValue>) -> Line {
    Line {
        total: total.into(),
        currency: "",
    }
}

fn template(config: &TemplateConfig) -> CurrencyTemplate<Line> {
    CurrencyTemplate::new(config, |l: &Line| l.total.clone())
}

#[test]
fn compact_millions() {
    let config = TemplateConfig::builder().compact_currency(true).build();
    let ctx = template(&config).context(&line(1_500_000));
    assert_eq!(ctx.formatted, "$1.5M");
    assert_eq!(ctx.variant, Some(Variant::Success));
}

#[test]
fn full_format_uses_config_defaults() {
    let ctx = template(&TemplateConfig::default()).context(&line(1234.5));
    assert_eq!(ctx.formatted, "$1,234.50");
    assert_eq!(ctx.code, "USD");
}

#[test]
fn sign_decides_color() {
    let t = template(&TemplateConfig::default());
    assert_eq!(t.context(&line(-3)).variant, Some(Variant::Error));
    assert_eq!(t.context(&line(0)).variant, Some(Variant::Muted));
    assert_eq!(t.colorize(false).context(&line(5)).variant, None);
}

#[test]
fn unparseable_text_is_zero_and_muted() {
    let ctx = template(&TemplateConfig::default()).context(&line("call us"));
    assert_eq!(ctx.value, 0.0);
    assert_eq!(ctx.formatted, "$0.00");
    assert_eq!(ctx.variant, Some(Variant::Muted));
}

#[test]
fn text_is_parsed_in_the_active_culture() {
    let t = template(&TemplateConfig::default()).with_default_code("eur");
    let ctx = t.context(&line("1.234,50"));
    assert_eq!(ctx.value, 1234.5);
    assert_eq!(ctx.formatted, "1.234,50 €");
}

#[test]
fn code_accessor_overrides_static_code_when_non_empty() {
    let t = template(&TemplateConfig::default()).with_code(|l: &Line| l.currency.to_string());

    let gbp = Line {
        total: FieldValue::from(10),
        currency: "gbp",
    };
    let ctx = t.context(&gbp);
    assert_eq!(ctx.code, "GBP");
    assert_eq!(ctx.formatted, "£10.00");

    assert_eq!(t.context(&line(10)).code, "USD");
}

#[test]
fn configured_culture_wins_over_currency_home() {
    let config = TemplateConfig::builder()
        .currency_code("EUR")
        .culture("en-US")
        .build();
    let ctx = template(&config).context(&line(2500));
    assert_eq!(ctx.formatted, "€2,500.00");
}

#[test]
fn renders_amount_and_optional_code() {
    let t = template(&TemplateConfig::default()).show_code(true);
    let node = t.render(&line(-12.5));
    let root = node.as_element().unwrap();
    assert!(root.has_class("cs-currency-error"));
    assert_eq!(root.get_attr("data-value"), Some("-12.5"));
    assert_eq!(node.find_by_class("cs-currency-amount")[0].children.len(), 1);
    assert_eq!(node.text_content(), "-$12.50USD");

    let plain = template(&TemplateConfig::default()).render(&line(1));
    assert!(plain.find_by_class("cs-currency-code").is_empty());
}

#[test]
fn currency_field_names_follow_keyword_table() {
    let config = TemplateConfig::default();
    assert!(looks_like_currency_field("UnitPrice", &config));
    assert!(looks_like_currency_field("order_total", &config));
    assert!(!looks_like_currency_field("Status", &config));

    let custom = TemplateConfig::builder()
        .keyword("bounty", cellsense_core::TemplateKind::Currency)
        .build();
    assert!(looks_like_currency_field("BountyPaid", &custom));
}
