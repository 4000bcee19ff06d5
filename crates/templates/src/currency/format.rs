//! Culture-aware number and currency formatting.
//!
//! Only the handful of cultures and currencies hosts commonly use are
//! known. Unknown cultures fall back to `en-US`; unknown currencies use
//! their code as symbol.

use tracing::debug;

use cellsense_core::FieldValue;

use SymbolPlacement::{Prefix, Suffix};

/// Where the currency symbol goes relative to the number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolPlacement {
    Prefix,
    /// After the number, separated by a space.
    Suffix,
}

/// Number formatting rules of one culture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Locale {
    pub tag: &'static str,
    pub group: &'static str,
    pub decimal: &'static str,
    pub placement: SymbolPlacement,
}

const fn locale(
    tag: &'static str,
    group: &'static str,
    decimal: &'static str,
    placement: SymbolPlacement,
) -> Locale {
    Locale {
        tag,
        group,
        decimal,
        placement,
    }
}

const LOCALES: &[Locale] = &[
    locale("en-US", ",", ".", Prefix),
    locale("en-GB", ",", ".", Prefix),
    locale("en-CA", ",", ".", Prefix),
    locale("en-AU", ",", ".", Prefix),
    locale("en-IN", ",", ".", Prefix),
    locale("de-DE", ".", ",", Suffix),
    locale("de-CH", "'", ".", Prefix),
    locale("fr-FR", "\u{a0}", ",", Suffix),
    locale("es-ES", ".", ",", Suffix),
    locale("it-IT", ".", ",", Suffix),
    locale("nl-NL", ".", ",", Prefix),
    locale("pt-BR", ".", ",", Prefix),
    locale("sv-SE", "\u{a0}", ",", Suffix),
    locale("ja-JP", ",", ".", Prefix),
    locale("zh-CN", ",", ".", Prefix),
];

/// Currency code → (symbol, home culture).
const CURRENCIES: &[(&str, &str, &str)] = &[
    ("USD", "$", "en-US"),
    ("EUR", "€", "de-DE"),
    ("GBP", "£", "en-GB"),
    ("JPY", "¥", "ja-JP"),
    ("CNY", "¥", "zh-CN"),
    ("CHF", "CHF", "de-CH"),
    ("CAD", "$", "en-CA"),
    ("AUD", "$", "en-AU"),
    ("INR", "₹", "en-IN"),
    ("BRL", "R$", "pt-BR"),
    ("SEK", "kr", "sv-SE"),
];

impl Locale {
    /// Look up a culture by tag (case-insensitive, `_` accepted for `-`).
    pub fn find(tag: &str) -> Option<Locale> {
        let tag = tag.trim().replace('_', "-");
        LOCALES
            .iter()
            .find(|l| l.tag.eq_ignore_ascii_case(&tag))
            .copied()
    }

    pub fn en_us() -> Locale {
        LOCALES[0]
    }

    /// Culture used for `code`: the configured one if known, else the
    /// currency's home culture, else `en-US`.
    pub fn resolve(configured: Option<&str>, code: &str) -> Locale {
        if let Some(tag) = configured {
            match Locale::find(tag) {
                Some(l) => return l,
                None => debug!(culture = tag, "unknown culture, using currency default"),
            }
        }
        currency_entry(code)
            .and_then(|(_, _, home)| Locale::find(home))
            .unwrap_or_else(Locale::en_us)
    }

    /// Format `value` with grouping and `places` decimals, without sign.
    pub fn format_number(&self, value: f64, places: usize) -> String {
        let fixed = format!("{:.*}", places, value.abs());
        let (int, frac) = match fixed.split_once('.') {
            Some((i, f)) => (i, Some(f)),
            None => (fixed.as_str(), None),
        };

        let mut grouped = String::with_capacity(fixed.len() + int.len() / 3);
        for (i, ch) in int.chars().enumerate() {
            if i > 0 && (int.len() - i) % 3 == 0 {
                grouped.push_str(self.group);
            }
            grouped.push(ch);
        }
        if let Some(frac) = frac {
            grouped.push_str(self.decimal);
            grouped.push_str(frac);
        }
        grouped
    }

    /// Parse localized decimal text (`"1.234,50"` in `de-DE`). Group
    /// separators are dropped; nothing else is tolerated.
    pub fn parse_decimal(&self, text: &str) -> Option<f64> {
        let normalized = text
            .trim()
            .replace(self.group, "")
            .replace(self.decimal, ".");
        normalized
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
    }
}

fn currency_entry(code: &str) -> Option<&'static (&'static str, &'static str, &'static str)> {
    CURRENCIES
        .iter()
        .find(|(c, _, _)| c.eq_ignore_ascii_case(code.trim()))
}

/// Display symbol for a currency code; unknown codes are shown as-is.
pub fn currency_symbol(code: &str) -> String {
    currency_entry(code)
        .map(|(_, symbol, _)| symbol.to_string())
        .unwrap_or_else(|| code.trim().to_uppercase())
}

/// Numeric amount of a field value. Text goes through the culture's
/// decimal parser; anything unparseable becomes 0.
pub fn amount_of(value: &FieldValue, locale: &Locale) -> f64 {
    let parsed = match value {
        FieldValue::Integer(i) => Some(*i as f64),
        FieldValue::Float(f) => Some(*f).filter(|f| f.is_finite()),
        FieldValue::Text(s) => locale.parse_decimal(s),
        FieldValue::Null => return 0.0,
        FieldValue::Boolean(_) => None,
    };
    parsed.unwrap_or_else(|| {
        debug!(value = %value, culture = locale.tag, "not a decimal amount, showing 0");
        0.0
    })
}

/// Full amount: `$1,234.50`, `-$5.00`, `1.234,50 €`.
pub fn format_amount(value: f64, places: usize, symbol: &str, locale: &Locale) -> String {
    let number = locale.format_number(value, places);
    let sign = sign_of(value, &number);
    match locale.placement {
        Prefix => format!("{}{}{}", sign, symbol, number),
        Suffix => format!("{}{} {}", sign, number, symbol),
    }
}

/// Compact amount: `$1.5M`, `-€2.3K`. Magnitudes below a thousand keep the
/// regular decimal places.
pub fn format_compact(value: f64, places: usize, symbol: &str, locale: &Locale) -> String {
    let tiers = [(1.0, "", places), (1e3, "K", 1), (1e6, "M", 1), (1e9, "B", 1)];
    let abs = value.abs();
    let mut tier = tiers.iter().rposition(|(scale, _, _)| abs >= *scale).unwrap_or(0);
    // 999_960 would round to 1000.0K; show it as 1.0M instead.
    let (scale, _, p) = tiers[tier];
    if tier + 1 < tiers.len() && round_to(abs / scale, p) >= 1000.0 {
        tier += 1;
    }
    let (scale, suffix, places) = tiers[tier];
    let number = format!("{:.*}", places, abs / scale).replace('.', locale.decimal);
    format!("{}{}{}{}", sign_of(value, &number), symbol, number, suffix)
}

fn round_to(value: f64, places: usize) -> f64 {
    let factor = 10f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Minus sign, unless the amount rounded to zero.
fn sign_of(value: f64, number: &str) -> &'static str {
    if value < 0.0 && number.chars().any(|c| matches!(c, '1'..='9')) {
        "-"
    } else {
        ""
    }
}
