//! Currency amounts, formatted per culture and colored by sign.

pub mod format;
mod render;

#[cfg(test)]
mod tests;

use cellsense_core::{FieldValue, Node, TemplateConfig, TemplateKind, Variant};
use serde::Serialize;

use crate::accessor::{accessor, non_empty, Accessor};
use crate::id::TemplateId;

use self::format::{amount_of, currency_symbol, format_amount, format_compact, Locale};

pub use render::render_currency;

pub struct CurrencyTemplate<T> {
    id: TemplateId,
    value: Accessor<T, FieldValue>,
    code: Option<Accessor<T, String>>,
    default_code: String,
    culture: Option<String>,
    decimal_places: u8,
    compact: bool,
    show_code: bool,
    colorize: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrencyContext {
    /// Parsed amount; 0 when the value was not a number.
    pub value: f64,
    pub code: String,
    pub formatted: String,
    /// Sign color, `None` when coloring is disabled.
    pub variant: Option<Variant>,
    pub show_code: bool,
}

impl<T> CurrencyTemplate<T> {
    /// Amount from `value(item)`, formatted with the currency defaults of
    /// `config`.
    pub fn new<F>(config: &TemplateConfig, value: F) -> Self
    where
        F: Fn(&T) -> FieldValue + Send + Sync + 'static,
    {
        let defaults = &config.currency;
        Self {
            id: TemplateId::new(),
            value: accessor(value),
            code: None,
            default_code: defaults.code.clone(),
            culture: defaults.culture.clone(),
            decimal_places: defaults.decimal_places,
            compact: defaults.compact,
            show_code: defaults.show_code,
            colorize: defaults.colorize,
        }
    }

    /// Per-item ISO code. Empty results fall back to the static code.
    pub fn with_code<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.code = Some(accessor(f));
        self
    }

    pub fn with_default_code(mut self, code: &str) -> Self {
        if !code.trim().is_empty() {
            self.default_code = code.trim().to_uppercase();
        }
        self
    }

    pub fn with_culture(mut self, culture: &str) -> Self {
        self.culture = Some(culture.to_string());
        self
    }

    pub fn with_decimal_places(mut self, places: u8) -> Self {
        self.decimal_places = places;
        self
    }

    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    pub fn show_code(mut self, show: bool) -> Self {
        self.show_code = show;
        self
    }

    pub fn colorize(mut self, colorize: bool) -> Self {
        self.colorize = colorize;
        self
    }

    pub fn id(&self) -> TemplateId {
        self.id
    }

    pub fn context(&self, item: &T) -> CurrencyContext {
        let code = non_empty(&self.code, item)
            .map(|c| c.trim().to_uppercase())
            .unwrap_or_else(|| self.default_code.clone());
        let locale = Locale::resolve(self.culture.as_deref(), &code);
        let value = amount_of(&(self.value)(item), &locale);

        let symbol = currency_symbol(&code);
        let places = usize::from(self.decimal_places);
        let formatted = if self.compact {
            format_compact(value, places, &symbol, &locale)
        } else {
            format_amount(value, places, &symbol, &locale)
        };

        CurrencyContext {
            value,
            formatted,
            variant: self.colorize.then(|| sign_variant(value)),
            show_code: self.show_code,
            code,
        }
    }

    pub fn render(&self, item: &T) -> Node {
        render_currency(&self.context(item))
    }
}

/// Success above zero, error below, muted at zero.
pub fn sign_variant(value: f64) -> Variant {
    if value > 0.0 {
        Variant::Success
    } else if value < 0.0 {
        Variant::Error
    } else {
        Variant::Muted
    }
}

/// Whether a field name suggests a monetary amount, per the currency
/// keywords of the shared keyword table.
pub fn looks_like_currency_field(name: &str, config: &TemplateConfig) -> bool {
    config.keywords.mentions(TemplateKind::Currency, name)
}
