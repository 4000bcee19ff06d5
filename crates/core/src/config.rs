use std::env;
use std::sync::{LazyLock, OnceLock};

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::ConfigError;
use crate::keywords::KeywordTable;
use crate::kind::TemplateKind;
use crate::style::Variant;

/// Hard cap on the number of sample values inspected per field.
pub const MAX_SAMPLE_LIMIT: usize = 10;

/// Smallest stack max length that still leaves room for one char plus "...".
pub const MIN_STACK_MAX_LENGTH: usize = 4;

const DEFAULT_AUTO_APPLY: f64 = 0.8;
const DEFAULT_CONFIRM: f64 = 0.6;
const DEFAULT_STACK_MAX_LENGTH: usize = 50;
const MAX_DECIMAL_PLACES: u8 = 6;

/// Load .env file (silently ignores if missing).
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

// ── Top-level config ──────────────────────────────────────────

/// Process-wide template defaults.
///
/// Built once at start-up through [`TemplateConfig::builder`] (or
/// [`TemplateConfig::from_env`]), then handed to every template constructor.
/// Never mutated afterwards, so it can be shared freely between threads.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TemplateConfig {
    pub currency: CurrencyDefaults,
    pub stack: StackDefaults,
    pub detection: DetectionThresholds,
    pub badge: BadgeDefaults,
    pub keywords: KeywordTable,
}

static INSTALLED: OnceLock<TemplateConfig> = OnceLock::new();
static BUILTIN: LazyLock<TemplateConfig> = LazyLock::new(TemplateConfig::default);

impl Default for TemplateConfig {
    fn default() -> Self {
        Self {
            currency: CurrencyDefaults::default(),
            stack: StackDefaults::default(),
            detection: DetectionThresholds::default(),
            badge: BadgeDefaults::default(),
            keywords: KeywordTable::default(),
        }
    }
}

impl TemplateConfig {
    pub fn builder() -> TemplateConfigBuilder {
        TemplateConfigBuilder::default()
    }

    /// Reopen this config for further overrides, e.g. layering a config
    /// file over environment settings.
    pub fn into_builder(self) -> TemplateConfigBuilder {
        TemplateConfigBuilder {
            sample_limit: self.detection.sample_limit as i64,
            config: self,
        }
    }

    /// Build config from environment variables (call `load_dotenv()` first).
    /// Profile is read from `CELLSENSE_PROFILE`. When set (e.g. `PROD`),
    /// every key is first looked up as `{PROFILE}_{KEY}`, falling back to `{KEY}`.
    pub fn from_env() -> Self {
        let profile = env::var("CELLSENSE_PROFILE")
            .unwrap_or_default()
            .to_uppercase();
        Self::from_lookup(&profile, |key| env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup, starting from defaults.
    /// Unparseable values are logged and skipped; out-of-range values are
    /// clamped by the builder.
    pub fn from_lookup<F>(profile: &str, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let env = ProfiledLookup { profile, lookup };
        let mut b = Self::builder();

        if let Some(code) = env.get("CELLSENSE_CURRENCY_CODE") {
            b = b.currency_code(code);
        }
        if let Some(culture) = env.get("CELLSENSE_CURRENCY_CULTURE") {
            b = b.culture(culture);
        }
        if let Some(places) = env.parsed::<u8>("CELLSENSE_CURRENCY_DECIMALS") {
            b = b.currency_decimal_places(places);
        }
        if let Some(compact) = env.flag("CELLSENSE_CURRENCY_COMPACT") {
            b = b.compact_currency(compact);
        }
        if let Some(max) = env.parsed::<usize>("CELLSENSE_STACK_MAX_LENGTH") {
            b = b.stack_max_length(max);
        }
        if let Some(truncate) = env.flag("CELLSENSE_STACK_TRUNCATE") {
            b = b.stack_truncate(truncate);
        }
        if let Some(t) = env.parsed::<f64>("CELLSENSE_AUTO_APPLY_THRESHOLD") {
            b = b.auto_apply_threshold(t);
        }
        if let Some(t) = env.parsed::<f64>("CELLSENSE_CONFIRM_THRESHOLD") {
            b = b.confirm_threshold(t);
        }
        if let Some(n) = env.parsed::<i64>("CELLSENSE_SAMPLE_LIMIT") {
            b = b.sample_limit(n);
        }

        b.build()
    }

    /// Install this config as the process-wide default. Succeeds once;
    /// later calls return [`ConfigError::AlreadyInstalled`] and leave the
    /// first config in place.
    pub fn install(self) -> Result<&'static TemplateConfig, ConfigError> {
        let mut fresh = false;
        let installed = INSTALLED.get_or_init(|| {
            fresh = true;
            self
        });
        if fresh {
            tracing::debug!("template configuration installed");
            Ok(installed)
        } else {
            Err(ConfigError::AlreadyInstalled)
        }
    }

    /// The installed config, or the built-in defaults when nothing has
    /// been installed.
    pub fn global() -> &'static TemplateConfig {
        INSTALLED.get().unwrap_or(&*BUILTIN)
    }

    /// Print a summary for startup logs.
    pub fn log_summary(&self) {
        tracing::info!("Template config:");
        tracing::info!(
            "  currency:   code={}, culture={}, decimals={}, compact={}",
            self.currency.code,
            self.currency.culture.as_deref().unwrap_or("(by currency)"),
            self.currency.decimal_places,
            self.currency.compact
        );
        tracing::info!(
            "  stack:      max_length={}, truncate={}",
            self.stack.max_length,
            self.stack.truncate
        );
        tracing::info!(
            "  detection:  auto_apply={:.2}, confirm={:.2}, samples={}",
            self.detection.auto_apply,
            self.detection.confirm,
            self.detection.sample_limit
        );
        tracing::info!(
            "  badge:      {} status mappings, default={}",
            self.badge.status_variants.len(),
            self.badge.default_variant
        );
        tracing::info!("  keywords:   {} entries", self.keywords.len());
    }
}

struct ProfiledLookup<'a, F> {
    profile: &'a str,
    lookup: F,
}

impl<F> ProfiledLookup<'_, F>
where
    F: Fn(&str) -> Option<String>,
{
    /// Tries `{PROFILE}_{KEY}` first, falls back to `{KEY}`.
    fn get(&self, key: &str) -> Option<String> {
        if !self.profile.is_empty() {
            let prefixed = format!("{}_{}", self.profile, key);
            if let Some(v) = (self.lookup)(&prefixed).filter(|s| !s.is_empty()) {
                return Some(v);
            }
        }
        (self.lookup)(key).filter(|s| !s.is_empty())
    }

    fn parsed<T: std::str::FromStr>(&self, key: &str) -> Option<T> {
        let raw = self.get(key)?;
        match raw.trim().parse() {
            Ok(v) => Some(v),
            Err(_) => {
                tracing::warn!(key, value = %raw, "ignoring unparseable config value");
                None
            }
        }
    }

    fn flag(&self, key: &str) -> Option<bool> {
        let raw = self.get(key)?;
        match raw.trim().to_ascii_lowercase().as_str() {
            "1" | "true" | "yes" | "on" => Some(true),
            "0" | "false" | "no" | "off" => Some(false),
            _ => {
                tracing::warn!(key, value = %raw, "ignoring unparseable config flag");
                None
            }
        }
    }
}

// ── Currency ──────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CurrencyDefaults {
    /// ISO 4217 code used when a template has no code accessor.
    pub code: String,
    /// Culture tag (e.g. `de-DE`) forcing number formatting. `None` formats
    /// each amount in the home culture of its currency.
    pub culture: Option<String>,
    pub decimal_places: u8,
    pub compact: bool,
    pub show_code: bool,
    pub colorize: bool,
}

impl Default for CurrencyDefaults {
    fn default() -> Self {
        Self {
            code: "USD".to_string(),
            culture: None,
            decimal_places: 2,
            compact: false,
            show_code: false,
            colorize: true,
        }
    }
}

// ── Stack ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackDefaults {
    pub max_length: usize,
    pub truncate: bool,
}

impl Default for StackDefaults {
    fn default() -> Self {
        Self {
            max_length: DEFAULT_STACK_MAX_LENGTH,
            truncate: true,
        }
    }
}

// ── Smart detection ───────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DetectionThresholds {
    /// Suggestions at or above this confidence are applied without asking.
    pub auto_apply: f64,
    /// Suggestions at or above this (and below `auto_apply`) need confirmation.
    pub confirm: f64,
    /// Number of sample values inspected per field, at most [`MAX_SAMPLE_LIMIT`].
    pub sample_limit: usize,
}

impl Default for DetectionThresholds {
    fn default() -> Self {
        Self {
            auto_apply: DEFAULT_AUTO_APPLY,
            confirm: DEFAULT_CONFIRM,
            sample_limit: MAX_SAMPLE_LIMIT,
        }
    }
}

// ── Badge ─────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BadgeDefaults {
    /// Lowercase status text → variant.
    pub status_variants: IndexMap<String, Variant>,
    /// Variant for text that matches no status.
    pub default_variant: Variant,
}

impl Default for BadgeDefaults {
    fn default() -> Self {
        let status_variants = [
            ("active", Variant::Success),
            ("success", Variant::Success),
            ("pending", Variant::Warning),
            ("error", Variant::Error),
            ("rejected", Variant::Error),
            ("inactive", Variant::Secondary),
            ("cancelled", Variant::Secondary),
            ("info", Variant::Info),
        ]
        .into_iter()
        .map(|(k, v)| (k.to_string(), v))
        .collect();
        Self {
            status_variants,
            default_variant: Variant::Secondary,
        }
    }
}

impl BadgeDefaults {
    /// Variant for a status text, matched case-insensitively.
    pub fn variant_for(&self, status: &str) -> Option<Variant> {
        self.status_variants
            .get(status.trim().to_lowercase().as_str())
            .copied()
    }
}

// ── Builder ───────────────────────────────────────────────────

/// Fluent builder for [`TemplateConfig`]. Values are clamped into their
/// valid ranges in [`build`](Self::build) instead of being rejected.
#[derive(Debug, Clone)]
pub struct TemplateConfigBuilder {
    config: TemplateConfig,
    sample_limit: i64,
}

impl Default for TemplateConfigBuilder {
    fn default() -> Self {
        Self {
            config: TemplateConfig::default(),
            sample_limit: MAX_SAMPLE_LIMIT as i64,
        }
    }
}

impl TemplateConfigBuilder {
    pub fn currency_code(mut self, code: impl Into<String>) -> Self {
        self.config.currency.code = code.into();
        self
    }

    pub fn culture(mut self, culture: impl Into<String>) -> Self {
        self.config.currency.culture = Some(culture.into());
        self
    }

    pub fn currency_decimal_places(mut self, places: u8) -> Self {
        self.config.currency.decimal_places = places;
        self
    }

    pub fn compact_currency(mut self, compact: bool) -> Self {
        self.config.currency.compact = compact;
        self
    }

    pub fn show_currency_code(mut self, show: bool) -> Self {
        self.config.currency.show_code = show;
        self
    }

    pub fn colorize_currency(mut self, colorize: bool) -> Self {
        self.config.currency.colorize = colorize;
        self
    }

    pub fn stack_max_length(mut self, max_length: usize) -> Self {
        self.config.stack.max_length = max_length;
        self
    }

    pub fn stack_truncate(mut self, truncate: bool) -> Self {
        self.config.stack.truncate = truncate;
        self
    }

    pub fn auto_apply_threshold(mut self, threshold: f64) -> Self {
        self.config.detection.auto_apply = threshold;
        self
    }

    pub fn confirm_threshold(mut self, threshold: f64) -> Self {
        self.config.detection.confirm = threshold;
        self
    }

    /// Signed so that negative input can be clamped rather than wrapped.
    pub fn sample_limit(mut self, limit: i64) -> Self {
        self.sample_limit = limit;
        self
    }

    pub fn status_variant(mut self, status: &str, variant: Variant) -> Self {
        self.config
            .badge
            .status_variants
            .insert(status.trim().to_lowercase(), variant);
        self
    }

    pub fn clear_status_variants(mut self) -> Self {
        self.config.badge.status_variants.clear();
        self
    }

    pub fn default_badge_variant(mut self, variant: Variant) -> Self {
        self.config.badge.default_variant = variant;
        self
    }

    /// Append a keyword to the end of the name table.
    pub fn keyword(mut self, keyword: &str, kind: TemplateKind) -> Self {
        self.config.keywords.push(keyword, kind);
        self
    }

    /// Replace the whole keyword table.
    pub fn keywords(mut self, table: KeywordTable) -> Self {
        self.config.keywords = table;
        self
    }

    pub fn build(self) -> TemplateConfig {
        let mut config = self.config;

        let detection = &mut config.detection;
        detection.auto_apply = clamp_unit("auto_apply", detection.auto_apply, DEFAULT_AUTO_APPLY);
        detection.confirm = clamp_unit("confirm", detection.confirm, DEFAULT_CONFIRM);
        if detection.confirm > detection.auto_apply {
            tracing::warn!(
                confirm = detection.confirm,
                auto_apply = detection.auto_apply,
                "confirm threshold above auto-apply threshold, lowering it"
            );
            detection.confirm = detection.auto_apply;
        }

        let limit = self.sample_limit.clamp(0, MAX_SAMPLE_LIMIT as i64);
        if limit != self.sample_limit {
            tracing::warn!(requested = self.sample_limit, used = limit, "sample limit clamped");
        }
        detection.sample_limit = limit as usize;

        if config.stack.max_length < MIN_STACK_MAX_LENGTH {
            tracing::warn!(
                requested = config.stack.max_length,
                used = MIN_STACK_MAX_LENGTH,
                "stack max length clamped"
            );
            config.stack.max_length = MIN_STACK_MAX_LENGTH;
        }

        if config.currency.decimal_places > MAX_DECIMAL_PLACES {
            config.currency.decimal_places = MAX_DECIMAL_PLACES;
        }
        let code = config.currency.code.trim().to_uppercase();
        config.currency.code = if code.is_empty() {
            CurrencyDefaults::default().code
        } else {
            code
        };

        config
    }
}

fn clamp_unit(name: &str, value: f64, fallback: f64) -> f64 {
    if !value.is_finite() {
        tracing::warn!(threshold = name, "non-finite threshold replaced by default");
        return fallback;
    }
    let clamped = value.clamp(0.0, 1.0);
    if clamped != value {
        tracing::warn!(threshold = name, requested = value, used = clamped, "threshold clamped");
    }
    clamped
}
