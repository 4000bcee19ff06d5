use std::path::PathBuf;

use anyhow::{Context, Result};
use cellsense_core::{TemplateConfig, TemplateConfigBuilder, TemplateKind, Variant};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// CLI configuration loaded from a TOML file. Every key is optional and
/// overrides the matching environment/default setting.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub currency: CurrencySection,
    pub stack: StackSection,
    pub detection: DetectionSection,
    pub badge: BadgeSection,

    /// Extra field-name keywords, appended after the built-in table.
    pub keywords: IndexMap<String, TemplateKind>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CurrencySection {
    pub code: Option<String>,
    pub culture: Option<String>,
    pub decimal_places: Option<u8>,
    pub compact: Option<bool>,
    pub show_code: Option<bool>,
    pub colorize: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StackSection {
    pub max_length: Option<usize>,
    pub truncate: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DetectionSection {
    pub auto_apply: Option<f64>,
    pub confirm: Option<f64>,
    pub sample_limit: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BadgeSection {
    pub default_variant: Option<Variant>,
    /// Status text → variant, added to the built-in map.
    pub status: IndexMap<String, Variant>,
}

impl CliConfig {
    /// Return the default config directory path: ~/.config/cellsense/
    pub fn default_config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("could not determine user config directory")?
            .join("cellsense");
        Ok(config_dir)
    }

    /// Return the default config file path.
    pub fn default_config_path() -> Result<PathBuf> {
        Ok(Self::default_config_dir()?.join("config.toml"))
    }

    /// Load config from the given path, or the default path.
    /// A missing file yields the empty config.
    pub fn load(path: Option<&str>) -> Result<Self> {
        let config_path = match path {
            Some(p) => PathBuf::from(p),
            None => Self::default_config_path()?,
        };

        if !config_path.exists() {
            debug!(?config_path, "Config file not found, using defaults");
            return Ok(Self::default());
        }

        debug!(?config_path, "Loading config");
        let content = std::fs::read_to_string(&config_path)
            .with_context(|| format!("failed to read config: {}", config_path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("failed to parse config: {}", config_path.display()))
    }

    /// Layer this file's settings over `builder`.
    pub fn apply(&self, mut b: TemplateConfigBuilder) -> TemplateConfigBuilder {
        let c = &self.currency;
        if let Some(code) = &c.code {
            b = b.currency_code(code.as_str());
        }
        if let Some(culture) = &c.culture {
            b = b.culture(culture.as_str());
        }
        if let Some(places) = c.decimal_places {
            b = b.currency_decimal_places(places);
        }
        if let Some(compact) = c.compact {
            b = b.compact_currency(compact);
        }
        if let Some(show) = c.show_code {
            b = b.show_currency_code(show);
        }
        if let Some(colorize) = c.colorize {
            b = b.colorize_currency(colorize);
        }

        if let Some(max) = self.stack.max_length {
            b = b.stack_max_length(max);
        }
        if let Some(truncate) = self.stack.truncate {
            b = b.stack_truncate(truncate);
        }

        let d = &self.detection;
        if let Some(t) = d.auto_apply {
            b = b.auto_apply_threshold(t);
        }
        if let Some(t) = d.confirm {
            b = b.confirm_threshold(t);
        }
        if let Some(n) = d.sample_limit {
            b = b.sample_limit(n);
        }

        if let Some(variant) = self.badge.default_variant {
            b = b.default_badge_variant(variant);
        }
        for (status, variant) in &self.badge.status {
            b = b.status_variant(status, *variant);
        }
        for (keyword, kind) in &self.keywords {
            b = b.keyword(keyword, *kind);
        }
        b
    }

    /// Environment settings with this file layered on top.
    pub fn template_config(&self) -> TemplateConfig {
        self.apply(TemplateConfig::from_env().into_builder()).build()
    }
}
