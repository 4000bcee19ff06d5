//! Status badge: a short label colored by its status.

mod render;


use cellsense_core::{Node, Size, TemplateConfig, Variant};
use indexmap::IndexMap;
use serde::Serialize;

use crate::accessor::{accessor, non_empty, Accessor};
use crate::id::TemplateId;

pub use render::render_badge;

pub struct BadgeTemplate<T> {
    id: TemplateId,
    text: Accessor<T, String>,
    variant: Option<Accessor<T, Option<Variant>>>,
    icon: Option<Accessor<T, String>>,
    tooltip: Option<Accessor<T, String>>,
    status_variants: IndexMap<String, Variant>,
    default_variant: Variant,
    size: Size,
    pill: bool,
    outlined: bool,
}

/// Everything the badge renderer needs for one item.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BadgeContext {
    pub text: String,
    pub variant: Variant,
    pub icon: Option<String>,
    pub tooltip: Option<String>,
    pub size: Size,
    pub pill: bool,
    pub outlined: bool,
}

impl<T> BadgeTemplate<T> {
    /// Badge showing `text(item)`. Status colors and the fallback variant
    /// come from `config.badge`.
    pub fn new<F>(config: &TemplateConfig, text: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        Self {
            id: TemplateId::new(),
            text: accessor(text),
            variant: None,
            icon: None,
            tooltip: None,
            status_variants: config.badge.status_variants.clone(),
            default_variant: config.badge.default_variant,
            size: Size::default(),
            pill: false,
            outlined: false,
        }
    }

    /// Explicit variant per item. Returning `None` falls back to the status
    /// map.
    pub fn with_variant<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> Option<Variant> + Send + Sync + 'static,
    {
        self.variant = Some(accessor(f));
        self
    }

    pub fn with_icon<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.icon = Some(accessor(f));
        self
    }

    pub fn with_tooltip<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.tooltip = Some(accessor(f));
        self
    }

    /// Add or replace one status mapping for this badge only.
    pub fn with_status(mut self, status: &str, variant: Variant) -> Self {
        self.status_variants
            .insert(status.trim().to_lowercase(), variant);
        self
    }

    /// Variant for text matching no status.
    pub fn with_default_variant(mut self, variant: Variant) -> Self {
        self.default_variant = variant;
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn pill(mut self, pill: bool) -> Self {
        self.pill = pill;
        self
    }

    pub fn outlined(mut self, outlined: bool) -> Self {
        self.outlined = outlined;
        self
    }

    pub fn id(&self) -> TemplateId {
        self.id
    }

    pub fn context(&self, item: &T) -> BadgeContext {
        let text = (self.text)(item);
        let variant = self
            .variant
            .as_ref()
            .and_then(|f| f(item))
            .or_else(|| self.status_variant(&text))
            .unwrap_or(self.default_variant);

        BadgeContext {
            variant,
            icon: non_empty(&self.icon, item),
            tooltip: non_empty(&self.tooltip, item),
            text,
            size: self.size,
            pill: self.pill,
            outlined: self.outlined,
        }
    }

    pub fn render(&self, item: &T) -> Node {
        render_badge(&self.context(item))
    }

    fn status_variant(&self, text: &str) -> Option<Variant> {
        self.status_variants
            .get(text.trim().to_lowercase().as_str())
            .copied()
    }
}
