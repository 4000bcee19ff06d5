//! Multi-line stacked text: a primary line with optional secondary and
//! tertiary lines, each truncated to the configured length.

mod render;


use cellsense_core::{Node, TemplateConfig};
use serde::{Deserialize, Serialize};

use crate::accessor::{accessor, non_empty, Accessor};
use crate::id::TemplateId;

pub use render::render_stack;

/// Vertical spacing between lines.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Density {
    Compact,
    #[default]
    Normal,
    Relaxed,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    #[default]
    Start,
    Center,
    End,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LineRole {
    Primary,
    Secondary,
    Tertiary,
}

impl LineRole {
    fn as_str(&self) -> &'static str {
        match self {
            LineRole::Primary => "primary",
            LineRole::Secondary => "secondary",
            LineRole::Tertiary => "tertiary",
        }
    }
}

impl Density {
    fn as_str(&self) -> &'static str {
        match self {
            Density::Compact => "compact",
            Density::Normal => "normal",
            Density::Relaxed => "relaxed",
        }
    }
}

impl Align {
    fn as_str(&self) -> &'static str {
        match self {
            Align::Start => "start",
            Align::Center => "center",
            Align::End => "end",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackLine {
    pub role: LineRole,
    pub text: String,
    /// Untruncated text, set only when `text` was shortened.
    pub full_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StackContext {
    pub lines: Vec<StackLine>,
    pub icon: Option<String>,
    pub density: Density,
    pub align: Align,
}

pub struct StackTemplate<T> {
    id: TemplateId,
    primary: Accessor<T, String>,
    secondary: Option<Accessor<T, String>>,
    tertiary: Option<Accessor<T, String>>,
    icon: Option<Accessor<T, String>>,
    max_length: usize,
    truncate: bool,
    density: Density,
    align: Align,
}

impl<T> StackTemplate<T> {
    pub fn new<F>(config: &TemplateConfig, primary: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        Self {
            id: TemplateId::new(),
            primary: accessor(primary),
            secondary: None,
            tertiary: None,
            icon: None,
            max_length: config.stack.max_length,
            truncate: config.stack.truncate,
            density: Density::default(),
            align: Align::default(),
        }
    }

    pub fn with_secondary<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.secondary = Some(accessor(f));
        self
    }

    pub fn with_tertiary<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.tertiary = Some(accessor(f));
        self
    }

    pub fn with_icon<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.icon = Some(accessor(f));
        self
    }

    /// Values below 4 are raised to 4 so "..." always fits.
    pub fn with_max_length(mut self, max_length: usize) -> Self {
        self.max_length = max_length.max(cellsense_core::config::MIN_STACK_MAX_LENGTH);
        self
    }

    pub fn truncate(mut self, truncate: bool) -> Self {
        self.truncate = truncate;
        self
    }

    pub fn with_density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }

    pub fn with_align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    pub fn id(&self) -> TemplateId {
        self.id
    }

    pub fn context(&self, item: &T) -> StackContext {
        let mut lines = vec![self.line(LineRole::Primary, (self.primary)(item))];
        if let Some(text) = non_empty(&self.secondary, item) {
            lines.push(self.line(LineRole::Secondary, text));
        }
        if let Some(text) = non_empty(&self.tertiary, item) {
            lines.push(self.line(LineRole::Tertiary, text));
        }

        StackContext {
            lines,
            icon: non_empty(&self.icon, item),
            density: self.density,
            align: self.align,
        }
    }

    pub fn render(&self, item: &T) -> Node {
        render_stack(&self.context(item))
    }

    fn line(&self, role: LineRole, text: String) -> StackLine {
        match truncate_text(&text, self.max_length, self.truncate) {
            Some(short) => StackLine {
                role,
                text: short,
                full_text: Some(text),
            },
            None => StackLine {
                role,
                text,
                full_text: None,
            },
        }
    }
}

/// Shortened text when `text` is longer than `max_length` chars and
/// truncation is on: the first `max_length - 3` chars followed by "...".
pub fn truncate_text(text: &str, max_length: usize, enabled: bool) -> Option<String> {
    if !enabled || text.chars().count() <= max_length {
        return None;
    }
    let keep = max_length.saturating_sub(3);
    let mut short: String = text.chars().take(keep).collect();
    short.push_str("...");
    Some(short)
}
