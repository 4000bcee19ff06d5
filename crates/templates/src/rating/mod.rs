//! Ratings: icon rows (stars, hearts, emoji, custom), thumbs up/down, a
//! numeric readout or a bar.
//!
//! Icon modes can be interactive. Hover feedback is not kept on the
//! template: the host owns a [`HoverState`] per row and passes the hovered
//! position into [`RatingTemplate::render_with_hover`].

pub mod icons;
mod render;


use std::sync::Arc;

use cellsense_core::{Interaction, Node, Size, TemplateConfig, Variant};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::accessor::{accessor, Accessor, ChangeCallback};
use crate::id::TemplateId;
use crate::interaction::HoverState;

pub use render::render_rating;

pub const DEFAULT_MAX_RATING: u32 = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RatingType {
    #[default]
    Stars,
    Hearts,
    Thumbs,
    Numeric,
    Bar,
    Emoji,
    Custom,
}

impl RatingType {
    pub fn as_str(&self) -> &'static str {
        match self {
            RatingType::Stars => "stars",
            RatingType::Hearts => "hearts",
            RatingType::Thumbs => "thumbs",
            RatingType::Numeric => "numeric",
            RatingType::Bar => "bar",
            RatingType::Emoji => "emoji",
            RatingType::Custom => "custom",
        }
    }

    /// Modes drawn as a row of per-position icons.
    pub fn is_icon_row(&self) -> bool {
        matches!(
            self,
            RatingType::Stars | RatingType::Hearts | RatingType::Emoji | RatingType::Custom
        )
    }

    /// Modes that can take user input.
    pub fn accepts_input(&self) -> bool {
        self.is_icon_row() || *self == RatingType::Thumbs
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RatingContext {
    /// Clamped into `[0, max_rating]`.
    pub value: f64,
    pub max_rating: u32,
    pub percentage: f64,
    pub rating_type: RatingType,
    pub color: Variant,
    /// Per-position icon overrides (1-based).
    pub icons: IndexMap<u32, String>,
    pub allow_half: bool,
    pub interactive: bool,
    pub show_value: bool,
    pub size: Size,
}

pub struct RatingTemplate<T> {
    id: TemplateId,
    value: Accessor<T, f64>,
    max_rating: u32,
    rating_type: RatingType,
    color: Option<Variant>,
    allow_half: bool,
    interactive: bool,
    show_value: bool,
    size: Size,
    custom_icons: IndexMap<u32, String>,
    on_change: Option<ChangeCallback<T>>,
}

impl<T> RatingTemplate<T> {
    pub fn new<F>(_config: &TemplateConfig, value: F) -> Self
    where
        F: Fn(&T) -> f64 + Send + Sync + 'static,
    {
        Self {
            id: TemplateId::new(),
            value: accessor(value),
            max_rating: DEFAULT_MAX_RATING,
            rating_type: RatingType::default(),
            color: None,
            allow_half: false,
            interactive: false,
            show_value: false,
            size: Size::default(),
            custom_icons: IndexMap::new(),
            on_change: None,
        }
    }

    /// Zero is raised to 1.
    pub fn with_max_rating(mut self, max: u32) -> Self {
        self.max_rating = max.max(1);
        self
    }

    pub fn with_type(mut self, rating_type: RatingType) -> Self {
        self.rating_type = rating_type;
        self
    }

    /// Fixed color. Left unset, stars are drawn in warning color and other
    /// modes are colored by the rating's share of the maximum.
    pub fn with_color(mut self, color: Variant) -> Self {
        self.color = Some(color);
        self
    }

    pub fn allow_half(mut self, allow: bool) -> Self {
        self.allow_half = allow;
        self
    }

    pub fn interactive(mut self, interactive: bool) -> Self {
        self.interactive = interactive;
        self
    }

    pub fn show_value(mut self, show: bool) -> Self {
        self.show_value = show;
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    /// Icon for one 1-based position. Ignored in emoji mode.
    pub fn with_icon(mut self, position: u32, icon: impl Into<String>) -> Self {
        self.custom_icons.insert(position, icon.into());
        self
    }

    pub fn with_icons<I, S>(mut self, icons: I) -> Self
    where
        I: IntoIterator<Item = (u32, S)>,
        S: Into<String>,
    {
        self.custom_icons
            .extend(icons.into_iter().map(|(position, icon)| (position, icon.into())));
        self
    }

    /// Host callback for picked values, called as `(item, new_value)`.
    pub fn on_change<F>(mut self, f: F) -> Self
    where
        F: Fn(&T, u32) + Send + Sync + 'static,
    {
        self.on_change = Some(Arc::new(f));
        self
    }

    pub fn id(&self) -> TemplateId {
        self.id
    }

    pub fn rating_type(&self) -> RatingType {
        self.rating_type
    }

    pub fn context(&self, item: &T) -> RatingContext {
        let raw = (self.value)(item);
        let max = f64::from(self.max_rating);
        let value = if raw.is_finite() { raw.clamp(0.0, max) } else { 0.0 };
        let percentage = value / max * 100.0;

        let color = match (self.color, self.rating_type) {
            (Some(color), _) => color,
            (None, RatingType::Stars) => Variant::Warning,
            (None, _) => color_for_percentage(percentage),
        };
        let icons = match self.rating_type {
            RatingType::Emoji => icons::emoji_icons(self.max_rating),
            _ => self.custom_icons.clone(),
        };

        RatingContext {
            value,
            max_rating: self.max_rating,
            percentage,
            rating_type: self.rating_type,
            color,
            icons,
            allow_half: self.allow_half,
            interactive: self.interactive,
            show_value: self.show_value,
            size: self.size,
        }
    }

    pub fn render(&self, item: &T) -> Node {
        self.render_with_hover(item, None)
    }

    /// Render with the host's hover position for this row, if any.
    pub fn render_with_hover(&self, item: &T, hover: Option<u32>) -> Node {
        let hover = hover.filter(|_| self.interactive);
        render_rating(&self.context(item), hover)
    }

    /// Apply a reported interaction to `hover` and, on `Select`, invoke the
    /// change callback. Returns the picked value.
    pub fn handle(&self, item: &T, interaction: Interaction, hover: &mut HoverState) -> Option<u32> {
        if !self.interactive || !self.rating_type.accepts_input() {
            debug!(
                template = %self.id,
                %interaction,
                "ignoring interaction on read-only rating"
            );
            return None;
        }

        match interaction {
            Interaction::Select(v) => {
                let limit = if self.rating_type == RatingType::Thumbs {
                    1
                } else {
                    self.max_rating
                };
                let value = v.min(limit);
                hover.clear();
                if let Some(callback) = &self.on_change {
                    callback(item, value);
                }
                Some(value)
            }
            Interaction::Hover(position) => {
                if self.rating_type.is_icon_row() {
                    hover.set(position.clamp(1, self.max_rating));
                }
                None
            }
            Interaction::ClearHover => {
                hover.clear();
                None
            }
        }
    }
}

/// Color of a rating by its share of the maximum.
pub fn color_for_percentage(percentage: f64) -> Variant {
    if percentage < 20.0 {
        Variant::Error
    } else if percentage < 40.0 {
        Variant::Warning
    } else if percentage < 60.0 {
        Variant::Info
    } else if percentage < 80.0 {
        Variant::Primary
    } else {
        Variant::Success
    }
}
