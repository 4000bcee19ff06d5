//! Avatar: initials (or an image) in a colored shape, with optional
//! presence dot, notification count and name label.

mod render;

#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;

use cellsense_core::{Node, ParseEnumError, Size, TemplateConfig, Variant};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use tracing::debug;

use crate::accessor::{accessor, non_empty, Accessor};
use crate::id::TemplateId;

pub use render::render_avatar;

/// Variants picked from when a color is derived from the name.
pub const HASH_VARIANTS: [Variant; 6] = [
    Variant::Primary,
    Variant::Secondary,
    Variant::Success,
    Variant::Warning,
    Variant::Error,
    Variant::Info,
];

/// Badge counts above this are shown as "99+".
pub const MAX_BADGE_COUNT: u32 = 99;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AvatarShape {
    #[default]
    Circle,
    Rounded,
    Square,
}

impl AvatarShape {
    fn as_str(&self) -> &'static str {
        match self {
            AvatarShape::Circle => "circle",
            AvatarShape::Rounded => "rounded",
            AvatarShape::Square => "square",
        }
    }
}

/// Presence indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Presence {
    Online,
    Away,
    Busy,
    Offline,
}

impl Presence {
    pub fn as_str(&self) -> &'static str {
        match self {
            Presence::Online => "online",
            Presence::Away => "away",
            Presence::Busy => "busy",
            Presence::Offline => "offline",
        }
    }
}

impl fmt::Display for Presence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Presence {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "online" | "available" => Ok(Presence::Online),
            "away" | "idle" => Ok(Presence::Away),
            "busy" | "dnd" => Ok(Presence::Busy),
            "offline" => Ok(Presence::Offline),
            _ => Err(ParseEnumError {
                what: "presence",
                value: s.to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AvatarContext {
    pub name: String,
    pub initials: String,
    pub image_url: Option<String>,
    pub variant: Variant,
    pub presence: Option<Presence>,
    pub badge_count: Option<u32>,
    pub shape: AvatarShape,
    pub size: Size,
    pub show_name: bool,
}

impl AvatarContext {
    /// Badge text, capped at "99+". `None` when there is nothing to show.
    pub fn badge_label(&self) -> Option<String> {
        match self.badge_count {
            Some(0) | None => None,
            Some(n) if n > MAX_BADGE_COUNT => Some(format!("{}+", MAX_BADGE_COUNT)),
            Some(n) => Some(n.to_string()),
        }
    }
}

pub struct AvatarTemplate<T> {
    id: TemplateId,
    name: Accessor<T, String>,
    initials: Option<Accessor<T, String>>,
    image: Option<Accessor<T, String>>,
    color: Option<Accessor<T, Option<Variant>>>,
    color_map: IndexMap<String, Variant>,
    presence: Option<Accessor<T, String>>,
    badge_count: Option<Accessor<T, u32>>,
    shape: AvatarShape,
    size: Size,
    show_name: bool,
}

impl<T> AvatarTemplate<T> {
    /// The config is not consulted today; the signature matches the other
    /// templates so hosts can build every kind the same way.
    pub fn new<F>(_config: &TemplateConfig, name: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        Self {
            id: TemplateId::new(),
            name: accessor(name),
            initials: None,
            image: None,
            color: None,
            color_map: IndexMap::new(),
            presence: None,
            badge_count: None,
            shape: AvatarShape::default(),
            size: Size::default(),
            show_name: false,
        }
    }

    /// Explicit initials. Blank results fall back to initials of the name.
    pub fn with_initials<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.initials = Some(accessor(f));
        self
    }

    pub fn with_image<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.image = Some(accessor(f));
        self
    }

    pub fn with_color<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> Option<Variant> + Send + Sync + 'static,
    {
        self.color = Some(accessor(f));
        self
    }

    /// Fixed color for one name (case-insensitive).
    pub fn with_name_color(mut self, name: &str, variant: Variant) -> Self {
        self.color_map.insert(name.trim().to_lowercase(), variant);
        self
    }

    /// Presence text per item (`online`, `away`, `busy`, `offline`).
    pub fn with_presence<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> String + Send + Sync + 'static,
    {
        self.presence = Some(accessor(f));
        self
    }

    pub fn with_badge_count<F>(mut self, f: F) -> Self
    where
        F: Fn(&T) -> u32 + Send + Sync + 'static,
    {
        self.badge_count = Some(accessor(f));
        self
    }

    pub fn with_shape(mut self, shape: AvatarShape) -> Self {
        self.shape = shape;
        self
    }

    pub fn with_size(mut self, size: Size) -> Self {
        self.size = size;
        self
    }

    pub fn show_name(mut self, show: bool) -> Self {
        self.show_name = show;
        self
    }

    pub fn id(&self) -> TemplateId {
        self.id
    }

    pub fn context(&self, item: &T) -> AvatarContext {
        let name = (self.name)(item).trim().to_string();
        let initials = non_empty(&self.initials, item)
            .map(|s| s.trim().to_uppercase())
            .unwrap_or_else(|| initials(&name));
        let variant = self
            .color
            .as_ref()
            .and_then(|f| f(item))
            .or_else(|| self.color_map.get(&name.to_lowercase()).copied())
            .unwrap_or_else(|| hash_variant(&name));
        let presence = non_empty(&self.presence, item).and_then(|p| match p.parse::<Presence>() {
            Ok(p) => Some(p),
            Err(e) => {
                debug!(error = %e, "ignoring presence");
                None
            }
        });

        AvatarContext {
            initials,
            image_url: non_empty(&self.image, item),
            variant,
            presence,
            badge_count: self.badge_count.as_ref().map(|f| f(item)),
            shape: self.shape,
            size: self.size,
            show_name: self.show_name,
            name,
        }
    }

    pub fn render(&self, item: &T) -> Node {
        render_avatar(&self.context(item))
    }
}

/// Initials of a display name.
///
/// No words gives `"?"`, one word its first two chars, more words the
/// first char of the first and of the last word. Always uppercase.
pub fn initials(name: &str) -> String {
    let parts: Vec<&str> = name.split_whitespace().collect();
    match parts.as_slice() {
        [] => "?".to_string(),
        [only] => only.chars().take(2).collect::<String>().to_uppercase(),
        [first, .., last] => first
            .chars()
            .take(1)
            .chain(last.chars().take(1))
            .collect::<String>()
            .to_uppercase(),
    }
}

/// Stable color for a name: SHA-256 of the name, reduced onto
/// [`HASH_VARIANTS`].
pub fn hash_variant(name: &str) -> Variant {
    let digest = Sha256::digest(name.as_bytes());
    let mut head = [0u8; 8];
    head.copy_from_slice(&digest[..8]);
    let index = u64::from_be_bytes(head) % HASH_VARIANTS.len() as u64;
    HASH_VARIANTS[index as usize]
}
