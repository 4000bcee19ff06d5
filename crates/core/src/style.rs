//! Style tokens shared by every template: color variants and sizes.
//!
//! These are semantic names only. Mapping them to concrete colors and
//! dimensions is the host's job.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseEnumError;

/// Semantic color variant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Variant {
    #[default]
    Primary,
    Secondary,
    Success,
    Warning,
    Error,
    Info,
    Muted,
}

impl Variant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Variant::Primary => "primary",
            Variant::Secondary => "secondary",
            Variant::Success => "success",
            Variant::Warning => "warning",
            Variant::Error => "error",
            Variant::Info => "info",
            Variant::Muted => "muted",
        }
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Variant {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "primary" => Ok(Variant::Primary),
            "secondary" => Ok(Variant::Secondary),
            "success" => Ok(Variant::Success),
            "warning" => Ok(Variant::Warning),
            "error" | "danger" => Ok(Variant::Error),
            "info" => Ok(Variant::Info),
            "muted" => Ok(Variant::Muted),
            _ => Err(ParseEnumError::new("variant", s)),
        }
    }
}

/// Component size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Size {
    Small,
    #[default]
    Medium,
    Large,
}

impl Size {
    /// Short suffix used in class names (`sm`, `md`, `lg`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Size::Small => "sm",
            Size::Medium => "md",
            Size::Large => "lg",
        }
    }
}
