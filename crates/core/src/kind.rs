//! Closed set of presentation strategies a field can be rendered with.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ParseEnumError;

/// Template kinds, in the order the classifier reports them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TemplateKind {
    #[default]
    None,
    Badge,
    Currency,
    Stack,
    Avatar,
    Progress,
    Rating,
}

impl TemplateKind {
    /// Every kind that produces a template, excluding `None`.
    pub const ALL: [TemplateKind; 6] = [
        TemplateKind::Badge,
        TemplateKind::Currency,
        TemplateKind::Stack,
        TemplateKind::Avatar,
        TemplateKind::Progress,
        TemplateKind::Rating,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateKind::None => "none",
            TemplateKind::Badge => "badge",
            TemplateKind::Currency => "currency",
            TemplateKind::Stack => "stack",
            TemplateKind::Avatar => "avatar",
            TemplateKind::Progress => "progress",
            TemplateKind::Rating => "rating",
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, TemplateKind::None)
    }
}

impl fmt::Display for TemplateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateKind {
    type Err = ParseEnumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" => Ok(TemplateKind::None),
            "badge" => Ok(TemplateKind::Badge),
            "currency" => Ok(TemplateKind::Currency),
            "stack" => Ok(TemplateKind::Stack),
            "avatar" => Ok(TemplateKind::Avatar),
            "progress" => Ok(TemplateKind::Progress),
            "rating" => Ok(TemplateKind::Rating),
            _ => Err(ParseEnumError::new("template kind", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!("Currency".parse::<TemplateKind>(), Ok(TemplateKind::Currency));
        assert_eq!(" rating ".parse::<TemplateKind>(), Ok(TemplateKind::Rating));
        assert!("chart".parse::<TemplateKind>().is_err());
    }

    #[test]
    fn display_matches_parse() {
        for kind in TemplateKind::ALL {
            assert_eq!(kind.to_string().parse::<TemplateKind>(), Ok(kind));
        }
        assert_eq!(TemplateKind::None.to_string(), "none");
    }
}
