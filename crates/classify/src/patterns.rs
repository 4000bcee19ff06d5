//! Static heuristics: regex keyword groups, the numeric type set and the
//! status vocabulary used by the sample-data check.

use std::sync::LazyLock;

use cellsense_core::TemplateKind;
use regex::Regex;

/// Declared types (after nullable unwrapping) that imply a monetary value.
pub const CURRENCY_TYPES: &[&str] = &["decimal", "double", "float"];

/// Smallest and largest sample value still read as an amount of money.
pub const CURRENCY_SAMPLE_MIN: f64 = 0.01;
pub const CURRENCY_SAMPLE_MAX: f64 = 10_000_000.0;

/// Text samples shorter than this (in chars) read as badge labels.
pub const BADGE_MAX_CHARS: usize = 20;

/// Text samples longer than this (in chars) read as stacked prose.
pub const STACK_MIN_CHARS: usize = 30;

/// Words commonly used as record states.
pub const STATUS_VOCABULARY: &[&str] = &[
    "active",
    "inactive",
    "pending",
    "approved",
    "rejected",
    "cancelled",
    "canceled",
    "completed",
    "complete",
    "done",
    "draft",
    "open",
    "closed",
    "new",
    "in progress",
    "on hold",
    "failed",
    "error",
    "success",
    "warning",
    "info",
    "enabled",
    "disabled",
    "archived",
    "paused",
    "processing",
    "shipped",
    "delivered",
    "yes",
    "no",
];

/// Keyword groups tried after the name table, in this order.
static NAME_PATTERNS: LazyLock<Vec<(TemplateKind, Regex)>> = LazyLock::new(|| {
    [
        (
            TemplateKind::Currency,
            r"(?i)(money|cash|wage|income|expense|tax|discount|charge|invoice|usd|eur|gbp|(^|_)amt($|_))",
        ),
        (
            TemplateKind::Badge,
            r"(?i)(^is_|^has_|stage|phase|tier|flag|severity|health|condition)",
        ),
        (
            TemplateKind::Avatar,
            r"(?i)(photo|picture|image|portrait|headshot|(first|last|full|display)_?name|manager|creator|reporter|member)",
        ),
        (
            TemplateKind::Progress,
            r"(?i)(pct|ratio|done|complete|utilization|usage|(^|_)rate$)",
        ),
        (
            TemplateKind::Rating,
            r"(?i)(rank|grade|review|feedback|satisfaction|nps|likes?$)",
        ),
    ]
    .into_iter()
    .map(|(kind, pattern)| (kind, Regex::new(pattern).expect("name pattern regex")))
    .collect()
});

/// Kind of the first regex group matching the name.
pub fn pattern_kind(name: &str) -> Option<TemplateKind> {
    NAME_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(name))
        .map(|(kind, _)| *kind)
}

pub fn is_currency_type(base_type: &str) -> bool {
    CURRENCY_TYPES.contains(&base_type)
}

pub fn is_status_word(text: &str) -> bool {
    let text = text.trim().to_lowercase();
    STATUS_VOCABULARY.contains(&text.as_str())
}
