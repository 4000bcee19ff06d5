//! Small helpers shared by the renderers.

use cellsense_core::Element;

/// Class prefix for every element the renderers emit.
pub(crate) const PREFIX: &str = "cs";

/// `cs-{suffix}`.
pub(crate) fn class(suffix: &str) -> String {
    format!("{}-{}", PREFIX, suffix)
}

/// Icon element. The icon name is passed through as a class; the host maps
/// it to a glyph set.
pub(crate) fn icon(name: &str) -> Element {
    Element::new("i")
        .class(class("icon"))
        .class(name)
        .attr("aria-hidden", "true")
}

/// Number formatted with at most `places` decimals, trailing zeros dropped.
pub(crate) fn trim_number(value: f64, places: usize) -> String {
    let s = format!("{:.*}", places, value);
    let s = if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    };
    if s == "-0" {
        "0".to_string()
    } else {
        s
    }
}

/// CSS width declaration for a percentage.
pub(crate) fn width_style(percentage: f64) -> String {
    format!("width: {}%", trim_number(percentage, 2))
}
