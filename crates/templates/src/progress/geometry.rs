//! Circle geometry for the circular and ring progress modes.

use std::f64::consts::PI;

use serde::Serialize;

/// Share of the circumference drawn by the indeterminate arc.
pub const INDETERMINATE_ARC: f64 = 0.25;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircleStyle {
    /// Stroke centered on the outline: r = (D - S) / 2.
    Circular,
    /// Stroke kept inside the outline with a gap: r = (D - 2S) / 2.
    Ring,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CircleGeometry {
    pub center: f64,
    pub radius: f64,
    pub circumference: f64,
    /// `stroke-dasharray`: full circumference, or arc/gap when indeterminate.
    pub dash_array: (f64, f64),
    pub dash_offset: f64,
    pub spin: bool,
}

pub fn radius(style: CircleStyle, diameter: f64, stroke: f64) -> f64 {
    let r = match style {
        CircleStyle::Circular => (diameter - stroke) / 2.0,
        CircleStyle::Ring => (diameter - 2.0 * stroke) / 2.0,
    };
    r.max(0.0)
}

pub fn circle(
    style: CircleStyle,
    diameter: f64,
    stroke: f64,
    percentage: f64,
    indeterminate: bool,
) -> CircleGeometry {
    let radius = radius(style, diameter, stroke);
    let circumference = 2.0 * PI * radius;
    let (dash_array, dash_offset) = if indeterminate {
        (
            (
                circumference * INDETERMINATE_ARC,
                circumference * (1.0 - INDETERMINATE_ARC),
            ),
            0.0,
        )
    } else {
        (
            (circumference, circumference),
            circumference * (1.0 - percentage / 100.0),
        )
    };
    CircleGeometry {
        center: diameter / 2.0,
        radius,
        circumference,
        dash_array,
        dash_offset,
        spin: indeterminate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn radius_per_style() {
        assert_eq!(radius(CircleStyle::Circular, 48.0, 4.0), 22.0);
        assert_eq!(radius(CircleStyle::Ring, 48.0, 4.0), 20.0);
        assert_eq!(radius(CircleStyle::Ring, 4.0, 4.0), 0.0);
    }

    #[test]
    fn dash_offset_tracks_percentage() {
        let g = circle(CircleStyle::Circular, 48.0, 4.0, 25.0, false);
        assert!(close(g.circumference, 2.0 * PI * 22.0));
        assert!(close(g.dash_offset, g.circumference * 0.75));
        assert_eq!(g.center, 24.0);
        assert!(!g.spin);

        let full = circle(CircleStyle::Ring, 48.0, 4.0, 100.0, false);
        assert!(close(full.dash_offset, 0.0));
    }

    #[test]
    fn indeterminate_uses_quarter_arc() {
        let g = circle(CircleStyle::Circular, 48.0, 4.0, 80.0, true);
        assert!(close(g.dash_array.0, g.circumference * 0.25));
        assert!(close(g.dash_array.1, g.circumference * 0.75));
        assert_eq!(g.dash_offset, 0.0);
        assert!(g.spin);
    }
}
