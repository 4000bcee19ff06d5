use cellsense_core::{Element, Node};

use super::geometry::{circle, CircleStyle, INDETERMINATE_ARC};
use super::{ProgressContext, ProgressType, StepState, MIN_LABELED_SEGMENT};
use crate::common::{class, trim_number, width_style};

pub fn render_progress(ctx: &ProgressContext) -> Node {
    let element = match ctx.progress_type {
        ProgressType::Linear => render_linear(ctx),
        ProgressType::Circular => render_circle(ctx, CircleStyle::Circular),
        ProgressType::Ring => render_circle(ctx, CircleStyle::Ring),
        ProgressType::Steps => render_steps(ctx),
        ProgressType::MultiSegment => render_segments(ctx),
    };
    element.into()
}

fn label(ctx: &ProgressContext) -> Option<Element> {
    ctx.label
        .as_deref()
        .map(|text| Element::new("span").class(class("progress-label")).text(text))
}

fn root(ctx: &ProgressContext, mode: &str) -> Element {
    let root = Element::new("div")
        .class(class("progress"))
        .class(class(&format!("progress-{}", mode)))
        .attr("role", "progressbar")
        .attr("aria-valuemin", "0")
        .attr("aria-valuemax", trim_number(ctx.max, 2));
    if ctx.indeterminate {
        root.class(class("progress-indeterminate"))
    } else {
        root.attr("aria-valuenow", trim_number(ctx.value, 2))
    }
}

fn render_linear(ctx: &ProgressContext) -> Element {
    let width = if ctx.indeterminate {
        INDETERMINATE_ARC * 100.0
    } else {
        ctx.percentage
    };
    let bar = Element::new("div")
        .class(class("progress-bar"))
        .class(class(&format!("progress-{}", ctx.variant)))
        .class_if(ctx.striped, class("progress-striped"))
        .class_if(ctx.animated, class("progress-animated"))
        .attr("style", width_style(width));

    root(ctx, "linear")
        .child(Element::new("div").class(class("progress-track")).child(bar))
        .child_opt(label(ctx))
}

fn render_circle(ctx: &ProgressContext, style: CircleStyle) -> Element {
    let g = circle(
        style,
        ctx.diameter,
        ctx.stroke_width,
        ctx.percentage,
        ctx.indeterminate,
    );
    let mode = match style {
        CircleStyle::Circular => "circular",
        CircleStyle::Ring => "ring",
    };
    let size = trim_number(ctx.diameter, 2);
    let base_circle = |extra: &str| {
        Element::new("circle")
            .class(class(extra))
            .attr("cx", trim_number(g.center, 2))
            .attr("cy", trim_number(g.center, 2))
            .attr("r", trim_number(g.radius, 2))
            .attr("fill", "none")
            .attr("stroke-width", trim_number(ctx.stroke_width, 2))
    };

    let svg = Element::new("svg")
        .attr("width", size.as_str())
        .attr("height", size.as_str())
        .attr("viewBox", format!("0 0 {} {}", size, size))
        .class_if(g.spin, class("progress-spin"))
        .child(base_circle("progress-track"))
        .child(
            base_circle("progress-bar")
                .class(class(&format!("progress-{}", ctx.variant)))
                .attr(
                    "stroke-dasharray",
                    format!(
                        "{} {}",
                        trim_number(g.dash_array.0, 2),
                        trim_number(g.dash_array.1, 2)
                    ),
                )
                .attr("stroke-dashoffset", trim_number(g.dash_offset, 2))
                .attr(
                    "transform",
                    format!("rotate(-90 {0} {0})", trim_number(g.center, 2)),
                ),
        );

    root(ctx, mode).child(svg).child_opt(label(ctx))
}

fn render_steps(ctx: &ProgressContext) -> Element {
    let mut list = Element::new("ol").class(class("progress-steps"));
    let last = ctx.steps.len().saturating_sub(1);
    for (i, step) in ctx.steps.iter().enumerate() {
        let marker = match step.state {
            StepState::Completed => "✓".to_string(),
            StepState::Error => "!".to_string(),
            StepState::Active | StepState::Pending => (i + 1).to_string(),
        };
        list = list.child(
            Element::new("li")
                .class(class("step"))
                .class(class(&format!("step-{}", step.state.as_str())))
                .attr_opt(
                    "aria-current",
                    (step.state == StepState::Active).then_some("step"),
                )
                .child(Element::new("span").class(class("step-marker")).text(marker))
                .child(
                    Element::new("span")
                        .class(class("step-label"))
                        .text(step.label.as_str()),
                ),
        );
        if i < last {
            list = list.child(
                Element::new("li")
                    .class(class("step-connector"))
                    .class_if(
                        step.state == StepState::Completed,
                        class("step-connector-completed"),
                    )
                    .attr("aria-hidden", "true"),
            );
        }
    }
    Element::new("div")
        .class(class("progress"))
        .class(class("progress-steps-wrapper"))
        .child(list)
}

fn render_segments(ctx: &ProgressContext) -> Element {
    let total: f64 = ctx
        .segments
        .iter()
        .map(|s| s.value)
        .filter(|v| v.is_finite() && *v > 0.0)
        .sum();
    if ctx.segments.is_empty() || total <= 0.0 {
        return render_linear(ctx);
    }

    let segments = ctx.segments.iter().map(|s| {
        let value = if s.value.is_finite() { s.value.max(0.0) } else { 0.0 };
        let width = value / total * 100.0;
        let variant = s.variant.unwrap_or(ctx.variant);
        Element::new("div")
            .class(class("progress-segment"))
            .class(class(&format!("progress-{}", variant)))
            .attr("style", width_style(width))
            .attr_opt("title", (!s.label.is_empty()).then_some(s.label.as_str()))
            .child_opt((width >= MIN_LABELED_SEGMENT && !s.label.is_empty()).then(|| {
                Element::new("span")
                    .class(class("progress-segment-label"))
                    .text(s.label.as_str())
            }))
    });

    root(ctx, "multi")
        .child(
            Element::new("div")
                .class(class("progress-track"))
                .children(segments),
        )
        .child_opt(label(ctx))
}
